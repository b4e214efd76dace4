pub mod chatbot;
pub mod router_agent;
pub mod simple_agent;

pub use chatbot::{ChatBot, LineSource};
pub use router_agent::{RouteRule, RouterAgent, RoutingTable};
pub use simple_agent::SimpleAgent;
