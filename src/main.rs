use agentpro::cli::{Cli, Commands};
use agentpro::tools::registry::default_tools;
use agentpro::{utils, ChatBot, RouterAgent, Settings, SimpleAgent};
use anyhow::Result;
use clap::Parser;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

const DEMO_GENERATE_PROMPT: &str = "create a fibonacci function";
const DEMO_DISPATCH_PROMPT: &str = "Create a visualization of sorting algorithms";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::new()?,
    };

    // Logs go to stderr so chat and command output stay clean on stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let router = RouterAgent::with_routing(default_tools(), settings.router.clone())?;

    let result = match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => handle_demo(&router),
        Commands::Dispatch { prompt, json } => handle_dispatch(&router, &prompt, json),
        Commands::Generate { prompt } => handle_generate(&prompt),
        Commands::Chat => handle_chat().await,
        Commands::Tools => handle_tools(&router),
    };

    if let Err(e) = result {
        utils::print_error(&format!("Error: {:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn handle_demo(router: &RouterAgent) -> Result<()> {
    utils::print_header("Simple Agent");
    handle_generate(DEMO_GENERATE_PROMPT)?;

    utils::print_header("Router Agent");
    utils::print_info(&format!("Prompt: {}", DEMO_DISPATCH_PROMPT));
    let output = router.dispatch(DEMO_DISPATCH_PROMPT)?;
    println!("{}", output);
    Ok(())
}

fn handle_dispatch(router: &RouterAgent, prompt: &str, json: bool) -> Result<()> {
    let output = router.dispatch(prompt)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", output);
    }
    Ok(())
}

fn handle_generate(prompt: &str) -> Result<()> {
    let code = SimpleAgent::new().generate(prompt);
    utils::print_code("Generated Code", &code);
    Ok(())
}

async fn handle_chat() -> Result<()> {
    let mut lines = BufReader::new(io::stdin()).lines();
    let mut stdout = io::stdout();

    let echoed = ChatBot::new().chat(&mut lines, &mut stdout).await?;
    tracing::debug!("Chat session ended after {} messages", echoed);
    Ok(())
}

fn handle_tools(router: &RouterAgent) -> Result<()> {
    utils::print_header("Registered Tools");
    println!("{}", router.registry().tools_description());

    utils::print_header("Routing (first match wins)");
    let routing = router.routing();
    let missing = router.unregistered_tools();
    let marker = |name: &str| {
        if missing.iter().any(|m| *m == name) {
            " (not registered)"
        } else {
            ""
        }
    };

    for (index, rule) in routing.rules.iter().enumerate() {
        println!(
            "  {}. {}{} <- {}",
            index + 1,
            rule.tool,
            marker(&rule.tool),
            rule.keywords.join(", ")
        );
    }
    println!("  fallback: {}{}", routing.fallback, marker(&routing.fallback));

    utils::print_success(&format!("{} tools available", router.registry().len()));
    Ok(())
}
