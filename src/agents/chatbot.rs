//! ChatBot - console echo loop
//!
//! Information Hiding:
//! - Line reading abstracted behind `LineSource` so the loop runs against
//!   stdin in the binary and scripted input in tests
//! - Output framing (banner, prompt, reply prefix) kept in one place

use async_trait::async_trait;
use std::io;
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt, Lines};

pub const BANNER: &str = "🤖 ChatBot ready! (type 'exit' to leave)";
pub const PROMPT: &str = "You > ";
pub const REPLY_PREFIX: &str = "ChatBot > ";
pub const FAREWELL: &str = "Bye!";
pub const EXIT_TOKEN: &str = "exit";

/// Supplier of input lines; `None` means the input is exhausted
#[async_trait]
pub trait LineSource: Send {
    async fn next_line(&mut self) -> io::Result<Option<String>>;
}

#[async_trait]
impl<R> LineSource for Lines<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn next_line(&mut self) -> io::Result<Option<String>> {
        Lines::next_line(self).await
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ChatBot;

impl ChatBot {
    pub fn new() -> Self {
        Self
    }

    /// Reply for one input line, or `None` when the line ends the session
    pub fn respond(&self, line: &str) -> Option<String> {
        if line.trim().eq_ignore_ascii_case(EXIT_TOKEN) {
            None
        } else {
            Some(format!("Echo: {}", line))
        }
    }

    /// Run the loop until "exit" or end of input
    ///
    /// Returns how many lines were echoed.
    pub async fn chat<S, W>(&self, input: &mut S, output: &mut W) -> io::Result<usize>
    where
        S: LineSource + ?Sized,
        W: AsyncWrite + Unpin + Send,
    {
        output
            .write_all(format!("{}\n\n", BANNER).as_bytes())
            .await?;

        let mut echoed = 0;
        loop {
            output.write_all(PROMPT.as_bytes()).await?;
            output.flush().await?;

            let Some(line) = input.next_line().await? else {
                tracing::debug!("[ChatBot] Input closed after {} lines", echoed);
                output.write_all(b"\n").await?;
                break;
            };

            match self.respond(&line) {
                Some(reply) => {
                    output
                        .write_all(format!("{}{}\n", REPLY_PREFIX, reply).as_bytes())
                        .await?;
                    echoed += 1;
                }
                None => {
                    output
                        .write_all(format!("{}{}\n", REPLY_PREFIX, FAREWELL).as_bytes())
                        .await?;
                    break;
                }
            }
        }

        output.flush().await?;
        Ok(echoed)
    }
}
