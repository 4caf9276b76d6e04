//! Interactive shell loop.
//!
//! Reads one command per line, runs it to completion, writes its output and
//! prompts again. The loop ends at end of input.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::command::{split_arguments, Router};

/// Line-oriented front end for a [`Router`].
pub struct Shell {
    router: Router,
    prompt: String,
}

impl Shell {
    /// Create a shell with the default `# ` prompt.
    pub fn new(router: Router) -> Self {
        Self {
            router,
            prompt: "# ".to_string(),
        }
    }

    /// Set the prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Get the router.
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Run one command line and return the text to print.
    ///
    /// Failures are rendered as a single `Error:` line. Blank lines produce
    /// nothing.
    pub fn handle_line(&mut self, line: &str) -> String {
        let args = split_arguments(line);
        if args.is_empty() {
            return String::new();
        }

        let lines = match self.router.execute(&args) {
            Ok(output) => output.lines(),
            Err(e) => {
                debug!(command = %args[0], error = %e, "Command failed");
                vec![format!("Error: {e}")]
            }
        };

        let mut text = String::new();
        for line in lines {
            text.push_str(&line);
            text.push('\n');
        }
        text
    }

    /// Serve commands from `reader` until end of input.
    pub async fn run<R, W>(&mut self, reader: R, writer: &mut W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("Shell started");
        let mut lines = reader.lines();
        let mut count = 0usize;

        self.prompt(writer).await?;
        while let Some(line) = lines.next_line().await? {
            let text = self.handle_line(&line);
            if !text.is_empty() {
                count += 1;
                writer.write_all(text.as_bytes()).await?;
            }
            self.prompt(writer).await?;
        }

        info!(commands = count, "Shell reached end of input");
        Ok(())
    }

    async fn prompt<W: AsyncWrite + Unpin>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(self.prompt.as_bytes()).await?;
        writer.flush().await
    }
}
