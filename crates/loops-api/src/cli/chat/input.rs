//! Async readline input for the chat loop.
//!
//! Wraps `rustyline_async::Readline` so the loop sees a small event enum
//! instead of readline results.

use rustyline_async::{Readline, ReadlineError, ReadlineEvent, SharedWriter};

/// Events produced by the input handler.
#[derive(Debug)]
pub enum InputEvent {
    /// User submitted a line (trimmed).
    Line(String),
    /// End of file (Ctrl+D) or a broken terminal.
    Eof,
    /// Interrupt signal (Ctrl+C).
    Interrupted,
}

pub struct ChatInput {
    rl: Readline,
}

impl ChatInput {
    /// Returns the input handler and a `SharedWriter` for printing without
    /// clobbering the prompt.
    pub fn new(prompt: String) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, stdout) = Readline::new(prompt)?;
        Ok((Self { rl }, stdout))
    }

    pub fn set_prompt(&mut self, prompt: &str) {
        if let Err(e) = self.rl.update_prompt(prompt) {
            tracing::debug!("failed to update prompt: {e}");
        }
    }

    pub async fn read_line(&mut self) -> InputEvent {
        match self.rl.readline().await {
            Ok(ReadlineEvent::Line(line)) => {
                let line = line.trim().to_string();
                if !line.is_empty() {
                    self.rl.add_history_entry(line.clone());
                }
                InputEvent::Line(line)
            }
            Ok(ReadlineEvent::Eof) => InputEvent::Eof,
            Ok(ReadlineEvent::Interrupted) => InputEvent::Interrupted,
            Err(e) => {
                tracing::debug!("readline failed: {e}");
                InputEvent::Eof
            }
        }
    }

    /// Restore the terminal before exit.
    pub fn flush(&mut self) {
        if let Err(e) = self.rl.flush() {
            tracing::debug!("failed to flush readline: {e}");
        }
    }
}
