//! Slash command parsing for the chat loop.

use std::io::Write;

use console::style;

use loops_types::chat::LanguageMode;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear history and hide the contact form.
    Reset,
    /// Show (`None`) or change the reply language.
    Lang(Option<LanguageMode>),
    /// Fill in and submit the contact form.
    Contact,
    /// Exit the chat session.
    Quit,
    /// Unknown command or bad argument.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let (cmd, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((cmd, arg)) => (cmd.to_lowercase(), Some(arg.trim())),
        None => (trimmed.to_lowercase(), None),
    };

    let command = match cmd.as_str() {
        "/help" | "/h" | "/?" => ChatCommand::Help,
        "/reset" | "/new" => ChatCommand::Reset,
        "/quit" | "/exit" | "/q" => ChatCommand::Quit,
        "/contact" => ChatCommand::Contact,
        "/lang" => match arg.filter(|a| !a.is_empty()) {
            None => ChatCommand::Lang(None),
            Some(mode) => match mode.parse::<LanguageMode>() {
                Ok(mode) => ChatCommand::Lang(Some(mode)),
                Err(e) => ChatCommand::Unknown(e),
            },
        },
        other => ChatCommand::Unknown(format!("Unknown command: {other}")),
    };
    Some(command)
}

/// Write the help text listing all available commands.
pub fn print_help(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "  {}", style("Available commands:").bold())?;
    writeln!(out)?;
    writeln!(out, "  {}              Show this help message", style("/help").cyan())?;
    writeln!(out, "  {}             Clear the conversation", style("/reset").cyan())?;
    writeln!(out, "  {} Reply language (no argument shows it)", style("/lang auto|en|si").cyan())?;
    writeln!(out, "  {}           Leave your details for the team", style("/contact").cyan())?;
    writeln!(out, "  {}              End the chat session", style("/quit").cyan())?;
    writeln!(out)?;
    Ok(())
}
