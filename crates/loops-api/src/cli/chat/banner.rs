//! Welcome banner display for chat sessions.

use console::style;

use loops_types::chat::LanguageMode;

/// Print the welcome banner at the start of a chat session.
pub fn print_welcome_banner(brand: &str, server: &str, mode: LanguageMode) {
    println!();
    println!("  {} {}", style("*").cyan(), style(brand).cyan().bold());
    println!("  {}", style("Ask about our services, hours or location.").dim());
    println!();
    println!("  {}  {}", style("Server:").bold(), style(server).dim());
    println!("  {}    {}", style("Reply:").bold(), style(mode).dim());
    println!();
    println!("  {}", style("Type /help for commands, Ctrl+D to exit").dim());
    println!("  {}", style("---").dim());
    println!();
}

/// Prompt string reflecting the current language mode.
pub fn prompt(mode: LanguageMode) -> String {
    format!("{} ", style(format!("you [{mode}] >")).green().bold())
}
