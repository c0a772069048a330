//! Interactive chat loop orchestration.
//!
//! Reads lines, dispatches slash commands, and runs each message through a
//! [`WidgetSession`] backed by the HTTP client. Every turn prints exactly the
//! bubble the widget appended (reply or error notice).

use std::io::Write;

use console::style;

use loops_core::language::LanguageClassifier;
use loops_core::widget::state::CONTACT_THANKS;
use loops_core::widget::{ChatWidget, Delivery, EntryKind, WidgetBackend, WidgetEntry, WidgetSession};
use loops_infra::widget::HttpWidgetBackend;
use loops_types::chat::LanguageMode;
use loops_types::config::DetectionPolicy;

use super::banner::{print_welcome_banner, prompt};
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};

/// Run the chat loop against `server` until `/quit` or Ctrl+D.
pub async fn run_chat_loop(
    brand: &str,
    server: &str,
    mode: LanguageMode,
    policy: DetectionPolicy,
) -> anyhow::Result<()> {
    let mut widget = ChatWidget::new(LanguageClassifier::new(policy));
    widget.set_language_mode(mode);
    widget.open();
    let mut session = WidgetSession::new(widget, HttpWidgetBackend::new(server));

    print_welcome_banner(brand, server, mode);

    let (mut input, mut out) = ChatInput::new(prompt(mode))?;

    loop {
        let text = match input.read_line().await {
            InputEvent::Eof => break,
            InputEvent::Interrupted => {
                writeln!(out, "  {}", style("Press Ctrl+D to exit, or keep chatting.").dim())?;
                continue;
            }
            InputEvent::Line(text) if text.is_empty() => continue,
            InputEvent::Line(text) => text,
        };

        if let Some(command) = commands::parse(&text) {
            match command {
                ChatCommand::Help => commands::print_help(&mut out)?,
                ChatCommand::Quit => break,
                ChatCommand::Reset => {
                    session.widget_mut().reset();
                    writeln!(out, "  {}", style("Conversation cleared.").dim())?;
                }
                ChatCommand::Lang(None) => {
                    let current = session.widget().language_mode();
                    writeln!(out, "  {} {}", style("Reply language:").bold(), current)?;
                }
                ChatCommand::Lang(Some(mode)) => {
                    session.widget_mut().set_language_mode(mode);
                    input.set_prompt(&prompt(mode));
                    writeln!(out, "  {} {}", style("Reply language set to").dim(), mode)?;
                }
                ChatCommand::Contact => {
                    fill_contact_form(&mut session, &mut input, &mut out).await?;
                    input.set_prompt(&prompt(session.widget().language_mode()));
                }
                ChatCommand::Unknown(message) => {
                    writeln!(
                        out,
                        "  {} {}. Type /help for available commands.",
                        style("?").yellow().bold(),
                        message
                    )?;
                }
            }
            continue;
        }

        writeln!(out, "  {}", style("thinking...").dim())?;
        match session.send(&text).await {
            Some(entry) => print_entry(&mut out, &entry)?,
            None => continue,
        }

        if session.widget().is_form_visible() {
            writeln!(
                out,
                "  {}",
                style("Type /contact to leave your name, email and message for our team.").yellow()
            )?;
        }
    }

    input.flush();
    println!("\n  {}", style("Session ended.").dim());
    Ok(())
}

/// Prompt for each contact field, then submit. Ctrl+C or Ctrl+D abandons the
/// form without submitting; what was typed stays in the form.
async fn fill_contact_form<B: WidgetBackend>(
    session: &mut WidgetSession<B>,
    input: &mut ChatInput,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if !session.widget().is_form_visible() {
        writeln!(
            out,
            "  {}",
            style("The contact form opens when I can't answer a question.").dim()
        )?;
        return Ok(());
    }

    for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
        input.set_prompt(&format!("{} ", style(format!("{} >", field.label())).yellow()));
        match input.read_line().await {
            InputEvent::Line(value) => *field.slot(session.widget_mut()) = value,
            InputEvent::Eof | InputEvent::Interrupted => {
                writeln!(out, "  {}", style("Contact form cancelled.").dim())?;
                return Ok(());
            }
        }
    }

    match session.submit_contact().await {
        Some(entry) => print_entry(out, &entry)?,
        None => writeln!(
            out,
            "  {} Name, email and message are all required.",
            style("!").yellow().bold()
        )?,
    }
    Ok(())
}

#[derive(Debug, Clone, Copy)]
enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    fn label(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }

    fn slot(self, widget: &mut ChatWidget) -> &mut String {
        let form = widget.form_mut();
        match self {
            ContactField::Name => &mut form.name,
            ContactField::Email => &mut form.email,
            ContactField::Message => &mut form.message,
        }
    }
}

/// Render one widget bubble.
fn print_entry(out: &mut impl Write, entry: &WidgetEntry) -> std::io::Result<()> {
    let content = entry.message.content.trim();
    match entry.kind {
        EntryKind::Notice if content == CONTACT_THANKS => {
            writeln!(out, "\n  {} {}\n", style("✓").green().bold(), style(content).green())
        }
        EntryKind::Notice => {
            writeln!(out, "\n  {} {}\n", style("!").red().bold(), style(content).red())
        }
        EntryKind::Message(Delivery::Failed) => {
            writeln!(out, "  {} {}", style("✗").red(), style(content).dim())
        }
        EntryKind::Message(_) => {
            writeln!(out, "\n  {} {}\n", style("Loops").cyan().bold(), content)
        }
    }
}
