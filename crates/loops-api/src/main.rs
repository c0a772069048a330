//! Loops chat assistant entry point.
//!
//! Binary name: `loops`
//!
//! Parses CLI arguments, initializes tracing and configuration, then runs the
//! relay server, the terminal widget, or a one-off command.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use loops_infra::config::{load_app_config, resolve_config_path};
use loops_observe::tracing_setup::{TracingOptions, init_tracing, shutdown_tracing};

use cli::serve::ServeOverrides;
use cli::{Cli, Commands};

/// Filter used when `RUST_LOG` is unset.
///
/// The server logs at `info` by default; interactive commands stay quiet so
/// log lines do not interleave with the prompt.
fn default_filter(verbose: u8, quiet: bool, serving: bool) -> &'static str {
    match verbose {
        0 if quiet => "error",
        0 if serving => "info",
        0 => "warn",
        1 => "info,loops_core=debug,loops_infra=debug,loops_api=debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need config or tracing
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "loops", &mut std::io::stdout());
        return Ok(());
    }

    let (serving, log_json, otel) = match &cli.command {
        Commands::Serve { log_json, otel, .. } => (true, *log_json, *otel),
        _ => (false, false, false),
    };
    init_tracing(&TracingOptions {
        otel,
        json: log_json,
        default_filter: default_filter(cli.verbose, cli.quiet, serving).to_string(),
    })
    .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let config_path = resolve_config_path(cli.config.clone());
    let config = load_app_config(&config_path).await;

    let result = match cli.command {
        Commands::Serve {
            port,
            host,
            web_dir,
            ..
        } => {
            let overrides = ServeOverrides {
                host,
                port,
                web_dir,
            };
            cli::serve::run_server(config, overrides, cli.quiet).await
        }

        Commands::Chat { server, lang } => {
            cli::chat::loop_runner::run_chat_loop(
                &config.brand.name,
                &server,
                lang,
                config.language.policy,
            )
            .await
        }

        Commands::Classify { text, policy } => {
            let policy = policy.map(Into::into).unwrap_or(config.language.policy);
            cli::classify::classify_text(&text, policy, cli.json)
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    };

    shutdown_tracing();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_follows_verbosity() {
        assert_eq!(default_filter(0, true, true), "error");
        assert_eq!(default_filter(0, false, true), "info");
        assert_eq!(default_filter(0, false, false), "warn");
        assert!(default_filter(1, false, false).contains("loops_core=debug"));
        assert_eq!(default_filter(3, false, false), "trace");
    }
}
