use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use rmcp::{transport::stdio, ServiceExt};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use reviewmate::connector::mcp::ReviewMateMcpServer;
use reviewmate::{Commands, Container, ContainerConfig, Router};

#[derive(Parser)]
#[command(name = "reviewmate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(short, long, global = true, default_value = "~/.reviewmate")]
    data_dir: String,

    /// Ignore RM_OPENAI_* environment variables
    #[arg(long, global = true)]
    no_env: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    // stdout carries command output and the MCP stdio transport.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new(ContainerConfig {
        data_dir: expand_tilde(&cli.data_dir),
        env_overrides: !cli.no_env,
    })?;

    if let Commands::Mcp = cli.command {
        info!("Starting MCP server on stdio");
        let server = ReviewMateMcpServer::new(Arc::new(container));
        let service = server.serve(stdio()).await?;
        service.waiting().await?;
        return Ok(());
    }

    let router = Router::new(&container);
    let output = router.route(cli.command).await?;
    println!("{}", output);

    Ok(())
}

fn expand_tilde(path: &str) -> String {
    if path == "~" || path.starts_with("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            if path == "~" {
                return home.to_string_lossy().to_string();
            }
            return path.replacen("~", &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn review_accepts_repeated_focus_and_selection() {
        let cli = Cli::try_parse_from([
            "reviewmate",
            "review",
            "paper.md",
            "--focus",
            "grammar",
            "--focus",
            "clarity",
            "--selection",
            "10..42",
        ])
        .expect("valid command line");

        match cli.command {
            Commands::Review {
                focus, selection, ..
            } => {
                assert_eq!(focus, vec!["grammar", "clarity"]);
                assert_eq!(selection, Some(10..42));
            }
            _ => panic!("expected review command"),
        }
    }

    #[test]
    fn malformed_selection_is_rejected() {
        let res = Cli::try_parse_from(["reviewmate", "trim", "paper.md", "--selection", "oops"]);
        assert!(res.is_err());
    }

    #[test]
    fn expand_tilde_leaves_absolute_paths_alone() {
        assert_eq!(expand_tilde("/tmp/reviewmate"), "/tmp/reviewmate");
    }
}
