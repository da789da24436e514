//! cleardef - coordinate tooling for package metadata lookups

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cleardef_cli::cmd;
use cleardef_cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { coordinates, json } => cmd::parse::parse(&coordinates, json),
        Commands::Format {
            component_type,
            provider,
            namespace,
            name,
            revision,
        } => {
            cmd::format::format(
                component_type,
                provider,
                namespace.as_deref(),
                &name,
                revision.as_deref(),
            );
            Ok(())
        }
        Commands::Types => {
            cmd::list::types();
            Ok(())
        }
        Commands::Providers => {
            cmd::list::providers();
            Ok(())
        }
    }
}
