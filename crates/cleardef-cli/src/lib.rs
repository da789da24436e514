//! cleardef - coordinate tooling for package metadata lookups
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
//!
//! Thin command-line front end over [`cleardef_schema`]: decode coordinate
//! strings into their fields, assemble the canonical form from parts, and
//! list the label enumerations the wire format accepts.

pub mod cmd;

use clap::{Parser, Subcommand};
use cleardef_schema::{ComponentType, Provider};

#[derive(Debug, Parser)]
#[command(name = "cleardef")]
#[command(author, version, about = "cleardef - coordinate tooling for package metadata lookups")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decode coordinate strings and show their fields
    Parse {
        /// Coordinate string(s), e.g. npm/npmjs/-/leftpad/1.0.0
        #[arg(required = true)]
        coordinates: Vec<String>,
        /// Emit one JSON object per input instead of aligned text
        #[arg(long)]
        json: bool,
    },
    /// Build the canonical string form from individual fields
    Format {
        /// Package ecosystem label (e.g. maven, npm)
        #[arg(long = "type", value_name = "TYPE")]
        component_type: ComponentType,
        /// Hosting service label (e.g. mavencentral, npmjs)
        #[arg(long)]
        provider: Provider,
        /// Namespace within the ecosystem; omit when the component has none
        #[arg(long)]
        namespace: Option<String>,
        /// Component name
        #[arg(long)]
        name: String,
        /// Component revision; omit for coordinates without one
        #[arg(long)]
        revision: Option<String>,
    },
    /// List every known component type label
    Types,
    /// List every known provider label
    Providers,
}
