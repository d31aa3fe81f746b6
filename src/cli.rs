// src/cli.rs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Form submission client.
///
/// `config.yaml` is the primary source of truth.
/// CLI flags only override config values.
#[derive(Parser, Debug)]
#[command(name = "formpost", version, disable_help_subcommand = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// All supported CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Submit form data to the configured endpoint.
    ///
    /// Fields are gathered in order from:
    /// - config.yaml `fields`
    /// - the --data file, if given
    /// - --field arguments
    Send {
        /// Path to config file
        ///
        /// Defaults to ./config.yaml
        #[arg(short, long, default_value = "config.yaml")]
        config: PathBuf,

        /// Override the destination endpoint URL
        #[arg(long)]
        endpoint: Option<String>,

        /// Form field as key=value (can be passed multiple times)
        ///
        /// Example:
        /// --field name=Alice --field email=alice@example.com
        #[arg(long = "field")]
        fields: Vec<String>,

        /// Load additional fields from a YAML file
        ///
        /// The file is a list of name/value entries, preserving order.
        #[arg(long)]
        data: Option<PathBuf>,

        /// Override request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Print the detailed outcome as JSON
        ///
        /// Overrides config output.mode = json
        #[arg(long)]
        json: bool,
    },

    /// Run the local capture endpoint.
    ///
    /// A development stand-in for the remote server: records every
    /// url-encoded POST it receives and serves them back as JSON.
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1:8787")]
        addr: String,
    },

    /// Initialise a project scaffold.
    ///
    /// Creates:
    /// - config.yaml
    /// - fields.yaml
    Init,
}
