use crate::config::parse_base_url;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "librenms-inventory")]
#[command(about = "Generate Ansible inventory files from a LibreNMS server")]
pub struct Cli {
    /// LibreNMS base URL, including the protocol (e.g. http://127.0.0.1)
    #[arg(long = "host", env = "LNMS_HOST", value_parser = parse_base_url)]
    pub host: String,

    /// LibreNMS API token
    #[arg(
        long,
        env = "LNMS_API_KEY",
        hide_env_values = true,
        value_parser = clap::builder::NonEmptyStringValueParser::new()
    )]
    pub api_key: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch devices and write the inventory files (default)
    Generate,

    /// Fetch devices and print the inventory documents without writing them
    Show {
        /// Output format (json, yaml, or pretty)
        #[arg(short, long, default_value = "yaml")]
        format: String,
    },
}
