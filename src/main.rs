mod cli;
mod commands;
mod config;
mod error;
mod inventory;
mod librenms;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use commands::{handle_generate_command, handle_show_command};
use config::ApiConfig;
use output::print_error;

fn main() {
    let cli = Cli::parse();
    let config = ApiConfig::new(&cli.host, &cli.api_key);

    let result = match &cli.command {
        None | Some(Commands::Generate) => handle_generate_command(config),
        Some(Commands::Show { format }) => handle_show_command(config, format),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
