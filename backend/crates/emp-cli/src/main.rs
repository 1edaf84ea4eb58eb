//! emp - Employee service CLI
//!
//! # Examples
//!
//! ```bash
//! emp list --pretty
//! emp get 1
//! emp salary 1
//! emp --server http://127.0.0.1:9000 fetch
//! ```

mod cli;
mod commands;

use crate::{cli::Cli, commands::Commands};

use emp_cli::Client;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let client = Client::new(&cli.server);

    let result = match cli.command {
        Commands::List => client.list_employees().await,
        Commands::Get { id } => client.get_employee(id).await,
        Commands::Salary { id } => client.get_annual_salary(id).await,
        Commands::Fetch => client.fetch_employees().await,
    };

    // Handle result
    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
