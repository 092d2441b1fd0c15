//! CLI entry point for the `froute` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use flight_routes::cli::{commands, menu};
use flight_routes::engine::RoutePlanner;
use flight_routes::graph::standard_network;
use flight_routes::types::RouteError;

#[derive(Parser)]
#[command(
    name = "froute",
    about = "FlightRoutes — airline routes between countries"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every possible route between two countries
    Routes {
        /// Starting country (name or code)
        from: String,
        /// Destination country (name or code)
        to: String,
    },
    /// Show the least-duration route between two countries
    Fastest {
        /// Starting country (name or code)
        from: String,
        /// Destination country (name or code)
        to: String,
    },
    /// List the countries served by the network
    Countries,
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
    }

    let planner = match standard_network() {
        Ok(graph) => RoutePlanner::new(graph),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };

    let result = match cli.command {
        None => {
            if let Err(e) = menu::run(&planner) {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
            return;
        }
        Some(Commands::Routes { from, to }) => commands::cmd_routes(&planner, &from, &to, json),
        Some(Commands::Fastest { from, to }) => commands::cmd_fastest(&planner, &from, &to, json),
        Some(Commands::Countries) => commands::cmd_countries(&planner, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            RouteError::UnknownCountry(_) | RouteError::SameCountry(_) => 3,
            RouteError::NoRouteFound { .. } => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
