//! Interactive text menu.
//!
//! Launched when `froute` is run with no subcommand.

use rustyline::config::Config;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::cli::commands;
use crate::engine::RoutePlanner;

/// History file location.
fn history_path() -> std::path::PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    std::path::PathBuf::from(home).join(".froute_history")
}

fn print_banner() {
    println!("{}", "=".repeat(60));
    println!("Welcome to FlightRoutes");
    println!("{}", "=".repeat(60));
}

fn print_menu() {
    println!();
    println!("Main Menu");
    println!("1. Display all possible airline routes between two countries");
    println!("2. Display least time airline route between two countries");
    println!("3. List the countries served by the network");
    println!("4. Exit");
}

/// Run the interactive menu loop until the user exits.
pub fn run(planner: &RoutePlanner) -> Result<(), Box<dyn std::error::Error>> {
    print_banner();

    let config = Config::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .build();
    let mut rl = DefaultEditor::with_config(config)?;

    let hist_path = history_path();
    if hist_path.exists() {
        let _ = rl.load_history(&hist_path);
    }

    loop {
        print_menu();
        let choice = match rl.readline("Your choice: ") {
            Ok(line) => line.trim().to_string(),
            Err(ReadlineError::Interrupted) => {
                println!("(Ctrl+C) Choose 4 to exit.");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };

        match choice.as_str() {
            "" => continue,
            "1" | "2" => {
                let Some(from) = prompt(&mut rl, "Starting Country: ")? else {
                    continue;
                };
                let Some(to) = prompt(&mut rl, "Destination Country: ")? else {
                    continue;
                };
                println!();
                let result = if choice == "1" {
                    commands::cmd_routes(planner, &from, &to, false)
                } else {
                    commands::cmd_fastest(planner, &from, &to, false)
                };
                if let Err(e) = result {
                    println!("Error: {e}");
                }
            }
            "3" => {
                println!();
                if let Err(e) = commands::cmd_countries(planner, false) {
                    println!("Error: {e}");
                }
            }
            "4" | "exit" | "quit" => break,
            other => println!("Error: invalid choice '{other}'. Please enter 1, 2, 3 or 4."),
        }
    }

    let _ = rl.save_history(&hist_path);
    println!("Thank you for using FlightRoutes!");
    Ok(())
}

/// Read one line, treating Ctrl+C / Ctrl+D as "back to the menu".
fn prompt(rl: &mut DefaultEditor, label: &str) -> Result<Option<String>, ReadlineError> {
    match rl.readline(label) {
        Ok(line) => Ok(Some(line.trim().to_string())),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err),
    }
}
