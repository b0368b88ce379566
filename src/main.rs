mod dashboard;
mod render;
mod types;

use chrono::Local;
use clap::Parser;
use colored::Colorize;
use dashboard::Dashboard;
use std::io::{self, BufRead, Write};
use types::Notification;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Render the dashboard once and exit (no interactive loop)
    #[arg(long)]
    once: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let mut dash = Dashboard::seed();

    println!(
        "{}",
        format!(
            "=== File Protection Dashboard: {} ===",
            Local::now().format("%Y-%m-%d %H:%M")
        )
        .cyan()
    );
    print_dashboard(&dash);

    if args.once {
        return;
    }

    println!("\nType 'help' for commands.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error reading input: {e}");
                break;
            }
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => {}
            ["system" | "s"] => {
                let notif = dash.toggle_system_protection();
                print_notification(&notif);
                print_dashboard(&dash);
            }
            ["toggle" | "t", id] => match dash.toggle_file_protection(id) {
                Some(notif) => {
                    print_notification(&notif);
                    print_dashboard(&dash);
                }
                None => {
                    log::debug!("ignoring toggle for unknown file id {id}");
                }
            },
            ["add" | "a"] => {
                let notif = dash.add_file();
                print_notification(&notif);
            }
            ["show"] => print_dashboard(&dash),
            ["help" | "h"] => print_help(),
            ["quit" | "q" | "exit"] => break,
            _ => {
                println!("Unknown command. Type 'help' for commands.");
            }
        }
    }
}

fn print_dashboard(dash: &Dashboard) {
    println!("\n{}", render::render_header(dash));
    println!("\n{}", render::render_control_panel(dash));
    println!("\n{}", render::render_files(dash));
}

fn print_notification(notif: &Notification) {
    println!("\n{}", format!("-- {} --", notif.title).cyan());
    println!("{}", notif.description);
}

fn print_help() {
    println!("Commands:");
    println!("  system        toggle system protection (alias: s)");
    println!("  toggle <id>   toggle protection for one file (alias: t)");
    println!("  add           add a file (alias: a)");
    println!("  show          redraw the dashboard");
    println!("  quit          exit (alias: q)");
}
