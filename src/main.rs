use std::io::{self, BufRead, Write};

use poke_planner::domain::creature::Catalog;
use poke_planner::presentation::PlannerScreen;

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let mut screen = PlannerScreen::new(Catalog::starter());

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", screen.render());
    println!();
    println!("Commands: catch <id> | release <id> | quit");

    loop {
        print!("> ");
        stdout.flush().expect("Failed to flush stdout");

        let mut line = String::new();
        let bytes = stdin
            .lock()
            .read_line(&mut line)
            .expect("Failed to read stdin");
        if bytes == 0 {
            break;
        }

        // One interaction is processed to completion before the next
        // line is read.
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("catch"), Some(id)) => {
                if screen.on_catch(&id.into()).is_none() {
                    println!("Nothing happened: {} is not catchable right now.", id);
                }
                println!("{}", screen.render());
            }
            (Some("release"), Some(id)) => {
                if screen.on_release(&id.into()).is_none() {
                    println!("Nothing happened: {} is not on your team.", id);
                }
                println!("{}", screen.render());
            }
            (Some("quit"), _) | (Some("exit"), _) => break,
            (None, _) => continue,
            _ => println!("Commands: catch <id> | release <id> | quit"),
        }
    }

    tracing::info!("Session over, team discarded");
}
