//! Line-oriented client binary.
//!
//! A thin presentation shell over [`runtime::GameSession`]: it parses
//! commands, calls the session, and prints message keys with their
//! parameters. All game logic lives below this crate.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use game_core::{Face, SessionState};
use runtime::{GameSession, SessionConfig};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SessionConfig::from_env();
    tracing::info!(path = %config.snapshot_path.display(), "starting giftstorm");

    let mut session = GameSession::new(config)?;
    if session.restore()? {
        println!("restored session in the {} phase", session.state().phase);
    }

    println!("giftstorm - type 'help' for commands");
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = parts.split_first() else {
            continue;
        };

        match command {
            "start" => cmd_start(&mut session, args),
            "roll" => cmd_roll(&mut session, args),
            "faces" => {
                let faces: Vec<String> = session
                    .available_faces()
                    .iter()
                    .map(|face| face.to_string())
                    .collect();
                println!("eligible faces: {}", faces.join(" "));
            }
            "state" => render_state(session.state()),
            "log" => {
                for entry in session.state().log.entries() {
                    println!("{:>4}  {}  {:?}", entry.id, entry.event.key(), entry.event);
                }
            }
            "reset" => match session.reset() {
                Ok(()) => println!("back to setup"),
                Err(err) => println!("error: {err}"),
            },
            "save" => match session.save() {
                Ok(()) => println!("saved"),
                Err(err) => println!("error: {err}"),
            },
            "load" => match session.restore() {
                Ok(true) => render_state(session.state()),
                Ok(false) => println!("no usable snapshot"),
                Err(err) => println!("error: {err}"),
            },
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("unknown command: {other}"),
        }
    }

    Ok(())
}

fn cmd_start(session: &mut GameSession, args: &[&str]) {
    let Some((pile, names)) = args.split_first() else {
        println!("usage: start <pile> <name> <name>...");
        return;
    };
    let Ok(pile) = pile.parse::<u32>() else {
        println!("usage: start <pile> <name> <name>...");
        return;
    };
    let names: Vec<String> = names.iter().map(|name| name.to_string()).collect();
    match session.start_game(names, pile) {
        Ok(()) => render_state(session.state()),
        Err(err) => println!("error: {err}"),
    }
}

fn cmd_roll(session: &mut GameSession, args: &[&str]) {
    let forced = match args.first() {
        None => None,
        Some(raw) => match raw.parse::<u8>().ok().and_then(Face::from_value) {
            Some(face) => Some(face),
            None => {
                println!("usage: roll [1-6]");
                return;
            }
        },
    };

    match session.roll(forced, false) {
        Ok(report) => {
            println!(
                "face {} in the {} phase",
                report.outcome.face, report.outcome.phase
            );
            if let Some(narrative) = &report.narrative {
                println!("{}  {:?}", narrative.key(), narrative);
            }
            if let Some(phase) = report.entered_phase {
                println!("phase is now {phase}");
            }
            render_state(session.state());
        }
        Err(err) => println!("error: {err}"),
    }
}

fn render_state(state: &SessionState) {
    println!("phase: {}  pile: {}", state.phase, state.pile);
    for (seat, player) in state.roster.players().iter().enumerate() {
        let marker = if seat == state.turn.current_player && state.phase.accepts_rolls() {
            "*"
        } else {
            " "
        };
        let gifts: Vec<String> = player
            .gifts
            .iter()
            .map(|gift| {
                if gift.locked {
                    format!("[{}]", gift.id)
                } else {
                    gift.id.to_string()
                }
            })
            .collect();
        println!(
            "{marker} {} (budget {}, taken {}): {}",
            player.name,
            state.turn.roll_budget.get(seat).copied().unwrap_or(0),
            state.turn.warmup_rolls_taken.get(seat).copied().unwrap_or(0),
            gifts.join(" ")
        );
    }
    if let Some(outcome) = &state.last_outcome {
        println!("last roll: face {} ({})", outcome.face, outcome.phase);
    }
}

fn print_help() {
    println!("commands:");
    println!("  start <pile> <name> <name>...   start a game");
    println!("  roll [1-6]                      roll (optionally force a face)");
    println!("  faces                           show eligible faces");
    println!("  state                           show the session state");
    println!("  log                             show the action log, newest first");
    println!("  reset                           discard the game, back to setup");
    println!("  save / load                     snapshot to / from disk");
    println!("  quit                            exit");
}
