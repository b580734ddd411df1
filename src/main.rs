use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use tracing::info;
use wondergame::init_logging;
use wondergame_core::MonospaceMetrics;
use wondergame_explore::ExploreMode;
use wondergame_script::{CommandProcessor, ScriptEvent};

fn main() -> Result<()> {
    init_logging()?;
    info!(version = wondergame_core::VERSION, "wondergame starting");

    let rooms_root = std::env::current_dir()?;
    let mut processor = CommandProcessor::new();
    let stdout = io::stdout();

    for line in processor.intro() {
        println!("{line}");
    }

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("> ");
        stdout.lock().flush()?;
        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        let outcome = processor.process(input.trim());
        for line in &outcome.lines {
            println!("{line}");
        }
        match outcome.event {
            ScriptEvent::None => {}
            ScriptEvent::ClearScreen => print!("\x1b[2J\x1b[H"),
            ScriptEvent::Quit => break,
            ScriptEvent::Transition(room) => enter_room(&rooms_root, &room)?,
        }
    }

    Ok(())
}

/// Loads a room and prints what the player can see in it.
fn enter_room(rooms_root: &Path, room_name: &str) -> Result<()> {
    let metrics = MonospaceMetrics::default();
    let mode = ExploreMode::load(rooms_root, room_name, &metrics)?;

    println!();
    println!("You step into {room_name}.");
    let mut any = false;
    for entity in mode.visible_labels() {
        let label = entity.data.name.lines().next().unwrap_or("");
        println!("  {} at ({}, {})", label, entity.data.x, entity.data.y);
        any = true;
    }
    if !any {
        println!("  The room is empty. Someone should edit that.");
    }
    Ok(())
}
