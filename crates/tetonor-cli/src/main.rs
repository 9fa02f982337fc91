//! Tetonor command-line front end.
//!
//! `tetonor generate` prints a puzzle; `tetonor replay` plays an action script
//! against one and reports the resulting state. Set `RUST_LOG` for diagnostics.

use std::{
    error::Error,
    fs,
    io::{self, Read as _},
};

use clap::Parser as _;
use tetonor_game::Game;

use crate::cli::{Cli, Command};

mod cli;
mod render;
mod replay;

fn main() -> Result<(), Box<dyn Error>> {
    better_panic::install();
    env_logger::init();

    match Cli::parse().command {
        Command::Generate {
            puzzle,
            json,
            solution,
        } => {
            let (config, id) = puzzle.resolve()?;
            let generated = puzzle.generator().generate(config);
            if json {
                println!("{}", serde_json::to_string_pretty(&generated)?);
                return Ok(());
            }
            match id {
                Some(id) => println!("Puzzle {id}"),
                None => println!(
                    "Puzzle seed {} ({}, {} cells)",
                    config.seed, config.difficulty, config.size
                ),
            }
            println!();
            render::print_puzzle(&generated, solution);
        }
        Command::Replay {
            puzzle,
            script,
            options,
            max_hints,
        } => {
            let (config, _) = puzzle.resolve()?;
            let options = cli::game_options(options.as_ref(), max_hints)?;
            let script = match script {
                Some(path) => fs::read_to_string(path)?,
                None => {
                    let mut text = String::new();
                    io::stdin().read_to_string(&mut text)?;
                    text
                }
            };

            let mut game = Game::with_generator(puzzle.generator(), config, options);
            let report = replay::run_script(&mut game, &script);
            for skipped in &report.skipped {
                println!("{skipped}");
            }
            println!(
                "Applied {} actions, skipped {}.",
                report.applied,
                report.skipped.len()
            );
            println!();
            render::print_game(&game);
        }
    }
    Ok(())
}
