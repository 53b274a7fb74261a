/*
application.rs

Copyright 2026 the Lab1rint developers

This file is part of Lab1rint.

Lab1rint is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Lab1rint is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Lab1rint. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Run the game in the terminal.
//!
//! The front end is deliberately thin: it shows the maze during the
//! memorization phase, hides it during traversal, and turns lines typed on
//! standard input into move commands. All the game rules live in
//! [`crate::game`].

use chrono::{DateTime, Local};
use rand::rngs::ThreadRng;
use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::thread;
use std::time::{Duration, Instant};

use crate::draw;
use crate::game::{GameSession, LevelEnd, Outcome, Phase, SessionConfig};
use crate::generator::direction::Direction;
use crate::highscores::HighScores;
use crate::saver::highscores::SaverHighScores;

/// Directory where the player data is saved.
fn data_dir() -> PathBuf {
    match env::var_os("XDG_DATA_HOME") {
        Some(dir) => PathBuf::from(dir).join("lab1rint"),
        None => match env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(".local/share/lab1rint"),
            None => PathBuf::from("."),
        },
    }
}

/// Print the report of a level that just ended.
fn announce(ended: &LevelEnd) {
    match ended.outcome {
        Outcome::Won => println!("Found the exit! Score: {}", ended.score),
        Outcome::Lost => println!("Ouch. Score back to 0."),
        Outcome::InProgress => (),
    }
    if ended.new_best {
        println!("New best score!");
    }
}

/// Run the game until the player quits or standard input is closed.
pub fn run(config: SessionConfig) -> Result<(), Box<dyn Error>> {
    let memorize_time: Duration = config.memorize_time;
    let saver: SaverHighScores = SaverHighScores::new(data_dir());
    let mut highscores: HighScores = saver.get_highscores()?;
    let mut rng: ThreadRng = rand::rng();

    if let Some(best) = highscores.best() {
        let when: DateTime<Local> = best.when.into();
        println!(
            "Best so far: {} (on {})",
            best.score,
            when.format("%Y-%m-%d %H:%M")
        );
    }

    let mut session: GameSession = GameSession::new(config, Instant::now(), &mut rng)?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        // Memorization phase: show the maze, then hide it.
        println!("\nLevel {}  score {}", session.level(), session.score());
        println!(
            "{}",
            draw::render(session.maze(), session.path(), Some(session.position()))
        );
        println!("Memorize!");
        thread::sleep(memorize_time);
        session.update(Instant::now(), &mut rng, &mut highscores)?;
        if session.phase() == Phase::Traversing {
            println!("Go! (n/s/e/w to move, q to quit)");
        }

        // Traversal phase: one move command per input line.
        loop {
            print!("> ");
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                return Ok(());
            };
            let line: String = line?;
            let input: &str = line.trim();
            if input == "q" || input == "quit" {
                return Ok(());
            }
            if !input.is_empty() {
                match Direction::from_str(input) {
                    Ok(direction) => session.apply_move(direction),
                    Err(_) => {
                        println!("Unknown direction {input:?}. Use n, s, e, or w.");
                        continue;
                    }
                }
            }
            if let Some(ended) = session.update(Instant::now(), &mut rng, &mut highscores)? {
                announce(&ended);
                if ended.new_best {
                    saver.save_highscores(&highscores)?;
                }
                // The session already moved on to the next level.
                break;
            }
        }
    }
}
