/*
cli_options.rs

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

//! Process command-line options.
//!
//! Besides tuning the game session, Lab1rint has a developer mode that
//! generates sample mazes, verifies their shape, and prints them as ASCII
//! art.
//!
//! # Examples
//!
//! Generate two 6x6 mazes from a fixed seed:
//!
//! ```text
//! $ lab1rint --mazes 2 --size 6 --seed 42
//! +---+---+---+---+---+---+
//! |               |       |
//! +   +---+---+   +   +   +
//! ...
//! ```
//!
//! Play with a larger maze and a 30-second traversal limit:
//!
//! ```text
//! $ lab1rint --size 6 --time-limit 30
//! ```

use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::time::{Duration, Instant};

use crate::draw;
use crate::game::SessionConfig;
use crate::generator::backtracker;
use crate::generator::direction::Direction;
use crate::generator::grid::{Coord, Maze};

/// Memory maze game: watch the maze, then walk it blind.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Edge length of the maze grid
    #[arg(short, long, default_value_t = 4)]
    size: usize,

    /// Memorization time, in milliseconds
    #[arg(short, long, default_value_t = 1000)]
    memorize_ms: u64,

    /// Lose the level after this many seconds of traversal
    #[arg(short, long)]
    time_limit: Option<u64>,

    /// Generate this many sample mazes, verify them, and print them
    #[arg(short = 'c', long, group = "generate")]
    mazes: Option<usize>,

    /// Seed for the maze generator
    #[arg(long, requires = "generate")]
    seed: Option<u64>,

    /// Print some statistics after generating the sample mazes
    #[arg(long, default_value_t = false, requires = "generate")]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// What to do once the command line is parsed.
pub enum CliAction {
    /// Exit with the given code (the developer mode ran to completion).
    Exit(u8),

    /// Start the game with the given session parameters.
    Play(SessionConfig),
}

/// Parse and process command-line options.
pub fn parse() -> CliAction {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let config: SessionConfig = SessionConfig {
        maze_size: args.size,
        memorize_time: Duration::from_millis(args.memorize_ms),
        traversal_limit: args.time_limit.map(Duration::from_secs),
    };

    let Some(count) = args.mazes else {
        return CliAction::Play(config);
    };

    //
    // Developer mode: generate, verify, and print sample mazes.
    //
    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;

    for i in 0..count {
        debug!("Maze {i}");
        let started: Instant = Instant::now();
        match backtracker::generate(args.size, &mut rng) {
            Ok(maze) => {
                let duration: f32 = started.elapsed().as_secs_f32();
                total += duration;
                if duration > max {
                    max = duration;
                }
                verify(&maze);
                println!("{}", draw::render(&maze, &[], None));
            }
            Err(error) => {
                eprintln!("Error: {error}");
                return CliAction::Exit(1);
            }
        }
    }

    if args.summary {
        println!(
            "
  total time = {}s
average time = {}s
    max time = {}s",
            total,
            total / count as f32,
            max
        );
    }
    CliAction::Exit(0)
}

/// Spanning-tree sanity checks for a generated maze.
fn verify(maze: &Maze) {
    let size: usize = maze.size();

    // Verify that the passage count matches a spanning tree
    let expected: usize = 2 * (size * size - 1);
    if maze.open_flag_count() != expected {
        eprintln!(
            "Wrong passage count: {} open flags instead of {expected}",
            maze.open_flag_count()
        );
        panic!("Bug: wrong passage count in the generated maze");
    }

    // Verify that every cell is reachable from the entry corner
    let mut seen: Vec<bool> = vec![false; size * size];
    let mut pending: Vec<Coord> = vec![(0, 0)];
    seen[0] = true;
    while let Some(at) = pending.pop() {
        for direction in Direction::ALL {
            if !maze.is_open(at, direction) {
                continue;
            }
            if let Some(next) = maze.neighbor(at, direction)
                && !seen[next.0 * size + next.1]
            {
                seen[next.0 * size + next.1] = true;
                pending.push(next);
            }
        }
    }
    if seen.iter().any(|s| !s) {
        panic!("Bug: unreachable cells in the generated maze");
    }
}
