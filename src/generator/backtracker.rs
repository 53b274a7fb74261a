/*
backtracker.rs

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

//! Carve a perfect maze with randomized recursive backtracking.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use std::error::Error;
use std::fmt;

use super::direction::Direction;
use super::grid::{Coord, Maze};

/// Type of errors.
#[derive(Debug, PartialEq, Eq)]
pub enum GenerateError {
    /// The requested grid has no cells.
    InvalidSize(usize),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GenerateError::InvalidSize(size) => {
                write!(f, "invalid maze size {size}: the grid needs at least one cell")
            }
        }
    }
}

impl Error for GenerateError {}

/// One carving step: a cell and the shuffled directions left to explore
/// from it.
struct Frame {
    at: Coord,
    directions: [Direction; 4],
    cursor: usize,
}

impl Frame {
    fn new<R: Rng + ?Sized>(at: Coord, rng: &mut R) -> Self {
        let mut directions: [Direction; 4] = Direction::ALL;
        directions.shuffle(rng);
        Self {
            at,
            directions,
            cursor: 0,
        }
    }

    fn next_direction(&mut self) -> Option<Direction> {
        let direction: Option<Direction> = self.directions.get(self.cursor).copied();
        self.cursor += 1;
        direction
    }
}

/// Generate a maze of the given edge length.
///
/// The generator starts from the upper-left cell and carves passages with
/// randomized backtracking: each visited cell explores its four directions in
/// a uniformly shuffled order, opens a passage into every unvisited
/// in-bounds neighbor, and descends into it before trying the remaining
/// directions. Every cell is entered exactly once, so the carved passages
/// form a spanning tree of the grid: all cells are connected and no cycle
/// exists.
///
/// The backtracking runs on an explicit frame stack instead of the call
/// stack, so large grids do not risk stack exhaustion. The visiting order is
/// the same as the recursive formulation.
///
/// # Errors
///
/// Return [`GenerateError::InvalidSize`] when `size` is zero.
pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Maze, GenerateError> {
    if size == 0 {
        return Err(GenerateError::InvalidSize(size));
    }

    let mut maze: Maze = Maze::closed(size);
    let mut visited: Vec<bool> = vec![false; size * size];
    let mut stack: Vec<Frame> = Vec::with_capacity(size * size);

    visited[0] = true;
    stack.push(Frame::new((0, 0), rng));

    while let Some(frame) = stack.last_mut() {
        let at: Coord = frame.at;
        let Some(direction) = frame.next_direction() else {
            // No direction left to explore: backtrack.
            stack.pop();
            continue;
        };
        if let Some(next) = maze.neighbor(at, direction)
            && !visited[next.0 * size + next.1]
        {
            maze.open_passage(at, next, direction);
            visited[next.0 * size + next.1] = true;
            stack.push(Frame::new(next, rng));
        }
    }

    debug!("Generated a {size}x{size} maze");
    Ok(maze)
}
