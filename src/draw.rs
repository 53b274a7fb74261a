/*
draw.rs

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

//! Render a maze as ASCII art.
//!
//! Each cell is three characters wide; walls are drawn with `-` and `|`,
//! the player's trail with `*`, and the player's current cell with `@`.

use crate::generator::grid::{Coord, Maze};

/// Render the maze walls, the player's trail, and the player's position.
///
/// `path` may be empty and `position` may be `None`, which draws the bare
/// maze (the developer CLI mode uses that).
pub fn render(maze: &Maze, path: &[Coord], position: Option<Coord>) -> String {
    let size: usize = maze.size();
    let mut out: String = String::with_capacity((4 * size + 2) * (2 * size + 1));

    for y in 0..size {
        for x in 0..size {
            out.push('+');
            out.push_str(if maze.cell((x, y)).north { "   " } else { "---" });
        }
        out.push_str("+\n");
        for x in 0..size {
            out.push(if maze.cell((x, y)).west { ' ' } else { '|' });
            if position == Some((x, y)) {
                out.push_str(" @ ");
            } else if path.contains(&(x, y)) {
                out.push_str(" * ");
            } else {
                out.push_str("   ");
            }
        }
        out.push(if maze.cell((size - 1, y)).east { ' ' } else { '|' });
        out.push('\n');
    }
    for x in 0..size {
        out.push('+');
        out.push_str(if maze.cell((x, size - 1)).south { "   " } else { "---" });
    }
    out.push_str("+\n");
    out
}
