/*
direction.rs

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

//! The four cardinal move directions.

use strum_macros::{Display, EnumString};

/// A direction on the maze grid.
///
/// The grid origin is the upper-left corner: `x` grows eastward and `y` grows
/// southward, so moving north decreases `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    #[strum(serialize = "n", serialize = "north")]
    North,

    #[strum(serialize = "s", serialize = "south")]
    South,

    #[strum(serialize = "e", serialize = "east")]
    East,

    #[strum(serialize = "w", serialize = "west")]
    West,
}

impl Direction {
    /// The four directions, in a fixed order suitable for shuffling.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Coordinate offset of the adjacent cell in this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// The direction that points back at the current cell.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}
