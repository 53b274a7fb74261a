/*
grid.rs

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

//! The maze grid and its cells.

use super::direction::Direction;

/// Grid coordinates, `(x, y)` with the origin in the upper-left corner.
pub type Coord = (usize, usize);

/// One grid position with a passage flag per direction.
///
/// A flag is `true` when a passage to the adjacent cell in that direction has
/// been carved. Cells on the grid border never have a passage pointing
/// outside the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
}

impl Cell {
    /// Whether a passage is open in the given direction.
    pub fn is_open(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    fn open(&mut self, direction: Direction) {
        match direction {
            Direction::North => self.north = true,
            Direction::South => self.south = true,
            Direction::East => self.east = true,
            Direction::West => self.west = true,
        }
    }
}

/// A square grid of [`Cell`] objects.
///
/// The grid is immutable once the generator carved its passages: a new level
/// always gets a whole new maze. Two adjacent cells agree on the passage
/// between them, so the open flags of a carved maze describe a spanning tree
/// of the grid graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    size: usize,
    cells: Vec<Cell>,
}

impl Maze {
    /// Create a grid with every passage closed. The generator opens the
    /// passages afterwards.
    pub(crate) fn closed(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::default(); size * size],
        }
    }

    /// Edge length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, (x, y): Coord) -> usize {
        x * self.size + y
    }

    /// The cell at the given coordinates.
    ///
    /// # Panics
    ///
    /// Panics when the coordinates lie outside the grid.
    pub fn cell(&self, at: Coord) -> &Cell {
        &self.cells[self.index(at)]
    }

    /// Whether the cell at the given coordinates has an open passage in the
    /// given direction.
    pub fn is_open(&self, at: Coord, direction: Direction) -> bool {
        self.cell(at).is_open(direction)
    }

    /// Coordinates of the adjacent cell in the given direction, or `None`
    /// when that cell would lie outside the grid.
    pub fn neighbor(&self, (x, y): Coord, direction: Direction) -> Option<Coord> {
        let (dx, dy) = direction.delta();
        let nx: usize = x.checked_add_signed(dx)?;
        let ny: usize = y.checked_add_signed(dy)?;
        if nx < self.size && ny < self.size {
            Some((nx, ny))
        } else {
            None
        }
    }

    /// Open the passage between two adjacent cells, on both sides.
    pub(crate) fn open_passage(&mut self, at: Coord, neighbor: Coord, direction: Direction) {
        let i: usize = self.index(at);
        let j: usize = self.index(neighbor);
        self.cells[i].open(direction);
        self.cells[j].open(direction.opposite());
    }

    /// Total number of open passage flags over all cells. A carved maze has
    /// two flags per passage, one on each side.
    pub fn open_flag_count(&self) -> usize {
        self.cells
            .iter()
            .map(|c| {
                usize::from(c.north) + usize::from(c.south) + usize::from(c.east) + usize::from(c.west)
            })
            .sum()
    }
}
