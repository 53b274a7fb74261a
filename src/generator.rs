/*
generator.rs

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

//! Generate random perfect mazes.
//!
//! A maze is a square grid of [`grid::Cell`] objects, each carrying one
//! passage flag per [`direction::Direction`].
//! The [`backtracker::generate`] function carves the passages with
//! randomized recursive backtracking, producing a perfect maze: every cell
//! is reachable from every other through exactly one route.
//!
//! The generator draws its randomness from the [`rand::Rng`] source that the
//! caller provides, so a seeded source reproduces the same maze.

pub mod backtracker;
pub mod direction;
pub mod grid;
