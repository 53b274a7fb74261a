/*
highscores.rs

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

//! Keep the player's best score.
//!
//! The main object, [`HighScores`], holds the best score reached so far.
//! The game session offers its score to this object when a level ends, and
//! the stored value only ever increases.
//! See the [`crate::saver::highscores`] module that saves and restores the
//! [`HighScores`] object.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// A recorded best score.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct Score {
    /// Number of levels cleared in a row.
    pub score: u32,

    /// Timestamp of the record, which is used to display the date and time
    /// of the best run.
    pub when: SystemTime,
}

/// Best score reached so far.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct HighScores {
    best: Option<Score>,
}

impl HighScores {
    /// Create a [`HighScores`] object with no recorded score.
    pub fn new() -> Self {
        Self { best: None }
    }

    /// Return the best score, or None when no score has been recorded yet.
    pub fn best(&self) -> Option<Score> {
        self.best
    }

    /// Offer a score and return whether it became the new best.
    ///
    /// The first offered score is always recorded. Afterwards, only a
    /// strictly greater score replaces the stored one, so the best score
    /// never decreases.
    pub fn record(&mut self, score: u32) -> bool {
        match self.best {
            Some(best) if score <= best.score => false,
            _ => {
                self.best = Some(Score {
                    score,
                    when: SystemTime::now(),
                });
                true
            }
        }
    }
}
