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

//! Save and restore the player's best score.
//!
//! The saved object is a serialization of the [`HighScores`] object in JSON
//! format by using [`serde`].

use log::debug;
use std::error::Error;
use std::fs::{File, create_dir_all, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::highscores::HighScores;

/// Object to save and restore the best score.
pub struct SaverHighScores {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverHighScores {
    /// Create a [`SaverHighScores`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the best
    /// score must be saved. The directory is created on the first save if it
    /// does not exist.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("highscores.json");
        debug!("High scores file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Retrieve the saved [`HighScores`] object.
    ///
    /// Return the default, empty [`HighScores`] object when there is no save
    /// file yet.
    pub fn get_highscores(&self) -> Result<HighScores, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(HighScores::default()),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let highscores: HighScores = serde_json::from_reader(reader)?;
        Ok(highscores)
    }

    /// Save the provided [`HighScores`] object.
    pub fn save_highscores(&self, highscores: &HighScores) -> Result<(), Box<dyn Error>> {
        if let Some(dir) = self.save_file.parent() {
            create_dir_all(dir)?;
        }
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, highscores)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the high scores file.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}
