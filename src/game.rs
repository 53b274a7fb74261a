/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! A [`GameSession`] drives one play-through across consecutive levels. Each
//! level starts with a fresh maze that the player first memorizes and then
//! traverses blind, one discrete move at a time. Reaching the goal corner
//! wins the level; walking into a wall, off the grid, or running out of time
//! loses it. Either way the session moves on to the next level.
//!
//! The session has no hidden collaborators: the clock is the [`Instant`]
//! passed into [`GameSession::update`], the randomness is the [`rand::Rng`]
//! source passed into the operations that generate mazes, and the high-score
//! storage is the [`HighScores`] object passed into the update step.

use log::debug;
use rand::Rng;
use std::time::{Duration, Instant};

use crate::generator::backtracker::{self, GenerateError};
use crate::generator::direction::Direction;
use crate::generator::grid::{Coord, Maze};
use crate::highscores::HighScores;

/// Default edge length of the maze grid.
pub const DEFAULT_MAZE_SIZE: usize = 4;

/// Default duration of the memorization phase.
pub const DEFAULT_MEMORIZE_TIME: Duration = Duration::from_millis(1000);

/// Phase of the current level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The maze is visible and move commands are ignored.
    Memorizing,

    /// The maze is hidden and move commands are accepted.
    Traversing,
}

/// Result of the current level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// Session tuning parameters.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Edge length of the maze grid.
    pub maze_size: usize,

    /// How long the player gets to memorize the maze layout.
    pub memorize_time: Duration,

    /// Lose the level when the traversal takes longer than this.
    /// No time limit when unset.
    pub traversal_limit: Option<Duration>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            maze_size: DEFAULT_MAZE_SIZE,
            memorize_time: DEFAULT_MEMORIZE_TIME,
            traversal_limit: None,
        }
    }
}

/// Report on a level that just ended, for the front end to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelEnd {
    /// How the level ended ([`Outcome::Won`] or [`Outcome::Lost`]).
    pub outcome: Outcome,

    /// Score after the win increment or the loss reset.
    pub score: u32,

    /// Whether this run set a new best score.
    pub new_best: bool,
}

/// When to reveal the traversal phase, tagged with the level generation that
/// armed it. A deadline armed for an earlier level must never flip the phase
/// of a later one.
#[derive(Debug, Clone, Copy)]
struct RevealDeadline {
    due: Instant,
    generation: u64,
}

/// Manage the status of the game in progress.
#[derive(Debug)]
pub struct GameSession {
    config: SessionConfig,

    /// Maze of the current level. Replaced wholesale at every level start.
    maze: Maze,

    /// Cells the player walked through, starting with the entry corner.
    path: Vec<Coord>,

    /// The player's current cell.
    position: Coord,

    /// Level counter. Grows on both wins and losses, and only resets with
    /// the process.
    level: u64,

    /// Levels cleared in a row.
    score: u32,

    phase: Phase,
    outcome: Outcome,

    /// Bumped once per level start, to tie the reveal deadline to its level.
    generation: u64,

    /// Time when the current level started.
    level_started: Instant,

    reveal: RevealDeadline,
}

impl GameSession {
    /// Create a session and start its first level.
    ///
    /// # Errors
    ///
    /// Return [`GenerateError::InvalidSize`] when the configured maze size
    /// is zero.
    pub fn new<R: Rng + ?Sized>(
        config: SessionConfig,
        now: Instant,
        rng: &mut R,
    ) -> Result<Self, GenerateError> {
        let maze: Maze = backtracker::generate(config.maze_size, rng)?;
        // Level 0 is even, so the entry corner is the upper-left one.
        let start: Coord = (0, 0);
        Ok(Self {
            maze,
            path: vec![start],
            position: start,
            level: 0,
            score: 0,
            phase: Phase::Memorizing,
            outcome: Outcome::InProgress,
            generation: 0,
            level_started: now,
            reveal: RevealDeadline {
                due: now + config.memorize_time,
                generation: 0,
            },
            config,
        })
    }

    /// Begin the current level afresh: new maze, trail reset to the entry
    /// corner, memorization phase armed.
    ///
    /// The level number is left alone, so this is also the level-start
    /// trigger for the front end: it continues from the current level.
    pub fn start_level<R: Rng + ?Sized>(
        &mut self,
        now: Instant,
        rng: &mut R,
    ) -> Result<(), GenerateError> {
        self.maze = backtracker::generate(self.config.maze_size, rng)?;
        self.generation += 1;
        let start: Coord = self.start_corner();
        self.path.clear();
        self.path.push(start);
        self.position = start;
        self.phase = Phase::Memorizing;
        self.outcome = Outcome::InProgress;
        self.level_started = now;
        self.reveal = RevealDeadline {
            due: now + self.config.memorize_time,
            generation: self.generation,
        };
        debug!(
            "Level {} started: entry {:?}, goal {:?}",
            self.level,
            start,
            self.goal_corner()
        );
        Ok(())
    }

    /// Apply one discrete move command.
    ///
    /// Commands are only honored while the maze is being traversed and the
    /// level is still undecided; otherwise the command is silently ignored.
    /// Moving through an open passage appends the new cell to the trail and
    /// wins the level when that cell is the goal corner. Walking into a
    /// wall, or off the edge of the grid, loses the level; the blocked step
    /// is never appended to the trail.
    pub fn apply_move(&mut self, direction: Direction) {
        if self.phase != Phase::Traversing || self.outcome != Outcome::InProgress {
            return;
        }
        match self.maze.neighbor(self.position, direction) {
            Some(next) if self.maze.is_open(self.position, direction) => {
                self.path.push(next);
                self.position = next;
                debug!("Moved {direction} to {next:?}");
                if next == self.goal_corner() {
                    self.outcome = Outcome::Won;
                }
            }
            _ => {
                debug!("Hit a wall moving {direction} from {:?}", self.position);
                self.outcome = Outcome::Lost;
            }
        }
    }

    /// Advance the session by one tick.
    ///
    /// The update step settles a decided level (score and best-score
    /// bookkeeping, then the next level starts in the memorization phase),
    /// reveals the traversal phase once the memorization deadline has
    /// passed, and enforces the optional traversal time limit.
    ///
    /// Return the [`LevelEnd`] report when this tick settled a level.
    ///
    /// # Errors
    ///
    /// Return an error when the next level's maze cannot be generated. With
    /// the size already validated at construction, this does not happen in
    /// practice.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        now: Instant,
        rng: &mut R,
        highscores: &mut HighScores,
    ) -> Result<Option<LevelEnd>, GenerateError> {
        match self.outcome {
            Outcome::Won => {
                self.score += 1;
                let new_best: bool = highscores.record(self.score);
                let ended = LevelEnd {
                    outcome: Outcome::Won,
                    score: self.score,
                    new_best,
                };
                self.level += 1;
                self.start_level(now, rng)?;
                return Ok(Some(ended));
            }
            Outcome::Lost => {
                // The score reached before this loss may still be a best.
                let new_best: bool = highscores.record(self.score);
                self.score = 0;
                let ended = LevelEnd {
                    outcome: Outcome::Lost,
                    score: 0,
                    new_best,
                };
                self.level += 1;
                self.start_level(now, rng)?;
                return Ok(Some(ended));
            }
            Outcome::InProgress => (),
        }

        if self.phase == Phase::Memorizing
            && self.reveal.generation == self.generation
            && now >= self.reveal.due
        {
            self.phase = Phase::Traversing;
            debug!("Level {}: traversal begins", self.level);
        }

        if self.phase == Phase::Traversing
            && let Some(limit) = self.config.traversal_limit
            && now.duration_since(self.level_started) >= limit
        {
            debug!("Level {}: out of time", self.level);
            self.outcome = Outcome::Lost;
        }

        Ok(None)
    }

    /// Entry corner of the current level. Even levels enter at the
    /// upper-left corner, odd levels at the lower-right one.
    pub fn start_corner(&self) -> Coord {
        let far: usize = self.maze.size() - 1;
        if self.level % 2 == 0 { (0, 0) } else { (far, far) }
    }

    /// Goal corner of the current level, opposite the entry corner.
    pub fn goal_corner(&self) -> Coord {
        let far: usize = self.maze.size() - 1;
        if self.level % 2 == 0 { (far, far) } else { (0, 0) }
    }

    /// The maze of the current level.
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// The cells the player walked through, in order, starting with the
    /// entry corner.
    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    /// The player's current cell.
    pub fn position(&self) -> Coord {
        self.position
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u64 {
        self.level
    }

    /// Time spent on the current level so far.
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.duration_since(self.level_started)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::VecDeque;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn config() -> SessionConfig {
        SessionConfig::default()
    }

    /// The directions of the unique open route between two cells.
    fn solve(maze: &Maze, from: Coord, to: Coord) -> Vec<Direction> {
        let size: usize = maze.size();
        let mut previous: Vec<Option<(Coord, Direction)>> = vec![None; size * size];
        let mut queue: VecDeque<Coord> = VecDeque::new();
        let mut seen: Vec<bool> = vec![false; size * size];

        seen[from.0 * size + from.1] = true;
        queue.push_back(from);
        while let Some(at) = queue.pop_front() {
            for direction in Direction::ALL {
                if !maze.is_open(at, direction) {
                    continue;
                }
                let next: Coord = maze.neighbor(at, direction).unwrap();
                if !seen[next.0 * size + next.1] {
                    seen[next.0 * size + next.1] = true;
                    previous[next.0 * size + next.1] = Some((at, direction));
                    queue.push_back(next);
                }
            }
        }

        let mut route: Vec<Direction> = Vec::new();
        let mut at: Coord = to;
        while at != from {
            let (back, direction) = previous[at.0 * size + at.1]
                .expect("generated mazes are connected");
            route.push(direction);
            at = back;
        }
        route.reverse();
        route
    }

    /// Tick the session past the memorization deadline.
    fn reveal(
        session: &mut GameSession,
        now: Instant,
        rng: &mut StdRng,
        highscores: &mut HighScores,
    ) -> Instant {
        let later: Instant = now + DEFAULT_MEMORIZE_TIME + Duration::from_millis(500);
        assert_eq!(session.update(later, rng, highscores).unwrap(), None);
        assert_eq!(session.phase(), Phase::Traversing);
        later
    }

    /// Walk the open route to the goal; the last step wins the level.
    fn walk_to_goal(session: &mut GameSession) {
        let route: Vec<Direction> =
            solve(session.maze(), session.position(), session.goal_corner());
        for direction in route {
            assert_eq!(session.outcome(), Outcome::InProgress);
            session.apply_move(direction);
        }
        assert_eq!(session.outcome(), Outcome::Won);
    }

    #[test]
    fn zero_maze_size_is_rejected() {
        let cfg = SessionConfig {
            maze_size: 0,
            ..config()
        };
        assert_eq!(
            GameSession::new(cfg, Instant::now(), &mut rng(1)).unwrap_err(),
            GenerateError::InvalidSize(0)
        );
    }

    #[test]
    fn moves_are_ignored_while_memorizing() {
        let now: Instant = Instant::now();
        let mut session = GameSession::new(config(), now, &mut rng(1)).unwrap();
        for direction in Direction::ALL {
            session.apply_move(direction);
        }
        assert_eq!(session.phase(), Phase::Memorizing);
        assert_eq!(session.outcome(), Outcome::InProgress);
        assert_eq!(session.path(), &[(0, 0)]);
    }

    #[test]
    fn memorization_ends_on_the_deadline_not_before() {
        let now: Instant = Instant::now();
        let mut source: StdRng = rng(2);
        let mut highscores: HighScores = HighScores::new();
        let mut session = GameSession::new(config(), now, &mut source).unwrap();

        let early: Instant = now + Duration::from_millis(200);
        session.update(early, &mut source, &mut highscores).unwrap();
        assert_eq!(session.phase(), Phase::Memorizing);

        reveal(&mut session, now, &mut source, &mut highscores);
    }

    #[test]
    fn legal_walk_wins_level_zero() {
        let now: Instant = Instant::now();
        let mut source: StdRng = rng(3);
        let mut highscores: HighScores = HighScores::new();
        let mut session = GameSession::new(config(), now, &mut source).unwrap();
        assert_eq!(session.goal_corner(), (3, 3));

        let later: Instant = reveal(&mut session, now, &mut source, &mut highscores);

        let route: Vec<Direction> = solve(session.maze(), (0, 0), (3, 3));
        // Corner to corner on a 4x4 grid takes at least six steps, so the
        // first four are always mid-walk.
        for direction in &route[..4] {
            session.apply_move(*direction);
        }
        assert_eq!(session.path().len(), 5);
        assert_eq!(session.outcome(), Outcome::InProgress);

        for direction in &route[4..] {
            session.apply_move(*direction);
        }
        assert_eq!(session.outcome(), Outcome::Won);
        assert_eq!(session.position(), (3, 3));
        assert_eq!(session.path().len(), route.len() + 1);

        let ended: LevelEnd = session
            .update(later, &mut source, &mut highscores)
            .unwrap()
            .unwrap();
        assert_eq!(ended.outcome, Outcome::Won);
        assert_eq!(ended.score, 1);
        assert!(ended.new_best);

        assert_eq!(session.score(), 1);
        assert_eq!(session.level(), 1);
        assert_eq!(session.phase(), Phase::Memorizing);
        assert_eq!(session.position(), (3, 3));
        assert_eq!(session.path(), &[(3, 3)]);
        assert_eq!(highscores.best().map(|b| b.score), Some(1));
    }

    #[test]
    fn wall_hit_on_an_odd_level_resets_the_score() {
        let now: Instant = Instant::now();
        let mut source: StdRng = rng(4);
        let mut highscores: HighScores = HighScores::new();
        let mut session = GameSession::new(config(), now, &mut source).unwrap();

        // Win level 0 first so that the score is 1.
        let later: Instant = reveal(&mut session, now, &mut source, &mut highscores);
        walk_to_goal(&mut session);
        session.update(later, &mut source, &mut highscores).unwrap();
        assert_eq!(session.level(), 1);
        assert_eq!(session.position(), (3, 3));

        // On the odd level, stepping south from (3, 3) leaves the grid.
        let later: Instant = reveal(&mut session, later, &mut source, &mut highscores);
        session.apply_move(Direction::South);
        assert_eq!(session.outcome(), Outcome::Lost);
        assert_eq!(session.path(), &[(3, 3)]);

        let ended: LevelEnd = session
            .update(later, &mut source, &mut highscores)
            .unwrap()
            .unwrap();
        assert_eq!(ended.outcome, Outcome::Lost);
        assert_eq!(ended.score, 0);
        // The best score was already 1 before the loss.
        assert!(!ended.new_best);

        assert_eq!(session.score(), 0);
        assert_eq!(session.level(), 2);
        assert_eq!(session.position(), (0, 0));
        assert_eq!(highscores.best().map(|b| b.score), Some(1));
    }

    #[test]
    fn leaving_the_grid_is_a_wall_hit() {
        let now: Instant = Instant::now();
        let mut source: StdRng = rng(5);
        let mut highscores: HighScores = HighScores::new();
        let mut session = GameSession::new(config(), now, &mut source).unwrap();

        reveal(&mut session, now, &mut source, &mut highscores);
        session.apply_move(Direction::North);
        assert_eq!(session.outcome(), Outcome::Lost);
        assert_eq!(session.path(), &[(0, 0)]);
    }

    #[test]
    fn level_parity_swaps_the_corners() {
        let now: Instant = Instant::now();
        let mut source: StdRng = rng(6);
        let mut highscores: HighScores = HighScores::new();
        let mut session = GameSession::new(config(), now, &mut source).unwrap();

        let mut later: Instant = now;
        for wins in 1..=3u32 {
            later = reveal(&mut session, later, &mut source, &mut highscores);
            walk_to_goal(&mut session);
            session.update(later, &mut source, &mut highscores).unwrap();

            assert_eq!(session.level(), u64::from(wins));
            assert_eq!(session.score(), wins);
            if session.level() % 2 == 0 {
                assert_eq!(session.start_corner(), (0, 0));
                assert_eq!(session.goal_corner(), (3, 3));
            } else {
                assert_eq!(session.start_corner(), (3, 3));
                assert_eq!(session.goal_corner(), (0, 0));
            }
            assert_eq!(session.position(), session.start_corner());
        }
        assert_eq!(highscores.best().map(|b| b.score), Some(3));
    }

    #[test]
    fn timeout_loses_the_level() {
        let cfg = SessionConfig {
            traversal_limit: Some(Duration::from_secs(5)),
            ..config()
        };
        let now: Instant = Instant::now();
        let mut source: StdRng = rng(7);
        let mut highscores: HighScores = HighScores::new();
        let mut session = GameSession::new(cfg, now, &mut source).unwrap();

        reveal(&mut session, now, &mut source, &mut highscores);

        let too_late: Instant = now + Duration::from_secs(6);
        assert_eq!(
            session.update(too_late, &mut source, &mut highscores).unwrap(),
            None
        );
        assert_eq!(session.outcome(), Outcome::Lost);

        // The next tick settles the loss and starts the next level.
        let ended: LevelEnd = session
            .update(too_late, &mut source, &mut highscores)
            .unwrap()
            .unwrap();
        assert_eq!(ended.outcome, Outcome::Lost);
        assert_eq!(session.level(), 1);
        assert_eq!(session.outcome(), Outcome::InProgress);
    }

    #[test]
    fn restarting_a_level_rearms_the_deadline() {
        let now: Instant = Instant::now();
        let mut source: StdRng = rng(8);
        let mut highscores: HighScores = HighScores::new();
        let mut session = GameSession::new(config(), now, &mut source).unwrap();

        // Restart after the first deadline would have fired. The old
        // deadline must not reveal the restarted level early.
        let restart_at: Instant = now + Duration::from_secs(2);
        session.start_level(restart_at, &mut source).unwrap();

        let old_due: Instant = now + DEFAULT_MEMORIZE_TIME + Duration::from_millis(100);
        session
            .update(old_due.max(restart_at), &mut source, &mut highscores)
            .unwrap();
        assert_eq!(session.phase(), Phase::Memorizing);

        let new_due: Instant = restart_at + DEFAULT_MEMORIZE_TIME;
        session.update(new_due, &mut source, &mut highscores).unwrap();
        assert_eq!(session.phase(), Phase::Traversing);
    }

    #[test]
    fn elapsed_tracks_the_current_level() {
        let now: Instant = Instant::now();
        let mut source: StdRng = rng(9);
        let mut session = GameSession::new(config(), now, &mut source).unwrap();
        assert_eq!(session.elapsed(now + Duration::from_secs(3)), Duration::from_secs(3));

        session.start_level(now + Duration::from_secs(10), &mut source).unwrap();
        assert_eq!(
            session.elapsed(now + Duration::from_secs(12)),
            Duration::from_secs(2)
        );
    }
}
