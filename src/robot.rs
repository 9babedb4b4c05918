//! The robot state machine: pose, visited trail, and command handling.

use crate::grid::{Grid, Heading};
use anyhow::{anyhow, Error};
use log::debug;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Enum for the commands a [`Robot`] accepts.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Turn 90 degrees counter-clockwise (`L`)
    TurnLeft,
    /// Turn 90 degrees clockwise (`R`)
    TurnRight,
    /// Step one cell in the current heading (`M`)
    MoveForward,
}

impl Command {
    /// Parses a command character, returning `None` for anything outside
    /// `L`/`R`/`M`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridbot::robot::Command;
    ///
    /// assert_eq!(Command::from_char('M'), Some(Command::MoveForward));
    /// assert_eq!(Command::from_char('x'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'L' => Some(Command::TurnLeft),
            'R' => Some(Command::TurnRight),
            'M' => Some(Command::MoveForward),
            _ => None,
        }
    }
}

/// A robot with a position and heading on a [`Grid`].
///
/// The robot keeps the ordered trail of cells it has vacated and refuses
/// to move onto any of them, so every run terminates: the trail grows
/// strictly and is bounded by the grid area.
///
/// A rejected move is a normal `false` result, not an error; the caller
/// decides whether to stop feeding commands (the bundled driver does) or
/// to skip the rejected command and continue.
///
/// # Examples
///
/// ```
/// use gridbot::grid::{Grid, Heading};
/// use gridbot::robot::Robot;
/// use nalgebra::Point2;
///
/// let grid = Grid::new(5, 5, vec![]).unwrap();
/// let mut robot = Robot::new(1, 2, Heading::North, grid).unwrap();
/// robot.follow("RM");
/// assert_eq!(robot.position(), Point2::new(2, 2));
/// assert_eq!(robot.heading(), Heading::East);
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Robot {
    position: Point2<i32>,
    heading: Heading,
    visited: Vec<Point2<i32>>,
    grid: Grid,
}

impl Robot {
    /// Creates a robot at `(x, y)` facing `heading` on `grid`.
    ///
    /// Fails if the starting position is not a valid cell of the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridbot::grid::{Grid, Heading};
    /// use gridbot::robot::Robot;
    ///
    /// let grid = Grid::new(5, 5, vec![]).unwrap();
    /// assert!(Robot::new(0, 0, Heading::North, grid.clone()).is_ok());
    /// assert!(Robot::new(6, 0, Heading::North, grid).is_err());
    /// ```
    pub fn new(x: i32, y: i32, heading: Heading, grid: Grid) -> Result<Self, Error> {
        let position = Point2::new(x, y);
        if !grid.is_valid(position) {
            return Err(anyhow!("starting position ({x}, {y}) is not a valid cell"));
        }
        Ok(Robot {
            position,
            heading,
            visited: Vec::new(),
            grid,
        })
    }

    /// Applies one command, returning whether it was accepted.
    ///
    /// Turns always succeed and never touch the position or the trail.
    /// A forward move is rejected, with no state change at all, if the
    /// destination is off the grid, blocked, or already vacated; an
    /// accepted move records the cell being left in the trail, then
    /// steps onto the destination.
    pub fn apply(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::TurnLeft => {
                self.heading = self.heading.left();
                true
            }
            Command::TurnRight => {
                self.heading = self.heading.right();
                true
            }
            Command::MoveForward => {
                let candidate = self.position + self.heading.vector();
                if !self.grid.is_valid(candidate) {
                    debug!(
                        "move to ({}, {}) rejected: not a valid cell",
                        candidate.x, candidate.y
                    );
                    return false;
                }
                if self.visited.contains(&candidate) {
                    debug!(
                        "move to ({}, {}) rejected: already visited",
                        candidate.x, candidate.y
                    );
                    return false;
                }
                self.visited.push(self.position);
                self.position = candidate;
                true
            }
        }
    }

    /// Applies one command character.
    ///
    /// Characters outside `L`/`R`/`M` are deliberately treated as a
    /// zero-effect turn: no state change, result `true`.
    pub fn apply_char(&mut self, c: char) -> bool {
        match Command::from_char(c) {
            Some(cmd) => self.apply(cmd),
            None => {
                debug!("ignoring unrecognized command {c:?}");
                true
            }
        }
    }

    /// Applies command characters in order, stopping at the first
    /// rejection. Returns the number of commands accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridbot::grid::{Grid, Heading};
    /// use gridbot::robot::Robot;
    ///
    /// let grid = Grid::new(1, 1, vec![]).unwrap();
    /// let mut robot = Robot::new(0, 0, Heading::North, grid).unwrap();
    /// // the second M would leave the grid
    /// assert_eq!(robot.follow("MM"), 1);
    /// ```
    pub fn follow(&mut self, commands: &str) -> usize {
        for (i, c) in commands.chars().enumerate() {
            if !self.apply_char(c) {
                return i;
            }
        }
        commands.chars().count()
    }

    /// Returns the current position.
    pub fn position(&self) -> Point2<i32> {
        self.position
    }

    /// Returns the current heading.
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Returns the cells the robot has vacated, in chronological order.
    pub fn trail(&self) -> &[Point2<i32>] {
        &self.visited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid(corner: i32) -> Grid {
        Grid::new(corner, corner, vec![]).unwrap()
    }

    #[test]
    fn turns_only_touch_heading() {
        let mut robot = Robot::new(1, 2, Heading::North, open_grid(5)).unwrap();
        assert!(robot.apply(Command::TurnLeft));
        assert_eq!(robot.heading(), Heading::West);
        assert!(robot.apply(Command::TurnRight));
        assert_eq!(robot.heading(), Heading::North);
        assert_eq!(robot.position(), Point2::new(1, 2));
        assert!(robot.trail().is_empty());
    }

    #[test]
    fn move_records_vacated_cell() {
        let mut robot = Robot::new(1, 2, Heading::North, open_grid(5)).unwrap();
        assert!(robot.apply(Command::MoveForward));
        assert_eq!(robot.position(), Point2::new(1, 3));
        assert_eq!(robot.heading(), Heading::North);
        assert_eq!(robot.trail(), &[Point2::new(1, 2)]);
    }

    #[test]
    fn classic_run_halts_at_revisit() {
        // The classic rover run "LMLMLMLMM" retraces a square; with the
        // no-revisit rule the fourth move (back onto the start cell) is
        // rejected and the run halts at (1, 1) facing North.
        let mut robot = Robot::new(1, 2, Heading::North, open_grid(5)).unwrap();
        assert_eq!(robot.follow("LMLMLMLMM"), 7);
        assert_eq!(robot.position(), Point2::new(1, 1));
        assert_eq!(robot.heading(), Heading::North);
    }

    #[test]
    fn perimeter_run_halts_at_revisit() {
        // "MMRMMRMRRM" ends by stepping back onto the vacated (5, 1), so
        // the final move is rejected and the robot stays at (4, 1) East.
        let mut robot = Robot::new(3, 3, Heading::East, open_grid(5)).unwrap();
        assert_eq!(robot.follow("MMRMMRMRRM"), 9);
        assert_eq!(robot.position(), Point2::new(4, 1));
        assert_eq!(robot.heading(), Heading::East);
    }

    #[test]
    fn obstacle_blocks_move() {
        let grid = Grid::new(2, 2, vec![Point2::new(1, 0)]).unwrap();
        let mut robot = Robot::new(0, 0, Heading::East, grid).unwrap();
        assert!(!robot.apply(Command::MoveForward));
        assert_eq!(robot.position(), Point2::new(0, 0));
        assert_eq!(robot.heading(), Heading::East);
        assert!(robot.trail().is_empty());
    }

    #[test]
    fn turning_around_cannot_retrace() {
        let mut robot = Robot::new(0, 0, Heading::North, open_grid(3)).unwrap();
        assert_eq!(robot.follow("MMRR"), 4);
        assert_eq!(robot.position(), Point2::new(0, 2));
        assert_eq!(robot.heading(), Heading::South);
        // (0, 1) was vacated on the way up
        assert!(!robot.apply(Command::MoveForward));
        assert_eq!(robot.position(), Point2::new(0, 2));
    }

    #[test]
    fn boundary_rejections() {
        let mut robot = Robot::new(0, 0, Heading::West, open_grid(2)).unwrap();
        assert!(!robot.apply(Command::MoveForward));
        assert!(robot.apply(Command::TurnLeft));
        assert_eq!(robot.heading(), Heading::South);
        assert!(!robot.apply(Command::MoveForward));
        assert_eq!(robot.position(), Point2::new(0, 0));
    }

    #[test]
    fn rejection_leaves_state_unchanged() {
        let grid = Grid::new(2, 2, vec![Point2::new(2, 1)]).unwrap();
        let mut robot = Robot::new(1, 1, Heading::East, grid).unwrap();
        let before = robot.clone();
        assert!(!robot.apply(Command::MoveForward));
        assert_eq!(robot, before);
    }

    #[test]
    fn move_is_deterministic() {
        let mut a = Robot::new(2, 2, Heading::South, open_grid(4)).unwrap();
        let mut b = a.clone();
        assert_eq!(
            a.apply(Command::MoveForward),
            b.apply(Command::MoveForward)
        );
        assert_eq!(a, b);
    }

    #[test]
    fn no_revisit_invariant() {
        let mut robot = Robot::new(0, 0, Heading::North, open_grid(4)).unwrap();
        robot.follow("MMRMMRMLMRM");
        let trail = robot.trail();
        for (i, a) in trail.iter().enumerate() {
            for b in &trail[i + 1..] {
                assert_ne!(a, b);
            }
            assert_ne!(*a, robot.position());
        }
    }

    #[test]
    fn unknown_command_is_silent_noop() {
        let mut robot = Robot::new(1, 1, Heading::North, open_grid(3)).unwrap();
        let before = robot.clone();
        assert!(robot.apply_char('X'));
        assert!(robot.apply_char('7'));
        assert_eq!(robot, before);
        // unknown characters do not stop a run
        assert_eq!(robot.follow("XMZ"), 3);
        assert_eq!(robot.position(), Point2::new(1, 2));
    }

    #[test]
    fn invalid_start_rejected() {
        let grid = Grid::new(2, 2, vec![Point2::new(1, 1)]).unwrap();
        assert!(Robot::new(3, 0, Heading::North, grid.clone()).is_err());
        assert!(Robot::new(0, -1, Heading::North, grid.clone()).is_err());
        assert!(Robot::new(1, 1, Heading::North, grid).is_err());
    }

    #[test]
    fn accepted_moves_bounded_by_grid_area() {
        // On a 2x2 grid no run can accept more than 4 moves
        let mut robot = Robot::new(0, 0, Heading::North, open_grid(1)).unwrap();
        let accepted = robot.follow("MRMRMRMRMRMR");
        let moves = robot.trail().len();
        assert!(moves < 4);
        assert!(accepted < 12);
    }
}
