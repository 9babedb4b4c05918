//! Logical grid structs and utilities.

use anyhow::{anyhow, Error};
use nalgebra::{Point2, Vector2};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Enum for the four compass headings.
///
/// Discriminants run clockwise starting from North, so the discriminant
/// indexes the turn and unit vector tables directly.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Heading {
    /// Towards positive y
    North = 0,
    /// Towards positive x
    East = 1,
    /// Towards negative y
    South = 2,
    /// Towards negative x
    West = 3,
}

/// Heading after a clockwise quarter turn, indexed by discriminant
const CLOCKWISE: [Heading; 4] = [Heading::East, Heading::South, Heading::West, Heading::North];
/// Heading after a counter-clockwise quarter turn, indexed by discriminant
const COUNTER_CLOCKWISE: [Heading; 4] =
    [Heading::West, Heading::North, Heading::East, Heading::South];
/// Unit move vectors as (x, y), indexed by discriminant
const UNIT_VECTORS: [[i32; 2]; 4] = [[0, 1], [1, 0], [0, -1], [-1, 0]];

impl Heading {
    /// Returns the heading after a 90 degree clockwise turn.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridbot::grid::Heading;
    ///
    /// assert_eq!(Heading::North.right(), Heading::East);
    /// assert_eq!(Heading::West.right(), Heading::North);
    /// ```
    pub fn right(self) -> Heading {
        CLOCKWISE[u8::from(self) as usize]
    }

    /// Returns the heading after a 90 degree counter-clockwise turn.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridbot::grid::Heading;
    ///
    /// assert_eq!(Heading::North.left(), Heading::West);
    /// assert_eq!(Heading::East.left(), Heading::North);
    /// ```
    pub fn left(self) -> Heading {
        COUNTER_CLOCKWISE[u8::from(self) as usize]
    }

    /// Returns the unit vector for one forward step in this heading.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridbot::grid::Heading;
    /// use nalgebra::Vector2;
    ///
    /// assert_eq!(Heading::North.vector(), Vector2::new(0, 1));
    /// assert_eq!(Heading::South.vector(), Vector2::new(0, -1));
    /// ```
    pub fn vector(self) -> Vector2<i32> {
        let [x, y] = UNIT_VECTORS[u8::from(self) as usize];
        Vector2::new(x, y)
    }
}

impl TryFrom<char> for Heading {
    type Error = Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'N' => Ok(Heading::North),
            'E' => Ok(Heading::East),
            'S' => Ok(Heading::South),
            'W' => Ok(Heading::West),
            _ => Err(anyhow!("unrecognized heading character {c:?}")),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        };
        write!(f, "{}", c)
    }
}

/// A bounded rectangular grid with statically blocked cells ("particles").
///
/// The grid always includes the origin `(0, 0)` as its bottom-left cell;
/// construction takes the top-right corner, so a corner of `(m, n)` yields
/// `m + 1` columns and `n + 1` rows. Immutable once constructed.
///
/// # Examples
///
/// ```
/// use gridbot::grid::Grid;
/// use nalgebra::Point2;
///
/// let grid = Grid::new(5, 5, vec![Point2::new(2, 2)]).unwrap();
/// assert!(grid.is_valid(Point2::new(0, 0)));
/// assert!(!grid.is_valid(Point2::new(2, 2)));
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    rows: i32,
    cols: i32,
    obstacles: Vec<Point2<i32>>,
}

impl Grid {
    /// Creates a grid from its top-right corner `(m, n)` and a list of
    /// blocked cells. Duplicate obstacles are harmless.
    ///
    /// Fails if either corner coordinate is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridbot::grid::Grid;
    ///
    /// let grid = Grid::new(5, 3, vec![]).unwrap();
    /// assert_eq!(grid.cols(), 6);
    /// assert_eq!(grid.rows(), 4);
    ///
    /// assert!(Grid::new(-1, 3, vec![]).is_err());
    /// ```
    pub fn new(
        top_right_x: i32,
        top_right_y: i32,
        obstacles: Vec<Point2<i32>>,
    ) -> Result<Self, Error> {
        if top_right_x < 0 || top_right_y < 0 {
            return Err(anyhow!(
                "top-right corner ({}, {}) has a negative coordinate",
                top_right_x,
                top_right_y
            ));
        }
        Ok(Grid {
            rows: top_right_y + 1,
            cols: top_right_x + 1,
            obstacles,
        })
    }

    /// Returns whether the given cell can be occupied: in bounds and not
    /// an obstacle. Pure function of the grid and the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridbot::grid::Grid;
    /// use nalgebra::Point2;
    ///
    /// let grid = Grid::new(2, 2, vec![Point2::new(1, 0)]).unwrap();
    /// assert!(grid.is_valid(Point2::new(2, 2)));
    /// assert!(!grid.is_valid(Point2::new(3, 0)));
    /// assert!(!grid.is_valid(Point2::new(0, -1)));
    /// assert!(!grid.is_valid(Point2::new(1, 0)));
    /// ```
    pub fn is_valid(&self, p: Point2<i32>) -> bool {
        if p.x < 0 || p.x >= self.cols || p.y < 0 || p.y >= self.rows {
            return false;
        }
        !self.obstacles.contains(&p)
    }

    /// Returns the number of valid y-values.
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Returns the number of valid x-values.
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Returns the blocked cells.
    pub fn obstacles(&self) -> &[Point2<i32>] {
        &self.obstacles
    }
}
