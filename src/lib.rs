#![warn(missing_docs)]
//! Simulation of a single robot driving around a bounded rectangular grid.
//!
//! A [`grid::Grid`] describes the rectangle and its blocked cells, and a
//! [`robot::Robot`] walks it one command at a time, refusing any move that
//! would leave the grid, hit a blocked cell, or re-enter a cell it has
//! already vacated.

pub mod grid;
pub mod robot;
