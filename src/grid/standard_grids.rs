#![cfg_attr(rustfmt, rustfmt_skip)]
//! A set of pre-made general purpose grids

use crate::constants::PACMAN_START;
use crate::grid::TileGrid;
use anyhow::{anyhow, Error};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The built-in layouts
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandardGrid {
    /// The Pacman maze
    #[default]
    Maze,
    /// Walls everywhere except one tile
    Blank,
    /// A walled border around an open field
    Open,
}

impl StandardGrid {
    /// Get a list of all available grids
    pub fn get_all() -> [Self; 3] {
        [Self::Maze, Self::Blank, Self::Open]
    }

    /// The rows of the layout, `1` for walls and `0` for open tiles
    pub fn layout(&self) -> &'static [&'static str] {
        match self {
            Self::Maze => &GRID_MAZE,
            Self::Blank => &GRID_BLANK,
            Self::Open => &GRID_OPEN,
        }
    }

    /// Get the [`TileGrid`] associated with this enum
    ///
    /// ```
    /// use pacwalk::grid::standard_grids::StandardGrid;
    ///
    /// let grid = StandardGrid::Open.get_grid();
    /// assert_eq!((grid.rows(), grid.cols()), (16, 17));
    /// ```
    pub fn get_grid(&self) -> TileGrid {
        TileGrid::try_from(self.layout()).expect("standard grid layouts are valid")
    }

    /// Get the default Pacman spawn point in world coordinates
    pub fn get_default_start(&self) -> Point2<f32> {
        match self {
            Self::Maze => Point2::new(PACMAN_START.0, PACMAN_START.1),
            // center of tile (1, 1)
            Self::Blank => Point2::new(-280.0, 240.0),
            Self::Open => Point2::new(0.0, 0.0),
        }
    }
}

impl FromStr for StandardGrid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "maze" => Ok(Self::Maze),
            "blank" => Ok(Self::Blank),
            "open" => Ok(Self::Open),
            _ => Err(anyhow!("Unknown grid '{s}', expected maze, blank or open")),
        }
    }
}

/// The Pacman maze, top row first
pub const GRID_MAZE: [&str; 16] = [
    "11111111111111111", // 0
    "10000001000000001",
    "10111101001111101",
    "10100000000000101",
    "10101111111000101",
    "10001000001000001", // 5
    "11101010101011111",
    "10000010101000001",
    "10111011101110111",
    "10000000000000001",
    "10111101101111101", // 10
    "10000001000000001",
    "11101011101011111",
    "10001001001000001",
    "10000000000000001",
    "11111111111111111", // 15
//   |    |    |    |
//   0    5    10   15
];

/// A (mostly) blank grid - (1, 1) is walkable
pub const GRID_BLANK: [&str; 16] = [
    "11111111111111111",
    "10111111111111111",
    "11111111111111111",
    "11111111111111111",
    "11111111111111111",
    "11111111111111111",
    "11111111111111111",
    "11111111111111111",
    "11111111111111111",
    "11111111111111111",
    "11111111111111111",
    "11111111111111111",
    "11111111111111111",
    "11111111111111111",
    "11111111111111111",
    "11111111111111111",
];

/// A grid where everything inside the outer wall is walkable
pub const GRID_OPEN: [&str; 16] = [
    "11111111111111111",
    "10000000000000001",
    "10000000000000001",
    "10000000000000001",
    "10000000000000001",
    "10000000000000001",
    "10000000000000001",
    "10000000000000001",
    "10000000000000001",
    "10000000000000001",
    "10000000000000001",
    "10000000000000001",
    "10000000000000001",
    "10000000000000001",
    "10000000000000001",
    "11111111111111111",
];
