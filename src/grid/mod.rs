//! Logical grid structs and utilities.

use anyhow::{anyhow, Error};
use nalgebra::Vector2;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod standard_grids;

/// An integer location on a [`TileGrid`]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct IntLocation {
    /// Row - increases downwards
    pub row: i32,
    /// Column - increases to the right
    pub col: i32,
}

impl IntLocation {
    /// Create a new IntLocation
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// One cell of a [`TileGrid`].
///
/// The discriminants are the characters used in maze layouts.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Tile {
    /// Floor that Pacman may occupy
    Open = b'0',
    /// Impassable
    Wall = b'1',
}

impl Tile {
    /// Whether Pacman may occupy this tile
    pub fn walkable(&self) -> bool {
        *self == Tile::Open
    }
}

/// Enum for direction values.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Direction {
    /// Up, or +y in world space
    Up,
    /// Left, or -x in world space
    Left,
    /// Down, or -y in world space
    Down,
    /// Right, or +x in world space
    Right,
}

impl Direction {
    /// Get a list of all directions
    pub fn get_all() -> [Self; 4] {
        [Self::Up, Self::Left, Self::Down, Self::Right]
    }

    /// Unit displacement in world space, where y increases upwards
    pub fn world_delta(&self) -> Vector2<f32> {
        match self {
            Direction::Up => Vector2::new(0.0, 1.0),
            Direction::Left => Vector2::new(-1.0, 0.0),
            Direction::Down => Vector2::new(0.0, -1.0),
            Direction::Right => Vector2::new(1.0, 0.0),
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Ok(Direction::Up),
            "left" | "l" => Ok(Direction::Left),
            "down" | "d" => Ok(Direction::Down),
            "right" | "r" => Ok(Direction::Right),
            _ => Err(anyhow!("Unknown direction '{s}'")),
        }
    }
}

/// An immutable 2D grid of [`Tile`]s
///
/// Rows are stored top to bottom, so row 0 is the top of the maze.
/// The dimensions are fixed when the grid is created.
///
/// # Examples
///
/// ```
/// use pacwalk::grid::{IntLocation, Tile, TileGrid};
///
/// let grid = TileGrid::try_from(&["111", "101", "111"][..]).unwrap();
/// assert_eq!(grid.at(&IntLocation::new(1, 1)), Some(Tile::Open));
/// assert_eq!(grid.at(&IntLocation::new(3, 1)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

impl TryFrom<&[&str]> for TileGrid {
    type Error = Error;

    fn try_from(layout: &[&str]) -> Result<Self, Self::Error> {
        let rows = layout.len();
        if rows == 0 {
            return Err(anyhow!("Grid has no rows"));
        }
        let cols = layout[0].len();
        if cols == 0 {
            return Err(anyhow!("Grid has no columns"));
        }

        let mut tiles = Vec::with_capacity(rows * cols);
        for (row, line) in layout.iter().enumerate() {
            if line.len() != cols {
                return Err(anyhow!(
                    "Row {} has width {}, expected {}",
                    row,
                    line.len(),
                    cols
                ));
            }
            for (col, byte) in line.bytes().enumerate() {
                let tile = Tile::try_from(byte).map_err(|_| {
                    anyhow!(
                        "Invalid tile '{}' at ({}, {})",
                        char::from(byte),
                        row,
                        col
                    )
                })?;
                tiles.push(tile);
            }
        }

        if tiles.iter().all(|t| !t.walkable()) {
            return Err(Error::msg("No walkable spaces"));
        }

        Ok(Self { rows, cols, tiles })
    }
}

impl TileGrid {
    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, p: &IntLocation) -> Option<usize> {
        if p.row < 0 || p.col < 0 {
            return None;
        }
        let (row, col) = (p.row as usize, p.col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    /// Returns the tile at the given position, or `None` if the position is out of bounds.
    pub fn at(&self, p: &IntLocation) -> Option<Tile> {
        self.index(p).map(|i| self.tiles[i])
    }

    /// Returns whether there is a wall at a given position
    ///
    /// Out of bounds positions count as walls.
    ///
    /// # Examples
    ///
    /// ```
    /// use pacwalk::grid::IntLocation;
    /// use pacwalk::grid::standard_grids::StandardGrid;
    ///
    /// let grid = StandardGrid::Maze.get_grid();
    /// assert_eq!(grid.wall_at(&IntLocation::new(0, 0)), true);
    /// assert_eq!(grid.wall_at(&IntLocation::new(1, 1)), false);
    /// assert_eq!(grid.wall_at(&IntLocation::new(-1, 1)), true);
    /// assert_eq!(grid.wall_at(&IntLocation::new(16, 1)), true);
    /// ```
    pub fn wall_at(&self, p: &IntLocation) -> bool {
        self.at(p).map_or(true, |tile| !tile.walkable())
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.tiles.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for tile in row {
                write!(f, "{}", char::from(u8::from(*tile)))?;
            }
        }
        Ok(())
    }
}
