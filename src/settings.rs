//! Rarely changed options, loaded from a JSON file.

use crate::grade::GradeRecord;
use crate::grid::standard_grids::StandardGrid;
use crate::movement::{ClampBounds, MovementConfig};
use anyhow::{Context, Result};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Options for both tools
///
/// Every field is optional in the file; missing fields keep their defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// The grade record used by the grade checker
    pub grade: GradeRecord,
    /// Options for walking around the maze
    pub walk: WalkSettings,
}

/// Maze walking options
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkSettings {
    /// Which grid to walk on
    pub standard_grid: StandardGrid,
    /// Tile size, origin and Pacman geometry
    pub movement: MovementConfig,
    /// Spawn point, or the grid's default if absent
    pub start: Option<Point2<f32>>,
    /// Box Pacman is kept inside, if any
    pub clamp: Option<ClampBounds>,
}

impl Default for WalkSettings {
    fn default() -> Self {
        Self {
            standard_grid: StandardGrid::default(),
            movement: MovementConfig::default(),
            start: None,
            clamp: Some(ClampBounds::default()),
        }
    }
}

impl WalkSettings {
    /// The spawn point to use
    pub fn start(&self) -> Point2<f32> {
        self.start
            .unwrap_or_else(|| self.standard_grid.get_default_start())
    }
}

impl Settings {
    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid settings in {}", path.display()))
    }

    /// Parse settings from JSON text
    ///
    /// The movement geometry is checked with [`MovementConfig::validate`].
    pub fn from_json(text: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(text)?;
        settings.walk.movement.validate()?;
        Ok(settings)
    }
}
