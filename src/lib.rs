#![warn(missing_docs)]
//! Utilities for walking Pacman around a tile maze, and for predicting grades

pub mod constants;
pub mod grade;
pub mod grid;
pub mod movement;
pub mod settings;
