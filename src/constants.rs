//! Provides constants for the library.

/// Side length of one maze tile, in world units
pub const TILE_SIZE: f32 = 40.0;
/// Added to a world x coordinate before dividing by [`TILE_SIZE`] to get a column
pub const ORIGIN_OFFSET_X: f32 = 340.0;
/// A world y coordinate is subtracted from this before dividing by [`TILE_SIZE`] to get a row
pub const ORIGIN_OFFSET_Y: f32 = 300.0;
/// Radius of Pacman used for collision sampling
///
/// Slightly less than half of [`TILE_SIZE`], so a Pacman centered in a tile fits inside it.
pub const PACMAN_RADIUS: f32 = 19.9;
/// Distance Pacman travels for one key press
pub const STEP: f32 = 20.0;
/// Where Pacman spawns on the standard maze
pub const PACMAN_START: (f32, f32) = (-40.0, 0.0);
/// Lower left corner of the box Pacman is clamped into
pub const CLAMP_MIN: (f32, f32) = (-280.0, -280.0);
/// Upper right corner of the box Pacman is clamped into
pub const CLAMP_MAX: (f32, f32) = (280.0, 240.0);

/// Weight of the summative average in the overall grade
pub const SUMMATIVE_WEIGHT: f64 = 0.6;
/// Weight of the formative average in the overall grade
pub const FORMATIVE_WEIGHT: f64 = 0.4;
/// Decimal places kept when rounding a grade ratio
pub const GRADE_PRECISION: u32 = 4;

/// Subject of the built-in grade record
pub const DEFAULT_SUBJECT: &str = "Bible";
/// Formative (earned, possible) points of the built-in grade record
pub const DEFAULT_FORMATIVE: (u32, u32) = (140, 146);
/// Summative (earned, possible) points of the built-in grade record
pub const DEFAULT_SUMMATIVE: (u32, u32) = (104, 107);
