//! Continuous-space movement on top of a [`TileGrid`].
//!
//! World coordinates put the origin near the middle of the maze with y increasing upwards,
//! while grid rows increase downwards from the top left corner.

use crate::constants::{
    CLAMP_MAX, CLAMP_MIN, ORIGIN_OFFSET_X, ORIGIN_OFFSET_Y, PACMAN_RADIUS, STEP, TILE_SIZE,
};
use crate::grid::{Direction, IntLocation, TileGrid};
use anyhow::{anyhow, Error};
use log::{debug, trace};
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Geometry used to map world coordinates onto a [`TileGrid`] and to move Pacman
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Side length of one tile, in world units
    pub tile_size: f32,
    /// `x` is added to world x, world y is subtracted from `y`, before dividing by `tile_size`
    pub origin_offset: Vector2<f32>,
    /// Distance from Pacman's center to each sampled collision point
    pub radius: f32,
    /// Distance moved per step
    pub step: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            origin_offset: Vector2::new(ORIGIN_OFFSET_X, ORIGIN_OFFSET_Y),
            radius: PACMAN_RADIUS,
            step: STEP,
        }
    }
}

impl MovementConfig {
    /// Check that the geometry can be used to map points and move
    ///
    /// Tile size and step must be positive and the radius must not be negative.
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            return Err(anyhow!("Tile size must be positive, got {}", self.tile_size));
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(anyhow!("Step must be positive, got {}", self.step));
        }
        if !(self.radius.is_finite() && self.radius >= 0.0) {
            return Err(anyhow!("Radius must not be negative, got {}", self.radius));
        }
        if !(self.origin_offset.x.is_finite() && self.origin_offset.y.is_finite()) {
            return Err(Error::msg("Origin offset must be finite"));
        }
        Ok(())
    }

    /// Find the grid location containing a world point
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::Point2;
    /// use pacwalk::grid::IntLocation;
    /// use pacwalk::movement::MovementConfig;
    ///
    /// let config = MovementConfig::default();
    /// assert_eq!(config.world_to_grid(Point2::new(-40.0, 0.0)), IntLocation::new(7, 7));
    /// assert_eq!(config.world_to_grid(Point2::new(-340.0, 300.0)), IntLocation::new(0, 0));
    /// assert_eq!(config.world_to_grid(Point2::new(-341.0, 301.0)), IntLocation::new(-1, -1));
    /// ```
    pub fn world_to_grid(&self, p: Point2<f32>) -> IntLocation {
        let col = ((p.x + self.origin_offset.x) / self.tile_size).floor();
        let row = ((self.origin_offset.y - p.y) / self.tile_size).floor();
        IntLocation::new(row as i32, col as i32)
    }

    /// The world point at the center of a grid location
    pub fn grid_to_world(&self, loc: IntLocation) -> Point2<f32> {
        let half = self.tile_size / 2.0;
        Point2::new(
            loc.col as f32 * self.tile_size - self.origin_offset.x + half,
            self.origin_offset.y - loc.row as f32 * self.tile_size - half,
        )
    }

    /// Points on Pacman's boundary that are checked for collisions, in the order
    /// right, left, up, down
    pub fn sample_points(&self, center: Point2<f32>) -> [Point2<f32>; 4] {
        [
            center + Vector2::new(self.radius, 0.0),
            center + Vector2::new(-self.radius, 0.0),
            center + Vector2::new(0.0, self.radius),
            center + Vector2::new(0.0, -self.radius),
        ]
    }
}

/// Whether Pacman, centered at `new_pos`, lies entirely on open tiles
///
/// Every sampled boundary point must land in bounds on an open tile.
///
/// # Examples
///
/// ```
/// use nalgebra::Point2;
/// use pacwalk::grid::standard_grids::StandardGrid;
/// use pacwalk::movement::{can_move, MovementConfig};
///
/// let grid = StandardGrid::Maze.get_grid();
/// let config = MovementConfig::default();
/// assert!(can_move(&grid, &config, Point2::new(-40.0, 20.0)));
/// assert!(!can_move(&grid, &config, Point2::new(-60.0, 0.0)));
/// ```
pub fn can_move(grid: &TileGrid, config: &MovementConfig, new_pos: Point2<f32>) -> bool {
    config.sample_points(new_pos).into_iter().all(|sample| {
        let loc = config.world_to_grid(sample);
        let open = !grid.wall_at(&loc);
        trace!(
            "sample ({}, {}) -> row {}, col {}: {}",
            sample.x,
            sample.y,
            loc.row,
            loc.col,
            if open { "open" } else { "blocked" }
        );
        open
    })
}

/// An axis-aligned box that Pacman's center is kept inside
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClampBounds {
    /// Lower left corner
    pub min: Point2<f32>,
    /// Upper right corner
    pub max: Point2<f32>,
}

impl Default for ClampBounds {
    fn default() -> Self {
        Self {
            min: Point2::new(CLAMP_MIN.0, CLAMP_MIN.1),
            max: Point2::new(CLAMP_MAX.0, CLAMP_MAX.1),
        }
    }
}

impl ClampBounds {
    /// Move a point to the nearest point inside the box
    pub fn clamp(&self, p: Point2<f32>) -> Point2<f32> {
        Point2::new(
            p.x.clamp(self.min.x, self.max.x),
            p.y.clamp(self.min.y, self.max.y),
        )
    }
}

/// Owns Pacman's position and only applies moves that [`can_move`] allows
#[derive(Clone, Debug)]
pub struct MovementController {
    grid: TileGrid,
    config: MovementConfig,
    position: Point2<f32>,
    clamp: Option<ClampBounds>,
}

impl MovementController {
    /// Create a controller with Pacman at `start`
    ///
    /// Fails if `config` is invalid or Pacman would not fit at `start`.
    pub fn new(grid: TileGrid, config: MovementConfig, start: Point2<f32>) -> Result<Self, Error> {
        config.validate()?;
        if !can_move(&grid, &config, start) {
            return Err(anyhow!(
                "Start position ({}, {}) is not on open tiles",
                start.x,
                start.y
            ));
        }
        Ok(Self {
            grid,
            config,
            position: start,
            clamp: None,
        })
    }

    /// Keep Pacman inside `bounds` after every move
    pub fn with_clamp(mut self, bounds: ClampBounds) -> Self {
        self.clamp = Some(bounds);
        self
    }

    /// Pacman's current position in world coordinates
    pub fn position(&self) -> Point2<f32> {
        self.position
    }

    /// The grid location containing Pacman's center
    pub fn tile(&self) -> IntLocation {
        self.config.world_to_grid(self.position)
    }

    /// Attempt one step in `direction`, returning whether Pacman moved
    pub fn try_move(&mut self, direction: Direction) -> bool {
        let candidate = self.position + direction.world_delta() * self.config.step;
        if !can_move(&self.grid, &self.config, candidate) {
            debug!(
                "rejected {:?} from ({}, {})",
                direction, self.position.x, self.position.y
            );
            return false;
        }
        self.position = match &self.clamp {
            Some(bounds) => bounds.clamp(candidate),
            None => candidate,
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::standard_grids::StandardGrid;
    use crate::grid::Tile;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn small_config() -> MovementConfig {
        MovementConfig {
            tile_size: 10.0,
            origin_offset: Vector2::new(0.0, 0.0),
            radius: 4.9,
            step: 5.0,
        }
    }

    #[test]
    fn tile_center_round_trip() {
        let config = MovementConfig::default();
        let grid = StandardGrid::Maze.get_grid();
        for row in 0..grid.rows() as i32 {
            for col in 0..grid.cols() as i32 {
                let loc = IntLocation::new(row, col);
                assert_eq!(config.world_to_grid(config.grid_to_world(loc)), loc);
            }
        }
    }

    #[test]
    fn mapping_formula_uses_floor() {
        let config = small_config();
        // y is inverted: positive world y lands above row 0
        assert_eq!(config.world_to_grid(Point2::new(0.0, 0.0)), IntLocation::new(0, 0));
        assert_eq!(config.world_to_grid(Point2::new(9.99, -9.99)), IntLocation::new(0, 0));
        assert_eq!(config.world_to_grid(Point2::new(-0.01, 0.0)), IntLocation::new(0, -1));
        assert_eq!(config.world_to_grid(Point2::new(0.0, 0.01)), IntLocation::new(-1, 0));
        assert_eq!(config.world_to_grid(Point2::new(25.0, -31.0)), IntLocation::new(3, 2));
    }

    #[test]
    fn sample_order() {
        let config = small_config();
        let [right, left, up, down] = config.sample_points(Point2::new(0.0, 0.0));
        assert_eq!(right, Point2::new(4.9, 0.0));
        assert_eq!(left, Point2::new(-4.9, 0.0));
        assert_eq!(up, Point2::new(0.0, 4.9));
        assert_eq!(down, Point2::new(0.0, -4.9));
    }

    #[test]
    fn interior_of_open_grid_is_always_legal() {
        let config = small_config();
        let grid = TileGrid::try_from(&["0000", "0000", "0000"][..]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            // more than one radius from every edge of the 40x30 field
            let x = rng.gen_range(4.95f32..35.05);
            let y = -rng.gen_range(4.95f32..25.05);
            assert!(can_move(&grid, &config, Point2::new(x, y)), "({x}, {y})");
        }
    }

    #[test]
    fn any_sample_on_a_wall_is_illegal() {
        let config = small_config();
        let grid = TileGrid::try_from(&["00000", "00000", "00100", "00000", "00000"][..]).unwrap();
        let wall = config.grid_to_world(IntLocation::new(2, 2));
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let center = Point2::new(
                wall.x + rng.gen_range(-10.0f32..10.0),
                wall.y + rng.gen_range(-10.0f32..10.0),
            );
            let hits_wall = config
                .sample_points(center)
                .iter()
                .any(|s| grid.at(&config.world_to_grid(*s)) == Some(Tile::Wall));
            if hits_wall {
                assert!(!can_move(&grid, &config, center));
            }
        }
    }

    #[test]
    fn out_of_bounds_samples_are_illegal() {
        let config = small_config();
        let grid = TileGrid::try_from(&["000", "000", "000"][..]).unwrap();
        // each one has exactly one sample poking out of the 30x30 field
        assert!(!can_move(&grid, &config, Point2::new(26.0, -15.0)));
        assert!(!can_move(&grid, &config, Point2::new(4.0, -15.0)));
        assert!(!can_move(&grid, &config, Point2::new(15.0, -4.0)));
        assert!(!can_move(&grid, &config, Point2::new(15.0, -26.0)));
        assert!(!can_move(&grid, &config, Point2::new(1000.0, 1000.0)));
        assert!(can_move(&grid, &config, Point2::new(15.0, -15.0)));
    }

    #[test]
    fn radius_fits_inside_one_tile() {
        let config = MovementConfig::default();
        let grid = StandardGrid::Blank.get_grid();
        let center = config.grid_to_world(IntLocation::new(1, 1));
        assert!(can_move(&grid, &config, center));
        for direction in Direction::get_all() {
            let nudged = center + direction.world_delta() * 0.2;
            assert!(!can_move(&grid, &config, nudged));
        }
    }

    #[test]
    fn maze_start_moves() {
        let grid = StandardGrid::Maze.get_grid();
        let start = StandardGrid::Maze.get_default_start();
        let mut controller =
            MovementController::new(grid, MovementConfig::default(), start).unwrap();
        assert_eq!(controller.tile(), IntLocation::new(7, 7));

        // walls to the left and right of (7, 7)
        assert!(!controller.try_move(Direction::Left));
        assert!(!controller.try_move(Direction::Right));
        assert_eq!(controller.position(), start);

        assert!(controller.try_move(Direction::Up));
        assert_eq!(controller.position(), Point2::new(-40.0, 20.0));
        assert!(controller.try_move(Direction::Up));
        assert_eq!(controller.tile(), IntLocation::new(6, 7));
        assert!(controller.try_move(Direction::Down));
        assert!(controller.try_move(Direction::Down));
        assert_eq!(controller.position(), start);
    }

    #[test]
    fn half_step_blocks_sideways_moves() {
        let grid = StandardGrid::Maze.get_grid();
        let mut controller = MovementController::new(
            grid,
            MovementConfig::default(),
            StandardGrid::Maze.get_default_start(),
        )
        .unwrap();
        // (-40, 20) straddles rows 6 and 7, so nothing beside it is entirely open
        assert!(controller.try_move(Direction::Up));
        assert!(!controller.try_move(Direction::Left));
        assert!(!controller.try_move(Direction::Right));
    }

    #[test]
    fn rejects_blocked_start() {
        let grid = StandardGrid::Maze.get_grid();
        let v = MovementController::new(grid, MovementConfig::default(), Point2::new(-320.0, 280.0));
        assert_eq!(
            format!("{}", v.unwrap_err()),
            "Start position (-320, 280) is not on open tiles"
        );
    }

    #[test]
    fn validation_rejects_bad_geometry() {
        assert!(MovementConfig::default().validate().is_ok());
        assert!(MovementConfig { radius: 0.0, ..small_config() }.validate().is_ok());

        let v = MovementConfig { tile_size: 0.0, ..small_config() }.validate();
        assert_eq!(format!("{}", v.unwrap_err()), "Tile size must be positive, got 0");
        let v = MovementConfig { tile_size: -10.0, ..small_config() }.validate();
        assert_eq!(format!("{}", v.unwrap_err()), "Tile size must be positive, got -10");
        let v = MovementConfig { step: 0.0, ..small_config() }.validate();
        assert_eq!(format!("{}", v.unwrap_err()), "Step must be positive, got 0");
        let v = MovementConfig { radius: -1.0, ..small_config() }.validate();
        assert_eq!(format!("{}", v.unwrap_err()), "Radius must not be negative, got -1");
        assert!(MovementConfig { tile_size: f32::NAN, ..small_config() }.validate().is_err());
        assert!(MovementConfig {
            origin_offset: Vector2::new(f32::INFINITY, 0.0),
            ..small_config()
        }
        .validate()
        .is_err());
    }

    #[test]
    fn zero_tile_size_is_not_a_controller() {
        // with a zero tile size every point would map to NaN and land on tile (0, 0)
        let grid = TileGrid::try_from(&["0"][..]).unwrap();
        let config = MovementConfig { tile_size: 0.0, ..small_config() };
        let v = MovementController::new(grid, config, Point2::new(1000.0, 1000.0));
        assert_eq!(format!("{}", v.unwrap_err()), "Tile size must be positive, got 0");
    }

    #[test]
    fn clamp_limits_position() {
        let config = small_config();
        let grid = TileGrid::try_from(&["0000", "0000", "0000", "0000"][..]).unwrap();
        let bounds = ClampBounds {
            min: Point2::new(5.0, -35.0),
            max: Point2::new(18.0, -5.0),
        };
        let mut controller = MovementController::new(grid, config, Point2::new(15.0, -15.0))
            .unwrap()
            .with_clamp(bounds);
        assert!(controller.try_move(Direction::Right));
        assert_eq!(controller.position(), Point2::new(18.0, -15.0));
    }

    #[test]
    fn default_clamp_box() {
        let bounds = ClampBounds::default();
        assert_eq!(bounds.clamp(Point2::new(300.0, 300.0)), Point2::new(280.0, 240.0));
        assert_eq!(bounds.clamp(Point2::new(-300.0, -300.0)), Point2::new(-280.0, -280.0));
        assert_eq!(bounds.clamp(Point2::new(1.0, 2.0)), Point2::new(1.0, 2.0));
    }
}
