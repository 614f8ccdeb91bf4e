#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find deterministic shortest Paths on a Grid.
//!
//! ## Introduction
//! Every query runs a full [A* search](https://en.wikipedia.org/wiki/A*_search_algorithm)
//! over a Grid of open and blocked Tiles. Agents move along the 4 cardinal directions with a
//! uniform Cost of 1 per step, which makes the Manhattan Distance an admissible and consistent
//! Heuristic. The returned Paths are therefore always as short as possible.
//!
//! When several Paths with the same Cost exist, the search always returns the same one:
//! Neighbors are visited in the fixed order up, down, left, right, and candidates with an equal
//! estimated Cost leave the frontier in the order they entered it.
//!
//! ## Examples
//! Finding a Path:
//! ```
//! use grid_astar::find_path;
//!
//! // 0 = open, anything else = blocked
//! let grid = [
//!     [0, 0, 0, 0, 0],
//!     [0, 1, 1, 1, 0],
//!     [0, 1, 0, 0, 0],
//!     [0, 1, 0, 1, 1],
//!     [0, 0, 0, 1, 0],
//! ];
//!
//! let start = (0, 0);
//! let goal = (2, 2);
//!
//! // find_path returns Ok(Some(Path)) on success
//! let path = find_path(&grid, start, goal)?.expect("goal is reachable");
//!
//! assert_eq!(path.start(), start);
//! assert_eq!(path.goal(), goal);
//! assert_eq!(path.cost(), 8);
//! # Ok::<(), grid_astar::Error>(())
//! ```
//! Points are `(x, y)` with `x` being the column and `y` the row, so the Tile at `(x, y)` is
//! `grid[y][x]`.
//!
//! An unreachable goal is not an Error. The search simply reports that no Path exists:
//! ```
//! # use grid_astar::find_path;
//! # let grid = [
//! #     [0, 0, 0, 0, 0],
//! #     [0, 1, 1, 1, 0],
//! #     [0, 1, 0, 0, 0],
//! #     [0, 1, 0, 1, 1],
//! #     [0, 0, 0, 1, 0],
//! # ];
//! let path = find_path(&grid, (0, 0), (4, 4))?;
//! assert!(path.is_none());
//! # Ok::<(), grid_astar::Error>(())
//! ```
//!
//! ### Replanning
//! The search holds no state between calls and never keeps a reference to the Grid. When the
//! environment changes, update the Grid and search again:
//! ```
//! # use grid_astar::find_path;
//! let mut grid = vec![vec![0u8; 5]; 5];
//!
//! let before = find_path(&grid, (0, 2), (4, 2))?.unwrap();
//!
//! grid[2][2] = 1;
//! let after = find_path(&grid, (0, 2), (4, 2))?.unwrap();
//!
//! assert!(!after.contains((2, 2)));
//! assert!(after.len() > before.len());
//! # Ok::<(), grid_astar::Error>(())
//! ```
//!
//! ### Errors
//! Malformed input is rejected before the search starts. Empty or ragged Grids produce
//! [`Error::InvalidGrid`] and endpoints outside of the Grid produce [`Error::InvalidCell`].
//! A start or goal that lies on a blocked Tile is a valid query without a Path and yields `None`.
//!
//! ### Configuration
//! [`find_path_with`] takes a [`SearchConfig`], which can put an upper bound on the number of
//! expanded Tiles:
//! ```
//! use grid_astar::{find_path_with, SearchConfig};
//!
//! let grid = vec![vec![0u8; 64]; 64];
//! let config = SearchConfig::with_budget(10);
//!
//! // the goal is too far away to be reached within the budget
//! let path = find_path_with(&grid, (0, 0), (63, 63), &config)?;
//! assert!(path.is_none());
//! # Ok::<(), grid_astar::Error>(())
//! ```

#[cfg(feature = "log")]
macro_rules! debug {
	($($arg:tt)*) => {
		log::debug!($($arg)*)
	};
}

#[cfg(not(feature = "log"))]
macro_rules! debug {
	($($arg:tt)*) => {
		if false {
			let _ = format!($($arg)*);
		}
	};
}

/// A shorthand for Points on the grid
pub type Point = (usize, usize);

/// A specialized [`HashMap`](hashbrown::HashMap) keyed by Points
pub(crate) type PointMap<V> = hashbrown::HashMap<Point, V>;

mod error;
pub use self::error::{Error, GridError, Result};

mod config;
pub use self::config::SearchConfig;

mod grid;
pub use self::grid::{a_star_search, in_bounds, is_passable, Grid, Tile};

mod path;
pub use self::path::{Cost, Path};

pub mod neighbors;

mod batch;
pub use self::batch::find_paths;

mod utils;

/// The most commonly used items of this crate
pub mod prelude {
	pub use crate::{
		find_path, find_path_with, find_paths,
		neighbors::{manhattan_distance, ManhattanNeighborhood, Neighborhood},
		Error, Grid, Path, Point, SearchConfig, Tile,
	};
}

use self::neighbors::ManhattanNeighborhood;

/// Finds the shortest Path from `start` to `goal` on `grid`.
///
/// `grid` is a list of rows. A Tile is open if [`Tile::is_open`] returns `true`, which for all
/// integer types means it is `0`. Movement is restricted to the 4 cardinal directions.
///
/// ## Returns
/// - `Ok(Some(path))` with `path` running from `start` to `goal` (both inclusive)
/// - `Ok(None)` if `goal` cannot be reached, including when `start` or `goal` are blocked
/// - `Err(Error::InvalidGrid)` if `grid` is empty or not rectangular
/// - `Err(Error::InvalidCell)` if `start` or `goal` are outside of `grid`
///
/// ## Examples
/// ```
/// use grid_astar::find_path;
///
/// let grid = [
///     [0, 1, 1, 1, 0],
///     [0, 0, 0, 0, 0],
/// ];
///
/// let path = find_path(&grid, (0, 0), (4, 0))?.unwrap();
/// assert_eq!(path, vec![(0, 0), (0, 1), (1, 1), (2, 1), (3, 1), (4, 1), (4, 0)]);
/// # Ok::<(), grid_astar::Error>(())
/// ```
pub fn find_path<R: AsRef<[T]>, T: Tile>(
	grid: &[R],
	start: Point,
	goal: Point,
) -> Result<Option<Path>> {
	find_path_with(grid, start, goal, &SearchConfig::default())
}

/// Same as [`find_path`], but with an explicit [`SearchConfig`].
pub fn find_path_with<R: AsRef<[T]>, T: Tile>(
	grid: &[R],
	start: Point,
	goal: Point,
	config: &SearchConfig,
) -> Result<Option<Path>> {
	let grid = Grid::new(grid)?;
	let neighborhood = ManhattanNeighborhood::new(grid.width(), grid.height());
	a_star_search(&grid, &neighborhood, start, goal, config)
}
