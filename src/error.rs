use crate::Point;

use thiserror::Error;

/// Convenient result alias for all fallible operations of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors for queries that cannot be answered at all.
///
/// Note that an unreachable goal is **not** an Error. Searches report that case as `Ok(None)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
	/// The Grid is empty or not rectangular. The search never started.
	#[error("invalid grid: {0}")]
	InvalidGrid(#[from] GridError),

	/// A Point lies outside of the Grid.
	#[error("cell {point:?} is outside of the {width}x{height} grid")]
	InvalidCell {
		/// the offending Point
		point: Point,
		/// the width of the Grid
		width: usize,
		/// the height of the Grid
		height: usize,
	},
}

/// The reason why a Grid was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GridError {
	/// The Grid has no rows.
	#[error("grid has no rows")]
	NoRows,

	/// The rows of the Grid have no Tiles.
	#[error("grid has no columns")]
	NoColumns,

	/// A row has a different length than the first one.
	#[error("row {row} has {found} cells, expected {expected}")]
	Ragged {
		/// index of the offending row
		row: usize,
		/// the length of the first row
		expected: usize,
		/// the length of the offending row
		found: usize,
	},
}
