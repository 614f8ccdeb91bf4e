use crate::{Cost, Error, GridError, Point, Result};

mod a_star;
pub use a_star::a_star_search;

use std::cmp::Ordering;

/// The state of a single Tile on the Grid.
///
/// All integer types implement this Trait with `0` meaning open and any other value meaning
/// blocked. For `bool` Grids, `true` marks a blocked Tile.
pub trait Tile: Copy {
	/// Returns `true` if the Tile can be walked across.
	fn is_open(self) -> bool;
}

macro_rules! impl_tile {
	($($type:ty),+) => {$(
		impl Tile for $type {
			fn is_open(self) -> bool {
				self == 0
			}
		}
	)+}
}

impl_tile!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl Tile for bool {
	fn is_open(self) -> bool {
		!self
	}
}

/// A validated, read-only view of a rectangular Grid.
///
/// The view borrows the rows of the caller and is only meant to live for the duration of
/// a query. Since it never changes the Tiles, any number of searches can share one Grid.
///
/// ```
/// # use grid_astar::{Grid, Error, GridError};
/// let rows = vec![vec![0, 1, 0], vec![0, 0, 0]];
/// let grid = Grid::new(&rows)?;
///
/// assert_eq!(grid.size(), (3, 2));
/// assert!(grid.in_bounds((2, 1)));
/// assert_eq!(grid.is_passable((1, 0)), Ok(false));
///
/// let ragged = vec![vec![0, 0, 0], vec![0, 0]];
/// assert_eq!(
/// 	Grid::new(&ragged).unwrap_err(),
/// 	Error::InvalidGrid(GridError::Ragged { row: 1, expected: 3, found: 2 }),
/// );
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Grid<'a, T> {
	rows: Vec<&'a [T]>,
	width: usize,
}

impl<'a, T: Tile> Grid<'a, T> {
	/// Checks that `rows` form a non-empty rectangle and creates a view on them.
	pub fn new<R: AsRef<[T]>>(rows: &'a [R]) -> Result<Grid<'a, T>> {
		let width = rows.first().ok_or(GridError::NoRows)?.as_ref().len();
		if width == 0 {
			return Err(GridError::NoColumns.into());
		}

		let mut view = Vec::with_capacity(rows.len());
		for (row, cells) in rows.iter().enumerate() {
			let cells = cells.as_ref();
			if cells.len() != width {
				return Err(GridError::Ragged {
					row,
					expected: width,
					found: cells.len(),
				}
				.into());
			}
			view.push(cells);
		}

		Ok(Grid { rows: view, width })
	}

	/// The number of columns
	pub fn width(&self) -> usize {
		self.width
	}

	/// The number of rows
	pub fn height(&self) -> usize {
		self.rows.len()
	}

	/// `(width, height)`
	pub fn size(&self) -> (usize, usize) {
		(self.width(), self.height())
	}

	/// Returns `true` if `point` lies on the Grid.
	pub fn in_bounds(&self, (x, y): Point) -> bool {
		x < self.width && y < self.rows.len()
	}

	/// The Tile at `point`, or `None` if `point` is outside of the Grid.
	pub fn get(&self, (x, y): Point) -> Option<T> {
		self.rows.get(y)?.get(x).copied()
	}

	/// Returns whether the Tile at `point` is open.
	///
	/// Fails with [`Error::InvalidCell`] if `point` is outside of the Grid.
	pub fn is_passable(&self, point: Point) -> Result<bool> {
		self.check_bounds(point)?;
		Ok(self.is_open(point))
	}

	/// Fails with [`Error::InvalidCell`] if `point` is outside of the Grid.
	pub fn check_bounds(&self, point: Point) -> Result<()> {
		if self.in_bounds(point) {
			Ok(())
		} else {
			Err(Error::InvalidCell {
				point,
				width: self.width(),
				height: self.height(),
			})
		}
	}

	/// in bounds and open
	pub(crate) fn is_open(&self, point: Point) -> bool {
		self.get(point).map_or(false, Tile::is_open)
	}
}

/// Returns `true` if `point` lies within the first row's width and the number of rows.
///
/// Unlike [`Grid::in_bounds`], this does not validate `grid` itself.
pub fn in_bounds<R: AsRef<[T]>, T>(grid: &[R], (x, y): Point) -> bool {
	grid.first().map_or(false, |row| x < row.as_ref().len()) && y < grid.len()
}

/// Validates `grid` and returns whether the Tile at `point` is open.
///
/// See [`Grid::new`] and [`Grid::is_passable`] for the possible Errors.
pub fn is_passable<R: AsRef<[T]>, T: Tile>(grid: &[R], point: Point) -> Result<bool> {
	Grid::new(grid)?.is_passable(point)
}

/// An entry in the frontier of a search.
///
/// Entries are ordered so that a max-heap pops the smallest `estimate` first. Equal estimates
/// pop in the order they were pushed (smaller `seq` first).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FrontierEntry {
	pub point: Point,
	pub cost: Cost,
	pub estimate: Cost,
	pub seq: usize,
}

impl PartialOrd for FrontierEntry {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}
impl Ord for FrontierEntry {
	fn cmp(&self, rhs: &Self) -> Ordering {
		rhs.estimate
			.cmp(&self.estimate)
			.then_with(|| rhs.seq.cmp(&self.seq))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::BinaryHeap;

	#[test]
	fn rejects_malformed_grids() {
		let empty: [[u8; 0]; 0] = [];
		assert_eq!(
			Grid::new(&empty).unwrap_err(),
			Error::InvalidGrid(GridError::NoRows)
		);

		let no_columns: [[u8; 0]; 3] = [[], [], []];
		assert_eq!(
			Grid::new(&no_columns).unwrap_err(),
			Error::InvalidGrid(GridError::NoColumns)
		);

		let ragged = vec![vec![0, 0], vec![0, 0], vec![0, 0, 0]];
		assert_eq!(
			Grid::new(&ragged).unwrap_err(),
			Error::InvalidGrid(GridError::Ragged {
				row: 2,
				expected: 2,
				found: 3
			})
		);
	}

	#[test]
	fn bounds() {
		let rows = [[0u8; 4]; 2];
		let grid = Grid::new(&rows).unwrap();

		assert_eq!(grid.size(), (4, 2));
		assert!(grid.in_bounds((0, 0)));
		assert!(grid.in_bounds((3, 1)));
		assert!(!grid.in_bounds((4, 0)));
		assert!(!grid.in_bounds((0, 2)));

		assert_eq!(
			grid.is_passable((4, 1)),
			Err(Error::InvalidCell {
				point: (4, 1),
				width: 4,
				height: 2
			})
		);
	}

	#[test]
	fn passable() {
		let rows = [[0, 2, 0], [-1, 0, 0]];
		let grid = Grid::new(&rows).unwrap();

		assert_eq!(grid.is_passable((0, 0)), Ok(true));
		assert_eq!(grid.is_passable((1, 0)), Ok(false));
		assert_eq!(grid.is_passable((0, 1)), Ok(false));
		assert_eq!(grid.get((1, 0)), Some(2));
		assert_eq!(grid.get((3, 0)), None);
		assert!(!grid.is_open((3, 0)));
	}

	#[test]
	fn bool_tiles() {
		let rows = [[false, true], [false, false]];
		let grid = Grid::new(&rows).unwrap();

		assert_eq!(grid.is_passable((0, 0)), Ok(true));
		assert_eq!(grid.is_passable((1, 0)), Ok(false));
	}

	#[test]
	fn free_functions() {
		let rows = vec![vec![0, 1], vec![0, 0]];

		assert!(in_bounds(&rows, (1, 1)));
		assert!(!in_bounds(&rows, (2, 0)));
		assert!(!in_bounds::<Vec<u8>, u8>(&[], (0, 0)));

		assert_eq!(is_passable(&rows, (1, 0)), Ok(false));
		assert_eq!(is_passable(&rows, (1, 1)), Ok(true));
		assert!(is_passable(&rows, (0, 2)).is_err());
	}

	#[test]
	fn frontier_order() {
		let entry = |point, estimate, seq| FrontierEntry {
			point,
			cost: 0,
			estimate,
			seq,
		};
		let mut heap = BinaryHeap::new();
		heap.push(entry((0, 0), 4, 0));
		heap.push(entry((1, 0), 2, 1));
		heap.push(entry((2, 0), 4, 2));
		heap.push(entry((3, 0), 2, 3));

		let order: Vec<Point> = std::iter::from_fn(|| heap.pop()).map(|e| e.point).collect();
		assert_eq!(order, vec![(1, 0), (3, 0), (0, 0), (2, 0)]);
	}
}
