use crate::Point;

use std::fmt;
use std::ops::Index;

/// a Type to represent the Cost of a Path, which is the number of steps it takes
pub type Cost = usize;

/// A Path on the Grid.
///
/// The first Point is always the start and the last is always the goal. Consecutive Points are
/// direct Neighbors, so the [`cost`](Path::cost) is the number of Points minus one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
	path: Vec<Point>,
}

impl Path {
	pub(crate) fn new(path: Vec<Point>) -> Path {
		debug_assert!(!path.is_empty(), "a Path has at least one Point");
		Path { path }
	}

	/// The number of steps from start to goal
	pub fn cost(&self) -> Cost {
		self.path.len() - 1
	}

	/// The number of Points, including start and goal
	pub fn len(&self) -> usize {
		self.path.len()
	}

	/// Always `false`, a Path contains at least its start.
	pub fn is_empty(&self) -> bool {
		self.path.is_empty()
	}

	/// The first Point
	pub fn start(&self) -> Point {
		self.path[0]
	}

	/// The last Point
	pub fn goal(&self) -> Point {
		self.path[self.path.len() - 1]
	}

	/// Returns `true` if the Path goes through `point`.
	pub fn contains(&self, point: Point) -> bool {
		self.path.contains(&point)
	}

	/// Returns an Iterator over the Path
	pub fn iter(&self) -> std::slice::Iter<'_, Point> {
		self.path.iter()
	}

	/// The Points of the Path as a slice
	pub fn as_slice(&self) -> &[Point] {
		&self.path
	}

	/// Consumes the Path and returns its Points
	pub fn into_vec(self) -> Vec<Point> {
		self.path
	}
}

impl Index<usize> for Path {
	type Output = Point;
	fn index(&self, index: usize) -> &Point {
		&self.path[index]
	}
}

impl IntoIterator for Path {
	type Item = Point;
	type IntoIter = std::vec::IntoIter<Point>;
	fn into_iter(self) -> Self::IntoIter {
		self.path.into_iter()
	}
}

impl<'a> IntoIterator for &'a Path {
	type Item = &'a Point;
	type IntoIter = std::slice::Iter<'a, Point>;
	fn into_iter(self) -> Self::IntoIter {
		self.path.iter()
	}
}

impl PartialEq<Vec<Point>> for Path {
	fn eq(&self, rhs: &Vec<Point>) -> bool {
		&self.path == rhs
	}
}

impl<'a> PartialEq<&'a [Point]> for Path {
	fn eq(&self, rhs: &&'a [Point]) -> bool {
		self.path.as_slice() == *rhs
	}
}

impl fmt::Display for Path {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {}]: ", self.cost())?;
		let (x, y) = self.start();
		write!(fmt, "({}, {})", x, y)?;
		for (x, y) in self.path.iter().skip(1) {
			write!(fmt, " -> ({}, {})", x, y)?;
		}
		Ok(())
	}
}
