//! Neighborhoods and Heuristics for moving along the Grid

use crate::{
	utils::{get_in_dir, Dir},
	Cost, Point,
};
use std::fmt::Debug;

/// Defines how a Path can move along the Grid.
///
/// It provides a function to query all neighboring Points of an existing Point and a Heuristic
/// for how many steps it might take to reach a goal from a Point.
///
/// The search expects every step to cost `1`. For the resulting Paths to be optimal, the
/// Heuristic must never return more than the actual number of steps.
pub trait Neighborhood: Clone + Debug {
	/// Appends the Neighbors of `point` to `target`.
	///
	/// Note that it is not necessary to check weather the Tile at a Point is blocked or not.
	/// That check is done later.
	fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>);
	/// Gives a Heuristic for how many steps it takes to reach `goal` from `point`.
	///
	/// If there is no proper way of calculation how long it takes, simply return 0. This will
	/// increase the time it takes to calculate the Path, but at least it will always be correct.
	fn heuristic(&self, point: Point, goal: Point) -> Cost;
}

/// A Neighborhood for Agents moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood),
/// Manhattan Metric or [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
///
/// Neighbors are always listed in the order up, down, left, right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManhattanNeighborhood {
	width: usize,
	height: usize,
}

impl ManhattanNeighborhood {
	/// Creates a new ManhattanNeighborhood.
	///
	/// `width` and `height` are the size of the Grid to move on.
	pub fn new(width: usize, height: usize) -> ManhattanNeighborhood {
		ManhattanNeighborhood { width, height }
	}
}

impl Neighborhood for ManhattanNeighborhood {
	fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>) {
		let size = (self.width, self.height);
		target.extend(Dir::all().filter_map(|dir| get_in_dir(point, dir, size)));
	}
	fn heuristic(&self, point: Point, goal: Point) -> Cost {
		manhattan_distance(point, goal)
	}
}

/// The Manhattan Distance `|ax - bx| + |ay - by|` between two Points.
///
/// ```
/// # use grid_astar::neighbors::manhattan_distance;
/// assert_eq!(manhattan_distance((3, 1), (0, 0)), 4);
/// assert_eq!(manhattan_distance((0, 0), (3, 1)), 4);
/// ```
pub fn manhattan_distance(a: Point, b: Point) -> Cost {
	a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

#[test]
fn test_manhattan_get_all_neighbors() {
	let neighborhood = ManhattanNeighborhood::new(5, 5);
	let mut neighbors = vec![];
	neighborhood.get_all_neighbors((0, 2), &mut neighbors);
	assert_eq!(neighbors, vec![(0, 1), (0, 3), (1, 2)]);

	neighbors.clear();
	neighborhood.get_all_neighbors((2, 2), &mut neighbors);
	assert_eq!(neighbors, vec![(2, 1), (2, 3), (1, 2), (3, 2)]);

	neighbors.clear();
	neighborhood.get_all_neighbors((4, 4), &mut neighbors);
	assert_eq!(neighbors, vec![(4, 3), (3, 4)]);
}

#[test]
fn test_manhattan_single_tile() {
	let neighborhood = ManhattanNeighborhood::new(1, 1);
	let mut neighbors = vec![];
	neighborhood.get_all_neighbors((0, 0), &mut neighbors);
	assert!(neighbors.is_empty());
}

#[test]
fn test_manhattan_heuristic() {
	let neighborhood = ManhattanNeighborhood::new(5, 5);
	assert_eq!(neighborhood.heuristic((3, 1), (0, 0)), 3 + 1);
	assert_eq!(neighborhood.heuristic((2, 2), (2, 2)), 0);
}
