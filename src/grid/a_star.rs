use super::{FrontierEntry, Grid, Tile};
use crate::{neighbors::Neighborhood, Cost, Path, Point, PointMap, Result, SearchConfig};

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Searches `grid` for the shortest Path from `start` to `goal` using A*.
///
/// `neighborhood` decides which Points are reachable in one step and provides the Heuristic.
/// Every step costs `1`, so the Heuristic must not overestimate the number of remaining steps
/// for the result to be optimal. [`ManhattanNeighborhood`](crate::neighbors::ManhattanNeighborhood)
/// satisfies that.
///
/// ## Examples
/// ```
/// use grid_astar::{a_star_search, neighbors::ManhattanNeighborhood, Grid, SearchConfig};
///
/// let rows = [
///     [0, 0, 0],
///     [1, 1, 0],
///     [0, 0, 0],
/// ];
/// let grid = Grid::new(&rows)?;
/// let neighborhood = ManhattanNeighborhood::new(grid.width(), grid.height());
///
/// let path = a_star_search(&grid, &neighborhood, (0, 0), (0, 2), &SearchConfig::default())?;
/// assert_eq!(path.unwrap().cost(), 6);
/// # Ok::<(), grid_astar::Error>(())
/// ```
///
/// ## Returns
/// - `Ok(Some(path))` if `goal` is reachable
/// - `Ok(None)` if it is not, if `start` or `goal` are blocked, or if the search ran out of
/// [`max_expansions`](SearchConfig::max_expansions)
/// - `Err(Error::InvalidCell)` if `start` or `goal` are outside of `grid`
pub fn a_star_search<N: Neighborhood, T: Tile>(
	grid: &Grid<T>,
	neighborhood: &N,
	start: Point,
	goal: Point,
	config: &SearchConfig,
) -> Result<Option<Path>> {
	grid.check_bounds(start)?;
	grid.check_bounds(goal)?;
	if !grid.is_open(start) || !grid.is_open(goal) {
		debug!("blocked endpoint, no path from {:?} to {:?}", start, goal);
		return Ok(None);
	}
	if start == goal {
		return Ok(Some(Path::new(vec![start])));
	}

	let size_hint = config.capacity_for(grid.size());
	let mut visited: PointMap<(Cost, Point)> = PointMap::with_capacity(size_hint);
	let mut next = BinaryHeap::with_capacity(size_hint / 2);
	let mut seq = 0;
	visited.insert(start, (0, start));
	next.push(FrontierEntry {
		point: start,
		cost: 0,
		estimate: neighborhood.heuristic(start, goal),
		seq,
	});

	let mut expanded = 0;
	let mut all_neighbors = vec![];

	let found = 'search: loop {
		let Some(FrontierEntry {
			point: current_id,
			cost: current_cost,
			..
		}) = next.pop()
		else {
			break 'search false;
		};

		match current_cost.cmp(&visited[&current_id].0) {
			Ordering::Greater => continue,
			Ordering::Equal => {}
			Ordering::Less => unreachable!("frontier entry is cheaper than its ledger cost"),
		}
		if current_id == goal {
			break 'search true;
		}
		if config.budget_exhausted(expanded) {
			debug!(
				"gave up on {:?} -> {:?} after expanding {} cells",
				start, goal, expanded
			);
			return Ok(None);
		}
		expanded += 1;

		let other_cost = current_cost + 1;

		all_neighbors.clear();
		neighborhood.get_all_neighbors(current_id, &mut all_neighbors);
		for &other_id in all_neighbors.iter() {
			if !grid.is_open(other_id) {
				continue;
			}

			let mut needs_visit = true;
			if let Some((prev_cost, prev_id)) = visited.get_mut(&other_id) {
				if *prev_cost > other_cost {
					*prev_cost = other_cost;
					*prev_id = current_id;
				} else {
					needs_visit = false;
				}
			} else {
				visited.insert(other_id, (other_cost, current_id));
			}

			if needs_visit {
				seq += 1;
				next.push(FrontierEntry {
					point: other_id,
					cost: other_cost,
					estimate: other_cost + neighborhood.heuristic(other_id, goal),
					seq,
				});
			}
		}
	};

	if !found {
		debug!(
			"no path from {:?} to {:?}, expanded {} cells",
			start, goal, expanded
		);
		return Ok(None);
	}

	let path = reconstruct(&visited, start, goal);
	debug!(
		"found path from {:?} to {:?} with cost {}, expanded {} cells",
		start,
		goal,
		path.cost(),
		expanded
	);
	Ok(Some(path))
}

/// Follows the predecessors from `goal` back to `start`.
fn reconstruct(visited: &PointMap<(Cost, Point)>, start: Point, goal: Point) -> Path {
	let mut steps = Vec::with_capacity(visited[&goal].0 + 1);
	let mut current = goal;

	while current != start {
		steps.push(current);
		current = match visited.get(&current) {
			Some(&(_, prev)) => prev,
			None => unreachable!("{:?} was reached without a predecessor", current),
		};
	}
	steps.push(start);
	steps.reverse();

	Path::new(steps)
}
