use crate::{
	grid::{a_star_search, Grid, Tile},
	neighbors::ManhattanNeighborhood,
	Path, Point, Result, SearchConfig,
};

/// Answers several `(start, goal)` queries on the same Grid.
///
/// Every query is an independent search as if [`find_path_with`](crate::find_path_with) was
/// called for it. With the `parallel` feature (on by default), the queries are spread across
/// the threads of [rayon](https://docs.rs/rayon).
///
/// The results are in the same order as `queries`. If any query fails with an Error, one of
/// those Errors is returned.
///
/// ## Examples
/// ```
/// use grid_astar::{find_paths, SearchConfig};
///
/// let grid = [
///     [0, 0, 0],
///     [0, 1, 0],
///     [0, 1, 0],
/// ];
/// let queries = [((0, 0), (2, 2)), ((0, 2), (2, 2)), ((1, 1), (0, 0))];
///
/// let paths = find_paths(&grid, &queries, &SearchConfig::default())?;
///
/// assert_eq!(paths[0].as_ref().map(|path| path.cost()), Some(4));
/// assert_eq!(paths[1].as_ref().map(|path| path.cost()), Some(6));
/// assert!(paths[2].is_none()); // starts on a wall
/// # Ok::<(), grid_astar::Error>(())
/// ```
pub fn find_paths<R: AsRef<[T]>, T: Tile + Sync>(
	grid: &[R],
	queries: &[(Point, Point)],
	config: &SearchConfig,
) -> Result<Vec<Option<Path>>> {
	let grid = Grid::new(grid)?;
	let neighborhood = ManhattanNeighborhood::new(grid.width(), grid.height());
	debug!("answering {} queries", queries.len());

	let search = |&(start, goal): &(Point, Point)| {
		a_star_search(&grid, &neighborhood, start, goal, config)
	};

	#[cfg(feature = "parallel")]
	let paths: Result<Vec<Option<Path>>> = {
		use rayon::prelude::*;
		queries.par_iter().map(search).collect()
	};

	#[cfg(not(feature = "parallel"))]
	let paths: Result<Vec<Option<Path>>> = queries.iter().map(search).collect();

	paths
}
