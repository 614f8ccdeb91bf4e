/// Options for a single search.
///
/// Default options:
/// ```
/// # use grid_astar::SearchConfig;
/// assert_eq!(
/// 	SearchConfig {
/// 		max_expansions: None,
/// 		size_hint: 0,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
	/// The maximum number of Tiles the search may expand (defaults to `None`).
	///
	/// `None` (default): search until the goal is found or every reachable Tile was visited.
	///
	/// `Some(n)`: give up after expanding `n` Tiles. The query then reports that no Path
	/// exists, even if the goal might have been reachable.
	pub max_expansions: Option<usize>,
	/// The number of Tiles to reserve memory for up front (defaults to `0`).
	///
	/// `0` derives the capacity from the size of the Grid, capped at [`SearchConfig::MAX_RESERVED`].
	pub size_hint: usize,
}

impl SearchConfig {
	/// The upper limit for memory reserved when `size_hint` is `0`
	pub const MAX_RESERVED: usize = 1 << 12;

	/// a SearchConfig without any limits. Equal to `SearchConfig::default()`.
	pub const UNBOUNDED: SearchConfig = SearchConfig {
		max_expansions: None,
		size_hint: 0,
	};

	/// an example SearchConfig that reserves as little memory as possible up front
	///
	/// Values:
	/// ```
	/// # use grid_astar::SearchConfig;
	/// assert_eq!(
	/// 	SearchConfig {
	/// 		max_expansions: None,
	/// 		size_hint: 16,
	/// 	},
	/// 	SearchConfig::LOW_MEM
	/// );
	/// ```
	pub const LOW_MEM: SearchConfig = SearchConfig {
		max_expansions: None,
		size_hint: 16,
	};

	/// Creates a SearchConfig that expands at most `max_expansions` Tiles.
	///
	/// ```
	/// # use grid_astar::SearchConfig;
	/// let config = SearchConfig::with_budget(100);
	/// assert_eq!(config.max_expansions, Some(100));
	/// assert_eq!(config.size_hint, SearchConfig::default().size_hint);
	/// ```
	pub fn with_budget(max_expansions: usize) -> SearchConfig {
		SearchConfig {
			max_expansions: Some(max_expansions),
			..Default::default()
		}
	}

	pub(crate) fn capacity_for(&self, (width, height): (usize, usize)) -> usize {
		if self.size_hint > 0 {
			self.size_hint
		} else {
			width.saturating_mul(height).min(Self::MAX_RESERVED)
		}
	}

	pub(crate) fn budget_exhausted(&self, expanded: usize) -> bool {
		self.max_expansions.map_or(false, |max| expanded >= max)
	}
}

impl Default for SearchConfig {
	fn default() -> SearchConfig {
		SearchConfig::UNBOUNDED
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn capacity() {
		let config = SearchConfig::default();
		assert_eq!(config.capacity_for((5, 5)), 25);
		assert_eq!(config.capacity_for((1024, 1024)), SearchConfig::MAX_RESERVED);
		assert_eq!(SearchConfig::LOW_MEM.capacity_for((1024, 1024)), 16);
	}

	#[test]
	fn budget() {
		assert!(!SearchConfig::default().budget_exhausted(usize::MAX));

		let config = SearchConfig::with_budget(3);
		assert!(!config.budget_exhausted(2));
		assert!(config.budget_exhausted(3));
	}
}
