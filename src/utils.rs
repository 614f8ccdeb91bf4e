use crate::Point;

/// The 4 cardinal directions, in the order the search visits them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
	Up = 0,
	Down = 1,
	Left = 2,
	Right = 3,
}
pub use self::Dir::*;

impl Dir {
	pub fn all() -> std::iter::Copied<std::slice::Iter<'static, Dir>> {
		[Up, Down, Left, Right].iter().copied()
	}
	pub fn num(self) -> usize {
		self as usize
	}
}

// y grows downwards
const UNIT_CIRCLE: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// The Point one step from `pos` in `dir`, or `None` if that leaves the `(w, h)` area.
pub fn get_in_dir(pos: Point, dir: Dir, (w, h): (usize, usize)) -> Option<Point> {
	let diff = UNIT_CIRCLE[dir.num()];
	if (pos.0 == 0 && diff.0 < 0)
		|| (pos.1 == 0 && diff.1 < 0)
		|| (pos.0 + 1 >= w && diff.0 > 0)
		|| (pos.1 + 1 >= h && diff.1 > 0)
	{
		None
	} else {
		Some((
			(pos.0 as isize + diff.0) as usize,
			(pos.1 as isize + diff.1) as usize,
		))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn step_test() {
		let pos = (1, 3);
		assert_eq!(get_in_dir(pos, Up, (5, 5)), Some((1, 2)));
		assert_eq!(get_in_dir(pos, Down, (5, 5)), Some((1, 4)));
		assert_eq!(get_in_dir(pos, Left, (5, 5)), Some((0, 3)));
		assert_eq!(get_in_dir(pos, Right, (5, 5)), Some((2, 3)));

		assert_eq!(get_in_dir(pos, Down, (5, 4)), None);
		assert_eq!(get_in_dir(pos, Right, (2, 5)), None);
		assert_eq!(get_in_dir((0, 0), Up, (5, 5)), None);
		assert_eq!(get_in_dir((0, 0), Left, (5, 5)), None);
	}

	#[test]
	fn fixed_order() {
		let order: Vec<usize> = Dir::all().map(Dir::num).collect();
		assert_eq!(order, vec![0, 1, 2, 3]);
	}
}
