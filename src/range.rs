//! A module containing [`Range`] and its interval set algebra.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::{cmp_point_with_range, sorted_by_start};
use crate::Discrete;

/// The marker trait for valid point types, a blanket implementation is provided for all types
/// which implement this traits' super-traits so you shouln't need to implement this yourself.
pub trait PointType: Ord + Copy + Discrete {}
impl<I> PointType for I where I: Ord + Copy + Discrete {}

/// An inclusive discrete range, both `start` and `end` are contained in
/// the range.
///
/// No order is enforced between the two bounds: a range may be ascending
/// (`start <= end`) or descending (`start > end`). Equality is structural,
/// so `[1, 5]` and `[5, 1]` are different ranges even though they
/// enumerate the same points.
///
/// `I` is the generic type parameter for the point type the range is over.
/// Storing and mapping a range needs nothing of `I`, whereas the algebra
/// and enumeration methods need `I` to be a [`PointType`].
///
/// # Examples
/// ```
/// use discrete_range::Range;
///
/// let range = Range::new(1, 10);
///
/// assert_eq!(range.contains(4), true);
/// assert_eq!(range.intersection(Range::new(8, 20)), Some(Range::new(8, 10)));
/// assert_eq!(
/// 	range.difference(Range::new(3, 5)),
/// 	Some((Range::new(1, 2), Some(Range::new(6, 10))))
/// );
/// assert_eq!(range.to_string(), "[1, 10]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Range<I> {
	/// The start of the range, inclusive.
	pub start: I,
	/// The end of the range, inclusive.
	pub end: I,
}

impl<I> Range<I> {
	/// Makes a new range from its two inclusive bounds.
	pub const fn new(start: I, end: I) -> Self {
		Range { start, end }
	}

	/// Returns the range with its bounds swapped.
	///
	/// # Examples
	/// ```
	/// use discrete_range::Range;
	///
	/// assert_eq!(Range::new(1, 5).reverse(), Range::new(5, 1));
	/// assert_eq!(Range::new(1, 5).reverse().reverse(), Range::new(1, 5));
	/// ```
	pub fn reverse(self) -> Self {
		Range {
			start: self.end,
			end: self.start,
		}
	}

	/// Applies `f` to both bounds of the range.
	///
	/// Only the bounds are transformed, not the points between them, so
	/// the returned range places no requirements on `J`.
	///
	/// # Examples
	/// ```
	/// use discrete_range::Range;
	///
	/// assert_eq!(Range::new(1, 5).map(|x| x * 10), Range::new(10, 50));
	/// assert_eq!(
	/// 	Range::new('a', 'c').map(|x| x.to_string()),
	/// 	Range::new("a".to_string(), "c".to_string())
	/// );
	/// ```
	pub fn map<J, F>(self, mut f: F) -> Range<J>
	where
		F: FnMut(I) -> J,
	{
		Range {
			start: f(self.start),
			end: f(self.end),
		}
	}
}

impl<I> Range<I>
where
	I: PointType,
{
	/// Returns `true` if `start <= end`.
	pub fn is_ascending(self) -> bool {
		self.start <= self.end
	}

	/// Returns `true` if the given point is within the bounds of the range.
	///
	/// # Examples
	/// ```
	/// use discrete_range::Range;
	///
	/// let range = Range::new(2, 4);
	///
	/// assert_eq!(range.contains(1), false);
	/// assert_eq!(range.contains(2), true);
	/// assert_eq!(range.contains(4), true);
	/// assert_eq!(range.contains(5), false);
	/// ```
	pub fn contains(self, point: I) -> bool {
		cmp_point_with_range(point, self).is_eq()
	}

	/// Returns `true` if `other` is a sub-range of `self`.
	///
	/// # Examples
	/// ```
	/// use discrete_range::Range;
	///
	/// let range = Range::new(2, 8);
	///
	/// assert_eq!(range.contains_range(range), true);
	/// assert_eq!(range.contains_range(Range::new(3, 8)), true);
	/// assert_eq!(range.contains_range(Range::new(1, 8)), false);
	/// assert_eq!(range.contains_range(Range::new(7, 9)), false);
	/// ```
	pub fn contains_range(self, other: Range<I>) -> bool {
		self.start <= other.start && self.end >= other.end
	}

	/// Returns `true` if there is a point contained by both ranges.
	pub fn overlaps(self, other: Range<I>) -> bool {
		self.intersection(other).is_some()
	}

	/// Returns `true` if the two ranges do not overlap and there is no
	/// point between them.
	///
	/// # Examples
	/// ```
	/// use discrete_range::Range;
	///
	/// assert_eq!(Range::new(1, 3).touches(Range::new(4, 6)), true);
	/// assert_eq!(Range::new(4, 6).touches(Range::new(1, 3)), true);
	///
	/// assert_eq!(Range::new(1, 3).touches(Range::new(5, 6)), false);
	/// assert_eq!(Range::new(1, 3).touches(Range::new(3, 6)), false);
	/// ```
	pub fn touches(self, other: Range<I>) -> bool {
		let (left, right) = sorted_by_start(self, other);

		!self.overlaps(other) && left.end.adjacent(right.start)
	}

	/// Returns the range covered by both `self` and `other`, or `None` if
	/// they do not overlap.
	///
	/// # Examples
	/// ```
	/// use discrete_range::Range;
	///
	/// assert_eq!(
	/// 	Range::new(1, 6).intersection(Range::new(4, 10)),
	/// 	Some(Range::new(4, 6))
	/// );
	/// assert_eq!(Range::new(1, 3).intersection(Range::new(4, 10)), None);
	/// ```
	pub fn intersection(self, other: Range<I>) -> Option<Range<I>> {
		let start = self.start.max(other.start);
		let end = self.end.min(other.end);

		(start <= end).then_some(Range { start, end })
	}

	/// Merges the two ranges if they overlap or touch, otherwise returns
	/// them both ordered by their starts.
	///
	/// When both ranges start at the same point `self` is treated as the
	/// left-most range.
	///
	/// # Examples
	/// ```
	/// use discrete_range::Range;
	///
	/// //overlapping
	/// assert_eq!(
	/// 	Range::new(1, 5).union(Range::new(4, 10)),
	/// 	(Range::new(1, 10), None)
	/// );
	/// //touching
	/// assert_eq!(
	/// 	Range::new(1, 3).union(Range::new(4, 6)),
	/// 	(Range::new(1, 6), None)
	/// );
	/// //disjoint
	/// assert_eq!(
	/// 	Range::new(8, 9).union(Range::new(1, 3)),
	/// 	(Range::new(1, 3), Some(Range::new(8, 9)))
	/// );
	/// ```
	pub fn union(self, other: Range<I>) -> (Range<I>, Option<Range<I>>) {
		let (left, right) = sorted_by_start(self, other);

		if left.end >= right.start || left.end.adjacent(right.start) {
			(
				Range {
					start: left.start,
					end: left.end.max(right.end),
				},
				None,
			)
		} else {
			(left, Some(right))
		}
	}

	/// Removes the part of `self` covered by `other`.
	///
	/// Returns `None` if `other` covers all of `self`, otherwise returns
	/// the remainder of `self`, which is split into two ranges if `other`
	/// was strictly inside `self`.
	///
	/// # Examples
	/// ```
	/// use discrete_range::Range;
	///
	/// assert_eq!(
	/// 	Range::new(1, 10).difference(Range::new(3, 5)),
	/// 	Some((Range::new(1, 2), Some(Range::new(6, 10))))
	/// );
	/// assert_eq!(
	/// 	Range::new(1, 10).difference(Range::new(-5, 5)),
	/// 	Some((Range::new(6, 10), None))
	/// );
	/// assert_eq!(
	/// 	Range::new(1, 10).difference(Range::new(20, 30)),
	/// 	Some((Range::new(1, 10), None))
	/// );
	/// assert_eq!(Range::new(3, 5).difference(Range::new(1, 10)), None);
	/// ```
	pub fn difference(
		self,
		other: Range<I>,
	) -> Option<(Range<I>, Option<Range<I>>)> {
		if other.start <= self.start {
			if other.end < self.start {
				Some((self, None))
			} else if other.end >= self.end {
				None
			} else {
				//other.end < self.end so there is always a point after it
				other.end.up().map(|start| {
					(
						Range {
							start,
							end: self.end,
						},
						None,
					)
				})
			}
		} else if other.start > self.end {
			Some((self, None))
		} else {
			let after = if other.end < self.end {
				other.end.up().map(|start| Range {
					start,
					end: self.end,
				})
			} else {
				None
			};

			other.start.down().map(|end| {
				(
					Range {
						start: self.start,
						end,
					},
					after,
				)
			})
		}
	}
}

impl<I> fmt::Display for Range<I>
where
	I: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}, {}]", self.start, self.end)
	}
}

#[cfg(test)]
mod tests {
	use alloc::string::ToString;
	use alloc::vec::Vec;

	use itertools::iproduct;
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::test_ranges::{ee, ei, ie, ii};

	//only every other number so that touching and non-touching ranges
	//both show up
	const NUMBERS: &[i8] = &[2, 4, 6, 8, 10];
	//go a bit around on either side
	const NUMBERS_DOMAIN: &[i8] =
		&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

	fn all_valid_test_ranges() -> Vec<Range<i8>> {
		let mut output = Vec::new();
		for i in NUMBERS {
			for j in NUMBERS {
				if i <= j {
					output.push(Range { start: *i, end: *j });
				}
			}
		}
		output
	}

	fn points(ranges: impl IntoIterator<Item = Range<i8>>) -> Vec<i8> {
		let ranges = ranges.into_iter().collect::<Vec<_>>();
		NUMBERS_DOMAIN
			.iter()
			.copied()
			.filter(|point| ranges.iter().any(|range| range.contains(*point)))
			.collect()
	}

	fn remainders(
		difference: Option<(Range<i8>, Option<Range<i8>>)>,
	) -> Vec<Range<i8>> {
		difference
			.into_iter()
			.flat_map(|(first, second)| core::iter::once(first).chain(second))
			.collect()
	}

	#[test]
	fn contains_tests() {
		assert!(ii(2, 4).contains(3));
		assert!(ii(4, 4).contains(4));
		assert!(!ii(2, 4).contains(5));
		//bounds are compared by the order of the points, not their position
		assert!(!ii(4, 2).contains(3));
		assert!(!ii(4, 2).contains(4));
	}

	#[test]
	fn contains_range_is_reflexive() {
		for range in iproduct!(NUMBERS, NUMBERS).map(|(x, y)| ii(*x, *y)) {
			assert!(range.contains_range(range), "{range}");
		}
	}

	#[test]
	fn contains_range_tests() {
		assert!(ii(2, 8).contains_range(ee(2, 8)));
		assert!(ii(2, 8).contains_range(ie(2, 9)));
		assert!(!ii(2, 8).contains_range(ei(0, 8)));
		assert!(!ee(2, 8).contains_range(ii(2, 8)));
	}

	#[test]
	fn difference_tests() {
		assert_eq!(
			ii(1, 10).difference(ii(3, 5)),
			Some((ii(1, 2), Some(ii(6, 10))))
		);
		assert_eq!(ii(3, 5).difference(ii(1, 10)), None);
		assert_eq!(ii(3, 5).difference(ii(3, 5)), None);

		//entirely left
		assert_eq!(ii(5, 8).difference(ii(1, 4)), Some((ii(5, 8), None)));
		//entirely right
		assert_eq!(ii(5, 8).difference(ii(9, 12)), Some((ii(5, 8), None)));
		//overlapping the start
		assert_eq!(ii(5, 8).difference(ii(1, 5)), Some((ii(6, 8), None)));
		assert_eq!(ii(5, 8).difference(ii(5, 6)), Some((ii(7, 8), None)));
		//overlapping the end
		assert_eq!(ii(5, 8).difference(ii(8, 12)), Some((ii(5, 7), None)));
		assert_eq!(ii(5, 8).difference(ii(6, 8)), Some((ii(5, 5), None)));
		//single points
		assert_eq!(ii(5, 5).difference(ii(5, 5)), None);
		assert_eq!(
			ii(5, 7).difference(ii(6, 6)),
			Some((ii(5, 5), Some(ii(7, 7))))
		);
	}

	#[test]
	fn difference_at_domain_edges() {
		assert_eq!(
			ii(i8::MIN, i8::MAX).difference(ii(i8::MIN, 0)),
			Some((ii(1, i8::MAX), None))
		);
		assert_eq!(
			ii(i8::MIN, i8::MAX).difference(ii(0, i8::MAX)),
			Some((ii(i8::MIN, -1), None))
		);
		assert_eq!(ii(i8::MIN, i8::MAX).difference(ii(i8::MIN, i8::MAX)), None);
	}

	#[test]
	fn difference_partitions_the_range() {
		for (range, cut) in
			iproduct!(all_valid_test_ranges(), all_valid_test_ranges())
		{
			let remainders = remainders(range.difference(cut));

			for remainder in remainders.iter() {
				assert!(!remainder.overlaps(cut), "{range} - {cut}");
				assert!(range.contains_range(*remainder), "{range} - {cut}");
			}
			if let [first, second] = remainders[..] {
				assert!(!first.overlaps(second), "{range} - {cut}");
			}

			let mut rebuilt = remainders.clone();
			rebuilt.extend(range.intersection(cut));
			assert_eq!(points(rebuilt), points([range]), "{range} - {cut}");
		}
	}

	#[test]
	fn union_tests() {
		assert_eq!(ii(1, 3).union(ii(4, 6)), (ii(1, 6), None));
		assert_eq!(ii(4, 6).union(ii(1, 3)), (ii(1, 6), None));
		assert_eq!(ii(1, 3).union(ii(5, 6)), (ii(1, 3), Some(ii(5, 6))));
		assert_eq!(ii(5, 6).union(ii(1, 3)), (ii(1, 3), Some(ii(5, 6))));
		assert_eq!(ii(1, 10).union(ii(3, 5)), (ii(1, 10), None));
		assert_eq!(ii(3, 5).union(ii(1, 10)), (ii(1, 10), None));
		assert_eq!(ii(1, 5).union(ii(5, 10)), (ii(1, 10), None));
	}

	#[test]
	fn union_ties_keep_self_first() {
		assert_eq!(ii(1, 3).union(ii(1, 8)), (ii(1, 8), None));
		assert_eq!(ii(1, 8).union(ii(1, 3)), (ii(1, 8), None));
	}

	#[test]
	fn union_with_self_is_identity() {
		for range in all_valid_test_ranges() {
			assert_eq!(range.union(range), (range, None));
		}
	}

	#[test]
	fn union_covers_both_ranges() {
		for (a, b) in iproduct!(all_valid_test_ranges(), all_valid_test_ranges())
		{
			let (first, second) = a.union(b);

			match second {
				Some(second) => {
					assert!(first.start < second.start, "{a} | {b}");
					assert!(!first.overlaps(second), "{a} | {b}");
					assert!(!first.touches(second), "{a} | {b}");
					assert_eq!(points([first, second]), points([a, b]));
				}
				None => {
					assert!(a.overlaps(b) || a.touches(b), "{a} | {b}");
					assert_eq!(points([first]), points([a, b]));
				}
			}
		}
	}

	#[test]
	fn intersection_tests() {
		assert_eq!(ii(1, 6).intersection(ii(4, 10)), Some(ii(4, 6)));
		assert_eq!(ii(1, 10).intersection(ii(4, 6)), Some(ii(4, 6)));
		assert_eq!(ii(1, 4).intersection(ii(4, 6)), Some(ii(4, 4)));
		assert_eq!(ii(1, 3).intersection(ii(4, 6)), None);
	}

	#[test]
	fn intersection_is_commutative() {
		for (a, b) in iproduct!(NUMBERS, NUMBERS, NUMBERS, NUMBERS)
			.map(|(w, x, y, z)| (ii(*w, *x), ii(*y, *z)))
		{
			assert_eq!(a.intersection(b), b.intersection(a), "{a} & {b}");
		}
	}

	#[test]
	fn overlaps_and_touches_agree_with_points() {
		for (a, b) in iproduct!(all_valid_test_ranges(), all_valid_test_ranges())
		{
			let shared = NUMBERS_DOMAIN
				.iter()
				.any(|point| a.contains(*point) && b.contains(*point));
			assert_eq!(a.overlaps(b), shared, "{a} {b}");

			let touching = !shared
				&& (b.start.checked_sub(a.end) == Some(1)
					|| a.start.checked_sub(b.end) == Some(1));
			assert_eq!(a.touches(b), touching, "{a} {b}");
		}
	}

	#[test]
	fn reverse_round_trips() {
		for range in iproduct!(NUMBERS, NUMBERS).map(|(x, y)| ii(*x, *y)) {
			assert_eq!(range.reverse().reverse(), range);
		}
		assert_eq!(ii(1, 5).reverse(), ii(5, 1));
		assert!(!ii(1, 5).reverse().is_ascending());
	}

	#[test]
	fn map_tests() {
		assert_eq!(ii(1, 5).map(i32::from), Range::new(1_i32, 5_i32));
		assert_eq!(ii(5, 1).map(|x| x * 2), ii(10, 2));
	}

	#[test]
	fn display_tests() {
		assert_eq!(ii(1, 5).to_string(), "[1, 5]");
		assert_eq!(ii(-3, -9).to_string(), "[-3, -9]");
		assert_eq!(Range::new('a', 'z').to_string(), "[a, z]");
	}
}
