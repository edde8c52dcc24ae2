use core::cmp::Ordering;

use crate::{PointType, Range};

pub(crate) fn cmp_point_with_range<I>(point: I, range: Range<I>) -> Ordering
where
	I: PointType,
{
	if point < range.start {
		Ordering::Less
	} else if point > range.end {
		Ordering::Greater
	} else {
		Ordering::Equal
	}
}

/// Returns the two ranges ordered by their start, `a` is kept first when
/// the starts are equal.
pub(crate) fn sorted_by_start<I>(
	a: Range<I>,
	b: Range<I>,
) -> (Range<I>, Range<I>)
where
	I: PointType,
{
	if b.start < a.start {
		(b, a)
	} else {
		(a, b)
	}
}
