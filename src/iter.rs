//! A module containing [`Iter`], the enumeration of the points of a
//! [`Range`], along with the fold and traversal methods built on top of it.

use alloc::vec::Vec;
use core::cmp::{Ordering, Reverse};
use core::fmt;
use core::iter::FusedIterator;

use crate::{PointType, Range};

/// The error returned when requesting a point from an [`Iter`] that has
/// already produced the last point of its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExhaustedError;

impl fmt::Display for ExhaustedError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("range enumeration is exhausted")
	}
}

impl core::error::Error for ExhaustedError {}

/// An iterator over every point of a [`Range`], from `start` to `end`
/// inclusive.
///
/// Each step compares the current point with `end`: below it the iterator
/// steps up, above it the iterator steps down. This makes the same iterator
/// work for ascending and descending ranges alike.
///
/// This `struct` is created by [`Range::iter()`]. See its documentation for
/// more.
#[derive(Debug, Clone)]
pub struct Iter<I> {
	next: Option<I>,
	end: I,
}

impl<I> Iter<I>
where
	I: PointType,
{
	/// Returns the next point, or an [`ExhaustedError`] if every point of
	/// the range has already been produced.
	///
	/// # Examples
	/// ```
	/// use discrete_range::{ExhaustedError, Range};
	///
	/// let mut iter = Range::new(1, 2).iter();
	///
	/// assert_eq!(iter.try_next(), Ok(1));
	/// assert_eq!(iter.try_next(), Ok(2));
	/// assert_eq!(iter.try_next(), Err(ExhaustedError));
	/// assert_eq!(iter.try_next(), Err(ExhaustedError));
	/// ```
	pub fn try_next(&mut self) -> Result<I, ExhaustedError> {
		self.next().ok_or(ExhaustedError)
	}
}

impl<I> Iterator for Iter<I>
where
	I: PointType,
{
	type Item = I;

	fn next(&mut self) -> Option<I> {
		let current = self.next.take()?;

		self.next = match current.cmp(&self.end) {
			Ordering::Less => current.up(),
			Ordering::Greater => current.down(),
			Ordering::Equal => None,
		};

		Some(current)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		match self.next {
			Some(_) => (1, None),
			None => (0, Some(0)),
		}
	}
}

impl<I> FusedIterator for Iter<I> where I: PointType {}

impl<I> IntoIterator for Range<I>
where
	I: PointType,
{
	type Item = I;
	type IntoIter = Iter<I>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<I> Range<I>
where
	I: PointType,
{
	/// Returns an iterator over every point in the range, starting at
	/// `start` and finishing with `end`.
	///
	/// Descending ranges are iterated downwards. Each call returns a new,
	/// independent iterator.
	///
	/// # Examples
	/// ```
	/// use discrete_range::Range;
	///
	/// let ascending = Range::new(1, 4);
	/// let descending = Range::new(4, 1);
	///
	/// assert_eq!(ascending.iter().collect::<Vec<_>>(), [1, 2, 3, 4]);
	/// assert_eq!(descending.iter().collect::<Vec<_>>(), [4, 3, 2, 1]);
	/// ```
	pub fn iter(self) -> Iter<I> {
		Iter {
			next: Some(self.start),
			end: self.end,
		}
	}

	/// Collects every point in the range into a [`Vec`] in iteration order.
	///
	/// # Examples
	/// ```
	/// use discrete_range::Range;
	///
	/// assert_eq!(Range::new('a', 'e').to_vec(), ['a', 'b', 'c', 'd', 'e']);
	/// assert_eq!(Range::new(5, 1).to_vec(), [5, 4, 3, 2, 1]);
	/// ```
	pub fn to_vec(self) -> Vec<I> {
		self.iter().collect()
	}

	/// Calls `f` on every point in the range in iteration order.
	pub fn for_each<F>(self, f: F)
	where
		F: FnMut(I),
	{
		self.iter().for_each(f);
	}

	/// Folds every point in the range into an accumulator, from `start` to
	/// `end`.
	///
	/// # Examples
	/// ```
	/// use discrete_range::Range;
	///
	/// assert_eq!(Range::new(1, 4).fold_left(0, |acc, x| acc + x), 10);
	/// assert_eq!(
	/// 	Range::new(1, 3).fold_left(String::new(), |acc, x| format!("({acc}{x})")),
	/// 	"(((1)2)3)"
	/// );
	/// ```
	pub fn fold_left<B, F>(self, seed: B, f: F) -> B
	where
		F: FnMut(B, I) -> B,
	{
		self.iter().fold(seed, f)
	}

	/// Folds every point in the range into an accumulator, from `end` to
	/// `start`.
	///
	/// This reverses the range into [`Reverse`] points, whose ordering and
	/// steps are both inverted, and left-folds that instead.
	///
	/// # Examples
	/// ```
	/// use discrete_range::Range;
	///
	/// assert_eq!(
	/// 	Range::new(1, 3).fold_right(String::new(), |x, acc| format!("({x}{acc})")),
	/// 	"(1(2(3)))"
	/// );
	/// assert_eq!(
	/// 	Range::new(1, 4).fold_right(Vec::new(), |x, mut acc| {
	/// 		acc.insert(0, x);
	/// 		acc
	/// 	}),
	/// 	[1, 2, 3, 4]
	/// );
	/// ```
	pub fn fold_right<B, F>(self, seed: B, mut f: F) -> B
	where
		F: FnMut(I, B) -> B,
	{
		self.reverse()
			.map(Reverse)
			.fold_left(seed, |acc, Reverse(point)| f(point, acc))
	}
}
