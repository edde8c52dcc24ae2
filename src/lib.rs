//! This crate provides [`Range`], an inclusive range over a discrete point
//! type, along with the interval set algebra between two ranges (union,
//! difference, intersection and containment) and the enumeration of the
//! points a range covers, in either direction.
//!
//! ## Example
//!
//! ```rust
//! use discrete_range::test_ranges::ii;
//! use discrete_range::Range;
//!
//! let range = ii(1, 10);
//!
//! assert_eq!(range.union(ii(11, 20)), (ii(1, 20), None));
//! assert_eq!(range.difference(ii(3, 5)), Some((ii(1, 2), Some(ii(6, 10)))));
//! assert_eq!(range.intersection(ii(8, 20)), Some(ii(8, 10)));
//! assert_eq!(range.contains_range(ii(2, 9)), true);
//!
//! assert_eq!(ii(1, 5).to_vec(), [1, 2, 3, 4, 5]);
//! assert_eq!(ii(5, 1).to_vec(), [5, 4, 3, 2, 1]);
//! ```
//!
//! ## Example using a custom point type
//!
//! ```rust
//! use discrete_range::{Discrete, Range};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
//! enum Weekday {
//! 	Monday,
//! 	Tuesday,
//! 	Wednesday,
//! 	Thursday,
//! 	Friday,
//! }
//!
//! const WEEKDAYS: [Weekday; 5] = [
//! 	Weekday::Monday,
//! 	Weekday::Tuesday,
//! 	Weekday::Wednesday,
//! 	Weekday::Thursday,
//! 	Weekday::Friday,
//! ];
//!
//! // Implementing Discrete (on top of Ord and Copy) is all that's needed
//! impl Discrete for Weekday {
//! 	fn up(self) -> Option<Self> {
//! 		WEEKDAYS.get(self as usize + 1).copied()
//! 	}
//! 	fn down(self) -> Option<Self> {
//! 		WEEKDAYS.get((self as usize).checked_sub(1)?).copied()
//! 	}
//! }
//!
//! let week = Range::new(Weekday::Monday, Weekday::Friday);
//! let meetings = Range::new(Weekday::Tuesday, Weekday::Wednesday);
//!
//! assert_eq!(
//! 	week.difference(meetings),
//! 	Some((
//! 		Range::new(Weekday::Monday, Weekday::Monday),
//! 		Some(Range::new(Weekday::Thursday, Weekday::Friday))
//! 	))
//! );
//! assert_eq!(
//! 	meetings.reverse().to_vec(),
//! 	[Weekday::Wednesday, Weekday::Tuesday]
//! );
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Discrete-ness
//!
//! This crate is designed to work with [`Discrete`] types as compared to
//! [`Continuous`] types. For example, `u8` is a `Discrete` type, but
//! `f32` is a `Continuous` type.
//!
//! The reason for this is that common [`interval-Mathematics`] operations
//! differ depending on wether the underlying type is `Discrete` or
//! `Continuous`. For example `5..=6` touches `7..=8` since integers are
//! `Discrete` but `5.0..=6.0` does **not** touch `7.0..=8.0` since the
//! value `6.5` exists.
//!
//! ### Direction
//!
//! A [`Range`] does not need its `start` to be less than or equal to its
//! `end`. A range such as `[5, 1]` is perfectly valid, it simply enumerates
//! its points downwards: `5, 4, 3, 2, 1`. No direction is stored, the
//! direction is decided at every step by comparing the current point with
//! `end`.
//!
//! The set algebra compares bounds by their order and not by their
//! position, so it is mostly useful on ascending ranges. Descending ranges
//! can be flipped with [`Range::reverse()`].
//!
//! ### Overlap
//!
//! Two ranges are "overlapping" if there exists a point that is contained
//! within both ranges.
//!
//! ### Touching
//!
//! Two ranges are "touching" if they do not overlap and there exists no
//! value between them. For example, `[2, 4]` and `[5, 6]` are touching but
//! `[2, 4]` and `[6, 8]` are not, neither are `[2, 6]` and `[4, 8]`.
//!
//! ### Merging
//!
//! When a range "merges" another range it absorbs it to become larger, see
//! [`Range::union()`].
//!
//! ### Further Reading
//!
//! See Wikipedia's article on mathematical Intervals:
//! <https://en.wikipedia.org/wiki/Interval_(mathematics)>
//!
//! [`discrete`]: https://en.wikipedia.org/wiki/Discrete_mathematics
//! [`continuous`]: https://en.wikipedia.org/wiki/List_of_continuity-related_mathematical_topics
//! [`interval-mathematics`]: https://en.wikipedia.org/wiki/Interval_(mathematics)

#![no_std]
#![allow(clippy::tabs_in_doc_comments)]

extern crate alloc;

pub mod test_ranges;
pub(crate) mod utils;

pub mod discrete;
pub mod iter;
pub mod range;

pub use crate::discrete::Discrete;
pub use crate::iter::{ExhaustedError, Iter};
pub use crate::range::{PointType, Range};
