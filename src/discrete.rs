//! A module containing the [`Discrete`] trait and trait impls for the
//! primitive integer datatypes, [`char`], and [`Reverse`].

use core::cmp::Reverse;

/// A trait for discrete datatypes, types where every value has at most one
/// immediate successor and at most one immediate predecessor. See the
/// top-level module documentation for a more detailed description of
/// discrete-ness.
///
/// # Examples
/// ```
/// use discrete_range::Discrete;
///
/// assert_eq!(4_u8.up(), Some(5));
/// assert_eq!(u8::MAX.up(), None);
/// assert_eq!(0_i8.down(), Some(-1));
///
/// assert_eq!(4_u8.adjacent(5), true);
/// assert_eq!(5_u8.adjacent(4), false);
/// ```
pub trait Discrete: Sized {
	/// The smallest value greater than `self` if one exists.
	fn up(self) -> Option<Self>;
	/// The greatest value smaller than `self` if one exists.
	fn down(self) -> Option<Self>;

	/// Returns `true` if `other` immediately follows `self`, with no value
	/// between them.
	fn adjacent(self, other: Self) -> bool
	where
		Self: PartialEq,
	{
		self.up() == Some(other)
	}
}

macro_rules! impl_discrete {
    () => {};
	($ident:ident, $($t:tt)*) => {
		impl Discrete for $ident {
			fn up(self) -> Option<Self> {
				self.checked_add(1)
			}
			fn down(self) -> Option<Self> {
				self.checked_sub(1)
			}
		}

        impl_discrete!($($t)*);
	};
}

impl_discrete!(
	u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize,
);

impl Discrete for char {
	fn up(self) -> Option<Self> {
		match self {
			//skip the surrogate gap
			'\u{D7FF}' => Some('\u{E000}'),
			char::MAX => None,
			_ => char::from_u32(self as u32 + 1),
		}
	}
	fn down(self) -> Option<Self> {
		match self {
			'\u{E000}' => Some('\u{D7FF}'),
			'\0' => None,
			_ => char::from_u32(self as u32 - 1),
		}
	}
}

/// The inverse of a [`Discrete`] type: `up()` and `down()` are swapped,
/// which matches the flipped ordering [`Reverse`] already gives to [`Ord`].
///
/// This pair is what [`Range::fold_right()`] folds over.
///
/// [`Range::fold_right()`]: crate::Range::fold_right
impl<I> Discrete for Reverse<I>
where
	I: Discrete,
{
	fn up(self) -> Option<Self> {
		self.0.down().map(Reverse)
	}
	fn down(self) -> Option<Self> {
		self.0.up().map(Reverse)
	}
}
