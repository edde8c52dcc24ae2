//! A module containing short constructor functions for `i8` ranges, used
//! throughout the examples and tests.
//!
//! The two letters of each name describe the start and end bounds of the
//! range: `i` for included and `e` for excluded. Since a [`Range`] is
//! always inclusive, excluded bounds are stepped inwards by one.
//!
//! # Panics
//!
//! The excluded constructors panic if stepping inwards would go past
//! `i8::MIN` or `i8::MAX`.

use crate::{Discrete, Range};

/// An included-included range
pub fn ii(x1: i8, x2: i8) -> Range<i8> {
	Range { start: x1, end: x2 }
}
/// An included-excluded range
pub fn ie(x1: i8, x2: i8) -> Range<i8> {
	Range {
		start: x1,
		end: x2.down().unwrap(),
	}
}
/// An excluded-included range
pub fn ei(x1: i8, x2: i8) -> Range<i8> {
	Range {
		start: x1.up().unwrap(),
		end: x2,
	}
}
/// An excluded-excluded range
pub fn ee(x1: i8, x2: i8) -> Range<i8> {
	Range {
		start: x1.up().unwrap(),
		end: x2.down().unwrap(),
	}
}
