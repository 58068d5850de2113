//! The [`matcher`](self) module contains the argument matchers that decide
//! whether a call (or a recorded invocation) is matched by an action or an
//! assertion.
//!
//! Every argument position is matched independently by one of:
//! - a literal value, compared by equality,
//! - the wildcard [`any`], matching every value,
//! - a predicate, like [`predicate`] or one of the comparisons [`eq`],
//!   [`ne`], [`lt`], [`le`], [`gt`] and [`ge`].
//!
//! The positions are combined by conjunction using [`multi`].

mod any;
mod compare;
mod literal;
mod multi;
mod no_args;
mod predicate;
mod range;
mod string;

use std::fmt::{Formatter, Result as FmtResult};

pub use any::{any, Any};
pub use compare::{eq, ge, gt, le, lt, ne, Eq, Ge, Gt, Le, Lt, Ne};
pub use multi::{multi, Multi};
pub use no_args::{no_args, NoArgs};
pub use predicate::{predicate, Predicate};
pub use range::{range, Range};
pub use string::{
    contains as str_contains, ends_with as str_ends_with, is_empty, starts_with as str_starts_with,
    Contains as StrContains, EndsWith as StrEndsWith, IsEmpty, StartsWith as StrStartsWith,
};

/// A matcher is used to check if the passed argument matches a pre-defined
/// expectation. It is used to select the action of a call and to check the
/// recorded calls of a mocked method.
pub trait Matcher<T> {
    /// Returns `true` if the passed `value` matches the expectations, `false`
    /// otherwise.
    fn matches(&self, value: &T) -> bool;

    /// Write a human readable representation of the matcher to the passed
    /// formatter.
    ///
    /// # Errors
    /// Returns an error if writing to the formatter failed.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult;
}

/// Helper to format a [`Matcher`] using [`Display`](std::fmt::Display).
pub struct Displayed<'a, T>(pub &'a dyn Matcher<T>);

impl<T> std::fmt::Display for Displayed<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}

impl<T> std::fmt::Debug for Displayed<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}
