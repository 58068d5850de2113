use std::fmt::{Formatter, Result as FmtResult};

use crate::Matcher;

/// Create the wildcard matcher.
///
/// The [`when!`](crate::when) and [`invoked!`](crate::invoked) macros
/// translate an argument written as `_` into this matcher.
pub fn any() -> Any {
    Any
}

/// Matches any value of any type.
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct Any;

impl<T> Matcher<T> for Any {
    fn matches(&self, _value: &T) -> bool {
        true
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "_")
    }
}
