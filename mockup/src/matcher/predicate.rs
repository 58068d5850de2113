use std::fmt::{Formatter, Result as FmtResult};

use crate::Matcher;

/// Create a matcher that evaluates the passed closure for the argument.
pub fn predicate<F>(f: F) -> Predicate<F> {
    Predicate(f)
}

/// Matcher that evaluates an arbitrary single argument test.
#[must_use]
#[derive(Debug)]
pub struct Predicate<F>(pub F);

impl<T, F> Matcher<T> for Predicate<F>
where
    F: Fn(&T) -> bool,
{
    fn matches(&self, value: &T) -> bool {
        self.0(value)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Predicate")
    }
}
