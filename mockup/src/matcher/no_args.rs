use std::fmt::{Formatter, Result as FmtResult};

use crate::Matcher;

/// Create the matcher for methods without arguments.
pub fn no_args() -> NoArgs {
    NoArgs
}

/// Matches the empty argument tuple of a method without arguments.
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct NoArgs;

impl Matcher<()> for NoArgs {
    fn matches(&self, _value: &()) -> bool {
        true
    }

    fn fmt(&self, _: &mut Formatter<'_>) -> FmtResult {
        Ok(())
    }
}
