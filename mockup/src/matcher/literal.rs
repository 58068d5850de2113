use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::{Matcher, Ref};

/// Every comparable value is a matcher for its own type.
impl<T> Matcher<T> for T
where
    T: PartialEq + Debug,
{
    fn matches(&self, value: &T) -> bool {
        self == value
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{self:?}")
    }
}

/// Compares an argument recorded by reference with the value it had at call
/// time.
impl<T> Matcher<Ref<T>> for &T
where
    T: PartialEq + Debug + ToOwned + ?Sized,
{
    fn matches(&self, value: &Ref<T>) -> bool {
        *self == value.get()
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{self:?}")
    }
}
