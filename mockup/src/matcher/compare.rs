use std::fmt::{Debug, Formatter, Result as FmtResult};

use super::Matcher;

macro_rules! impl_matcher {
    ($type:ident, $trait:ident::$method:ident, $op:tt, $fmt:tt) => {
        #[doc = concat!("Create a matcher that checks `argument ", stringify!($op), " value`.")]
        pub fn $method<T>(value: T) -> $type<T> {
            $type(value)
        }

        #[doc = concat!("Matcher that checks `argument ", stringify!($op), " value`.")]
        #[must_use]
        #[derive(Debug)]
        pub struct $type<T>(pub T);

        impl<T, X> Matcher<X> for $type<T>
        where
            X: $trait<T>,
            T: Debug,
        {
            fn matches(&self, value: &X) -> bool {
                value $op &self.0
            }

            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                write!(f, $fmt, self.0)
            }
        }
    };
}

impl_matcher!(Eq, PartialEq::eq, ==, "Eq({:?})");
impl_matcher!(Ne, PartialEq::ne, !=, "Ne({:?})");

impl_matcher!(Lt, PartialOrd::lt, <, "Lt({:?})");
impl_matcher!(Le, PartialOrd::le, <=, "Le({:?})");
impl_matcher!(Gt, PartialOrd::gt, >, "Gt({:?})");
impl_matcher!(Ge, PartialOrd::ge, >=, "Ge({:?})");
