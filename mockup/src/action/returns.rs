use std::collections::VecDeque;

use super::Action;

/// Creates a [`Return`] action that returns the passed `values` one after
/// another. Once only the last value is left it is returned for every
/// further call.
///
/// # Panics
/// Panics if `values` is empty.
pub fn return_<I>(values: I) -> Return<I::Item>
where
    I: IntoIterator,
{
    let values = values.into_iter().collect::<VecDeque<_>>();
    assert!(!values.is_empty(), "return_ needs at least one value");

    Return(values)
}

/// Action that returns a sequence of values, repeating the last one.
#[derive(Debug, Clone)]
pub struct Return<T>(VecDeque<T>);

impl<T, X> Action<X, T> for Return<T>
where
    T: Clone,
{
    fn exec(&mut self, _args: X) -> T {
        if self.0.len() > 1 {
            if let Some(value) = self.0.pop_front() {
                return value;
            }
        }

        self.0[0].clone()
    }
}
