use std::any::Any;
use std::collections::VecDeque;
use std::panic::panic_any;

use super::Action;

/// Creates a [`Throw`] action that raises the passed `errors` one after
/// another. Once only the last error is left it is raised for every further
/// call.
///
/// Raising means panicking with the error as payload. The call is still
/// recorded by the mock, and the payload can be inspected using
/// [`catch_unwind`](std::panic::catch_unwind) and
/// [`downcast_ref`](std::boxed::Box::downcast).
///
/// For methods returning a [`Result`] use [`return_`](crate::return_) with
/// an `Err` value instead.
///
/// # Panics
/// Panics if `errors` is empty.
pub fn throw_<I>(errors: I) -> Throw<I::Item>
where
    I: IntoIterator,
{
    let errors = errors.into_iter().collect::<VecDeque<_>>();
    assert!(!errors.is_empty(), "throw_ needs at least one error");

    Throw(errors)
}

/// Action that raises a sequence of errors, repeating the last one.
///
/// The action never returns, so it can be used for methods with any return
/// type.
#[derive(Debug, Clone)]
pub struct Throw<E>(VecDeque<E>);

impl<E, X, R> Action<X, R> for Throw<E>
where
    E: Any + Clone + Send,
{
    fn exec(&mut self, _args: X) -> R {
        if self.0.len() > 1 {
            if let Some(error) = self.0.pop_front() {
                panic_any(error);
            }
        }

        panic_any(self.0[0].clone())
    }
}
