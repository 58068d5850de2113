//! The [`action`](self) module contains the pre-defined behaviors that may
//! be registered for a mocked method using [`When::will`](crate::When::will).

mod invoke;
mod returns;
mod throws;

pub use invoke::{invoke, Invoke};
pub use returns::{return_, Return};
pub use throws::{throw_, Throw};

/// Trait that defines a behavior that is executed for a matching call.
///
/// This is similar to [`FnMut`] of the standard library and is implemented
/// for any closure that takes the argument tuple of the mocked method.
///
/// The arguments passed to the action are
/// - a unit `()` for no arguments
/// - a tuple `(T1,)` for one argument
/// - or a tuple `(T1, T2, ...)` of many arguments
pub trait Action<T, R> {
    /// Execute the action with the passed arguments.
    fn exec(&mut self, args: T) -> R;
}

impl<X, T, R> Action<T, R> for X
where
    X: FnMut(T) -> R,
{
    fn exec(&mut self, args: T) -> R {
        self(args)
    }
}
