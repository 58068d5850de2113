//! The [`mockable`](self) module contains the traits that connect a mocked
//! type with its mock object.

use crate::MockState;

/// Implemented by every mock object generated by the [`mock!`](crate::mock)
/// macro.
pub trait Mocked {
    /// Type of the underlying object the mock wraps.
    type State;

    /// Get the state that records the calls of this mock object.
    fn mock_state(&self) -> &MockState;

    /// Get the underlying object.
    fn into_state(self) -> Self::State;
}

/// Implemented by every type the [`mock!`](crate::mock) macro was executed on.
pub trait Mockable: Sized {
    /// Type of the generated mock object.
    type Mock: Mocked<State = Self>;

    /// Create a new mock object that wraps `self`.
    ///
    /// The state of the mock is dropped together with the returned object.
    fn into_mock(self) -> Self::Mock;
}

/// Helper to create a mock object for types that implement [`Default`].
pub trait MockableDefault: Mockable {
    /// Create a new mock object wrapping the default value of the type.
    fn mock() -> Self::Mock;
}

impl<X> MockableDefault for X
where
    X: Mockable + Default,
{
    fn mock() -> Self::Mock {
        Self::default().into_mock()
    }
}
