//! The [`method`](self) module defines the identity of a mocked method.

use std::fmt::Debug;

/// Identifies one mocked method of one trait.
///
/// Implementations are zero sized token types generated by the
/// [`mock!`](crate::mock) macro, one per mocked method. The state of a mock
/// object is keyed by the [`TypeId`](std::any::TypeId) of the token.
pub trait Method: 'static {
    /// Snapshot of the arguments of one call.
    ///
    /// This is `()` for no arguments, `(A,)` for one argument and
    /// `(A, B, ...)` for more.
    type Args: Clone + Debug + Send + 'static;

    /// Return type of the method.
    type Output: 'static;

    /// Human readable name of the method, formatted as `Trait::method`.
    const NAME: &'static str;

    /// `true` if the mocked method returns a reference.
    ///
    /// The values of such a method are kept in an
    /// [`OutputSlot`](crate::OutputSlot) of the mock object and the fallback
    /// returned by [`default_action`](Self::default_action) only initializes
    /// that slot. An unmatched call returns the current value of the slot
    /// again, so changes made through a returned `&mut` reference are
    /// visible to later calls.
    const RETURNS_REFERENCE: bool = false;

    /// Fallback used when no registered action matches a call.
    ///
    /// It is installed once as the first (lowest priority) action when the
    /// state of the method is created. `None` means the return type has no
    /// usable empty value and an unmatched call fails with
    /// [`Error::NoActionRegistered`](crate::Error::NoActionRegistered).
    fn default_action() -> Option<fn(Self::Args) -> Self::Output>;
}
