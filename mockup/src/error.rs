//! The [`error`](self) module contains the errors a mocked call may fail with.

use thiserror::Error as ThisError;

/// Errors raised by the dispatch engine of a mock object.
///
/// Errors a behavior raises on purpose (see [`throw_`](crate::throw_)) are
/// not part of this type: they are propagated to the caller untouched.
#[derive(Debug, Clone, Eq, PartialEq, ThisError)]
pub enum Error {
    /// No registered action matched the call and the return type of the
    /// method has no default value.
    #[error("No action registered for `{method}` matching the arguments {args} and its return type has no default value")]
    NoActionRegistered {
        /// Name of the called method.
        method: &'static str,

        /// Debug representation of the call arguments.
        args: String,
    },

    /// The matched behavior was called again while it was still running.
    #[error("Behavior of `{method}` was re-entered while it was still running")]
    BehaviorReentered {
        /// Name of the called method.
        method: &'static str,
    },
}
