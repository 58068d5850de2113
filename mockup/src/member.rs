//! The [`member`](self) module contains the handle a test uses to stub and
//! check one mocked method of one mock object.

use std::marker::PhantomData;

use crate::{Action, Matcher, Method, MockState, Sequence};

/// Handle to one mocked method `M` of one mock object.
///
/// The [`mock!`](crate::mock) macro generates a `mock_<method>` accessor for
/// every mocked method that returns this handle. The [`when!`](crate::when)
/// and [`invoked!`](crate::invoked) macros are built on top of it.
#[must_use]
pub struct Member<'a, M> {
    state: &'a MockState,
    _method: PhantomData<fn() -> M>,
}

impl<'a, M: Method> Member<'a, M> {
    /// Create a new handle for method `M` of the mock object `state`
    /// belongs to.
    pub fn new(state: &'a MockState) -> Self {
        Self {
            state,
            _method: PhantomData,
        }
    }

    /// Start the registration of an action for calls matched by `matcher`.
    ///
    /// The action is registered once it is passed to [`When::will`].
    pub fn when<X>(&self, matcher: X) -> When<'a, M, X>
    where
        X: Matcher<M::Args> + Send + Sync + 'static,
    {
        When {
            state: self.state,
            matcher,
            _method: PhantomData,
        }
    }

    /// Returns `true` if any recorded call is matched by `matcher`.
    pub fn invoked<X>(&self, matcher: X) -> bool
    where
        X: Matcher<M::Args>,
    {
        self.state.was_invoked::<M, X>(&matcher)
    }

    /// Returns `true` if a call that happened after the current position of
    /// `seq` is matched by `matcher`, and moves `seq` to that call.
    pub fn invoked_in<X>(&self, seq: &mut Sequence, matcher: X) -> bool
    where
        X: Matcher<M::Args>,
    {
        self.state.was_invoked_in_sequence::<M, X>(seq, &matcher)
    }

    /// Number of recorded calls.
    #[must_use]
    pub fn invocations(&self) -> usize {
        self.state.invocation_count::<M>()
    }
}

impl<M> std::fmt::Debug for Member<'_, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Member")
            .field("state", self.state)
            .field("method", &std::any::type_name::<M>())
            .finish()
    }
}

/// Pending registration of an action, created by [`Member::when`].
#[must_use = "The action is only registered once `will` is called"]
pub struct When<'a, M, X> {
    state: &'a MockState,
    matcher: X,
    _method: PhantomData<fn() -> M>,
}

impl<M, X> When<'_, M, X>
where
    M: Method,
    X: Matcher<M::Args> + Send + Sync + 'static,
{
    /// Register `action` to be executed for the matched calls.
    ///
    /// `action` may be any closure taking the argument tuple of the method,
    /// or one of [`return_`](crate::return_), [`throw_`](crate::throw_) and
    /// [`invoke`](crate::invoke).
    pub fn will<A>(self, action: A)
    where
        A: Action<M::Args, M::Output> + Send + 'static,
    {
        self.state.register::<M, X, A>(self.matcher, action);
    }
}

impl<M, X> std::fmt::Debug for When<'_, M, X> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("When")
            .field("state", self.state)
            .field("method", &std::any::type_name::<M>())
            .finish_non_exhaustive()
    }
}
