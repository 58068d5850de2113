//! The [`state`](self) module implements the per mock object state: the
//! registered actions and the recorded invocations of every mocked method,
//! together with the dispatch and assertion engines working on them.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::matcher::Displayed;
use crate::{next_mock_id, next_order, Action, Error, Matcher, Method, OutputSlot, Sequence};

type SharedMatcher<M> = Arc<dyn Matcher<<M as Method>::Args> + Send + Sync>;
type SharedAction<M> =
    Arc<Mutex<Box<dyn Action<<M as Method>::Args, <M as Method>::Output> + Send>>>;

/// State of one mock object.
///
/// The state of each mocked method is created on the first interaction with
/// that method and lives until the [`MockState`] is dropped.
pub struct MockState {
    id: usize,
    members: Mutex<HashMap<TypeId, Box<dyn Any + Send>>>,
}

impl MockState {
    /// Create a new empty state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: next_mock_id(),
            members: Mutex::default(),
        }
    }

    /// Id of the mock object this state belongs to.
    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Register a new `action` for method `M` that is executed for calls
    /// matched by `matcher`.
    ///
    /// Actions registered later take precedence over actions registered
    /// earlier.
    pub fn register<M, X, A>(&self, matcher: X, action: A)
    where
        M: Method,
        X: Matcher<M::Args> + Send + Sync + 'static,
        A: Action<M::Args, M::Output> + Send + 'static,
    {
        tracing::trace!(
            mock = self.id,
            method = M::NAME,
            matcher = %Displayed(&matcher),
            "register action"
        );

        self.with_member::<M, _, _>(|member| {
            member.push_action(Arc::new(matcher), Box::new(action));
        });
    }

    /// Execute a call to method `M` with the passed `args`.
    ///
    /// The call is recorded exactly once, before the matching action is
    /// executed. Actions are tried from the most recently registered to the
    /// first one. Matchers and the action are executed without holding the
    /// lock of the state, so they may use the mock object themselves.
    ///
    /// # Errors
    /// Returns [`Error::NoActionRegistered`] if no action matched the call,
    /// and [`Error::BehaviorReentered`] if the matched action is currently
    /// running further up the call stack.
    pub fn dispatch<M: Method>(&self, args: M::Args) -> Result<M::Output, Error> {
        let actions = self.with_member::<M, _, _>(|member| {
            let order = next_order();

            tracing::trace!(mock = self.id, method = M::NAME, order, args = ?args, "record invocation");

            member.invocations.push(Invocation {
                order,
                args: args.clone(),
            });

            member.actions.clone()
        });

        let action = actions
            .iter()
            .rev()
            .find(|entry| entry.matcher.matches(&args))
            .map(|entry| entry.action.clone());

        let Some(action) = action else {
            tracing::debug!(mock = self.id, method = M::NAME, args = ?args, "no matching action");

            return Err(Error::NoActionRegistered {
                method: M::NAME,
                args: format!("{args:?}"),
            });
        };

        let Some(mut action) = action.try_lock() else {
            return Err(Error::BehaviorReentered { method: M::NAME });
        };

        Ok(Action::exec(&mut **action, args))
    }

    /// Same as [`dispatch`](Self::dispatch) but panics if the call fails.
    ///
    /// This is used by the trait implementations generated by the
    /// [`mock!`](crate::mock) macro, because the error can not be passed
    /// through the signature of the mocked method.
    ///
    /// # Panics
    /// Panics with the message of the [`Error`] if the call could not be
    /// executed.
    pub fn invoke<M: Method>(&self, args: M::Args) -> M::Output {
        match self.dispatch::<M>(args) {
            Ok(output) => output,
            Err(err) => panic!("{err}"),
        }
    }

    /// Execute a call to method `M` that returns a reference into `slot`.
    ///
    /// The value produced by the matching action is added to `slot`. If no
    /// action matched, the current value of `slot` is returned again, and
    /// the slot is initialized using [`Method::default_action`] if it is
    /// still empty.
    ///
    /// # Panics
    /// Panics if the call could not be executed, see [`invoke`](Self::invoke).
    pub fn invoke_ref<'a, M: Method>(
        &self,
        slot: &'a OutputSlot<M::Output>,
        args: M::Args,
    ) -> &'a M::Output {
        let fallback = args.clone();

        match self.dispatch::<M>(args) {
            Ok(output) => slot.push(output),
            Err(err @ Error::NoActionRegistered { .. }) => {
                slot.last_or_insert(|| Self::fallback::<M>(fallback, &err))
            }
            Err(err) => panic!("{err}"),
        }
    }

    /// Same as [`invoke_ref`](Self::invoke_ref) for methods that return a
    /// mutable reference. The value produced by the matching action replaces
    /// the values of `slot`.
    ///
    /// # Panics
    /// Panics if the call could not be executed, see [`invoke`](Self::invoke).
    pub fn invoke_mut<'a, M: Method>(
        &self,
        slot: &'a mut OutputSlot<M::Output>,
        args: M::Args,
    ) -> &'a mut M::Output {
        let fallback = args.clone();

        match self.dispatch::<M>(args) {
            Ok(output) => slot.replace(output),
            Err(err @ Error::NoActionRegistered { .. }) => {
                slot.last_or_insert_mut(|| Self::fallback::<M>(fallback, &err))
            }
            Err(err) => panic!("{err}"),
        }
    }

    fn fallback<M: Method>(args: M::Args, err: &Error) -> M::Output {
        match M::default_action() {
            Some(default) => default(args),
            None => panic!("{err}"),
        }
    }

    /// Returns `true` if any recorded call of method `M` is matched by
    /// `matcher`.
    pub fn was_invoked<M, X>(&self, matcher: &X) -> bool
    where
        M: Method,
        X: Matcher<M::Args> + ?Sized,
    {
        let invocations = self.with_member::<M, _, _>(|member| member.invocations.clone());

        invocations
            .iter()
            .any(|invocation| matcher.matches(&invocation.args))
    }

    /// Returns `true` if a call of method `M` that happened after the
    /// current position of `seq` is matched by `matcher`.
    ///
    /// On success `seq` is moved to the matched call, so the call (and every
    /// call before it) is not seen by further assertions using `seq`. On
    /// failure `seq` is left unchanged.
    pub fn was_invoked_in_sequence<M, X>(&self, seq: &mut Sequence, matcher: &X) -> bool
    where
        M: Method,
        X: Matcher<M::Args> + ?Sized,
    {
        let invocations = self.with_member::<M, _, _>(|member| {
            let start = member
                .invocations
                .partition_point(|invocation| invocation.order <= seq.order());

            member.invocations[start..].to_vec()
        });

        let found = invocations
            .iter()
            .find(|invocation| matcher.matches(&invocation.args))
            .map(|invocation| invocation.order);

        match found {
            Some(order) => {
                seq.advance(order);

                true
            }
            None => false,
        }
    }

    /// Number of recorded calls of method `M`.
    #[must_use]
    pub fn invocation_count<M: Method>(&self) -> usize {
        self.with_member::<M, _, _>(|member| member.invocations.len())
    }

    fn with_member<M, F, R>(&self, f: F) -> R
    where
        M: Method,
        F: FnOnce(&mut MemberState<M>) -> R,
    {
        let mut members = self.members.lock();
        let member = members
            .entry(TypeId::of::<M>())
            .or_insert_with(|| Box::new(MemberState::<M>::new()))
            .downcast_mut::<MemberState<M>>()
            .expect("Member state is keyed by the type id of its method");

        f(member)
    }
}

impl Default for MockState {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for MockState {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("MockState")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// Actions and invocations of one method of one mock object.
struct MemberState<M: Method> {
    actions: Vec<ActionEntry<M>>,
    invocations: Vec<Invocation<M::Args>>,
}

struct ActionEntry<M: Method> {
    matcher: SharedMatcher<M>,
    action: SharedAction<M>,
}

impl<M: Method> Clone for ActionEntry<M> {
    fn clone(&self) -> Self {
        Self {
            matcher: self.matcher.clone(),
            action: self.action.clone(),
        }
    }
}

/// One recorded call.
#[derive(Debug, Clone)]
struct Invocation<T> {
    order: usize,
    args: T,
}

impl<M: Method> MemberState<M> {
    fn new() -> Self {
        let mut ret = Self {
            actions: Vec::new(),
            invocations: Vec::new(),
        };

        if let Some(default) = M::default_action().filter(|_| !M::RETURNS_REFERENCE) {
            ret.push_action(Arc::new(crate::matcher::any()), Box::new(default));
        }

        ret
    }

    fn push_action(
        &mut self,
        matcher: SharedMatcher<M>,
        action: Box<dyn Action<M::Args, M::Output> + Send>,
    ) {
        self.actions.push(ActionEntry {
            matcher,
            action: Arc::new(Mutex::new(action)),
        });
    }
}
