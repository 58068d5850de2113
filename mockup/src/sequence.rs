//! The [`sequence`](self) module contains the cursor used to check the
//! order of recorded calls.

/// A sequence is used to assert that calls happened in a specific order.
///
/// The sequence stores the order of the last call that satisfied an
/// ordered assertion. Each successful assertion only sees calls that
/// happened after that call and moves the cursor forward, so a call is
/// never matched twice and the same cursor can be shared between
/// different methods and different mock objects.
#[must_use]
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq)]
pub struct Sequence {
    order: usize,
}

impl Sequence {
    /// Create a new sequence that starts before the first recorded call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Order of the last call matched by this sequence, `0` if none.
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    pub(crate) fn advance(&mut self, order: usize) {
        debug_assert!(order > self.order);

        self.order = order;
    }
}
