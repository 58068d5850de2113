//! The [`misc`](self) module contains the process wide counters shared by
//! all mock objects.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Get the next call order.
///
/// The returned values are unique and strictly increasing over the whole
/// lifetime of the process, across all mock objects and methods. The first
/// value is `1`, so a fresh [`Sequence`](crate::Sequence) (order `0`) sees
/// every recorded call.
pub fn next_order() -> usize {
    NEXT_ORDER.fetch_add(1, Ordering::Relaxed) + 1
}

/// Get the next id for a mock object.
pub fn next_mock_id() -> usize {
    NEXT_MOCK_ID.fetch_add(1, Ordering::Relaxed)
}

static NEXT_ORDER: AtomicUsize = AtomicUsize::new(0);
static NEXT_MOCK_ID: AtomicUsize = AtomicUsize::new(0);
