//! The [`output`](self) module keeps the values returned by mocked methods
//! that return references.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::OnceLock;

/// Storage for the values a mocked method returns by reference.
///
/// The [`mock!`](crate::mock) macro adds one slot to the mock object for
/// every method that returns a reference. Each value stays alive until it is
/// replaced through `&mut` access or the mock object is dropped, so values
/// handed out through `&self` are never moved while they are borrowed.
pub struct OutputSlot<T> {
    head: OnceLock<Box<Node<T>>>,
}

struct Node<T> {
    value: T,
    next: OnceLock<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            next: OnceLock::new(),
        }
    }
}

impl<T> OutputSlot<T> {
    /// Create a new empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            head: OnceLock::new(),
        }
    }

    /// Returns `true` if no value was stored yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.get().is_none()
    }

    /// Get the most recently stored value.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        let mut node = self.head.get()?;
        while let Some(next) = node.next.get() {
            node = next;
        }

        Some(&node.value)
    }

    /// Store `value` as the most recent value and return a reference to it.
    ///
    /// Previously stored values stay untouched.
    pub fn push(&self, value: T) -> &T {
        let mut pending = Some(value);
        let mut cell = &self.head;

        loop {
            let mut stored = false;
            let node = cell.get_or_init(|| {
                stored = true;

                Box::new(Node::new(
                    pending.take().expect("Value is stored at most once"),
                ))
            });

            if stored {
                return &node.value;
            }

            cell = &node.next;
        }
    }

    /// Get the most recently stored value, storing the result of `init` if
    /// the slot is empty.
    pub fn last_or_insert<F>(&self, init: F) -> &T
    where
        F: FnOnce() -> T,
    {
        match self.last() {
            Some(value) => value,
            None => self.push(init()),
        }
    }

    /// Drop all stored values and store `value` instead.
    pub fn replace(&mut self, value: T) -> &mut T {
        self.head = OnceLock::new();

        self.last_or_insert_mut(|| value)
    }

    /// Mutable version of [`last_or_insert`](Self::last_or_insert).
    pub fn last_or_insert_mut<F>(&mut self, init: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if self.is_empty() {
            let _ = self.head.set(Box::new(Node::new(init())));
        }

        let mut node: &mut Node<T> = self
            .head
            .get_mut()
            .expect("Output slot was initialized above");
        while node.next.get().is_some() {
            node = node.next.get_mut().expect("Next node was checked above");
        }

        &mut node.value
    }
}

impl<T> Default for OutputSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for OutputSlot<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("OutputSlot")
            .field("last", &self.last())
            .finish()
    }
}
