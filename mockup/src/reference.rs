//! The [`reference`](self) module implements recording of arguments by
//! reference.

use std::borrow::{Borrow, ToOwned};
use std::fmt::{Debug, Formatter, Result as FmtResult};

/// Argument snapshot of a reference parameter that keeps the identity of the
/// referenced value.
///
/// The [`mock!`](crate::mock) macro records a reference parameter as a
/// [`Ref`] if the parameter is annotated with `#[mockup(by_ref)]`. Next to a
/// copy of the value taken at call time the snapshot stores the address of
/// the caller's value, so assertions can check which object was passed
/// using [`Ref::is`]. The address is never dereferenced.
pub struct Ref<T: ToOwned + ?Sized> {
    addr: usize,
    value: T::Owned,
}

impl<T: ToOwned + ?Sized> Ref<T> {
    /// Create a new [`Ref`] for `value`.
    pub fn new(value: &T) -> Self {
        Self {
            addr: addr_of(value),
            value: value.to_owned(),
        }
    }

    /// Get the value the argument had at call time.
    #[must_use]
    pub fn get(&self) -> &T {
        self.value.borrow()
    }

    /// Returns `true` if the recorded argument referred to `value` itself.
    #[must_use]
    pub fn is(&self, value: &T) -> bool {
        self.addr == addr_of(value)
    }
}

fn addr_of<T: ?Sized>(value: &T) -> usize {
    (value as *const T).cast::<()>() as usize
}

impl<T> Clone for Ref<T>
where
    T: ToOwned + ?Sized,
    T::Owned: Clone,
{
    fn clone(&self) -> Self {
        Self {
            addr: self.addr,
            value: self.value.clone(),
        }
    }
}

impl<T: Debug + ToOwned + ?Sized> Debug for Ref<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Ref({:?})", self.get())
    }
}
