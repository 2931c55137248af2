//! Fail-fast forward iteration over an [`ArrayList`](crate::ArrayList).
//!
//! An [`Iter`] remembers the list's modification count at creation. Every
//! operation compares that snapshot against the live counter and fails with
//! [`ListError::ConcurrentModification`] once they differ; the iterator never
//! yields a stale element. Removing through the iterator itself keeps it valid.
//!
//! ```
//! use iulist::{ArrayList, ListError};
//!
//! let mut list: ArrayList<&str> = ["a", "b", "c"].into_iter().collect();
//! let mut it = list.iter();
//! assert_eq!(it.try_next(), Ok("a"));
//!
//! list.remove_first().unwrap();
//! assert!(matches!(it.has_next(), Err(ListError::ConcurrentModification { .. })));
//! ```

use alloc::rc::{Rc, Weak};

use crate::error::{ListError, Result};
use crate::list::Shared;

/// Forward iterator returned by [`ArrayList::iter`](crate::ArrayList::iter).
///
/// Holds a non-owning back-reference: dropping the list while an iterator is
/// alive turns every further call into [`ListError::Detached`].
pub struct Iter<T> {
    list: Weak<Shared<T>>,
    next_index: usize,
    expected_mod_count: u64,
    /// Set by `next`, cleared by `remove`.
    can_remove: bool,
    /// Set once the `Iterator` impl has reported an error.
    fused: bool,
}

static_assertions::assert_not_impl_any!(Iter<u8>: Send, Sync);

impl<T> Iter<T> {
    pub(crate) fn new(shared: &Rc<Shared<T>>) -> Self {
        Self {
            list: Rc::downgrade(shared),
            next_index: 0,
            expected_mod_count: shared.mod_count(),
            can_remove: false,
            fused: false,
        }
    }

    /// Looks up the list and checks the modification snapshot.
    fn validated(&self) -> Result<Rc<Shared<T>>> {
        let shared = self.list.upgrade().ok_or(ListError::Detached)?;
        let actual = shared.mod_count();
        if actual != self.expected_mod_count {
            tracing::debug!(
                expected = self.expected_mod_count,
                actual,
                "list modified during iteration"
            );
            return Err(ListError::ConcurrentModification {
                expected: self.expected_mod_count,
                actual,
            });
        }
        Ok(shared)
    }

    pub fn has_next(&self) -> Result<bool> {
        let shared = self.validated()?;
        let len = shared.buffer.borrow().len();
        Ok(self.next_index < len)
    }

    /// Returns a clone of the next element and advances.
    ///
    /// Fails with [`ListError::Exhausted`] past the last element.
    pub fn try_next(&mut self) -> Result<T>
    where
        T: Clone,
    {
        let shared = self.validated()?;
        let element = shared
            .buffer
            .borrow()
            .get(self.next_index)
            .cloned()
            .ok_or(ListError::Exhausted)?;
        self.next_index += 1;
        self.can_remove = true;
        Ok(element)
    }

    /// Removes the element most recently returned by `try_next`.
    ///
    /// Fails with [`ListError::IllegalState`] unless `try_next` succeeded since
    /// creation or since the previous `remove`, and with
    /// [`ListError::Borrowed`] while a `Ref` obtained from the list is alive.
    pub fn remove(&mut self) -> Result<T> {
        let shared = self.validated()?;
        if !self.can_remove {
            return Err(ListError::IllegalState);
        }
        let index = self.next_index - 1;

        let mut buffer = shared
            .buffer
            .try_borrow_mut()
            .map_err(|_| ListError::Borrowed)?;
        let element = buffer.remove(index).ok_or(ListError::IllegalState)?;
        shared.record_modification("iter_remove", index, buffer.len());
        drop(buffer);

        self.expected_mod_count = shared.mod_count();
        self.next_index = index;
        self.can_remove = false;
        Ok(element)
    }
}

/// `for` loop support.
///
/// Exhaustion ends the loop. A fail-fast error is yielded once as
/// `Some(Err(_))`, after which the iterator returns `None`.
impl<T: Clone> Iterator for Iter<T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.fused {
            return None;
        }
        match self.try_next() {
            Ok(element) => Some(Ok(element)),
            Err(ListError::Exhausted) => None,
            Err(error) => {
                self.fused = true;
                Some(Err(error))
            }
        }
    }
}
