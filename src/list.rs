//! The array-backed list.
//!
//! `ArrayList<T>` keeps its elements in a contiguous slot buffer that doubles
//! when full and never shrinks. Every structural change (an insertion or a
//! removal at any position) increments a modification counter; iterators
//! snapshot that counter and fail fast once it moves.
//!
//! # Sharing model
//!
//! The buffer and the counter live behind an `Rc`. The list is the only strong
//! owner; iterators hold a `Weak` back-reference and look the state up on every
//! call. An iterator therefore never borrows the list, so the list can be
//! mutated while an iterator is alive, and the iterator notices lazily.
//!
//! Neither the list nor its iterators are `Send` or `Sync`. Sharing a list
//! across threads needs external synchronization around an owned copy.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, Ref, RefCell};
use core::convert::Infallible;
use core::fmt;

use crate::buffer::Buffer;
use crate::error::{ListError, Result};
use crate::iter::Iter;

/// Capacity used by [`ArrayList::new`].
pub const DEFAULT_CAPACITY: usize = 100;

/// State shared between a list and its iterators.
pub(crate) struct Shared<T> {
    pub(crate) buffer: RefCell<Buffer<T>>,
    mod_count: Cell<u64>,
}

impl<T> Shared<T> {
    #[inline]
    pub(crate) fn mod_count(&self) -> u64 {
        self.mod_count.get()
    }

    /// Records one structural modification at `index`, leaving `len` elements.
    pub(crate) fn record_modification(&self, op: &'static str, index: usize, len: usize) {
        let mod_count = self.mod_count.get() + 1;
        self.mod_count.set(mod_count);
        tracing::trace!(op, index, len, mod_count, "structural modification");
    }
}

/// An index-addressable, insertion-ordered list backed by a growable buffer.
///
/// See the [module docs](self) for the sharing and iteration model.
pub struct ArrayList<T> {
    shared: Rc<Shared<T>>,
}

static_assertions::assert_not_impl_any!(ArrayList<u8>: Send, Sync);

impl<T> ArrayList<T> {
    /// Creates an empty list with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty list able to hold `capacity` elements before growing.
    ///
    /// A zero capacity is accepted; the first insertion grows it to one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            shared: Rc::new(Shared {
                buffer: RefCell::new(Buffer::with_capacity(capacity)),
                mod_count: Cell::new(0),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.shared.buffer.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.buffer.borrow().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.shared.buffer.borrow().capacity()
    }

    /// Current value of the modification counter.
    pub fn mod_count(&self) -> u64 {
        self.shared.mod_count()
    }

    // The `borrow_mut` calls below cannot conflict: `Ref`s handed out by this
    // list are tied to `&self`, and iterators never hold a borrow across calls.

    /// Inserts at a position already known to be in `0..=len`.
    fn insert_unchecked(&mut self, op: &'static str, index: usize, element: T) {
        let mut buffer = self.shared.buffer.borrow_mut();
        buffer.insert(index, element);
        self.shared.record_modification(op, index, buffer.len());
    }

    /// Runs a removal against the buffer, counting it only if it succeeds.
    ///
    /// `f` returns the removed element together with the index it held.
    fn remove_with(
        &mut self,
        op: &'static str,
        f: impl FnOnce(&mut Buffer<T>) -> Result<(usize, T)>,
    ) -> Result<T> {
        let mut buffer = self.shared.buffer.borrow_mut();
        let (index, element) = f(&mut *buffer)?;
        self.shared.record_modification(op, index, buffer.len());
        Ok(element)
    }

    pub fn add_front(&mut self, element: T) {
        self.insert_unchecked("add_front", 0, element);
    }

    pub fn add_rear(&mut self, element: T) {
        let len = self.len();
        self.insert_unchecked("add_rear", len, element);
    }

    /// Appends `element`. Same as [`add_rear`](Self::add_rear).
    pub fn add(&mut self, element: T) {
        self.add_rear(element);
    }

    /// Inserts `element` at `index`, shifting later elements toward the rear.
    ///
    /// `index == len()` appends. Fails with [`ListError::IndexOutOfBounds`]
    /// when `index > len()`.
    pub fn insert(&mut self, index: usize, element: T) -> Result<()> {
        let len = self.len();
        if index > len {
            return Err(ListError::IndexOutOfBounds { index, len });
        }
        self.insert_unchecked("insert", index, element);
        Ok(())
    }

    /// Inserts `element` right after the first occurrence of `target`.
    pub fn insert_after(&mut self, element: T, target: &T) -> Result<()>
    where
        T: PartialEq,
    {
        let index = self.index_of(target).ok_or(ListError::NotFound)?;
        self.insert_unchecked("insert_after", index + 1, element);
        Ok(())
    }

    pub fn remove_first(&mut self) -> Result<T> {
        self.remove_with("remove_first", |buffer| {
            let element = buffer.remove(0).ok_or(ListError::Empty)?;
            Ok((0, element))
        })
    }

    /// Removes the last element in constant time.
    pub fn remove_last(&mut self) -> Result<T> {
        self.remove_with("remove_last", |buffer| {
            let element = buffer.pop().ok_or(ListError::Empty)?;
            Ok((buffer.len(), element))
        })
    }

    /// Removes the first element equal to `element` and returns it.
    pub fn remove_value(&mut self, element: &T) -> Result<T>
    where
        T: PartialEq,
    {
        self.remove_with("remove_value", |buffer| {
            let index = buffer.position(element).ok_or(ListError::NotFound)?;
            let element = buffer.remove(index).ok_or(ListError::NotFound)?;
            Ok((index, element))
        })
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// toward the front.
    ///
    /// Fails with [`ListError::Empty`] on an empty list and with
    /// [`ListError::IndexOutOfBounds`] when `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.remove_with("remove", |buffer| {
            if buffer.is_empty() {
                return Err(ListError::Empty);
            }
            let len = buffer.len();
            let element = buffer
                .remove(index)
                .ok_or(ListError::IndexOutOfBounds { index, len })?;
            Ok((index, element))
        })
    }

    /// Removes every element. Capacity is kept.
    pub fn clear(&mut self) {
        let mut buffer = self.shared.buffer.borrow_mut();
        buffer.clear();
        self.shared.record_modification("clear", 0, 0);
    }

    /// Replaces the element at `index` and returns the previous one.
    ///
    /// Not a structural change: live iterators stay valid.
    pub fn set(&mut self, index: usize, element: T) -> Result<T> {
        let mut buffer = self.shared.buffer.borrow_mut();
        let len = buffer.len();
        buffer
            .replace(index, element)
            .ok_or(ListError::IndexOutOfBounds { index, len })
    }

    pub fn get(&self, index: usize) -> Result<Ref<'_, T>> {
        let buffer = self.shared.buffer.borrow();
        let len = buffer.len();
        Ref::filter_map(buffer, |buffer| buffer.get(index))
            .map_err(|_| ListError::IndexOutOfBounds { index, len })
    }

    pub fn first(&self) -> Result<Ref<'_, T>> {
        Ref::filter_map(self.shared.buffer.borrow(), |buffer| buffer.get(0))
            .map_err(|_| ListError::Empty)
    }

    pub fn last(&self) -> Result<Ref<'_, T>> {
        Ref::filter_map(self.shared.buffer.borrow(), Buffer::last).map_err(|_| ListError::Empty)
    }

    /// Index of the first element equal to `element`, or `None`.
    pub fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.shared.buffer.borrow().position(element)
    }

    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(element).is_some()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.shared.buffer.borrow().iter().cloned().collect()
    }

    /// Returns a fail-fast forward iterator over clones of the elements.
    pub fn iter(&self) -> Iter<T> {
        Iter::new(&self.shared)
    }

    /// Bidirectional list iteration is not implemented by this list.
    ///
    /// Always fails with [`ListError::Unsupported`].
    pub fn list_iter(&self, _start: usize) -> Result<Infallible> {
        Err(ListError::Unsupported("bidirectional list iteration"))
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy with its own buffer and a fresh modification counter.
impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        let buffer = self.shared.buffer.borrow();
        let mut list = Self::with_capacity(buffer.capacity());
        list.extend(buffer.iter().cloned());
        list
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        let lhs = self.shared.buffer.borrow();
        let rhs = other.shared.buffer.borrow();
        lhs.len() == rhs.len() && lhs.iter().eq(rhs.iter())
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.shared.buffer.borrow().iter())
            .finish()
    }
}

/// Renders as `[a, b, c]`, or `[]` when empty.
impl<T: fmt::Display> fmt::Display for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.shared.buffer.borrow().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add_rear(element);
        }
    }
}

impl<'a, T: Clone> IntoIterator for &'a ArrayList<T> {
    type Item = Result<T>;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;
