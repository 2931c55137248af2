//! Slot storage backing [`ArrayList`](crate::ArrayList).
//!
//! The buffer is a boxed slice of `Option<T>` slots. Occupied slots always form
//! the prefix `0..len`; every slot at or past `len` is `None`. Nothing here
//! validates indices beyond returning `None`: callers own the error reporting.

use alloc::boxed::Box;
use core::iter;

/// Capacity used when doubling a zero-capacity buffer.
const MIN_NON_ZERO_CAP: usize = 1;

pub(crate) struct Buffer<T> {
    slots: Box<[Option<T>]>,
    len: usize,
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> Buffer<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: empty_slots(capacity),
            len: 0,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn reserve_one(&mut self) {
        if self.len == self.capacity() {
            self.grow();
        }
    }

    #[cold]
    fn grow(&mut self) {
        debug_assert_eq!(self.len, self.capacity());
        let old_cap = self.capacity();
        let new_cap = old_cap
            .checked_mul(2)
            .expect("capacity overflow")
            .max(MIN_NON_ZERO_CAP);

        let mut slots = empty_slots(new_cap);
        for (dst, src) in slots.iter_mut().zip(self.slots[..self.len].iter_mut()) {
            *dst = src.take();
        }
        // The old allocation is released here.
        self.slots = slots;

        tracing::debug!(
            old_capacity = old_cap,
            new_capacity = new_cap,
            len = self.len,
            "grew list buffer"
        );
    }

    /// Inserts `value` at `index`, moving `index..len` one slot toward the rear.
    ///
    /// `index` must be at most `len`.
    pub fn insert(&mut self, index: usize, value: T) {
        debug_assert!(index <= self.len);
        self.reserve_one();
        // Walk from the rear so the empty slot at `len` bubbles down to `index`.
        for i in (index..self.len).rev() {
            self.slots.swap(i, i + 1);
        }
        self.slots[index] = Some(value);
        self.len += 1;
    }

    /// Removes the element at `index`, moving `index + 1..len` one slot toward
    /// the front. Returns `None` if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let value = self.slots[index].take();
        for i in index..self.len - 1 {
            self.slots.swap(i, i + 1);
        }
        self.len -= 1;
        value
    }

    /// Removes the last element without shifting anything.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        self.slots[self.len].take()
    }

    /// Replaces the element at `index`, returning the previous one.
    pub fn replace(&mut self, index: usize, value: T) -> Option<T> {
        self.slots[..self.len].get_mut(index)?.replace(value)
    }

    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots[..self.len].get(index)?.as_ref()
    }

    pub fn last(&self) -> Option<&T> {
        self.get(self.len.checked_sub(1)?)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots[..self.len].iter().flatten()
    }

    /// First index holding a value equal to `value`.
    pub fn position(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|element| element == value)
    }
}
