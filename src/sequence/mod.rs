use std::fmt::{self, Display};

pub mod error;
pub mod prelude;
pub mod traits;

use error::{Result, SequenceError};
use traits::{Allocation, Cursor, Length, Operation, SnapShot};

/// Capacity of a sequence created with [`Sequence::new`].
pub const DEFAULT_CAPACITY: usize = 10;

#[derive(Debug, Clone)]
struct Container<T> {
    slots: Box<[Option<T>]>,
    length: usize,
}

impl <T> Container<T> {
    fn allocate(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            length: 0,
        }
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }
}

/// ### -> `Sequence<T>` - A resizable, cursor-addressed sequence.
///
/// `Sequence<T>` stores its elements contiguously in a backing store of
/// exactly `capacity` slots and designates at most one of them as the
/// "current" element. Insertion, removal and traversal are expressed relative
/// to that cursor rather than through explicit indices.
///
/// ### -> `Invariants`
///
/// 1. **Length ≤ Capacity**: the number of live elements never exceeds the number of slots.
/// 2. **Valid Cursor**: the cursor is `None` or an index below the length.
/// 3. **Contiguous Elements**: slots `[0..length)` hold the elements in order; slots at or beyond `length` are empty.
///
/// Violations panic, as they indicate a bug in this module rather than a user error.
///
/// ### -> `Growth`
///
/// When an insertion finds the store full, the capacity becomes
/// `2 * capacity + 1`. [`Allocation::ensure_capacity`] and
/// [`Allocation::trim_to_size`] reallocate to an exact size instead.
///
/// ### -> `Traits Implemented`
///
/// - **`Allocation`**: construction and capacity management.
/// - **`Length`**: element count.
/// - **`Cursor<T>`**: cursor queries and forward traversal.
/// - **`Operation<T>`**: cursor-relative insertion and removal, bulk append, indexed reads.
/// - **`SnapShot<T>`**: independent `Vec<T>` copies.
/// - **`Clone`**: deep copy with its own store and the same cursor.
/// - **`PartialEq`/`Eq`**: same length, same cursor, same elements; capacity is ignored.
/// - **`Display`**: `{A, >B} (capacity = 5)`, with `>` marking the current element.
///
/// ### -> `Usage Example`
///
/// ```
/// use cursorseq::sequence::prelude::*;
///
/// let mut sequence = Sequence::<String>::new();
/// sequence.add_after("A".to_string());
/// assert_eq!(sequence.to_string(), "{>A} (capacity = 10)");
///
/// sequence.add_after("B".to_string());
/// assert_eq!(sequence.to_string(), "{A, >B} (capacity = 10)");
///
/// let copy = sequence.clone();
/// sequence.remove_current();
/// assert_eq!(copy.to_string(), "{A, >B} (capacity = 10)");
/// assert_ne!(sequence, copy);
/// ```
#[derive(Debug, Clone)]
pub struct Sequence<T> {
    container: Container<T>,
    cursor: Option<usize>,
}

impl <T> Sequence<T> {
    /// Creates an empty sequence with [`DEFAULT_CAPACITY`] slots.
    #[must_use]
    pub fn new() -> Self {
        Self::allocate(DEFAULT_CAPACITY)
    }

    /// Moves every live element into a fresh store of exactly `upto` slots.
    fn resize(&mut self, upto: usize) {
        let length = self.container.length;
        assert!(upto >= length, "Cannot resize to {} slots while holding {} elements.", upto, length);

        tracing::trace!(from = self.container.capacity(), to = upto, length, "resizing sequence");

        let mut container_new = Container::allocate(upto);
        for (slot, value) in container_new.slots.iter_mut().zip(self.container.slots[..length].iter_mut()) {
            *slot = value.take();
        }
        container_new.length = length;

        self.container = container_new;
    }

    fn generate_capacity(&self, current: usize) -> usize {
        current.saturating_mul(2).saturating_add(1)
    }

    /// Grows the store when it has no free slot left.
    fn reserve_one(&mut self) {
        let length = self.container.length;
        let capacity = self.container.capacity();
        assert!(length <= capacity, "Invariant violation: length {} exceeds capacity {}.", length, capacity);

        if length == capacity {
            let upto = self.generate_capacity(capacity);
            self.resize(upto);
        }
    }

    /// Opens a gap at `index` by shifting `[index..length)` one slot later and writes `value` into it.
    /// The caller must have reserved a free slot.
    fn insert_at(&mut self, index: usize, value: T) {
        let length = self.container.length;
        assert!(index <= length, "Insertion index {} beyond length {}.", index, length);
        assert!(length < self.container.capacity(), "No free slot to insert into.");

        // slots[length] is empty, so rotating brings that empty slot to `index`
        self.container.slots[index..=length].rotate_right(1);
        self.container.slots[index] = Some(value);
        self.container.length = length + 1;
    }

    fn live(&self, index: usize) -> &T {
        match self.container.slots[index].as_ref() {
            Some(value) => value,
            None => panic!("Invariant violation: slot {} within length {} is empty.", index, self.container.length),
        }
    }

    fn elements(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.container.length).map(move |index| self.live(index))
    }
}

impl <T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl <T> Allocation for Sequence<T> {
    fn allocate(capacity: usize) -> Self {
        Self {
            container: Container::allocate(capacity),
            cursor: None,
        }
    }

    fn capacity(&self) -> usize {
        self.container.capacity()
    }

    fn ensure_capacity(&mut self, minimum: usize) {
        if self.container.capacity() < minimum {
            self.resize(minimum);
        }
    }

    fn trim_to_size(&mut self) {
        let length = self.container.length;
        if self.container.capacity() > length {
            tracing::debug!(from = self.container.capacity(), to = length, "trimming sequence");
            self.resize(length);
        }
    }
}

impl <T> Length for Sequence<T> {
    fn length(&self) -> usize {
        self.container.length
    }
}

impl <T> Cursor<T> for Sequence<T> {
    fn current_index(&self) -> Option<usize> {
        self.cursor
    }

    fn current(&self) -> Option<&T> {
        self.cursor.map(|index| self.live(index))
    }

    fn start(&mut self) {
        self.cursor = if self.container.length > 0 { Some(0) } else { None };
    }

    fn advance(&mut self) {
        if let Some(index) = self.cursor {
            self.cursor = if index + 1 < self.container.length { Some(index + 1) } else { None };
        }
    }
}

impl <T> Operation<T> for Sequence<T> {
    fn add_before(&mut self, value: T) {
        self.reserve_one();

        // without a current element (empty or unset) the value goes to the front
        let index = self.cursor.unwrap_or(0);
        self.insert_at(index, value);
        self.cursor = Some(index);
    }

    fn add_after(&mut self, value: T) {
        self.reserve_one();

        let index = match self.cursor {
            Some(current) => current + 1,
            None => self.container.length,
        };
        self.insert_at(index, value);
        self.cursor = Some(index);
    }

    fn add_all(&mut self, other: &Self)
    where
        T: Clone
    {
        let required = self.container.length + other.container.length;
        if required > self.container.capacity() {
            self.ensure_capacity(required);
        }

        let cursor_original = self.cursor;
        self.cursor = self.container.length.checked_sub(1);

        for value in other.elements() {
            self.add_after(value.clone());
        }

        self.cursor = cursor_original;
    }

    fn remove_current(&mut self) -> Option<T> {
        let index = self.cursor?;
        let length = self.container.length;

        let removed = self.container.slots[index].take();
        // the emptied slot travels to the end of the live range
        self.container.slots[index..length].rotate_left(1);
        self.container.length = length - 1;

        if index + 1 == length {
            self.cursor = None;
        }

        removed
    }

    fn clear(&mut self) {
        tracing::debug!(length = self.container.length, capacity = self.container.capacity(), "clearing sequence");

        let length = self.container.length;
        self.container.slots[..length].iter_mut().for_each(|slot| *slot = None);
        self.container.length = 0;
        self.cursor = None;
    }

    fn get(&self, index: usize) -> Result<&T> {
        let length = self.container.length;
        if index >= length {
            return Err(SequenceError::IndexOutOfBounds { index, length });
        }

        Ok(self.live(index))
    }
}

impl <T> SnapShot<T> for Sequence<T>
where
    T: Clone
{
    fn snapshot(&self) -> Vec<T> {
        self.elements().cloned().collect()
    }
}

impl <T> PartialEq for Sequence<T>
where
    T: PartialEq
{
    fn eq(&self, other: &Self) -> bool {
        let length = self.container.length;
        if length != other.container.length || self.cursor != other.cursor {
            return false;
        }

        self.container.slots[..length] == other.container.slots[..length]
    }
}

impl <T> Eq for Sequence<T> where T: Eq {}

impl <T> Display for Sequence<T>
where
    T: Display
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, value) in self.elements().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            if self.cursor == Some(index) {
                write!(f, ">")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "}} (capacity = {})", self.container.capacity())
    }
}

#[cfg(test)]
mod tests;
