use crate::sequence::error::Result;

/// ### -> `Allocation Trait`.
///
/// Provides allocation and capacity management for sequences and is the
/// foundational trait for every other sequence trait.
///
/// The capacity reported by this trait is exact: it is the number of slots in
/// the backing store, never an allocator-rounded figure.
///
/// ### -> `Methods`
/// - `allocate(capacity: usize) -> Self`:
/// Creates an empty sequence with exactly `capacity` slots and no current element.
/// - `capacity() -> usize`:
/// Returns the number of slots in the backing store.
/// - `ensure_capacity(minimum: usize)`:
/// Grows the backing store to exactly `minimum` slots if it is smaller.
/// - `trim_to_size()`:
/// Shrinks the backing store to exactly the number of live elements.
///
/// ### -> `Usage`
///
/// ```
/// use cursorseq::sequence::prelude::*;
///
/// let mut sequence = Sequence::<String>::allocate(2);
/// assert_eq!(sequence.capacity(), 2);
///
/// sequence.ensure_capacity(8);
/// assert_eq!(sequence.capacity(), 8);
///
/// sequence.add_after("A".to_string());
/// sequence.trim_to_size();
/// assert_eq!(sequence.capacity(), 1);
/// ```
pub trait Allocation
where
    Self: Sized
{
    /// ### -> `allocate`
    ///
    /// Creates an empty sequence whose backing store holds exactly `capacity`
    /// slots. A capacity of zero is legal; the first insertion grows it.
    ///
    /// ### -> `Parameters`
    /// - `capacity: usize`: The initial number of slots.
    ///
    /// ### -> `Returns`
    /// - `Self`: An empty sequence with no current element.
    #[must_use = "Allocated sequences must have a purpose!"]
    fn allocate(capacity: usize) -> Self;

    /// Returns the number of slots in the backing store.
    fn capacity(&self) -> usize;

    /// ### -> `ensure_capacity`
    ///
    /// Reallocates the backing store to exactly `minimum` slots when the
    /// current capacity is smaller. Live elements keep their indices and the
    /// cursor is untouched. Does nothing if the capacity is already sufficient.
    fn ensure_capacity(&mut self, minimum: usize);

    /// ### -> `trim_to_size`
    ///
    /// Reallocates the backing store to exactly the number of live elements,
    /// preserving every element and the cursor. Does nothing if the capacity
    /// already equals the length.
    fn trim_to_size(&mut self);
}


/// ### -> `Length Trait`.
///
/// Synchronous length queries.
pub trait Length {
    /// Returns the number of live elements.
    fn length(&self) -> usize;

    /// Returns true if the sequence holds no live elements.
    fn is_empty(&self) -> bool {
        self.length() == 0
    }
}


/// ### -> `Cursor<T> Trait`.
///
/// Queries and moves the single cursor that designates the current element.
/// Traversal is forward-only: there is `start` and `advance`, but no way back.
///
/// ### -> `Methods`
/// - `is_current() -> bool`: Whether a current element exists.
/// - `current_index() -> Option<usize>`: The cursor position, or `None`.
/// - `current() -> Option<&T>`: The current element, or `None`.
/// - `start()`: Moves the cursor to the first element (or to `None` when empty).
/// - `advance()`: Moves the cursor one element forward, falling off the end to `None`.
///
/// ### -> `Usage`
///
/// ```
/// use cursorseq::sequence::prelude::*;
///
/// let mut sequence = Sequence::<String>::new();
/// for value in ["A", "B"] {
///     sequence.add_after(value.to_string());
/// }
///
/// sequence.start();
/// assert_eq!(sequence.current().map(String::as_str), Some("A"));
///
/// sequence.advance();
/// assert_eq!(sequence.current_index(), Some(1));
///
/// // advancing past the last element clears the cursor
/// sequence.advance();
/// assert!(!sequence.is_current());
/// assert_eq!(sequence.current(), None);
/// ```
pub trait Cursor<T>: Length {
    /// Returns true if and only if the sequence has a current element.
    fn is_current(&self) -> bool {
        self.current_index().is_some()
    }

    /// Returns the index of the current element, if any.
    fn current_index(&self) -> Option<usize>;

    /// Returns the current element, if any.
    fn current(&self) -> Option<&T>;

    /// Sets the cursor to the first element, or clears it if the sequence is empty.
    fn start(&mut self);

    /// ### -> `advance`
    ///
    /// - Without a current element, does nothing.
    /// - On the last element, clears the cursor.
    /// - Otherwise moves the cursor to the next element.
    fn advance(&mut self);
}


/// ### -> `Operation<T> Trait`.
///
/// Cursor-relative insertion and removal, bulk append and explicit indexed
/// reads.
///
/// ### -> `Methods`
/// - `add_before(value: T)`:
///     - Inserts `value` before the current element; it becomes current.
///     - Without a current element the value goes to the front.
///     - Grows the backing store to `2 * capacity + 1` first if it is full.
///
/// - `add_after(value: T)`:
///     - Inserts `value` after the current element; it becomes current.
///     - Without a current element the value goes to the end.
///     - Grows the backing store to `2 * capacity + 1` first if it is full.
///
/// - `add_all(other: &Self)`:
///     - Appends every element of `other` in order.
///     - `other` is left untouched and this sequence's cursor keeps referring to the same element.
///     - Grows the backing store up-front to exactly fit both sequences if needed.
///
/// - `remove_current() -> Option<T>`:
///     - Removes and returns the current element; the following element slides into its slot and becomes current.
///     - Removing the last element clears the cursor.
///     - Without a current element, does nothing and returns `None`.
///
/// - `clear()`:
///     - Drops every element and clears the cursor. Capacity is unchanged.
///
/// - `get(index: usize) -> Result<&T>`:
///     - Reads the element at `index` without moving the cursor.
///     - Fails with `SequenceError::IndexOutOfBounds` if `index >= length`.
///
/// ### -> `Usage`
///
/// ```
/// use cursorseq::sequence::prelude::*;
///
/// fn example() -> anyhow::Result<()> {
///     let mut sequence = Sequence::<String>::new();
///     sequence.add_after("A".to_string());
///     sequence.add_after("B".to_string());
///     sequence.add_before("C".to_string());
///     assert_eq!(sequence.to_string(), "{A, >C, B} (capacity = 10)");
///
///     sequence.start();
///     let removed = sequence.remove_current();
///     assert_eq!(removed.as_deref(), Some("A"));
///     assert_eq!(sequence.to_string(), "{>C, B} (capacity = 10)");
///
///     assert_eq!(sequence.get(1)?, "B");
///     assert!(sequence.get(2).is_err());
///
///     Ok(())
/// }
///
/// example().unwrap();
/// ```
pub trait Operation<T>: Allocation + Cursor<T> {
    /// Inserts `value` immediately before the current element and makes it current.
    fn add_before(&mut self, value: T);

    /// Inserts `value` immediately after the current element and makes it current.
    fn add_after(&mut self, value: T);

    /// Appends every element of `other`, leaving `other` and this sequence's cursor unchanged.
    fn add_all(&mut self, other: &Self)
    where
        T: Clone;

    /// Removes the current element, returning it.
    fn remove_current(&mut self) -> Option<T>;

    /// Removes every element and clears the cursor, keeping the capacity.
    fn clear(&mut self);

    /// Returns the element at `index`.
    fn get(&self, index: usize) -> Result<&T>;
}


/// ### -> `SnapShot<T> Trait`.
///
/// Creates an independent `Vec<T>` holding clones of the live elements in
/// order. The cursor is not moved.
pub trait SnapShot<T>
where
    T: Clone
{
    fn snapshot(&self) -> Vec<T>;
}
