pub use {
    crate::sequence::{Sequence, DEFAULT_CAPACITY},
    crate::sequence::traits::{Allocation, Length, Cursor, Operation, SnapShot},
    crate::sequence::error::SequenceError,
};
