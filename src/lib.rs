//! A cursor-addressed sequence container.
//!
//! [`Sequence<T>`](sequence::Sequence) keeps its elements in an exactly sized
//! backing store and tracks a single "current" element. Insertion, removal
//! and traversal are all expressed relative to that cursor.
//!
//! ```
//! use cursorseq::sequence::prelude::*;
//!
//! let mut sequence = Sequence::<String>::new();
//! sequence.add_after("A".to_string());
//! sequence.add_after("B".to_string());
//! sequence.add_before("C".to_string());
//! assert_eq!(sequence.to_string(), "{A, >C, B} (capacity = 10)");
//! ```

pub mod sequence;
