mod invariants;

use crate::sequence::prelude::*;

/// Builds a sequence by repeated `add_after`, leaving the cursor on the last element.
fn sequence_of(capacity: usize, values: &[&str]) -> Sequence<String> {
    let mut sequence = Sequence::allocate(capacity);
    for value in values {
        sequence.add_after(value.to_string());
    }
    sequence
}
