use crate::sequence::prelude::*;

fn check(sequence: &Sequence<String>, model: &[String], cursor: Option<usize>) {
    assert!(sequence.length() <= sequence.capacity());
    assert_eq!(sequence.length(), model.len());
    assert_eq!(sequence.current_index(), cursor);
    if let Some(index) = sequence.current_index() {
        assert!(index < sequence.length());
        assert_eq!(sequence.current(), Some(&model[index]));
    }
    assert_eq!(sequence.snapshot(), model);
}

/// Drives random operations against a `Vec` model and checks the invariants after each step.
#[test]
fn random_operations() {
    for _ in 0..50 {
        let capacity = (rand::random::<u32>() % 4) as usize;
        let mut sequence = Sequence::<String>::allocate(capacity);
        let mut model: Vec<String> = Vec::new();
        let mut cursor: Option<usize> = None;

        for step in 0..200 {
            let value = step.to_string();
            match rand::random::<u32>() % 8 {
                0 => {
                    let index = cursor.unwrap_or(0);
                    model.insert(index, value.clone());
                    cursor = Some(index);
                    sequence.add_before(value);
                }
                1 => {
                    let index = cursor.map_or(model.len(), |current| current + 1);
                    model.insert(index, value.clone());
                    cursor = Some(index);
                    sequence.add_after(value);
                }
                2 => {
                    let expected = cursor.map(|index| model.remove(index));
                    if let Some(index) = cursor {
                        if index == model.len() {
                            cursor = None;
                        }
                    }
                    assert_eq!(sequence.remove_current(), expected);
                }
                3 => {
                    cursor = if model.is_empty() { None } else { Some(0) };
                    sequence.start();
                }
                4 => {
                    cursor = cursor.and_then(|index| (index + 1 < model.len()).then_some(index + 1));
                    sequence.advance();
                }
                5 => {
                    let copy = sequence.clone();
                    model.extend(copy.snapshot());
                    sequence.add_all(&copy);
                    if model.len() > 1_000 {
                        model.clear();
                        cursor = None;
                        sequence.clear();
                    }
                }
                6 => {
                    let capacity = sequence.capacity();
                    sequence.trim_to_size();
                    assert!(sequence.capacity() <= capacity);
                    assert_eq!(sequence.capacity(), model.len());
                }
                _ => {
                    let minimum = (rand::random::<u32>() % 64) as usize;
                    let capacity = sequence.capacity();
                    sequence.ensure_capacity(minimum);
                    assert_eq!(sequence.capacity(), capacity.max(minimum));
                }
            }

            check(&sequence, &model, cursor);
        }
    }
}
