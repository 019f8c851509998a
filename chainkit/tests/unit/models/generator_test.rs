use super::*;
use crate::algorithms::cycle::detect_cycle_start;
use crate::algorithms::traversal::{length, node_at};
use crate::utils::RepeatableRandom;

#[test]
fn can_generate_values_in_range() {
    let random = RepeatableRandom::new(0);

    let values = generate_values(&random, 100, -3, 3);

    assert_eq!(values.len(), 100);
    assert!(values.iter().all(|value| (-3..=3).contains(value)));
}

#[test]
fn can_generate_acyclic_list() {
    let random = RepeatableRandom::new(0);
    let mut arena = NodeArena::new();

    let head = generate_list(&mut arena, &random, 25, 0, 2);

    assert_eq!(length(&arena, head), Ok(25));
}

#[test]
fn can_generate_cyclic_list() {
    let random = RepeatableRandom::new(0);

    (1..30).for_each(|size| {
        let mut arena = NodeArena::new();

        let (head, entry_index) = generate_cyclic_list(&mut arena, &random, size, 0, 9).expect("cannot generate");

        assert!(entry_index < size);
        assert_eq!(detect_cycle_start(&arena, head), node_at(&arena, head, entry_index));
    });
}

#[test]
fn can_generate_empty_cyclic_list() {
    let random = RepeatableRandom::new(0);
    let mut arena = NodeArena::new();

    assert_eq!(generate_cyclic_list(&mut arena, &random, 0, 0, 9), Ok((None, 0)));
}
