use super::*;
use crate::helpers::lists::*;

parameterized_test! {can_count_length, (values, expected), {
    can_count_length_impl(values, expected);
}}

can_count_length! {
    case_01_empty: (vec![], 0),
    case_02_single: (vec![1], 1),
    case_03_many: (vec![1, 2, 3, 4, 5], 5),
}

fn can_count_length_impl(values: Vec<i32>, expected: usize) {
    let (arena, head) = create_list(values.as_slice());

    assert_eq!(length(&arena, head), Ok(expected));
}

#[test]
fn can_count_length_of_list_sharing_arena() {
    let mut arena = NodeArena::new();
    let _ = arena.from_values(vec![10, 20, 30]);
    let head = arena.from_values(vec![1, 2]);

    assert_eq!(length(&arena, head), Ok(2));
}

#[test]
fn can_reject_length_of_cyclic_list() {
    let (arena, head) = create_cyclic_list(&[3, 2, 0, -4], 1);

    assert!(matches!(length(&arena, head), Err(ListError::CyclicInput { .. })));
    assert!(matches!(collect_values(&arena, head), Err(ListError::CyclicInput { .. })));
    assert!(matches!(last_node(&arena, head), Err(ListError::CyclicInput { .. })));
}

#[test]
fn can_get_node_at_index() {
    let (arena, head) = create_list(&[5, 6, 7]);
    let value_at = |index| node_at(&arena, head, index).map(|node| arena.value(node));

    assert_eq!(value_at(0), Some(5));
    assert_eq!(value_at(2), Some(7));
    assert_eq!(value_at(3), None);
    assert_eq!(node_at(&arena, None, 0), None);
}

#[test]
fn can_get_node_at_index_beyond_cycle() {
    let (arena, head) = create_cyclic_list(&[1, 2, 3], 1);

    let node = node_at(&arena, head, 5).map(|node| arena.value(node));

    // 1 -> 2 -> 3 -> 2 -> 3 -> 2
    assert_eq!(node, Some(2));
}

#[test]
fn can_get_last_node() {
    let (arena, head) = create_list(&[1, 2, 3]);

    assert_eq!(last_node(&arena, head).map(|node| node.map(|node| arena.value(node))), Ok(Some(3)));
    assert_eq!(last_node(&arena, None), Ok(None));
}

#[test]
fn can_stop_guard_after_arena_size_steps() {
    let (arena, _) = create_list(&[1, 2]);
    let mut guard = StepGuard::new(&arena);

    assert_eq!(guard.step(), Ok(()));
    assert_eq!(guard.step(), Ok(()));
    assert_eq!(guard.step(), Err(ListError::CyclicInput { steps: 3 }));
}
