use super::*;
use crate::helpers::lists::*;
use crate::utils::ListError;

parameterized_test! {can_get_kth_from_end, (values, k, expected), {
    can_get_kth_from_end_impl(values, k, expected);
}}

can_get_kth_from_end! {
    case_01_last: (vec![1, 2, 3, 4, 5], 1, Some(5)),
    case_02_second_last: (vec![1, 2, 3, 4, 5], 2, Some(4)),
    case_03_head: (vec![1, 2, 3, 4, 5], 5, Some(1)),
    case_04_too_far: (vec![1, 2, 3, 4, 5], 6, None),
    case_05_zero: (vec![1, 2, 3, 4, 5], 0, None),
    case_06_negative: (vec![1, 2, 3, 4, 5], -1, None),
    case_07_empty: (vec![], 1, None),
    case_08_single: (vec![9], 1, Some(9)),
}

fn can_get_kth_from_end_impl(values: Vec<i32>, k: isize, expected: Option<i32>) {
    let (arena, head) = create_list(values.as_slice());

    let result = kth_from_end(&arena, head, k).expect("acyclic list").map(|node| arena.value(node));

    assert_eq!(result, expected);
}

#[test]
fn can_return_node_identity_for_kth_from_end() {
    let (arena, head) = create_list(&[4, 4, 4]);
    let ids = get_node_ids(&arena, head);

    assert_eq!(kth_from_end(&arena, head, 1), Ok(Some(ids[2])));
    assert_eq!(kth_from_end(&arena, head, 3), Ok(Some(ids[0])));
}

#[test]
fn can_reject_cyclic_list_for_kth_from_end() {
    let (arena, head) = create_cyclic_list(&[1, 2, 3], 1);

    assert!(matches!(kth_from_end(&arena, head, 1), Err(ListError::CyclicInput { .. })));
    assert!(matches!(kth_from_end(&arena, head, 100), Err(ListError::CyclicInput { .. })));
}

parameterized_test! {can_remove_kth_from_end, (values, k, expected), {
    can_remove_kth_from_end_impl(values, k, expected);
}}

can_remove_kth_from_end! {
    case_01_middle: (vec![1, 2, 3, 4, 5], 2, vec![1, 2, 3, 5]),
    case_02_last: (vec![1, 2, 3, 4, 5], 1, vec![1, 2, 3, 4]),
    case_03_head: (vec![1, 2, 3, 4, 5], 5, vec![2, 3, 4, 5]),
    case_04_single: (vec![1], 1, vec![]),
    case_05_too_far: (vec![1, 2, 3], 4, vec![1, 2, 3]),
    case_06_zero: (vec![1, 2, 3], 0, vec![1, 2, 3]),
    case_07_negative: (vec![1, 2, 3], -2, vec![1, 2, 3]),
    case_08_empty: (vec![], 1, vec![]),
}

fn can_remove_kth_from_end_impl(values: Vec<i32>, k: isize, expected: Vec<i32>) {
    let (mut arena, head) = create_list(values.as_slice());

    let head = remove_kth_from_end(&mut arena, head, k).expect("acyclic list");

    assert_eq!(get_values(&arena, head), expected);
}

#[test]
fn can_detach_removed_node() {
    let (mut arena, head) = create_list(&[1, 2, 3]);
    let ids = get_node_ids(&arena, head);

    let new_head = remove_kth_from_end(&mut arena, head, 3).expect("acyclic list");

    assert_eq!(new_head, Some(ids[1]));
    assert_eq!(arena.next(ids[0]), None);
}

#[test]
fn can_reject_cyclic_list_for_removal_without_changes() {
    let (mut arena, head) = create_cyclic_list(&[1, 2, 3, 4], 2);
    let links_before = get_node_ids(&arena, head).into_iter().map(|node| arena.next(node)).collect::<Vec<_>>();

    let result = remove_kth_from_end(&mut arena, head, 2);

    let links_after = get_node_ids(&arena, head).into_iter().map(|node| arena.next(node)).collect::<Vec<_>>();
    assert!(matches!(result, Err(ListError::CyclicInput { .. })));
    assert_eq!(links_before, links_after);
}
