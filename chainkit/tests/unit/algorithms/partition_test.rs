use super::*;
use crate::helpers::lists::*;
use crate::utils::ListError;

parameterized_test! {can_segregate_even_odd, (values, expected), {
    can_segregate_even_odd_impl(values, expected);
}}

can_segregate_even_odd! {
    case_01_mixed: (vec![1, 2, 3, 4, 5, 6], vec![2, 4, 6, 1, 3, 5]),
    case_02_all_even: (vec![2, 4, 6], vec![2, 4, 6]),
    case_03_all_odd: (vec![1, 3, 5], vec![1, 3, 5]),
    case_04_negative: (vec![-3, -2, 0, 7], vec![-2, 0, -3, 7]),
    case_05_single: (vec![1], vec![1]),
    case_06_empty: (vec![], vec![]),
}

fn can_segregate_even_odd_impl(values: Vec<i32>, expected: Vec<i32>) {
    let (mut arena, head) = create_list(values.as_slice());

    let head = segregate_even_odd(&mut arena, head).expect("acyclic list");

    assert_eq!(get_values(&arena, head), expected);
}

#[test]
fn can_keep_relative_order_of_equal_values() {
    let (mut arena, head) = create_list(&[5, 2, 5, 2]);
    let ids = get_node_ids(&arena, head);

    let head = segregate_by(&mut arena, head, |value| value < 3).expect("acyclic list");

    assert_eq!(get_node_ids(&arena, head), vec![ids[1], ids[3], ids[0], ids[2]]);
    assert_eq!(arena.next(ids[2]), None);
}

#[test]
fn can_segregate_with_custom_predicate() {
    let (mut arena, head) = create_list(&[10, -1, 20, -2, 30]);

    let head = segregate_by(&mut arena, head, |value| value < 0).expect("acyclic list");

    assert_eq!(get_values(&arena, head), vec![-1, -2, 10, 20, 30]);
}

parameterized_test! {can_partition_around_pivot, (values, pivot, expected), {
    can_partition_around_pivot_impl(values, pivot, expected);
}}

can_partition_around_pivot! {
    case_01_mixed: (vec![3, 5, 8, 5, 10, 2, 1], 5, vec![3, 2, 1, 5, 5, 8, 10]),
    case_02_pivot_absent: (vec![9, 1, 8, 2], 5, vec![1, 2, 9, 8]),
    case_03_all_equal: (vec![4, 4, 4], 4, vec![4, 4, 4]),
    case_04_empty: (vec![], 0, vec![]),
}

fn can_partition_around_pivot_impl(values: Vec<i32>, pivot: i32, expected: Vec<i32>) {
    let (mut arena, head) = create_list(values.as_slice());

    let head = partition_around(&mut arena, head, pivot).expect("acyclic list");

    assert_eq!(get_values(&arena, head), expected);
}

#[test]
fn can_reject_cyclic_list_without_changes() {
    let (mut arena, head) = create_cyclic_list(&[1, 2, 3, 4], 0);
    let links_before = get_node_ids(&arena, head).into_iter().map(|node| arena.next(node)).collect::<Vec<_>>();

    assert!(matches!(segregate_even_odd(&mut arena, head), Err(ListError::CyclicInput { .. })));
    assert!(matches!(partition_around(&mut arena, head, 2), Err(ListError::CyclicInput { .. })));

    let links_after = get_node_ids(&arena, head).into_iter().map(|node| arena.next(node)).collect::<Vec<_>>();
    assert_eq!(links_before, links_after);
}

#[test]
fn can_join_segments_skipping_empty_ones() {
    let (mut arena, head) = create_list(&[1, 2, 3]);
    let ids = get_node_ids(&arena, head);
    ids.iter().for_each(|&node| {
        arena.take_next(node);
    });

    let mut first = Segment::default();
    first.append(&mut arena, ids[2]);
    let mut last = Segment::default();
    last.append(&mut arena, ids[0]);
    last.append(&mut arena, ids[1]);

    let joined = Segment::join(&mut arena, [Segment::default(), first, Segment::default(), last]);

    assert_eq!(get_values(&arena, joined), vec![3, 1, 2]);
    assert_eq!(Segment::join(&mut arena, [Segment::default(); 2]), None);
}
