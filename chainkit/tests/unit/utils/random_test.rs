use super::*;

#[test]
fn can_produce_same_sequence_with_same_seed() {
    let first = RepeatableRandom::new(3);
    let second = RepeatableRandom::new(3);

    let first = (0..20).map(|_| first.uniform_int(-10, 10)).collect::<Vec<_>>();
    let second = (0..20).map(|_| second.uniform_int(-10, 10)).collect::<Vec<_>>();

    assert_eq!(first, second);
}

#[test]
fn can_stay_within_closed_interval() {
    let randoms: [Box<dyn Random>; 2] = [Box::new(DefaultRandom::default()), Box::new(RepeatableRandom::new(1))];

    randoms.iter().for_each(|random| {
        let values = (0..1000).map(|_| random.uniform_int(0, 2)).collect::<Vec<_>>();

        assert!(values.iter().all(|&value| (0..=2).contains(&value)));
        assert!(values.contains(&0));
        assert!(values.contains(&2));
    });
}

#[test]
fn can_return_min_for_degenerate_interval() {
    assert_eq!(DefaultRandom::default().uniform_int(5, 5), 5);
}
