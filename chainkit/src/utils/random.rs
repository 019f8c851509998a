#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use rand::prelude::*;
use std::cell::RefCell;

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&self, min: i32, max: i32) -> i32;
}

/// A default random implementation which uses a thread local generator.
#[derive(Default)]
pub struct DefaultRandom {}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        DEFAULT_RNG.with(|rng| sample_int(&mut rng.borrow_mut(), min, max))
    }
}

thread_local! {
    static DEFAULT_RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_rng(thread_rng()).expect("cannot get RNG"));
}

/// A random implementation with a fixed seed: produces the same sequence on every run.
pub struct RepeatableRandom {
    rng: RefCell<SmallRng>,
}

impl RepeatableRandom {
    /// Creates a new instance of `RepeatableRandom` seeded with the given value.
    pub fn new(seed: u64) -> Self {
        Self { rng: RefCell::new(SmallRng::seed_from_u64(seed)) }
    }
}

impl Random for RepeatableRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        sample_int(&mut self.rng.borrow_mut(), min, max)
    }
}

fn sample_int(rng: &mut SmallRng, min: i32, max: i32) -> i32 {
    if min == max {
        return min;
    }

    assert!(min < max);
    rng.gen_range(min..=max)
}
