#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::prelude::*;
use std::cell::UnsafeCell;
use std::rc::Rc;

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max].
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the interval [min, max).
    fn uniform_real(&self, min: Float, max: Float) -> Float;
}

/// A default random implementation. Each instance owns its own generator state, so
/// independent evolution runs never observe each other's draws.
pub struct DefaultRandom {
    rng: Rc<UnsafeCell<SmallRng>>,
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: Rc::new(UnsafeCell::new(SmallRng::from_rng(thread_rng()).expect("cannot get RNG"))) }
    }
}

impl DefaultRandom {
    /// Creates a new instance of `DefaultRandom` seeded with the given value, which
    /// produces a repeatable sequence of draws.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { rng: Rc::new(UnsafeCell::new(SmallRng::seed_from_u64(seed))) }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        let rng = unsafe { &mut *self.rng.get() };
        rng.gen_range(min..max + 1)
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        let rng = unsafe { &mut *self.rng.get() };
        rng.gen_range(min..max)
    }
}
