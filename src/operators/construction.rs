#[cfg(test)]
#[path = "../../tests/unit/operators/construction_test.rs"]
mod construction_test;

use crate::model::{City, Tour};
use crate::utils::{GenericResult, Random};
use std::sync::Arc;

/// Creates a tour of the requested length from cities picked uniformly at random.
///
/// When `once_each` is set, every picked city is removed from the pick pool, so
/// requesting a length equal to the city count yields a valid permutation. Without
/// it, sampling is done with replacement and the result is generally not a
/// permutation.
pub fn create_random_tour(
    length: usize,
    cities: &[Arc<City>],
    once_each: bool,
    random: &(dyn Random),
) -> GenericResult<Tour> {
    if once_each && length > cities.len() {
        return Err(format!("requested tour length {length} exceeds {} available cities", cities.len()).into());
    }
    if cities.is_empty() && length > 0 {
        return Err("cannot create a tour without cities".into());
    }

    let mut pool = cities.to_vec();
    let mut tour = Tour::with_capacity(length);

    for _ in 0..length {
        let index = random.uniform_int(0, pool.len() as i32 - 1) as usize;
        if once_each {
            tour.push(pool.remove(index));
        } else {
            tour.push(pool[index].clone());
        }
    }

    Ok(tour)
}
