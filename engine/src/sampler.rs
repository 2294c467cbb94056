//! Auto pick: uniform subsets drawn without replacement.

use lotto_api::prelude::*;
use rand::Rng;

/// Draw `count` distinct values from `pool`, returned ascending.
///
/// Stops early if the pool runs out; callers only ask for `count <= pool.len()`.
pub fn random_subset<R: Rng + ?Sized>(pool: &[u32], count: usize, rng: &mut R) -> Vec<u32> {
    let mut remaining = pool.to_vec();
    let mut picked = Vec::with_capacity(count.min(remaining.len()));
    while picked.len() < count && !remaining.is_empty() {
        let index = rng.gen_range(0..remaining.len());
        picked.push(remaining.swap_remove(index));
    }
    picked.sort_unstable();
    picked
}

/// Pick a subset size uniformly in `[min, max]`.
pub fn random_size<R: Rng + ?Sized>(min: usize, max: usize, rng: &mut R) -> usize {
    if min >= max {
        return min;
    }
    rng.gen_range(min..=max)
}

/// A full random selection for every pool the mode requires.
pub fn random_selection<R: Rng + ?Sized>(game: &Game, mode: &Mode, rng: &mut R) -> Selection {
    let mut selection = Selection::new();
    for pool in game.pools() {
        let Some(requirement) = mode.requirement(&pool.id) else {
            continue;
        };
        let size = random_size(requirement.min, requirement.max.min(pool.size()), rng);
        selection.set(pool.id.clone(), random_subset(&pool.numbers(), size, rng));
    }
    selection
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::combinatorics::combination_count;

    #[test]
    fn test_random_subset_properties() {
        let pool: Vec<u32> = (1..=50).collect();
        let mut rng = StdRng::seed_from_u64(7);
        for count in [0, 1, 7, 25, 50] {
            let picked = random_subset(&pool, count, &mut rng);
            assert_eq!(picked.len(), count);
            assert!(picked.windows(2).all(|pair| pair[0] < pair[1]));
            assert!(picked.iter().all(|value| pool.contains(value)));
            let unique: BTreeSet<u32> = picked.iter().copied().collect();
            assert_eq!(unique.len(), count);
        }
    }

    #[test]
    fn test_random_subset_exhausts_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_subset(&[4, 2, 9], 5, &mut rng), vec![2, 4, 9]);
        assert!(random_subset(&[], 3, &mut rng).is_empty());
    }

    #[test]
    fn test_seeded_draws_repeat() {
        let pool: Vec<u32> = (1..=33).collect();
        let first = random_subset(&pool, 6, &mut StdRng::seed_from_u64(42));
        let second = random_subset(&pool, 6, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_size_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = BTreeSet::new();
        for _ in 0..500 {
            let size = random_size(7, 20, &mut rng);
            assert!((7..=20).contains(&size));
            seen.insert(size);
        }
        assert_eq!(seen.len(), 14);
        assert_eq!(random_size(6, 6, &mut rng), 6);
    }

    #[test]
    fn test_random_selection_is_valid() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(11);
        for game in catalog.games() {
            for mode in game.modes() {
                let selection = random_selection(game, mode, &mut rng);
                assert!(
                    combination_count(game, mode, &selection) > 0,
                    "{} / {}",
                    game.id(),
                    mode.id
                );
            }
        }
    }
}
