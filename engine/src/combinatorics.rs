use lotto_api::prelude::*;

/// Number of ways to choose `k` items from `n`.
///
/// Returns 0 for negative arguments or `k > n`. Uses the iterative
/// product-of-ratios with 128-bit intermediates, so every step is an exact
/// integer; results beyond `u64::MAX` saturate.
pub fn choose(n: i64, k: i64) -> u64 {
    if n < 0 || k < 0 || k > n {
        return 0;
    }
    if k == 0 || k == n {
        return 1;
    }

    let k = k.min(n - k) as u128;
    let n = n as u128;
    let mut result: u128 = 1;
    for i in 0..k {
        // result == C(n, i) here, so result * (n - i) is divisible by i + 1.
        result = match result.checked_mul(n - i) {
            Some(product) => product / (i + 1),
            None => return u64::MAX,
        };
    }
    u64::try_from(result).unwrap_or(u64::MAX)
}

/// `choose` over selection counts.
pub fn choose_count(selected: usize, ticket_size: usize) -> u64 {
    choose(selected as i64, ticket_size as i64)
}

/// Number of concrete tickets a selection expands into under a mode.
///
/// Zero when any required pool's count is outside its bounds; otherwise the
/// product over required pools of `choose(selected, ticket size)`.
pub fn combination_count(game: &Game, mode: &Mode, selections: &Selection) -> u64 {
    let mut total: u64 = 1;
    for pool in game.pools() {
        let Some(requirement) = mode.requirement(&pool.id) else {
            continue;
        };
        let selected = selections.count(&pool.id);
        if !requirement.allows(selected) {
            return 0;
        }
        total = total.saturating_mul(choose_count(selected, requirement.ticket_size()));
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_edges() {
        assert_eq!(choose(0, 0), 1);
        assert_eq!(choose(7, 0), 1);
        assert_eq!(choose(7, 7), 1);
        assert_eq!(choose(5, 6), 0);
        assert_eq!(choose(-1, 0), 0);
        assert_eq!(choose(5, -2), 0);
    }

    #[test]
    fn test_choose_symmetry() {
        for n in 0..=70 {
            for k in 0..=n {
                assert_eq!(choose(n, k), choose(n, n - k), "n={n} k={k}");
            }
        }
    }

    #[test]
    fn test_choose_lotto_max_tiers() {
        assert_eq!(choose(7, 7), 1);
        assert_eq!(choose(8, 7), 8);
        assert_eq!(choose(9, 7), 36);
        assert_eq!(choose(10, 7), 120);
    }

    #[test]
    fn test_choose_large_values() {
        assert_eq!(choose(33, 6), 1_107_568);
        assert_eq!(choose(20, 6), 38_760);
        assert_eq!(choose(49, 6), 13_983_816);
        assert_eq!(choose(70, 10), 396_704_524_216);
        assert_eq!(choose(70, 35), u64::MAX);
    }

    #[test]
    fn test_combination_count() {
        let catalog = Catalog::builtin();
        let game = catalog.find("lottoMax").unwrap();

        let eight = Selection::from([("main", (1..=8).collect::<Vec<u32>>())]);
        assert_eq!(combination_count(game, game.mode("combo8"), &eight), 8);
        // Out of bounds for the standard mode.
        assert_eq!(combination_count(game, game.mode("standard"), &eight), 0);

        let ten = Selection::from([("main", (1..=10).collect::<Vec<u32>>())]);
        assert_eq!(combination_count(game, game.mode("combo10"), &ten), 120);
    }

    #[test]
    fn test_combination_count_multi_pool() {
        let catalog = Catalog::builtin();
        let game = catalog.find(DOUBLE_COLOR_GAME_ID).unwrap();

        let selection = Selection::from([
            ("red", (1..=8).collect::<Vec<u32>>()),
            ("blue", vec![3, 9, 12]),
        ]);
        assert_eq!(
            combination_count(game, game.mode("fullMulti"), &selection),
            choose(8, 6) * 3
        );
        assert_eq!(combination_count(game, game.mode("redMulti"), &selection), 0);

        assert_eq!(combination_count(game, game.mode("single"), &Selection::new()), 0);
    }
}
