//! Bounded expansion of a selection into concrete tickets.

use std::ops::ControlFlow;

use lotto_api::prelude::*;

/// Expand a selection into at most `limit` concrete tickets.
///
/// Pools are visited in game order. A required pool contributes every subset
/// of its selected values of the ticket size, in lexicographic order, and the
/// pools combine as a cross product, depth first. Pools the mode does not use
/// are carried through unchanged. Enumeration stops as soon as `limit`
/// tickets exist. Nothing is produced when a required pool holds fewer values
/// than its ticket size.
pub fn enumerate_combinations(
    game: &Game,
    mode: &Mode,
    selections: &Selection,
    limit: usize,
) -> Vec<Selection> {
    let mut results = Vec::with_capacity(limit.min(PREVIEW_LIMIT_PER_BATCH));
    if limit == 0 || !can_fill(game, mode, selections) {
        return results;
    }
    let mut expansion = Expansion {
        pools: game.pools(),
        mode,
        selections,
        limit,
        current: Selection::new(),
        results: &mut results,
    };
    let _ = expansion.expand(0);
    results
}

/// Every required pool holds at least one ticket's worth of values.
fn can_fill(game: &Game, mode: &Mode, selections: &Selection) -> bool {
    game.pools().iter().all(|pool| {
        mode.requirement(&pool.id).map_or(true, |requirement| {
            selections.count(&pool.id) >= requirement.ticket_size()
        })
    })
}

struct Expansion<'a> {
    pools: &'a [Pool],
    mode: &'a Mode,
    selections: &'a Selection,
    limit: usize,
    current: Selection,
    results: &'a mut Vec<Selection>,
}

impl Expansion<'_> {
    fn expand(&mut self, index: usize) -> ControlFlow<()> {
        if self.results.len() >= self.limit {
            return ControlFlow::Break(());
        }
        let (pools, mode) = (self.pools, self.mode);
        let Some(pool) = pools.get(index) else {
            self.results.push(self.current.clone());
            return self.full();
        };

        let selected = self.selections.values(&pool.id);
        let Some(requirement) = mode.requirement(&pool.id) else {
            self.current.set(pool.id.clone(), selected);
            let flow = self.expand(index + 1);
            self.current.remove(&pool.id);
            return flow;
        };

        let size = requirement.ticket_size();
        let pool_id = pool.id.clone();
        let flow = for_each_subset(&selected, size, &mut |subset| {
            self.current.set(pool_id.clone(), subset.iter().copied());
            let flow = self.expand(index + 1);
            self.current.remove(&pool_id);
            flow
        });
        if flow.is_break() {
            return flow;
        }
        self.full()
    }

    fn full(&self) -> ControlFlow<()> {
        if self.results.len() >= self.limit {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

/// Visit every `size`-subset of `values` in lexicographic order until the
/// visitor breaks. Subsets keep the order of `values`.
pub fn for_each_subset<F>(values: &[u32], size: usize, visit: &mut F) -> ControlFlow<()>
where
    F: FnMut(&[u32]) -> ControlFlow<()>,
{
    if size > values.len() {
        return ControlFlow::Continue(());
    }
    let mut scratch = Vec::with_capacity(size);
    subset_step(values, size, 0, &mut scratch, visit)
}

fn subset_step<F>(
    values: &[u32],
    remaining: usize,
    start: usize,
    scratch: &mut Vec<u32>,
    visit: &mut F,
) -> ControlFlow<()>
where
    F: FnMut(&[u32]) -> ControlFlow<()>,
{
    if remaining == 0 {
        return visit(scratch);
    }
    for index in start..=values.len() - remaining {
        scratch.push(values[index]);
        let flow = subset_step(values, remaining - 1, index + 1, scratch, visit);
        scratch.pop();
        if flow.is_break() {
            return flow;
        }
    }
    ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::combinatorics::{choose, combination_count};

    fn subsets(values: &[u32], size: usize) -> Vec<Vec<u32>> {
        let mut out = Vec::new();
        let _ = for_each_subset(values, size, &mut |subset| {
            out.push(subset.to_vec());
            ControlFlow::Continue(())
        });
        out
    }

    #[test]
    fn test_subsets_lexicographic() {
        assert_eq!(
            subsets(&[1, 2, 3, 4], 2),
            vec![
                vec![1, 2],
                vec![1, 3],
                vec![1, 4],
                vec![2, 3],
                vec![2, 4],
                vec![3, 4],
            ]
        );
        assert_eq!(subsets(&[5, 6], 0), vec![Vec::<u32>::new()]);
        assert!(subsets(&[5, 6], 3).is_empty());
    }

    #[test]
    fn test_subset_visitor_can_stop() {
        let mut seen = 0;
        let flow = for_each_subset(&[1, 2, 3, 4, 5], 3, &mut |_| {
            seen += 1;
            if seen == 4 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert!(flow.is_break());
        assert_eq!(seen, 4);
    }

    #[test]
    fn test_combo_eight_expands_to_eight_tickets() {
        let catalog = Catalog::builtin();
        let game = catalog.find("lottoMax").unwrap();
        let mode = game.mode("combo8");
        let main = PoolId::from("main");
        let selection = Selection::from([("main", (1..=8).collect::<Vec<u32>>())]);

        let tickets = enumerate_combinations(game, mode, &selection, 100);
        assert_eq!(tickets.len(), 8);

        let distinct: BTreeSet<Vec<u32>> =
            tickets.iter().map(|ticket| ticket.values(&main)).collect();
        assert_eq!(distinct.len(), 8);
        for ticket in &tickets {
            let values = ticket.values(&main);
            assert_eq!(values.len(), 7);
            assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
            assert!(values.iter().all(|value| selection.contains(&main, *value)));
        }
        // Lexicographic: the first ticket drops the largest value.
        assert_eq!(tickets[0].values(&main), (1..=7).collect::<Vec<u32>>());
    }

    #[test]
    fn test_limit_bounds_output() {
        let catalog = Catalog::builtin();
        let game = catalog.find(DOUBLE_COLOR_GAME_ID).unwrap();
        let mode = game.mode("fullMulti");
        let selection = Selection::from([
            ("red", (1..=20).collect::<Vec<u32>>()),
            ("blue", (1..=16).collect::<Vec<u32>>()),
        ]);
        let count = combination_count(game, mode, &selection);
        assert_eq!(count, choose(20, 6) * 16);

        for limit in [0, 1, 5, 12, 40] {
            let tickets = enumerate_combinations(game, mode, &selection, limit);
            assert_eq!(tickets.len() as u64, (limit as u64).min(count));
        }
    }

    #[test]
    fn test_limit_equals_count_when_small() {
        let catalog = Catalog::builtin();
        let game = catalog.find(DOUBLE_COLOR_GAME_ID).unwrap();
        let mode = game.mode("blueMulti");
        let selection = Selection::from([
            ("red", vec![2, 8, 13, 21, 27, 33]),
            ("blue", vec![1, 5, 9]),
        ]);
        let tickets = enumerate_combinations(game, mode, &selection, 12);
        assert_eq!(tickets.len(), 3);
        let blue = PoolId::from("blue");
        let red = PoolId::from("red");
        assert_eq!(tickets[0].values(&blue), vec![1]);
        assert_eq!(tickets[2].values(&blue), vec![9]);
        assert!(tickets.iter().all(|ticket| ticket.count(&red) == 6));
    }

    #[test]
    fn test_enumeration_is_idempotent() {
        let catalog = Catalog::builtin();
        let game = catalog.find("lotto649").unwrap();
        let mode = game.mode("combo9");
        let selection = Selection::from([("main", vec![3, 8, 14, 22, 27, 31, 38, 41, 46])]);
        let first = enumerate_combinations(game, mode, &selection, 12);
        let second = enumerate_combinations(game, mode, &selection, 12);
        assert_eq!(first.len(), 12);
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_selection_yields_nothing() {
        let catalog = Catalog::builtin();
        let game = catalog.find("dailyGrand").unwrap();
        let mode = game.mode("standard");
        let selection = Selection::from([("main", vec![1, 2, 3, 4, 5])]);
        assert!(enumerate_combinations(game, mode, &selection, 12).is_empty());
    }

    #[test]
    fn test_unfillable_later_pool_short_circuits() {
        let catalog = Catalog::builtin();
        let game = catalog.find(DOUBLE_COLOR_GAME_ID).unwrap();
        let mode = game.mode("fullMulti");
        let selection = Selection::from([("red", (1..=20).collect::<Vec<u32>>())]);

        assert!(!can_fill(game, mode, &selection));
        assert!(enumerate_combinations(game, mode, &selection, 12).is_empty());

        let filled = Selection::from([
            ("red", (1..=20).collect::<Vec<u32>>()),
            ("blue", vec![7]),
        ]);
        assert!(can_fill(game, mode, &filled));
    }

    #[test]
    fn test_range_mode_uses_min_as_ticket_size() {
        let main = PoolId::from("main");
        let pool = Pool::new("main", "label", 1, 50, 2).unwrap();
        let mode = Mode::new("standard", "label", "helper").require(
            "main",
            PoolRequirement::range(7, 10),
            "error",
        );
        let game = Game::try_from(GameDefinition {
            id: "custom".into(),
            ticket_prefix: "G".into(),
            name_key: "name".into(),
            description_key: "description".into(),
            hint_key: "hint".into(),
            default_mode_id: "standard".into(),
            pools: vec![pool],
            modes: vec![mode],
        })
        .unwrap();
        let mode = game.default_mode();
        let selection = Selection::from([("main", (1..=8).collect::<Vec<u32>>())]);

        assert_eq!(combination_count(&game, mode, &selection), 8);
        let tickets = enumerate_combinations(&game, mode, &selection, 100);
        assert_eq!(tickets.len(), 8);
        for ticket in &tickets {
            let values = ticket.values(&main);
            assert_eq!(values.len(), 7);
            assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
            assert!(values.iter().all(|value| (1..=8).contains(value)));
        }
        assert_eq!(tickets[0].values(&main), (1..=7).collect::<Vec<u32>>());
    }

    #[test]
    fn test_unused_pool_passes_through() {
        let catalog = Catalog::builtin();
        let game = catalog.find("dailyGrand").unwrap();
        let mode = Mode::new("mainOnly", "label", "helper").require(
            "main",
            PoolRequirement::exact(6).with_pick(5),
            "error",
        );
        let selection = Selection::from([
            ("main", vec![1, 2, 3, 4, 5, 6]),
            ("grand", vec![2, 4]),
        ]);
        let tickets = enumerate_combinations(game, &mode, &selection, 12);
        assert_eq!(tickets.len(), 6);
        let grand = PoolId::from("grand");
        assert!(tickets.iter().all(|ticket| ticket.values(&grand) == vec![2, 4]));
    }
}
