use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::{Game, PoolId};

/// The values picked per pool. Each pool's values are kept ascending and
/// unique by construction; pools with nothing picked have no entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<PoolId, BTreeSet<u32>>",
    into = "BTreeMap<PoolId, BTreeSet<u32>>"
)]
pub struct Selection(BTreeMap<PoolId, BTreeSet<u32>>);

impl From<BTreeMap<PoolId, BTreeSet<u32>>> for Selection {
    fn from(mut pools: BTreeMap<PoolId, BTreeSet<u32>>) -> Self {
        pools.retain(|_, values| !values.is_empty());
        Self(pools)
    }
}

impl From<Selection> for BTreeMap<PoolId, BTreeSet<u32>> {
    fn from(selection: Selection) -> Self {
        selection.0
    }
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a value. Returns true if the value is now selected.
    pub fn toggle(&mut self, pool_id: &PoolId, value: u32) -> bool {
        let values = self.0.entry(pool_id.clone()).or_default();
        let selected = if values.remove(&value) {
            false
        } else {
            values.insert(value);
            true
        };
        if values.is_empty() {
            self.0.remove(pool_id);
        }
        selected
    }

    /// Replace a pool's values.
    pub fn set(&mut self, pool_id: PoolId, values: impl IntoIterator<Item = u32>) {
        let values: BTreeSet<u32> = values.into_iter().collect();
        if values.is_empty() {
            self.0.remove(&pool_id);
        } else {
            self.0.insert(pool_id, values);
        }
    }

    pub fn remove(&mut self, pool_id: &PoolId) {
        self.0.remove(pool_id);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, pool_id: &PoolId, value: u32) -> bool {
        self.0
            .get(pool_id)
            .map_or(false, |values| values.contains(&value))
    }

    /// Number of values picked in a pool.
    pub fn count(&self, pool_id: &PoolId) -> usize {
        self.0.get(pool_id).map_or(0, BTreeSet::len)
    }

    /// A pool's values, ascending.
    pub fn values(&self, pool_id: &PoolId) -> Vec<u32> {
        self.0
            .get(pool_id)
            .map(|values| values.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PoolId, &BTreeSet<u32>)> {
        self.0.iter()
    }

    /// Keep only the pools the game declares.
    pub fn normalized(&self, game: &Game) -> Selection {
        Selection(
            self.0
                .iter()
                .filter(|(pool_id, _)| game.pool(pool_id).is_some())
                .map(|(pool_id, values)| (pool_id.clone(), values.clone()))
                .collect(),
        )
    }
}

impl<const N: usize> From<[(&str, Vec<u32>); N]> for Selection {
    fn from(pools: [(&str, Vec<u32>); N]) -> Self {
        let mut selection = Selection::new();
        for (pool_id, values) in pools {
            selection.set(PoolId::from(pool_id), values);
        }
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let main = PoolId::from("main");
        let mut selection = Selection::from([("main", vec![4, 9, 23])]);
        let original = selection.clone();

        assert!(selection.toggle(&main, 17));
        assert_eq!(selection.values(&main), vec![4, 9, 17, 23]);
        assert!(!selection.toggle(&main, 17));
        assert_eq!(selection, original);
    }

    #[test]
    fn test_toggle_last_value_drops_pool() {
        let main = PoolId::from("main");
        let mut selection = Selection::new();
        selection.toggle(&main, 5);
        selection.toggle(&main, 5);
        assert!(selection.is_empty());
        assert_eq!(selection.count(&main), 0);
    }

    #[test]
    fn test_values_are_ascending() {
        let selection = Selection::from([("main", vec![30, 2, 11, 2])]);
        assert_eq!(selection.values(&PoolId::from("main")), vec![2, 11, 30]);
    }

    #[test]
    fn test_serializes_as_sorted_arrays() {
        let selection = Selection::from([("red", vec![9, 1, 4]), ("blue", vec![16])]);
        let json = serde_json::to_string(&selection).unwrap();
        assert_eq!(json, r#"{"blue":[16],"red":[1,4,9]}"#);
    }

    #[test]
    fn test_deserialize_drops_empty_pools() {
        let selection: Selection = serde_json::from_str(r#"{"main":[],"grand":[3,1]}"#).unwrap();
        assert_eq!(selection.count(&PoolId::from("main")), 0);
        assert_eq!(selection.iter().count(), 1);
        assert_eq!(selection.values(&PoolId::from("grand")), vec![1, 3]);

        let empty: Selection = serde_json::from_str(r#"{"main":[]}"#).unwrap();
        assert!(empty.is_empty());
    }
}
