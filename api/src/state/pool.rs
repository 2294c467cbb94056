use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LottoError;

/// Identifier of a pool within a game (e.g. "main", "red").
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoolId(String);

impl PoolId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PoolId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A named inclusive numeric range a player selects distinct values from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    /// The pool identifier, unique within a game.
    pub id: PoolId,

    /// Translation key of the pool label.
    pub label_key: String,

    /// First selectable value.
    pub start: u32,

    /// Last selectable value (inclusive).
    pub end: u32,

    /// Minimum rendered width, zero-padded.
    #[serde(default = "default_pad_to")]
    pub pad_to: usize,
}

fn default_pad_to() -> usize {
    2
}

impl Pool {
    pub fn new(
        id: impl Into<String>,
        label_key: impl Into<String>,
        start: u32,
        end: u32,
        pad_to: usize,
    ) -> Result<Self, LottoError> {
        let pool = Self {
            id: PoolId::new(id),
            label_key: label_key.into(),
            start,
            end,
            pad_to,
        };
        pool.validate()?;
        Ok(pool)
    }

    pub fn validate(&self) -> Result<(), LottoError> {
        if self.start > self.end {
            return Err(LottoError::InvalidPoolRange);
        }
        Ok(())
    }

    /// Number of distinct values in the pool.
    pub fn size(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    /// Check if a value belongs to the pool.
    pub fn contains(&self, value: u32) -> bool {
        (self.start..=self.end).contains(&value)
    }

    /// Every value of the pool, ascending.
    pub fn numbers(&self) -> Vec<u32> {
        (self.start..=self.end).collect()
    }

    /// Render one value with the pool's padding.
    pub fn format_value(&self, value: u32) -> String {
        format!("{:0>width$}", value, width = self.pad_to)
    }

    /// Render values separated by spaces (e.g. "03 07 19").
    pub fn format_values<'a>(&self, values: impl IntoIterator<Item = &'a u32>) -> String {
        values
            .into_iter()
            .map(|value| self.format_value(*value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_range() {
        let pool = Pool::new("main", "pools.main", 1, 50, 2).unwrap();
        assert_eq!(pool.size(), 50);
        assert!(pool.contains(1));
        assert!(pool.contains(50));
        assert!(!pool.contains(0));
        assert!(!pool.contains(51));
        assert_eq!(pool.numbers().len(), 50);
    }

    #[test]
    fn test_single_value_pool() {
        let pool = Pool::new("bonus", "pools.bonus", 7, 7, 1).unwrap();
        assert_eq!(pool.size(), 1);
        assert_eq!(pool.numbers(), vec![7]);
    }

    #[test]
    fn test_inverted_range_rejected() {
        assert_eq!(
            Pool::new("main", "pools.main", 10, 1, 2),
            Err(LottoError::InvalidPoolRange)
        );
    }

    #[test]
    fn test_format_values() {
        let pool = Pool::new("main", "pools.main", 1, 50, 2).unwrap();
        assert_eq!(pool.format_values(&[3, 7, 19]), "03 07 19");

        let digits = Pool::new("digits", "pools.digits", 0, 9, 1).unwrap();
        assert_eq!(digits.format_values(&[0, 4, 9]), "0 4 9");
    }
}
