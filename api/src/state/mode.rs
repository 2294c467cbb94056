use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::LottoError;

use super::PoolId;

/// How many values a mode expects from one pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolRequirement {
    /// Fewest values the player may select.
    pub min: usize,

    /// Most values the player may select.
    pub max: usize,

    /// Values per concrete ticket. Defaults to `min`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pick: Option<usize>,
}

impl PoolRequirement {
    /// Exactly `count` values, one ticket.
    pub const fn exact(count: usize) -> Self {
        Self {
            min: count,
            max: count,
            pick: None,
        }
    }

    pub const fn range(min: usize, max: usize) -> Self {
        Self {
            min,
            max,
            pick: None,
        }
    }

    /// Expand every selection into tickets of `pick` values.
    pub const fn with_pick(mut self, pick: usize) -> Self {
        self.pick = Some(pick);
        self
    }

    /// Number of values of this pool on one concrete ticket.
    pub fn ticket_size(&self) -> usize {
        self.pick.unwrap_or(self.min)
    }

    /// Check if a selected count satisfies the bounds.
    pub fn allows(&self, count: usize) -> bool {
        count >= self.min && count <= self.max
    }

    pub fn validate(&self, pool_size: usize) -> Result<(), LottoError> {
        if self.min > self.max || self.max > pool_size || self.ticket_size() > self.min {
            return Err(LottoError::InvalidRequirement);
        }
        Ok(())
    }
}

/// A bet shape within a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mode {
    pub id: String,

    pub label_key: String,

    pub helper_key: String,

    /// Requirement per pool. Pools without an entry are unused by the mode.
    #[serde(rename = "poolRequirements")]
    pub requirements: BTreeMap<PoolId, PoolRequirement>,

    /// Message key reported when a pool's count is out of bounds.
    #[serde(default)]
    pub error_keys: BTreeMap<PoolId, String>,

    /// Message key reported when bounds hold but no ticket can be produced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_error_key: Option<String>,
}

impl Mode {
    pub fn new(
        id: impl Into<String>,
        label_key: impl Into<String>,
        helper_key: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label_key: label_key.into(),
            helper_key: helper_key.into(),
            requirements: BTreeMap::new(),
            error_keys: BTreeMap::new(),
            total_error_key: None,
        }
    }

    pub fn require(
        mut self,
        pool_id: impl Into<PoolId>,
        requirement: PoolRequirement,
        error_key: impl Into<String>,
    ) -> Self {
        let pool_id = pool_id.into();
        self.error_keys.insert(pool_id.clone(), error_key.into());
        self.requirements.insert(pool_id, requirement);
        self
    }

    pub fn total_error(mut self, key: impl Into<String>) -> Self {
        self.total_error_key = Some(key.into());
        self
    }

    pub fn requirement(&self, pool_id: &PoolId) -> Option<&PoolRequirement> {
        self.requirements.get(pool_id)
    }

    pub fn error_key(&self, pool_id: &PoolId) -> Option<&str> {
        self.error_keys.get(pool_id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_size_defaults_to_min() {
        assert_eq!(PoolRequirement::exact(7).ticket_size(), 7);
        assert_eq!(PoolRequirement::exact(8).with_pick(7).ticket_size(), 7);
        assert_eq!(PoolRequirement::range(7, 20).with_pick(6).ticket_size(), 6);
    }

    #[test]
    fn test_requirement_bounds() {
        let requirement = PoolRequirement::range(7, 20);
        assert!(!requirement.allows(6));
        assert!(requirement.allows(7));
        assert!(requirement.allows(20));
        assert!(!requirement.allows(21));
    }

    #[test]
    fn test_requirement_validation() {
        assert!(PoolRequirement::exact(7).validate(50).is_ok());
        assert!(PoolRequirement::range(0, 0).validate(1).is_ok());
        assert_eq!(
            PoolRequirement::range(5, 4).validate(50),
            Err(LottoError::InvalidRequirement)
        );
        assert_eq!(
            PoolRequirement::exact(17).validate(16),
            Err(LottoError::InvalidRequirement)
        );
        assert_eq!(
            PoolRequirement::exact(6).with_pick(7).validate(50),
            Err(LottoError::InvalidRequirement)
        );
    }
}
