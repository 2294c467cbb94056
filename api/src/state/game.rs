use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::LottoError;

use super::{Mode, Pool, PoolId};

/// Raw game definition as it appears in catalog data.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDefinition {
    pub id: String,
    pub ticket_prefix: String,
    pub name_key: String,
    pub description_key: String,
    pub hint_key: String,
    pub default_mode_id: String,
    pub pools: Vec<Pool>,
    pub modes: Vec<Mode>,
}

/// A lottery product: ordered pools and the bet shapes offered on them.
///
/// A `Game` is only constructed through validation, so it always has at least
/// one pool and one mode, its default mode exists, and every mode requirement
/// points at a declared pool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "GameDefinition")]
pub struct Game {
    id: String,
    ticket_prefix: String,
    name_key: String,
    description_key: String,
    hint_key: String,
    default_mode_id: String,
    pools: Vec<Pool>,
    modes: Vec<Mode>,
}

impl TryFrom<GameDefinition> for Game {
    type Error = LottoError;

    fn try_from(definition: GameDefinition) -> Result<Self, Self::Error> {
        if definition.pools.is_empty() || definition.modes.is_empty() {
            return Err(LottoError::EmptyGame);
        }

        let mut pool_ids = BTreeSet::new();
        for pool in &definition.pools {
            pool.validate()?;
            if !pool_ids.insert(&pool.id) {
                return Err(LottoError::DuplicateId);
            }
        }

        let mut mode_ids = BTreeSet::new();
        for mode in &definition.modes {
            if !mode_ids.insert(mode.id.as_str()) {
                return Err(LottoError::DuplicateId);
            }
            for (pool_id, requirement) in &mode.requirements {
                let pool = definition
                    .pools
                    .iter()
                    .find(|pool| &pool.id == pool_id)
                    .ok_or(LottoError::UnknownRequirementPool)?;
                requirement.validate(pool.size())?;
            }
        }

        if !mode_ids.contains(definition.default_mode_id.as_str()) {
            return Err(LottoError::UnknownDefaultMode);
        }

        Ok(Self {
            id: definition.id,
            ticket_prefix: definition.ticket_prefix,
            name_key: definition.name_key,
            description_key: definition.description_key,
            hint_key: definition.hint_key,
            default_mode_id: definition.default_mode_id,
            pools: definition.pools,
            modes: definition.modes,
        })
    }
}

impl Game {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Short code prefixed to every ticket id of this game (e.g. "LMX").
    pub fn ticket_prefix(&self) -> &str {
        &self.ticket_prefix
    }

    pub fn name_key(&self) -> &str {
        &self.name_key
    }

    pub fn description_key(&self) -> &str {
        &self.description_key
    }

    pub fn hint_key(&self) -> &str {
        &self.hint_key
    }

    pub fn default_mode_id(&self) -> &str {
        &self.default_mode_id
    }

    pub fn pools(&self) -> &[Pool] {
        &self.pools
    }

    pub fn modes(&self) -> &[Mode] {
        &self.modes
    }

    pub fn pool(&self, pool_id: &PoolId) -> Option<&Pool> {
        self.pools.iter().find(|pool| &pool.id == pool_id)
    }

    pub fn find_mode(&self, mode_id: &str) -> Option<&Mode> {
        self.modes.iter().find(|mode| mode.id == mode_id)
    }

    /// The default mode of the game.
    pub fn default_mode(&self) -> &Mode {
        self.mode(&self.default_mode_id)
    }

    /// Look up a mode, falling back to the default mode and then the first
    /// mode when the id is stale.
    pub fn mode(&self, mode_id: &str) -> &Mode {
        self.find_mode(mode_id)
            .or_else(|| self.find_mode(&self.default_mode_id))
            .unwrap_or(&self.modes[0])
    }
}
