//! Selection state for one game: active mode, selection style and picks.

use lotto_api::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::combinatorics::combination_count;
use crate::sampler::random_selection;

/// How numbers get picked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionStyle {
    #[default]
    Manual,
    Random,
}

/// Why the current selection cannot be confirmed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ValidationIssue {
    /// A required pool's count is outside its bounds.
    #[serde(rename_all = "camelCase")]
    PoolBounds {
        pool_id: PoolId,
        label_key: String,
        message_key: String,
        min: usize,
        max: usize,
        selected: usize,
    },

    /// Bounds hold but the selection expands into no ticket.
    #[serde(rename_all = "camelCase")]
    InvalidTotal { message_key: String },
}

impl ValidationIssue {
    pub fn message_key(&self) -> &str {
        match self {
            ValidationIssue::PoolBounds { message_key, .. } => message_key,
            ValidationIssue::InvalidTotal { message_key } => message_key,
        }
    }
}

/// Snapshot of the picker for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickerState {
    pub selections: Selection,
    pub mode_id: String,
    pub style: SelectionStyle,
    pub combinations: u64,
    pub validation: Option<ValidationIssue>,
    pub is_valid: bool,
}

/// The ticket picker for a game.
///
/// Selections are cleared whenever the game or mode changes. In random style
/// the picker regenerates a full selection on every style or mode change and
/// rejects manual toggles.
pub struct Picker<R = StdRng> {
    game: Game,
    mode_id: String,
    style: SelectionStyle,
    selections: Selection,
    rng: R,
}

impl Picker<StdRng> {
    pub fn new(game: Game) -> Self {
        Self::with_rng(game, StdRng::from_entropy())
    }
}

impl<R: Rng> Picker<R> {
    pub fn with_rng(game: Game, rng: R) -> Self {
        let mode_id = game.default_mode().id.clone();
        Self {
            game,
            mode_id,
            style: SelectionStyle::Manual,
            selections: Selection::new(),
            rng,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn mode(&self) -> &Mode {
        self.game.mode(&self.mode_id)
    }

    pub fn style(&self) -> SelectionStyle {
        self.style
    }

    pub fn selections(&self) -> &Selection {
        &self.selections
    }

    /// Switch game: default mode, empty selection, manual style.
    pub fn set_game(&mut self, game: Game) {
        debug!(game = game.id(), "picker game changed");
        self.mode_id = game.default_mode().id.clone();
        self.game = game;
        self.style = SelectionStyle::Manual;
        self.selections.clear();
    }

    /// Switch mode. Unknown ids fall back to the default mode.
    pub fn set_mode(&mut self, mode_id: &str) {
        self.mode_id = self.game.mode(mode_id).id.clone();
        debug!(game = self.game.id(), mode = %self.mode_id, "picker mode changed");
        self.selections.clear();
        if self.style == SelectionStyle::Random {
            self.randomize();
        }
    }

    pub fn set_style(&mut self, style: SelectionStyle) {
        debug!(?style, "picker style changed");
        self.style = style;
        if style == SelectionStyle::Random {
            self.randomize();
        }
    }

    /// Toggle a number in manual style. Returns true if it is now selected.
    pub fn toggle(&mut self, pool_id: &PoolId, value: u32) -> Result<bool, LottoError> {
        if self.style == SelectionStyle::Random {
            return Err(LottoError::RandomStyleLocked);
        }
        let pool = self.game.pool(pool_id).ok_or(LottoError::UnknownPool)?;
        if !pool.contains(value) {
            return Err(LottoError::ValueOutOfRange);
        }
        Ok(self.selections.toggle(pool_id, value))
    }

    /// Replace the selection with a random one for the active mode.
    pub fn randomize(&mut self) {
        let mode = self.game.mode(&self.mode_id);
        self.selections = random_selection(&self.game, mode, &mut self.rng);
    }

    pub fn clear(&mut self) {
        self.selections.clear();
    }

    pub fn combinations(&self) -> u64 {
        combination_count(&self.game, self.mode(), &self.selections)
    }

    /// The first problem with the current selection, if any.
    pub fn validation(&self) -> Option<ValidationIssue> {
        let mode = self.mode();
        for pool in self.game.pools() {
            let Some(requirement) = mode.requirement(&pool.id) else {
                continue;
            };
            let selected = self.selections.count(&pool.id);
            if requirement.allows(selected) {
                continue;
            }
            let Some(message_key) = mode.error_key(&pool.id) else {
                continue;
            };
            return Some(ValidationIssue::PoolBounds {
                pool_id: pool.id.clone(),
                label_key: pool.label_key.clone(),
                message_key: message_key.to_string(),
                min: requirement.min,
                max: requirement.max,
                selected,
            });
        }

        if self.combinations() == 0 {
            if let Some(message_key) = &mode.total_error_key {
                return Some(ValidationIssue::InvalidTotal {
                    message_key: message_key.clone(),
                });
            }
        }
        None
    }

    pub fn is_valid(&self) -> bool {
        self.validation().is_none() && self.combinations() > 0
    }

    pub fn state(&self) -> PickerState {
        let combinations = self.combinations();
        let validation = self.validation();
        PickerState {
            selections: self.selections.clone(),
            mode_id: self.mode().id.clone(),
            style: self.style,
            combinations,
            is_valid: validation.is_none() && combinations > 0,
            validation,
        }
    }

    /// Hand the selection to the order and reset to an empty manual picker.
    pub fn confirm(&mut self) -> Result<ConfirmPayload, LottoError> {
        if !self.is_valid() {
            return Err(LottoError::SelectionInvalid);
        }
        let payload = ConfirmPayload {
            game_id: self.game.id().to_string(),
            mode_id: self.mode().id.clone(),
            selections: self.selections.normalized(&self.game),
            combinations: self.combinations(),
        };
        debug!(
            game = %payload.game_id,
            mode = %payload.mode_id,
            combinations = payload.combinations,
            "selection confirmed"
        );
        self.selections.clear();
        self.style = SelectionStyle::Manual;
        Ok(payload)
    }
}
