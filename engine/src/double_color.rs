//! Double color ball: red and blue pools with single and multi bets.

use lotto_api::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::picker::{Picker, PickerState, SelectionStyle, ValidationIssue};

/// Bet shapes offered by the double color ball game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BetType {
    /// 6 red, 1 blue.
    #[default]
    Single,
    /// 7-20 red, 1 blue.
    RedMulti,
    /// 6 red, 2-16 blue.
    BlueMulti,
    /// 7-20 red, 2-16 blue.
    FullMulti,
}

impl BetType {
    pub const ALL: [BetType; 4] = [
        BetType::Single,
        BetType::RedMulti,
        BetType::BlueMulti,
        BetType::FullMulti,
    ];

    /// Mode id of the bet type in the catalog.
    pub fn mode_id(self) -> &'static str {
        match self {
            BetType::Single => "single",
            BetType::RedMulti => "redMulti",
            BetType::BlueMulti => "blueMulti",
            BetType::FullMulti => "fullMulti",
        }
    }

    pub fn from_mode_id(mode_id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bet| bet.mode_id() == mode_id)
    }
}

fn red() -> PoolId {
    PoolId::from("red")
}

fn blue() -> PoolId {
    PoolId::from("blue")
}

/// A picker bound to the double color ball game.
pub struct DoubleColorPicker<R = StdRng> {
    inner: Picker<R>,
}

impl DoubleColorPicker<StdRng> {
    pub fn new(catalog: &Catalog) -> Result<Self, LottoError> {
        Self::with_rng(catalog, StdRng::from_entropy())
    }
}

impl<R: Rng> DoubleColorPicker<R> {
    /// Fails with `UnknownGame` when the catalog has no double color game.
    pub fn with_rng(catalog: &Catalog, rng: R) -> Result<Self, LottoError> {
        let game = catalog
            .find(DOUBLE_COLOR_GAME_ID)
            .ok_or(LottoError::UnknownGame)?;
        Ok(Self {
            inner: Picker::with_rng(game.clone(), rng),
        })
    }

    pub fn bet_type(&self) -> BetType {
        BetType::from_mode_id(&self.inner.mode().id).unwrap_or_default()
    }

    pub fn set_bet_type(&mut self, bet_type: BetType) {
        self.inner.set_mode(bet_type.mode_id());
    }

    pub fn style(&self) -> SelectionStyle {
        self.inner.style()
    }

    pub fn set_style(&mut self, style: SelectionStyle) {
        self.inner.set_style(style);
    }

    pub fn toggle_red(&mut self, value: u32) -> Result<bool, LottoError> {
        self.inner.toggle(&red(), value)
    }

    pub fn toggle_blue(&mut self, value: u32) -> Result<bool, LottoError> {
        self.inner.toggle(&blue(), value)
    }

    pub fn red(&self) -> Vec<u32> {
        self.inner.selections().values(&red())
    }

    pub fn blue(&self) -> Vec<u32> {
        self.inner.selections().values(&blue())
    }

    pub fn randomize(&mut self) {
        self.inner.randomize();
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// `choose(red, 6) * choose(blue, 1)` when both pools are in bounds.
    pub fn combinations(&self) -> u64 {
        self.inner.combinations()
    }

    pub fn validation(&self) -> Option<ValidationIssue> {
        self.inner.validation()
    }

    pub fn is_valid(&self) -> bool {
        self.inner.is_valid()
    }

    pub fn state(&self) -> PickerState {
        self.inner.state()
    }

    pub fn confirm(&mut self) -> Result<ConfirmPayload, LottoError> {
        self.inner.confirm()
    }
}
