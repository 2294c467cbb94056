//! Confirmed batches and the running order totals.

use lotto_api::prelude::*;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::enumerate::enumerate_combinations;
use crate::ticket_id::derive_ticket_id;

/// The player's pending order: every confirmed batch, in confirmation order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    unit_price_cents: u64,
    batches: Vec<Batch>,
}

impl Default for Order {
    fn default() -> Self {
        Self::with_unit_price(SINGLE_TICKET_USD_CENTS)
    }
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unit_price(unit_price_cents: u64) -> Self {
        Self {
            unit_price_cents,
            batches: Vec::new(),
        }
    }

    pub fn unit_price_cents(&self) -> u64 {
        self.unit_price_cents
    }

    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Turn a confirmed selection into a batch with a bounded preview.
    ///
    /// Identical selections are kept as separate batches.
    pub fn confirm<R: Rng + ?Sized>(
        &mut self,
        catalog: &Catalog,
        payload: ConfirmPayload,
        rng: &mut R,
    ) -> Result<&Batch, LottoError> {
        let Some(game) = catalog.find(&payload.game_id) else {
            warn!(game = %payload.game_id, "confirm for unknown game ignored");
            return Err(LottoError::UnknownGame);
        };
        let mode = game
            .find_mode(&payload.mode_id)
            .unwrap_or(&game.modes()[0]);
        if payload.combinations == 0 {
            return Err(LottoError::NoCombinations);
        }

        let id = uuid::Builder::from_random_bytes(rng.gen())
            .into_uuid()
            .to_string();
        let limit = payload.combinations.min(PREVIEW_LIMIT_PER_BATCH as u64) as usize;
        let preview: Vec<PreviewTicket> =
            enumerate_combinations(game, mode, &payload.selections, limit)
                .into_iter()
                .enumerate()
                .map(|(index, selections)| PreviewTicket {
                    id: derive_ticket_id(game.ticket_prefix(), &id, index),
                    selections,
                })
                .collect();
        debug!(batch = %id, shown = preview.len(), limit, "preview enumerated");

        let batch = Batch {
            id,
            game_id: game.id().to_string(),
            mode_id: mode.id.clone(),
            selections: payload.selections,
            combinations: payload.combinations,
            preview,
        };
        info!(
            batch = %batch.id,
            game = %batch.game_id,
            mode = %batch.mode_id,
            tickets = batch.combinations,
            "batch added to order"
        );
        let index = self.batches.len();
        self.batches.push(batch);
        Ok(&self.batches[index])
    }

    /// Remove a batch. Returns false if no batch has that id.
    pub fn remove(&mut self, batch_id: &str) -> bool {
        let before = self.batches.len();
        self.batches.retain(|batch| batch.id != batch_id);
        self.batches.len() != before
    }

    pub fn clear_all(&mut self) {
        self.batches.clear();
    }

    pub fn total_tickets(&self) -> u64 {
        self.batches
            .iter()
            .fold(0u64, |total, batch| total.saturating_add(batch.combinations))
    }

    pub fn total_cost_cents(&self) -> u128 {
        u128::from(self.total_tickets()) * u128::from(self.unit_price_cents)
    }

    pub fn totals(&self) -> OrderTotals {
        OrderTotals {
            batch_count: self.batches.len(),
            total_tickets: self.total_tickets(),
            total_cost_usd: format_cents(self.total_cost_cents()),
        }
    }
}

/// Format cents as dollars with two decimals, e.g. 3400 -> "34.00".
pub fn format_cents(cents: u128) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}
