use serde::{Deserialize, Serialize};

use super::Selection;

/// A confirmed selection handed from a picker to the order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPayload {
    /// Game the selection was made for.
    pub game_id: String,

    /// Active mode at confirmation time.
    pub mode_id: String,

    /// Picked values, limited to the game's pools.
    pub selections: Selection,

    /// Tickets the selection expands into.
    pub combinations: u64,
}

/// One concrete ticket materialized from a batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewTicket {
    /// Derived ticket id (e.g. "LMX-00A1B2").
    pub id: String,

    /// One minimal combination, ascending per pool.
    pub selections: Selection,
}

/// How much of a batch the preview shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewSummary {
    /// Tickets listed in the preview.
    pub shown: usize,

    /// Tickets in the batch.
    pub total: u64,

    /// True when the preview lists fewer tickets than the batch holds.
    pub truncated: bool,
}

/// One confirmed selection with its ticket count and a bounded preview.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    /// UUID v4 assigned on confirmation.
    pub id: String,

    /// Game the batch belongs to.
    pub game_id: String,

    /// Mode used to expand the selection.
    pub mode_id: String,

    /// The confirmed selection.
    pub selections: Selection,

    /// Tickets the selection expands into, regardless of preview length.
    pub combinations: u64,

    /// First tickets of the batch, at most `PREVIEW_LIMIT_PER_BATCH`.
    pub preview: Vec<PreviewTicket>,
}

impl Batch {
    pub fn preview_summary(&self) -> PreviewSummary {
        let shown = self.preview.len();
        PreviewSummary {
            shown,
            total: self.combinations,
            truncated: self.combinations > shown as u64,
        }
    }
}

/// Running totals across every batch of an order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub batch_count: usize,
    pub total_tickets: u64,
    /// Total cost in USD with two decimals (e.g. "34.00").
    pub total_cost_usd: String,
}
