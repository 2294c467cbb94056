//! Boundary to the lottery contract and the price feed.
//!
//! Every loader degrades to fixed demo data when the contract is missing or a
//! read fails, and drops its result when the caller cancelled meanwhile.

mod contract;
mod purchase;
mod rates;
mod stats;

pub use contract::*;
pub use purchase::*;
pub use rates::*;
pub use stats::*;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use lotto_api::consts::ONE_ETH_WEI;
use serde::{Deserialize, Serialize};

/// Shared flag a caller sets when it no longer wants a pending result.
#[derive(Clone, Debug, Default)]
pub struct CancellationFlag(Arc<AtomicBool>);

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Where a loaded value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataStatus {
    Live,
    Fallback,
}

impl DataStatus {
    /// Status message key under a prefix, e.g. "dashboard.status.live".
    pub fn message_key(self, prefix: &str) -> String {
        match self {
            DataStatus::Live => format!("{prefix}.status.live"),
            DataStatus::Fallback => format!("{prefix}.status.fallback"),
        }
    }
}

/// A loaded value tagged with its source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loaded<T> {
    pub value: T,
    pub status: DataStatus,
}

impl<T> Loaded<T> {
    pub fn live(value: T) -> Self {
        Self {
            value,
            status: DataStatus::Live,
        }
    }

    pub fn fallback(value: T) -> Self {
        Self {
            value,
            status: DataStatus::Fallback,
        }
    }
}

/// Render wei as ether with trailing zeros trimmed, e.g. "0.05" or "1.0".
pub fn format_ether(wei: u128) -> String {
    let whole = wei / ONE_ETH_WEI;
    let fraction = format!("{:018}", wei % ONE_ETH_WEI);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        format!("{whole}.0")
    } else {
        format!("{whole}.{fraction}")
    }
}

/// Render wei as ether rounded half up to two decimals.
pub fn format_ether_2dp(wei: u128) -> String {
    const HUNDREDTH: u128 = ONE_ETH_WEI / 100;
    let hundredths = wei / HUNDREDTH + u128::from(wei % HUNDREDTH >= HUNDREDTH / 2);
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}

/// Group digits in threes, e.g. 6420 -> "6,420".
pub fn format_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}
