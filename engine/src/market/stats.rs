use lotto_api::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{
    format_ether, format_ether_2dp, format_thousands, CancellationFlag, ContractConfig, Loaded,
    LotteryContract, LotterySummary,
};
use crate::order::format_cents;

const HOUR_SECS: u64 = 60 * 60;

/// Headline numbers for the dashboard, already formatted for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Jackpot in ETH, two decimals.
    pub jackpot: String,
    /// Ticket price in USD, two decimals.
    pub ticket_price: String,
    /// Tickets sold with thousands separators.
    pub total_sold: String,
}

impl DashboardStats {
    pub fn fallback() -> Self {
        Self {
            jackpot: "25.4".to_string(),
            ticket_price: format_cents(u128::from(SINGLE_TICKET_USD_CENTS)),
            total_sold: "6,420".to_string(),
        }
    }
}

/// A draw as shown in the listings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lottery {
    pub id: u64,
    pub title: String,
    /// ETH, two decimals.
    pub jackpot: String,
    /// ETH.
    pub ticket_price: String,
    /// Unix seconds.
    pub closes_at: u64,
}

impl From<LotterySummary> for Lottery {
    fn from(summary: LotterySummary) -> Self {
        Self {
            id: summary.id,
            title: summary.title,
            jackpot: format_ether_2dp(summary.jackpot_wei),
            ticket_price: format_ether(summary.ticket_price_wei),
            closes_at: summary.closes_at,
        }
    }
}

/// Demo listings closing 2 days, 12 hours and 6 hours after `now`.
pub fn fallback_lotteries(now: u64) -> Vec<Lottery> {
    [
        (1, "Mega Weekly Draw", "12.8", "0.05", 48 * HOUR_SECS),
        (2, "Community Raffle", "3.1", "0.01", 12 * HOUR_SECS),
        (3, "High Roller Flash Pot", "45.0", "0.25", 6 * HOUR_SECS),
    ]
    .into_iter()
    .map(|(id, title, jackpot, ticket_price, closes_in)| Lottery {
        id,
        title: title.to_string(),
        jackpot: jackpot.to_string(),
        ticket_price: ticket_price.to_string(),
        closes_at: now.saturating_add(closes_in),
    })
    .collect()
}

/// Current ticket price in wei, or 0.05 ETH when it cannot be read.
pub async fn load_ticket_price<C: LotteryContract>(
    contract: &C,
    config: &ContractConfig,
    cancel: &CancellationFlag,
) -> Option<Loaded<u128>> {
    let result = if config.is_configured() {
        contract.ticket_price().await
    } else {
        Err(LottoError::ContractUnavailable)
    };
    if cancel.is_cancelled() {
        return None;
    }
    Some(match result {
        Ok(price) => Loaded::live(price),
        Err(err) => {
            warn!(%err, address = %config.address, "falling back to demo ticket price");
            Loaded::fallback(FALLBACK_TICKET_PRICE_WEI)
        }
    })
}

/// Jackpot and tickets sold, or the demo stats when either read fails.
pub async fn load_dashboard_stats<C: LotteryContract>(
    contract: &C,
    config: &ContractConfig,
    cancel: &CancellationFlag,
) -> Option<Loaded<DashboardStats>> {
    let result = if config.is_configured() {
        read_stats(contract).await
    } else {
        Err(LottoError::ContractUnavailable)
    };
    if cancel.is_cancelled() {
        return None;
    }
    Some(match result {
        Ok(stats) => Loaded::live(stats),
        Err(err) => {
            warn!(%err, address = %config.address, "falling back to sample stats");
            Loaded::fallback(DashboardStats::fallback())
        }
    })
}

async fn read_stats<C: LotteryContract>(contract: &C) -> Result<DashboardStats, LottoError> {
    let jackpot = contract.jackpot().await?;
    let total_sold = contract.total_sold().await?;
    Ok(DashboardStats {
        jackpot: format_ether_2dp(jackpot),
        ticket_price: format_cents(u128::from(SINGLE_TICKET_USD_CENTS)),
        total_sold: format_thousands(total_sold),
    })
}

/// Open draws, or the demo listings when they cannot be read.
pub async fn load_active_lotteries<C: LotteryContract>(
    contract: &C,
    config: &ContractConfig,
    cancel: &CancellationFlag,
    now: u64,
) -> Option<Loaded<Vec<Lottery>>> {
    let result = if config.is_configured() {
        contract.active_lotteries().await
    } else {
        Err(LottoError::ContractUnavailable)
    };
    if cancel.is_cancelled() {
        return None;
    }
    Some(match result {
        Ok(summaries) => Loaded::live(summaries.into_iter().map(Lottery::from).collect()),
        Err(err) => {
            warn!(%err, address = %config.address, "falling back to demo lotteries");
            Loaded::fallback(fallback_lotteries(now))
        }
    })
}
