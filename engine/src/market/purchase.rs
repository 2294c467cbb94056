use lotto_api::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{LotteryContract, WalletSession};
use crate::order::Order;

/// A validated `buyTickets` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub lottery_id: u64,
    pub quantity: u64,
    /// `ticket price × quantity`, attached as the transaction value.
    pub value_wei: u128,
}

impl PurchaseRequest {
    /// Check the purchase form against the order.
    ///
    /// Checks run in this order: wallet, price, tickets, lottery id. A zero
    /// price counts as unavailable.
    pub fn prepare<W: WalletSession>(
        wallet: &W,
        ticket_price_wei: Option<u128>,
        order: &Order,
        lottery_id: &str,
    ) -> Result<Self, LottoError> {
        if !wallet.is_connected() {
            return Err(LottoError::WalletNotConnected);
        }
        let price = ticket_price_wei
            .filter(|price| *price > 0)
            .ok_or(LottoError::PriceUnavailable)?;
        let quantity = order.total_tickets();
        if quantity == 0 {
            return Err(LottoError::NoTickets);
        }
        let lottery_id = parse_lottery_id(lottery_id)?;
        let value_wei = price
            .checked_mul(u128::from(quantity))
            .ok_or(LottoError::ArithmeticOverflow)?;

        Ok(Self {
            lottery_id,
            quantity,
            value_wei,
        })
    }

    /// Send the purchase. Any contract failure becomes `TransactionFailed`.
    pub async fn submit<C: LotteryContract>(&self, contract: &C) -> Result<String, LottoError> {
        info!(
            lottery = self.lottery_id,
            quantity = self.quantity,
            value_wei = %self.value_wei,
            "submitting purchase"
        );
        match contract
            .buy_tickets(self.lottery_id, self.quantity, self.value_wei)
            .await
        {
            Ok(tx_hash) => {
                info!(%tx_hash, "purchase confirmed");
                Ok(tx_hash)
            }
            Err(err) => {
                warn!(%err, lottery = self.lottery_id, "purchase failed");
                Err(LottoError::TransactionFailed)
            }
        }
    }
}

fn parse_lottery_id(raw: &str) -> Result<u64, LottoError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(|id| u64::try_from(id).ok())
        .ok_or(LottoError::InvalidLotteryId)
}

/// Feedback message key for a purchase outcome.
pub fn feedback_key(result: &Result<String, LottoError>) -> &'static str {
    match result {
        Ok(_) => "purchase.feedback.txSuccess",
        Err(LottoError::WalletNotConnected) => "purchase.feedback.connectWallet",
        Err(LottoError::PriceUnavailable) => "purchase.feedback.priceUnavailable",
        Err(LottoError::NoTickets) => "purchase.feedback.noTickets",
        Err(LottoError::InvalidLotteryId) => "purchase.feedback.invalidLotteryId",
        Err(_) => "purchase.feedback.txFailed",
    }
}
