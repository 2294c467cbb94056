use std::collections::BTreeMap;

use lotto_api::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{CancellationFlag, DataStatus};

/// USD-pegged tokens the converter quotes against ETH.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Stablecoin {
    Usdt,
    Usdc,
    Dai,
}

impl Stablecoin {
    pub const ALL: [Stablecoin; 3] = [Stablecoin::Usdt, Stablecoin::Usdc, Stablecoin::Dai];

    pub fn symbol(self) -> &'static str {
        match self {
            Stablecoin::Usdt => "USDT",
            Stablecoin::Usdc => "USDC",
            Stablecoin::Dai => "DAI",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Stablecoin::Usdt => "Tether USD",
            Stablecoin::Usdc => "USD Coin",
            Stablecoin::Dai => "Dai",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConversionDirection {
    #[default]
    EthToStable,
    StableToEth,
}

/// Source of the ETH-USD spot quote.
#[allow(async_fn_in_trait)]
pub trait SpotPriceFeed {
    /// Raw response body of the spot endpoint (see `SPOT_PRICE_URL`).
    async fn fetch_spot(&self) -> Result<String, LottoError>;
}

/// ETH price per stablecoin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRates {
    rates: BTreeMap<Stablecoin, f64>,
    status: DataStatus,
}

impl Default for ConversionRates {
    fn default() -> Self {
        Self::fallback()
    }
}

impl ConversionRates {
    /// Fixed sample rate for every stablecoin.
    pub fn fallback() -> Self {
        Self::uniform(FALLBACK_ETH_USD_RATE, DataStatus::Fallback)
    }

    /// Parse a spot payload such as `{"data":{"amount":"3456.78"}}`.
    /// The amount may be a string or a number.
    pub fn from_spot_json(body: &str) -> Result<Self, LottoError> {
        let payload: serde_json::Value = serde_json::from_str(body)?;
        let amount = &payload["data"]["amount"];
        let price = match amount {
            serde_json::Value::String(raw) => raw.trim().parse::<f64>().ok(),
            serde_json::Value::Number(number) => number.as_f64(),
            _ => None,
        }
        .filter(|price| price.is_finite())
        .ok_or(LottoError::InvalidPriceFeed)?;
        Ok(Self::uniform(price, DataStatus::Live))
    }

    fn uniform(rate: f64, status: DataStatus) -> Self {
        Self {
            rates: Stablecoin::ALL.into_iter().map(|coin| (coin, rate)).collect(),
            status,
        }
    }

    pub fn status(&self) -> DataStatus {
        self.status
    }

    pub fn rate(&self, coin: Stablecoin) -> f64 {
        self.rates.get(&coin).copied().unwrap_or(0.0)
    }

    /// Amount received for selling `amount`. Negative or non-finite input
    /// converts to zero, as does selling stablecoins at a zero rate.
    pub fn convert(&self, amount: f64, coin: Stablecoin, direction: ConversionDirection) -> f64 {
        if !amount.is_finite() || amount < 0.0 {
            return 0.0;
        }
        let rate = self.rate(coin);
        match direction {
            ConversionDirection::EthToStable => amount * rate,
            ConversionDirection::StableToEth if rate > 0.0 => amount / rate,
            ConversionDirection::StableToEth => 0.0,
        }
    }

    /// USD value of the amount being sold.
    pub fn sell_value_usd(
        &self,
        amount: f64,
        coin: Stablecoin,
        direction: ConversionDirection,
    ) -> f64 {
        if !amount.is_finite() || amount < 0.0 {
            return 0.0;
        }
        match direction {
            ConversionDirection::EthToStable => amount * self.rate(coin),
            ConversionDirection::StableToEth => amount,
        }
    }
}

/// Fetch live rates, or the sample rates when the feed fails.
pub async fn load_conversion_rates<F: SpotPriceFeed>(
    feed: &F,
    cancel: &CancellationFlag,
) -> Option<ConversionRates> {
    let result = feed
        .fetch_spot()
        .await
        .and_then(|body| ConversionRates::from_spot_json(&body));
    if cancel.is_cancelled() {
        return None;
    }
    Some(match result {
        Ok(rates) => {
            debug!(rate = rates.rate(Stablecoin::Usdt), "live conversion rate loaded");
            rates
        }
        Err(err) => {
            warn!(%err, url = SPOT_PRICE_URL, "falling back to static conversion rates");
            ConversionRates::fallback()
        }
    })
}
