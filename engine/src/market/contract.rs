use lotto_api::prelude::*;
use serde::{Deserialize, Serialize};

/// One draw as reported by `getActiveLotteries`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LotterySummary {
    pub id: u64,
    pub title: String,
    pub jackpot_wei: u128,
    pub ticket_price_wei: u128,
    /// Unix seconds.
    pub closes_at: u64,
}

/// Reads and writes against the deployed lottery contract.
///
/// Implementations own the transport (RPC provider, signer, test double).
#[allow(async_fn_in_trait)]
pub trait LotteryContract {
    async fn ticket_price(&self) -> Result<u128, LottoError>;

    async fn jackpot(&self) -> Result<u128, LottoError>;

    async fn total_sold(&self) -> Result<u128, LottoError>;

    async fn active_lotteries(&self) -> Result<Vec<LotterySummary>, LottoError>;

    /// Send `buyTickets(lotteryId, quantity)` with `value_wei` attached.
    /// Returns the transaction hash once the transaction is mined.
    async fn buy_tickets(
        &self,
        lottery_id: u64,
        quantity: u64,
        value_wei: u128,
    ) -> Result<String, LottoError>;
}

/// A contract with no transport. Every call fails with `ContractUnavailable`,
/// so loaders serve their fallback data.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineContract;

impl LotteryContract for OfflineContract {
    async fn ticket_price(&self) -> Result<u128, LottoError> {
        Err(LottoError::ContractUnavailable)
    }

    async fn jackpot(&self) -> Result<u128, LottoError> {
        Err(LottoError::ContractUnavailable)
    }

    async fn total_sold(&self) -> Result<u128, LottoError> {
        Err(LottoError::ContractUnavailable)
    }

    async fn active_lotteries(&self) -> Result<Vec<LotterySummary>, LottoError> {
        Err(LottoError::ContractUnavailable)
    }

    async fn buy_tickets(&self, _: u64, _: u64, _: u128) -> Result<String, LottoError> {
        Err(LottoError::ContractUnavailable)
    }
}

/// The connected wallet, as far as purchases care.
pub trait WalletSession {
    fn account(&self) -> Option<&str>;

    fn chain_id(&self) -> Option<u64>;

    fn is_connected(&self) -> bool {
        self.account().is_some()
    }
}

/// A wallet session snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub account: Option<String>,
    pub chain_id: Option<u64>,
}

impl Wallet {
    pub fn connected(account: impl Into<String>, chain_id: u64) -> Self {
        Self {
            account: Some(account.into()),
            chain_id: Some(chain_id),
        }
    }

    pub fn disconnected() -> Self {
        Self::default()
    }
}

impl WalletSession for Wallet {
    fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    fn chain_id(&self) -> Option<u64> {
        self.chain_id
    }
}

/// Where the contract lives.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractConfig {
    pub address: String,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self::new(LOTTERY_CONTRACT_ADDRESS)
    }
}

impl ContractConfig {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }

    /// An empty or zero address means no contract is deployed.
    pub fn is_configured(&self) -> bool {
        let address = self.address.trim();
        !address.is_empty() && !address.eq_ignore_ascii_case(ZERO_ADDRESS)
    }
}
