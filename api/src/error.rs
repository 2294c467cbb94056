use num_enum::IntoPrimitive;
use thiserror::Error;

/// Lottery engine error codes
/// Range 1000-1999: Selection errors
/// Range 2000-2999: Configuration errors
/// Range 3000-3999: Purchase errors
/// Range 4000-4999: System errors
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, IntoPrimitive)]
#[repr(u32)]
pub enum LottoError {
    // Selection Errors (1000-1999)
    #[error("Numbers cannot be toggled while auto pick is active")]
    RandomStyleLocked = 1001,

    #[error("Pool is not part of the active game")]
    UnknownPool = 1002,

    #[error("Number is outside the pool range")]
    ValueOutOfRange = 1003,

    #[error("Selection does not satisfy the active mode")]
    SelectionInvalid = 1004,

    #[error("Selection produces no tickets")]
    NoCombinations = 1005,

    // Configuration Errors (2000-2999)
    #[error("Pool range start is after its end")]
    InvalidPoolRange = 2001,

    #[error("Mode requirement bounds are invalid")]
    InvalidRequirement = 2002,

    #[error("Mode requirement references an unknown pool")]
    UnknownRequirementPool = 2003,

    #[error("Default mode is not defined by the game")]
    UnknownDefaultMode = 2004,

    #[error("Game must declare at least one pool and one mode")]
    EmptyGame = 2005,

    #[error("Identifier is declared more than once")]
    DuplicateId = 2006,

    #[error("Game is not part of the catalog")]
    UnknownGame = 2007,

    // Purchase Errors (3000-3999)
    #[error("Wallet is not connected")]
    WalletNotConnected = 3001,

    #[error("Ticket price is unavailable")]
    PriceUnavailable = 3002,

    #[error("No tickets have been confirmed")]
    NoTickets = 3003,

    #[error("Lottery id is invalid")]
    InvalidLotteryId = 3004,

    #[error("Transaction was rejected")]
    TransactionFailed = 3005,

    #[error("Lottery contract is unavailable")]
    ContractUnavailable = 3006,

    #[error("Price feed returned an invalid rate")]
    InvalidPriceFeed = 3007,

    // System Errors (4000-4999)
    #[error("Arithmetic operation overflowed")]
    ArithmeticOverflow = 4001,

    #[error("Failed to deserialize configuration data")]
    Deserialization = 4002,
}

impl LottoError {
    /// Numeric code of the error, stable across releases.
    pub fn code(self) -> u32 {
        self.into()
    }
}

impl From<serde_json::Error> for LottoError {
    fn from(_: serde_json::Error) -> Self {
        LottoError::Deserialization
    }
}
