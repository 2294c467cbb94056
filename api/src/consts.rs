/// The maximum number of concrete tickets materialized per confirmed batch.
pub const PREVIEW_LIMIT_PER_BATCH: usize = 12;

/// Minimum width of the base-36 code in a ticket id, left-padded with zeros.
pub const TICKET_CODE_WIDTH: usize = 6;

/// The price of one ticket, in US cents.
pub const SINGLE_TICKET_USD_CENTS: u64 = 200;

/// The number of wei in one ether.
pub const ONE_ETH_WEI: u128 = 1_000_000_000_000_000_000;

/// Ticket price used when the contract cannot be read (0.05 ETH).
pub const FALLBACK_TICKET_PRICE_WEI: u128 = ONE_ETH_WEI / 20;

/// ETH to stablecoin rate used when the spot feed is unavailable.
pub const FALLBACK_ETH_USD_RATE: f64 = 3200.0;

/// Spot price endpoint the conversion rates are normally read from.
pub const SPOT_PRICE_URL: &str = "https://api.coinbase.com/v2/prices/ETH-USD/spot";

/// The address that marks a contract as not configured.
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// The address of the lottery contract.
#[cfg(feature = "devnet")]
pub const LOTTERY_CONTRACT_ADDRESS: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
#[cfg(not(feature = "devnet"))]
pub const LOTTERY_CONTRACT_ADDRESS: &str = "0xd307291F7ADE8813a825f2291a5AD6B22EBC5E0f";

// ============================================================================
// DOUBLE COLOR BALL
// ============================================================================

/// The id of the double color ball game in the built-in catalog.
pub const DOUBLE_COLOR_GAME_ID: &str = "doubleColor";

/// Red balls are drawn from 1-33.
pub const RED_BALL_START: u32 = 1;
pub const RED_BALL_END: u32 = 33;

/// Blue balls are drawn from 1-16.
pub const BLUE_BALL_START: u32 = 1;
pub const BLUE_BALL_END: u32 = 16;

/// Red balls on one concrete ticket.
pub const RED_PER_TICKET: usize = 6;

/// Blue balls on one concrete ticket.
pub const BLUE_PER_TICKET: usize = 1;

/// Red ball count allowed in a red multi bet.
pub const RED_MULTI_MIN: usize = 7;
pub const RED_MULTI_MAX: usize = 20;

/// Blue ball count allowed in a blue multi bet.
pub const BLUE_MULTI_MIN: usize = 2;
pub const BLUE_MULTI_MAX: usize = 16;
