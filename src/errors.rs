pub const ERR_TRADING_NOT_ENABLED: &str = "Trading not enabled";
pub const ERR_EXCEEDS_MAX_TRANSACTION: &str = "Transfer exceeds max transaction amount";
pub const ERR_EXCEEDS_MAX_WALLET: &str = "Transfer exceeds max wallet amount";
pub const ERR_UNAUTHORIZED: &str = "Unauthorized";
pub const ERR_INVALID_FEE_SCHEDULE: &str = "Total fees exceed 25%";
pub const ERR_INVALID_REBASE_RATE: &str = "Rebase rate exceeds 1%";
pub const ERR_NULL_RECIPIENT: &str = "Wallet cannot be the zero address";

pub const ERR_INSUFFICIENT_BALANCE: &str = "Insufficient balance";
pub const ERR_ALLOWANCE_EXCEEDED: &str = "Amount exceeds router allowance";
pub const ERR_CONVERSION_IN_PROGRESS: &str = "Conversion already in progress";
pub const ERR_BASE_BALANCE_DECREASED: &str = "Base asset balance decreased during swap";
