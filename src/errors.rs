// ============================================================
// Error messages — one per failure kind. Every one of them
// aborts the whole call and rolls back its storage writes.
// ============================================================

pub const ERR_NOT_OWNER: &str = "caller is not the owner";
pub const ERR_NOT_A_VOTER: &str = "only voter can call";
pub const ERR_ALREADY_VOTED: &str = "voter already voted on this proposal";

pub const ERR_INSUFFICIENT_BALANCE: &str = "transfer amount exceeds balance";
pub const ERR_INSUFFICIENT_ALLOWANCE: &str = "allowance amount exceeds allowed";
pub const ERR_ALLOWANCE_UNDERFLOW: &str = "decreased allowance below zero";
pub const ERR_ZERO_ADDRESS: &str = "zero address not allowed";
pub const ERR_ZERO_AMOUNT: &str = "amount must be positive";

pub const ERR_BLACKLISTED_CALLER: &str = "this address is in blacklist";
pub const ERR_NOT_BLACKLISTED: &str = "address is not blacklisted";
pub const ERR_TRANSFER_WHILE_PAUSED: &str = "token transfer while paused";

pub const ERR_INVALID_FEE_PARAMS: &str = "fee basis points exceed 10000";

pub const ERR_PROPOSAL_ACTION_FAILED: &str = "call payload failed";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "proposal does not exist";
pub const ERR_PROPOSAL_ALREADY_EXECUTED: &str = "proposal already executed";
pub const ERR_ALREADY_VOTER: &str = "address is already a voter";
pub const ERR_NOT_VOTER_TARGET: &str = "address is not a voter";
pub const ERR_LAST_VOTER: &str = "cannot remove the last voter";

pub const ERR_DEPRECATED_USE_LEGACY_PATH: &str =
    "contract deprecated, use successor transferByLegacy()";
pub const ERR_ALREADY_DEPRECATED: &str = "contract already deprecated";
