use soroban_sdk::{Address, Env};

/// All-zero ed25519 account, the conventional null account on Stellar.
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

/// Contract address with an all-zero contract id.
pub const ZERO_CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

pub fn is_zero_address(env: &Env, address: &Address) -> bool {
    *address == Address::from_str(env, ZERO_ACCOUNT)
        || *address == Address::from_str(env, ZERO_CONTRACT)
}

/// A deadline of zero never expires.
pub fn is_expired(env: &Env, deadline: u64) -> bool {
    deadline != 0 && env.ledger().timestamp() > deadline
}
