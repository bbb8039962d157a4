use soroban_sdk::{Address, BytesN, Env};

/// All-zero ed25519 account, the conventional null account on Stellar.
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

/// Contract address with an all-zero contract id.
pub const ZERO_CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

pub fn is_zero_address(env: &Env, address: &Address) -> bool {
    *address == Address::from_str(env, ZERO_ACCOUNT)
        || *address == Address::from_str(env, ZERO_CONTRACT)
}

/// Deployment salt of the campaign created at `index`.
pub fn campaign_salt(env: &Env, index: u32) -> BytesN<32> {
    let mut salt = [0u8; 32];
    salt[28..].copy_from_slice(&index.to_be_bytes());
    BytesN::from_array(env, &salt)
}
