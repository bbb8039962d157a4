use soroban_sdk::{contracttype, Address, Env};

// Ledgers are ~5s apart.
pub const DAY_IN_LEDGERS: u32 = 17280;
pub const TTL_INSTANCE: u32 = DAY_IN_LEDGERS * 30;
pub const TTL_INSTANCE_THRESHOLD: u32 = TTL_INSTANCE - DAY_IN_LEDGERS;
pub const TTL_PERSISTENT: u32 = DAY_IN_LEDGERS * 90;
pub const TTL_PERSISTENT_THRESHOLD: u32 = TTL_PERSISTENT - DAY_IN_LEDGERS;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Factory,
    Token,
    MerkleRoot,
    TotalAllocated,
    Creator,
    Deadline,
    ClaimedAmount,
    SweptAmount,
    Closed,
    Claimed(Address), // recipient -> true, never removed
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
pub enum CampaignStatus {
    Uninitialized,
    Active,
    Expired,
    Closed,
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_INSTANCE_THRESHOLD, TTL_INSTANCE);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Creator)
}

pub fn is_claimed(env: &Env, recipient: &Address) -> bool {
    let key = DataKey::Claimed(recipient.clone());
    let claimed = env.storage().persistent().has(&key);
    if claimed {
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_PERSISTENT_THRESHOLD, TTL_PERSISTENT);
    }
    claimed
}

pub fn set_claimed(env: &Env, recipient: &Address) {
    let key = DataKey::Claimed(recipient.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_PERSISTENT_THRESHOLD, TTL_PERSISTENT);
}

pub fn get_i128(env: &Env, key: &DataKey) -> i128 {
    env.storage().instance().get(key).unwrap_or(0)
}
