use soroban_sdk::{contracttype, Address, Env};

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const TTL_INSTANCE: u32 = DAY_IN_LEDGERS * 30;
pub const TTL_INSTANCE_THRESHOLD: u32 = TTL_INSTANCE - DAY_IN_LEDGERS;
pub const TTL_PERSISTENT: u32 = DAY_IN_LEDGERS * 90;
pub const TTL_PERSISTENT_THRESHOLD: u32 = TTL_PERSISTENT - DAY_IN_LEDGERS;

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Collector,
    BaseFee,
    FeeToken,
    DistributorWasm,
    CloneCount,
}

// Storage keys for persistent data, written once per campaign
#[derive(Clone)]
#[contracttype]
pub enum RegistryKey {
    CampaignOwner(Address),        // campaign -> creator
    CampaignAt(u32),               // creation index -> campaign
    CreatorCampaignCount(Address), // creator -> number of campaigns
    CreatorCampaign(Address, u32), // (creator, nth campaign) -> campaign
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_INSTANCE_THRESHOLD, TTL_INSTANCE);
}

fn extend_persistent(env: &Env, key: &RegistryKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT_THRESHOLD, TTL_PERSISTENT);
}

pub fn collector(env: &Env) -> Address {
    // Set by the constructor, always present.
    env.storage().instance().get(&DataKey::Collector).unwrap()
}

pub fn base_fee(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::BaseFee).unwrap_or(0)
}

pub fn clone_count(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::CloneCount).unwrap_or(0)
}

/// Record a new campaign in every registry index.
pub fn register_campaign(env: &Env, index: u32, campaign: &Address, creator: &Address) {
    let owner_key = RegistryKey::CampaignOwner(campaign.clone());
    env.storage().persistent().set(&owner_key, creator);
    extend_persistent(env, &owner_key);

    let index_key = RegistryKey::CampaignAt(index);
    env.storage().persistent().set(&index_key, campaign);
    extend_persistent(env, &index_key);

    // Never exceeds clone_count, which is overflow-checked by the caller.
    let position = creator_campaign_count(env, creator);
    let creator_key = RegistryKey::CreatorCampaign(creator.clone(), position);
    env.storage().persistent().set(&creator_key, campaign);
    extend_persistent(env, &creator_key);

    let count_key = RegistryKey::CreatorCampaignCount(creator.clone());
    env.storage().persistent().set(&count_key, &(position + 1));
    extend_persistent(env, &count_key);
}

pub fn campaign_owner(env: &Env, campaign: &Address) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&RegistryKey::CampaignOwner(campaign.clone()))
}

pub fn campaign_at(env: &Env, index: u32) -> Option<Address> {
    env.storage().persistent().get(&RegistryKey::CampaignAt(index))
}

pub fn creator_campaign_count(env: &Env, creator: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&RegistryKey::CreatorCampaignCount(creator.clone()))
        .unwrap_or(0)
}

pub fn creator_campaign_at(env: &Env, creator: &Address, index: u32) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&RegistryKey::CreatorCampaign(creator.clone(), index))
}
