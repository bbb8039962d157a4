use soroban_sdk::{contracttype, Address, Env, Symbol};

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignCreatedEvent {
    pub campaign: Address,
    pub creator: Address,
    pub token: Address,
    pub index: u32,
    pub fee_paid: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CollectorChangedEvent {
    pub previous: Address,
    pub current: Address,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct BaseFeeChangedEvent {
    pub previous: i128,
    pub current: i128,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_created"), event.creator.clone()),
        event,
    );
}

pub fn emit_collector_changed(env: &Env, event: CollectorChangedEvent) {
    env.events()
        .publish((Symbol::new(env, "collector_changed"),), event);
}

pub fn emit_base_fee_changed(env: &Env, event: BaseFeeChangedEvent) {
    env.events()
        .publish((Symbol::new(env, "base_fee_changed"),), event);
}
