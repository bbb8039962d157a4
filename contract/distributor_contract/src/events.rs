use soroban_sdk::{contracttype, Address, BytesN, Env, Symbol};

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct InitializedEvent {
    pub token: Address,
    pub creator: Address,
    pub merkle_root: BytesN<32>,
    pub total_allocated: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct ClaimedEvent {
    pub recipient: Address,
    pub amount: i128,
    /// Campaign-wide total after this claim.
    pub claimed_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct SweptEvent {
    pub creator: Address,
    pub amount: i128,
}

pub fn emit_initialized(env: &Env, event: InitializedEvent) {
    env.events()
        .publish((Symbol::new(env, "initialized"),), event);
}

pub fn emit_claimed(env: &Env, event: ClaimedEvent) {
    env.events().publish(
        (Symbol::new(env, "claimed"), event.recipient.clone()),
        event,
    );
}

pub fn emit_swept(env: &Env, event: SweptEvent) {
    env.events()
        .publish((Symbol::new(env, "swept"), event.creator.clone()), event);
}
