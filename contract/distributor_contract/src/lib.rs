#![no_std]
//! Merkle airdrop distributor.
//!
//! One instance holds the funds of one campaign. The factory contract deploys
//! it from the shared Wasm, records itself through the constructor and then
//! calls [`DistributorContract::initialize`]. Recipients claim with a proof
//! against the committed root until the deadline; afterwards the creator can
//! sweep what is left.

use soroban_sdk::{contract, contractimpl, log, token, Address, BytesN, Env, Vec};

pub mod errors;
pub mod events;
pub mod merkle;
mod storage;
mod utils;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;


pub use crate::errors::DistributorError;
pub use crate::storage::CampaignStatus;
pub use crate::utils::{is_zero_address, ZERO_ACCOUNT, ZERO_CONTRACT};

use crate::storage::{extend_instance, get_i128, DataKey};

#[contract]
pub struct DistributorContract;

#[contractimpl]
impl DistributorContract {
    /// Runs once at deployment. `factory` is the only caller allowed to
    /// initialize the campaign.
    pub fn __constructor(env: Env, factory: Address) {
        env.storage().instance().set(&DataKey::Factory, &factory);
        extend_instance(&env);
    }

    /// Configure the campaign. Called by the factory in the same invocation
    /// that deployed this instance.
    pub fn initialize(
        env: Env,
        token: Address,
        merkle_root: BytesN<32>,
        total_allocated: i128,
        creator: Address,
        deadline: u64,
    ) -> Result<(), DistributorError> {
        if storage::is_initialized(&env) {
            return Err(DistributorError::AlreadyInitialized);
        }

        let factory: Address = env
            .storage()
            .instance()
            .get(&DataKey::Factory)
            .ok_or(DistributorError::NotInitialized)?;
        factory.require_auth();

        if is_zero_address(&env, &token) || is_zero_address(&env, &creator) {
            return Err(DistributorError::ZeroAddress);
        }
        if total_allocated <= 0 {
            return Err(DistributorError::InvalidAllocation);
        }

        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::MerkleRoot, &merkle_root);
        env.storage().instance().set(&DataKey::TotalAllocated, &total_allocated);
        env.storage().instance().set(&DataKey::Creator, &creator);
        env.storage().instance().set(&DataKey::Deadline, &deadline);
        env.storage().instance().set(&DataKey::ClaimedAmount, &0i128);
        env.storage().instance().set(&DataKey::SweptAmount, &0i128);
        env.storage().instance().set(&DataKey::Closed, &false);
        extend_instance(&env);

        events::emit_initialized(
            &env,
            events::InitializedEvent {
                token,
                creator,
                merkle_root,
                total_allocated,
                deadline,
            },
        );

        Ok(())
    }

    /// Claim `amount` tokens for `recipient`, proving the allocation with
    /// `proof` (sibling hashes from the leaf level up).
    ///
    /// The recipient is marked as claimed before the token transfer, so any
    /// re-entrant claim fails with `AlreadyClaimed`.
    pub fn claim(
        env: Env,
        recipient: Address,
        amount: i128,
        proof: Vec<BytesN<32>>,
    ) -> Result<(), DistributorError> {
        recipient.require_auth();

        if !storage::is_initialized(&env) {
            return Err(DistributorError::NotInitialized);
        }

        let deadline: u64 = env.storage().instance().get(&DataKey::Deadline).unwrap_or(0);
        if utils::is_expired(&env, deadline) {
            return Err(DistributorError::DeadlinePassed);
        }
        if storage::is_claimed(&env, &recipient) {
            return Err(DistributorError::AlreadyClaimed);
        }
        if amount <= 0 {
            return Err(DistributorError::InvalidAmount);
        }

        let root: BytesN<32> = env
            .storage()
            .instance()
            .get(&DataKey::MerkleRoot)
            .ok_or(DistributorError::NotInitialized)?;
        let leaf = merkle::hash_leaf(&env, &recipient, amount);
        if !merkle::verify(&env, &root, &leaf, &proof) {
            log!(&env, "invalid proof for {}", recipient);
            return Err(DistributorError::InvalidProof);
        }

        let token_address = Self::token_address(&env)?;
        let token_client = token::TokenClient::new(&env, &token_address);
        let contract_address = env.current_contract_address();
        if token_client.balance(&contract_address) < amount {
            return Err(DistributorError::InsufficientFunds);
        }

        let claimed_amount = get_i128(&env, &DataKey::ClaimedAmount)
            .checked_add(amount)
            .ok_or(DistributorError::ArithmeticOverflow)?;

        storage::set_claimed(&env, &recipient);
        env.storage()
            .instance()
            .set(&DataKey::ClaimedAmount, &claimed_amount);
        extend_instance(&env);

        events::emit_claimed(
            &env,
            events::ClaimedEvent {
                recipient: recipient.clone(),
                amount,
                claimed_amount,
            },
        );

        transfer(&token_client, &contract_address, &recipient, amount)
    }

    /// Return every token still held by the campaign to its creator.
    ///
    /// Only after the deadline, only once: a second call fails with
    /// `NothingToSweep`. Returns the swept amount.
    pub fn sweep_unclaimed(env: Env, caller: Address) -> Result<i128, DistributorError> {
        caller.require_auth();

        let creator = Self::creator_address(&env)?;
        if caller != creator {
            return Err(DistributorError::NotCreator);
        }

        let deadline: u64 = env.storage().instance().get(&DataKey::Deadline).unwrap_or(0);
        if !utils::is_expired(&env, deadline) {
            return Err(DistributorError::NotExpiredYet);
        }

        let closed: bool = env.storage().instance().get(&DataKey::Closed).unwrap_or(false);
        if closed {
            return Err(DistributorError::NothingToSweep);
        }

        let token_address = Self::token_address(&env)?;
        let token_client = token::TokenClient::new(&env, &token_address);
        let contract_address = env.current_contract_address();
        let remaining = token_client.balance(&contract_address);
        if remaining <= 0 {
            return Err(DistributorError::NothingToSweep);
        }

        env.storage().instance().set(&DataKey::Closed, &true);
        env.storage().instance().set(&DataKey::SweptAmount, &remaining);
        extend_instance(&env);

        events::emit_swept(
            &env,
            events::SweptEvent {
                creator: creator.clone(),
                amount: remaining,
            },
        );

        transfer(&token_client, &contract_address, &creator, remaining)?;
        Ok(remaining)
    }

    // ── View helpers ────────────────────────────────────────────────────

    pub fn factory(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Factory)
    }

    pub fn token(env: Env) -> Result<Address, DistributorError> {
        Self::token_address(&env)
    }

    pub fn merkle_root(env: Env) -> Result<BytesN<32>, DistributorError> {
        env.storage()
            .instance()
            .get(&DataKey::MerkleRoot)
            .ok_or(DistributorError::NotInitialized)
    }

    pub fn total_allocated(env: Env) -> i128 {
        get_i128(&env, &DataKey::TotalAllocated)
    }

    pub fn creator(env: Env) -> Result<Address, DistributorError> {
        Self::creator_address(&env)
    }

    /// Zero means the campaign never expires.
    pub fn deadline(env: Env) -> u64 {
        env.storage().instance().get(&DataKey::Deadline).unwrap_or(0)
    }

    pub fn is_claimed(env: Env, recipient: Address) -> bool {
        storage::is_claimed(&env, &recipient)
    }

    /// Total transferred to recipients so far.
    pub fn claimed_amount(env: Env) -> i128 {
        get_i128(&env, &DataKey::ClaimedAmount)
    }

    pub fn swept_amount(env: Env) -> i128 {
        get_i128(&env, &DataKey::SweptAmount)
    }

    /// Current token balance of the campaign.
    pub fn remaining(env: Env) -> Result<i128, DistributorError> {
        let token_address = Self::token_address(&env)?;
        Ok(token::TokenClient::new(&env, &token_address).balance(&env.current_contract_address()))
    }

    pub fn status(env: Env) -> CampaignStatus {
        if !storage::is_initialized(&env) {
            return CampaignStatus::Uninitialized;
        }
        if env.storage().instance().get(&DataKey::Closed).unwrap_or(false) {
            return CampaignStatus::Closed;
        }
        let deadline: u64 = env.storage().instance().get(&DataKey::Deadline).unwrap_or(0);
        if utils::is_expired(&env, deadline) {
            CampaignStatus::Expired
        } else {
            CampaignStatus::Active
        }
    }

    /// Leaf for `(recipient, amount)` under the campaign's encoding.
    pub fn leaf(env: Env, recipient: Address, amount: i128) -> BytesN<32> {
        merkle::hash_leaf(&env, &recipient, amount)
    }
}

impl DistributorContract {
    fn token_address(env: &Env) -> Result<Address, DistributorError> {
        env.storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(DistributorError::NotInitialized)
    }

    fn creator_address(env: &Env) -> Result<Address, DistributorError> {
        env.storage()
            .instance()
            .get(&DataKey::Creator)
            .ok_or(DistributorError::NotInitialized)
    }
}

fn transfer(
    token_client: &token::TokenClient,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), DistributorError> {
    match token_client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(DistributorError::TransferFailed),
    }
}
