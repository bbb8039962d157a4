#![no_std]
//! Campaign factory.
//!
//! Every campaign is a fresh instance of the distributor Wasm uploaded once
//! by the operator. The factory deploys it at a deterministic address,
//! initializes it for the creator, keeps the campaign registry and forwards
//! the creation fee to the collector.

use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, token, vec, Address, BytesN, Env, IntoVal,
    Symbol,
};

pub mod errors;
pub mod events;
mod storage;
mod utils;


pub use crate::errors::FactoryError;
pub use crate::utils::{ZERO_ACCOUNT, ZERO_CONTRACT};

use crate::storage::{extend_instance, DataKey};
use crate::utils::{campaign_salt, is_zero_address};

#[contract]
pub struct FactoryContract;

#[contractimpl]
impl FactoryContract {
    /// Deploy the factory.
    ///
    /// # Arguments
    /// * `collector`        – Receives creation fees; normally the deployer.
    /// * `fee_token`        – Token in which fees are paid (e.g. the native XLM contract).
    /// * `distributor_wasm` – Hash of the uploaded distributor Wasm every campaign runs.
    pub fn __constructor(
        env: Env,
        collector: Address,
        fee_token: Address,
        distributor_wasm: BytesN<32>,
    ) {
        if is_zero_address(&env, &collector) || is_zero_address(&env, &fee_token) {
            panic_with_error!(&env, FactoryError::ZeroAddress);
        }

        env.storage().instance().set(&DataKey::Collector, &collector);
        env.storage().instance().set(&DataKey::FeeToken, &fee_token);
        env.storage()
            .instance()
            .set(&DataKey::DistributorWasm, &distributor_wasm);
        env.storage().instance().set(&DataKey::BaseFee, &0i128);
        env.storage().instance().set(&DataKey::CloneCount, &0u32);
        extend_instance(&env);
    }

    /// Create a new airdrop campaign.
    ///
    /// # Arguments
    /// * `creator`         – Campaign creator; pays the fee and the deposit, may sweep later.
    /// * `token`           – Token being distributed.
    /// * `merkle_root`     – Root of the `(recipient, amount)` allocation tree.
    /// * `total_allocated` – Sum of all allocations; deposited into the campaign.
    /// * `deadline`        – Ledger timestamp ending the claim window, `0` for none;
    ///                       otherwise it must lie in the future.
    /// * `payment`         – Fee offered in the fee token; must cover the base fee and is
    ///                       forwarded to the collector in full.
    ///
    /// # Returns
    /// The address of the new campaign.
    pub fn create_campaign(
        env: Env,
        creator: Address,
        token: Address,
        merkle_root: BytesN<32>,
        total_allocated: i128,
        deadline: u64,
        payment: i128,
    ) -> Result<Address, FactoryError> {
        creator.require_auth();

        if payment < 0 {
            return Err(FactoryError::InvalidFee);
        }
        if payment < storage::base_fee(&env) {
            return Err(FactoryError::InsufficientFee);
        }
        if is_zero_address(&env, &token) || is_zero_address(&env, &creator) {
            return Err(FactoryError::ZeroAddress);
        }
        if total_allocated <= 0 {
            return Err(FactoryError::InvalidAllocation);
        }
        if deadline != 0 && deadline <= env.ledger().timestamp() {
            return Err(FactoryError::InvalidDeadline);
        }

        let index = storage::clone_count(&env);
        let next_count = index
            .checked_add(1)
            .ok_or(FactoryError::ArithmeticOverflow)?;

        // Deploy the clone and initialize it in the same invocation.
        let distributor_wasm: BytesN<32> = env
            .storage()
            .instance()
            .get(&DataKey::DistributorWasm)
            .unwrap();
        let campaign = env
            .deployer()
            .with_current_contract(campaign_salt(&env, index))
            .deploy_v2(distributor_wasm, (env.current_contract_address(),));

        let _: () = env.invoke_contract(
            &campaign,
            &Symbol::new(&env, "initialize"),
            vec![
                &env,
                token.into_val(&env),
                merkle_root.into_val(&env),
                total_allocated.into_val(&env),
                creator.into_val(&env),
                deadline.into_val(&env),
            ],
        );

        storage::register_campaign(&env, index, &campaign, &creator);
        env.storage().instance().set(&DataKey::CloneCount, &next_count);
        extend_instance(&env);

        events::emit_campaign_created(
            &env,
            events::CampaignCreatedEvent {
                campaign: campaign.clone(),
                creator: creator.clone(),
                token: token.clone(),
                index,
                fee_paid: payment,
            },
        );

        // Transfers go last, after all bookkeeping.
        let deposit = token::TokenClient::new(&env, &token)
            .try_transfer(&creator, &campaign, &total_allocated);
        if !matches!(deposit, Ok(Ok(()))) {
            log!(&env, "deposit of {} into {} failed", total_allocated, campaign);
            return Err(FactoryError::DepositFailed);
        }

        if payment > 0 {
            let fee_token: Address = env.storage().instance().get(&DataKey::FeeToken).unwrap();
            let collector = storage::collector(&env);
            let fee = token::TokenClient::new(&env, &fee_token)
                .try_transfer(&creator, &collector, &payment);
            if !matches!(fee, Ok(Ok(()))) {
                log!(&env, "fee of {} to {} failed", payment, collector);
                return Err(FactoryError::FeeTransferFailed);
            }
        }

        Ok(campaign)
    }

    /// Hand the collector role to `new_collector`. Only the current collector.
    pub fn set_collector(
        env: Env,
        caller: Address,
        new_collector: Address,
    ) -> Result<(), FactoryError> {
        caller.require_auth();

        let previous = storage::collector(&env);
        if caller != previous {
            return Err(FactoryError::NotCollector);
        }
        if is_zero_address(&env, &new_collector) {
            return Err(FactoryError::ZeroAddress);
        }

        env.storage()
            .instance()
            .set(&DataKey::Collector, &new_collector);
        extend_instance(&env);

        events::emit_collector_changed(
            &env,
            events::CollectorChangedEvent {
                previous,
                current: new_collector,
            },
        );
        Ok(())
    }

    /// Change the fee charged for subsequent campaigns. Only the collector.
    pub fn set_base_fee(env: Env, caller: Address, new_fee: i128) -> Result<(), FactoryError> {
        caller.require_auth();

        if caller != storage::collector(&env) {
            return Err(FactoryError::NotCollector);
        }
        if new_fee < 0 {
            return Err(FactoryError::InvalidFee);
        }

        let previous = storage::base_fee(&env);
        env.storage().instance().set(&DataKey::BaseFee, &new_fee);
        extend_instance(&env);

        events::emit_base_fee_changed(
            &env,
            events::BaseFeeChangedEvent {
                previous,
                current: new_fee,
            },
        );
        Ok(())
    }

    // ── View helpers ────────────────────────────────────────────────────

    pub fn collector(env: Env) -> Address {
        storage::collector(&env)
    }

    pub fn base_fee(env: Env) -> i128 {
        storage::base_fee(&env)
    }

    pub fn fee_token(env: Env) -> Address {
        env.storage().instance().get(&DataKey::FeeToken).unwrap()
    }

    pub fn distributor_wasm(env: Env) -> BytesN<32> {
        env.storage()
            .instance()
            .get(&DataKey::DistributorWasm)
            .unwrap()
    }

    /// Number of campaigns ever created.
    pub fn clone_count(env: Env) -> u32 {
        storage::clone_count(&env)
    }

    /// Creator of `campaign`, if it was created by this factory.
    pub fn campaign_owner(env: Env, campaign: Address) -> Option<Address> {
        storage::campaign_owner(&env, &campaign)
    }

    pub fn campaign_at(env: Env, index: u32) -> Option<Address> {
        storage::campaign_at(&env, index)
    }

    /// Number of campaigns `creator` has created.
    pub fn creator_campaign_count(env: Env, creator: Address) -> u32 {
        storage::creator_campaign_count(&env, &creator)
    }

    /// The `index`-th campaign of `creator`, in creation order.
    pub fn creator_campaign_at(env: Env, creator: Address, index: u32) -> Option<Address> {
        storage::creator_campaign_at(&env, &creator, index)
    }

    /// Address the campaign with creation index `index` is (or will be)
    /// deployed at.
    pub fn predict_campaign_address(env: Env, index: u32) -> Address {
        env.deployer()
            .with_current_contract(campaign_salt(&env, index))
            .deployed_address()
    }
}
