#![no_std]

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

mod admin;
mod cell;
mod circle;
mod contribution;
mod cycle;
mod errors;
mod events;
mod membership;
mod storage;
mod types;

pub use cell::ValueCell;
pub use errors::CircleError;
pub use types::*;

#[contract]
pub struct RoscaContract;

#[contractimpl]
impl RoscaContract {
    /// Initialize the protocol with a global admin.
    pub fn __constructor(env: Env, admin: Address) {
        if storage::has_admin(&env) {
            panic!("already initialized");
        }
        storage::set_admin(&env, &admin);
    }

    // ─── Circle Lifecycle ───────────────────────────────────────────

    /// Create a new circle in the forming state. The creator does not join
    /// automatically.
    pub fn create_circle(
        env: Env,
        creator: Address,
        config: CircleConfig,
    ) -> Result<u64, CircleError> {
        circle::create_circle(&env, creator, config)
    }

    /// Join a forming circle, posting `deposit` as collateral. The join that
    /// fills the circle starts cycle 1.
    pub fn join_circle(
        env: Env,
        member: Address,
        circle_id: u64,
        deposit: i128,
    ) -> Result<(), CircleError> {
        circle::join_circle(&env, member, circle_id, deposit)
    }

    /// Cancel a forming or active circle (creator or protocol admin).
    pub fn cancel_circle(env: Env, caller: Address, circle_id: u64) -> Result<(), CircleError> {
        admin::cancel_circle(&env, caller, circle_id)
    }

    /// Get circle details.
    pub fn get_circle(env: Env, circle_id: u64) -> Result<Circle, CircleError> {
        circle::get_circle(&env, circle_id)
    }

    /// Number of circles created so far. Ids run from 1 to this value.
    pub fn circle_count(env: Env) -> u64 {
        storage::get_circle_counter(&env)
    }

    // ─── Membership ─────────────────────────────────────────────────

    /// Get one member's record.
    pub fn get_member(env: Env, circle_id: u64, member: Address) -> Result<MemberRecord, CircleError> {
        circle::get_member(&env, circle_id, member)
    }

    /// Get every member's record in rotation order.
    pub fn get_members(env: Env, circle_id: u64) -> Result<Vec<MemberRecord>, CircleError> {
        circle::get_members(&env, circle_id)
    }

    /// Check whether every member has contributed in the current cycle.
    pub fn all_contributed(env: Env, circle_id: u64) -> Result<bool, CircleError> {
        circle::all_contributed(&env, circle_id)
    }

    // ─── Contributions ──────────────────────────────────────────────

    /// Contribute to the current cycle of an active circle.
    pub fn contribute(
        env: Env,
        member: Address,
        circle_id: u64,
        amount: i128,
    ) -> Result<(), CircleError> {
        contribution::contribute(&env, member, circle_id, amount)
    }

    /// Check if a member has contributed in the current cycle.
    pub fn has_contributed(env: Env, member: Address, circle_id: u64) -> Result<bool, CircleError> {
        contribution::has_contributed(&env, member, circle_id)
    }

    // ─── Cycles ─────────────────────────────────────────────────────

    /// Issue the one capability allowed to advance this circle's cycles.
    /// Only the circle creator can call this, once.
    pub fn issue_cycle_capability(
        env: Env,
        creator: Address,
        circle_id: u64,
        holder: Address,
    ) -> Result<CycleCapability, CircleError> {
        cycle::issue_cycle_capability(&env, creator, circle_id, holder)
    }

    /// Get the capability issued for a circle, if any.
    pub fn get_capability(env: Env, circle_id: u64) -> Option<CycleCapability> {
        cycle::get_capability(&env, circle_id)
    }

    /// Close the current cycle: penalize members who missed it, pay the pot
    /// to this cycle's recipient, then open the next cycle or complete the
    /// circle. Requires the issued capability and its holder's auth.
    pub fn advance_cycle(
        env: Env,
        capability: CycleCapability,
    ) -> Result<AdvanceReport, CircleError> {
        cycle::advance_cycle(&env, capability)
    }

    /// Get the payout order for a circle.
    pub fn get_payout_order(env: Env, circle_id: u64) -> Result<Vec<Address>, CircleError> {
        cycle::get_payout_order(&env, circle_id)
    }

    /// Get the current cycle's recipient.
    pub fn get_current_recipient(env: Env, circle_id: u64) -> Result<Address, CircleError> {
        cycle::get_current_recipient(&env, circle_id)
    }

    // ─── Custody ────────────────────────────────────────────────────

    pub fn pool_balance(env: Env, circle_id: u64) -> Result<i128, CircleError> {
        circle::pool_balance(&env, circle_id)
    }

    pub fn collateral_balance(env: Env, circle_id: u64, member: Address) -> Result<i128, CircleError> {
        circle::collateral_balance(&env, circle_id, member)
    }

    pub fn forfeited_balance(env: Env, circle_id: u64) -> Result<i128, CircleError> {
        circle::forfeited_balance(&env, circle_id)
    }

    /// Return a member's collateral once the circle has completed. Members
    /// who went delinquent have nothing to claim.
    pub fn claim_collateral(env: Env, member: Address, circle_id: u64) -> Result<i128, CircleError> {
        circle::claim_collateral(&env, member, circle_id)
    }

    /// Release a completed circle's forfeited collateral (protocol admin).
    pub fn sweep_forfeits(
        env: Env,
        admin: Address,
        circle_id: u64,
        to: Address,
    ) -> Result<i128, CircleError> {
        admin::sweep_forfeits(&env, admin, circle_id, to)
    }

    // ─── Receipts / Admin ───────────────────────────────────────────

    /// Record the pointer to the newest off-chain receipt (circle creator).
    pub fn store_receipt_pointer(
        env: Env,
        caller: Address,
        circle_id: u64,
        pointer: String,
    ) -> Result<(), CircleError> {
        admin::store_receipt_pointer(&env, caller, circle_id, pointer)
    }

    pub fn get_admin(env: Env) -> Result<Address, CircleError> {
        storage::get_admin(&env)
    }
}
