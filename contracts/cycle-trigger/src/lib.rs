#![no_std]

//! Scheduler-facing gate that advances exactly one circle.
//!
//! A gate is created for one circle and one scheduler identity, then bound
//! to the cycle capability the circle's creator issued to it. From then on
//! the scheduler fires `trigger` at each deadline and reads the next deadline
//! off the returned receipt to re-arm itself; the gate never reschedules.

use soroban_sdk::{contract, contractimpl, Address, Bytes, Env};

mod circle_proxy;
mod errors;
mod gate;
mod storage;
mod types;

pub use circle_proxy::{AdvanceReport, CycleCapability};
pub use errors::TriggerError;
pub use types::*;

#[contract]
pub struct CycleTriggerContract;

#[contractimpl]
impl CycleTriggerContract {
    /// Fix the owner, the circle this gate advances, and the scheduler
    /// allowed to fire it.
    pub fn __constructor(
        env: Env,
        owner: Address,
        circle_contract: Address,
        circle_id: u64,
        scheduler: Address,
    ) {
        if storage::has_owner(&env) {
            panic!("already initialized");
        }
        gate::setup(&env, owner, circle_contract, circle_id, scheduler);
    }

    /// Store the capability issued to this gate. Owner only, once.
    pub fn bind(env: Env, capability: CycleCapability) -> Result<(), TriggerError> {
        gate::bind(&env, capability)
    }

    /// Fire one cycle advancement. `opaque_data` is accepted for the
    /// scheduler's calling convention and ignored.
    pub fn trigger(
        env: Env,
        caller: Address,
        opaque_id: u64,
        _opaque_data: Bytes,
    ) -> Result<TriggerReceipt, TriggerError> {
        gate::trigger(&env, caller, opaque_id)
    }

    pub fn last_receipt(env: Env) -> Option<TriggerReceipt> {
        storage::get_last_receipt(&env)
    }

    pub fn is_bound(env: Env) -> bool {
        storage::get_capability(&env).is_some()
    }

    pub fn scheduler(env: Env) -> Option<Address> {
        storage::get_scheduler(&env)
    }

    pub fn bound_circle(env: Env) -> Option<BoundCircle> {
        storage::get_circle(&env)
    }
}

#[cfg(test)]
mod test;
