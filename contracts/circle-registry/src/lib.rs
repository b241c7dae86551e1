#![no_std]

//! Discovery index for circles: which account hosts a circle, and which
//! circles a member belongs to. Callers keep it in step with the circle
//! contract; the circle contract never reads it.

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

mod errors;
mod registry;
mod storage;
mod types;

pub use errors::RegistryError;
pub use types::*;

#[contract]
pub struct CircleRegistryContract;

#[contractimpl]
impl CircleRegistryContract {
    /// Register a circle under its host account.
    pub fn register_circle(
        env: Env,
        host: Address,
        circle_id: u64,
        name: String,
    ) -> Result<(), RegistryError> {
        registry::register_circle(&env, host, circle_id, name)
    }

    /// Record that `member` belongs to a registered circle.
    pub fn register_member(env: Env, member: Address, circle_id: u64) -> Result<(), RegistryError> {
        registry::register_member(&env, member, circle_id)
    }

    pub fn get_circle_host(env: Env, circle_id: u64) -> Option<Address> {
        registry::get_circle_host(&env, circle_id)
    }

    pub fn get_circle(env: Env, circle_id: u64) -> Option<CircleEntry> {
        storage::get_circle(&env, circle_id)
    }

    /// Circle ids a member registered for, oldest first.
    pub fn get_member_circles(env: Env, member: Address) -> Vec<u64> {
        storage::get_member_circles(&env, &member)
    }

    /// Every registered circle id, oldest first.
    pub fn get_all_circle_ids(env: Env) -> Vec<u64> {
        registry::get_all_circle_ids(&env)
    }

    pub fn get_circle_count(env: Env) -> u32 {
        registry::get_circle_count(&env)
    }
}

#[cfg(test)]
mod test;
