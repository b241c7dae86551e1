use soroban_sdk::{Address, Env};

use crate::circle_proxy::CycleCapability;
use crate::types::{BoundCircle, DataKey, TriggerReceipt};

const INSTANCE_TTL_THRESHOLD: u32 = 100;
const INSTANCE_TTL_EXTEND: u32 = 500;

// --- Setup ---

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    extend_instance_ttl(env);
}

pub fn get_scheduler(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Scheduler)
}

pub fn set_scheduler(env: &Env, scheduler: &Address) {
    env.storage().instance().set(&DataKey::Scheduler, scheduler);
    extend_instance_ttl(env);
}

pub fn get_circle(env: &Env) -> Option<BoundCircle> {
    env.storage().instance().get(&DataKey::Circle)
}

pub fn set_circle(env: &Env, circle: &BoundCircle) {
    env.storage().instance().set(&DataKey::Circle, circle);
    extend_instance_ttl(env);
}

// --- Capability ---

pub fn get_capability(env: &Env) -> Option<CycleCapability> {
    env.storage().instance().get(&DataKey::Capability)
}

pub fn set_capability(env: &Env, capability: &CycleCapability) {
    env.storage().instance().set(&DataKey::Capability, capability);
    extend_instance_ttl(env);
}

// --- Receipts ---

pub fn get_last_receipt(env: &Env) -> Option<TriggerReceipt> {
    env.storage().instance().get(&DataKey::LastReceipt)
}

pub fn set_last_receipt(env: &Env, receipt: &TriggerReceipt) {
    env.storage().instance().set(&DataKey::LastReceipt, receipt);
    extend_instance_ttl(env);
}

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}
