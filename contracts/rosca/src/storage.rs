use soroban_sdk::{Address, Env, Map};

use crate::cell::{CollateralCells, ValueCell};
use crate::errors::CircleError;
use crate::types::{Circle, CycleCapability, DataKey, MemberRecord};

const INSTANCE_TTL_THRESHOLD: u32 = 100;
const INSTANCE_TTL_EXTEND: u32 = 500;
const PERSISTENT_TTL_THRESHOLD: u32 = 100;
const PERSISTENT_TTL_EXTEND: u32 = 1000;

// --- Admin ---

pub fn get_admin(env: &Env) -> Result<Address, CircleError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(CircleError::NotInitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    extend_instance_ttl(env);
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

// --- Circle Counter ---

pub fn get_circle_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::CircleCounter)
        .unwrap_or(0)
}

pub fn set_circle_counter(env: &Env, counter: u64) {
    env.storage()
        .instance()
        .set(&DataKey::CircleCounter, &counter);
    extend_instance_ttl(env);
}

// --- Circle ---

pub fn get_circle(env: &Env, circle_id: u64) -> Option<Circle> {
    read_persistent(env, &DataKey::Circle(circle_id))
}

pub fn load_circle(env: &Env, circle_id: u64) -> Result<Circle, CircleError> {
    get_circle(env, circle_id).ok_or(CircleError::CircleNotFound)
}

pub fn set_circle(env: &Env, circle: &Circle) {
    let key = DataKey::Circle(circle.id);
    env.storage().persistent().set(&key, circle);
    extend_persistent_ttl(env, &key);
}

// --- Members ---

pub fn get_members(env: &Env, circle_id: u64) -> Map<Address, MemberRecord> {
    read_persistent(env, &DataKey::Members(circle_id)).unwrap_or(Map::new(env))
}

pub fn set_members(env: &Env, circle_id: u64, members: &Map<Address, MemberRecord>) {
    let key = DataKey::Members(circle_id);
    env.storage().persistent().set(&key, members);
    extend_persistent_ttl(env, &key);
}

// --- Value Cells ---

pub fn get_pool(env: &Env, circle_id: u64) -> ValueCell {
    read_cell(env, &DataKey::Pool(circle_id))
}

pub fn set_pool(env: &Env, circle_id: u64, cell: &ValueCell) {
    write_cell(env, &DataKey::Pool(circle_id), cell);
}

/// Every member's collateral cell lives under one key, so a cycle touches a
/// fixed number of entries however many members the circle has.
pub fn get_collateral(env: &Env, circle_id: u64) -> CollateralCells {
    read_persistent(env, &DataKey::Collateral(circle_id)).unwrap_or(Map::new(env))
}

pub fn set_collateral(env: &Env, circle_id: u64, cells: &CollateralCells) {
    let key = DataKey::Collateral(circle_id);
    env.storage().persistent().set(&key, cells);
    extend_persistent_ttl(env, &key);
}

pub fn get_forfeits(env: &Env, circle_id: u64) -> ValueCell {
    read_cell(env, &DataKey::Forfeits(circle_id))
}

pub fn set_forfeits(env: &Env, circle_id: u64, cell: &ValueCell) {
    write_cell(env, &DataKey::Forfeits(circle_id), cell);
}

fn read_cell(env: &Env, key: &DataKey) -> ValueCell {
    read_persistent(env, key).unwrap_or_default()
}

fn write_cell(env: &Env, key: &DataKey, cell: &ValueCell) {
    env.storage().persistent().set(key, cell);
    extend_persistent_ttl(env, key);
}

// --- Cycle Capability ---

pub fn get_capability(env: &Env, circle_id: u64) -> Option<CycleCapability> {
    read_persistent(env, &DataKey::Capability(circle_id))
}

pub fn set_capability(env: &Env, capability: &CycleCapability) {
    let key = DataKey::Capability(capability.circle_id);
    env.storage().persistent().set(&key, capability);
    extend_persistent_ttl(env, &key);
}

// --- TTL Management ---

fn read_persistent<V>(env: &Env, key: &DataKey) -> Option<V>
where
    V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    let result = env.storage().persistent().get(key);
    if result.is_some() {
        extend_persistent_ttl(env, key);
    }
    result
}

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}
