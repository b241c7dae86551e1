use soroban_sdk::{Address, Env, Vec};

use crate::types::{CircleEntry, DataKey};

const PERSISTENT_TTL_THRESHOLD: u32 = 100;
const PERSISTENT_TTL_EXTEND: u32 = 1000;

// --- Circles ---

pub fn get_circle(env: &Env, circle_id: u64) -> Option<CircleEntry> {
    let key = DataKey::Circle(circle_id);
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_persistent_ttl(env, &key);
    }
    result
}

pub fn has_circle(env: &Env, circle_id: u64) -> bool {
    env.storage().persistent().has(&DataKey::Circle(circle_id))
}

pub fn set_circle(env: &Env, entry: &CircleEntry) {
    let key = DataKey::Circle(entry.circle_id);
    env.storage().persistent().set(&key, entry);
    extend_persistent_ttl(env, &key);
}

pub fn get_circle_ids(env: &Env) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::CircleIds)
        .unwrap_or(Vec::new(env))
}

pub fn add_circle_id(env: &Env, circle_id: u64) {
    let key = DataKey::CircleIds;
    let mut ids = get_circle_ids(env);
    ids.push_back(circle_id);
    env.storage().persistent().set(&key, &ids);
    extend_persistent_ttl(env, &key);
}

// --- Member Circles ---

pub fn get_member_circles(env: &Env, member: &Address) -> Vec<u64> {
    let key = DataKey::MemberCircles(member.clone());
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or(Vec::new(env))
}

pub fn add_member_circle(env: &Env, member: &Address, circle_id: u64) {
    let key = DataKey::MemberCircles(member.clone());
    let mut circles = get_member_circles(env, member);
    circles.push_back(circle_id);
    env.storage().persistent().set(&key, &circles);
    extend_persistent_ttl(env, &key);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}
