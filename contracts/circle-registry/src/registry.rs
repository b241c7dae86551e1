use soroban_sdk::{symbol_short, Address, Env, String, Symbol, Vec};

use crate::errors::RegistryError;
use crate::storage;
use crate::types::CircleEntry;

const CIRCLE_REGISTERED: Symbol = symbol_short!("reg_circ");
const MEMBER_REGISTERED: Symbol = symbol_short!("reg_memb");

pub fn register_circle(
    env: &Env,
    host: Address,
    circle_id: u64,
    name: String,
) -> Result<(), RegistryError> {
    host.require_auth();

    if name.len() == 0 {
        return Err(RegistryError::InvalidName);
    }
    if storage::has_circle(env, circle_id) {
        return Err(RegistryError::CircleAlreadyRegistered);
    }

    let entry = CircleEntry {
        circle_id,
        name,
        host: host.clone(),
        registered_at: env.ledger().timestamp(),
    };
    storage::set_circle(env, &entry);
    storage::add_circle_id(env, circle_id);

    env.events()
        .publish((CIRCLE_REGISTERED, circle_id), host);

    Ok(())
}

pub fn register_member(env: &Env, member: Address, circle_id: u64) -> Result<(), RegistryError> {
    member.require_auth();

    if !storage::has_circle(env, circle_id) {
        return Err(RegistryError::CircleNotRegistered);
    }

    for existing in storage::get_member_circles(env, &member).iter() {
        if existing == circle_id {
            return Err(RegistryError::MemberAlreadyRegistered);
        }
    }

    storage::add_member_circle(env, &member, circle_id);

    env.events()
        .publish((MEMBER_REGISTERED, circle_id), member);

    Ok(())
}

pub fn get_circle_host(env: &Env, circle_id: u64) -> Option<Address> {
    storage::get_circle(env, circle_id).map(|entry| entry.host)
}

pub fn get_circle_count(env: &Env) -> u32 {
    storage::get_circle_ids(env).len()
}

pub fn get_all_circle_ids(env: &Env) -> Vec<u64> {
    storage::get_circle_ids(env)
}
