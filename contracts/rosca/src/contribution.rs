use soroban_sdk::{Address, Env};

use crate::cell::Custody;
use crate::errors::CircleError;
use crate::events;
use crate::membership;
use crate::storage;
use crate::types::CircleStatus;

pub fn contribute(
    env: &Env,
    member: Address,
    circle_id: u64,
    amount: i128,
) -> Result<(), CircleError> {
    member.require_auth();

    let mut circle = storage::load_circle(env, circle_id)?;

    if circle.status != CircleStatus::Active {
        return Err(CircleError::CircleNotActive);
    }

    let mut members = storage::get_members(env, circle_id);
    let record = members
        .get(member.clone())
        .ok_or(CircleError::NotAMember)?;

    if record.has_contributed_this_cycle {
        return Err(CircleError::AlreadyContributed);
    }
    if amount < circle.config.contribution_amount {
        return Err(CircleError::InsufficientContribution);
    }

    let custody = Custody::new(env, &circle.config.token);
    let mut pool = storage::get_pool(env, circle_id);
    pool.deposit(custody.collect(&member, amount, &mut circle.flows));

    members.set(member.clone(), record.record_contribution(amount));

    storage::set_pool(env, circle_id, &pool);
    storage::set_members(env, circle_id, &members);
    storage::set_circle(env, &circle);

    events::contribution_received(env, circle_id, &member, circle.current_cycle, amount);

    Ok(())
}

pub fn has_contributed(env: &Env, member: Address, circle_id: u64) -> Result<bool, CircleError> {
    storage::load_circle(env, circle_id)?;
    let members = storage::get_members(env, circle_id);
    if !membership::is_member(&members, &member) {
        return Err(CircleError::NotAMember);
    }
    Ok(membership::has_contributed(&members, &member))
}
