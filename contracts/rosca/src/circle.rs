use soroban_sdk::{log, Address, Env, Vec};

use crate::cell::{Custody, ValueCell};
use crate::errors::CircleError;
use crate::events;
use crate::membership::{self, Members};
use crate::storage;
use crate::types::{Circle, CircleConfig, CircleStatus, Flows, MemberRecord};

pub const MIN_MEMBERS: u32 = 2;
pub const MAX_MEMBERS: u32 = 20;
pub const BPS_DENOMINATOR: u32 = 10_000;

pub fn validate_config(config: &CircleConfig) -> Result<(), CircleError> {
    if config.name.len() == 0 {
        return Err(CircleError::InvalidName);
    }
    if config.contribution_amount <= 0 {
        return Err(CircleError::InvalidContributionAmount);
    }
    if config.cycle_duration == 0 {
        return Err(CircleError::InvalidCycleDuration);
    }
    if config.max_members < MIN_MEMBERS || config.max_members > MAX_MEMBERS {
        return Err(CircleError::InvalidMemberCount);
    }
    if config.penalty_bps > BPS_DENOMINATOR {
        return Err(CircleError::InvalidPenalty);
    }
    Ok(())
}

pub fn create_circle(
    env: &Env,
    creator: Address,
    config: CircleConfig,
) -> Result<u64, CircleError> {
    creator.require_auth();
    validate_config(&config)?;

    let circle_id = storage::get_circle_counter(env) + 1;
    storage::set_circle_counter(env, circle_id);

    let circle = Circle {
        id: circle_id,
        creator: creator.clone(),
        config,
        status: CircleStatus::Forming,
        current_cycle: 0,
        member_order: Vec::new(env),
        next_deadline: 0,
        latest_receipt: None,
        created_at: env.ledger().timestamp(),
        flows: Flows::default(),
    };

    storage::set_circle(env, &circle);
    storage::set_members(env, circle_id, &Members::new(env));
    storage::set_pool(env, circle_id, &ValueCell::new());

    events::circle_created(env, circle_id, &creator, &circle.config.name);
    log!(env, "circle created", circle_id, circle.config.max_members);

    Ok(circle_id)
}

pub fn join_circle(
    env: &Env,
    member: Address,
    circle_id: u64,
    deposit: i128,
) -> Result<(), CircleError> {
    member.require_auth();

    let mut circle = storage::load_circle(env, circle_id)?;
    let mut members = storage::get_members(env, circle_id);

    if circle.status != CircleStatus::Forming {
        return Err(CircleError::NotAcceptingMembers);
    }
    if membership::is_member(&members, &member) {
        return Err(CircleError::AlreadyMember);
    }
    if circle.member_order.len() >= circle.config.max_members {
        return Err(CircleError::CircleFull);
    }
    if deposit < circle.config.contribution_amount {
        return Err(CircleError::InsufficientDeposit);
    }

    let custody = Custody::new(env, &circle.config.token);
    let mut collateral = storage::get_collateral(env, circle_id);
    let mut cell = collateral.get(member.clone()).unwrap_or_default();
    cell.deposit(custody.collect(&member, deposit, &mut circle.flows));
    collateral.set(member.clone(), cell);
    storage::set_collateral(env, circle_id, &collateral);

    let position = circle.member_order.len();
    members.set(
        member.clone(),
        MemberRecord::enroll(member.clone(), position, env.ledger().timestamp()),
    );
    circle.member_order.push_back(member.clone());

    events::member_joined(env, circle_id, &member, position, deposit);

    if circle.member_order.len() == circle.config.max_members {
        seal(env, &mut circle);
    }

    storage::set_members(env, circle_id, &members);
    storage::set_circle(env, &circle);

    Ok(())
}

/// Starts the first cycle. Only reached from the join that fills the circle.
fn seal(env: &Env, circle: &mut Circle) {
    circle.status = CircleStatus::Active;
    circle.current_cycle = 1;
    circle.next_deadline = deadline_after(env, circle.config.cycle_duration);

    events::circle_sealed(env, circle.id, circle.member_order.len(), circle.next_deadline);
    log!(env, "circle sealed", circle.id, circle.next_deadline);
}

/// Deadline `duration` seconds from now. Saturates, so a very long cycle
/// means a deadline that never arrives rather than a failed call.
pub(crate) fn deadline_after(env: &Env, duration: u64) -> u64 {
    env.ledger().timestamp().saturating_add(duration)
}

/// Pays a member in good standing their collateral back once the circle
/// has completed. Delinquent members' collateral belongs to the forfeiture
/// cell.
pub fn claim_collateral(env: &Env, member: Address, circle_id: u64) -> Result<i128, CircleError> {
    member.require_auth();

    let mut circle = storage::load_circle(env, circle_id)?;
    if circle.status != CircleStatus::Completed {
        return Err(CircleError::CircleNotCompleted);
    }

    let record = storage::get_members(env, circle_id)
        .get(member.clone())
        .ok_or(CircleError::NotAMember)?;
    if record.is_delinquent {
        return Err(CircleError::CollateralForfeited);
    }

    let mut collateral = storage::get_collateral(env, circle_id);
    let mut cell = collateral.get(member.clone()).unwrap_or_default();
    if cell.is_empty() {
        return Err(CircleError::NothingToClaim);
    }

    let custody = Custody::new(env, &circle.config.token);
    let refunded = custody.release(cell.withdraw_all(), &member, &mut circle.flows);
    collateral.set(member.clone(), cell);

    storage::set_collateral(env, circle_id, &collateral);
    storage::set_circle(env, &circle);

    events::collateral_refunded(env, circle_id, &member, refunded);

    Ok(refunded)
}

pub fn get_circle(env: &Env, circle_id: u64) -> Result<Circle, CircleError> {
    storage::load_circle(env, circle_id)
}

pub fn get_member(env: &Env, circle_id: u64, member: Address) -> Result<MemberRecord, CircleError> {
    storage::load_circle(env, circle_id)?;
    storage::get_members(env, circle_id)
        .get(member)
        .ok_or(CircleError::NotAMember)
}

pub fn get_members(env: &Env, circle_id: u64) -> Result<Vec<MemberRecord>, CircleError> {
    let circle = storage::load_circle(env, circle_id)?;
    let members = storage::get_members(env, circle_id);
    Ok(membership::in_rotation_order(&members, &circle.member_order))
}

pub fn all_contributed(env: &Env, circle_id: u64) -> Result<bool, CircleError> {
    let circle = storage::load_circle(env, circle_id)?;
    let members = storage::get_members(env, circle_id);
    Ok(membership::all_contributed(&members, &circle.member_order))
}

pub fn pool_balance(env: &Env, circle_id: u64) -> Result<i128, CircleError> {
    storage::load_circle(env, circle_id)?;
    Ok(storage::get_pool(env, circle_id).balance())
}

pub fn collateral_balance(env: &Env, circle_id: u64, member: Address) -> Result<i128, CircleError> {
    storage::load_circle(env, circle_id)?;
    Ok(storage::get_collateral(env, circle_id)
        .get(member)
        .map(|cell| cell.balance())
        .unwrap_or(0))
}

pub fn forfeited_balance(env: &Env, circle_id: u64) -> Result<i128, CircleError> {
    storage::load_circle(env, circle_id)?;
    Ok(storage::get_forfeits(env, circle_id).balance())
}
