use soroban_sdk::{log, panic_with_error, Address, Env, Vec};

use crate::cell::{CollateralCells, Custody, Funds};
use crate::circle::{deadline_after, BPS_DENOMINATOR};
use crate::errors::CircleError;
use crate::events;
use crate::membership;
use crate::storage;
use crate::types::{AdvanceReport, Circle, CircleStatus, CycleCapability};

pub fn issue_cycle_capability(
    env: &Env,
    creator: Address,
    circle_id: u64,
    holder: Address,
) -> Result<CycleCapability, CircleError> {
    creator.require_auth();

    let circle = storage::load_circle(env, circle_id)?;

    if creator != circle.creator {
        return Err(CircleError::Unauthorized);
    }
    if !matches!(circle.status, CircleStatus::Forming | CircleStatus::Active) {
        return Err(CircleError::CircleClosed);
    }
    if storage::get_capability(env, circle_id).is_some() {
        return Err(CircleError::CapabilityAlreadyIssued);
    }

    let capability = CycleCapability {
        circle_id,
        holder: holder.clone(),
        issued_at: env.ledger().timestamp(),
    };
    storage::set_capability(env, &capability);

    events::capability_issued(env, circle_id, &holder);

    Ok(capability)
}

/// Runs one cycle boundary for the circle named by `capability`.
///
/// The capability must be the one issued for the circle and its holder must
/// authorize the call. Whether the deadline has passed is the holder's call;
/// it is not checked here.
pub fn advance_cycle(env: &Env, capability: CycleCapability) -> Result<AdvanceReport, CircleError> {
    capability.holder.require_auth();

    let issued = storage::get_capability(env, capability.circle_id)
        .ok_or(CircleError::InvalidCapability)?;
    if issued != capability {
        return Err(CircleError::InvalidCapability);
    }

    let mut circle = storage::load_circle(env, capability.circle_id)?;
    if circle.status != CircleStatus::Active {
        return Err(CircleError::CircleNotActive);
    }

    Ok(execute_cycle(env, &mut circle))
}

fn execute_cycle(env: &Env, circle: &mut Circle) -> AdvanceReport {
    let circle_id = circle.id;
    let cycle = circle.current_cycle;
    let rotation = circle.member_order.len();
    let recipient = current_recipient(env, &circle.member_order, cycle);

    let custody = Custody::new(env, &circle.config.token);
    let mut members = storage::get_members(env, circle_id);
    let mut collateral = storage::get_collateral(env, circle_id);
    let mut pool = storage::get_pool(env, circle_id);

    // Penalize first-time misses, moving part of their collateral into the pot.
    for member in membership::newly_delinquent(&members, &circle.member_order).iter() {
        let mut cell = collateral.get(member.clone()).unwrap_or_default();
        let forfeited = settled(
            env,
            cell.withdraw(penalty_for(cell.balance(), circle.config.penalty_bps)),
        );
        let penalty = forfeited.amount();
        pool.deposit(forfeited);
        collateral.set(member.clone(), cell);

        if let Some(record) = members.get(member.clone()) {
            members.set(member.clone(), record.mark_delinquent());
        }

        events::member_penalized(env, circle_id, &member, cycle, penalty);
        log!(env, "member penalized", circle_id, member, penalty);
    }

    let payout = custody.release(pool.withdraw_all(), &recipient, &mut circle.flows);
    if payout > 0 {
        events::payout_executed(env, circle_id, &recipient, cycle, payout);
    }
    log!(env, "cycle payout", circle_id, cycle, payout);

    membership::reset_all(&mut members, &circle.member_order);

    let next_deadline = if cycle >= rotation {
        circle.status = CircleStatus::Completed;
        forfeit_delinquent_collateral(env, circle, &members, &mut collateral);
        events::circle_completed(env, circle_id, cycle);
        log!(env, "circle completed", circle_id);
        None
    } else {
        circle.current_cycle += 1;
        circle.next_deadline = deadline_after(env, circle.config.cycle_duration);
        events::cycle_advanced(env, circle_id, circle.current_cycle, circle.next_deadline);
        Some(circle.next_deadline)
    };

    storage::set_pool(env, circle_id, &pool);
    storage::set_collateral(env, circle_id, &collateral);
    storage::set_members(env, circle_id, &members);
    storage::set_circle(env, circle);

    AdvanceReport {
        circle_id,
        cycle,
        completed: next_deadline.is_none(),
        next_deadline,
    }
}

/// Moves whatever delinquent members still hold into the forfeiture cell.
/// Members in good standing keep their cells until they claim them, so
/// completion costs no token transfers.
fn forfeit_delinquent_collateral(
    env: &Env,
    circle: &Circle,
    members: &membership::Members,
    collateral: &mut CollateralCells,
) {
    let circle_id = circle.id;
    let mut forfeits = storage::get_forfeits(env, circle_id);

    for member in circle.member_order.iter() {
        let delinquent = members
            .get(member.clone())
            .map(|record| record.is_delinquent)
            .unwrap_or(false);
        if !delinquent {
            continue;
        }

        let mut cell = collateral.get(member.clone()).unwrap_or_default();
        let remaining = cell.balance();
        forfeits.deposit(cell.withdraw_all());
        collateral.set(member.clone(), cell);
        if remaining > 0 {
            events::collateral_forfeited(env, circle_id, &member, remaining);
        }
    }

    storage::set_forfeits(env, circle_id, &forfeits);
}

fn current_recipient(env: &Env, order: &Vec<Address>, cycle: u32) -> Address {
    // `cycle` never exceeds the rotation length while active; the modulo
    // keeps the index in range regardless.
    let index = cycle.saturating_sub(1) % order.len();
    order
        .get(index)
        .unwrap_or_else(|| panic_with_error!(env, CircleError::CircleNotActive))
}

/// `balance * penalty_bps / 10_000`, rounded down. Split into quotient and
/// remainder so the product cannot overflow for any balance.
pub(crate) fn penalty_for(balance: i128, penalty_bps: u32) -> i128 {
    let bps = i128::from(penalty_bps);
    let denominator = i128::from(BPS_DENOMINATOR);
    let penalty = balance / denominator * bps + balance % denominator * bps / denominator;
    penalty.min(balance)
}

/// Cell withdrawals inside a cycle are sized from balances read in the same
/// call, so a shortfall means the bookkeeping is broken.
fn settled(env: &Env, withdrawal: Result<Funds, CircleError>) -> Funds {
    withdrawal.unwrap_or_else(|err| panic_with_error!(env, err))
}

pub fn get_payout_order(env: &Env, circle_id: u64) -> Result<Vec<Address>, CircleError> {
    let circle = storage::load_circle(env, circle_id)?;
    Ok(circle.member_order)
}

pub fn get_current_recipient(env: &Env, circle_id: u64) -> Result<Address, CircleError> {
    let circle = storage::load_circle(env, circle_id)?;

    if circle.status != CircleStatus::Active {
        return Err(CircleError::CircleNotActive);
    }

    Ok(current_recipient(env, &circle.member_order, circle.current_cycle))
}

pub fn get_capability(env: &Env, circle_id: u64) -> Option<CycleCapability> {
    storage::get_capability(env, circle_id)
}

#[cfg(test)]
mod tests {
    use super::penalty_for;

    #[test]
    fn penalty_is_a_share_of_remaining_collateral() {
        assert_eq!(penalty_for(10, 5_000), 5);
        assert_eq!(penalty_for(5, 5_000), 2);
        assert_eq!(penalty_for(1_000_000, 1_250), 125_000);
        assert_eq!(penalty_for(10, 0), 0);
        assert_eq!(penalty_for(10, 10_000), 10);
        assert_eq!(penalty_for(0, 10_000), 0);
        assert_eq!(penalty_for(12_345, 3_333), 12_345 * 3_333 / 10_000);
    }

    #[test]
    fn penalty_never_overflows() {
        assert_eq!(penalty_for(i128::MAX, 10_000), i128::MAX);
        assert_eq!(penalty_for(i128::MAX, 5_000), i128::MAX / 2);
        assert_eq!(penalty_for(i128::MAX, 0), 0);

        let large = 40_000_000_000_000_000_000_000_000_000_000_000i128;
        assert_eq!(penalty_for(large, 2_500), large / 4);
    }
}
