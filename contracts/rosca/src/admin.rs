use soroban_sdk::{Address, Env, String};

use crate::cell::Custody;
use crate::errors::CircleError;
use crate::events;
use crate::storage;
use crate::types::CircleStatus;

/// Stops a forming or active circle. Pool and collateral stay in their
/// cells; nothing moves value out of a cancelled circle.
pub fn cancel_circle(env: &Env, caller: Address, circle_id: u64) -> Result<(), CircleError> {
    caller.require_auth();

    let mut circle = storage::load_circle(env, circle_id)?;

    if caller != circle.creator && caller != storage::get_admin(env)? {
        return Err(CircleError::Unauthorized);
    }

    if !matches!(circle.status, CircleStatus::Forming | CircleStatus::Active) {
        return Err(CircleError::CircleClosed);
    }

    circle.status = CircleStatus::Cancelled;
    storage::set_circle(env, &circle);

    events::circle_cancelled(env, circle_id, &caller);

    Ok(())
}

/// Overwrites the pointer to the newest off-chain receipt. The pointer is
/// opaque here: its content and chain linkage are not checked.
pub fn store_receipt_pointer(
    env: &Env,
    caller: Address,
    circle_id: u64,
    pointer: String,
) -> Result<(), CircleError> {
    caller.require_auth();

    let mut circle = storage::load_circle(env, circle_id)?;

    if caller != circle.creator {
        return Err(CircleError::Unauthorized);
    }

    circle.latest_receipt = Some(pointer.clone());
    storage::set_circle(env, &circle);

    events::receipt_stored(env, circle_id, &pointer);

    Ok(())
}

/// Releases collateral forfeited by delinquent members of a completed circle.
/// Protocol admin only.
pub fn sweep_forfeits(
    env: &Env,
    admin: Address,
    circle_id: u64,
    to: Address,
) -> Result<i128, CircleError> {
    admin.require_auth();

    if admin != storage::get_admin(env)? {
        return Err(CircleError::Unauthorized);
    }

    let mut circle = storage::load_circle(env, circle_id)?;

    // Only completion fills the forfeiture cell.
    let mut forfeits = storage::get_forfeits(env, circle_id);
    if forfeits.is_empty() {
        return Err(CircleError::NothingToSweep);
    }

    let custody = Custody::new(env, &circle.config.token);
    let amount = custody.release(forfeits.withdraw_all(), &to, &mut circle.flows);

    storage::set_forfeits(env, circle_id, &forfeits);
    storage::set_circle(env, &circle);

    events::forfeits_swept(env, circle_id, &to, amount);

    Ok(amount)
}
