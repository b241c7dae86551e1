use soroban_sdk::{log, symbol_short, Address, Env, Symbol};

use crate::circle_proxy::{CircleClient, CycleCapability};
use crate::errors::TriggerError;
use crate::storage;
use crate::types::{BoundCircle, TriggerReceipt};

const BOUND: Symbol = symbol_short!("bound");
const FIRED: Symbol = symbol_short!("fired");

pub fn setup(env: &Env, owner: Address, circle_contract: Address, circle_id: u64, scheduler: Address) {
    storage::set_owner(env, &owner);
    storage::set_scheduler(env, &scheduler);
    storage::set_circle(
        env,
        &BoundCircle {
            contract: circle_contract,
            circle_id,
        },
    );
}

/// Stores the capability issued to this gate. Accepted once, and only if it
/// names this gate and the circle fixed at construction.
pub fn bind(env: &Env, capability: CycleCapability) -> Result<(), TriggerError> {
    let owner = storage::get_owner(env).ok_or(TriggerError::Unauthorized)?;
    owner.require_auth();

    if storage::get_capability(env).is_some() {
        return Err(TriggerError::AlreadyBound);
    }

    let circle = storage::get_circle(env).ok_or(TriggerError::NotBound)?;
    if capability.holder != env.current_contract_address() || capability.circle_id != circle.circle_id {
        return Err(TriggerError::CapabilityMismatch);
    }

    storage::set_capability(env, &capability);

    env.events()
        .publish((BOUND, circle.circle_id), circle.contract);

    Ok(())
}

/// Advances the bound circle by one cycle on behalf of the scheduler.
///
/// `caller` must be the scheduler this gate was created for. The deadline is
/// the scheduler's responsibility and is not re-checked here.
pub fn trigger(env: &Env, caller: Address, opaque_id: u64) -> Result<TriggerReceipt, TriggerError> {
    caller.require_auth();

    let scheduler = storage::get_scheduler(env).ok_or(TriggerError::Unauthorized)?;
    if caller != scheduler {
        return Err(TriggerError::Unauthorized);
    }

    let capability = storage::get_capability(env).ok_or(TriggerError::NotBound)?;
    let circle = storage::get_circle(env).ok_or(TriggerError::NotBound)?;

    let report = match CircleClient::new(env, &circle.contract).try_advance_cycle(&capability) {
        Ok(Ok(report)) => report,
        _ => return Err(TriggerError::CircleRejected),
    };

    let receipt = TriggerReceipt {
        opaque_id,
        circle_id: report.circle_id,
        cycle: report.cycle,
        next_deadline: report.next_deadline,
        fired_at: env.ledger().timestamp(),
    };
    storage::set_last_receipt(env, &receipt);

    env.events().publish(
        (FIRED, receipt.circle_id),
        (opaque_id, receipt.cycle, receipt.next_deadline),
    );
    log!(env, "trigger fired", receipt.circle_id, receipt.cycle);

    Ok(receipt)
}
