//! Event stream for observers (indexers, UIs, the receipt archive writer).
//! Every topic is `(name, circle_id)`.

use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

const CREATED: Symbol = symbol_short!("created");
const JOINED: Symbol = symbol_short!("joined");
const SEALED: Symbol = symbol_short!("sealed");
const CONTRIBUTED: Symbol = symbol_short!("contrib");
const PENALIZED: Symbol = symbol_short!("penalized");
const PAYOUT: Symbol = symbol_short!("payout");
const CYCLE_ADVANCED: Symbol = symbol_short!("cycle_adv");
const COMPLETED: Symbol = symbol_short!("completed");
const REFUNDED: Symbol = symbol_short!("refund");
const FORFEITED: Symbol = symbol_short!("forfeited");
const RECEIPT: Symbol = symbol_short!("receipt");
const CANCELLED: Symbol = symbol_short!("cancelled");
const CAPABILITY_ISSUED: Symbol = symbol_short!("cap_issue");
const SWEPT: Symbol = symbol_short!("swept");

pub fn circle_created(env: &Env, circle_id: u64, creator: &Address, name: &String) {
    env.events().publish(
        (CREATED, circle_id),
        (creator.clone(), name.clone(), env.ledger().timestamp()),
    );
}

pub fn member_joined(env: &Env, circle_id: u64, member: &Address, position: u32, deposit: i128) {
    env.events()
        .publish((JOINED, circle_id), (member.clone(), position, deposit));
}

pub fn circle_sealed(env: &Env, circle_id: u64, members: u32, deadline: u64) {
    env.events()
        .publish((SEALED, circle_id), (members, deadline));
}

pub fn contribution_received(env: &Env, circle_id: u64, member: &Address, cycle: u32, amount: i128) {
    env.events()
        .publish((CONTRIBUTED, circle_id), (member.clone(), cycle, amount));
}

pub fn member_penalized(env: &Env, circle_id: u64, member: &Address, cycle: u32, amount: i128) {
    env.events()
        .publish((PENALIZED, circle_id), (member.clone(), cycle, amount));
}

pub fn payout_executed(env: &Env, circle_id: u64, recipient: &Address, cycle: u32, amount: i128) {
    env.events().publish(
        (PAYOUT, circle_id),
        (recipient.clone(), cycle, amount, env.ledger().timestamp()),
    );
}

pub fn cycle_advanced(env: &Env, circle_id: u64, cycle: u32, deadline: u64) {
    env.events()
        .publish((CYCLE_ADVANCED, circle_id), (cycle, deadline));
}

pub fn circle_completed(env: &Env, circle_id: u64, cycles: u32) {
    env.events().publish(
        (COMPLETED, circle_id),
        (cycles, env.ledger().timestamp()),
    );
}

pub fn collateral_refunded(env: &Env, circle_id: u64, member: &Address, amount: i128) {
    env.events()
        .publish((REFUNDED, circle_id), (member.clone(), amount));
}

pub fn collateral_forfeited(env: &Env, circle_id: u64, member: &Address, amount: i128) {
    env.events()
        .publish((FORFEITED, circle_id), (member.clone(), amount));
}

pub fn receipt_stored(env: &Env, circle_id: u64, pointer: &String) {
    env.events().publish((RECEIPT, circle_id), pointer.clone());
}

pub fn circle_cancelled(env: &Env, circle_id: u64, by: &Address) {
    env.events().publish(
        (CANCELLED, circle_id),
        (by.clone(), env.ledger().timestamp()),
    );
}

pub fn capability_issued(env: &Env, circle_id: u64, holder: &Address) {
    env.events()
        .publish((CAPABILITY_ISSUED, circle_id), holder.clone());
}

pub fn forfeits_swept(env: &Env, circle_id: u64, to: &Address, amount: i128) {
    env.events()
        .publish((SWEPT, circle_id), (to.clone(), amount));
}
