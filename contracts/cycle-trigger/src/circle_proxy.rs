//! Typed client for the circle contract's cycle entry point.
//!
//! The types mirror the circle contract's `CycleCapability` and
//! `AdvanceReport` field for field; values cross the contract boundary by
//! field name.

use soroban_sdk::{contractclient, contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CycleCapability {
    pub circle_id: u64,
    pub holder: Address,
    pub issued_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdvanceReport {
    pub circle_id: u64,
    pub cycle: u32,
    pub completed: bool,
    pub next_deadline: Option<u64>,
}

#[allow(dead_code)]
#[contractclient(name = "CircleClient")]
pub trait CircleInterface {
    fn advance_cycle(env: Env, capability: CycleCapability) -> AdvanceReport;
}
