use soroban_sdk::{contracttype, Address};

/// The one circle a gate may advance.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoundCircle {
    pub contract: Address,
    pub circle_id: u64,
}

/// What the scheduler learns from one firing.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TriggerReceipt {
    pub opaque_id: u64,
    pub circle_id: u64,
    /// The cycle that was just executed.
    pub cycle: u32,
    /// When to fire next; absent once the circle has completed.
    pub next_deadline: Option<u64>,
    pub fired_at: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    Scheduler,
    Circle,
    Capability,
    LastReceipt,
}
