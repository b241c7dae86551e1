use soroban_sdk::{contracttype, Address, String, Vec};

/// Lifecycle of a circle. Transitions only move forward:
/// Forming -> Active -> Completed, or Forming/Active -> Cancelled.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CircleStatus {
    Forming,   // Accepting members until max_members have joined
    Active,    // Cycles in progress
    Completed, // Every member has received the pot once
    Cancelled, // Stopped by the creator or protocol admin
}

/// Parameters fixed when a circle is created.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CircleConfig {
    /// Display name, must not be empty.
    pub name: String,
    /// Settlement token for deposits, contributions and payouts.
    pub token: Address,
    /// Amount each member pays in per cycle, in token base units.
    pub contribution_amount: i128,
    /// Seconds between cycle deadlines.
    pub cycle_duration: u64,
    /// Number of members that seals the circle (2..=20).
    pub max_members: u32,
    /// Share of a delinquent member's remaining collateral moved to the pool,
    /// in basis points (0..=10_000).
    pub penalty_bps: u32,
}

/// Value that entered and left custody over the circle's lifetime.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Flows {
    /// Sum of every deposit and contribution pulled from members.
    pub collected: i128,
    /// Sum of every payout, collateral refund and forfeiture sweep.
    pub released: i128,
}

/// Core circle record. Member records and value cells are stored under
/// their own keys; see `DataKey`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Circle {
    pub id: u64,
    pub creator: Address,
    pub config: CircleConfig,
    pub status: CircleStatus,
    /// 1-indexed while active, 0 while forming.
    pub current_cycle: u32,
    /// Join order, which is also rotation and payout order. Append-only.
    pub member_order: Vec<Address>,
    /// Only meaningful while the circle is active.
    pub next_deadline: u64,
    /// Opaque pointer to the newest off-chain receipt.
    pub latest_receipt: Option<String>,
    pub created_at: u64,
    pub flows: Flows,
}

/// Per-member bookkeeping. Updated by replacing the whole record.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MemberRecord {
    pub address: Address,
    pub rotation_position: u32,
    pub has_contributed_this_cycle: bool,
    pub total_contributed: i128,
    pub cycles_contributed: u32,
    /// Once set, stays set for the rest of the circle's life.
    pub is_delinquent: bool,
    pub joined_at: u64,
}

/// Authority to advance one circle's cycles, issued once to the gate that
/// holds it. Only usable together with `holder`'s authorization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CycleCapability {
    pub circle_id: u64,
    pub holder: Address,
    pub issued_at: u64,
}

/// Outcome of one `advance_cycle` call.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdvanceReport {
    pub circle_id: u64,
    /// The cycle that was just executed.
    pub cycle: u32,
    pub completed: bool,
    /// Deadline of the next cycle, absent once the circle has completed.
    pub next_deadline: Option<u64>,
}

/// Storage keys for all contract data.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    CircleCounter,
    Circle(u64),
    Members(u64),
    Pool(u64),
    Collateral(u64),
    Forfeits(u64),
    Capability(u64),
}
