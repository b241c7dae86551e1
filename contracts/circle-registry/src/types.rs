use soroban_sdk::{contracttype, Address, String};

/// Discovery entry for one circle.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CircleEntry {
    pub circle_id: u64,
    pub name: String,
    /// Account (usually the circle contract) that hosts the circle.
    pub host: Address,
    pub registered_at: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    CircleIds,
    Circle(u64),
    MemberCircles(Address),
}
