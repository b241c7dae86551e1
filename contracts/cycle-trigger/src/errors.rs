use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TriggerError {
    NotBound = 1,
    AlreadyBound = 2,
    /// The capability names a different holder or circle than this gate.
    CapabilityMismatch = 3,
    /// Caller is not the scheduler (or owner) this gate was set up with.
    Unauthorized = 4,
    /// The circle refused to advance, e.g. because it is no longer active.
    CircleRejected = 5,
}
