use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CircleError {
    NotInitialized = 1,
    Unauthorized = 2,
    CircleNotFound = 3,

    // Config validation, one code per constraint.
    InvalidName = 4,
    InvalidContributionAmount = 5,
    InvalidCycleDuration = 6,
    InvalidMemberCount = 7,
    InvalidPenalty = 8,

    NotAcceptingMembers = 9,
    AlreadyMember = 10,
    CircleFull = 11,
    InsufficientDeposit = 12,
    CircleNotActive = 13,
    NotAMember = 14,
    AlreadyContributed = 15,
    InsufficientContribution = 16,
    CircleClosed = 17,

    CapabilityAlreadyIssued = 18,
    InvalidCapability = 19,

    /// A cell was asked for more than it holds. Never returned to callers;
    /// raised through `panic_with_error!` because it means the bookkeeping is broken.
    InsufficientFunds = 20,
    NothingToSweep = 21,
    CircleNotCompleted = 22,
    CollateralForfeited = 23,
    NothingToClaim = 24,
}

impl CircleError {
    /// True for the codes `create_circle` uses to reject a `CircleConfig`.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CircleError::InvalidName
                | CircleError::InvalidContributionAmount
                | CircleError::InvalidCycleDuration
                | CircleError::InvalidMemberCount
                | CircleError::InvalidPenalty
        )
    }
}
