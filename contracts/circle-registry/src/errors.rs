use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    CircleAlreadyRegistered = 1,
    CircleNotRegistered = 2,
    MemberAlreadyRegistered = 3,
    InvalidName = 4,
}
