use rosca_circle::{CircleConfig, CircleStatus, RoscaContract, RoscaContractClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token::StellarAssetClient,
    Address, Bytes, Env, String,
};

use crate::circle_proxy::CycleCapability;
use crate::{CycleTriggerContract, CycleTriggerContractClient, TriggerError};

const START: u64 = 5_000;
const CYCLE: u64 = 60;

struct Fixture {
    env: Env,
    circle: RoscaContractClient<'static>,
    gate: CycleTriggerContractClient<'static>,
    circle_id: u64,
    creator: Address,
    owner: Address,
    scheduler: Address,
    alice: Address,
}

/// A sealed two-member circle and an unbound gate for it.
fn setup() -> Fixture {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(START);

    let protocol_admin = Address::generate(&env);
    let circle_contract = env.register(RoscaContract, (&protocol_admin,));
    let circle = RoscaContractClient::new(&env, &circle_contract);

    let token_admin = Address::generate(&env);
    let token = env.register_stellar_asset_contract_v2(token_admin).address();
    let minter = StellarAssetClient::new(&env, &token);

    let creator = Address::generate(&env);
    let circle_id = circle.create_circle(
        &creator,
        &CircleConfig {
            name: String::from_str(&env, "Gate Circle"),
            token: token.clone(),
            contribution_amount: 10,
            cycle_duration: CYCLE,
            max_members: 2,
            penalty_bps: 5_000,
        },
    );

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    minter.mint(&alice, &100);
    minter.mint(&bob, &100);
    circle.join_circle(&alice, &circle_id, &10);
    circle.join_circle(&bob, &circle_id, &10);

    let owner = Address::generate(&env);
    let scheduler = Address::generate(&env);
    let gate_id = env.register(
        CycleTriggerContract,
        (&owner, &circle_contract, &circle_id, &scheduler),
    );
    let gate = CycleTriggerContractClient::new(&env, &gate_id);

    Fixture {
        env,
        circle,
        gate,
        circle_id,
        creator,
        owner,
        scheduler,
        alice,
    }
}

/// Issues the circle's capability to the gate and binds it.
fn bind_gate(f: &Fixture) -> CycleCapability {
    let issued = f
        .circle
        .issue_cycle_capability(&f.creator, &f.circle_id, &f.gate.address);
    let capability = CycleCapability {
        circle_id: issued.circle_id,
        holder: issued.holder,
        issued_at: issued.issued_at,
    };
    f.gate.bind(&capability);
    capability
}

fn payload(env: &Env) -> Bytes {
    Bytes::from_slice(env, b"scheduled-tx")
}

#[test]
fn test_trigger_advances_bound_circle() {
    let f = setup();
    bind_gate(&f);
    assert!(f.gate.is_bound());

    f.circle.contribute(&f.alice, &f.circle_id, &10);
    f.env.ledger().set_timestamp(START + CYCLE);

    let receipt = f.gate.trigger(&f.scheduler, &7, &payload(&f.env));
    assert_eq!(receipt.opaque_id, 7);
    assert_eq!(receipt.circle_id, f.circle_id);
    assert_eq!(receipt.cycle, 1);
    assert_eq!(receipt.fired_at, START + CYCLE);
    assert_eq!(receipt.next_deadline, Some(START + 2 * CYCLE));
    assert_eq!(f.gate.last_receipt(), Some(receipt));

    let state = f.circle.get_circle(&f.circle_id);
    assert_eq!(state.current_cycle, 2);
    assert_eq!(state.next_deadline, START + 2 * CYCLE);
}

#[test]
fn test_trigger_ignores_opaque_data() {
    let f = setup();
    bind_gate(&f);

    let empty = Bytes::new(&f.env);
    let receipt = f.gate.trigger(&f.scheduler, &1, &empty);
    assert_eq!(receipt.cycle, 1);

    let receipt = f.gate.trigger(&f.scheduler, &2, &payload(&f.env));
    assert_eq!(receipt.cycle, 2);
}

#[test]
fn test_trigger_rejects_other_callers() {
    let f = setup();
    bind_gate(&f);

    let stranger = Address::generate(&f.env);
    for caller in [&stranger, &f.owner, &f.creator] {
        assert_eq!(
            f.gate.try_trigger(caller, &1, &payload(&f.env)),
            Err(Ok(TriggerError::Unauthorized))
        );
    }

    assert_eq!(f.circle.get_circle(&f.circle_id).current_cycle, 1);
    assert_eq!(f.gate.last_receipt(), None);
}

#[test]
fn test_trigger_requires_binding() {
    let f = setup();
    assert!(!f.gate.is_bound());

    assert_eq!(
        f.gate.try_trigger(&f.scheduler, &1, &payload(&f.env)),
        Err(Ok(TriggerError::NotBound))
    );
    assert_eq!(f.circle.get_circle(&f.circle_id).current_cycle, 1);
}

#[test]
fn test_bind_only_once() {
    let f = setup();
    let capability = bind_gate(&f);

    assert_eq!(
        f.gate.try_bind(&capability),
        Err(Ok(TriggerError::AlreadyBound))
    );
}

#[test]
fn test_bind_rejects_foreign_capability() {
    let f = setup();

    let someone_else = CycleCapability {
        circle_id: f.circle_id,
        holder: Address::generate(&f.env),
        issued_at: START,
    };
    assert_eq!(
        f.gate.try_bind(&someone_else),
        Err(Ok(TriggerError::CapabilityMismatch))
    );

    let other_circle = CycleCapability {
        circle_id: f.circle_id + 1,
        holder: f.gate.address.clone(),
        issued_at: START,
    };
    assert_eq!(
        f.gate.try_bind(&other_circle),
        Err(Ok(TriggerError::CapabilityMismatch))
    );
    assert!(!f.gate.is_bound());
}

#[test]
fn test_second_gate_cannot_reuse_capability() {
    let f = setup();
    let capability = bind_gate(&f);

    let rogue_id = f.env.register(
        CycleTriggerContract,
        (&f.owner, &f.circle.address, &f.circle_id, &f.scheduler),
    );
    let rogue = CycleTriggerContractClient::new(&f.env, &rogue_id);

    assert_eq!(
        rogue.try_bind(&capability),
        Err(Ok(TriggerError::CapabilityMismatch))
    );
    assert_eq!(
        rogue.try_trigger(&f.scheduler, &1, &payload(&f.env)),
        Err(Ok(TriggerError::NotBound))
    );
}

#[test]
fn test_final_trigger_reports_completion() {
    let f = setup();
    bind_gate(&f);

    let first = f.gate.trigger(&f.scheduler, &1, &payload(&f.env));
    assert_eq!(first.cycle, 1);

    f.env.ledger().set_timestamp(START + 2 * CYCLE);
    let last = f.gate.trigger(&f.scheduler, &2, &payload(&f.env));
    assert_eq!(last.cycle, 2);
    assert_eq!(last.next_deadline, None);
    assert_eq!(
        f.circle.get_circle(&f.circle_id).status,
        CircleStatus::Completed
    );

    // Nothing left to advance; the previous receipt stays in place
    assert_eq!(
        f.gate.try_trigger(&f.scheduler, &3, &payload(&f.env)),
        Err(Ok(TriggerError::CircleRejected))
    );
    assert_eq!(f.gate.last_receipt(), Some(last));
}

#[test]
fn test_gate_exposes_its_binding() {
    let f = setup();

    assert_eq!(f.gate.scheduler(), Some(f.scheduler.clone()));
    let bound = f.gate.bound_circle().unwrap();
    assert_eq!(bound.contract, f.circle.address);
    assert_eq!(bound.circle_id, f.circle_id);
}
