use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env, String,
};

use crate::{CircleRegistryContract, CircleRegistryContractClient, RegistryError};

fn setup_env() -> (Env, CircleRegistryContractClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(42);

    let contract_id = env.register(CircleRegistryContract, ());
    let client = CircleRegistryContractClient::new(&env, &contract_id);

    (env, client)
}

#[test]
fn test_register_circle() {
    let (env, client) = setup_env();
    let host = Address::generate(&env);
    let name = String::from_str(&env, "Neighbourhood Circle");

    client.register_circle(&host, &1, &name);

    assert_eq!(client.get_circle_host(&1), Some(host.clone()));
    let entry = client.get_circle(&1).unwrap();
    assert_eq!(entry.name, name);
    assert_eq!(entry.host, host);
    assert_eq!(entry.registered_at, 42);
    assert_eq!(client.get_circle_count(), 1);
}

#[test]
fn test_unknown_circle_has_no_host() {
    let (_env, client) = setup_env();
    assert_eq!(client.get_circle_host(&9), None);
    assert_eq!(client.get_circle(&9), None);
    assert_eq!(client.get_circle_count(), 0);
    assert_eq!(client.get_all_circle_ids().len(), 0);
}

#[test]
fn test_register_circle_rejects_duplicates_and_empty_names() {
    let (env, client) = setup_env();
    let host = Address::generate(&env);
    let other_host = Address::generate(&env);

    client.register_circle(&host, &1, &String::from_str(&env, "First"));
    assert_eq!(
        client.try_register_circle(&other_host, &1, &String::from_str(&env, "Again")),
        Err(Ok(RegistryError::CircleAlreadyRegistered))
    );
    assert_eq!(
        client.try_register_circle(&host, &2, &String::from_str(&env, "")),
        Err(Ok(RegistryError::InvalidName))
    );

    assert_eq!(client.get_circle_host(&1), Some(host));
    assert_eq!(client.get_circle_count(), 1);
}

#[test]
fn test_all_circle_ids_in_registration_order() {
    let (env, client) = setup_env();
    let host = Address::generate(&env);

    for circle_id in [3u64, 1, 2] {
        client.register_circle(&host, &circle_id, &String::from_str(&env, "Circle"));
    }

    let ids = client.get_all_circle_ids();
    assert_eq!(ids.len(), 3);
    assert_eq!(ids.get(0).unwrap(), 3);
    assert_eq!(ids.get(1).unwrap(), 1);
    assert_eq!(ids.get(2).unwrap(), 2);
    assert_eq!(client.get_circle_count(), 3);
}

#[test]
fn test_member_circles() {
    let (env, client) = setup_env();
    let host = Address::generate(&env);
    let member = Address::generate(&env);

    client.register_circle(&host, &1, &String::from_str(&env, "One"));
    client.register_circle(&host, &2, &String::from_str(&env, "Two"));

    client.register_member(&member, &2);
    client.register_member(&member, &1);

    let circles = client.get_member_circles(&member);
    assert_eq!(circles.len(), 2);
    assert_eq!(circles.get(0).unwrap(), 2);
    assert_eq!(circles.get(1).unwrap(), 1);

    let stranger = Address::generate(&env);
    assert_eq!(client.get_member_circles(&stranger).len(), 0);
}

#[test]
fn test_register_member_errors() {
    let (env, client) = setup_env();
    let host = Address::generate(&env);
    let member = Address::generate(&env);

    assert_eq!(
        client.try_register_member(&member, &1),
        Err(Ok(RegistryError::CircleNotRegistered))
    );

    client.register_circle(&host, &1, &String::from_str(&env, "One"));
    client.register_member(&member, &1);
    assert_eq!(
        client.try_register_member(&member, &1),
        Err(Ok(RegistryError::MemberAlreadyRegistered))
    );
    assert_eq!(client.get_member_circles(&member).len(), 1);
}
