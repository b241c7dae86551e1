//! Value cells and the custody primitives every money movement is built from.
//!
//! A `ValueCell` is a persisted balance. Taking value out of a cell yields a
//! `Funds` unit, which has to end up either in another cell (`deposit`) or
//! with an external recipient (`Custody::release`). `Funds` cannot be cloned,
//! and dropping one that still carries value aborts the invocation, which
//! rolls back everything the call did.

use soroban_sdk::{contracttype, token, Address, Env, Map};

use crate::errors::CircleError;
use crate::types::Flows;

/// A balance owned by exactly one circle slot (pool, one member's
/// collateral, or forfeits). Not `Clone`: a copy could be drawn down twice.
#[contracttype]
#[derive(Debug, Default, Eq, PartialEq)]
pub struct ValueCell {
    balance: i128,
}

/// Collateral cells of one circle, keyed by member.
pub type CollateralCells = Map<Address, ValueCell>;

impl ValueCell {
    pub fn new() -> Self {
        Self { balance: 0 }
    }

    pub fn balance(&self) -> i128 {
        self.balance
    }

    pub fn is_empty(&self) -> bool {
        self.balance == 0
    }

    pub fn deposit(&mut self, funds: Funds) {
        self.balance += funds.into_amount();
    }

    pub fn withdraw(&mut self, amount: i128) -> Result<Funds, CircleError> {
        if amount < 0 || amount > self.balance {
            return Err(CircleError::InsufficientFunds);
        }
        self.balance -= amount;
        Ok(Funds { amount })
    }

    pub fn withdraw_all(&mut self) -> Funds {
        let amount = self.balance;
        self.balance = 0;
        Funds { amount }
    }
}

/// Value in transit between two cells, or between a cell and the outside.
#[must_use = "funds must be deposited into a cell or released to an address"]
#[derive(Debug)]
pub struct Funds {
    amount: i128,
}

impl Funds {
    pub fn amount(&self) -> i128 {
        self.amount
    }

    fn into_amount(mut self) -> i128 {
        let amount = self.amount;
        self.amount = 0;
        amount
    }
}

impl Drop for Funds {
    fn drop(&mut self) {
        if self.amount != 0 {
            panic!("funds dropped without being settled");
        }
    }
}

/// Moves a circle's settlement token across the contract boundary.
pub struct Custody<'a> {
    env: &'a Env,
    token: token::Client<'a>,
}

impl<'a> Custody<'a> {
    pub fn new(env: &'a Env, token: &Address) -> Self {
        Self {
            env,
            token: token::Client::new(env, token),
        }
    }

    /// Pulls `amount` from `from` into the contract. `from` must have
    /// authorized the call.
    pub fn collect(&self, from: &Address, amount: i128, flows: &mut Flows) -> Funds {
        self.token
            .transfer(from, &self.env.current_contract_address(), &amount);
        flows.collected += amount;
        Funds { amount }
    }

    /// Hands `funds` to `to`. An empty unit is settled without a token call.
    pub fn release(&self, funds: Funds, to: &Address, flows: &mut Flows) -> i128 {
        let amount = funds.into_amount();
        if amount > 0 {
            self.token
                .transfer(&self.env.current_contract_address(), to, &amount);
            flows.released += amount;
        }
        amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn funded(amount: i128) -> ValueCell {
        let mut cell = ValueCell::new();
        cell.deposit(Funds { amount });
        cell
    }

    #[test]
    fn withdraw_moves_value_between_cells() {
        let mut source = funded(100);
        let mut target = ValueCell::new();

        let funds = source.withdraw(40).unwrap();
        assert_eq!(funds.amount(), 40);
        target.deposit(funds);

        assert_eq!(source.balance(), 60);
        assert_eq!(target.balance(), 40);
    }

    #[test]
    fn withdraw_more_than_balance_fails_without_change() {
        let mut cell = funded(10);
        assert_eq!(cell.withdraw(11).unwrap_err(), CircleError::InsufficientFunds);
        assert_eq!(cell.withdraw(-1).unwrap_err(), CircleError::InsufficientFunds);
        assert_eq!(cell.balance(), 10);
    }

    #[test]
    fn withdraw_all_empties_the_cell() {
        let mut cell = funded(25);
        let mut pool = ValueCell::new();
        pool.deposit(cell.withdraw_all());
        assert!(cell.is_empty());
        assert_eq!(pool.balance(), 25);
    }

    #[test]
    fn empty_units_may_be_dropped() {
        let mut cell = ValueCell::new();
        let funds = cell.withdraw_all();
        assert_eq!(funds.amount(), 0);
        drop(funds);
    }

    #[test]
    fn cells_cannot_be_cloned() {
        use core::marker::PhantomData;

        trait NotClone {
            const IS_CLONE: bool = false;
        }
        struct Check<T>(PhantomData<T>);
        impl<T> NotClone for Check<T> {}
        impl<T: Clone> Check<T> {
            const IS_CLONE: bool = true;
        }

        assert!(!Check::<ValueCell>::IS_CLONE);
        assert!(!Check::<Funds>::IS_CLONE);
        assert!(Check::<Flows>::IS_CLONE);
    }

    #[test]
    #[should_panic(expected = "funds dropped without being settled")]
    fn dropping_unsettled_funds_panics() {
        let mut cell = funded(5);
        let funds = cell.withdraw(5).unwrap();
        drop(funds);
    }
}
