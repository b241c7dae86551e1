//! Read and update helpers over a circle's member records.
//!
//! Updates never touch a record in place: each helper returns the next
//! version, and the caller replaces the map entry with it.

use soroban_sdk::{Address, Map, Vec};

use crate::types::MemberRecord;

pub type Members = Map<Address, MemberRecord>;

impl MemberRecord {
    pub fn enroll(address: Address, rotation_position: u32, joined_at: u64) -> Self {
        Self {
            address,
            rotation_position,
            has_contributed_this_cycle: false,
            total_contributed: 0,
            cycles_contributed: 0,
            is_delinquent: false,
            joined_at,
        }
    }

    pub fn record_contribution(&self, amount: i128) -> Self {
        Self {
            has_contributed_this_cycle: true,
            total_contributed: self.total_contributed + amount,
            cycles_contributed: self.cycles_contributed + 1,
            ..self.clone()
        }
    }

    /// Clears the per-cycle flag; totals and delinquency carry over.
    pub fn reset_for_new_cycle(&self) -> Self {
        Self {
            has_contributed_this_cycle: false,
            ..self.clone()
        }
    }

    pub fn mark_delinquent(&self) -> Self {
        Self {
            is_delinquent: true,
            ..self.clone()
        }
    }
}

pub fn is_member(members: &Members, member: &Address) -> bool {
    members.contains_key(member.clone())
}

pub fn has_contributed(members: &Members, member: &Address) -> bool {
    members
        .get(member.clone())
        .map(|record| record.has_contributed_this_cycle)
        .unwrap_or(false)
}

/// True iff every member in rotation order has paid in this cycle.
pub fn all_contributed(members: &Members, order: &Vec<Address>) -> bool {
    for member in order.iter() {
        if !has_contributed(members, &member) {
            return false;
        }
    }
    true
}

/// Members who have not paid this cycle and are not yet delinquent,
/// in rotation order.
pub fn newly_delinquent(members: &Members, order: &Vec<Address>) -> Vec<Address> {
    let mut missed = Vec::new(order.env());
    for member in order.iter() {
        if let Some(record) = members.get(member.clone()) {
            if !record.has_contributed_this_cycle && !record.is_delinquent {
                missed.push_back(member);
            }
        }
    }
    missed
}

pub fn reset_all(members: &mut Members, order: &Vec<Address>) {
    for member in order.iter() {
        if let Some(record) = members.get(member.clone()) {
            members.set(member, record.reset_for_new_cycle());
        }
    }
}

/// Records in rotation order.
pub fn in_rotation_order(members: &Members, order: &Vec<Address>) -> Vec<MemberRecord> {
    let mut records = Vec::new(order.env());
    for member in order.iter() {
        if let Some(record) = members.get(member) {
            records.push_back(record);
        }
    }
    records
}
