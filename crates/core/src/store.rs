use std::collections::HashSet;

use tracing::debug;

use crate::domain::{Employee, EmployeeId, Money, RaiseFactor};
use crate::error::RosterError;

/// The authoritative, insertion-ordered collection of employee records.
///
/// Every mutation builds a new collection and swaps it in; records are never
/// edited through a shared reference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    records: Vec<Employee>,
}

impl Roster {
    /// Builds a roster, rejecting duplicate ids and negative salaries.
    pub fn from_records(records: Vec<Employee>) -> Result<Self, RosterError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(RosterError::DuplicateId(record.id));
            }
            if record.salary.is_negative() {
                return Err(RosterError::NegativeSalary(record.id));
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.records.iter().find(|e| e.id == id)
    }

    /// Sum of every current salary.
    pub fn total_salary(&self) -> Money {
        self.records.iter().map(|e| e.salary).sum()
    }

    /// Removes the record with `id`. Returns `false` (and changes nothing)
    /// when no such record exists.
    pub fn remove(&mut self, id: EmployeeId) -> bool {
        let before = self.records.len();
        let next: Vec<Employee> = self
            .records
            .iter()
            .filter(|e| e.id != id)
            .cloned()
            .collect();
        let removed = next.len() != before;
        self.records = next;

        if removed {
            debug!(%id, remaining = self.records.len(), "removed employee");
        } else {
            debug!(%id, "remove ignored, no such employee");
        }
        removed
    }

    /// Applies `factor` to every salary and returns the updated collection.
    pub fn raise_all(&mut self, factor: RaiseFactor) -> &[Employee] {
        self.records = self
            .records
            .iter()
            .map(|e| e.with_salary(e.salary.scaled(factor)))
            .collect();
        debug!(factor = factor.get(), count = self.records.len(), "raised all salaries");
        &self.records
    }

    /// Applies `factor` to the salary of the record with `id`, if present.
    pub fn raise_one(&mut self, id: EmployeeId, factor: RaiseFactor) -> &[Employee] {
        if self.get(id).is_none() {
            debug!(%id, "raise ignored, no such employee");
            return &self.records;
        }

        self.records = self
            .records
            .iter()
            .map(|e| {
                if e.id == id {
                    e.with_salary(e.salary.scaled(factor))
                } else {
                    e.clone()
                }
            })
            .collect();
        debug!(%id, factor = factor.get(), "raised salary");
        &self.records
    }
}
