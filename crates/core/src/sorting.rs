use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use crate::domain::{Employee, SortDirection, SortKey};
use crate::utils::locale_compare;

/// Which column the table is sorted by, and in which direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Clicking the active column flips the direction; clicking another
    /// column makes it active in ascending order.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.flipped();
        } else {
            self.key = key;
            self.direction = SortDirection::Ascending;
        }
        debug!(key = ?self.key, direction = ?self.direction, "sort toggled");
    }

    /// Direction arrow to show on the header of `key`, if it is the active column.
    pub fn indicator(&self, key: SortKey) -> Option<SortDirection> {
        (self.key == key).then_some(self.direction)
    }

    pub fn compare(&self, a: &Employee, b: &Employee) -> Ordering {
        self.direction.apply(compare_by(self.key, a, b))
    }
}

/// Ascending comparison of two records on a single column.
pub fn compare_by(key: SortKey, a: &Employee, b: &Employee) -> Ordering {
    match key {
        SortKey::Name => locale_compare(&a.name, &b.name),
        SortKey::JobFunction => locale_compare(&a.job_function, &b.job_function),
        SortKey::BirthDate => a.birth_date.chronological_cmp(&b.birth_date),
        SortKey::Salary => a.salary.cmp(&b.salary),
    }
}

/// Returns the records in `state` order without touching the input.
/// Records that compare equal keep their relative order.
pub fn sorted(records: &[Employee], state: SortState) -> Vec<Employee> {
    let mut view = records.to_vec();
    view.sort_by(|a, b| state.compare(a, b));
    view
}
