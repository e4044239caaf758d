use serde::Serialize;

use crate::domain::{
    Employee, EmployeeId, Locale, Money, RaiseFactor, RosterAction, SortDirection, SortKey,
};
use crate::grouping::{group_by_job_function, JobGroup};
use crate::ports::{RecordSource, Result};
use crate::sorting::{sorted, SortState};
use crate::store::Roster;
use crate::utils::{format_currency, format_date};

/// Application service behind the roster table: owns the records and the
/// sort state, applies user actions and derives everything else on demand.
#[derive(Debug, Clone)]
pub struct EmployeeRosterView {
    roster: Roster,
    sort: SortState,
    locale: Locale,
    raise_factor: RaiseFactor,
}

/// One column header of the table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnHeader {
    pub key: SortKey,
    pub title: &'static str,
    pub indicator: Option<SortDirection>,
}

/// A record with its display fields already formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterRow {
    pub id: EmployeeId,
    pub name: String,
    pub birth_date: String,
    pub salary: String,
    pub job_function: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSection {
    pub job_function: String,
    pub members: Vec<RosterRow>,
}

/// Everything needed to draw the roster page at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterSnapshot {
    pub locale: Locale,
    pub sort: SortState,
    pub headers: Vec<ColumnHeader>,
    pub rows: Vec<RosterRow>,
    pub total_salary: String,
    pub groups: Vec<GroupSection>,
}

impl EmployeeRosterView {
    /// Loads the initial records from `source`
    pub fn new(source: &dyn RecordSource, locale: Locale) -> Result<Self> {
        let records = source.fetch_all_records()?;
        Ok(Self::from_roster(Roster::from_records(records)?, locale))
    }

    pub fn from_roster(roster: Roster, locale: Locale) -> Self {
        Self {
            roster,
            sort: SortState::default(),
            locale,
            raise_factor: RaiseFactor::default(),
        }
    }

    /// Overrides the factor used by both raise controls.
    pub fn with_raise_factor(mut self, factor: RaiseFactor) -> Self {
        self.raise_factor = factor;
        self
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort.toggle(key);
    }

    pub fn remove(&mut self, id: EmployeeId) -> bool {
        self.roster.remove(id)
    }

    pub fn raise_all(&mut self) {
        self.roster.raise_all(self.raise_factor);
    }

    pub fn raise_one(&mut self, id: EmployeeId) {
        self.roster.raise_one(id, self.raise_factor);
    }

    pub fn dispatch(&mut self, action: RosterAction) {
        match action {
            RosterAction::ToggleSort(key) => self.toggle_sort(key),
            RosterAction::Remove(id) => {
                self.remove(id);
            }
            RosterAction::RaiseAll => self.raise_all(),
            RosterAction::RaiseOne(id) => self.raise_one(id),
        }
    }

    /// Records in the active sort order.
    pub fn sorted_rows(&self) -> Vec<Employee> {
        sorted(self.roster.records(), self.sort)
    }

    pub fn groups(&self) -> Vec<JobGroup> {
        group_by_job_function(self.roster.records())
    }

    pub fn total_salary(&self) -> Money {
        self.roster.total_salary()
    }

    pub fn snapshot(&self) -> RosterSnapshot {
        let headers = SortKey::ALL
            .iter()
            .map(|&key| ColumnHeader {
                key,
                title: key.title(),
                indicator: self.sort.indicator(key),
            })
            .collect();

        let rows = self.sorted_rows().iter().map(|e| self.row(e)).collect();

        let groups = self
            .groups()
            .into_iter()
            .map(|group| GroupSection {
                members: group.members.iter().map(|e| self.row(e)).collect(),
                job_function: group.job_function,
            })
            .collect();

        RosterSnapshot {
            locale: self.locale,
            sort: self.sort,
            headers,
            rows,
            total_salary: format_currency(self.total_salary(), self.locale),
            groups,
        }
    }

    fn row(&self, employee: &Employee) -> RosterRow {
        RosterRow {
            id: employee.id,
            name: employee.name.clone(),
            birth_date: format_date(&employee.birth_date, self.locale),
            salary: format_currency(employee.salary, self.locale),
            job_function: employee.job_function.clone(),
        }
    }
}
