use crate::application::RosterSnapshot;
use crate::domain::Employee;
use std::error::Error;

pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

pub trait RecordSource {
    // Supplies the initial collection of employee records
    fn fetch_all_records(&self) -> Result<Vec<Employee>>;
}

/// Draws a roster snapshot somewhere the user can see it
/// Output adapters implement this; the core only builds the snapshot
pub trait RosterRenderer {
    fn render(&self, snapshot: &RosterSnapshot) -> Result<()>;
}
