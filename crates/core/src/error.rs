use thiserror::Error;

use crate::domain::EmployeeId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RosterError {
    #[error("unknown sort key `{0}`")]
    UnknownSortKey(String),
    #[error("unknown locale `{0}`")]
    UnknownLocale(String),
    #[error("malformed action `{0}`")]
    MalformedAction(String),
    #[error("raise factor must be finite and non-negative, got {0}")]
    InvalidRaiseFactor(f64),
    #[error("duplicate employee id {0}")]
    DuplicateId(EmployeeId),
    #[error("employee {0} has a negative salary")]
    NegativeSalary(EmployeeId),
}
