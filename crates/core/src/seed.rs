use crate::domain::{Employee, Money};
use crate::ports::{RecordSource, Result};

/// The fixed list of employees the roster starts with.
pub fn seed_records() -> Vec<Employee> {
    vec![
        Employee::new(1, "Maria", "2000-10-18", Money::from_cents(200_944), "Operador"),
        Employee::new(2, "João", "1990-05-12", Money::from_cents(228_438), "Operador"),
        Employee::new(3, "Caio", "1961-05-02", Money::from_cents(963_614), "Coordenador"),
        Employee::new(4, "Miguel", "1988-10-14", Money::from_cents(1_911_988), "Diretor"),
        Employee::new(5, "Alice", "1995-11-05", Money::from_cents(223_468), "Recepcionista"),
        Employee::new(6, "Heitor", "1999-11-19", Money::from_cents(158_272), "Operador"),
        Employee::new(7, "Arthur", "1993-03-31", Money::from_cents(407_184), "Contador"),
        Employee::new(8, "Laura", "1994-07-08", Money::from_cents(301_745), "Gerente"),
        Employee::new(9, "Heloisa", "2003-05-24", Money::from_cents(160_685), "Eletricista"),
        Employee::new(10, "Helena", "1996-09-02", Money::from_cents(279_993), "Gerente"),
    ]
}

/// Record source backed by the built-in seed list.
#[derive(Debug, Default, Clone, Copy)]
pub struct SeedRecordSource;

impl RecordSource for SeedRecordSource {
    fn fetch_all_records(&self) -> Result<Vec<Employee>> {
        Ok(seed_records())
    }
}
