//! Core of the employee roster: records, sorting, grouping and formatting.

pub mod application;
pub mod domain;
pub mod error;
pub mod grouping;
pub mod ports;
pub mod seed;
pub mod sorting;
pub mod store;
pub mod utils;
