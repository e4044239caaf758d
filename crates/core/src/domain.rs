use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::error::RosterError;
use crate::utils::parse_iso_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EmployeeId(pub u32);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EmployeeId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(EmployeeId)
    }
}

/// An amount of money in a single currency, kept in whole cents.
/// Arithmetic saturates at the bounds of `i64` instead of overflowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);
    pub const MAX: Money = Money(i64::MAX);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub fn as_decimal(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Multiplies by `factor`, rounding the cent count half away from zero.
    /// Results beyond the representable range clamp to [`Money::MAX`].
    pub fn scaled(self, factor: RaiseFactor) -> Self {
        let cents = (self.0 as f64 * factor.get()).round();
        if cents >= i64::MAX as f64 {
            Money::MAX
        } else if cents <= i64::MIN as f64 {
            Money(i64::MIN)
        } else {
            Money(cents as i64)
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

/// Multiplier applied to salaries by a raise. Always finite and non-negative,
/// so a raise can never turn a salary negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaiseFactor(f64);

impl RaiseFactor {
    /// The +10% raise offered by the roster controls.
    pub const TEN_PERCENT: RaiseFactor = RaiseFactor(1.10);

    pub fn new(factor: f64) -> Result<Self, RosterError> {
        if factor.is_finite() && factor >= 0.0 {
            Ok(Self(factor))
        } else {
            Err(RosterError::InvalidRaiseFactor(factor))
        }
    }

    /// Builds the factor for a raise of `percent` (e.g. `10.0` gives 1.10).
    pub fn from_percent(percent: f64) -> Result<Self, RosterError> {
        Self::new(1.0 + percent / 100.0)
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for RaiseFactor {
    fn default() -> Self {
        Self::TEN_PERCENT
    }
}

/// A birth date as supplied (`YYYY-MM-DD`), together with its parsed value.
/// Text that does not parse is kept and treated as an invalid date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthDate {
    raw: String,
    date: Option<NaiveDate>,
}

impl BirthDate {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let date = parse_iso_date(&raw);
        Self { raw, date }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Chronological order; invalid dates sort after every valid one.
    pub fn chronological_cmp(&self, other: &Self) -> Ordering {
        match (self.date, other.date) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl Serialize for BirthDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub birth_date: BirthDate,
    #[serde(rename = "salary_cents")]
    pub salary: Money,
    pub job_function: String,
}

impl Employee {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        birth_date: &str,
        salary: Money,
        job_function: impl Into<String>,
    ) -> Self {
        Self {
            id: EmployeeId(id),
            name: name.into(),
            birth_date: BirthDate::parse(birth_date),
            salary,
            job_function: job_function.into(),
        }
    }

    /// Returns a copy of this record with a different salary.
    pub fn with_salary(&self, salary: Money) -> Self {
        Self {
            salary,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Name,
    BirthDate,
    Salary,
    JobFunction,
}

impl SortKey {
    /// Column order of the roster table.
    pub const ALL: [SortKey; 4] = [
        SortKey::Name,
        SortKey::BirthDate,
        SortKey::Salary,
        SortKey::JobFunction,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::BirthDate => "Birth date",
            SortKey::Salary => "Salary",
            SortKey::JobFunction => "Job function",
        }
    }
}

impl FromStr for SortKey {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name" => Ok(SortKey::Name),
            "birth-date" | "birth_date" | "birthDate" => Ok(SortKey::BirthDate),
            "salary" => Ok(SortKey::Salary),
            "job-function" | "job_function" | "jobFunction" => Ok(SortKey::JobFunction),
            other => Err(RosterError::UnknownSortKey(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Display locale for currency and dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en-US")]
    EnUs,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::PtBr => f.write_str("pt-BR"),
            Locale::EnUs => f.write_str("en-US"),
        }
    }
}

impl FromStr for Locale {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(Locale::PtBr),
            "en-us" | "en" => Ok(Locale::EnUs),
            _ => Err(RosterError::UnknownLocale(s.to_string())),
        }
    }
}

/// A single user interaction with the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterAction {
    ToggleSort(SortKey),
    Remove(EmployeeId),
    RaiseAll,
    RaiseOne(EmployeeId),
}

impl FromStr for RosterAction {
    type Err = RosterError;

    /// Accepts `sort:<key>`, `remove:<id>`, `raise-all` and `raise:<id>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || RosterError::MalformedAction(s.to_string());
        let trimmed = s.trim();
        if trimmed == "raise-all" {
            return Ok(RosterAction::RaiseAll);
        }

        let (verb, arg) = trimmed.split_once(':').ok_or_else(malformed)?;
        match verb {
            "sort" => Ok(RosterAction::ToggleSort(arg.parse()?)),
            "remove" => arg
                .parse()
                .map(RosterAction::Remove)
                .map_err(|_| malformed()),
            "raise" => arg
                .parse()
                .map(RosterAction::RaiseOne)
                .map_err(|_| malformed()),
            _ => Err(malformed()),
        }
    }
}
