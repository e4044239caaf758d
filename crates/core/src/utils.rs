use std::cell::RefCell;
use std::cmp::Ordering;

use chrono::{Datelike, Days, Months, NaiveDate};
use feruca::Collator;

use crate::domain::{BirthDate, Locale, Money};

/// Parses a `YYYY-MM-DD` date the way the roster page did: each component is
/// taken literally (no timezone), a missing, zero or non-numeric month or day
/// counts as 1, and out-of-range months/days roll over into the following
/// months. An empty year counts as 0 and years 0 to 99 mean 1900 to 1999.
/// Returns `None` when the year is not a number.
pub fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    let mut parts = text.split('-').map(str::trim);

    let year = match parts.next()? {
        "" => 0,
        digits => digits.parse::<i32>().ok()?,
    };
    let year = if (0..=99).contains(&year) { 1900 + year } else { year };
    let month = lenient_component(parts.next());
    let day = lenient_component(parts.next());

    NaiveDate::from_ymd_opt(year, 1, 1)?
        .checked_add_months(Months::new(month - 1))?
        .checked_add_days(Days::new(u64::from(day) - 1))
}

fn lenient_component(part: Option<&str>) -> u32 {
    part.and_then(|p| p.parse::<u32>().ok())
        .filter(|&n| n != 0)
        .unwrap_or(1)
}

/// Renders a birth date in the locale's day/month/year ordering.
/// Dates that did not parse render as `Invalid Date`.
pub fn format_date(birth_date: &BirthDate, locale: Locale) -> String {
    let Some(date) = birth_date.date() else {
        return "Invalid Date".to_string();
    };

    match locale {
        Locale::PtBr => date.format("%d/%m/%Y").to_string(),
        Locale::EnUs => format!("{}/{}/{}", date.month(), date.day(), date.year()),
    }
}

/// Renders an amount with the locale's currency symbol, grouping separator
/// and two fractional digits.
pub fn format_currency(amount: Money, locale: Locale) -> String {
    let cents = amount.cents().unsigned_abs();
    let sign = if amount.is_negative() { "-" } else { "" };
    let fraction = cents % 100;

    match locale {
        Locale::PtBr => format!(
            "{sign}R$\u{a0}{},{fraction:02}",
            group_thousands(cents / 100, '.')
        ),
        Locale::EnUs => format!(
            "{sign}${}.{fraction:02}",
            group_thousands(cents / 100, ',')
        ),
    }
}

fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}

thread_local! {
    static COLLATOR: RefCell<Collator> = RefCell::new(Collator::default());
}

/// Compares two strings with the Unicode collation algorithm and the CLDR
/// root order: base letters first, then accents, then case (lowercase first).
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| collator.borrow_mut().collate(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_parse_iso_date_literal() {
        assert_eq!(parse_iso_date("2000-10-18"), ymd(2000, 10, 18));
        assert_eq!(parse_iso_date("1961-05-02"), ymd(1961, 5, 2));
    }

    #[test]
    fn test_parse_iso_date_missing_components_default_to_first() {
        assert_eq!(parse_iso_date("2000-10"), ymd(2000, 10, 1));
        assert_eq!(parse_iso_date("2000"), ymd(2000, 1, 1));
        assert_eq!(parse_iso_date("2000-00-00"), ymd(2000, 1, 1));
        assert_eq!(parse_iso_date("2000-xx-05"), ymd(2000, 1, 5));
    }

    #[test]
    fn test_parse_iso_date_rolls_over() {
        assert_eq!(parse_iso_date("2000-13-01"), ymd(2001, 1, 1));
        assert_eq!(parse_iso_date("2001-02-29"), ymd(2001, 3, 1));
        assert_eq!(parse_iso_date("2000-02-29"), ymd(2000, 2, 29));
    }

    #[test]
    fn test_parse_iso_date_invalid_year() {
        assert_eq!(parse_iso_date("not-a-date"), None);
        assert_eq!(parse_iso_date("19x0-01-01"), None);
    }

    #[test]
    fn test_parse_iso_date_two_digit_and_empty_years() {
        assert_eq!(parse_iso_date("99-01-01"), ymd(1999, 1, 1));
        assert_eq!(parse_iso_date("0005-03-04"), ymd(1905, 3, 4));
        assert_eq!(parse_iso_date(""), ymd(1900, 1, 1));
        assert_eq!(parse_iso_date("-06-15"), ymd(1900, 6, 15));
        assert_eq!(parse_iso_date("0100-01-01"), ymd(100, 1, 1));
    }

    #[test]
    fn test_format_date_pt_br() {
        let date = BirthDate::parse("1961-05-02");
        assert_eq!(format_date(&date, Locale::PtBr), "02/05/1961");
    }

    #[test]
    fn test_format_date_en_us() {
        let date = BirthDate::parse("1961-05-02");
        assert_eq!(format_date(&date, Locale::EnUs), "5/2/1961");
    }

    #[test]
    fn test_format_date_invalid() {
        let date = BirthDate::parse("garbage");
        assert_eq!(format_date(&date, Locale::PtBr), "Invalid Date");
    }

    #[test]
    fn test_format_currency_pt_br() {
        assert_eq!(format_currency(Money::from_cents(200_944), Locale::PtBr), "R$\u{a0}2.009,44");
        assert_eq!(
            format_currency(Money::from_cents(4_836_331), Locale::PtBr),
            "R$\u{a0}48.363,31"
        );
        assert_eq!(format_currency(Money::from_cents(5), Locale::PtBr), "R$\u{a0}0,05");
    }

    #[test]
    fn test_format_currency_en_us() {
        assert_eq!(format_currency(Money::from_cents(1_911_988), Locale::EnUs), "$19,119.88");
        assert_eq!(
            format_currency(Money::from_cents(123_456_789_00), Locale::EnUs),
            "$123,456,789.00"
        );
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(Money::from_cents(-100), Locale::EnUs), "-$1.00");
        assert_eq!(format_currency(Money::from_cents(-100), Locale::PtBr), "-R$\u{a0}1,00");
    }

    #[test]
    fn test_locale_compare_ignores_accents_at_first_level() {
        assert_eq!(locale_compare("João", "Joana"), Ordering::Greater);
        assert_eq!(locale_compare("Érica", "Fabio"), Ordering::Less);
        assert_eq!(locale_compare("caio", "Caio"), Ordering::Less);
    }

    #[test]
    fn test_locale_compare_accent_breaks_ties() {
        assert_eq!(locale_compare("Joao", "João"), Ordering::Less);
        assert_eq!(locale_compare("Helena", "Helena"), Ordering::Equal);
    }

    #[test]
    fn test_locale_compare_ligatures_and_extra_letters() {
        assert_eq!(locale_compare("Æsa", "Bruno"), Ordering::Less);
        assert_eq!(locale_compare("Œuvre", "Ozzy"), Ordering::Less);
        assert_eq!(locale_compare("Þóra", "Ana"), Ordering::Greater);
    }

    #[test]
    fn test_locale_compare_acute_before_grave() {
        assert_eq!(locale_compare("á", "à"), Ordering::Less);
        assert_eq!(locale_compare("cote", "coté"), Ordering::Less);
    }

    #[test]
    fn test_locale_compare_case_insensitive_order() {
        assert_eq!(locale_compare("alice", "Bruno"), Ordering::Less);
        assert_eq!(locale_compare("Zeca", "ana"), Ordering::Greater);
    }
}
