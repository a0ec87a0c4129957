// Numeric extraction utilities for clause comparison
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "5 years", "five (5) years", "5-year"
    static ref YEARS_PATTERN: Regex = Regex::new(r"(?i)\(?(\d+)\)?[\s-]*years?\b").unwrap();
    static ref MONTHS_PATTERN: Regex = Regex::new(r"(?i)\(?(\d+)\)?[\s-]*months?\b").unwrap();
    // "30 days", "thirty (30) days", "10 business days"
    static ref DAYS_PATTERN: Regex =
        Regex::new(r"(?i)\(?(\d+)\)?[\s-]*(?:business\s+|calendar\s+)?days?\b").unwrap();
    static ref DURATION_PATTERN: Regex =
        Regex::new(r"(?i)\(?(\d+)\)?[\s-]*(years?|months?)\b").unwrap();
    // "$10,000", "$ 1,500.50"
    static ref AMOUNT_PATTERN: Regex = Regex::new(r"\$\s*(\d[\d,]*(?:\.\d+)?)").unwrap();
}

/// Number of years in the first year phrase, e.g. "five (5) years" -> 5
pub fn extract_years(text: &str) -> Option<u32> {
    first_number(&YEARS_PATTERN, text)
}

/// Number of months in the first month phrase
pub fn extract_months(text: &str) -> Option<u32> {
    first_number(&MONTHS_PATTERN, text)
}

/// Number of days in the first day phrase, e.g. "within thirty (30) days" -> 30
pub fn extract_days(text: &str) -> Option<u32> {
    first_number(&DAYS_PATTERN, text)
}

fn first_number(pattern: &Regex, text: &str) -> Option<u32> {
    pattern
        .captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .find_map(|m| m.as_str().parse::<u32>().ok())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Years,
    Months,
}

/// A period such as "5 years" or "18 months"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration {
    pub value: u32,
    pub unit: DurationUnit,
}

impl Duration {
    /// Length in months, for comparing periods stated in different units
    pub fn months(&self) -> u64 {
        match self.unit {
            DurationUnit::Years => u64::from(self.value) * 12,
            DurationUnit::Months => u64::from(self.value),
        }
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let unit = match (self.unit, self.value) {
            (DurationUnit::Years, 1) => "year",
            (DurationUnit::Years, _) => "years",
            (DurationUnit::Months, 1) => "month",
            (DurationUnit::Months, _) => "months",
        };
        write!(f, "{} {}", self.value, unit)
    }
}

/// First period stated in years or months, whichever appears first
pub fn extract_duration(text: &str) -> Option<Duration> {
    DURATION_PATTERN.captures_iter(text).find_map(|cap| {
        let value = cap.get(1)?.as_str().parse::<u32>().ok()?;
        let unit = if cap.get(2)?.as_str().to_lowercase().starts_with("year") {
            DurationUnit::Years
        } else {
            DurationUnit::Months
        };
        Some(Duration { value, unit })
    })
}

/// All dollar amounts in order of appearance, e.g. "$10,000" -> 10000.0
pub fn extract_amounts(text: &str) -> Vec<f64> {
    AMOUNT_PATTERN
        .captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .filter_map(|m| m.as_str().replace(',', "").parse::<f64>().ok())
        .collect()
}

/// First dollar amount in the text
pub fn first_amount(text: &str) -> Option<f64> {
    extract_amounts(text).into_iter().next()
}

/// Render an amount as "$10,000" or "$1,500.50"
pub fn format_amount(amount: f64) -> String {
    let cents = (amount * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if fraction == 0 {
        format!("${}", grouped)
    } else {
        format!("${}.{:02}", grouped, fraction)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: extraction never panics on arbitrary input
        #[test]
        fn extraction_no_panic(text in "\\PC*") {
            let _ = extract_years(&text);
            let _ = extract_days(&text);
            let _ = extract_duration(&text);
            let _ = extract_amounts(&text);
        }

        /// Property: a single unit phrase yields its exact number
        #[test]
        fn single_phrase_exact(n in 0u32..100_000, prefix in "[a-z ]{0,20}") {
            let text = format!("{} {} years", prefix, n);
            prop_assert_eq!(extract_years(&text), Some(n));
        }

        /// Property: text without digits never yields a quantity
        #[test]
        fn no_digits_no_quantity(text in "[a-zA-Z ,.()-]{0,80}") {
            prop_assert_eq!(extract_years(&text), None);
            prop_assert_eq!(extract_days(&text), None);
            prop_assert!(extract_amounts(&text).is_empty());
        }
    }
}
