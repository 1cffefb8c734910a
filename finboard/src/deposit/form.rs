use super::validation::{Field, FieldValues};
use chrono::{Days, NaiveDate};

/// Largest amount a single deposit or payment may carry.
pub const AMOUNT_CAP: f64 = 10_000.0;

const DATE_LEN: usize = "YYYY-MM-DD".len();

/// User-entered fields of one in-progress deposit or invoice payment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepositForm {
    pub date: String,    // YYYY-MM-DD
    pub description: String,
    amount: f64,
    amount_input: String, // what the amount field shows
    pub invoice_payment: bool,
}

impl DepositForm {
    pub fn new(invoice_payment: bool) -> Self {
        Self {
            invoice_payment,
            ..Default::default()
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn amount_input(&self) -> &str {
        &self.amount_input
    }

    /// Amount-change handler: parse the raw input and cap it at [`AMOUNT_CAP`].
    ///
    /// Input that is not a number is stored as NaN; the submit pre-check
    /// rejects it.
    pub fn set_amount(&mut self, raw: &str) {
        let parsed = parse_amount(raw);
        if parsed > AMOUNT_CAP {
            self.amount = AMOUNT_CAP;
            self.amount_input = format_amount(AMOUNT_CAP);
        } else {
            self.amount = parsed;
            self.amount_input = raw.to_string();
        }
    }

    /// Reset the entered values after a successful submission. The
    /// invoice-payment mode is kept.
    pub fn clear(&mut self) {
        self.date.clear();
        self.description.clear();
        self.amount = 0.0;
        self.amount_input.clear();
    }

    /// Values as the schema sees them. Zero and NaN amounts show as an empty
    /// transfer value.
    pub fn field_values(&self) -> FieldValues {
        let transfer_value = if self.amount == 0.0 || self.amount.is_nan() {
            String::new()
        } else {
            format_amount(self.amount)
        };

        FieldValues::new()
            .with(Field::Date, self.date.clone())
            .with(Field::Description, self.description.clone())
            .with(Field::TransferValue, transfer_value)
    }
}

/// Empty or blank input is zero; anything that is not a plain decimal
/// (sign, digits, fraction, exponent) is NaN.
pub fn parse_amount(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    if !trimmed.bytes().all(is_decimal_byte) {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

// `str::parse` also takes `inf` and `NaN` spellings
fn is_decimal_byte(b: u8) -> bool {
    b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E')
}

pub fn format_amount(amount: f64) -> String {
    format!("{}", amount)
}

/// A date is acceptable when it is a zero-padded `YYYY-MM-DD` and is not
/// before the day before `today`.
pub fn is_acceptable_date(raw: &str, today: NaiveDate) -> bool {
    let trimmed = raw.trim();
    // chrono's %m and %d also accept unpadded values
    if trimmed.len() != DATE_LEN {
        return false;
    }

    let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") else {
        return false;
    };

    match today.checked_sub_days(Days::new(1)) {
        Some(yesterday) => date >= yesterday,
        None => true,
    }
}

/// Amounts must be finite and strictly positive.
pub fn is_acceptable_amount(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_amount_is_capped() {
        let mut form = DepositForm::default();
        form.set_amount("25000");
        assert_eq!(form.amount(), AMOUNT_CAP);
        assert_eq!(form.amount_input(), "10000");
    }

    #[test]
    fn test_amount_at_cap_is_kept() {
        let mut form = DepositForm::default();
        form.set_amount("10000");
        assert_eq!(form.amount(), 10_000.0);
    }

    #[test]
    fn test_amount_is_min_of_parsed_and_cap() {
        let mut form = DepositForm::default();
        for (raw, expected) in [("0.5", 0.5), ("9999.99", 9999.99), ("10000.01", 10_000.0)] {
            form.set_amount(raw);
            assert_eq!(form.amount(), expected, "input {raw}");
        }
    }

    #[test]
    fn test_negative_amount_is_not_clamped() {
        let mut form = DepositForm::default();
        form.set_amount("-50");
        assert_eq!(form.amount(), -50.0);
        assert_eq!(form.amount_input(), "-50");
    }

    #[test]
    fn test_partial_decimal_input_is_kept_verbatim() {
        let mut form = DepositForm::default();
        form.set_amount("12.");
        assert_eq!(form.amount(), 12.0);
        assert_eq!(form.amount_input(), "12.");
    }

    #[test]
    fn test_non_numeric_amount_is_nan() {
        let mut form = DepositForm::default();
        for raw in ["abc", "inf", "infinity", "Infinity", "-inf", "NaN", "1,5"] {
            form.set_amount(raw);
            assert!(form.amount().is_nan(), "input {raw}");
            assert_eq!(form.amount_input(), raw);
            assert!(!is_acceptable_amount(form.amount()), "input {raw}");
        }
    }

    #[test]
    fn test_plain_decimal_spellings_parse() {
        assert_eq!(parse_amount("+12"), 12.0);
        assert_eq!(parse_amount("1e3"), 1000.0);
        assert_eq!(parse_amount(".5"), 0.5);
        assert!(parse_amount("e").is_nan());
    }

    #[test]
    fn test_empty_amount_is_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("   "), 0.0);
    }

    #[test]
    fn test_clear_keeps_invoice_mode() {
        let mut form = DepositForm::new(true);
        form.date = "2026-10-16".to_string();
        form.description = "Fatura".to_string();
        form.set_amount("120");

        form.clear();

        assert_eq!(form, DepositForm::new(true));
    }

    #[test]
    fn test_field_values_hide_zero_amount() {
        let form = DepositForm::default();
        assert_eq!(form.field_values().get(Field::TransferValue), Some(""));
    }

    #[test]
    fn test_field_values_carry_entered_text() {
        let mut form = DepositForm::default();
        form.date = "2026-10-16".to_string();
        form.description = "Mesada".to_string();
        form.set_amount("42.5");

        let values = form.field_values();
        assert_eq!(values.get(Field::Date), Some("2026-10-16"));
        assert_eq!(values.get(Field::Description), Some("Mesada"));
        assert_eq!(values.get(Field::TransferValue), Some("42.5"));
    }

    #[test]
    fn test_date_window() {
        assert!(is_acceptable_date("2026-10-16", today()));
        assert!(is_acceptable_date("2026-10-15", today()));
        assert!(is_acceptable_date("2026-12-01", today()));
        assert!(!is_acceptable_date("2026-10-14", today()));
    }

    #[test]
    fn test_date_must_be_present_and_parse() {
        assert!(!is_acceptable_date("", today()));
        assert!(!is_acceptable_date("   ", today()));
        assert!(!is_acceptable_date("16/10/2026", today()));
        assert!(is_acceptable_date(" 2026-10-16 ", today()));
    }

    #[test]
    fn test_date_must_be_zero_padded() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert!(!is_acceptable_date("2026-1-5", today));
        assert!(!is_acceptable_date("2026-01-5", today));
        assert!(!is_acceptable_date("2026-1-05", today));
        assert!(is_acceptable_date("2026-01-05", today));
    }

    #[test]
    fn test_amount_must_be_positive() {
        assert!(is_acceptable_amount(0.01));
        assert!(!is_acceptable_amount(0.0));
        assert!(!is_acceptable_amount(-1.0));
        assert!(!is_acceptable_amount(f64::INFINITY));
    }
}
