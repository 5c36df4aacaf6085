use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::metrics::round_money;
use crate::views::normalize_date;

fn format_with_dots(value: u64) -> String {
    let s = value.to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in s.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('.');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// `R$ 1.234,56`, with the sign in front of the symbol for negatives.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_money(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let abs = rounded.abs();
    let cents = (abs * Decimal::ONE_HUNDRED).trunc().to_u64().unwrap_or_default();
    format!("{}R$ {},{:02}", sign, format_with_dots(cents / 100), cents % 100)
}

/// Backend date or timestamp shown as `dd/mm/yyyy`.
pub fn format_date(raw: &str) -> String {
    let normalized = normalize_date(raw);
    match NaiveDate::parse_from_str(&normalized, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn currency_uses_brazilian_separators() {
        assert_eq!(format_currency(dec!(0)), "R$ 0,00");
        assert_eq!(format_currency(dec!(130)), "R$ 130,00");
        assert_eq!(format_currency(dec!(1234.5)), "R$ 1.234,50");
        assert_eq!(format_currency(dec!(1234567.891)), "R$ 1.234.567,89");
    }

    #[test]
    fn negative_amounts_keep_their_sign() {
        assert_eq!(format_currency(dec!(-100)), "-R$ 100,00");
        assert_eq!(format_currency(dec!(-0.001)), "R$ 0,00");
    }

    #[test]
    fn dates_render_day_first() {
        assert_eq!(format_date("2024-05-10T12:00:00Z"), "10/05/2024");
        assert_eq!(format_date("2024-12-01"), "01/12/2024");
        assert_eq!(format_date("sem data"), "sem data");
    }
}
