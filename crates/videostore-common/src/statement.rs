//! Rental statements
//!
//! A [`Statement`] is the structured result of pricing a customer's rentals.
//! [`StatementFormatter`] turns it into text:
//!
//! - [`PlainText`]: the classic tab-separated record
//! - [`Json`]: pretty-printed JSON, money as one-decimal strings

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};

use crate::types::movie::MovieCategory;
use crate::{Result, CURRENCY_SCALE};

/// One priced rental
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementLine {
    pub title: String,
    pub category: MovieCategory,
    pub days_rented: u32,
    #[serde(serialize_with = "serialize_money")]
    pub charge: Decimal,
    pub points: u32,
}

/// Priced rentals for one customer, in rental order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statement {
    pub customer_name: String,
    pub lines: Vec<StatementLine>,
    /// Sum of the line charges
    #[serde(serialize_with = "serialize_money")]
    pub total_charge: Decimal,
    /// Sum of the line points
    pub total_points: u32,
}

impl Statement {
    /// Render in the plain-text record format
    pub fn render_text(&self) -> String {
        format(
            &self.customer_name,
            self.lines.iter().map(|line| (line.title.as_str(), line.charge)),
            self.total_charge,
            self.total_points,
        )
    }
}

/// Renders a statement for display
pub trait StatementFormatter {
    fn format(&self, statement: &Statement) -> Result<String>;
}

/// Tab-separated "Rental Record for ..." text
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl StatementFormatter for PlainText {
    fn format(&self, statement: &Statement) -> Result<String> {
        Ok(statement.render_text())
    }
}

/// Pretty-printed JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl StatementFormatter for Json {
    fn format(&self, statement: &Statement) -> Result<String> {
        Ok(serde_json::to_string_pretty(statement)?)
    }
}

/// Render a statement record.
///
/// Lines are joined by `\n` with no trailing newline. With no rentals only
/// the header and the two total lines appear.
pub fn format<'a, I>(
    customer_name: &str,
    lines: I,
    total_charge: Decimal,
    total_points: u32,
) -> String
where
    I: IntoIterator<Item = (&'a str, Decimal)>,
{
    let mut out = vec![format!("Rental Record for {customer_name}")];
    out.extend(
        lines
            .into_iter()
            .map(|(title, charge)| format!("\t{title}\t{}", render_money(charge))),
    );
    out.push(format!("Amount owed is {}", render_money(total_charge)));
    out.push(format!("You earned {total_points} frequent renter points"));
    out.join("\n")
}

/// Money with exactly [`CURRENCY_SCALE`] fractional digits, e.g. `12.0`.
/// Finer amounts are rounded midpoint away from zero, as charges are.
pub fn render_money(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", CURRENCY_SCALE as usize, rounded)
}

fn serialize_money<S>(amount: &Decimal, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&render_money(*amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> Statement {
        Statement {
            customer_name: "David".to_string(),
            lines: vec![
                StatementLine {
                    title: "Lord of the Rings".to_string(),
                    category: MovieCategory::NewRelease,
                    days_rented: 4,
                    charge: dec!(12.0),
                    points: 2,
                },
                StatementLine {
                    title: "Rembo".to_string(),
                    category: MovieCategory::Regular,
                    days_rented: 1,
                    charge: dec!(2.0),
                    points: 1,
                },
            ],
            total_charge: dec!(14.0),
            total_points: 3,
        }
    }

    #[test]
    fn test_render_money_uses_one_digit() {
        assert_eq!(render_money(dec!(2)), "2.0");
        assert_eq!(render_money(dec!(12.0)), "12.0");
        assert_eq!(render_money(dec!(4.50)), "4.5");
        assert_eq!(render_money(Decimal::ZERO), "0.0");
    }

    #[test]
    fn test_render_money_rounds_finer_amounts() {
        assert_eq!(render_money(dec!(1.25)), "1.3");
        assert_eq!(render_money(dec!(1.24)), "1.2");
        assert_eq!(render_money(dec!(1.99)), "2.0");
        assert_eq!(render_money(dec!(0.05)), "0.1");
    }

    #[test]
    fn test_format_rounds_caller_supplied_charges() {
        let text = format("Zoe", vec![("Rembo", dec!(1.99))], dec!(1.99), 1);
        assert_eq!(
            text,
            "Rental Record for Zoe\n\tRembo\t2.0\nAmount owed is 2.0\nYou earned 1 frequent renter points"
        );
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(
            format("Empty Customer", Vec::<(&str, Decimal)>::new(), Decimal::ZERO, 0),
            "Rental Record for Empty Customer\nAmount owed is 0.0\nYou earned 0 frequent renter points"
        );
    }

    #[test]
    fn test_format_keeps_plural_wording_for_one_point() {
        let text = format("Chris", vec![("Lord of the Rings", dec!(3.0))], dec!(3.0), 1);
        assert!(text.ends_with("You earned 1 frequent renter points"));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_plain_text_formatter() {
        let text = PlainText.format(&sample()).unwrap();
        assert_eq!(
            text,
            "Rental Record for David\n\
             \tLord of the Rings\t12.0\n\
             \tRembo\t2.0\n\
             Amount owed is 14.0\n\
             You earned 3 frequent renter points"
        );
    }

    #[test]
    fn test_json_formatter() {
        let text = Json.format(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["customer_name"], "David");
        assert_eq!(value["total_charge"], "14.0");
        assert_eq!(value["total_points"], 3);
        assert_eq!(value["lines"][0]["title"], "Lord of the Rings");
        assert_eq!(value["lines"][0]["category"], "new_release");
        assert_eq!(value["lines"][0]["charge"], "12.0");
        assert_eq!(value["lines"][1]["days_rented"], 1);
    }
}
