//! Form state for the entry pages, kept free of any Yew types so the rules
//! can be checked without a browser.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::format::format_currency;
use crate::metrics::{display_sale_price, expenses_total, sale_total, PricedLine};
use crate::models::{Expense, NewExpense, NewProduct, NewSale, NewSaleItem, NewTrip, Product};

/// Parses a user-typed money value, accepting `,` as the decimal separator.
pub fn parse_money(raw: &str) -> Option<Decimal> {
    let cleaned = raw.trim().replace(',', ".");
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

pub fn parse_quantity(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

pub fn parse_id(raw: &str) -> Option<i64> {
    parse_quantity(raw)
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub purchase_price: String,
    pub margin_pct: String,
    pub quantity: String,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            purchase_price: "0".to_string(),
            margin_pct: crate::config::DEFAULT_MARGIN_PCT.to_string(),
            quantity: "1".to_string(),
        }
    }
}

impl ProductDraft {
    /// Live preview shown under the price fields; blank or bad input counts as zero.
    pub fn preview_sale_price(&self) -> Decimal {
        let purchase = parse_money(&self.purchase_price).unwrap_or_default();
        let margin = parse_money(&self.margin_pct).unwrap_or_default();
        display_sale_price(purchase, margin)
    }

    pub fn build(&self) -> Result<NewProduct, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField("nome"));
        }
        let purchase_price = parse_money(&self.purchase_price)
            .filter(|v| !v.is_sign_negative())
            .ok_or(ValidationError::InvalidNumber("preço de compra"))?;
        let margin_pct = parse_money(&self.margin_pct)
            .filter(|v| !v.is_sign_negative())
            .ok_or(ValidationError::InvalidNumber("margem de lucro"))?;
        let quantity = parse_quantity(&self.quantity)
            .filter(|q| *q >= 0)
            .ok_or(ValidationError::InvalidNumber("quantidade"))?;

        Ok(NewProduct {
            name: name.to_string(),
            category: self.category.trim().to_string(),
            purchase_price,
            margin_pct,
            sale_price: display_sale_price(purchase_price, margin_pct),
            quantity,
        })
    }
}

/// Result of validating a stock entry: which product gets which new quantity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StockEntry {
    pub product_id: i64,
    pub product_name: String,
    pub added: i64,
    pub new_quantity: i64,
}

pub fn plan_stock_entry(
    products: &[Product],
    selected: Option<i64>,
    entered: Option<i64>,
) -> Result<StockEntry, ValidationError> {
    let (product_id, added) = match (selected, entered) {
        (Some(id), Some(qty)) if qty > 0 => (id, qty),
        _ => return Err(ValidationError::InvalidStockEntry),
    };
    let product = products
        .iter()
        .find(|p| p.id == product_id)
        .ok_or(ValidationError::ProductNotFound)?;

    Ok(StockEntry {
        product_id,
        product_name: product.name.clone(),
        added,
        new_quantity: product
            .quantity
            .checked_add(added)
            .ok_or(ValidationError::InvalidStockEntry)?,
    })
}

/// One line of a sale being assembled.
#[derive(Clone, Debug, PartialEq)]
pub struct SaleItem {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub original_product_price: Decimal,
}

impl SaleItem {
    pub fn is_price_overridden(&self) -> bool {
        self.unit_price != self.original_product_price
    }

    /// "(Padrão: R$ X)" for a line whose price was typed in by hand.
    pub fn default_price_note(&self) -> Option<String> {
        self.is_price_overridden()
            .then(|| format!("(Padrão: {})", format_currency(self.original_product_price)))
    }
}

impl PricedLine for SaleItem {
    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn unit_price(&self) -> Decimal {
        self.unit_price
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SaleDraft {
    pub items: Vec<SaleItem>,
}

impl SaleDraft {
    /// Adds `quantity` of `product`. A blank `manual_price` uses the product's
    /// sale price. Adding a product already in the draft only bumps its quantity.
    pub fn add_item(
        &mut self,
        product: Option<&Product>,
        quantity: Option<i64>,
        manual_price: &str,
    ) -> Result<(), ValidationError> {
        let (product, quantity) = match (product, quantity) {
            (Some(p), Some(q)) if q > 0 => (p, q),
            _ => return Err(ValidationError::InvalidSaleItem),
        };

        let unit_price = if manual_price.trim().is_empty() {
            product.sale_price
        } else {
            parse_money(manual_price)
                .filter(|v| !v.is_sign_negative())
                .ok_or(ValidationError::InvalidManualPrice)?
        };

        match self.items.iter_mut().find(|i| i.product_id == product.id) {
            Some(existing) => {
                existing.quantity = existing
                    .quantity
                    .checked_add(quantity)
                    .ok_or(ValidationError::InvalidSaleItem)?;
            }
            None => self.items.push(SaleItem {
                product_id: product.id,
                product_name: product.name.clone(),
                quantity,
                unit_price,
                original_product_price: product.sale_price,
            }),
        }
        Ok(())
    }

    pub fn remove_item(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn total(&self) -> Decimal {
        sale_total(&self.items)
    }

    pub fn build(&self, trip_id: Option<i64>) -> Result<NewSale, ValidationError> {
        let trip_id = trip_id.ok_or(ValidationError::MissingTrip)?;
        if self.items.is_empty() {
            return Err(ValidationError::EmptySale);
        }
        Ok(NewSale {
            trip_id,
            items: self
                .items
                .iter()
                .map(|i| NewSaleItem {
                    product_id: i.product_id,
                    quantity: i.quantity,
                    unit_price: i.unit_price,
                })
                .collect(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TripDraft {
    pub departure_date: String,
    pub return_date: String,
    pub destination: String,
    pub driver: String,
    pub expenses: Vec<Expense>,
}

impl TripDraft {
    pub fn add_expense(&mut self, kind: &str, amount: &str) -> Result<(), ValidationError> {
        let kind = kind.trim();
        let amount = parse_money(amount).filter(|v| *v > Decimal::ZERO);
        match amount {
            Some(amount) if !kind.is_empty() => {
                self.expenses.push(Expense {
                    kind: kind.to_string(),
                    amount,
                });
                Ok(())
            }
            _ => Err(ValidationError::InvalidExpense),
        }
    }

    pub fn remove_expense(&mut self, index: usize) {
        if index < self.expenses.len() {
            self.expenses.remove(index);
        }
    }

    pub fn total_expenses(&self) -> Decimal {
        expenses_total(&self.expenses)
    }

    pub fn build(&self) -> Result<NewTrip, ValidationError> {
        if self.departure_date.trim().is_empty() {
            return Err(ValidationError::MissingField("data de saída"));
        }
        if self.destination.trim().is_empty() {
            return Err(ValidationError::MissingField("destino"));
        }
        let return_date = Some(self.return_date.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Ok(NewTrip {
            destination: self.destination.trim().to_string(),
            driver: self.driver.trim().to_string(),
            departure_date: self.departure_date.trim().to_string(),
            return_date,
        })
    }

    /// Expense payloads for a trip the backend has just created.
    pub fn expenses_for(&self, trip_id: i64) -> Vec<NewExpense> {
        self.expenses
            .iter()
            .map(|e| NewExpense {
                trip_id,
                kind: e.kind.clone(),
                amount: e.amount,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(id: i64, name: &str, sale_price: Decimal, quantity: i64) -> Product {
        Product {
            id,
            name: name.into(),
            category: "Flores".into(),
            purchase_price: dec!(1),
            margin_pct: dec!(30),
            sale_price,
            quantity,
        }
    }

    #[test]
    fn money_accepts_comma_separator() {
        assert_eq!(parse_money("12,50"), Some(dec!(12.50)));
        assert_eq!(parse_money(" 7.1 "), Some(dec!(7.1)));
        assert_eq!(parse_money("abc"), None);
        assert_eq!(parse_money(""), None);
    }

    #[test]
    fn stock_entry_adds_to_current_quantity() {
        let products = vec![product(4, "Rosas", dec!(3), 12)];
        let entry = plan_stock_entry(&products, Some(4), Some(5)).unwrap();
        assert_eq!(entry.new_quantity, 17);
        assert_eq!(entry.added, 5);
        assert_eq!(entry.product_name, "Rosas");
    }

    #[test]
    fn stock_entry_rejects_non_positive_or_missing_input() {
        let products = vec![product(4, "Rosas", dec!(3), 12)];
        assert_eq!(
            plan_stock_entry(&products, Some(4), Some(0)),
            Err(ValidationError::InvalidStockEntry)
        );
        assert_eq!(
            plan_stock_entry(&products, Some(4), Some(-3)),
            Err(ValidationError::InvalidStockEntry)
        );
        assert_eq!(
            plan_stock_entry(&products, None, Some(3)),
            Err(ValidationError::InvalidStockEntry)
        );
        assert_eq!(
            plan_stock_entry(&products, Some(99), Some(3)),
            Err(ValidationError::ProductNotFound)
        );
    }

    #[test]
    fn stock_entry_rejects_quantity_that_would_overflow() {
        let products = vec![product(1, "Rosas", dec!(3), 12)];
        assert_eq!(
            plan_stock_entry(&products, Some(1), parse_quantity("9223372036854775807")),
            Err(ValidationError::InvalidStockEntry)
        );
    }

    #[test]
    fn sale_merge_rejects_overflowing_quantity() {
        let rosas = product(1, "Rosas", dec!(13), 10);
        let mut draft = SaleDraft::default();
        draft.add_item(Some(&rosas), Some(i64::MAX), "99999999999").unwrap();
        assert_eq!(draft.total(), Decimal::MAX);

        assert_eq!(
            draft.add_item(Some(&rosas), Some(1), ""),
            Err(ValidationError::InvalidSaleItem)
        );
        assert_eq!(draft.items[0].quantity, i64::MAX);
    }

    #[test]
    fn sale_item_defaults_to_product_price() {
        let rosas = product(1, "Rosas", dec!(13), 10);
        let mut draft = SaleDraft::default();
        draft.add_item(Some(&rosas), Some(2), "").unwrap();
        assert_eq!(draft.items[0].unit_price, dec!(13));
        assert!(!draft.items[0].is_price_overridden());
        assert_eq!(draft.items[0].default_price_note(), None);
        assert_eq!(draft.total(), dec!(26));
    }

    #[test]
    fn manual_price_overrides_and_is_validated() {
        let rosas = product(1, "Rosas", dec!(13), 10);
        let mut draft = SaleDraft::default();
        draft.add_item(Some(&rosas), Some(1), "12,50").unwrap();
        assert_eq!(draft.items[0].unit_price, dec!(12.50));
        assert!(draft.items[0].is_price_overridden());
        assert_eq!(
            draft.items[0].default_price_note().as_deref(),
            Some("(Padrão: R$ 13,00)")
        );

        assert_eq!(
            draft.add_item(Some(&rosas), Some(1), "-1"),
            Err(ValidationError::InvalidManualPrice)
        );
        assert_eq!(
            draft.add_item(Some(&rosas), Some(1), "abc"),
            Err(ValidationError::InvalidManualPrice)
        );
        assert_eq!(draft.items[0].quantity, 1);
    }

    #[test]
    fn repeated_product_merges_quantity() {
        let rosas = product(1, "Rosas", dec!(13), 10);
        let mut draft = SaleDraft::default();
        draft.add_item(Some(&rosas), Some(2), "").unwrap();
        draft.add_item(Some(&rosas), Some(3), "").unwrap();
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.items[0].quantity, 5);
    }

    #[test]
    fn sale_item_needs_product_and_positive_quantity() {
        let rosas = product(1, "Rosas", dec!(13), 10);
        let mut draft = SaleDraft::default();
        assert_eq!(draft.add_item(None, Some(1), ""), Err(ValidationError::InvalidSaleItem));
        assert_eq!(draft.add_item(Some(&rosas), Some(0), ""), Err(ValidationError::InvalidSaleItem));
        assert!(draft.items.is_empty());
    }

    #[test]
    fn sale_build_requires_trip_and_items() {
        let rosas = product(1, "Rosas", dec!(13), 10);
        let mut draft = SaleDraft::default();
        assert_eq!(draft.build(Some(1)), Err(ValidationError::EmptySale));
        draft.add_item(Some(&rosas), Some(2), "").unwrap();
        assert_eq!(draft.build(None), Err(ValidationError::MissingTrip));

        let sale = draft.build(Some(8)).unwrap();
        assert_eq!(sale.trip_id, 8);
        assert_eq!(sale.items[0].product_id, 1);
        assert_eq!(sale.items[0].unit_price, dec!(13));

        draft.remove_item(0);
        draft.remove_item(5);
        assert!(draft.items.is_empty());
    }

    #[test]
    fn product_draft_rounds_sale_price() {
        let draft = ProductDraft {
            name: "Óleo 20W50".into(),
            category: "Lubrificantes".into(),
            purchase_price: "10,01".into(),
            margin_pct: "33".into(),
            quantity: "4".into(),
        };
        // 10.01 * 1.33 = 13.3133
        assert_eq!(draft.preview_sale_price(), dec!(13.31));
        let product = draft.build().unwrap();
        assert_eq!(product.sale_price, dec!(13.31));
        assert_eq!(product.quantity, 4);
    }

    #[test]
    fn product_draft_rejects_blank_name_and_negative_values() {
        let mut draft = ProductDraft::default();
        assert_eq!(draft.build(), Err(ValidationError::MissingField("nome")));
        draft.name = "Rosas".into();
        draft.quantity = "-1".into();
        assert_eq!(draft.build(), Err(ValidationError::InvalidNumber("quantidade")));
        draft.quantity = "0".into();
        assert!(draft.build().is_ok());
    }

    #[test]
    fn default_product_draft_uses_thirty_percent_margin() {
        let draft = ProductDraft {
            purchase_price: "100".into(),
            ..ProductDraft::default()
        };
        assert_eq!(draft.preview_sale_price(), dec!(130));
    }

    #[test]
    fn trip_expenses_accumulate() {
        let mut draft = TripDraft::default();
        draft.add_expense("Diesel", "250,00").unwrap();
        draft.add_expense("Pedágio", "50").unwrap();
        assert_eq!(draft.add_expense("", "10"), Err(ValidationError::InvalidExpense));
        assert_eq!(draft.add_expense("Lanche", "0"), Err(ValidationError::InvalidExpense));
        assert_eq!(draft.total_expenses(), dec!(300));

        draft.remove_expense(1);
        assert_eq!(draft.total_expenses(), dec!(250));

        let payloads = draft.expenses_for(42);
        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0].trip_id, 42);
        assert_eq!(payloads[0].kind, "Diesel");
    }

    #[test]
    fn trip_build_requires_date_and_destination() {
        let mut draft = TripDraft::default();
        assert_eq!(draft.build(), Err(ValidationError::MissingField("data de saída")));
        draft.departure_date = "2024-06-01".into();
        assert_eq!(draft.build(), Err(ValidationError::MissingField("destino")));
        draft.destination = " Lages ".into();
        let trip = draft.build().unwrap();
        assert_eq!(trip.destination, "Lages");
        assert_eq!(trip.return_date, None);
    }
}
