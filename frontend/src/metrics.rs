//! Derived financial values computed from lists already in memory.
//!
//! Everything here is a total function: absent collections count as empty
//! and arithmetic saturates instead of overflowing.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::{STOCK_LOW_THRESHOLD, STOCK_MEDIUM_THRESHOLD};
use crate::models::{Expense, Product, Sale, SaleLine, Trip};

/// A line that contributes `quantity * unit_price` to a sale total.
pub trait PricedLine {
    fn quantity(&self) -> i64;
    fn unit_price(&self) -> Decimal;

    /// Saturates at the `Decimal` bounds on overflow.
    fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity()).saturating_mul(self.unit_price())
    }
}

impl PricedLine for SaleLine {
    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn unit_price(&self) -> Decimal {
        self.unit_price
    }
}

pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn sale_price(purchase_price: Decimal, margin_pct: Decimal) -> Decimal {
    let factor = Decimal::ONE.saturating_add(margin_pct / Decimal::ONE_HUNDRED);
    purchase_price.saturating_mul(factor)
}

/// Sale price as shown and sent to the backend.
pub fn display_sale_price(purchase_price: Decimal, margin_pct: Decimal) -> Decimal {
    round_money(sale_price(purchase_price, margin_pct))
}

pub fn sale_total<'a, L, I>(items: I) -> Decimal
where
    L: PricedLine + 'a,
    I: IntoIterator<Item = &'a L>,
{
    items
        .into_iter()
        .fold(Decimal::ZERO, |acc, line| acc.saturating_add(line.line_total()))
}

pub fn expenses_total<'a, I>(expenses: I) -> Decimal
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses
        .into_iter()
        .fold(Decimal::ZERO, |acc, e| acc.saturating_add(e.amount))
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TripTotals {
    pub total_expenses: Decimal,
    pub total_sales: Decimal,
    pub profit: Decimal,
}

pub fn trip_totals(trip: &Trip) -> TripTotals {
    let total_expenses = expenses_total(trip.expenses.as_deref().unwrap_or_default());
    let total_sales = trip
        .sales
        .as_deref()
        .unwrap_or_default()
        .iter()
        .fold(Decimal::ZERO, |acc, sale: &Sale| acc.saturating_add(sale_total(sale.lines())));

    TripTotals {
        total_expenses,
        total_sales,
        profit: total_sales.saturating_sub(total_expenses),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProductValuation {
    pub product_id: i64,
    pub name: String,
    pub quantity: i64,
    pub value_at_cost: Decimal,
    pub value_at_sale: Decimal,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ValuationTotals {
    pub value_at_cost: Decimal,
    pub value_at_sale: Decimal,
    pub units: i64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InventoryValuation {
    pub per_product: Vec<ProductValuation>,
    pub totals: ValuationTotals,
}

pub fn inventory_valuation<'a, I>(products: I) -> InventoryValuation
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut valuation = InventoryValuation::default();
    for product in products {
        let quantity = Decimal::from(product.quantity);
        let line = ProductValuation {
            product_id: product.id,
            name: product.name.clone(),
            quantity: product.quantity,
            value_at_cost: product.purchase_price.saturating_mul(quantity),
            value_at_sale: product.sale_price.saturating_mul(quantity),
        };
        let totals = &mut valuation.totals;
        totals.value_at_cost = totals.value_at_cost.saturating_add(line.value_at_cost);
        totals.value_at_sale = totals.value_at_sale.saturating_add(line.value_at_sale);
        totals.units = totals.units.saturating_add(line.quantity);
        valuation.per_product.push(line);
    }
    valuation
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockLevel {
    Low,
    Medium,
    Healthy,
}

impl StockLevel {
    pub fn text_class(self) -> &'static str {
        match self {
            StockLevel::Low => "text-red-600 dark:text-red-400",
            StockLevel::Medium => "text-orange-600 dark:text-orange-400",
            StockLevel::Healthy => "text-green-600 dark:text-green-400",
        }
    }
}

pub fn stock_level(quantity: i64) -> StockLevel {
    if quantity < STOCK_LOW_THRESHOLD {
        StockLevel::Low
    } else if quantity < STOCK_MEDIUM_THRESHOLD {
        StockLevel::Medium
    } else {
        StockLevel::Healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductRef;
    use rust_decimal_macros::dec;

    fn line(quantity: i64, unit_price: Decimal) -> SaleLine {
        SaleLine {
            quantity,
            unit_price,
            product: Some(ProductRef {
                name: "Rosas".into(),
            }),
        }
    }

    fn trip(expenses: Option<Vec<Expense>>, sales: Option<Vec<Sale>>) -> Trip {
        Trip {
            id: 1,
            destination: "Curitiba".into(),
            driver: "João".into(),
            departure_date: "2024-05-10".into(),
            return_date: None,
            expenses,
            sales,
        }
    }

    fn product(id: i64, purchase: Decimal, sale: Decimal, quantity: i64) -> Product {
        Product {
            id,
            name: format!("p{id}"),
            category: String::new(),
            purchase_price: purchase,
            margin_pct: dec!(30),
            sale_price: sale,
            quantity,
        }
    }

    #[test]
    fn sale_price_applies_margin() {
        assert_eq!(sale_price(dec!(100), dec!(30)), dec!(130));
        assert_eq!(sale_price(dec!(0), dec!(50)), dec!(0));
        assert_eq!(sale_price(dec!(80), dec!(0)), dec!(80));
    }

    #[test]
    fn display_price_rounds_half_away_from_zero() {
        // 3.35 * 1.15 = 3.8525
        assert_eq!(display_sale_price(dec!(3.35), dec!(15)), dec!(3.85));
        // 0.5 * 1.01 = 0.505
        assert_eq!(display_sale_price(dec!(0.5), dec!(1)), dec!(0.51));
    }

    #[test]
    fn empty_sale_totals_zero() {
        let items: Vec<SaleLine> = Vec::new();
        assert_eq!(sale_total(&items), Decimal::ZERO);
    }

    #[test]
    fn sale_total_is_additive() {
        let a = vec![line(2, dec!(10.25)), line(1, dec!(3))];
        let b = vec![line(4, dec!(0.10))];
        let joined: Vec<SaleLine> = a.iter().chain(b.iter()).cloned().collect();
        assert_eq!(sale_total(&joined), sale_total(&a) + sale_total(&b));
        assert_eq!(sale_total(&joined), dec!(23.90));
    }

    #[test]
    fn trip_without_collections_totals_zero() {
        let totals = trip_totals(&trip(None, None));
        assert_eq!(totals, TripTotals::default());
    }

    #[test]
    fn trip_profit_subtracts_expenses() {
        let sale = Sale {
            id: 1,
            date: "2024-05-10".into(),
            trip_id: Some(1),
            trip: None,
            items: Some(vec![line(10, dec!(20))]),
        };
        let expenses = vec![Expense {
            kind: "Diesel".into(),
            amount: dec!(300),
        }];
        let totals = trip_totals(&trip(Some(expenses), Some(vec![sale])));
        assert_eq!(totals.total_expenses, dec!(300));
        assert_eq!(totals.total_sales, dec!(200));
        assert_eq!(totals.profit, dec!(-100));
    }

    #[test]
    fn sale_with_absent_items_counts_nothing() {
        let sale = Sale {
            id: 2,
            date: String::new(),
            trip_id: None,
            trip: None,
            items: None,
        };
        let totals = trip_totals(&trip(Some(Vec::new()), Some(vec![sale])));
        assert_eq!(totals.total_sales, Decimal::ZERO);
    }

    #[test]
    fn inventory_valuation_sums_cost_and_sale() {
        let products = vec![
            product(1, dec!(10), dec!(13), 5),
            product(2, dec!(2.5), dec!(4), 12),
        ];
        let valuation = inventory_valuation(&products);
        assert_eq!(valuation.per_product.len(), 2);
        assert_eq!(valuation.per_product[0].value_at_cost, dec!(50));
        assert_eq!(valuation.per_product[1].value_at_sale, dec!(48));
        assert_eq!(valuation.totals.value_at_cost, dec!(80));
        assert_eq!(valuation.totals.value_at_sale, dec!(113));
        assert_eq!(valuation.totals.units, 17);
    }

    #[test]
    fn stock_levels_follow_thresholds() {
        assert_eq!(stock_level(0), StockLevel::Low);
        assert_eq!(stock_level(9), StockLevel::Low);
        assert_eq!(stock_level(10), StockLevel::Medium);
        assert_eq!(stock_level(19), StockLevel::Medium);
        assert_eq!(stock_level(20), StockLevel::Healthy);
    }

    #[test]
    fn huge_lines_saturate() {
        let huge = line(i64::MAX, dec!(99999999999));
        assert_eq!(huge.line_total(), Decimal::MAX);
        assert_eq!(sale_total(&[huge.clone(), line(1, dec!(5))]), Decimal::MAX);

        let t = trip(
            Some(vec![Expense {
                kind: "Frete".into(),
                amount: dec!(10),
            }]),
            Some(vec![Sale {
                id: 1,
                date: String::new(),
                trip_id: None,
                trip: None,
                items: Some(vec![huge]),
            }]),
        );
        let totals = trip_totals(&t);
        assert_eq!(totals.total_sales, Decimal::MAX);
        assert_eq!(totals.profit, Decimal::MAX - dec!(10));
    }

    #[test]
    fn valuation_of_huge_stock_saturates() {
        let products = vec![
            product(1, dec!(99999999999), dec!(99999999999), i64::MAX),
            product(2, dec!(1), dec!(1), i64::MAX),
        ];
        let valuation = inventory_valuation(&products);
        assert_eq!(valuation.totals.value_at_sale, Decimal::MAX);
        assert_eq!(valuation.totals.units, i64::MAX);
    }
}
