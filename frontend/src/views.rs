use chrono::{DateTime, NaiveDate, Utc};

use crate::metrics::{trip_totals, TripTotals};
use crate::models::{Product, Sale, Trip};

/// Case-insensitive substring match; an empty (or blank) needle matches all.
pub fn matches_text(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Reduces a backend date or timestamp to `YYYY-MM-DD`.
///
/// RFC 3339 timestamps become their UTC calendar date. Anything that already
/// starts with a plain date keeps it; unparseable input falls back to its
/// first ten characters.
pub fn normalize_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.with_timezone(&Utc).date_naive().format("%Y-%m-%d").to_string();
    }
    let head: String = raw.chars().take(10).collect();
    match NaiveDate::parse_from_str(&head, "%Y-%m-%d") {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => head,
    }
}

/// The literal `YYYY-MM-DD` head of a trip date, ignoring any time or offset.
pub fn date_prefix(raw: &str) -> String {
    raw.trim().chars().take(10).collect()
}

fn matches_date(raw: &str, filter: &str) -> bool {
    let filter = filter.trim();
    filter.is_empty() || normalize_date(raw) == filter
}

pub fn filter_products<'a>(products: &'a [Product], name: &str, category: &str) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| matches_text(&p.name, name) && matches_text(&p.category, category))
        .collect()
}

pub fn filter_sales<'a>(sales: &'a [Sale], date: &str, destination: &str) -> Vec<&'a Sale> {
    sales
        .iter()
        .filter(|s| matches_date(&s.date, date) && matches_text(s.destination(), destination))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TripSort {
    Date,
    Destination,
    Profit,
}

impl TripSort {
    pub const ALL: [TripSort; 3] = [TripSort::Date, TripSort::Destination, TripSort::Profit];

    pub fn key(self) -> &'static str {
        match self {
            TripSort::Date => "data",
            TripSort::Destination => "destino",
            TripSort::Profit => "lucro",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TripSort::Date => "Data",
            TripSort::Destination => "Destino",
            TripSort::Profit => "Lucro",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// A trip with its derived totals, ready for the trips report.
#[derive(Clone, Debug, PartialEq)]
pub struct TripRow<'a> {
    pub trip: &'a Trip,
    pub date: String,
    pub totals: TripTotals,
}

pub fn trip_rows<'a>(trips: &'a [Trip], date: &str, destination: &str, sort: TripSort) -> Vec<TripRow<'a>> {
    let mut rows: Vec<TripRow<'a>> = trips
        .iter()
        .map(|trip| TripRow {
            trip,
            date: date_prefix(&trip.departure_date),
            totals: trip_totals(trip),
        })
        .filter(|row| {
            let date = date.trim();
            (date.is_empty() || row.date == date) && matches_text(&row.trip.destination, destination)
        })
        .collect();

    // sort_by is stable: equal keys keep their fetch order
    match sort {
        TripSort::Date => rows.sort_by(|a, b| a.date.cmp(&b.date)),
        TripSort::Destination => rows.sort_by(|a, b| a.trip.destination.cmp(&b.trip.destination)),
        TripSort::Profit => rows.sort_by(|a, b| b.totals.profit.cmp(&a.totals.profit)),
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ProductRef, SaleLine, TripRef};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn product(name: &str, category: &str) -> Product {
        Product {
            id: 0,
            name: name.into(),
            category: category.into(),
            purchase_price: Decimal::ZERO,
            margin_pct: Decimal::ZERO,
            sale_price: Decimal::ZERO,
            quantity: 0,
        }
    }

    fn trip(id: i64, destination: &str, date: &str, expense: Decimal) -> Trip {
        Trip {
            id,
            destination: destination.into(),
            driver: String::new(),
            departure_date: date.into(),
            return_date: None,
            expenses: Some(vec![Expense {
                kind: "Pedágio".into(),
                amount: expense,
            }]),
            sales: None,
        }
    }

    fn sale(date: &str, destination: Option<&str>) -> Sale {
        Sale {
            id: 1,
            date: date.into(),
            trip_id: None,
            trip: destination.map(|d| TripRef {
                destination: d.into(),
            }),
            items: Some(vec![SaleLine {
                quantity: 1,
                unit_price: dec!(5),
                product: Some(ProductRef { name: "x".into() }),
            }]),
        }
    }

    #[test]
    fn name_filter_is_case_insensitive() {
        let products = vec![product("Rosas", "Flores"), product("Tulipas", "Flores")];
        let found = filter_products(&products, "ros", "");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Rosas");
    }

    #[test]
    fn empty_filters_match_everything() {
        let products = vec![product("Rosas", "Flores"), product("Óleo 20W50", "Lubrificantes")];
        assert_eq!(filter_products(&products, "", "").len(), 2);
        assert_eq!(filter_products(&products, "", "LUBRI").len(), 1);
    }

    #[test]
    fn normalize_date_handles_timestamps_and_plain_dates() {
        assert_eq!(normalize_date("2024-05-10T15:30:00.000Z"), "2024-05-10");
        assert_eq!(normalize_date("2024-05-10T23:30:00-03:00"), "2024-05-11");
        assert_eq!(normalize_date("2024-05-10"), "2024-05-10");
        assert_eq!(normalize_date("2024-05-10 08:00:00"), "2024-05-10");
        assert_eq!(normalize_date("ontem"), "ontem");
    }

    #[test]
    fn sales_filter_by_date_and_destination() {
        let sales = vec![
            sale("2024-05-10T10:00:00Z", Some("Curitiba")),
            sale("2024-05-11T10:00:00Z", Some("Joinville")),
            sale("2024-05-10T12:00:00Z", None),
        ];
        assert_eq!(filter_sales(&sales, "2024-05-10", "").len(), 2);
        assert_eq!(filter_sales(&sales, "2024-05-10", "curi").len(), 1);
        assert_eq!(filter_sales(&sales, "", "").len(), 3);
    }

    #[test]
    fn trips_sort_by_profit_descending() {
        let trips = vec![
            trip(1, "A", "2024-05-01", dec!(100)),
            trip(2, "B", "2024-05-02", dec!(-500)),
            trip(3, "C", "2024-05-03", dec!(0)),
        ];
        let rows = trip_rows(&trips, "", "", TripSort::Profit);
        let profits: Vec<Decimal> = rows.iter().map(|r| r.totals.profit).collect();
        assert_eq!(profits, vec![dec!(500), dec!(0), dec!(-100)]);
    }

    #[test]
    fn trips_sort_by_date_and_destination() {
        let trips = vec![
            trip(1, "Lages", "2024-05-03T00:00:00Z", dec!(1)),
            trip(2, "Blumenau", "2024-05-01T00:00:00Z", dec!(1)),
            trip(3, "Curitiba", "2024-05-02T00:00:00Z", dec!(1)),
        ];
        let by_date: Vec<i64> = trip_rows(&trips, "", "", TripSort::Date).iter().map(|r| r.trip.id).collect();
        assert_eq!(by_date, vec![2, 3, 1]);
        let by_dest: Vec<i64> = trip_rows(&trips, "", "", TripSort::Destination)
            .iter()
            .map(|r| r.trip.id)
            .collect();
        assert_eq!(by_dest, vec![2, 3, 1]);
    }

    #[test]
    fn equal_sort_keys_keep_source_order() {
        let trips = vec![
            trip(1, "Lages", "2024-05-01", dec!(10)),
            trip(2, "Lages", "2024-05-01", dec!(10)),
        ];
        let ids: Vec<i64> = trip_rows(&trips, "", "", TripSort::Profit).iter().map(|r| r.trip.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(trips[0].id, 1);
    }

    #[test]
    fn trip_filters_combine() {
        let trips = vec![
            trip(1, "Lages", "2024-05-01T10:00:00Z", dec!(1)),
            trip(2, "Lages", "2024-05-02T10:00:00Z", dec!(1)),
            trip(3, "Blumenau", "2024-05-01T10:00:00Z", dec!(1)),
        ];
        let rows = trip_rows(&trips, "2024-05-01", "lag", TripSort::Date);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].trip.id, 1);
    }

    #[test]
    fn sort_keys_round_trip_from_select_values() {
        assert_eq!(TripSort::from_key("lucro"), Some(TripSort::Profit));
        assert_eq!(TripSort::from_key("nope"), None);
    }

    #[test]
    fn trip_dates_keep_their_local_calendar_day() {
        let trips = vec![trip(1, "Joinville", "2024-05-10T23:30:00-03:00", dec!(1))];
        let rows = trip_rows(&trips, "2024-05-10", "", TripSort::Date);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, "2024-05-10");
        assert!(trip_rows(&trips, "2024-05-11", "", TripSort::Date).is_empty());
    }
}
