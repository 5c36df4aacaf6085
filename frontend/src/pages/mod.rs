mod dashboard;
mod inventory_report;
mod login;
mod new_product;
mod new_sale;
mod new_trip;
mod sales_report;
mod stock;
mod stock_entry;
mod trips_report;

pub use dashboard::DashboardPage;
pub use inventory_report::InventoryReportPage;
pub use login::LoginPage;
pub use new_product::NewProductPage;
pub use new_sale::NewSalePage;
pub use new_trip::NewTripPage;
pub use sales_report::SalesReportPage;
pub use stock::StockPage;
pub use stock_entry::StockEntryPage;
pub use trips_report::TripsReportPage;
