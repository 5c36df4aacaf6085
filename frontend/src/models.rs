use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Product {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "categoria", default)]
    pub category: String,
    #[serde(rename = "precoCompra", default)]
    pub purchase_price: Decimal,
    #[serde(rename = "margemLucro", default)]
    pub margin_pct: Decimal,
    #[serde(rename = "precoVenda", default)]
    pub sale_price: Decimal,
    #[serde(rename = "quantidade", default)]
    pub quantity: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewProduct {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "precoCompra")]
    pub purchase_price: Decimal,
    #[serde(rename = "margemLucro")]
    pub margin_pct: Decimal,
    #[serde(rename = "precoVenda")]
    pub sale_price: Decimal,
    #[serde(rename = "quantidade")]
    pub quantity: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuantityUpdate {
    #[serde(rename = "quantidade")]
    pub quantity: i64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Expense {
    #[serde(rename = "tipo", default)]
    pub kind: String,
    #[serde(rename = "valor")]
    pub amount: Decimal,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewExpense {
    #[serde(rename = "viagemId")]
    pub trip_id: i64,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "valor")]
    pub amount: Decimal,
}

/// Product reference embedded in a sale line.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ProductRef {
    #[serde(rename = "nome")]
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SaleLine {
    #[serde(rename = "quantidade")]
    pub quantity: i64,
    #[serde(rename = "precoUnit")]
    pub unit_price: Decimal,
    #[serde(rename = "produto", default)]
    pub product: Option<ProductRef>,
}

impl SaleLine {
    pub fn product_name(&self) -> &str {
        self.product.as_ref().map(|p| p.name.as_str()).unwrap_or("—")
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TripRef {
    #[serde(rename = "destino")]
    pub destination: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Sale {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "data", default)]
    pub date: String,
    #[serde(rename = "viagemId", default)]
    pub trip_id: Option<i64>,
    #[serde(rename = "viagem", default)]
    pub trip: Option<TripRef>,
    #[serde(rename = "itens", default)]
    pub items: Option<Vec<SaleLine>>,
}

impl Sale {
    pub fn destination(&self) -> &str {
        self.trip.as_ref().map(|t| t.destination.as_str()).unwrap_or("")
    }

    pub fn lines(&self) -> &[SaleLine] {
        self.items.as_deref().unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewSaleItem {
    #[serde(rename = "produtoId")]
    pub product_id: i64,
    #[serde(rename = "quantidade")]
    pub quantity: i64,
    #[serde(rename = "precoUnitario")]
    pub unit_price: Decimal,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewSale {
    #[serde(rename = "viagemId")]
    pub trip_id: i64,
    #[serde(rename = "itens")]
    pub items: Vec<NewSaleItem>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Trip {
    pub id: i64,
    #[serde(rename = "destino", default)]
    pub destination: String,
    #[serde(rename = "motorista", default)]
    pub driver: String,
    #[serde(rename = "dataSaida", default)]
    pub departure_date: String,
    #[serde(rename = "dataRetorno", default)]
    pub return_date: Option<String>,
    #[serde(rename = "despesas", default)]
    pub expenses: Option<Vec<Expense>>,
    #[serde(rename = "vendas", default)]
    pub sales: Option<Vec<Sale>>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewTrip {
    #[serde(rename = "destino")]
    pub destination: String,
    #[serde(rename = "motorista")]
    pub driver: String,
    #[serde(rename = "dataSaida")]
    pub departure_date: String,
    #[serde(rename = "dataRetorno", skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CreatedTrip {
    pub id: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "nomeUsuario", default)]
    pub user_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TopProduct {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "quantidade")]
    pub quantity: i64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MostProfitableTrip {
    #[serde(rename = "viagemId")]
    pub trip_id: i64,
    #[serde(rename = "receita")]
    pub revenue: Decimal,
}

#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
pub struct DashboardSummary {
    #[serde(rename = "totalVendas", default)]
    pub total_sales: Decimal,
    #[serde(rename = "totalLucro", default)]
    pub total_profit: Decimal,
    #[serde(rename = "totalDespesas", default)]
    pub total_expenses: Decimal,
    #[serde(rename = "lucroLiquido", default)]
    pub net_profit: Decimal,
    #[serde(rename = "topProdutosMaisVendidos", default)]
    pub top_products: Vec<TopProduct>,
    #[serde(rename = "viagemMaisRentavel", default)]
    pub most_profitable_trip: Option<MostProfitableTrip>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MonthlyClosingReport {
    #[serde(rename = "dataFechamento")]
    pub closing_date: String,
    #[serde(rename = "totalVendas")]
    pub total_sales: Decimal,
    #[serde(rename = "lucroBruto")]
    pub gross_profit: Decimal,
    #[serde(rename = "totalDespesasOperacionais")]
    pub total_operating_expenses: Decimal,
    #[serde(rename = "custoMercadoriaVendida")]
    pub cost_of_goods_sold: Decimal,
    #[serde(rename = "lucroLiquidoMensal")]
    pub net_profit: Decimal,
    #[serde(rename = "viagensRealizadas")]
    pub trips_completed: i64,
    #[serde(rename = "vendasRealizadas")]
    pub sales_completed: i64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MonthlyClosingResponse {
    #[serde(rename = "relatorio")]
    pub report: MonthlyClosingReport,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct InventoryReportLine {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "quantidadeAtual")]
    pub quantity: i64,
    #[serde(rename = "precoCompra")]
    pub purchase_price: Decimal,
    #[serde(rename = "precoVenda")]
    pub sale_price: Decimal,
    #[serde(rename = "valorTotalEmEstoqueCompra")]
    pub value_at_cost: Decimal,
    #[serde(rename = "valorTotalEmEstoqueVendaPotencial")]
    pub value_at_sale: Decimal,
}

#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
pub struct InventoryReportTotals {
    #[serde(rename = "totalGeralValorCompra", default)]
    pub value_at_cost: Decimal,
    #[serde(rename = "totalGeralValorVendaPotencial", default)]
    pub value_at_sale: Decimal,
    #[serde(rename = "totalItensEmEstoque", default)]
    pub units: i64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct InventoryReport {
    #[serde(rename = "produtos", default)]
    pub products: Vec<InventoryReportLine>,
    #[serde(rename = "totais", default)]
    pub totals: InventoryReportTotals,
}

/// Error body the backend sends with non-2xx responses.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn trip_without_expenses_or_sales_decodes() {
        let trip: Trip = serde_json::from_str(
            r#"{"id":7,"destino":"Curitiba","motorista":"Zé","dataSaida":"2024-05-10T00:00:00.000Z","despesas":null}"#,
        )
        .unwrap();
        assert_eq!(trip.destination, "Curitiba");
        assert!(trip.expenses.is_none());
        assert!(trip.sales.is_none());
    }

    #[test]
    fn sale_report_shape_decodes() {
        let sale: Sale = serde_json::from_str(
            r#"{"id":1,"data":"2024-05-10","viagem":{"destino":"Joinville"},
                "itens":[{"quantidade":2,"precoUnit":12.5,"produto":{"nome":"Rosas"}}]}"#,
        )
        .unwrap();
        assert_eq!(sale.destination(), "Joinville");
        assert_eq!(sale.lines()[0].unit_price, dec!(12.5));
        assert_eq!(sale.lines()[0].product_name(), "Rosas");
    }

    #[test]
    fn new_sale_uses_backend_field_names() {
        let sale = NewSale {
            trip_id: 3,
            items: vec![NewSaleItem {
                product_id: 9,
                quantity: 2,
                unit_price: dec!(10.5),
            }],
        };
        let json = serde_json::to_value(&sale).unwrap();
        assert_eq!(json["viagemId"], 3);
        assert_eq!(json["itens"][0]["produtoId"], 9);
        assert_eq!(json["itens"][0]["precoUnitario"], 10.5);
    }

    #[test]
    fn new_trip_omits_missing_return_date() {
        let trip = NewTrip {
            destination: "Lages".into(),
            driver: "Ana".into(),
            departure_date: "2024-06-01".into(),
            return_date: None,
        };
        let json = serde_json::to_value(&trip).unwrap();
        assert!(json.get("dataRetorno").is_none());
        assert_eq!(json["dataSaida"], "2024-06-01");
    }

    #[test]
    fn closing_response_unwraps_report() {
        let body = r#"{"relatorio":{"dataFechamento":"2024-05-31T23:00:00Z","totalVendas":1000,
            "lucroBruto":400,"totalDespesasOperacionais":150,"custoMercadoriaVendida":600,
            "lucroLiquidoMensal":250,"viagensRealizadas":4,"vendasRealizadas":12}}"#;
        let resp: MonthlyClosingResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.report.net_profit, dec!(250));
        assert_eq!(resp.report.trips_completed, 4);
    }

    #[test]
    fn dashboard_summary_reads_gross_and_net_profit() {
        let body = r#"{"totalVendas":1500.5,"totalLucro":420,"totalDespesas":300,
            "lucroLiquido":120,"topProdutosMaisVendidos":[{"nome":"Rosas","quantidade":7}],
            "viagemMaisRentavel":{"viagemId":3,"receita":900}}"#;
        let summary: DashboardSummary = serde_json::from_str(body).unwrap();
        assert_eq!(summary.total_profit, dec!(420));
        assert_eq!(summary.net_profit, dec!(120));
        assert_eq!(summary.top_products[0].quantity, 7);
        assert_eq!(summary.most_profitable_trip.map(|t| t.trip_id), Some(3));
    }
}
