use futures::future::join_all;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::api_url;
use crate::error::ApiError;
use crate::models::{
    CreatedTrip, Credentials, DashboardSummary, ErrorBody, InventoryReport, LoginResponse,
    MonthlyClosingReport, MonthlyClosingResponse, NewExpense, NewProduct, NewSale, NewTrip,
    Product, QuantityUpdate, Sale, Trip,
};
use crate::session::Session;

/// The one way pages talk to the backend. Attaches the bearer token when a
/// session exists and turns every outcome into `Result<T, ApiError>`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiClient {
    token: Option<String>,
}

impl ApiClient {
    pub fn new(session: &Session) -> Self {
        Self {
            token: session.token.clone(),
        }
    }

    fn builder(&self, method: fn(&str) -> RequestBuilder, path: &str) -> RequestBuilder {
        let url = api_url(path);
        let builder = method(&url);
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn execute(&self, path: &str, request: Request) -> Result<Response, ApiError> {
        debug!(path, "sending request");
        let resp = request.send().await.map_err(|err| {
            warn!(path, error = %err, "request failed before reaching the server");
            ApiError::from(err)
        })?;
        if resp.ok() {
            return Ok(resp);
        }

        let status = resp.status();
        let message = resp.json::<ErrorBody>().await.ok().and_then(|body| body.message);
        warn!(path, status, ?message, "server rejected request");
        Err(ApiError::Http { status, message })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.builder(Request::get, path).build()?;
        let resp = self.execute(path, request).await?;
        Ok(resp.json::<T>().await?)
    }

    async fn send<B: Serialize>(
        &self,
        method: fn(&str) -> RequestBuilder,
        path: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        let request = self
            .builder(method, path)
            .json(body)
            .map_err(|err| ApiError::Encode(err.to_string()))?;
        self.execute(path, request).await
    }

    async fn send_for<B: Serialize, T: DeserializeOwned>(
        &self,
        method: fn(&str) -> RequestBuilder,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self.send(method, path, body).await?;
        Ok(resp.json::<T>().await?)
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.send_for(Request::post, "/usuarios/login", credentials).await
    }

    pub async fn dashboard(&self) -> Result<DashboardSummary, ApiError> {
        self.get("/dashboard").await
    }

    pub async fn close_month(&self) -> Result<MonthlyClosingReport, ApiError> {
        let request = self.builder(Request::post, "/fechar-mes").build()?;
        let resp = self.execute("/fechar-mes", request).await?;
        let body = resp.json::<MonthlyClosingResponse>().await?;
        Ok(body.report)
    }

    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        self.get("/produtos").await
    }

    pub async fn create_product(&self, product: &NewProduct) -> Result<(), ApiError> {
        self.send(Request::post, "/produtos", product).await.map(|_| ())
    }

    pub async fn update_product_quantity(&self, product_id: i64, quantity: i64) -> Result<(), ApiError> {
        let path = format!("/produtos/{}", product_id);
        self.send(Request::patch, &path, &QuantityUpdate { quantity })
            .await
            .map(|_| ())
    }

    pub async fn inventory_report(&self) -> Result<InventoryReport, ApiError> {
        self.get("/produtos/relatorio-inventario").await
    }

    pub async fn trips(&self) -> Result<Vec<Trip>, ApiError> {
        self.get("/viagens").await
    }

    pub async fn create_trip(&self, trip: &NewTrip) -> Result<CreatedTrip, ApiError> {
        self.send_for(Request::post, "/viagens", trip).await
    }

    pub async fn create_expense(&self, expense: &NewExpense) -> Result<(), ApiError> {
        self.send(Request::post, "/despesas", expense).await.map(|_| ())
    }

    /// Creates the trip, then posts every expense for it concurrently.
    /// Only the trip itself failing is an error; failed expenses are counted.
    pub async fn create_trip_with_expenses<F>(
        &self,
        trip: &NewTrip,
        expenses_for: F,
    ) -> Result<TripSaveOutcome, ApiError>
    where
        F: FnOnce(i64) -> Vec<NewExpense>,
    {
        let created = self.create_trip(trip).await?;
        let expenses = expenses_for(created.id);
        let results = join_all(expenses.iter().map(|e| self.create_expense(e))).await;
        let failed_expenses = results.iter().filter(|r| r.is_err()).count();
        if failed_expenses > 0 {
            warn!(trip_id = created.id, failed_expenses, "some trip expenses were not saved");
        }

        Ok(TripSaveOutcome {
            trip_id: created.id,
            total_expenses: expenses.len(),
            failed_expenses,
        })
    }

    pub async fn sales(&self) -> Result<Vec<Sale>, ApiError> {
        self.get("/vendas").await
    }

    pub async fn create_sale(&self, sale: &NewSale) -> Result<(), ApiError> {
        self.send(Request::post, "/vendas", sale).await.map(|_| ())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TripSaveOutcome {
    pub trip_id: i64,
    pub total_expenses: usize,
    pub failed_expenses: usize,
}

impl TripSaveOutcome {
    pub fn is_partial(&self) -> bool {
        self.failed_expenses > 0
    }

    pub fn message(&self) -> String {
        if self.is_partial() {
            format!(
                "Viagem #{} registrada, mas {} de {} despesa(s) não foram salvas.",
                self.trip_id, self.failed_expenses, self.total_expenses
            )
        } else {
            format!("Viagem #{} registrada com sucesso!", self.trip_id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_carries_session_token() {
        let session = Session::new("abc".into(), Some("Ana".into()));
        assert_eq!(ApiClient::new(&session).token.as_deref(), Some("abc"));
        assert_eq!(ApiClient::new(&Session::default()).token, None);
    }

    #[test]
    fn partial_trip_save_names_failure_count() {
        let outcome = TripSaveOutcome {
            trip_id: 12,
            total_expenses: 3,
            failed_expenses: 2,
        };
        assert!(outcome.is_partial());
        assert_eq!(
            outcome.message(),
            "Viagem #12 registrada, mas 2 de 3 despesa(s) não foram salvas."
        );
    }

    #[test]
    fn full_trip_save_reports_success() {
        let outcome = TripSaveOutcome {
            trip_id: 5,
            total_expenses: 0,
            failed_expenses: 0,
        };
        assert!(!outcome.is_partial());
        assert_eq!(outcome.message(), "Viagem #5 registrada com sucesso!");
    }
}
