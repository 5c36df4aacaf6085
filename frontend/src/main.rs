mod api;
mod closing;
mod components;
mod config;
mod error;
mod format;
mod forms;
mod hooks;
mod metrics;
mod models;
mod pages;
mod session;
mod views;

use tracing::info;
use yew::prelude::*;

use components::Layout;
use pages::{
    DashboardPage, InventoryReportPage, LoginPage, NewProductPage, NewSalePage, NewTripPage,
    SalesReportPage, StockEntryPage, StockPage, TripsReportPage,
};
use session::Session;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Page {
    Dashboard,
    NewSale,
    NewProduct,
    NewTrip,
    Stock,
    StockEntry,
    InventoryReport,
    SalesReport,
    TripsReport,
}

#[function_component(App)]
fn app() -> Html {
    let session = use_state(Session::load);
    let active_page = use_state(|| Page::Dashboard);

    let on_select = {
        let active_page = active_page.clone();
        Callback::from(move |page: Page| {
            info!(?page, "navigating");
            active_page.set(page)
        })
    };

    if !session.is_authenticated() {
        let on_authenticated = {
            let session = session.clone();
            let active_page = active_page.clone();
            Callback::from(move |next: Session| {
                active_page.set(Page::Dashboard);
                session.set(next);
            })
        };
        return html! { <LoginPage {on_authenticated} /> };
    }

    let content = match *active_page {
        Page::Dashboard => html! { <DashboardPage on_navigate={on_select.clone()} /> },
        Page::NewSale => html! { <NewSalePage /> },
        Page::NewProduct => html! { <NewProductPage /> },
        Page::NewTrip => html! { <NewTripPage /> },
        Page::Stock => html! { <StockPage /> },
        Page::StockEntry => html! { <StockEntryPage /> },
        Page::InventoryReport => html! { <InventoryReportPage /> },
        Page::SalesReport => html! { <SalesReportPage /> },
        Page::TripsReport => html! { <TripsReportPage /> },
    };

    html! {
        <ContextProvider<UseStateHandle<Session>> context={session.clone()}>
            <Layout active_page={*active_page} {on_select}>
                { content }
            </Layout>
        </ContextProvider<UseStateHandle<Session>>>
    }
}

fn main() {
    tracing_wasm::set_as_global_default();
    yew::Renderer::<App>::new().render();
}
