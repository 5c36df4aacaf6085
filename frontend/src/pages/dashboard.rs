use rust_decimal::Decimal;
use tracing::{error, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::closing::{ClosingEvent, ClosingState};
use crate::components::icons::*;
use crate::components::{page_shell, StatCard, Tone};
use crate::config::TOP_PRODUCTS_LIMIT;
use crate::format::{format_currency, format_date};
use crate::hooks::{use_api, use_logout};
use crate::models::{DashboardSummary, MonthlyClosingReport};
use crate::Page;

async fn load_summary(
    api: ApiClient,
    summary: UseStateHandle<Option<DashboardSummary>>,
    error_message: UseStateHandle<Option<String>>,
    logout: Callback<()>,
) {
    match api.dashboard().await {
        Ok(data) => summary.set(Some(data)),
        Err(err) if err.is_unauthorized() => {
            info!("dashboard rejected the token, ending session");
            logout.emit(());
        }
        Err(err) => {
            error!(error = %err, "failed to load dashboard");
            error_message.set(Some(format!(
                "Erro ao carregar os dados do dashboard: {}",
                err.describe()
            )));
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let api = use_api();
    let logout = use_logout();
    let summary = use_state(|| None::<DashboardSummary>);
    let error_message = use_state(|| None::<String>);
    let closing = use_state(ClosingState::default);
    let report = use_state(|| None::<MonthlyClosingReport>);

    {
        let api = api.clone();
        let summary = summary.clone();
        let error_message = error_message.clone();
        let logout = logout.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(load_summary(api, summary, error_message, logout));
                || ()
            },
            (),
        );
    }

    let transition = {
        let closing = closing.clone();
        move |event: ClosingEvent| {
            let closing = closing.clone();
            Callback::from(move |_: MouseEvent| closing.set(closing.next(event)))
        }
    };
    let on_request_close = transition(ClosingEvent::Request);
    let on_cancel_close = transition(ClosingEvent::Cancel);

    let on_confirm_close = {
        let api = api.clone();
        let closing = closing.clone();
        let report = report.clone();
        let summary = summary.clone();
        let error_message = error_message.clone();
        let logout = logout.clone();
        Callback::from(move |_: MouseEvent| {
            if !closing.is_confirming() {
                return;
            }
            closing.set(closing.next(ClosingEvent::Confirm));
            error_message.set(None);

            let api = api.clone();
            let closing = closing.clone();
            let report = report.clone();
            let summary = summary.clone();
            let error_message = error_message.clone();
            let logout = logout.clone();
            spawn_local(async move {
                match api.close_month().await {
                    Ok(closed) => {
                        info!(closing_date = %closed.closing_date, "month closed");
                        closing.set(ClosingState::InFlight.next(ClosingEvent::Succeeded));
                        report.set(Some(closed));
                        load_summary(api, summary, error_message, logout).await;
                    }
                    Err(err) => {
                        error!(error = %err, "month closing failed");
                        closing.set(ClosingState::InFlight.next(ClosingEvent::Failed));
                        error_message.set(Some(format!(
                            "Falha ao fechar o mês: {}",
                            err.describe()
                        )));
                    }
                }
            });
        })
    };

    let on_close_report = {
        let report = report.clone();
        Callback::from(move |_| report.set(None))
    };

    let data = (*summary).clone().unwrap_or_default();
    let balance = data.net_profit;

    let action = |label: &'static str, page: Page, icon: Html, primary: bool| {
        let on_navigate = props.on_navigate.clone();
        let colors = if primary {
            "bg-indigo-600 hover:bg-indigo-700 text-white"
        } else {
            "bg-slate-200 dark:bg-slate-700 text-slate-800 dark:text-white hover:bg-slate-300 dark:hover:bg-slate-600"
        };
        html! {
            <button
                onclick={Callback::from(move |_| on_navigate.emit(page))}
                class={classes!("w-full", "h-28", "flex", "flex-col", "items-center", "justify-center", "gap-2", "p-4", "rounded-2xl", "shadow-lg", "transition-all", colors)}
            >
                { icon }
                <span class="text-lg font-bold">{ label }</span>
            </button>
        }
    };

    html! {
        { page_shell(
            "Dashboard",
            html! {
                <button
                    onclick={on_request_close}
                    disabled={closing.is_in_flight()}
                    class="px-6 py-3 rounded-full text-base font-bold bg-emerald-600 text-white shadow-lg hover:bg-emerald-700 flex items-center gap-2 disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    if closing.is_in_flight() {
                        {"Fechando..."}
                    } else {
                        { icon_trending_up() }
                        {"Fechar Mês"}
                    }
                </button>
            },
            html! {
                <>
                    if let Some(msg) = &*error_message {
                        <div class="bg-red-50 dark:bg-red-900 border border-red-300 dark:border-red-700 text-red-700 dark:text-red-200 px-6 py-4 rounded-xl text-center font-medium">
                            <strong class="font-bold mr-2">{"Erro:"}</strong>
                            { msg.clone() }
                        </div>
                    }

                    <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-6">
                        <StatCard title="Saldo Atual" amount={balance} tone={Tone::for_amount(balance)} icon={icon_dollar()} />
                        <StatCard title="Total de Vendas" amount={data.total_sales} icon={icon_shopping_cart()} />
                        <StatCard title="Lucro Bruto" amount={data.total_profit} tone={Tone::for_amount(data.total_profit)} icon={icon_trending_up()} />
                        <StatCard title="Total de Despesas" amount={data.total_expenses} icon={icon_truck()} />
                    </div>

                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                        <div class="bg-white dark:bg-slate-800 rounded-2xl p-6 border border-slate-200 dark:border-slate-700">
                            <h3 class="text-xl font-bold flex items-center gap-3 mb-4 text-slate-800 dark:text-white">
                                { icon_package() }
                                { format!("Top {} Produtos Mais Vendidos", TOP_PRODUCTS_LIMIT) }
                            </h3>
                            if data.top_products.is_empty() {
                                <p class="text-slate-500 dark:text-slate-400 text-center py-6">{"Nenhum produto registrado ainda."}</p>
                            } else {
                                <ul class="space-y-3">
                                    { for data.top_products.iter().take(TOP_PRODUCTS_LIMIT).enumerate().map(|(i, p)| html! {
                                        <li class="flex justify-between items-center bg-slate-50 dark:bg-slate-700 p-4 rounded-xl border border-slate-200 dark:border-slate-600">
                                            <span class="font-medium text-slate-700 dark:text-slate-200">{ format!("{}. {}", i + 1, p.name) }</span>
                                            <span class="text-slate-600 dark:text-slate-300">{ format!("{} unidades", p.quantity) }</span>
                                        </li>
                                    }) }
                                </ul>
                            }
                        </div>

                        <div class="bg-white dark:bg-slate-800 rounded-2xl p-6 border border-slate-200 dark:border-slate-700 flex flex-col">
                            <h3 class="text-xl font-bold flex items-center gap-3 mb-4 text-slate-800 dark:text-white">
                                { icon_truck() }
                                {"Viagem Mais Rentável"}
                            </h3>
                            if let Some(trip) = &data.most_profitable_trip {
                                <div class="flex flex-col items-center justify-center flex-grow text-center">
                                    <p class="text-3xl font-extrabold text-indigo-600 dark:text-indigo-400 mb-2">{ format!("Viagem #{}", trip.trip_id) }</p>
                                    <p class="text-4xl font-extrabold text-green-600 dark:text-green-400">{ format_currency(trip.revenue) }</p>
                                    <p class="text-sm text-slate-500 dark:text-slate-400 mt-3">{"(Maior receita individual)"}</p>
                                </div>
                            } else {
                                <p class="text-slate-500 dark:text-slate-400 text-center py-6">{"Nenhuma viagem registrada com receita ainda."}</p>
                            }
                        </div>
                    </div>

                    <div class="grid gap-6 grid-cols-1 sm:grid-cols-2 lg:grid-cols-4">
                        { action("+ Nova Venda", Page::NewSale, icon_shopping_cart(), true) }
                        { action("+ Novo Produto", Page::NewProduct, icon_package(), true) }
                        { action("+ Nova Viagem", Page::NewTrip, icon_truck(), true) }
                        { action("Estoque Atual", Page::Stock, icon_warehouse(), false) }
                        { action("Entrada de Produtos", Page::StockEntry, icon_package_plus(), false) }
                        { action("Relatório de Inventário", Page::InventoryReport, icon_clipboard(), false) }
                        { action("Relatório de Vendas", Page::SalesReport, icon_bar_chart(), false) }
                        { action("Relatório de Viagens", Page::TripsReport, icon_trending_up(), false) }
                    </div>

                    if closing.is_confirming() {
                        <div class="fixed inset-0 bg-black/70 flex items-center justify-center z-50 p-4">
                            <div class="bg-white dark:bg-slate-800 p-10 rounded-3xl shadow-2xl border border-slate-200 dark:border-slate-700 w-full max-w-lg text-slate-800 dark:text-white">
                                <h3 class="text-3xl font-bold text-red-600 dark:text-red-400 mb-6 text-center">{"Atenção! Confirmação Necessária"}</h3>
                                <p class="text-lg text-center mb-6">{"Tem certeza que deseja fechar o mês? Esta ação é irreversível e irá:"}</p>
                                <ul class="list-disc list-inside space-y-3 mb-8 text-red-700 dark:text-red-300 font-semibold">
                                    <li>{"Gerar o relatório financeiro consolidado do mês."}</li>
                                    <li>{"APAGAR IRREVERSIVELMENTE todas as Vendas, Despesas e Viagens registradas."}</li>
                                    <li>{"Manter apenas os Produtos no estoque."}</li>
                                </ul>
                                <div class="flex flex-col sm:flex-row gap-4">
                                    <button onclick={on_cancel_close} class="flex-1 px-6 py-3 rounded-full font-bold bg-slate-300 dark:bg-slate-600 hover:bg-slate-400">{"Cancelar"}</button>
                                    <button onclick={on_confirm_close} class="flex-1 px-6 py-3 rounded-full font-bold bg-red-600 text-white hover:bg-red-700">{"Confirmar Fechamento"}</button>
                                </div>
                            </div>
                        </div>
                    }

                    if let Some(closed) = &*report {
                        <ClosingReportModal report={closed.clone()} on_close={on_close_report} />
                    }
                </>
            }
        ) }
    }
}

#[derive(Properties, PartialEq)]
struct ClosingReportModalProps {
    report: MonthlyClosingReport,
    on_close: Callback<()>,
}

#[function_component(ClosingReportModal)]
fn closing_report_modal(props: &ClosingReportModalProps) -> Html {
    let report = &props.report;
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="fixed inset-0 bg-black/70 flex items-center justify-center z-50 p-4">
            <div class="bg-white dark:bg-slate-800 p-10 rounded-3xl shadow-2xl border border-slate-200 dark:border-slate-700 w-full max-w-xl relative text-slate-800 dark:text-white overflow-y-auto max-h-[90vh]">
                <button onclick={on_close} class="absolute top-4 right-4 text-slate-500 hover:text-slate-800 dark:hover:text-white">
                    { icon_x() }
                </button>
                <h2 class="text-4xl font-extrabold text-indigo-600 dark:text-indigo-400 mb-8 text-center border-b pb-4 border-slate-200 dark:border-slate-700">{"Relatório Mensal"}</h2>
                <div class="space-y-4 text-lg">
                    <p class="font-semibold text-slate-700 dark:text-slate-300">
                        {"Data do Fechamento: "}
                        <span class="font-normal">{ format_date(&report.closing_date) }</span>
                    </p>
                    { metric("Total de Vendas", report.total_sales, false) }
                    { metric("Custo da Mercadoria Vendida (CMV)", report.cost_of_goods_sold, false) }
                    { metric("Lucro Bruto (Vendas - CMV)", report.gross_profit, true) }
                    { metric("Total de Despesas (Geral)", report.total_operating_expenses, false) }
                    { metric("Lucro Líquido Mensal", report.net_profit, true) }
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4 pt-4 border-t border-slate-200 dark:border-slate-700">
                        <p><span class="font-semibold">{"Viagens Realizadas: "}</span>{ report.trips_completed }</p>
                        <p><span class="font-semibold">{"Vendas Realizadas: "}</span>{ report.sales_completed }</p>
                    </div>
                </div>
                <p class="text-sm text-slate-500 dark:text-slate-400 mt-8 text-center pt-4 border-t border-slate-200 dark:border-slate-700">
                    {"Os dados de vendas, despesas e viagens foram limpos para o novo ciclo financeiro."}
                </p>
            </div>
        </div>
    }
}

fn metric(label: &'static str, value: Decimal, signed: bool) -> Html {
    let color = match (signed, Tone::for_amount(value)) {
        (true, Tone::Negative) => "text-red-700 dark:text-red-300 font-extrabold",
        (true, _) => "text-green-700 dark:text-green-300 font-extrabold",
        (false, _) => "text-slate-700 dark:text-slate-200 font-semibold",
    };
    html! {
        <p class="flex justify-between items-center bg-slate-50 dark:bg-slate-700 p-4 rounded-xl border border-slate-200 dark:border-slate-600">
            <span class="font-semibold text-slate-700 dark:text-slate-300">{ format!("{}:", label) }</span>
            <span class={color}>{ format_currency(value) }</span>
        </p>
    }
}
