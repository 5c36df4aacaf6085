use rust_decimal::Decimal;
use tracing::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{page_shell, status_overlay, Status};
use crate::config::REPORT_ERROR_DURATION_MS;
use crate::format::{format_currency, format_date};
use crate::hooks::use_api;
use crate::metrics::{sale_total, PricedLine};
use crate::models::Sale;
use crate::views::filter_sales;

#[function_component(SalesReportPage)]
pub fn sales_report_page() -> Html {
    let api = use_api();
    let sales = use_state(Vec::<Sale>::new);
    let loading = use_state(|| true);
    let date_filter = use_state(String::new);
    let destination_filter = use_state(String::new);
    let status = use_state(|| None::<Status>);

    {
        let sales = sales.clone();
        let loading = loading.clone();
        let status = status.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api.sales().await {
                        Ok(list) => sales.set(list),
                        Err(err) => {
                            error!(error = %err, "failed to load sales report");
                            status.set(Some(
                                Status::from_api(&err, "Erro ao carregar relatório de vendas.")
                                    .with_duration(REPORT_ERROR_DURATION_MS),
                            ));
                        }
                    }
                    loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    let filter_input = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            handle.set(input.value());
        })
    };

    let visible = filter_sales(&sales, &date_filter, &destination_filter);
    let grand_total: Decimal = visible.iter().map(|s| sale_total(s.lines())).sum();

    let body = if *loading {
        html! { <p class="text-center text-slate-500 dark:text-slate-400 py-10">{"Carregando vendas..."}</p> }
    } else if visible.is_empty() {
        html! { <p class="text-center text-slate-500 dark:text-slate-400 py-10">{"Nenhuma venda encontrada."}</p> }
    } else {
        html! {
            <div class="space-y-4">
                { for visible.iter().map(|sale| html! {
                    <div class="bg-white dark:bg-slate-800 p-5 rounded-2xl border border-slate-200 dark:border-slate-700">
                        <div class="flex justify-between items-center mb-3">
                            <div>
                                <p class="font-bold text-slate-800 dark:text-white">{ format!("Venda #{}", sale.id) }</p>
                                <p class="text-sm text-slate-500 dark:text-slate-400">
                                    { format!("{} · {}", format_date(&sale.date), sale.destination()) }
                                </p>
                            </div>
                            <span class="text-xl font-bold text-green-700 dark:text-green-400">{ format_currency(sale_total(sale.lines())) }</span>
                        </div>
                        <table class="w-full text-sm text-slate-700 dark:text-slate-200">
                            <tbody>
                                { for sale.lines().iter().map(|line| html! {
                                    <tr class="border-t border-slate-100 dark:border-slate-700">
                                        <td class="py-2">{ line.product_name() }</td>
                                        <td class="py-2 text-right">{ format!("{} x {}", line.quantity, format_currency(line.unit_price)) }</td>
                                        <td class="py-2 text-right font-semibold">{ format_currency(line.line_total()) }</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                }) }
            </div>
        }
    };

    html! {
        <>
            { page_shell(
                "Relatório de Vendas",
                html! {
                    <span class="text-lg font-bold text-green-700 dark:text-green-400">{ format!("Total: {}", format_currency(grand_total)) }</span>
                },
                html! {
                    <>
                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                            <input type="date" value={(*date_filter).clone()} oninput={filter_input(&date_filter)}
                                class="px-4 py-2 border border-slate-300 dark:border-slate-600 rounded-lg bg-white dark:bg-slate-800 text-slate-800 dark:text-white" />
                            <input type="text" placeholder="Filtrar por destino" value={(*destination_filter).clone()} oninput={filter_input(&destination_filter)}
                                class="px-4 py-2 border border-slate-300 dark:border-slate-600 rounded-lg bg-white dark:bg-slate-800 text-slate-800 dark:text-white" />
                        </div>
                        { body }
                    </>
                }
            ) }
            { status_overlay(&status) }
        </>
    }
}
