use tracing::{error, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::icons::icon_warehouse;
use crate::components::{page_shell, status_overlay, StatCard, Status};
use crate::config::REPORT_ERROR_DURATION_MS;
use crate::format::format_currency;
use crate::hooks::use_api;
use crate::metrics::stock_level;
use crate::models::InventoryReport;

#[function_component(InventoryReportPage)]
pub fn inventory_report_page() -> Html {
    let api = use_api();
    let report = use_state(|| None::<InventoryReport>);
    let loading = use_state(|| true);
    let status = use_state(|| None::<Status>);

    {
        let report = report.clone();
        let loading = loading.clone();
        let status = status.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api.inventory_report().await {
                        Ok(data) => {
                            info!(products = data.products.len(), "inventory report loaded");
                            report.set(Some(data));
                        }
                        Err(err) => {
                            error!(error = %err, "failed to load inventory report");
                            status.set(Some(
                                Status::from_api(&err, "Erro ao carregar relatório de inventário.")
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

    let content = match (&*report, *loading) {
        (_, true) => html! {
            <p class="text-center text-slate-500 dark:text-slate-400 py-10">{"Carregando relatório..."}</p>
        },
        (None, false) => html! {
            <p class="text-center text-slate-500 dark:text-slate-400 py-10">{"Relatório indisponível."}</p>
        },
        (Some(data), false) => html! {
            <>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    <div class="bg-white dark:bg-slate-800 p-6 rounded-2xl shadow-sm border border-slate-200 dark:border-slate-700">
                        <p class="text-slate-500 dark:text-slate-400 text-[11px] font-bold mb-1 tracking-widest uppercase">{"Unidades em Estoque"}</p>
                        <h3 class="text-2xl font-bold text-indigo-700 dark:text-indigo-300">{ data.totals.units }</h3>
                    </div>
                    <StatCard title="Valor de Custo" amount={data.totals.value_at_cost} icon={icon_warehouse()} />
                    <StatCard title="Valor de Venda" amount={data.totals.value_at_sale} icon={icon_warehouse()} />
                </div>

                if data.products.is_empty() {
                    <p class="text-center text-slate-500 dark:text-slate-400 py-10">{"Nenhum produto em estoque."}</p>
                } else {
                    <div class="overflow-x-auto bg-white dark:bg-slate-800 rounded-2xl border border-slate-200 dark:border-slate-700">
                        <table class="w-full text-left text-sm">
                            <thead class="bg-slate-50 dark:bg-slate-700 text-slate-600 dark:text-slate-300 uppercase text-xs">
                                <tr>
                                    <th class="px-4 py-3">{"Produto"}</th>
                                    <th class="px-4 py-3 text-right">{"Quantidade"}</th>
                                    <th class="px-4 py-3 text-right">{"Preço de Compra"}</th>
                                    <th class="px-4 py-3 text-right">{"Preço de Venda"}</th>
                                    <th class="px-4 py-3 text-right">{"Valor de Custo"}</th>
                                    <th class="px-4 py-3 text-right">{"Valor de Venda"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for data.products.iter().map(|line| html! {
                                    <tr class="border-t border-slate-100 dark:border-slate-700 text-slate-700 dark:text-slate-200">
                                        <td class="px-4 py-3 font-medium">{ line.name.clone() }</td>
                                        <td class={classes!("px-4", "py-3", "text-right", "font-bold", stock_level(line.quantity).text_class())}>{ line.quantity }</td>
                                        <td class="px-4 py-3 text-right">{ format_currency(line.purchase_price) }</td>
                                        <td class="px-4 py-3 text-right">{ format_currency(line.sale_price) }</td>
                                        <td class="px-4 py-3 text-right">{ format_currency(line.value_at_cost) }</td>
                                        <td class="px-4 py-3 text-right">{ format_currency(line.value_at_sale) }</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                }
            </>
        },
    };

    html! {
        <>
            { page_shell("Relatório de Inventário", html! {}, content) }
            { status_overlay(&status) }
        </>
    }
}
