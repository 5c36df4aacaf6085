use tracing::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::{page_shell, status_overlay, Status, Tone};
use crate::config::REPORT_ERROR_DURATION_MS;
use crate::format::{format_currency, format_date};
use crate::hooks::use_api;
use crate::models::Trip;
use crate::views::{trip_rows, TripSort};

#[function_component(TripsReportPage)]
pub fn trips_report_page() -> Html {
    let api = use_api();
    let trips = use_state(Vec::<Trip>::new);
    let loading = use_state(|| true);
    let date_filter = use_state(String::new);
    let destination_filter = use_state(String::new);
    let sort = use_state(|| TripSort::Date);
    let status = use_state(|| None::<Status>);

    {
        let trips = trips.clone();
        let loading = loading.clone();
        let status = status.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api.trips().await {
                        Ok(list) => trips.set(list),
                        Err(err) => {
                            error!(error = %err, "failed to load trips report");
                            status.set(Some(
                                Status::from_api(&err, "Erro ao carregar relatório de viagens.")
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

    let on_sort = {
        let sort = sort.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(key) = TripSort::from_key(&select.value()) {
                sort.set(key);
            }
        })
    };

    let rows = trip_rows(&trips, &date_filter, &destination_filter, *sort);

    let body = if *loading {
        html! { <p class="text-center text-slate-500 dark:text-slate-400 py-10">{"Carregando viagens..."}</p> }
    } else if rows.is_empty() {
        html! { <p class="text-center text-slate-500 dark:text-slate-400 py-10">{"Nenhuma viagem encontrada."}</p> }
    } else {
        html! {
            <div class="overflow-x-auto bg-white dark:bg-slate-800 rounded-2xl border border-slate-200 dark:border-slate-700">
                <table class="w-full text-left text-sm">
                    <thead class="bg-slate-50 dark:bg-slate-700 text-slate-600 dark:text-slate-300 uppercase text-xs">
                        <tr>
                            <th class="px-4 py-3">{"Viagem"}</th>
                            <th class="px-4 py-3">{"Saída"}</th>
                            <th class="px-4 py-3">{"Destino"}</th>
                            <th class="px-4 py-3">{"Motorista"}</th>
                            <th class="px-4 py-3 text-right">{"Despesas"}</th>
                            <th class="px-4 py-3 text-right">{"Vendas"}</th>
                            <th class="px-4 py-3 text-right">{"Lucro"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for rows.iter().map(|row| {
                            let profit_class = match Tone::for_amount(row.totals.profit) {
                                Tone::Negative => "text-red-600 dark:text-red-400",
                                _ => "text-green-600 dark:text-green-400",
                            };
                            html! {
                                <tr class="border-t border-slate-100 dark:border-slate-700 text-slate-700 dark:text-slate-200">
                                    <td class="px-4 py-3 font-medium">{ format!("#{}", row.trip.id) }</td>
                                    <td class="px-4 py-3">{ format_date(&row.date) }</td>
                                    <td class="px-4 py-3">{ row.trip.destination.clone() }</td>
                                    <td class="px-4 py-3">{ row.trip.driver.clone() }</td>
                                    <td class="px-4 py-3 text-right">{ format_currency(row.totals.total_expenses) }</td>
                                    <td class="px-4 py-3 text-right">{ format_currency(row.totals.total_sales) }</td>
                                    <td class={classes!("px-4", "py-3", "text-right", "font-bold", profit_class)}>{ format_currency(row.totals.profit) }</td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>
        }
    };

    html! {
        <>
            { page_shell(
                "Relatório de Viagens",
                html! {},
                html! {
                    <>
                        <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                            <input type="date" value={(*date_filter).clone()} oninput={filter_input(&date_filter)}
                                class="px-4 py-2 border border-slate-300 dark:border-slate-600 rounded-lg bg-white dark:bg-slate-800 text-slate-800 dark:text-white" />
                            <input type="text" placeholder="Filtrar por destino" value={(*destination_filter).clone()} oninput={filter_input(&destination_filter)}
                                class="px-4 py-2 border border-slate-300 dark:border-slate-600 rounded-lg bg-white dark:bg-slate-800 text-slate-800 dark:text-white" />
                            <select onchange={on_sort}
                                class="px-4 py-2 border border-slate-300 dark:border-slate-600 rounded-lg bg-white dark:bg-slate-800 text-slate-800 dark:text-white">
                                { for TripSort::ALL.iter().map(|s| html! {
                                    <option value={s.key()} selected={*s == *sort}>{ format!("Ordenar por {}", s.label()) }</option>
                                }) }
                            </select>
                        </div>
                        { body }
                    </>
                }
            ) }
            { status_overlay(&status) }
        </>
    }
}
