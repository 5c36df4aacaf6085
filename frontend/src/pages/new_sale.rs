use futures::future::join;
use tracing::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::icons::{icon_plus, icon_save, icon_trash};
use crate::components::{page_shell, status_overlay, Status};
use crate::format::{format_currency, format_date};
use crate::forms::{parse_id, parse_quantity, SaleDraft};
use crate::hooks::use_api;
use crate::metrics::PricedLine;
use crate::models::{Product, Trip};

const CONTROL_CLASS: &str = "w-full px-4 py-2 border border-slate-300 dark:border-slate-600 rounded-lg bg-slate-50 dark:bg-slate-700 text-slate-800 dark:text-white";

async fn load_options(
    api: ApiClient,
    trips: UseStateHandle<Vec<Trip>>,
    products: UseStateHandle<Vec<Product>>,
    status: UseStateHandle<Option<Status>>,
) {
    let (trip_list, product_list) = join(api.trips(), api.products()).await;
    match trip_list {
        Ok(list) => trips.set(list),
        Err(err) => {
            error!(error = %err, "failed to load trips");
            status.set(Some(Status::from_api(&err, "Erro ao carregar viagens.")));
        }
    }
    match product_list {
        Ok(list) => products.set(list),
        Err(err) => {
            error!(error = %err, "failed to load products");
            status.set(Some(Status::from_api(&err, "Erro ao carregar produtos.")));
        }
    }
}

#[function_component(NewSalePage)]
pub fn new_sale_page() -> Html {
    let api = use_api();
    let trips = use_state(Vec::<Trip>::new);
    let products = use_state(Vec::<Product>::new);
    let draft = use_state(SaleDraft::default);
    let trip_id = use_state(String::new);
    let product_id = use_state(String::new);
    let quantity = use_state(|| "1".to_string());
    let manual_price = use_state(String::new);
    let status = use_state(|| None::<Status>);
    let saving = use_state(|| false);

    {
        let api = api.clone();
        let trips = trips.clone();
        let products = products.clone();
        let status = status.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(load_options(api, trips, products, status));
                || ()
            },
            (),
        );
    }

    let on_trip = {
        let trip_id = trip_id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            trip_id.set(select.value());
        })
    };

    let on_product = {
        let product_id = product_id.clone();
        let manual_price = manual_price.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            product_id.set(select.value());
            manual_price.set(String::new());
        })
    };

    let text_input = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            handle.set(input.value());
        })
    };

    let on_add = {
        let products = products.clone();
        let draft = draft.clone();
        let product_id = product_id.clone();
        let quantity = quantity.clone();
        let manual_price = manual_price.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            let product = parse_id(&product_id).and_then(|id| products.iter().find(|p| p.id == id));
            let mut next = (*draft).clone();
            match next.add_item(product, parse_quantity(&quantity), &manual_price) {
                Ok(()) => {
                    draft.set(next);
                    product_id.set(String::new());
                    quantity.set("1".to_string());
                    manual_price.set(String::new());
                }
                Err(err) => status.set(Some(err.into())),
            }
        })
    };

    let on_remove = |index: usize| {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*draft).clone();
            next.remove_item(index);
            draft.set(next);
        })
    };

    let on_save = {
        let api = api.clone();
        let draft = draft.clone();
        let trip_id = trip_id.clone();
        let trips = trips.clone();
        let products = products.clone();
        let status = status.clone();
        let saving = saving.clone();
        Callback::from(move |_: MouseEvent| {
            let sale = match draft.build(parse_id(&trip_id)) {
                Ok(sale) => sale,
                Err(err) => {
                    status.set(Some(err.into()));
                    return;
                }
            };
            let total = draft.total();

            saving.set(true);
            let api = api.clone();
            let draft = draft.clone();
            let trip_id = trip_id.clone();
            let trips = trips.clone();
            let products = products.clone();
            let status = status.clone();
            let saving = saving.clone();
            spawn_local(async move {
                match api.create_sale(&sale).await {
                    Ok(()) => {
                        info!(trip_id = sale.trip_id, items = sale.items.len(), %total, "sale registered");
                        draft.set(SaleDraft::default());
                        trip_id.set(String::new());
                        status.set(Some(Status::success(format!(
                            "Venda registrada com sucesso! Total: {}",
                            format_currency(total)
                        ))));
                        load_options(api, trips, products, status).await;
                    }
                    Err(err) => {
                        error!(error = %err, "failed to register sale");
                        status.set(Some(Status::from_api(&err, "Erro ao registrar venda.")));
                    }
                }
                saving.set(false);
            });
        })
    };

    let selected_product = parse_id(&product_id).and_then(|id| products.iter().find(|p| p.id == id));

    html! {
        <>
            { page_shell(
                "Nova Venda",
                html! {},
                html! {
                    <>
                        <div class="bg-white dark:bg-slate-800 p-6 rounded-2xl border border-slate-200 dark:border-slate-700 space-y-4">
                            <label class="block text-sm font-medium text-slate-600 dark:text-slate-300">{"Viagem"}</label>
                            <select onchange={on_trip} class={CONTROL_CLASS}>
                                <option value="" selected={trip_id.is_empty()}>{"Selecione a viagem"}</option>
                                { for trips.iter().map(|t| html! {
                                    <option value={t.id.to_string()} selected={*trip_id == t.id.to_string()}>
                                        { format!("#{} - {} ({})", t.id, t.destination, format_date(&t.departure_date)) }
                                    </option>
                                }) }
                            </select>
                        </div>

                        <div class="bg-white dark:bg-slate-800 p-6 rounded-2xl border border-slate-200 dark:border-slate-700 space-y-4">
                            <h3 class="text-lg font-bold text-slate-800 dark:text-white">{"Adicionar Item"}</h3>
                            <div class="grid grid-cols-1 md:grid-cols-4 gap-4 items-end">
                                <div class="md:col-span-2 space-y-1">
                                    <label class="block text-sm font-medium text-slate-600 dark:text-slate-300">{"Produto"}</label>
                                    <select onchange={on_product} class={CONTROL_CLASS}>
                                        <option value="" selected={product_id.is_empty()}>{"Selecione o produto"}</option>
                                        { for products.iter().map(|p| html! {
                                            <option value={p.id.to_string()} selected={*product_id == p.id.to_string()}>
                                                { format!("{} - {} (estoque: {})", p.name, format_currency(p.sale_price), p.quantity) }
                                            </option>
                                        }) }
                                    </select>
                                </div>
                                <div class="space-y-1">
                                    <label class="block text-sm font-medium text-slate-600 dark:text-slate-300">{"Quantidade"}</label>
                                    <input type="number" min="1" class={CONTROL_CLASS} value={(*quantity).clone()} oninput={text_input(&quantity)} />
                                </div>
                                <div class="space-y-1">
                                    <label class="block text-sm font-medium text-slate-600 dark:text-slate-300">{"Preço unitário (opcional)"}</label>
                                    <input type="text" inputmode="decimal" class={CONTROL_CLASS}
                                        placeholder={selected_product.map(|p| format_currency(p.sale_price)).unwrap_or_default()}
                                        value={(*manual_price).clone()} oninput={text_input(&manual_price)} />
                                </div>
                            </div>
                            <button onclick={on_add} class="px-5 py-2 rounded-lg bg-slate-200 dark:bg-slate-700 text-slate-800 dark:text-white font-semibold flex items-center gap-2 hover:bg-slate-300">
                                { icon_plus() }
                                {"Adicionar"}
                            </button>
                        </div>

                        <div class="bg-white dark:bg-slate-800 p-6 rounded-2xl border border-slate-200 dark:border-slate-700">
                            if draft.items.is_empty() {
                                <p class="text-center text-slate-500 dark:text-slate-400 py-4">{"Nenhum item adicionado."}</p>
                            } else {
                                <ul class="divide-y divide-slate-100 dark:divide-slate-700">
                                    { for draft.items.iter().enumerate().map(|(i, item)| html! {
                                        <li class="flex items-center justify-between py-3 text-slate-700 dark:text-slate-200">
                                            <div>
                                                <p class="font-medium">{ item.product_name.clone() }</p>
                                                <p class="text-sm text-slate-500 dark:text-slate-400">
                                                    { format!("{} x {}", item.quantity, format_currency(item.unit_price)) }
                                                    if let Some(note) = item.default_price_note() {
                                                        <span class="ml-2 text-orange-600 dark:text-orange-400">{ note }</span>
                                                    }
                                                </p>
                                            </div>
                                            <div class="flex items-center gap-4">
                                                <span class="font-bold">{ format_currency(item.line_total()) }</span>
                                                <button onclick={on_remove(i)} class="text-red-500 hover:text-red-700">{ icon_trash() }</button>
                                            </div>
                                        </li>
                                    }) }
                                </ul>
                            }
                            <div class="flex justify-between items-center pt-4 mt-4 border-t border-slate-200 dark:border-slate-700">
                                <span class="text-lg font-semibold text-slate-700 dark:text-slate-200">{"Total da Venda:"}</span>
                                <span class="text-2xl font-bold text-green-700 dark:text-green-400">{ format_currency(draft.total()) }</span>
                            </div>
                        </div>

                        <button onclick={on_save} disabled={*saving}
                            class="w-full bg-indigo-600 hover:bg-indigo-700 disabled:opacity-50 text-white py-3 rounded-lg font-semibold flex items-center justify-center gap-2">
                            { icon_save() }
                            { if *saving { "Registrando..." } else { "Registrar Venda" } }
                        </button>
                    </>
                }
            ) }
            { status_overlay(&status) }
        </>
    }
}
