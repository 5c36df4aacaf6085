use tracing::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::icons::icon_package_plus;
use crate::components::{page_shell, status_overlay, Status};
use crate::forms::{parse_id, parse_quantity, plan_stock_entry};
use crate::hooks::use_api;
use crate::models::Product;

#[function_component(StockEntryPage)]
pub fn stock_entry_page() -> Html {
    let api = use_api();
    let products = use_state(Vec::<Product>::new);
    let selected = use_state(String::new);
    let quantity = use_state(String::new);
    let status = use_state(|| None::<Status>);
    let saving = use_state(|| false);

    {
        let api = api.clone();
        let products = products.clone();
        let status = status.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api.products().await {
                        Ok(list) => products.set(list),
                        Err(err) => {
                            error!(error = %err, "failed to load products");
                            status.set(Some(Status::from_api(&err, "Erro ao carregar produtos.")));
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_submit = {
        let products = products.clone();
        let selected = selected.clone();
        let quantity = quantity.clone();
        let status = status.clone();
        let saving = saving.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let entry = match plan_stock_entry(&products, parse_id(&selected), parse_quantity(&quantity)) {
                Ok(entry) => entry,
                Err(err) => {
                    status.set(Some(err.into()));
                    return;
                }
            };

            saving.set(true);
            let api = api.clone();
            let products = products.clone();
            let selected = selected.clone();
            let quantity = quantity.clone();
            let status = status.clone();
            let saving = saving.clone();
            spawn_local(async move {
                match api.update_product_quantity(entry.product_id, entry.new_quantity).await {
                    Ok(()) => {
                        info!(product_id = entry.product_id, new_quantity = entry.new_quantity, "stock updated");
                        let updated = products
                            .iter()
                            .cloned()
                            .map(|mut p| {
                                if p.id == entry.product_id {
                                    p.quantity = entry.new_quantity;
                                }
                                p
                            })
                            .collect();
                        products.set(updated);
                        selected.set(String::new());
                        quantity.set(String::new());
                        status.set(Some(Status::success(format!(
                            "Entrada de {} unidade(s) de {} registrada. Novo estoque: {}.",
                            entry.added, entry.product_name, entry.new_quantity
                        ))));
                    }
                    Err(err) => {
                        error!(error = %err, product_id = entry.product_id, "failed to update stock");
                        status.set(Some(Status::from_api(&err, "Erro ao registrar entrada de produtos.")));
                    }
                }
                saving.set(false);
            });
        })
    };

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            selected.set(select.value());
        })
    };

    let on_quantity = {
        let quantity = quantity.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            quantity.set(input.value());
        })
    };

    html! {
        <>
            { page_shell(
                "Entrada de Produtos",
                html! {},
                html! {
                    <form onsubmit={on_submit} class="bg-white dark:bg-slate-800 p-8 rounded-2xl shadow-sm border border-slate-200 dark:border-slate-700 space-y-5 max-w-xl">
                        <div class="space-y-1">
                            <label class="block text-sm font-medium text-slate-600 dark:text-slate-300">{"Produto"}</label>
                            <select onchange={on_select} class="w-full px-4 py-2 border border-slate-300 dark:border-slate-600 rounded-lg bg-slate-50 dark:bg-slate-700 text-slate-800 dark:text-white">
                                <option value="" selected={selected.is_empty()}>{"Selecione um produto"}</option>
                                { for products.iter().map(|p| html! {
                                    <option value={p.id.to_string()} selected={*selected == p.id.to_string()}>
                                        { format!("{} (estoque: {})", p.name, p.quantity) }
                                    </option>
                                }) }
                            </select>
                        </div>
                        <div class="space-y-1">
                            <label class="block text-sm font-medium text-slate-600 dark:text-slate-300">{"Quantidade a adicionar"}</label>
                            <input type="number" min="1" value={(*quantity).clone()} oninput={on_quantity}
                                class="w-full px-4 py-2 border border-slate-300 dark:border-slate-600 rounded-lg bg-slate-50 dark:bg-slate-700 text-slate-800 dark:text-white" />
                        </div>
                        <button type="submit" disabled={*saving}
                            class="w-full bg-indigo-600 hover:bg-indigo-700 disabled:opacity-50 text-white py-3 rounded-lg font-semibold flex items-center justify-center gap-2">
                            { icon_package_plus() }
                            { if *saving { "Registrando..." } else { "Registrar Entrada" } }
                        </button>
                    </form>
                }
            ) }
            { status_overlay(&status) }
        </>
    }
}
