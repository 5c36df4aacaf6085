use tracing::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{page_shell, status_overlay, Status};
use crate::format::format_currency;
use crate::hooks::use_api;
use crate::metrics::{inventory_valuation, stock_level};
use crate::models::Product;
use crate::views::filter_products;

#[function_component(StockPage)]
pub fn stock_page() -> Html {
    let api = use_api();
    let products = use_state(Vec::<Product>::new);
    let loading = use_state(|| true);
    let name_filter = use_state(String::new);
    let category_filter = use_state(String::new);
    let status = use_state(|| None::<Status>);

    {
        let products = products.clone();
        let loading = loading.clone();
        let status = status.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api.products().await {
                        Ok(list) => products.set(list),
                        Err(err) => {
                            error!(error = %err, "failed to load stock");
                            status.set(Some(Status::from_api(&err, "Erro ao carregar o estoque.")));
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

    let visible = filter_products(&products, &name_filter, &category_filter);
    let valuation = inventory_valuation(visible.iter().copied());

    let body = if *loading {
        html! { <p class="text-center text-slate-500 dark:text-slate-400 py-10">{"Carregando estoque..."}</p> }
    } else if visible.is_empty() {
        html! { <p class="text-center text-slate-500 dark:text-slate-400 py-10">{"Nenhum produto encontrado."}</p> }
    } else {
        html! {
            <div class="overflow-x-auto bg-white dark:bg-slate-800 rounded-2xl border border-slate-200 dark:border-slate-700">
                <table class="w-full text-left text-sm">
                    <thead class="bg-slate-50 dark:bg-slate-700 text-slate-600 dark:text-slate-300 uppercase text-xs">
                        <tr>
                            <th class="px-4 py-3">{"Produto"}</th>
                            <th class="px-4 py-3">{"Categoria"}</th>
                            <th class="px-4 py-3 text-right">{"Preço de Compra"}</th>
                            <th class="px-4 py-3 text-right">{"Preço de Venda"}</th>
                            <th class="px-4 py-3 text-right">{"Quantidade"}</th>
                            <th class="px-4 py-3 text-right">{"Valor em Estoque"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for visible.iter().zip(valuation.per_product.iter()).map(|(p, value)| html! {
                            <tr class="border-t border-slate-100 dark:border-slate-700 text-slate-700 dark:text-slate-200">
                                <td class="px-4 py-3 font-medium">{ p.name.clone() }</td>
                                <td class="px-4 py-3">{ p.category.clone() }</td>
                                <td class="px-4 py-3 text-right">{ format_currency(p.purchase_price) }</td>
                                <td class="px-4 py-3 text-right">{ format_currency(p.sale_price) }</td>
                                <td class={classes!("px-4", "py-3", "text-right", "font-bold", stock_level(p.quantity).text_class())}>{ p.quantity }</td>
                                <td class="px-4 py-3 text-right">{ format_currency(value.value_at_sale) }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        }
    };

    html! {
        <>
            { page_shell(
                "Estoque Atual",
                html! {},
                html! {
                    <>
                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                            <input type="text" placeholder="Filtrar por nome" value={(*name_filter).clone()} oninput={filter_input(&name_filter)}
                                class="px-4 py-2 border border-slate-300 dark:border-slate-600 rounded-lg bg-white dark:bg-slate-800 text-slate-800 dark:text-white" />
                            <input type="text" placeholder="Filtrar por categoria" value={(*category_filter).clone()} oninput={filter_input(&category_filter)}
                                class="px-4 py-2 border border-slate-300 dark:border-slate-600 rounded-lg bg-white dark:bg-slate-800 text-slate-800 dark:text-white" />
                        </div>

                        <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                            <div class="bg-white dark:bg-slate-800 p-4 rounded-xl border border-slate-200 dark:border-slate-700">
                                <p class="text-xs uppercase font-bold text-slate-500 dark:text-slate-400">{"Unidades"}</p>
                                <p class="text-xl font-bold text-slate-800 dark:text-white">{ valuation.totals.units }</p>
                            </div>
                            <div class="bg-white dark:bg-slate-800 p-4 rounded-xl border border-slate-200 dark:border-slate-700">
                                <p class="text-xs uppercase font-bold text-slate-500 dark:text-slate-400">{"Valor de Custo"}</p>
                                <p class="text-xl font-bold text-slate-800 dark:text-white">{ format_currency(valuation.totals.value_at_cost) }</p>
                            </div>
                            <div class="bg-white dark:bg-slate-800 p-4 rounded-xl border border-slate-200 dark:border-slate-700">
                                <p class="text-xs uppercase font-bold text-slate-500 dark:text-slate-400">{"Valor de Venda"}</p>
                                <p class="text-xl font-bold text-green-700 dark:text-green-400">{ format_currency(valuation.totals.value_at_sale) }</p>
                            </div>
                        </div>

                        { body }
                    </>
                }
            ) }
            { status_overlay(&status) }
        </>
    }
}
