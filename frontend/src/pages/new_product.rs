use tracing::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::icons::icon_save;
use crate::components::{page_shell, status_overlay, Status};
use crate::config::FORM_STATUS_DURATION_MS;
use crate::format::format_currency;
use crate::forms::ProductDraft;
use crate::hooks::use_api;

const INPUT_CLASS: &str = "w-full px-4 py-2 border border-slate-300 dark:border-slate-600 rounded-lg bg-slate-50 dark:bg-slate-700 text-slate-800 dark:text-white focus:outline-none focus:ring-2 focus:ring-indigo-500";

#[function_component(NewProductPage)]
pub fn new_product_page() -> Html {
    let api = use_api();
    let draft = use_state(ProductDraft::default);
    let status = use_state(|| None::<Status>);
    let saving = use_state(|| false);

    let bind = |update: fn(&mut ProductDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            update(&mut next, input.value());
            draft.set(next);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let status = status.clone();
        let saving = saving.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let product = match draft.build() {
                Ok(product) => product,
                Err(err) => {
                    status.set(Some(Status::from(err).with_duration(FORM_STATUS_DURATION_MS)));
                    return;
                }
            };

            saving.set(true);
            let api = api.clone();
            let draft = draft.clone();
            let status = status.clone();
            let saving = saving.clone();
            spawn_local(async move {
                match api.create_product(&product).await {
                    Ok(()) => {
                        info!(name = %product.name, "product created");
                        draft.set(ProductDraft::default());
                        status.set(Some(
                            Status::success("Produto cadastrado com sucesso!")
                                .with_duration(FORM_STATUS_DURATION_MS),
                        ));
                    }
                    Err(err) => {
                        error!(error = %err, "failed to create product");
                        status.set(Some(
                            Status::from_api(&err, "Erro ao cadastrar produto.")
                                .with_duration(FORM_STATUS_DURATION_MS),
                        ));
                    }
                }
                saving.set(false);
            });
        })
    };

    let field = |label: &'static str, input: Html| {
        html! {
            <div class="space-y-1">
                <label class="block text-sm font-medium text-slate-600 dark:text-slate-300">{ label }</label>
                { input }
            </div>
        }
    };

    html! {
        <>
            { page_shell(
                "Novo Produto",
                html! {},
                html! {
                    <form onsubmit={on_submit} class="bg-white dark:bg-slate-800 p-8 rounded-2xl shadow-sm border border-slate-200 dark:border-slate-700 space-y-5 max-w-2xl">
                        { field("Nome do Produto", html! {
                            <input type="text" class={INPUT_CLASS} placeholder="Ex: Rosas vermelhas"
                                value={draft.name.clone()}
                                oninput={bind(|d, v| d.name = v)} />
                        }) }
                        { field("Categoria", html! {
                            <input type="text" class={INPUT_CLASS} placeholder="Ex: Flores"
                                value={draft.category.clone()}
                                oninput={bind(|d, v| d.category = v)} />
                        }) }
                        <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                            { field("Preço de Compra (R$)", html! {
                                <input type="text" inputmode="decimal" class={INPUT_CLASS}
                                    value={draft.purchase_price.clone()}
                                    oninput={bind(|d, v| d.purchase_price = v)} />
                            }) }
                            { field("Margem de Lucro (%)", html! {
                                <input type="text" inputmode="decimal" class={INPUT_CLASS}
                                    value={draft.margin_pct.clone()}
                                    oninput={bind(|d, v| d.margin_pct = v)} />
                            }) }
                            { field("Quantidade Inicial", html! {
                                <input type="number" min="0" class={INPUT_CLASS}
                                    value={draft.quantity.clone()}
                                    oninput={bind(|d, v| d.quantity = v)} />
                            }) }
                        </div>

                        <div class="bg-indigo-50 dark:bg-slate-700 p-4 rounded-xl flex justify-between items-center">
                            <span class="font-semibold text-slate-700 dark:text-slate-200">{"Preço de Venda Calculado:"}</span>
                            <span class="text-2xl font-bold text-indigo-700 dark:text-indigo-300">{ format_currency(draft.preview_sale_price()) }</span>
                        </div>

                        <button type="submit" disabled={*saving}
                            class="w-full bg-indigo-600 hover:bg-indigo-700 disabled:opacity-50 text-white py-3 rounded-lg font-semibold flex items-center justify-center gap-2">
                            { icon_save() }
                            { if *saving { "Salvando..." } else { "Cadastrar Produto" } }
                        </button>
                    </form>
                }
            ) }
            { status_overlay(&status) }
        </>
    }
}
