use tracing::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::icons::{icon_plus, icon_save, icon_trash};
use crate::components::{page_shell, status_overlay, Status};
use crate::format::format_currency;
use crate::forms::TripDraft;
use crate::hooks::use_api;

const INPUT_CLASS: &str = "w-full px-4 py-2 border border-slate-300 dark:border-slate-600 rounded-lg bg-slate-50 dark:bg-slate-700 text-slate-800 dark:text-white";

#[function_component(NewTripPage)]
pub fn new_trip_page() -> Html {
    let api = use_api();
    let draft = use_state(TripDraft::default);
    let expense_kind = use_state(String::new);
    let expense_amount = use_state(String::new);
    let status = use_state(|| None::<Status>);
    let saving = use_state(|| false);

    let bind = |update: fn(&mut TripDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            update(&mut next, input.value());
            draft.set(next);
        })
    };

    let text_input = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            handle.set(input.value());
        })
    };

    let on_add_expense = {
        let draft = draft.clone();
        let expense_kind = expense_kind.clone();
        let expense_amount = expense_amount.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*draft).clone();
            match next.add_expense(&expense_kind, &expense_amount) {
                Ok(()) => {
                    draft.set(next);
                    expense_kind.set(String::new());
                    expense_amount.set(String::new());
                }
                Err(err) => status.set(Some(err.into())),
            }
        })
    };

    let on_remove_expense = |index: usize| {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*draft).clone();
            next.remove_expense(index);
            draft.set(next);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let status = status.clone();
        let saving = saving.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let trip = match draft.build() {
                Ok(trip) => trip,
                Err(err) => {
                    status.set(Some(err.into()));
                    return;
                }
            };

            saving.set(true);
            let api = api.clone();
            let current = (*draft).clone();
            let draft = draft.clone();
            let status = status.clone();
            let saving = saving.clone();
            spawn_local(async move {
                match api
                    .create_trip_with_expenses(&trip, |id| current.expenses_for(id))
                    .await
                {
                    Ok(outcome) => {
                        info!(trip_id = outcome.trip_id, expenses = outcome.total_expenses, "trip registered");
                        draft.set(TripDraft::default());
                        let message = outcome.message();
                        status.set(Some(if outcome.is_partial() {
                            Status::error(message)
                        } else {
                            Status::success(message)
                        }));
                    }
                    Err(err) => {
                        error!(error = %err, "failed to register trip");
                        status.set(Some(Status::from_api(&err, "Erro ao registrar viagem.")));
                    }
                }
                saving.set(false);
            });
        })
    };

    html! {
        <>
            { page_shell(
                "Nova Viagem",
                html! {},
                html! {
                    <form onsubmit={on_submit} class="space-y-6">
                        <div class="bg-white dark:bg-slate-800 p-6 rounded-2xl border border-slate-200 dark:border-slate-700 grid grid-cols-1 md:grid-cols-2 gap-4">
                            <div class="space-y-1">
                                <label class="block text-sm font-medium text-slate-600 dark:text-slate-300">{"Data de Saída"}</label>
                                <input type="date" class={INPUT_CLASS} value={draft.departure_date.clone()} oninput={bind(|d, v| d.departure_date = v)} />
                            </div>
                            <div class="space-y-1">
                                <label class="block text-sm font-medium text-slate-600 dark:text-slate-300">{"Data de Retorno (opcional)"}</label>
                                <input type="date" class={INPUT_CLASS} value={draft.return_date.clone()} oninput={bind(|d, v| d.return_date = v)} />
                            </div>
                            <div class="space-y-1">
                                <label class="block text-sm font-medium text-slate-600 dark:text-slate-300">{"Destino"}</label>
                                <input type="text" placeholder="Ex: São Paulo" class={INPUT_CLASS} value={draft.destination.clone()} oninput={bind(|d, v| d.destination = v)} />
                            </div>
                            <div class="space-y-1">
                                <label class="block text-sm font-medium text-slate-600 dark:text-slate-300">{"Motorista"}</label>
                                <input type="text" class={INPUT_CLASS} value={draft.driver.clone()} oninput={bind(|d, v| d.driver = v)} />
                            </div>
                        </div>

                        <div class="bg-white dark:bg-slate-800 p-6 rounded-2xl border border-slate-200 dark:border-slate-700 space-y-4">
                            <h3 class="text-lg font-bold text-slate-800 dark:text-white">{"Despesas da Viagem"}</h3>
                            <div class="grid grid-cols-1 md:grid-cols-3 gap-4 items-end">
                                <input type="text" placeholder="Tipo (ex: Combustível)" class={INPUT_CLASS} value={(*expense_kind).clone()} oninput={text_input(&expense_kind)} />
                                <input type="text" inputmode="decimal" placeholder="Valor (R$)" class={INPUT_CLASS} value={(*expense_amount).clone()} oninput={text_input(&expense_amount)} />
                                <button type="button" onclick={on_add_expense} class="px-5 py-2 rounded-lg bg-slate-200 dark:bg-slate-700 text-slate-800 dark:text-white font-semibold flex items-center justify-center gap-2 hover:bg-slate-300">
                                    { icon_plus() }
                                    {"Adicionar Despesa"}
                                </button>
                            </div>

                            if draft.expenses.is_empty() {
                                <p class="text-center text-slate-500 dark:text-slate-400 py-2">{"Nenhuma despesa adicionada."}</p>
                            } else {
                                <ul class="divide-y divide-slate-100 dark:divide-slate-700">
                                    { for draft.expenses.iter().enumerate().map(|(i, expense)| html! {
                                        <li class="flex justify-between items-center py-3 text-slate-700 dark:text-slate-200">
                                            <span>{ expense.kind.clone() }</span>
                                            <div class="flex items-center gap-4">
                                                <span class="font-semibold">{ format_currency(expense.amount) }</span>
                                                <button type="button" onclick={on_remove_expense(i)} class="text-red-500 hover:text-red-700">{ icon_trash() }</button>
                                            </div>
                                        </li>
                                    }) }
                                </ul>
                            }
                            <div class="flex justify-between pt-4 border-t border-slate-200 dark:border-slate-700">
                                <span class="font-semibold text-slate-700 dark:text-slate-200">{"Total de Despesas:"}</span>
                                <span class="text-xl font-bold text-red-600 dark:text-red-400">{ format_currency(draft.total_expenses()) }</span>
                            </div>
                        </div>

                        <button type="submit" disabled={*saving}
                            class="w-full bg-indigo-600 hover:bg-indigo-700 disabled:opacity-50 text-white py-3 rounded-lg font-semibold flex items-center justify-center gap-2">
                            { icon_save() }
                            { if *saving { "Salvando..." } else { "Registrar Viagem" } }
                        </button>
                    </form>
                }
            ) }
            { status_overlay(&status) }
        </>
    }
}
