use tracing::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::icons::icon_log_in;
use crate::models::Credentials;
use crate::session::Session;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub on_authenticated: Callback<Session>,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let email = use_state(|| "".to_string());
    let password = use_state(|| "".to_string());
    let show_password = use_state(|| false);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        let on_authenticated = props.on_authenticated.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let credentials = Credentials {
                email: email.trim().to_string(),
                password: (*password).clone(),
            };

            if credentials.email.is_empty() || credentials.password.is_empty() {
                error.set(Some("Informe e-mail e senha.".to_string()));
                return;
            }

            loading.set(true);
            error.set(None);

            let error = error.clone();
            let loading = loading.clone();
            let on_authenticated = on_authenticated.clone();
            spawn_local(async move {
                match ApiClient::default().login(&credentials).await {
                    Ok(resp) => {
                        let session = Session::new(resp.token, resp.user_name);
                        session.persist();
                        info!("logged in");
                        on_authenticated.emit(session);
                    }
                    Err(err) => {
                        warn!(error = %err, "login failed");
                        error.set(Some(err.user_message("E-mail ou senha inválidos.")));
                    }
                }
                loading.set(false);
            });
        })
    };

    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_| show_password.set(!*show_password))
    };

    html! {
        <div class="min-h-screen bg-slate-100 dark:bg-slate-900 flex flex-col items-center justify-center p-4">
            <div class="w-full max-w-md">
                <div class="text-center mb-8">
                    <h1 class="text-4xl font-bold text-indigo-600 dark:text-indigo-400">{"Projeto Marco"}</h1>
                    <p class="text-slate-500 dark:text-slate-400 mt-2">{"Bem-vindo de volta! Faça login para continuar."}</p>
                </div>

                <form class="bg-white dark:bg-slate-800 p-8 rounded-2xl shadow-xl border border-slate-200 dark:border-slate-700 space-y-4" onsubmit={on_submit}>
                    <h2 class="text-2xl font-semibold text-center text-slate-800 dark:text-white mb-2">{"Acesso ao Sistema"}</h2>
                    <div class="space-y-1">
                        <label class="block text-sm font-medium text-slate-600 dark:text-slate-300">{"E-mail"}</label>
                        <input
                            type="email"
                            placeholder="seu@email.com"
                            class="w-full px-4 py-2 border border-slate-300 dark:border-slate-600 rounded-lg bg-slate-50 dark:bg-slate-700 text-slate-800 dark:text-white focus:outline-none focus:ring-2 focus:ring-indigo-500"
                            value={(*email).clone()}
                            oninput={{
                                let email = email.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    email.set(input.value());
                                })
                            }}
                        />
                    </div>
                    <div class="space-y-1">
                        <label class="block text-sm font-medium text-slate-600 dark:text-slate-300">{"Senha"}</label>
                        <div class="relative">
                            <input
                                type={if *show_password { "text" } else { "password" }}
                                placeholder="••••••••"
                                class="w-full pl-4 pr-16 py-2 border border-slate-300 dark:border-slate-600 rounded-lg bg-slate-50 dark:bg-slate-700 text-slate-800 dark:text-white focus:outline-none focus:ring-2 focus:ring-indigo-500"
                                value={(*password).clone()}
                                oninput={{
                                    let password = password.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        password.set(input.value());
                                    })
                                }}
                            />
                            <button type="button" onclick={toggle_password} class="absolute right-3 top-1/2 -translate-y-1/2 text-xs font-semibold text-slate-500 hover:text-indigo-500">
                                { if *show_password { "Ocultar" } else { "Mostrar" } }
                            </button>
                        </div>
                    </div>

                    if let Some(msg) = &*error {
                        <p class="text-red-500 dark:text-red-400 text-sm text-center bg-red-100 dark:bg-red-900/20 p-3 rounded-lg">{ msg.clone() }</p>
                    }

                    <button
                        type="submit"
                        class="w-full bg-indigo-600 hover:bg-indigo-700 disabled:bg-indigo-400 disabled:cursor-not-allowed text-white py-3 px-4 rounded-lg font-semibold flex items-center justify-center gap-2"
                        disabled={*loading}
                    >
                        if *loading {
                            {"Entrando..."}
                        } else {
                            { icon_log_in() }
                            {"Entrar"}
                        }
                    </button>
                </form>
            </div>
        </div>
    }
}
