use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::icons::{icon_check_circle, icon_x_circle};
use crate::config::STATUS_DURATION_MS;
use crate::error::{ApiError, ValidationError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Outcome of the last action, shown in an overlay until it times out.
#[derive(Clone, Debug, PartialEq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
    pub duration_ms: u32,
}

impl Status {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            message: message.into(),
            duration_ms: STATUS_DURATION_MS,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
            duration_ms: STATUS_DURATION_MS,
        }
    }

    pub fn from_api(err: &ApiError, fallback: &str) -> Self {
        Self::error(err.user_message(fallback))
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

impl From<ValidationError> for Status {
    fn from(err: ValidationError) -> Self {
        Status::error(err.to_string())
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusModalProps {
    pub status: Status,
    pub on_close: Callback<()>,
}

#[function_component(StatusModal)]
pub fn status_modal(props: &StatusModalProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |status: &Status| {
                let timeout = Timeout::new(status.duration_ms, move || on_close.emit(()));
                move || drop(timeout)
            },
            props.status.clone(),
        );
    }

    let (icon, title, title_class) = match props.status.kind {
        StatusKind::Success => (
            html! { <span class="text-green-500 mb-4">{ icon_check_circle() }</span> },
            "Sucesso!",
            "text-green-600 dark:text-green-400",
        ),
        StatusKind::Error => (
            html! { <span class="text-red-500 mb-4">{ icon_x_circle() }</span> },
            "Ops, algo deu errado!",
            "text-red-600 dark:text-red-400",
        ),
    };

    let on_dismiss = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50" onclick={on_dismiss}>
            <div class="bg-white dark:bg-slate-800 p-8 rounded-2xl shadow-xl text-center flex flex-col items-center max-w-md">
                { icon }
                <h3 class={classes!("text-3xl", "font-bold", "mb-3", title_class)}>{ title }</h3>
                <p class="text-xl text-slate-700 dark:text-slate-300 font-medium">{ props.status.message.clone() }</p>
            </div>
        </div>
    }
}

/// Renders the overlay for a page's status slot, clearing it on close.
pub fn status_overlay(status: &UseStateHandle<Option<Status>>) -> Html {
    match &**status {
        Some(current) => {
            let handle = status.clone();
            html! {
                <StatusModal status={current.clone()} on_close={Callback::from(move |_| handle.set(None))} />
            }
        }
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_prefer_server_text() {
        let err = ApiError::Http {
            status: 422,
            message: Some("Estoque insuficiente".into()),
        };
        let status = Status::from_api(&err, "Erro ao registrar venda.");
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.message, "Estoque insuficiente");
    }

    #[test]
    fn validation_errors_become_error_status() {
        let status: Status = ValidationError::EmptySale.into();
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.message, "Adicione pelo menos um item à venda para salvar.");
        assert_eq!(status.with_duration(2000).duration_ms, 2000);
    }
}
