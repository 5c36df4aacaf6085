use thiserror::Error;

/// Anything that went wrong talking to the backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Http { status: u16, message: Option<String> },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("could not build request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Message to show the user: the server's own text when it sent one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Http {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// The server's own text, or a Portuguese description of the failure.
    pub fn describe(&self) -> String {
        let fallback = match self {
            ApiError::Http { status, .. } => format!("Erro do servidor: {}", status),
            ApiError::Network(_) => "Não foi possível conectar ao servidor.".to_string(),
            ApiError::Decode(_) => "Resposta inesperada do servidor.".to_string(),
            ApiError::Encode(_) => "Não foi possível montar a requisição.".to_string(),
        };
        self.user_message(&fallback)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401, .. })
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Form problems caught before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Por favor, selecione um produto e informe uma quantidade válida.")]
    InvalidStockEntry,
    #[error("Produto selecionado não encontrado.")]
    ProductNotFound,
    #[error("Por favor, selecione um produto válido e uma quantidade maior que zero.")]
    InvalidSaleItem,
    #[error("Por favor, insira um valor válido para o preço de venda manual (número não negativo).")]
    InvalidManualPrice,
    #[error("Por favor, selecione uma viagem para registrar a venda.")]
    MissingTrip,
    #[error("Adicione pelo menos um item à venda para salvar.")]
    EmptySale,
    #[error("Informe o tipo e um valor maior que zero para a despesa.")]
    InvalidExpense,
    #[error("Preencha o campo obrigatório: {0}.")]
    MissingField(&'static str),
    #[error("Valor inválido para {0}.")]
    InvalidNumber(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins_over_fallback() {
        let err = ApiError::Http {
            status: 400,
            message: Some("Estoque insuficiente".to_string()),
        };
        assert_eq!(err.user_message("Erro ao registrar venda."), "Estoque insuficiente");
    }

    #[test]
    fn blank_or_missing_message_uses_fallback() {
        let blank = ApiError::Http {
            status: 500,
            message: Some("  ".to_string()),
        };
        let missing = ApiError::Http {
            status: 500,
            message: None,
        };
        let network = ApiError::Network("offline".to_string());
        assert_eq!(blank.user_message("falhou"), "falhou");
        assert_eq!(missing.user_message("falhou"), "falhou");
        assert_eq!(network.user_message("falhou"), "falhou");
    }

    #[test]
    fn describe_falls_back_to_portuguese_status_text() {
        let bare = ApiError::Http {
            status: 500,
            message: None,
        };
        assert_eq!(bare.describe(), "Erro do servidor: 500");
        let with_text = ApiError::Http {
            status: 409,
            message: Some("Mês já fechado".into()),
        };
        assert_eq!(with_text.describe(), "Mês já fechado");
        assert_eq!(
            ApiError::Network("offline".into()).describe(),
            "Não foi possível conectar ao servidor."
        );
    }

    #[test]
    fn only_401_is_unauthorized() {
        assert!(ApiError::Http { status: 401, message: None }.is_unauthorized());
        assert!(!ApiError::Http { status: 403, message: None }.is_unauthorized());
        assert!(!ApiError::Network("x".into()).is_unauthorized());
    }

    #[test]
    fn validation_errors_render_user_text() {
        assert_eq!(
            ValidationError::MissingField("destino").to_string(),
            "Preencha o campo obrigatório: destino."
        );
    }
}
