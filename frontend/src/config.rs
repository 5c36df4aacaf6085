use rust_decimal::Decimal;

/// Backend base URL, baked in at build time through `MARCO_API_URL`.
pub const API_BASE_URL: &str = match option_env!("MARCO_API_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

pub const TOKEN_KEY: &str = "token";
pub const USER_NAME_KEY: &str = "nomeUsuario";

/// How long the status overlay stays up, in milliseconds.
pub const STATUS_DURATION_MS: u32 = 3000;
pub const FORM_STATUS_DURATION_MS: u32 = 2000;
pub const REPORT_ERROR_DURATION_MS: u32 = 5000;

// stock below LOW is critical, below MEDIUM needs attention
pub const STOCK_LOW_THRESHOLD: i64 = 10;
pub const STOCK_MEDIUM_THRESHOLD: i64 = 20;

pub const DEFAULT_MARGIN_PCT: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

pub const TOP_PRODUCTS_LIMIT: usize = 5;

pub fn api_url(path: &str) -> String {
    format!("{}{}", API_BASE_URL.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_without_double_slash() {
        let url = api_url("/produtos");
        assert!(url.ends_with("/produtos"));
        assert!(!url.contains("//produtos"));
    }

    #[test]
    fn default_margin_is_thirty_percent() {
        assert_eq!(DEFAULT_MARGIN_PCT, Decimal::from(30));
    }
}
