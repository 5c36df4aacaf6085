use tracing::info;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::session::Session;

pub type SessionHandle = UseStateHandle<Session>;

#[hook]
pub fn use_session() -> Session {
    use_context::<SessionHandle>()
        .map(|session| (*session).clone())
        .unwrap_or_default()
}

/// Client bound to the current session's token.
#[hook]
pub fn use_api() -> ApiClient {
    let session = use_session();
    ApiClient::new(&session)
}

/// Ends the session: wipes storage first, then the in-memory state, which
/// sends the app back to the login screen.
#[hook]
pub fn use_logout() -> Callback<()> {
    let session = use_context::<SessionHandle>();
    Callback::from(move |_| {
        Session::clear_storage();
        info!("session closed");
        if let Some(session) = &session {
            session.set(Session::default());
        }
    })
}
