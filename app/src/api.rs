//! Server functions shared by the server-rendered and hydrated app.

use leptos::prelude::{ServerFnError, server};

use crate::identity::Identity;

/// The signed-in user the authentication layer placed on the server state.
///
/// `Ok(None)` means nobody is signed in; the header then falls back to the
/// standard catalog and a "Log in" link.
#[server(endpoint = "/identity")]
pub async fn current_identity() -> Result<Option<Identity>, ServerFnError> {
    use crate::types::AppState;
    use leptos::prelude::use_context;

    let Some(AppState { identity, .. }) = use_context::<AppState>() else {
        tracing::error!("Application state missing from server function context");
        return Err(ServerFnError::new("Application state is unavailable"));
    };

    tracing::debug!(signed_in = identity.is_some(), "Serving current identity");
    Ok(identity.as_deref().cloned())
}
