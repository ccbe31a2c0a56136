#[cfg(feature = "ssr")]
use std::sync::Arc;

#[cfg(feature = "ssr")]
use axum::extract::FromRef;
#[cfg(feature = "ssr")]
use leptos::config::LeptosOptions;

#[cfg(feature = "ssr")]
use crate::identity::Identity;

/// Shared state handed to Axum handlers and, as Leptos context, to server functions.
#[cfg(feature = "ssr")]
#[derive(FromRef, Debug, Clone)]
pub struct AppState {
    pub identity: Option<Arc<Identity>>,
    pub leptos_options: Arc<LeptosOptions>,
}

#[cfg(feature = "ssr")]
impl FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.as_ref().clone()
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::identity::Role;

    #[test]
    fn test_state_clones_share_identity() {
        let state = AppState {
            identity: Some(Arc::new(Identity::new("Sam").with_roles([Role::User]))),
            leptos_options: Arc::new(LeptosOptions::builder().output_name("tracker").build()),
        };
        let cloned = state.clone();

        let (Some(original), Some(copy)) = (&state.identity, &cloned.identity) else {
            panic!("identity should survive cloning");
        };
        assert!(Arc::ptr_eq(original, copy));
        assert_eq!(LeptosOptions::from_ref(&state).output_name.as_ref(), "tracker");
    }
}
