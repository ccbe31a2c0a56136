//! Start-up configuration for the server binary.
//!
//! Site settings come from the `[[workspace.metadata.leptos]]` table in
//! `Cargo.toml`. The signed-in user is a development stand-in for the
//! authentication layer and is read from `TRACKER_USER_*` variables.

use std::env;

use app::identity::{Identity, Role};
use leptos::config::LeptosOptions;
use leptos_config::{errors::LeptosConfigError, get_configuration};
use thiserror::Error;

pub const USER_NAME_VAR: &str = "TRACKER_USER_NAME";
pub const USER_AVATAR_VAR: &str = "TRACKER_USER_AVATAR";
pub const USER_ROLES_VAR: &str = "TRACKER_USER_ROLES";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load Leptos site configuration: {0}")]
    Leptos(#[from] LeptosConfigError),
}

/// Reads the Leptos site options from the workspace manifest.
///
/// # Errors
///
/// Returns [`ConfigError::Leptos`] when the manifest or its `LEPTOS_*`
/// overrides cannot be parsed.
pub fn load_site_options() -> Result<LeptosOptions, ConfigError> {
    let conf = get_configuration(Some("Cargo.toml"))?;
    Ok(conf.leptos_options)
}

/// The identity configured in the environment, if any.
pub fn identity_from_env() -> Option<Identity> {
    identity_from_vars(
        env::var(USER_NAME_VAR).ok(),
        env::var(USER_AVATAR_VAR).ok(),
        env::var(USER_ROLES_VAR).ok(),
    )
}

/// Builds an identity from raw variable values.
///
/// A blank or missing name means nobody is signed in. A missing roles variable
/// leaves the role list absent; a present one is split on commas.
pub fn identity_from_vars(
    name: Option<String>,
    avatar: Option<String>,
    roles: Option<String>,
) -> Option<Identity> {
    let name = name.map(|name| name.trim().to_owned()).filter(|name| !name.is_empty())?;

    Some(Identity {
        name,
        avatar: avatar.filter(|avatar| !avatar.trim().is_empty()),
        roles: roles.as_deref().map(parse_roles),
    })
}

pub fn parse_roles(raw: &str) -> Vec<Role> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(Role::from)
        .collect()
}
