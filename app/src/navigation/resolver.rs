use super::{ADMIN_CATALOG, NavigationCatalog, STANDARD_CATALOG};
use crate::identity::Identity;

/// Picks the catalog for `identity`: admin when it holds the admin role,
/// standard otherwise, including when it carries no role list at all.
#[must_use]
pub fn resolve(identity: &Identity) -> &'static NavigationCatalog {
    if identity.is_admin() {
        &ADMIN_CATALOG
    } else {
        &STANDARD_CATALOG
    }
}

/// Like [`resolve`], with no identity falling back to the standard catalog.
#[must_use]
pub fn resolve_optional(identity: Option<&Identity>) -> &'static NavigationCatalog {
    identity.map_or(&STANDARD_CATALOG, resolve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Role;
    use crate::navigation::CatalogKind;

    #[test]
    fn admin_role_gets_admin_catalog() {
        let identity = Identity::new("Root").with_roles([Role::Admin]);
        assert_eq!(resolve(&identity).kind, CatalogKind::Admin);
    }

    #[test]
    fn admin_among_other_roles_gets_admin_catalog() {
        let identity = Identity::new("Root").with_roles([Role::from("member"), Role::from("admin")]);
        assert_eq!(resolve(&identity).kind, CatalogKind::Admin);
    }

    #[test]
    fn other_roles_get_standard_catalog() {
        let identity = Identity::new("Sam").with_roles([Role::from("member")]);
        assert_eq!(resolve(&identity).kind, CatalogKind::Standard);

        let identity = Identity::new("Sam").with_roles([Role::User]);
        assert_eq!(resolve(&identity).kind, CatalogKind::Standard);
    }

    #[test]
    fn empty_or_absent_roles_get_standard_catalog() {
        assert_eq!(resolve(&Identity::new("Sam").with_roles(Vec::<Role>::new())).kind, CatalogKind::Standard);
        assert_eq!(resolve(&Identity::new("Sam")).kind, CatalogKind::Standard);
    }

    #[test]
    fn role_names_are_case_sensitive() {
        let identity = Identity::new("Sam").with_roles([Role::from("ADMIN")]);
        assert_eq!(resolve(&identity).kind, CatalogKind::Standard);
    }

    #[test]
    fn missing_identity_gets_standard_catalog() {
        assert_eq!(resolve_optional(None).kind, CatalogKind::Standard);

        let identity = Identity::new("Root").with_roles([Role::Admin]);
        assert_eq!(resolve_optional(Some(&identity)).kind, CatalogKind::Admin);
    }

    #[test]
    fn resolves_to_the_shared_static_catalogs() {
        let identity = Identity::new("Sam");
        assert!(core::ptr::eq(resolve(&identity), &STANDARD_CATALOG));
    }
}
