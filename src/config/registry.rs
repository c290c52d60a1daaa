//! Ordered component registries consumed by the host framework.
//!
//! Order is positional: the framework initializes applications and runs
//! middleware in exactly the order declared here, so entries must not be
//! reordered casually.

/// Applications shared by every tenant schema.
pub const SHARED_APPS: &[&str] = &["env_manager", "channels", "api_docs"];

/// Applications installed per tenant, in initialization order.
pub const TENANT_APPS: &[&str] = &[
    "content_types",
    "cors",
    "auth",
    "sessions",
    "sites",
    "messages",
    "admin",
    "static_files",
];

/// Middleware chain, outermost first.
pub const MIDDLEWARE: &[&str] = &[
    "cors",
    "security",
    "session",
    "common",
    "auth",
    "messages",
    "clickjacking",
];

/// Headers every deployment allows on cross-origin requests.
pub const DEFAULT_CORS_HEADERS: &[&str] = &[
    "accept",
    "accept-encoding",
    "authorization",
    "content-type",
    "dnt",
    "origin",
    "user-agent",
    "x-csrftoken",
    "x-requested-with",
];

/// Lola-specific headers appended after the defaults.
pub const EXTRA_CORS_HEADERS: &[&str] = &["accesstoken", "secret"];

/// Shared apps followed by tenant apps not already shared.
///
/// First occurrence wins, so an app listed in both registries is
/// initialized at its shared position.
pub fn installed_apps() -> Vec<&'static str> {
    merge_preserving_order(SHARED_APPS, TENANT_APPS)
}

/// Default CORS headers followed by the Lola-specific extras.
pub fn cors_allow_headers() -> Vec<&'static str> {
    merge_preserving_order(DEFAULT_CORS_HEADERS, EXTRA_CORS_HEADERS)
}

fn merge_preserving_order(primary: &[&'static str], secondary: &[&'static str]) -> Vec<&'static str> {
    let mut merged: Vec<&'static str> = primary.to_vec();
    for &entry in secondary {
        if !merged.contains(&entry) {
            merged.push(entry);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_preserves_declaration_order() {
        let merged = merge_preserving_order(&["a", "b"], &["c", "d"]);
        assert_eq!(merged, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_merge_keeps_first_occurrence() {
        let merged = merge_preserving_order(&["a", "b"], &["b", "c", "a"]);
        assert_eq!(merged, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_installed_apps_start_with_shared_apps() {
        let apps = installed_apps();
        assert_eq!(&apps[..SHARED_APPS.len()], SHARED_APPS);
    }

    #[test]
    fn test_installed_apps_contain_all_tenant_apps() {
        let apps = installed_apps();
        for app in TENANT_APPS {
            assert!(apps.contains(app));
        }
    }

    #[test]
    fn test_installed_apps_have_no_duplicates() {
        let apps = installed_apps();
        let mut deduped = apps.clone();
        deduped.dedup();
        assert_eq!(apps.len(), deduped.len());
        for (i, app) in apps.iter().enumerate() {
            assert!(!apps[i + 1..].contains(app));
        }
    }

    #[test]
    fn test_cors_headers_extras_follow_defaults() {
        let headers = cors_allow_headers();
        assert_eq!(&headers[..DEFAULT_CORS_HEADERS.len()], DEFAULT_CORS_HEADERS);
        assert_eq!(&headers[DEFAULT_CORS_HEADERS.len()..], EXTRA_CORS_HEADERS);
    }

    #[test]
    fn test_middleware_order_is_declared_order() {
        // cors must run before security, session before auth
        let cors = MIDDLEWARE.iter().position(|m| *m == "cors").unwrap();
        let security = MIDDLEWARE.iter().position(|m| *m == "security").unwrap();
        let session = MIDDLEWARE.iter().position(|m| *m == "session").unwrap();
        let auth = MIDDLEWARE.iter().position(|m| *m == "auth").unwrap();
        assert!(cors < security);
        assert!(session < auth);
    }
}
