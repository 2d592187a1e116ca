//! Storage key derivation

/// Namespace shared by every debug panel key
pub const STORAGE_NAMESPACE: &str = "djust-debug-state";

/// Scope used when no view identifier is available
pub const GLOBAL_SCOPE: &str = "global";

/// Build the storage key for a view.
///
/// `None` and the empty string both map to the global scope, so
/// `storage_key(None) == storage_key(Some(""))`. Any other identifier is used
/// verbatim as the scope.
pub fn storage_key(view_id: Option<&str>) -> String {
    let scope = match view_id {
        Some(id) if !id.is_empty() => id,
        _ => GLOBAL_SCOPE,
    };
    format!("{}:{}", STORAGE_NAMESPACE, scope)
}

/// Recover the scope from a key built by [`storage_key`]
pub(crate) fn scope_of(key: &str) -> Option<&str> {
    key.strip_prefix(STORAGE_NAMESPACE)?.strip_prefix(':')
}
