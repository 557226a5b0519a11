//! # Permission Sets
//!
//! The session-scoped mapping of permission keys to grants, and the matcher
//! that evaluates paths against it. Sets are fetched once per session from
//! the identity payload and are immutable afterwards.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::action::Action;
use crate::grant::{Grant, Record, ValueFilters};
use crate::path::{PermissionPath, ROOT_SCOPE, WILDCARD};

/// Prefix marking a permission key as an unconditional deny.
pub const DENY_PREFIX: char = '~';

/// A session's full permission mapping.
///
/// Keys are dotted paths under the `admin` root; values are [`Grant`]s.
/// Keys may be prefixed with `~` (deny) and may end in `*` (any action at
/// that scope). The set deserializes directly from the identity payload's
/// `permissions` object.
///
/// # Example
///
/// ```
/// use trellis_permissions::{Action, PermissionPath, PermissionSet};
///
/// let set: PermissionSet = serde_json::from_str(r#"{
///     "admin.orders.*": true,
///     "~admin.orders.cost.view": true
/// }"#).unwrap();
///
/// assert!(set.allows(&PermissionPath::parse("orders.edit").unwrap(), None));
/// assert!(!set.allows(&PermissionPath::parse("orders.cost.view").unwrap(), None));
/// assert!(!set.allows(&PermissionPath::parse("invoices.view").unwrap(), None));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet {
    grants: HashMap<String, Grant>,
}

impl PermissionSet {
    /// Create a new empty permission set (denies everything).
    pub fn new() -> Self {
        Self {
            grants: HashMap::new(),
        }
    }

    /// Add an unconditional grant (or deny, with a `~`-prefixed key).
    pub fn grant(&mut self, key: impl Into<String>) {
        self.grants.insert(key.into(), Grant::Unconditional);
    }

    /// Add a grant conditioned on per-attribute value filters.
    pub fn grant_filtered(&mut self, key: impl Into<String>, filters: ValueFilters) {
        self.grants.insert(key.into(), Grant::Filtered(filters));
    }

    /// Look up the grant stored under an exact key, if any.
    pub fn get(&self, key: &str) -> Option<&Grant> {
        self.grants.get(key)
    }

    /// Number of entries in the set.
    pub fn len(&self) -> usize {
        self.grants.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }

    /// Check whether a path is allowed, optionally against a record.
    ///
    /// Evaluation runs two ordered passes over the path's candidate keys
    /// (see [`PermissionPath::candidates`]):
    ///
    /// 1. **Deny pass** — every candidate is checked with the `~` prefix
    ///    before any allow is consulted. A hit at any scope, exact or
    ///    wildcard, vetoes the whole check.
    /// 2. **Allow pass** — the first candidate present in the set decides.
    ///    Without a record the match alone allows; with a record the grant's
    ///    value filters must all hold for that record.
    ///
    /// No candidate matching in either pass is a deny (fail-closed).
    pub fn allows(&self, path: &PermissionPath, record: Option<&Record>) -> bool {
        let candidates = path.candidates();

        // Deny pass runs to completion first: any deny anywhere wins,
        // regardless of scope ordering against allows.
        for key in &candidates {
            if self.grants.contains_key(&format!("{DENY_PREFIX}{key}")) {
                trace!(%path, %key, "denied by negative permission");
                return false;
            }
        }

        for key in &candidates {
            if let Some(grant) = self.grants.get(key) {
                return match record {
                    None => true,
                    Some(record) => {
                        let permitted = grant.permits(record);
                        if !permitted {
                            trace!(%path, %key, "record fails grant filters");
                        }
                        permitted
                    }
                };
            }
        }

        trace!(%path, "no matching grant, default deny");
        false
    }

    /// Value filters attached to a resource-level grant for an action.
    ///
    /// Looks up `admin.<resource>.<action>`, falling back to
    /// `admin.<resource>.*` only. Unlike [`PermissionSet::allows`] there is
    /// no scope walk: only the resource-level entries are consulted, and an
    /// unconditional grant at either key yields no filters.
    pub fn filters(&self, resource: &str, action: &Action) -> ValueFilters {
        let exact = format!("{ROOT_SCOPE}.{resource}.{}", action.as_str());
        let wildcard = format!("{ROOT_SCOPE}.{resource}.{WILDCARD}");
        for key in [&exact, &wildcard] {
            if let Some(grant) = self.grants.get(key) {
                return grant.value_filters().cloned().unwrap_or_default();
            }
        }
        ValueFilters::new()
    }
}

impl FromIterator<(String, Grant)> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = (String, Grant)>>(iter: T) -> Self {
        Self {
            grants: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn set(value: serde_json::Value) -> PermissionSet {
        serde_json::from_value(value).unwrap()
    }

    fn record(value: serde_json::Value) -> Record {
        value.as_object().unwrap().clone()
    }

    fn path(p: &str) -> PermissionPath {
        PermissionPath::parse(p).unwrap()
    }

    #[test]
    fn test_default_deny() {
        let perms = set(json!({}));
        assert!(!perms.allows(&path("orders.view"), None));

        let perms = set(json!({"admin.invoices.view": true}));
        assert!(!perms.allows(&path("orders.view"), None));
    }

    #[test]
    fn test_exact_allow() {
        let perms = set(json!({"admin.orders.view": true}));
        assert!(perms.allows(&path("orders.view"), None));
        assert!(!perms.allows(&path("orders.edit"), None));
    }

    #[test]
    fn test_wildcard_allow() {
        let perms = set(json!({"admin.orders.*": true}));
        assert!(perms.allows(&path("orders.view"), None));
        assert!(perms.allows(&path("orders.delete"), None));
        // Field-level paths fall up to the resource wildcard.
        assert!(perms.allows(&path("orders.status.edit"), None));
    }

    #[test]
    fn test_root_wildcard_allows_everything() {
        let perms = set(json!({"admin.*": true}));
        assert!(perms.allows(&path("orders.view"), None));
        assert!(perms.allows(&path("invoices.total.edit"), None));
    }

    #[test]
    fn test_deny_overrides_allow_at_same_scope() {
        let perms = set(json!({
            "admin.orders.view": true,
            "~admin.orders.view": true
        }));
        assert!(!perms.allows(&path("orders.view"), None));
    }

    #[test]
    fn test_narrow_deny_vetoes_broad_allow() {
        let perms = set(json!({
            "admin.*": true,
            "~admin.orders.cost.view": true
        }));
        assert!(perms.allows(&path("orders.view"), None));
        assert!(!perms.allows(&path("orders.cost.view"), None));
    }

    #[test]
    fn test_broad_deny_vetoes_narrow_allow() {
        // The deny pass completes before any allow is consulted, so a deny
        // at a broader scope still wins over a more specific allow.
        let perms = set(json!({
            "admin.orders.cost.view": true,
            "~admin.orders.*": true
        }));
        assert!(!perms.allows(&path("orders.cost.view"), None));
    }

    #[test]
    fn test_wildcard_deny() {
        let perms = set(json!({
            "admin.orders.view": true,
            "~admin.orders.*": true
        }));
        assert!(!perms.allows(&path("orders.view"), None));
    }

    #[test]
    fn test_exact_match_preferred_over_wildcard() {
        // The exact action's filters apply, not the wildcard's.
        let perms = set(json!({
            "admin.orders.edit": {"status": ["draft"]},
            "admin.orders.*": true
        }));
        assert!(!perms.allows(&path("orders.edit"), Some(&record(json!({"status": "final"})))));
        assert!(perms.allows(&path("orders.edit"), Some(&record(json!({"status": "draft"})))));
    }

    #[test]
    fn test_filtered_grant_without_record_allows() {
        let perms = set(json!({"admin.widgets.edit": {"status": ["draft"]}}));
        assert!(perms.allows(&path("widgets.edit"), None));
    }

    #[test]
    fn test_filtered_grant_against_record() {
        let perms = set(json!({"admin.widgets.edit": {"status": ["draft"]}}));
        assert!(perms.allows(&path("widgets.edit"), Some(&record(json!({"status": "draft"})))));
        assert!(!perms.allows(&path("widgets.edit"), Some(&record(json!({"status": "published"})))));
    }

    #[test]
    fn test_field_path_falls_to_wildcard_scope_with_record() {
        // The filtered wildcard is the only entry; field-level view walks
        // up to it and its filters gate on the record.
        let perms = set(json!({"admin.orders.*": {"region": ["US"]}}));
        let p = path("orders.total.view");
        assert!(perms.allows(&p, Some(&record(json!({"region": "US"})))));
        assert!(!perms.allows(&p, Some(&record(json!({"region": "EU"})))));
    }

    #[test]
    fn test_exact_action_at_broader_scope_shadows_filtered_wildcard() {
        // An unconditional exact-action grant at the resource scope matches
        // field-level paths for that action before the filtered wildcard,
        // so the filters never apply to them.
        let perms = set(json!({
            "admin.orders.view": true,
            "admin.orders.*": {"region": ["US"]}
        }));
        let view = path("orders.total.view");
        assert!(perms.allows(&view, Some(&record(json!({"region": "EU"})))));
        // Actions without an exact grant still fall to the wildcard.
        let edit = path("orders.total.edit");
        assert!(!perms.allows(&edit, Some(&record(json!({"region": "EU"})))));
    }

    #[test]
    fn test_first_match_decides_even_when_filters_fail() {
        // A failing filtered match at a narrow scope is final; broader
        // unconditional grants are not consulted afterwards.
        let perms = set(json!({
            "admin.orders.edit": {"status": ["draft"]},
            "admin.edit": true
        }));
        assert!(!perms.allows(&path("orders.edit"), Some(&record(json!({"status": "final"})))));
    }

    #[test]
    fn test_filters_exact_key() {
        let perms = set(json!({"admin.widgets.edit": {"status": ["draft"]}}));
        let filters = perms.filters("widgets", &Action::Edit);
        assert_eq!(filters["status"], vec![json!("draft")]);
    }

    #[test]
    fn test_filters_no_fallback_to_other_actions() {
        let perms = set(json!({"admin.widgets.edit": {"status": ["draft"]}}));
        assert!(perms.filters("widgets", &Action::View).is_empty());
    }

    #[test]
    fn test_filters_wildcard_fallback() {
        let perms = set(json!({"admin.widgets.*": {"status": ["draft"]}}));
        let filters = perms.filters("widgets", &Action::View);
        assert_eq!(filters["status"], vec![json!("draft")]);
    }

    #[test]
    fn test_filters_exact_unconditional_shadows_wildcard() {
        // An unconditional grant at the exact key yields no filters and
        // does not fall through to the wildcard entry.
        let perms = set(json!({
            "admin.widgets.edit": true,
            "admin.widgets.*": {"status": ["draft"]}
        }));
        assert!(perms.filters("widgets", &Action::Edit).is_empty());
    }

    #[test]
    fn test_filters_only_resource_level() {
        // Field-level and root-level entries never contribute filters.
        let perms = set(json!({
            "admin.widgets.status.edit": {"status": ["draft"]},
            "admin.*": {"status": ["draft"]}
        }));
        assert!(perms.filters("widgets", &Action::Edit).is_empty());
    }

    #[test]
    fn test_builder_helpers() {
        let mut perms = PermissionSet::new();
        assert!(perms.is_empty());
        perms.grant("admin.orders.view");
        let mut filters = ValueFilters::new();
        filters.insert("status".to_string(), vec![json!("draft")]);
        perms.grant_filtered("admin.orders.edit", filters);
        assert_eq!(perms.len(), 2);
        assert!(perms.allows(&path("orders.view"), None));
        assert!(perms.allows(&path("orders.edit"), Some(&record(json!({"status": "draft"})))));
    }
}
