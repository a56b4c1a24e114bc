//! Principal (identity/group) formatting with batched resolution.
//!
//! A principal is a reference to an identity or a group, arriving in one
//! of three raw shapes:
//!
//! - a dict: `{"principal": "<id>", "principal_type": "identity"}`;
//! - a bare string, taken to be an identity id;
//! - a URN: `urn:identity:<id>` or `urn:group:<id>`; other URNs render
//!   verbatim.
//!
//! Identity ids resolve to human-readable usernames through an injected
//! [`IdentityResolver`]. Ids are pre-registered with
//! [`PrincipalFormat::add_item`] / [`add_items`]; the first render
//! triggers exactly one batched lookup, cached for the formatter's
//! lifetime. An id the resolver does not know renders as the raw id —
//! only the lookup call itself failing is an error, and that one
//! propagates (see [`ResolveError`]).

use once_cell::unsync::OnceCell;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use super::{type_name, Format};
use crate::error::{FormatError, ResolveError};

const IDENTITY_URN_PREFIX: &str = "urn:identity:";
const GROUP_URN_PREFIX: &str = "urn:group:";

/// Collaborator that turns identity ids into display names in one
/// batched call.
pub trait IdentityResolver {
    /// Resolves all `ids` at once. Ids missing from the returned map are
    /// not an error; they will render as the raw id.
    fn resolve_batch(&self, ids: &[String]) -> Result<HashMap<String, String>, ResolveError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Principal {
    Identity(String),
    Group(String),
    Other(String),
}

/// Formats principal values, resolving identities through a batched
/// [`IdentityResolver`].
pub struct PrincipalFormat {
    resolver: Arc<dyn IdentityResolver>,
    group_template: String,
    pending: RefCell<Vec<String>>,
    cache: OnceCell<HashMap<String, String>>,
}

impl PrincipalFormat {
    pub fn new(resolver: Arc<dyn IdentityResolver>) -> Self {
        PrincipalFormat {
            resolver,
            group_template: "Group: {}".to_string(),
            pending: RefCell::new(Vec::new()),
            cache: OnceCell::new(),
        }
    }

    /// Sets the group display template; `{}` is replaced with the group id.
    pub fn group_template(mut self, template: impl Into<String>) -> Self {
        self.group_template = template.into();
        self
    }

    /// Pre-registers one raw value's identity id for the batched lookup.
    /// Non-identity principals and unparseable values are ignored.
    pub fn add_item(&self, raw: &Value) {
        if let Ok(Principal::Identity(id)) = parse_principal(raw) {
            self.pending.borrow_mut().push(id);
        }
    }

    /// Pre-registers many raw values. See [`add_item`](Self::add_item).
    pub fn add_items<'a>(&self, raws: impl IntoIterator<Item = &'a Value>) {
        for raw in raws {
            self.add_item(raw);
        }
    }

    /// The id→username map, populated on first use with a single batched
    /// resolver call.
    fn usernames(&self) -> Result<&HashMap<String, String>, FormatError> {
        self.cache.get_or_try_init(|| {
            let ids = self.pending.borrow();
            self.resolver
                .resolve_batch(ids.as_slice())
                .map_err(FormatError::from)
        })
    }
}

fn parse_principal(raw: &Value) -> Result<Principal, FormatError> {
    match raw {
        Value::Object(map) => {
            let value = map
                .get("principal")
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    FormatError::Malformed("principal dict without a principal key".to_string())
                })?;
            match map.get("principal_type").and_then(Value::as_str) {
                Some("identity") | None => Ok(Principal::Identity(value.to_string())),
                Some("group") => Ok(Principal::Group(value.to_string())),
                Some(_) => Ok(Principal::Other(value.to_string())),
            }
        }
        Value::String(s) => {
            if let Some(id) = s.strip_prefix(IDENTITY_URN_PREFIX) {
                Ok(Principal::Identity(id.to_string()))
            } else if let Some(id) = s.strip_prefix(GROUP_URN_PREFIX) {
                Ok(Principal::Group(id.to_string()))
            } else if s.starts_with("urn:") {
                // Unrecognized URN namespace: keep the original text.
                Ok(Principal::Other(s.clone()))
            } else {
                Ok(Principal::Identity(s.clone()))
            }
        }
        other => Err(FormatError::TypeMismatch {
            expected: "principal dict or string",
            found: type_name(other),
        }),
    }
}

impl Format for PrincipalFormat {
    type Parsed = String;

    fn parse(&self, raw: &Value) -> Result<String, FormatError> {
        match parse_principal(raw)? {
            Principal::Identity(id) => {
                let usernames = self.usernames()?;
                Ok(usernames.get(&id).cloned().unwrap_or(id))
            }
            Principal::Group(id) => Ok(self.group_template.replace("{}", &id)),
            Principal::Other(text) => Ok(text),
        }
    }

    fn render(&self, parsed: String) -> String {
        parsed
    }
}

impl std::fmt::Debug for PrincipalFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrincipalFormat")
            .field("group_template", &self.group_template)
            .field("pending", &self.pending.borrow().len())
            .field("resolved", &self.cache.get().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::DynFormat;
    use serde_json::json;
    use std::cell::Cell;

    /// Test resolver that counts batch calls and knows a fixed map.
    struct StubResolver {
        known: HashMap<String, String>,
        calls: Cell<usize>,
        fail: bool,
    }

    impl StubResolver {
        fn knowing(pairs: &[(&str, &str)]) -> Arc<Self> {
            Arc::new(StubResolver {
                known: pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                calls: Cell::new(0),
                fail: false,
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(StubResolver {
                known: HashMap::new(),
                calls: Cell::new(0),
                fail: true,
            })
        }
    }

    impl IdentityResolver for StubResolver {
        fn resolve_batch(&self, ids: &[String]) -> Result<HashMap<String, String>, ResolveError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(ResolveError("lookup backend unavailable".to_string()));
            }
            Ok(ids
                .iter()
                .filter_map(|id| self.known.get(id).map(|name| (id.clone(), name.clone())))
                .collect())
        }
    }

    #[test]
    fn bare_string_resolves_as_identity() {
        let resolver = StubResolver::knowing(&[("id-1", "ada@example.org")]);
        let fmt = PrincipalFormat::new(resolver);
        fmt.add_item(&json!("id-1"));
        assert_eq!(fmt.format(&json!("id-1")).unwrap(), "ada@example.org");
    }

    #[test]
    fn dict_shape_with_group_type() {
        let resolver = StubResolver::knowing(&[]);
        let fmt = PrincipalFormat::new(resolver);
        let raw = json!({"principal": "g-9", "principal_type": "group"});
        assert_eq!(fmt.format(&raw).unwrap(), "Group: g-9");
    }

    #[test]
    fn group_template_is_configurable() {
        let resolver = StubResolver::knowing(&[]);
        let fmt = PrincipalFormat::new(resolver).group_template("group <{}>");
        assert_eq!(fmt.format(&json!("urn:group:g-9")).unwrap(), "group <g-9>");
    }

    #[test]
    fn unknown_urn_renders_verbatim() {
        let resolver = StubResolver::knowing(&[]);
        let fmt = PrincipalFormat::new(resolver);
        assert_eq!(
            fmt.format(&json!("urn:other:whatever")).unwrap(),
            "urn:other:whatever"
        );
    }

    #[test]
    fn unresolved_id_renders_raw_id() {
        let resolver = StubResolver::knowing(&[]);
        let fmt = PrincipalFormat::new(resolver);
        fmt.add_item(&json!("id-unknown"));
        assert_eq!(fmt.format(&json!("id-unknown")).unwrap(), "id-unknown");
    }

    #[test]
    fn exactly_one_batched_lookup() {
        let resolver = StubResolver::knowing(&[("id-1", "ada"), ("id-2", "bob")]);
        let fmt = PrincipalFormat::new(resolver.clone());
        fmt.add_items([json!("id-1"), json!("id-2")].iter());

        assert_eq!(fmt.format(&json!("id-1")).unwrap(), "ada");
        assert_eq!(fmt.format(&json!("id-2")).unwrap(), "bob");
        assert_eq!(fmt.format(&json!("id-1")).unwrap(), "ada");
        assert_eq!(resolver.calls.get(), 1);
    }

    #[test]
    fn lookup_failure_propagates() {
        let fmt = PrincipalFormat::new(StubResolver::failing());
        fmt.add_item(&json!("id-1"));
        let err = fmt.format(&json!("id-1")).unwrap_err();
        assert!(matches!(err, FormatError::Resolution(_)));
    }

    #[test]
    fn null_still_short_circuits() {
        let fmt = PrincipalFormat::new(StubResolver::knowing(&[]));
        assert_eq!(fmt.format(&Value::Null).unwrap(), "None");
    }
}
