//! Flat `${key}` template substitution.
//!
//! There are no loops, conditionals or filters: a template is plain text with
//! `${key}` placeholders, rendered against a [`Bindings`] map.
//!
//! ## Edge cases
//!
//! - `${unknown}` stays verbatim in the output (no error).
//! - `${name}${name}` replaces both occurrences.
//! - A bound value containing `${...}` is inserted as-is and never expanded.
//! - There is no escape syntax: a literal `${x}` that must survive rendering
//!   only does so while `x` is unbound.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt::Display;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]*)\}").expect("static regex is valid"));

/// Variables available to a template. Keys are unique; inserting an existing
/// key replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    values: HashMap<String, String>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert. Values are coerced to their `Display` form.
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) {
        self.values.insert(key.into(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Bindings
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bindings = Self::new();
        for (key, value) in iter {
            bindings.insert(key, value);
        }
        bindings
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Bindings
where
    K: Into<String>,
    V: Display,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Distinct placeholder keys in the order they first appear.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut keys: Vec<&str> = Vec::new();
    for caps in PLACEHOLDER.captures_iter(template) {
        if let Some(key) = caps.get(1).map(|m| m.as_str()) {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
    }
    keys
}

/// Render `template` against `bindings`.
///
/// Returns the input borrowed when nothing was substituted, so rendering
/// plain text never allocates.
///
/// ```
/// use seedling_core::domain::template::{render, Bindings};
///
/// let bindings = Bindings::new().with("name", "Bob");
/// assert_eq!(render("Hi ${name}, id=${id}", &bindings), "Hi Bob, id=${id}");
/// ```
pub fn render<'t>(template: &'t str, bindings: &Bindings) -> Cow<'t, str> {
    if !placeholders(template)
        .iter()
        .any(|key| bindings.get(key).is_some())
    {
        return Cow::Borrowed(template);
    }

    PLACEHOLDER.replace_all(template, |caps: &Captures<'_>| {
        bindings
            .get(&caps[1])
            .map_or_else(|| caps[0].to_owned(), str::to_owned)
    })
}
