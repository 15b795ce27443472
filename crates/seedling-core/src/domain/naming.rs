//! Identifier segmentation.
//!
//! Every generated file stem, command name and class name is derived from one
//! user-supplied identifier. Segmenting it once into lowercase word tokens
//! keeps those derived names consistent with each other:
//!
//! | Input                | Tokens                         | `snake()`             | `pascal()`          |
//! |----------------------|--------------------------------|-----------------------|---------------------|
//! | `HelloWorld`         | `hello`, `world`               | `hello_world`         | `HelloWorld`        |
//! | `hello-world-2`      | `hello`, `world`, `2`          | `hello_world_2`       | `HelloWorld2`       |
//! | `HelloWorld_Foo-Bar` | `hello`, `world`, `foo`, `bar` | `hello_world_foo_bar` | `HelloWorldFooBar`  |

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::error::DomainError;

const SEPARATORS: [char; 2] = ['_', '-'];

/// An uppercase letter followed by any run of lowercase letters or digits.
static CAPITALISED_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Lu}[\p{Ll}\p{Nd}]*").expect("static regex is valid"));

/// Split an identifier of any casing convention into lowercase word tokens.
///
/// Capitalised runs (`Hello`, `World2`) start a new pre-token; the text
/// between them is kept as its own pre-token. Each pre-token is lowercased and
/// split on `_` and `-`; any other character stays inside its token.
///
/// The function is total: non-empty input always yields at least one token.
/// Input made only of separators (`"__"`) falls back to the whole lowercased
/// string. Empty input yields no tokens.
///
/// ```
/// use seedling_core::domain::naming::segment;
///
/// assert_eq!(segment("HelloWorld_Foo-Bar"), ["hello", "world", "foo", "bar"]);
/// assert_eq!(segment("task"), ["task"]);
/// ```
pub fn segment(identifier: &str) -> Vec<String> {
    if identifier.is_empty() {
        return Vec::new();
    }

    let mut tokens: Vec<String> = pre_tokens(identifier)
        .into_iter()
        .flat_map(|pre| {
            pre.to_lowercase()
                .split(SEPARATORS)
                .filter(|fragment| !fragment.is_empty())
                .map(str::to_owned)
                .collect::<Vec<_>>()
        })
        .collect();

    if tokens.is_empty() {
        tokens.push(identifier.to_lowercase());
    }
    tokens
}

fn pre_tokens(identifier: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut cursor = 0;

    for run in CAPITALISED_RUN.find_iter(identifier) {
        if run.start() > cursor {
            pieces.push(&identifier[cursor..run.start()]);
        }
        pieces.push(run.as_str());
        cursor = run.end();
    }
    if cursor < identifier.len() {
        pieces.push(&identifier[cursor..]);
    }

    pieces
}

/// A segmented identifier.
///
/// Invariant: holds at least one token, every token is non-empty and
/// lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    raw: String,
    tokens: Vec<String>,
}

impl Name {
    /// Segment `identifier`, rejecting input that yields no tokens.
    pub fn parse(identifier: impl Into<String>) -> Result<Self, DomainError> {
        let raw = identifier.into();
        let tokens = segment(&raw);
        if tokens.is_empty() {
            return Err(DomainError::EmptyIdentifier);
        }
        Ok(Self { raw, tokens })
    }

    /// The identifier exactly as supplied.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Tokens joined with `_`: file stems, module and command names.
    pub fn snake(&self) -> String {
        self.tokens.join("_")
    }

    /// Each token capitalised and concatenated: class names.
    pub fn pascal(&self) -> String {
        self.tokens.iter().map(|t| capitalise(t)).collect()
    }

    /// Append `suffix` as a trailing token unless the name already ends with it.
    ///
    /// `Name::parse("Hello")?.with_suffix("task").pascal()` is `HelloTask`,
    /// while `HelloTask` stays `HelloTask`.
    pub fn with_suffix(&self, suffix: &str) -> Self {
        let mut tokens = self.tokens.clone();
        let suffix_tokens = segment(suffix);
        if !tokens.ends_with(&suffix_tokens) {
            tokens.extend(suffix_tokens);
        }
        Self {
            raw: self.raw.clone(),
            tokens,
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.snake())
    }
}

fn capitalise(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
