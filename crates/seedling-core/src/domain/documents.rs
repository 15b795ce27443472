//! Shared config documents and the text splice used to merge blocks into them.
//!
//! Documents are treated as opaque text, never parsed. A block is merged at
//! most once, deduplicated by substring containment of a marker derived from
//! the block, and spliced in right after a fixed anchor line.
//!
//! Known limitation: a marker that happens to appear elsewhere in the document
//! (a comment, another service's image name) makes the merge a no-op.

use crate::domain::error::DomainError;

/// Header of the build-script table in `pyproject.toml`.
pub const SCRIPTS_ANCHOR: &str = "[tool.poetry.scripts]";

/// Top-level services key in `docker-compose.yml`.
pub const SERVICES_ANCHOR: &str = "services:";

/// Written when the services document does not exist yet.
pub const SERVICES_SKELETON: &str = "version: '3'\nservices:\n";

/// The kinds of shared document a generator can merge into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Build manifest; must already exist, never bootstrapped.
    Manifest,
    /// Multi-service compose file; bootstrapped from a skeleton when absent.
    Services,
}

impl DocumentKind {
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Manifest => SCRIPTS_ANCHOR,
            Self::Services => SERVICES_ANCHOR,
        }
    }

    pub const fn skeleton(self) -> Option<&'static str> {
        match self {
            Self::Manifest => None,
            Self::Services => Some(SERVICES_SKELETON),
        }
    }
}

/// A `name = "module:function"` line for the manifest's scripts table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEntry {
    line: String,
}

impl ScriptEntry {
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }

    /// Build `name = "target"`.
    pub fn assign(name: &str, target: &str) -> Self {
        Self::new(format!("{name} = \"{target}\""))
    }

    /// Dedup marker: the whole line, verbatim.
    pub fn marker(&self) -> &str {
        &self.line
    }

    /// Left-hand side of the assignment, for status messages.
    pub fn name(&self) -> &str {
        self.line
            .split_once('=')
            .map_or(self.line.as_str(), |(lhs, _)| lhs)
            .trim()
    }

    pub fn as_str(&self) -> &str {
        &self.line
    }
}

/// A service definition for the compose document. The first line names the
/// service (`  worker:`); the rest is copied through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceBlock {
    name: String,
    text: String,
}

impl ServiceBlock {
    pub fn parse(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        let name = text
            .lines()
            .next()
            .unwrap_or_default()
            .trim()
            .trim_matches(':')
            .trim()
            .to_string();

        if name.is_empty() {
            return Err(DomainError::InvalidServiceBlock(
                "first line must name the service".into(),
            ));
        }

        Ok(Self { name, text })
    }

    /// Dedup marker: the service name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Insert `block` on the line directly after the first line equal to
/// `anchor` (trailing whitespace ignored).
///
/// Returns `None` when the anchor line is absent. Trailing newlines of the
/// block are dropped so the anchor's own line break separates it from the
/// rest of the document.
pub fn splice_after_anchor(document: &str, anchor: &str, block: &str) -> Option<String> {
    let anchor_end = anchor_line_end(document, anchor)?;
    let block = block.trim_end_matches(['\n', '\r']);

    let mut merged = String::with_capacity(document.len() + block.len() + 1);
    merged.push_str(&document[..anchor_end]);
    merged.push('\n');
    merged.push_str(block);
    merged.push_str(&document[anchor_end..]);
    Some(merged)
}

/// Byte offset just past the anchor line's content, before its terminator.
fn anchor_line_end(document: &str, anchor: &str) -> Option<usize> {
    let mut offset = 0;
    for line in document.split_inclusive('\n') {
        let content = line.trim_end_matches(['\n', '\r']);
        if content.trim_end() == anchor {
            return Some(offset + content.len());
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = "[tool.poetry]\nname = \"demo\"\n\n[tool.poetry.scripts]\nserve = \"demo.cmd.serve_main:main\"\n\n[build-system]\n";

    #[test]
    fn script_entry_assign_formats_line() {
        let entry = ScriptEntry::assign("sync", "demo.cmd.sync_main:main");
        assert_eq!(entry.as_str(), "sync = \"demo.cmd.sync_main:main\"");
        assert_eq!(entry.name(), "sync");
        assert_eq!(entry.marker(), entry.as_str());
    }

    #[test]
    fn script_entry_without_assignment_names_itself() {
        assert_eq!(ScriptEntry::new("bare").name(), "bare");
    }

    #[test]
    fn splice_inserts_after_anchor_line() {
        let merged = splice_after_anchor(MANIFEST, SCRIPTS_ANCHOR, "foo = \"bar\"").unwrap();
        assert!(merged.contains("[tool.poetry.scripts]\nfoo = \"bar\"\nserve = "));
        assert!(merged.ends_with("[build-system]\n"));
    }

    #[test]
    fn splice_requires_anchor() {
        assert_eq!(splice_after_anchor("[tool.poetry]\n", SCRIPTS_ANCHOR, "x = 1"), None);
    }

    #[test]
    fn splice_ignores_anchor_text_inside_other_lines() {
        let doc = "# see [tool.poetry.scripts] below\n[tool.poetry.scripts]\n";
        let merged = splice_after_anchor(doc, SCRIPTS_ANCHOR, "a = \"b\"").unwrap();
        assert_eq!(
            merged,
            "# see [tool.poetry.scripts] below\n[tool.poetry.scripts]\na = \"b\"\n"
        );
    }

    #[test]
    fn splice_handles_anchor_on_last_line_without_newline() {
        let merged = splice_after_anchor("services:", SERVICES_ANCHOR, "  web:\n").unwrap();
        assert_eq!(merged, "services:\n  web:");
    }

    #[test]
    fn splice_preserves_crlf_documents() {
        let merged = splice_after_anchor("services:\r\n  db:\r\n", SERVICES_ANCHOR, "  web:").unwrap();
        assert_eq!(merged, "services:\n  web:\r\n  db:\r\n");
    }

    #[test]
    fn splice_keeps_trailing_whitespace_on_anchor_line() {
        let merged =
            splice_after_anchor("services:   \n  db:\n", SERVICES_ANCHOR, "  web:\n    image: x\n")
                .unwrap();
        assert_eq!(merged, "services:   \n  web:\n    image: x\n  db:\n");
    }

    #[test]
    fn splice_only_touches_first_anchor() {
        let doc = "services:\nservices:\n";
        let merged = splice_after_anchor(doc, SERVICES_ANCHOR, "  a:").unwrap();
        assert_eq!(merged, "services:\n  a:\nservices:\n");
    }

    #[test]
    fn service_block_name_from_first_line() {
        let block = ServiceBlock::parse("  worker:\n    image: demo_worker:latest\n").unwrap();
        assert_eq!(block.name(), "worker");
    }

    #[test]
    fn service_block_name_strips_carriage_return() {
        let block = ServiceBlock::parse("  worker:\r\n    build: .\r\n").unwrap();
        assert_eq!(block.name(), "worker");
    }

    #[test]
    fn service_block_requires_name() {
        assert!(matches!(
            ServiceBlock::parse("\n  image: x\n"),
            Err(DomainError::InvalidServiceBlock(_))
        ));
        assert!(ServiceBlock::parse("").is_err());
        assert!(ServiceBlock::parse(" : ").is_err());
    }

    #[test]
    fn document_kinds_know_their_anchor_and_skeleton() {
        assert_eq!(DocumentKind::Manifest.anchor(), SCRIPTS_ANCHOR);
        assert_eq!(DocumentKind::Manifest.skeleton(), None);
        assert_eq!(DocumentKind::Services.skeleton(), Some(SERVICES_SKELETON));
        assert!(
            DocumentKind::Services
                .skeleton()
                .unwrap()
                .lines()
                .any(|l| l == SERVICES_ANCHOR)
        );
    }
}
