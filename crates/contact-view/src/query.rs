//! Element queries over a rendered document.
//!
//! The query families mirror those of DOM testing libraries:
//!
//! | Prefix | No match | One match | Many matches |
//! |---|---|---|---|
//! | `get_by_*` | error | node | error |
//! | `query_by_*` | `None` | node | error |
//! | `get_all_by_*` | error | nodes | nodes |
//! | `query_all_by_*` | empty | nodes | nodes |
//!
//! Rendering is synchronous, so every query sees the state after the last
//! event and no waiting variants exist.

use std::fmt;

use contact_model::Field;
use regex::Regex;
use thiserror::Error;

use crate::node::{Document, Node, Role, Tag};

/// Query failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("unable to find an element by {selector}")]
    NotFound { selector: String },

    #[error("found {count} elements by {selector}, expected exactly one")]
    Multiple { selector: String, count: usize },
}

/// How a query compares text.
///
/// Text is trimmed and inner whitespace runs are collapsed before matching.
/// `Exact` compares the whole normalized string; `Pattern` searches it.
#[derive(Debug, Clone)]
pub enum TextMatch {
    Exact(String),
    Pattern(Regex),
}

impl TextMatch {
    /// Compile a regex matcher. Use `(?i)` for case-insensitive matching.
    ///
    /// # Errors
    ///
    /// Returns the regex compile error for an invalid pattern.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self::Pattern)
    }

    pub fn matches(&self, text: &str) -> bool {
        let text = normalize(text);
        match self {
            Self::Exact(expected) => text == normalize(expected),
            Self::Pattern(regex) => regex.is_match(&text),
        }
    }
}

impl fmt::Display for TextMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(text) => write!(f, "{text:?}"),
            Self::Pattern(regex) => write!(f, "/{}/", regex.as_str()),
        }
    }
}

impl From<&str> for TextMatch {
    fn from(text: &str) -> Self {
        Self::Exact(text.to_string())
    }
}

impl From<String> for TextMatch {
    fn from(text: String) -> Self {
        Self::Exact(text)
    }
}

impl From<Regex> for TextMatch {
    fn from(regex: Regex) -> Self {
        Self::Pattern(regex)
    }
}

fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Query façade over a rendered [`Document`].
#[derive(Debug, Clone)]
pub struct Screen {
    document: Document,
}

impl Screen {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Text of the label associated with `field`, if rendered.
    fn label_for(&self, field: Field) -> Option<String> {
        self.document
            .nodes()
            .into_iter()
            .find(|node| node.tag == Tag::Label && node.label_for == Some(field))
            .map(Node::text_content)
    }

    /// Accessible name: `aria-label`, the associated label for text
    /// controls, otherwise the text content.
    pub fn accessible_name(&self, node: &Node) -> String {
        if let Some(label) = &node.aria_label {
            return label.clone();
        }
        if let Some(field) = node.field() {
            return self.label_for(field).unwrap_or_default();
        }
        node.text_content()
    }

    // =========================================================================
    // ROLE
    // =========================================================================

    pub fn query_all_by_role(&self, role: Role) -> Vec<&Node> {
        self.document
            .nodes()
            .into_iter()
            .filter(|node| node.role == Some(role))
            .collect()
    }

    /// Nodes with `role` whose accessible name matches `name`.
    pub fn query_all_by_role_named(&self, role: Role, name: impl Into<TextMatch>) -> Vec<&Node> {
        let name = name.into();
        self.query_all_by_role(role)
            .into_iter()
            .filter(|node| name.matches(&self.accessible_name(node)))
            .collect()
    }

    /// # Errors
    ///
    /// Fails unless exactly one node has `role`.
    pub fn get_by_role(&self, role: Role) -> Result<&Node, QueryError> {
        single(self.query_all_by_role(role), || format!("role {}", role.as_str()))
    }

    /// # Errors
    ///
    /// Fails unless exactly one node with `role` has a matching name.
    pub fn get_by_role_named(
        &self,
        role: Role,
        name: impl Into<TextMatch>,
    ) -> Result<&Node, QueryError> {
        let name = name.into();
        let selector = || format!("role {} named {name}", role.as_str());
        single(self.query_all_by_role_named(role, name.clone()), selector)
    }

    /// # Errors
    ///
    /// Fails when more than one node has `role`.
    pub fn query_by_role(&self, role: Role) -> Result<Option<&Node>, QueryError> {
        optional(self.query_all_by_role(role), || {
            format!("role {}", role.as_str())
        })
    }

    // =========================================================================
    // LABEL TEXT
    // =========================================================================

    /// Controls whose label text matches.
    pub fn query_all_by_label_text(&self, text: impl Into<TextMatch>) -> Vec<&Node> {
        let text = text.into();
        let fields: Vec<Field> = self
            .document
            .nodes()
            .into_iter()
            .filter(|node| node.tag == Tag::Label && text.matches(&node.text_content()))
            .filter_map(|node| node.label_for)
            .collect();
        self.document
            .nodes()
            .into_iter()
            .filter(|node| node.field().is_some_and(|field| fields.contains(&field)))
            .collect()
    }

    /// # Errors
    ///
    /// Fails unless exactly one control has a matching label.
    pub fn get_by_label_text(&self, text: impl Into<TextMatch>) -> Result<&Node, QueryError> {
        let text = text.into();
        let selector = || format!("label text {text}");
        single(self.query_all_by_label_text(text.clone()), selector)
    }

    // =========================================================================
    // TEXT
    // =========================================================================

    /// Nodes whose own text matches.
    pub fn query_all_by_text(&self, text: impl Into<TextMatch>) -> Vec<&Node> {
        let text = text.into();
        self.document
            .nodes()
            .into_iter()
            .filter(|node| !node.text.trim().is_empty() && text.matches(&node.text))
            .collect()
    }

    /// # Errors
    ///
    /// Fails unless exactly one node has matching own text.
    pub fn get_by_text(&self, text: impl Into<TextMatch>) -> Result<&Node, QueryError> {
        let text = text.into();
        let selector = || format!("text {text}");
        single(self.query_all_by_text(text.clone()), selector)
    }

    /// # Errors
    ///
    /// Fails when more than one node has matching own text.
    pub fn query_by_text(&self, text: impl Into<TextMatch>) -> Result<Option<&Node>, QueryError> {
        let text = text.into();
        let selector = || format!("text {text}");
        optional(self.query_all_by_text(text.clone()), selector)
    }

    // =========================================================================
    // TEST ID
    // =========================================================================

    pub fn query_all_by_test_id(&self, id: impl Into<TextMatch>) -> Vec<&Node> {
        let id = id.into();
        self.document
            .nodes()
            .into_iter()
            .filter(|node| node.test_id.as_deref().is_some_and(|test_id| id.matches(test_id)))
            .collect()
    }

    /// # Errors
    ///
    /// Fails when no node has a matching test id.
    pub fn get_all_by_test_id(&self, id: impl Into<TextMatch>) -> Result<Vec<&Node>, QueryError> {
        let id = id.into();
        let nodes = self.query_all_by_test_id(id.clone());
        if nodes.is_empty() {
            return Err(QueryError::NotFound {
                selector: format!("test id {id}"),
            });
        }
        Ok(nodes)
    }

    /// # Errors
    ///
    /// Fails when more than one node has a matching test id.
    pub fn query_by_test_id(&self, id: impl Into<TextMatch>) -> Result<Option<&Node>, QueryError> {
        let id = id.into();
        let selector = || format!("test id {id}");
        optional(self.query_all_by_test_id(id.clone()), selector)
    }
}

fn single<'a>(
    mut nodes: Vec<&'a Node>,
    selector: impl FnOnce() -> String,
) -> Result<&'a Node, QueryError> {
    match nodes.len() {
        1 => Ok(nodes.remove(0)),
        0 => Err(QueryError::NotFound {
            selector: selector(),
        }),
        count => Err(QueryError::Multiple {
            selector: selector(),
            count,
        }),
    }
}

fn optional<'a>(
    mut nodes: Vec<&'a Node>,
    selector: impl FnOnce() -> String,
) -> Result<Option<&'a Node>, QueryError> {
    match nodes.len() {
        0 => Ok(None),
        1 => Ok(Some(nodes.remove(0))),
        count => Err(QueryError::Multiple {
            selector: selector(),
            count,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_normalizes_whitespace() {
        let matcher = TextMatch::from("Hello world");
        assert!(matcher.matches("  Hello \n world "));
        assert!(!matcher.matches("Hello world!"));
    }

    #[test]
    fn pattern_match_searches() {
        let matcher = TextMatch::pattern("(?i)first name*").unwrap();
        assert!(matcher.matches("First Name*"));
        assert!(!matcher.matches("Last Name*"));
        assert_eq!(matcher.to_string(), "/(?i)first name*/");
    }

    #[test]
    fn single_reports_ambiguity() {
        let a = Node::new(Tag::Paragraph).text("x");
        let b = Node::new(Tag::Paragraph).text("x");
        let err = single(vec![&a, &b], || "text \"x\"".to_string()).unwrap_err();
        assert_eq!(
            err,
            QueryError::Multiple {
                selector: "text \"x\"".to_string(),
                count: 2
            }
        );
    }
}
