//! Minimal SVG/XML element tree.
//!
//! Composition code builds an [`Element`] tree and serializes it once.
//! All escaping lives here, so no caller ever splices raw strings into
//! markup.

use std::fmt::{self, Display, Write};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

// ============================================================================
// Node
// ============================================================================

/// A node in the element tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// An XML element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Appends an attribute. Attributes serialize in insertion order.
    pub fn attr(mut self, name: &'static str, value: impl Display) -> Self {
        self.attrs.push((name, value.to_string()));
        self
    }

    /// Appends an attribute only when `value` is `Some`.
    pub fn attr_opt(self, name: &'static str, value: Option<impl Display>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Serializes the tree, one element per line with two-space indentation.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_to(&mut out, Some(0));
        out
    }

    /// Serializes the tree on a single line with no whitespace between
    /// elements, for embedding in HTML or Markdown.
    pub fn to_compact_markup(&self) -> String {
        let mut out = String::new();
        let _ = self.write_to(&mut out, None);
        out
    }

    fn write_to(&self, out: &mut String, depth: Option<usize>) -> fmt::Result {
        indent(out, depth);
        write!(out, "<{}", self.name)?;
        for (key, value) in &self.attrs {
            write!(out, " {}=\"{}\"", key, escape_attr(value))?;
        }

        if self.children.is_empty() {
            out.push_str(if depth.is_some() { "/>" } else { " />" });
            return Ok(());
        }

        let inline = self.children.iter().all(|c| matches!(c, Node::Text(_)));
        out.push('>');
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(&escape_text(text)),
                Node::Element(element) => {
                    if depth.is_some() {
                        out.push('\n');
                    }
                    element.write_to(out, depth.map(|d| d + 1))?;
                }
            }
        }
        if !inline && depth.is_some() {
            out.push('\n');
            indent(out, depth);
        }
        write!(out, "</{}>", self.name)
    }
}

fn indent(out: &mut String, depth: Option<usize>) {
    for _ in 0..depth.unwrap_or(0) {
        out.push_str("  ");
    }
}

// ============================================================================
// Escaping
// ============================================================================

/// Escapes a string for use inside a double-quoted attribute value.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes a string for use as element text content.
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Formats a pixel coordinate without a trailing `.0` for whole numbers.
pub fn px(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

// ============================================================================
// Tests
// ============================================================================
