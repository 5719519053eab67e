//! Hierarchical `key = value` node documents, as used by the host game's `.cfg` files.
//!
//! ```text
//! KFGlobals
//! {
//!     isDustEnabled = True
//!     dustAmount = 1
//! }
//! ```
//!
//! A document is parsed into an unnamed root [`ConfigNode`] whose children are
//! the top-level sections. Values are kept in file order and may repeat;
//! lookups return the first match.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::NodeError;

/// A named node holding ordered values and child nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigNode {
    name: String,
    values: Vec<(String, String)>,
    nodes: Vec<ConfigNode>,
}

impl ConfigNode {
    /// Creates an empty node.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
            nodes: Vec::new(),
        }
    }

    /// Load and parse the document at `path`.
    pub fn load(path: &Path) -> Result<Self, NodeError> {
        let text = std::fs::read_to_string(path).map_err(|source| NodeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parse document text into an unnamed root node.
    ///
    /// A leading UTF-8 byte-order mark is ignored.
    pub fn parse(text: &str) -> Result<Self, NodeError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut root = ConfigNode::default();
        // Open nodes, innermost last, with the line each was opened on.
        let mut open: Vec<(ConfigNode, usize)> = Vec::new();
        let mut pending_name: Option<String> = None;

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let mut rest = strip_comment(raw);

            loop {
                let brace = rest.find(['{', '}']);
                let head = match brace {
                    Some(pos) => rest[..pos].trim(),
                    None => rest.trim(),
                };

                if !head.is_empty() {
                    let current = match open.last_mut() {
                        Some((node, _)) => node,
                        None => &mut root,
                    };
                    if let Some((key, value)) = head.split_once('=') {
                        current.add_value(key.trim(), value.trim());
                        pending_name = None;
                    } else {
                        pending_name = Some(head.to_string());
                    }
                }

                let Some(pos) = brace else { break };
                if rest.as_bytes()[pos] == b'{' {
                    let name = pending_name.take().unwrap_or_default();
                    open.push((ConfigNode::new(name), line_no));
                } else {
                    let Some((done, _)) = open.pop() else {
                        return Err(NodeError::UnexpectedClose { line: line_no });
                    };
                    match open.last_mut() {
                        Some((parent, _)) => parent.add_node(done),
                        None => root.add_node(done),
                    };
                    pending_name = None;
                }
                rest = &rest[pos + 1..];
            }
        }

        if let Some((node, line)) = open.into_iter().next() {
            return Err(NodeError::Unclosed {
                name: node.name,
                line,
            });
        }
        Ok(root)
    }

    /// Write this node's values and children to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<(), NodeError> {
        std::fs::write(path, self.to_document()).map_err(|source| NodeError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Serialize this node's contents (not the node itself) as document text.
    pub fn to_document(&self) -> String {
        let mut out = String::new();
        self.write_body(&mut out, 0);
        out
    }

    fn write_body(&self, out: &mut String, depth: usize) {
        let indent = "\t".repeat(depth);
        for (key, value) in &self.values {
            let _ = writeln!(out, "{indent}{key} = {value}");
        }
        for child in &self.nodes {
            let _ = writeln!(out, "{indent}{}", child.name);
            let _ = writeln!(out, "{indent}{{");
            child.write_body(out, depth + 1);
            let _ = writeln!(out, "{indent}}}");
        }
    }

    /// Node name. The document root has an empty name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// First value stored under `key`.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_value(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    /// Append a value; existing values with the same key are kept.
    pub fn add_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.push((key.into(), value.into()));
    }

    /// Replace the first value under `key`, or append it if absent.
    pub fn set_value(&mut self, key: &str, value: impl Into<String>) {
        match self.values.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.into(),
            None => self.values.push((key.to_string(), value.into())),
        }
    }

    /// All values in document order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn count_values(&self) -> usize {
        self.values.len()
    }

    /// First child node named `name`.
    pub fn node(&self, name: &str) -> Option<&ConfigNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    pub fn has_node(&self, name: &str) -> bool {
        self.node(name).is_some()
    }

    /// Append a child node and return a handle to it.
    pub fn add_node(&mut self, node: ConfigNode) -> &mut ConfigNode {
        let idx = self.nodes.len();
        self.nodes.push(node);
        &mut self.nodes[idx]
    }

    /// All child nodes in document order.
    pub fn nodes(&self) -> &[ConfigNode] {
        &self.nodes
    }

    pub fn count_nodes(&self) -> usize {
        self.nodes.len()
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(pos) => &line[..pos],
        None => line,
    }
}
