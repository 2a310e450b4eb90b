//! Addressing context handed to user policies.

use object_graph::pointer::format_pointer;
use object_graph::Value;

/// Position of a key within the graph being sorted.
///
/// `depth` is the depth of the node that owns `key`: the keys of the root
/// object and the elements of a root array are at depth 0, the keys of a
/// node stored under one of them are at depth 1, and so on. Object and
/// array nodes follow the same rule.
#[derive(Debug, Clone)]
pub struct Context {
    /// Property name, or the decimal index of an array element. `None` only
    /// for the root context.
    pub key: Option<String>,
    /// The value under `key`. Accessor properties report `Undefined`: their
    /// getter is not invoked to build a context.
    pub value: Value,
    /// Keys from the root down to and including `key`.
    pub path: Vec<String>,
    pub depth: usize,
}

impl Context {
    /// Context of the root node itself, before any key is visited.
    pub(crate) fn root(value: Value) -> Self {
        Self {
            key: None,
            value,
            path: Vec::new(),
            depth: 0,
        }
    }

    pub(crate) fn child(parent_path: &[String], key: &str, value: Value, depth: usize) -> Self {
        let mut path = Vec::with_capacity(parent_path.len() + 1);
        path.extend_from_slice(parent_path);
        path.push(key.to_string());
        Self {
            key: Some(key.to_string()),
            value,
            path,
            depth,
        }
    }

    pub fn is_root(&self) -> bool {
        self.key.is_none()
    }

    /// The path as a JSON Pointer, `""` for the root.
    pub fn pointer(&self) -> String {
        format_pointer(&self.path)
    }
}
