//! Greedy descent through a command tree.

use crate::command::Command;

/// Result of walking a token sequence through a tree.
#[derive(Debug)]
pub struct Resolution<'a> {
    /// Deepest node whose name or alias matched.
    pub node: &'a Command,
    /// Tokens not consumed by the walk.
    pub remaining: &'a [String],
    /// Names from the root down to `node`.
    pub path: Vec<&'a str>,
}

impl Resolution<'_> {
    /// Space-joined path, e.g. `say greetings`.
    pub fn path_string(&self) -> String {
        self.path.join(" ")
    }
}

/// Walk `tokens` from `root`, consuming one token per matched child.
///
/// Stops at the first token that names no child of the current node; that
/// node and the unconsumed tail are returned. No backtracking.
pub fn resolve<'a>(root: &'a Command, tokens: &'a [String]) -> Resolution<'a> {
    let mut node = root;
    let mut remaining = tokens;
    let mut path = vec![root.name()];

    while let Some((first, rest)) = remaining.split_first() {
        let Some(child) = node.find_child(first) else {
            break;
        };
        node = child;
        remaining = rest;
        path.push(child.name());
    }

    Resolution {
        node,
        remaining,
        path,
    }
}
