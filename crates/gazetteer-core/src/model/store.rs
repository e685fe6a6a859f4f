// crates/gazetteer-core/src/model/store.rs
//! Arena-backed hierarchy of administrative units.
use crate::common::ROOT_CODE;
use std::collections::HashMap;

/// Stable handle of a node inside a [`HierarchyStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The synthetic country root always sits at slot 0.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// One administrative unit.
///
/// `name` stays `None` while the node is only a placeholder created by a
/// child row that referenced it before its own row arrived.
#[derive(Debug, Clone)]
pub struct Node {
    pub code: String,
    pub name: Option<String>,
    pub parent: Option<NodeId>,
    /// Insertion order from ingestion.
    pub children: Vec<NodeId>,
}

impl Node {
    fn placeholder(code: &str) -> Self {
        Self {
            code: code.to_owned(),
            name: None,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Code → node mapping over a flat arena.
///
/// Parent/child links are [`NodeId`]s into `nodes`, so the tree carries no
/// owning back-references.
#[derive(Debug, Clone)]
pub struct HierarchyStore {
    nodes: Vec<Node>,
    by_code: HashMap<String, NodeId>,
}

impl Default for HierarchyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HierarchyStore {
    pub fn new() -> Self {
        let mut by_code = HashMap::new();
        by_code.insert(ROOT_CODE.to_owned(), NodeId::ROOT);
        Self {
            nodes: vec![Node::placeholder(ROOT_CODE)],
            by_code,
        }
    }

    /// Returns the handle for `code`, creating an empty placeholder on first reference.
    fn intern(&mut self, code: &str) -> NodeId {
        if let Some(id) = self.by_code.get(code) {
            return *id;
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::placeholder(code));
        self.by_code.insert(code.to_owned(), id);
        id
    }

    /// Makes sure `parent_code` exists and lists `child_code` among its children.
    pub fn upsert_child(&mut self, parent_code: &str, child_code: &str) {
        let parent = self.intern(parent_code);
        let child = self.intern(child_code);
        let children = &mut self.nodes[parent.index()].children;
        if !children.contains(&child) {
            children.push(child);
        }
    }

    /// Creates the node or fills in its name and parent.
    pub fn upsert_self(&mut self, code: &str, parent_code: &str, name: &str) {
        let parent = self.intern(parent_code);
        let id = self.intern(code);
        let node = &mut self.nodes[id.index()];
        node.name = Some(name.to_owned());
        node.parent = Some(parent);
    }

    pub fn get(&self, code: &str) -> Option<&Node> {
        self.by_code.get(code).map(|id| &self.nodes[id.index()])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    /// Direct children in insertion order; empty for an unknown code.
    pub fn children_of(&self, code: &str) -> Vec<&str> {
        self.get(code)
            .map(|node| {
                node.children
                    .iter()
                    .map(|id| self.nodes[id.index()].code.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Display name, or `None` for unknown codes and unnamed placeholders.
    pub fn name_of(&self, code: &str) -> Option<&str> {
        self.get(code).and_then(Node::name)
    }

    /// Parent code, `None` for the root, top-level units and unknown codes.
    pub fn parent_of(&self, code: &str) -> Option<&str> {
        let parent = self.get(code)?.parent?;
        (parent != NodeId::ROOT).then(|| self.nodes[parent.index()].code.as_str())
    }

    /// Codes from `code` up to (excluding) the root, most specific first.
    ///
    /// Unknown codes and the root itself yield an empty chain. The walk is
    /// bounded by the arena size, so malformed cyclic input cannot hang it.
    pub fn ancestor_chain(&self, code: &str) -> Vec<&str> {
        let mut chain = Vec::new();
        let mut cursor = self.by_code.get(code).copied();
        while let Some(id) = cursor {
            if id == NodeId::ROOT || chain.len() >= self.nodes.len() {
                break;
            }
            let node = &self.nodes[id.index()];
            chain.push(node.code.as_str());
            cursor = node.parent;
        }
        chain
    }

    /// All nodes except the root, in first-reference order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().skip(1)
    }

    /// Number of units, root excluded.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First node that never received its own row (no name or no parent).
    pub(crate) fn first_dangling(&self) -> Option<&Node> {
        self.iter()
            .find(|node| node.name.is_none() || node.parent.is_none())
    }
}
