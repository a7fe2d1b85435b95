use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use super::key_path::{join_segments, Segment};

/// A node of the nested per-locale document
///
/// Array positions never assigned by any row stay `None` and serialize as
/// `null`, so index `k` always holds the value written to segment `k`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LocaleNode {
    Leaf(String),
    Object(BTreeMap<String, LocaleNode>),
    Array(Vec<Option<LocaleNode>>),
}

/// Shape of a node, used when reporting collisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Leaf,
    Object,
    Array,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Leaf => "value",
            NodeKind::Object => "object",
            NodeKind::Array => "array",
        };
        f.write_str(name)
    }
}

/// A path where a later row replaced a node of a different shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    /// Dotted path of the replaced node
    pub path: String,
    pub earlier: NodeKind,
    pub later: NodeKind,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' was {} and is replaced by {}",
            self.path, self.earlier, self.later
        )
    }
}

impl Default for LocaleNode {
    fn default() -> Self {
        Self::empty_object()
    }
}

impl LocaleNode {
    pub fn leaf(value: impl Into<String>) -> Self {
        Self::Leaf(value.into())
    }

    pub fn empty_object() -> Self {
        Self::Object(BTreeMap::new())
    }

    /// Object holding a single field
    pub fn object_with(field: impl Into<String>, child: LocaleNode) -> Self {
        let mut map = BTreeMap::new();
        map.insert(field.into(), child);
        Self::Object(map)
    }

    /// Array with `child` at `index` and holes before it
    pub fn array_with(index: usize, child: LocaleNode) -> Self {
        let mut items = vec![None; index + 1];
        items[index] = Some(child);
        Self::Array(items)
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Leaf(_) => NodeKind::Leaf,
            Self::Object(_) => NodeKind::Object,
            Self::Array(_) => NodeKind::Array,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Leaf(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_empty_object(&self) -> bool {
        matches!(self, Self::Object(map) if map.is_empty())
    }

    /// Look up a node by dotted path. Returns `None` for holes and misses.
    pub fn get(&self, dotted: &str) -> Option<&LocaleNode> {
        dotted.split('.').try_fold(self, |node, token| match node {
            Self::Object(map) => map.get(token),
            Self::Array(items) => token
                .parse::<usize>()
                .ok()
                .and_then(|i| items.get(i))
                .and_then(Option::as_ref),
            Self::Leaf(_) => None,
        })
    }

    /// Number of leaves in the tree
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Object(map) => map.values().map(LocaleNode::leaf_count).sum(),
            Self::Array(items) => items.iter().flatten().map(LocaleNode::leaf_count).sum(),
        }
    }

    /// Deep-merge `later` into `self`; `later` wins wherever both hold a value.
    ///
    /// Objects merge key-wise and arrays position-wise, with holes on either
    /// side filled from the other. When the shapes at one path differ, the
    /// later node replaces the earlier one and the path is returned as a
    /// collision.
    pub fn merge(&mut self, later: LocaleNode) -> Vec<Collision> {
        let mut path = Vec::new();
        let mut collisions = Vec::new();
        self.merge_at(later, &mut path, &mut collisions);
        collisions
    }

    fn merge_at(
        &mut self,
        later: LocaleNode,
        path: &mut Vec<Segment>,
        collisions: &mut Vec<Collision>,
    ) {
        let earlier_kind = self.kind();

        match (self, later) {
            (Self::Object(earlier), Self::Object(later)) => {
                for (key, node) in later {
                    path.push(Segment::Field(key.clone()));
                    match earlier.get_mut(&key) {
                        Some(existing) => existing.merge_at(node, path, collisions),
                        None => {
                            earlier.insert(key, node);
                        }
                    }
                    path.pop();
                }
            }
            (Self::Array(earlier), Self::Array(later)) => {
                if earlier.len() < later.len() {
                    earlier.resize(later.len(), None);
                }
                for (index, slot) in later.into_iter().enumerate() {
                    let Some(node) = slot else { continue };
                    path.push(Segment::Index(index));
                    match &mut earlier[index] {
                        Some(existing) => existing.merge_at(node, path, collisions),
                        hole => *hole = Some(node),
                    }
                    path.pop();
                }
            }
            (this, later) => {
                if earlier_kind != later.kind() {
                    collisions.push(Collision {
                        path: join_segments(path),
                        earlier: earlier_kind,
                        later: later.kind(),
                    });
                }
                *this = later;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_array_with_leaves_holes() {
        let node = LocaleNode::array_with(2, LocaleNode::leaf("c"));
        assert_eq!(
            node,
            LocaleNode::Array(vec![None, None, Some(LocaleNode::leaf("c"))])
        );
    }

    #[test]
    fn test_serialize_holes_as_null() {
        let node = LocaleNode::object_with(
            "items",
            LocaleNode::array_with(1, LocaleNode::leaf("b")),
        );
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({ "items": [null, "b"] })
        );
    }

    #[test]
    fn test_merge_objects_unions_keys() {
        let mut earlier = LocaleNode::object_with("a", LocaleNode::leaf("1"));
        let later = LocaleNode::object_with("b", LocaleNode::leaf("2"));

        let collisions = earlier.merge(later);
        assert!(collisions.is_empty());
        assert_eq!(
            serde_json::to_value(&earlier).unwrap(),
            json!({ "a": "1", "b": "2" })
        );
    }

    #[test]
    fn test_merge_later_leaf_wins() {
        let mut earlier = LocaleNode::object_with("a", LocaleNode::leaf("old"));
        earlier.merge(LocaleNode::object_with("a", LocaleNode::leaf("new")));
        assert_eq!(earlier.get("a").and_then(LocaleNode::as_str), Some("new"));
    }

    #[test]
    fn test_merge_arrays_fills_holes_from_both_sides() {
        let mut earlier = LocaleNode::Array(vec![Some(LocaleNode::leaf("a")), None]);
        let later = LocaleNode::Array(vec![None, Some(LocaleNode::leaf("b")), None]);

        earlier.merge(later);
        assert_eq!(
            earlier,
            LocaleNode::Array(vec![
                Some(LocaleNode::leaf("a")),
                Some(LocaleNode::leaf("b")),
                None,
            ])
        );
    }

    #[test]
    fn test_merge_array_positions_deep_merge() {
        let mut earlier =
            LocaleNode::array_with(0, LocaleNode::object_with("name", LocaleNode::leaf("n")));
        let later =
            LocaleNode::array_with(0, LocaleNode::object_with("age", LocaleNode::leaf("20")));

        earlier.merge(later);
        assert_eq!(
            serde_json::to_value(&earlier).unwrap(),
            json!([{ "name": "n", "age": "20" }])
        );
    }

    #[test]
    fn test_merge_shape_mismatch_reports_collision() {
        let mut earlier = LocaleNode::object_with(
            "list",
            LocaleNode::object_with("name", LocaleNode::leaf("x")),
        );
        let later = LocaleNode::object_with("list", LocaleNode::array_with(0, LocaleNode::leaf("y")));

        let collisions = earlier.merge(later);
        assert_eq!(
            collisions,
            vec![Collision {
                path: "list".to_string(),
                earlier: NodeKind::Object,
                later: NodeKind::Array,
            }]
        );
        assert_eq!(serde_json::to_value(&earlier).unwrap(), json!({ "list": ["y"] }));
    }

    #[test]
    fn test_merge_leaf_replaced_by_container() {
        let mut earlier = LocaleNode::object_with("a", LocaleNode::leaf("x"));
        let later = LocaleNode::object_with("a", LocaleNode::object_with("b", LocaleNode::leaf("y")));

        let collisions = earlier.merge(later);
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].to_string(), "'a' was value and is replaced by object");
        assert_eq!(earlier.get("a.b").and_then(LocaleNode::as_str), Some("y"));
    }

    #[test]
    fn test_get_and_leaf_count() {
        let node = LocaleNode::object_with(
            "school",
            LocaleNode::Array(vec![
                Some(LocaleNode::leaf("a")),
                None,
                Some(LocaleNode::object_with("type", LocaleNode::leaf("b"))),
            ]),
        );

        assert_eq!(node.get("school.0").and_then(LocaleNode::as_str), Some("a"));
        assert!(node.get("school.1").is_none());
        assert_eq!(node.get("school.2.type").and_then(LocaleNode::as_str), Some("b"));
        assert!(node.get("school.9").is_none());
        assert_eq!(node.leaf_count(), 2);
    }

    #[test]
    fn test_default_is_empty_object() {
        assert!(LocaleNode::default().is_empty_object());
        assert_eq!(serde_json::to_string(&LocaleNode::default()).unwrap(), "{}");
    }
}
