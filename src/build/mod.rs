pub mod builder;
pub mod filter;
pub mod key_path;
pub mod locale;
pub mod node;

pub use builder::{
    build_locale_tree, build_row_tree, merge_trees, row_tree, LocaleTree, RejectedRow, Row,
};
pub use filter::{should_skip, NON_VALUE};
pub use key_path::{KeyPath, PathLimit, Segment, MAX_ARRAY_INDEX, MAX_PATH_DEPTH};
pub use locale::value_column;
pub use node::{Collision, LocaleNode, NodeKind};
