use super::filter::should_skip;
use super::key_path::{KeyPath, PathLimit, Segment};
use super::locale::{cell, value_column, COLUMN_OF_KEYS};
use super::node::{Collision, LocaleNode};

/// One spreadsheet row: key path first, then one value per configured locale
pub type Row = Vec<String>;

/// Merged document for one (sheet, locale) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTree {
    pub root: LocaleNode,
    /// Paths where rows disagreed about the node shape, in input order
    pub collisions: Vec<Collision>,
    /// Rows left out because their key path exceeds a build limit
    pub rejected: Vec<RejectedRow>,
}

/// A row whose key path could not be materialized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    pub key: String,
    pub limit: PathLimit,
}

/// Build the minimal tree holding `value` at `path`.
///
/// Containers are created innermost first: each index segment wraps the
/// child in an array, each field segment wraps it in an object. Paths over
/// `MAX_PATH_DEPTH` segments or with an index above `MAX_ARRAY_INDEX` are
/// refused.
pub fn build_row_tree(path: &KeyPath, value: &str) -> Result<LocaleNode, PathLimit> {
    if path.is_empty() {
        return Ok(LocaleNode::empty_object());
    }
    path.check_limits()?;

    Ok(path
        .segments()
        .iter()
        .rev()
        .fold(LocaleNode::leaf(value), |child, segment| match segment {
            Segment::Field(name) => LocaleNode::object_with(name.clone(), child),
            Segment::Index(index) => LocaleNode::array_with(*index, child),
        }))
}

/// Tree contributed by one row for the value at `column`.
///
/// `None` when the row is skipped, `Some(Err(_))` when its key path exceeds
/// a build limit.
pub fn row_tree(row: &[String], column: usize) -> Option<Result<LocaleNode, RejectedRow>> {
    let key = row.get(COLUMN_OF_KEYS).map(String::as_str);
    let value = cell(row, column);

    if should_skip(key, value) {
        return None;
    }

    key.map(|key| {
        build_row_tree(&KeyPath::parse(key), value).map_err(|limit| RejectedRow {
            key: key.to_string(),
            limit,
        })
    })
}

/// Fold single-row trees in input order; a later row overwrites an earlier
/// one wherever both address the same path.
pub fn merge_trees<I>(trees: I) -> LocaleTree
where
    I: IntoIterator<Item = LocaleNode>,
{
    let mut root = LocaleNode::empty_object();
    let mut collisions = Vec::new();

    for tree in trees {
        collisions.extend(root.merge(tree));
    }

    LocaleTree {
        root,
        collisions,
        rejected: Vec::new(),
    }
}

/// Build the nested document for `locale` from a sheet's rows.
///
/// Fails only when `locale` is not one of `languages`. Rows over the path
/// limits are left out and listed in `LocaleTree::rejected`.
pub fn build_locale_tree(
    rows: &[Row],
    languages: &[String],
    locale: &str,
) -> crate::error::Result<LocaleTree> {
    let column = value_column(languages, locale)?;

    let mut rejected = Vec::new();
    let trees = rows
        .iter()
        .filter_map(|row| row_tree(row, column))
        .filter_map(|tree| match tree {
            Ok(tree) => Some(tree),
            Err(row) => {
                rejected.push(row);
                None
            }
        });

    let mut tree = merge_trees(trees);
    tree.rejected = rejected;
    Ok(tree)
}
