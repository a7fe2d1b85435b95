use std::fmt;
use thiserror::Error;

/// Largest position an index segment may address. Rows going past it are
/// rejected so a stray cell cannot allocate a huge array.
pub const MAX_ARRAY_INDEX: usize = 65_535;

/// Most segments a key path may have. Merging, serializing and dropping a
/// tree all recurse once per level, so deeper rows are rejected.
pub const MAX_PATH_DEPTH: usize = 256;

/// Why a key path cannot be materialized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathLimit {
    #[error("index segment {position} exceeds the largest array index {max}", max = MAX_ARRAY_INDEX)]
    IndexTooLarge { position: usize },

    #[error("{depth} segments exceed the depth limit of {max}", max = MAX_PATH_DEPTH)]
    TooDeep { depth: usize },
}

/// One dot-separated token of a key path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Named field of an object node
    Field(String),
    /// Position inside an array node
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Field(name) => f.write_str(name),
            Segment::Index(index) => write!(f, "{}", index),
        }
    }
}

/// A parsed key path such as `available.audio.0.name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    segments: Vec<Segment>,
}

impl KeyPath {
    /// Split `raw` on `.` and classify each token.
    ///
    /// There is no escaping: a field name can never contain a literal dot.
    /// Empty tokens (from `a..b` or a leading/trailing dot) become fields
    /// named `""`. The first token always names a field of the root object,
    /// even when it is all digits. Every later all-digit token is an index;
    /// one too large for `usize` saturates to `usize::MAX`.
    pub fn parse(raw: &str) -> Self {
        let segments = raw
            .split('.')
            .enumerate()
            .map(|(depth, token)| {
                if depth == 0 {
                    Segment::Field(token.to_string())
                } else {
                    classify(token)
                }
            })
            .collect();

        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Check the path against `MAX_PATH_DEPTH` and `MAX_ARRAY_INDEX`
    pub fn check_limits(&self) -> Result<(), PathLimit> {
        if self.segments.len() > MAX_PATH_DEPTH {
            return Err(PathLimit::TooDeep {
                depth: self.segments.len(),
            });
        }

        match self
            .segments
            .iter()
            .position(|s| matches!(s, Segment::Index(i) if *i > MAX_ARRAY_INDEX))
        {
            Some(position) => Err(PathLimit::IndexTooLarge { position }),
            None => Ok(()),
        }
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_segments(&self.segments))
    }
}

/// Render segments back into dotted form
pub fn join_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

fn classify(token: &str) -> Segment {
    if is_index_token(token) {
        // all digits, so parsing only fails on overflow
        Segment::Index(token.parse::<usize>().unwrap_or(usize::MAX))
    } else {
        Segment::Field(token.to_string())
    }
}

/// `^[0-9]+$`
fn is_index_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}
