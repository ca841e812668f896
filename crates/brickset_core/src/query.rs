//! Named query requests parsed from text arguments.
//!
//! # Responsibility
//! - Turn `(name, optional argument)` pairs into typed `SetQuery` values.
//! - Reject missing or malformed arguments before any query work happens.
//! - Render query results in a stable, printable form.
//!
//! # Invariants
//! - `has-tag` and `tag-prefix` require an argument; absence is
//!   `QueryError::InvalidArgument`, never an implicit empty string.
//! - `partition` without an argument uses `DEFAULT_PIECE_THRESHOLD`.

use crate::repo::lego_set_repo::LegoSetRepository;
use crate::service::set_query_service::{SetQueryService, DEFAULT_PIECE_THRESHOLD};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const QUERY_HAS_TAG: &str = "has-tag";
pub const QUERY_TAG_PREFIX: &str = "tag-prefix";
pub const QUERY_MAX_PIECES: &str = "max-pieces";
pub const QUERY_PARTITION: &str = "partition";
pub const QUERY_THEMES: &str = "themes";

const SUPPORTED_QUERIES: &[&str] = &[
    QUERY_HAS_TAG,
    QUERY_TAG_PREFIX,
    QUERY_MAX_PIECES,
    QUERY_PARTITION,
    QUERY_THEMES,
];

/// Returns supported query names, in default-suite order.
pub fn supported_queries() -> &'static [&'static str] {
    SUPPORTED_QUERIES
}

pub type QueryResult<T> = Result<T, QueryError>;

/// Query request error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Required argument absent or not parseable.
    InvalidArgument {
        query: &'static str,
        argument: &'static str,
        reason: String,
    },
    /// Query name is not one of `supported_queries()`.
    UnknownQuery(String),
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument {
                query,
                argument,
                reason,
            } => write!(f, "invalid argument `{argument}` for `{query}`: {reason}"),
            Self::UnknownQuery(name) => write!(
                f,
                "unknown query `{name}`; expected {}",
                SUPPORTED_QUERIES.join("|")
            ),
        }
    }
}

impl Error for QueryError {}

/// One catalogue query with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetQuery {
    HasTag { tag: String },
    CountTagPrefix { prefix: String },
    MaxPieces,
    PartitionByPieces { threshold: u32 },
    CountByTheme,
}

impl SetQuery {
    /// Parses a query name and its optional raw argument.
    ///
    /// # Errors
    /// - `InvalidArgument` when `has-tag`/`tag-prefix` get no argument, or
    ///   `partition` gets a value that is not a non-negative integer.
    /// - `UnknownQuery` for any other name.
    pub fn parse(name: &str, arg: Option<&str>) -> QueryResult<Self> {
        match name.trim() {
            QUERY_HAS_TAG => Ok(Self::HasTag {
                tag: require_arg(QUERY_HAS_TAG, "tag", arg)?.to_string(),
            }),
            QUERY_TAG_PREFIX => Ok(Self::CountTagPrefix {
                prefix: require_arg(QUERY_TAG_PREFIX, "prefix", arg)?.to_string(),
            }),
            QUERY_MAX_PIECES => Ok(Self::MaxPieces),
            QUERY_PARTITION => Ok(Self::PartitionByPieces {
                threshold: parse_threshold(arg)?,
            }),
            QUERY_THEMES => Ok(Self::CountByTheme),
            other => Err(QueryError::UnknownQuery(other.to_string())),
        }
    }

    /// The five queries run when no specific query is requested.
    pub fn default_suite() -> Vec<Self> {
        vec![
            Self::HasTag {
                tag: "Microscale".to_string(),
            },
            Self::CountTagPrefix {
                prefix: "A".to_string(),
            },
            Self::MaxPieces,
            Self::PartitionByPieces {
                threshold: DEFAULT_PIECE_THRESHOLD,
            },
            Self::CountByTheme,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::HasTag { .. } => QUERY_HAS_TAG,
            Self::CountTagPrefix { .. } => QUERY_TAG_PREFIX,
            Self::MaxPieces => QUERY_MAX_PIECES,
            Self::PartitionByPieces { .. } => QUERY_PARTITION,
            Self::CountByTheme => QUERY_THEMES,
        }
    }
}

fn require_arg<'a>(
    query: &'static str,
    argument: &'static str,
    arg: Option<&'a str>,
) -> QueryResult<&'a str> {
    arg.ok_or_else(|| QueryError::InvalidArgument {
        query,
        argument,
        reason: "value is required".to_string(),
    })
}

fn parse_threshold(arg: Option<&str>) -> QueryResult<u32> {
    let Some(raw) = arg else {
        return Ok(DEFAULT_PIECE_THRESHOLD);
    };
    raw.trim()
        .parse::<u32>()
        .map_err(|err| QueryError::InvalidArgument {
            query: QUERY_PARTITION,
            argument: "threshold",
            reason: format!("expected a non-negative integer, got `{raw}` ({err})"),
        })
}

/// Result of executing one `SetQuery`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Bool(bool),
    Count(u64),
    Pieces(u32),
    Partition(BTreeMap<bool, u64>),
    Themes(BTreeMap<String, u64>),
}

impl Display for QueryOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Count(value) => write!(f, "{value}"),
            Self::Pieces(value) => write!(f, "{value}"),
            Self::Partition(buckets) => write_map(f, buckets),
            Self::Themes(counts) => write_map(f, counts),
        }
    }
}

fn write_map<K: Display, V: Display>(
    f: &mut Formatter<'_>,
    map: &BTreeMap<K, V>,
) -> std::fmt::Result {
    f.write_str("{")?;
    for (index, (key, value)) in map.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{key}={value}")?;
    }
    f.write_str("}")
}

impl<R: LegoSetRepository> SetQueryService<R> {
    /// Runs one parsed query against this service.
    pub fn execute(&self, query: &SetQuery) -> QueryOutcome {
        match query {
            SetQuery::HasTag { tag } => QueryOutcome::Bool(self.has_tag_anywhere(tag)),
            SetQuery::CountTagPrefix { prefix } => {
                QueryOutcome::Count(self.count_tags_with_prefix(prefix))
            }
            SetQuery::MaxPieces => QueryOutcome::Pieces(self.max_pieces()),
            SetQuery::PartitionByPieces { threshold } => {
                QueryOutcome::Partition(self.partition_by_piece_threshold(*threshold))
            }
            SetQuery::CountByTheme => QueryOutcome::Themes(self.count_by_theme()),
        }
    }
}
