//! LEGO set repository contract plus in-memory and JSON implementations.
//!
//! # Responsibility
//! - Provide a stable, fully materialized record slice to query services.
//! - Keep file and JSON details inside the load boundary.
//!
//! # Invariants
//! - Records are never mutated after construction.
//! - A repository either loads the whole dataset or fails; there is no
//!   partially loaded state.

use crate::model::lego_set::LegoSet;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// File name the dataset is looked up under when no path is configured.
pub const DEFAULT_DATASET_FILE: &str = "brickset.json";

const MEMORY_SOURCE: &str = "<memory>";

pub type RepoResult<T> = Result<T, RepoError>;

/// Dataset load error.
#[derive(Debug)]
pub enum RepoError {
    /// Dataset file could not be opened or read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Dataset content is not a JSON array of set objects.
    Json(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read dataset `{}`: {source}", path.display())
            }
            Self::Json(err) => write!(f, "malformed dataset: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Read-only access to the full record collection.
pub trait LegoSetRepository {
    fn get_all(&self) -> &[LegoSet];
}

impl<R: LegoSetRepository + ?Sized> LegoSetRepository for &R {
    fn get_all(&self) -> &[LegoSet] {
        (**self).get_all()
    }
}

impl<R: LegoSetRepository + ?Sized> LegoSetRepository for Box<R> {
    fn get_all(&self) -> &[LegoSet] {
        (**self).get_all()
    }
}

/// Repository over records built by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryLegoSetRepository {
    sets: Vec<LegoSet>,
}

impl InMemoryLegoSetRepository {
    pub fn new(sets: Vec<LegoSet>) -> Self {
        Self { sets }
    }
}

impl From<Vec<LegoSet>> for InMemoryLegoSetRepository {
    fn from(value: Vec<LegoSet>) -> Self {
        Self::new(value)
    }
}

impl LegoSetRepository for InMemoryLegoSetRepository {
    fn get_all(&self) -> &[LegoSet] {
        &self.sets
    }
}

/// Repository backed by a Brickset JSON dataset (top-level array).
#[derive(Debug, Clone)]
pub struct JsonLegoSetRepository {
    source: String,
    sets: Vec<LegoSet>,
}

impl JsonLegoSetRepository {
    /// Loads the dataset file at `path`.
    ///
    /// # Errors
    /// - `RepoError::Io` when the file cannot be opened or read.
    /// - `RepoError::Json` when the content is not a valid set array.
    pub fn load(path: impl AsRef<Path>) -> RepoResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| {
            warn!(
                "event=dataset_load module=repo status=error path={} kind={:?}",
                path.display(),
                source.kind()
            );
            RepoError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let sets = parse_sets(BufReader::new(file))?;
        Ok(Self::with_source(path.display().to_string(), sets))
    }

    /// Loads a dataset from any reader, e.g. an embedded resource.
    pub fn from_reader(reader: impl Read) -> RepoResult<Self> {
        let sets = parse_sets(reader)?;
        Ok(Self::with_source(MEMORY_SOURCE.to_string(), sets))
    }

    pub fn from_json_str(json: &str) -> RepoResult<Self> {
        Self::from_reader(json.as_bytes())
    }

    /// Where records were loaded from: a file path or `<memory>`.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    fn with_source(source: String, sets: Vec<LegoSet>) -> Self {
        info!(
            "event=dataset_load module=repo status=ok source={} records={}",
            source,
            sets.len()
        );
        Self { source, sets }
    }
}

impl LegoSetRepository for JsonLegoSetRepository {
    fn get_all(&self) -> &[LegoSet] {
        &self.sets
    }
}

fn parse_sets(reader: impl Read) -> RepoResult<Vec<LegoSet>> {
    serde_json::from_reader(reader).map_err(|err| {
        warn!(
            "event=dataset_parse module=repo status=error line={} column={}",
            err.line(),
            err.column()
        );
        RepoError::Json(err)
    })
}
