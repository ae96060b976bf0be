use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::model::{Celebrity, Gender, RecordId, age_on, full_name, parse_dob};

/// Seed data compiled into the binary
pub const BUNDLED_DATA: &str = include_str!("../../data/celebrities.json");

/// Error type for seed data loading
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse seed data: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("duplicate record id {0}")]
    DuplicateId(RecordId),
    #[error("record {index} ({name}) has no id and every id is taken")]
    IdsExhausted { index: usize, name: String },
    #[error("record {index} ({name}): invalid date of birth {dob:?}, expected YYYY-MM-DD")]
    InvalidDob {
        index: usize,
        name: String,
        dob: String,
    },
}

/// One entry of the seed file, before ids and derived fields are filled in
#[derive(Debug, Deserialize)]
struct SeedRecord {
    #[serde(default)]
    id: Option<RecordId>,
    first: String,
    last: String,
    dob: String,
    gender: Gender,
    email: String,
    picture: String,
    country: String,
    description: String,
}

/// Parse seed JSON into store records.
///
/// Records without an `id` are numbered after the highest explicit id, in
/// file order. `fullname` and `age` are derived here; `age` is relative to
/// `today`.
pub fn parse_seed(text: &str, today: NaiveDate) -> Result<Vec<Celebrity>, DataError> {
    let seeds: Vec<SeedRecord> = serde_json::from_str(text)?;

    let mut seen = HashSet::new();
    for id in seeds.iter().filter_map(|s| s.id) {
        if !seen.insert(id) {
            return Err(DataError::DuplicateId(id));
        }
    }
    let mut next_id = seen.iter().max().map_or(Some(1), |max| max.checked_add(1));

    let mut records = Vec::with_capacity(seeds.len());
    for (index, seed) in seeds.into_iter().enumerate() {
        let fullname = full_name(&seed.first, &seed.last);
        let dob = parse_dob(&seed.dob).ok_or_else(|| DataError::InvalidDob {
            index,
            name: fullname.clone(),
            dob: seed.dob.clone(),
        })?;
        let id = match seed.id {
            Some(id) => id,
            None => {
                let id = next_id.ok_or_else(|| DataError::IdsExhausted {
                    index,
                    name: fullname.clone(),
                })?;
                next_id = id.checked_add(1);
                id
            }
        };
        records.push(Celebrity {
            id,
            first: seed.first,
            last: seed.last,
            fullname,
            dob: seed.dob,
            age: age_on(dob, today),
            gender: seed.gender,
            email: seed.email,
            country: seed.country,
            description: seed.description,
            picture: seed.picture,
        });
    }

    tracing::info!(count = records.len(), "loaded seed records");
    Ok(records)
}

/// Load seed records from a JSON file on disk
pub fn load_seed_file(path: &Path, today: NaiveDate) -> Result<Vec<Celebrity>, DataError> {
    let text = fs::read_to_string(path).map_err(|e| DataError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), "reading seed file");
    parse_seed(&text, today)
}

/// Load the bundled seed records, or the file at `path` when given
pub fn load_records(path: Option<&Path>, today: NaiveDate) -> Result<Vec<Celebrity>, DataError> {
    match path {
        Some(path) => load_seed_file(path, today),
        None => parse_seed(BUNDLED_DATA, today),
    }
}
