//! Fixture loading
//!
//! Reads `users.json` and `properties.json` from a directory and inserts them
//! through a [`Database`]. Both files are JSON objects keyed by a numeric id:
//!
//! ```json
//! { "1": { "name": "Devin Sanders", "email": "tristanjacobs@gmail.com", "password": "..." } }
//! ```
//!
//! Keys are fixture-local. A property's `owner_id` refers to a key in
//! `users.json` and is remapped to the id the store assigned to that user;
//! an owner key with no matching user is an error. Users whose email already
//! exists are reused, so loading users twice is harmless; properties are
//! inserted on every run.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{info, instrument, warn};
use validator::Validate;

use lightbnb_core::entities::{NewProperty, NewUser};
use lightbnb_core::error::DomainError;
use lightbnb_core::value_objects::UserId;

use crate::database::Database;

/// Users fixture file name
pub const USERS_FILE: &str = "users.json";

/// Properties fixture file name
pub const PROPERTIES_FILE: &str = "properties.json";

/// Fixture loading errors
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid key {key:?} in {file}: keys must be integers")]
    InvalidKey { file: String, key: String },

    #[error("Invalid record {key} in {file}: {source}")]
    Invalid {
        file: String,
        key: i64,
        #[source]
        source: validator::ValidationErrors,
    },

    #[error("Property {key} in {file} refers to unknown owner {owner}")]
    UnknownOwner { file: String, key: i64, owner: i64 },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Counts of rows written by a seed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users_created: usize,
    pub users_existing: usize,
    pub properties_created: usize,
}

/// Parse a keyed fixture collection, validating each record
///
/// Records come back sorted by numeric key.
pub fn parse_fixtures<T>(raw: &str, file: &str) -> Result<Vec<(i64, T)>, SeedError>
where
    T: DeserializeOwned + Validate,
{
    let keyed: BTreeMap<String, T> =
        serde_json::from_str(raw).map_err(|source| SeedError::Parse {
            file: file.to_string(),
            source,
        })?;

    let mut records = keyed
        .into_iter()
        .map(|(key, record)| {
            let key = key.trim().parse::<i64>().map_err(|_| SeedError::InvalidKey {
                file: file.to_string(),
                key: key.clone(),
            })?;
            record.validate().map_err(|source| SeedError::Invalid {
                file: file.to_string(),
                key,
                source,
            })?;
            Ok((key, record))
        })
        .collect::<Result<Vec<_>, SeedError>>()?;

    // string keys sort "10" before "2"
    records.sort_by_key(|(key, _)| *key);
    Ok(records)
}

async fn read_fixture(dir: &Path, file: &str) -> Result<Option<String>, SeedError> {
    let path = dir.join(file);
    match tokio::fs::read_to_string(&path).await {
        Ok(raw) => Ok(Some(raw)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "Fixture file not found, skipping");
            Ok(None)
        }
        Err(source) => Err(SeedError::Io { path, source }),
    }
}

/// Insert users, returning fixture key -> stored id
async fn seed_users(
    db: &Database,
    users: Vec<(i64, NewUser)>,
    report: &mut SeedReport,
) -> Result<HashMap<i64, UserId>, SeedError> {
    let mut ids = HashMap::with_capacity(users.len());

    for (key, user) in users {
        let id = match db.add_user(&user).await {
            Ok(created) => {
                report.users_created += 1;
                created.id
            }
            Err(DomainError::EmailAlreadyExists) => {
                let existing = db
                    .get_user_with_email(&user.email)
                    .await?
                    .ok_or_else(|| {
                        DomainError::InternalError(format!(
                            "user {} reported as existing but not found",
                            user.email
                        ))
                    })?;
                report.users_existing += 1;
                existing.id
            }
            Err(e) => return Err(e.into()),
        };
        ids.insert(key, id);
    }

    Ok(ids)
}

/// Load every fixture file found in `dir`
#[instrument(skip(db, dir), fields(dir = %dir.display()))]
pub async fn load_dir(db: &Database, dir: &Path) -> Result<SeedReport, SeedError> {
    let users = read_fixture(dir, USERS_FILE).await?;
    let properties = read_fixture(dir, PROPERTIES_FILE).await?;
    load_fixtures(db, users.as_deref(), properties.as_deref()).await
}

/// Load raw `users.json` and `properties.json` contents
///
/// Users are inserted first so property owners can be remapped.
pub async fn load_fixtures(
    db: &Database,
    users: Option<&str>,
    properties: Option<&str>,
) -> Result<SeedReport, SeedError> {
    let mut report = SeedReport::default();

    let user_ids = match users {
        Some(raw) => {
            let users = parse_fixtures::<NewUser>(raw, USERS_FILE)?;
            seed_users(db, users, &mut report).await?
        }
        None => HashMap::new(),
    };

    if let Some(raw) = properties {
        for (key, mut property) in parse_fixtures::<NewProperty>(raw, PROPERTIES_FILE)? {
            let owner = property.owner_id.into_inner();
            property.owner_id =
                *user_ids.get(&owner).ok_or_else(|| SeedError::UnknownOwner {
                    file: PROPERTIES_FILE.to_string(),
                    key,
                    owner,
                })?;
            db.add_property(&property).await?;
            report.properties_created += 1;
        }
    }

    info!(
        users_created = report.users_created,
        users_existing = report.users_existing,
        properties_created = report.properties_created,
        "Fixtures loaded"
    );

    Ok(report)
}
