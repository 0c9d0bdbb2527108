//! Loading the session catalog and resolving followed sessions against it.

use std::collections::HashMap;
use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;

use crate::error::{SessionsError, SessionsResult};
use crate::session::{CatalogFile, InterestsFile, Session};

/// Sessions indexed by `scheduleUid`
pub type SessionCatalog = HashMap<String, Session>;

/// Load the session catalog and index it by `scheduleUid`.
///
/// When two sessions share an id, the later one wins.
pub fn load_sessions_by_id(path: &Path) -> SessionsResult<SessionCatalog> {
    let catalog: CatalogFile = read_json(path)?;
    let total = catalog.data.len();

    let sessions: SessionCatalog = catalog
        .data
        .into_iter()
        .map(|session| (session.schedule_uid.clone(), session))
        .collect();

    debug!(
        "Loaded {} sessions ({} unique) from {}",
        total,
        sessions.len(),
        path.display()
    );

    Ok(sessions)
}

/// Load the interests file and resolve each followed session in file order.
///
/// A session followed twice is returned twice.
pub fn load_interests(path: &Path, sessions: &SessionCatalog) -> SessionsResult<Vec<Session>> {
    let interests: InterestsFile = read_json(path)?;

    let resolved = interests
        .data
        .followed_sessions
        .iter()
        .map(|interest| {
            sessions
                .get(&interest.schedule_uid)
                .cloned()
                .ok_or_else(|| SessionsError::UnknownSession(interest.schedule_uid.clone()))
        })
        .collect::<SessionsResult<Vec<_>>>()?;

    debug!("Resolved {} followed sessions from {}", resolved.len(), path.display());

    Ok(resolved)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> SessionsResult<T> {
    let contents = std::fs::read_to_string(path).map_err(|e| SessionsError::io(path, e))?;

    serde_json::from_str(&contents).map_err(|source| SessionsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
