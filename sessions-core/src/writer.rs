//! Writing calendars to the output directory.

use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{SessionsError, SessionsResult};
use crate::event::CalendarEvent;
use crate::group::normalize_filename;
use crate::ics::generate_calendar;

/// What a single `write_events` call produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub count: usize,
    pub path: PathBuf,
}

/// Create the output directory and any missing parents.
pub fn create_output_dir(dir: &Path) -> SessionsResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| SessionsError::io(dir, e))
}

/// Write `events` to `<dir>/<normalized name>.ics`, replacing any existing file.
pub fn write_events(dir: &Path, name: &str, events: &[CalendarEvent]) -> SessionsResult<WriteReport> {
    let path = dir.join(format!("{}.ics", normalize_filename(name)));
    let content = generate_calendar(name, events)?;

    std::fs::write(&path, content).map_err(|e| SessionsError::io(&path, e))?;
    debug!("Wrote {}", path.display());

    Ok(WriteReport {
        count: events.len(),
        path,
    })
}
