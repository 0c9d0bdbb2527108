use anyhow::{Context, Result};
use log::{debug, info, warn};
use sessions_core::{
    ALL_SESSIONS, EventGroups, WriteReport, calendar_name, create_output_dir, load_interests,
    load_sessions_by_id, session_to_event, write_events,
};

use crate::config::Config;
use crate::render::Render;

/// Convert followed sessions into one calendar per session type plus
/// `all-sessions.ics`, printing a line for every file written.
///
/// Stops at the first failure. Files written before it are kept.
pub fn run(config: Config) -> Result<Vec<WriteReport>> {
    let sessions = load_sessions_by_id(&config.sessions_path).context("Failed to load session catalog")?;
    let followed =
        load_interests(&config.interests_path, &sessions).context("Failed to load followed sessions")?;

    let groups = followed
        .iter()
        .map(session_to_event)
        .collect::<Result<EventGroups, _>>()
        .context("Failed to convert sessions to events")?;

    if groups.is_empty() {
        warn!("No followed sessions in {}", config.interests_path.display());
    } else {
        info!(
            "{} followed sessions in {} categories",
            followed.len(),
            groups.len()
        );
    }

    create_output_dir(&config.output_dir)?;

    let mut reports = Vec::with_capacity(groups.len() + 1);

    for (category, events) in groups.iter() {
        debug!("Writing {} '{}' sessions", events.len(), category);
        let report = write_events(&config.output_dir, &calendar_name(category), events)
            .with_context(|| format!("Failed to write calendar for '{}'", category))?;
        println!("{}", report.render());
        reports.push(report);
    }

    let report = write_events(&config.output_dir, ALL_SESSIONS, &groups.all_events())
        .context("Failed to write combined calendar")?;
    println!("{}", report.render());
    reports.push(report);

    Ok(reports)
}
