//! Mapping sessions to calendar events.

use crate::error::SessionsResult;
use crate::session::Session;
use crate::time::{IcsDateTime, to_ics_datetime};

/// One session, ready to be written as a VEVENT
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    /// The session's `scheduleUid`, used to derive a stable UID
    pub id: String,
    pub start: IcsDateTime,
    pub end: IcsDateTime,
    pub title: String,
    pub location: String,
    pub description: String,
}

/// Map a session to its category and calendar event.
///
/// - title: `"{thirdPartyID} - {title}"`
/// - location: `"{venueName} - {locationName}"`
/// - description: the session type, a blank line, then the session description
pub fn session_to_event(session: &Session) -> SessionsResult<(String, CalendarEvent)> {
    let event = CalendarEvent {
        id: session.schedule_uid.clone(),
        start: to_ics_datetime(session.start_date_time)?,
        end: to_ics_datetime(session.end_date_time)?,
        title: format!("{} - {}", session.third_party_id, session.title),
        location: format!("{} - {}", session.venue_name, session.location_name),
        description: format!("{}\n\n{}", session.session_type, session.description),
    };

    Ok((session.session_type.clone(), event))
}
