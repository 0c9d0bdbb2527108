//! ICS file generation.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use icalendar::{Calendar, Component, EventLike, Property};

use crate::error::{SessionsError, SessionsResult};
use crate::event::CalendarEvent;
use crate::time::IcsDateTime;

/// Product identifier written into every generated calendar
pub const PRODID: &str = "-//sessions-to-ics//EN";

/// Generate a VCALENDAR holding one VEVENT per event.
///
/// The output only depends on the events, so regenerating a calendar
/// from the same sessions gives byte-identical files. A session listed
/// more than once gets a distinct UID per occurrence.
pub fn generate_calendar(name: &str, events: &[CalendarEvent]) -> SessionsResult<String> {
    let mut cal = Calendar::new();
    cal.name(name);
    cal.append_property(Property::new("METHOD", "PUBLISH"));

    let mut seen: HashMap<&str, usize> = HashMap::new();
    for event in events {
        let occurrence = seen.entry(event.id.as_str()).or_insert(0);
        cal.push(build_event(event, *occurrence)?);
        *occurrence += 1;
    }

    let cal = cal.done();

    Ok(strip_ics_bloat(&cal.to_string()))
}

fn build_event(event: &CalendarEvent, occurrence: usize) -> SessionsResult<icalendar::Event> {
    let start = to_instant(&event.start, &event.id)?;
    let end = to_instant(&event.end, &event.id)?;

    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&event_uid(&event.id, occurrence));
    ics_event.summary(&event.title);

    // DTSTAMP is required by RFC 5545. Pin it to the start so output is
    // stable across runs instead of using the current time.
    ics_event.add_property("DTSTAMP", format_utc(&start));

    ics_event.add_property("DTSTART", format_utc(&start));
    ics_event.add_property("DTEND", format_utc(&end));

    ics_event.location(&event.location);
    ics_event.description(&event.description);

    Ok(ics_event.done())
}

/// `<id>@sessions-to-ics` for the first occurrence, `<id>-<n>@sessions-to-ics` after
fn event_uid(id: &str, occurrence: usize) -> String {
    if occurrence == 0 {
        format!("{}@sessions-to-ics", id)
    } else {
        format!("{}-{}@sessions-to-ics", id, occurrence)
    }
}

fn to_instant(time: &IcsDateTime, id: &str) -> SessionsResult<DateTime<Utc>> {
    time.to_utc().ok_or_else(|| {
        SessionsError::IcsGenerate(format!("session '{}' has an invalid date-time: {}", id, time))
    })
}

fn format_utc(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with our own identifier
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(PRODID);
            result.push_str("\r\n");
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_event() -> CalendarEvent {
        CalendarEvent {
            id: "abc-123".to_string(),
            start: IcsDateTime::new(2023, 11, 14, 22, 13),
            end: IcsDateTime::new(2023, 11, 14, 23, 13),
            title: "DEV301 - Building CLIs".to_string(),
            location: "Venetian - Level 2".to_string(),
            description: "Talk\n\nHow to build CLIs.".to_string(),
        }
    }

    #[test]
    fn test_generate_calendar_event_properties() {
        let ics = generate_calendar("Talks", &[make_test_event()]).unwrap();

        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"), "ICS:\n{}", ics);
        assert!(ics.contains("PRODID:-//sessions-to-ics//EN"), "ICS:\n{}", ics);
        assert!(ics.contains("METHOD:PUBLISH"), "ICS:\n{}", ics);
        assert!(ics.contains("UID:abc-123@sessions-to-ics"), "ICS:\n{}", ics);
        assert!(ics.contains("DTSTART:20231114T221300Z"), "ICS:\n{}", ics);
        assert!(ics.contains("DTEND:20231114T231300Z"), "ICS:\n{}", ics);
        assert!(ics.contains("DTSTAMP:20231114T221300Z"), "ICS:\n{}", ics);
        assert!(ics.contains("SUMMARY:DEV301 - Building CLIs"), "ICS:\n{}", ics);
        assert!(ics.contains("LOCATION:Venetian - Level 2"), "ICS:\n{}", ics);
        assert!(ics.contains("DESCRIPTION:Talk"), "ICS:\n{}", ics);
    }

    #[test]
    fn test_generate_calendar_single_prodid() {
        let ics = generate_calendar("Talks", &[make_test_event()]).unwrap();
        let prodid_count = ics.lines().filter(|l| l.starts_with("PRODID:")).count();
        assert_eq!(prodid_count, 1, "ICS:\n{}", ics);
    }

    #[test]
    fn test_generate_calendar_is_deterministic() {
        let mut other = make_test_event();
        other.id = "def-456".to_string();
        let events = vec![make_test_event(), other];
        let first = generate_calendar("Talks", &events).unwrap();
        let second = generate_calendar("Talks", &events).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_calendar_counts_events() {
        let events = vec![make_test_event(); 3];
        let ics = generate_calendar("Talks", &events).unwrap();
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 3);
        assert_eq!(ics.matches("END:VEVENT").count(), 3);
    }

    #[test]
    fn test_generate_calendar_repeated_event_gets_distinct_uids() {
        let event = make_test_event();
        let events = vec![event.clone(), event.clone(), event];

        let ics = generate_calendar("Talks", &events).unwrap();

        let uids: Vec<_> = ics.lines().filter(|l| l.starts_with("UID:")).collect();
        assert_eq!(
            uids,
            vec![
                "UID:abc-123@sessions-to-ics",
                "UID:abc-123-1@sessions-to-ics",
                "UID:abc-123-2@sessions-to-ics",
            ],
            "ICS:\n{}",
            ics
        );
        assert_eq!(generate_calendar("Talks", &events).unwrap(), ics);
    }

    #[test]
    fn test_generate_calendar_empty() {
        let ics = generate_calendar("all-sessions", &[]).unwrap();
        assert!(ics.contains("BEGIN:VCALENDAR"));
        assert!(ics.contains("END:VCALENDAR"));
        assert!(!ics.contains("BEGIN:VEVENT"));
    }

    #[test]
    fn test_generate_calendar_rejects_invalid_date() {
        let mut event = make_test_event();
        event.end = IcsDateTime::new(2023, 13, 1, 0, 0);

        let err = generate_calendar("Talks", &[event]).unwrap_err();

        assert!(matches!(err, SessionsError::IcsGenerate(_)), "got {:?}", err);
        assert!(err.to_string().contains("abc-123"));
        assert!(err.to_string().contains("2023-13-01 00:00 UTC"), "got {}", err);
    }
}
