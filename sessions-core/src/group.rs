//! Grouping events by session type.

use crate::event::CalendarEvent;

/// Base name of the file that holds every followed session
pub const ALL_SESSIONS: &str = "all-sessions";

/// Events grouped by category, in the order categories were first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventGroups {
    groups: Vec<(String, Vec<CalendarEvent>)>,
}

impl EventGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event to its category, creating the category if needed
    pub fn push(&mut self, category: String, event: CalendarEvent) {
        match self.groups.iter_mut().find(|(name, _)| *name == category) {
            Some((_, events)) => events.push(event),
            None => self.groups.push((category, vec![event])),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CalendarEvent])> {
        self.groups
            .iter()
            .map(|(name, events)| (name.as_str(), events.as_slice()))
    }

    /// Every event, category by category
    pub fn all_events(&self) -> Vec<CalendarEvent> {
        self.groups
            .iter()
            .flat_map(|(_, events)| events.iter().cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl FromIterator<(String, CalendarEvent)> for EventGroups {
    fn from_iter<I: IntoIterator<Item = (String, CalendarEvent)>>(iter: I) -> Self {
        let mut groups = Self::new();
        for (category, event) in iter {
            groups.push(category, event);
        }
        groups
    }
}

/// Calendar name for a category (`"Talk"` -> `"Talks"`).
///
/// Normalized, this is also the file name (`talks.ics`).
pub fn calendar_name(category: &str) -> String {
    format!("{}s", category)
}

/// Lower-case `name` and replace the first run of characters outside
/// `a-z` with a single hyphen.
///
/// Only the first run is replaced: `"Q&A Session"` becomes `"q-a session"`.
/// Existing output file names depend on this, so don't widen it.
pub fn normalize_filename(name: &str) -> String {
    let lower = name.to_lowercase();
    let is_letter = |c: char| c.is_ascii_lowercase();

    let Some(start) = lower.find(|c: char| !is_letter(c)) else {
        return lower;
    };
    let end = lower[start..]
        .find(is_letter)
        .map_or(lower.len(), |offset| start + offset);

    format!("{}-{}", &lower[..start], &lower[end..])
}
