//! Core of sessions-to-ics.
//!
//! Turns a conference session catalog plus a list of followed sessions
//! into iCalendar files:
//! - `catalog` loads and joins the two JSON documents
//! - `event` maps sessions to calendar events
//! - `group` groups events by session type and names the output files
//! - `ics` and `writer` serialize and write the calendars

pub mod catalog;
pub mod error;
pub mod event;
pub mod group;
pub mod ics;
pub mod session;
pub mod time;
pub mod writer;

pub use catalog::{SessionCatalog, load_interests, load_sessions_by_id};
pub use error::{SessionsError, SessionsResult};
pub use event::{CalendarEvent, session_to_event};
pub use group::{ALL_SESSIONS, EventGroups, calendar_name, normalize_filename};
pub use session::{Interest, Session};
pub use time::{IcsDateTime, to_ics_datetime};
pub use writer::{WriteReport, create_output_dir, write_events};
