//! Session catalog and interests file types.
//!
//! These mirror the JSON documents exported by the conference app. Only
//! the fields needed to build calendar events are modeled; anything else
//! in the documents is ignored.

use serde::Deserialize;

/// A scheduled conference session (talk, workshop, keynote, ...)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub schedule_uid: String,
    /// Category used to group sessions into calendar files
    #[serde(default)]
    pub session_type: String,
    /// Unix timestamp in seconds (UTC)
    pub start_date_time: i64,
    /// Unix timestamp in seconds (UTC)
    pub end_date_time: i64,
    #[serde(default)]
    pub venue_name: String,
    #[serde(default)]
    pub location_name: String,
    /// Session code shown in the conference program (e.g. "DEV301")
    #[serde(default, rename = "thirdPartyID")]
    pub third_party_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// A followed session, referencing the catalog by `scheduleUid`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interest {
    pub schedule_uid: String,
}

/// Top level of the session catalog file: `{ "data": [...] }`
#[derive(Debug, Deserialize)]
pub(crate) struct CatalogFile {
    pub data: Vec<Session>,
}

/// Top level of the interests file: `{ "data": { "followedSessions": [...] } }`
#[derive(Debug, Deserialize)]
pub(crate) struct InterestsFile {
    pub data: InterestsData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InterestsData {
    pub followed_sessions: Vec<Interest>,
}
