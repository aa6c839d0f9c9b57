// Response types for the Nozbe API. Every value here is produced by
// decoding a server response; nothing holds a reference back to the
// session that fetched it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A project as returned by the `/projects` endpoint.
///
/// The server omits optional fields rather than sending them empty, so
/// they decode to `None`. `id` is absent when the value describes a
/// project that does not exist on the server yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_show: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<String>,
}

/// A single task. All identifiers are strings, matching the wire format.
///
/// The create endpoint acknowledges with only the new action's id, so an
/// `Action` built from that response carries defaults everywhere else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Action {
    pub id: String,
    pub name: String,
    pub name_show: String,
    pub done: bool,
    pub done_time: Option<DateTime<Utc>>,
    pub project_id: String,
    pub project_name: String,
    pub context_id: String,
    pub context_name: String,
    pub context_icon: String,
    pub next: String,
}

/// Body of a successful `/login` response. Consumed immediately to
/// populate the session token.
#[derive(Debug, Clone, Deserialize)]
pub struct Login {
    #[serde(rename = "Key")]
    pub key: String,
}

/// Acknowledgement body of `/newaction`: the new id, or a server message.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateResponse {
    pub response: String,
}
