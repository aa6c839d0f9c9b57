// API client module: a small blocking HTTP client for the Nozbe API.
// Every operation is one GET; authentication and parameters travel as
// `/key-value` path segments, which is how the service defines its wire
// format.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::error::Error;
use crate::types::{Action, CreateResponse, Login, Project};

/// Root of the Nozbe HTTP API.
pub const NOZBE_API: &str = "https://webapp.nozbe.com/api";

/// Per-request timeout applied to the default client. A timeout surfaces
/// as [`Error::Transport`].
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// One authenticated identity against the Nozbe API.
///
/// Holds the injected HTTP client, the API root, and either a durable
/// API token or the username/password pair still pending exchange. The
/// credential pair exists only inside [`Session::login`]; once the token
/// comes back the pair is dropped and every later request carries the
/// token instead.
#[derive(Debug, Clone)]
pub struct Session {
    client: Client,
    base_url: String,
    auth: Auth,
}

/// Authentication material. Exactly one form is held at a time.
#[derive(Debug, Clone)]
enum Auth {
    Token(String),
    Credentials { username: String, password: String },
}

impl Session {
    /// Open a session with an existing API token. No network traffic.
    pub fn open(api_token: &str) -> Session {
        Session::open_with_client(default_client(), NOZBE_API, api_token)
    }

    /// Open a session with an existing API token against `base_url`,
    /// using the given client for all requests.
    pub fn open_with_client(client: Client, base_url: &str, api_token: &str) -> Session {
        Session {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth: Auth::Token(api_token.to_string()),
        }
    }

    /// Open a session by exchanging a username and password for an API
    /// token via `/login`.
    ///
    /// Performs exactly one request. On success the returned session
    /// holds only the token; the credentials are gone. On any failure no
    /// session is returned, and retrying means calling this again.
    pub fn login(username: &str, password: &str) -> Result<Session, Error> {
        Session::login_with_client(default_client(), NOZBE_API, username, password)
    }

    /// Credential exchange against `base_url` with the given client.
    pub fn login_with_client(
        client: Client,
        base_url: &str,
        username: &str,
        password: &str,
    ) -> Result<Session, Error> {
        let mut session = Session {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth: Auth::Credentials {
                username: username.to_string(),
                password: password.to_string(),
            },
        };

        let body = session.get("/login", &[])?;
        let login: Login = decode(&body)?;
        session.auth = Auth::Token(login.key);
        Ok(session)
    }

    /// The API token held by this session, if the exchange has happened.
    pub fn api_token(&self) -> Option<&str> {
        match &self.auth {
            Auth::Token(token) => Some(token),
            Auth::Credentials { .. } => None,
        }
    }

    /// Build the full request URL for `path`: each `(key, value)` pair
    /// becomes a `/key-value` segment in the order given, followed by
    /// `/key-<token>` or `/email-<user>/password-<pass>`.
    ///
    /// The credentials-in-path scheme is the service's wire format and
    /// must not be altered. Pure function of the session state and its
    /// arguments.
    pub fn authenticated_url(&self, path: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        for (key, value) in params {
            url.push_str(&format!("/{key}-{value}"));
        }
        match &self.auth {
            Auth::Token(token) => url.push_str(&format!("/key-{token}")),
            Auth::Credentials { username, password } => {
                url.push_str(&format!("/email-{username}/password-{password}"));
            }
        }
        url
    }

    /// Fetch all of the account's projects. An empty JSON array is a
    /// successful empty listing, not an error.
    pub fn projects(&self) -> Result<Vec<Project>, Error> {
        let body = self.get("/projects", &[])?;
        decode(&body)
    }

    /// Create a new action named `name`. Every entry of `params` is sent
    /// as a `/key-value` path segment; the service understands keys such
    /// as `project_id` and `next`.
    ///
    /// The server acknowledges with only the new action's id, so the
    /// returned [`Action`] carries defaults in every other field.
    pub fn create_action(&self, name: &str, params: &[(&str, &str)]) -> Result<Action, Error> {
        let path = format!("/newaction/name-{name}");
        let body = self.get(&path, params)?;
        let created: CreateResponse = decode(&body)?;
        debug!("created action {}", created.response);
        Ok(Action {
            id: created.response,
            ..Action::default()
        })
    }

    /// Issue one GET and return the raw body.
    ///
    /// The `Content-Type: application/json` header is sent on every
    /// request even though a GET carries no body; the service expects it.
    /// Statuses outside `[200, 400)` become [`Error::Status`] with the
    /// body preserved.
    fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<String, Error> {
        let url = self.authenticated_url(path, params);
        debug!("GETing from URL: {url}");

        let response = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !(200..400).contains(&status.as_u16()) {
            return Err(Error::Status { status, body });
        }
        Ok(body)
    }
}

/// Decode a response body into the operation's result type.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    serde_json::from_str(body).map_err(Error::Decode)
}

fn default_client() -> Client {
    Client::builder()
        .timeout(DEFAULT_TIMEOUT)
        .build()
        .expect("Failed to build HTTP client")
}
