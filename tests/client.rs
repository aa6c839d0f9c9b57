// Integration tests for the session operations, driven against a local
// mocked HTTP server. Sessions are built through the client-injection
// constructors so the base URL points at the mock.

use std::time::Duration;

use mockito::{Matcher, Server, ServerGuard};
use reqwest::blocking::Client;

use nozbe_cli::api::Session;
use nozbe_cli::error::Error;
use nozbe_cli::types::{Action, Project};

fn open(server: &ServerGuard) -> Session {
    Session::open_with_client(Client::new(), &server.url(), "t")
}

#[test]
fn login_stores_token_and_discards_credentials() {
    let mut server = Server::new();
    let login = server
        .mock("GET", "/login/email-alice/password-s3cret")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"Key":"tok123"}"#)
        .create();

    let session =
        Session::login_with_client(Client::new(), &server.url(), "alice", "s3cret").unwrap();
    login.assert();

    assert_eq!(session.api_token(), Some("tok123"));
    let url = session.authenticated_url("/projects", &[]);
    assert!(url.ends_with("/projects/key-tok123"));
    assert!(!url.contains("alice"));
    assert!(!url.contains("s3cret"));

    // Subsequent operations authenticate with the token, not the pair.
    let projects = server
        .mock("GET", "/projects/key-tok123")
        .with_status(200)
        .with_body("[]")
        .create();
    assert!(session.projects().unwrap().is_empty());
    projects.assert();
}

#[test]
fn login_failure_carries_status_and_body() {
    let mut server = Server::new();
    server
        .mock("GET", "/login/email-alice/password-wrong")
        .with_status(401)
        .with_body("invalid credentials")
        .create();

    let err =
        Session::login_with_client(Client::new(), &server.url(), "alice", "wrong").unwrap_err();
    match err {
        Error::Status { status, body } => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(body, "invalid credentials");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[test]
fn login_with_malformed_body_is_a_decode_error() {
    let mut server = Server::new();
    server
        .mock("GET", "/login/email-alice/password-s3cret")
        .with_status(200)
        .with_body("{not json")
        .create();

    let err =
        Session::login_with_client(Client::new(), &server.url(), "alice", "s3cret").unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[test]
fn empty_project_listing_is_not_an_error() {
    let mut server = Server::new();
    server
        .mock("GET", "/projects/key-t")
        .with_status(200)
        .with_body("[]")
        .create();

    assert_eq!(open(&server).projects().unwrap(), Vec::<Project>::new());
}

#[test]
fn absent_optional_project_fields_decode_to_none() {
    let mut server = Server::new();
    server
        .mock("GET", "/projects/key-t")
        .with_status(200)
        .with_body(r#"[{"id":"p1","name":"Alpha"}]"#)
        .create();

    let projects = open(&server).projects().unwrap();
    assert_eq!(
        projects,
        vec![Project {
            id: Some("p1".to_string()),
            name: "Alpha".to_string(),
            body: None,
            body_show: None,
            count: None,
        }]
    );
}

#[test]
fn server_errors_preserve_the_raw_body() {
    let mut server = Server::new();
    server
        .mock("GET", "/projects/key-t")
        .with_status(500)
        .with_body(r#"{"looks":"like json"}"#)
        .create();

    let err = open(&server).projects().unwrap_err();
    match err {
        Error::Status { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, r#"{"looks":"like json"}"#);
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[test]
fn malformed_body_on_success_status_is_decode_not_transport() {
    let mut server = Server::new();
    server
        .mock("GET", "/projects/key-t")
        .with_status(200)
        .with_body("{not json")
        .create();

    let err = open(&server).projects().unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[test]
fn create_action_takes_its_id_from_the_acknowledgement() {
    let mut server = Server::new();
    let mock = server
        .mock(
            "GET",
            Matcher::Regex(r"^/newaction/name-Buy(%20| )milk/project_id-p1/next-true/key-t$".to_string()),
        )
        .with_status(200)
        .with_body(r#"{"response":"a99"}"#)
        .create();

    let action = open(&server)
        .create_action("Buy milk", &[("project_id", "p1"), ("next", "true")])
        .unwrap();
    mock.assert();

    assert_eq!(
        action,
        Action {
            id: "a99".to_string(),
            ..Action::default()
        }
    );
}

#[test]
fn unreachable_server_is_a_transport_error() {
    let client = Client::builder()
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();
    // Port 9 (discard) refuses connections on loopback.
    let session = Session::open_with_client(client, "http://127.0.0.1:9", "t");
    let err = session.projects().unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}
