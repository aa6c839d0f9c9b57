// Library root
// -----------
// Client library for the Nozbe task-management HTTP API, plus the
// modules backing the `nozbe` binary.
//
// Module responsibilities:
// - `api`: the `Session` type — authenticated URL construction and the
//   project/action operations, one HTTP GET each.
// - `types`: value objects decoded from server responses.
// - `error`: the failure taxonomy every operation returns.
// - `cli`: argument definitions and command handlers for the binary.
pub mod api;
pub mod cli;
pub mod error;
pub mod types;

pub use api::{Session, NOZBE_API};
pub use error::Error;
pub use types::{Action, Project};
