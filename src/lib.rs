// Library root
// -----------
// The binary (`main.rs`) parses the command line, resolves the project
// paths and hands off to `app::run`. Everything else lives here so it
// can be tested without spawning the process.
//
// Module responsibilities:
// - `api`: the blocking HTTP GET for the logo.
// - `extension`: picks .svg/.png/.jpg from the URL and Content-Type.
// - `config`: best-effort read-modify-write of config.json.
// - `paths`: the project root, assets dir and config file locations.
// - `app`: the two-stage flow (fetch + save, then config update).
// - `cli`, `logging`, `ui`: argument parsing, tracing setup, spinner.
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod extension;
pub mod logging;
pub mod paths;
pub mod ui;
