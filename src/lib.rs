//! cozydash: core of a remote-connection dashboard.
//!
//! - connection catalog metrics: leaf counts over a folder forest, per protocol
//! - access ticket classification for the current user
//! - theme registry and the start-up injection of style variables
//!
//! Layers: `domain` (pure logic), `application` (services), `infrastructure`
//! (I/O, process-wide style store, wiring), `cli` (the `cozydash` binary).

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
