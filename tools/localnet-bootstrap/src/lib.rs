#![allow(clippy::too_many_arguments)]
#![doc = include_str!("../README.md")]

//!
//! ## Overview
//!
//! The bootstrap is a fallible, strictly sequential pipeline. Each stage
//! runs an external binary, parses what it printed or wrote, and hands the
//! derived value to a later stage:
//!
//! 1. [`generate_network_config`](bootstrap::network::generate_network_config)
//!    runs the network generator and parses the validator records it wrote.
//! 2. [`bootstrap_validator`](bootstrap::validator::bootstrap_validator)
//!    imports the primary validator key, registers its operator address in
//!    genesis, and creates and empowers the admin account.
//! 3. [`bootstrap_network`](bootstrap::single::bootstrap_network) runs both
//!    of the above and starts the node daemon, returning a
//!    [`RunningNetwork`](bootstrap::single::RunningNetwork) whose
//!    completion signal resolves when the daemon exits.
//!
//! The relayer is started separately with
//! [`init_relayer`](relayer::init::init_relayer).
//!
//! All processes are run through the [`CommandRunner`](chain::exec::CommandRunner)
//! trait, so that the pipeline can be driven by a fake runner in tests.

pub mod bootstrap;
pub mod chain;
pub mod error;
pub mod prelude;
pub mod relayer;
pub mod types;
pub mod util;
