//! Re-exports of the commonly used constructs.

pub use crate::bootstrap::init::init;
pub use crate::bootstrap::network::generate_network_config;
pub use crate::bootstrap::single::{bootstrap_network, RunningNetwork};
pub use crate::bootstrap::validator::{bootstrap_validator, BootstrappedValidator};
pub use crate::chain::driver::NodeDriver;
pub use crate::chain::exec::{CommandRunner, ExecOutput, ProcessRunner};
pub use crate::chain::ext::bootstrap::NodeBootstrapMethodsExt;
pub use crate::error::{handle_generic_error, Error, ErrorDetail};
pub use crate::relayer::init::{init_relayer, relayer_validator, RelayerInitCommand};
pub use crate::types::address::{AccountAddress, OperatorAddress};
pub use crate::types::config::{BootstrapArguments, NodeSettings};
pub use crate::types::env::{write_env, ExportEnv};
pub use crate::types::network::{NetworkConfig, ValidatorValues};
pub use crate::types::process::{ProcessCompletion, ProcessExit, ProcessHandle, SupervisedProcess};
pub use crate::types::validator::ValidatorIdentity;
pub use crate::util::binaries::BinaryPaths;
