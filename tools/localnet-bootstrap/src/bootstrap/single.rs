/*!
   Bootstrapping a local network end to end and starting its node.
*/

use tracing::info;

use crate::bootstrap::network::generate_network_config;
use crate::bootstrap::validator::{bootstrap_validator, BootstrappedValidator};
use crate::chain::driver::NodeDriver;
use crate::chain::exec::CommandRunner;
use crate::chain::ext::bootstrap::NodeBootstrapMethodsExt;
use crate::error::Error;
use crate::types::config::BootstrapArguments;
use crate::types::env::{EnvWriter, ExportEnv};
use crate::types::process::{ProcessCompletion, ProcessHandle, SupervisedProcess};
use crate::types::validator::ValidatorIdentity;
use crate::util::binaries::BinaryPaths;

/**
   A bootstrapped network whose node daemon is running.

   The network is alive until [`completion`](Self::completion) resolves.
*/
#[derive(Debug)]
pub struct RunningNetwork<Runner> {
    pub chain_id: String,

    pub driver: NodeDriver<Runner>,

    pub validator: ValidatorIdentity,

    pub bootstrapped: BootstrappedValidator,

    pub whitelist_file: String,

    /// Used to terminate the node daemon.
    pub process: ProcessHandle,

    /// Resolves once, when the node daemon exits.
    pub completion: ProcessCompletion,
}

/**
   Generate the network, bootstrap its primary validator and start the
   node daemon from the primary validator's home.

   Only the first validator record produced by the generator is
   bootstrapped; the other records are left untouched.
*/
pub fn bootstrap_network<Runner: CommandRunner>(
    runner: Runner,
    binaries: &BinaryPaths,
    args: &BootstrapArguments,
) -> Result<RunningNetwork<Runner>, Error> {
    let network_config = generate_network_config(&runner, binaries, args)?;

    let validator = ValidatorIdentity::new(
        network_config.primary(),
        &args.network_dir,
        &args.chain_id,
        &args.node.home_subdir,
    );

    info!(
        "bootstrapping primary validator {} with home {}",
        validator.moniker,
        validator.home_path()
    );

    let driver = NodeDriver::new(
        runner,
        binaries.node.clone(),
        &validator,
        args.node.clone(),
    );

    let bootstrapped = bootstrap_validator(&driver, &validator, &args.whitelist_file)?;

    let SupervisedProcess { handle, completion } = driver.start()?;

    info!(
        "started node of network {} listening on {}",
        args.chain_id, driver.settings.rpc_listen_address
    );

    Ok(RunningNetwork {
        chain_id: args.chain_id.clone(),
        driver,
        validator,
        bootstrapped,
        whitelist_file: args.whitelist_file.clone(),
        process: handle,
        completion,
    })
}

impl<Runner> ExportEnv for RunningNetwork<Runner> {
    fn export_env(&self, writer: &mut impl EnvWriter) {
        self.driver.export_env(writer);
        writer.write_env("CHAIN_ID", &self.chain_id);
        writer.write_env("VALIDATOR_MONIKER", &self.validator.moniker);
        writer.write_env("VALIDATOR_OPERATOR", &self.bootstrapped.operator.0);
        writer.write_env("ADMIN_ADDRESS", &self.bootstrapped.admin.0);
        writer.write_env("WHITELIST_FILE", &self.whitelist_file);
    }
}
