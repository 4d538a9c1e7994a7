/*!
   Initializing the relayer against a running node.
*/

use tracing::info;

use crate::chain::exec::CommandRunner;
use crate::error::Error;
use crate::types::config::BootstrapArguments;
use crate::types::network::{NetworkConfig, ValidatorValues};
use crate::types::process::SupervisedProcess;
use crate::util::binaries::BinaryPaths;

/**
   The `init` command line of the relayer binary.

   The relayer signs with the validator key, so the validator moniker
   and mnemonic are passed along with the node addresses.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayerInitCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl RelayerInitCommand {
    pub fn new(relayer_path: &str, args: &BootstrapArguments, validator: &ValidatorValues) -> Self {
        let args = vec![
            "init".to_string(),
            args.tcp_url.clone(),
            args.websocket_address.clone(),
            validator.moniker.clone(),
            validator.mnemonic.clone(),
            "--chain-id".to_string(),
            args.chain_net.to_string(),
            "--node".to_string(),
            args.tcp_url.clone(),
            "--keyring-backend".to_string(),
            args.node.keyring_backend.clone(),
            "--from".to_string(),
            validator.moniker.clone(),
            "--symbol-translator-file".to_string(),
            args.symbol_translator_file.clone(),
            "--relayerdb-path".to_string(),
            args.relayer_db_path.clone(),
        ];

        Self {
            program: relayer_path.to_string(),
            args,
        }
    }

    pub fn run(&self, runner: &impl CommandRunner) -> Result<SupervisedProcess, Error> {
        let args = self.args.iter().map(String::as_str).collect::<Vec<_>>();

        runner.spawn(&self.program, &args)
    }
}

/**
   The validator identity the relayer signs with: the configured
   `validator_values` if present, otherwise the primary record of the
   generated network config file.
*/
pub fn relayer_validator(args: &BootstrapArguments) -> Result<ValidatorValues, Error> {
    match &args.validator_values {
        Some(values) => Ok(values.clone()),
        None => Ok(NetworkConfig::load(&args.network_config_file)?
            .primary()
            .clone()),
    }
}

/**
   Run the relayer `init` command under supervision. The relayer does
   not touch the genesis file, so it can run alongside the node daemon.
*/
pub fn init_relayer(
    runner: &impl CommandRunner,
    binaries: &BinaryPaths,
    args: &BootstrapArguments,
    validator: &ValidatorValues,
) -> Result<SupervisedProcess, Error> {
    let command = RelayerInitCommand::new(&binaries.relayer, args, validator);

    info!(
        "initializing relayer for validator {} against node {}",
        validator.moniker, args.tcp_url
    );

    command.run(runner)
}
