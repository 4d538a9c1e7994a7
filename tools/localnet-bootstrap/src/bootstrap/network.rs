/*!
   Generating the network topology with the network generator binary.

   The generator is the only source of validator identities. We never
   synthesize validator records here, we only read what it produced.
*/

use itertools::Itertools;
use tracing::info;

use crate::chain::cli::network::network_create;
use crate::chain::exec::CommandRunner;
use crate::error::Error;
use crate::types::config::BootstrapArguments;
use crate::types::network::NetworkConfig;
use crate::util::binaries::BinaryPaths;

/**
   Run the network generator once, then load the topology it wrote to
   the network config file.
*/
pub fn generate_network_config(
    runner: &impl CommandRunner,
    binaries: &BinaryPaths,
    args: &BootstrapArguments,
) -> Result<NetworkConfig, Error> {
    info!(
        "generating network {} with {} validators in {}",
        args.chain_id, args.n_validators, args.network_dir
    );

    network_create(
        runner,
        &binaries.network_generator,
        &args.node.keyring_backend,
        &args.chain_id,
        args.n_validators,
        &args.network_dir,
        &args.seed_ip_address,
        &args.network_config_file,
    )?;

    let network_config = NetworkConfig::load(&args.network_config_file)?;

    info!(
        "loaded network config {} with validators: {}",
        args.network_config_file,
        network_config
            .validators()
            .iter()
            .map(|validator| &validator.moniker)
            .join(", ")
    );

    Ok(network_config)
}
