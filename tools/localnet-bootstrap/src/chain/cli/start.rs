use crate::chain::exec::CommandRunner;
use crate::error::Error;
use crate::types::process::SupervisedProcess;

/**
   Start the node daemon with its stdio attached to the current terminal.

   Returns as soon as the daemon is spawned. The network is considered
   alive until the returned completion signal resolves.
*/
pub fn start_node(
    runner: &impl CommandRunner,
    command_path: &str,
    home_path: &str,
    rpc_listen_address: &str,
    minimum_gas_prices: &str,
) -> Result<SupervisedProcess, Error> {
    runner.spawn(
        command_path,
        &[
            "start",
            "--minimum-gas-prices",
            minimum_gas_prices,
            "--rpc.laddr",
            rpc_listen_address,
            "--home",
            home_path,
        ],
    )
}
