/*!
   Subcommands of the node binary that mutate the genesis file under a
   node home directory.

   The genesis file is shared by all of these commands, so they must
   never run concurrently against the same home.
*/

use crate::chain::exec::CommandRunner;
use crate::error::Error;

pub fn add_genesis_validators(
    runner: &impl CommandRunner,
    command_path: &str,
    home_path: &str,
    operator_address: &str,
) -> Result<(), Error> {
    runner.exec(
        command_path,
        &[
            "add-genesis-validators",
            operator_address,
            "--home",
            home_path,
        ],
        None,
    )?;

    Ok(())
}

pub fn add_genesis_account(
    runner: &impl CommandRunner,
    command_path: &str,
    home_path: &str,
    address: &str,
    amount: &str,
) -> Result<(), Error> {
    runner.exec(
        command_path,
        &["add-genesis-account", address, amount, "--home", home_path],
        None,
    )?;

    Ok(())
}

pub fn set_genesis_oracle_admin(
    runner: &impl CommandRunner,
    command_path: &str,
    home_path: &str,
    address: &str,
) -> Result<(), Error> {
    runner.exec(
        command_path,
        &["set-genesis-oracle-admin", address, "--home", home_path],
        None,
    )?;

    Ok(())
}

pub fn set_genesis_whitelister_admin(
    runner: &impl CommandRunner,
    command_path: &str,
    home_path: &str,
    address: &str,
) -> Result<(), Error> {
    runner.exec(
        command_path,
        &["set-genesis-whitelister-admin", address, "--home", home_path],
        None,
    )?;

    Ok(())
}

pub fn set_gen_denom_whitelist(
    runner: &impl CommandRunner,
    command_path: &str,
    home_path: &str,
    whitelist_file: &str,
) -> Result<(), Error> {
    runner.exec(
        command_path,
        &["set-gen-denom-whitelist", whitelist_file, "--home", home_path],
        None,
    )?;

    Ok(())
}
