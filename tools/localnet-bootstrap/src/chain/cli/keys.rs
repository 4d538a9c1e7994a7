use tracing::debug;

use crate::chain::exec::CommandRunner;
use crate::error::Error;
use crate::types::address::{
    extract_address, extract_operator_address, AccountAddress, OperatorAddress,
};

/// The keyring flags shared by all `keys` subcommands.
#[derive(Debug, Clone)]
pub struct Keyring {
    pub backend: String,
    pub home: Option<String>,
}

impl Keyring {
    fn push_args<'a>(&'a self, args: &mut Vec<&'a str>) {
        args.extend(["--keyring-backend", self.backend.as_str()]);

        if let Some(home) = &self.home {
            args.extend(["--home", home.as_str()]);
        }
    }
}

/**
   Import a key into the keyring by recovering it from `mnemonic`, which
   is fed to the command on stdin.

   Fails if the keyring already holds a key named `name`.
*/
pub fn import_key(
    runner: &impl CommandRunner,
    command_path: &str,
    keyring: &Keyring,
    name: &str,
    mnemonic: &str,
) -> Result<(), Error> {
    let mut args = vec!["keys", "add", name, "--recover"];
    keyring.push_args(&mut args);

    let input = format!("{mnemonic}\n");

    runner.exec(command_path, &args, Some(input.as_str()))?;

    Ok(())
}

pub fn show_operator_address(
    runner: &impl CommandRunner,
    command_path: &str,
    keyring: &Keyring,
    name: &str,
) -> Result<OperatorAddress, Error> {
    let mut args = vec!["keys", "show", "-a", "--bech", "val", name];
    keyring.push_args(&mut args);

    let output = runner.exec(command_path, &args, None)?;

    extract_operator_address("keys show", &output.stdout)
}

/**
   Create a new key named `name` and return its account address.

   The confirmation prompts of the command are answered on stdin.
*/
pub fn add_key(
    runner: &impl CommandRunner,
    command_path: &str,
    keyring: &Keyring,
    name: &str,
) -> Result<AccountAddress, Error> {
    let mut args = vec!["keys", "add", name, "--output", "json"];
    keyring.push_args(&mut args);

    let output = runner.exec(command_path, &args, Some("yes\nyes"))?;

    // Older SDK versions print the key JSON to stderr instead of stdout.
    let key_json = if output.stdout.is_empty() {
        debug!("reading key json of {} from stderr", name);
        output.stderr.trim()
    } else {
        output.stdout.as_str()
    };

    extract_address("keys add", key_json)
}
