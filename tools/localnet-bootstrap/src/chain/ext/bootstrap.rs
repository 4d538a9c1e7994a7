use tracing::debug;

use crate::chain::cli::genesis::{
    add_genesis_account, add_genesis_validators, set_gen_denom_whitelist,
    set_genesis_oracle_admin, set_genesis_whitelister_admin,
};
use crate::chain::cli::keys::{add_key, import_key, show_operator_address};
use crate::chain::cli::start::start_node;
use crate::chain::driver::NodeDriver;
use crate::chain::exec::CommandRunner;
use crate::error::Error;
use crate::types::address::{AccountAddress, OperatorAddress};
use crate::types::process::SupervisedProcess;

pub trait NodeBootstrapMethodsExt {
    /**
       Import a key named `name` recovered from `mnemonic` into the
       keyring.
    */
    fn import_key(&self, name: &str, mnemonic: &str) -> Result<(), Error>;

    /**
       Read the bech32 validator operator address of the key `name`.
    */
    fn operator_address(&self, name: &str) -> Result<OperatorAddress, Error>;

    /**
       Register an operator address as a genesis validator.
    */
    fn add_genesis_validators(&self, operator: &OperatorAddress) -> Result<(), Error>;

    /**
       Create a fresh key named `name` and return its account address.
    */
    fn add_key(&self, name: &str) -> Result<AccountAddress, Error>;

    /**
       Add an account with the given balance to the genesis file.
    */
    fn add_genesis_account(&self, address: &AccountAddress, amount: &str) -> Result<(), Error>;

    fn set_genesis_oracle_admin(&self, address: &AccountAddress) -> Result<(), Error>;

    fn set_genesis_whitelister_admin(&self, address: &AccountAddress) -> Result<(), Error>;

    /**
       Load the token denomination whitelist at `whitelist_file` into the
       genesis file.
    */
    fn set_gen_denom_whitelist(&self, whitelist_file: &str) -> Result<(), Error>;

    /**
       Start the node daemon in the background with `<node binary> start`.

       Returns a [`SupervisedProcess`] whose completion resolves when the
       daemon exits.
    */
    fn start(&self) -> Result<SupervisedProcess, Error>;
}

impl<Runner: CommandRunner> NodeBootstrapMethodsExt for NodeDriver<Runner> {
    fn import_key(&self, name: &str, mnemonic: &str) -> Result<(), Error> {
        import_key(
            &self.runner,
            &self.command_path,
            &self.keyring,
            name,
            mnemonic,
        )
    }

    fn operator_address(&self, name: &str) -> Result<OperatorAddress, Error> {
        show_operator_address(&self.runner, &self.command_path, &self.keyring, name)
    }

    fn add_genesis_validators(&self, operator: &OperatorAddress) -> Result<(), Error> {
        add_genesis_validators(
            &self.runner,
            &self.command_path,
            &self.home_path,
            &operator.0,
        )
    }

    fn add_key(&self, name: &str) -> Result<AccountAddress, Error> {
        let address = add_key(&self.runner, &self.command_path, &self.keyring, name)?;

        debug!("created key {} with address {}", name, address);

        Ok(address)
    }

    fn add_genesis_account(&self, address: &AccountAddress, amount: &str) -> Result<(), Error> {
        add_genesis_account(
            &self.runner,
            &self.command_path,
            &self.home_path,
            &address.0,
            amount,
        )
    }

    fn set_genesis_oracle_admin(&self, address: &AccountAddress) -> Result<(), Error> {
        set_genesis_oracle_admin(&self.runner, &self.command_path, &self.home_path, &address.0)
    }

    fn set_genesis_whitelister_admin(&self, address: &AccountAddress) -> Result<(), Error> {
        set_genesis_whitelister_admin(&self.runner, &self.command_path, &self.home_path, &address.0)
    }

    fn set_gen_denom_whitelist(&self, whitelist_file: &str) -> Result<(), Error> {
        set_gen_denom_whitelist(
            &self.runner,
            &self.command_path,
            &self.home_path,
            whitelist_file,
        )
    }

    fn start(&self) -> Result<SupervisedProcess, Error> {
        start_node(
            &self.runner,
            &self.command_path,
            &self.home_path,
            &self.settings.rpc_listen_address,
            &self.settings.minimum_gas_prices,
        )
    }
}
