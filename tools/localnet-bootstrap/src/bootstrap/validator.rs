/*!
   The validator bootstrap sequence.

   Each step reads or mutates the keyring or the genesis file of the
   primary validator, and most steps consume the output of an earlier
   one, so the steps run strictly in order. There is no rollback: a
   failing step leaves the keyring and genesis file partially mutated,
   and the run's network directory is expected to be discarded.
*/

use tracing::info;

use crate::chain::driver::NodeDriver;
use crate::chain::exec::CommandRunner;
use crate::chain::ext::bootstrap::NodeBootstrapMethodsExt;
use crate::error::Error;
use crate::types::address::{AccountAddress, OperatorAddress};
use crate::types::validator::ValidatorIdentity;

/// The values derived while bootstrapping the primary validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrappedValidator {
    pub operator: OperatorAddress,

    /// The administrative account holding the oracle and whitelister
    /// admin roles.
    pub admin: AccountAddress,
}

/**
   Prepare the keyring and the genesis file of `validator`:

   1. import the validator key from its mnemonic
   2. read its operator address
   3. register the operator address as a genesis validator
   4. create the admin key
   5. fund the admin account, then make it oracle admin and whitelister
      admin
   6. load the denomination whitelist

   The first failing step ends the sequence and its error is returned.
   Running this against a keyring that already holds the validator
   moniker fails at the first step.
*/
pub fn bootstrap_validator<Runner: CommandRunner>(
    driver: &NodeDriver<Runner>,
    validator: &ValidatorIdentity,
    whitelist_file: &str,
) -> Result<BootstrappedValidator, Error> {
    driver.import_key(&validator.moniker, &validator.mnemonic)?;

    info!("imported key of validator {} into the keyring", validator.moniker);

    let operator = driver.operator_address(&validator.moniker)?;

    info!(
        "validator {} has operator address {}",
        validator.moniker, operator
    );

    driver.add_genesis_validators(&operator)?;

    info!(
        "registered genesis validator {} in {}",
        operator, driver.home_path
    );

    let admin_key_name = &driver.settings.admin_key_name;
    let admin = driver.add_key(admin_key_name)?;

    info!("created admin account {} with address {}", admin_key_name, admin);

    driver.add_genesis_account(&admin, &driver.settings.admin_funding)?;
    driver.set_genesis_oracle_admin(&admin)?;
    driver.set_genesis_whitelister_admin(&admin)?;

    info!("granted oracle and whitelister admin roles to {}", admin);

    driver.set_gen_denom_whitelist(whitelist_file)?;

    info!("loaded denom whitelist {}", whitelist_file);

    Ok(BootstrappedValidator { operator, admin })
}
