/*!
   Addresses read from the output of keyring commands.

   All scraping of command output for addresses goes through this module,
   so that a change in the output format of the node binary only needs
   to be handled here.
*/

use core::fmt::{self, Display};
use serde_json as json;

use crate::error::Error;

/// The bech32 validator operator address, e.g. `sifvaloper1...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorAddress(pub String);

/// The bech32 account address, e.g. `sif1...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountAddress(pub String);

impl Display for OperatorAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/**
   Read the operator address printed by `keys show -a --bech val`.
*/
pub fn extract_operator_address(command: &str, output: &str) -> Result<OperatorAddress, Error> {
    let address = output.trim();

    if address.is_empty() || address.contains(char::is_whitespace) {
        return Err(Error::output_parse_failed(
            command.to_string(),
            "address".to_string(),
            output.to_string(),
        ));
    }

    Ok(OperatorAddress(address.to_string()))
}

/**
   Read the `address` field of the JSON printed by `keys add --output json`.
*/
pub fn extract_address(command: &str, output: &str) -> Result<AccountAddress, Error> {
    let parse_failed = || {
        Error::output_parse_failed(
            command.to_string(),
            "address".to_string(),
            output.to_string(),
        )
    };

    let json_val: json::Value = json::from_str(output).map_err(|_| parse_failed())?;

    let address = json_val
        .get("address")
        .and_then(|address| address.as_str())
        .filter(|address| !address.is_empty())
        .ok_or_else(parse_failed)?;

    Ok(AccountAddress(address.to_string()))
}
