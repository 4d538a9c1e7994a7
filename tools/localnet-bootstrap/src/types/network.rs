/*!
   The network topology produced by the network generator.
*/

use serde::{Deserialize, Serialize};
use serde_yaml as yaml;
use std::fs;
use std::path::Path;

use crate::error::Error;

/**
   A validator record of the generated network config.

   Only `moniker`, `mnemonic` and `password` are required. The generator
   also writes the fields below and a few more (addresses, public keys)
   which are ignored.
*/
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorValues {
    pub moniker: String,

    pub mnemonic: String,

    pub password: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv4_address: Option<String>,

    #[serde(default)]
    pub is_seed: bool,
}

impl ValidatorValues {
    pub fn new(moniker: &str, mnemonic: &str, password: &str) -> Self {
        Self {
            moniker: moniker.to_string(),
            mnemonic: mnemonic.to_string(),
            password: password.to_string(),
            chain_id: None,
            node_id: None,
            ipv4_address: None,
            is_seed: false,
        }
    }
}

/**
   The ordered validator records of a generated network. A parsed
   `NetworkConfig` always holds at least one record.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    validators: Vec<ValidatorValues>,
}

impl NetworkConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let source = path.display().to_string();

        let content = fs::read_to_string(path)
            .map_err(|e| Error::config_parse_failed(source.clone(), e.to_string()))?;

        Self::parse(&content, &source)
    }

    pub fn parse(content: &str, source: &str) -> Result<Self, Error> {
        let validators: Vec<ValidatorValues> = yaml::from_str(content)
            .map_err(|e| Error::config_parse_failed(source.to_string(), e.to_string()))?;

        if validators.is_empty() {
            return Err(Error::config_parse_failed(
                source.to_string(),
                "no validator records found".to_string(),
            ));
        }

        Ok(Self { validators })
    }

    /**
       The validator used to bootstrap the network. This is always the
       first record; the remaining records are not bootstrapped.
    */
    pub fn primary(&self) -> &ValidatorValues {
        &self.validators[0]
    }

    pub fn validators(&self) -> &[ValidatorValues] {
        &self.validators
    }
}
