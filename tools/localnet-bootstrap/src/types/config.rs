/*!
   Configuration of a bootstrap run.
*/

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Error;
use crate::types::network::ValidatorValues;

/**
   The parameters of a bootstrap run, supplied once at construction.

   The arguments are not validated upfront. A missing or wrong value
   surfaces as a failure of the command that consumes it.
*/
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BootstrapArguments {
    /// Websocket address of the node that the relayer subscribes to.
    pub websocket_address: String,

    /// Tendermint RPC URL of the node, used by the relayer.
    pub tcp_url: String,

    /// Network ID passed to the relayer as its `--chain-id`.
    pub chain_net: u64,

    /// The chain ID of the generated network.
    pub chain_id: String,

    pub db_path: String,

    /**
       The validator identity used by the relayer. When absent, the
       relayer uses the primary record of the generated network config.
    */
    pub validator_values: Option<ValidatorValues>,

    pub symbol_translator_file: String,

    pub relayer_db_path: String,

    /// Root directory under which the generator lays out validator homes.
    pub network_dir: String,

    pub seed_ip_address: String,

    /// The YAML file the network generator writes its topology to.
    pub network_config_file: String,

    pub whitelist_file: String,

    pub n_validators: u32,

    pub node: NodeSettings,
}

/**
   Settings of the node binary that stay the same across runs.
*/
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NodeSettings {
    /// Name of the node home directory inside a validator directory.
    pub home_subdir: String,

    pub keyring_backend: String,

    /**
       Home directory passed to keyring commands. When unset, the node
       binary uses its default keyring location.
    */
    pub keyring_home: Option<String>,

    pub admin_key_name: String,

    /// Initial balance granted to the admin account in genesis.
    pub admin_funding: String,

    pub minimum_gas_prices: String,

    pub rpc_listen_address: String,
}

impl Default for BootstrapArguments {
    fn default() -> Self {
        Self {
            websocket_address: "ws://localhost:26657/websocket".to_string(),
            tcp_url: "tcp://0.0.0.0:26657".to_string(),
            chain_net: 9000,
            chain_id: "localnet".to_string(),
            db_path: "/tmp/ebrelayer.db".to_string(),
            validator_values: None,
            symbol_translator_file: "/tmp/symbol_translator.json".to_string(),
            relayer_db_path: "/tmp/relayerdb".to_string(),
            network_dir: "/tmp/sifnodedNetwork".to_string(),
            seed_ip_address: "10.10.1.1".to_string(),
            network_config_file: "/tmp/sifnodedConfig.yml".to_string(),
            whitelist_file: "../test/integration/whitelisted-denoms.json".to_string(),
            n_validators: 1,
            node: NodeSettings::default(),
        }
    }
}

impl Default for NodeSettings {
    fn default() -> Self {
        Self {
            home_subdir: ".sifnoded".to_string(),
            keyring_backend: "test".to_string(),
            keyring_home: None,
            admin_key_name: "sifnodeadmin".to_string(),
            admin_funding: "100000000000000000000rowan".to_string(),
            minimum_gas_prices: "0.5rowan".to_string(),
            rpc_listen_address: "tcp://0.0.0.0:26657".to_string(),
        }
    }
}

impl BootstrapArguments {
    /// Load the arguments from a TOML file. Absent fields take their
    /// default values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        Self::from_toml(&content, &path.display().to_string())
    }

    pub fn from_toml(content: &str, source: &str) -> Result<Self, Error> {
        toml::from_str(content).map_err(|e| Error::config_file(source.to_string(), e))
    }
}
