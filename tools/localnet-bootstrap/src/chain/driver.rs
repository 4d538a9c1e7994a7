/*!
   Implementation of [`NodeDriver`].
*/

use crate::chain::cli::keys::Keyring;
use crate::types::config::NodeSettings;
use crate::types::env::{EnvWriter, ExportEnv};
use crate::types::validator::ValidatorIdentity;

/**
    A driver for preparing and starting a node through its command line.

    The driver binds the [`CommandRunner`](crate::chain::exec::CommandRunner)
    used to run the node binary to the validator home being bootstrapped
    and to the keyring holding its keys. The keyring and the genesis file
    under `home_path` are shared external state: every method of
    [`NodeBootstrapMethodsExt`](crate::chain::ext::bootstrap::NodeBootstrapMethodsExt)
    must be called one after another, never concurrently.
*/
#[derive(Debug, Clone)]
pub struct NodeDriver<Runner> {
    pub runner: Runner,

    /**
       The filesystem path to the node binary.
    */
    pub command_path: String,

    /**
       The node home directory holding the genesis file.
    */
    pub home_path: String,

    pub keyring: Keyring,

    pub settings: NodeSettings,
}

impl<Runner> NodeDriver<Runner> {
    pub fn new(
        runner: Runner,
        command_path: String,
        validator: &ValidatorIdentity,
        settings: NodeSettings,
    ) -> Self {
        let keyring = Keyring {
            backend: settings.keyring_backend.clone(),
            home: settings.keyring_home.clone(),
        };

        Self {
            runner,
            command_path,
            home_path: validator.home_path(),
            keyring,
            settings,
        }
    }
}

impl<Runner> ExportEnv for NodeDriver<Runner> {
    fn export_env(&self, writer: &mut impl EnvWriter) {
        writer.write_env("NODE_CMD", &self.command_path);
        writer.write_env("NODE_HOME", &self.home_path);
        writer.write_env("NODE_RPC_LADDR", &self.settings.rpc_listen_address);
        writer.write_env("NODE_KEYRING_BACKEND", &self.keyring.backend);
    }
}
