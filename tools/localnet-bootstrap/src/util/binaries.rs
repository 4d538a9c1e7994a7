/*!
   Locations of the node, network generator and relayer binaries.

   Building and installing the binaries happens outside of this crate.
   We only resolve the directory they were installed to.
*/

use std::env;
use std::path::{Path, PathBuf};

pub const NODE_BINARY: &str = "sifnoded";
pub const NETWORK_GENERATOR_BINARY: &str = "sifgen";
pub const RELAYER_BINARY: &str = "ebrelayer";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryPaths {
    /// The node daemon, which is also the keyring and genesis CLI.
    pub node: String,
    pub network_generator: String,
    pub relayer: String,
}

impl BinaryPaths {
    pub fn from_install_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let path_of = |binary: &str| dir.join(binary).display().to_string();

        Self {
            node: path_of(NODE_BINARY),
            network_generator: path_of(NETWORK_GENERATOR_BINARY),
            relayer: path_of(RELAYER_BINARY),
        }
    }

    /**
       Resolve the install directory from `LOCALNET_BIN_DIR`, falling back
       to `GOBIN` and then to `$HOME/go/bin`. If none of them is set, the
       binaries are looked up in `PATH`.
    */
    pub fn from_env() -> Self {
        match install_dir_from_env() {
            Some(dir) => Self::from_install_dir(dir),
            None => Self {
                node: NODE_BINARY.to_string(),
                network_generator: NETWORK_GENERATOR_BINARY.to_string(),
                relayer: RELAYER_BINARY.to_string(),
            },
        }
    }
}

fn install_dir_from_env() -> Option<PathBuf> {
    let non_empty = |key: &str| env::var(key).ok().filter(|val| !val.is_empty());

    non_empty("LOCALNET_BIN_DIR")
        .or_else(|| non_empty("GOBIN"))
        .map(PathBuf::from)
        .or_else(|| non_empty("HOME").map(|home| PathBuf::from(home).join("go").join("bin")))
}
