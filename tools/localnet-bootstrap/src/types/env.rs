/*!
   Exporting the bootstrapped network as environment variables.
*/

use itertools::Itertools;
use std::collections::BTreeMap;
use std::fs::write;
use std::path::Path;

use crate::error::Error;

/**
    Implemented by types that can export the information a developer
    needs to interact with the running network, such as the node home
    directory and the admin address.

    The exported variables are saved as a `.env` file that can be
    `source`d in a terminal.
*/
pub trait ExportEnv {
    fn export_env(&self, writer: &mut impl EnvWriter);
}

pub trait EnvWriter {
    /**
       Write an environment variable with the given key and value.

       Note that overlapping keys will be overridden with the new value.
    */
    fn write_env(&mut self, key: &str, value: &str);
}

impl EnvWriter for BTreeMap<String, String> {
    fn write_env(&mut self, key: &str, value: &str) {
        self.insert(key.to_string(), value.to_string());
    }
}

/// Format the exported variables as `KEY=VALUE` lines, sorted by key.
pub fn format_env(exporter: &impl ExportEnv) -> String {
    let mut envs = BTreeMap::new();
    exporter.export_env(&mut envs);

    envs.iter()
        .map(|(key, value)| format!("{key}={value}"))
        .join("\n")
}

pub fn write_env(path: impl AsRef<Path>, exporter: &impl ExportEnv) -> Result<(), Error> {
    write(path, format_env(exporter))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Node;

    impl ExportEnv for Node {
        fn export_env(&self, writer: &mut impl EnvWriter) {
            writer.write_env("NODE_HOME", "/tmp/home");
            writer.write_env("CHAIN_ID", "localnet");
            writer.write_env("NODE_HOME", "/tmp/other");
        }
    }

    #[test]
    fn formats_sorted_overridden_envs() {
        assert_eq!(format_env(&Node), "CHAIN_ID=localnet\nNODE_HOME=/tmp/other");
    }

    #[test]
    fn writes_env_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("localnet.env");

        write_env(&path, &Node).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.starts_with("CHAIN_ID=localnet"));
    }
}
