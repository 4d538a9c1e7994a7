use std::path::{Path, PathBuf};

use crate::types::network::ValidatorValues;

/**
   The identity of the validator being bootstrapped, together with the
   directories the generator created for it.

   A `ValidatorIdentity` belongs to a single bootstrap run.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorIdentity {
    pub moniker: String,

    pub mnemonic: String,

    pub password: String,

    /// `<network_dir>/validators/<chain_id>/<moniker>`
    pub chain_dir: PathBuf,

    /// The node home inside [`chain_dir`](Self::chain_dir), holding the
    /// genesis file.
    pub home_dir: PathBuf,
}

impl ValidatorIdentity {
    pub fn new(
        values: &ValidatorValues,
        network_dir: impl AsRef<Path>,
        chain_id: &str,
        home_subdir: &str,
    ) -> Self {
        let chain_dir = network_dir
            .as_ref()
            .join("validators")
            .join(chain_id)
            .join(&values.moniker);

        let home_dir = chain_dir.join(home_subdir);

        Self {
            moniker: values.moniker.clone(),
            mnemonic: values.mnemonic.clone(),
            password: values.password.clone(),
            chain_dir,
            home_dir,
        }
    }

    pub fn home_path(&self) -> String {
        self.home_dir.display().to_string()
    }
}
