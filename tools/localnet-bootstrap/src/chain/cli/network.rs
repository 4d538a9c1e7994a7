use crate::chain::exec::CommandRunner;
use crate::error::{Error, ErrorDetail};

/**
   Run `network create` of the network generator, which lays out the
   validator directories under `network_dir` and writes the topology to
   `network_config_file`.

   A failing generator is reported as
   [`ConfigGenerationFailed`](ErrorDetail::ConfigGenerationFailed).
*/
pub fn network_create(
    runner: &impl CommandRunner,
    generator_path: &str,
    keyring_backend: &str,
    chain_id: &str,
    n_validators: u32,
    network_dir: &str,
    seed_ip_address: &str,
    network_config_file: &str,
) -> Result<(), Error> {
    let n_validators = n_validators.to_string();

    let res = runner.exec(
        generator_path,
        &[
            "network",
            "create",
            "--keyring-backend",
            keyring_backend,
            chain_id,
            &n_validators,
            network_dir,
            seed_ip_address,
            network_config_file,
        ],
        None,
    );

    match res {
        Ok(_) => Ok(()),
        Err(e) => match e.detail() {
            ErrorDetail::ExternalCommandFailed(failed) => Err(Error::config_generation_failed(
                failed.program.clone(),
                failed.args.clone(),
                failed.exit_code,
                failed.stderr.clone(),
            )),
            _ => Err(e),
        },
    }
}
