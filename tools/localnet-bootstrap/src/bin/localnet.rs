use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use eyre::Report;
use tracing::{error, info};

use localnet_bootstrap::bootstrap::init::init;
use localnet_bootstrap::bootstrap::network::generate_network_config;
use localnet_bootstrap::bootstrap::single::bootstrap_network;
use localnet_bootstrap::chain::exec::ProcessRunner;
use localnet_bootstrap::relayer::init::{init_relayer, relayer_validator};
use localnet_bootstrap::types::config::BootstrapArguments;
use localnet_bootstrap::types::env::write_env;
use localnet_bootstrap::types::process::ProcessExit;
use localnet_bootstrap::util::binaries::BinaryPaths;

#[derive(Debug, Parser)]
#[clap(name = "localnet", about = "Bootstrap a local test network")]
struct Opts {
    /// TOML file with the bootstrap arguments; defaults are used when absent
    #[clap(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the sifnoded, sifgen and ebrelayer binaries
    #[clap(long, global = true)]
    bin_dir: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate the network, bootstrap the primary validator and run its node
    Start {
        /// Where to write the environment variables of the running network
        #[clap(long)]
        env_file: Option<PathBuf>,
    },

    /// Initialize the relayer against a running node
    Relayer,

    /// Only run the network generator and list the generated validators
    Generate,
}

#[tokio::main]
async fn main() -> ExitCode {
    init();

    match run().await {
        Ok(exit) => exit_code(exit),
        Err(e) => {
            error!("{e:?}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<ProcessExit, Report> {
    let opts = Opts::parse();

    let args = match &opts.config {
        Some(path) => BootstrapArguments::load(path)?,
        None => BootstrapArguments::default(),
    };

    let binaries = match &opts.bin_dir {
        Some(dir) => BinaryPaths::from_install_dir(dir),
        None => BinaryPaths::from_env(),
    };

    match opts.command {
        Command::Start { env_file } => {
            let network = bootstrap_network(ProcessRunner, &binaries, &args)?;

            if let Some(env_file) = env_file {
                write_env(&env_file, &network)?;
                info!("written network environment to {}", env_file.display());
            }

            info!("network {} is running", network.chain_id);

            Ok(network.completion.await?)
        }
        Command::Relayer => {
            let validator = relayer_validator(&args)?;
            let relayer = init_relayer(&ProcessRunner, &binaries, &args, &validator)?;

            Ok(relayer.completion.await?)
        }
        Command::Generate => {
            let network_config = generate_network_config(&ProcessRunner, &binaries, &args)?;

            for validator in network_config.validators() {
                println!("{}", validator.moniker);
            }

            Ok(ProcessExit::new(Some(0)))
        }
    }
}

fn exit_code(exit: ProcessExit) -> ExitCode {
    ExitCode::from(exit_status(exit))
}

/// Codes outside of `0..=255`, and deaths by signal, report failure.
fn exit_status(exit: ProcessExit) -> u8 {
    exit.code
        .and_then(|code| u8::try_from(code).ok())
        .unwrap_or(1)
}
