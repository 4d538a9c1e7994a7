use std::cell::RefCell;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use tokio::sync::oneshot;

use localnet_bootstrap::prelude::*;

const OPERATOR: &str = "sifvaloper1val0";
const ADMIN: &str = "sif1admin";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Invocation {
    program: String,
    args: Vec<String>,
    stdin: Option<String>,
    supervised: bool,
}

/**
   A runner that simulates the generator and node binaries, keeping
   the keyring in memory so that repeated runs see earlier keys.
*/
#[derive(Debug)]
struct MockRunner {
    calls: RefCell<Vec<Invocation>>,
    keyring: RefCell<HashSet<String>>,
    topology: Option<String>,
    fail_generator: bool,
    admin_output: String,
    daemon_exit: Option<i32>,
}

impl MockRunner {
    fn new(topology: &str) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            keyring: RefCell::new(HashSet::new()),
            topology: Some(topology.to_string()),
            fail_generator: false,
            admin_output: format!(r#"{{"name":"sifnodeadmin","type":"local","address":"{ADMIN}"}}"#),
            daemon_exit: Some(0),
        }
    }

    fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn failed(program: &str, args: &[&str], stderr: &str) -> Error {
        Error::external_command_failed(
            program.to_string(),
            args.iter().map(|arg| arg.to_string()).collect(),
            Some(1),
            stderr.to_string(),
        )
    }

    fn output(stdout: &str) -> ExecOutput {
        ExecOutput {
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }
}

impl CommandRunner for MockRunner {
    fn exec(&self, program: &str, args: &[&str], stdin: Option<&str>) -> Result<ExecOutput, Error> {
        self.calls.borrow_mut().push(Invocation {
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
            stdin: stdin.map(str::to_string),
            supervised: false,
        });

        match args {
            ["network", "create", .., config_file] => {
                if self.fail_generator {
                    return Err(Self::failed(program, args, "invalid seed ip"));
                }
                if let Some(topology) = &self.topology {
                    fs::write(config_file, topology)?;
                }
                Ok(Self::output(""))
            }
            ["keys", "add", name, "--recover", ..] => {
                if !self.keyring.borrow_mut().insert(name.to_string()) {
                    return Err(Self::failed(program, args, "duplicated key name"));
                }
                Ok(Self::output(""))
            }
            ["keys", "show", "-a", "--bech", "val", ..] => Ok(Self::output(OPERATOR)),
            ["keys", "add", name, ..] => {
                self.keyring.borrow_mut().insert(name.to_string());
                Ok(Self::output(&self.admin_output))
            }
            _ => Ok(Self::output("")),
        }
    }

    fn spawn(&self, program: &str, args: &[&str]) -> Result<SupervisedProcess, Error> {
        self.calls.borrow_mut().push(Invocation {
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
            stdin: None,
            supervised: true,
        });

        let (exit_sender, completion) = ProcessCompletion::channel(program);
        exit_sender
            .send(Ok(ProcessExit::new(self.daemon_exit)))
            .map_err(|_| handle_generic_error(eyre::eyre!("completion receiver dropped")))?;

        let (kill_sender, _) = oneshot::channel();

        Ok(SupervisedProcess {
            handle: ProcessHandle::new(program.to_string(), None, kill_sender),
            completion,
        })
    }
}

struct Fixture {
    _dir: tempfile::TempDir,
    args: BootstrapArguments,
    binaries: BinaryPaths,
}

fn fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let config_file: PathBuf = dir.path().join("network.yml");

    let args = BootstrapArguments {
        chain_id: "localnet".to_string(),
        n_validators: 1,
        network_dir: "/tmp/net".to_string(),
        network_config_file: config_file.display().to_string(),
        whitelist_file: "/tmp/whitelisted-denoms.json".to_string(),
        ..BootstrapArguments::default()
    };

    Fixture {
        _dir: dir,
        args,
        binaries: BinaryPaths::from_install_dir("/go/bin"),
    }
}

const ONE_VALIDATOR: &str = "- moniker: val0\n  mnemonic: m0\n  password: p0\n";

fn exec(args: &[&str], stdin: Option<&str>) -> Invocation {
    Invocation {
        program: "/go/bin/sifnoded".to_string(),
        args: args.iter().map(|arg| arg.to_string()).collect(),
        stdin: stdin.map(str::to_string),
        supervised: false,
    }
}

#[tokio::test]
async fn bootstraps_network_in_order() -> Result<(), Error> {
    let fixture = fixture();
    let runner = MockRunner::new(ONE_VALIDATOR);

    let network = bootstrap_network(&runner, &fixture.binaries, &fixture.args)?;

    let home = "/tmp/net/validators/localnet/val0/.sifnoded";
    let config_file = fixture.args.network_config_file.as_str();

    let expected = vec![
        Invocation {
            program: "/go/bin/sifgen".to_string(),
            args: [
                "network",
                "create",
                "--keyring-backend",
                "test",
                "localnet",
                "1",
                "/tmp/net",
                "10.10.1.1",
                config_file,
            ]
            .iter()
            .map(|arg| arg.to_string())
            .collect(),
            stdin: None,
            supervised: false,
        },
        exec(
            &["keys", "add", "val0", "--recover", "--keyring-backend", "test"],
            Some("m0\n"),
        ),
        exec(
            &["keys", "show", "-a", "--bech", "val", "val0", "--keyring-backend", "test"],
            None,
        ),
        exec(&["add-genesis-validators", OPERATOR, "--home", home], None),
        exec(
            &["keys", "add", "sifnodeadmin", "--output", "json", "--keyring-backend", "test"],
            Some("yes\nyes"),
        ),
        exec(
            &[
                "add-genesis-account",
                ADMIN,
                "100000000000000000000rowan",
                "--home",
                home,
            ],
            None,
        ),
        exec(&["set-genesis-oracle-admin", ADMIN, "--home", home], None),
        exec(&["set-genesis-whitelister-admin", ADMIN, "--home", home], None),
        exec(
            &[
                "set-gen-denom-whitelist",
                "/tmp/whitelisted-denoms.json",
                "--home",
                home,
            ],
            None,
        ),
        Invocation {
            supervised: true,
            ..exec(
                &[
                    "start",
                    "--minimum-gas-prices",
                    "0.5rowan",
                    "--rpc.laddr",
                    "tcp://0.0.0.0:26657",
                    "--home",
                    home,
                ],
                None,
            )
        },
    ];

    assert_eq!(runner.calls(), expected);

    assert_eq!(network.bootstrapped.operator.0, OPERATOR);
    assert_eq!(network.bootstrapped.admin.0, ADMIN);
    assert_eq!(network.validator.home_path(), home);

    let exit = network.completion.await?;
    assert!(exit.success());

    Ok(())
}

#[tokio::test]
async fn only_the_first_record_is_bootstrapped() -> Result<(), Error> {
    let fixture = fixture();
    let runner = MockRunner::new(
        "- moniker: val0\n  mnemonic: m0\n  password: p0\n\
         - moniker: val1\n  mnemonic: m1\n  password: p1\n\
         - moniker: val2\n  mnemonic: m2\n  password: p2\n",
    );

    let network = bootstrap_network(&runner, &fixture.binaries, &fixture.args)?;

    assert_eq!(network.validator.moniker, "val0");

    let mentions_other_validator = runner.calls().iter().any(|call| {
        call.args
            .iter()
            .any(|arg| arg.contains("val1") || arg.contains("val2"))
    });
    assert!(!mentions_other_validator);

    Ok(())
}

#[test]
fn generator_failure_stops_the_run() {
    let fixture = fixture();
    let runner = MockRunner {
        fail_generator: true,
        ..MockRunner::new(ONE_VALIDATOR)
    };

    let err = bootstrap_network(&runner, &fixture.binaries, &fixture.args).unwrap_err();

    match err.detail() {
        ErrorDetail::ConfigGenerationFailed(e) => {
            assert_eq!(e.program, "/go/bin/sifgen");
            assert_eq!(e.stderr, "invalid seed ip");
        }
        _ => panic!("expected ConfigGenerationFailed error"),
    }

    assert_eq!(runner.calls().len(), 1);
}

#[test]
fn empty_topology_fails_before_keyring_commands() {
    let fixture = fixture();
    let runner = MockRunner::new("[]");

    let err = bootstrap_network(&runner, &fixture.binaries, &fixture.args).unwrap_err();

    assert!(matches!(err.detail(), ErrorDetail::ConfigParseFailed(_)));
    assert_eq!(runner.calls().len(), 1);
    assert_eq!(runner.calls()[0].program, "/go/bin/sifgen");
}

#[test]
fn missing_topology_file_is_a_config_error() {
    let fixture = fixture();
    let runner = MockRunner {
        topology: None,
        ..MockRunner::new(ONE_VALIDATOR)
    };

    let err = bootstrap_network(&runner, &fixture.binaries, &fixture.args).unwrap_err();

    assert!(matches!(err.detail(), ErrorDetail::ConfigParseFailed(_)));
    assert_eq!(runner.calls().len(), 1);
}

#[test]
fn rerun_against_populated_keyring_fails_at_import() {
    let fixture = fixture();
    let runner = MockRunner::new(ONE_VALIDATOR);

    bootstrap_network(&runner, &fixture.binaries, &fixture.args).unwrap();
    runner.clear_calls();

    let err = bootstrap_network(&runner, &fixture.binaries, &fixture.args).unwrap_err();

    match err.detail() {
        ErrorDetail::ExternalCommandFailed(e) => {
            assert_eq!(e.args[..4], ["keys", "add", "val0", "--recover"]);
        }
        _ => panic!("expected ExternalCommandFailed error"),
    }

    let calls = runner.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].args[..2], ["keys", "add"]);
}

#[test]
fn admin_output_without_address_stops_before_genesis_roles() {
    let fixture = fixture();
    let runner = MockRunner {
        admin_output: r#"{"name":"sifnodeadmin"}"#.to_string(),
        ..MockRunner::new(ONE_VALIDATOR)
    };

    let err = bootstrap_network(&runner, &fixture.binaries, &fixture.args).unwrap_err();

    match err.detail() {
        ErrorDetail::OutputParseFailed(e) => assert_eq!(e.field, "address"),
        _ => panic!("expected OutputParseFailed error"),
    }

    let last = runner.calls().pop().unwrap();
    assert_eq!(last.args[..3], ["keys", "add", "sifnodeadmin"]);
}

#[tokio::test]
async fn completion_carries_daemon_failure_code() -> Result<(), Error> {
    let fixture = fixture();
    let runner = MockRunner {
        daemon_exit: Some(2),
        ..MockRunner::new(ONE_VALIDATOR)
    };

    let network = bootstrap_network(&runner, &fixture.binaries, &fixture.args)?;
    let exit = network.completion.await?;

    assert_eq!(exit.code, Some(2));

    Ok(())
}

#[test]
fn keyring_home_is_passed_to_keyring_commands_only() {
    let mut fixture = fixture();
    fixture.args.node.keyring_home = Some("/tmp/keys".to_string());
    let runner = MockRunner::new(ONE_VALIDATOR);

    bootstrap_network(&runner, &fixture.binaries, &fixture.args).unwrap();

    let calls = runner.calls();
    assert_eq!(
        calls[1].args,
        ["keys", "add", "val0", "--recover", "--keyring-backend", "test", "--home", "/tmp/keys"]
    );
    assert_eq!(calls[3].args[..3], ["add-genesis-validators", OPERATOR, "--home"]);
    assert_ne!(calls[3].args[3], "/tmp/keys");
}

#[test]
fn exports_network_environment() {
    let fixture = fixture();
    let runner = MockRunner::new(ONE_VALIDATOR);

    let network = bootstrap_network(&runner, &fixture.binaries, &fixture.args).unwrap();
    let env = localnet_bootstrap::types::env::format_env(&network);

    assert!(env.contains("ADMIN_ADDRESS=sif1admin"));
    assert!(env.contains("NODE_HOME=/tmp/net/validators/localnet/val0/.sifnoded"));
    assert!(env.contains("VALIDATOR_OPERATOR=sifvaloper1val0"));
    assert!(env.contains("CHAIN_ID=localnet"));
}
