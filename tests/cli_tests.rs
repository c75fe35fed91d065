//! Runs the built binaries and checks their exit codes and output.

use std::process::{Command, Output};

use tempfile::TempDir;

const CONFIG_VARS: [&str; 5] = [
    "MIDNIGHT_NETWORK",
    "MIDNIGHT_NODE_URL",
    "MIDNIGHT_INDEXER_URL",
    "PROOF_SERVER_URL",
    "PORT",
];

/// A command for one of the package binaries, run from an empty directory
/// with the configuration variables cleared and colors disabled.
fn command(bin: &str, workdir: &TempDir) -> Command {
    let mut cmd = Command::new(bin);
    cmd.current_dir(workdir.path())
        .env("NO_COLOR", "1")
        .env("CLICOLOR", "0")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("RUST_LOG");
    for var in CONFIG_VARS {
        cmd.env_remove(var);
    }
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_deploy_succeeds_without_arguments() {
    let workdir = TempDir::new().unwrap();
    let output = command(env!("CARGO_BIN_EXE_deploy"), &workdir)
        .output()
        .unwrap();

    assert!(output.status.success(), "deploy failed: {:?}", output);
    let out = stdout(&output);
    assert!(out.contains("Target Network: testnet"));
    assert!(out.contains("AgilityPayment deployed successfully"));
    assert!(out.contains("AgilityEscrow deployed successfully"));
    assert!(out.contains("All contracts deployed successfully!"));
    assert_eq!(out.matches("Contract Address: 0x").count(), 2);
}

#[test]
fn test_deploy_prints_requested_network() {
    let workdir = TempDir::new().unwrap();
    for args in [&["--network=mainnet"][..], &["--network", "mainnet"][..]] {
        let output = command(env!("CARGO_BIN_EXE_deploy"), &workdir)
            .args(args)
            .output()
            .unwrap();

        assert!(output.status.success());
        assert!(stdout(&output).contains("Target Network: mainnet"));
    }
}

#[test]
fn test_deploy_addresses_are_forty_hex_digits() {
    let workdir = TempDir::new().unwrap();
    let output = command(env!("CARGO_BIN_EXE_deploy"), &workdir)
        .output()
        .unwrap();

    let out = stdout(&output);
    for line in out.lines().filter(|l| l.contains("Contract Address:")) {
        let address = line.rsplit(' ').next().unwrap();
        assert_eq!(address.len(), 42, "unexpected address {address:?}");
        assert!(address[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }
}

#[test]
fn test_agility_exits_immediately_with_defaults() {
    let workdir = TempDir::new().unwrap();
    let output = command(env!("CARGO_BIN_EXE_agility"), &workdir)
        .output()
        .unwrap();

    assert!(output.status.success(), "agility failed: {:?}", output);
    let out = stdout(&output);
    assert!(out.contains("Network: testnet"));
    assert!(out.contains("Proof Server: http://localhost:6300"));
    assert!(out.contains("Port: 3000"));
    assert!(out.contains("Midnight Network connected successfully"));
    assert!(out.contains("XRPL connected successfully"));
    assert!(out.contains("All systems operational!"));
    assert!(out.contains("Application is running"));
}

#[test]
fn test_agility_reflects_environment_overrides() {
    let workdir = TempDir::new().unwrap();
    let output = command(env!("CARGO_BIN_EXE_agility"), &workdir)
        .env("PORT", "8080")
        .env("MIDNIGHT_NETWORK", "devnet")
        .env("MIDNIGHT_NODE_URL", "http://127.0.0.1:9944")
        .output()
        .unwrap();

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Port: 8080"));
    assert!(out.contains("Network: devnet"));
    assert!(out.contains("Node URL: http://127.0.0.1:9944"));
}

#[test]
fn test_agility_reads_env_file() {
    let workdir = TempDir::new().unwrap();
    std::fs::write(workdir.path().join(".env"), "PORT=4242\n").unwrap();

    let output = command(env!("CARGO_BIN_EXE_agility"), &workdir)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(stdout(&output).contains("Port: 4242"));
}

#[test]
fn test_agility_prints_port_verbatim() {
    let workdir = TempDir::new().unwrap();
    for raw in ["08080", "not-a-port"] {
        let output = command(env!("CARGO_BIN_EXE_agility"), &workdir)
            .env("PORT", raw)
            .output()
            .unwrap();

        assert!(output.status.success(), "agility failed: {:?}", output);
        assert!(stdout(&output).contains(&format!("Port: {}\n", raw)));
    }
}

#[test]
fn test_malformed_env_file_does_not_stop_startup() {
    let workdir = TempDir::new().unwrap();
    std::fs::write(workdir.path().join(".env"), "PORT=4000\nthis is not valid\n").unwrap();

    let output = command(env!("CARGO_BIN_EXE_agility"), &workdir)
        .output()
        .unwrap();
    assert!(output.status.success(), "agility failed: {:?}", output);
    assert!(stdout(&output).contains("Port: 4000"));
    assert!(!String::from_utf8_lossy(&output.stderr).contains("Fatal error"));

    let output = command(env!("CARGO_BIN_EXE_deploy"), &workdir)
        .output()
        .unwrap();
    assert!(output.status.success(), "deploy failed: {:?}", output);
    assert!(!String::from_utf8_lossy(&output.stderr).contains("Deployment error"));
}

#[test]
#[cfg(unix)]
fn test_agility_shuts_down_on_interrupt() {
    use std::io::{BufRead, BufReader, Read};
    use std::process::Stdio;

    let workdir = TempDir::new().unwrap();
    let mut child = command(env!("CARGO_BIN_EXE_agility"), &workdir)
        .arg("--wait")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let mut reader = BufReader::new(child.stdout.take().unwrap());
    let mut line = String::new();
    loop {
        line.clear();
        let read = reader.read_line(&mut line).unwrap();
        assert!(read > 0, "agility exited before it was running");
        if line.contains("Application is running") {
            break;
        }
    }

    let killed = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(killed.success());

    let status = child.wait().unwrap();
    let mut rest = String::new();
    reader.read_to_string(&mut rest).unwrap();

    assert_eq!(status.code(), Some(0));
    assert!(rest.contains("Shutting down Agility gracefully..."));
    assert!(rest.contains("Goodbye!"));
}
