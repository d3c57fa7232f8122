use std::process::Command;

fn run_resolver(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_resolver"))
        .args(args)
        .output()
        .expect("failed to spawn resolver binary")
}

#[test]
fn prints_rack_path_for_known_address() {
    let output = run_resolver(&["compute-13-10.local"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "/rack-1\n");
}

#[test]
fn prints_default_rack_for_unknown_address() {
    let output = run_resolver(&["unknown-host.example"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "/rack-default\n");
}

#[test]
fn resolves_batched_addresses_in_argv_order() {
    let output = run_resolver(&["192.168.32.94", "192.168.32.98", "no-such-node"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "/rack-1\n/rack-2\n/rack-default\n"
    );
}

#[test]
fn missing_address_is_a_usage_error() {
    let output = run_resolver(&[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("usage"));
}

#[test]
fn repeated_invocations_yield_identical_output() {
    let first = run_resolver(&["192.168.32.96"]);
    let second = run_resolver(&["192.168.32.96"]);
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(String::from_utf8_lossy(&first.stdout), "/rack-2\n");
}
