use std::process::Command;

fn run_headless(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_intersection_sim"))
        .args(args)
        .env("RUST_LOG", "warn,intersection_sim=info")
        .output()
        .expect("Failed to execute simulation")
}

/// Test that the simulation runs in headless mode and logs its summary
#[test]
fn test_headless_simulation_completes() {
    let output = run_headless(&["--ticks", "1200", "--seed", "11", "--report-every", "0"]);

    assert!(
        output.status.success(),
        "Simulation failed to run in headless mode. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("SIMULATION COMPLETE"),
        "Simulation did not complete properly. stderr: {}",
        stderr
    );
    assert!(stderr.contains("Ticks run: 1200"));

    // Extract the spawned count - handle log format with timestamp
    let spawned_line = stderr
        .lines()
        .find(|line| line.contains("Vehicles spawned:"))
        .expect("Could not find 'Vehicles spawned' line");
    let spawned: u64 = spawned_line
        .split("Vehicles spawned:")
        .nth(1)
        .and_then(|s| s.trim().parse().ok())
        .expect("Could not parse spawned count");
    assert!(spawned > 0, "No vehicles were spawned during simulation");

    // Lights toggle every 240 ticks by default
    assert!(stderr.contains("Light toggles: 5"));
}

/// Test that the console map and summary are printed
#[test]
fn test_headless_prints_reports() {
    let output = run_headless(&["--ticks", "120", "--seed", "5", "--report-every", "60"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("=== Intersection Map ==="));
    assert!(stdout.contains("--- After tick 60"));
    assert!(stdout.contains("--- After tick 120"));
    assert!(stdout.contains("Horizontal lane"));
}

/// Test that an invalid configuration is reported as an error
#[test]
fn test_headless_rejects_invalid_config() {
    let output = run_headless(&["--ticks", "10", "--spawn-probability", "2.0"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("spawn_probability"), "stderr: {}", stderr);
}
