//! Runs the built binary end to end.

use std::process::{Command, Output};

use test_fixtures::{fixture_path, UNEQUAL_PATTERNS_CATALOG};

fn concierge_chat(args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_concierge-chat"));
    for key in [
        "CONCIERGE_CATALOG",
        "CONCIERGE_FALLBACK",
        "CONCIERGE_EDIT_THRESHOLD",
        "CONCIERGE_COSINE_THRESHOLD",
        "CONCIERGE_LOG_LEVEL",
        "CONCIERGE_LOG",
    ] {
        cmd.env_remove(key);
    }
    cmd.args(args).envs(env.iter().copied());
    cmd.output().unwrap()
}

#[test]
fn suggest_prints_patterns_and_exits_cleanly() {
    let catalog = fixture_path(UNEQUAL_PATTERNS_CATALOG);
    let out = concierge_chat(&["--catalog", catalog.to_str().unwrap(), "--suggest"], &[]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.lines().count(), 8);
    assert_eq!(stdout.lines().next(), Some("spa massage appointment"));
}

#[test]
fn malformed_catalog_exits_non_zero_with_message() {
    let catalog = fixture_path("catalogs/malformed_missing_responses.json");
    let out = concierge_chat(&["--catalog", catalog.to_str().unwrap(), "--suggest"], &[]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("concierge-chat failed to start"), "{stderr}");
    assert!(stderr.contains("malformed catalog record 1"), "{stderr}");
}

#[test]
fn invalid_config_exits_non_zero_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("concierge.toml");
    std::fs::write(&config, "[matcher]\nfallback = \"bm25\"\n").unwrap();

    let out = concierge_chat(&["--config", config.to_str().unwrap(), "--suggest"], &[]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("configuration error"), "{stderr}");
}

#[test]
fn env_override_warnings_reach_stderr() {
    let catalog = fixture_path(UNEQUAL_PATTERNS_CATALOG);
    let out = concierge_chat(
        &["--catalog", catalog.to_str().unwrap(), "--suggest"],
        &[("CONCIERGE_FALLBACK", "bm25"), ("CONCIERGE_LOG", "warn")],
    );
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("ignoring CONCIERGE_FALLBACK"), "{stderr}");
}
