//! End-to-end workflow tests for the gen commands
//!
//! These tests drive the command line as a user would type it, through
//! argument parsing, context resolution and dispatch.

use clap::Parser;
use std::path::Path;
use tempfile::TempDir;

use roachgen_cli::{Cli, CliContext, Commands, DispatchState, Dispatcher};
use roachgen_core::{GenError, Registry, SettingsOverrides};

/// Parse and dispatch `args`, returning the dispatcher's stdout
fn run(args: &[&str]) -> Result<String, GenError> {
    run_with(args, |d| d)
}

fn run_with(
    args: &[&str],
    configure: impl FnOnce(Dispatcher<Vec<u8>>) -> Dispatcher<Vec<u8>>,
) -> Result<String, GenError> {
    let cli = Cli::try_parse_from(args).expect("arguments should parse");
    let context = CliContext::from_cli(&cli)?;
    let dispatcher = configure(Dispatcher::new(context, Vec::new()));
    assert_eq!(dispatcher.state(), DispatchState::Idle);

    let done = match cli.command {
        Commands::Gen(cmd) => dispatcher.dispatch(cmd),
    };
    let state = done.state();
    let (result, out) = done.into_parts();
    match &result {
        Ok(()) => assert_eq!(state, DispatchState::Succeeded),
        Err(_) => assert_eq!(state, DispatchState::Failed),
    }

    result.map(|()| String::from_utf8(out).unwrap())
}

fn path_arg(path: &Path) -> String {
    path.to_str().unwrap().to_string()
}

// ==========================================
// encryption-key
// ==========================================

#[test]
fn test_encryption_key_256() {
    let dir = TempDir::new().unwrap();
    let key = dir.path().join("k.key");
    let key_arg = path_arg(&key);

    let out = run(&["cockroach", "gen", "encryption-key", "--size=256", &key_arg]).unwrap();

    assert_eq!(out, format!("successfully created AES-256 key: {}\n", key_arg));
    assert_eq!(std::fs::metadata(&key).unwrap().len(), 64);

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&key).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

#[test]
fn test_encryption_key_invalid_size_creates_nothing() {
    let dir = TempDir::new().unwrap();
    let key = dir.path().join("k.key");
    let key_arg = path_arg(&key);

    let err = run(&["cockroach", "gen", "encryption-key", "--size=100", &key_arg]).unwrap_err();

    assert!(matches!(err, GenError::InvalidParameter(_)));
    assert_eq!(
        err.to_string(),
        "store key size should be 128, 192, or 256 bits, got 100"
    );
    assert!(!key.exists());
}

#[test]
fn test_encryption_key_negative_size_creates_nothing() {
    let dir = TempDir::new().unwrap();
    let key = dir.path().join("k.key");
    let key_arg = path_arg(&key);

    let err = run(&["cockroach", "gen", "encryption-key", "--size=-5", &key_arg]).unwrap_err();

    assert!(err.is_invalid_parameter());
    assert_eq!(
        err.to_string(),
        "store key size should be 128, 192, or 256 bits, got -5"
    );
    assert!(!key.exists());
}

#[test]
fn test_encryption_key_default_size_from_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("gen.json");
    std::fs::write(&config, r#"{"aes_key_size": 192}"#).unwrap();
    let key = dir.path().join("k.key");

    let out = run(&[
        "cockroach",
        "gen",
        "encryption-key",
        "--config",
        &path_arg(&config),
        &path_arg(&key),
    ])
    .unwrap();

    assert!(out.starts_with("successfully created AES-192 key: "));
    assert_eq!(std::fs::metadata(&key).unwrap().len(), 56);
}

#[test]
fn test_encryption_key_overwrites_with_fresh_bytes() {
    let dir = TempDir::new().unwrap();
    let key = dir.path().join("k.key");
    let key_arg = path_arg(&key);

    run(&["cockroach", "gen", "encryption-key", "-s", "128", &key_arg]).unwrap();
    let first = std::fs::read(&key).unwrap();
    run(&["cockroach", "gen", "encryption-key", "-s", "128", &key_arg]).unwrap();
    let second = std::fs::read(&key).unwrap();

    assert_eq!(first.len(), 48);
    assert_eq!(second.len(), 48);
    assert_ne!(first, second);
}

// ==========================================
// autocomplete
// ==========================================

#[test]
fn test_autocomplete_zsh_with_out() {
    let dir = TempDir::new().unwrap();
    let out_file = dir.path().join("_c");
    let out_arg = path_arg(&out_file);

    let out = run(&[
        "cockroach",
        "gen",
        "autocomplete",
        "zsh",
        &format!("--out={}", out_arg),
    ])
    .unwrap();

    assert_eq!(out, format!("Generated zsh completion file: {}\n", out_arg));
    let script = std::fs::read_to_string(&out_file).unwrap();
    assert!(script.starts_with("#compdef cockroach"));
}

#[test]
fn test_autocomplete_defaults_to_bash() {
    let dir = TempDir::new().unwrap();
    let out_file = dir.path().join("cockroach.bash");
    let out_arg = path_arg(&out_file);

    let out = run(&["cockroach", "gen", "autocomplete", "--out", &out_arg]).unwrap();

    assert_eq!(out, format!("Generated bash completion file: {}\n", out_arg));
    assert!(std::fs::read_to_string(&out_file).unwrap().contains("settings-list"));
}

#[test]
fn test_autocomplete_unknown_shell() {
    let dir = TempDir::new().unwrap();
    let out_file = dir.path().join("completion");

    let err = run(&[
        "cockroach",
        "gen",
        "autocomplete",
        "fish",
        "--out",
        &path_arg(&out_file),
    ])
    .unwrap_err();

    assert!(err.is_invalid_parameter());
    assert!(!out_file.exists());
}

// ==========================================
// man
// ==========================================

#[test]
fn test_man_pages() {
    let dir = TempDir::new().unwrap();
    let man_dir = dir.path().join("man").join("man1");

    let out = run(&["cockroach", "gen", "man", "--path", &path_arg(&man_dir)]).unwrap();

    assert!(out.starts_with("Generated CockroachDB man pages in "));
    assert!(man_dir.join("cockroach-gen-encryption-key.1").is_file());
    assert!(man_dir.join("cockroach-gen-settings-list.1").is_file());
}

// ==========================================
// settings-list
// ==========================================

#[test]
fn test_settings_list_override() {
    let mut registry = Registry::new();
    registry.register_int("a", "the a setting", 1);
    let mut overrides = SettingsOverrides::new();
    overrides.insert("a".to_string(), "9".to_string());

    let out = run_with(&["cockroach", "gen", "settings-list", "--format=csv"], |d| {
        d.with_settings(registry, overrides)
    })
    .unwrap();

    assert_eq!(out, "Setting,Type,Default,Description\na,integer,9,the a setting\n");
}

#[test]
fn test_settings_list_builtin_registry_is_stable() {
    let args = ["cockroach", "gen", "settings-list", "ignored-dir", "--format=table"];

    let first = run(&args).unwrap();
    let second = run(&args).unwrap();

    assert_eq!(first, second);
    assert!(first.contains("| Setting "));
    assert!(first.contains("diagnostics.reporting.enabled"));

    // Registry default is false, the bootstrap override reports true
    let line = first
        .lines()
        .find(|l| l.contains("diagnostics.reporting.enabled"))
        .unwrap();
    assert!(line.contains("| true "));

    // Rows follow the registry's sorted order
    let names: Vec<&str> = first
        .lines()
        .skip(3)
        .filter(|l| l.starts_with('|'))
        .map(|l| l.split('|').nth(1).unwrap().trim())
        .collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    assert_eq!(names.len(), Registry::cluster_defaults().len());
}
