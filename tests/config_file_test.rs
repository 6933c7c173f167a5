//! Tests for loading configuration from disk.

use std::io::Write;
use tateti::{ConfigOverrides, GameConfig};
use tateti_core::Difficulty;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "difficulty = \"easy\"\ncomputer_starts = true\ncpu_delay_ms = 0\nseed = 42"
    )
    .expect("write config");

    let config = GameConfig::load(Some(file.path())).expect("loads");
    assert_eq!(*config.difficulty(), Difficulty::Easy);
    assert!(*config.computer_starts());
    assert_eq!(*config.cpu_delay_ms(), 0);
    assert_eq!(*config.seed(), Some(42));
}

#[test]
fn test_flags_override_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "difficulty = \"easy\"").expect("write config");

    let config = GameConfig::from_file(file.path())
        .expect("loads")
        .apply(&ConfigOverrides {
            difficulty: Some(Difficulty::Pro),
            ..Default::default()
        });
    assert_eq!(*config.difficulty(), Difficulty::Pro);
    assert!(!*config.computer_starts());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = GameConfig::load(Some(dir.path().join("nope.toml").as_path())).expect_err("missing");
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_seeded_rng_is_reproducible() {
    use tateti_core::RandomDraw;

    let config = GameConfig::default().apply(&ConfigOverrides {
        seed: Some(7),
        ..Default::default()
    });
    let (mut a, mut b) = (config.rng(), config.rng());
    assert_eq!(a.draw(), b.draw());
}
