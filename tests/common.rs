#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Command bound to a private config dir and to `data_dir`.
pub fn rpay(data_dir: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rpayroll");
    cmd.env("RPAYROLL_CONFIG_DIR", config_dir());
    cmd.args(["--data-dir", data_dir]);
    cmd
}

/// Config dir shared by all tests; it never contains a config file.
pub fn config_dir() -> PathBuf {
    env::temp_dir().join("rpayroll_tests_config")
}

/// Create a unique, empty data dir path inside the system temp dir
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpayroll_data", name));
    fs::remove_dir_all(&path).ok();
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpayroll_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    fs::remove_dir_all(&p).ok();
    p
}

pub fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).expect("read file")
}

/// Init a data dir with two employees and one recorded day (2024-03-04):
/// Ani works 8h + 2h overtime, Budi is absent.
pub fn init_with_data(data_dir: &str) {
    rpay(data_dir).args(["--test", "init"]).assert().success();

    rpay(data_dir)
        .args([
            "employee", "add", "Ani", "--base", "20000", "--overtime", "5000",
        ])
        .assert()
        .success();

    rpay(data_dir)
        .args([
            "employee", "add", "Budi", "--base", "18000", "--overtime", "4000",
        ])
        .assert()
        .success();

    rpay(data_dir)
        .args([
            "attendance",
            "add",
            "2024-03-04",
            "--overtime",
            "Ani=2",
            "--absent",
            "Budi",
            "--force",
        ])
        .assert()
        .success();
}
