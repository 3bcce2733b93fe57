//! Integration tests for the vaultref CLI
//!
//! Runs the built binary against parameter and secret files in a temporary
//! directory with an explicit configuration file.

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PARAMS_YAML: &str = r#"
env.DB_PASSWORD: "%vault:db/password%"
db.url: "jdbc:pg://%vault:db/host%/app"
build.counter: "%build.number%"
plain: "no references"
"#;

const SECRETS_ENV: &str = "db/password=hunter2\ndb/host=10.0.0.5\n";

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(config: &str) -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("vaultref.yaml"), config).unwrap();
        fs::write(dir.path().join("params.yaml"), PARAMS_YAML).unwrap();
        fs::write(dir.path().join("secrets.env"), SECRETS_ENV).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("vaultref").unwrap();
        cmd.current_dir(self.dir.path())
            .env_remove("VAULTREF_NAMESPACE")
            .arg("--config")
            .arg(self.path("vaultref.yaml"));
        cmd
    }
}

fn as_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_version() {
    let fx = Fixture::new("");
    fx.cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(contains("vaultref "));
}

#[test]
fn test_extract_prints_names_in_order() {
    let fx = Fixture::new("");
    fx.cmd()
        .args(["extract", "%vault:b% %env.X% %vault:a% %vault:b%"])
        .assert()
        .success()
        .stdout("b\na\nb\n");
}

#[test]
fn test_extract_json() {
    let fx = Fixture::new("");
    let output = fx
        .cmd()
        .args(["extract", "--json", "user=%vault:db/user%"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["key"], "vault:db/user");
    assert_eq!(json[0]["name"], "db/user");
}

#[test]
fn test_extract_uses_configured_namespace() {
    let fx = Fixture::new("namespace: \"prefix.\"\n");
    fx.cmd()
        .args(["extract", "a=%prefix.x% b=%vault:y%"])
        .assert()
        .success()
        .stdout("x\n");
}

#[test]
fn test_scan_json() {
    let fx = Fixture::new("");
    let output = fx
        .cmd()
        .args(["scan", "--json", as_arg(&fx.path("params.yaml"))])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["secrets"], serde_json::json!(["db/host", "db/password"]));
    assert_eq!(
        json["parameters"],
        serde_json::json!(["db.url", "env.DB_PASSWORD"])
    );
}

#[test]
fn test_scan_missing_file_fails() {
    let fx = Fixture::new("");
    fx.cmd()
        .args(["scan", as_arg(&fx.path("absent.yaml"))])
        .assert()
        .failure()
        .stderr(contains("Failed to load parameters"));
}

#[test]
fn test_resolve_all_properties() {
    let fx = Fixture::new("");
    fx.cmd()
        .args([
            "resolve",
            "--all",
            as_arg(&fx.path("params.yaml")),
            "--secrets",
            as_arg(&fx.path("secrets.env")),
        ])
        .assert()
        .success()
        .stdout(contains("env.DB_PASSWORD=hunter2"))
        .stdout(contains("db.url=jdbc:pg://10.0.0.5/app"))
        .stdout(contains("build.counter").not());
}

#[test]
fn test_resolve_properties_escapes_multiline_secret() {
    let fx = Fixture::new("");
    let params = fx.write(
        "cert.yaml",
        "db.cert: \"%vault:cert%\"\nvaultref.set.config: \"true\"\n",
    );
    let secrets = fx.write("cert.json", r#"{"cert": "LINE1\nevil.key=injected"}"#);

    let output = fx
        .cmd()
        .args(["resolve", as_arg(&params), "--secrets", as_arg(&secrets)])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "db.cert=LINE1\\nevil.key=injected\n");
    assert!(!stdout.lines().any(|line| line.starts_with("evil.key")));
}

#[test]
fn test_resolve_respects_behaviour_flags() {
    let fx = Fixture::new("behaviour:\n  expose_env: true\n");
    fx.cmd()
        .args([
            "resolve",
            as_arg(&fx.path("params.yaml")),
            "--secrets",
            as_arg(&fx.path("secrets.env")),
            "--format",
            "env",
        ])
        .assert()
        .success()
        .stdout("export DB_PASSWORD='hunter2'\n")
        .stderr(contains("db.url"));
}

#[test]
fn test_resolve_parameter_flag_overrides_config() {
    let fx = Fixture::new("behaviour:\n  expose_env: true\n");
    let params = fx.write(
        "params.properties",
        "env.TOKEN=%vault:token%\nvaultref.set.env=false\nvaultref.set.config=TRUE\nurl=%vault:token%@host\n",
    );
    let secrets = fx.write("secrets.json", r#"{"token": "t0k"}"#);

    fx.cmd()
        .args(["resolve", as_arg(&params), "--secrets", as_arg(&secrets)])
        .assert()
        .success()
        .stdout("url=t0k@host\n");
}

#[test]
fn test_resolve_unresolved_warns_but_succeeds() {
    let fx = Fixture::new("");
    let secrets = fx.write("partial.env", "db/password=hunter2\n");

    fx.cmd()
        .args([
            "resolve",
            "--all",
            as_arg(&fx.path("params.yaml")),
            "--secrets",
            as_arg(&secrets),
        ])
        .assert()
        .success()
        .stdout(contains("env.DB_PASSWORD=hunter2"))
        .stderr(contains("%vault:db/host%"));
}

#[test]
fn test_resolve_strict_fails_on_unresolved() {
    let fx = Fixture::new("");
    let secrets = fx.write("partial.env", "db/password=hunter2\n");

    fx.cmd()
        .args([
            "resolve",
            "--strict",
            as_arg(&fx.path("params.yaml")),
            "--secrets",
            as_arg(&secrets),
        ])
        .assert()
        .failure()
        .stderr(contains("could not be resolved"));
}

#[test]
fn test_resolve_fail_on_unresolved_from_config() {
    let fx = Fixture::new("fail_on_unresolved: true\n");
    let secrets = fx.write("empty.env", "");

    fx.cmd()
        .args([
            "resolve",
            as_arg(&fx.path("params.yaml")),
            "--secrets",
            as_arg(&secrets),
        ])
        .assert()
        .failure();
}

#[test]
fn test_resolve_json_never_prints_withheld_values() {
    let fx = Fixture::new("");
    let output = fx
        .cmd()
        .args([
            "resolve",
            "--format",
            "json",
            as_arg(&fx.path("params.yaml")),
            "--secrets",
            as_arg(&fx.path("secrets.env")),
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("hunter2"));
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        json["withheld"],
        serde_json::json!(["db.url", "env.DB_PASSWORD"])
    );
}

#[test]
fn test_quiet_silences_status_lines() {
    let fx = Fixture::new("");
    fx.cmd()
        .args(["-q", "scan", as_arg(&fx.path("params.yaml"))])
        .assert()
        .success()
        .stdout("db/host\ndb/password\n")
        .stderr("");

    fx.cmd()
        .args(["--quiet", "scan", as_arg(&fx.path("secrets.env"))])
        .assert()
        .success()
        .stdout("")
        .stderr("");
}

#[test]
fn test_quiet_keeps_unresolved_warnings() {
    let fx = Fixture::new("");
    let secrets = fx.write("partial.env", "db/password=hunter2\n");

    fx.cmd()
        .args([
            "resolve",
            "-q",
            "--all",
            as_arg(&fx.path("params.yaml")),
            "--secrets",
            as_arg(&secrets),
        ])
        .assert()
        .success()
        .stderr(contains("%vault:db/host%"));
}

#[test]
fn test_invalid_config_fails() {
    let fx = Fixture::new("namespace: \"has space\"\n");
    fx.cmd()
        .args(["extract", "%vault:a%"])
        .assert()
        .failure()
        .stderr(contains("Failed to load configuration"));
}
