//! End-to-end tests for the `seedling` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MANIFEST: &str = r#"[tool.poetry]
name = "demo"

[tool.poetry.scripts]

[tool.coverage.run]
source = ["demo"]
"#;

/// A project root with a manifest and an empty main package.
fn project(manifest: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("pyproject.toml"), manifest).unwrap();
    fs::create_dir_all(temp.path().join("src/demo")).unwrap();
    temp
}

fn seedling(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("seedling").unwrap();
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_flag() {
    let temp = TempDir::new().unwrap();
    seedling(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("seedling"))
        .stdout(predicate::str::contains("task"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    seedling(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn names_prints_forms() {
    let temp = TempDir::new().unwrap();
    seedling(temp.path())
        .args(["names", "HelloWorld"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello_world"))
        .stdout(predicate::str::contains("HelloWorld"));
}

#[test]
fn names_as_json() {
    let temp = TempDir::new().unwrap();
    seedling(temp.path())
        .args(["names", "hello_world", "--output-format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""pascal": "HelloWorld""#));
}

#[test]
fn task_is_generated_from_nested_directory() {
    let temp = project(MANIFEST);
    let nested = temp.path().join("src/demo");

    seedling(&nested)
        .args(["task", "SyncUsers", "--async"])
        .assert()
        .success()
        .stdout(predicate::str::contains("created"));

    let module = fs::read_to_string(temp.path().join("src/demo/tasks/sync_users.py")).unwrap();
    assert!(module.contains("class SyncUsersTask(AsyncTask):"));
    assert!(temp.path().join("src/demo/tasks/__init__.py").exists());
}

#[test]
fn rerun_skips_and_keeps_edits() {
    let temp = project(MANIFEST);
    let module = temp.path().join("src/demo/tasks/sync.py");

    seedling(temp.path()).args(["task", "Sync"]).assert().success();
    fs::write(&module, "# edited\n").unwrap();

    seedling(temp.path())
        .args(["task", "Sync"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped"));
    assert_eq!(fs::read_to_string(&module).unwrap(), "# edited\n");
}

#[test]
fn override_replaces_generated_file() {
    let temp = project(MANIFEST);
    let module = temp.path().join("src/demo/tasks/sync.py");

    seedling(temp.path()).args(["task", "Sync"]).assert().success();
    fs::write(&module, "# edited\n").unwrap();

    seedling(temp.path())
        .args(["task", "Sync", "--override"])
        .assert()
        .success()
        .stdout(predicate::str::contains("replaced"));
    assert!(fs::read_to_string(&module).unwrap().contains("class SyncTask(Task):"));
}

#[test]
fn cmd_merges_script_and_service() {
    let temp = project(MANIFEST);

    seedling(temp.path())
        .args(["cmd", "syncUsers", "--docker-compose"])
        .assert()
        .success();

    let manifest = fs::read_to_string(temp.path().join("pyproject.toml")).unwrap();
    assert!(manifest.contains("[tool.poetry.scripts]\nsyncUsers = \"demo.cmd.sync_users_main:main\""));

    let compose = fs::read_to_string(temp.path().join("docker-compose.yml")).unwrap();
    assert!(compose.contains("  sync_users:\n"));
    assert!(temp.path().join("sync_users.Dockerfile").exists());

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(temp.path().join("bin/sync_users.sh"))
            .unwrap()
            .permissions()
            .mode();
        assert_ne!(mode & 0o111, 0);
    }

    // second run leaves the shared documents alone
    seedling(temp.path())
        .args(["cmd", "syncUsers", "--docker-compose"])
        .assert()
        .success();
    let again = fs::read_to_string(temp.path().join("pyproject.toml")).unwrap();
    assert_eq!(again, manifest);
}

#[test]
fn app_flag_targets_sibling_package() {
    let temp = project(MANIFEST);
    seedling(temp.path())
        .args(["task", "Invoice", "--app", "BillingApi"])
        .assert()
        .success();
    assert!(temp.path().join("src/billing_api/tasks/invoice.py").exists());
}

#[test]
fn startapp_then_cmd_in_app() {
    let temp = project(MANIFEST);
    seedling(temp.path())
        .args(["startapp", "billing"])
        .assert()
        .success();

    let app = temp.path().join("src/billing");
    assert!(app.join("boot/ioc.py").is_file());
    assert!(app.join("config/__init__.py").is_file());

    seedling(temp.path())
        .args(["cmd", "invoice", "--app", "billing"])
        .assert()
        .success();
    let main = fs::read_to_string(app.join("cmd/invoice_main.py")).unwrap();
    assert!(main.contains("from billing.boot import start"));
}
