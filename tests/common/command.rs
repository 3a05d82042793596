use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const SOURCE_DIR: &str = "src";
pub const DESTINATION_DIR: &str = "dst";
pub const STUB_BIN_DIR: &str = "bin";
pub const HELM_LOG_FILE: &str = "helm_invocations.log";

/// Stand-in for `helm repo index`: records its arguments, then materializes
/// an index file in the target directory the way the real collaborator does.
/// Fails on demand when HELM_STUB_FAIL is set.
const HELM_STUB: &str = r#"#!/bin/sh
printf '%s\n' "$*" >> "${HELM_STUB_LOG:-/dev/null}"
if [ -n "$HELM_STUB_FAIL" ]; then
    echo "stub helm: forced failure" >&2
    exit 1
fi
cat > "$3/index.yaml" <<'YAML'
apiVersion: v1
entries: {}
YAML
"#;

/// A publishing environment: a git-backed source tree with an `app/`
/// directory and one initial commit, an empty destination tree, and a stub
/// `helm` on the PATH.
#[fixture]
pub fn publish_root() -> TempDir {
    let root = TempDir::new().expect("Failed to create temp dir");

    install_helm_stub(&root.path().join(STUB_BIN_DIR));
    std::fs::create_dir_all(root.path().join(DESTINATION_DIR))
        .expect("Failed to create destination dir");

    let source = root.path().join(SOURCE_DIR);
    std::fs::create_dir_all(source.join("app")).expect("Failed to create source dir");
    run_git_command(&source, &["init"]).assert().success();
    write_file(FileSpec::new(
        source.join("README.md"),
        "chart sources".to_string(),
    ));
    git_commit_all(&source, "Initial commit");

    root
}

pub fn run_publish_command(root: &Path) -> Command {
    let mut cmd =
        Command::cargo_bin("chart-publish").expect("Failed to find chart-publish binary");
    cmd.current_dir(root);
    cmd.env_remove("GITHUB_SHA");
    cmd.env_remove("GITHUB_REPOSITORY_OWNER");
    cmd.env_remove("GITHUB_ACTIONS");
    cmd.env("HELM_STUB_LOG", root.join(HELM_LOG_FILE));
    cmd.env("PATH", prepend_stub_bin(root));
    cmd.args([
        "--source-dir",
        SOURCE_DIR,
        "--destination-dir",
        DESTINATION_DIR,
        "--destination-branch",
        "main",
        "--repo-owner",
        "acme",
    ]);
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    cmd.envs(vec![
        ("GIT_AUTHOR_NAME", "fake_user"),
        ("GIT_AUTHOR_EMAIL", "fake_email@email.com"),
        ("GIT_COMMITTER_NAME", "fake_user"),
        ("GIT_COMMITTER_EMAIL", "fake_email@email.com"),
    ]);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn git_commit_all(dir: &Path, message: &str) {
    run_git_command(dir, &["add", "--all"]).assert().success();
    run_git_command(dir, &["commit", "-m", message])
        .assert()
        .success();
}

/// Get the current HEAD commit SHA
pub fn head_commit_sha(dir: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let output = run_git_command(dir, &["rev-parse", "HEAD"]).output()?;
    Ok(String::from_utf8(output.stdout)?.trim().to_string())
}

/// One log line per stub helm invocation: the full argument list.
pub fn helm_invocations(root: &Path) -> Vec<String> {
    match std::fs::read_to_string(root.join(HELM_LOG_FILE)) {
        Ok(log) => log.lines().map(str::to_string).collect(),
        Err(_) => Vec::new(),
    }
}

/// Paths as the publisher sees them: it canonicalizes its directory
/// parameters before building collaborator arguments.
pub fn canonical_path(root: &Path, relative: &str) -> PathBuf {
    root.join(relative)
        .canonicalize()
        .unwrap_or_else(|e| panic!("Failed to canonicalize {:?}: {}", relative, e))
}

fn install_helm_stub(bin_dir: &Path) {
    use std::os::unix::fs::PermissionsExt;

    std::fs::create_dir_all(bin_dir).expect("Failed to create stub bin dir");
    let stub = bin_dir.join("helm");
    std::fs::write(&stub, HELM_STUB).expect("Failed to write helm stub");
    std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to mark helm stub executable");
}

fn prepend_stub_bin(root: &Path) -> OsString {
    let mut paths = vec![root.join(STUB_BIN_DIR)];
    paths.extend(std::env::split_paths(
        &std::env::var_os("PATH").unwrap_or_default(),
    ));
    std::env::join_paths(paths).expect("Failed to build PATH")
}
