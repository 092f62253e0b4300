//! End-to-end CLI integration tests.
//!
//! These tests run the `changed-files` binary the way a workflow does:
//! 1. Writing an event payload and an empty output file
//! 2. Pointing the binary at a mock GitHub API
//! 3. Checking the workflow commands and the output file

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COMPARE_PATH: &str = "/repos/octo-org/octo-repo/compare/b4se...h3ad";

fn changed_files_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_changed-files"))
}

/// A command isolated from the runner the tests themselves may run in.
fn command(dir: &Path) -> Command {
    let mut cmd = Command::new(changed_files_bin());
    cmd.current_dir(dir);
    for var in [
        "GITHUB_ACTIONS",
        "GITHUB_API_URL",
        "GITHUB_EVENT_NAME",
        "GITHUB_EVENT_PATH",
        "GITHUB_OUTPUT",
        "GITHUB_REPOSITORY",
        "INPUT_FORMAT",
        "INPUT_TOKEN",
        "RUNNER_DEBUG",
        "CHANGED_FILES_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// A workspace with a pull request event and an empty output file.
struct Workflow {
    dir: TempDir,
}

impl Workflow {
    fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        fs::write(
            dir.path().join("event.json"),
            json!({
                "action": "synchronize",
                "number": 7,
                "pull_request": {
                    "base": {"sha": "b4se", "ref": "main"},
                    "head": {"sha": "h3ad", "ref": "topic"}
                }
            })
            .to_string(),
        )
        .unwrap();
        fs::write(dir.path().join("github_output"), "").unwrap();
        Self { dir }
    }

    fn run(&self, server: &MockServer, inputs: &[(&str, &str)]) -> Output {
        let mut cmd = command(self.dir.path());
        cmd.arg("run")
            .env("GITHUB_EVENT_NAME", "pull_request")
            .env("GITHUB_EVENT_PATH", self.dir.path().join("event.json"))
            .env("GITHUB_OUTPUT", self.dir.path().join("github_output"))
            .env("GITHUB_REPOSITORY", "octo-org/octo-repo")
            .env("GITHUB_API_URL", server.uri());
        for (name, value) in inputs {
            cmd.env(name, value);
        }
        cmd.output().expect("failed to run changed-files")
    }

    fn outputs(&self) -> Vec<(String, String)> {
        let content = fs::read_to_string(self.dir.path().join("github_output")).unwrap();
        let mut outputs = Vec::new();
        let mut lines = content.lines();

        while let Some(header) = lines.next() {
            let (name, delimiter) = header.split_once("<<").unwrap();
            let value = lines.next().unwrap();
            assert_eq!(lines.next(), Some(delimiter));
            outputs.push((name.to_string(), value.to_string()));
        }

        outputs
    }

    fn output(&self, name: &str) -> Option<String> {
        self.outputs()
            .into_iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

async fn mock_compare(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(COMPARE_PATH))
        .and(header("authorization", "Bearer t0ken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_run_pull_request_json() {
    let server = MockServer::start().await;
    mock_compare(
        &server,
        json!({
            "status": "ahead",
            "files": [
                {"filename": "src/main.rs", "status": "modified"},
                {"filename": "docs/new.md", "status": "added"},
                {"filename": "old.txt", "status": "removed"},
                {"filename": "b.txt", "status": "renamed", "previous_filename": "a.txt"}
            ]
        }),
    )
    .await;

    let workflow = Workflow::new();
    let output = workflow.run(&server, &[("INPUT_TOKEN", "t0ken"), ("INPUT_FORMAT", "json")]);

    assert!(output.status.success(), "stdout: {}", stdout(&output));
    assert!(!stdout(&output).contains("::error::"));

    let expected: Vec<(String, String)> = [
        ("all", r#"["src/main.rs","docs/new.md","old.txt","b.txt"]"#),
        ("added", r#"["docs/new.md"]"#),
        ("modified", r#"["src/main.rs"]"#),
        ("removed", r#"["old.txt"]"#),
        ("renamed", r#"["b.txt"]"#),
        ("added_modified", r#"["src/main.rs","docs/new.md"]"#),
        ("deleted", r#"["old.txt"]"#),
    ]
    .into_iter()
    .map(|(n, v)| (n.to_string(), v.to_string()))
    .collect();
    assert_eq!(workflow.outputs(), expected);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_run_diverged_still_sets_outputs() {
    let server = MockServer::start().await;
    mock_compare(
        &server,
        json!({
            "status": "diverged",
            "files": [{"filename": "README.md", "status": "modified"}]
        }),
    )
    .await;

    let workflow = Workflow::new();
    let output = workflow.run(&server, &[("INPUT_TOKEN", "t0ken"), ("INPUT_FORMAT", "csv")]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains(
        "::error::The head commit for this pull_request event is not ahead of the base commit."
    ));
    assert_eq!(workflow.output("all").as_deref(), Some("README.md"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_run_without_token() {
    let server = MockServer::start().await;

    let workflow = Workflow::new();
    let output = workflow.run(&server, &[("INPUT_FORMAT", "json")]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "::error::Input required and not supplied: token\n"
    );
    assert!(workflow.outputs().is_empty());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_run_api_error_ends_without_outputs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COMPARE_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .mount(&server)
        .await;

    let workflow = Workflow::new();
    let output = workflow.run(&server, &[("INPUT_TOKEN", "t0ken"), ("INPUT_FORMAT", "json")]);

    assert_eq!(output.status.code(), Some(1));
    let errors: Vec<String> = stdout(&output)
        .lines()
        .filter(|l| l.starts_with("::error::"))
        .map(ToString::to_string)
        .collect();
    assert_eq!(errors.len(), 3);
    assert!(errors[0].contains("returned 404, expected 200"));
    assert!(errors[2].contains("does not contain any files"));
    assert!(workflow.outputs().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_run_push_without_after_still_compares() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octo-org/octo-repo/compare/..."))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ahead",
            "files": [{"filename": "a.txt", "status": "added"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("event.json"), r#"{"before": "aaa"}"#).unwrap();
    fs::write(dir.path().join("github_output"), "").unwrap();

    let output = command(dir.path())
        .arg("run")
        .env("GITHUB_EVENT_NAME", "push")
        .env("GITHUB_EVENT_PATH", dir.path().join("event.json"))
        .env("GITHUB_OUTPUT", dir.path().join("github_output"))
        .env("GITHUB_REPOSITORY", "octo-org/octo-repo")
        .env("GITHUB_API_URL", server.uri())
        .env("INPUT_TOKEN", "t0ken")
        .env("INPUT_FORMAT", "csv")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output).lines().collect::<Vec<_>>(),
        ["::error::The base and head commits are missing from the payload for this push event. \
          Please submit an issue on this action's GitHub repo."]
    );

    let outputs = Workflow { dir }.outputs();
    let value = |name: &str| {
        outputs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    };
    assert_eq!(value("all"), Some("a.txt"));
    assert_eq!(value("added"), Some("a.txt"));
    assert_eq!(value("added_modified"), Some("a.txt"));
    assert_eq!(value("removed"), Some(""));

    server.verify().await;
}

#[test]
fn test_classify_csv_from_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("compare.json");
    fs::write(
        &input,
        json!({
            "status": "ahead",
            "files": [
                {"filename": "a.txt", "status": "added"},
                {"filename": "b.txt", "status": "modified"},
                {"filename": "c.txt", "status": "copied"}
            ]
        })
        .to_string(),
    )
    .unwrap();

    let output = command(dir.path())
        .args(["classify", "--format", "csv", "--input"])
        .arg(&input)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "all=a.txt,b.txt,c.txt\nadded=a.txt\nmodified=b.txt\nremoved=\nrenamed=\n\
         added_modified=a.txt,b.txt\ndeleted=\n"
    );
    assert!(
        String::from_utf8_lossy(&output.stderr)
            .contains("error: One of your files includes an unsupported file status 'copied'")
    );
}

#[test]
fn test_classify_clean_run_succeeds() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("compare.json");
    fs::write(
        &input,
        r#"{"status": "ahead", "files": [{"filename": "x y.txt", "status": "added"}]}"#,
    )
    .unwrap();

    let output = command(dir.path())
        .args(["classify", "--format", "json", "--input"])
        .arg(&input)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("all=[\"x y.txt\"]\n"));
}

#[test]
fn test_classify_unreadable_input() {
    let dir = TempDir::new().unwrap();

    let output = command(dir.path())
        .args(["classify", "--input", "missing.json"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read compare response"));
}
