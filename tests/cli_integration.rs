use std::process::{Command, Output};

use serde_json::Value;
use tempfile::tempdir;

const VARIABLES: &str = r#"[
    {"variable_type":"env_var","key":"DATABASE_URL","value":"postgres://db/app","protected":true,
     "masked":false,"raw":false,"environment_scope":"production"},
    {"variable_type":"env_var","key":"FEATURE_FLAGS","value":"a,b","protected":false,
     "masked":false,"raw":true,"environment_scope":"*"},
    {"variable_type":"file","key":"TLS_KEY","value":"key-material","protected":false,
     "masked":true,"raw":false,"environment_scope":"*"}
]"#;

fn run_cli(args: &[&str]) -> Output {
    Command::new(assert_cmd::cargo::cargo_bin!("gitlab-extract-variable"))
        .args(args)
        .env_remove("GITLAB_TOKEN")
        .env_remove("GITLAB_PROJECT")
        .env_remove("GITLAB_API_URL")
        .env_remove("RUST_LOG")
        .output()
        .expect("run gitlab-extract-variable")
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("stderr utf8")
}

#[test]
fn cli_missing_token_prints_examples_without_request() {
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", mockito::Matcher::Any).expect(0).create();
    let tmp = tempdir().expect("tempdir");
    let out_path = tmp.path().join("out.csv");

    let output = run_cli(&[
        "--project",
        "acme/api",
        "--api-url",
        &server.url(),
        "--output",
        out_path.to_str().expect("path utf8"),
    ]);

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("Private token is not specified!"), "{err}");
    assert!(err.contains("Examples:"), "{err}");
    assert!(!out_path.exists());
    mock.assert();
}

#[test]
fn cli_invalid_format_writes_no_file() {
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", mockito::Matcher::Any).expect(0).create();
    let tmp = tempdir().expect("tempdir");
    let out_path = tmp.path().join("out.txt");

    let output = run_cli(&[
        "--token",
        "glpat-test",
        "--project",
        "acme/api",
        "--format",
        "xml",
        "--api-url",
        &server.url(),
        "--output",
        out_path.to_str().expect("path utf8"),
    ]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Format specified badly"));
    assert!(!out_path.exists());
    mock.assert();
}

#[test]
fn cli_exports_full_csv() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/projects/acme%2Fapi/variables")
        .match_header("PRIVATE-TOKEN", "glpat-test")
        .with_status(200)
        .with_body(VARIABLES)
        .create();
    let tmp = tempdir().expect("tempdir");
    let out_path = tmp.path().join("vars.csv");

    let output = run_cli(&[
        "--token",
        "glpat-test",
        "--project",
        "acme/api",
        "--api-url",
        &server.url(),
        "--output",
        out_path.to_str().expect("path utf8"),
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    mock.assert();

    let content = std::fs::read_to_string(&out_path).expect("read output");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "variable_type,key,value,protected,masked,raw,environment_scope",
            "env_var,DATABASE_URL,postgres://db/app,true,false,false,production",
            "env_var,FEATURE_FLAGS,\"a,b\",false,false,true,*",
            "file,TLS_KEY,key-material,false,true,false,*",
        ]
    );
}

#[test]
fn cli_exports_compact_env() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/projects/acme%2Fapi/variables")
        .with_status(200)
        .with_body(VARIABLES)
        .create();
    let tmp = tempdir().expect("tempdir");
    let out_path = tmp.path().join(".env");

    let output = run_cli(&[
        "--token",
        "glpat-test",
        "--project",
        "acme/api",
        "--format",
        "env",
        "--compact",
        "--api-url",
        &server.url(),
        "--output",
        out_path.to_str().expect("path utf8"),
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let content = std::fs::read_to_string(&out_path).expect("read output");
    assert_eq!(
        content,
        "key=value\nDATABASE_URL=postgres://db/app\nFEATURE_FLAGS=a,b\nTLS_KEY=key-material\n"
    );
}

#[test]
fn cli_empty_project_writes_header_only() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/projects/acme%2Fempty/variables")
        .with_status(200)
        .with_body("[]")
        .create();
    let tmp = tempdir().expect("tempdir");
    let out_path = tmp.path().join("vars.csv");

    let output = run_cli(&[
        "--token",
        "glpat-test",
        "--project",
        "acme/empty",
        "--compact",
        "--api-url",
        &server.url(),
        "--output",
        out_path.to_str().expect("path utf8"),
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let content = std::fs::read_to_string(&out_path).expect("read output");
    assert_eq!(content, "key,value\n");
}

#[test]
fn cli_non_200_creates_no_file() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/projects/acme%2Fapi/variables")
        .with_status(401)
        .with_body(r#"{"message":"401 Unauthorized"}"#)
        .create();
    let tmp = tempdir().expect("tempdir");
    let out_path = tmp.path().join("vars.csv");

    let output = run_cli(&[
        "--token",
        "wrong",
        "--project",
        "acme/api",
        "--api-url",
        &server.url(),
        "--output",
        out_path.to_str().expect("path utf8"),
        "--json",
    ]);

    assert_eq!(output.status.code(), Some(3));
    assert!(!out_path.exists());

    let envelope: Value = serde_json::from_str(&stderr(&output)).expect("json envelope");
    assert_eq!(envelope["error"]["code"], "unauthorized");
    assert_eq!(envelope["error"]["status"], 401);
}

#[test]
fn cli_undecodable_body_creates_no_file() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/projects/acme%2Fapi/variables")
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create();
    let tmp = tempdir().expect("tempdir");
    let out_path = tmp.path().join("vars.csv");

    let output = run_cli(&[
        "--token",
        "glpat-test",
        "--project",
        "acme/api",
        "--api-url",
        &server.url(),
        "--output",
        out_path.to_str().expect("path utf8"),
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!out_path.exists());
    assert!(stderr(&output).contains("Failed to decode GitLab response"));
}
