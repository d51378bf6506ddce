use std::io::Write;
use std::process::{Command, Stdio};

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_post-generator"))
}

#[test]
fn test_parse_from_stdin() {
    let mut child = cli()
        .args(["parse", "--json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"Platform Name: Twitter\npost: Hello from the terminal.")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["kind"], "posts");
    assert_eq!(json["content"][0]["platform"], "Twitter");
    assert_eq!(json["content"][0]["post"], "Hello from the terminal.");
}

#[test]
fn test_error_is_reported_once() {
    let output = cli()
        .args(["parse", "--file", "does-not-exist.txt"])
        .env("RUST_LOG", "error")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("os error 2").count(), 1, "stderr: {}", stderr);
}

#[test]
fn test_unknown_provider_names_available_ones() {
    let output = cli()
        .args(["generate", "some text", "--provider", "cohere"])
        .env("RUST_LOG", "error")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("openai, anthropic, google"), "stderr: {}", stderr);
}
