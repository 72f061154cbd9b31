//! Subcommand behavior against schema files on disk.

use avrogen::{run_generate, run_prepare, GenerateArgs, PrepareArgs};
use std::path::PathBuf;
use tempfile::TempDir;

const USER_SCHEMA: &str = r#"
type: record
name: User
namespace: com.example
fields:
  - name: id
    type: string
  - name: age
    type: int*
  - name: tags
    type: array*
    items: string
"#;

fn write_schema(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("schema.yaml");
    std::fs::write(&path, contents).unwrap();
    path
}

fn generate_args(schema: PathBuf) -> GenerateArgs {
    GenerateArgs {
        schema,
        count: 5,
        seed: Some(42),
        max_depth: avrogen_generator::DEFAULT_MAX_DEPTH,
        output: None,
    }
}

#[test]
fn test_prepare_prints_canonical_schema() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, USER_SCHEMA);

    let json = run_prepare(&PrepareArgs {
        schema: schema.clone(),
        pretty: false,
    })
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["type"], "record");
    assert_eq!(value["fields"][1]["type"], serde_json::json!(["null", "int"]));
    assert_eq!(value["fields"][2]["default"], serde_json::json!([]));

    let pretty = run_prepare(&PrepareArgs {
        schema,
        pretty: true,
    })
    .unwrap();
    assert!(pretty.contains('\n'));
    assert_eq!(serde_json::from_str::<serde_json::Value>(&pretty).unwrap(), value);
}

#[test]
fn test_prepare_reports_missing_file() {
    let err = run_prepare(&PrepareArgs {
        schema: PathBuf::from("/nonexistent/schema.yaml"),
        pretty: false,
    })
    .unwrap_err();
    assert!(format!("{err:#}").contains("Failed to load schema"));
}

#[test]
fn test_generate_to_stdout() {
    let dir = TempDir::new().unwrap();
    let args = generate_args(write_schema(&dir, USER_SCHEMA));

    let mut out = Vec::new();
    let metrics = run_generate(&args, &mut out).unwrap();
    assert_eq!(metrics.values_written, 5);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    for line in lines {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        let user = &value["User"];
        assert_eq!(user["id"].as_str().map(str::len), Some(36));
        assert!(user["age"].is_i64());
        assert_eq!(user["tags"], serde_json::json!([]));
    }
}

#[test]
fn test_generate_to_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("users.jsonl");
    let args = GenerateArgs {
        output: Some(output.clone()),
        count: 3,
        ..generate_args(write_schema(&dir, USER_SCHEMA))
    };

    let mut stdout = Vec::new();
    run_generate(&args, &mut stdout).unwrap();
    assert!(stdout.is_empty());
    assert_eq!(std::fs::read_to_string(output).unwrap().lines().count(), 3);
}

#[test]
fn test_generate_unknown_type_fails() {
    let dir = TempDir::new().unwrap();
    let args = generate_args(write_schema(&dir, "type: widget\n"));

    let err = run_generate(&args, &mut Vec::new()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Failed to prepare schema"));
    assert!(message.contains("widget"));
}
