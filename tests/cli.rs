use serde_json::Value;
use std::path::Path;
use std::process::{Command, Output};

fn scriptsmith(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_scriptsmith"))
        .args(args)
        .env("HOME", home)
        .env("APPDATA", home)
        .output()
        .expect("run scriptsmith")
}

fn json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is a JSON envelope")
}

#[test]
fn build_raw_prints_script_text() {
    let home = tempfile::tempdir().unwrap();
    let spec = r#"{"menuEnabled":true,"menuItems":[{"title":"Run Task A","action":"do_task_a"}]}"#;

    let output = scriptsmith(home.path(), &["build", spec, "--raw"]);

    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.starts_with("#!/bin/bash\n"));
    assert!(text.contains("1) do_task_a ;;"));
}

#[test]
fn build_json_reports_sections() {
    let home = tempfile::tempdir().unwrap();

    let output = scriptsmith(
        home.path(),
        &["build", "--json", r#"{"dialect":"powershell","mainBodyText":"Write-Host hi"}"#],
    );

    let body = json(&output);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["fileName"], "script.ps1");
    assert_eq!(body["data"]["sections"], serde_json::json!(["main_body"]));
}

#[test]
fn invalid_spec_exits_with_validation_code() {
    let home = tempfile::tempdir().unwrap();

    let output = scriptsmith(home.path(), &["build", "{not json"]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(json(&output)["error"]["code"], "validation.invalid_json");
}

#[test]
fn unknown_snippet_exits_with_not_found_code() {
    let home = tempfile::tempdir().unwrap();

    let output = scriptsmith(
        home.path(),
        &["snippet", "show", "shebang", "--dialect", "powershell"],
    );

    assert_eq!(output.status.code(), Some(4));
    assert_eq!(json(&output)["error"]["code"], "snippet.not_found");
}

#[test]
fn document_editing_round_trip() {
    let home = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    let doc = work.path().join("doc.json");
    let doc = doc.to_str().unwrap();

    assert!(scriptsmith(home.path(), &["doc", "new", doc]).status.success());
    scriptsmith(home.path(), &["doc", "menu", doc, "--on"]);
    scriptsmith(home.path(), &["doc", "add-item", doc, "Run Task A", "do_task_a"]);
    scriptsmith(home.path(), &["doc", "add-item", doc, "Run Task B", "do_task_b"]);

    let skipped = json(&scriptsmith(home.path(), &["doc", "add-item", doc, " ", "noop"]));
    assert_eq!(skipped["data"]["added"], false);
    assert_eq!(skipped["data"]["document"]["menuItems"].as_array().unwrap().len(), 2);

    let removed = json(&scriptsmith(home.path(), &["doc", "remove-item", doc, "1"]));
    assert_eq!(removed["data"]["document"]["menuItems"][0]["title"], "Run Task B");

    let inserted = json(&scriptsmith(home.path(), &["doc", "insert", doc, "read_input"]));
    assert!(inserted["data"]["preview"]
        .as_str()
        .unwrap()
        .contains("Functions & Main Logic (called by menu)"));

    let out_of_range = scriptsmith(home.path(), &["doc", "remove-item", doc, "5"]);
    assert_eq!(out_of_range.status.code(), Some(2));
}

#[test]
fn export_writes_file_and_refuses_overwrite() {
    let home = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let out_dir = out.path().to_str().unwrap();

    let first = scriptsmith(home.path(), &["export", "{}", "--output-dir", out_dir]);
    assert!(first.status.success());
    assert_eq!(
        std::fs::read_to_string(out.path().join("script.sh")).unwrap(),
        "#!/bin/bash\n\n"
    );

    let second = scriptsmith(home.path(), &["export", "{}", "--output-dir", out_dir]);
    assert_eq!(second.status.code(), Some(3));
    assert_eq!(json(&second)["error"]["code"], "export.target_exists");

    let forced = scriptsmith(home.path(), &["export", "{}", "--output-dir", out_dir, "--force"]);
    assert_eq!(json(&forced)["data"]["overwritten"], true);
}

#[test]
fn config_default_dialect_applies_to_new_documents() {
    let home = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    let doc = work.path().join("doc.json");

    let set = scriptsmith(home.path(), &["config", "set", "dialect", "powershell"]);
    assert!(set.status.success());
    assert_eq!(json(&set)["data"]["value"], "powershell");

    let created = json(&scriptsmith(home.path(), &["doc", "new", doc.to_str().unwrap()]));
    assert_eq!(created["data"]["document"]["dialect"], "powershell");

    let invalid = scriptsmith(home.path(), &["config", "set", "dialect", "zsh"]);
    assert_eq!(invalid.status.code(), Some(2));
    assert_eq!(json(&invalid)["error"]["code"], "config.invalid_value");
}

#[test]
fn config_remove_restores_builtin_value() {
    let home = tempfile::tempdir().unwrap();

    scriptsmith(home.path(), &["config", "set", "export.overwrite", "true"]);
    let removed = json(&scriptsmith(home.path(), &["config", "remove", "export.overwrite"]));

    assert_eq!(removed["data"]["command"], "config.remove");
    assert_eq!(removed["data"]["value"], false);
    assert_eq!(removed["data"]["config"]["defaults"]["export"]["overwrite"], false);

    let unknown = scriptsmith(home.path(), &["config", "remove", "/defaults/dialect"]);
    assert_eq!(unknown.status.code(), Some(2));
    assert_eq!(json(&unknown)["error"]["code"], "validation.invalid_argument");
}

#[test]
fn snippet_list_names_each_dialect() {
    let home = tempfile::tempdir().unwrap();

    let listed = json(&scriptsmith(home.path(), &["snippet", "list"]));
    let dialects = listed["data"]["dialects"].as_array().unwrap();

    assert_eq!(dialects[0]["name"], "Bash");
    assert_eq!(dialects[1]["name"], "PowerShell");
    assert_eq!(dialects[1]["snippets"][0]["id"], "header_comment");
}
