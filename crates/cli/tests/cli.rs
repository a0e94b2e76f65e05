use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::{PredicateBooleanExt, predicate};
use serde_json::{Value, json};

fn ok(data: Value) -> String {
    json!({"code": 200, "statusText": "", "message": "", "data": data}).to_string()
}

/// Command pointed at `base_url` with no ambient configuration
fn plugindesk(base_url: &str) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("plugindesk");
    cmd.env_remove("PLUGINDESK_API_URL")
        .env_remove("PLUGINDESK_TOKEN")
        .env_remove("PLUGINDESK_TIMEOUT_SECS")
        .env("NO_COLOR", "1")
        .args(["--base-url", base_url]);
    cmd
}

/// Test CLI shows help information
#[test]
fn test_cli_help() {
    let mut cmd = cargo_bin_cmd!("plugindesk");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("apps"))
        .stdout(predicate::str::contains("plugins"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_plugins_list_text() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/core/plugin/list")
        .with_body(ok(json!([
            {"_id": "p1", "name": "Search", "avatar": "/icon/logo.svg", "intro": "web"}
        ])))
        .create();

    plugindesk(&server.url())
        .args(["plugins", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("p1").and(predicate::str::contains("Search")));

    mock.assert();
}

#[test]
fn test_plugins_show_json() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/core/plugin/detail")
        .match_query(mockito::Matcher::UrlEncoded("id".into(), "p1".into()))
        .with_body(ok(json!({"_id": "p1", "name": "Search", "intro": "web"})))
        .create();

    let output = plugindesk(&server.url())
        .args(["--json", "plugins", "show", "p1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["_id"], "p1");
    assert_eq!(value["name"], "Search");
}

#[test]
fn test_plugins_create_sends_form() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/core/plugin/create")
        .match_body(mockito::Matcher::Json(json!({
            "avatar": "/icon/logo.svg",
            "name": "MyPlugin",
            "intro": ""
        })))
        .with_body(ok(json!("abc123")))
        .create();

    plugindesk(&server.url())
        .args(["plugins", "create", "--name", "MyPlugin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("created plugin abc123"));

    mock.assert();
}

#[test]
fn test_plugins_create_rejects_blank_name() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/core/plugin/create").expect(0).create();

    plugindesk(&server.url())
        .args(["plugins", "create", "--name", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));

    mock.assert();
}

#[test]
fn test_plugins_delete_requires_yes() {
    let mut server = mockito::Server::new();
    let mock = server.mock("DELETE", "/core/plugin/delete").expect(0).create();

    plugindesk(&server.url())
        .args(["plugins", "delete", "p1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));

    mock.assert();
}

#[test]
fn test_plugins_delete_with_yes() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("DELETE", "/core/plugin/delete")
        .match_query(mockito::Matcher::UrlEncoded("id".into(), "p1".into()))
        .with_body(ok(Value::Null))
        .create();

    plugindesk(&server.url())
        .args(["plugins", "delete", "p1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted plugin p1"));

    mock.assert();
}

#[test]
fn test_apps_collect_json() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/app/share/collection")
        .match_query(mockito::Matcher::UrlEncoded("appId".into(), "a1".into()))
        .with_body(ok(json!(3)))
        .create();

    let output = plugindesk(&server.url())
        .args(["--json", "apps", "collect", "a1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, json!({"id": "a1", "collection": 3}));
}

#[test]
fn test_backend_error_is_reported() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/app/myApps")
        .with_body(r#"{"code":500,"statusText":"error","message":"no permission"}"#)
        .create();

    plugindesk(&server.url())
        .args(["apps", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no permission"));
}

#[test]
fn test_invalid_base_url_fails_before_any_request() {
    plugindesk("not a url")
        .args(["apps", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("base URL"));
}

#[test]
fn test_apps_logs_rejects_huge_window() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/app/getChatLogs").expect(0).create();

    plugindesk(&server.url())
        .args(["apps", "logs", "a1", "--days", "100000000"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("out of range"));

    mock.assert();
}
