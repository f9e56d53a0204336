use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn pilot_cmd(data_dir: &Path, today: &str) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_promptpilot"));
    cmd.arg("--data-dir")
        .arg(data_dir)
        .env("PROMPTPILOT_SELECTION", "rotation")
        .env("PROMPTPILOT_TODAY", today)
        .env_remove("PROMPTPILOT_HOME")
        .env_remove("PROMPTPILOT_HISTORY_DAYS")
        .env_remove("RUST_LOG");
    cmd
}

fn run(data_dir: &Path, args: &[&str]) -> Output {
    pilot_cmd(data_dir, "2025-01-03").args(args).output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_first_run_creates_database() {
    let tmp = TempDir::new().unwrap();

    let output = run(tmp.path(), &["list"]);

    assert!(output.status.success());
    assert!(tmp.path().join("promptpilot.db").exists());
}

#[test]
fn test_list_shows_samples() {
    let tmp = TempDir::new().unwrap();

    let output = run(tmp.path(), &["list"]);
    assert!(output.status.success());

    let stdout = stdout(&output);
    assert!(stdout.contains("All Prompts (41 of 41)"));
    assert!(stdout.contains("1. Email Marketing Campaign [Business]"));
}

#[test]
fn test_list_query_narrows() {
    let tmp = TempDir::new().unwrap();

    let output = run(tmp.path(), &["list", "email"]);
    assert!(output.status.success());

    let stdout = stdout(&output);
    assert!(stdout.contains("(2 of 41)"));
    assert!(stdout.contains("Email Marketing Campaign"));
    assert!(stdout.contains("Newsletter Content"));
    assert!(!stdout.contains("Business Plan Executive Summary"));
}

#[test]
fn test_list_filter_json() {
    let tmp = TempDir::new().unwrap();

    let output = run(
        tmp.path(),
        &["list", "--filter", "category:Education", "--json"],
    );
    assert!(output.status.success());

    let prompts = json(&output);
    let prompts = prompts.as_array().unwrap();
    assert_eq!(prompts.len(), 4);
    assert!(prompts.iter().all(|p| p["category"] == "Education"));
}

#[test]
fn test_list_query_filter_tokens() {
    let tmp = TempDir::new().unwrap();

    let output = run(tmp.path(), &["list", "code", "ai:Gemini", "--json"]);
    assert!(output.status.success());

    let prompts = json(&output);
    let prompts = prompts.as_array().unwrap();
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0]["title"], "Unit Test Generator");
}

#[test]
fn test_invalid_filter_fails() {
    let tmp = TempDir::new().unwrap();

    let output = run(tmp.path(), &["list", "--filter", "newest"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid filter"));
}

#[test]
fn test_get_by_position_and_prefix() {
    let tmp = TempDir::new().unwrap();

    let output = run(tmp.path(), &["get", "1", "--json"]);
    assert!(output.status.success());
    let prompt = json(&output);
    assert_eq!(prompt["title"], "Email Marketing Campaign");

    let id = prompt["id"].as_str().unwrap().to_string();
    let output = run(tmp.path(), &["get", &id[..13]]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Email Marketing Campaign"));
}

#[test]
fn test_get_unknown_fails() {
    let tmp = TempDir::new().unwrap();

    let output = run(tmp.path(), &["get", "999"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Not found"));
}

#[test]
fn test_favorite_toggle_persists() {
    let tmp = TempDir::new().unwrap();

    let output = run(tmp.path(), &["favorite", "2"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Added 'Business Plan Executive Summary' to favorites"));

    // Separate process sees the flag
    let output = run(tmp.path(), &["favorites", "--json"]);
    let favorites = json(&output);
    let favorites = favorites.as_array().unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["is_favorite"], true);

    let output = run(tmp.path(), &["favorite", "2"]);
    assert!(stdout(&output).contains("Removed"));

    let output = run(tmp.path(), &["favorites"]);
    assert!(stdout(&output).contains("No favorites yet."));
}

#[test]
fn test_sample_collections() {
    let tmp = TempDir::new().unwrap();

    let output = run(tmp.path(), &["collection", "list", "--json"]);
    assert!(output.status.success());

    let collections = json(&output);
    let names: Vec<&str> = collections
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "Startup Essentials",
            "Content Creator Kit",
            "Developer Tools",
        ]
    );
}

#[test]
fn test_collection_workflow() {
    let tmp = TempDir::new().unwrap();

    let output = run(
        tmp.path(),
        &[
            "collection",
            "create",
            "  My Picks  ",
            "--description",
            "Weekly",
        ],
    );
    assert!(output.status.success());
    assert!(stdout(&output).contains("Created collection 'My Picks'"));

    let output = run(tmp.path(), &["collection", "add", "4", "1"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Added 'Email Marketing Campaign' to 'My Picks'"));

    // Adding twice keeps a single membership
    let output = run(tmp.path(), &["collection", "add", "4", "1"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("already in"));

    let output = run(tmp.path(), &["collection", "show", "4", "--json"]);
    assert!(output.status.success());
    let shown = json(&output);
    assert_eq!(shown["collection"]["name"], "My Picks");
    assert_eq!(shown["collection"]["description"], "Weekly");
    assert_eq!(shown["prompts"].as_array().unwrap().len(), 1);

    let output = run(tmp.path(), &["get", "1"]);
    assert!(stdout(&output).contains("Collections: My Picks"));

    let output = run(tmp.path(), &["collection", "remove", "4", "1"]);
    assert!(stdout(&output).contains("Removed 'Email Marketing Campaign' from 'My Picks'"));

    let output = run(tmp.path(), &["collection", "delete", "4"]);
    assert!(output.status.success());

    let output = run(tmp.path(), &["collection", "list", "--json"]);
    assert_eq!(json(&output).as_array().unwrap().len(), 3);

    // Prompts survive collection deletion
    let output = run(tmp.path(), &["list", "--json"]);
    assert_eq!(json(&output).as_array().unwrap().len(), 41);
}

#[test]
fn test_collection_empty_name_fails() {
    let tmp = TempDir::new().unwrap();

    let output = run(tmp.path(), &["collection", "create", "   "]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Validation"));

    let output = run(tmp.path(), &["collection", "list", "--json"]);
    assert_eq!(json(&output).as_array().unwrap().len(), 3);
}

#[test]
fn test_categories_and_models() {
    let tmp = TempDir::new().unwrap();

    let output = run(tmp.path(), &["categories"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).lines().collect::<Vec<_>>(),
        vec![
            "Business",
            "Coding",
            "Creative",
            "Education",
            "Personal",
            "Writing",
        ]
    );

    let output = run(tmp.path(), &["models"]);
    assert_eq!(
        stdout(&output).lines().collect::<Vec<_>>(),
        vec!["ChatGPT", "Claude", "Gemini"]
    );
}

#[test]
fn test_challenge_stable_within_day() {
    let tmp = TempDir::new().unwrap();

    let first = run(tmp.path(), &["challenge", "today", "--json"]);
    assert!(first.status.success());
    let second = run(tmp.path(), &["challenge", "today", "--json"]);

    let first = json(&first);
    let second = json(&second);
    assert_eq!(first["id"], second["id"]);
    assert_eq!(first["date"], "2025-01-03");
    assert_eq!(first["title"], "The Analyst Challenge");

    let refreshed = run(tmp.path(), &["challenge", "refresh", "--json"]);
    assert_eq!(json(&refreshed)["id"], first["id"]);
}

#[test]
fn test_challenge_rolls_over_to_next_day() {
    let tmp = TempDir::new().unwrap();

    let output = run(tmp.path(), &["challenge", "today", "--json"]);
    let yesterday = json(&output);

    let output = pilot_cmd(tmp.path(), "2025-01-04")
        .args(["challenge", "today", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let today = json(&output);
    assert_eq!(today["date"], "2025-01-04");
    assert_eq!(today["title"], "The Coder's Challenge");
    assert_ne!(today["id"], yesterday["id"]);

    let output = pilot_cmd(tmp.path(), "2025-01-04")
        .args(["challenge", "past", "--json"])
        .output()
        .unwrap();
    let past = json(&output);
    let past = past.as_array().unwrap();
    assert_eq!(past.len(), 1);
    assert_eq!(past[0]["id"], yesterday["id"]);
}

#[test]
fn test_challenge_history_expires() {
    let tmp = TempDir::new().unwrap();

    run(tmp.path(), &["challenge", "today"]);

    let output = pilot_cmd(tmp.path(), "2025-02-10")
        .args(["challenge", "past"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).contains("No past challenges."));
}

#[test]
fn test_challenge_text_output() {
    let tmp = TempDir::new().unwrap();

    let output = run(tmp.path(), &["challenge", "today"]);
    assert!(output.status.success());

    let stdout = stdout(&output);
    assert!(stdout.contains("Daily Challenge for 2025-01-03"));
    assert!(stdout.contains("Title: The Analyst Challenge"));
    assert!(stdout.contains("Hints:"));
}

#[test]
fn test_reset_restores_samples() {
    let tmp = TempDir::new().unwrap();

    run(tmp.path(), &["favorite", "1"]);
    run(tmp.path(), &["collection", "create", "Scratch"]);

    let output = run(tmp.path(), &["reset"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("41 sample prompts and 3 collections"));

    let output = run(tmp.path(), &["favorites", "--json"]);
    assert!(json(&output).as_array().unwrap().is_empty());
    let output = run(tmp.path(), &["collection", "list", "--json"]);
    assert_eq!(json(&output).as_array().unwrap().len(), 3);
}

#[test]
fn test_reload_samples() {
    let tmp = TempDir::new().unwrap();

    run(tmp.path(), &["favorite", "3"]);

    let output = run(tmp.path(), &["reload-samples"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Reloaded 41 sample prompts"));

    let output = run(tmp.path(), &["favorites", "--json"]);
    assert!(json(&output).as_array().unwrap().is_empty());
}

#[test]
fn test_invalid_config_fails() {
    let tmp = TempDir::new().unwrap();

    let output = pilot_cmd(tmp.path(), "2025-01-03")
        .env("PROMPTPILOT_SELECTION", "bogus")
        .args(["list"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid configuration"));
}
