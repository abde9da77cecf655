//! CLI command outputs against the fixture configurations

mod fixtures;

use fixtures::{fixture_path, fixtures_dir};
use serde_json::json;
use std::fs;
use tsconfig_alias::commands::{self, CommandError, MatchOutput, ResolveOutput};
use tsconfig_alias::{resolve, EffectiveOptions, OptionsLayer, PluginOptions};

fn fixture_options(names: &[&str]) -> PluginOptions {
    PluginOptions::new(fixtures_dir(), names.iter().map(|n| n.to_string()).collect())
}

#[test]
fn test_resolve_json_is_the_alias_list() {
    let output = ResolveOutput::run(&fixture_options(&["tsconfig.json"]));
    let aliases = resolve(&fixtures_dir(), &["tsconfig.json"]);
    let expected = serde_json::to_string_pretty(&aliases).unwrap();
    assert_eq!(output.to_json().unwrap(), expected);
}

#[test]
fn test_resolve_human_lists_sources_and_aliases() {
    let output = ResolveOutput::run(&fixture_options(&[
        "tsconfig.json",
        "tsconfig.missing.json",
        "tsconfig.broken.json",
    ]));
    let text = output.to_human();

    assert!(text.starts_with(&format!("Project root: {}", fixtures_dir().display())));
    assert!(text.contains(&format!(
        "tsconfig.json ({}): 3 alias(es)",
        fixture_path("tsconfig.json")
    )));
    assert!(text.contains("tsconfig.missing.json"));
    assert!(text.contains("not found"));
    assert!(text.contains("tsconfig.broken.json: skipped"));
    assert!(text.contains("Aliases (3 total, in precedence order):"));
    assert!(text.contains(&format!("@ -> {}", fixture_path("src/index.ts"))));
}

#[test]
fn test_resolve_human_with_nothing_resolved() {
    let output = ResolveOutput::run(&fixture_options(&["tsconfig.missing.json"]));
    assert!(output.to_human().ends_with("No aliases resolved."));
}

#[test]
fn test_merge_with_existing_mapping_file() {
    let dir = tempfile::tempdir().unwrap();
    let existing = dir.path().join("aliases.json");
    fs::write(&existing, r#"{ "react": "/vendor/react", "@": "/legacy" }"#).unwrap();

    let merged = commands::merge_with_file(&fixture_options(&["tsconfig.json"]), &existing).unwrap();

    assert_eq!(merged.len(), 5);
    assert_eq!(merged[0].find.source(), "^@/(.*)$");
    assert_eq!(merged[3].find.source(), "react");
    assert_eq!(merged[4].replacement, "/legacy");
}

#[test]
fn test_merge_rejects_malformed_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let existing = dir.path().join("aliases.json");
    fs::write(&existing, "42").unwrap();

    let result = commands::merge_with_file(&fixture_options(&["tsconfig.json"]), &existing);
    assert!(matches!(result, Err(CommandError::Json { .. })));
}

#[test]
fn test_apply_keeps_unrelated_host_settings() {
    let dir = tempfile::tempdir().unwrap();
    let host = dir.path().join("host.json");
    fs::write(
        &host,
        json!({
            "server": { "port": 5173 },
            "resolve": { "extensions": [".ts"], "alias": { "lib": "/vendor/lib" } }
        })
        .to_string(),
    )
    .unwrap();

    let config = commands::apply_to_file(fixture_options(&["tsconfig.json"]), &host).unwrap();
    let value = serde_json::to_value(&config).unwrap();

    assert_eq!(value["server"]["port"], 5173);
    assert_eq!(value["resolve"]["extensions"], json!([".ts"]));
    let alias = value["resolve"]["alias"].as_array().unwrap();
    assert_eq!(alias.len(), 4);
    assert_eq!(alias[3], json!({"find": "lib", "replacement": "/vendor/lib"}));
}

#[test]
fn test_apply_missing_host_config() {
    let dir = tempfile::tempdir().unwrap();
    let result = commands::apply_to_file(
        fixture_options(&["tsconfig.json"]),
        &dir.path().join("host.json"),
    );
    assert!(matches!(result, Err(CommandError::Read { .. })));
}

#[test]
fn test_match_rewrites_through_fixture_aliases() {
    let options = fixture_options(&["tsconfig.json"]);

    let wildcard = MatchOutput::run(&options, "@/components/Button");
    assert!(wildcard.matched);
    assert_eq!(
        wildcard.resolved.as_deref(),
        Some(fixture_path("src/components/Button").as_str())
    );

    let exact = MatchOutput::run(&options, "@");
    assert_eq!(
        exact.resolved.as_deref(),
        Some(fixture_path("src/index.ts").as_str())
    );

    let miss = MatchOutput::run(&options, "lodash");
    assert!(!miss.matched);
    assert!(miss.alias.is_none());
}

#[test]
fn test_match_json_shape() {
    let output = MatchOutput::run(&fixture_options(&["tsconfig.json"]), "~/App");
    let value: serde_json::Value = serde_json::from_str(&output.to_json().unwrap()).unwrap();

    assert_eq!(value["specifier"], "~/App");
    assert_eq!(value["matched"], true);
    assert_eq!(value["alias"]["find"], json!({"pattern": "^~/(.*)$"}));
    assert_eq!(value["resolved"], fixture_path("app/App"));
}

#[test]
fn test_options_file_feeds_commands() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".tsconfig-alias.toml"),
        format!(
            "root = {:?}\nconfig_names = [\"tsconfig.sub.json\"]\n",
            fixtures_dir().to_string_lossy()
        ),
    )
    .unwrap();

    let cli = OptionsLayer {
        root: None,
        config_names: Some(vec!["tsconfig.sub.json".into(), "tsconfig.json".into()]),
    };
    let options = EffectiveOptions::discover(dir.path(), Some(cli)).unwrap().options;

    let output = MatchOutput::run(&options, "#utils/date");
    assert_eq!(
        output.resolved.as_deref(),
        Some(fixture_path("src/utils/date").as_str())
    );

    assert_eq!(ResolveOutput::run(&options).resolution.aliases.len(), 4);
}
