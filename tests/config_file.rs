use std::fs;

use treasure_hunter::config::Config;
use treasure_hunter::game::Difficulty;

#[test]
fn default_file_round_trips() {
    let td = tempfile::tempdir().unwrap();
    let path = td.path().join("config.toml");
    let path = path.to_str().unwrap();

    Config::create_default(path).unwrap();
    let text = fs::read_to_string(path).unwrap();
    assert!(text.contains("[shop.prices]"), "{}", text);
    assert!(!text.contains("seed"), "unset seed should be omitted: {}", text);

    let loaded = Config::load(path).unwrap();
    let defaults = Config::default();
    assert_eq!(loaded.game.starting_gold, defaults.game.starting_gold);
    assert_eq!(loaded.game.default_mode, Difficulty::Normal);
    assert_eq!(loaded.shop.prices, defaults.shop.prices);
    assert_eq!(loaded.shop.sell_markdown, defaults.shop.sell_markdown);
    assert_eq!(loaded.logging.level, "warn");
}

#[test]
fn custom_values_are_honoured() {
    let td = tempfile::tempdir().unwrap();
    let path = td.path().join("hunt.toml");
    fs::write(
        &path,
        r#"
[game]
default_name = "Musashi"
default_mode = "samurai"
seed = 99

[shop]
sell_markdown = 0.25

[shop.prices]
rope = 3
sword = 15

[logging]
file = "hunt.log"
"#,
    )
    .unwrap();

    let config = Config::load(path.to_str().unwrap()).unwrap();
    assert_eq!(config.game.default_name, "Musashi");
    assert_eq!(config.game.default_mode, Difficulty::Samurai);
    assert_eq!(config.game.seed, Some(99));
    assert_eq!(config.game.starting_gold, 10);
    assert_eq!(config.shop.prices.len(), 2);
    assert_eq!(config.shop.prices["sword"], 15);
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.file.as_deref(), Some("hunt.log"));
}

#[test]
fn invalid_files_are_rejected() {
    let td = tempfile::tempdir().unwrap();
    let path = td.path().join("bad.toml");
    fs::write(&path, "[shop]\nsell_markdown = 0.0\n").unwrap();
    let err = Config::load(path.to_str().unwrap()).unwrap_err().to_string();
    assert!(err.contains("sell_markdown"), "{}", err);

    fs::write(&path, "[game\nstarting_gold = ").unwrap();
    let err = Config::load(path.to_str().unwrap()).unwrap_err().to_string();
    assert!(err.contains("Failed to parse"), "{}", err);
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let td = tempfile::tempdir().unwrap();
    let path = td.path().join("nope.toml");
    assert!(Config::load(path.to_str().unwrap()).is_err());
    let config = Config::load_or_default(path.to_str().unwrap());
    assert_eq!(config.game.default_name, "Hunter");
    assert_eq!(config.shop.prices["shovel"], 8);
}
