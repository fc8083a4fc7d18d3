//! Bot assembly integration tests
//! Run with: cargo test --test bot_assembly_test

use std::fs;

use botkit::infrastructure::adapters::console::ConsoleConnector;
use botkit::infrastructure::config::LoggerOptions;
use botkit::{Bot, BotError, Options};

fn scaffold_tree() -> tempfile::TempDir {
    let base = tempfile::tempdir().unwrap();
    let commands = base.path().join("commands");
    fs::create_dir_all(commands.join("util")).unwrap();
    fs::create_dir_all(commands.join("mod")).unwrap();
    fs::create_dir_all(base.path().join("events")).unwrap();
    base
}

#[tokio::test]
async fn assembles_and_initializes_from_a_directory_tree() {
    let base = scaffold_tree();

    let options = Options::new("token", "!", base.path()).unwrap();
    let mut bot = Bot::new(&options, &ConsoleConnector);
    bot.initialize().await.unwrap();

    let mut groups = bot.groups().to_vec();
    groups.sort();
    assert_eq!(groups, ["mod", "util"]);

    // The group directories are empty, so no modules were imported.
    assert!(bot.commands().is_empty());
    assert!(bot.logger_mut().is_none());
}

#[tokio::test]
async fn initialize_fails_when_the_commands_root_is_missing() {
    let base = tempfile::tempdir().unwrap();

    // Default commands path under base was never created.
    let options = Options::new("token", "!", base.path()).unwrap();
    let mut bot = Bot::new(&options, &ConsoleConnector);

    let err = bot.initialize().await.unwrap_err();
    assert!(matches!(err, BotError::PathNotFound(_)));
}

#[tokio::test]
async fn attached_logger_writes_through_assembly() {
    let base = scaffold_tree();
    let log_file = base.path().join("bot.log");

    let options = Options::new("token", "!", base.path())
        .unwrap()
        .with_logger(LoggerOptions::new("info", &log_file).unwrap());
    let mut bot = Bot::new(&options, &ConsoleConnector);
    bot.initialize().await.unwrap();

    let contents = fs::read_to_string(&log_file).unwrap();
    assert!(contents.contains("[LOG/INFO]: logger attached"));
    assert!(contents.contains("loaded 0 commands from 2 groups"));

    bot.logger_mut().unwrap().warn("heads up");
    let contents = fs::read_to_string(&log_file).unwrap();
    assert!(contents.contains("[LOG/WARN]: heads up"));
}

#[tokio::test]
async fn client_handle_is_usable_after_assembly() {
    let base = scaffold_tree();

    let options = Options::new("token", "!", base.path())
        .unwrap()
        .add_intents(["GuildMembers"])
        .unwrap();
    let bot = Bot::new(&options, &ConsoleConnector);

    let info = bot.client().client_info();
    assert_eq!(info.platform, "console");
    bot.client().send_message("chat", "hello").await.unwrap();
}
