use clap::Parser;
use om1_connectors::cli::commands::config::ConfigCommands;
use om1_connectors::cli::commands::key::KeyCommands;
use om1_connectors::cli::{Cli, Commands};

#[test]
fn test_parse_face() {
    let cli = Cli::try_parse_from(["om1", "face", "happy"]).unwrap();
    match cli.command {
        Commands::Face(args) => {
            assert_eq!(args.action, "happy");
            assert!(!args.strict);
        }
        other => panic!("Wrong top-level command: {other:?}"),
    }
    assert!(!cli.json);
}

#[test]
fn test_parse_move_strict_json() {
    let cli = Cli::try_parse_from(["om1", "move", "shake_paw", "--strict", "--json"]).unwrap();
    match cli.command {
        Commands::Move(args) => {
            assert_eq!(args.action, "shake_paw");
            assert!(args.strict);
        }
        other => panic!("Wrong top-level command: {other:?}"),
    }
    assert!(cli.json);
}

#[test]
fn test_parse_key_resolve_defaults() {
    let cli = Cli::try_parse_from(["om1", "key", "resolve"]).unwrap();
    match cli.command {
        Commands::Key(KeyCommands::Resolve { service, reveal }) => {
            assert_eq!(service, "openmind");
            assert!(!reveal);
        }
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_parse_key_validate() {
    let cli = Cli::try_parse_from([
        "om1",
        "key",
        "validate",
        "real_secure_key_123456789",
        "--service",
        "openai",
    ])
    .unwrap();
    match cli.command {
        Commands::Key(KeyCommands::Validate { key, service }) => {
            assert_eq!(key, "real_secure_key_123456789");
            assert_eq!(service, "openai");
        }
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_parse_config_get() {
    let cli = Cli::try_parse_from([
        "om1",
        "config",
        "get",
        "robot_name",
        "--default",
        "spot",
        "--optional",
        "--config",
        "/etc/om1.yaml",
    ])
    .unwrap();
    match cli.command {
        Commands::Config(ConfigCommands::Get {
            key,
            default,
            optional,
        }) => {
            assert_eq!(key, "robot_name");
            assert_eq!(default, "spot");
            assert!(optional);
        }
        other => panic!("Wrong command: {other:?}"),
    }
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/etc/om1.yaml")));
}

#[test]
fn test_missing_action_is_rejected() {
    assert!(Cli::try_parse_from(["om1", "face"]).is_err());
}
