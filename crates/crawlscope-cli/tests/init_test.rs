use anyhow::Result;
use crawlscope_testing::TestWorld;

#[test]
fn test_init_writes_default_config() -> Result<()> {
    let world = TestWorld::new();
    std::fs::remove_file(world.config_path())?;

    let result = world.run(&["init"])?;
    assert!(result.success(), "init failed: {}", result.stderr());

    let body = std::fs::read_to_string(world.config_path())?;
    assert!(body.contains("session_report = \"session_lengths.csv\""));
    assert!(body.contains("include_unreachable = false"));
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["init"])?;
    assert!(!result.success());
    assert!(result.stderr().contains("already exists"));

    let result = world.run(&["init", "--force"])?;
    assert!(result.success(), "init --force failed: {}", result.stderr());
    assert!(result.stdout().contains("Wrote default config"));
    Ok(())
}

#[test]
fn test_init_json_output() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["--format", "json", "init", "--force"])?;
    assert!(result.success(), "init failed: {}", result.stderr());
    assert_eq!(result.json()?["config"]["protocol_report"], "protocol_stats.csv");
    Ok(())
}

#[test]
fn test_config_flag_wins_over_env() -> Result<()> {
    let world = TestWorld::new();
    let env_config = world.temp_dir().join("env").join("config.toml");
    let world = world.with_env("CRAWLSCOPE_CONFIG", env_config.to_string_lossy());

    let result = world.run(&["init", "--force"])?;
    assert!(result.success(), "init failed: {}", result.stderr());
    assert!(result.stdout().contains(&world.config_path().display().to_string()));
    assert!(!env_config.exists());
    Ok(())
}
