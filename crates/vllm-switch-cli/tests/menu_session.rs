//! End-to-end menu sessions against fake compose and docker scripts.
#![cfg(unix)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use vllm_switch_runtime::Settings;
use vllm_switch_testing::TestWorld;
use vllm_switch_testing::assertions::{assert_appears_before, assert_menu_renders};
use vllm_switch_testing::fixtures::ENV_TEMPLATE;

fn session(world: &TestWorld, script: &str) -> (bool, String) {
    let mut cmd = cargo_bin_cmd!("vllm-switch");
    let output = world
        .configure_command(&mut cmd)
        .write_stdin(script.to_string())
        .output()
        .expect("Failed to run vllm-switch");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).to_string(),
    )
}

#[test]
fn test_quit_exits_cleanly() {
    let world = TestWorld::new().with_env_file(ENV_TEMPLATE);
    let (success, stdout) = session(&world, "q\n");

    assert!(success);
    assert_menu_renders(&stdout, 1).unwrap();
    assert!(stdout.contains("vLLM Stack - Model Switcher"));
    assert!(stdout.contains("  Active Model: Qwen/Qwen2.5-7B-Instruct\n"));
    assert!(stdout.contains("  vLLM Service: stopped\n"));
    assert!(stdout.contains("Goodbye!"));
    assert!(!stdout.contains('\x1b'), "NO_COLOR output must be plain");
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let world = TestWorld::new().with_env_file(ENV_TEMPLATE);
    let (success, stdout) = session(&world, "");

    assert!(success);
    assert!(stdout.contains("Goodbye!"));
}

#[test]
fn test_template_is_seeded_before_first_menu() {
    let world = TestWorld::new();
    let (success, stdout) = session(&world, "\nq\n");

    assert!(success);
    assert_eq!(world.read_env_file().as_deref(), Some(ENV_TEMPLATE));
    assert!(stdout.contains("✓ Created .env file"));
    assert_appears_before(
        &stdout,
        "No .env file found. Creating from .env.example...",
        "Available Models:",
    )
    .unwrap();
    assert_appears_before(
        &stdout,
        "⚠ Please edit .env and set your API keys before starting services!",
        "Available Models:",
    )
    .unwrap();
}

#[test]
fn test_no_template_means_no_seeding() {
    let world = TestWorld::new().without_template();
    let (success, stdout) = session(&world, "q\n");

    assert!(success);
    assert!(world.read_env_file().is_none());
    assert!(!stdout.contains("Creating from"));
    assert!(stdout.contains("  Active Model: Not configured\n"));
}

#[test]
fn test_missing_compose_file_exits_with_error() {
    let world = TestWorld::new().without_compose_file();
    let mut cmd = cargo_bin_cmd!("vllm-switch");
    world
        .configure_command(&mut cmd)
        .write_stdin("q\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("docker-compose.yml not found"))
        .stderr(predicate::str::contains("--project-dir"));

    assert!(world.read_env_file().is_none());
}

#[test]
fn test_failing_compose_version_exits_with_error() {
    let world = TestWorld::new().with_compose_script("exit 127");
    let mut cmd = cargo_bin_cmd!("vllm-switch");
    world
        .configure_command(&mut cmd)
        .write_stdin("q\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not installed or not in PATH"));
}

#[test]
fn test_switch_rewrites_env_and_cycles_services() {
    let world = TestWorld::new().with_env_file(ENV_TEMPLATE);
    let (success, stdout) = session(&world, "3\ny\n\nq\n");

    assert!(success);
    let env = world.read_env_file().unwrap();
    assert!(env.contains("MODEL_NAME=mistralai/Mistral-7B-Instruct-v0.2\n"));
    assert!(env.contains("MAX_MODEL_LEN=4096\n"));
    assert!(env.contains("GPU_MEMORY_UTILIZATION=0.95\n"));
    assert!(env.contains("HF_TOKEN=your_huggingface_token_here\n"));
    assert_eq!(env.lines().count(), ENV_TEMPLATE.lines().count());

    let calls = world.compose_calls().unwrap();
    assert_eq!(
        calls,
        vec![
            "docker-compose --version",
            "docker-compose down",
            "docker-compose up -d",
        ]
    );
    assert!(stdout.contains("✓ Successfully switched to Mistral-7B-Instruct-v0.2"));
    assert!(stdout.contains("[3] Mistral-7B-Instruct-v0.2 ← CURRENT"));
}

#[test]
fn test_invalid_choice_reprompts() {
    let world = TestWorld::new().with_env_file(ENV_TEMPLATE);
    let (success, stdout) = session(&world, "9\n\nq\n");

    assert!(success);
    assert!(stdout.contains("Invalid choice. Please try again."));
    assert_menu_renders(&stdout, 2).unwrap();
    assert_eq!(world.read_env_file().as_deref(), Some(ENV_TEMPLATE));
    assert_eq!(
        world.compose_calls().unwrap(),
        vec!["docker-compose --version"]
    );
}

#[test]
fn test_undecodable_input_reprompts() {
    let world = TestWorld::new().with_env_file(ENV_TEMPLATE);
    let mut cmd = cargo_bin_cmd!("vllm-switch");
    let output = world
        .configure_command(&mut cmd)
        .write_stdin(b"\xff\xfe\n\nq\n".to_vec())
        .output()
        .expect("Failed to run vllm-switch");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Invalid choice. Please try again."));
    assert_menu_renders(&stdout, 2).unwrap();
    assert_eq!(world.read_env_file().as_deref(), Some(ENV_TEMPLATE));
}

#[test]
fn test_running_status_comes_from_docker() {
    let world = TestWorld::new()
        .with_env_file(ENV_TEMPLATE)
        .with_docker_script("echo 'Up 3 minutes'");
    let (success, stdout) = session(&world, "q\n");

    assert!(success);
    assert!(stdout.contains("  vLLM Service: running\n"));
    let calls = world.recorded_calls().unwrap();
    assert!(calls.contains(&"docker ps --filter name=vllm-server --format {{.Status}}".to_string()));
}

#[test]
fn test_failed_stop_leaves_env_untouched() {
    let world = TestWorld::new()
        .with_env_file(ENV_TEMPLATE)
        .with_compose_script("[ \"$1\" = down ] && exit 1\nexit 0");
    let (success, stdout) = session(&world, "2\ny\n\nq\n");

    assert!(success);
    assert!(stdout.contains("✗ Failed to stop existing services"));
    assert_eq!(world.read_env_file().as_deref(), Some(ENV_TEMPLATE));
    assert_eq!(
        world.compose_calls().unwrap(),
        vec!["docker-compose --version", "docker-compose down"]
    );
}

#[test]
fn test_logs_interrupted_by_signal_return_to_menu() {
    let world = TestWorld::new()
        .with_env_file(ENV_TEMPLATE)
        .with_compose_script("[ \"$1\" = logs ] && exit 130\nexit 0");
    let (success, stdout) = session(&world, "l\n\nq\n");

    assert!(success);
    assert!(stdout.contains("Exiting log viewer"));
    assert_menu_renders(&stdout, 2).unwrap();
}

#[test]
fn test_health_reports_unreachable_services() {
    let settings = Settings {
        api_url: "http://127.0.0.1:9".to_string(),
        webui_url: "http://127.0.0.1:9/ui".to_string(),
        health_timeout_secs: 1,
        ..Settings::default()
    };
    let world = TestWorld::new()
        .with_env_file(ENV_TEMPLATE)
        .with_settings(&settings);
    let (success, stdout) = session(&world, "h\n\nq\n");

    assert!(success);
    assert!(stdout.contains("✗ vLLM API: Not responding"));
    assert!(stdout.contains("  Error: "));
    assert!(stdout.contains("⚠ Open WebUI: Not accessible (may still be starting)"));
    assert!(
        world
            .compose_calls()
            .unwrap()
            .contains(&"docker-compose ps".to_string())
    );
}

fn settings_for(server_container: &str) -> Settings {
    Settings {
        server_container: server_container.to_string(),
        ..Settings::default()
    }
}

fn status_query_for(world: &TestWorld, container: &str) -> bool {
    let expected = format!("docker ps --filter name={} --format {{{{.Status}}}}", container);
    world.recorded_calls().unwrap().contains(&expected)
}

#[test]
fn test_settings_variable_beats_project_file() {
    let world = TestWorld::new()
        .with_env_file(ENV_TEMPLATE)
        .with_settings(&settings_for("from-project"));
    let settings_path = world.temp_dir().join("elsewhere.toml");
    settings_for("from-variable").save_to(&settings_path).unwrap();
    let world = world.with_env("VLLM_SWITCH_CONFIG", settings_path.display().to_string());

    let (success, _) = session(&world, "q\n");

    assert!(success);
    assert!(status_query_for(&world, "from-variable"));
    assert!(!status_query_for(&world, "from-project"));
}

#[test]
fn test_project_file_beats_user_settings() {
    let world = TestWorld::new()
        .with_env_file(ENV_TEMPLATE)
        .with_settings(&settings_for("from-project"))
        .with_user_settings(&settings_for("from-user-dir"));

    let (success, _) = session(&world, "q\n");

    assert!(success);
    assert!(status_query_for(&world, "from-project"));
}

// dirs only follows XDG_CONFIG_HOME on Linux.
#[cfg(target_os = "linux")]
#[test]
fn test_user_settings_apply_without_project_file() {
    let world = TestWorld::new()
        .with_env_file(ENV_TEMPLATE)
        .with_user_settings(&settings_for("from-user-dir"));

    let (success, _) = session(&world, "q\n");

    assert!(success);
    assert!(status_query_for(&world, "from-user-dir"));
}
