//! Sample project files.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// A template in the shape the compose stack ships with.
pub const ENV_TEMPLATE: &str = "\
# Hugging Face token for gated models
HF_TOKEN=your_huggingface_token_here

# vLLM server
MODEL_NAME=Qwen/Qwen2.5-7B-Instruct
MAX_MODEL_LEN=8192
GPU_MEMORY_UTILIZATION=0.95

# Open WebUI
WEBUI_SECRET_KEY=change-me
";

pub const COMPOSE_FILE: &str = "\
services:
  vllm:
    container_name: vllm-server
    image: vllm/vllm-openai:latest
    env_file: .env
  open-webui:
    image: ghcr.io/open-webui/open-webui:main
";

/// Write an executable shell script that appends `<name> <args>` to
/// `calls_log` and then runs `body`.
#[cfg(unix)]
pub fn write_fake_cli(dir: &Path, name: &str, calls_log: &Path, body: &str) -> Result<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    let script = format!(
        "#!/bin/sh\necho \"{} $*\" >> \"{}\"\n{}\n",
        name,
        calls_log.display(),
        body
    );
    fs::write(&path, script)?;
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
    Ok(path)
}
