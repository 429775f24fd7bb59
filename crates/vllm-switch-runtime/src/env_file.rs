//! Reading and rewriting the `KEY=VALUE` environment file consumed by the
//! compose stack.
//!
//! Only three keys are touched. Every other line, including comments and blank
//! lines, is written back byte-for-byte in its original position.

use crate::{Error, Result};
use std::path::Path;
use vllm_switch_types::ModelPreset;

pub const MODEL_NAME_KEY: &str = "MODEL_NAME";
pub const MAX_MODEL_LEN_KEY: &str = "MAX_MODEL_LEN";
pub const GPU_MEMORY_UTILIZATION_KEY: &str = "GPU_MEMORY_UTILIZATION";

/// What `seed_from_template` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    AlreadyPresent,
    NoTemplate,
    Created,
}

/// The model identifier currently configured, if any.
///
/// A missing or unreadable file, or an empty value, counts as unconfigured.
pub fn current_model(env_path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(env_path).ok()?;
    read_value(&content, MODEL_NAME_KEY)
}

/// Value of the first line starting with `KEY=`, trimmed.
pub fn read_value(content: &str, key: &str) -> Option<String> {
    content
        .lines()
        .find_map(|line| value_of(line, key))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn value_of<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    line.strip_prefix(key)?.strip_prefix('=')
}

/// Rewrite the recognized keys of `content` for `preset`.
///
/// Recognized lines keep their own terminator. Keys that never appear are
/// appended at the end so the stack always picks up the selection.
pub fn apply_preset(content: &str, preset: &ModelPreset) -> String {
    let replacements = [
        (MODEL_NAME_KEY, preset.model_id.to_string()),
        (MAX_MODEL_LEN_KEY, preset.max_model_len_value()),
        (
            GPU_MEMORY_UTILIZATION_KEY,
            preset.gpu_memory_utilization_value(),
        ),
    ];
    let mut seen = [false; 3];
    let mut output = String::with_capacity(content.len() + 64);

    for line in content.split_inclusive('\n') {
        let (body, terminator) = split_terminator(line);
        let replaced = replacements
            .iter()
            .enumerate()
            .find(|(_, (key, _))| value_of(body, key).is_some());

        match replaced {
            Some((index, (key, value))) => {
                seen[index] = true;
                output.push_str(key);
                output.push('=');
                output.push_str(value);
                output.push_str(terminator);
            }
            None => output.push_str(line),
        }
    }

    for (index, (key, value)) in replacements.iter().enumerate() {
        if seen[index] {
            continue;
        }
        if !output.is_empty() && !output.ends_with('\n') {
            output.push('\n');
        }
        output.push_str(key);
        output.push('=');
        output.push_str(value);
        output.push('\n');
    }

    output
}

fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

/// Rewrite the environment file for `preset`.
///
/// The existing file is the source when present, the template otherwise. The
/// result is always written to `env_path`.
pub fn update(env_path: &Path, template_path: &Path, preset: &ModelPreset) -> Result<()> {
    let source = if env_path.exists() {
        env_path
    } else {
        template_path
    };

    let content = std::fs::read_to_string(source).map_err(|source_err| Error::Template {
        path: source.to_path_buf(),
        source: source_err,
    })?;

    let updated = apply_preset(&content, preset);
    std::fs::write(env_path, updated)?;
    log::debug!(
        "wrote {} for {} (source: {})",
        env_path.display(),
        preset.model_id,
        source.display()
    );
    Ok(())
}

/// Create the environment file from its template when it does not exist yet.
pub fn seed_from_template(env_path: &Path, template_path: &Path) -> Result<SeedOutcome> {
    if env_path.exists() {
        return Ok(SeedOutcome::AlreadyPresent);
    }
    if !template_path.exists() {
        return Ok(SeedOutcome::NoTemplate);
    }

    std::fs::copy(template_path, env_path)?;
    log::info!(
        "created {} from {}",
        env_path.display(),
        template_path.display()
    );
    Ok(SeedOutcome::Created)
}
