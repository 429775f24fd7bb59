//! Assertions over terminal transcripts.

use anyhow::{Context, Result};

/// Assert that `first` occurs in `output` before `second`.
pub fn assert_appears_before(output: &str, first: &str, second: &str) -> Result<()> {
    let first_at = output
        .find(first)
        .with_context(|| format!("Expected output to contain {:?}", first))?;
    let second_at = output
        .find(second)
        .with_context(|| format!("Expected output to contain {:?}", second))?;

    if first_at > second_at {
        anyhow::bail!("Expected {:?} to appear before {:?}", first, second);
    }

    Ok(())
}

/// Assert how many times the menu was drawn.
pub fn assert_menu_renders(output: &str, expected: usize) -> Result<()> {
    let renders = output.matches("Available Models:").count();
    if renders != expected {
        anyhow::bail!("Expected the menu to be drawn {} times, got {}", expected, renders);
    }
    Ok(())
}
