//! Suggestion backend that shells out to a user-configured LM command.
//!
//! The prompt is written to the command's stdin and the answer is read from
//! stdout, so any tool that maps text to text works (`llm`, `ollama run`, a
//! wrapper script).
use super::PromptBackend;
use anyhow::{anyhow, Context, Result};
use std::io::Write;
use std::process::{Command, Stdio};

#[derive(Debug, Clone)]
pub struct CommandBackend {
    argv: Vec<String>,
}

impl CommandBackend {
    /// Parse a shell-style command line.
    pub fn parse(command: &str) -> Result<Self> {
        let argv = shell_words::split(command)
            .with_context(|| format!("parse suggestion command: {command}"))?;
        if argv.is_empty() {
            return Err(anyhow!("suggestion command is empty"));
        }
        Ok(Self { argv })
    }
}

impl PromptBackend for CommandBackend {
    fn label(&self) -> &'static str {
        "command"
    }

    fn complete(&self, prompt: &str) -> Result<String> {
        let (program, args) = self
            .argv
            .split_first()
            .ok_or_else(|| anyhow!("suggestion command is empty"))?;
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("spawn suggestion command: {program}"))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(prompt.as_bytes())
                .context("write prompt to suggestion command stdin")?;
        }

        let output = child
            .wait_with_output()
            .context("wait for suggestion command")?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!(
                "suggestion command failed with status {}: {}",
                output.status,
                stderr.trim()
            ));
        }
        String::from_utf8(output.stdout).context("decode suggestion command stdout as UTF-8")
    }
}
