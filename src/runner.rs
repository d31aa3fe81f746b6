// src/runner.rs

use crate::capture;
use crate::cli::{Cli, Command};
use crate::config::{load_fields_file, Config, OutputMode};
use crate::form::FormData;
use crate::submit::{FormSubmitter, SubmissionResult};
use crate::util::parse_field;

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Entry point from `main.rs`.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Init => init_scaffold(),

        Command::Serve { addr } => capture::serve(&addr).await,

        Command::Send {
            config,
            endpoint,
            fields,
            data,
            timeout,
            json,
        } => {
            let mut cfg = Config::load(&config)?;

            // CLI overrides
            if let Some(url) = endpoint {
                cfg.endpoint = url;
            }
            if let Some(secs) = timeout {
                cfg.timeout_secs = Some(secs);
            }
            if json {
                cfg.output.mode = OutputMode::Json;
            }

            let form = gather_fields(&cfg, data.as_deref(), &fields)?;
            send(&cfg, &form).await
        }
    }
}

/* ---------------- send ---------------- */

/// Build the form in submission order: config fields first, then the
/// fields file, then --field arguments.
fn gather_fields(
    cfg: &Config,
    data: Option<&Path>,
    cli_fields: &[String],
) -> Result<FormData> {
    let mut form = FormData::new();

    for field in &cfg.fields {
        form.push(field.name.clone(), field.value.clone());
    }

    if let Some(path) = data {
        for field in load_fields_file(path)? {
            form.push(field.name, field.value);
        }
    }

    for raw in cli_fields {
        let (name, value) = parse_field(raw)?;
        form.push(name, value);
    }

    Ok(form)
}

async fn send(cfg: &Config, form: &FormData) -> Result<()> {
    let mut submitter = FormSubmitter::from_endpoint(&cfg.endpoint)
        .context("Cannot build submitter from config endpoint")?;

    if let Some(secs) = cfg.timeout_secs {
        submitter = submitter.with_timeout(Duration::from_secs(secs));
    }

    tracing::debug!(
        endpoint = %submitter.endpoint(),
        fields = form.len(),
        "submitting form"
    );

    let outcome = submitter.submit_detailed(form).await;
    let result = outcome.collapse();

    match cfg.output.mode {
        OutputMode::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "result": result,
                    "outcome": outcome,
                }))?
            );
        }
        OutputMode::Stdout => match result {
            SubmissionResult::Success => println!("success"),
            SubmissionResult::Error => println!("error"),
        },
    }

    if result == SubmissionResult::Error {
        bail!("Submission failed");
    }
    Ok(())
}

/* ---------------- init ---------------- */

const CONFIG_TEMPLATE: &str = "\
# formpost configuration
endpoint: http://127.0.0.1:8787/

# Optional per-request timeout in seconds.
# timeout_secs: 30

# Default fields submitted with every `send`.
# Order is preserved; names may repeat.
fields:
  - name: subject
    value: contact

output:
  mode: stdout
";

const FIELDS_TEMPLATE: &str = "\
# Extra fields for `formpost send --data fields.yaml`
- name: name
  value: Alice
- name: email
  value: alice@example.com
";

fn init_scaffold() -> Result<()> {
    write_if_absent(&PathBuf::from("config.yaml"), CONFIG_TEMPLATE)?;
    write_if_absent(&PathBuf::from("fields.yaml"), FIELDS_TEMPLATE)?;

    eprintln!("Scaffold created.");
    eprintln!("Try: formpost serve   (in one terminal)");
    eprintln!("     formpost send --data fields.yaml");
    Ok(())
}

/// Write a scaffold file unless it already exists. Existing files are
/// skipped, not overwritten, so re-running `init` is harmless.
fn write_if_absent(path: &Path, contents: &str) -> Result<()> {
    if path.exists() {
        eprintln!("{:?} already exists (skipping)", path);
        return Ok(());
    }
    std::fs::write(path, contents).with_context(|| format!("Failed to write {:?}", path))?;
    eprintln!("Created {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaffold_skips_existing_files_and_still_creates_the_rest() {
        let dir = tempfile::tempdir().expect("temp dir");

        let config = dir.path().join("config.yaml");
        std::fs::write(&config, "endpoint: https://example.com/\n").expect("seed config");

        write_if_absent(&config, CONFIG_TEMPLATE).expect("existing file is not an error");
        assert_eq!(
            std::fs::read_to_string(&config).expect("config readable"),
            "endpoint: https://example.com/\n"
        );

        let fields = dir.path().join("fields.yaml");
        write_if_absent(&fields, FIELDS_TEMPLATE).expect("missing file is created");
        assert_eq!(
            std::fs::read_to_string(&fields).expect("fields readable"),
            FIELDS_TEMPLATE
        );
    }
}
