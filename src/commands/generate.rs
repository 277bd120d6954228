//! The `generate` command: full roster-to-drafts pipeline.

use crate::cli::GenerateArgs;
use crate::completion::{CREDENTIAL_ENV_VAR, OpenAiClient, credential_from_env};
use crate::draft;
use crate::error::{MaildraftError, Result};
use crate::pipeline::generate_drafts;
use std::time::Duration;

pub fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let topic = super::require_topic(&args.topic)?;
    let config = super::load_config(args.config.as_deref())?;

    // Credential check happens before any row is read or processed:
    // without it, generation is disabled (preview/prompt still work).
    let api_key = credential_from_env().ok_or_else(|| {
        MaildraftError::ConfigError(format!(
            "completion-service credential not found\n\
             Fix: set the {} environment variable. The preview and prompt \
             commands work without it.",
            CREDENTIAL_ENV_VAR
        ))
    })?;

    let records = super::read_nonempty_roster(&args.roster)?;
    let reference_date = config.resolve_reference_date(args.reference_date);

    let client = OpenAiClient::new(
        api_key,
        config.api_base_url.clone(),
        config.model.clone(),
        Duration::from_secs(config.request_timeout_seconds),
    )
    .map_err(|e| {
        MaildraftError::ConfigError(format!("failed to build completion client: {}", e))
    })?;

    let drafts = generate_drafts(
        &records,
        topic,
        &config,
        reference_date,
        &client,
        &mut |done, total| eprintln!("Generating email {} of {}...", done, total),
    );

    draft::write_drafts_to_file(&args.output, &drafts)?;

    let failures = drafts.iter().filter(|d| d.is_failure()).count();
    if failures > 0 {
        eprintln!(
            "Warning: {} of {} rows failed; their rows carry the ERROR sentinel.",
            failures,
            drafts.len()
        );
    }
    println!(
        "Wrote {} drafts to '{}'.",
        drafts.len(),
        args.output.display()
    );

    Ok(())
}
