//! The `prompt` command: print composed prompts without calling the service.

use crate::cli::PromptArgs;
use crate::error::{MaildraftError, Result};
use crate::pipeline::prompt_for_record;
use crate::prompt::SYSTEM_INSTRUCTION_VERSION;

pub fn cmd_prompt(args: PromptArgs) -> Result<()> {
    let topic = super::require_topic(&args.topic)?;
    let config = super::load_config(args.config.as_deref())?;
    let records = super::read_nonempty_roster(&args.roster)?;
    let reference_date = config.resolve_reference_date(args.reference_date);

    let selected: Vec<(usize, _)> = match args.row {
        Some(row) => {
            let record = records.get(row.wrapping_sub(1)).ok_or_else(|| {
                MaildraftError::InputError(format!(
                    "row {} is out of range; roster has {} rows",
                    row,
                    records.len()
                ))
            })?;
            vec![(row, record)]
        }
        None => records.iter().enumerate().map(|(i, r)| (i + 1, r)).collect(),
    };

    for (row, record) in selected {
        let pair = prompt_for_record(record, topic, &config, reference_date);

        println!("--- Row {} ---", row);
        println!("[system {}]", SYSTEM_INSTRUCTION_VERSION);
        println!("{}", pair.system);
        println!();
        println!("[user]");
        println!("{}", pair.user);
        println!();
    }

    Ok(())
}
