//! The `preview` command: inspect the roster without calling the service.

use crate::cli::PreviewArgs;
use crate::error::Result;
use crate::persona::{classify, tenure_months};
use crate::prompt::role_label;

pub fn cmd_preview(args: PreviewArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let records = super::read_nonempty_roster(&args.roster)?;
    let reference_date = config.resolve_reference_date(args.reference_date);

    println!(
        "{:<28} {:<20} {:<24} {:>6}  {}",
        "Organization", "Department", "Role", "Tenure", "Persona"
    );

    for record in &records {
        let tenure = tenure_months(record.start_date, reference_date);
        let persona = classify(record.is_manager, tenure);

        println!(
            "{:<28} {:<20} {:<24} {:>6}  {}",
            record
                .organization
                .as_deref()
                .unwrap_or(&config.default_organization),
            record
                .department
                .as_deref()
                .unwrap_or(&config.default_department),
            role_label(record.is_manager),
            tenure,
            persona
        );
    }

    println!(
        "\n{} rows (reference date {})",
        records.len(),
        reference_date
    );

    Ok(())
}
