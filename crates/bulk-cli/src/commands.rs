use std::fs;

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use bulk_cli::pipeline::{ImportRun, render_template, validate_contacts, validate_credentials};
use bulk_cli::profile::{load_optional_references, load_profile, read_grid};
use bulk_validate::CredentialReferences;

use crate::cli::{ContactsArgs, CredentialsArgs, TemplateArgs};

pub fn run_contacts(args: &ContactsArgs) -> Result<ImportRun> {
    let span = info_span!("contacts", file = %args.input.file.display());
    let _guard = span.enter();
    let profile = load_profile(&args.input.profile)?;
    let grid = read_grid(&args.input.file, args.input.delimiter)?;
    let existing = load_optional_references(args.existing.as_deref())?;
    validate_contacts(&profile, &grid, &existing)
}

pub fn run_credentials(args: &CredentialsArgs) -> Result<ImportRun> {
    let span = info_span!("credentials", file = %args.input.file.display());
    let _guard = span.enter();
    let profile = load_profile(&args.input.profile)?;
    let grid = read_grid(&args.input.file, args.input.delimiter)?;
    let recipients = load_optional_references(args.recipients.as_deref())?;
    let contacts = load_optional_references(args.contacts.as_deref())?;
    validate_credentials(
        &profile,
        &grid,
        CredentialReferences {
            recipients: &recipients,
            contacts: &contacts,
        },
    )
}

pub fn run_template(args: &TemplateArgs) -> Result<()> {
    let profile = load_profile(&args.profile)?;
    let records = load_optional_references(args.records.as_deref())?;
    let text = render_template(&profile, &records)?;
    match &args.output {
        Some(path) => {
            fs::write(path, format!("{text}\n"))
                .with_context(|| format!("write template {}", path.display()))?;
            debug!(path = %path.display(), "template written");
        }
        None => println!("{text}"),
    }
    Ok(())
}
