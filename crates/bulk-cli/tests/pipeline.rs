//! Integration tests for loading inputs and running validations.

use std::fs;
use std::path::{Path, PathBuf};

use bulk_cli::pipeline::{ImportKind, render_template, validate_contacts, validate_credentials};
use bulk_cli::profile::{load_optional_references, load_profile, read_grid};
use bulk_model::ErrorKind;
use bulk_validate::CredentialReferences;

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "bulk-import-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

const CONTACT_PROFILE: &str = r#"{
    "headers": [
        {"key": "contactName", "translation": "Contact Name"},
        {"key": "externalId", "translation": "External ID"}
    ]
}"#;

const CREDENTIAL_PROFILE: &str = r#"{
    "headers": [
        {"key": "externalId", "translation": "External ID"},
        {"key": "contactName", "translation": "Contact Name"},
        {"key": "award", "translation": "Award"}
    ],
    "fields": [
        {"key": "award", "type": "string", "validations": ["required"]}
    ]
}"#;

#[test]
fn contacts_file_with_existing_contacts() {
    let dir = unique_temp_dir("contacts");
    let profile = load_profile(&write(&dir, "profile.json", CONTACT_PROFILE)).unwrap();
    let grid = read_grid(
        &write(
            &dir,
            "contacts.csv",
            "Contact Name;External ID\nAstrid Bernal;1\nLyla Dodd;2\n;\n",
        ),
        ';',
    )
    .unwrap();
    let existing_path = write(
        &dir,
        "existing.json",
        r#"[{"contactName": "Sam Vega", "externalId": "2"}]"#,
    );
    let existing = load_optional_references(Some(existing_path.as_path())).unwrap();

    let run = validate_contacts(&profile, &grid, &existing).unwrap();
    assert_eq!(run.kind, ImportKind::Contacts);
    assert!(run.has_errors());
    assert_eq!(run.outcome.records.len(), 2);
    assert_eq!(run.issues.len(), 1);
    assert_eq!(run.issues[0].kind, ErrorKind::PreExisting);
    assert_eq!(run.issues[0].line, Some(3));
    assert_eq!(run.issues[0].column, 2);
}

#[test]
fn credentials_file_falls_back_to_contacts() {
    let dir = unique_temp_dir("credentials");
    let profile = load_profile(&write(&dir, "profile.json", CREDENTIAL_PROFILE)).unwrap();
    let grid = read_grid(
        &write(
            &dir,
            "credentials.csv",
            "External ID,Contact Name,Award\n1,Astrid Bernal,Honors\n9,Lyla Dodd,\n",
        ),
        ',',
    )
    .unwrap();
    let contacts_path = write(
        &dir,
        "contacts.json",
        r#"[{"contactName": "Astrid Bernal", "externalId": "1"}]"#,
    );
    let contacts = load_optional_references(Some(contacts_path.as_path())).unwrap();

    let run = validate_credentials(
        &profile,
        &grid,
        CredentialReferences {
            recipients: &[],
            contacts: &contacts,
        },
    )
    .unwrap();
    let kinds: Vec<ErrorKind> = run.issues.iter().map(|issue| issue.kind).collect();
    assert_eq!(
        kinds,
        vec![ErrorKind::Required, ErrorKind::NonexistentExternalId]
    );
}

#[test]
fn profile_contract_errors_surface_with_context() {
    let dir = unique_temp_dir("bad-profile");
    let profile = load_profile(&write(
        &dir,
        "profile.json",
        r#"{"headers": [{"key": "contactName", "translation": "Contact Name"}]}"#,
    ))
    .unwrap();
    let err = validate_contacts(&profile, &Vec::new(), &[]).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("build contact import"));
    assert!(message.contains("externalId"));
}

#[test]
fn missing_files_name_the_path() {
    let dir = unique_temp_dir("missing");
    let err = load_profile(&dir.join("nope.json")).unwrap_err();
    assert!(format!("{err:#}").contains("nope.json"));
    assert!(load_optional_references(None).unwrap().is_empty());
}

#[test]
fn template_is_prefilled_from_records() {
    let dir = unique_temp_dir("template");
    let profile = load_profile(&write(&dir, "profile.json", CREDENTIAL_PROFILE)).unwrap();
    let records_path = write(
        &dir,
        "recipients.json",
        r#"[{"externalId": "1", "contactName": "Astrid Bernal"}]"#,
    );
    let records = load_optional_references(Some(records_path.as_path())).unwrap();
    insta::assert_snapshot!(render_template(&profile, &records).unwrap(), @r"
    External ID,Contact Name,Award
    1,Astrid Bernal,
    ");
    insta::assert_snapshot!(
        render_template(&profile, &[]).unwrap(),
        @"External ID,Contact Name,Award"
    );
}
