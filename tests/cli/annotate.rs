use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

const LOCALE: &str = "{\n    \"Lewis.greeting\": \"Hello there!\",\n    \"plain\": \"no key here\"\n}\n";

#[test]
fn test_missing_locale_file_aborts() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("content.json", "{}")?;

    let output = test.annotate_command().arg("--events").output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("i18n/default.json not found"));
    assert!(!test.has_file("i18n/default_with_comments.json"));

    Ok(())
}

#[test]
fn test_annotates_event_speakers() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/default.json", LOCALE)?;
    test.write_file(
        "events.json",
        r#"{ "event": "speak Lewis \"{{i18n:Lewis.greeting}}\"" }"#,
    )?;

    let output = test.annotate_command().arg("--events").output()?;
    assert_eq!(output.status.code(), Some(0));

    let annotated = test.read_file("i18n/default_with_comments.json")?;
    assert_eq!(
        annotated,
        "{\n    \"Lewis.greeting\": \"Hello there!\", //Lewis\n    \"plain\": \"no key here\"\n}\n"
    );

    Ok(())
}

#[test]
fn test_flags_off_means_no_annotations() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/default.json", LOCALE)?;
    test.write_file(
        "events.json",
        r#"{ "event": "speak Lewis \"{{i18n:Lewis.greeting}}\"" }"#,
    )?;

    let output = test.annotate_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    let annotated = test.read_file("i18n/default_with_comments.json")?;
    assert_eq!(annotated, LOCALE);

    Ok(())
}

#[test]
fn test_annotates_dialogue_blocks() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "i18n/default.json",
        "{\n    \"Lewis.Mon\": \"Morning!\",\n}\n",
    )?;
    test.write_file(
        "content.json",
        r#"{
    "Changes": [
        {
            "Action": "EditData",
            "Target": "Characters/Dialogue/Lewis",
            "Entries": {
                "Mon": "{{i18n:Lewis.Mon}}"
            }
        }
    ]
}"#,
    )?;

    let output = test
        .annotate_command()
        .arg("--characters-dialogue")
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let annotated = test.read_file("i18n/default_with_comments.json")?;
    assert_eq!(annotated, "{\n    \"Lewis.Mon\": \"Morning!\", //Lewis\n}\n");

    Ok(())
}

#[test]
fn test_annotation_appends_to_line_verbatim() -> Result<()> {
    let test = CliTest::new()?;
    // No trailing comma on the locale line; none may appear in the output.
    test.write_file("i18n/default.json", "{\n    \"shared\": \"hi\"\n}\n")?;
    test.write_file("events.json", r#"{ "event": "speak Lewis \"{{i18n:shared}}\"" }"#)?;

    let output = test.annotate_command().arg("--events").output()?;
    assert_eq!(output.status.code(), Some(0));

    let annotated = test.read_file("i18n/default_with_comments.json")?;
    assert_eq!(annotated, "{\n    \"shared\": \"hi\" //Lewis\n}\n");

    Ok(())
}

#[test]
fn test_skip_commented_leaves_existing_comments() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "i18n/default.json",
        "{\n    \"Lewis.greeting\": \"Hello!\", // reviewed\n}\n",
    )?;
    test.write_file(
        "events.json",
        r#"{ "event": "speak Lewis \"{{i18n:Lewis.greeting}}\"" }"#,
    )?;

    let output = test
        .annotate_command()
        .args(["--events", "--skip-commented"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let annotated = test.read_file("i18n/default_with_comments.json")?;
    assert_eq!(annotated, "{\n    \"Lewis.greeting\": \"Hello!\", // reviewed\n}\n");

    Ok(())
}

#[test]
fn test_later_file_wins() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/default.json", "{\n    \"shared\": \"hi\",\n}\n")?;
    // Files are processed in lexicographic order: a.json then b.json.
    test.write_file("a.json", r#"{ "event": "speak Lewis \"{{i18n:shared}}\"" }"#)?;
    test.write_file("b.json", r#"{ "event": "speak Marnie \"{{i18n:shared}}\"" }"#)?;

    let output = test.annotate_command().arg("--events").output()?;
    assert_eq!(output.status.code(), Some(0));

    let annotated = test.read_file("i18n/default_with_comments.json")?;
    assert_eq!(annotated, "{\n    \"shared\": \"hi\", //Marnie\n}\n");

    Ok(())
}

#[test]
fn test_config_file_sets_baseline() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".svi18nrc.json", r#"{ "includeEvents": true }"#)?;
    test.write_file("i18n/default.json", "{\n    \"k\": \"v\",\n}\n")?;
    test.write_file("events.json", r#"{ "event": "speak Lewis \"{{i18n:k}}\"" }"#)?;

    // No flags on the command line; the config file enables events.
    let output = test.annotate_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    let annotated = test.read_file("i18n/default_with_comments.json")?;
    assert_eq!(annotated, "{\n    \"k\": \"v\", //Lewis\n}\n");

    Ok(())
}

#[test]
fn test_original_locale_is_untouched() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/default.json", LOCALE)?;
    test.write_file(
        "events.json",
        r#"{ "event": "speak Lewis \"{{i18n:Lewis.greeting}}\"" }"#,
    )?;

    test.annotate_command().arg("--events").output()?;

    assert_eq!(test.read_file("i18n/default.json")?, LOCALE);

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("annotate"));
    assert!(stdout.contains("init"));

    Ok(())
}
