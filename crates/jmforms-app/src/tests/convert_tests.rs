use jmforms_core::{ConvertError, ReadingGroup};
use pretty_assertions::assert_eq;

use super::{SAMPLE_JMDICT, SAMPLE_JSON, config_in};
use crate::convert::{ConversionSummary, run_conversion};

#[test]
fn test_conversion_writes_identical_copies() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let input = dir.path().join("JMdict_e");
    std::fs::write(&input, SAMPLE_JMDICT).unwrap();
    let config = config_in(dir.path(), &input);

    let summary = run_conversion(&config).unwrap();
    assert_eq!(summary, ConversionSummary { entries: 4, groups: 2 });

    let opus = std::fs::read(&config.output.opus_path).unwrap();
    let mp3 = std::fs::read(&config.output.mp3_path).unwrap();
    assert_eq!(opus, mp3);
    assert_eq!(String::from_utf8(opus).unwrap(), SAMPLE_JSON);
}

#[test]
fn test_output_parses_back_into_groups() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let input = dir.path().join("JMdict_e");
    std::fs::write(&input, SAMPLE_JMDICT).unwrap();
    let config = config_in(dir.path(), &input);

    run_conversion(&config).unwrap();

    let data = std::fs::read_to_string(&config.output.mp3_path).unwrap();
    let groups: Vec<ReadingGroup> = serde_json::from_str(&data).unwrap();
    let readings: Vec<&str> = groups.iter().map(|g| g.reading.as_str()).collect();
    assert_eq!(readings, vec!["うおじらみ", "ことば"]);
    assert_eq!(
        groups[0].expressions[1].override_reading.as_deref(),
        Some("ウオジラミ")
    );
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let input = dir.path().join("JMdict_e");
    std::fs::write(&input, SAMPLE_JMDICT).unwrap();
    let config = config_in(dir.path(), &input);

    run_conversion(&config).unwrap();
    let first = std::fs::read(&config.output.opus_path).unwrap();

    run_conversion(&config).unwrap();
    let second = std::fs::read(&config.output.opus_path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_empty_dictionary_writes_empty_array() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let input = dir.path().join("JMdict_e");
    std::fs::write(&input, "<JMdict></JMdict>").unwrap();
    let config = config_in(dir.path(), &input);

    let summary = run_conversion(&config).unwrap();
    assert_eq!(summary, ConversionSummary { entries: 0, groups: 0 });
    assert_eq!(std::fs::read_to_string(&config.output.opus_path).unwrap(), "[]");
}

#[test]
fn test_missing_input_fails() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let config = config_in(dir.path(), &dir.path().join("missing/JMdict_e"));

    let err = run_conversion(&config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConvertError>(),
        Some(ConvertError::FileNotFound(_))
    ));
    assert!(!config.output.opus_path.exists());
}

#[test]
fn test_malformed_input_fails_without_output() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let input = dir.path().join("JMdict_e");
    std::fs::write(&input, "<JMdict><entry><r_ele><reb>x</r_ele></entry></JMdict>").unwrap();
    let config = config_in(dir.path(), &input);

    let err = run_conversion(&config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConvertError>(),
        Some(ConvertError::Parse { .. })
    ));
    assert!(!config.output.opus_path.exists());
    assert!(!config.output.mp3_path.exists());
}

#[test]
fn test_missing_output_directory_fails() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let input = dir.path().join("JMdict_e");
    std::fs::write(&input, SAMPLE_JMDICT).unwrap();
    let mut config = config_in(dir.path(), &input);
    config.output.opus_path = dir.path().join("nowhere/jmdict_forms.json");

    let err = run_conversion(&config).unwrap_err();
    assert!(err.to_string().contains("nowhere"));
    assert!(!config.output.mp3_path.exists());
}
