use roman_minimizer::{
    savings, LocalStorage, ReportFormat, SavingsEngine, SavingsPipeline, SavingsReport,
    TomlConfig,
};
use tempfile::TempDir;

const SAMPLE: &str = "XIIIIII\nVIIIIIIIIIII\nMCMXCIV\nIIII\nMMMMDCLXXII\nMMDCCCLXXXIIII\n";

fn write_input(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("roman.txt");
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[tokio::test]
async fn test_end_to_end_total_matches_individual_savings() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, SAMPLE);

    let mut config = TomlConfig::default();
    config.set_input(input);

    let pipeline = SavingsPipeline::new(LocalStorage::default(), config);
    let report = SavingsEngine::new(pipeline).run().await.unwrap();

    let expected: i64 = SAMPLE.lines().map(|l| savings(l).unwrap()).sum();
    assert_eq!(report.total_saved, expected);
    assert_eq!(report.lines, 6);
    assert_eq!(report.details[4].minimal, "MMMMDCLXXII");
    assert_eq!(report.details[5].minimal, "MMDCCCLXXXIV");
}

#[tokio::test]
async fn test_end_to_end_json_report() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "XIIIIII\nIIII\n");
    let report_path = temp_dir.path().join("out").join("savings.json");

    let mut config = TomlConfig::default();
    config.set_input(input);
    config.set_report(report_path.to_str().unwrap());
    config.set_report_format(ReportFormat::Json);

    let pipeline = SavingsPipeline::new(LocalStorage::default(), config);
    let report = SavingsEngine::new(pipeline).run().await.unwrap();
    assert_eq!(report.total_saved, 6);

    let written: SavingsReport =
        serde_json::from_slice(&std::fs::read(&report_path).unwrap()).unwrap();
    assert_eq!(written, report);
}

#[tokio::test]
async fn test_missing_input_produces_no_report() {
    let temp_dir = TempDir::new().unwrap();
    let report_path = temp_dir.path().join("savings.csv");

    let mut config = TomlConfig::default();
    config.set_input(temp_dir.path().join("absent.txt").to_str().unwrap());
    config.set_report(report_path.to_str().unwrap());

    let pipeline = SavingsPipeline::new(LocalStorage::default(), config);
    let err = SavingsEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, roman_minimizer::RomanError::SourceUnavailable { .. }));
    assert!(!report_path.exists());
}
