use std::io::Write;

use ttyt_hrm::personnel::{
    EmployeeStatus, EmploymentType, Gender, RosterImportError, RosterImporter,
};

const ROSTER_BYTES: &[u8] = include_bytes!("../roster_sample.csv");

#[test]
fn bundled_sample_matches_shipped_file() {
    let from_bytes = RosterImporter::from_reader(ROSTER_BYTES).expect("roster imports");
    let sample = RosterImporter::sample().expect("sample imports");

    assert_eq!(from_bytes, sample);
    assert_eq!(sample.len(), 16);
}

#[test]
fn sample_records_carry_parsed_enumerations() {
    let roster = RosterImporter::sample().expect("sample imports");

    let director = &roster[0];
    assert_eq!(director.full_name, "Nguyễn Văn An");
    assert_eq!(director.gender, Gender::Male);
    assert_eq!(director.employment_type, EmploymentType::PermanentCivilService);
    assert_eq!(director.status, EmployeeStatus::Active);
    assert!(director.is_party_member);
    assert_eq!(director.email.as_deref(), Some("an.nv@ttyt.vn"));

    let resigned = &roster[6];
    assert_eq!(resigned.status, EmployeeStatus::Resigned);
    assert_eq!(resigned.employment_type, EmploymentType::QuotaContract);

    let unknown_birth: Vec<&str> = roster
        .iter()
        .filter(|employee| employee.birth_date().is_none())
        .map(|employee| employee.id.as_str())
        .collect();
    assert_eq!(unknown_birth, vec!["EMP0005", "EMP0015"]);
}

#[test]
fn imports_roster_from_disk() {
    let path = std::env::temp_dir().join(format!("ttyt-hrm-roster-{}.csv", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).expect("temp file created");
        file.write_all(ROSTER_BYTES).expect("roster written");
    }

    let roster = RosterImporter::from_path(&path).expect("roster imports");
    std::fs::remove_file(&path).ok();

    assert_eq!(roster.len(), 16);
    assert_eq!(roster[15].id.as_str(), "EMP0016");
}

#[test]
fn missing_file_reports_io_error() {
    let path = std::env::temp_dir().join("ttyt-hrm-roster-does-not-exist.csv");

    let err = RosterImporter::from_path(&path).expect_err("missing file");

    assert!(matches!(err, RosterImportError::Io(_)));
}
