//! Runs the built binary against the bundled sample gazetteer.

use std::path::PathBuf;
use std::process::{Command, Output};

fn core_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../addrcheck-core")
}

fn addrcheck(args: &[&str]) -> Output {
    let data = core_dir().join("data");
    Command::new(env!("CARGO_BIN_EXE_addrcheck"))
        .arg("--cities")
        .arg(data.join("geonames_cities.json"))
        .arg("--countries")
        .arg(data.join("geonames_countries.json"))
        .args(args)
        .output()
        .expect("failed to run addrcheck")
}

fn stdout(out: &Output) -> String {
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8_lossy(&out.stdout).trim().to_string()
}

#[test]
fn plausible_prints_bool() {
    let out = addrcheck(&["plausible", "175-4 Street, Asmara, Maekel Region, Eritrea"]);
    assert_eq!(stdout(&out), "true");
    let out = addrcheck(&["plausible", "Asmara, Eritrea"]);
    assert_eq!(stdout(&out), "false");
}

#[test]
fn extract_reports_city_and_country() {
    let out = addrcheck(&["extract", "some street 5, asmara, eritrea"]);
    let text = stdout(&out);
    assert!(text.contains("City: asmara"), "{text}");
    assert!(text.contains("Country: eritrea"), "{text}");
}

#[test]
fn validate_handles_disputed_regions() {
    let out = addrcheck(&["validate", "Avenue de Smara 14, Laayoune, Morocco", "Western Sahara"]);
    assert_eq!(stdout(&out), "true");
}

#[test]
fn score_from_saved_results() {
    let fixture = core_dir().join("tests/fixtures/nominatim_asmara.json");
    let out = addrcheck(&[
        "score",
        "Bristol Pension, 9, Beleza Street, Asmara, Maekel Region, Eritrea",
        "--results",
        fixture.to_str().unwrap(),
    ]);
    let text = stdout(&out);
    assert!(text.starts_with("Score: 0.7"), "{text}");
}

#[test]
fn missing_gazetteer_fails_loudly() {
    let out = Command::new(env!("CARGO_BIN_EXE_addrcheck"))
        .args(["--cities", "/no/such/cities.json", "stats"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("gazetteer load failed"));
}
