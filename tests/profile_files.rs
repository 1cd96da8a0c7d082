use cyrcipher::{CipherKind, CipherProfile, WhitespacePolicy};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

#[test]
fn profile_survives_disk_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("route.json");
    let mut profile = CipherProfile::new(CipherKind::Route, "3");
    profile.whitespace = WhitespacePolicy::Reject;
    profile.save(&path).unwrap();

    let loaded = CipherProfile::load(&path).unwrap();
    assert_eq!(loaded, profile);
    let engine = loaded.build().unwrap();
    assert_eq!(engine.encrypt("АБВГДЕ").unwrap(), "АГБДВЕ");
}

#[test]
fn malformed_profile_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{\"cipher\":\"enigma\"}").unwrap();
    let err = CipherProfile::load(&path).unwrap_err();
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn missing_profile_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(CipherProfile::load(&dir.path().join("absent.json")).is_err());
}
