use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn bin(config: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("diffTable").unwrap();
    cmd.arg("--config").arg(config).env("DIFFTABLE_LOG", "off");
    cmd
}

#[test]
fn dump_prints_sections_and_people() {
    let td = tempdir().unwrap();
    let out = bin(&td.path().join("settings.toml"))
        .args(["--seed", "7", "--people", "5", "--dump"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("A to Z\n"))
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    let people = text.lines().filter(|l| l.starts_with("  ")).count();
    assert_eq!(people, 5, "{text}");
    let headers: Vec<&str> = text.lines().skip(1).filter(|l| !l.starts_with(' ')).collect();
    let mut sorted = headers.clone();
    sorted.sort();
    assert_eq!(headers, sorted, "{text}");
}

#[test]
fn dump_is_reproducible_for_a_seed() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("settings.toml");
    let run = || {
        bin(&cfg)
            .args(["--seed", "11", "--people", "8", "--dump"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn dump_by_team_as_json() {
    let td = tempdir().unwrap();
    let out = bin(&td.path().join("settings.toml"))
        .args(["--seed", "3", "--people", "6", "--strategy", "team", "--dump", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let sections = value.as_array().expect("array of sections");
    let mut total = 0;
    for s in sections {
        let key = s["key"].as_str().unwrap();
        assert!(["Blue", "Green", "Red"].contains(&key), "{key}");
        let items = s["items"].as_array().unwrap();
        assert!(!items.is_empty());
        for item in items {
            assert_eq!(item["team"].as_str().unwrap().to_uppercase(), key.to_uppercase());
        }
        total += items.len();
    }
    assert_eq!(total, 6);
}

#[test]
fn descending_dump_reverses_letters() {
    let td = tempdir().unwrap();
    bin(&td.path().join("settings.toml"))
        .args(["--seed", "7", "--people", "3", "--descending", "--dump"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Z to A\n"));
}

#[test]
fn save_config_writes_the_file() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("nested").join("settings.toml");
    bin(&cfg)
        .args(["--people", "2", "--save-config", "--dump"])
        .assert()
        .success();
    let text = std::fs::read_to_string(&cfg).unwrap();
    assert!(text.contains("seed_people = 2"), "{text}");
}

#[test]
fn json_requires_dump() {
    let td = tempdir().unwrap();
    bin(&td.path().join("settings.toml"))
        .arg("--json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--dump"));
}
