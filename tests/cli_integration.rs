use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn roster(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.env("ROSTER_HOME", home);
    cmd
}

fn add(home: &Path, name: &str, id: &str, email: &str, contact: &str) {
    roster(home)
        .args([
            "add", "--name", name, "--id", id, "--email", email, "--contact", contact,
        ])
        .assert()
        .success()
        .stdout(predicates::str::contains("Student registered successfully!"));
}

#[test]
fn test_add_then_list_across_processes() {
    let temp_dir = tempfile::tempdir().unwrap();
    add(temp_dir.path(), "Ann Lee", "101", "ann@uni.edu", "5550001111");

    // A separate invocation must see the persisted record.
    roster(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Student Name"))
        .stdout(predicates::str::contains("Ann Lee"))
        .stdout(predicates::str::contains("101"))
        .stdout(predicates::str::contains("ann@uni.edu"));
}

#[test]
fn test_list_when_empty() {
    let temp_dir = tempfile::tempdir().unwrap();
    roster(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No students found."));
}

#[test]
fn test_add_rejects_invalid_draft() {
    let temp_dir = tempfile::tempdir().unwrap();
    roster(temp_dir.path())
        .args([
            "add",
            "--name",
            "Ann the 3rd",
            "--id",
            "101",
            "--email",
            "ann@uni.edu",
            "--contact",
            "5550001111",
        ])
        .assert()
        .failure()
        .stderr(predicates::str::contains(
            "Name should contain only letters and spaces",
        ));

    // Nothing was stored.
    roster(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No students found."));
}

#[test]
fn test_duplicate_id_rejected_across_runs() {
    let temp_dir = tempfile::tempdir().unwrap();
    add(temp_dir.path(), "Ann Lee", "101", "ann@uni.edu", "5550001111");

    roster(temp_dir.path())
        .args([
            "add",
            "--name",
            "Bob Stone",
            "--id",
            "101",
            "--email",
            "bob@uni.edu",
            "--contact",
            "5550002222",
        ])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Student ID already exists"));

    roster(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Ann Lee"))
        .stdout(predicates::str::contains("Bob Stone").not());
}

#[test]
fn test_edit_merges_flags_over_current_values() {
    let temp_dir = tempfile::tempdir().unwrap();
    add(temp_dir.path(), "Ann Lee", "101", "ann@uni.edu", "5550001111");

    // Only the name changes; id, email and contact carry over.
    roster(temp_dir.path())
        .args(["edit", "101", "--name", "Mary Jane"])
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Student record updated successfully!",
        ));

    roster(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Mary Jane"))
        .stdout(predicates::str::contains("ann@uni.edu"))
        .stdout(predicates::str::contains("Ann Lee").not());
}

#[test]
fn test_edit_can_change_the_id_itself() {
    let temp_dir = tempfile::tempdir().unwrap();
    add(temp_dir.path(), "Ann Lee", "101", "ann@uni.edu", "5550001111");

    roster(temp_dir.path())
        .args(["edit", "101", "--id", "500"])
        .assert()
        .success();

    roster(temp_dir.path())
        .args(["edit", "500", "--name", "Ann Stone"])
        .assert()
        .success();

    roster(temp_dir.path())
        .args(["edit", "101", "--name", "Ghost"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("No student with ID 101"));
}

#[test]
fn test_edit_rejection_leaves_the_record_alone() {
    let temp_dir = tempfile::tempdir().unwrap();
    add(temp_dir.path(), "Ann Lee", "101", "ann@uni.edu", "5550001111");
    add(temp_dir.path(), "Bob Stone", "202", "bob@uni.edu", "5550002222");

    // Taking Bob's id fails uniqueness.
    roster(temp_dir.path())
        .args(["edit", "101", "--id", "202"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Student ID already exists"));

    roster(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Ann Lee"))
        .stdout(predicates::str::contains("101"));
}

#[test]
fn test_delete_prompts_and_respects_no() {
    let temp_dir = tempfile::tempdir().unwrap();
    add(temp_dir.path(), "Ann Lee", "101", "ann@uni.edu", "5550001111");

    roster(temp_dir.path())
        .args(["delete", "101"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Operation cancelled."));

    roster(temp_dir.path())
        .args(["delete", "101"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Student record deleted successfully!",
        ));

    roster(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No students found."));
}

#[test]
fn test_delete_with_yes_skips_the_prompt() {
    let temp_dir = tempfile::tempdir().unwrap();
    add(temp_dir.path(), "Ann Lee", "101", "ann@uni.edu", "5550001111");

    roster(temp_dir.path())
        .args(["delete", "101", "--yes"])
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Student record deleted successfully!",
        ));
}

#[test]
fn test_delete_unknown_id_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    roster(temp_dir.path())
        .args(["delete", "999", "--yes"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("No student with ID 999"));
}

#[test]
fn test_search_filters_case_insensitively() {
    let temp_dir = tempfile::tempdir().unwrap();
    add(temp_dir.path(), "Ann Lee", "101", "ann@uni.edu", "5550001111");
    add(temp_dir.path(), "Bob Stone", "202", "bob@uni.edu", "5550002222");

    roster(temp_dir.path())
        .args(["search", "ANN"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Ann Lee"))
        .stdout(predicates::str::contains("Bob Stone").not());

    roster(temp_dir.path())
        .args(["list", "--search", "bob@"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Bob Stone"))
        .stdout(predicates::str::contains("Ann Lee").not());

    roster(temp_dir.path())
        .args(["search", "zzz"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No students found."));
}

#[test]
fn test_clear_prompts_and_respects_no() {
    let temp_dir = tempfile::tempdir().unwrap();
    add(temp_dir.path(), "Ann Lee", "101", "ann@uni.edu", "5550001111");

    roster(temp_dir.path())
        .arg("clear")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Operation cancelled."));

    roster(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Ann Lee"));
}

#[test]
fn test_clear_removes_everything() {
    let temp_dir = tempfile::tempdir().unwrap();
    add(temp_dir.path(), "Ann Lee", "101", "ann@uni.edu", "5550001111");
    add(temp_dir.path(), "Bob Stone", "202", "bob@uni.edu", "5550002222");

    roster(temp_dir.path())
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "All student records have been cleared!",
        ));

    roster(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No students found."));
}

#[test]
fn test_export_writes_csv() {
    let temp_dir = tempfile::tempdir().unwrap();
    add(temp_dir.path(), "Ann Lee", "101", "ann@uni.edu", "5550001111");

    let out = temp_dir.path().join("out.csv");
    roster(temp_dir.path())
        .arg("export")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicates::str::contains("Exported 1 record(s)"));

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("Student Name,Student ID,Email,Contact Number\n"));
    assert!(content.contains("Ann Lee,101,ann@uni.edu,5550001111"));
}

#[test]
fn test_export_defaults_to_configured_file_name() {
    let temp_dir = tempfile::tempdir().unwrap();
    add(temp_dir.path(), "Ann Lee", "101", "ann@uni.edu", "5550001111");

    roster(temp_dir.path())
        .current_dir(temp_dir.path())
        .arg("export")
        .assert()
        .success();

    assert!(temp_dir.path().join("students_data.csv").exists());
}

#[test]
fn test_export_refuses_an_empty_roster() {
    let temp_dir = tempfile::tempdir().unwrap();
    roster(temp_dir.path())
        .current_dir(temp_dir.path())
        .arg("export")
        .assert()
        .failure()
        .stderr(predicates::str::contains("No data to export!"));
}

#[test]
fn test_config_show_set_and_reject_unknown() {
    let temp_dir = tempfile::tempdir().unwrap();

    roster(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicates::str::contains("data_file = students.json"))
        .stdout(predicates::str::contains("export_file = students_data.csv"));

    roster(temp_dir.path())
        .args(["config", "export_file", "out.csv"])
        .assert()
        .success()
        .stdout(predicates::str::contains("export_file set to out.csv"));

    roster(temp_dir.path())
        .args(["config", "export_file"])
        .assert()
        .success()
        .stdout(predicates::str::contains("out.csv"));

    roster(temp_dir.path())
        .args(["config", "bogus"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Unknown config key: bogus"));
}

#[test]
fn test_corrupt_config_file_falls_back_to_defaults() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("config.json"), "{ not json").unwrap();

    // Every command still runs on the default config.
    roster(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No students found."));

    // Setting a key rewrites the file, so the config repairs itself.
    roster(temp_dir.path())
        .args(["config", "export_file", "out.csv"])
        .assert()
        .success()
        .stdout(predicates::str::contains("export_file set to out.csv"));

    roster(temp_dir.path())
        .args(["config", "export_file"])
        .assert()
        .success()
        .stdout(predicates::str::contains("out.csv"));
}

#[test]
fn test_corrupt_data_file_resets_to_empty() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("students.json"), "{ definitely not json").unwrap();

    roster(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No students found."));

    // The roster is usable again after the reset.
    add(temp_dir.path(), "Ann Lee", "101", "ann@uni.edu", "5550001111");
    roster(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Ann Lee"));
}
