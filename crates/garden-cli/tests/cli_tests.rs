use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color against `db_arg`
fn garden_cmd(db_arg: &str) -> Command {
    let mut cmd = Command::cargo_bin("garden").expect("Failed to find garden binary");
    cmd.args(["--no-color", "--database-file", db_arg]);
    cmd
}

/// Extract the first "Created ... with ID: N" identifier from output
fn extract_id_from_output(output: &str) -> String {
    let start = output.find("ID: ").expect("No ID in output") + 4;
    output[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect()
}

fn run_for_id(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    extract_id_from_output(&String::from_utf8(output).expect("Invalid UTF-8"))
}

#[test]
fn test_cli_create_and_show_bed() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let bed_id = run_for_id(garden_cmd(db_arg).args([
        "bed",
        "create",
        "Herb Spiral",
        "3x6",
        "--notes",
        "Morning sun",
    ]));
    assert_eq!(bed_id, "1");

    garden_cmd(db_arg)
        .args(["bed", "show", &bed_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. Herb Spiral"))
        .stdout(predicate::str::contains("Area: 18 sq ft"))
        .stdout(predicate::str::contains("Morning sun"))
        .stdout(predicate::str::contains("No plants in this bed."));
}

#[test]
fn test_cli_list_empty_beds() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    garden_cmd(db_path.to_str().unwrap())
        .args(["bed", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No garden beds found."));
}

#[test]
fn test_cli_rejects_bad_dimensions() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    garden_cmd(db_path.to_str().unwrap())
        .args(["bed", "create", "Broken", "4 by 8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("dimensions"));
}

#[test]
fn test_cli_update_bed_keeps_unspecified_fields() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let bed_id = run_for_id(garden_cmd(db_arg).args(["bed", "create", "North", "4x8"]));

    garden_cmd(db_arg)
        .args(["bed", "update", &bed_id, "--name", "North Bed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: North Bed"))
        .stdout(predicate::str::contains("Dimensions: 4x8"));

    garden_cmd(db_arg)
        .args(["bed", "update", &bed_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes specified"));
}

#[test]
fn test_cli_plant_lifecycle_and_harvest() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let bed_id = run_for_id(garden_cmd(db_arg).args(["bed", "create", "Kitchen", "4x8"]));
    let location = format!("Bed {bed_id}");
    let plant_id = run_for_id(garden_cmd(db_arg).args([
        "plant",
        "create",
        "Tomato",
        &location,
        "--planted",
        "2025-04-20",
        "--variety",
        "Sungold",
        "--quantity",
        "2",
    ]));

    // Harvesting a PLANTED plant is refused
    garden_cmd(db_arg)
        .args(["harvest", "add", &plant_id, "1.5", "--date", "2025-07-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("FLOWERING or HARVESTING"));

    // Skipping a stage is refused
    garden_cmd(db_arg)
        .args(["plant", "status", &plant_id, "flowering"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SPROUTED"));

    for _ in 0..2 {
        garden_cmd(db_arg)
            .args(["plant", "advance", &plant_id])
            .assert()
            .success();
    }

    garden_cmd(db_arg)
        .args([
            "harvest", "add", &plant_id, "24", "--unit", "oz", "--date", "2025-07-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created harvest with ID: 1"));

    garden_cmd(db_arg)
        .args(["plant", "show", &plant_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tomato (Sungold)"))
        .stdout(predicate::str::contains("Harvesting"));

    garden_cmd(db_arg)
        .args(["harvest", "list", &plant_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("**Total**: 1.50 lbs"));

    garden_cmd(db_arg)
        .args(["plant", "update", &plant_id, "--clear-variety"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Variety cleared"));

    garden_cmd(db_arg)
        .args(["plant", "show", &plant_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sungold").not());

    garden_cmd(db_arg)
        .args([
            "plant",
            "update",
            &plant_id,
            "--variety",
            "Roma",
            "--clear-variety",
        ])
        .assert()
        .failure();
}

#[test]
fn test_cli_plant_in_missing_bed() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    garden_cmd(db_path.to_str().unwrap())
        .args(["plant", "create", "Kale", "Bed 42", "--planted", "2025-03-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Garden bed with ID 42 not found"));
}

#[test]
fn test_cli_list_plants_as_json() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let bed_id = run_for_id(garden_cmd(db_arg).args(["bed", "create", "Kitchen", "4x8"]));
    garden_cmd(db_arg)
        .args([
            "plant",
            "create",
            "Garlic",
            &bed_id,
            "--planted",
            "2024-10-15",
            "--season",
            "fall",
            "--year",
            "2024",
        ])
        .assert()
        .success();

    let output = garden_cmd(db_arg)
        .args(["--json", "plant", "list", "--season", "fall"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let plants: serde_json::Value =
        serde_json::from_slice(&output).expect("Output should be valid JSON");
    let plants = plants.as_array().expect("Expected a JSON array");
    assert_eq!(plants.len(), 1);
    assert_eq!(plants[0]["name"], "Garlic");
    assert_eq!(plants[0]["status"], "PLANTED");
    assert_eq!(plants[0]["season"], "FALL");
    assert_eq!(plants[0]["year"], 2024);
}

#[test]
fn test_cli_delete_bed_requires_confirmation() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let bed_id = run_for_id(garden_cmd(db_arg).args(["bed", "create", "Temporary", "2x2"]));

    garden_cmd(db_arg)
        .args(["bed", "delete", &bed_id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--confirm"));

    garden_cmd(db_arg)
        .args(["bed", "delete", &bed_id, "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted garden bed 'Temporary'"));

    garden_cmd(db_arg)
        .args(["bed", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No garden beds found."));
}

#[test]
fn test_cli_stats_commands() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let bed_id = run_for_id(garden_cmd(db_arg).args(["bed", "create", "Kitchen", "4x8"]));
    garden_cmd(db_arg)
        .args([
            "plant", "create", "Bean", &bed_id, "--planted", "2025-05-01", "--quantity", "4",
            "--year", "2025",
        ])
        .assert()
        .success();

    garden_cmd(db_arg)
        .args(["stats", "bed", &bed_id, "--year", "2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("50.0%"));

    garden_cmd(db_arg)
        .args(["stats", "overview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Garden Overview"))
        .stdout(predicate::str::contains("Total plants: 4"));

    garden_cmd(db_arg)
        .args(["stats", "top", "--year", "2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No harvests"));

    garden_cmd(db_arg)
        .args(["stats", "by-year"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025"));

    garden_cmd(db_arg)
        .args(["stats", "dashboard", "--year", "2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Dashboard 2025"));
}

#[test]
fn test_cli_default_command_shows_dashboard() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    garden_cmd(db_path.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("# Dashboard"));
}
