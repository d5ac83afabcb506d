use std::path::PathBuf;
use std::process::Command;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

fn write_plan(dir: &PathBuf) -> PathBuf {
    let path = dir.join("plan.json");
    std::fs::write(
        &path,
        r#"{
            "divide_schedule": { "horizontal_divider": 3, "vertical_divider": 3 },
            "blocks": {
                "0": { "visit_route": ["0,0", "0,1", "0,2"] },
                "1": { "visit_route": ["80,300"] }
            }
        }"#,
    )
    .unwrap();
    path
}

#[test]
fn lists_selection_and_writes_image() {
    let dir = temp_dir("splatmap_cli_bin_list");
    let plan = write_plan(&dir);
    let out = dir.join("sel.png");

    let output = Command::new(env!("CARGO_BIN_EXE_splatmap"))
        .arg(&plan)
        .args(["--select", "0,0", "--select", "80,300", "--list", "--no-metadata"])
        .arg("--config")
        .arg(dir.join("prefs.json"))
        .arg("--output")
        .arg(&out)
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    // 120 / 3 = 40 rows, 320 / 3 = 106 cols with the last column taking 108.
    assert_eq!(
        stdout,
        "0\trows 0..40\tcols 0..106\n8\trows 80..120\tcols 212..320\n"
    );
    assert!(out.exists());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn out_of_canvas_pixel_fails() {
    let dir = temp_dir("splatmap_cli_bin_oob");
    let plan = write_plan(&dir);

    let output = Command::new(env!("CARGO_BIN_EXE_splatmap"))
        .arg(&plan)
        .args(["--select", "0,320"])
        .arg("--config")
        .arg(dir.join("prefs.json"))
        .arg("--output")
        .arg(dir.join("never.png"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!dir.join("never.png").exists());
    let _ = std::fs::remove_dir_all(&dir);
}
