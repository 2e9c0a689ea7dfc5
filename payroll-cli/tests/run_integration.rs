//! End-to-end runs against on-disk fixtures, both through the library entry
//! point and through the `payroll` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use payroll_cli::{AppError, RunOptions, run};
use payroll_data::ErrorKind;
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A fresh, empty directory per test so runs never see each other's output.
fn scratch_dir(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("payroll-cli-{}-{test}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

fn options(
    config: &str,
    userdata: &str,
    output: &Path,
) -> RunOptions {
    RunOptions {
        config: fixture(config),
        userdata: fixture(userdata),
        output: output.to_path_buf(),
        tax_table: None,
    }
}

const STANDARD_OUTPUT: &str = "\
101,6000,630.00,82.00,5288.00
102,3000,315.00,0.00,2685.00
103,30000,2625.00,4963.75,22411.25
104,100000,2625.00,28738.75,68636.25
";

#[test]
fn test_run_writes_results_in_input_order() {
    let output = scratch_dir("run_ok").join("out.csv");

    let summary = run(&options("config.cfg", "userdata.csv", &output)).expect("run succeeds");

    assert_eq!(summary.employees, 4);
    assert_eq!(summary.output, output);
    assert_eq!(fs::read_to_string(&output).unwrap(), STANDARD_OUTPUT);
}

#[test]
fn test_run_with_tax_table_file() {
    let output = scratch_dir("run_table").join("out.csv");
    let options = RunOptions {
        tax_table: Some(fixture("tax_table_2019.toml")),
        ..options("config.cfg", "userdata.csv", &output)
    };

    run(&options).expect("run succeeds");

    let written = fs::read_to_string(&output).unwrap();
    let first = written.lines().next().unwrap();
    assert_eq!(first, "101,6000,630.00,11.10,5358.90");
}

#[test]
fn test_missing_config_key_stops_before_employee_data() {
    let output = scratch_dir("missing_key").join("out.csv");
    // The employee file does not exist; a config error must be reported
    // first.
    let options = options("config_missing_rate.cfg", "no_such_userdata.csv", &output);

    let err = run(&options).unwrap_err();

    assert!(matches!(err, AppError::Config(_)));
    assert_eq!(err.kind(), ErrorKind::Config);
    assert_eq!(
        err.to_string(),
        "Config Error: required key 'ShengYu' is missing"
    );
    assert!(!output.exists());
}

#[test]
fn test_fractional_income_writes_no_output() {
    let output = scratch_dir("bad_income").join("out.csv");

    let err = run(&options("config.cfg", "userdata_bad_income.csv", &output)).unwrap_err();

    assert!(matches!(err, AppError::Employees(_)));
    assert_eq!(err.kind(), ErrorKind::Parameter);
    assert!(err.to_string().starts_with("Parameter Error: "));
    assert!(!output.exists());
}

#[test]
fn test_missing_config_file_is_parameter_error() {
    let output = scratch_dir("no_config").join("out.csv");

    let err = run(&options("no_such_config.cfg", "userdata.csv", &output)).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parameter);
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output_is_output_error() {
    let output = scratch_dir("bad_output").join("missing-dir").join("out.csv");

    let err = run(&options("config.cfg", "userdata.csv", &output)).unwrap_err();

    assert!(matches!(err, AppError::Output(_)));
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_config_beyond_decimal_range_is_rejected_before_computing() {
    let dir = scratch_dir("huge_config");
    let config = dir.join("huge.cfg");
    let userdata = dir.join("userdata.csv");
    let output = dir.join("out.csv");
    fs::write(
        &config,
        "JiShuL = 70000000000000000000000000000\n\
         JiShuH = 70000000000000000000000000000\n\
         YangLao = 2\n\
         YiLiao = 0\n\
         ShiYe = 0\n\
         GongShang = 0\n\
         ShengYu = 0\n\
         GongJiJin = 0\n",
    )
    .unwrap();
    fs::write(&userdata, "1,9000000000000000000\n").unwrap();

    let err = run(&RunOptions {
        config,
        userdata,
        output: output.clone(),
        tax_table: None,
    })
    .unwrap_err();

    assert!(matches!(err, AppError::Config(_)));
    assert_eq!(err.kind(), ErrorKind::Parameter);
    assert!(!output.exists());
}

#[test]
fn test_extreme_incomes_are_computed() {
    let dir = scratch_dir("extreme_income");
    let userdata = dir.join("userdata.csv");
    let output = dir.join("out.csv");
    fs::write(
        &userdata,
        format!("min,{}\nmax,{}\n", i64::MIN, i64::MAX),
    )
    .unwrap();

    let summary = run(&RunOptions {
        config: fixture("config.cfg"),
        userdata,
        output: output.clone(),
        tax_table: None,
    })
    .expect("run succeeds");

    assert_eq!(summary.employees, 2);
    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("min,-9223372036854775808,315.00,0.00,"));
    assert!(written.contains("\nmax,9223372036854775807,2625.00,"));
}

// --- Binary ---

fn payroll() -> Command {
    Command::new(env!("CARGO_BIN_EXE_payroll"))
}

#[test]
fn test_binary_success() {
    let output = scratch_dir("bin_ok").join("out.csv");

    let status = payroll()
        .arg("-c")
        .arg(fixture("config.cfg"))
        .arg("-d")
        .arg(fixture("userdata.csv"))
        .arg("-o")
        .arg(&output)
        .arg("--log-level")
        .arg("warn")
        .status()
        .expect("spawn payroll");

    assert!(status.success());
    assert_eq!(fs::read_to_string(&output).unwrap(), STANDARD_OUTPUT);
}

#[test]
fn test_binary_reports_config_error() {
    let output = scratch_dir("bin_config").join("out.csv");

    let result = payroll()
        .arg("-c")
        .arg(fixture("config_missing_rate.cfg"))
        .arg("-d")
        .arg(fixture("userdata.csv"))
        .arg("-o")
        .arg(&output)
        .output()
        .expect("spawn payroll");

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Config Error"), "stderr was: {stderr}");
    assert!(!output.exists());
}

#[test]
fn test_binary_rejects_missing_arguments() {
    let result = payroll()
        .arg("-c")
        .arg(fixture("config.cfg"))
        .output()
        .expect("spawn payroll");

    assert!(!result.status.success());
    assert_eq!(result.status.code(), Some(2));
}

#[test]
fn test_binary_writes_log_file() {
    let dir = scratch_dir("bin_log");
    let output = dir.join("out.csv");
    let log = dir.join("payroll.log");

    let status = payroll()
        .arg("-c")
        .arg(fixture("config.cfg"))
        .arg("-d")
        .arg(fixture("userdata.csv"))
        .arg("-o")
        .arg(&output)
        .arg("--log-level")
        .arg("info")
        .arg("--log-file")
        .arg(&log)
        .status()
        .expect("spawn payroll");

    assert!(status.success());
    let logged = fs::read_to_string(&log).unwrap();
    assert!(logged.contains("loaded employees"), "log was: {logged}");
    assert!(!logged.contains("\x1b["), "log file must be plain text");
}
