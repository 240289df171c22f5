use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn verbose_flag_prints_usage_and_exits_one() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("-v")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn unknown_flag_exits_one() {
    let ctx = TestContext::new();

    ctx.cli().arg("-x").assert().failure().code(1).stderr(predicate::str::contains("-x"));
}

#[test]
fn missing_mode_exits_one() {
    let ctx = TestContext::new();

    ctx.cli().assert().failure().code(1).stderr(predicate::str::contains("Usage:"));
}

#[test]
fn create_without_ids_exits_one() {
    let ctx = TestContext::new();

    ctx.cli().arg("-i").assert().failure().code(1);
    ctx.cli().arg("-d").assert().failure().code(1);
}

#[test]
fn conflicting_modes_exit_one() {
    let ctx = TestContext::new();

    ctx.cli().args(["-i", "1", "-d", "1"]).assert().failure().code(1);
    ctx.assert_instance_absent(1);
}

#[test]
fn help_exits_zero() {
    let ctx = TestContext::new();

    ctx.cli().arg("--help").assert().success().stdout(predicate::str::contains("-i <ID>"));
}

#[test]
fn explicit_missing_config_is_an_error() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--config", "absent.toml", "-l"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn invalid_config_is_reported() {
    let ctx = TestContext::new();
    ctx.write_config("[naming]\nbase_port = 0\n");

    ctx.cli()
        .arg("-l")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("base_port"));
}
