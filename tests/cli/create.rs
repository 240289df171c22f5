use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn create_provisions_instance_with_qualified_names_and_port() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["-i", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created instance 3"))
        .stdout(predicate::str::contains("port 5003"));

    ctx.assert_instance_present(3);
    assert!(ctx.config_dir(3).join("config.yaml").is_file());
    assert!(ctx.install_dir(3).join("venv/bin/octoprint").is_file());

    let init = ctx.read(&ctx.init_script(3));
    assert!(init.contains("# Provides:          octoprint3"));
    assert!(init.contains("DAEMON=/home/pi/OctoPrint3/venv/bin/octoprint"));
    assert!(!init.contains("octoprint.bck"));
    assert!(!init.contains("OctoPrint.bck"));

    let defaults = ctx.read(&ctx.default_env(3));
    assert!(defaults.contains("PORT=5003\n"));
    assert!(defaults.contains("BASEDIR=/home/pi/.octoprint3\n"));
    assert!(!defaults.contains("5000"));
    assert!(!defaults.contains(".bck"));
}

#[cfg(unix)]
#[test]
fn create_keeps_init_script_executable() {
    use std::os::unix::fs::PermissionsExt;

    let ctx = TestContext::new();
    ctx.create(&[1]);

    let mode = fs::metadata(ctx.init_script(1)).unwrap().permissions().mode();
    assert_eq!(mode & 0o111, 0o111, "init script should stay executable");
}

#[test]
fn create_twice_leaves_single_create_state() {
    let ctx = TestContext::new();
    ctx.create(&[5]);
    let first_init = ctx.read(&ctx.init_script(5));
    let first_defaults = ctx.read(&ctx.default_env(5));
    fs::write(ctx.install_dir(5).join("stale.pid"), "42").unwrap();

    ctx.cli()
        .args(["-i", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Replaced existing instance 5"));

    assert!(!ctx.install_dir(5).join("stale.pid").exists());
    assert_eq!(ctx.read(&ctx.init_script(5)), first_init);
    assert_eq!(ctx.read(&ctx.default_env(5)), first_defaults);
}

#[test]
fn create_leaves_other_identifiers_untouched() {
    let ctx = TestContext::new();
    ctx.create(&[4]);
    fs::write(ctx.default_env(4), "PORT=1234\n").unwrap();

    ctx.create(&[2, 3]);

    ctx.assert_instance_present(2);
    ctx.assert_instance_present(3);
    assert_eq!(ctx.read(&ctx.default_env(4)), "PORT=1234\n");
    assert!(ctx.read(&ctx.default_env(2)).contains("PORT=5002\n"));
    assert!(ctx.read(&ctx.default_env(3)).contains("PORT=5003\n"));
}

#[test]
fn create_fails_cleanly_when_template_is_missing() {
    let ctx = TestContext::new();
    fs::remove_dir_all(ctx.work_dir().join("octoprint_backup_directories/OctoPrint.bck")).unwrap();

    ctx.cli()
        .args(["-i", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Template not found"));

    ctx.assert_instance_absent(1);
}

#[cfg(unix)]
#[test]
fn failed_registration_rolls_back_instance() {
    let ctx = TestContext::new();
    ctx.write_config("[service]\nenabled = true\ncommand = \"false\"\n");

    ctx.cli()
        .args(["-i", "6"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("rolled back"))
        .stderr(predicate::str::contains("false octoprint6 defaults"));

    ctx.assert_instance_absent(6);
}

#[cfg(unix)]
#[test]
fn successful_registration_runs_configured_command() {
    let ctx = TestContext::new();
    ctx.write_config("[service]\nenabled = true\ncommand = \"true\"\n");

    ctx.create(&[7]);
    ctx.assert_instance_present(7);
}

#[cfg(unix)]
#[test]
fn create_stops_at_first_failure_but_keeps_earlier_instances() {
    let ctx = TestContext::new();
    let script = ctx.work_dir().join("register.sh");
    fs::write(&script, "[ \"$1\" != octoprint2 ]\n").unwrap();
    ctx.write_config(&format!("[service]\ncommand = \"sh {}\"\n", script.display()));

    ctx.cli()
        .args(["-i", "1", "2", "3"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Created instance 1"))
        .stderr(predicate::str::contains("instance 2"));

    ctx.assert_instance_present(1);
    ctx.assert_instance_absent(2);
    ctx.assert_instance_absent(3);
}
