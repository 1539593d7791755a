//! Integration tests driving the `sysport` binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use sysport_config::testing::TestEnvironment;

/// Helper to run sysport inside `env.workdir`
fn sysport(env: &TestEnvironment, args: &[&str]) -> Output {
    sysport_in(env, &env.workdir, args)
}

fn sysport_in(env: &TestEnvironment, cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sysport"))
        .current_dir(cwd)
        .envs(env.command_env())
        .env_remove("SYSPORT_GO")
        .env_remove("SYSPORT_GOROOT")
        .env_remove("SYSPORT_WORKDIR")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute sysport")
}

#[test]
fn test_unix_generates_into_sibling_directory() {
    let env = TestEnvironment::new().unwrap();
    env.write_project_config(
        r#"
[unix]
files = ["pagesize_unix.go", "syscall_linux_arm64.go"]
"#,
    )
    .unwrap();
    let pagesize = b"// Copyright 2017\n\npackage unix\n\nfunc Getpagesize() int\n";
    env.create_source("pagesize_unix.go", pagesize).unwrap();
    env.create_source(
        "syscall_linux_arm64.go",
        b"//go:build arm64 && linux\n\npackage unix\n\nimport \"syscall\"\n",
    )
    .unwrap();

    let output = sysport(&env, &["unix"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success(), "stderr: {stderr}");
    assert!(stderr.contains("wrote pagesize_unix__js"));
    assert!(stderr.contains("wrote syscall_js_wasm"));
    assert!(!stderr.contains("wrote pagesize_unix__js.go"));
    // stderr is a pipe here, so no colour codes
    assert!(!stderr.contains('\x1b'), "stderr: {stderr:?}");

    // default output is ../unix, next to the sources
    assert_eq!(
        fs::read(env.source_dir.join("pagesize_unix__js.go")).unwrap(),
        pagesize
    );
    assert_eq!(
        fs::read_to_string(env.source_dir.join("syscall_js_wasm.go")).unwrap(),
        "//go:build js && wasm\n\npackage unix\n\nimport \"golang.org/x/sys/wasm/syscall\"\n"
    );
}

#[test]
fn test_global_tokens_survive_project_config() {
    let env = TestEnvironment::new().unwrap();
    env.write_global_config("[tokens]\ntarget_arch = \"wasm32\"\n")
        .unwrap();
    env.write_project_config(
        "[tokens]\ntarget_os = \"wasip1\"\n\n[unix]\nfiles = [\"syscall_linux_arm64.go\"]\n",
    )
    .unwrap();
    env.create_source(
        "syscall_linux_arm64.go",
        b"//go:build arm64 && linux\n\npackage unix\n",
    )
    .unwrap();

    let output = sysport(&env, &["unix"]);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        fs::read_to_string(env.source_dir.join("syscall_wasip1_wasm32.go")).unwrap(),
        "//go:build wasip1 && wasm32\n\npackage unix\n"
    );
}

#[test]
fn test_missing_source_exits_non_zero() {
    let env = TestEnvironment::new().unwrap();
    env.write_project_config(
        r#"
[unix]
files = ["aliases.go", "bluetooth_linux.go", "constants.go"]
output_dir = "./syscall"
"#,
    )
    .unwrap();
    env.create_source("aliases.go", b"package unix\n").unwrap();
    env.create_source("constants.go", b"package unix\n").unwrap();

    let output = sysport(&env, &["unix"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("bluetooth_linux.go"));
    assert!(env.output_dir.join("aliases__js.go").exists());
    assert!(!env.output_dir.join("constants__js.go").exists());
}

#[test]
fn test_workdir_flag_changes_relative_paths() {
    let env = TestEnvironment::new().unwrap();
    env.create_source("fdset.go", b"//go:build linux\n\npackage unix\n")
        .unwrap();

    let config_path = env.home.join("sysport.toml");
    fs::write(
        &config_path,
        "[unix]\nfiles = [\"fdset.go\"]\noutput_dir = \"syscall\"\n",
    )
    .unwrap();

    let workdir = env.workdir.display().to_string();
    let config = config_path.display().to_string();
    let output = sysport_in(
        &env,
        &env.home,
        &["--config", &config, "-C", &workdir, "unix"],
    );

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        fs::read_to_string(env.output_dir.join("fdset__js.go")).unwrap(),
        "//go:build js\n\npackage unix\n"
    );
}

#[test]
fn test_syscall_with_explicit_goroot() {
    let env = TestEnvironment::new().unwrap();
    let goroot = env.home.join("go");
    let src = goroot.join("src/syscall");
    fs::create_dir_all(&src).unwrap();
    fs::write(
        src.join("syscall_linux.go"),
        "//go:build linux && !msan\n\npackage syscall\n\nimport \"syscall\"\n",
    )
    .unwrap();
    env.write_project_config("[syscall]\nfiles = [\"syscall_linux.go\"]\n")
        .unwrap();

    let goroot_arg = goroot.display().to_string();
    let output = sysport(&env, &["syscall", "--goroot", &goroot_arg]);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    // syscall catalog keeps its own imports
    assert_eq!(
        fs::read_to_string(env.output_dir.join("syscall_js.go")).unwrap(),
        "//go:build js && !msan\n\npackage syscall\n\nimport \"syscall\"\n"
    );
}

#[test]
fn test_syscall_fails_when_toolchain_missing() {
    let env = TestEnvironment::new().unwrap();
    env.write_project_config("[syscall]\nfiles = [\"net.go\"]\n")
        .unwrap();

    let output = sysport(&env, &["syscall", "--go", "/nonexistent/bin/go"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("env GOROOT"));
    assert!(!env.output_dir.join("net__js.go").exists());
}

#[test]
fn test_catalog_lists_derived_names() {
    let env = TestEnvironment::new().unwrap();
    let output = sysport(&env, &["catalog", "syscall"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert_eq!(stdout.lines().count(), 29);
    assert_eq!(stdout.lines().next(), Some("asan0.go -> asan0__js.go"));
    assert!(stdout.contains("syscall_linux_arm64.go -> syscall_js_wasm.go"));
    assert!(stdout.contains("sockcmsg_unix_other.go -> sockcmsg_unix_other__js.go"));
}

#[test]
fn test_catalog_rejects_unknown_name() {
    let env = TestEnvironment::new().unwrap();
    let output = sysport(&env, &["catalog", "darwin"]);
    assert!(!output.status.success());
}

#[test]
fn test_config_show_outputs_toml() {
    let env = TestEnvironment::new().unwrap();
    let output = sysport(&env, &["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("[toolchain]"));
    assert!(stdout.contains("[tokens]"));
    assert!(stdout.contains("[unix]"));
}

#[test]
fn test_config_path() {
    let env = TestEnvironment::new().unwrap();
    let output = sysport(&env, &["config", "path"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Global:"));
    assert!(stdout.contains(".sysport/config.toml"));
    assert!(stdout.contains("Project:"));
}
