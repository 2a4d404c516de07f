//
// Copyright (c) 2026 tracefix developers
//
// This file is part of the tracefix-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::process::{Command, Output, Stdio};

pub struct TestPlan {
    pub cmd: String,
    pub args: Vec<String>,
    pub expected_out: String,
    pub expected_err: String,
    pub expected_exit_code: i32,
}

impl TestPlan {
    /// Plan for a sample run that succeeds silently on stderr.
    pub fn new(cmd: &str, args: &[&str], expected_out: &str) -> TestPlan {
        TestPlan {
            cmd: cmd.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            expected_out: expected_out.to_string(),
            expected_err: String::new(),
            expected_exit_code: 0,
        }
    }
}

/// Run a built sample binary with the given environment.
///
/// `RUST_LOG` is cleared first so event records only reach stderr when a
/// test asks for them through `env_vars`.
pub fn run_test_base_with_env(cmd: &str, args: &[String], env_vars: &[(&str, &str)]) -> Output {
    let relpath = if cfg!(debug_assertions) {
        format!("target/debug/{}", cmd)
    } else {
        format!("target/release/{}", cmd)
    };
    let test_bin_path = std::env::current_dir()
        .unwrap()
        .parent()
        .unwrap() // Move up to the workspace root from the current package directory
        .join(relpath);

    let mut command = Command::new(test_bin_path);
    command
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    for (key, value) in env_vars {
        command.env(key, value);
    }

    command
        .output()
        .unwrap_or_else(|_| panic!("failed to spawn command {cmd}"))
}

pub fn run_test_base(cmd: &str, args: &[String]) -> Output {
    run_test_base_with_env(cmd, args, &[])
}

fn check_output(plan: &TestPlan, output: &Output) {
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, plan.expected_out);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr, plan.expected_err);

    assert_eq!(output.status.code(), Some(plan.expected_exit_code));
    if plan.expected_exit_code == 0 {
        assert!(output.status.success());
    }
}

pub fn run_test(plan: TestPlan) {
    let output = run_test_base(&plan.cmd, &plan.args);
    check_output(&plan, &output);
}

pub fn run_test_with_checker<F: FnMut(&TestPlan, &Output)>(plan: TestPlan, mut checker: F) {
    let output = run_test_base(&plan.cmd, &plan.args);
    checker(&plan, &output);
}

/// Run a test with a checker and custom environment variables.
pub fn run_test_with_checker_and_env<F: FnMut(&TestPlan, &Output)>(
    plan: TestPlan,
    env_vars: &[(&str, &str)],
    mut checker: F,
) {
    let output = run_test_base_with_env(&plan.cmd, &plan.args, env_vars);
    checker(&plan, &output);
}
