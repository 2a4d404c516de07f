//
// Copyright (c) 2026 tracefix developers
//
// This file is part of the tracefix-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use plib::{run_test_with_checker, TestPlan};

fn viewer_lines(args: &[&str]) -> Vec<String> {
    let mut lines = Vec::new();
    run_test_with_checker(TestPlan::new("date_viewer", args, ""), |_, output| {
        assert!(output.status.success());
        assert!(output.stderr.is_empty());
        lines = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(String::from)
            .collect();
    });
    lines
}

#[test]
fn test_no_delay() {
    let lines = viewer_lines(&[]);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Started");
    assert!(lines[1].starts_with("StartTime: "));
    assert_eq!(lines[2], "Finished");
}

#[test]
fn test_with_delay() {
    let lines = viewer_lines(&["5"]);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Started");
    assert!(lines[1].starts_with("StartTime: "));
    assert!(lines[2].starts_with("EndTime: "));
    assert_eq!(lines[3], "Finished");
}

#[test]
fn test_bad_delay() {
    run_test_with_checker(
        TestPlan::new("date_viewer", &["soon"], ""),
        |_, output| {
            assert_eq!(output.status.code(), Some(2));
            assert!(output.stdout.is_empty());
            assert!(String::from_utf8_lossy(&output.stderr).contains("invalid value"));
        },
    );
}
