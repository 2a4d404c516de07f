//
// Copyright (c) 2026 tracefix developers
//
// This file is part of the tracefix-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use plib::{run_test, TestPlan};

fn counting(nums: &[u64]) -> String {
    let mut s = String::from("Started Program\n");
    for num in nums {
        s.push_str(&format!("Counting to {}\n", num));
        for i in 1..=*num {
            s.push_str(&format!("i = {}\n", i));
        }
    }
    s.push_str("Finished Program\n");
    s
}

#[test]
fn test_count_default_bounds() {
    run_test(TestPlan::new("count_to", &[], &counting(&[10, 10, 7])));
}

#[test]
fn test_count_seven_then_ten() {
    run_test(TestPlan::new("count_to", &["7", "10"], &counting(&[7, 10])));
}

#[test]
fn test_count_zero() {
    run_test(TestPlan::new(
        "count_to",
        &["0"],
        "Started Program\nCounting to 0\nFinished Program\n",
    ));
}
