//
// Copyright (c) 2026 tracefix developers
//
// This file is part of the tracefix-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::io::{self, Write};

use plib::Registry;

/// Module name announced by [`count_to`].
pub const MODULE: &str = "count_to";

/// Write `i = 1` through `i = num`, one per line.
pub fn count_to<W: Write>(out: &mut W, reg: &Registry, num: u64) -> io::Result<()> {
    reg.event("count_to::init");
    for i in 1..=num {
        reg.event("count_to::print");
        writeln!(out, "i = {}", i)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        Registry::new().module(MODULE, None).unwrap()
    }

    fn counted(num: u64) -> String {
        let mut out = Vec::new();
        count_to(&mut out, &registry(), num).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn zero_prints_nothing() {
        assert_eq!(counted(0), "");
    }

    #[test]
    fn lines_are_one_indexed() {
        assert_eq!(counted(3), "i = 1\ni = 2\ni = 3\n");
    }

    #[test]
    fn seven_then_ten() {
        let reg = registry();
        let mut out = Vec::new();
        count_to(&mut out, &reg, 7).unwrap();
        count_to(&mut out, &reg, 10).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 17);
        for (k, line) in lines[..7].iter().enumerate() {
            assert_eq!(*line, format!("i = {}", k + 1));
        }
        for (k, line) in lines[7..].iter().enumerate() {
            assert_eq!(*line, format!("i = {}", k + 1));
        }
    }
}
