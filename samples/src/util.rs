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

/// Register the `util` module tree: `util`, `util::print`, `util::add`.
pub fn register(reg: Registry) -> Result<Registry, plib::events::EventError> {
    reg.module("util", None)?
        .module("print", Some("util"))?
        .module("add", Some("util"))
}

pub fn increment(reg: &Registry, a: i32) -> i32 {
    reg.event("add::entry");
    a.wrapping_add(1)
}

pub fn print_num<W: Write>(out: &mut W, reg: &Registry, a: i32) -> io::Result<()> {
    reg.event("print::entry");
    writeln!(out, "val: {}", a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        register(Registry::new()).unwrap()
    }

    #[test]
    fn increment_two() {
        assert_eq!(increment(&registry(), 2), 3);
        assert_eq!(increment(&registry(), -1), 0);
        assert_eq!(increment(&registry(), i32::MAX), i32::MIN);
    }

    #[test]
    fn print_three() {
        let mut out = Vec::new();
        print_num(&mut out, &registry(), 3).unwrap();
        assert_eq!(out, b"val: 3\n");
    }

    #[test]
    fn names_resolve_under_util() {
        let reg = registry();
        assert_eq!(reg.fqn("add::entry").unwrap(), "::util::add::entry");
        assert_eq!(reg.fqn("print::entry").unwrap(), "::util::print::entry");
    }
}
