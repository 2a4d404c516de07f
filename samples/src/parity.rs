//
// Copyright (c) 2026 tracefix developers
//
// This file is part of the tracefix-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::io::{self, Write};

use chrono::Utc;
use gettextrs::gettext;
use plib::Registry;

pub const MODULE: &str = "divisible";

/// How many times the even branch prints its message.
pub const DIVISIBLE_REPEAT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn of(epoch: i64) -> Parity {
        if epoch % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

/// Seconds since the Unix epoch, read from the wall clock.
pub fn current_epoch(reg: &Registry) -> i64 {
    reg.event("::get the current time");
    Utc::now().timestamp()
}

pub fn run_divisible<W: Write>(out: &mut W, reg: &Registry) -> io::Result<()> {
    reg.event("divisible::enter");
    for _ in 0..DIVISIBLE_REPEAT {
        reg.event("divisible::loop and print");
        writeln!(out, "{}", gettext("Current time is divisible by 2!"))?;
    }
    Ok(())
}

pub fn dispatch<W: Write>(out: &mut W, reg: &Registry, epoch: i64) -> io::Result<Parity> {
    reg.flow("::Is the current time is divisible by 2?");
    let parity = Parity::of(epoch);
    match parity {
        Parity::Even => run_divisible(out, reg)?,
        Parity::Odd => {
            reg.flow("::It is not divisible by 2");
            writeln!(out, "{}", gettext("Current time is not divisible by 2"))?;
        }
    }
    Ok(parity)
}
