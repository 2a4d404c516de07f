//
// Copyright (c) 2026 tracefix developers
//
// This file is part of the tracefix-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::io::{self, Write};

use clap::Parser;
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use plib::{Registry, PROJECT_NAME};
use samples::parity::{self, current_epoch, dispatch};

/// date_bounded_func - branch on the parity of the current time
#[derive(Parser, Debug)]
#[command(author, version, about, long_about)]
struct Args {
    /// Use these epoch seconds instead of reading the clock
    #[arg(long, allow_negative_numbers = true)]
    epoch: Option<i64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // parse command line arguments
    let args = Args::parse();

    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;
    env_logger::init();

    let reg = Registry::new().module(parity::MODULE, None)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    reg.event("::Start the program");
    writeln!(out, "{}", gettext("Started Program"))?;

    let current_time = match args.epoch {
        Some(epoch) => epoch,
        None => current_epoch(&reg),
    };
    writeln!(out, "{} {}", gettext("Current time:"), current_time)?;

    dispatch(&mut out, &reg, current_time)?;

    reg.event("::Program finished");
    writeln!(out, "{}", gettext("Finished Program"))?;

    Ok(())
}
