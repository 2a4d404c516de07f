//
// Copyright (c) 2026 tracefix developers
//
// This file is part of the tracefix-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::io;

use clap::Parser;
use gettextrs::{bind_textdomain_codeset, setlocale, textdomain, LocaleCategory};
use plib::{Registry, PROJECT_NAME};
use samples::util::{self, increment, print_num};

/// modules - increment a number and print it
#[derive(Parser, Debug)]
#[command(author, version, about, long_about)]
struct Args {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // parse command line arguments
    let _args = Args::parse();

    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;
    env_logger::init();

    let reg = util::register(Registry::new())?;

    reg.event("::entry");
    let a = increment(&reg, 2);
    print_num(&mut io::stdout().lock(), &reg, a)?;
    reg.event("::exiting after printing the num");

    Ok(())
}
