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
use samples::counting::{self, count_to};

/// count_to - count from one up to each bound in turn
#[derive(Parser, Debug)]
#[command(author, version, about, long_about)]
struct Args {
    /// Upper bounds to count to, in order
    #[arg(default_values_t = [10, 10, 7])]
    bounds: Vec<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // parse command line arguments
    let args = Args::parse();

    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;
    env_logger::init();

    let reg = Registry::new().module(counting::MODULE, None)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", gettext("Started Program"))?;
    for num in args.bounds {
        reg.event(&format!("::count to {}", num));
        writeln!(out, "{} {}", gettext("Counting to"), num)?;
        count_to(&mut out, &reg, num)?;
    }
    writeln!(out, "{}", gettext("Finished Program"))?;

    Ok(())
}
