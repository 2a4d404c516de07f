//
// Copyright (c) 2026 tracefix developers
//
// This file is part of the tracefix-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::io::{self, Write};
use std::{thread, time};

use chrono::Local;
use clap::Parser;
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use plib::{Registry, PROJECT_NAME};

/// date_viewer - print the local time, optionally again after a delay
#[derive(Parser, Debug)]
#[command(author, version, about, long_about)]
struct Args {
    /// Milliseconds to wait before printing the end time
    delay: Option<u64>,
}

fn print_time<W: Write>(out: &mut W, prefix: &str) -> io::Result<()> {
    writeln!(out, "{}: {:?}", prefix, Local::now())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // parse command line arguments
    let args = Args::parse();

    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;
    env_logger::init();

    let reg = Registry::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    reg.event("::Started");
    writeln!(out, "{}", gettext("Started"))?;
    print_time(&mut out, &gettext("StartTime"))?;

    if let Some(delay) = args.delay {
        reg.event("::sleeping");
        out.flush()?;
        thread::sleep(time::Duration::from_millis(delay));
        print_time(&mut out, &gettext("EndTime"))?;
    }

    reg.event("::Finished");
    writeln!(out, "{}", gettext("Finished"))?;

    Ok(())
}
