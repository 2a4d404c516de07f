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
use gettextrs::{bind_textdomain_codeset, setlocale, textdomain, LocaleCategory};
use plib::PROJECT_NAME;
use samples::heap::{libc_version, HeapBlock};

/// Bytes requested for the block; large enough to be served by mmap.
const LARGE_CHUNK: usize = 2048 * 2048;

/// test_mmap - allocate, touch and release one large block
#[derive(Parser, Debug)]
#[command(author, version, about, long_about)]
struct Args {}

fn touch_large_block() -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "gnu_get_libc_version() = {}", libc_version())?;

    let mut k = HeapBlock::<i32>::new(LARGE_CHUNK / std::mem::size_of::<i32>())?;
    k.write(0, 10)?;
    writeln!(out, "k[0] is: {}", k.read(0)?)?;
    drop(k);

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // parse command line arguments
    let _args = Args::parse();

    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;
    env_logger::init();

    if let Err(e) = touch_large_block() {
        eprintln!("test_mmap: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
