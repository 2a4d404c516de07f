//
// Copyright (c) 2026 tracefix developers
//
// This file is part of the tracefix-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::io::{self, Write};
use std::mem;

use clap::Parser;
use gettextrs::{bind_textdomain_codeset, setlocale, textdomain, LocaleCategory};
use plib::{Registry, PROJECT_NAME};
use samples::heap::{libc_version, HeapBlock};

const LARGE_CHUNK: usize = 2048 * 2048;

// bins loop parameters
const LOOP_START: usize = 2050;
const LOOP_STOP: usize = 200;
const LOOP_STEP: usize = 3;
const SIZE_MODULUS: usize = 113;

/// test_malloc - allocate and free blocks of varying sizes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about)]
struct Args {}

fn registry() -> Result<Registry, plib::events::EventError> {
    Registry::new()
        .module("mmap", None)?
        .module("bins", None)?
        .module("glibc", None)?
        .module("malloc", Some("glibc"))?
        .module("free", Some("glibc"))
}

fn exercise_allocator(reg: &Registry) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    reg.event("::print glibc version");
    writeln!(out, "gnu_get_libc_version() = {}", libc_version())?;

    reg.event("mmap::malloc large chunk");
    let mut k = HeapBlock::<i32>::new(LARGE_CHUNK / mem::size_of::<i32>())?;
    k.write(0, 10)?;
    reg.event("::Print k");
    writeln!(out, "k[0] is: {}", k.read(0)?)?;
    reg.event("mmap::free k");
    drop(k);

    // blocks not freed inside the loop stay live until it ends
    let mut retained = Vec::new();

    reg.event("bins::entry");
    let mut i = LOOP_START;
    while i > LOOP_STOP {
        reg.event("bins::loop");
        writeln!(out, "i is: {}", i)?;

        reg.event("bins::malloc");
        let block = HeapBlock::<i32>::new(i % SIZE_MODULUS)?;
        if i % 4 == 0 {
            reg.event("bins::free");
            drop(block);
        } else {
            retained.push(block);
        }

        i -= LOOP_STEP;
    }

    log::debug!("releasing {} retained blocks", retained.len());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // parse command line arguments
    let _args = Args::parse();

    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;
    env_logger::init();

    let reg = registry()?;

    if let Err(e) = exercise_allocator(&reg) {
        eprintln!("test_malloc: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
