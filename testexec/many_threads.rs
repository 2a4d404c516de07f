//
// Copyright (c) 2026 tracefix developers
//
// This file is part of the tracefix-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Spawns a fixed set of worker threads that announce their start, wait
//! briefly and announce completion, so a tracer attached to the process
//! can observe all of them alive at once.

use std::thread;
use std::time::Duration;

use clap::Parser;
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use plib::{Registry, PROJECT_NAME};

const THREAD_COUNT: usize = 10;

#[derive(thiserror::Error, Debug)]
enum Error {
    #[error("thread {0} panicked")]
    Worker(usize),
}

/// many_threads - run ten short-lived worker threads
#[derive(Parser, Debug)]
#[command(author, version, about, long_about)]
struct Args {}

fn run(reg: &Registry) -> Result<(), Error> {
    println!("{}", gettext("Started"));

    let mut handles = Vec::with_capacity(THREAD_COUNT);
    for thread_num in 0..THREAD_COUNT {
        handles.push(thread::spawn(move || {
            println!("Thread {thread_num} has started");
            // stay alive long enough to be counted
            thread::sleep(Duration::from_millis(10));
            println!("Thread {thread_num} is done");
        }));
    }

    thread::sleep(Duration::from_millis(2));
    reg.event("worker::spawned");
    println!("{}", gettext("Done Spawning"));
    thread::sleep(Duration::from_millis(1));

    for (thread_num, handle) in handles.into_iter().enumerate() {
        handle.join().map_err(|_| Error::Worker(thread_num))?;
    }
    reg.event("worker::joined");

    println!("{}", gettext("Finished"));
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // parse command line arguments
    let _args = Args::parse();

    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;
    env_logger::init();

    let reg = Registry::new().module("worker", None)?;

    if let Err(e) = run(&reg) {
        eprintln!("many_threads: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
