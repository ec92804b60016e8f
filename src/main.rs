#[macro_use]
extern crate log;
extern crate complexj;
extern crate env_logger;

use complexj::Complex;
use std::io;
use std::io::BufRead;

/// Reads one complex number per line from stdin as two whitespace-separated
/// numbers (real then imaginary) and prints it in j-notation along with its
/// derived quantities. Lines that fail to parse are logged and skipped.
fn main() {
    env_logger::init();
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!("failed to read stdin: {}", err);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Complex>() {
            Ok(z) => report(z),
            Err(err) => warn!("skipping line {:?}: {}", line, err),
        }
    }
}

fn report(z: Complex) {
    debug!("parsed {:?}", z);
    println!("z       = {}", z);
    println!("|z|     = {}", z.abs());
    match z.arg() {
        Some(arg) => println!("arg(z)  = {}", arg),
        None => println!("arg(z)  = undefined"),
    }
    println!("conj(z) = {}", z.conj());
    println!("sqrt(z) = {}", z.sqrt());
}
