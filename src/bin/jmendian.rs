//! Flip the tile byte order of every `.jm` map under a directory.
//!
//! Usage: `jmendian <input-dir> <output-dir>`. When run without arguments,
//! both paths are read from stdin.

use jmendian::document::{convert_directory, ConvertOptions};
use std::error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

fn prompt(label: &str) -> io::Result<String> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", label)?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

fn main() -> Result<(), Box<dyn error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    let (input, output) = match args.len() {
        3 => (PathBuf::from(&args[1]), PathBuf::from(&args[2])),
        1 => {
            let input = prompt("Enter path of .jm files: ")?;
            let output = prompt("Enter output path: ")?;
            (PathBuf::from(input), PathBuf::from(output))
        }
        _ => {
            eprintln!("Usage: {} [<input-dir> <output-dir>]", args[0]);
            std::process::exit(1);
        }
    };

    if !input.is_dir() {
        eprintln!("Invalid path to .jm files: {}", input.display());
        std::process::exit(1);
    }

    if !output.is_dir() {
        eprintln!("Invalid output path: {}", output.display());
        std::process::exit(1);
    }

    let options = ConvertOptions::new();
    let reports = convert_directory(&input, &output, &options)?;

    let mut failures = 0;
    for report in &reports {
        let name = report.input().file_stem().unwrap_or_default();
        println!("Processing {}...", name.to_string_lossy());
        match report.result() {
            Ok(summary) => println!("Processed data: {}", summary),
            Err(e) => {
                failures += 1;
                eprintln!("Error: {}", e);
            }
        }
    }

    println!("Done.");

    if failures > 0 {
        eprintln!("{} of {} maps failed to convert", failures, reports.len());
        std::process::exit(1);
    }

    Ok(())
}
