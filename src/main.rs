//! Command-line interface for aasaan-rs
//!
//! Usage:
//!   aasaan [OPTIONS] [TEXT]
//!   echo "یہ کتاب بہترین ہے" | aasaan
//!
//! Options:
//!   -d, --detect  Detect the language only, do not simplify
//!   -j, --json    Output as JSON
//!   -h, --help    Show help

use aasaan_rs::{LanguageDetector, OfflineSimplifier};
use serde::Serialize;
use std::env;
use std::io::{self, BufRead};

/// JSON report for a single input
#[derive(Serialize)]
struct Report {
    language: aasaan_rs::Language,
    confidence: f64,
    display_name: &'static str,
    simplified: Option<String>,
}

fn print_help() {
    eprintln!(
        r#"aasaan-rs - language identification and text simplification for Urdu, Punjabi and Roman Urdu

USAGE:
    aasaan [OPTIONS] [TEXT]
    echo "یہ کتاب بہترین ہے" | aasaan

OPTIONS:
    -d, --detect  Detect the language only, do not simplify
    -j, --json    Output as JSON
    -h, --help    Show this help message

EXAMPLES:
    aasaan "یہ کتاب بہترین ہے"
    aasaan -d "Main kal aapke ghar aaunga"
    aasaan -j "This is information about education"
    echo "Tuhada ki haal hai?" | aasaan -d

Set RUST_LOG=debug to trace individual replacements.
"#
    );
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut detect_only = false;
    let mut json_output = false;
    let mut text: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-d" | "--detect" => {
                detect_only = true;
            }
            "-j" | "--json" => {
                json_output = true;
            }
            arg if !arg.starts_with('-') => {
                text = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    // Read from stdin if no text provided
    let input_text = if let Some(t) = text {
        t
    } else {
        let stdin = io::stdin();
        let mut lines = Vec::new();
        for line in stdin.lock().lines() {
            match line {
                Ok(l) => lines.push(l),
                Err(e) => {
                    eprintln!("Error reading stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
        lines.join("\n")
    };

    if input_text.is_empty() {
        eprintln!("Error: No input text provided");
        print_help();
        std::process::exit(1);
    }

    let detector = LanguageDetector::new();
    let simplifier = OfflineSimplifier::new();
    let detection = detector.detect(&input_text);

    if json_output {
        let report = Report {
            language: detection.language,
            confidence: detection.confidence,
            display_name: detection.language.display_name(),
            simplified: if detect_only {
                None
            } else {
                Some(simplifier.simplify(&input_text))
            },
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing to JSON: {}", e);
                std::process::exit(1);
            }
        }
    } else if detect_only {
        println!(
            "{}\t{:.2}\t{}",
            detection.language,
            detection.confidence,
            detection.language.display_name()
        );
    } else {
        println!("{}", simplifier.simplify(&input_text));
    }
}
