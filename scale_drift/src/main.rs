// Scale Drift — CLI entry point.
//
// Wanders through the space of valid scales, printing one per step.
// Interactive by default: press Enter for the next scale, type `sharps` or
// `flats` to switch the spelling convention, `q` to quit. With --count N it
// prints N scales and exits.
//
// Usage:
//   cargo run -p scale_drift -- [--seed N] [--style sharps|flats]
//     [--count N] [--bank FILE]

use rand::SeedableRng;
use rand::rngs::StdRng;
use scale_drift::bank::PresetBank;
use scale_drift::display::{NoteStyle, render};
use scale_drift::search::{initial_scale, next_scale};
use std::io::{BufRead, Write};
use std::path::Path;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let seed: Option<u64> = parse_flag(&args, "--seed");
    let count: Option<usize> = parse_flag(&args, "--count");
    let style_name: String = parse_flag(&args, "--style").unwrap_or_else(|| "sharps".to_string());
    let bank_path: Option<String> = parse_flag(&args, "--bank");

    let mut style = match NoteStyle::parse(&style_name) {
        Some(style) => style,
        None => {
            eprintln!("Unknown style '{}'. Use sharps or flats.", style_name);
            std::process::exit(1);
        }
    };

    let bank = match &bank_path {
        Some(path) => match PresetBank::load(Path::new(path)) {
            Ok(bank) => {
                println!("Loaded {} presets from {}.", bank.len(), path);
                bank
            }
            Err(e) => {
                eprintln!("Failed to load preset bank {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => PresetBank::builtin(),
    };

    let mut rng = if let Some(s) = seed {
        StdRng::seed_from_u64(s)
    } else {
        StdRng::from_os_rng()
    };

    let mut current = initial_scale(&bank, &mut rng);

    if let Some(n) = count {
        for _ in 0..n {
            println!("{}", render(&current, style));
            current = next_scale(&current, &bank, &mut rng);
        }
        return;
    }

    println!("=== Scale Drift ===");
    println!("Enter: next scale | sharps / flats: spelling | q: quit");
    println!();

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("{}", render(&current, style));
        print!("> ");
        let _ = std::io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => break,
        };
        match line.trim() {
            "" => current = next_scale(&current, &bank, &mut rng),
            "q" | "quit" => break,
            other => match NoteStyle::parse(other) {
                Some(s) => style = s,
                None => println!("Unknown command '{}'.", other),
            },
        }
    }
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
}
