use squint::classify::{affects_data, affects_schema};
use std::env;
use std::fs;
use std::io::Read;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() > 2 || args.iter().skip(1).any(|a| a == "-h" || a == "--help") {
        eprintln!("Usage: {} [file.sql]", args[0]);
        eprintln!();
        eprintln!("Reads SQL from the file (or stdin when omitted) and reports");
        eprintln!("whether executing it would require a schema or data refresh.");
        process::exit(1);
    }

    let sql = match args.get(1) {
        Some(path) => match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Failed to read {}: {}", path, e);
                process::exit(1);
            }
        },
        None => {
            let mut buf = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
                eprintln!("Failed to read stdin: {}", e);
                process::exit(1);
            }
            buf
        }
    };

    println!("schema: {}", affects_schema(&sql));
    println!("data: {}", affects_data(&sql));
}
