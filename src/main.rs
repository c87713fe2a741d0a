use morse_vault::{MorseVault, Standard};
use std::env;
use std::fs;

fn print_usage(program: &str) {
    eprintln!("Usage: {} <command> [args] [--standard international|american]", program);
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  encode <text>                        Translate text to Morse");
    eprintln!("  decode <morse>                       Translate Morse back to text");
    eprintln!("  export <text> <password> <out-file>  Translate, compress and encrypt to a file");
    eprintln!("  import <in-file> <password>          Decrypt, decompress and translate a file");
}

fn main() {
    let mut args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    // Parse optional --standard flag (defaults to international)
    let mut standard = Standard::International;
    if let Some(idx) = args.iter().position(|arg| arg == "--standard") {
        let Some(name) = args.get(idx + 1) else {
            eprintln!("ERROR: --standard flag requires an argument.");
            std::process::exit(1);
        };
        match name.parse::<Standard>() {
            Ok(s) => standard = s,
            Err(e) => {
                eprintln!("ERROR: {}", e);
                std::process::exit(1);
            }
        }
        args.drain(idx..=idx + 1);
    }

    if args.len() < 2 {
        print_usage(&program);
        std::process::exit(1);
    }

    let vault = match MorseVault::new(standard) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("ERROR: Failed to load the {} symbol table", standard.name());
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    match args[1].as_str() {
        "encode" => {
            let Some(text) = args.get(2) else {
                print_usage(&program);
                std::process::exit(1);
            };
            println!("{}", vault.to_morse(text));
        }
        "decode" => {
            let Some(morse) = args.get(2) else {
                print_usage(&program);
                std::process::exit(1);
            };
            println!("{}", vault.to_text(morse));
        }
        "export" => {
            let (Some(text), Some(password), Some(out_path)) =
                (args.get(2), args.get(3), args.get(4))
            else {
                print_usage(&program);
                std::process::exit(1);
            };
            match vault.export_secure(text, password) {
                Ok(blob) => {
                    if let Err(e) = fs::write(out_path, &blob) {
                        eprintln!("ERROR: Failed to write {}: {}", out_path, e);
                        std::process::exit(1);
                    }
                    println!("Exported {} bytes to {}", blob.len(), out_path);
                }
                Err(e) => {
                    eprintln!("ERROR: Export failed");
                    eprintln!("  {}", e);
                    std::process::exit(1);
                }
            }
        }
        "import" => {
            let (Some(in_path), Some(password)) = (args.get(2), args.get(3)) else {
                print_usage(&program);
                std::process::exit(1);
            };
            let blob = match fs::read(in_path) {
                Ok(bytes) => bytes,
                Err(e) => {
                    eprintln!("ERROR: Failed to read {}: {}", in_path, e);
                    std::process::exit(1);
                }
            };
            match vault.import_secure(&blob, password) {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    eprintln!("ERROR: Import failed");
                    eprintln!("  {}", e);
                    std::process::exit(1);
                }
            }
        }
        other => {
            eprintln!("ERROR: Unknown command: {}", other);
            print_usage(&program);
            std::process::exit(1);
        }
    }
}
