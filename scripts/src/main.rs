//! Interactive converter REPL.
//!
//! Reads one word per line from stdin and prints its converted form, for
//! poking at the converters from a terminal:
//!
//! ```text
//! $ libscripts --script telex
//! tooi
//! tôi
//! ```

use std::io::{self, BufRead, Write};

use clap::Parser;

use libcompose_core::Converter;
use libscripts::{Script, ScriptKind};

#[derive(Parser)]
#[command(name = "libscripts", about = "Interactive multi-script converter")]
struct Args {
    /// Script to convert with: hangul, kana, pinyin, telex, tamil, unicode
    #[arg(short, long, default_value = "hangul")]
    script: String,

    /// Run the reverse conversion (hangul only)
    #[arg(short, long)]
    reverse: bool,
}

fn main() {
    let args = Args::parse();
    let kind = match ScriptKind::from_name(&args.script) {
        Some(kind) => kind,
        None => {
            eprintln!("unknown script: {}", args.script);
            std::process::exit(1);
        }
    };
    let script = Script::new(kind);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut output = String::new();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        output.clear();
        if args.reverse {
            script.reverse(&line, &mut output);
        } else {
            script.convert(&line, &mut output);
        }
        if writeln!(stdout, "{}", output).is_err() {
            break;
        }
    }
}
