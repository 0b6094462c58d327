use std::{
    fs,
    io::{self, Read},
};

use anka::{Session, get_result, repl};
use clap::Parser;

/// anka is a point-free, array-oriented scripting language evaluated from
/// right to left.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells anka to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Starts an interactive session. This is the default when no script is
    /// given.
    #[arg(short, long)]
    repl: bool,

    /// Pipe mode reads the script from standard input.
    #[arg(short, long)]
    pipe_mode: bool,

    contents: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.repl || (args.contents.is_none() && !args.pipe_mode) {
        println!("anka {} (.exit to quit)", env!("CARGO_PKG_VERSION"));
        let stdin = io::stdin();
        if let Err(e) = repl::run(&mut Session::new(),
                                  stdin.lock(),
                                  &mut io::stdout(),
                                  &mut io::stderr(),
                                  true)
        {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return;
    }

    let script = if args.pipe_mode {
        let mut script = String::new();
        io::stdin().read_to_string(&mut script).unwrap_or_else(|_| {
                                                   eprintln!("Failed to read the script from standard input.");
                                                   std::process::exit(1);
                                               });
        script
    } else {
        let contents = args.contents.unwrap_or_default();
        if args.file {
            fs::read_to_string(&contents).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                std::process::exit(1);
            })
        } else {
            contents
        }
    };

    if let Err(e) = get_result(&script, true) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
