//! `analex` command-line tool.

use analexc::commands::{analyze_file, parse_args, Command, EXIT_FAILURE, USAGE};

fn main() {
    analexc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(Command::Help) => {
            println!("{USAGE}");
            return;
        }
        Ok(Command::Analyze(options)) => options,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(EXIT_FAILURE);
        }
    };

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let code = match analyze_file(&options, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            EXIT_FAILURE
        }
    };
    std::process::exit(code);
}
