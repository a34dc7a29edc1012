extern crate getoptions;

use {
    getoptions::{Arity, OptRule, getopt_os, version::VERSION},
    std::{env, process::ExitCode}
};

const RULES: &[OptRule] = &[
    OptRule::new_auto("help"),
    OptRule::new_auto("output").set_arity(Arity::Required),
    OptRule::new_auto("verbose"),
    OptRule::new("version")
];

/// Enable with `RUST_LOG=getoptions=debug` or `RUST_LOG=getoptions=trace`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    // only initialize if RUST_LOG is set
    if env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() -> ExitCode {
    init_tracing();

    let (program, parsed) = match getopt_os(RULES) {
        Ok(res) => res,
        Err(err) => {
            eprintln!("parse error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if parsed.flag("version") {
        println!("{} {}", program, VERSION);
        return ExitCode::SUCCESS;
    }

    if parsed.flag("help") {
        println!("usage: {} [-h] [-v...] [-o FILE]... [--version] [--] [ARG]...", program);
        return ExitCode::SUCCESS;
    }

    for rule in RULES {
        println!("option[{}]: {:?}", rule.long(), parsed.values(rule.long()).unwrap_or_default());
    }
    println!("arguments: {:?}", parsed.positionals());
    println!("\n{:#?}", parsed);

    ExitCode::SUCCESS
}
