//! tagscribe - HTML page to templating DSL source

use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;

use tagscribe::{DEFAULT_ROOT, RenderResult, convert_html_bytes};

#[derive(Parser)]
#[command(name = "tagscribe")]
#[command(version, about = "Convert an HTML page into templating DSL source", long_about = None)]
#[command(after_help = "EXAMPLES:
    tagscribe page.html                 Print DSL for the whole page
    tagscribe page.html -o page.ml      Write DSL to a file
    curl -s URL | tagscribe --root body Convert only the body")]
struct Cli {
    /// Input HTML file, or - for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    input: String,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<String>,

    /// Tag of the element to convert (first match in document order)
    #[arg(short, long, value_name = "TAG", default_value = DEFAULT_ROOT)]
    root: String,

    /// Suppress warnings about skipped nodes
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "error" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> tagscribe::Result<()> {
    let bytes = read_input(&cli.input)?;
    let result = convert_html_bytes(&bytes, &cli.root)?;
    write_output(cli.output.as_deref(), &result)?;

    if !cli.quiet && !result.skipped.is_empty() {
        eprintln!(
            "note: {} node(s) without a DSL form were left out",
            result.skipped.len()
        );
    }
    Ok(())
}

fn read_input(path: &str) -> io::Result<Vec<u8>> {
    if path == "-" {
        let mut buf = Vec::new();
        io::stdin().lock().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        fs::read(path)
    }
}

fn write_output(path: Option<&str>, result: &RenderResult) -> io::Result<()> {
    match path {
        Some(path) => fs::write(path, &result.content),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(result.content.as_bytes())?;
            stdout.write_all(b"\n")?;
            stdout.flush()
        }
    }
}
