use std::{io::Read, path::PathBuf};

use clap::{Parser, ValueEnum};

use asciimath_core::{AsciiMathConfig, Converter, MathDisplay, TableError};

mod config_file;

use config_file::load_config_file;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Mathml,
    Html,
    Latex,
}

/// Converts ASCIIMath formulas to MathML, HTML or LaTeX
#[derive(Parser, Debug)]
#[command(version, about = "Converts ASCIIMath formulas to MathML, HTML or LaTeX", long_about = None)]
struct Args {
    /// The formula to convert; read from standard input if omitted
    #[arg(value_name = "FORMULA")]
    formula: Option<String>,

    /// The output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Mathml)]
    format: OutputFormat,

    /// Sets the display style for the formula to "block"
    #[arg(short, long)]
    block: bool,

    /// A TOML file with converter options, custom symbols and colors
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the parsed syntax tree instead of converting it
    #[arg(long)]
    ast: bool,
}

fn main() {
    let args = Args::parse();
    let config = match args.config {
        Some(ref path) => match load_config_file(path) {
            Ok(config) => config,
            Err(e) => exit_with_error(format_args!("Error: {e}")),
        },
        None => AsciiMathConfig::default(),
    };
    let converter = Converter::new(config).unwrap_or_else(|(e, idx)| exit_table_error(&e, idx));

    let source = match args.formula {
        Some(ref formula) => formula.clone(),
        None => read_stdin(),
    };
    let source = source.trim_end_matches(['\n', '\r']);

    if args.ast {
        println!("{:#?}", converter.parse(source).ast());
        return;
    }
    let display = if args.block {
        MathDisplay::Block
    } else {
        MathDisplay::Inline
    };
    let output = match args.format {
        OutputFormat::Mathml => converter.to_mathml(source, display),
        OutputFormat::Html => converter.to_html(source, display),
        OutputFormat::Latex => converter.to_latex(source),
    };
    println!("{output}");
}

fn read_stdin() -> String {
    let mut buffer = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
        exit_with_error(format_args!("IO Error: {e}"));
    }
    buffer
}

fn exit_table_error(e: &TableError, idx: usize) -> ! {
    let section = match e {
        TableError::InvalidColor(_) => "colors",
        _ => "symbols",
    };
    exit_with_error(format_args!(
        "Invalid configuration: entry {idx} of '{section}': {e}"
    ))
}

fn exit_with_error(message: std::fmt::Arguments<'_>) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse_arguments() {
        let args = Args::parse_from(["asciimath", "-f", "latex", "-b", "x^2"]);
        assert_eq!(args.format, OutputFormat::Latex);
        assert!(args.block);
        assert_eq!(args.formula.as_deref(), Some("x^2"));
        assert!(args.config.is_none());

        let args = Args::parse_from(["asciimath", "--ast"]);
        assert_eq!(args.format, OutputFormat::Mathml);
        assert!(args.ast);
        assert!(args.formula.is_none());
    }
}
