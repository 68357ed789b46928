use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_INPUT: &str = "data/raw/sales_data_raw.csv";
pub const DEFAULT_OUTPUT: &str = "data/processed/sales_data_clean.csv";

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Clean a raw sales CSV export for downstream analysis",
    long_about = None
)]
pub struct Cli {
    /// Input CSV file containing raw sales records
    #[arg(short = 'i', long = "input", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,
    /// Destination CSV file for the cleaned records
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
    /// CSV delimiter character (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
    /// Number of cleaned rows to preview on stdout
    #[arg(long, default_value_t = 5)]
    pub rows: usize,
}

pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\t" => Ok(b'\t'),
        "comma" | "," => Ok(b','),
        "|" | "pipe" => Ok(b'|'),
        ";" | "semicolon" => Ok(b';'),
        other => {
            let mut chars = other.chars();
            let first = chars
                .next()
                .ok_or_else(|| "Delimiter cannot be empty".to_string())?;
            if chars.next().is_some() {
                return Err("Delimiter must be a single character".to_string());
            }
            if !first.is_ascii() {
                return Err("Delimiter must be ASCII".to_string());
            }
            Ok(first as u8)
        }
    }
}
