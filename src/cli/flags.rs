use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug, Default)]
#[command(name = "passforge", version)]
#[command(about = "Generate random passwords from selectable character classes")]
pub struct CliFlags {
    /// How many passwords to generate (default: 1)
    #[arg(short = 'n', long)]
    pub number: Option<usize>,

    /// Characters per password, at least 6 (default: 16)
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Emit numbered records (CSV, or JSON with --format json). `=false` overrides a saved default
    #[arg(
        short,
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub exportable: Option<bool>,

    /// Exclude uppercase letters. `=false` overrides a saved default
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub no_uppercase: Option<bool>,

    /// Exclude lowercase letters. `=false` overrides a saved default
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub no_lowercase: Option<bool>,

    /// Exclude digits. `=false` overrides a saved default
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub no_numbers: Option<bool>,

    /// Exclude special characters. `=false` overrides a saved default
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub no_special: Option<bool>,

    /// Restrict special characters to these (e.g. '!@#')
    #[arg(long, value_name = "CHARS")]
    pub special: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Copy to the clipboard instead of printing
    #[arg(short = 'b', long = "board", conflicts_with = "output")]
    pub clipboard: bool,

    /// Sample directly from the operating system RNG
    #[arg(long)]
    pub os_rng: bool,

    /// Only print errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log pool size and entropy
    #[arg(long)]
    pub verbose: bool,

    /// Save these options as the defaults for future runs (undo a saved
    /// exclusion with e.g. `--no-numbers=false`)
    #[arg(long)]
    pub save_defaults: bool,

    /// Remove saved defaults and exit
    #[arg(long, conflicts_with = "save_defaults")]
    pub clear_defaults: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// Plain lines, or CSV for exportable output
    #[default]
    Text,
    Json,
}

impl CliFlags {
    /// Default log level for these flags.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        }
    }
}
