use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = env!("CARGO_PKG_NAME"))]
#[command(about = env!("CARGO_PKG_DESCRIPTION"))]
#[command(version)]
pub struct Cli {
    /// Characters to use (all bytes alphanumeric alphanumeric-nosim numeric alphabet binary hexadecimal)
    #[arg(long, value_name = "CHARSET")]
    pub chars: Option<String>,

    /// Length of string [default: 20]
    #[arg(long)]
    pub length: Option<u32>,

    /// Number of strings [default: 20]
    #[arg(long)]
    pub count: Option<u32>,

    /// Mangle the output (UC LC). Decreases cardinality, should not be used with --base64
    #[arg(long)]
    pub mangle: Option<String>,

    /// Base64 encode the output
    #[arg(long)]
    pub base64: bool,

    /// Block the output to 65 character lines
    #[arg(long)]
    pub block: bool,

    /// Shortcut to '--chars bytes --base64 --block --blocksize 65' (hint: --length 741)
    #[arg(long)]
    pub keyblock: bool,

    /// Shortcut to '--chars numeric --length <PIN>'
    #[arg(long)]
    pub pin: Option<u32>,

    /// Line length used by --block [default: 65]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub blocksize: Option<u32>,

    /// Ensure generated strings are unique
    #[arg(long)]
    pub unique: bool,

    /// What character or string should each value be separated with? [default: "\n"]
    #[arg(long, allow_hyphen_values = true)]
    pub separator: Option<String>,

    /// A list of characters to use in lieu of --chars (repeat a character for prevalence)
    #[arg(long, allow_hyphen_values = true)]
    pub custom: Option<String>,

    /// Log level for diagnostics on stderr, RUST_LOG takes precedence [default: warn]
    #[arg(long)]
    pub log_level: Option<String>,
}
