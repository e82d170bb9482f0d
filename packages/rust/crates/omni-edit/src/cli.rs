use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use omni_edit::QuoteStyle;

#[derive(Parser)]
#[command(name = "omni-edit")]
#[command(about = "Apply one structural edit to a JavaScript/TypeScript/JSX file.")]
pub(crate) struct Cli {
    /// Source file to edit; its text becomes the request content.
    #[arg(long)]
    pub(crate) file: PathBuf,

    /// Edit request JSON (action, selector, payload). Use `-` for stdin.
    #[arg(long)]
    pub(crate) request: String,

    /// Write the edited code back when the edit applied.
    #[arg(long)]
    pub(crate) write: bool,

    /// Print the full result as JSON instead of a summary.
    #[arg(long)]
    pub(crate) json: bool,

    /// EditConfig JSON file; flags below override its fields.
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,

    /// Size limit in bytes (default: 1048576).
    #[arg(long)]
    pub(crate) max_bytes: Option<usize>,

    /// Preview line cap (default: 400).
    #[arg(long)]
    pub(crate) max_preview_lines: Option<usize>,

    /// Quote style for new string literals.
    #[arg(long, value_enum)]
    pub(crate) quote: Option<QuoteArg>,

    /// Debug logging on stderr.
    #[arg(long, short)]
    pub(crate) verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum QuoteArg {
    Single,
    Double,
}

impl From<QuoteArg> for QuoteStyle {
    fn from(arg: QuoteArg) -> Self {
        match arg {
            QuoteArg::Single => Self::Single,
            QuoteArg::Double => Self::Double,
        }
    }
}
