use std::ops::Range;
use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Review a document and annotate it with inline comments
    Review {
        file: PathBuf,

        /// Aspect to focus on (repeatable), e.g. grammar, clarity, structure
        #[arg(short, long)]
        focus: Vec<String>,

        /// Extra instructions passed to the reviewer verbatim
        #[arg(short, long, default_value = "")]
        instructions: String,

        /// Review only this byte range of the file (START..END)
        #[arg(short, long, value_parser = parse_selection)]
        selection: Option<Range<usize>>,

        /// Write the annotated document here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Repeat the last review with the current settings
    ReviewAgain {
        /// Write the annotated text here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Shorten a document (or a selection of it) in place
    Trim {
        file: PathBuf,

        #[arg(short, long, value_parser = parse_selection)]
        selection: Option<Range<usize>>,

        /// Write the updated document here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Suggest alternative phrasings for a document or selection
    Paraphrase {
        file: PathBuf,

        /// Number of variants (1-3)
        #[arg(short = 'n', long, default_value = "3")]
        count: usize,

        /// Replace the text with variant N (1-based) and emit the document
        #[arg(short, long)]
        apply: Option<usize>,

        #[arg(short, long, value_parser = parse_selection)]
        selection: Option<Range<usize>>,

        /// Write the updated document here instead of stdout (with --apply)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or change the API settings
    Settings {
        #[command(subcommand)]
        action: SettingsCommand,
    },

    /// Start MCP (Model Context Protocol) server on stdio for integration with AI tools
    Mcp,
}

#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Print the stored settings (the API key is never shown)
    Show,

    /// Store new values; omitted options keep their current value
    Set {
        #[arg(long)]
        api_key: Option<String>,

        #[arg(long)]
        base_url: Option<String>,

        #[arg(long)]
        model: Option<String>,
    },
}

/// Parse `START..END` byte offsets.
pub fn parse_selection(value: &str) -> Result<Range<usize>, String> {
    let (start, end) = value
        .split_once("..")
        .ok_or_else(|| format!("expected START..END, got '{value}'"))?;
    let start: usize = start
        .trim()
        .parse()
        .map_err(|e| format!("invalid selection start '{start}': {e}"))?;
    let end: usize = end
        .trim()
        .parse()
        .map_err(|e| format!("invalid selection end '{end}': {e}"))?;
    if start > end {
        return Err(format!("selection start {start} is after end {end}"));
    }
    Ok(start..end)
}
