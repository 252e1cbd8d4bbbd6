//! CLI module - Command-line interface definitions and handlers

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::file_reader::{EncodingStrategy, FileReadConfig};
use crate::core::render::{OutputFormat, RenderConfig};
use crate::core::report::{Reporter, Verbosity};
use crate::flows::count::{CountOptions, CountOrder};
use crate::vocab::collector::{CollectOptions, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_FILE};

/// dicgen - collect a transcript corpus vocabulary into a dictionary seed file.
#[derive(Parser, Debug)]
#[command(name = "dicgen")]
#[command(
    author,
    version,
    about,
    long_about = r#"dicgen reads every transcript file in an input directory, splits the text on
whitespace and writes the distinct tokens, lowercased, one per line. The result
seeds a pronunciation dictionary for a speech-recognition toolkit.

Files are read in file-name order, so repeated runs over the same directory
produce byte-identical output.

Examples:
    dicgen collect --input txt/ --output test.dic
    dicgen count --input txt/ --order count --top 20
    dicgen scan --input txt/ --format md
"#
)]
pub struct Cli {
    /// Output format for count/scan (jsonl/json/md/raw).
    #[arg(
        long,
        global = true,
        default_value = "jsonl",
        value_name = "FORMAT",
        long_help = "Select the output format for inspection commands (count, scan).\n\n\
Supported values:\n\
- jsonl (default)\n\
- json\n\
- md (markdown)\n\
- raw (token<TAB>count lines, or one path per line)\n\n\
collect always writes the plain vocabulary file and ignores this flag."
    )]
    pub format: String,

    /// Disable colored diagnostics.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (no summary or warnings on stderr).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (one line per source file on stderr).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where sources come from and how they are read
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Directory of transcript files.
    #[arg(
        long,
        env = "DICGEN_INPUT",
        default_value = DEFAULT_INPUT_DIR,
        value_name = "DIR"
    )]
    pub input: PathBuf,

    /// Descend into subdirectories instead of failing on them.
    #[arg(
        long,
        long_help = "Descend into subdirectories of the input directory and read every file\n\
found. Without this flag a subdirectory entry is an error, since it cannot be read as text."
    )]
    pub recursive: bool,

    /// How to treat files that are not valid UTF-8 text (strict/lossy/skip).
    #[arg(
        long,
        env = "DICGEN_ENCODING",
        default_value = "strict",
        value_parser = ["strict", "lossy", "skip"],
        value_name = "STRATEGY",
        long_help = "How to treat files that are not valid UTF-8 or look binary.\n\n\
Supported values:\n\
- strict (default): abort the run\n\
- lossy: replace invalid bytes with U+FFFD and warn\n\
- skip: leave the file out and warn"
    )]
    pub encoding: String,
}

impl SourceArgs {
    fn collect_options(&self) -> Result<CollectOptions> {
        let encoding_strategy: EncodingStrategy =
            self.encoding.parse().map_err(|e: String| anyhow!(e))?;
        Ok(CollectOptions {
            recursive: self.recursive,
            read_config: FileReadConfig { encoding_strategy },
        })
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the lowercased vocabulary of the input directory to a file.
    #[command(
        long_about = "Read every file in the input directory, count whitespace-delimited tokens\n\
and write each distinct token, lowercased, on its own line. Tokens are written in\n\
first-encounter order; case variants of an already written token are dropped.\n\n\
The output file is created or overwritten only after all inputs were read.\n\n\
Examples:\n\
  dicgen collect\n\
  dicgen collect --input txt/ --output corpus.dic --encoding lossy\n"
    )]
    Collect {
        #[command(flatten)]
        source: SourceArgs,

        /// Vocabulary file to create or overwrite.
        #[arg(
            long,
            env = "DICGEN_OUTPUT",
            default_value = DEFAULT_OUTPUT_FILE,
            value_name = "FILE"
        )]
        output: PathBuf,
    },

    /// Print token frequencies of the input directory.
    #[command(
        long_about = r#"Read the same sources as collect and emit one token result per distinct
token with its occurrence count. Counting is case-sensitive unless --fold-case is given.

Examples:
    dicgen count --input txt/
    dicgen count --input txt/ --order count --top 50 --format raw
    dicgen count --input txt/ --fold-case --min-count 3
"#
    )]
    Count {
        #[command(flatten)]
        source: SourceArgs,

        /// Token ordering (first/count/alpha).
        #[arg(
            long,
            default_value = "first",
            value_parser = ["first", "count", "alpha"],
            value_name = "ORDER",
            long_help = "Ordering of token results.\n\n\
Supported values:\n\
- first (default): first-encounter order, as in the vocabulary file\n\
- count: highest count first, ties in first-encounter order\n\
- alpha: lexicographic"
        )]
        order: String,

        /// Drop tokens seen fewer than N times.
        #[arg(long, default_value = "1", value_name = "N")]
        min_count: u64,

        /// Keep only the first N tokens after ordering.
        #[arg(long, value_name = "N")]
        top: Option<usize>,

        /// Merge tokens that differ only by case before counting.
        #[arg(long)]
        fold_case: bool,
    },

    /// List the source files collect would read.
    #[command(
        long_about = "List the files under the input directory in the order collect reads them,\n\
with size, modification time and content hash, followed by a summary.\n\
Unreadable files are listed as errors.\n\n\
Example:\n\
  dicgen scan --input txt/ --recursive\n"
    )]
    Scan {
        /// Directory of transcript files.
        #[arg(
            long,
            env = "DICGEN_INPUT",
            default_value = DEFAULT_INPUT_DIR,
            value_name = "DIR"
        )]
        input: PathBuf,

        /// Descend into subdirectories.
        #[arg(long)]
        recursive: bool,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);
    let reporter = Reporter::new(Verbosity::from_flags(cli.quiet, cli.verbose), !cli.no_color);

    match cli.command {
        Commands::Collect { source, output } => crate::flows::collect::run_collect(
            &source.input,
            &output,
            source.collect_options()?,
            reporter,
        ),

        Commands::Count {
            source,
            order,
            min_count,
            top,
            fold_case,
        } => {
            let options = CountOptions {
                order: order.parse::<CountOrder>().unwrap_or_default(),
                min_count,
                top,
                fold_case,
            };
            crate::flows::count::run_count(
                &source.input,
                source.collect_options()?,
                &options,
                render_config,
            )
        }

        Commands::Scan { input, recursive } => {
            crate::backends::scan::run_scan(&input, recursive, render_config)
        }
    }
}
