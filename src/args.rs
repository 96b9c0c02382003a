use clap::Parser;

/// This is a first-round vote share simulator.
///
/// Base intention scores (0 to 100) are normalized into vote shares and estimated
/// votes. The two leading candidates are the runoff qualifiers.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON file describing the scenario: candidates, base intentions
    /// and electorate. If not provided, the default roster of eight candidates is used.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (integer, optional) The estimated number of valid votes. It is clamped to the range of the
    /// scenario (8,000,000 to 13,000,000 by default) and moved to the nearest step.
    #[clap(short, long, value_parser, allow_hyphen_values = true)]
    pub electorate: Option<i64>,

    /// (NAME=VALUE, repeatable) Sets the base intention of a candidate. Values are clamped to
    /// 0..=100.
    #[clap(short, long, value_parser)]
    pub score: Vec<String>,

    /// (file path, 'stdout' or empty) If specified, the summary of the simulation will be written
    /// in JSON format to the given location. Setting this option overrides the path that may be
    /// specified with the --config option.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A reference file containing a summary in JSON format. If provided, runoffsim will
    /// check that the computed summary matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// (default 40) The width of the longest bar in the chart, in characters.
    #[clap(long, value_parser, default_value_t = 40)]
    pub width: usize,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
