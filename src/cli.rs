use clap::Parser;
use clap::builder::NonEmptyStringValueParser;

/// Create the standard machine-learning project skeleton.
#[derive(Parser, Debug)]
#[command(name = "ml-skeleton", about = "Setup ML Project Structure")]
pub struct Cli {
    /// Name of the project directory.
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub project_name: String,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}
