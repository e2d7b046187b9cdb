use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stylemap")]
#[command(about = "List the selectors and declarations of a flat stylesheet")]
pub struct Cli {
    /// Stylesheet to parse
    pub input: PathBuf,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Drop an unterminated trailing block instead of failing
    #[arg(long)]
    pub lenient: bool,
}

impl Cli {
    pub fn parse_options(&self) -> stylemap::ParseOptions {
        if self.lenient {
            stylemap::ParseOptions::lenient()
        } else {
            stylemap::ParseOptions::strict()
        }
    }
}
