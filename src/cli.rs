use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sarq",
    about = "Differential testing harness for suffix-array range queries",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Author a fixture by recording the reference engine's answer
    Author {
        /// Text to index
        #[arg(long)]
        text: String,

        /// Lower bound prefix (inclusive)
        #[arg(long)]
        lower: String,

        /// Upper bound prefix (exclusive)
        #[arg(long)]
        upper: String,

        /// Output fixture path
        #[arg(short, long)]
        output: String,
    },

    /// Verify the reference engine against a stored fixture
    Verify {
        /// Path to the fixture file
        file: String,

        /// Also recompute ground truth with the naive oracle
        #[arg(long)]
        naive: bool,

        /// Emit a JSON report instead of human-readable output
        #[arg(long)]
        json: bool,
    },

    /// Print the fields of a fixture file
    Inspect {
        /// Path to the fixture file
        file: String,
    },
}
