use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use mipmap_fixture_lib::{run, FixtureConfig, DEFAULT_OUTPUT};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path of the PNG fixture to write
    #[arg(long, env = "FIXTURE_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: String,

    /// Re-open the written file and check every pixel
    #[arg(long)]
    verify: bool,
}

impl FixtureConfig for Args {
    fn output_path(&self) -> &str {
        &self.output
    }

    fn verify(&self) -> bool {
        self.verify
    }
}

fn main() -> Result<()> {
    // Load environment variables from .env file if present
    dotenv().ok();

    // Parse command line arguments
    let args = Args::parse();

    run(&args)?;

    Ok(())
}
