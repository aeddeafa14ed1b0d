use anyhow::{bail, Result};
use clap::Parser;
use notebooklm_input_merger::run;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(long, default_value = "config.yaml")]
    config: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let summary = run(&args.config)?;

    if summary.files_written == 0 {
        bail!("No question files were merged");
    }

    Ok(())
}
