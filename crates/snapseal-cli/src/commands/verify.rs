//! Verify command: re-check an exported proof record

use clap::Args;
use snapseal_core::verify_record;
use snapseal_store::export::read_record;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct VerifyArgs {
    /// Path of the exported proof record
    #[arg(long)]
    pub record: PathBuf,
}

pub fn execute(args: VerifyArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (text, _event) = read_record(&args.record)?;
    let verdict = verify_record(&text);

    println!("{}", verdict);
    if !verdict.is_valid() {
        std::process::exit(1);
    }
    Ok(())
}
