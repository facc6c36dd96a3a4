//! Inspect command: print a record's identity and snapshot summaries

use clap::Args;
use snapseal_store::export::read_record;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Path of the exported proof record
    #[arg(long)]
    pub record: PathBuf,
}

pub fn execute(args: InspectArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (_text, event) = read_record(&args.record)?;

    println!("Report:      {}", event.report_id);
    println!("Applicant:   {}", event.applicant);
    println!("Issuer:      {}", event.issuer);
    println!("Issued at:   {}", event.issued_at);
    println!("Trace:       {}", event.event_proof.trace_token);
    println!("Versions:    {}", event.version_count());
    println!();
    for snapshot in &event.event_proof.snapshots {
        println!("  v{}  {}", snapshot.version_index, snapshot.timestamp_utc);
        println!("      prompt: {}", snapshot.input_parameters.prompt);
        println!(
            "      seed: {}  model: {}",
            snapshot.input_parameters.seed, snapshot.input_parameters.model
        );
        println!("      digest: {}", snapshot.content_digest);
    }
    println!();
    println!("Final hash:  {}", event.event_proof.final_event_hash);
    println!("Verify at:   {}", event.verification.verify_url);

    Ok(())
}
