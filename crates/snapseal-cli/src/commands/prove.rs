//! Prove command: seal images, finalize, and persist the record

use clap::Args;
use snapseal_core::{GenerationParams, ProofConfig};
use snapseal_engine::{commit_event, Session};
use snapseal_store::BlobStore;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ProveArgs {
    /// Applicant name recorded in the report
    #[arg(long)]
    pub applicant: String,

    /// Image file to seal (repeatable; one snapshot per image, in order)
    #[arg(long = "image", required = true)]
    pub images: Vec<PathBuf>,

    /// Prompt for each image (repeatable, zipped with --image)
    #[arg(long = "prompt", required = true)]
    pub prompts: Vec<String>,

    /// Seed for each image (repeatable, zipped with --image)
    #[arg(long = "seed", required = true)]
    pub seeds: Vec<u64>,

    #[arg(long, default_value = "black-forest-labs/FLUX.1-schnell")]
    pub model: String,

    #[arg(long, default_value_t = 512)]
    pub width: u32,

    #[arg(long, default_value_t = 512)]
    pub height: u32,

    #[arg(long, default_value_t = 8)]
    pub steps: u32,

    /// Issuer recorded in the report (overrides config/env)
    #[arg(long)]
    pub issuer: Option<String>,

    /// Verification locator base URL (overrides config/env)
    #[arg(long)]
    pub verify_base_url: Option<String>,

    /// Directory for exported records
    #[arg(long, default_value = ".snapseal/records")]
    pub out: PathBuf,

    /// Directory for the image blob store
    #[arg(long, default_value = ".snapseal/blobs")]
    pub blobs: PathBuf,
}

pub fn execute(args: ProveArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.prompts.len() != args.images.len() || args.seeds.len() != args.images.len() {
        return Err(format!(
            "expected one --prompt and one --seed per --image ({} images, {} prompts, {} seeds)",
            args.images.len(),
            args.prompts.len(),
            args.seeds.len()
        )
        .into());
    }

    let mut config = ProofConfig::from_env();
    if let Some(issuer) = args.issuer {
        config.issuer = issuer;
    }
    if let Some(base) = args.verify_base_url {
        config.verify_base_url = base;
    }

    let mut session = Session::new();
    for ((image, prompt), seed) in args
        .images
        .iter()
        .zip(args.prompts.iter())
        .zip(args.seeds.iter())
    {
        // Final-form bytes: sealed exactly as read, no re-encoding.
        let bytes = std::fs::read(image)
            .map_err(|e| format!("cannot read image {}: {}", image.display(), e))?;
        session.seal_next(
            GenerationParams {
                prompt: prompt.clone(),
                seed: *seed,
                model: args.model.clone(),
                width: args.width,
                height: args.height,
                steps: args.steps,
            },
            &bytes,
        )?;
    }

    let event = session.finalize(&config, &args.applicant)?;

    std::fs::create_dir_all(&args.out)?;
    let blobs = BlobStore::new(&args.blobs);
    let receipt = commit_event(&event, &blobs, &args.out)?;

    let summary = serde_json::json!({
        "report_id": event.report_id.as_str(),
        "trace_token": event.event_proof.trace_token.as_str(),
        "versions": event.version_count(),
        "final_event_hash": receipt.final_event_hash,
        "record_path": receipt.record_path,
        "verify_url": event.verification.verify_url,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
