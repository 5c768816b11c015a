//! Sign command implementation.

use chrono::Utc;
use clap::Args;
use hooksig_core::{decode_signing_key, read_payload, sign_delivery, KeyEncoding, PayloadSource};

use crate::errors::CliError;
use crate::normalize::strip_quotes;

#[derive(Args, Debug)]
pub struct SignArgs {
    /// Payload file; reads stdin when omitted or `-`
    #[arg(short = 'f', long)]
    pub file: Option<String>,

    /// Secret key encoding (hex or base64)
    #[arg(short, long, env = "HOOKSIG_KEY_ENCODING")]
    pub encoding: String,

    /// Encoded 32-byte secret key seed
    #[arg(
        long,
        env = "HOOKSIG_SECRET_KEY",
        hide_env_values = true,
        allow_hyphen_values = true
    )]
    pub secret_key: String,

    /// Delivery identifier placed in the header
    #[arg(long)]
    pub id: String,

    /// Timestamp to sign (default: current Unix time in seconds)
    #[arg(long)]
    pub timestamp: Option<String>,

    /// Output header fields as JSON
    #[arg(long)]
    pub json: bool,

    /// Reject payloads larger than SIZE bytes (default: unlimited)
    #[arg(long)]
    pub max_size: Option<u64>,
}

pub fn run(args: SignArgs) -> Result<(), CliError> {
    let encoding: KeyEncoding = strip_quotes(&args.encoding).parse()?;
    let signing_key = decode_signing_key(encoding, strip_quotes(&args.secret_key))?;
    let source = PayloadSource::from_arg(args.file.as_deref().map(strip_quotes));
    let payload = read_payload(&source, args.max_size)?;

    let timestamp = args
        .timestamp
        .unwrap_or_else(|| Utc::now().timestamp().to_string());
    let header = sign_delivery(&signing_key, &args.id, &timestamp, &payload);
    tracing::info!(
        id = %header.id,
        timestamp = %header.timestamp,
        payload_bytes = payload.len(),
        "delivery signed"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&header)?);
    } else {
        println!("{}", header);
    }
    Ok(())
}
