//! Verify command implementation.

use clap::Args;
use hooksig_core::{
    read_payload, DeliveryVerifier, EncodedKey, HeaderSignature, KeyEncoding, PayloadSource,
    SignatureHeader,
};
use serde_json::json;

use crate::errors::CliError;
use crate::normalize::strip_quotes;
use crate::output;

const ECHO_WIDTH: usize = 75;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Payload file; reads stdin when omitted or `-`
    #[arg(short = 'f', long)]
    pub file: Option<String>,

    /// Public key encoding (hex or base64)
    #[arg(short, long, env = "HOOKSIG_KEY_ENCODING")]
    pub encoding: String,

    /// Encoded public key
    #[arg(short, long, env = "HOOKSIG_KEY", allow_hyphen_values = true)]
    pub key: String,

    /// Signature header value (s:<id>:<timestamp>:<signature>)
    #[arg(short, long, allow_hyphen_values = true)]
    pub signature: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Reject payloads larger than SIZE bytes (default: unlimited)
    #[arg(long)]
    pub max_size: Option<u64>,
}

/// Runs verification and reports whether the signature is valid.
pub fn run(args: VerifyArgs) -> Result<bool, CliError> {
    let encoding: KeyEncoding = strip_quotes(&args.encoding).parse()?;
    let key = EncodedKey::new(encoding, strip_quotes(&args.key));
    let header_text = strip_quotes(&args.signature);
    let source = PayloadSource::from_arg(args.file.as_deref().map(strip_quotes));

    if !args.json {
        output::echo("-f", &output::tail(&source.to_string(), ECHO_WIDTH));
        output::echo("-e", encoding.as_str());
        output::echo("-k", &output::truncate(&key.text, ECHO_WIDTH));
        output::echo("-s", &output::truncate(header_text, ECHO_WIDTH));
    }

    // Structural checks run before the payload is read.
    let verifier = DeliveryVerifier::from_encoded(&key)?;
    let header = SignatureHeader::parse(header_text)?;
    let signature = HeaderSignature::from_header(&header)?;
    let payload = read_payload(&source, args.max_size)?;

    let valid = verifier.verify_signature(&signature, &payload);
    tracing::info!(
        id = %header.id,
        timestamp = %header.timestamp,
        key_fingerprint = %verifier.fingerprint(),
        payload_bytes = payload.len(),
        valid,
        "delivery verified"
    );

    if args.json {
        let report = json!({
            "valid": valid,
            "id": header.id,
            "timestamp": header.timestamp,
            "delivered_at": output::delivered_at(&header.timestamp),
            "encoding": encoding,
            "key_fingerprint": verifier.fingerprint(),
            "payload_bytes": payload.len(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if valid {
        println!("Signature valid");
    } else {
        println!("Signature invalid");
    }

    Ok(valid)
}
