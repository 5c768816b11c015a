//! Keygen command implementation.

use clap::Args;
use ed25519_dalek::SigningKey;
use hooksig_core::{encode_key, key_fingerprint, KeyEncoding};
use serde_json::json;

use crate::errors::CliError;
use crate::normalize::strip_quotes;

#[derive(Args, Debug)]
pub struct KeygenArgs {
    /// Output encoding for both keys (hex or base64)
    #[arg(short, long, default_value = "hex")]
    pub encoding: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: KeygenArgs) -> Result<(), CliError> {
    let encoding: KeyEncoding = strip_quotes(&args.encoding).parse()?;

    let signing_key = SigningKey::generate(&mut rand::thread_rng());
    let public = signing_key.verifying_key().to_bytes();
    let secret = encode_key(encoding, &signing_key.to_bytes());
    let public_text = encode_key(encoding, &public);
    let fingerprint = key_fingerprint(&public);

    if args.json {
        let keys = json!({
            "encoding": encoding,
            "secret_key": secret,
            "public_key": public_text,
            "key_fingerprint": fingerprint,
        });
        println!("{}", serde_json::to_string_pretty(&keys)?);
    } else {
        println!("secret_key: {}", secret);
        println!("public_key: {}", public_text);
        println!("fingerprint: {}", fingerprint);
    }
    Ok(())
}
