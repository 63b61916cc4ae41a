//! Inspecting a token header before verification.
//!
//! A consumer holding several keys can read the unauthenticated header to
//! decide which key to verify with, then authenticate properly.
//!
//! # Running this example
//!
//! ```bash
//! cargo run --example inspect_header
//! ```

#![allow(
    clippy::print_stdout,
    clippy::uninlined_format_args,
    reason = "examples are allowed to use println and simple formatting"
)]

use hmac_jwt::{decode, decode_header, encode, Algorithm};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("hmac-jwt: Header Inspection Example\n");

    let key = b"example-shared-secret";
    let token = encode(&json!({"sub": "user-123"}), key, Algorithm::Hs384)?;

    // The header is readable without the key, but nothing in it is
    // trustworthy until the signature verifies.
    let header = decode_header(&token)?;
    println!("Declared type:      {}", header["typ"]);
    println!("Declared algorithm: {}", header["alg"]);

    let algorithm = Algorithm::from_name(header["alg"].as_str().unwrap_or_default())?;
    println!("Mapped hash:        {}", algorithm.hash_name());

    let claims = decode(&token, key)?;
    println!("\nVerified claims: {}", claims);

    Ok(())
}
