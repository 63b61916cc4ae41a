//! Basic token round trip: sign a set of claims, then verify and read them.
//!
//! # Running this example
//!
//! ```bash
//! cargo run --example encode_decode
//! ```

#![allow(
    clippy::print_stdout,
    clippy::uninlined_format_args,
    reason = "examples are allowed to use println and simple formatting"
)]

use hmac_jwt::{decode, encode, Algorithm};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("hmac-jwt: Encode/Decode Example\n");

    // In production, load the secret from the environment or a key store.
    let key = b"example-shared-secret";

    let claims = json!({
        "sub": "1234567890",
        "name": "John Doe",
        "admin": false,
    });

    for algorithm in Algorithm::ALL {
        let token = encode(&claims, key, algorithm)?;
        println!("{} token ({} signature bytes):", algorithm, algorithm.signature_len());
        println!("  {}\n", token);

        let decoded = decode(&token, key)?;
        assert_eq!(decoded, claims);
    }

    println!("All tokens verified and decoded back to the original claims.");
    Ok(())
}
