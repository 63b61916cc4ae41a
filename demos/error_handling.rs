//! Error handling example showing how to handle different rejection kinds.
//!
//! This example demonstrates the failure modes a token consumer sees:
//! structural faults, unknown algorithms, and signature mismatches.
//!
//! # Running this example
//!
//! ```bash
//! cargo run --example error_handling
//! ```

#![allow(
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::uninlined_format_args,
    reason = "examples are allowed to use println and simple formatting"
)]

use hmac_jwt::{decode, encode, Algorithm, TokenError};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("hmac-jwt: Error Handling Example\n");

    let key = b"example-shared-secret";
    let token = encode(&json!({"sub": "user-123"}), key, Algorithm::Hs256)?;

    // Example 1: wrong number of segments
    println!("Example 1: Truncated token (should fail)");
    match decode("header.payload", key) {
        Ok(_) => println!("   Unexpected success"),
        Err(TokenError::Malformed(reason)) => {
            println!("   ✓ Caught structural fault: {}", reason);
        }
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Example 2: wrong key
    println!("\nExample 2: Wrong verification key (should fail)");
    match decode(&token, b"a-different-secret") {
        Ok(_) => println!("   Unexpected success"),
        Err(TokenError::SignatureMismatch) => {
            println!("   ✓ Caught signature mismatch");
            println!("   Recovery: check which key this producer signs with");
        }
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Example 3: unsupported algorithm identifier
    println!("\nExample 3: Unsupported algorithm identifier (should fail)");
    match Algorithm::from_name("HS128") {
        Ok(_) => println!("   Unexpected success"),
        Err(TokenError::UnsupportedAlgorithm(name)) => {
            println!("   ✓ Rejected identifier: {}", name);
            println!("   Recovery: use HS256, HS384, or HS512");
        }
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Example 4: tampered payload
    println!("\nExample 4: Tampered payload (should fail)");
    let parts: Vec<&str> = token.split('.').collect();
    let tampered = format!("{}.eyJzdWIiOiJhZG1pbiJ9.{}", parts[0], parts[2]);
    match decode(&tampered, key) {
        Ok(_) => println!("   Unexpected success"),
        Err(TokenError::SignatureMismatch) => {
            println!("   ✓ Altered claims detected");
        }
        Err(e) => println!("   Unexpected error: {}", e),
    }

    Ok(())
}
