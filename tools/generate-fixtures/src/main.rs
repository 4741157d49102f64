//! Generate canonical fixtures for Vault conformance testing
//!
//! Signature goldens are computed under the fixed conformance key `ab`,
//! matching the key the conformance suite decodes.

use std::fs;
use std::path::Path;

use vault_core::SecretKey;
use vault_signing::{canonicalize_value, sign_canonical};

const CONFORMANCE_KEY_HEX: &str = "ab";

fn main() {
    let fixtures_dir = Path::new("fixtures");
    let payloads_dir = fixtures_dir.join("payloads");
    let canonical_dir = fixtures_dir.join("canonical");

    let key = SecretKey::from_hex(CONFORMANCE_KEY_HEX).expect("conformance key is valid hex");

    println!("Generating canonical fixtures...");
    println!();

    let mut count = 0;

    for entry in fs::read_dir(&payloads_dir).expect("Failed to read payloads directory") {
        let path = entry.expect("Failed to read entry").path();

        if path.extension().map(|e| e == "json").unwrap_or(false) {
            let filename = path.file_stem().unwrap().to_str().unwrap();
            let json = fs::read_to_string(&path)
                .unwrap_or_else(|_| panic!("Failed to read {}.json", filename));

            let payload: serde_json::Value = serde_json::from_str(&json)
                .unwrap_or_else(|_| panic!("Failed to parse {}.json", filename));

            // Generate and write the canonical string
            let canonical = canonicalize_value(&payload)
                .unwrap_or_else(|_| panic!("Failed to canonicalize {}.json", filename));
            let canonical_path = canonical_dir.join(format!("{}.txt", filename));
            fs::write(&canonical_path, &canonical)
                .unwrap_or_else(|_| panic!("Failed to write {}.txt", filename));
            println!("  Generated: canonical/{}.txt", filename);

            // Generate and write the signature
            let signature = sign_canonical(&canonical, &key);
            let signature_path = canonical_dir.join(format!("{}.sha512", filename));
            fs::write(&signature_path, &signature)
                .unwrap_or_else(|_| panic!("Failed to write {}.sha512", filename));
            println!("  Generated: canonical/{}.sha512", filename);

            count += 1;
        }
    }

    println!();
    println!("Done! Generated {} canonical fixtures.", count);
}
