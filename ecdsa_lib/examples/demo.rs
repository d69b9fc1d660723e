use cdc_ecdsa::KeyPair;
use p256::ecdsa::Signature;

fn main() {
    // Generate a new key pair
    let keypair = KeyPair::generate();

    // Sign a message
    let message = b"Hello, World!";
    let signature = keypair.sign(message);

    // Hex-encode the DER signature, the form the bureau expects in headers
    let der = signature.to_der();
    println!("x-signature: {}", hex::encode(der.as_bytes()));

    // Verify the signature
    let is_valid = keypair.verify(message, &signature);
    println!("Signature is valid: {}", is_valid);

    // Parse the DER bytes back and verify again
    let restored = Signature::from_der(der.as_bytes()).unwrap();
    let is_valid = keypair.verify(message, &restored);
    println!("Signature is valid after DER roundtrip: {}", is_valid);
}

// use these cargo dependencies
// [dependencies]
// cdc-ecdsa = { path = "path/to/ecdsa_lib" }
