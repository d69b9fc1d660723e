//! ECDSA key material and signing for the Círculo de Crédito APIs.
//!
//! The bureau authenticates every request with an ECDSA-SHA256 signature
//! computed by the grantor. This crate loads the key material handed out
//! during enrollment (the grantor's private key from a password-protected
//! PKCS12 keystore, the bureau's public key from its X.509 certificate in
//! PEM format) and produces DER-encoded signatures over request content.
//!
//! Keys are loaded once at startup and held in memory for the process
//! lifetime; the private key never touches disk again.

use std::fs;
use std::path::{Path, PathBuf};

use ecdsa::signature::{Signer, Verifier};
use openssl::pkcs12::Pkcs12;
use openssl::pkey::PKey;
use openssl::x509::X509;
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use p256::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rand_core::OsRng;
use thiserror::Error;
use tracing::{error, info};

/// Failures while loading key material from disk.
///
/// Every loader logs the failure before returning it, so callers that only
/// bubble the error up still leave a trace of which file was rejected.
#[derive(Debug, Error)]
pub enum KeystoreError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse certificate {}: {source}", .path.display())]
    Certificate {
        path: PathBuf,
        #[source]
        source: openssl::error::ErrorStack,
    },
    #[error("failed to open keystore {}: {source}", .path.display())]
    Keystore {
        path: PathBuf,
        #[source]
        source: openssl::error::ErrorStack,
    },
    #[error("keystore {} contains no private key", .path.display())]
    NoPrivateKey { path: PathBuf },
    #[error("private key in {} is not usable for P-256 signing: {message}", .path.display())]
    PrivateKey { path: PathBuf, message: String },
    #[error("certificate {} does not carry a P-256 public key: {message}", .path.display())]
    PublicKey { path: PathBuf, message: String },
}

/// Loads the EC public key embedded in a PEM X.509 certificate.
///
/// This is the bureau's certificate; its key takes no part in request
/// signing but is validated and held for the process lifetime.
pub fn load_public_key_from_certificate(
    cert_path: impl AsRef<Path>,
) -> Result<VerifyingKey, KeystoreError> {
    let path = cert_path.as_ref();
    info!("loading public key from certificate {}", path.display());

    let pem = fs::read(path).map_err(|source| read_failed(path, source))?;
    let spki_der = X509::from_pem(&pem)
        .and_then(|cert| cert.public_key())
        .and_then(|key| key.public_key_to_der())
        .map_err(|source| {
            error!("failed to parse certificate {}: {}", path.display(), source);
            KeystoreError::Certificate {
                path: path.to_path_buf(),
                source,
            }
        })?;
    let verifying_key = VerifyingKey::from_public_key_der(&spki_der).map_err(|source| {
        error!(
            "certificate {} does not carry a P-256 public key: {}",
            path.display(),
            source
        );
        KeystoreError::PublicKey {
            path: path.to_path_buf(),
            message: source.to_string(),
        }
    })?;

    info!("public key loaded from {}", path.display());
    Ok(verifying_key)
}

/// Loads the grantor's EC private key from a PKCS12 keystore.
pub fn load_private_key_from_pkcs12(
    pkcs12_path: impl AsRef<Path>,
    password: &str,
) -> Result<SigningKey, KeystoreError> {
    let path = pkcs12_path.as_ref();
    info!("loading private key from PKCS12 keystore {}", path.display());

    let der = fs::read(path).map_err(|source| read_failed(path, source))?;
    let parsed = Pkcs12::from_der(&der)
        .and_then(|keystore| keystore.parse2(password))
        .map_err(|source| {
            error!("failed to open keystore {}: {}", path.display(), source);
            KeystoreError::Keystore {
                path: path.to_path_buf(),
                source,
            }
        })?;
    let pkey = parsed.pkey.ok_or_else(|| {
        error!("keystore {} contains no private key", path.display());
        KeystoreError::NoPrivateKey {
            path: path.to_path_buf(),
        }
    })?;
    let signing_key = signing_key_from_openssl(path, &pkey)?;

    info!("private key loaded from {}", path.display());
    Ok(signing_key)
}

/// Loads an EC private key from a PEM file, decrypting it with `password`
/// when the key is protected.
pub fn load_private_key_from_pem(
    key_path: impl AsRef<Path>,
    password: Option<&str>,
) -> Result<SigningKey, KeystoreError> {
    let path = key_path.as_ref();
    info!("loading private key from {}", path.display());

    let pem = fs::read(path).map_err(|source| read_failed(path, source))?;
    let pkey = match password {
        Some(pass) => PKey::private_key_from_pem_passphrase(&pem, pass.as_bytes()),
        None => PKey::private_key_from_pem(&pem),
    }
    .map_err(|source| {
        error!("failed to parse private key {}: {}", path.display(), source);
        KeystoreError::Keystore {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let signing_key = signing_key_from_openssl(path, &pkey)?;

    info!("private key loaded from {}", path.display());
    Ok(signing_key)
}

fn read_failed(path: &Path, source: std::io::Error) -> KeystoreError {
    error!("failed to read {}: {}", path.display(), source);
    KeystoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Bridges an openssl private key into the P-256 signing type via PKCS8.
fn signing_key_from_openssl(
    path: &Path,
    pkey: &PKey<openssl::pkey::Private>,
) -> Result<SigningKey, KeystoreError> {
    let pkcs8_pem = pkey.private_key_to_pem_pkcs8().map_err(|source| {
        error!("failed to re-encode private key {}: {}", path.display(), source);
        KeystoreError::Keystore {
            path: path.to_path_buf(),
            source,
        }
    })?;
    SigningKey::from_pkcs8_pem(&String::from_utf8_lossy(&pkcs8_pem)).map_err(|source| {
        error!(
            "private key in {} is not usable for P-256 signing: {}",
            path.display(),
            source
        );
        KeystoreError::PrivateKey {
            path: path.to_path_buf(),
            message: source.to_string(),
        }
    })
}

/// The grantor's P-256 key pair: the signing key plus the verifying key
/// derived from it.
pub struct KeyPair {
    signing_key: SigningKey,
    verifying_key: VerifyingKey,
}

impl KeyPair {
    /// Generate a new random key pair.
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut OsRng);
        Self::from_signing_key(signing_key)
    }

    /// Wrap an already-loaded signing key, deriving the verifying half.
    pub fn from_signing_key(signing_key: SigningKey) -> Self {
        let verifying_key = VerifyingKey::from(&signing_key);
        Self {
            signing_key,
            verifying_key,
        }
    }

    /// Load the key pair from a password-protected PKCS12 keystore.
    pub fn load_from_pkcs12(
        pkcs12_path: impl AsRef<Path>,
        password: &str,
    ) -> Result<Self, KeystoreError> {
        let signing_key = load_private_key_from_pkcs12(pkcs12_path, password)?;
        Ok(Self::from_signing_key(signing_key))
    }

    /// Sign a message with ECDSA-SHA256 using the current signing key.
    ///
    /// ECDSA is randomized: signing the same message twice can yield
    /// different signatures, both of which verify.
    pub fn sign(&self, message: &[u8]) -> Signature {
        self.signing_key.sign(message)
    }

    /// Verify a signature with the verifying key.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        self.verifying_key.verify(message, signature).is_ok()
    }

    /// Get the verifying key derived from the signing key.
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }
}

// ----------------------------------------------
//
// Unit tests
//

#[cfg(test)]
mod tests {
    use super::*;

    use openssl::asn1::Asn1Time;
    use openssl::bn::BigNum;
    use openssl::ec::{EcGroup, EcKey};
    use openssl::hash::MessageDigest;
    use openssl::nid::Nid;
    use openssl::symm::Cipher;
    use openssl::x509::X509NameBuilder;

    /// Generates a fresh P-256 key plus a self-signed certificate, the same
    /// bundle shape the bureau issues.
    fn generate_key_and_cert() -> (PKey<openssl::pkey::Private>, X509) {
        generate_key_and_cert_on_curve(Nid::X9_62_PRIME256V1)
    }

    fn generate_key_and_cert_on_curve(curve: Nid) -> (PKey<openssl::pkey::Private>, X509) {
        let group = EcGroup::from_curve_name(curve).unwrap();
        let ec_key = EcKey::generate(&group).unwrap();
        let pkey = PKey::from_ec_key(ec_key).unwrap();

        let mut name = X509NameBuilder::new().unwrap();
        name.append_entry_by_text("CN", "cdc-ecdsa test").unwrap();
        let name = name.build();

        let mut builder = X509::builder().unwrap();
        builder.set_version(2).unwrap();
        let serial = BigNum::from_u32(1).unwrap().to_asn1_integer().unwrap();
        builder.set_serial_number(&serial).unwrap();
        builder.set_subject_name(&name).unwrap();
        builder.set_issuer_name(&name).unwrap();
        builder.set_pubkey(&pkey).unwrap();
        builder
            .set_not_before(&Asn1Time::days_from_now(0).unwrap())
            .unwrap();
        builder
            .set_not_after(&Asn1Time::days_from_now(30).unwrap())
            .unwrap();
        builder.sign(&pkey, MessageDigest::sha256()).unwrap();
        (pkey, builder.build())
    }

    fn expected_signing_key(pkey: &PKey<openssl::pkey::Private>) -> SigningKey {
        let pem = pkey.private_key_to_pem_pkcs8().unwrap();
        SigningKey::from_pkcs8_pem(&String::from_utf8_lossy(&pem)).unwrap()
    }

    /// Unique scratch path per test; tests clean these up themselves.
    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("cdc_ecdsa_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_signature_verification() {
        let keypair = KeyPair::generate();
        let message = b"Hello, World!";
        let signature = keypair.sign(message);
        assert!(keypair.verify(message, &signature));
    }

    #[test]
    fn test_same_message_twice_both_verify() {
        // ECDSA uses a random nonce, so the two signatures need not match
        // byte for byte, but both must verify.
        let keypair = KeyPair::generate();
        let message = b"misma consulta";
        let first = keypair.sign(message);
        let second = keypair.sign(message);
        assert!(keypair.verify(message, &first));
        assert!(keypair.verify(message, &second));
    }

    #[test]
    fn test_empty_message_signs_and_parses_as_der() {
        let keypair = KeyPair::generate();
        let signature = keypair.sign(b"");
        let der = signature.to_der();
        assert!(!der.as_bytes().is_empty());
        let reparsed = Signature::from_der(der.as_bytes()).unwrap();
        assert!(keypair.verify(b"", &reparsed));
    }

    #[test]
    fn test_der_roundtrip_verifies() {
        let keypair = KeyPair::generate();
        let message = b"folio 12AB34";
        let signature = keypair.sign(message);
        let restored = Signature::from_der(signature.to_der().as_bytes()).unwrap();
        assert!(keypair.verify(message, &restored));
    }

    #[test]
    fn test_load_public_key_from_certificate() {
        let (pkey, cert) = generate_key_and_cert();
        let cert_path = scratch_path("cert.pem");
        fs::write(&cert_path, cert.to_pem().unwrap()).unwrap();

        let loaded = load_public_key_from_certificate(&cert_path).unwrap();
        let _ = fs::remove_file(&cert_path);

        let expected = VerifyingKey::from(&expected_signing_key(&pkey));
        assert_eq!(
            loaded.to_encoded_point(false),
            expected.to_encoded_point(false)
        );
    }

    #[test]
    fn test_malformed_certificate_is_an_error_not_a_panic() {
        let cert_path = scratch_path("bogus_cert.pem");
        fs::write(&cert_path, b"this is not a certificate").unwrap();

        let result = load_public_key_from_certificate(&cert_path);
        let _ = fs::remove_file(&cert_path);

        assert!(matches!(result, Err(KeystoreError::Certificate { .. })));
    }

    #[test]
    fn test_missing_certificate_file_is_io_error() {
        let result = load_public_key_from_certificate(scratch_path("no_such_cert.pem"));
        assert!(matches!(result, Err(KeystoreError::Io { .. })));
    }

    #[test]
    fn test_non_p256_certificate_is_rejected() {
        let (_pkey, cert) = generate_key_and_cert_on_curve(Nid::SECP384R1);
        let cert_path = scratch_path("p384_cert.pem");
        fs::write(&cert_path, cert.to_pem().unwrap()).unwrap();

        let result = load_public_key_from_certificate(&cert_path);
        let _ = fs::remove_file(&cert_path);

        assert!(matches!(result, Err(KeystoreError::PublicKey { .. })));
    }

    #[test]
    fn test_non_p256_private_key_is_rejected() {
        let (pkey, _cert) = generate_key_and_cert_on_curve(Nid::SECP384R1);
        let key_path = scratch_path("p384_key.pem");
        fs::write(&key_path, pkey.private_key_to_pem_pkcs8().unwrap()).unwrap();

        let result = load_private_key_from_pem(&key_path, None);
        let _ = fs::remove_file(&key_path);

        assert!(matches!(result, Err(KeystoreError::PrivateKey { .. })));
    }

    #[test]
    fn test_load_private_key_from_pkcs12() {
        let (pkey, cert) = generate_key_and_cert();
        let keystore = Pkcs12::builder()
            .name("grantor")
            .pkey(&pkey)
            .cert(&cert)
            .build2("keystore-password")
            .unwrap();
        let keystore_path = scratch_path("keystore.p12");
        fs::write(&keystore_path, keystore.to_der().unwrap()).unwrap();

        let loaded = load_private_key_from_pkcs12(&keystore_path, "keystore-password").unwrap();
        let _ = fs::remove_file(&keystore_path);

        // The loaded key must sign messages the expected key can verify.
        let keypair = KeyPair::from_signing_key(loaded);
        let expected = KeyPair::from_signing_key(expected_signing_key(&pkey));
        let signature = keypair.sign(b"cross check");
        assert!(expected.verify(b"cross check", &signature));
    }

    #[test]
    fn test_wrong_pkcs12_password_is_an_error() {
        let (pkey, cert) = generate_key_and_cert();
        let keystore = Pkcs12::builder()
            .name("grantor")
            .pkey(&pkey)
            .cert(&cert)
            .build2("right-password")
            .unwrap();
        let keystore_path = scratch_path("badpass.p12");
        fs::write(&keystore_path, keystore.to_der().unwrap()).unwrap();

        let result = load_private_key_from_pkcs12(&keystore_path, "wrong-password");
        let _ = fs::remove_file(&keystore_path);

        assert!(matches!(result, Err(KeystoreError::Keystore { .. })));
    }

    #[test]
    fn test_load_private_key_from_plain_pem() {
        let (pkey, _cert) = generate_key_and_cert();
        let key_path = scratch_path("plain_key.pem");
        fs::write(&key_path, pkey.private_key_to_pem_pkcs8().unwrap()).unwrap();

        let loaded = load_private_key_from_pem(&key_path, None).unwrap();
        let _ = fs::remove_file(&key_path);

        let keypair = KeyPair::from_signing_key(loaded);
        let signature = keypair.sign(b"pem key");
        assert!(keypair.verify(b"pem key", &signature));
    }

    #[test]
    fn test_load_private_key_from_encrypted_pem() {
        let (pkey, _cert) = generate_key_and_cert();
        let pem = pkey
            .private_key_to_pem_pkcs8_passphrase(Cipher::aes_256_cbc(), b"pem-password")
            .unwrap();
        let key_path = scratch_path("encrypted_key.pem");
        fs::write(&key_path, pem).unwrap();

        let loaded = load_private_key_from_pem(&key_path, Some("pem-password")).unwrap();
        let _ = fs::remove_file(&key_path);

        let keypair = KeyPair::from_signing_key(loaded);
        let signature = keypair.sign(b"encrypted pem key");
        assert!(keypair.verify(b"encrypted pem key", &signature));
    }

    #[test]
    fn test_keypair_load_from_pkcs12() {
        let (pkey, cert) = generate_key_and_cert();
        let keystore = Pkcs12::builder()
            .name("grantor")
            .pkey(&pkey)
            .cert(&cert)
            .build2("keypair-password")
            .unwrap();
        let keystore_path = scratch_path("keypair.p12");
        fs::write(&keystore_path, keystore.to_der().unwrap()).unwrap();

        let keypair = KeyPair::load_from_pkcs12(&keystore_path, "keypair-password").unwrap();
        let _ = fs::remove_file(&keystore_path);

        let signature = keypair.sign(b"loaded pair");
        assert!(keypair.verify(b"loaded pair", &signature));
    }
}
