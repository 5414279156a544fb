//! Utility functions for certificate import
//!
//! Certificates arrive either as raw DER blobs (what the platform reports)
//! or as PEM files exported by build tooling. Both are reduced to the raw
//! encoded bytes the digest is computed over.

use std::{fs, path::Path};

use pem::parse_many;

use crate::error::{Error, Result};

const CERTIFICATE_LABEL: &str = "CERTIFICATE";

/// Extract every PEM block from a string, in order
///
/// Blocks with labels other than `CERTIFICATE` are skipped.
pub fn certificates_from_pem(pem_str: &str) -> Result<Vec<Vec<u8>>> {
    let blocks = parse_many(pem_str)?;
    Ok(blocks
        .into_iter()
        .filter(|block| block.tag() == CERTIFICATE_LABEL)
        .map(|block| block.into_contents())
        .collect())
}

/// Whether the data looks like PEM text rather than a binary DER blob
pub fn is_pem(data: &[u8]) -> bool {
    let trimmed = data
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .map(|start| &data[start..])
        .unwrap_or(&[]);
    trimmed.starts_with(b"-----BEGIN ")
}

/// Load the certificate blobs stored in a file
///
/// PEM files may hold several certificates; DER files hold exactly one.
///
/// # Returns
/// The raw encoded certificates, in file order
pub fn load_certificates_from_file(path: impl AsRef<Path>) -> Result<Vec<Vec<u8>>> {
    let path = path.as_ref();
    let data = fs::read(path)?;

    if is_pem(&data) {
        let text = String::from_utf8(data)
            .map_err(|e| Error::Other(format!("PEM file is not UTF-8: {}", e)))?;
        let certs = certificates_from_pem(&text)?;
        if certs.is_empty() {
            return Err(Error::EmptyCertificate(path.display().to_string()));
        }
        Ok(certs)
    } else if data.is_empty() {
        Err(Error::EmptyCertificate(path.display().to_string()))
    } else {
        Ok(vec![data])
    }
}
