use alembro_core::CapabilityTier;

use super::{certificate_paths, into_result};
use crate::{error::CliResult, host::host_dispatcher, settings::Settings};

/// Run one raw request and print the outcome JSON exactly as a UI layer
/// would receive it
pub fn handle(
    endpoint: String,
    method: String,
    args: Option<String>,
    certs: Vec<String>,
    tier: CapabilityTier,
    settings: &Settings,
) -> CliResult<()> {
    let paths = certificate_paths(certs);
    let dispatcher = host_dispatcher(tier, paths, &settings.browser.program);

    let outcome = dispatcher.dispatch_json(&endpoint, &method, args.as_deref().unwrap_or(""));
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    into_result(outcome).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use alembro_core::FailureKind;
    use std::fs;

    #[test]
    fn test_missing_certificate_becomes_internal_error_outcome() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("missing.der");

        let result = handle(
            "signature-query".to_string(),
            "getSigningDigest".to_string(),
            None,
            vec![missing.display().to_string()],
            CapabilityTier::Modern,
            &Settings::default(),
        );

        match result {
            Err(CliError::OperationFailed { kind, message }) => {
                assert_eq!(kind, FailureKind::InternalError);
                assert!(message.starts_with("Erro ao obter assinatura: package info unavailable"));
            }
            other => panic!("expected failure outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_dispatch_digest_success() {
        let temp_dir = tempfile::tempdir().unwrap();
        let cert = temp_dir.path().join("cert.der");
        fs::write(&cert, b"CERTA").unwrap();

        let result = handle(
            "signature-query".to_string(),
            "getSigningDigest".to_string(),
            Some("{}".to_string()),
            vec![cert.display().to_string()],
            CapabilityTier::Legacy,
            &Settings::default(),
        );
        assert!(result.is_ok());
    }
}
