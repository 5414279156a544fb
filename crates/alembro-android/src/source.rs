//! 签名证书来源 (PackageManager)
//!
//! Two retrieval paths, one per platform API generation. Which one runs is
//! decided once, when the dispatcher is created.

use std::sync::Arc;

use alembro_core::{CapabilityTier, CertificateSource, PlatformError, SigningCertificateSet};
use jni::{
    errors::{Error as JniError, Result as JniResult},
    objects::{JByteArray, JObject, JObjectArray, JValue},
    JNIEnv,
};

use crate::context::AndroidContext;

/// `PackageManager.GET_SIGNATURES`
const GET_SIGNATURES: i32 = 0x0000_0040;
/// `PackageManager.GET_SIGNING_CERTIFICATES` (API 28+)
const GET_SIGNING_CERTIFICATES: i32 = 0x0800_0000;

const SIGNATURE_ARRAY: &str = "[Landroid/content/pm/Signature;";

/// Signing-info API (API 28+)
///
/// Reads `SigningInfo.getApkContentsSigners()`: every certificate that
/// signed the APK contents. This is deliberately not
/// `getSigningCertificateHistory()`, which lists rotated past signers.
pub struct ModernSource {
    context: Arc<AndroidContext>,
}

impl ModernSource {
    pub fn new(context: Arc<AndroidContext>) -> Self {
        Self { context }
    }
}

impl CertificateSource for ModernSource {
    fn tier(&self) -> CapabilityTier {
        CapabilityTier::Modern
    }

    fn signing_certificates(&self) -> Result<Option<SigningCertificateSet>, PlatformError> {
        self.context.call(|env, context| {
            let info = package_info(env, context, GET_SIGNING_CERTIFICATES)?;
            let signing_info = env
                .get_field(&info, "signingInfo", "Landroid/content/pm/SigningInfo;")?
                .l()?;
            if signing_info.is_null() {
                return Ok(None);
            }
            let signers = env
                .call_method(
                    &signing_info,
                    "getApkContentsSigners",
                    format!("(){}", SIGNATURE_ARRAY),
                    &[],
                )?
                .l()?;
            signature_blobs(env, signers)
        })
    }
}

/// Historical `PackageInfo.signatures` list (before API 28)
pub struct LegacySource {
    context: Arc<AndroidContext>,
}

impl LegacySource {
    pub fn new(context: Arc<AndroidContext>) -> Self {
        Self { context }
    }
}

impl CertificateSource for LegacySource {
    fn tier(&self) -> CapabilityTier {
        CapabilityTier::Legacy
    }

    fn signing_certificates(&self) -> Result<Option<SigningCertificateSet>, PlatformError> {
        self.context.call(|env, context| {
            let info = package_info(env, context, GET_SIGNATURES)?;
            let signatures = env.get_field(&info, "signatures", SIGNATURE_ARRAY)?.l()?;
            signature_blobs(env, signatures)
        })
    }
}

/// `context.getPackageManager().getPackageInfo(context.getPackageName(), flags)`
fn package_info<'local>(
    env: &mut JNIEnv<'local>,
    context: &JObject,
    flags: i32,
) -> JniResult<JObject<'local>> {
    let package_manager = env
        .call_method(
            context,
            "getPackageManager",
            "()Landroid/content/pm/PackageManager;",
            &[],
        )?
        .l()?;
    let package_name = env
        .call_method(context, "getPackageName", "()Ljava/lang/String;", &[])?
        .l()?;

    let info = env
        .call_method(
            &package_manager,
            "getPackageInfo",
            "(Ljava/lang/String;I)Landroid/content/pm/PackageInfo;",
            &[JValue::Object(&package_name), JValue::Int(flags)],
        )?
        .l()?;
    if info.is_null() {
        return Err(JniError::NullPtr("PackageInfo"));
    }
    Ok(info)
}

/// Copy `Signature.toByteArray()` of every element, preserving order
///
/// A null array means the platform reported no collection at all.
fn signature_blobs(
    env: &mut JNIEnv,
    signatures: JObject,
) -> JniResult<Option<SigningCertificateSet>> {
    if signatures.is_null() {
        return Ok(None);
    }
    let signatures = JObjectArray::from(signatures);
    let len = env.get_array_length(&signatures)?;

    let mut blobs = Vec::with_capacity(usize::try_from(len).unwrap_or_default());
    for index in 0..len {
        let signature = env.get_object_array_element(&signatures, index)?;
        if signature.is_null() {
            return Err(JniError::NullPtr("Signature"));
        }
        let bytes = JByteArray::from(
            env.call_method(&signature, "toByteArray", "()[B", &[])?
                .l()?,
        );
        blobs.push(env.convert_byte_array(&bytes)?);

        env.delete_local_ref(bytes)?;
        env.delete_local_ref(signature)?;
    }
    Ok(Some(blobs.into()))
}
