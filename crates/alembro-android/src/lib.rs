//! Alembro Android 库
//!
//! 通过 JNI 向 Kotlin/Java 暴露签名摘要查询与外部浏览器启动。
//!
//! The Java side owns one dispatcher handle for the lifetime of its
//! activity:
//!
//! ```java
//! long handle = AlembroBridge.nativeCreate(context);
//! String outcome = AlembroBridge.nativeDispatch(handle, "signature-query", "getSigningDigest", "{}");
//! AlembroBridge.nativeDestroy(handle);
//! ```
//!
//! `nativeDispatch` always returns the outcome JSON; it never throws for
//! handler failures.

use std::sync::Arc;

use alembro_core::{Dispatcher, SigningIdentityResolver};
use jni::{
    objects::{JClass, JObject, JString},
    sys::{jlong, jstring},
    JNIEnv,
};

mod context;
mod error;
mod launcher;
mod source;

pub use context::AndroidContext;
pub use error::*;
pub use launcher::{ChromeLauncher, CHROME_PACKAGE};
pub use source::{LegacySource, ModernSource};

/// JNI 错误处理辅助函数
fn to_jni_result<T>(env: &mut JNIEnv, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::error!(error = %e, "native bridge call failed");
            let _ = env.throw_new("java/lang/RuntimeException", e.to_string());
            None
        }
    }
}

/// 将 Rust String 转换为 Java String
fn to_java_string(env: &mut JNIEnv, s: String) -> Result<jstring> {
    Ok(env.new_string(s)?.into_raw())
}

/// Build the dispatcher for the application behind `context`
///
/// The capability tier is detected once here; only the matching source is
/// constructed. Only JNI setup faults (null context, no VM) fail creation.
pub fn create_dispatcher(env: &mut JNIEnv, context: &JObject) -> Result<Dispatcher> {
    let context = Arc::new(AndroidContext::new(env, context)?);
    let tier = context.capability_tier();

    let resolver = SigningIdentityResolver::for_tier(
        tier,
        || ModernSource::new(Arc::clone(&context)),
        || LegacySource::new(Arc::clone(&context)),
    );
    let launcher = ChromeLauncher::new(context);
    Ok(Dispatcher::new(resolver, Box::new(launcher)))
}

/// Borrow the dispatcher behind a handle returned by `nativeCreate`
///
/// # Safety
/// `handle` must be zero or a value returned by `nativeCreate` that has not
/// been passed to `nativeDestroy`.
unsafe fn dispatcher_from_handle<'a>(handle: jlong) -> Result<&'a Dispatcher> {
    (handle as *const Dispatcher)
        .as_ref()
        .ok_or(AndroidBridgeError::InvalidHandle(handle))
}

fn get_rust_string(env: &mut JNIEnv, value: &JString, name: &str) -> Result<String> {
    if value.is_null() {
        return Err(AndroidBridgeError::InvalidParameter(format!("{} is null", name)));
    }
    Ok(env.get_string(value)?.into())
}

/// 创建调度器，返回句柄
#[no_mangle]
pub extern "system" fn Java_com_alembro_AlembroBridge_nativeCreate<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    context: JObject<'local>,
) -> jlong {
    let result = create_dispatcher(&mut env, &context);

    match to_jni_result(&mut env, result) {
        Some(dispatcher) => Box::into_raw(Box::new(dispatcher)) as jlong,
        None => 0,
    }
}

/// 调度命令，返回结果 JSON
///
/// ```json
/// {"status": "success", "value": {"digest": "…"}}
/// {"status": "error", "code": "NO_SIGNATURE", "message": "…"}
/// ```
#[no_mangle]
pub extern "system" fn Java_com_alembro_AlembroBridge_nativeDispatch<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    handle: jlong,
    endpoint: JString<'local>,
    method: JString<'local>,
    arguments: JString<'local>,
) -> jstring {
    let result = dispatch_internal(&mut env, handle, &endpoint, &method, &arguments);

    match to_jni_result(&mut env, result) {
        Some(json_str) => match to_java_string(&mut env, json_str) {
            Ok(jstr) => jstr,
            Err(_) => std::ptr::null_mut(),
        },
        None => std::ptr::null_mut(),
    }
}

fn dispatch_internal(
    env: &mut JNIEnv,
    handle: jlong,
    endpoint: &JString,
    method: &JString,
    arguments: &JString,
) -> Result<String> {
    // SAFETY: the Java wrapper only passes handles from nativeCreate
    let dispatcher = unsafe { dispatcher_from_handle(handle)? };

    let endpoint = get_rust_string(env, endpoint, "endpoint")?;
    let method = get_rust_string(env, method, "method")?;
    let arguments = if arguments.is_null() {
        String::new()
    } else {
        get_rust_string(env, arguments, "arguments")?
    };

    let outcome = dispatcher.dispatch_json(&endpoint, &method, &arguments);
    Ok(outcome.to_json())
}

/// 释放调度器
#[no_mangle]
pub extern "system" fn Java_com_alembro_AlembroBridge_nativeDestroy<'local>(
    _env: JNIEnv<'local>,
    _class: JClass<'local>,
    handle: jlong,
) {
    if handle != 0 {
        // SAFETY: handle came from Box::into_raw in nativeCreate
        drop(unsafe { Box::from_raw(handle as *mut Dispatcher) });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_handle_is_rejected() {
        let result = unsafe { dispatcher_from_handle(0) };
        assert!(matches!(result, Err(AndroidBridgeError::InvalidHandle(0))));
    }

    #[test]
    fn test_handle_roundtrip() {
        use alembro_core::{
            BrowserLauncher, CapabilityTier, CertificateSource, LaunchError, PlatformError,
            SigningCertificateSet,
        };

        struct Empty;
        impl CertificateSource for Empty {
            fn tier(&self) -> CapabilityTier {
                CapabilityTier::Legacy
            }
            fn signing_certificates(
                &self,
            ) -> std::result::Result<Option<SigningCertificateSet>, PlatformError> {
                Ok(None)
            }
        }
        struct Nowhere;
        impl BrowserLauncher for Nowhere {
            fn open(&self, _url: &str) -> std::result::Result<(), LaunchError> {
                Err(LaunchError::ActivityNotFound(CHROME_PACKAGE.to_string()))
            }
        }

        let dispatcher = Dispatcher::new(
            SigningIdentityResolver::new(Box::new(Empty)),
            Box::new(Nowhere),
        );
        let handle = Box::into_raw(Box::new(dispatcher)) as jlong;

        let borrowed = unsafe { dispatcher_from_handle(handle) }.unwrap();
        let outcome = borrowed.dispatch_json("signature-query", "getSigningDigest", "");
        assert_eq!(
            outcome.failure_kind(),
            Some(alembro_core::FailureKind::NoSignature)
        );

        drop(unsafe { Box::from_raw(handle as *mut Dispatcher) });
    }
}
