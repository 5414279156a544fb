//! 应用上下文与 JNI 调用封装
//!
//! Holds the `JavaVM` and a global reference to the Android `Context` so
//! sources and launchers can be called from any attached thread.

use alembro_core::{CapabilityTier, PlatformError};
use jni::{
    errors::Error as JniError,
    objects::{GlobalRef, JObject, JString},
    JNIEnv, JavaVM,
};

use crate::error::Result;

/// Local reference slots reserved for one platform call
const LOCAL_FRAME_CAPACITY: i32 = 32;

const NAME_NOT_FOUND_EXCEPTION: &str = "android.content.pm.PackageManager$NameNotFoundException";
const SECURITY_EXCEPTION: &str = "java.lang.SecurityException";

pub struct AndroidContext {
    vm: JavaVM,
    context: GlobalRef,
}

impl AndroidContext {
    pub fn new(env: &mut JNIEnv, context: &JObject) -> Result<Self> {
        if context.is_null() {
            return Err(JniError::NullPtr("context").into());
        }
        Ok(Self {
            vm: env.get_java_vm()?,
            context: env.new_global_ref(context)?,
        })
    }

    /// `Build.VERSION.SDK_INT` of the running device
    pub fn api_level(&self) -> std::result::Result<i32, PlatformError> {
        self.call(|env, _| {
            env.get_static_field("android/os/Build$VERSION", "SDK_INT", "I")?
                .i()
        })
    }

    /// Tier of the running device, `Legacy` when `SDK_INT` cannot be read
    ///
    /// The historical signature list is available on every API level, so a
    /// detection fault never prevents the dispatcher from being built.
    pub fn capability_tier(&self) -> CapabilityTier {
        tier_from_detection(self.api_level())
    }

    /// Run `f` inside its own local frame on the current thread
    ///
    /// A pending Java exception is cleared and converted into a
    /// [`PlatformError`] carrying the exception text.
    pub(crate) fn call<T>(
        &self,
        f: impl FnOnce(&mut JNIEnv, &JObject) -> jni::errors::Result<T>,
    ) -> std::result::Result<T, PlatformError> {
        let mut guard = self
            .vm
            .attach_current_thread()
            .map_err(|e| PlatformError::CallFailed(e.to_string()))?;
        let env: &mut JNIEnv = &mut guard;

        let context = self.context.as_obj();
        let result = env.with_local_frame(LOCAL_FRAME_CAPACITY, |env| f(env, context));
        result.map_err(|e| platform_error(env, e))
    }
}

fn tier_from_detection(api_level: std::result::Result<i32, PlatformError>) -> CapabilityTier {
    match api_level {
        Ok(api_level) => {
            let tier = CapabilityTier::from_api_level(api_level);
            tracing::debug!(api_level, %tier, "detected capability tier");
            tier
        }
        Err(e) => {
            tracing::warn!(error = %e, "SDK_INT unreadable, using legacy certificate source");
            CapabilityTier::Legacy
        }
    }
}

/// Convert a JNI failure, consuming any pending Java exception
fn platform_error(env: &mut JNIEnv, error: JniError) -> PlatformError {
    match error {
        JniError::JavaException => match take_exception(env) {
            Some(text) => classify_exception(&text),
            None => PlatformError::CallFailed(error.to_string()),
        },
        other => PlatformError::CallFailed(other.to_string()),
    }
}

/// Clear the pending exception and return its `toString()`
fn take_exception(env: &mut JNIEnv) -> Option<String> {
    if !env.exception_check().ok()? {
        return None;
    }
    let throwable = env.exception_occurred().ok()?;
    env.exception_clear().ok()?;

    let text = env
        .call_method(&throwable, "toString", "()Ljava/lang/String;", &[])
        .ok()?
        .l()
        .ok()?;
    let text: String = env.get_string(&JString::from(text)).ok()?.into();
    Some(text)
}

/// Map `Throwable.toString()` output ("class: message") onto platform errors
pub(crate) fn classify_exception(text: &str) -> PlatformError {
    let class = text.split(':').next().unwrap_or_default().trim();
    match class {
        NAME_NOT_FOUND_EXCEPTION => PlatformError::PackageInfoUnavailable(text.to_string()),
        SECURITY_EXCEPTION => PlatformError::AccessDenied(text.to_string()),
        _ => PlatformError::CallFailed(text.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_from_detection() {
        assert_eq!(tier_from_detection(Ok(33)), CapabilityTier::Modern);
        assert_eq!(tier_from_detection(Ok(26)), CapabilityTier::Legacy);
    }

    #[test]
    fn test_unreadable_sdk_int_falls_back_to_legacy() {
        let fault = PlatformError::CallFailed("java.lang.NoSuchFieldError: SDK_INT".to_string());
        assert_eq!(tier_from_detection(Err(fault)), CapabilityTier::Legacy);
    }

    #[test]
    fn test_classify_name_not_found() {
        let error = classify_exception(
            "android.content.pm.PackageManager$NameNotFoundException: com.alembro",
        );
        assert!(matches!(error, PlatformError::PackageInfoUnavailable(_)));
        assert!(error.to_string().contains("com.alembro"));
    }

    #[test]
    fn test_classify_security_exception() {
        let error = classify_exception("java.lang.SecurityException: denied");
        assert!(matches!(error, PlatformError::AccessDenied(_)));
    }

    #[test]
    fn test_classify_other_keeps_text() {
        let error = classify_exception("java.lang.NullPointerException");
        assert_eq!(
            error,
            PlatformError::CallFailed("java.lang.NullPointerException".to_string())
        );
    }
}
