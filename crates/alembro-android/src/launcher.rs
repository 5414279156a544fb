//! 外部浏览器启动

use std::sync::Arc;

use alembro_core::{BrowserLauncher, LaunchError};
use jni::objects::JValue;

use crate::context::AndroidContext;

pub const CHROME_PACKAGE: &str = "com.android.chrome";

const ACTION_VIEW: &str = "android.intent.action.VIEW";
/// `Intent.FLAG_ACTIVITY_NEW_TASK`
const FLAG_ACTIVITY_NEW_TASK: i32 = 0x1000_0000;

/// Opens URLs with an `ACTION_VIEW` intent pinned to one package
///
/// No fallback to other browsers: if the package is missing the launch
/// fails.
pub struct ChromeLauncher {
    context: Arc<AndroidContext>,
    package: &'static str,
}

impl ChromeLauncher {
    pub fn new(context: Arc<AndroidContext>) -> Self {
        Self {
            context,
            package: CHROME_PACKAGE,
        }
    }
}

impl BrowserLauncher for ChromeLauncher {
    fn open(&self, url: &str) -> Result<(), LaunchError> {
        let package = self.package;
        self.context
            .call(|env, context| {
                let url = env.new_string(url)?;
                let uri = env
                    .call_static_method(
                        "android/net/Uri",
                        "parse",
                        "(Ljava/lang/String;)Landroid/net/Uri;",
                        &[JValue::Object(&url)],
                    )?
                    .l()?;

                let action = env.new_string(ACTION_VIEW)?;
                let intent = env.new_object(
                    "android/content/Intent",
                    "(Ljava/lang/String;Landroid/net/Uri;)V",
                    &[JValue::Object(&action), JValue::Object(&uri)],
                )?;

                let package = env.new_string(package)?;
                env.call_method(
                    &intent,
                    "setPackage",
                    "(Ljava/lang/String;)Landroid/content/Intent;",
                    &[JValue::Object(&package)],
                )?;
                env.call_method(
                    &intent,
                    "addFlags",
                    "(I)Landroid/content/Intent;",
                    &[JValue::Int(FLAG_ACTIVITY_NEW_TASK)],
                )?;

                env.call_method(
                    context,
                    "startActivity",
                    "(Landroid/content/Intent;)V",
                    &[JValue::Object(&intent)],
                )?;
                Ok(())
            })
            .map_err(|e| LaunchError::ActivityNotFound(e.to_string()))
    }
}
