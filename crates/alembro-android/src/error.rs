//! Android 桥接错误类型

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AndroidBridgeError {
    #[error("JNI error: {0}")]
    JniError(#[from] jni::errors::Error),

    #[error("Invalid handle: {0}")]
    InvalidHandle(i64),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, AndroidBridgeError>;
