//! # Alembro - 签名身份桥接
//!
//! 向应用 UI 层暴露签名证书摘要查询与外部浏览器启动
//!
//! ## 模块
//!
//! - `alembro_crypto` - SHA-256 / base64 摘要原语
//! - `alembro_core` - 命令调度与签名身份解析
//!
//! The Android JNI bindings (`alembro-android`) and the host CLI
//! (`alembro-cli`) build on these two crates.

// Re-export all sub-crates
pub use alembro_core;
pub use alembro_crypto;
