use thiserror::Error;

/// Crypto模块的错误类型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Base64 decode error: {0}")]
    Base64Error(#[from] base64::DecodeError),

    #[error("PEM error: {0}")]
    PemError(#[from] pem::PemError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// 证书数据为空
    #[error("Empty certificate data: {0}")]
    EmptyCertificate(String),

    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// Result类型别名
pub type Result<T> = std::result::Result<T, Error>;
