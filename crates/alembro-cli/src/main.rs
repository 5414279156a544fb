//! Alembro 签名摘要命令行工具

mod commands;
mod error;
mod host;
mod settings;

use alembro_core::CapabilityTier;
use clap::{Parser, Subcommand};
use error::CliResult;
use settings::Settings;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "alembro")]
#[command(about = "Alembro 签名摘要工具 - 计算应用签名证书摘要并测试宿主桥接")]
#[command(version)]
struct Cli {
    /// 配置文件路径 (默认 config/alembro.toml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 计算签名证书摘要 (第一个证书的 SHA-256, base64)
    Digest {
        /// 证书文件 (DER 或 PEM)，按顺序排列
        #[arg(long = "cert", required = true)]
        certs: Vec<String>,

        /// 平台能力层 (modern 或 legacy)
        #[arg(short, long)]
        tier: Option<CapabilityTier>,
    },

    /// 在外部浏览器中打开链接
    Open {
        /// 要打开的 URL
        #[arg(short, long)]
        url: String,

        /// 浏览器程序
        #[arg(short, long)]
        browser: Option<String>,
    },

    /// 直接调度一个命令并输出结果 JSON
    Dispatch {
        /// 端点名称 (browser-launch 或 signature-query)
        #[arg(short, long)]
        endpoint: String,

        /// 命令名称
        #[arg(short, long)]
        method: String,

        /// 参数 JSON 对象
        #[arg(short, long)]
        args: Option<String>,

        /// 证书文件 (DER 或 PEM)
        #[arg(long = "cert")]
        certs: Vec<String>,

        /// 平台能力层 (modern 或 legacy)
        #[arg(short, long)]
        tier: Option<CapabilityTier>,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Digest { certs, tier } => {
            commands::digest::handle(certs, tier.unwrap_or(settings.signature.tier))?;
        }
        Commands::Open { url, browser } => {
            commands::open::handle(url, browser, &settings)?;
        }
        Commands::Dispatch {
            endpoint,
            method,
            args,
            certs,
            tier,
        } => {
            let tier = tier.unwrap_or(settings.signature.tier);
            commands::dispatch::handle(endpoint, method, args, certs, tier, &settings)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_digest_args() {
        let cli = Cli::try_parse_from([
            "alembro", "digest", "--cert", "a.der", "--cert", "b.pem", "--tier", "legacy",
        ])
        .unwrap();
        match cli.command {
            Commands::Digest { certs, tier } => {
                assert_eq!(certs, vec!["a.der", "b.pem"]);
                assert_eq!(tier, Some(CapabilityTier::Legacy));
            }
            _ => panic!("expected digest"),
        }
    }

    #[test]
    fn test_digest_requires_a_certificate() {
        assert!(Cli::try_parse_from(["alembro", "digest"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_tier() {
        assert!(Cli::try_parse_from(["alembro", "digest", "--cert", "a.der", "--tier", "v3"]).is_err());
    }
}
