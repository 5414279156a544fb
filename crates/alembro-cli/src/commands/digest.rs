use alembro_core::CapabilityTier;
use colored::Colorize;

use super::certificate_paths;
use crate::{error::CliResult, host::host_resolver};

pub fn handle(certs: Vec<String>, tier: CapabilityTier) -> CliResult<()> {
    println!("{}", format!("计算签名摘要 ({} 层)", tier).cyan());

    let paths = certificate_paths(certs);
    let resolver = host_resolver(tier, paths);
    let result = resolver.resolve()?;

    println!("  证书数量: {}", result.certificate_count());
    if result.certificate_count() > 1 {
        println!(
            "{}",
            "  ⚠ 存在多个签名证书，仅使用第一个计算摘要".yellow()
        );
    }

    println!();
    println!("{} {}", "摘要 (base64):".green().bold(), result.as_base64());
    println!("{} {}", "摘要 (hex):".cyan(), result.to_hex());

    Ok(())
}
