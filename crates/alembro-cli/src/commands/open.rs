use alembro_core::{Arguments, CommandKind};
use colored::Colorize;
use serde_json::Value;

use super::into_result;
use crate::{error::CliResult, host::host_dispatcher, settings::Settings};

pub fn handle(url: String, browser: Option<String>, settings: &Settings) -> CliResult<()> {
    let program = browser.unwrap_or_else(|| settings.browser.program.clone());
    println!("{}", format!("使用 {} 打开: {}", program, url).cyan());

    let dispatcher = host_dispatcher(settings.signature.tier, Vec::new(), &program);
    let mut arguments = Arguments::new();
    arguments.insert("url".to_string(), Value::String(url));

    into_result(dispatcher.dispatch(CommandKind::OpenInBrowser.name(), arguments))?;
    println!("{}", "✓ 已启动".green());

    Ok(())
}
