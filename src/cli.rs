use anyhow::{Context as _, Result};
use std::io::Write;

use crate::agent::{inspect, Context, Inspection, LlmClient};
use crate::config::ClientConfig;
use crate::tools::available_tools;

/// 发送一次带工具声明的请求并打印检查结果
pub async fn run<W: Write>(config: ClientConfig, out: &mut W) -> Result<Inspection> {
    let context = Context::default();
    let client = LlmClient::new(config);

    let response = client
        .chat(&context.messages(), available_tools())
        .await
        .with_context(|| format!("调用 {} 失败", client.config().chat_completions_url()))?;

    let inspection = inspect(&response, out).context("打印响应失败")?;
    out.flush()?;

    Ok(inspection)
}

/// 主入口函数
pub async fn run_cli() -> Result<()> {
    let mut stdout = std::io::stdout();
    run(ClientConfig::default(), &mut stdout).await?;
    Ok(())
}
