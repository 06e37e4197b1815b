use std::io::Write;

use crate::error::{ChatError, Result};
use crate::types::ChatResponse;

/// 检查结果摘要
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inspection {
    pub tool_calls_reported: usize,
}

/// 打印响应、内容、工具调用与 token 统计。
///
/// 工具调用只打印名称和原始参数，不解析、不校验、也不执行。
pub fn inspect<W: Write>(response: &ChatResponse, out: &mut W) -> Result<Inspection> {
    let message = response.message().ok_or(ChatError::NoChoices)?;

    writeln!(out, "=== Initial Response ===")?;
    writeln!(out, "{:#?}", response)?;

    writeln!(out)?;
    writeln!(out, "=== Message Content ===")?;
    writeln!(out, "Content: {}", message.content.as_deref().unwrap_or("None"))?;

    let tool_calls = message.tool_calls();
    if tool_calls.is_empty() {
        writeln!(out, "Tool calls: None")?;
    } else {
        let names: Vec<&str> = tool_calls.iter().map(|c| c.function.name.as_str()).collect();
        writeln!(out, "Tool calls: [{}]", names.join(", "))?;
    }

    let usage = &response.usage;
    writeln!(
        out,
        "Prompt Tokens: {}, Completion Tokens: {}, Total Tokens: {}",
        usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
    )?;

    if !tool_calls.is_empty() {
        writeln!(out)?;
        writeln!(out, "=== Requested Tool Calls ===")?;
        for tool_call in tool_calls {
            writeln!(out, "Function: {}", tool_call.function.name)?;
            writeln!(out, "Arguments: {}", tool_call.function.raw_arguments())?;
        }
    }

    Ok(Inspection {
        tool_calls_reported: tool_calls.len(),
    })
}
