use once_cell::sync::Lazy;

use crate::types::{FunctionDefinition, Tool};

pub const WEATHER_TOOL_NAME: &str = "get_current_weather";
pub const WEATHER_TOOL_DESCRIPTION: &str =
    "Returns a short human-readable sentence describing the current weather for a given city.";

/// 获取静态工具列表
pub fn available_tools() -> &'static [Tool] {
    &TOOLS
}

/// 向模型声明的工具列表（懒加载，只初始化一次，之后不再修改）
static TOOLS: Lazy<Vec<Tool>> = Lazy::new(|| {
    vec![Tool::function(FunctionDefinition {
        name: WEATHER_TOOL_NAME.to_string(),
        description: WEATHER_TOOL_DESCRIPTION.to_string(),
        parameters: serde_json::json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "Name of the city to get weather for"
                },
                "unit": {
                    "type": "string",
                    "enum": ["celsius", "fahrenheit"],
                    "default": "celsius",
                    "description": "Temperature unit"
                }
            },
            "required": ["city"]
        }),
    })]
});
