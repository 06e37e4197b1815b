pub const DEFAULT_UNIT: &str = "celsius";

const TEMPERATURE: i32 = 25;
const CONDITION: &str = "sunny";

/// 天气查询（示例数据）
///
/// 温度和天气固定；`unit` 与 "celsius" 不区分大小写比较，相等时用 °C，否则用 °F。
pub fn get_current_weather(city: &str, unit: Option<&str>) -> String {
    let unit = unit.unwrap_or(DEFAULT_UNIT);
    let symbol = if unit.eq_ignore_ascii_case("celsius") {
        "°C"
    } else {
        "°F"
    };
    format!("It is {}{} and {} in {}.", TEMPERATURE, symbol, CONDITION, city)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_defaults_to_celsius() {
        assert_eq!(get_current_weather("Paris", None), "It is 25°C and sunny in Paris.");
    }

    #[test]
    fn fahrenheit() {
        assert_eq!(
            get_current_weather("Tokyo", Some("fahrenheit")),
            "It is 25°F and sunny in Tokyo."
        );
    }

    #[test]
    fn unit_match_ignores_case() {
        assert_eq!(
            get_current_weather("Berlin", Some("CELSIUS")),
            "It is 25°C and sunny in Berlin."
        );
        assert!(get_current_weather("Oslo", Some("Fahrenheit")).contains("°F"));
    }

    #[test]
    fn city_is_embedded_verbatim() {
        for (city, unit, symbol) in [
            ("San Francisco", "celsius", "°C"),
            ("São Paulo", "fahrenheit", "°F"),
            ("", "Celsius", "°C"),
        ] {
            let sentence = get_current_weather(city, Some(unit));
            assert!(sentence.contains(city));
            assert!(sentence.contains(&format!("25{}", symbol)));
            assert!(sentence.contains("sunny"));
        }
    }

    #[test]
    fn anything_not_celsius_is_fahrenheit() {
        assert!(get_current_weather("Lima", Some("kelvin")).contains("°F"));
    }
}
