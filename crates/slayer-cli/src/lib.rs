//! Helpers shared by the `slayer` binary.

use anyhow::Context;
use serde::Serialize;

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Pretty-print a response as JSON on stdout.
pub fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    println!("{}", to_pretty_json(value)?);
    Ok(())
}

fn to_pretty_json(value: &impl Serialize) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).context("Serialize response")
}

/// Parse a speed argument, accepting only the 1..=10 scale the server enforces.
pub fn parse_speed(s: &str) -> Result<i32, String> {
    let speed: i32 = s
        .parse()
        .map_err(|_| format!("`{}` is not a whole number", s))?;
    if (1..=10).contains(&speed) {
        Ok(speed)
    } else {
        Err("speed must be between 1 and 10".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_speed_bounds() {
        assert_eq!(parse_speed("1"), Ok(1));
        assert_eq!(parse_speed("10"), Ok(10));
        assert!(parse_speed("0").is_err());
        assert!(parse_speed("11").is_err());
        assert!(parse_speed("fast").is_err());
    }

    #[test]
    fn pretty_json_is_indented() {
        let out = to_pretty_json(&serde_json::json!({ "message": "ok" })).unwrap();
        assert_eq!(out, "{\n  \"message\": \"ok\"\n}");
    }
}
