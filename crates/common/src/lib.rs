pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_serializes_status() {
        let h = types::Health::ok();
        assert_eq!(serde_json::to_value(&h).unwrap(), serde_json::json!({"status": "ok"}));
    }

    #[test]
    fn log_format_parses_known_names() {
        use utils::logging::LogFormat;
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("COMPACT".parse::<LogFormat>(), Ok(LogFormat::Compact));
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
