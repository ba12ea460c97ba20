//! Check command implementation
//!
//! Prints the effective configuration after file, environment and flag
//! layering, plus the size of the rayon pool the simulator runs on.

use std::io::Write;

use tracing::info;

use crate::config::PricerConfig;
use crate::Result;

/// Run the check command
pub fn run<W: Write>(config: &PricerConfig, out: &mut W) -> Result<()> {
    info!("Checking configuration...");
    config.validate()?;

    writeln!(out, "# pricer {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "# simulation threads: {}", rayon::current_num_threads())?;
    writeln!(out)?;
    write!(out, "{}", config.to_toml()?)?;

    info!("Configuration is valid");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_prints_parseable_toml() {
        let mut buffer = Vec::new();
        run(&PricerConfig::default(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let parsed: PricerConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, PricerConfig::default());
        assert!(text.contains("[contract]"));
    }

    #[test]
    fn test_check_reports_rayon_pool_size() {
        let mut buffer = Vec::new();
        run(&PricerConfig::default(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let expected = format!("# simulation threads: {}", rayon::current_num_threads());
        assert!(text.lines().any(|line| line == expected), "{}", text);
    }

    #[test]
    fn test_check_rejects_invalid_settings() {
        let mut config = PricerConfig::default();
        config.simulation.batch_size = 0;
        let mut buffer = Vec::new();
        assert!(run(&config, &mut buffer).is_err());
        assert!(buffer.is_empty());
    }
}
