use std::path::PathBuf;

use clap::Args;
use tune_ruler::math;
use tune_ruler::ruler;
use tune_ruler::ruler::RulerParams;
use tune_ruler::ruler::RulerSink;

use crate::profile::LayoutProfile;
use crate::CliResult;

/// Odd limits above this value make the brute-force interval search noticeably slow.
const LARGE_ODD_LIMIT: u32 = 500;

#[derive(Args)]
pub(crate) struct RulerOptions {
    /// Comma-separated numbers of steps per octave, e.g. 12,19,31
    #[arg(
        long = "edo",
        env = "TUNE_RULER_EDO",
        value_delimiter = ',',
        default_value = "12",
        value_parser = parse_edo
    )]
    pub edo_values: Vec<u16>,

    /// Largest prime factor of the just intervals
    #[arg(
        long = "prime-limit",
        env = "TUNE_RULER_PRIME_LIMIT",
        default_value = "7",
        value_parser = parse_prime_limit
    )]
    pub prime_limit: u32,

    /// Largest odd part of the numerators and denominators of the just intervals
    #[arg(
        long = "odd-limit",
        env = "TUNE_RULER_ODD_LIMIT",
        default_value = "9",
        value_parser = parse_odd_limit
    )]
    pub odd_limit: u32,

    /// Height of the ruler (one octave) in pixels
    #[arg(
        long = "height",
        env = "TUNE_RULER_HEIGHT",
        default_value = "1200",
        value_parser = parse_ruler_height
    )]
    pub ruler_height: u32,

    /// YAML file overriding the line lengths and layout offsets
    #[arg(long = "layout")]
    pub layout_file: Option<PathBuf>,
}

impl RulerOptions {
    pub fn load_profile(&self) -> CliResult<LayoutProfile> {
        LayoutProfile::load(self.layout_file.as_deref())
    }

    pub fn render_into(&self, profile: &LayoutProfile, sink: &mut impl RulerSink) -> CliResult {
        if self.odd_limit > LARGE_ODD_LIMIT {
            log::warn!(
                "Odd limit {} is large. Searching the just intervals may take a while.",
                self.odd_limit
            );
        }

        log::debug!(
            "Rendering {:?}-EDO against the {}-prime-limit and the {}-odd-limit",
            self.edo_values,
            self.prime_limit,
            self.odd_limit
        );

        let params = RulerParams::new(
            self.edo_values.clone(),
            self.prime_limit,
            self.odd_limit,
            self.ruler_height,
        )
        .with_line_lengths(profile.line_lengths());

        Ok(ruler::render_into(&params, sink)?)
    }
}

fn parse_edo(s: &str) -> Result<u16, String> {
    let num_steps = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid EDO '{s}': Must be a positive integer"))?;
    if num_steps == 0 {
        return Err("EDO must have at least one step".to_owned());
    }
    Ok(num_steps)
}

fn parse_prime_limit(s: &str) -> Result<u32, String> {
    let prime_limit = parse_positive(s)?;
    if !math::is_prime(prime_limit) {
        return Err(format!("Prime limit must be a prime but was {prime_limit}"));
    }
    Ok(prime_limit)
}

fn parse_odd_limit(s: &str) -> Result<u32, String> {
    let odd_limit = parse_positive(s)?;
    if odd_limit % 2 == 0 {
        return Err(format!("Odd limit must be odd but was {odd_limit}"));
    }
    Ok(odd_limit)
}

fn parse_ruler_height(s: &str) -> Result<u32, String> {
    parse_positive(s)
}

fn parse_positive(s: &str) -> Result<u32, String> {
    match s.trim().parse() {
        Ok(0) | Err(_) => Err(format!("'{s}' is not a positive integer")),
        Ok(number) => Ok(number),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_valid_values() {
        assert_eq!(parse_edo("31"), Ok(31));
        assert_eq!(parse_edo(" 53 "), Ok(53));
        assert_eq!(parse_prime_limit("2"), Ok(2));
        assert_eq!(parse_prime_limit("13"), Ok(13));
        assert_eq!(parse_odd_limit("1"), Ok(1));
        assert_eq!(parse_odd_limit("15"), Ok(15));
        assert_eq!(parse_ruler_height("640"), Ok(640));
    }

    #[test]
    fn parse_invalid_values() {
        assert_eq!(
            parse_edo("0"),
            Err("EDO must have at least one step".to_owned())
        );
        assert_eq!(
            parse_edo("x"),
            Err("Invalid EDO 'x': Must be a positive integer".to_owned())
        );
        assert_eq!(
            parse_prime_limit("9"),
            Err("Prime limit must be a prime but was 9".to_owned())
        );
        assert_eq!(
            parse_prime_limit("1"),
            Err("Prime limit must be a prime but was 1".to_owned())
        );
        assert_eq!(
            parse_odd_limit("8"),
            Err("Odd limit must be odd but was 8".to_owned())
        );
        assert_eq!(
            parse_odd_limit("-3"),
            Err("'-3' is not a positive integer".to_owned())
        );
        assert_eq!(
            parse_ruler_height("0"),
            Err("'0' is not a positive integer".to_owned())
        );
    }
}
