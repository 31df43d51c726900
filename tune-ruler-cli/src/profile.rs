use std::fs::File;
use std::path::Path;

use log::info;
use serde::Deserialize;
use serde::Serialize;
use tune_ruler::encode::LineLengths;

use crate::error::ResultExt;
use crate::App;
use crate::CliError;
use crate::CliResult;

/// Line lengths and layout offsets in pixels.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutProfile {
    pub min_line_length: f64,
    pub max_line_length: f64,
    pub constant_line_length: f64,
    pub edo_min_line_length: f64,
    pub edo_max_line_length: f64,
    /// Gap between the axis and the start of a tick
    pub axis_gap: f64,
    /// Gap between the end of a tick and its label
    pub label_padding: f64,
    /// Space reserved for a label
    pub label_width: f64,
    /// Space above the unison and below the octave
    pub margin: f64,
    pub font_size: f64,
}

impl Default for LayoutProfile {
    fn default() -> Self {
        let line_lengths = LineLengths::default();
        Self {
            min_line_length: line_lengths.min,
            max_line_length: line_lengths.max,
            constant_line_length: line_lengths.constant,
            edo_min_line_length: line_lengths.edo_min,
            edo_max_line_length: line_lengths.edo_max,
            axis_gap: 2.0,
            label_padding: 5.0,
            label_width: 150.0,
            margin: 20.0,
            font_size: 12.0,
        }
    }
}

impl LayoutProfile {
    pub fn load(file_name: Option<&Path>) -> CliResult<Self> {
        let profile: Self = match file_name {
            Some(file_name) => {
                info!("Loading layout file `{}`", file_name.display());
                let file = File::open(file_name).or_command_error(format_args!(
                    "Could not open layout file `{}`",
                    file_name.display()
                ))?;
                serde_yaml::from_reader(file)
                    .or_command_error("Could not deserialize layout file")?
            }
            None => Self::default(),
        };
        profile.validate()?;
        Ok(profile)
    }

    pub fn print(&self, app: &mut App) -> CliResult {
        let yaml = serde_yaml::to_string(self).or_command_error("Could not serialize layout")?;
        Ok(app.write(yaml)?)
    }

    pub fn line_lengths(&self) -> LineLengths {
        LineLengths {
            min: self.min_line_length,
            max: self.max_line_length,
            constant: self.constant_line_length,
            edo_min: self.edo_min_line_length,
            edo_max: self.edo_max_line_length,
        }
    }

    /// The longest tick on the just intonation side.
    pub fn max_ji_line_length(&self) -> f64 {
        self.min_line_length
            .max(self.max_line_length)
            .max(self.constant_line_length)
    }

    /// The longest tick on the EDO side.
    pub fn max_edo_line_length(&self) -> f64 {
        self.edo_min_line_length.max(self.edo_max_line_length)
    }

    fn validate(&self) -> CliResult {
        let values = [
            ("min_line_length", self.min_line_length),
            ("max_line_length", self.max_line_length),
            ("constant_line_length", self.constant_line_length),
            ("edo_min_line_length", self.edo_min_line_length),
            ("edo_max_line_length", self.edo_max_line_length),
            ("axis_gap", self.axis_gap),
            ("label_padding", self.label_padding),
            ("label_width", self.label_width),
            ("margin", self.margin),
            ("font_size", self.font_size),
        ];

        for (name, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(CliError::CommandError(format!(
                    "Invalid layout: {name} must be a non-negative number but was {value}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_profile_uses_defaults() {
        let profile: LayoutProfile =
            serde_yaml::from_str("max_line_length: 300.0\nmargin: 0.0\n").unwrap();

        assert_eq!(
            profile,
            LayoutProfile {
                max_line_length: 300.0,
                margin: 0.0,
                ..LayoutProfile::default()
            }
        );
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(serde_yaml::from_str::<LayoutProfile>("max_length: 300.0\n").is_err());
    }

    #[test]
    fn negative_values_are_rejected() {
        let profile = LayoutProfile {
            label_padding: -1.0,
            ..LayoutProfile::default()
        };

        assert!(matches!(
            profile.validate(),
            Err(CliError::CommandError(message))
                if message == "Invalid layout: label_padding must be a non-negative number but was -1"
        ));
    }

    #[test]
    fn default_profile_matches_built_in_line_lengths() {
        assert_eq!(LayoutProfile::default().line_lengths(), LineLengths::default());
        assert_eq!(LayoutProfile::default().max_ji_line_length(), 400.0);
        assert_eq!(LayoutProfile::default().max_edo_line_length(), 50.0);
    }
}
