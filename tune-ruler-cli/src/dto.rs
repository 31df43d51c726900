use clap::Args;
use serde::Deserialize;
use serde::Serialize;
use tune_ruler::ruler::Drawable;
use tune_ruler::ruler::RulerSink;
use tune_ruler::ruler::Side;

use crate::error::ResultExt;
use crate::options::RulerOptions;
use crate::App;
use crate::CliResult;

#[derive(Args)]
pub(crate) struct DumpOptions {
    #[command(flatten)]
    ruler: RulerOptions,
}

impl DumpOptions {
    pub fn run(self, app: &mut App) -> CliResult {
        let profile = self.ruler.load_profile()?;

        let mut dto = RulerDto {
            edo_values: self.ruler.edo_values.clone(),
            prime_limit: self.ruler.prime_limit,
            odd_limit: self.ruler.odd_limit,
            ruler_height: self.ruler.ruler_height,
            items: Vec::new(),
        };
        self.ruler.render_into(&profile, &mut dto)?;
        log::debug!("Dumping {} drawables", dto.items.len());

        let yaml = serde_yaml::to_string(&TuneRulerDto::Ruler(dto))
            .or_command_error("Could not serialize ruler")?;
        Ok(app.write(yaml)?)
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum TuneRulerDto {
    Ruler(RulerDto),
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RulerDto {
    pub edo_values: Vec<u16>,
    pub prime_limit: u32,
    pub odd_limit: u32,
    pub ruler_height: u32,
    pub items: Vec<DrawableDto>,
}

impl RulerSink for RulerDto {
    fn draw(&mut self, drawable: Drawable) {
        self.items.push(DrawableDto {
            side: match drawable.side {
                Side::Left => SideDto::Left,
                Side::Right => SideDto::Right,
            },
            position: drawable.position,
            line_length: drawable.line_length,
            color: drawable.color.to_string(),
            label: drawable.label,
        });
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DrawableDto {
    pub side: SideDto,
    pub position: f64,
    pub line_length: f64,
    pub color: String,
    pub label: String,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SideDto {
    Left,
    Right,
}
