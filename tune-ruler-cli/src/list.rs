use clap::Args;
use tune_ruler::ruler::Drawable;
use tune_ruler::ruler::RulerSink;
use tune_ruler::ruler::Side;

use crate::options::RulerOptions;
use crate::App;
use crate::CliResult;

#[derive(Args)]
pub(crate) struct ListOptions {
    /// Only list the just intervals
    #[arg(long = "ji-only")]
    ji_only: bool,

    #[command(flatten)]
    ruler: RulerOptions,
}

impl ListOptions {
    pub fn run(self, app: &mut App) -> CliResult {
        let profile = self.ruler.load_profile()?;

        let mut table = Table {
            ji_only: self.ji_only,
            rows: Vec::new(),
        };
        self.ruler.render_into(&profile, &mut table)?;
        log::debug!("Listing {} drawables", table.rows.len());

        for row in table.rows {
            app.writeln(row)?;
        }

        Ok(())
    }
}

struct Table {
    ji_only: bool,
    rows: Vec<String>,
}

impl RulerSink for Table {
    fn draw(&mut self, drawable: Drawable) {
        if self.ji_only && drawable.side != Side::Left {
            return;
        }

        self.rows.push(format!(
            "{:<5} {:>8.1}px {:>5.1}px {:<18} {}",
            drawable.side,
            drawable.position,
            drawable.line_length,
            drawable.color.to_string(),
            drawable.label
        ));
    }
}
