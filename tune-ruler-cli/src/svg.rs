use clap::Args;
use tune_ruler::color::Rgb;
use tune_ruler::color::DEFAULT_COLOR;
use tune_ruler::ruler::Drawable;
use tune_ruler::ruler::RulerSink;
use tune_ruler::ruler::Side;

use crate::options::RulerOptions;
use crate::profile::LayoutProfile;
use crate::App;
use crate::CliResult;

#[derive(Args)]
pub(crate) struct SvgOptions {
    /// Title printed above the ruler
    #[arg(long = "title")]
    title: Option<String>,

    #[command(flatten)]
    ruler: RulerOptions,
}

impl SvgOptions {
    pub fn run(self, app: &mut App) -> CliResult {
        let profile = self.ruler.load_profile()?;

        let mut svg = SvgRuler::new(&profile, f64::from(self.ruler.ruler_height));
        if let Some(title) = &self.title {
            svg.title(title);
        }
        self.ruler.render_into(&profile, &mut svg)?;
        log::debug!("Drawing {} SVG elements", svg.builder.elements.len());

        Ok(app.write(svg.build())?)
    }
}

/// Draws the just intervals on the left and the EDO steps on the right of a vertical axis.
struct SvgRuler<'a> {
    profile: &'a LayoutProfile,
    builder: SvgBuilder,
    axis_x: f64,
}

impl<'a> SvgRuler<'a> {
    fn new(profile: &'a LayoutProfile, ruler_height: f64) -> Self {
        let left_extent = profile.label_width
            + profile.label_padding
            + profile.max_ji_line_length()
            + profile.axis_gap;
        let right_extent = profile.axis_gap
            + profile.max_edo_line_length()
            + profile.label_padding
            + profile.label_width;

        let mut builder = SvgBuilder::new(
            left_extent + right_extent,
            ruler_height + 2.0 * profile.margin,
            profile.font_size,
        );
        builder.line(
            left_extent,
            profile.margin,
            left_extent,
            profile.margin + ruler_height,
            DEFAULT_COLOR,
        );

        Self {
            profile,
            builder,
            axis_x: left_extent,
        }
    }

    fn title(&mut self, title: &str) {
        self.builder.text(
            self.axis_x,
            self.profile.margin / 2.0,
            title,
            DEFAULT_COLOR,
            "middle",
        );
    }

    fn build(self) -> String {
        self.builder.build()
    }
}

impl RulerSink for SvgRuler<'_> {
    fn draw(&mut self, drawable: Drawable) {
        let y = self.profile.margin + drawable.position;

        match drawable.side {
            Side::Left => {
                let line_end = self.axis_x - self.profile.axis_gap;
                let line_start = line_end - drawable.line_length;
                self.builder
                    .line(line_start, y, line_end, y, drawable.color);
                self.builder.text(
                    line_start - self.profile.label_padding,
                    y,
                    &drawable.label,
                    drawable.color,
                    "end",
                );
            }
            Side::Right => {
                let line_start = self.axis_x + self.profile.axis_gap;
                let line_end = line_start + drawable.line_length;
                self.builder
                    .line(line_start, y, line_end, y, drawable.color);
                // EDO labels are aligned in a single column
                self.builder.text(
                    line_start + self.profile.max_edo_line_length() + self.profile.label_padding,
                    y,
                    &drawable.label,
                    drawable.color,
                    "start",
                );
            }
        }
    }
}

struct SvgBuilder {
    elements: Vec<String>,
    width: f64,
    height: f64,
    font_size: f64,
}

impl SvgBuilder {
    fn new(width: f64, height: f64, font_size: f64) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
            font_size,
        }
    }

    fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {:.1} {:.1}" width="{:.1}" height="{:.1}" font-family="sans-serif" font-size="{:.1}">"#,
            self.width, self.height, self.width, self.height, self.font_size
        );
        svg.push('\n');
        for element in &self.elements {
            svg.push_str("  ");
            svg.push_str(element);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgb) {
        self.elements.push(format!(
            r#"<line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}" stroke="{color}" stroke-width="1.0"/>"#
        ));
    }

    fn text(&mut self, x: f64, y: f64, content: &str, color: Rgb, anchor: &str) {
        self.elements.push(format!(
            r#"<text x="{x:.1}" y="{y:.1}" fill="{color}" text-anchor="{anchor}" dominant-baseline="middle">{}</text>"#,
            escape(content)
        ));
    }
}

fn escape(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
