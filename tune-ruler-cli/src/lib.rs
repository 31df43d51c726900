mod dto;
mod error;
mod list;
mod options;
mod profile;
mod svg;

use std::fmt;
use std::fmt::Debug;
use std::fmt::Display;
use std::fs::File;
use std::io;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use dto::DumpOptions;
use list::ListOptions;
use profile::LayoutProfile;
use svg::SvgOptions;
use tune_ruler::ruler::RulerError;

#[derive(Parser)]
#[command(name = "tune-ruler", version, about)]
struct MainOptions {
    /// Write output to a file instead of stdout
    #[arg(long = "of")]
    output_file: Option<PathBuf>,

    #[command(subcommand)]
    command: MainCommand,
}

#[derive(Subcommand)]
enum MainCommand {
    /// Print the tick marks of the ruler as a table
    #[command(name = "list")]
    List(ListOptions),

    /// Print the tick marks of the ruler as YAML document
    #[command(name = "dump")]
    Dump(DumpOptions),

    /// Draw the ruler as SVG document
    #[command(name = "svg")]
    Svg(SvgOptions),

    /// Print the built-in layout profile. Use it as a template for --layout
    #[command(name = "layout")]
    Layout,
}

impl MainOptions {
    fn run(self) -> CliResult {
        let output: Box<dyn Write> = match self.output_file {
            Some(output_file) => {
                log::info!("Writing output to `{}`", output_file.display());
                Box::new(File::create(output_file)?)
            }
            None => Box::new(io::stdout().lock()),
        };

        let mut app = App { output };

        self.command.run(&mut app)?;
        Ok(app.output.flush()?)
    }
}

impl MainCommand {
    fn run(self, app: &mut App) -> CliResult {
        match self {
            MainCommand::List(options) => options.run(app),
            MainCommand::Dump(options) => options.run(app),
            MainCommand::Svg(options) => options.run(app),
            MainCommand::Layout => LayoutProfile::default().print(app),
        }
    }
}

pub fn run_in_shell_env(args: impl IntoIterator<Item = String>) -> CliResult {
    let options = match MainOptions::try_parse_from(args) {
        Err(err) => {
            return if err.use_stderr() {
                Err(CliError::CommandError(err.to_string()))
            } else {
                print!("{err}");
                Ok(())
            };
        }
        Ok(options) => options,
    };

    options.run()
}

struct App<'a> {
    output: Box<dyn 'a + Write>,
}

impl App<'_> {
    pub fn write(&mut self, message: impl Display) -> io::Result<()> {
        write!(&mut self.output, "{message}")
    }

    pub fn writeln(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(&mut self.output, "{message}")
    }
}

pub type CliResult<T = ()> = Result<T, CliError>;

pub enum CliError {
    IoError(io::Error),
    CommandError(String),
}

impl Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::IoError(err) => write!(f, "IO error / {err}"),
            CliError::CommandError(err) => write!(f, "The command failed / {err}"),
        }
    }
}

impl From<RulerError> for CliError {
    fn from(v: RulerError) -> Self {
        CliError::CommandError(format!("Could not render ruler ({v:?})"))
    }
}

impl From<io::Error> for CliError {
    fn from(v: io::Error) -> Self {
        CliError::IoError(v)
    }
}
