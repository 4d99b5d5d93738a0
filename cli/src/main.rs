use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use img2string::{DitherMode, OutputMode, RenderConfig, convert};

#[derive(Debug, Parser)]
#[command(name = "img2string", version)]
#[command(about = "Convert an image to ANSI text art, printed raw or as a C, Python, JavaScript or Bash string")]
struct Cli {
    /// Output width in characters
    #[arg(short = 'w', long = "width", default_value_t = 80)]
    width: u32,

    /// Character aspect ratio used to derive the output height
    #[arg(short = 'r', long = "ratio", default_value_t = 0.5)]
    ratio: f32,

    #[arg(short = 'g', long = "gamma", default_value_t = 0.5)]
    gamma: f32,

    /// none, ordered2, ordered4, ordered8, random or fstein
    #[arg(short = 'd', long = "dither", default_value = "none")]
    dither: DitherMode,

    /// Prefilter the image so each character averages its whole area
    #[arg(short = 'a', long = "antialias")]
    antialias: bool,

    /// s|stdout, c, py|python, js|javascript or sh|bash
    #[arg(short = 'o', long = "output", default_value = "stdout")]
    output: OutputMode,

    image: PathBuf,
}

impl Cli {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            ratio: self.ratio,
            gamma: self.gamma,
            dither: self.dither,
            antialias: self.antialias,
        }
    }
}

fn usage_failure(err: clap::Error) -> ExitCode {
    print!("{}", err.render());
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

fn run(cli: &Cli, config: &RenderConfig) -> Result<()> {
    let target = cli.output.target();
    log::debug!("converting {} for {}", cli.image.display(), target.name);

    let text = convert(&cli.image, config, target)?;

    let mut out = BufWriter::new(io::stdout().lock());
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .context("Failed to write output")?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return usage_failure(err),
    };

    let config = cli.render_config();
    if let Err(err) = config.validate() {
        return usage_failure(Cli::command().error(ErrorKind::ValueValidation, err));
    }

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{err:?}");
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}
