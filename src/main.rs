mod constants;
mod interpreter;
mod logging;
mod matrix;
mod picture;
mod render;
mod vector;

use std::path::PathBuf;

use clap::Parser;

use interpreter::ScriptError;

/// Renders a line-oriented scene script into images.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Script to run, or `stdin` / `-` to read standard input.
    script: String,

    /// Directory that `save` and `display` write into.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Log filter in `env_logger` syntax, e.g. `info` or `mdl_render=debug`.
    #[arg(long)]
    log: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log.as_deref());

    match interpreter::run_script(&cli.script, &cli.output_dir) {
        Ok(_) => Ok(()),
        Err(error @ ScriptError::Open { .. }) => Err(error.into()),
        Err(error) => {
            // the run stops here but images written so far are kept
            log::error!("{error}");
            Ok(())
        }
    }
}
