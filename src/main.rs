#![deny(clippy::all)]
#![forbid(unsafe_code)]

use clap::Parser;
use kplib::{
    cfg::{self, Cfg, CfgOverrides},
    pipeline, tracing_setup, EguiDisplay, KpResult,
};
use std::{ops::Deref, panic, path::PathBuf, process::ExitCode};
use tracing::{error, info};

/// Draws the keypoints of an annotation file onto an image and shows the result until a key
/// is pressed.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Image to draw on, defaults to the configured image path
    image: Option<PathBuf>,
    /// Text file with one `<label> <x> <y>` per line, defaults to the configured annotation path
    annotations: Option<PathBuf>,
    /// Radius of the markers in pixels
    #[arg(short, long)]
    radius: Option<u32>,
    /// Config file to use instead of the one in the home folder
    #[arg(long)]
    cfg: Option<PathBuf>,
    /// Write the effective config to the config file and exit
    #[arg(long)]
    write_cfg: bool,
    /// Log debug messages to stdout
    #[arg(short, long)]
    verbose: bool,
}

fn effective_cfg(cli: &Cli) -> KpResult<(Cfg, PathBuf)> {
    let cfg_path = cli.cfg.clone().unwrap_or_else(cfg::get_cfg_path);
    let cfg = cfg::read_cfg_from_path(&cfg_path)?.with_overrides(CfgOverrides {
        image_path: cli.image.clone(),
        anno_path: cli.annotations.clone(),
        radius: cli.radius,
    });
    Ok((cfg, cfg_path))
}

fn run(cli: &Cli) -> KpResult<()> {
    let (cfg, cfg_path) = effective_cfg(cli)?;
    if cli.write_cfg {
        return cfg::write_cfg_to_path(&cfg, &cfg_path);
    }
    let summary = pipeline::run(&cfg, &mut EguiDisplay)?;
    info!(
        "showed {} markers on {}x{} image",
        summary.n_markers, summary.width, summary.height
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard_flush_to_logfile = tracing_setup::tracing_setup(cli.verbose);
    info!(
        "kpview {} ({}{})",
        env!("CARGO_PKG_VERSION"),
        env!("KPVIEW_GIT_HASH"),
        if env!("KPVIEW_GIT_DIRTY") == "true" {
            ", dirty"
        } else {
            ""
        }
    );
    match panic::catch_unwind(|| run(&cli)) {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(e)) => {
            error!("{e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            let panic_s = e
                .downcast_ref::<String>()
                .map(String::as_str)
                .or_else(|| e.downcast_ref::<&'static str>().map(Deref::deref));
            error!("{:?}", panic_s);
            if let Some(b) = tracing_setup::BACKTRACE.with(|b| b.borrow_mut().take()) {
                error!("{:?}", b);
            }
            ExitCode::FAILURE
        }
    }
}
