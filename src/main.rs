//! `pointmorph [options.toml]`
//!
//! Opens a window and loops through the configured layouts. Set `RUST_LOG`
//! to control log output.

use std::path::PathBuf;

use pointmorph::{error::PointmorphError, options::Options, Viewer};

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), PointmorphError> {
    let options = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            log::info!("loading options from {}", path.display());
            Options::load(&path)?
        }
        None => Options::default(),
    };

    Viewer::builder()
        .with_options(options)
        .with_title("pointmorph")
        .build()
        .run()
}
