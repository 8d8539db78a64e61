extern crate rust_raytracer as root;

use root::parsing::config::*;
use root::parsing::{construct_world, get_settings};
use root::renderer::construct_renderer;

#[macro_use]
extern crate tracing;

use anyhow::Context;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long)]
    pub scene_file: Option<String>,
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

fn run(opts: Opt) -> anyhow::Result<()> {
    let mut settings: TOMLConfig = get_settings(opts.config_file)?;

    // override scene file based on provided command line argument
    settings.default_scene_file = opts.scene_file.unwrap_or(settings.default_scene_file);
    let config = Config::from(settings);

    rayon::ThreadPoolBuilder::new()
        .num_threads(config.max_threads())
        .build_global()
        .context("failed to build the global thread pool")?;

    let world = construct_world(PathBuf::from(config.scene_file.clone()))
        .context("fatal error parsing world")?;

    if opts.dry_run {
        info!("dry run, scene {} is valid", config.scene_file);
        return Ok(());
    }

    let renderer = construct_renderer(&config);
    renderer.render(world, &config)
}

fn main() -> ExitCode {
    let opts = Opt::from_args();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&opts.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
