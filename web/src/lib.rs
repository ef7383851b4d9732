use anyhow::{Context, Result};
use bingo_core as bingo;
use clap::Parser;
use wasm_bindgen::prelude::*;

mod board;
mod config;
mod route;
mod utils;

#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of the one in the path
    #[arg(short, long)]
    seed: Option<String>,
}

impl Args {
    /// Arguments come from the location hash, e.g. `#-vv&--seed=12345678`.
    fn from_hash(hash: &str) -> std::result::Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    if let Err(err) = start() {
        gloo::console::error!(format!("bingo failed to start: {err:#}"));
    }
}

fn start() -> Result<()> {
    use gloo::utils::{document, window};

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());
    let (args, args_error) = match Args::from_hash(&location_hash) {
        Ok(args) => (args, None),
        Err(err) => (Args::default(), Some(err)),
    };
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).context("initializing logger")?;
    }
    if let Some(err) = args_error {
        log::warn!("ignoring location hash arguments: {}", err);
    }
    log::debug!("forced seed: {:?}", args.seed);

    let pool = config::load_pool()?;
    log::debug!("phrase pool with {} phrases", pool.len());

    let location = route::Location::current();
    let seed = match args.seed.or(location.seed) {
        Some(seed) => seed,
        None => {
            let seed = utils::random_seed();
            log::debug!("no seed in path, picked {}", seed);
            route::replace(&format!("/{}", bingo::encode_path_segment(&seed)));
            seed
        }
    };
    let session = bingo::Session::new(&pool, &seed, location.token.as_deref())
        .with_context(|| format!("building board for seed {seed:?}"))?;

    let root = document()
        .get_element_by_id("bingo")
        .context("could not find id=\"bingo\" element")?;

    log::debug!("App started");
    yew::Renderer::<board::BoardView>::with_root_and_props(
        root,
        board::BoardProps {
            pool: pool.into(),
            session,
        },
    )
    .render();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_arguments_are_parsed() {
        let args = Args::from_hash("#-vv&--seed=abc").unwrap();
        assert_eq!(args.seed.as_deref(), Some("abc"));
        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
    }

    #[test]
    fn empty_hash_uses_defaults() {
        let args = Args::from_hash("").unwrap();
        assert_eq!(args.seed, None);
        assert_eq!(args.verbose.log_level(), Some(log::Level::Error));
    }

    #[test]
    fn unknown_hash_arguments_are_an_error() {
        assert!(Args::from_hash("#--bogus").is_err());
    }
}
