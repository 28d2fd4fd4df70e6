/* 3rd party libraries */
use clap::{Arg, ArgMatches, Command};
use crossbeam_channel as cbc;
use log::{info, warn, LevelFilter};
use std::env;
use std::io::{self, BufRead};
use std::path::Path;

/* Custom libraries */
use lift_nav::config::{self, Config};
use lift_nav::unwrap_or_exit;
use lift_nav::{Action, CurrentFloorView, ElevatorState, ElevatorStore};

const DEFAULT_CONFIG_PATH: &str = "config.toml";
const RUST_LOG_ENV: &str = "RUST_LOG";

/* Main */
fn main() {
    let matches = Command::new("lift-nav")
        .about("Drives the floor navigation store of the elevator portfolio site")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .takes_value(true)
                .help("Path to a TOML configuration file"),
        )
        .subcommand_required(true)
        .subcommand(Command::new("floors").about("List the floors"))
        .subcommand(
            Command::new("run")
                .about("Apply actions and print every state change as JSON")
                .arg(
                    Arg::new("actions")
                        .multiple_values(true)
                        .help("goto:<id>, arrive, open, close or reset. Read from stdin when omitted"),
                ),
        )
        .get_matches();

    // Initialize logging before anything can fail. RUST_LOG takes precedence over the config file
    let rust_log_set = env::var_os(RUST_LOG_ENV).is_some();
    env_logger::Builder::new()
        .filter_level(LevelFilter::Trace)
        .parse_default_env()
        .init();
    if !rust_log_set {
        log::set_max_level(LevelFilter::Info);
    }

    // Load the configuration
    let config = load(&matches);
    let level = unwrap_or_exit!(config.log_level());
    if !rust_log_set {
        log::set_max_level(level);
    }

    let registry = unwrap_or_exit!(config.registry());

    match matches.subcommand() {
        Some(("floors", _)) => {
            for floor in registry.iter() {
                println!("{}", unwrap_or_exit!(serde_json::to_string(floor)));
            }
        }
        Some(("run", run_matches)) => {
            let mut store = ElevatorStore::new(registry);
            let current_floor = CurrentFloorView::attach(&mut store);
            let state_rx = store.watch();
            print_states(&state_rx);

            let actions: Vec<String> = run_matches
                .values_of("actions")
                .map(|values| values.map(String::from).collect())
                .unwrap_or_default();

            if actions.is_empty() {
                for line in io::stdin().lock().lines() {
                    let line = unwrap_or_exit!(line);
                    if line.trim().is_empty() {
                        continue;
                    }
                    apply(&mut store, &line);
                    print_states(&state_rx);
                }
            } else {
                for action in actions.iter() {
                    apply(&mut store, action);
                    print_states(&state_rx);
                }
            }

            info!("Finished at {}", current_floor.get());
        }
        _ => unreachable!("a subcommand is required"),
    }
}

fn load(matches: &ArgMatches) -> Config {
    match matches.value_of("config") {
        Some(path) => unwrap_or_exit!(config::load_config(Path::new(path))),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            unwrap_or_exit!(config::load_config(Path::new(DEFAULT_CONFIG_PATH)))
        }
        None => Config::default(),
    }
}

fn apply(store: &mut ElevatorStore, text: &str) {
    match text.parse::<Action>() {
        Ok(action) => store.dispatch(&action),
        Err(e) => warn!("Skipping '{}': {}", text.trim(), e),
    }
}

fn print_states(state_rx: &cbc::Receiver<ElevatorState>) {
    for state in state_rx.try_iter() {
        match serde_json::to_string(&state) {
            Ok(json) => println!("{}", json),
            Err(e) => warn!("Failed to serialize state: {}", e),
        }
    }
}
