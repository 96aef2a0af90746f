mod midi_surface;
mod runtime;

use std::fs::File;
use std::path::PathBuf;

use gridlink_core::config::Config;
use gridlink_core::midi::{MidiInputManager, MidiOutputManager};

use runtime::AppRuntime;

fn init_logging(verbose: bool) {
    use simplelog::*;

    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

    let log_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gridlink")
        .join("gridlink.log");

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = File::create(&log_path)
        .unwrap_or_else(|_| File::create("/tmp/gridlink.log").expect("Cannot create log file"));

    WriteLogger::init(log_level, simplelog::Config::default(), log_file)
        .expect("Failed to initialize logger");

    log::info!("gridlink starting (log level: {:?})", log_level);
}

fn list_ports() {
    let mut input = MidiInputManager::new();
    if let Err(e) = input.refresh_ports() {
        eprintln!("could not list MIDI inputs: {}", e);
    }
    println!("MIDI inputs:");
    for port in input.ports() {
        println!("  {}: {}", port.index, port.name);
    }
    println!("MIDI outputs:");
    for port in MidiOutputManager::list_ports() {
        println!("  {}: {}", port.index, port.name);
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    init_logging(verbose);

    if args.iter().any(|a| a == "--list-ports") {
        list_ports();
        return;
    }

    let config = Config::load();

    if let Some(path) = flag_value(&args, "--replay") {
        if let Err(e) = runtime::replay(&config, &PathBuf::from(path)) {
            eprintln!("replay failed: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let port = match flag_value(&args, "--port") {
        Some(value) => match value.parse::<usize>() {
            Ok(port) => Some(port),
            Err(_) => {
                eprintln!("--port expects a port index, got {:?}", value);
                std::process::exit(2);
            }
        },
        None => None,
    };

    match AppRuntime::new(&config, port) {
        Ok(mut app) => app.run(),
        Err(e) => {
            log::error!("could not start: {}", e);
            eprintln!("gridlink: {}", e);
            std::process::exit(1);
        }
    }
}
