use clap::{Arg, Command};
use link_sentinel::{Config, RiskScanner, ScanRecord};
use log::LevelFilter;
use std::process;

fn main() {
    let matches = Command::new("link-sentinel")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Offline URL risk scanner with heuristic threat signals")
        .arg(
            Arg::new("url")
                .value_name("URL")
                .help("URL to scan")
                .index(1),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .default_value("/etc/link-sentinel.yaml"),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("FILE")
                .help("Generate a default configuration file")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("trust")
                .long("trust")
                .value_name("HOSTNAME")
                .help("Add a hostname to the trusted list and exit")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("untrust")
                .long("untrust")
                .value_name("HOSTNAME")
                .help("Remove a hostname from the trusted list and exit")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("last")
                .long("last")
                .help("Show the most recent scan result")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the report as JSON")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging with per-signal detail")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Some(generate_path) = matches.get_one::<String>("generate-config") {
        generate_default_config(generate_path);
        return;
    }

    let config_path = matches.get_one::<String>("config").unwrap();
    let mut config = match Config::load_or_default(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            process::exit(1);
        }
    };

    if let Some(hostname) = matches.get_one::<String>("trust") {
        if config.trust(hostname) {
            save_config(&config, config_path);
            println!("✅ {hostname} added to the trusted list");
        } else {
            println!("{hostname} is already trusted");
        }
        return;
    }

    if let Some(hostname) = matches.get_one::<String>("untrust") {
        if config.untrust(hostname) {
            save_config(&config, config_path);
            println!("✅ {hostname} removed from the trusted list");
        } else {
            println!("{hostname} was not in the trusted list");
        }
        return;
    }

    if matches.get_flag("last") {
        show_last_scan(&config);
        return;
    }

    let Some(url) = matches.get_one::<String>("url") else {
        eprintln!("No URL given. Pass a URL to scan, or see --help.");
        process::exit(2);
    };

    if !config.enabled {
        println!("Protection is disabled in the configuration; not scanning.");
        println!("Set 'enabled: true' in {config_path} to re-enable.");
        return;
    }

    let scanner = RiskScanner::new();
    let report = scanner.scan(url, &config.trusted_domains);

    if matches.get_flag("json") {
        // Serialization of the report types cannot fail.
        println!("{}", serde_json::to_string_pretty(&report).unwrap());
    } else {
        println!("🔍 Scanning: {url}");
        println!();
        println!("{} Status: {}", report.level.icon(), report.level.label());
        println!("   Score: {}", report.score);
        println!("   {}", report.text);
    }

    let record = ScanRecord::new(url, report);
    if let Err(e) = record.store(&config.history_path) {
        log::warn!("Failed to store scan history: {e}");
    }
}

fn show_last_scan(config: &Config) {
    match ScanRecord::load(&config.history_path) {
        Ok(Some(record)) => {
            println!("📋 Last scan");
            println!("   URL: {}", record.url);
            println!(
                "   {} Status: {}",
                record.report.level.icon(),
                record.report.level.label()
            );
            println!("   Score: {}", record.report.score);
            println!("   {}", record.report.text);
        }
        Ok(None) => {
            println!("📭 No scans recorded yet");
        }
        Err(e) => {
            eprintln!("Error reading scan history: {e}");
            process::exit(1);
        }
    }
}

fn save_config(config: &Config, path: &str) {
    if let Err(e) = config.to_file(path) {
        eprintln!("Error writing configuration file: {e}");
        process::exit(1);
    }
}

fn generate_default_config(path: &str) {
    let config = Config::default();
    match config.to_file(path) {
        Ok(()) => {
            println!("Default configuration written to: {path}");
            println!("Please edit the configuration file to suit your needs.");
        }
        Err(e) => {
            eprintln!("Error writing configuration file: {e}");
            process::exit(1);
        }
    }
}
