use calorie_core::{cli::run_cli, config::ConfigManager, init_with_filter};

fn main() {
    let filter = ConfigManager::new()
        .load()
        .ok()
        .and_then(|config| config.log_filter);
    init_with_filter(filter.as_deref());

    if let Err(err) = run_cli() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
