use clap::Parser;
use gametitles::{
    Cli, GameTitles, GameTitlesError, OutputFormatter, OutputMode, OutputRecords, RunReport,
    UserFriendlyError,
};
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    let cli = Cli::parse();
    setup_logging(cli.verbosity_level());

    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    if cli.list_consoles {
        let formatter = OutputFormatter::new(cli.output_format.into(), cli.verbose, cli.quiet);
        formatter.print_console_catalog();
        return 0;
    }

    let game_titles = match GameTitles::from_cli(&cli) {
        Ok(game_titles) => game_titles,
        Err(e) => {
            print_startup_error(&e);
            return exit_code_for(&e);
        }
    };

    let registry = match cli.build_registry(game_titles.config()) {
        Ok(registry) => registry,
        Err(e) => {
            game_titles.handle_error(&e);
            return exit_code_for(&e);
        }
    };

    if cli.dry_run {
        return handle_dry_run(&cli, &game_titles, &registry);
    }

    let mut records = OutputRecords::new();
    let report = match game_titles.run_extraction(&registry, &mut records) {
        Ok(report) => report,
        Err(e) => {
            game_titles.handle_error(&e);
            return exit_code_for(&e);
        }
    };

    game_titles.output_formatter().print_run_report(&report);

    if let Some(console) = registry.selected_console() {
        for target in cli.open_targets() {
            if let Err(e) = game_titles.open_last_report(&records, console, target) {
                game_titles.handle_error(&e);
            }
        }
    }

    exit_code_for_report(&report)
}

fn exit_code_for_report(report: &RunReport) -> i32 {
    if report.cancelled {
        130
    } else if report.has_errors() {
        2 // Completed with per-console errors
    } else {
        0
    }
}

fn exit_code_for(error: &GameTitlesError) -> i32 {
    match error {
        GameTitlesError::NoConsoleSelected => 3,
        GameTitlesError::NoDirectorySelected { .. } => 4,
        GameTitlesError::UnknownConsole { .. } => 5,
        GameTitlesError::Config { .. } => 6,
        _ => 1,
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "gametitles.toml".to_string());

    match GameTitles::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  gametitles --config {}", config_path);
            println!("\nAdd [[consoles]] entries with a name and directory to scan them on every run.");
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn handle_dry_run(cli: &Cli, game_titles: &GameTitles, registry: &gametitles::ConsoleRegistry) -> i32 {
    let formatter = game_titles.output_formatter();

    formatter.info("DRY RUN MODE - No reports will be written");
    formatter.print_separator();

    if let Err(e) = registry.validate_ready() {
        game_titles.handle_error(&e);
        return exit_code_for(&e);
    }

    let config = game_titles.config();
    formatter.info("Configuration that would be used:");
    println!("  Suffix: {}", config.scan.suffix);
    println!("  Case sensitive: {}", config.scan.case_sensitive);
    println!("  Strict catalog: {}", config.catalog.strict);
    if let Some(ref path) = cli.config {
        println!("  Config file: {}", path.display());
    }

    formatter.print_separator();
    formatter.info("Extraction plan:");

    for entry in registry.all_entries() {
        let directory = entry.directory_path.as_path();
        if directory.is_dir() {
            let report_path = game_titles.planned_report_path(directory, &entry.console_name);
            println!("  {} -> {}", entry.console_name, report_path.display());
        } else {
            formatter.warning(&format!(
                "{}: directory '{}' does not exist and would be skipped",
                entry.console_name,
                directory.display()
            ));
        }
    }

    if cli.is_verbose() {
        if let Some(console) = registry.selected_console() {
            formatter.debug(&format!("Selected console: {}", console));
        }
    }

    formatter.print_separator();
    formatter.success("Dry run completed successfully");
    formatter.info("Run without --dry-run to write the reports");

    0
}

fn print_startup_error(error: &GameTitlesError) {
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}

fn setup_logging(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "gametitles=warn",
        1 => "gametitles=info",
        2 => "gametitles=debug",
        _ => "gametitles=trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use gametitles::{Config, ConsoleRegistry};
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["gametitles"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_generate_config_command() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");
        let config_arg = config_path.to_string_lossy().to_string();

        let cli = parse(&["--generate-config", "--config", &config_arg]);

        let exit_code = handle_generate_config(&cli);
        assert_eq!(exit_code, 0);

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[scan]"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("Spyro.zip"), b"").unwrap();
        let console_arg = format!("Sony PlayStation={}", temp_dir.path().display());

        let cli = parse(&["--dry-run", "-q", "-c", &console_arg]);
        let game_titles = GameTitles::new_for_test(Config::default(), OutputMode::Plain, 0, true);
        let registry = cli.build_registry(game_titles.config()).unwrap();

        let exit_code = handle_dry_run(&cli, &game_titles, &registry);

        assert_eq!(exit_code, 0);
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_dry_run_without_console() {
        let cli = parse(&["--dry-run", "-q"]);
        let game_titles = GameTitles::new_for_test(Config::default(), OutputMode::Plain, 0, true);

        let exit_code = handle_dry_run(&cli, &game_titles, &ConsoleRegistry::new());

        assert_eq!(exit_code, 3);
    }

    #[test]
    fn test_cancelled_run_exits_130() {
        let mut progress = gametitles::RunProgress::new(2);
        progress.cancelled = true;

        assert_eq!(exit_code_for_report(&progress.into_report()), 130);
        assert_eq!(
            exit_code_for_report(&gametitles::RunProgress::new(0).into_report()),
            0
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code_for(&GameTitlesError::NoConsoleSelected), 3);
        assert_eq!(
            exit_code_for(&GameTitlesError::NoDirectorySelected {
                console: "NES".to_string()
            }),
            4
        );
        assert_eq!(
            exit_code_for(&GameTitlesError::Config {
                message: "bad".to_string()
            }),
            6
        );
    }
}
