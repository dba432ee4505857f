use clap::Parser;
use scan_weigh::domain::ports::ConfigProvider;
use scan_weigh::utils::error::{ErrorSeverity, ScanError};
use scan_weigh::utils::{logger, validation::Validate};
use scan_weigh::{
    render_table, run_batch, AutoConfirm, CliConfig, Command, Confirmer, Console,
    DialoguerConfirmer, OutputFormat, ScanConfig, SessionManager, Summary,
};
use std::io::{self, BufRead, BufReader, IsTerminal};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let mut config = match ScanConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    cli.apply_overrides(&mut config);

    logger::init_cli_logger(cli.verbose, &config.logging.level, config.logging.json);
    tracing::info!("Starting scan-weigh");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let result = match &cli.command {
        Some(Command::Sum { input, .. }) => run_sum(input, &config),
        Some(Command::Interactive) | None => {
            if cli.yes {
                run_interactive(AutoConfirm(true), &config)
            } else {
                let confirmer = DialoguerConfirmer::new(config.confirm.default_answer);
                run_interactive(confirmer, &config)
            }
        }
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ scan-weigh failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn run_interactive<C: Confirmer>(confirmer: C, config: &ScanConfig) -> Result<(), ScanError> {
    let manager = SessionManager::new(confirmer).with_confirm_message(config.confirm_message());
    let stdin = io::stdin();
    let mut console = Console::new(manager, config.weight_format())
        .with_output_format(config.display.output_format)
        .with_prompt(stdin.is_terminal());

    let mut stdout = io::stdout().lock();
    console.run(stdin.lock(), &mut stdout)?;

    let session = console.into_session();
    tracing::info!(entries = session.len(), total = %session.total(), "session ended");
    Ok(())
}

fn run_sum(input: &str, config: &ScanConfig) -> Result<(), ScanError> {
    let reader: Box<dyn BufRead> = if input == "-" {
        Box::new(io::stdin().lock())
    } else {
        tracing::info!("📁 Reading scans from: {}", input);
        let file = std::fs::File::open(input)?;
        Box::new(BufReader::new(file))
    };

    let report = run_batch(reader, config.batch.on_invalid)?;
    let format = config.weight_format();

    match config.display.output_format {
        OutputFormat::Text => print!("{}", render_table(&report.session, &format)),
        OutputFormat::Json => {
            let summary = Summary::from_session(&report.session, &format);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    for rejected in &report.rejected {
        eprintln!("⚠️  line {}: invalid code {}", rejected.line, rejected.raw);
    }

    Ok(())
}
