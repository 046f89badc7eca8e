use clap::Parser;
use human_panic::{Metadata, setup_panic};
use miette::GraphicalReportHandler;
use shakedown_cli::cli::Cli;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    miette::set_hook(Box::new(|_| {
        Box::new(
            GraphicalReportHandler::new()
                .with_theme(miette::GraphicalTheme::unicode())
                .with_context_lines(5),
        )
    }))
    .ok();

    setup_panic!(
        Metadata::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
            .homepage(env!("CARGO_PKG_HOMEPAGE"))
            .support(
                "Please open an issue on github. Attach the outputs of the above referenced report file."
            ).authors(env!("CARGO_PKG_AUTHORS"))
    );

    let cli = Cli::parse();

    let log_level: tracing::Level = cli.log_level.clone().into();

    let init = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_file(false)
                .with_line_number(false),
        )
        .with(LevelFilter::from_level(log_level))
        .try_init();

    if let Err(e) = init {
        eprintln!("unable to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    let mut stdout = std::io::stdout().lock();

    match cli.run(&mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:?}", e.to_report());
            ExitCode::FAILURE
        },
    }
}
