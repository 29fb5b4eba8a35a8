use std::path::Path;
use std::process;

use anyhow::{self, Context};
use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::append::Append;
use log4rs::config::{Appender, Config, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;

use fermidump::interfaces::cli::{log_heading, Cli};
use fermidump::interfaces::input::Input;
use fermidump::io::read_fermidump_yaml;

/// Configures the debug logger on the console and the `fermidump-output` logger on
/// either the console or the requested output file.
fn setup_logging(debug: u8, output: Option<&Path>) -> Result<(), anyhow::Error> {
    let debug_level = match debug {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let debug_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "[{d(%Y-%m-%d %H:%M:%S)}] {h({l})} {t} - {m}{n}",
        )))
        .build();

    let output_appender: Box<dyn Append> = match output {
        Some(path) => Box::new(
            FileAppender::builder()
                .encoder(Box::new(PatternEncoder::new("{m}{n}")))
                .append(false)
                .build(path)?,
        ),
        None => Box::new(
            ConsoleAppender::builder()
                .encoder(Box::new(PatternEncoder::new("{m}{n}")))
                .build(),
        ),
    };

    let config = Config::builder()
        .appender(Appender::builder().build("debug", Box::new(debug_appender)))
        .appender(Appender::builder().build("fermidump-output", output_appender))
        .logger(
            Logger::builder()
                .appender("fermidump-output")
                .additive(false)
                .build("fermidump-output", LevelFilter::Info),
        )
        .build(Root::builder().appender("debug").build(debug_level))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn run(cli: &Cli) -> Result<(), anyhow::Error> {
    setup_logging(cli.debug, cli.output.as_deref())?;
    log_heading();
    let input: Input = read_fermidump_yaml(&cli.config)
        .with_context(|| format!("Unable to read the input file `{}`", cli.config.display()))?;
    input.execute()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        log::error!("{err:#}");
        process::exit(1);
    }
}
