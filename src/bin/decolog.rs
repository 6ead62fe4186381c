#![deny(unsafe_code)]

//! `decolog` prints one sample line per severity level through a tagged
//! logger, so the effect of a threshold, an environment and a tag style can
//! be seen at a glance.

use mimalloc::MiMalloc;

/// High-performance memory allocator for improved allocation throughput.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, ArgMatches, Command};
use logging::{ConfigError, Level, LogConfig, LoggerFactory};
use logging_sink::{CaptureConsole, MessageSink, Stream};
use style::{Environment, catalog};

/// Exit status for an unusable configuration.
const CONFIG_ERROR_EXIT: u8 = 2;

const DEFAULT_TAG: &str = "demo";

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new("decolog")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print a sample line for every log level through a tagged logger.")
        .arg(
            Arg::new("level")
                .long("level")
                .short('l')
                .value_name("LEVEL")
                .help("Threshold: silly, verbose, debug, info, warn, error or wtf (default: $LOG_LEVEL, then info)."),
        )
        .arg(
            Arg::new("browser")
                .long("browser")
                .help("Render browser console calls with %c directives instead of terminal text.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .value_name("WHEN")
                .help("Color terminal tags: auto, always or never."),
        )
        .arg(
            Arg::new("style")
                .long("style")
                .value_name("NAME")
                .help("Tag style preset.")
                .value_parser(PossibleValuesParser::new(catalog::NAMES))
                .default_value("brackets"),
        )
        .arg(
            Arg::new("tag")
                .value_name("TAG")
                .help("Tag label written before every line.")
                .default_value(DEFAULT_TAG),
        )
}

fn main() -> ExitCode {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    ExitCode::from(run_with(env::args_os(), &mut stdout, &mut stderr))
}

/// Parses `args`, logs the samples and writes them to the given streams.
/// Returns the process exit status.
fn run_with<I, T>(args: I, stdout: &mut dyn Write, stderr: &mut dyn Write) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match clap_command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(error) => {
            let target: &mut dyn Write = if error.use_stderr() { stderr } else { stdout };
            let _ = write!(target, "{error}");
            return u8::try_from(error.exit_code()).unwrap_or(CONFIG_ERROR_EXIT);
        }
    };

    let config = match resolve_config(&matches) {
        Ok(config) => config,
        Err(error) => {
            let _ = writeln!(stderr, "decolog: {error}");
            return CONFIG_ERROR_EXIT;
        }
    };

    let descriptor = matches
        .get_one::<String>("style")
        .and_then(|name| catalog::by_name(name))
        .unwrap_or_else(catalog::brackets);
    let tag = matches
        .get_one::<String>("tag")
        .map_or(DEFAULT_TAG, String::as_str);

    let console = Arc::new(CaptureConsole::new());
    let log = LoggerFactory::new(config)
        .with_console(console.clone())
        .with_descriptor(descriptor)
        .logger(tag);

    for level in Level::ALL {
        log.at(level).call(&[&format_args!("sample {level} message")]);
    }
    log.debug.inspect(Some("levels"), Some(&Level::ALL[..]));

    if replay(&console, config.environment(), stdout, stderr).is_err() {
        return 1;
    }
    0
}

/// `--level` wins over `LOG_LEVEL`; `NO_COLOR` still applies; `--color`
/// wins over `NO_COLOR`.
fn resolve_config(matches: &ArgMatches) -> Result<LogConfig, ConfigError> {
    let level = matches.get_one::<String>("level").map(OsString::from);
    let mut config = LogConfig::from_lookup(|key| {
        if key == LogConfig::LEVEL_VAR {
            level.clone().or_else(|| env::var_os(key))
        } else {
            env::var_os(key)
        }
    })?;

    if matches.get_flag("browser") {
        config = config.with_environment(Environment::Browser);
    }
    if let Some(mode) = matches.get_one::<String>("color") {
        config = config.with_color(mode.parse()?);
    }
    Ok(config)
}

/// Writes captured records the way the selected environment would show them.
fn replay(
    console: &CaptureConsole,
    environment: Environment,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> io::Result<()> {
    let records = console.drain();
    match environment {
        Environment::Browser => {
            for record in &records {
                writeln!(stdout, "{}", record.render_console_call())?;
            }
            stdout.flush()
        }
        Environment::Terminal => {
            let mut out = MessageSink::new(stdout);
            let mut err = MessageSink::new(stderr);
            for record in &records {
                match record.stream {
                    Stream::Log => out.write(record)?,
                    Stream::Warn | Stream::Error => err.write(record)?,
                }
            }
            out.flush()?;
            err.flush()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> (u8, String, String) {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let mut argv = vec!["decolog"];
        argv.extend_from_slice(args);
        let code = run_with(argv, &mut stdout, &mut stderr);
        (
            code,
            String::from_utf8(stdout).expect("utf-8"),
            String::from_utf8(stderr).expect("utf-8"),
        )
    }

    #[test]
    fn clap_command_is_well_formed() {
        clap_command().debug_assert();
    }

    #[test]
    fn warn_threshold_writes_three_lines_to_stderr() {
        let (code, stdout, stderr) = run(&["--level", "warn", "--color", "never", "mod"]);
        assert_eq!(code, 0);
        assert!(stdout.is_empty(), "{stdout}");
        assert!(stderr.contains("sample warn message"));
        assert!(stderr.contains("sample error message"));
        assert!(stderr.contains("!!! WTF !!! [mod]"));
        assert!(!stderr.contains("sample info message"));
    }

    #[test]
    fn silly_threshold_writes_everything() {
        let (code, stdout, stderr) = run(&["--level", "silly", "--color", "never"]);
        assert_eq!(code, 0);
        for level in ["silly", "verbose", "debug", "info"] {
            assert!(stdout.contains(&format!("sample {level} message")), "{stdout}");
        }
        assert!(stdout.contains("levels [ 'silly'"));
        assert!(stderr.contains("sample wtf message"));
    }

    #[test]
    fn browser_mode_prints_console_calls() {
        let (code, stdout, stderr) = run(&["--level", "error", "--browser", "ui"]);
        assert_eq!(code, 0);
        assert!(stderr.is_empty());
        assert!(stdout.starts_with(r#"console.error("%c[ui]"#), "{stdout}");
        assert_eq!(stdout.lines().filter(|line| line.starts_with("console.")).count(), 2);
    }

    #[test]
    fn unknown_level_is_a_config_error() {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let code = run_with(["decolog", "--level", "loud"], &mut stdout, &mut stderr);
        assert_eq!(code, CONFIG_ERROR_EXIT);
        let stderr = String::from_utf8(stderr).expect("utf-8");
        assert!(stderr.contains("unknown log level `loud`"));
    }

    #[test]
    fn unknown_color_mode_is_a_config_error() {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let code = run_with(["decolog", "--color", "rainbow"], &mut stdout, &mut stderr);
        assert_eq!(code, CONFIG_ERROR_EXIT);
    }
}
