use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use minus::{Pager, page_all};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vc_chrono_log::areas::chronicle::Chronicle;
use vc_chrono_log::areas::log_source::LogSource;
use vc_chrono_log::artifacts::core::{PagerWriter, should_page};
use vc_chrono_log::artifacts::date::DEFAULT_TZ_CORRECTION_SECONDS;
use vc_chrono_log::artifacts::date::normalizer::{DateNormalizer, DisplayZone, TimezoneConvention};
use vc_chrono_log::commands::report::ReportOptions;
use vc_chrono_log::{CvsTimezone, FormatChoice};

#[derive(Parser)]
#[command(
    name = "vc-chrono-log",
    version = "0.1.0",
    about = "A chronological report of CVS and Subversion history",
    long_about = "This tool reads a CVS log (`cvs log` or `rlog` output) or a Subversion \
    XML log (`svn log --xml --verbose`) and prints one entry per logical commit, newest first. \
    CVS file revisions are grouped into commits by commit id, or by identical comments \
    within a two-minute window when no commit id is present.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The log file to read; standard input when omitted or '-'")]
    file: Option<PathBuf>,
    #[arg(short, long, help = "Write the report to this file instead of standard output")]
    output: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = FormatChoice::Auto,
        help = "The input format"
    )]
    format: FormatChoice,
    #[arg(
        long,
        value_enum,
        default_value_t = CvsTimezone::Strip,
        help = "How to treat the zone suffix of CVS dates"
    )]
    cvs_timezone: CvsTimezone,
    #[arg(
        long,
        value_name = "SECONDS",
        default_value_t = DEFAULT_TZ_CORRECTION_SECONDS,
        allow_negative_numbers = true,
        help = "Extra shift added to CVS dates with --cvs-timezone apply"
    )]
    tz_correction: i64,
    #[arg(
        long,
        value_name = "ZONE",
        default_value = "local",
        help = "Zone for Subversion dates: 'local', 'utc' or an offset like +0100"
    )]
    display_offset: String,
    #[arg(long, help = "Never page the report")]
    no_pager: bool,
    #[arg(short, long, action = ArgAction::Count, help = "More diagnostics (repeatable)")]
    verbose: u8,
    #[arg(short, long, conflicts_with = "verbose", help = "Only report errors")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }

        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    fn normalizer(&self) -> Result<DateNormalizer> {
        let convention = match self.cvs_timezone {
            CvsTimezone::Strip => TimezoneConvention::StripOffset,
            CvsTimezone::Apply => TimezoneConvention::ApplyOffset {
                correction_seconds: self.tz_correction,
            },
        };
        let display_zone = DisplayZone::try_parse(&self.display_offset)
            .with_context(|| format!("invalid --display-offset: {}", self.display_offset))?;

        DateNormalizer::new(convention, display_zone)
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    let source = LogSource::from_arg(cli.file.as_deref());
    let text = source.read_to_string()?;
    tracing::info!("read {} bytes from {}", text.len(), source);

    let normalizer = cli.normalizer()?;
    let opts = ReportOptions { format: cli.format };

    let mut pager = None;
    let writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None if should_page(cli.no_pager) => {
            let p = Pager::new();
            pager = Some(p.clone());
            Box::new(PagerWriter::new(p))
        }
        None => Box::new(std::io::stdout()),
    };

    let chronicle = Chronicle::new(writer, normalizer);
    chronicle.report(&text, &opts)?;

    if let Some(pager) = pager {
        page_all(pager)?;
    }

    Ok(())
}
