//! Pipeline orchestration for the TOI ranker CLI
//!
//! Runs the four stages in order: load the catalog, apply the eligibility
//! gates, score the survivors, rank and write the output. Data flows
//! strictly forward; either the whole pipeline completes and the output
//! catalog is written, or the run aborts before writing anything.

use tracing::{debug, info};

use crate::app::services::{catalog_loader, eligibility, ranking, scoring};
use crate::cli::args::Args;
use crate::{Result, config::Config};

/// Run statistics reported after a completed pipeline
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Data records encountered in the input catalog
    pub total_records: usize,
    /// Rows dropped at load for missing required fields
    pub dropped_missing_required: usize,
    /// Candidates rejected by the eligibility gates
    pub rejected_by_gates: usize,
    /// Candidates scored, ranked, and written
    pub ranked: usize,
}

/// Execute the full filter-and-rank pipeline
pub fn run(args: Args) -> Result<RunStats> {
    let config = args.to_config();
    config.validate()?;
    log_inert_surface(&config);

    // Load
    let load_result = catalog_loader::load_catalog(&args.catalog)?;
    let mut stats = RunStats {
        total_records: load_result.stats.total_records,
        dropped_missing_required: load_result.stats.dropped_missing_required,
        ..RunStats::default()
    };

    // Filter
    let loaded = load_result.candidates.len();
    let surviving = eligibility::filter_candidates(load_result.candidates);
    stats.rejected_by_gates = loaded - surviving.len();

    // Score and rank
    let mut scored = scoring::score_candidates(surviving, &config.weights);
    ranking::rank_candidates(&mut scored);
    stats.ranked = scored.len();

    // Write, then summarize on stdout
    ranking::write_ranked_catalog(&config.output_path, &scored)?;
    ranking::print_summary(&scored);

    info!(
        "Pipeline complete: {} records -> {} ranked candidates",
        stats.total_records, stats.ranked
    );
    Ok(stats)
}

/// Record the accepted-but-unused observing parameters at debug level so a
/// run log shows what the caller passed
fn log_inert_surface(config: &Config) {
    let site = &config.observing_site;
    debug!(
        "Observing window accepted but not used: start={:?} end={:?} lat={} lon={} strict={}",
        site.window_start, site.window_end, site.latitude_deg, site.longitude_deg, site.strict
    );
}

/// Set up structured logging on stderr, keeping stdout clean for the summary
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("toi_ranker={}", args.effective_log_level())));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", args.effective_log_level());
    Ok(())
}
