//! Play command handler

use anyhow::{Context, Result};
use tracing::info;

use scrubber::cli::PlayArgs;
use scrubber::host::{self, ClockMedia, HostError};
use scrubber::logging;
use scrubber::Config;

/// Length of the simulated media when none is given.
const DEFAULT_DURATION_SECS: f64 = 300.0;

#[cfg(not(tarpaulin_include))]
pub fn handle(args: PlayArgs) -> Result<()> {
    let duration_secs = args.duration.unwrap_or(DEFAULT_DURATION_SECS);
    if !(duration_secs.is_finite() && duration_secs > 0.0) {
        return Err(HostError::InvalidDuration(duration_secs).into());
    }

    let config = Config::load().context("Failed to load config")?;
    let mut settings = config.controller_settings();
    if let Some(rate) = args.rate {
        settings.playback_rate = scrubber::scrub::PlaybackRate::new(rate);
    }
    settings.start_muted |= args.muted;
    settings.autoplay &= !args.no_autoplay;

    if let Some(path) = &args.log_file {
        logging::init_file_logging(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
    }

    let duration_ms = duration_secs * 1000.0;
    let media = match config.select_source()? {
        Some(source) => ClockMedia::with_source(source.clone(), duration_ms),
        None => ClockMedia::new(duration_ms),
    };
    let title = media
        .source()
        .map(|source| source.source.clone())
        .unwrap_or_else(|| "scrubber".to_string());

    info!(duration_secs, rate = settings.playback_rate.value(), %title, "starting player");
    host::run(media, settings, &title).context("Player failed")?;
    Ok(())
}
