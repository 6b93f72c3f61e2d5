//! Fetch command implementation
//!
//! Merges flags over the loaded configuration, validates the request, runs the
//! export and maps the outcome to an exit code.

use crate::config::WaktuConfig;
use crate::core::export::{ExportCoordinator, ExportOutcome, ExportSummary, OutputTarget};
use crate::domain::{ExitStatus, FetchRequest, Period, Result, WaktuError, ZoneCode};
use clap::builder::PossibleValuesParser;
use clap::Args;

/// Arguments for fetching a schedule
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct FetchArgs {
    /// JAKIM zone code [default: SGR01]
    #[arg(long)]
    pub zone: Option<String>,

    /// Period to fetch [default: month]
    #[arg(long, value_parser = PossibleValuesParser::new(Period::ALL.map(|p| p.as_str())))]
    pub period: Option<String>,

    /// Start date YYYY-MM-DD (required for --period duration)
    #[arg(long)]
    pub start: Option<String>,

    /// End date YYYY-MM-DD (required for --period duration)
    #[arg(long)]
    pub end: Option<String>,

    /// Output CSV filename (derived from zone and period when omitted)
    #[arg(long)]
    pub out: Option<String>,

    /// Output directory [default: data]
    #[arg(long)]
    pub outdir: Option<String>,

    /// HTTP timeout in seconds [default: 30]
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Attempts before giving up [default: 3]
    #[arg(long)]
    pub retries: Option<u32>,
}

impl FetchArgs {
    /// Apply flag overrides to `config`
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the merged configuration is invalid.
    pub fn apply_overrides(&self, config: &mut WaktuConfig) -> Result<()> {
        if let Some(zone) = &self.zone {
            config.request.zone = zone.clone();
        }
        if let Some(period) = &self.period {
            config.request.period = period.parse::<Period>()?;
        }
        if let Some(outdir) = &self.outdir {
            config.output.directory = outdir.clone();
        }
        if let Some(timeout) = self.timeout {
            config.api.timeout_seconds = timeout;
        }
        if let Some(retries) = self.retries {
            config.api.retry.max_attempts = retries;
        }

        config
            .validate()
            .map_err(|e| WaktuError::Configuration(format!("Invalid options: {e}")))
    }

    /// Build the validated request from the merged configuration
    ///
    /// # Errors
    ///
    /// Returns an input error for missing or malformed duration dates.
    pub fn build_request(&self, config: &WaktuConfig) -> Result<FetchRequest> {
        let zone = ZoneCode::new(config.request.zone.as_str()).map_err(WaktuError::Configuration)?;
        FetchRequest::new(
            zone,
            config.request.period,
            self.start.as_deref(),
            self.end.as_deref(),
        )
    }

    /// Execute the fetch and return the process exit status
    pub async fn execute(&self, mut config: WaktuConfig) -> ExitStatus {
        if let Err(e) = self.apply_overrides(&mut config) {
            crate::log_error_with_context!(&e, "Input error");
            return ExitStatus::from(&e);
        }

        tracing::info!(
            zone = %config.request.zone,
            period = %config.request.period,
            start = self.start.as_deref().unwrap_or(""),
            end = self.end.as_deref().unwrap_or(""),
            outdir = %config.output.directory,
            "Start"
        );

        let request = match self.build_request(&config) {
            Ok(request) => request,
            Err(e) => {
                crate::log_error_with_context!(&e, "Input error");
                return ExitStatus::from(&e);
            }
        };

        run_export(&config, &request, self.out.clone()).await
    }
}

/// Run the export for an already validated request
pub async fn run_export(
    config: &WaktuConfig,
    request: &FetchRequest,
    out: Option<String>,
) -> ExitStatus {
    let coordinator = match ExportCoordinator::new(config) {
        Ok(c) => c,
        Err(e) => {
            crate::log_error_with_context!(&e, "Failed to initialize");
            return ExitStatus::from(&e);
        }
    };

    let target = OutputTarget::new(&config.output.directory, out);

    match coordinator.execute(request, &target).await {
        Ok(ExportOutcome::Written(summary)) => {
            print_summary(&summary);
            ExitStatus::Success
        }
        Ok(ExportOutcome::Empty) => ExitStatus::NoRecords,
        Err(e @ WaktuError::Fetch(_)) => {
            crate::log_error_with_context!(&e, "FAILED to fetch data");
            ExitStatus::from(&e)
        }
        Err(e) => {
            crate::log_error_with_context!(&e, "FAILED to write CSV");
            ExitStatus::from(&e)
        }
    }
}

fn print_summary(summary: &ExportSummary) {
    println!();
    println!("Export Summary:");
    println!("  File: {}", summary.output_path.display());
    println!("  Rows: {}", summary.rows_written);
    if let Some(span) = &summary.date_span {
        println!("  Dates: {} → {} ({} days)", span.first, span.last, span.days);
    }
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overrides() {
        let args = FetchArgs {
            zone: Some("WLY01".to_string()),
            period: Some("year".to_string()),
            outdir: Some("out".to_string()),
            timeout: Some(5),
            retries: Some(4),
            ..Default::default()
        };

        let mut config = WaktuConfig::default();
        args.apply_overrides(&mut config).unwrap();

        assert_eq!(config.request.zone, "WLY01");
        assert_eq!(config.request.period, Period::Year);
        assert_eq!(config.output.directory, "out");
        assert_eq!(config.api.timeout_seconds, 5);
        assert_eq!(config.api.retry.max_attempts, 4);
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let mut config = WaktuConfig::default();
        FetchArgs::default().apply_overrides(&mut config).unwrap();
        assert_eq!(config.request.zone, "SGR01");
        assert_eq!(config.request.period, Period::Month);
    }

    #[test]
    fn test_zero_retries_rejected() {
        let args = FetchArgs {
            retries: Some(0),
            ..Default::default()
        };
        let err = args
            .apply_overrides(&mut WaktuConfig::default())
            .unwrap_err();
        assert_eq!(ExitStatus::from(&err), ExitStatus::InvalidInput);
    }

    #[test]
    fn test_build_request_duration_missing_end() {
        let args = FetchArgs {
            period: Some("duration".to_string()),
            start: Some("2025-09-01".to_string()),
            ..Default::default()
        };
        let mut config = WaktuConfig::default();
        args.apply_overrides(&mut config).unwrap();

        let err = args.build_request(&config).unwrap_err();
        assert!(matches!(err, WaktuError::Input(_)));
    }

    #[test]
    fn test_build_request_duration() {
        let args = FetchArgs {
            period: Some("duration".to_string()),
            start: Some("2025-09-01".to_string()),
            end: Some("2025-09-10".to_string()),
            ..Default::default()
        };
        let mut config = WaktuConfig::default();
        args.apply_overrides(&mut config).unwrap();

        let request = args.build_request(&config).unwrap();
        assert_eq!(request.period(), Period::Duration);
        assert_eq!(request.range().unwrap().end_str(), "2025-09-10");
    }

    #[tokio::test]
    async fn test_execute_invalid_dates_exits_before_network() {
        let args = FetchArgs {
            period: Some("duration".to_string()),
            start: Some("2025-9-1".to_string()),
            end: Some("2025-09-10".to_string()),
            ..Default::default()
        };

        // Unroutable base URL: any network call would fail with exit code 1
        let mut config = WaktuConfig::default();
        config.api.base_url = "http://127.0.0.1:1/index.php".to_string();

        assert_eq!(args.execute(config).await, ExitStatus::InvalidInput);
    }
}
