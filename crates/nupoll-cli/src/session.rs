//! One poll session as run by the binary: resolve inputs, probe, report.

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use nupoll_config::{ConfigLoader, HostInputs, Overrides};
use nupoll_core::error::NupollResult;
use nupoll_registry::{Poller, ProbeSettings, RegistryProbe};

use crate::output::OutputHandler;
use crate::reporter::HostReporter;
use crate::Cli;

/// Run a session. `Ok(true)` means no failure was signaled.
pub async fn execute(cli: &Cli, output: &OutputHandler, cancel: CancellationToken) -> NupollResult<bool> {
    let inputs = HostInputs {
        package: cli.package.clone(),
        version: cli.package_version.clone(),
        attempts: cli.attempts.clone(),
    };
    let request = inputs.probe_request()?;

    let overrides = Overrides {
        registry_url: cli.registry_url.clone(),
        attempts: inputs.attempts(),
        delay_ms: cli.delay_ms,
        timeout_secs: cli.timeout_secs,
    };
    let settings = ConfigLoader::new(cli.config.clone()).load(&overrides).await?;
    let config = settings.poll_config()?;
    debug!("Resolved settings: {:?}", settings);

    let probe = RegistryProbe::with_settings(ProbeSettings {
        timeout: settings.timeout,
        user_agent: settings.user_agent.clone(),
    })?;
    let reporter = HostReporter::new(output, request.clone(), settings.registry_host());

    info!(
        "Checking {} {} on {} (up to {} attempts)",
        request.package_name(),
        request.package_version(),
        settings.registry_url,
        config.max_attempts()
    );

    let result = Poller::new(&probe, &reporter)
        .with_registry_url(settings.registry_url.clone())
        .with_cancellation(cancel)
        .poll(&request, &config)
        .await;

    debug!("Poll session finished: {:?}", result);
    Ok(!reporter.has_failed())
}
