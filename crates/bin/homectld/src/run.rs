//! One controller run, from start-up to shutdown.
//!
//! The run is a single sequential flow. The only concurrent piece is the
//! status monitor, started after the scheduled tasks and cancelled before
//! the run returns. Every collaborator arrives through a port so the whole
//! flow can be driven with in-memory fakes.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use homectl_adapter_virtual::LivingRoom;
use homectl_app::monitor::StatusMonitor;
use homectl_app::ports::{ActivityLog, MessageEndpoint, SharedSink, WeatherSource};
use homectl_app::services::access::{AccessGate, Session};
use homectl_app::services::registry::DeviceRegistry;
use homectl_app::services::scheduler::{RunSummary, Scheduler};
use homectl_domain::alert::MaintenanceAlert;
use homectl_domain::error::HomeError;
use homectl_domain::status::DeviceStatus;
use homectl_domain::user::Capability;

use crate::config::Config;
use crate::console::PasswordPrompt;

/// What happened during a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub scheduled: RunSummary,
    /// Bound address, when the endpoint started.
    pub listening_on: Option<SocketAddr>,
    pub greeting_sent: bool,
    pub authenticated: bool,
    /// Status reports emitted by the monitor before it was cancelled.
    pub monitor_reports: u64,
    /// Final state of every device, in registration order.
    pub devices: Vec<DeviceStatus>,
}

/// Drive one controller run.
///
/// Failures of individual steps are reported through `sink` and the run
/// carries on.
///
/// # Errors
///
/// Returns an error only if the built-in devices fail to build.
pub async fn run<E, W, L, P>(
    config: &Config,
    sink: SharedSink,
    endpoint: &mut E,
    weather: &W,
    log: L,
    prompt: &mut P,
) -> Result<RunReport, HomeError>
where
    E: MessageEndpoint,
    W: WeatherSource,
    L: ActivityLog,
    P: PasswordPrompt,
{
    let log = Arc::new(log);
    log.record("System started.");
    tracing::info!("system started");

    let mut registry = DeviceRegistry::new(Arc::clone(&sink));
    let room = LivingRoom::install(&mut registry)?;

    let mut scheduler = Scheduler::new(Arc::clone(&sink));
    let morning = room.light.clone();
    scheduler.add_task("08:00", move || {
        morning.turn_on();
        Ok(())
    });
    let night = room.light.clone();
    scheduler.add_task("22:00", move || {
        night.turn_off();
        Ok(())
    });
    let scheduled = scheduler.run_tasks();

    let shutdown = CancellationToken::new();
    let monitor = StatusMonitor::new(config.monitor_interval()).start(room.light.clone(), shutdown.clone());

    let listening_on = match endpoint.start_server().await {
        Ok(addr) => {
            sink.emit(&format!("Server started. Listening on port {}...", addr.port()));
            Some(addr)
        }
        Err(err) => {
            sink.emit_error(&format!("Failed to start server: {err}"));
            None
        }
    };
    let greeting_sent = match endpoint.send_data(&config.server.greeting).await {
        Ok(()) => true,
        Err(err) => {
            sink.emit_error(&format!("Failed to send data: {err}"));
            false
        }
    };

    let admin = config.admin_user();
    let password = prompt.read_password(admin.username()).await;
    let session = AccessGate::new(Arc::clone(&log)).login(&admin, &password);
    if session.is_authenticated() {
        sink.emit(&format!("Authentication successful. Welcome, {}!", admin.role()));
    } else {
        sink.emit_error("Authentication failed.");
    }

    if permitted(&session, Capability::ControlDevices, "weather integration", &sink) {
        match weather.outdoor_temperature().await {
            Ok(external) => {
                // rejection is already reported by the handle
                let _ = room.thermostat.integrate_weather(external);
            }
            Err(err) => sink.emit_error(&format!("Failed to read outdoor temperature: {err}")),
        }
    }

    if permitted(&session, Capability::ViewLogs, "maintenance alerts", &sink) {
        let alert = MaintenanceAlert::new(room.light.id().clone(), "Light bulb needs replacement.");
        tracing::warn!(device_id = %alert.device_id(), message = alert.message(), "maintenance alert");
        sink.emit(&alert.to_string());
    }

    if permitted(&session, Capability::ControlDevices, "device rename", &sink) {
        // an empty name is the only rejection, and the handle reports it
        let _ = room.light.rename("Main Living Room Light");
    }

    if permitted(&session, Capability::ControlDevices, "energy-saving mode", &sink) {
        registry.energy_saving_sweep();
    }

    log.record("System shutting down.");
    tracing::info!("system shutting down");
    shutdown.cancel();
    let monitor_reports = monitor.await.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "status monitor did not stop cleanly");
        0
    });

    Ok(RunReport {
        scheduled,
        listening_on,
        greeting_sent,
        authenticated: session.is_authenticated(),
        monitor_reports,
        devices: registry.statuses(),
    })
}

fn permitted(session: &Session, capability: Capability, step: &str, sink: &SharedSink) -> bool {
    match session.require(capability) {
        Ok(()) => true,
        Err(err) => {
            sink.emit_error(&format!("Skipping {step}: {err}."));
            false
        }
    }
}
