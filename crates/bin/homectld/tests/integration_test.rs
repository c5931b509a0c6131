//! End-to-end tests for a full homectld run.
//!
//! Each test drives the complete flow (real registry, scheduler, monitor and
//! access gate, virtual devices) with in-memory fakes for the console,
//! network endpoint, activity log and password prompt. Time is paused so
//! the monitor interleaving is deterministic.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use homectl_adapter_virtual::FixedWeather;
use homectl_app::ports::{ActivityLog, MessageEndpoint, SharedSink, StatusSink, WeatherSource};
use homectl_domain::error::HomeError;
use homectld::config::Config;
use homectld::console::PasswordPrompt;
use homectld::run::{RunReport, run};

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Out(String),
    Err(String),
}

#[derive(Default)]
struct RecordingSink {
    lines: Mutex<Vec<Line>>,
}

impl RecordingSink {
    fn out(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .filter_map(|line| match line {
                Line::Out(text) => Some(text.clone()),
                Line::Err(_) => None,
            })
            .collect()
    }

    fn err(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .filter_map(|line| match line {
                Line::Err(text) => Some(text.clone()),
                Line::Out(_) => None,
            })
            .collect()
    }
}

impl StatusSink for RecordingSink {
    fn emit(&self, line: &str) {
        self.lines.lock().unwrap().push(Line::Out(line.to_string()));
    }

    fn emit_error(&self, line: &str) {
        self.lines.lock().unwrap().push(Line::Err(line.to_string()));
    }
}

#[derive(Default, Clone)]
struct MemoryLog {
    records: Arc<Mutex<Vec<String>>>,
}

impl ActivityLog for MemoryLog {
    fn record(&self, message: &str) {
        self.records.lock().unwrap().push(message.to_string());
    }
}

/// Endpoint that takes `delay` to serve each exchange.
#[derive(Default)]
struct FakeEndpoint {
    refuse_bind: bool,
    delay: Duration,
    listening: bool,
    sent: Mutex<Vec<String>>,
}

impl MessageEndpoint for FakeEndpoint {
    async fn start_server(&mut self) -> Result<SocketAddr, HomeError> {
        if self.refuse_bind {
            return Err(HomeError::Io("address already in use".into()));
        }
        self.listening = true;
        Ok(SocketAddr::from(([127, 0, 0, 1], 8080)))
    }

    async fn send_data(&self, message: &str) -> Result<(), HomeError> {
        if !self.listening {
            return Err(HomeError::Io("not listening".into()));
        }
        tokio::time::sleep(self.delay).await;
        self.sent.lock().unwrap().push(message.to_string());
        Ok(())
    }

    async fn receive_data(&self) -> String {
        String::new()
    }
}

struct TypedPassword(&'static str);

impl PasswordPrompt for TypedPassword {
    async fn read_password(&mut self, _username: &str) -> String {
        self.0.to_string()
    }
}

struct BrokenWeather;

impl WeatherSource for BrokenWeather {
    async fn outdoor_temperature(&self) -> Result<f64, HomeError> {
        Err(HomeError::Io("sensor offline".into()))
    }
}

struct Harness {
    sink: Arc<RecordingSink>,
    log: MemoryLog,
    endpoint: FakeEndpoint,
}

impl Harness {
    fn new(endpoint: FakeEndpoint) -> Self {
        Self {
            sink: Arc::new(RecordingSink::default()),
            log: MemoryLog::default(),
            endpoint,
        }
    }

    async fn run_with(&mut self, password: &'static str, weather: &impl WeatherSource) -> RunReport {
        let sink = Arc::clone(&self.sink) as SharedSink;
        run(
            &Config::default(),
            sink,
            &mut self.endpoint,
            weather,
            self.log.clone(),
            &mut TypedPassword(password),
        )
        .await
        .unwrap()
    }

    fn records(&self) -> Vec<String> {
        self.log.records.lock().unwrap().clone()
    }
}

fn slow_endpoint() -> FakeEndpoint {
    FakeEndpoint {
        delay: Duration::from_secs(12),
        ..FakeEndpoint::default()
    }
}

// ---------------------------------------------------------------------------
// Successful login
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn should_run_whole_flow_for_authenticated_admin() {
    let mut harness = Harness::new(slow_endpoint());

    let report = harness.run_with("password123", &FixedWeather::default()).await;

    assert_eq!(
        harness.sink.out(),
        vec![
            "Task scheduled for 08:00.",
            "Task scheduled for 22:00.",
            "Running task scheduled for 08:00...",
            "Living Room Light at Living Room turned ON with brightness 50%.",
            "Running task scheduled for 22:00...",
            "Living Room Light at Living Room turned OFF.",
            "Server started. Listening on port 8080...",
            "Living Room Light at Living Room is OFF with brightness 50%.",
            "Living Room Light at Living Room is OFF with brightness 50%.",
            "Authentication successful. Welcome, admin!",
            "External temperature: 68.5°F. Adjusting thermostat...",
            "Living Room Thermostat at Living Room set to 68.5°F.",
            "Maintenance Alert for Device ID L1: Light bulb needs replacement.",
            "Device renamed to: Main Living Room Light",
            "Enabling energy-saving mode...",
            "Main Living Room Light at Living Room turned OFF.",
            "Living Room Speaker at Living Room turned OFF.",
        ]
    );
    assert!(harness.sink.err().is_empty());
    assert!(report.authenticated);
    assert_eq!(report.monitor_reports, 2);
    assert_eq!(report.scheduled.executed, 2);
    assert_eq!(report.scheduled.failed, 0);
}

#[tokio::test(start_paused = true)]
async fn should_record_activity_in_order() {
    let mut harness = Harness::new(FakeEndpoint::default());

    harness.run_with("password123", &FixedWeather::default()).await;

    assert_eq!(
        harness.records(),
        vec!["System started.", "Admin logged in.", "System shutting down."]
    );
}

#[tokio::test(start_paused = true)]
async fn should_send_configured_greeting_once() {
    let mut harness = Harness::new(FakeEndpoint::default());

    let report = harness.run_with("password123", &FixedWeather::default()).await;

    assert!(report.greeting_sent);
    assert_eq!(report.listening_on.map(|addr| addr.port()), Some(8080));
    assert_eq!(
        *harness.endpoint.sent.lock().unwrap(),
        vec!["Thermostat updated to 72°F".to_string()]
    );
}

#[tokio::test(start_paused = true)]
async fn should_leave_only_thermostat_settings_changed() {
    let mut harness = Harness::new(FakeEndpoint::default());

    let report = harness.run_with("password123", &FixedWeather::new(60.0)).await;

    let names: Vec<_> = report.devices.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Main Living Room Light", "Living Room Thermostat", "Living Room Speaker"]
    );
    assert!(report.devices.iter().all(|d| !d.powered));
    assert!(
        harness
            .sink
            .out()
            .contains(&"Living Room Thermostat at Living Room set to 60°F.".to_string())
    );
}

// ---------------------------------------------------------------------------
// Failed login
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn should_skip_gated_steps_after_failed_login() {
    let mut harness = Harness::new(FakeEndpoint::default());

    let report = harness.run_with("PASSWORD123", &FixedWeather::default()).await;

    assert!(!report.authenticated);
    assert_eq!(
        harness.sink.err(),
        vec![
            "Authentication failed.",
            "Skipping weather integration: admin is not allowed to control devices.",
            "Skipping maintenance alerts: admin is not allowed to view logs.",
            "Skipping device rename: admin is not allowed to control devices.",
            "Skipping energy-saving mode: admin is not allowed to control devices.",
        ]
    );
    assert_eq!(report.devices[0].name, "Living Room Light");
    assert_eq!(
        harness.records(),
        vec!["System started.", "Failed login attempt.", "System shutting down."]
    );
}

#[tokio::test(start_paused = true)]
async fn should_fail_login_on_empty_password() {
    let mut harness = Harness::new(FakeEndpoint::default());

    let report = harness.run_with("", &FixedWeather::default()).await;

    assert!(!report.authenticated);
}

// ---------------------------------------------------------------------------
// Degraded collaborators
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn should_continue_when_server_cannot_start() {
    let mut harness = Harness::new(FakeEndpoint {
        refuse_bind: true,
        ..FakeEndpoint::default()
    });

    let report = harness.run_with("password123", &FixedWeather::default()).await;

    assert_eq!(report.listening_on, None);
    assert!(!report.greeting_sent);
    assert_eq!(
        harness.sink.err(),
        vec![
            "Failed to start server: io error: address already in use",
            "Failed to send data: io error: not listening",
        ]
    );
    assert!(report.authenticated);
    assert!(
        harness
            .sink
            .out()
            .contains(&"Enabling energy-saving mode...".to_string())
    );
}

#[tokio::test(start_paused = true)]
async fn should_report_weather_failure_and_continue() {
    let mut harness = Harness::new(FakeEndpoint::default());

    let report = harness.run_with("password123", &BrokenWeather).await;

    assert_eq!(
        harness.sink.err(),
        vec!["Failed to read outdoor temperature: io error: sensor offline"]
    );
    assert_eq!(report.devices[0].name, "Main Living Room Light");
}

#[tokio::test(start_paused = true)]
async fn should_stop_monitor_before_returning() {
    let mut harness = Harness::new(slow_endpoint());

    let report = harness.run_with("password123", &FixedWeather::default()).await;
    let lines_at_return = harness.sink.out().len();
    tokio::time::sleep(Duration::from_secs(60)).await;

    assert_eq!(report.monitor_reports, 2);
    assert_eq!(harness.sink.out().len(), lines_at_return);
}
