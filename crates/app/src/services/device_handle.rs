//! Device handle: shared, lock-guarded access to one device.
//!
//! The main flow, scheduled actions and the status monitor all reach the
//! same device through clones of one [`DeviceHandle`]. Each operation holds
//! the lock only for the single mutation or snapshot it performs; reporting
//! to the sink happens after the lock is released.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use homectl_domain::device::Device;
use homectl_domain::error::{HomeError, ValidationError};
use homectl_domain::event::DeviceEvent;
use homectl_domain::id::DeviceId;
use homectl_domain::status::DeviceStatus;

use crate::ports::SharedSink;

/// Cheaply cloneable handle to a device shared across tasks.
#[derive(Clone)]
pub struct DeviceHandle {
    id: DeviceId,
    device: Arc<Mutex<Device>>,
    sink: SharedSink,
}

impl DeviceHandle {
    /// Wrap `device`; state changes are reported through `sink`.
    #[must_use]
    pub fn new(device: Device, sink: SharedSink) -> Self {
        Self {
            id: device.id().clone(),
            device: Arc::new(Mutex::new(device)),
            sink,
        }
    }

    #[must_use]
    pub fn id(&self) -> &DeviceId {
        &self.id
    }

    /// Run `f` against the device under its lock.
    pub fn read<T>(&self, f: impl FnOnce(&Device) -> T) -> T {
        let device = self.device.lock().unwrap_or_else(PoisonError::into_inner);
        f(&device)
    }

    fn write<T>(&self, f: impl FnOnce(&mut Device) -> T) -> T {
        let mut device = self.device.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut device)
    }

    /// Snapshot the device without reporting anything.
    #[must_use]
    pub fn status(&self) -> DeviceStatus {
        self.read(Device::status)
    }

    /// Snapshot the device and report the status line.
    pub fn display_status(&self) -> DeviceStatus {
        let status = self.status();
        self.sink.emit(&status.to_string());
        status
    }

    pub fn turn_on(&self) -> DeviceEvent {
        let event = self.write(Device::turn_on);
        self.report(&event);
        event
    }

    pub fn turn_off(&self) -> DeviceEvent {
        let event = self.write(Device::turn_off);
        self.report(&event);
        event
    }

    /// # Errors
    ///
    /// Returns [`HomeError::Validation`] when `name` is empty.
    pub fn rename(&self, name: impl Into<String>) -> Result<DeviceEvent, HomeError> {
        let result = self.write(|device| device.rename(name));
        self.settle("rename", result)
    }

    /// # Errors
    ///
    /// Returns [`HomeError::Validation`] when `level` is outside `0..=100`
    /// or the device is not a light.
    pub fn set_brightness(&self, level: i32) -> Result<DeviceEvent, HomeError> {
        let result = self.write(|device| device.set_brightness(level));
        self.settle("set_brightness", result)
    }

    /// # Errors
    ///
    /// Returns [`HomeError::Validation`] when the device is not a thermostat.
    pub fn set_temperature(&self, value: f64) -> Result<DeviceEvent, HomeError> {
        let result = self.write(|device| device.set_temperature(value));
        self.settle("set_temperature", result)
    }

    /// # Errors
    ///
    /// Returns [`HomeError::Validation`] when the device is not a thermostat.
    pub fn integrate_weather(&self, external: f64) -> Result<Vec<DeviceEvent>, HomeError> {
        match self.write(|device| device.integrate_weather(external)) {
            Ok(events) => {
                for event in &events {
                    self.report(event);
                }
                Ok(events)
            }
            Err(err) => Err(self.reject("integrate_weather", err)),
        }
    }

    /// # Errors
    ///
    /// Returns [`HomeError::Validation`] when the speaker is off or the
    /// device is not a speaker.
    pub fn play_music(&self, track: impl Into<String>) -> Result<DeviceEvent, HomeError> {
        let result = self.write(|device| device.play_music(track));
        self.settle("play_music", result)
    }

    fn settle(
        &self,
        operation: &'static str,
        result: Result<DeviceEvent, ValidationError>,
    ) -> Result<DeviceEvent, HomeError> {
        match result {
            Ok(event) => {
                self.report(&event);
                Ok(event)
            }
            Err(err) => Err(self.reject(operation, err)),
        }
    }

    fn report(&self, event: &DeviceEvent) {
        tracing::debug!(device_id = %event.device_id(), ?event, "device state changed");
        self.sink.emit(&event.to_string());
    }

    fn reject(&self, operation: &'static str, err: ValidationError) -> HomeError {
        tracing::warn!(device_id = %self.id, operation, error = %err, "device operation rejected");
        self.sink.emit_error(&err.to_string());
        err.into()
    }
}

impl fmt::Debug for DeviceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceHandle")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        RecordingSink, as_shared, living_room_light, living_room_speaker, living_room_thermostat,
    };
    use homectl_domain::device::DeviceKind;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn should_not_repeat_console_lines_in_info_logs() {
        let sink = RecordingSink::shared();
        let light = DeviceHandle::new(living_room_light(), as_shared(&sink));
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            light.turn_on();
        });

        let logged = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(!logged.contains("turned ON"), "unexpected log output: {logged}");
        assert_eq!(sink.infos().len(), 1);
    }

    #[test]
    fn should_report_power_changes_to_sink() {
        let sink = RecordingSink::shared();
        let light = DeviceHandle::new(living_room_light(), as_shared(&sink));

        light.turn_on();
        light.turn_off();

        assert_eq!(
            sink.infos(),
            vec![
                "Living Room Light at Living Room turned ON with brightness 50%.".to_string(),
                "Living Room Light at Living Room turned OFF.".to_string(),
            ]
        );
        assert!(!light.status().powered);
    }

    #[test]
    fn should_share_state_between_clones() {
        let sink = RecordingSink::shared();
        let light = DeviceHandle::new(living_room_light(), as_shared(&sink));
        let other = light.clone();

        light.set_brightness(75).unwrap();

        assert_eq!(other.status().kind, DeviceKind::Light { brightness: 75 });
    }

    #[test]
    fn should_report_rejection_on_error_channel_and_keep_state() {
        let sink = RecordingSink::shared();
        let light = DeviceHandle::new(living_room_light(), as_shared(&sink));

        let err = light.set_brightness(101).unwrap_err();

        assert!(matches!(err, HomeError::Validation(_)));
        assert_eq!(
            sink.errors(),
            vec!["Invalid brightness level 101. Must be between 0 and 100.".to_string()]
        );
        assert_eq!(light.status().kind, DeviceKind::light());
    }

    #[test]
    fn should_report_both_weather_lines() {
        let sink = RecordingSink::shared();
        let thermostat = DeviceHandle::new(living_room_thermostat(), as_shared(&sink));

        thermostat.integrate_weather(68.5).unwrap();

        assert_eq!(
            sink.infos(),
            vec![
                "External temperature: 68.5°F. Adjusting thermostat...".to_string(),
                "Living Room Thermostat at Living Room set to 68.5°F.".to_string(),
            ]
        );
    }

    #[test]
    fn should_play_only_while_powered() {
        let sink = RecordingSink::shared();
        let speaker = DeviceHandle::new(living_room_speaker(), as_shared(&sink));

        assert!(speaker.play_music("Track").is_err());
        speaker.turn_on();
        assert!(speaker.play_music("Track").is_ok());
        speaker.turn_off();

        assert_eq!(speaker.status().kind, DeviceKind::smart_speaker());
        assert_eq!(sink.errors().len(), 1);
    }

    #[test]
    fn should_emit_status_line_on_display_status() {
        let sink = RecordingSink::shared();
        let light = DeviceHandle::new(living_room_light(), as_shared(&sink));

        let status = light.display_status();

        assert!(!status.powered);
        assert_eq!(
            sink.infos(),
            vec!["Living Room Light at Living Room is OFF with brightness 50%.".to_string()]
        );
    }

    #[test]
    fn should_not_emit_on_plain_status_read() {
        let sink = RecordingSink::shared();
        let light = DeviceHandle::new(living_room_light(), as_shared(&sink));

        let _ = light.status();

        assert!(sink.lines().is_empty());
    }

    #[test]
    fn should_rename_through_handle() {
        let sink = RecordingSink::shared();
        let light = DeviceHandle::new(living_room_light(), as_shared(&sink));

        light.rename("Main Living Room Light").unwrap();

        assert_eq!(light.read(|d| d.name().to_string()), "Main Living Room Light");
    }
}
