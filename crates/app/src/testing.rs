//! In-memory port fakes shared by the unit tests of this crate.

use std::sync::{Arc, Mutex};

use homectl_domain::device::Device;

use crate::ports::{ActivityLog, SharedSink, StatusSink};

/// Which channel a recorded line went to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Info(String),
    Error(String),
}

#[derive(Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<Line>>,
}

impl RecordingSink {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn lines(&self) -> Vec<Line> {
        self.lines.lock().unwrap().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|line| match line {
                Line::Info(text) => Some(text),
                Line::Error(_) => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|line| match line {
                Line::Error(text) => Some(text),
                Line::Info(_) => None,
            })
            .collect()
    }
}

impl StatusSink for RecordingSink {
    fn emit(&self, line: &str) {
        self.lines.lock().unwrap().push(Line::Info(line.to_string()));
    }

    fn emit_error(&self, line: &str) {
        self.lines.lock().unwrap().push(Line::Error(line.to_string()));
    }
}

pub fn as_shared(sink: &Arc<RecordingSink>) -> SharedSink {
    Arc::clone(sink) as SharedSink
}

#[derive(Default)]
pub struct MemoryLog {
    records: Mutex<Vec<String>>,
}

impl MemoryLog {
    pub fn records(&self) -> Vec<String> {
        self.records.lock().unwrap().clone()
    }
}

impl ActivityLog for MemoryLog {
    fn record(&self, message: &str) {
        self.records.lock().unwrap().push(message.to_string());
    }
}

pub fn living_room_light() -> Device {
    Device::light("L1")
        .name("Living Room Light")
        .location("Living Room")
        .build()
        .unwrap()
}

pub fn living_room_thermostat() -> Device {
    Device::thermostat("T1")
        .name("Living Room Thermostat")
        .location("Living Room")
        .build()
        .unwrap()
}

pub fn living_room_speaker() -> Device {
    Device::smart_speaker("S1")
        .name("Living Room Speaker")
        .location("Living Room")
        .build()
        .unwrap()
}
