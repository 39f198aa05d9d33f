//! Notifications pushed from the state layer to whatever renders it.
//!
//! The renderer decides what a `Celebration` looks like; nothing in the state
//! layer depends on it.

use anyhow::Result;
use serde::Serialize;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Celebration {
    #[serde(rename_all = "camelCase")]
    GoalCompleted { goal_id: String },
    #[serde(rename_all = "camelCase")]
    TaskCompleted { task_id: String },
    #[serde(rename_all = "camelCase")]
    HabitChecked { habit_id: String, streak: u32 },
}

impl Celebration {
    /// Suggested burst size; bigger moments get bigger bursts.
    pub fn particle_count(&self) -> u32 {
        match self {
            Celebration::GoalCompleted { .. } => 100,
            Celebration::TaskCompleted { .. } => 50,
            Celebration::HabitChecked { .. } => 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "payload", rename_all = "kebab-case")]
pub enum SiteEvent {
    Celebration(Celebration),
    #[serde(rename_all = "camelCase")]
    ThemeChanged { dark_mode: bool },
}

impl SiteEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SiteEvent::Celebration(_) => "celebration",
            SiteEvent::ThemeChanged { .. } => "theme-changed",
        }
    }
}

pub trait EventSink: Send + Sync {
    fn emit(&self, event: &SiteEvent) -> Result<()>;
}

/// Drops every event. Used when no renderer is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn emit(&self, _event: &SiteEvent) -> Result<()> {
        Ok(())
    }
}

/// Keeps emitted events in order so they can be inspected later.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SiteEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SiteEvent> {
        match self.events.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn take(&self) -> Vec<SiteEvent> {
        match self.events.lock() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    pub fn celebrations(&self) -> Vec<Celebration> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SiteEvent::Celebration(c) => Some(c),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: &SiteEvent) -> Result<()> {
        self.events
            .lock()
            .map_err(|e| anyhow::anyhow!("event log poisoned: {e}"))?
            .push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serializes_with_kebab_name() {
        let event = SiteEvent::ThemeChanged { dark_mode: true };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "theme-changed");
        assert_eq!(json["payload"]["darkMode"], true);
        assert_eq!(event.name(), "theme-changed");
    }

    #[test]
    fn celebration_payload_is_camel_case() {
        let event = SiteEvent::Celebration(Celebration::HabitChecked {
            habit_id: "3".into(),
            streak: 11,
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "celebration");
        assert_eq!(json["payload"]["kind"], "habitChecked");
        assert_eq!(json["payload"]["habitId"], "3");
    }

    #[test]
    fn recording_sink_take_drains() {
        let sink = RecordingSink::new();
        sink.emit(&SiteEvent::ThemeChanged { dark_mode: false })
            .unwrap();
        assert_eq!(sink.take().len(), 1);
        assert!(sink.events().is_empty());
    }
}
