//! State layer for the Evergreen site: sustainable living tips, productivity
//! trackers, a wellness self-assessment and a community feed.
//!
//! Each section owns its own state inside [`SiteState`]. A front end calls the
//! `commands` functions of each feature module with a shared `&SiteState`;
//! every command returns `Result<T, String>` so errors cross any bridge as text.

pub mod assessment;
pub mod clock;
pub mod community;
pub mod content;
pub mod events;
pub mod models;
pub mod productivity;
pub mod settings;
pub mod sustainability;
pub mod theme;
mod utils;

use std::{
    path::PathBuf,
    sync::{Arc, Mutex, MutexGuard},
};

use anyhow::Result;
use log::info;

use assessment::QuizScorer;
use clock::{Clock, SystemClock};
use community::CommunityFeed;
use events::{EventSink, NoopSink, SiteEvent};
use productivity::{GoalTracker, HabitTracker, TaskList};
use settings::{SettingsStore, SiteSettings};
use sustainability::CommitmentLedger;
use theme::{ColorSchemeProbe, EnvColorSchemeProbe, ThemeState};

pub use utils::logging::init_logging;

pub struct SiteState {
    pub(crate) theme: Mutex<ThemeState>,
    pub(crate) quiz: Mutex<QuizScorer>,
    pub(crate) commitments: Mutex<CommitmentLedger>,
    pub(crate) feed: Mutex<CommunityFeed>,
    pub(crate) goals: Mutex<GoalTracker>,
    pub(crate) tasks: Mutex<TaskList>,
    pub(crate) habits: Mutex<HabitTracker>,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) events: Arc<dyn EventSink>,
    pub(crate) settings: SettingsStore,
}

impl SiteState {
    pub fn new(
        settings: SettingsStore,
        probe: &dyn ColorSchemeProbe,
        clock: Arc<dyn Clock>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        let SiteSettings {
            prefers_dark,
            seed_demo_content,
            ..
        } = settings.settings();

        let (feed, goals, tasks, habits) = if seed_demo_content {
            (
                CommunityFeed::seeded(clock.now()),
                GoalTracker::seeded(),
                TaskList::seeded(),
                HabitTracker::seeded(),
            )
        } else {
            (
                CommunityFeed::new(),
                GoalTracker::new(),
                TaskList::new(),
                HabitTracker::new(),
            )
        };

        Self {
            theme: Mutex::new(ThemeState::detect(probe, prefers_dark)),
            quiz: Mutex::new(QuizScorer::wellness_check_in()),
            commitments: Mutex::new(CommitmentLedger::new()),
            feed: Mutex::new(feed),
            goals: Mutex::new(goals),
            tasks: Mutex::new(tasks),
            habits: Mutex::new(habits),
            clock,
            events,
            settings,
        }
    }

    pub fn settings(&self) -> SiteSettings {
        self.settings.settings()
    }

    pub(crate) fn emit(&self, event: SiteEvent) -> Result<(), String> {
        log::debug!("Emitting {} event", event.name());
        self.events.emit(&event).map_err(|e| e.to_string())
    }
}

pub(crate) fn lock<T>(section: &Mutex<T>) -> Result<MutexGuard<'_, T>, String> {
    section.lock().map_err(|e| e.to_string())
}

/// Wires logging, settings, the environment color-scheme probe and the system
/// clock into a fresh `SiteState`.
pub fn bootstrap(
    settings_path: Option<PathBuf>,
    events: Option<Arc<dyn EventSink>>,
) -> Result<SiteState> {
    let settings = SettingsStore::new(settings_path)?;
    init_logging(settings.settings().level_filter());

    info!("Evergreen starting up...");

    let events = events.unwrap_or_else(|| Arc::new(NoopSink) as Arc<dyn EventSink>);
    let state = SiteState::new(settings, &EnvColorSchemeProbe, Arc::new(SystemClock), events);

    info!(
        "Site ready (dark mode: {})",
        lock(&state.theme).map(|t| t.dark_mode).unwrap_or(false)
    );
    Ok(state)
}

pub fn get_theme(state: &SiteState) -> Result<ThemeState, String> {
    Ok(*lock(&state.theme)?)
}

pub fn toggle_dark_mode(state: &SiteState) -> Result<bool, String> {
    let dark_mode = lock(&state.theme)?.toggle();
    state.emit(SiteEvent::ThemeChanged { dark_mode })?;
    Ok(dark_mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{events::RecordingSink, theme::FixedColorScheme};

    fn state_with(settings: SiteSettings, prefers_dark: bool) -> (SiteState, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        let state = SiteState::new(
            SettingsStore::from_settings(settings),
            &FixedColorScheme(prefers_dark),
            Arc::new(SystemClock),
            sink.clone(),
        );
        (state, sink)
    }

    #[test]
    fn initial_theme_follows_probe() {
        let (state, _) = state_with(SiteSettings::default(), true);
        assert!(get_theme(&state).unwrap().dark_mode);
    }

    #[test]
    fn settings_override_probe() {
        let settings = SiteSettings {
            prefers_dark: Some(false),
            ..SiteSettings::default()
        };
        let (state, _) = state_with(settings, true);
        assert!(!get_theme(&state).unwrap().dark_mode);
    }

    #[test]
    fn toggle_emits_theme_changed() {
        let (state, sink) = state_with(SiteSettings::default(), false);
        assert!(toggle_dark_mode(&state).unwrap());
        assert!(!toggle_dark_mode(&state).unwrap());
        assert_eq!(
            sink.events(),
            vec![
                SiteEvent::ThemeChanged { dark_mode: true },
                SiteEvent::ThemeChanged { dark_mode: false },
            ]
        );
    }

    #[test]
    fn unseeded_state_starts_empty() {
        let settings = SiteSettings {
            seed_demo_content: false,
            ..SiteSettings::default()
        };
        let (state, _) = state_with(settings, false);
        assert!(lock(&state.feed).unwrap().is_empty());
        assert!(lock(&state.goals).unwrap().goals().is_empty());
        assert!(lock(&state.tasks).unwrap().tasks().is_empty());
        assert!(lock(&state.habits).unwrap().habits().is_empty());
    }
}
