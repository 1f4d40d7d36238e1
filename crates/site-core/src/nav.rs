//! Section navigation state machine.
//!
//! Transitions return the effects the platform layer must execute, so the
//! machine stays deterministic and testable without a UI runtime. The
//! frontend feeds wheel gestures, indicator clicks and the cooldown expiry
//! in; scroll requests and indicator refreshes come out.

use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavPhase {
    Idle,
    CoolingDown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    WheelUp,
    WheelDown,
    CooldownElapsed,
    IndicatorClick(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEffect {
    /// Arm the one-shot cooldown timer; `CooldownElapsed` comes back when it
    /// fires. Never overlaps, wheel events are swallowed while cooling.
    StartCooldown,
    /// Smooth-scroll the panel for this index into view.
    ScrollToSection(usize),
    /// Re-render the side indicator from current state.
    RefreshIndicator,
}

pub type NavEffects = SmallVec<[NavEffect; 3]>;

pub struct Navigator {
    section_count: usize,
    active_index: usize,
    phase: NavPhase,
    indicator_visible: bool,
}

impl Navigator {
    pub fn new(section_count: usize) -> Self {
        debug_assert!(section_count > 0);
        Self {
            section_count,
            active_index: 0,
            phase: NavPhase::Idle,
            indicator_visible: false,
        }
    }

    pub fn section_count(&self) -> usize {
        self.section_count
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn phase(&self) -> NavPhase {
        self.phase
    }

    /// False until the first index change, true for the rest of the session.
    pub fn indicator_visible(&self) -> bool {
        self.indicator_visible
    }

    /// Applies one event and returns the effects to execute, in order:
    /// cooldown arming first, then the scroll request, then the indicator
    /// refresh.
    pub fn handle(&mut self, event: NavEvent) -> NavEffects {
        let mut effects = NavEffects::new();
        match (self.phase, event) {
            (NavPhase::Idle, NavEvent::WheelDown)
                if self.active_index + 1 < self.section_count =>
            {
                self.active_index += 1;
                self.phase = NavPhase::CoolingDown;
                effects.push(NavEffect::StartCooldown);
                self.index_changed(&mut effects);
            }
            (NavPhase::Idle, NavEvent::WheelUp) if self.active_index > 0 => {
                self.active_index -= 1;
                self.phase = NavPhase::CoolingDown;
                effects.push(NavEffect::StartCooldown);
                self.index_changed(&mut effects);
            }
            // Wheel at a boundary: nothing happens and no cooldown is burned.
            (NavPhase::Idle, NavEvent::WheelUp | NavEvent::WheelDown) => {}
            (NavPhase::CoolingDown, NavEvent::WheelUp | NavEvent::WheelDown) => {
                log::trace!("wheel gesture swallowed during cooldown");
            }
            (_, NavEvent::CooldownElapsed) => {
                self.phase = NavPhase::Idle;
            }
            // Markers are pre-enumerated, so k is in range; the guard only
            // shields against a malformed caller.
            (_, NavEvent::IndicatorClick(k)) if k < self.section_count => {
                self.active_index = k;
                self.index_changed(&mut effects);
            }
            (_, NavEvent::IndicatorClick(_)) => {}
        }
        effects
    }

    fn index_changed(&mut self, effects: &mut NavEffects) {
        self.indicator_visible = true;
        effects.push(NavEffect::ScrollToSection(self.active_index));
        effects.push(NavEffect::RefreshIndicator);
    }
}

/// Maps a raw wheel delta to a gesture. Zero deltas are not gestures.
#[inline]
pub fn wheel_event_for_delta(delta_y: f64) -> Option<NavEvent> {
    if delta_y > 0.0 {
        Some(NavEvent::WheelDown)
    } else if delta_y < 0.0 {
        Some(NavEvent::WheelUp)
    } else {
        None
    }
}
