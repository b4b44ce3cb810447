//! Do-not-disturb state and Windows focus-assist levels

/// OS do-not-disturb state, computed fresh per dispatch.
///
/// Never cached: the user can toggle DND between two notifications and
/// the next dispatch must observe the new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DndState {
    /// Notifications are suppressed
    Active,
    /// Notifications may be presented
    Inactive,
}

impl DndState {
    pub const fn is_active(&self) -> bool {
        matches!(self, DndState::Active)
    }

    /// Map a boolean OS answer ("is DND on?") to a state
    pub const fn from_bool(active: bool) -> Self {
        if active {
            DndState::Active
        } else {
            DndState::Inactive
        }
    }
}

/// Windows focus-assist level as reported by the WNF quiet-hours query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusAssistLevel {
    /// Level 0: focus assist off
    Off,
    /// Level 1: priority-only; apps on the priority list still notify
    PriorityOnly,
    /// Any other non-zero level (alarms-only and beyond): always suppress
    Restricted(i32),
}

impl FocusAssistLevel {
    /// Map the raw WNF level to a typed level
    pub const fn from_raw(level: i32) -> Self {
        match level {
            0 => FocusAssistLevel::Off,
            1 => FocusAssistLevel::PriorityOnly,
            n => FocusAssistLevel::Restricted(n),
        }
    }

    /// Whether this level suppresses the requesting application.
    ///
    /// `is_priority_app` is whether the app is on the focus-assist
    /// priority allow-list; it only matters at level 1.
    pub const fn suppresses(&self, is_priority_app: bool) -> DndState {
        match self {
            FocusAssistLevel::Off => DndState::Inactive,
            FocusAssistLevel::PriorityOnly => DndState::from_bool(!is_priority_app),
            FocusAssistLevel::Restricted(_) => DndState::Active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_zero_never_suppresses() {
        let level = FocusAssistLevel::from_raw(0);
        assert_eq!(level.suppresses(false), DndState::Inactive);
        assert_eq!(level.suppresses(true), DndState::Inactive);
    }

    #[test]
    fn priority_only_suppresses_non_priority_apps() {
        let level = FocusAssistLevel::from_raw(1);
        assert_eq!(level.suppresses(false), DndState::Active);
        assert_eq!(level.suppresses(true), DndState::Inactive);
    }

    #[test]
    fn higher_levels_always_suppress() {
        for raw in [2, 3, -1] {
            let level = FocusAssistLevel::from_raw(raw);
            assert_eq!(level.suppresses(false), DndState::Active);
            assert_eq!(level.suppresses(true), DndState::Active);
        }
    }

    #[test]
    fn dnd_state_from_bool() {
        assert!(DndState::from_bool(true).is_active());
        assert!(!DndState::from_bool(false).is_active());
    }
}
