//! Display mode state

/// The host-imposed display state.
///
/// Transitions happen only on the host's ambient-mode-changed event.
/// Ambient is the low-power state: rendering collapses to a solid black
/// fill and the interactive redraw timer is suspended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Interactive,
    Ambient,
}

impl DisplayMode {
    pub fn from_ambient(ambient: bool) -> Self {
        if ambient {
            DisplayMode::Ambient
        } else {
            DisplayMode::Interactive
        }
    }

    pub fn is_ambient(self) -> bool {
        self == DisplayMode::Ambient
    }
}
