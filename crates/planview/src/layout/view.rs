//! Classification and view dispatch.
//!
//! Modules partition by [`TunnelPosition`] into top, bottom, and standard
//! groups. When both the top and bottom partitions are non-empty the unit
//! renders as two stacked views; otherwise a single view renders the first
//! non-empty partition in priority order standard, top, bottom.
//!
//! With `TunnelPosition` a closed enum the three partitions are exhaustive,
//! so the legacy "fall back to the full module list" branch is
//! unrepresentable and does not exist here.

use planview_core::model::{ModuleDimension, TunnelPosition};

/// Which partition a rendered view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Standard,
    Top,
    Bottom,
}

impl ViewKind {
    /// The view title caption shown beneath the RIGHT orientation label in
    /// stacked mode.
    pub fn title(self) -> &'static str {
        match self {
            Self::Standard => "UNIT",
            Self::Top => "TOP UNIT",
            Self::Bottom => "BOTTOM UNIT",
        }
    }
}

/// The selected view(s) for a module list, as indices into it.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Selection {
    /// No modules; nothing to lay out.
    Empty,
    Single {
        kind: ViewKind,
        indices: Vec<usize>,
    },
    Stacked {
        top: Vec<usize>,
        bottom: Vec<usize>,
    },
}

/// Partitions the module list and selects the view(s) to render.
pub(crate) fn select(modules: &[ModuleDimension]) -> Selection {
    if modules.is_empty() {
        return Selection::Empty;
    }

    let mut top = Vec::new();
    let mut bottom = Vec::new();
    let mut standard = Vec::new();

    for (index, module) in modules.iter().enumerate() {
        match module.tunnel_position {
            TunnelPosition::Top => top.push(index),
            TunnelPosition::Bottom => bottom.push(index),
            TunnelPosition::Standard => standard.push(index),
        }
    }

    if !top.is_empty() && !bottom.is_empty() {
        return Selection::Stacked { top, bottom };
    }

    // Single view: standard takes priority, then whichever stacked
    // partition is populated on its own.
    let (kind, indices) = if !standard.is_empty() {
        (ViewKind::Standard, standard)
    } else if !top.is_empty() {
        (ViewKind::Top, top)
    } else {
        (ViewKind::Bottom, bottom)
    };

    Selection::Single { kind, indices }
}
