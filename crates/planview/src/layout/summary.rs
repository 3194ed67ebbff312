//! Human-readable view summaries.

use std::fmt;

use planview_core::model::{ModuleDimension, UnitConfig};

/// Aggregate figures for one rendered view, in real-world inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSummary {
    /// Number of modules in the view.
    pub module_count: usize,
    /// Total unit length including separator walls, in inches.
    pub total_length_in: f32,
    /// Width of the widest module, in inches.
    pub max_width_in: f32,
}

impl ViewSummary {
    /// Computes the summary for the modules selected by `indices`.
    pub(crate) fn compute(
        modules: &[ModuleDimension],
        indices: &[usize],
        unit: &UnitConfig,
    ) -> Self {
        let module_count = indices.len();
        let module_length: f32 = indices.iter().map(|&i| modules[i].length_in()).sum();
        let separators = module_count.saturating_sub(1) as f32 * unit.wall_thickness_in;
        let max_width_in = indices
            .iter()
            .map(|&i| modules[i].width_in())
            .fold(0.0_f32, f32::max);

        Self {
            module_count,
            total_length_in: module_length + separators,
            max_width_in,
        }
    }
}

impl fmt::Display for ViewSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.module_count == 1 {
            "module"
        } else {
            "modules"
        };
        write!(
            f,
            "{} {noun}, {} in x {} in",
            self.module_count, self.total_length_in, self.max_width_in
        )
    }
}
