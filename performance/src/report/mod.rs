//! Packaging of the individual analyses into a single report.
use crate::{EnergyReport, EnvelopeReport, GlideReport, WindReport};
use serde::Serialize;

mod text;
use text::render_text;

/// The combined outcome of all analyses. Groups and their fields are
/// serialized in a fixed order, which downstream consumers rely upon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregateReport {
    wind: WindReport,
    envelope: EnvelopeReport,
    energy: EnergyReport,
    glide: GlideReport,
}
impl AggregateReport {
    pub fn wind(&self) -> &WindReport {
        &self.wind
    }

    pub fn envelope(&self) -> &EnvelopeReport {
        &self.envelope
    }

    pub fn energy(&self) -> &EnergyReport {
        &self.energy
    }

    pub fn glide(&self) -> &GlideReport {
        &self.glide
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Renders the report as an indented `key: value` tree.
    pub fn to_text(&self) -> serde_json::Result<String> {
        render_text(self)
    }
}

pub struct ReportAssembler {}
impl ReportAssembler {
    pub fn assemble(
        wind: WindReport,
        envelope: EnvelopeReport,
        energy: EnergyReport,
        glide: GlideReport,
    ) -> AggregateReport {
        AggregateReport {
            wind,
            envelope,
            energy,
            glide,
        }
    }
}
