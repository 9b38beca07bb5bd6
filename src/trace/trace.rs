use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::fill::fill_model::{FieldOutcome, FillReport};

/// One line of the fill trace.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,

    pub preset: String,
    pub preset_url: String,
    pub page_url: String,
    pub same_page: bool,

    pub declined: bool,
    pub found: usize,
    pub filled: usize,
    pub fields: Vec<FieldOutcome>,
}

impl TraceEvent {
    pub fn now(preset: &str, preset_url: &str, page_url: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            preset: preset.to_string(),
            preset_url: preset_url.to_string(),
            page_url: page_url.to_string(),
            same_page: preset_url == page_url,
            declined: false,
            found: 0,
            filled: 0,
            fields: vec![],
        }
    }

    pub fn with_report(mut self, report: &FillReport) -> Self {
        self.found = report.fields_found;
        self.filled = report.fields_filled;
        self.fields = report.outcomes.clone();
        self
    }

    pub fn declined(mut self) -> Self {
        self.declined = true;
        self
    }
}
