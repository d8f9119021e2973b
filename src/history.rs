//! Walks an ordered list of mandates and validates each one against its
//! neighbours.
//!
//! Mandates arrive most recent first. For every mandate the one before it in
//! the list is the `later` neighbour and the one after it is `earlier`; the
//! ends of the list simply have no neighbour on that side.

use serde::Serialize;
use tracing::debug;

use crate::check::{warnings, Warning, Window};
use crate::config::Config;
use crate::construct::Mandate;
use crate::datatype::{Item, PrecisionDate};

/// Iterator over the `(later, current, earlier)` window of every mandate.
pub struct Windows<'a> {
    mandates: &'a [Mandate],
    position: usize,
}
impl<'a> Windows<'a> {
    pub fn new(mandates: &'a [Mandate]) -> Self {
        Self { mandates, position: 0 }
    }
}
impl<'a> Iterator for Windows<'a> {
    type Item = Window<'a>;
    fn next(&mut self) -> Option<Window<'a>> {
        let current = self.mandates.get(self.position)?;
        let later = self.position.checked_sub(1).and_then(|i| self.mandates.get(i));
        let earlier = self.mandates.get(self.position + 1);
        self.position += 1;
        Some(Window::new(later, current, earlier))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.mandates.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

/// A validated mandate, ready to be handed to a renderer.
#[derive(Serialize, Clone, Debug)]
pub struct MandateRow {
    pub ordinal: Option<String>,
    pub officeholder: Item,
    pub start_date: Option<PrecisionDate>,
    pub end_date: Option<PrecisionDate>,
    pub predecessor: Option<Item>,
    pub successor: Option<Item>,
    pub party: Option<Item>,
    pub acting: bool,
    pub warnings: Vec<Warning>,
}
impl MandateRow {
    pub fn new(window: Window<'_>, config: &Config) -> Self {
        let current = window.current;
        Self {
            ordinal: current.ordinal().map(String::from),
            officeholder: current.officeholder().clone(),
            start_date: current.start_date().cloned(),
            end_date: current.end_date().cloned(),
            predecessor: current.predecessor().cloned(),
            successor: current.successor().cloned(),
            party: current.party().cloned(),
            acting: current.acting(config),
            warnings: warnings(window, config),
        }
    }
    pub fn ordinal_string(&self) -> String {
        self.ordinal.as_ref().map(|o| format!("{o}.")).unwrap_or_default()
    }
    /// `"<start> – <end>"`, or nothing when neither date is known.
    pub fn dates(&self) -> String {
        span(self.start_date.as_ref(), self.end_date.as_ref())
    }
}

pub(crate) fn span(start: Option<&PrecisionDate>, end: Option<&PrecisionDate>) -> String {
    if start.is_none() && end.is_none() {
        return String::new();
    }
    let show = |date: Option<&PrecisionDate>| date.map(PrecisionDate::display).unwrap_or_default();
    format!("{} – {}", show(start), show(end))
}

/// Validates every mandate, producing one row per mandate in input order.
pub fn validate(mandates: &[Mandate], config: &Config) -> Vec<MandateRow> {
    let rows: Vec<MandateRow> = Windows::new(mandates)
        .map(|window| MandateRow::new(window, config))
        .collect();
    let flagged = rows.iter().filter(|row| !row.warnings.is_empty()).count();
    debug!(mandates = rows.len(), flagged, "validated mandates");
    rows
}
