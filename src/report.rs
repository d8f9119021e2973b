//! Decides what a position's report consists of.
//!
//! Positions that cannot be shown as a single succession of holders end in
//! an error outcome. The members of a legislative term are listed as they
//! are, without succession checks; everything else becomes a table of
//! validated rows.

use std::collections::HashMap;

use serde::Serialize;
use tracing::info;

use crate::bindings::{self, Binding};
use crate::config::Config;
use crate::construct::{Biography, ItemHasher, Mandate};
use crate::datatype::{Item, PrecisionDate};
use crate::error::Result;
use crate::history::{span, validate, MandateRow};
use crate::position::{DateRow, PositionMetadata, PositionType, RelatedRow};

#[derive(Serialize, Clone, Debug)]
pub struct MetadataRows {
    pub position: Item,
    #[serde(rename = "type")]
    pub position_type: Option<PositionType>,
    pub inception: DateRow,
    pub abolition: DateRow,
    pub predecessor: RelatedRow,
    pub successor: RelatedRow,
}
impl MetadataRows {
    pub fn new(metadata: &PositionMetadata, config: &Config) -> Self {
        Self {
            position: metadata.position().clone(),
            position_type: metadata.position_type(),
            inception: metadata.inception(config),
            abolition: metadata.abolition(config),
            predecessor: metadata.predecessor(config),
            successor: metadata.successor(config),
        }
    }
    pub fn warning_count(&self) -> usize {
        self.inception.warnings.len()
            + self.abolition.warnings.len()
            + self.predecessor.warnings.len()
            + self.successor.warnings.len()
    }
}

/// A validated mandate together with what is known about its holder.
#[derive(Serialize, Clone, Debug)]
pub struct TableRow {
    pub mandate: MandateRow,
    pub images: Vec<String>,
}

/// A member of a legislative term. Members serve side by side, so nothing
/// is checked against neighbouring rows.
#[derive(Serialize, Clone, Debug)]
pub struct TermRow {
    pub officeholder: Item,
    pub start_date: Option<PrecisionDate>,
    pub end_date: Option<PrecisionDate>,
    pub party: Option<Item>,
    pub images: Vec<String>,
}
impl TermRow {
    pub fn dates(&self) -> String {
        span(self.start_date.as_ref(), self.end_date.as_ref())
    }
}

#[derive(Serialize, Clone, Debug)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Report {
    /// Legislative positions have many holders at once.
    Legislator { id: Item },
    /// Constituencies returning more than one representative.
    MultiMember { id: Item },
    NoHolders { id: Item },
    Term { metadata: MetadataRows, rows: Vec<TermRow> },
    Table { metadata: MetadataRows, rows: Vec<TableRow> },
}

impl Report {
    pub fn build(
        metadata: &PositionMetadata,
        mandates: &[Mandate],
        biographies: &[Biography],
        config: &Config,
    ) -> Report {
        let id = metadata.position().clone();
        let report = match metadata.position_type() {
            Some(PositionType::Legislator) => Report::Legislator { id },
            Some(PositionType::Constituency) if metadata.representative_count() != 1 => {
                Report::MultiMember { id }
            }
            _ if mandates.is_empty() => Report::NoHolders { id },
            Some(PositionType::Term) => {
                let images = images_by_holder(biographies);
                let rows = mandates
                    .iter()
                    .map(|mandate| TermRow {
                        officeholder: mandate.officeholder().clone(),
                        start_date: mandate.start_date().cloned(),
                        end_date: mandate.end_date().cloned(),
                        party: mandate.party().cloned(),
                        images: images.get(mandate.officeholder().id()).cloned().unwrap_or_default(),
                    })
                    .collect();
                Report::Term { metadata: MetadataRows::new(metadata, config), rows }
            }
            _ => {
                let images = images_by_holder(biographies);
                let rows = validate(mandates, config)
                    .into_iter()
                    .map(|mandate| TableRow {
                        images: images.get(mandate.officeholder.id()).cloned().unwrap_or_default(),
                        mandate,
                    })
                    .collect();
                Report::Table { metadata: MetadataRows::new(metadata, config), rows }
            }
        };
        info!(position = metadata.position().id(), outcome = report.outcome(), "report built");
        report
    }
    /// Builds the report for `position` straight from query results.
    pub fn from_bindings(
        position: &str,
        metadata: &[Binding],
        mandates: &[Binding],
        biographies: &[Binding],
        config: &Config,
    ) -> Result<Report> {
        let position = Item::parse(position)?;
        let metadata = PositionMetadata::new(position, &bindings::positions(metadata)?);
        let mandates = bindings::mandates(mandates)?;
        let biographies = bindings::biographies(biographies)?;
        Ok(Report::build(&metadata, &mandates, &biographies, config))
    }
    pub fn outcome(&self) -> &'static str {
        match self {
            Report::Legislator { .. } => "legislator",
            Report::MultiMember { .. } => "multi_member",
            Report::NoHolders { .. } => "no_holders",
            Report::Term { .. } => "term",
            Report::Table { .. } => "table",
        }
    }
    /// The wiki template reporting an error outcome, if this is one.
    pub fn error_template(&self, config: &Config) -> Option<String> {
        let name = &config.template_name;
        match self {
            Report::Legislator { id } => Some(format!("{{{{{name}/error_legislator|id={}}}}}", id.id())),
            Report::MultiMember { .. } => Some(format!("{{{{{name}/error_multimember}}}}")),
            Report::NoHolders { id } => Some(format!("{{{{{name}/error_no_holders|id={}}}}}", id.id())),
            Report::Term { .. } | Report::Table { .. } => None,
        }
    }
    pub fn warning_count(&self) -> usize {
        match self {
            Report::Table { metadata, rows } => {
                metadata.warning_count() + rows.iter().map(|row| row.mandate.warnings.len()).sum::<usize>()
            }
            Report::Term { metadata, .. } => metadata.warning_count(),
            _ => 0,
        }
    }
}

fn images_by_holder(biographies: &[Biography]) -> HashMap<&str, Vec<String>, ItemHasher> {
    let mut images = HashMap::<&str, Vec<String>, ItemHasher>::default();
    for bio in biographies {
        if let Some(title) = bio.image_title() {
            images.entry(bio.person().id()).or_default().push(title.to_owned());
        }
    }
    images
}
