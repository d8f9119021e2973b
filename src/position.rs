//! Facts about the position itself rather than its holders: when it was
//! created and abolished, and which positions came before and after it.

use std::collections::HashSet;

use serde::Serialize;
use tracing::warn;

use crate::check::Warning;
use crate::config::Config;
use crate::construct::{ImpliedList, ItemHasher};
use crate::datatype::{Item, PrecisionDate};

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PositionType {
    Constituency,
    Legislator,
    Term,
    Position,
}

/// One row of the position metadata query. Multi-valued properties mean a
/// position may come back as several rows.
#[derive(Clone, Debug, Default)]
pub struct PositionRow {
    pub item: Option<Item>,
    pub inception: Option<PrecisionDate>,
    pub abolition: Option<PrecisionDate>,
    pub replaces: Option<Item>,
    pub replaced_by: Option<Item>,
    pub derived_replaces: Option<Item>,
    pub derived_replaced_by: Option<Item>,
    pub is_position: bool,
    pub is_legislator: bool,
    pub is_term: bool,
    pub is_constituency: bool,
    pub representative_count: u32,
}
impl PositionRow {
    pub fn position_type(&self) -> Option<PositionType> {
        if self.is_constituency {
            Some(PositionType::Constituency)
        } else if self.is_legislator {
            Some(PositionType::Legislator)
        } else if self.is_term {
            Some(PositionType::Term)
        } else if self.is_position {
            Some(PositionType::Position)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    Predecessor,
    Successor,
}
impl Relation {
    fn name(&self) -> &'static str {
        match self {
            Relation::Predecessor => "predecessor",
            Relation::Successor => "successor",
        }
    }
}

#[derive(Clone, Debug)]
pub struct PositionMetadata {
    position: Item,
    position_type: Option<PositionType>,
    representative_count: u32,
    inception_dates: Vec<PrecisionDate>,
    abolition_dates: Vec<PrecisionDate>,
    replaces: ImpliedList,
    replaced_by: ImpliedList,
}

impl PositionMetadata {
    /// Every row is taken to describe `position`, whatever item it names.
    pub fn new(position: Item, rows: &[PositionRow]) -> Self {
        if let Some(other) = rows.iter().filter_map(|row| row.item.as_ref()).find(|item| **item != position) {
            warn!(position = position.id(), row = other.id(), "metadata row describes another item");
        }
        Self {
            position,
            // this should be the same on every row
            position_type: rows.first().and_then(PositionRow::position_type),
            representative_count: rows.iter().map(|row| row.representative_count).max().unwrap_or(0),
            inception_dates: distinct_dates(rows.iter().filter_map(|row| row.inception.as_ref())),
            abolition_dates: distinct_dates(rows.iter().filter_map(|row| row.abolition.as_ref())),
            replaces: ImpliedList::new(
                gather(rows, |row| row.replaces.as_ref()),
                gather(rows, |row| row.derived_replaces.as_ref()),
            ),
            replaced_by: ImpliedList::new(
                gather(rows, |row| row.replaced_by.as_ref()),
                gather(rows, |row| row.derived_replaced_by.as_ref()),
            ),
        }
    }
    pub fn position(&self) -> &Item {
        &self.position
    }
    pub fn position_type(&self) -> Option<PositionType> {
        self.position_type
    }
    pub fn representative_count(&self) -> u32 {
        self.representative_count
    }
    pub fn inception_dates(&self) -> &[PrecisionDate] {
        &self.inception_dates
    }
    pub fn abolition_dates(&self) -> &[PrecisionDate] {
        &self.abolition_dates
    }
    pub fn replaces(&self) -> &ImpliedList {
        &self.replaces
    }
    pub fn replaced_by(&self) -> &ImpliedList {
        &self.replaced_by
    }

    pub fn inception(&self, config: &Config) -> DateRow {
        let warnings = match self.inception_dates.len() {
            1 => vec![],
            0 => vec![Warning::new("Missing field", self.template(config, "warning_no_inception_date"))],
            _ => vec![Warning::new("Multiple values", self.template(config, "warning_multiple_inception_dates"))],
        };
        DateRow::new(&self.inception_dates, warnings)
    }
    pub fn abolition(&self, config: &Config) -> DateRow {
        let warnings = match self.abolition_dates.len() {
            0 | 1 => vec![],
            _ => vec![Warning::new("Multiple values", self.template(config, "warning_multiple_abolition_dates"))],
        };
        DateRow::new(&self.abolition_dates, warnings)
    }
    pub fn predecessor(&self, config: &Config) -> RelatedRow {
        RelatedRow::new(Relation::Predecessor, &self.replaces, &self.position, config)
    }
    pub fn successor(&self, config: &Config) -> RelatedRow {
        RelatedRow::new(Relation::Successor, &self.replaced_by, &self.position, config)
    }

    fn template(&self, config: &Config, warning: &str) -> String {
        format!("{{{{{}/{}|item={}}}}}", config.template_name, warning, self.position.id())
    }
}

fn gather(rows: &[PositionRow], pick: impl Fn(&PositionRow) -> Option<&Item>) -> Vec<Item> {
    rows.iter().filter_map(pick).cloned().collect()
}

// Unique by display, sorted by display.
fn distinct_dates<'a>(dates: impl Iterator<Item = &'a PrecisionDate>) -> Vec<PrecisionDate> {
    let mut seen = HashSet::<String, ItemHasher>::default();
    let mut distinct: Vec<PrecisionDate> = dates
        .filter(|date| !date.is_empty())
        .filter(|date| seen.insert(date.display()))
        .cloned()
        .collect();
    distinct.sort_by_key(PrecisionDate::display);
    distinct
}

/// Inception or abolition of the position.
#[derive(Serialize, Clone, Debug)]
pub struct DateRow {
    pub date: Option<String>,
    pub warnings: Vec<Warning>,
}
impl DateRow {
    fn new(dates: &[PrecisionDate], warnings: Vec<Warning>) -> Self {
        let date = if dates.is_empty() {
            None
        } else {
            Some(dates.iter().map(PrecisionDate::display).collect::<Vec<_>>().join(" / "))
        };
        Self { date, warnings }
    }
}

/// The positions that came before or after this one.
#[derive(Serialize, Clone, Debug)]
pub struct RelatedRow {
    pub direct: Vec<Item>,
    pub indirect_only: Vec<Item>,
    pub warnings: Vec<Warning>,
}
impl RelatedRow {
    fn new(relation: Relation, list: &ImpliedList, position: &Item, config: &Config) -> Self {
        let indirect_only = list.indirect_only();
        // claimed only from the other side, so not verified here
        let warnings = indirect_only
            .iter()
            .map(|from| {
                Warning::new(
                    "Indirect only",
                    format!(
                        "{{{{{}/warning_indirect_{}|from={}|to={}}}}}",
                        config.template_name,
                        relation.name(),
                        from.id(),
                        position.id()
                    ),
                )
            })
            .collect();
        Self { direct: list.direct().to_vec(), indirect_only, warnings }
    }
    /// Direct relations in bold, followed by indirect-only ones in italics.
    pub fn position(&self) -> Option<String> {
        if self.direct.is_empty() && self.indirect_only.is_empty() {
            return None;
        }
        let links: Vec<String> = self
            .direct
            .iter()
            .map(Item::qblink)
            .chain(self.indirect_only.iter().map(Item::qblink_i))
            .collect();
        Some(links.join(", "))
    }
}
