//! Decoding of SPARQL JSON results into typed rows.
//!
//! The query service answers with
//! `{"results": {"bindings": [{"var": {"type": "uri", "value": "..."}}]}}`;
//! every optional variable may be missing from a binding. Whatever is
//! missing is treated as "not supplied", except the officeholder of a
//! mandate, which every mandate must have. Qualifiers naming no item (an
//! "unknown value") are dropped the same way.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::construct::{Biography, Mandate};
use crate::datatype::{Item, PrecisionDate};
use crate::error::{PositionHistoryError, Result};
use crate::position::PositionRow;

#[derive(Deserialize, Debug, Clone)]
pub struct Term {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub value: String,
    #[serde(default)]
    pub datatype: Option<String>,
}

pub type Binding = HashMap<String, Term>;

#[derive(Deserialize, Debug)]
struct Bindings {
    bindings: Vec<Binding>,
}

#[derive(Deserialize, Debug)]
struct Results {
    results: Bindings,
}

pub fn parse(json: &str) -> Result<Vec<Binding>> {
    let results: Results = serde_json::from_str(json)?;
    Ok(results.results.bindings)
}

pub fn from_value(json: Value) -> Result<Vec<Binding>> {
    let results: Results = serde_json::from_value(json)?;
    Ok(results.results.bindings)
}

/// A single result row, with the lookups every row kind needs.
struct Row<'a> {
    binding: &'a Binding,
}
impl<'a> Row<'a> {
    fn raw(&self, name: &str) -> Option<&'a str> {
        self.binding
            .get(name)
            .map(|term| term.value.as_str())
            .filter(|value| !value.is_empty())
    }
    fn item(&self, name: &str) -> Result<Option<Item>> {
        self.raw(name).map(Item::parse).transpose()
    }
    // "Unknown value" claims come back as blank nodes that name no item.
    fn claim(&self, name: &str) -> Result<Option<Item>> {
        match self.item(name) {
            Err(PositionHistoryError::MalformedId { id }) => {
                warn!(%name, %id, "ignoring claim that names no item");
                Ok(None)
            }
            other => other,
        }
    }
    fn date(&self, name: &str, precision: &str) -> Result<Option<PrecisionDate>> {
        match self.raw(name) {
            Some(raw) => Ok(Some(PrecisionDate::from_code(raw, self.raw(precision))?)),
            None => Ok(None),
        }
    }
    fn flag(&self, name: &str) -> bool {
        self.raw(name) == Some("true")
    }
}

pub fn mandates(bindings: &[Binding]) -> Result<Vec<Mandate>> {
    let mut mandates = Vec::with_capacity(bindings.len());
    for (index, binding) in bindings.iter().enumerate() {
        let row = Row { binding };
        let officeholder = row
            .item("item")?
            .ok_or(PositionHistoryError::MissingOfficeholder { row: index })?;
        let mut mandate = Mandate::new(officeholder);
        if let Some(ordinal) = row.raw("ordinal") {
            mandate = mandate.with_ordinal(ordinal);
        }
        if let Some(date) = row.date("start_date", "start_precision")? {
            mandate = mandate.with_start_date(date);
        }
        if let Some(date) = row.date("end_date", "end_precision")? {
            mandate = mandate.with_end_date(date);
        }
        if let Some(item) = row.claim("prev")? {
            mandate = mandate.with_predecessor(item);
        }
        if let Some(item) = row.claim("next")? {
            mandate = mandate.with_successor(item);
        }
        if let Some(item) = row.claim("party")? {
            mandate = mandate.with_party(item);
        }
        if let Some(item) = row.claim("nature")? {
            mandate = mandate.with_nature(item);
        }
        mandates.push(mandate);
    }
    debug!(count = mandates.len(), "decoded mandates");
    Ok(mandates)
}

pub fn positions(bindings: &[Binding]) -> Result<Vec<PositionRow>> {
    bindings
        .iter()
        .map(|binding| {
            let row = Row { binding };
            let representative_count = match row.raw("representative_count") {
                Some(count) => count.parse::<u32>().unwrap_or_else(|_| {
                    warn!(%count, "ignoring unreadable representative count");
                    0
                }),
                None => 0,
            };
            Ok(PositionRow {
                item: row.item("item")?,
                inception: row.date("inception", "inception_precision")?,
                abolition: row.date("abolition", "abolition_precision")?,
                replaces: row.claim("replaces")?,
                replaced_by: row.claim("replacedBy")?,
                derived_replaces: row.claim("derivedReplaces")?,
                derived_replaced_by: row.claim("derivedReplacedBy")?,
                is_position: row.flag("isPosition"),
                is_legislator: row.flag("isLegislator"),
                is_term: row.flag("isTerm"),
                is_constituency: row.flag("isConstituency"),
                representative_count,
            })
        })
        .collect()
}

pub fn biographies(bindings: &[Binding]) -> Result<Vec<Biography>> {
    bindings
        .iter()
        .filter_map(|binding| {
            let row = Row { binding };
            match row.item("item") {
                Ok(Some(person)) => Some(Ok(Biography::new(person, row.raw("image").map(String::from)))),
                Ok(None) => None,
                Err(e) => Some(Err(e)),
            }
        })
        .collect()
}
