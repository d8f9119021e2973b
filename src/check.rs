//! Consistency rules evaluated against a mandate and its chronological
//! neighbours.
//!
//! Every rule sees the same [`Window`]: the mandate under scrutiny, the one
//! immediately after it (`later`) and the one immediately before it
//! (`earlier`). Either neighbour is `None` at the ends of the sequence.
//! Rules are independent of one another and never fail; a broken rule
//! surfaces as a [`Warning`].

use std::cmp::Ordering;

use serde::Serialize;

use crate::config::Config;
use crate::construct::Mandate;
use crate::datatype::{Item, PrecisionDate};

/// A data-quality finding attached to an output row.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Warning {
    pub headline: String,
    pub explanation: String,
}
impl Warning {
    pub fn new(headline: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self { headline: headline.into(), explanation: explanation.into() }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Window<'a> {
    pub later: Option<&'a Mandate>,
    pub current: &'a Mandate,
    pub earlier: Option<&'a Mandate>,
}
impl<'a> Window<'a> {
    pub fn new(later: Option<&'a Mandate>, current: &'a Mandate, earlier: Option<&'a Mandate>) -> Self {
        Self { later, current, earlier }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    MissingFields,
    Overlap,
    WrongPredecessor,
    MissingPredecessor,
    WrongSuccessor,
    MissingSuccessor,
}
impl Rule {
    /// Every rule, in the order their warnings are reported.
    pub const ALL: [Rule; 6] = [
        Rule::MissingFields,
        Rule::Overlap,
        Rule::WrongPredecessor,
        Rule::MissingPredecessor,
        Rule::WrongSuccessor,
        Rule::MissingSuccessor,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Field {
    StartDate,
    Predecessor,
    EndDate,
    Successor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Overlap {
    // the end date is definitely after the next start date
    Later,
    // the precisions cannot be ordered against each other
    Imprecise,
}

pub struct Check<'a> {
    rule: Rule,
    window: Window<'a>,
    config: &'a Config,
}

impl<'a> Check<'a> {
    pub fn new(rule: Rule, window: Window<'a>, config: &'a Config) -> Self {
        Self { rule, window, config }
    }
    pub fn rule(&self) -> Rule {
        self.rule
    }
    pub fn is_problem(&self) -> bool {
        let Window { later, current, earlier } = self.window;
        match self.rule {
            Rule::MissingFields => !self.missing().is_empty(),
            Rule::Overlap => self.overlap().is_some(),
            Rule::WrongPredecessor => match (earlier, current.predecessor()) {
                (Some(earlier), Some(predecessor)) => earlier.officeholder() != predecessor,
                _ => false,
            },
            Rule::MissingPredecessor => current.predecessor().is_some() && earlier.is_none(),
            Rule::WrongSuccessor => match (later, current.successor()) {
                (Some(later), Some(successor)) => later.officeholder() != successor,
                _ => false,
            },
            Rule::MissingSuccessor => current.successor().is_some() && later.is_none(),
        }
    }
    pub fn headline(&self) -> String {
        match self.rule {
            Rule::MissingFields => match self.missing().len() {
                count if count > 1 => String::from("Missing fields"),
                _ => String::from("Missing field"),
            },
            Rule::Overlap => match self.overlap() {
                Some(Overlap::Imprecise) => String::from("Date precision"),
                _ => String::from("Date overlap"),
            },
            Rule::WrongPredecessor | Rule::MissingPredecessor => String::from("Inconsistent predecessor"),
            Rule::WrongSuccessor | Rule::MissingSuccessor => String::from("Inconsistent successor"),
        }
    }
    /// Only a problem has an explanation.
    pub fn explanation(&self) -> Option<String> {
        if !self.is_problem() {
            return None;
        }
        let Window { later, current, earlier } = self.window;
        let properties = &self.config.properties;
        let holder = current.officeholder();
        let explanation = match self.rule {
            Rule::MissingFields => {
                let missing = self
                    .missing()
                    .iter()
                    .map(|field| format!("{{{{P|{}}}}}", self.property(*field)))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{holder} is missing {missing}")
            }
            Rule::Overlap => {
                let later = later?;
                let verb = match self.overlap()? {
                    Overlap::Later => "is later than",
                    Overlap::Imprecise => "may overlap with",
                };
                format!(
                    "{holder} has a {{{{P|{}}}}} of {}, which {verb} the {{{{P|{}}}}} of {} for {}",
                    properties.end_date,
                    display(current.end_date()),
                    properties.start_date,
                    display(later.start_date()),
                    later.officeholder(),
                )
            }
            Rule::WrongPredecessor => format!(
                "{holder} has a {{{{P|{}}}}} of {}, but follows {} here",
                properties.replaces,
                claim(current.predecessor()),
                earlier?.officeholder(),
            ),
            Rule::MissingPredecessor => format!(
                "{holder} has a {{{{P|{}}}}} of {}, but does not follow anyone here",
                properties.replaces,
                claim(current.predecessor()),
            ),
            Rule::WrongSuccessor => format!(
                "{holder} has a {{{{P|{}}}}} of {}, but is followed by {} here",
                properties.replaced_by,
                claim(current.successor()),
                later?.officeholder(),
            ),
            Rule::MissingSuccessor => format!(
                "{holder} has a {{{{P|{}}}}} of {}, but is not followed by anyone here",
                properties.replaced_by,
                claim(current.successor()),
            ),
        };
        Some(explanation)
    }
    pub fn warning(&self) -> Option<Warning> {
        self.explanation().map(|explanation| Warning::new(self.headline(), explanation))
    }

    fn property(&self, field: Field) -> u32 {
        let properties = &self.config.properties;
        match field {
            Field::StartDate => properties.start_date,
            Field::Predecessor => properties.replaces,
            Field::EndDate => properties.end_date,
            Field::Successor => properties.replaced_by,
        }
    }
    fn expected(&self) -> Vec<Field> {
        let Window { later, current, earlier } = self.window;
        // successive terms by the same person need no succession claims
        let expects_claim = |neighbour: Option<&Mandate>| match neighbour {
            Some(neighbour) => neighbour.officeholder() != current.officeholder() && !current.acting(self.config),
            None => false,
        };
        let mut expected = vec![Field::StartDate];
        if expects_claim(earlier) {
            expected.push(Field::Predecessor);
        }
        if later.is_some() {
            expected.push(Field::EndDate);
        }
        if expects_claim(later) {
            expected.push(Field::Successor);
        }
        expected
    }
    fn missing(&self) -> Vec<Field> {
        let current = self.window.current;
        self.expected()
            .into_iter()
            .filter(|field| match field {
                Field::StartDate => current.start_date().is_none(),
                Field::Predecessor => current.predecessor().is_none(),
                Field::EndDate => current.end_date().is_none(),
                Field::Successor => current.successor().is_none(),
            })
            .collect()
    }
    fn overlap(&self) -> Option<Overlap> {
        let later = self.window.later?;
        let next_starts = later.start_date().filter(|d| !d.is_empty())?;
        let ends = self.window.current.end_date().filter(|d| !d.is_empty())?;
        match ends.compare(next_starts) {
            Some(Ordering::Greater) => Some(Overlap::Later),
            Some(_) => None,
            None => Some(Overlap::Imprecise),
        }
    }
}

/// Runs every rule against the window, keeping the problems in rule order.
pub fn warnings(window: Window<'_>, config: &Config) -> Vec<Warning> {
    Rule::ALL
        .iter()
        .filter_map(|rule| Check::new(*rule, window, config).warning())
        .collect()
}

fn display(date: Option<&PrecisionDate>) -> String {
    date.map(PrecisionDate::display).unwrap_or_default()
}

fn claim(item: Option<&Item>) -> String {
    item.map(Item::qlink).unwrap_or_default()
}
