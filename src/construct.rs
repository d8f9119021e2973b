// used to de-duplicate items by identity
use std::collections::HashSet;
use core::hash::BuildHasherDefault;
use seahash::SeaHasher;

// used to print out readable forms of a construct
use std::fmt;

// our own stuff that we need
use crate::config::Config;
use crate::datatype::{Item, PrecisionDate};

pub type ItemHasher = BuildHasherDefault<SeaHasher>;

// ------------- Mandate -------------
/// One continuous period during which a person held a position, as reported
/// by the query service. Mandates are read-only once created.
#[derive(Clone, Debug)]
pub struct Mandate {
    ordinal: Option<String>,
    officeholder: Item,
    start_date: Option<PrecisionDate>,
    end_date: Option<PrecisionDate>,
    predecessor: Option<Item>,
    successor: Option<Item>,
    party: Option<Item>,
    nature: Option<Item>,
}
impl Mandate {
    pub fn new(officeholder: Item) -> Self {
        Self {
            ordinal: None,
            officeholder,
            start_date: None,
            end_date: None,
            predecessor: None,
            successor: None,
            party: None,
            nature: None,
        }
    }
    pub fn with_ordinal(mut self, ordinal: impl Into<String>) -> Self {
        self.ordinal = Some(ordinal.into());
        self
    }
    // Empty dates are the same as no date at all.
    pub fn with_start_date(mut self, date: PrecisionDate) -> Self {
        self.start_date = Some(date).filter(|d| !d.is_empty());
        self
    }
    pub fn with_end_date(mut self, date: PrecisionDate) -> Self {
        self.end_date = Some(date).filter(|d| !d.is_empty());
        self
    }
    pub fn with_predecessor(mut self, item: Item) -> Self {
        self.predecessor = Some(item);
        self
    }
    pub fn with_successor(mut self, item: Item) -> Self {
        self.successor = Some(item);
        self
    }
    pub fn with_party(mut self, item: Item) -> Self {
        self.party = Some(item);
        self
    }
    pub fn with_nature(mut self, item: Item) -> Self {
        self.nature = Some(item);
        self
    }
    pub fn ordinal(&self) -> Option<&str> {
        self.ordinal.as_deref()
    }
    pub fn officeholder(&self) -> &Item {
        &self.officeholder
    }
    pub fn start_date(&self) -> Option<&PrecisionDate> {
        self.start_date.as_ref()
    }
    pub fn end_date(&self) -> Option<&PrecisionDate> {
        self.end_date.as_ref()
    }
    pub fn predecessor(&self) -> Option<&Item> {
        self.predecessor.as_ref()
    }
    pub fn successor(&self) -> Option<&Item> {
        self.successor.as_ref()
    }
    pub fn party(&self) -> Option<&Item> {
        self.party.as_ref()
    }
    pub fn nature(&self) -> Option<&Item> {
        self.nature.as_ref()
    }
    /// A temporary holding, recognised by its nature of mandate.
    pub fn acting(&self, config: &Config) -> bool {
        self.nature
            .as_ref()
            .is_some_and(|nature| nature.id() == config.acting_designation)
    }
}
impl fmt::Display for Mandate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let show = |date: Option<&PrecisionDate>| date.map(|d| d.display()).unwrap_or_default();
        write!(f, "{} [{} – {}]", self.officeholder, show(self.start_date()), show(self.end_date()))
    }
}

// ------------- ImpliedList -------------
/// Related items gathered both from direct claims and by looking for other
/// items that point back at this one. Each side is de-duplicated and sorted
/// by identity, so every view is reproducible.
#[derive(Clone, Debug, Default)]
pub struct ImpliedList {
    direct: Vec<Item>,
    indirect: Vec<Item>,
}
impl ImpliedList {
    pub fn new(direct: Vec<Item>, indirect: Vec<Item>) -> Self {
        Self {
            direct: unique_by_id(direct),
            indirect: unique_by_id(indirect),
        }
    }
    pub fn direct(&self) -> &[Item] {
        &self.direct
    }
    pub fn indirect(&self) -> &[Item] {
        &self.indirect
    }
    pub fn is_empty(&self) -> bool {
        self.direct.is_empty() && self.indirect.is_empty()
    }
    pub fn all(&self) -> Vec<Item> {
        unique_by_id(self.direct.iter().chain(self.indirect.iter()).cloned().collect())
    }
    pub fn both(&self) -> Vec<Item> {
        let indirect = id_set(&self.indirect);
        self.direct.iter().filter(|i| indirect.contains(i.id())).cloned().collect()
    }
    pub fn direct_only(&self) -> Vec<Item> {
        let indirect = id_set(&self.indirect);
        self.direct.iter().filter(|i| !indirect.contains(i.id())).cloned().collect()
    }
    pub fn indirect_only(&self) -> Vec<Item> {
        let direct = id_set(&self.direct);
        self.indirect.iter().filter(|i| !direct.contains(i.id())).cloned().collect()
    }
}

fn id_set(items: &[Item]) -> HashSet<&str, ItemHasher> {
    items.iter().map(Item::id).collect()
}

fn unique_by_id(mut items: Vec<Item>) -> Vec<Item> {
    items.sort_unstable();
    items.dedup();
    items
}

// ------------- Biography -------------
/// Auxiliary biographical data about an officeholder.
#[derive(Clone, Debug)]
pub struct Biography {
    person: Item,
    image: Option<String>,
}
impl Biography {
    pub fn new(person: Item, image: Option<String>) -> Self {
        Self { person, image }
    }
    pub fn person(&self) -> &Item {
        &self.person
    }
    /// The file name of the image, taken from the end of its URL.
    pub fn image_title(&self) -> Option<&str> {
        let url = self.image.as_deref().filter(|url| !url.is_empty())?;
        url.rsplit('/').next()
    }
}
