//! Frontend Models
//!
//! Catalog payloads as the API returns them, plus the view-side shapes
//! the page renders.

use serde::Deserialize;

// ========================
// API Payloads
// ========================

/// `GET {endpoint}?limit=N`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListPage {
    pub results: Vec<ResourceRef>,
}

/// Reference to a detail record
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceRef {
    pub name: String,
    pub url: String,
}

/// `GET {url}` for one reference
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetailRecord {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub sprites: Sprites,
    pub types: Vec<TypeSlot>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: TypeName,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeName {
    pub name: String,
}

// ========================
// Domain
// ========================

/// A fetched catalog entry
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub image: Option<String>,
    pub types: Vec<String>,
}

impl From<DetailRecord> for Item {
    fn from(record: DetailRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            image: record.sprites.front_default,
            types: record.types.into_iter().map(|slot| slot.kind.name).collect(),
        }
    }
}

/// One rendered card
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub image: Option<String>,
    pub title: String,
    pub caption: String,
}

impl From<&Item> for Card {
    fn from(item: &Item) -> Self {
        Self {
            image: item.image.clone(),
            title: item.name.clone(),
            caption: format!("Type: {}", item.types.join(", ")),
        }
    }
}

pub type NoticeId = u64;

/// A transient message in the notice area
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: NoticeId,
    pub text: String,
}

/// Outcome of the catalog load on mount
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Loaded(usize),
    Failed(String),
}
