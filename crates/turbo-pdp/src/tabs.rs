//! Tab selection and per-tab content.

use serde::{Deserialize, Serialize};
use turbo_catalog::AttributeRow;

use crate::config::{SpecEntry, TabContentSource};
use crate::description::{DisplayBlock, Tint};

/// The page's content tabs, by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Description = 0,
    Specs = 1,
    Reviews = 2,
    Attributes = 3,
}

impl Tab {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Description),
            1 => Some(Self::Specs),
            2 => Some(Self::Reviews),
            3 => Some(Self::Attributes),
            _ => None,
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Description => "Description",
            Self::Specs => "Specifications",
            Self::Reviews => "Reviews",
            Self::Attributes => "Attributes",
        }
    }
}

/// Which tabs a page offers. The attributes tab is opt-in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabSet {
    /// Description, specifications and reviews.
    #[default]
    Standard,
    /// Standard plus the catalog attributes tab.
    Extended,
}

impl TabSet {
    pub fn tabs(&self) -> &'static [Tab] {
        match self {
            Self::Standard => &[Tab::Description, Tab::Specs, Tab::Reviews],
            Self::Extended => &[Tab::Description, Tab::Specs, Tab::Reviews, Tab::Attributes],
        }
    }

    /// The tab at `index`, if this set offers it.
    pub fn resolve(&self, index: usize) -> Option<Tab> {
        self.tabs().get(index).copied()
    }
}

/// Selected tab index and the visibility flag derived from it.
///
/// Only constructible through [`TabState::select`], so the flag can never
/// disagree with the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabState {
    selected_index: usize,
    reviews_panel_visible: bool,
}

impl TabState {
    pub fn select(index: usize) -> Self {
        Self {
            selected_index: index,
            reviews_panel_visible: index == Tab::Reviews.index(),
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn reviews_panel_visible(&self) -> bool {
        self.reviews_panel_visible
    }
}

impl Default for TabState {
    fn default() -> Self {
        Self::select(Tab::Description.index())
    }
}

/// Row on the specifications tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecRow {
    pub title: String,
    pub value: String,
    pub tint: Tint,
}

/// Row on the reviews tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewRow {
    pub text: String,
    pub tint: Tint,
}

/// Row on the attributes tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeDisplayRow {
    pub label: String,
    pub code: String,
    pub value: String,
    pub tint: Tint,
}

/// Specification rows are all plain.
pub fn spec_rows(entries: &[SpecEntry]) -> Vec<SpecRow> {
    entries
        .iter()
        .map(|entry| SpecRow {
            title: entry.title.clone(),
            value: entry.value.clone(),
            tint: Tint::Plain,
        })
        .collect()
}

/// Review rows alternate by index parity.
pub fn review_rows(reviews: &[String]) -> Vec<ReviewRow> {
    reviews
        .iter()
        .enumerate()
        .map(|(i, text)| ReviewRow {
            text: text.clone(),
            tint: Tint::parity(i),
        })
        .collect()
}

/// Attribute rows alternate by index parity.
pub fn attribute_rows(attributes: &[AttributeRow]) -> Vec<AttributeDisplayRow> {
    attributes
        .iter()
        .enumerate()
        .map(|(i, row)| AttributeDisplayRow {
            label: row.label.clone(),
            code: row.code.clone(),
            value: row.value.clone(),
            tint: Tint::parity(i),
        })
        .collect()
}

/// Content shown under the selected tab.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "rows", rename_all = "lowercase")]
pub enum TabContent {
    Description(Vec<DisplayBlock>),
    Specs(Vec<SpecRow>),
    Reviews(Vec<ReviewRow>),
    Attributes(Vec<AttributeDisplayRow>),
    #[default]
    Empty,
}

impl TabContent {
    pub fn len(&self) -> usize {
        match self {
            Self::Description(rows) => rows.len(),
            Self::Specs(rows) => rows.len(),
            Self::Reviews(rows) => rows.len(),
            Self::Attributes(rows) => rows.len(),
            Self::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Pick the content for `state` from the already-derived row lists.
///
/// Indices the tab set does not offer yield [`TabContent::Empty`].
pub fn select_content(
    tabs: TabSet,
    state: &TabState,
    description: &[DisplayBlock],
    specs: &[SpecRow],
    reviews: &[ReviewRow],
    attributes: &[AttributeDisplayRow],
) -> TabContent {
    match tabs.resolve(state.selected_index()) {
        Some(Tab::Description) => TabContent::Description(description.to_vec()),
        Some(Tab::Specs) => TabContent::Specs(specs.to_vec()),
        Some(Tab::Reviews) => TabContent::Reviews(reviews.to_vec()),
        Some(Tab::Attributes) => TabContent::Attributes(attributes.to_vec()),
        None => TabContent::Empty,
    }
}

/// Static rows built once from the configured content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StaticRows {
    pub specs: Vec<SpecRow>,
    pub reviews: Vec<ReviewRow>,
}

impl StaticRows {
    pub fn from_source(source: &TabContentSource) -> Self {
        Self {
            specs: spec_rows(&source.spec_rows),
            reviews: review_rows(&source.reviews),
        }
    }
}
