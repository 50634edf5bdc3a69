// src/page.rs
use std::{collections::HashMap, fmt, str::FromStr};

/// Every element the handlers read from or write to, named as in the web form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    // chat
    SendBtn,
    UserId,
    SessionId,
    Temperature,
    Message,
    Answer,
    // rating
    HistoryId,
    RateBtn,
    Rating,
    RateResult,
    // knowledge base
    KbSearchBtn,
    KbQuery,
    KbResults,
    KbItemBtn,
    KbItemId,
    KbItem,
    // semantic search
    EsSearchBtn,
    EsQuery,
    EsCategories,
    EsTopN,
    EsSave,
    EsResults,
    EsCategoriesBtn,
    EsCategoryList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Button,
    Input,
    Checkbox,
    Text,
    List,
}

impl ElementId {
    pub const ALL: [ElementId; 24] = [
        ElementId::SendBtn,
        ElementId::UserId,
        ElementId::SessionId,
        ElementId::Temperature,
        ElementId::Message,
        ElementId::Answer,
        ElementId::HistoryId,
        ElementId::RateBtn,
        ElementId::Rating,
        ElementId::RateResult,
        ElementId::KbSearchBtn,
        ElementId::KbQuery,
        ElementId::KbResults,
        ElementId::KbItemBtn,
        ElementId::KbItemId,
        ElementId::KbItem,
        ElementId::EsSearchBtn,
        ElementId::EsQuery,
        ElementId::EsCategories,
        ElementId::EsTopN,
        ElementId::EsSave,
        ElementId::EsResults,
        ElementId::EsCategoriesBtn,
        ElementId::EsCategoryList,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementId::SendBtn => "sendBtn",
            ElementId::UserId => "userId",
            ElementId::SessionId => "sessionId",
            ElementId::Temperature => "temperature",
            ElementId::Message => "message",
            ElementId::Answer => "answer",
            ElementId::HistoryId => "historyId",
            ElementId::RateBtn => "rateBtn",
            ElementId::Rating => "rating",
            ElementId::RateResult => "rateResult",
            ElementId::KbSearchBtn => "kbSearchBtn",
            ElementId::KbQuery => "kbQuery",
            ElementId::KbResults => "kbResults",
            ElementId::KbItemBtn => "kbItemBtn",
            ElementId::KbItemId => "kbItemId",
            ElementId::KbItem => "kbItem",
            ElementId::EsSearchBtn => "esSearchBtn",
            ElementId::EsQuery => "esQuery",
            ElementId::EsCategories => "esCategories",
            ElementId::EsTopN => "esTopN",
            ElementId::EsSave => "esSave",
            ElementId::EsResults => "esResults",
            ElementId::EsCategoriesBtn => "esCategoriesBtn",
            ElementId::EsCategoryList => "esCategoryList",
        }
    }

    pub fn kind(&self) -> ElementKind {
        use ElementId::*;
        match self {
            SendBtn | RateBtn | KbSearchBtn | KbItemBtn | EsSearchBtn | EsCategoriesBtn => {
                ElementKind::Button
            }
            UserId | SessionId | Temperature | Message | HistoryId | Rating | KbQuery
            | KbItemId | EsQuery | EsCategories | EsTopN => ElementKind::Input,
            EsSave => ElementKind::Checkbox,
            Answer | RateResult | KbItem | EsResults => ElementKind::Text,
            KbResults | EsCategoryList => ElementKind::List,
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no element with id '{0}'")]
pub struct UnknownElement(pub String);

impl FromStr for ElementId {
    type Err = UnknownElement;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownElement(s.to_string()))
    }
}

/// In-memory state of the form: input values, checkboxes, text outputs and
/// list outputs. Elements never written read as empty.
#[derive(Debug, Clone, Default)]
pub struct Page {
    values: HashMap<ElementId, String>,
    checked: HashMap<ElementId, bool>,
    text: HashMap<ElementId, String>,
    lists: HashMap<ElementId, Vec<String>>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, id: ElementId) -> &str {
        self.values.get(&id).map(String::as_str).unwrap_or("")
    }

    pub fn set_value(&mut self, id: ElementId, value: impl Into<String>) {
        self.values.insert(id, value.into());
    }

    pub fn is_checked(&self, id: ElementId) -> bool {
        self.checked.get(&id).copied().unwrap_or(false)
    }

    pub fn set_checked(&mut self, id: ElementId, checked: bool) {
        self.checked.insert(id, checked);
    }

    pub fn text(&self, id: ElementId) -> &str {
        self.text.get(&id).map(String::as_str).unwrap_or("")
    }

    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) {
        self.text.insert(id, text.into());
    }

    pub fn items(&self, id: ElementId) -> &[String] {
        self.lists.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replaces the whole list, e.g. with a single placeholder or error item.
    pub fn set_items(&mut self, id: ElementId, items: Vec<String>) {
        self.lists.insert(id, items);
    }

    pub fn clear_items(&mut self, id: ElementId) {
        self.lists.entry(id).or_default().clear();
    }

    pub fn push_item(&mut self, id: ElementId, item: impl Into<String>) {
        self.lists.entry(id).or_default().push(item.into());
    }

    /// Human readable contents of any element, used by `show`.
    pub fn render(&self, id: ElementId) -> String {
        match id.kind() {
            ElementKind::Button => format!("[{}]", id),
            ElementKind::Input => self.value(id).to_string(),
            ElementKind::Checkbox => {
                let mark = if self.is_checked(id) { "[x]" } else { "[ ]" };
                mark.to_string()
            }
            ElementKind::Text => self.text(id).to_string(),
            ElementKind::List => self
                .items(id)
                .iter()
                .map(|item| format!("- {}", item))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}
