//! Commander list page decoding
//!
//! The list endpoint answers in one of two shapes:
//! - the first page nests several card lists under
//!   `container.json_dict.cardlists[]`, each with its own `more` reference
//! - follow-up pages carry `cardviews[]` and `more` at the root
//!
//! Both are decoded once here so the crawl loop never looks at raw JSON.

use serde_json::Value;

/// Slugs of one card list plus the list's own next-page reference
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StubList {
    /// Non-empty `sanitized` values in page order, duplicates kept
    pub slugs: Vec<String>,

    /// Reference to the next page of this list
    pub more: Option<String>,
}

/// One decoded page of the commander list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogPage {
    /// Pagination page: a single list at the root
    Paginated(StubList),

    /// Landing page: several lists nested in the data container
    Root(Vec<StubList>),
}

impl CatalogPage {
    /// Decodes a page, probing for root-level `cardviews` first
    pub fn from_json(value: &Value) -> Self {
        if value.get("cardviews").is_some() {
            return Self::Paginated(stub_list(value));
        }

        let lists = value
            .pointer("/container/json_dict/cardlists")
            .and_then(Value::as_array)
            .map(|lists| lists.iter().map(stub_list).collect())
            .unwrap_or_default();

        Self::Root(lists)
    }

    /// All card lists on the page, in page order
    pub fn lists(&self) -> &[StubList] {
        match self {
            Self::Paginated(list) => std::slice::from_ref(list),
            Self::Root(lists) => lists,
        }
    }

    /// Every slug on the page in order of appearance
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.lists()
            .iter()
            .flat_map(|list| list.slugs.iter().map(String::as_str))
    }

    /// Where the crawl continues
    ///
    /// On a landing page with several continuing lists the last one wins.
    pub fn next_page(&self) -> Option<&str> {
        self.lists()
            .iter()
            .filter_map(|list| list.more.as_deref())
            .last()
    }
}

fn stub_list(value: &Value) -> StubList {
    let slugs = value
        .get("cardviews")
        .and_then(Value::as_array)
        .map(|views| {
            views
                .iter()
                .filter_map(|view| view.get("sanitized").and_then(Value::as_str))
                .filter(|slug| !slug.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let more = value
        .get("more")
        .and_then(Value::as_str)
        .filter(|more| !more.is_empty())
        .map(str::to_string);

    StubList { slugs, more }
}
