//! Pagination types for list endpoints.
//!
//! Every list endpoint returns a [`Paged`] envelope: the page of items,
//! the pagination counters, and hypermedia navigation links (`self`,
//! `first`, `prev`, `next`, `last`) with the query string rewritten for
//! each target page.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Pagination query parameters, shared by all list endpoints.
///
/// Out-of-range values are clamped, never rejected: `page` is floored at 1
/// and `pageSize` is constrained to `[1, MAX_PAGE_SIZE]`.
#[derive(Debug, Clone, Deserialize)]
pub struct PageRequest {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_page_size", rename = "pageSize")]
    pub page_size: u64,
}

fn default_page() -> u64 {
    DEFAULT_PAGE_NUMBER
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl PageRequest {
    /// Requested page, clamped to >= 1
    pub fn page(&self) -> u64 {
        self.page.max(1)
    }

    /// Requested page size, clamped to [1, MAX_PAGE_SIZE]
    pub fn page_size(&self) -> u64 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }

    /// Calculate offset for database query
    pub fn offset(&self) -> u64 {
        (self.page() - 1) * self.page_size()
    }

    /// Row limit for database query
    pub fn limit(&self) -> u64 {
        self.page_size()
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Navigation link relation, in envelope emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkRel {
    #[serde(rename = "self")]
    Current,
    First,
    Prev,
    Next,
    Last,
}

/// A single hypermedia link.
#[derive(Debug, Clone, Serialize)]
pub struct Link {
    /// Absolute URL of the target page
    pub href: String,
    /// Relation of the target page to the current one
    pub rel: LinkRel,
    /// HTTP method to use when following the link
    pub method: &'static str,
}

impl Link {
    fn get(rel: LinkRel, href: String) -> Self {
        Self {
            href,
            rel,
            method: "GET",
        }
    }
}

/// Paginated response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub links: BTreeMap<LinkRel, Link>,
}

impl<T> Paged<T> {
    /// Wrap an already-sliced page of items in an envelope without links.
    ///
    /// `page` and `page_size` are assumed to be normalized by [`PageRequest`];
    /// `total_pages` is `ceil(total_items / page_size)`, 0 for an empty
    /// collection.
    pub fn new(items: Vec<T>, page: u64, page_size: u64, total_items: u64) -> Self {
        let total_pages = if page_size > 0 {
            total_items.div_ceil(page_size)
        } else {
            0
        };

        Self {
            items,
            page,
            page_size,
            total_items,
            total_pages,
            links: BTreeMap::new(),
        }
    }

    /// Attach navigation links.
    ///
    /// `base_url` is the absolute scheme+host (+ optional path prefix) without
    /// a trailing slash and `path` the current route path without a query
    /// string. Extra parameters are carried into every generated href;
    /// `None`-valued entries are dropped. `self` is always present, `first`/
    /// `prev` only past the first page, `next`/`last` only before the last.
    pub fn with_links(mut self, base_url: &str, path: &str, extra: &[(&str, Option<&str>)]) -> Self {
        let href = |target: u64| page_href(base_url, path, target, self.page_size, extra);

        let mut links = BTreeMap::new();
        links.insert(LinkRel::Current, Link::get(LinkRel::Current, href(self.page)));

        if self.page > 1 {
            links.insert(LinkRel::First, Link::get(LinkRel::First, href(1)));
            links.insert(LinkRel::Prev, Link::get(LinkRel::Prev, href(self.page - 1)));
        }

        if self.page < self.total_pages {
            links.insert(LinkRel::Next, Link::get(LinkRel::Next, href(self.page + 1)));
            links.insert(LinkRel::Last, Link::get(LinkRel::Last, href(self.total_pages)));
        }

        self.links = links;
        self
    }
}

/// Build the absolute href for one target page.
///
/// The query string always carries `page` and `pageSize` as decimal integers,
/// followed by the caller's extra parameters; all values are percent-encoded.
fn page_href(
    base_url: &str,
    path: &str,
    page: u64,
    page_size: u64,
    extra: &[(&str, Option<&str>)],
) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("page", &page.to_string());
    query.append_pair("pageSize", &page_size.to_string());
    for (key, value) in extra {
        if let Some(value) = value {
            query.append_pair(key, value);
        }
    }

    format!("{}{}?{}", base_url, path, query.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:3000";

    fn rels(paged: &Paged<i32>) -> Vec<LinkRel> {
        paged.links.keys().copied().collect()
    }

    fn page_param(href: &str) -> Option<String> {
        href.split(['?', '&'])
            .find_map(|part| part.strip_prefix("page="))
            .map(str::to_string)
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        assert_eq!(Paged::new(Vec::<i32>::new(), 1, 20, 95).total_pages, 5);
        assert_eq!(Paged::new(Vec::<i32>::new(), 1, 20, 100).total_pages, 5);
        assert_eq!(Paged::new(Vec::<i32>::new(), 1, 20, 101).total_pages, 6);
        assert_eq!(Paged::new(Vec::<i32>::new(), 1, 7, 1).total_pages, 1);
    }

    #[test]
    fn test_middle_page_has_all_relations() {
        let paged = Paged::new(vec![1, 2, 3], 3, 20, 95).with_links(BASE, "/titles", &[]);

        assert_eq!(paged.total_pages, 5);
        assert_eq!(
            rels(&paged),
            vec![
                LinkRel::Current,
                LinkRel::First,
                LinkRel::Prev,
                LinkRel::Next,
                LinkRel::Last
            ]
        );

        let target = |rel: LinkRel| page_param(&paged.links[&rel].href).unwrap();
        assert_eq!(target(LinkRel::First), "1");
        assert_eq!(target(LinkRel::Prev), "2");
        assert_eq!(target(LinkRel::Current), "3");
        assert_eq!(target(LinkRel::Next), "4");
        assert_eq!(target(LinkRel::Last), "5");
    }

    #[test]
    fn test_first_page_has_no_backward_links() {
        let paged = Paged::new(vec![1], 1, 20, 95).with_links(BASE, "/titles", &[]);

        assert_eq!(
            rels(&paged),
            vec![LinkRel::Current, LinkRel::Next, LinkRel::Last]
        );
    }

    #[test]
    fn test_last_page_has_no_forward_links() {
        let paged = Paged::new(vec![1], 5, 20, 95).with_links(BASE, "/titles", &[]);

        assert_eq!(
            rels(&paged),
            vec![LinkRel::Current, LinkRel::First, LinkRel::Prev]
        );
    }

    #[test]
    fn test_empty_collection_has_self_only() {
        let paged = Paged::new(Vec::<i32>::new(), 1, 20, 0).with_links(BASE, "/titles", &[]);

        assert_eq!(paged.total_pages, 0);
        assert_eq!(rels(&paged), vec![LinkRel::Current]);
        assert_eq!(
            paged.links[&LinkRel::Current].href,
            "http://localhost:3000/titles?page=1&pageSize=20"
        );
    }

    #[test]
    fn test_self_reflects_requested_page_and_size() {
        let paged = Paged::new(vec![1], 2, 50, 95).with_links(BASE, "/people", &[]);

        assert_eq!(
            paged.links[&LinkRel::Current].href,
            "http://localhost:3000/people?page=2&pageSize=50"
        );
        assert_eq!(paged.links[&LinkRel::Current].method, "GET");
    }

    #[test]
    fn test_extra_params_carried_and_none_dropped() {
        let extra = [("q", Some("blade runner")), ("kind", None)];
        let paged = Paged::new(vec![1], 2, 20, 95).with_links(BASE, "/titles", &extra);

        for link in paged.links.values() {
            assert!(link.href.contains("q=blade+runner"), "href: {}", link.href);
            assert!(!link.href.contains("kind"), "href: {}", link.href);
        }
    }

    #[test]
    fn test_query_values_are_encoded() {
        let extra = [("q", Some("100% / zürich"))];
        let paged = Paged::new(vec![1], 1, 20, 1).with_links(BASE, "/titles", &extra);

        let href = &paged.links[&LinkRel::Current].href;
        assert!(href.contains("q=100%25+%2F+z%C3%BCrich"), "href: {}", href);
    }

    #[test]
    fn test_page_request_clamping() {
        let req = PageRequest {
            page: 0,
            page_size: 0,
        };
        assert_eq!(req.page(), 1);
        assert_eq!(req.page_size(), 1);
        assert_eq!(req.offset(), 0);

        let req = PageRequest {
            page: 3,
            page_size: 1000,
        };
        assert_eq!(req.page_size(), MAX_PAGE_SIZE);
        assert_eq!(req.offset(), 2 * MAX_PAGE_SIZE);
    }

    #[test]
    fn test_page_request_defaults() {
        let req = PageRequest::default();
        assert_eq!(req.page(), 1);
        assert_eq!(req.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(req.offset(), 0);
        assert_eq!(req.limit(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_envelope_json_contract() {
        let paged = Paged::new(vec![1, 2], 1, 2, 3).with_links(BASE, "/titles", &[]);
        let json = serde_json::to_value(&paged).unwrap();

        assert_eq!(json["page"], 1);
        assert_eq!(json["pageSize"], 2);
        assert_eq!(json["totalItems"], 3);
        assert_eq!(json["totalPages"], 2);
        assert_eq!(json["items"], serde_json::json!([1, 2]));

        let links = json["links"].as_object().unwrap();
        assert!(links.contains_key("self"));
        assert_eq!(links["self"]["rel"], "self");
        assert_eq!(links["self"]["method"], "GET");
        assert_eq!(links["next"]["rel"], "next");
    }
}
