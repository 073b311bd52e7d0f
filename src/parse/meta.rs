//! Meta tag extraction.
//!
//! Scans every `<meta ...>` tag in document order and routes its `content`
//! by the tag's `name` (or `property` when `name` is missing).

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::compile_regex_unsafe;

const META_TAG_PATTERN: &str = r"(?i)<meta\s+([^>]+)>";

const OPEN_GRAPH_PREFIX: &str = "og:";
const TWITTER_PREFIX: &str = "twitter:";

static META_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(META_TAG_PATTERN, "META_TAG_RE"));
static NAME_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(&attribute_pattern("name"), "NAME_ATTR_RE"));
static PROPERTY_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(&attribute_pattern("property"), "PROPERTY_ATTR_RE"));
static CONTENT_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(&attribute_pattern("content"), "CONTENT_ATTR_RE"));

/// Signals carried by meta tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaTags {
    /// `content` of the last `name="description"` tag
    pub description: Option<String>,
    /// `content` of the last `name="robots"` tag
    pub robots: Option<String>,
    /// `og:*` values keyed without the prefix
    pub open_graph: BTreeMap<String, String>,
    /// `twitter:*` values keyed without the prefix
    pub twitter_card: BTreeMap<String, String>,
}

fn attribute_pattern(key: &str) -> String {
    format!(r#"(?i){}=["']([^"']*)["']"#, regex::escape(key))
}

/// Looks up an attribute value in the raw attribute text of one tag.
///
/// Returns the quoted text right after `key=`, or `None` when the key is not
/// present. Each lookup is independent, so a quote inside another attribute's
/// value can confuse it.
///
/// # Examples
///
/// ```
/// use seo_meta_checker::parse::get_attr;
///
/// assert_eq!(get_attr(r#"name='robots' content="noindex""#, "content"), Some("noindex"));
/// assert_eq!(get_attr(r#"name="robots""#, "content"), None);
/// ```
pub fn get_attr<'a>(attrs: &'a str, key: &str) -> Option<&'a str> {
    let compiled;
    let re: &Regex = match key {
        "name" => &*NAME_ATTR_RE,
        "property" => &*PROPERTY_ATTR_RE,
        "content" => &*CONTENT_ATTR_RE,
        other => {
            compiled = compile_regex_unsafe(&attribute_pattern(other), "get_attr");
            &compiled
        }
    };
    re.captures(attrs)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extracts description, robots, Open Graph and Twitter Card values.
///
/// Later tags overwrite earlier ones. A tag without `content` clears
/// `description`/`robots` and stores an empty Open Graph or Twitter value.
pub fn extract_meta_tags(markup: &str) -> MetaTags {
    let mut tags = MetaTags::default();

    for caps in META_TAG_RE.captures_iter(markup) {
        let attrs = caps.get(1).map_or("", |m| m.as_str());
        let name = get_attr(attrs, "name")
            .filter(|name| !name.is_empty())
            .or_else(|| get_attr(attrs, "property"))
            .filter(|name| !name.is_empty());
        let Some(name) = name else {
            continue;
        };
        let content = get_attr(attrs, "content");

        match name {
            "description" => tags.description = content.map(str::to_string),
            "robots" => tags.robots = content.map(str::to_string),
            _ => {}
        }
        if let Some(key) = name.strip_prefix(OPEN_GRAPH_PREFIX) {
            tags.open_graph
                .insert(key.to_string(), content.unwrap_or_default().to_string());
        }
        if let Some(key) = name.strip_prefix(TWITTER_PREFIX) {
            tags.twitter_card
                .insert(key.to_string(), content.unwrap_or_default().to_string());
        }
    }

    tags
}
