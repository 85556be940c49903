//! Assembling resolved declarations into one nested style object.

use serde_json::{Map, Value};

use crate::theme::{merge_maps, Breakpoints};

/// A resolved, nested style object: CSS properties at each level, with
/// selector and media-query keys holding further style objects.
pub type StyleObject = Map<String, Value>;

/// Declarations produced by one prop for one breakpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleEntry {
    /// The prop that produced the declarations, kept for diagnostics.
    pub prop: String,
    /// Selector nesting, outermost first.
    pub pseudo_path: Vec<String>,
    pub media: Option<String>,
    pub declarations: StyleObject,
}

impl StyleEntry {
    pub fn new(prop: impl Into<String>, declarations: StyleObject) -> Self {
        Self {
            prop: prop.into(),
            pseudo_path: Vec::new(),
            media: None,
            declarations,
        }
    }

    pub fn under(mut self, selector: impl Into<String>) -> Self {
        self.pseudo_path.push(selector.into());
        self
    }

    pub fn at_media(mut self, media: Option<String>) -> Self {
        self.media = media;
        self
    }
}

/// Flattens entries in declaration order.
///
/// Entries are nested by selector path, then by media query. When two
/// entries write the same key path the later one wins; object values are
/// merged rather than replaced. Media-query keys are finally moved after
/// plain declarations, in breakpoint order, at every level.
pub fn flatten<I>(entries: I, breakpoints: &Breakpoints) -> StyleObject
where
    I: IntoIterator<Item = StyleEntry>,
{
    let mut out = StyleObject::new();
    for entry in entries {
        let target = entry
            .pseudo_path
            .iter()
            .chain(entry.media.iter())
            .fold(&mut out, |map, key| child(map, key));
        merge_maps(target, entry.declarations);
    }
    order_media_queries(&mut out, breakpoints);
    out
}

fn child<'a>(map: &'a mut StyleObject, key: &str) -> &'a mut StyleObject {
    let slot = map
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    match slot {
        Value::Object(inner) => inner,
        _ => unreachable!("slot replaced by an object above"),
    }
}

fn is_media_key(key: &str) -> bool {
    key.starts_with("@media")
}

/// Moves `@media` keys after every other key, ordered by breakpoint rank.
/// Queries that belong to no breakpoint keep their relative order after
/// the ranked ones.
pub fn order_media_queries(map: &mut StyleObject, breakpoints: &Breakpoints) {
    for value in map.values_mut() {
        if let Value::Object(inner) = value {
            order_media_queries(inner, breakpoints);
        }
    }
    if !map.keys().any(|key| is_media_key(key)) {
        return;
    }

    let (mut media, plain): (Vec<_>, Vec<_>) = std::mem::take(map)
        .into_iter()
        .partition(|(key, _)| is_media_key(key));
    media.sort_by_key(|(key, _)| breakpoints.rank_of_media_query(key).unwrap_or(usize::MAX));
    map.extend(plain);
    map.extend(media);
}
