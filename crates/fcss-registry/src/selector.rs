//! Selector composition.
//!
//! Nested keys are resolved against their parent selector. `&` marks where
//! the parent goes; a key without `&` becomes a descendant of the parent.
//! Comma-separated selector lists are expanded branch by branch so that a
//! nested pseudo-class never pairs with the wrong branch.

use smallvec::SmallVec;

/// The nesting marker.
pub const NESTING_MARKER: char = '&';

/// Branches of a selector list.
pub type Branches<'a> = SmallVec<[&'a str; 4]>;

/// Whether `selector` opens an at-rule (`@media`, `@keyframes`, ...).
#[inline]
pub fn is_at_rule(selector: &str) -> bool {
    selector.starts_with('@')
}

/// Whether `selector` opens a keyframes block, vendor-prefixed or not.
pub fn is_keyframes(selector: &str) -> bool {
    let Some(rest) = selector.strip_prefix('@') else {
        return false;
    };
    let keyword = rest
        .split(|c: char| c.is_whitespace() || c == '(' || c == '{')
        .next()
        .unwrap_or_default();
    keyword.ends_with("keyframes")
}

/// Split a selector list on commas that are not inside `()` or `[]`.
///
/// Branches are trimmed. A selector without a top-level comma yields a single
/// branch.
pub fn split_list(selector: &str) -> Branches<'_> {
    let mut branches = Branches::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (idx, ch) in selector.char_indices() {
        match ch {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                branches.push(selector[start..idx].trim());
                start = idx + 1;
            }
            _ => {}
        }
    }
    branches.push(selector[start..].trim());
    branches
}

fn join_branch(out: &mut String, child: &str, parent: &str) {
    if child.contains(NESTING_MARKER) {
        out.push_str(&child.replace(NESTING_MARKER, parent));
    } else {
        out.push_str(parent);
        out.push(' ');
        out.push_str(child);
    }
}

/// Resolve `child` against `parent`.
///
/// ```
/// use fcss_registry::selector::interpolate;
///
/// assert_eq!(interpolate("&:hover", "a"), "a:hover");
/// assert_eq!(interpolate(".foo", "&"), "& .foo");
/// assert_eq!(interpolate("&:focus", "& > a, & b"), "& > a:focus,& b:focus");
/// ```
pub fn interpolate(child: &str, parent: &str) -> String {
    let children = split_list(child);
    let parents = split_list(parent);

    if children.len() == 1 && parents.len() == 1 {
        let mut out = String::with_capacity(child.len() + parent.len() + 1);
        join_branch(&mut out, child, parent);
        return out;
    }

    let mut out = String::new();
    for p in &parents {
        for c in &children {
            if !out.is_empty() {
                out.push(',');
            }
            join_branch(&mut out, c, p);
        }
    }
    out
}

/// Substitute the identifier for a standalone `&` in an at-rule prelude.
///
/// `@keyframes &` becomes `@keyframes f1abc`. Only whitespace-delimited
/// markers are replaced, so `@keyframes a&b` is left as written.
pub fn resolve_at_rule(prelude: &str, id: &str) -> String {
    if !prelude.contains(NESTING_MARKER) {
        return prelude.to_owned();
    }

    let mut out = String::with_capacity(prelude.len() + id.len());
    let mut rest = prelude;
    while let Some(start) = rest.find(|c: char| !c.is_whitespace()) {
        out.push_str(&rest[..start]);
        rest = &rest[start..];
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let token = &rest[..end];
        if token.len() == 1 && token.starts_with(NESTING_MARKER) {
            out.push_str(id);
        } else {
            out.push_str(token);
        }
        rest = &rest[end..];
    }
    out.push_str(rest);
    out
}
