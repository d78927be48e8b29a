//! Style object to rule tree.
//!
//! A single walk over the [`StyleObject`] produces two things at once:
//! the *fingerprint* (`pid`) the identifier is hashed from, and a
//! [`RuleTree`] of selectors that still contain the `&` placeholder. The
//! placeholder is only resolved at emission time, once the hash is known.

use fcss_style::{StyleObject, StyleValue};

use crate::property;
use crate::selector;

/// Separates a nested key from the parent fingerprint.
const KEY_MARK: char = '|';
/// Separates a nested key from its own fingerprint.
const BODY_MARK: char = '#';

/// A declaration block for one (unresolved) selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StyleNode {
    pub selector: String,
    pub declarations: String,
}

/// An at-rule wrapping its own declarations and a nested tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RuleNode {
    pub selector: String,
    pub declarations: String,
    pub body: RuleTree,
}

/// One level of output: style blocks first, then at-rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RuleTree {
    pub styles: Vec<StyleNode>,
    pub rules: Vec<RuleNode>,
}

/// Result of walking a style object.
#[derive(Debug, Clone)]
pub(crate) struct Stylized {
    pub pid: String,
    pub tree: RuleTree,
}

struct Parsed<'a> {
    declarations: String,
    nested: Vec<(&'a str, &'a StyleObject)>,
}

/// Split a block into sorted declarations and nested blocks.
fn parse(styles: &StyleObject, sort_nested: bool) -> Parsed<'_> {
    let mut properties: Vec<(String, &StyleValue)> = Vec::new();
    let mut nested: Vec<(&str, &StyleObject)> = Vec::new();

    for (key, value) in styles.iter() {
        let name = key.trim();
        if name.starts_with('$') || value.is_null() {
            continue;
        }
        match value {
            StyleValue::Object(obj) => nested.push((name, obj)),
            _ => properties.push((property::hyphenate(name), value)),
        }
    }

    properties.sort_by(|a, b| a.0.cmp(&b.0));
    if sort_nested {
        nested.sort_by(|a, b| a.0.cmp(b.0));
    }

    Parsed {
        declarations: property::stringify(properties.iter().map(|(k, v)| (k.as_str(), *v))),
        nested,
    }
}

fn push_fingerprint(pid: &mut String, key: &str, child: &str) {
    pid.push(KEY_MARK);
    pid.push_str(key);
    pid.push(BODY_MARK);
    pid.push_str(child);
}

/// Walk `styles` rooted at `root` (`&` for scoped output, empty for global).
pub(crate) fn stylize(root: &str, styles: &StyleObject) -> Stylized {
    let mut tree = RuleTree::default();
    let pid = walk(root, styles, &mut tree, "");
    Stylized { pid, tree }
}

fn walk(selector: &str, styles: &StyleObject, out: &mut RuleTree, parent: &str) -> String {
    let Parsed {
        declarations,
        nested,
    } = parse(styles, selector::is_keyframes(selector));
    let mut pid = declarations.clone();

    if selector::is_at_rule(selector) {
        let mut body = RuleTree::default();

        // Declarations directly under a nested at-rule apply to the parent
        // selector (`.x { @media print { color: red } }`).
        let own = if parent.is_empty() {
            declarations
        } else {
            if !declarations.is_empty() {
                body.styles.push(StyleNode {
                    selector: parent.to_owned(),
                    declarations,
                });
            }
            String::new()
        };

        for (name, child) in nested {
            let child_pid = walk(name, child, &mut body, parent);
            push_fingerprint(&mut pid, name, &child_pid);
        }

        out.rules.push(RuleNode {
            selector: selector.to_owned(),
            declarations: own,
            body,
        });
    } else {
        let key = if parent.is_empty() {
            selector.to_owned()
        } else {
            selector::interpolate(selector, parent)
        };

        if !declarations.is_empty() {
            out.styles.push(StyleNode {
                selector: key.clone(),
                declarations,
            });
        }

        for (name, child) in nested {
            let child_pid = walk(name, child, out, &key);
            push_fingerprint(&mut pid, name, &child_pid);
        }
    }

    pid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obj() -> StyleObject {
        StyleObject::new()
    }

    #[test]
    fn flat_properties_sort_by_css_name() {
        let styles = obj().with("color", "white").with("backgroundColor", "black");
        let out = stylize("&", &styles);

        assert_eq!(out.pid, "background-color:black;color:white");
        assert_eq!(
            out.tree.styles,
            [StyleNode {
                selector: "&".into(),
                declarations: "background-color:black;color:white".into(),
            }]
        );
    }

    #[test]
    fn reserved_keys_and_nulls_are_skipped() {
        let styles = obj()
            .with("$global", true)
            .with("margin", StyleValue::Null)
            .with("color", "red");
        assert_eq!(stylize("", &styles).pid, "color:red");
    }

    #[test]
    fn nested_fingerprint_marks_keys_and_bodies() {
        let styles = obj().with(".foo", obj().with("color", "blue"));
        let out = stylize("&", &styles);

        assert_eq!(out.pid, "|.foo#color:blue");
        assert_eq!(out.tree.styles[0].selector, "& .foo");
    }

    #[test]
    fn nested_selectors_keep_insertion_order() {
        let styles = obj()
            .with("& .b", obj().with("color", "blue"))
            .with("& .a", obj().with("color", "red"));
        let out = stylize("&", &styles);

        let selectors: Vec<_> = out.tree.styles.iter().map(|s| s.selector.as_str()).collect();
        assert_eq!(selectors, ["& .b", "& .a"]);
    }

    #[test]
    fn keyframe_stops_are_sorted() {
        let frames = obj()
            .with("0%", obj().with("color", "red"))
            .with("60%", obj().with("color", "purple"))
            .with("100%", obj().with("color", "blue"));
        let styles = obj().with("@keyframes &", frames);
        let out = stylize("", &styles);

        let stops: Vec<_> = out.tree.rules[0]
            .body
            .styles
            .iter()
            .map(|s| s.selector.as_str())
            .collect();
        assert_eq!(stops, ["0%", "100%", "60%"]);
        assert_eq!(
            out.pid,
            "|@keyframes &#|0%#color:red|100%#color:blue|60%#color:purple"
        );
    }

    #[test]
    fn at_rule_declarations_move_to_parent_selector() {
        let styles = obj().with("@media print", obj().with("color", "blue"));
        let out = stylize("&", &styles);

        let rule = &out.tree.rules[0];
        assert_eq!(rule.declarations, "");
        assert_eq!(rule.body.styles[0].selector, "&");
        assert_eq!(rule.body.styles[0].declarations, "color:blue");
    }

    #[test]
    fn top_level_at_rule_keeps_its_declarations() {
        let styles = obj().with("@font-face", obj().with("fontFamily", "Inter"));
        let out = stylize("", &styles);

        assert_eq!(out.tree.rules[0].declarations, "font-family:Inter");
        assert!(out.tree.rules[0].body.styles.is_empty());
    }

    #[test]
    fn keys_are_trimmed() {
        let styles = obj().with("  & a ", obj().with(" color ", "red"));
        let out = stylize("&", &styles);
        assert_eq!(out.pid, "|& a#color:red");
    }
}
