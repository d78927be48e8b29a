//! Rule tree to CSS text.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::selector;
use crate::stylize::{RuleNode, RuleTree};

/// How placeholders resolve during emission.
pub(crate) struct Target<'a> {
    /// `.{hash}` for scoped output; `None` leaves selectors as written.
    pub class_selector: Option<&'a str>,
    /// Bare identifier substituted into at-rule preludes.
    pub id: &'a str,
}

/// Render a rule tree into minified CSS text.
pub(crate) fn render(tree: &RuleTree, target: &Target<'_>) -> String {
    let mut out = String::new();
    write_level(&mut out, &[tree], target);
    out
}

/// Write one container level built from one or more merged trees.
///
/// Declaration blocks with identical text share one rule (`.a,.b{...}`);
/// at-rules with the same prelude and own declarations are merged.
fn write_level(out: &mut String, trees: &[&RuleTree], target: &Target<'_>) {
    let mut blocks: Vec<(SmallVec<[String; 2]>, &str)> = Vec::new();
    let mut by_body: FxHashMap<&str, usize> = FxHashMap::default();

    for node in trees.iter().flat_map(|t| t.styles.iter()) {
        let selector = match target.class_selector {
            Some(class) => selector::interpolate(&node.selector, class),
            None => node.selector.clone(),
        };
        match by_body.get(node.declarations.as_str()) {
            Some(&idx) => {
                let selectors = &mut blocks[idx].0;
                if !selectors.contains(&selector) {
                    selectors.push(selector);
                }
            }
            None => {
                by_body.insert(&node.declarations, blocks.len());
                blocks.push((SmallVec::from_elem(selector, 1), &node.declarations));
            }
        }
    }

    for (selectors, declarations) in &blocks {
        out.push_str(&selectors.join(","));
        out.push('{');
        out.push_str(declarations);
        out.push('}');
    }

    let mut groups: Vec<(&RuleNode, SmallVec<[&RuleTree; 2]>)> = Vec::new();
    for rule in trees.iter().flat_map(|t| t.rules.iter()) {
        match groups
            .iter_mut()
            .find(|(head, _)| head.selector == rule.selector && head.declarations == rule.declarations)
        {
            Some((_, bodies)) => bodies.push(&rule.body),
            None => groups.push((rule, SmallVec::from_elem(&rule.body, 1))),
        }
    }

    for (head, bodies) in &groups {
        out.push_str(&selector::resolve_at_rule(&head.selector, target.id));
        out.push('{');
        out.push_str(&head.declarations);
        write_level(out, bodies, target);
        out.push('}');
    }
}
