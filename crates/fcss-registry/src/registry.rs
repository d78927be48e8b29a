//! The style registry capability.

use fcss_style::{KeyframesName, StyleObject};
use tracing::trace;

use crate::compiled::{CompiledRule, Identifier, Scope};
use crate::emit::{self, Target};
use crate::hash;
use crate::selector;
use crate::stylize;

/// A content-addressed compiler from style objects to CSS.
///
/// Implementations must be deterministic: structurally equal objects compile
/// to the same [`CompiledRule`] regardless of which value they live in or in
/// which order their properties were written.
pub trait StyleRegistry {
    /// Compile `styles` in an explicit scope, ignoring any `$global` flag.
    fn compile_in(&self, styles: &StyleObject, scope: Scope) -> CompiledRule;

    /// Compile `styles`, honouring the `$global` flag.
    fn compile(&self, styles: &StyleObject) -> CompiledRule {
        self.compile_in(styles, Scope::of(styles))
    }

    /// Compile a keyframes block.
    ///
    /// With [`KeyframesName::Auto`] the animation is named after its content
    /// hash; a named block keeps the caller's name verbatim.
    fn compile_keyframes(&self, name: &KeyframesName, frames: &StyleObject) -> CompiledRule {
        let prelude = match name {
            KeyframesName::Auto => "@keyframes &".to_owned(),
            KeyframesName::Named(name) => format!("@keyframes {name}"),
        };
        let wrapper = StyleObject::new().with(prelude, frames.clone());
        let rule = self.compile_in(&wrapper, Scope::Global);
        match name {
            KeyframesName::Auto => rule,
            KeyframesName::Named(name) => {
                // The returned name is the one written into the prelude.
                let written = selector::resolve_at_rule(name, rule.hash.as_str());
                rule.renamed(Identifier::new(written))
            }
        }
    }
}

/// The default registry.
///
/// Stateless: every call recompiles from scratch. Caching is layered on top
/// by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct Registry;

impl StyleRegistry for Registry {
    fn compile_in(&self, styles: &StyleObject, scope: Scope) -> CompiledRule {
        let _span = tracing::trace_span!("compile", ?scope, keys = styles.len()).entered();

        let root = match scope {
            Scope::Scoped => "&",
            Scope::Global => "",
        };
        let stylized = stylize::stylize(root, styles);
        let hash = hash::hash_identifier(&stylized.pid);
        let class_selector = format!(".{hash}");
        let css = emit::render(
            &stylized.tree,
            &Target {
                class_selector: (scope == Scope::Scoped).then_some(class_selector.as_str()),
                id: &hash,
            },
        );

        trace!(id = %hash, bytes = css.len(), "compiled style object");

        let hash = Identifier::new(hash);
        CompiledRule {
            id: hash.clone(),
            hash,
            css,
            scope,
        }
    }
}

#[cfg(test)]
mod tests {
    use fcss_style::{GLOBAL_FLAG, StyleValue};
    use proptest::prelude::*;
    use serde_json::json;
    use tracing_test::traced_test;

    use super::*;

    fn compile(value: serde_json::Value) -> (String, String) {
        let styles = StyleObject::try_from(value).expect("style object");
        let (id, css) = Registry.compile(&styles).into_parts();
        (id.into_string(), css)
    }

    fn global(value: serde_json::Value) -> (String, String) {
        let styles = StyleObject::try_from(value).expect("style object");
        let (id, css) = Registry.compile_in(&styles, Scope::Global).into_parts();
        (id.into_string(), css)
    }

    fn keyframes(name: KeyframesName, value: serde_json::Value) -> (String, String) {
        let frames = StyleObject::try_from(value).expect("style object");
        let (id, css) = Registry.compile_keyframes(&name, &frames).into_parts();
        (id.into_string(), css)
    }

    #[test]
    fn basic_usage() {
        let (id, css) = compile(json!({"color": "white", "backgroundColor": "black"}));
        assert_eq!(id, "f6e2hlp");
        assert_eq!(css, ".f6e2hlp{background-color:black;color:white}");
    }

    #[test]
    fn nested_usage() {
        let (id, css) = compile(json!({
            "backgroundColor": "black",
            "& .foo": {"color": "white"},
            "& #myid ~ ul > li:last-child": {"color": "green"},
            "& .foo.bar": {
                "& span.baz": {"color": "red"},
            },
        }));
        assert_eq!(id, "f1wuspsr");
        assert_eq!(
            css,
            ".f1wuspsr{background-color:black}.f1wuspsr .foo{color:white}\
             .f1wuspsr #myid ~ ul > li:last-child{color:green}.f1wuspsr .foo.bar span.baz{color:red}"
        );
    }

    #[test]
    fn pseudo_usage() {
        let (id, css) = compile(json!({
            "& > ul": {
                "listStyleType": "none",
                "paddingLeft": "0",
                "& li": {
                    "cursor": "pointer",
                    "&:hover": {"backgroundColor": "yellow"},
                },
            },
        }));
        assert_eq!(id, "fodl7pe");
        assert_eq!(
            css,
            ".fodl7pe > ul{list-style-type:none;padding-left:0}.fodl7pe > ul li{cursor:pointer}\
             .fodl7pe > ul li:hover{background-color:yellow}"
        );
    }

    #[test]
    fn media_usage() {
        let (id, css) = compile(json!({
            "@media(min-width: 300px)": {"& h2": {"fontSize": "30px"}},
        }));
        assert_eq!(id, "fdnu0l2");
        assert_eq!(css, "@media(min-width: 300px){.fdnu0l2 h2{font-size:30px}}");
    }

    #[test]
    fn markerless_child_nests_under_class() {
        let (id, css) = compile(json!({".foo": {"color": "blue"}}));
        assert_eq!(id, "ffqhmej");
        assert_eq!(css, ".ffqhmej .foo{color:blue}");
    }

    #[test]
    fn keyframes_custom_name() {
        let (id, css) = keyframes(
            "custom-name-here".into(),
            json!({"from": {"color": "red"}, "to": {"color": "blue"}}),
        );
        assert_eq!(id, "custom-name-here");
        assert_eq!(css, "@keyframes custom-name-here{from{color:red}to{color:blue}}");

        let (cid, ccss) = compile(json!({"animationName": id, "animationDuration": "1s"}));
        assert_eq!(cid, "fgiup2j");
        assert_eq!(ccss, ".fgiup2j{animation-duration:1s;animation-name:custom-name-here}");
    }

    #[test]
    fn keyframes_names_keep_embedded_markers() {
        let frames = json!({"to": {"opacity": 1}});
        let (id, css) = keyframes("a&b".into(), frames.clone());
        assert_eq!(id, "a&b");
        assert_eq!(css, "@keyframes a&b{to{opacity:1}}");

        let (id, css) = keyframes("&".into(), frames);
        assert!(id.starts_with('f'), "id = {id}");
        assert_eq!(css, format!("@keyframes {id}{{to{{opacity:1}}}}"));
    }

    #[test]
    fn keyframes_auto_name() {
        let (id, css) = keyframes(
            KeyframesName::Auto,
            json!({
                "0%": {"color": "red"},
                "60%": {"color": "purple"},
                "100%": {"color": "blue"},
            }),
        );
        assert_eq!(id, "f167zcak");
        assert_eq!(css, "@keyframes f167zcak{0%{color:red}100%{color:blue}60%{color:purple}}");

        let (cid, ccss) = compile(json!({"animationName": id, "animationDuration": "1s"}));
        assert_eq!(cid, "fqkhao0");
        assert_eq!(ccss, ".fqkhao0{animation-duration:1s;animation-name:f167zcak}");
    }

    #[test]
    fn global_usage() {
        let (id, css) = global(json!({
            "a": {
                "color": "blue",
                "textDecoration": "underline",
                "&:hover": {"color": "green"},
            },
        }));
        assert_eq!(id, "f1uki7ri");
        assert_eq!(css, "a{color:blue;text-decoration:underline}a:hover{color:green}");
    }

    #[test]
    fn global_flag_matches_explicit_scope() {
        let body = json!({"a": {"color": "blue"}});
        let mut flagged = StyleObject::try_from(&body).unwrap();
        flagged.set(GLOBAL_FLAG, true);

        let plain = StyleObject::try_from(&body).unwrap();
        assert_eq!(Registry.compile(&flagged), Registry.compile_in(&plain, Scope::Global));
    }

    #[test]
    fn selector_lists_with_pseudo_classes_do_not_cross_pair() {
        let (id, css) = compile(json!({
            "& > input, & .something-else > input": {
                "background": "blue",
                "&:focus": {"background": "green"},
            },
        }));
        assert_eq!(id, "f1v7ffqg");
        assert_eq!(
            css,
            ".f1v7ffqg > input,.f1v7ffqg .something-else > input{background:blue}\
             .f1v7ffqg > input:focus,.f1v7ffqg .something-else > input:focus{background:green}"
        );
        assert!(!css.contains("input, .f1v7ffqg .something-else > input:focus"));
    }

    #[test]
    fn nested_at_rule_declarations_apply_to_parent() {
        let (id, css) = compile(json!({
            "color": "red",
            "@media print": {"color": "blue", "& a": {"color": "green"}},
        }));
        assert_eq!(
            css,
            format!(".{id}{{color:red}}@media print{{.{id}{{color:blue}}.{id} a{{color:green}}}}")
        );
    }

    #[test]
    fn global_font_face_keeps_own_declarations() {
        let (_, css) = global(json!({
            "@font-face": {"fontFamily": "Inter", "src": "url(inter.woff2)"},
        }));
        assert_eq!(css, "@font-face{font-family:Inter;src:url(inter.woff2)}");
    }

    #[test]
    fn empty_object_compiles_to_empty_text() {
        let rule = Registry.compile(&StyleObject::new());
        assert!(rule.css.is_empty());
        assert_eq!(rule.id, "f45h");
    }

    #[test]
    fn null_values_are_ignored() {
        let with_null = StyleObject::new().with("color", "red").with("margin", StyleValue::Null);
        let without = StyleObject::new().with("color", "red");
        assert_eq!(Registry.compile(&with_null), Registry.compile(&without));
    }

    #[test]
    #[traced_test]
    fn compile_is_traced() {
        let styles = StyleObject::new().with("color", "white").with("backgroundColor", "black");
        Registry.compile(&styles);
        assert!(logs_contain("compiled style object"));
        assert!(logs_contain("f6e2hlp"));
    }

    fn property_entries() -> impl Strategy<Value = Vec<(String, String)>> {
        proptest::collection::btree_map("[a-z]{1,8}([A-Z][a-z]{1,6})?", "[a-z0-9]{1,8}", 1..8)
            .prop_map(|m| m.into_iter().collect())
    }

    proptest! {
        #[test]
        fn property_order_does_not_change_output(
            entries in property_entries(),
            nested in property_entries(),
            seed in any::<u64>(),
        ) {
            let mut shuffled = entries.clone();
            let len = shuffled.len();
            shuffled.rotate_left((seed as usize) % len);
            shuffled.reverse();

            let frames: StyleObject = nested.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
            let a: StyleObject = entries
                .iter()
                .map(|(k, v)| (k.clone(), StyleValue::from(v.as_str())))
                .chain([("&:hover".to_owned(), StyleValue::from(frames.clone()))])
                .collect();
            let b: StyleObject = shuffled
                .iter()
                .map(|(k, v)| (k.clone(), StyleValue::from(v.as_str())))
                .chain([("&:hover".to_owned(), StyleValue::from(frames))])
                .collect();

            prop_assert_eq!(Registry.compile(&a), Registry.compile(&b));
        }

        #[test]
        fn keyframe_stop_order_does_not_change_output(
            stops in proptest::collection::btree_set(0u32..=100, 1..6),
        ) {
            let forward: StyleObject = stops
                .iter()
                .map(|s| (format!("{s}%"), StyleObject::new().with("opacity", *s)))
                .collect();
            let backward: StyleObject = stops
                .iter()
                .rev()
                .map(|s| (format!("{s}%"), StyleObject::new().with("opacity", *s)))
                .collect();

            prop_assert_eq!(
                Registry.compile_keyframes(&KeyframesName::Auto, &forward),
                Registry.compile_keyframes(&KeyframesName::Auto, &backward)
            );
        }

        #[test]
        fn identifiers_are_short_and_prefixed(entries in property_entries()) {
            let styles: StyleObject = entries.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
            let rule = Registry.compile(&styles);
            prop_assert!(rule.id.as_str().starts_with('f'));
            prop_assert!(rule.id.as_str().len() <= 8);
            let expected_prefix = format!(".{}{{", rule.id);
            prop_assert!(rule.css.starts_with(&expected_prefix));
        }
    }
}
