//! Property tests for the reference grammar and resolver

mod common;

use proptest::prelude::*;
use vaultref_secrets::grammar::{self, Span};
use vaultref_secrets::{extract, resolve, Namespace, SecretMapping};

#[derive(Debug, Clone)]
enum Segment {
    Literal(String),
    Reference(String),
    Foreign(String),
}

fn segment() -> impl Strategy<Value = Segment> {
    prop_oneof![
        "[a-z0-9 =./:]{1,8}".prop_map(Segment::Literal),
        "[a-c]".prop_map(Segment::Reference),
        "[a-c]".prop_map(Segment::Foreign),
    ]
}

fn render(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| match s {
            Segment::Literal(text) => text.clone(),
            Segment::Reference(name) => format!("%vault:{}%", name),
            Segment::Foreign(name) => format!("%env.{}%", name),
        })
        .collect()
}

fn full_mapping(values: &[String; 3]) -> SecretMapping {
    ["a", "b", "c"]
        .into_iter()
        .zip(values.iter().map(String::as_str))
        .collect()
}

proptest! {
    #[test]
    fn spans_reproduce_any_input(text in any::<String>()) {
        let rebuilt: String = grammar::spans(&text).map(|s| s.raw()).collect();
        prop_assert_eq!(&rebuilt, &text);
        prop_assert_eq!(grammar::decompose(&text, |_| None::<&str>), text);
    }

    #[test]
    fn percent_heavy_input_never_panics(text in "[%a :]{0,40}") {
        let ns = Namespace::default();
        let mapping: SecretMapping = [("a", "x")].into_iter().collect();
        let _ = resolve(&text, &mapping, &ns);
        let _ = extract(&text, &ns);
    }

    #[test]
    fn no_in_scope_syntax_is_unchanged(
        text in "[a-uw-z%:. ]{0,40}",
        value in "[a-z]{0,6}",
    ) {
        let ns = Namespace::default();
        let mapping: SecretMapping = [("a", value.as_str()), ("b", "y")].into_iter().collect();
        prop_assert!(resolve(&text, &mapping, &ns).is_unchanged());
    }

    #[test]
    fn empty_mapping_is_unchanged(segments in prop::collection::vec(segment(), 0..10)) {
        let text = render(&segments);
        prop_assert!(resolve(&text, &SecretMapping::new(), &Namespace::default()).is_unchanged());
    }

    #[test]
    fn resolving_twice_is_unchanged(
        segments in prop::collection::vec(segment(), 0..10),
        values in proptest::array::uniform3("[a-z0-9 ]{0,8}"),
    ) {
        let ns = Namespace::default();
        let mapping = full_mapping(&values);
        let text = render(&segments);

        let once = resolve(&text, &mapping, &ns).into_text(&text);
        prop_assert!(resolve(&once, &mapping, &ns).is_unchanged());
        prop_assert!(extract(&once, &ns).is_empty());
    }

    #[test]
    fn literals_are_preserved_in_order(segments in prop::collection::vec(segment(), 0..10)) {
        let text = render(&segments);

        let literals: String = grammar::spans(&text)
            .filter_map(|s| match s {
                Span::Literal(l) => Some(l),
                Span::Reference { .. } => None,
            })
            .collect();
        let expected: String = segments
            .iter()
            .filter_map(|s| match s {
                Segment::Literal(l) => Some(l.as_str()),
                _ => None,
            })
            .collect();
        prop_assert_eq!(literals, expected);
    }

    #[test]
    fn extract_matches_generated_references(segments in prop::collection::vec(segment(), 0..10)) {
        let text = render(&segments);
        let found: Vec<String> = extract(&text, &Namespace::default())
            .iter()
            .map(|k| k.name().to_string())
            .collect();
        let expected: Vec<String> = segments
            .iter()
            .filter_map(|s| match s {
                Segment::Reference(name) => Some(name.clone()),
                _ => None,
            })
            .collect();
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn foreign_references_survive_resolution(
        segments in prop::collection::vec(segment(), 0..10),
        values in proptest::array::uniform3("[a-z0-9 ]{0,8}"),
    ) {
        let ns = Namespace::default();
        let text = render(&segments);
        let out = resolve(&text, &full_mapping(&values), &ns).into_text(&text);

        let foreign_in = segments.iter().filter(|s| matches!(s, Segment::Foreign(_))).count();
        let foreign_out = grammar::reference_keys(&out)
            .filter(|k| k.starts_with("env."))
            .count();
        prop_assert!(foreign_out >= foreign_in);
    }
}
