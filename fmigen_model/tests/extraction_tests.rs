#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use fmigen_common::naming::normalize_variable_name;
use fmigen_common::{FmiGenError, GenerateConfig, SchemaCompat, VariableKind};
use fmigen_model::{
    DocumentLoader, MetadataExtractor, ModelDocument, XmlDocumentLoader, XmlElement,
    extract_variables,
};
use rstest::rstest;

fn init_test_logger() {
    static INIT: OnceLock<()> = OnceLock::new();
    let _ = INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn load(name: &str) -> ModelDocument {
    XmlDocumentLoader::new()
        .load(&fixture(name))
        .expect("fixture should parse")
}

#[test]
fn test_bouncing_ball_metadata() {
    init_test_logger();
    let doc = load("bouncing_ball.xml");
    let config = GenerateConfig::new(fixture("bouncing_ball.xml"))
        .with_numeric_type("double")
        .with_shared_object_location("binaries/linux64/BouncingBall.so")
        .with_resource_location("file:///tmp/resources");
    let meta = MetadataExtractor::new(&doc, SchemaCompat::Strict)
        .extract(&config)
        .unwrap();

    assert_eq!(meta.model_name, "Examples.BouncingBall");
    assert_eq!(meta.guid, "{8c4e810f-3df3-4a00-8276-176fa3c9f003}");
    assert_eq!(meta.event_indicator_count, 1);
    assert_eq!(meta.derivative_count, 2);
    assert!(meta.provides_analytic_derivative);
    assert_eq!(meta.numeric_type, "double");
    assert_eq!(meta.shared_object_location, "binaries/linux64/BouncingBall.so");
    assert_eq!(meta.resource_location, "file:///tmp/resources");
}

#[test]
fn test_bouncing_ball_variables() {
    init_test_logger();
    let doc = load("bouncing_ball.xml");
    let set = extract_variables(&doc).unwrap();

    let names: Vec<_> = set.variables.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["h", "der_h_", "v", "der_v_", "e", "bounces", "impact", "mode"]
    );
    assert!(set.diagnostics.is_empty());
    assert!(!set.uses_strings());

    let mode = &set.variables[7];
    assert_eq!(mode.kind, VariableKind::Integer);
    assert_eq!(mode.index, 1);
    assert_eq!(mode.causality.as_deref(), Some("parameter"));
    assert_eq!(mode.variability.as_deref(), Some("fixed"));
}

#[test]
fn test_legacy_document_lenient() {
    init_test_logger();
    let doc = load("legacy_strings.xml");
    let extractor = MetadataExtractor::new(&doc, SchemaCompat::Lenient);
    assert_eq!(extractor.event_indicator_count().unwrap(), 0);
    assert_eq!(extractor.derivative_count().unwrap(), 0);
    assert!(!extractor.provides_analytic_derivative().unwrap());

    let set = extract_variables(&doc).unwrap();
    assert!(set.uses_strings());
    assert_eq!(set.len(), 3);
    assert_eq!(set.dropped, 1);
    assert_eq!(set.variables[1].name, "arr_1_");
    assert_eq!(set.variables[1].kind, VariableKind::Real);
    assert_eq!(set.variables[1].index, 1);
    assert_eq!(set.diagnostics.len(), 1);
    assert_eq!(set.variables[2].kind, VariableKind::Unknown("Clock".into()));
}

#[test]
fn test_legacy_document_strict() {
    let doc = load("legacy_strings.xml");
    let config = GenerateConfig::new(fixture("legacy_strings.xml"));
    let result = MetadataExtractor::new(&doc, SchemaCompat::Strict).extract(&config);
    assert!(matches!(result, Err(FmiGenError::Schema(_))));
}

#[test]
fn test_missing_model_name() {
    let doc = load("missing_model_name.xml");
    let result = MetadataExtractor::new(&doc, SchemaCompat::Lenient).model_name();
    assert!(matches!(result, Err(FmiGenError::Schema(_))));
}

#[rstest]
#[case("malformed.xml")]
#[case("no_such_file.xml")]
fn test_unloadable_inputs(#[case] name: &str) {
    let result = XmlDocumentLoader::new().load(&fixture(name));
    assert!(matches!(result, Err(FmiGenError::Parse { .. })));
}

#[test]
fn test_extraction_is_deterministic() {
    let first = extract_variables(&load("bouncing_ball.xml")).unwrap();
    let second = extract_variables(&load("bouncing_ball.xml")).unwrap();
    assert_eq!(first, second);
}

// Property-based tests
#[cfg(test)]
mod property_tests {
    use super::*;
    use quickcheck::{Arbitrary, Gen, quickcheck};

    /// A list of variable names drawn from a small alphabet so collisions are common.
    #[derive(Clone, Debug)]
    struct VariableNames(Vec<String>);

    impl Arbitrary for VariableNames {
        fn arbitrary(g: &mut Gen) -> Self {
            let alphabet = ['a', 'b', '.', ',', '[', ']', '(', ')', '_'];
            let count = usize::arbitrary(g) % 20;
            let names = (0..count)
                .map(|_| {
                    let len = usize::arbitrary(g) % 4 + 1;
                    (0..len).map(|_| *g.choose(&alphabet).unwrap()).collect()
                })
                .collect();
            Self(names)
        }
    }

    fn document(names: &[String]) -> ModelDocument {
        let mut list = XmlElement::new("ModelVariables");
        for (i, name) in names.iter().enumerate() {
            list = list.with_child(
                XmlElement::new("ScalarVariable")
                    .with_attr("name", name.as_str())
                    .with_attr("valueReference", i.to_string())
                    .with_child(XmlElement::new("Real")),
            );
        }
        ModelDocument::new(XmlElement::new("fmiModelDescription").with_child(list))
    }

    quickcheck! {
        fn prop_length_is_distinct_normalized_names(names: VariableNames) -> bool {
            let distinct: HashSet<String> =
                names.0.iter().map(|n| normalize_variable_name(n)).collect();
            let set = extract_variables(&document(&names.0)).unwrap();
            set.len() == distinct.len() && set.len() + set.dropped == names.0.len()
        }

        fn prop_first_occurrence_keeps_its_index(names: VariableNames) -> bool {
            let set = extract_variables(&document(&names.0)).unwrap();
            set.variables.iter().all(|v| {
                names
                    .0
                    .iter()
                    .position(|n| normalize_variable_name(n) == v.name)
                    .map(|i| i as u32)
                    == Some(v.index)
            })
        }
    }
}
