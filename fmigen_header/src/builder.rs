//! Header synthesis.
//!
//! The generated class derives from `adevs::FMI<T>` and forwards its
//! constructor arguments in the order that base class declares them:
//! model name, guid, resource location, state count, event indicator count,
//! shared object, tolerance, extra event indicators, start time, jacobian flag.

use fmigen_common::naming::{escape_literal, is_valid_identifier, sanitize_model_name};
use fmigen_common::{
    FmiGenError, GenerationResult, ModelMetadata, Result, VariableKind, VariableRecord,
};
use tracing::debug;

const BASE_CLASS: &str = "adevs::FMI";
const BASE_INCLUDES: [&str; 2] = ["\"adevs/adevs.h\"", "\"adevs/fmi.h\""];
const STRING_INCLUDE: &str = "<string>";
const TOLERANCE: &str = "1E-8";
const EXTRA_EVENT_INDICATORS: &str = "0";
const START_TIME: &str = "0.0";

/// Assembles the header text for one model.
#[derive(Debug, Clone)]
pub struct HeaderBuilder<'a> {
    metadata: &'a ModelMetadata,
    class_name: String,
    variables: &'a [VariableRecord],
}

impl<'a> HeaderBuilder<'a> {
    /// Validate the metadata and derive the class name.
    ///
    /// Fails with an output error when the dot-stripped model name is not an
    /// identifier or no numeric type was given.
    pub fn new(metadata: &'a ModelMetadata) -> Result<Self> {
        let class_name = sanitize_model_name(&metadata.model_name);
        if !is_valid_identifier(&class_name) {
            return Err(FmiGenError::output(format!(
                "model name '{}' does not yield a valid class name (got '{class_name}')",
                metadata.model_name
            )));
        }
        if metadata.numeric_type.trim().is_empty() {
            return Err(FmiGenError::output("numeric type is empty"));
        }
        Ok(Self {
            metadata,
            class_name,
            variables: &[],
        })
    }

    /// Set the variables to emit accessors for.
    pub fn variables(mut self, variables: &'a [VariableRecord]) -> Self {
        self.variables = variables;
        self
    }

    /// The dot-stripped model name.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    fn base(&self) -> String {
        format!("{BASE_CLASS}<{}>", self.metadata.numeric_type)
    }

    fn prologue(&self, out: &mut String) {
        let name = &self.class_name;
        out.push_str(&format!("#ifndef {name}_h_\n#define {name}_h_\n"));
        for include in BASE_INCLUDES {
            out.push_str(&format!("#include {include}\n"));
        }
        if self.variables.iter().any(|v| v.kind == VariableKind::String) {
            out.push_str(&format!("#include {STRING_INCLUDE}\n"));
        }
        out.push('\n');
        out.push_str(&format!("class {name}:\n\tpublic {}\n{{\n\tpublic:\n", self.base()));
    }

    fn constructor(&self, out: &mut String) {
        let meta = self.metadata;
        let args = [
            format!("\"{}\"", escape_literal(&meta.model_name)),
            format!("\"{}\"", escape_literal(&meta.guid)),
            format!("\"{}\"", escape_literal(&meta.resource_location)),
            meta.derivative_count.to_string(),
            meta.event_indicator_count.to_string(),
            format!("\"{}\"", escape_literal(&meta.shared_object_location)),
            TOLERANCE.to_string(),
            EXTRA_EVENT_INDICATORS.to_string(),
            START_TIME.to_string(),
            meta.provides_analytic_derivative.to_string(),
        ];
        out.push_str(&format!("\t\t{}():\n\t\t\t{}\n\t\t\t(\n", self.class_name, self.base()));
        out.push_str(
            &args
                .iter()
                .map(|a| format!("\t\t\t\t{a}"))
                .collect::<Vec<_>>()
                .join(",\n"),
        );
        out.push_str("\n\t\t\t)\n\t\t{\n\t\t}\n");
    }

    fn accessors(var: &VariableRecord, out: &mut String) {
        let ty = var.kind.cpp_type();
        let suffix = var.kind.accessor_suffix();
        let (name, index) = (&var.name, var.index);
        out.push_str(&format!(
            "\t\t{ty} get_{name}() {{ return get_{suffix}({index}); }}\n"
        ));
        out.push_str(&format!(
            "\t\tvoid set_{name}({ty} val) {{ set_{suffix}({index},val); }}\n"
        ));
    }

    /// Emit the complete header.
    pub fn build(&self) -> GenerationResult {
        let mut out = String::new();
        self.prologue(&mut out);
        self.constructor(&mut out);
        for var in self.variables {
            Self::accessors(var, &mut out);
        }
        out.push_str("};\n\n#endif");
        debug!(
            "Synthesized {} ({} accessor pairs, {} bytes)",
            self.class_name,
            self.variables.len(),
            out.len()
        );
        GenerationResult::new(out)
    }
}

/// Synthesize a header for `metadata` with one accessor pair per variable.
pub fn synthesize(metadata: &ModelMetadata, variables: &[VariableRecord]) -> Result<GenerationResult> {
    Ok(HeaderBuilder::new(metadata)?.variables(variables).build())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(name: &str) -> ModelMetadata {
        ModelMetadata {
            model_name: name.to_string(),
            guid: "{g}".to_string(),
            resource_location: "res".to_string(),
            shared_object_location: "lib.so".to_string(),
            numeric_type: "double".to_string(),
            event_indicator_count: 2,
            derivative_count: 0,
            provides_analytic_derivative: false,
        }
    }

    #[test]
    fn test_class_name_strips_dots() {
        let meta = metadata("Foo.Bar");
        let header = synthesize(&meta, &[]).unwrap();
        let text = header.as_str();
        assert!(text.starts_with("#ifndef FooBar_h_\n#define FooBar_h_\n"));
        assert!(text.contains("class FooBar:\n\tpublic adevs::FMI<double>\n"));
        assert!(text.contains("\t\tFooBar():\n"));
        assert!(text.ends_with("};\n\n#endif"));
    }

    #[test]
    fn test_invalid_class_name() {
        let meta = metadata("3-phase");
        assert!(matches!(
            HeaderBuilder::new(&meta),
            Err(FmiGenError::Output(_))
        ));
    }

    #[test]
    fn test_empty_numeric_type() {
        let mut meta = metadata("M");
        meta.numeric_type = String::new();
        assert!(matches!(synthesize(&meta, &[]), Err(FmiGenError::Output(_))));
    }

    #[test]
    fn test_constructor_argument_order() {
        let mut meta = metadata("M");
        meta.derivative_count = 3;
        meta.provides_analytic_derivative = true;
        let text = synthesize(&meta, &[]).unwrap().into_string();
        let expected = "\t\t\t(\n\
                        \t\t\t\t\"M\",\n\
                        \t\t\t\t\"{g}\",\n\
                        \t\t\t\t\"res\",\n\
                        \t\t\t\t3,\n\
                        \t\t\t\t2,\n\
                        \t\t\t\t\"lib.so\",\n\
                        \t\t\t\t1E-8,\n\
                        \t\t\t\t0,\n\
                        \t\t\t\t0.0,\n\
                        \t\t\t\ttrue\n\
                        \t\t\t)\n";
        assert!(text.contains(expected), "{text}");
    }

    #[test]
    fn test_control_chars_in_literals_stay_on_one_line() {
        let mut meta = metadata("M");
        meta.guid = "a\nb".to_string();
        meta.resource_location = "file:///r\tx".to_string();
        let text = synthesize(&meta, &[]).unwrap().into_string();
        assert!(text.contains("\t\t\t\t\"a\\nb\",\n"), "{text}");
        assert!(text.contains("\t\t\t\t\"file:///r\\tx\",\n"), "{text}");
        for line in text.lines().filter(|l| l.contains('"')) {
            assert_eq!(line.matches('"').count() % 2, 0, "unterminated literal: {line}");
        }
    }

    #[test]
    fn test_unknown_kind_accessor() {
        let meta = metadata("M");
        let vars = [VariableRecord::new("tick", 9, VariableKind::Unknown("Clock".into()))];
        let text = synthesize(&meta, &vars).unwrap().into_string();
        assert!(text.contains("\t\tClock get_tick() { return get_Clock(9); }\n"));
        assert!(text.contains("\t\tvoid set_tick(Clock val) { set_Clock(9,val); }\n"));
    }
}
