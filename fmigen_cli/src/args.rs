//! Command-line arguments for fmigen.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use fmigen_common::{GenerateConfig, SchemaCompat};

/// Flags spelled with a single dash and several letters, rewritten to their
/// double-dash form before clap sees them.
const LEGACY_LONG_FLAGS: [&str; 3] = ["-type", "-strict", "-list"];

/// fmigen - Generate a typed FMI wrapper header from a model description
#[derive(Parser, Debug)]
#[command(name = "fmigen")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Example: fmigen -x modelDescription.xml -type double -f model.so -r file:///resources -o Model")]
pub struct Args {
    /// Path to the model description XML
    #[arg(short = 'x', long = "xml")]
    pub xml: PathBuf,

    /// Numeric type used as the base-class template argument
    #[arg(long = "type", value_name = "TYPE", required_unless_present = "list")]
    pub numeric_type: Option<String>,

    /// Shared object location embedded in the constructor call
    #[arg(short = 'f', long = "shared-object", required_unless_present = "list")]
    pub shared_object: Option<String>,

    /// Resource location embedded in the constructor call
    #[arg(short = 'r', long = "resources", required_unless_present = "list")]
    pub resources: Option<String>,

    /// Output file stem; `.h` is appended [default: input path without `.xml`]
    #[arg(short = 'o', long = "output")]
    pub output: Option<String>,

    /// Treat missing numberOfEventIndicators or ModelStructure as errors
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Print the extracted variables as JSON instead of writing a header
    #[arg(long, default_value_t = false)]
    pub list: bool,

    /// Enable debug logging
    #[arg(short = 'v', long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Parse arguments, accepting the single-dash long flags.
    pub fn parse_normalized<I>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = OsString>,
    {
        Self::try_parse_from(normalize_flags(args))
    }

    /// Convert command-line arguments into a generation configuration
    pub fn to_config(&self) -> GenerateConfig {
        let compat = if self.strict {
            SchemaCompat::Strict
        } else {
            SchemaCompat::Lenient
        };

        GenerateConfig::new(self.xml.clone())
            .with_numeric_type(self.numeric_type.clone().unwrap_or_default())
            .with_shared_object_location(self.shared_object.clone().unwrap_or_default())
            .with_resource_location(self.resources.clone().unwrap_or_default())
            .with_output_stem(self.output.clone())
            .with_compat(compat)
    }
}

/// Rewrite `-type`, `-strict` and `-list` to `--type`, `--strict`, `--list`.
pub fn normalize_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some(flag) if LEGACY_LONG_FLAGS.contains(&flag) => OsString::from(format!("-{flag}")),
            _ => arg,
        })
        .collect()
}
