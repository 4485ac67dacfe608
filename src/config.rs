//! Test run configuration
//!
//! Command line options are combined with the `Config` block of each YAML
//! test file. Options given on the command line win.

use std::path::{Path, PathBuf};

use crate::adapters::checker::runtime::DRB_EXTENSION;
use crate::adapters::checker::{DivvunChecker, DivvunRuntime};
use crate::adapters::pipespec::{PipespecError, resolve_variant};
use crate::adapters::yaml::YamlTestFile;
use crate::core::ports::GrammarChecker;
use crate::output::OutputStyle;

/// Options shared by the `test` subcommands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestOptions {
    /// Colour the report
    pub colour: bool,
    /// Report style
    pub output: OutputStyle,
    /// Print nothing, overriding `output`
    pub silent: bool,
    /// Leave passing results out of the report
    pub hide_passes: bool,
    /// Pipespec or archive overriding the test file's
    pub spec: Option<PathBuf>,
    /// Variant overriding the test file's
    pub variant: Option<String>,
    /// Move tests between PASS and FAIL files
    pub move_tests: bool,
    /// Remove duplicated tests and stop
    pub remove_dupes: bool,
    /// Check with `divvun-runtime` instead of `divvun-checker`
    pub use_runtime: bool,
}

impl TestOptions {
    /// The report style, taking `silent` into account
    #[must_use]
    pub const fn style(&self) -> OutputStyle {
        if self.silent {
            OutputStyle::Silent
        } else {
            self.output
        }
    }
}

/// The grammar checker engine to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Engine {
    /// `divvun-checker` with a pipespec or archive and a variant
    DivvunChecker {
        /// Pipespec or `.zcheck` archive
        spec: PathBuf,
        /// Requested variant; `None` selects the default pipe
        variant: Option<String>,
    },
    /// `divvun-runtime` with a `.drb` bundle
    DivvunRuntime {
        /// The bundle
        bundle: PathBuf,
    },
}

impl Engine {
    /// Pick the engine for a spec
    ///
    /// The runtime loads the `.drb` bundle next to the spec.
    #[must_use]
    pub fn new(spec: &Path, variant: Option<String>, use_runtime: bool) -> Self {
        if use_runtime {
            Self::DivvunRuntime {
                bundle: spec.with_extension(DRB_EXTENSION),
            }
        } else {
            Self::DivvunChecker {
                spec: spec.to_path_buf(),
                variant,
            }
        }
    }

    /// Build the checker, resolving the variant against the pipespec
    pub fn checker(&self) -> Result<Box<dyn GrammarChecker>, PipespecError> {
        match self {
            Self::DivvunChecker { spec, variant } => {
                let variant = resolve_variant(spec, variant.as_deref())?;
                Ok(Box::new(DivvunChecker::new(spec, &variant)))
            },
            Self::DivvunRuntime { bundle } => Ok(Box::new(DivvunRuntime::new(bundle))),
        }
    }
}

/// Everything needed to run one YAML test file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestConfig {
    /// Report style
    pub style: OutputStyle,
    /// Leave passing results out of the report
    pub hide_passes: bool,
    /// Move tests between PASS and FAIL files afterwards
    pub move_tests: bool,
    /// The engine to check with
    pub engine: Engine,
    /// The test file
    pub test_file: PathBuf,
    /// The marked up test sentences
    pub tests: Vec<String>,
}

impl TestConfig {
    /// Combine command line options with a loaded YAML test file
    #[must_use]
    pub fn from_yaml(options: &TestOptions, test_file: &Path, yaml: YamlTestFile) -> Self {
        let spec = options.spec.clone().unwrap_or(yaml.spec);
        let variant = options.variant.clone().unwrap_or(yaml.variant);

        Self {
            style: options.style(),
            hide_passes: options.hide_passes,
            move_tests: options.move_tests,
            engine: Engine::new(&spec, Some(variant), options.use_runtime),
            test_file: test_file.to_path_buf(),
            tests: yaml.tests,
        }
    }
}
