//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::commands;
use gtgramtools::config::TestOptions;
use gtgramtools::output::OutputStyle;

/// gtgramtool - Test GiellaLT grammar checkers
#[derive(Parser, Debug)]
#[command(
    name = "gtgramtool",
    version,
    about = "Tool for working with GiellaLT grammars",
    long_about = "Run marked up test sentences through a GiellaLT grammar checker \
                  and compare what it finds with the markup.\n\n\
                  Exit codes: 0 all tests pass, 1 failures or errors, \
                  5 unknown variant, 99 duplicate tests removed."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Test the grammars
    Test {
        #[command(flatten)]
        args: TestArgs,

        #[command(subcommand)]
        target: TestTarget,
    },

    /// Build a grammar checker archive without development pipelines
    BuildArchive {
        /// The pipespec.xml to package
        pipespec: PathBuf,

        /// The .zcheck archive to write
        archive: PathBuf,
    },

    /// Compare divvun-checker and divvun-runtime on YAML test files
    CompareEngines {
        /// Directory with YAML test files; the engines are looked up in its parent
        directory: PathBuf,
    },
}

/// Options for `test`
#[derive(Args, Debug)]
pub struct TestArgs {
    /// Colours the output
    #[arg(short, long)]
    pub colour: bool,

    /// Desired output style
    #[arg(short, long, default_value = "normal", value_parser = ["normal", "compact", "terse", "final"])]
    pub output: String,

    /// Hide all output; exit code only
    #[arg(short = 'q', long)]
    pub silent: bool,

    /// Suppresses passes to make finding fails easier
    #[arg(short = 'p', long)]
    pub hide_passes: bool,

    /// Path to the pipespec.xml or .zcheck file, for out of tree builds
    #[arg(short, long)]
    pub spec: Option<PathBuf>,

    /// Which variant should be used
    #[arg(short = 'V', long)]
    pub variant: Option<String>,

    /// Move passing tests from FAIL files to PASS files and vice versa
    #[arg(short, long)]
    pub move_tests: bool,

    /// Remove duplicate tests from the test files and stop
    #[arg(long)]
    pub remove_dupes: bool,

    /// Check with divvun-runtime instead of divvun-checker
    #[arg(long)]
    pub use_runtime: bool,
}

#[derive(Subcommand, Debug)]
pub enum TestTarget {
    /// Test YAML files
    Yaml {
        /// YAML files, or directories to search for them
        #[arg(required = true)]
        targets: Vec<PathBuf>,
    },

    /// Test XML goldstandard corpus files
    Xml {
        /// Pretend as if typos are correct
        #[arg(long)]
        ignore_typos: bool,

        /// XML files, or directories to search for them
        #[arg(required = true)]
        targets: Vec<PathBuf>,
    },
}

impl TestArgs {
    fn into_options(self) -> anyhow::Result<TestOptions> {
        let output: OutputStyle = self.output.parse().map_err(anyhow::Error::msg)?;
        Ok(TestOptions {
            colour: self.colour,
            output,
            silent: self.silent,
            hide_passes: self.hide_passes,
            spec: self.spec,
            variant: self.variant,
            move_tests: self.move_tests,
            remove_dupes: self.remove_dupes,
            use_runtime: self.use_runtime,
        })
    }
}

/// Run the CLI, returning the process exit code
pub fn run() -> anyhow::Result<u8> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    match cli.command {
        Command::Test { args, target } => {
            let options = args.into_options()?;
            colored::control::set_override(options.colour);
            match target {
                TestTarget::Yaml { targets } => commands::test_yaml(&options, &targets),
                TestTarget::Xml {
                    ignore_typos,
                    targets,
                } => commands::test_xml(&options, ignore_typos, &targets),
            }
        },
        Command::BuildArchive { pipespec, archive } => commands::build_archive(&pipespec, &archive),
        Command::CompareEngines { directory } => commands::compare_engines(&directory),
    }
}
