//! CLI route: run options and run context. Dispatches to fingerprinting, persistence, and presentation.

use crate::config::{ConfigLoader, ShafolderConfig};
use crate::error::ShafolderError;
use crate::fingerprint::builder::FingerprintBuilder;
use crate::fingerprint::format::{Formatter, Mode};
use crate::fingerprint::mnemonic::Wordlist;
use crate::persist::{write_manifest, CopyWriter};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::cli::parse::{Cli, OutputFormat};
use crate::cli::presentation::{format_report_json, format_report_text, FingerprintReport};

/// What a single invocation should do
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub path: PathBuf,
    pub mode: Mode,
    pub verbose: bool,
    pub terse: bool,
    pub make_copy: bool,
    pub manifest: bool,
    pub format: OutputFormat,
}

impl RunOptions {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            mode: Mode::Hex,
            verbose: false,
            terse: false,
            make_copy: false,
            manifest: false,
            format: OutputFormat::Text,
        }
    }

    /// Reject option combinations that cannot both be honored
    pub fn validate(&self) -> Result<(), ShafolderError> {
        if self.manifest && self.make_copy {
            return Err(ShafolderError::Config(
                "--manifest cannot be combined with --makecopy".to_string(),
            ));
        }
        Ok(())
    }
}

impl From<&Cli> for RunOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            path: cli.path.clone(),
            mode: Mode::from_bip39_flag(cli.bip39),
            verbose: cli.verbose,
            terse: cli.terse,
            make_copy: cli.makecopy,
            manifest: cli.manifest,
            format: cli.format,
        }
    }
}

/// Runtime context for CLI execution: loaded configuration and a validated wordlist.
pub struct RunContext {
    config: ShafolderConfig,
    wordlist: Wordlist,
}

impl RunContext {
    /// Load configuration (optionally from an explicit file) and the wordlist
    pub fn new(config_path: Option<&Path>) -> Result<Self, ShafolderError> {
        let config = ConfigLoader::load(config_path)?;
        Self::with_config(config)
    }

    /// Build from an already loaded configuration
    ///
    /// The wordlist is validated here, before any file is read.
    pub fn with_config(config: ShafolderConfig) -> Result<Self, ShafolderError> {
        config.validate()?;
        let wordlist = config.mnemonic.load_wordlist()?;
        Ok(Self { config, wordlist })
    }

    /// Paths this tool writes to, kept out of every directory walk
    ///
    /// Excluded on every run and in either mode, so a fingerprint never depends
    /// on what an earlier run wrote.
    fn output_paths(&self) -> Vec<PathBuf> {
        let output = &self.config.output;
        vec![
            output.manifest_path(),
            output.copy_dir_for(Mode::Hex),
            output.copy_dir_for(Mode::Mnemonic),
        ]
    }

    /// Run one fingerprint and return the text to print on stdout
    #[instrument(skip(self, options), fields(path = %options.path.display()))]
    pub fn execute(&self, options: &RunOptions) -> Result<String, ShafolderError> {
        options.validate()?;
        let formatter = Formatter::new(options.mode, self.wordlist.clone());

        let fingerprint = FingerprintBuilder::new(options.path.clone())
            .with_walker_config(self.config.walk.clone())
            .with_exclusions(self.output_paths())
            .build()?;

        let mut report = FingerprintReport::build(&fingerprint, &formatter, options.verbose);

        if options.make_copy {
            let out_dir = self.config.output.copy_dir_for(options.mode);
            let created = CopyWriter::new(out_dir, &formatter).write(&fingerprint)?;
            report.copy = Some(created);
        }

        if options.manifest {
            let manifest = write_manifest(&fingerprint, &self.config.output.manifest_path())?;
            report.manifest = Some(manifest);
        }

        info!(tag = %report.tag, files = report.files, "Run completed");

        match options.format {
            OutputFormat::Text => Ok(format_report_text(
                &report,
                options.terse,
                self.config.output.color,
            )),
            OutputFormat::Json => format_report_json(&report),
        }
    }
}
