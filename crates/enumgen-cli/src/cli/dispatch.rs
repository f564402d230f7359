//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use enumgen_compiler::{GenerationConfig, TransformMode};

use crate::commands::generate::GenerateArgs;
use crate::commands::inspect::{InspectArgs, ReportFormat};

/// Flags shared by `generate` and `inspect`.
#[derive(Debug, Clone, PartialEq)]
pub struct NamingParams {
    pub input: Option<PathBuf>,
    pub types: Vec<String>,
    pub trim_prefix: String,
    pub add_prefix: String,
    pub transform: TransformMode,
    pub ignore_case: bool,
    pub allow_numeric: bool,
    pub sparse_ratio: Option<f64>,
}

impl NamingParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: m.get_one::<PathBuf>("input").cloned(),
            types: m
                .get_many::<String>("types")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            trim_prefix: m.get_one::<String>("trim_prefix").cloned().unwrap_or_default(),
            add_prefix: m.get_one::<String>("add_prefix").cloned().unwrap_or_default(),
            transform: m
                .get_one::<TransformMode>("transform")
                .copied()
                .unwrap_or_default(),
            ignore_case: m.get_flag("ignore_case"),
            allow_numeric: m.get_flag("allow_numeric"),
            sparse_ratio: m.get_one::<f64>("sparse_ratio").copied(),
        }
    }

    fn config(&self) -> GenerationConfig {
        let config = GenerationConfig::new()
            .trim_prefix(self.trim_prefix.as_str())
            .add_prefix(self.add_prefix.as_str())
            .transform(self.transform)
            .ignore_case(self.ignore_case)
            .allow_numeric(self.allow_numeric);
        match self.sparse_ratio {
            Some(ratio) => config.sparse_ratio(ratio),
            None => config,
        }
    }

    fn push_flags(&self, out: &mut Vec<String>) {
        for name in &self.types {
            out.push(format!("--type={name}"));
        }
        if !self.trim_prefix.is_empty() {
            out.push(format!("--trim-prefix={}", self.trim_prefix));
        }
        if !self.add_prefix.is_empty() {
            out.push(format!("--add-prefix={}", self.add_prefix));
        }
        if self.transform != TransformMode::None {
            out.push(format!("--transform={}", self.transform));
        }
        if self.ignore_case {
            out.push("--ignore-case".to_string());
        }
        if self.allow_numeric {
            out.push("--allow-numeric".to_string());
        }
        if let Some(ratio) = self.sparse_ratio {
            out.push(format!("--sparse-ratio={ratio}"));
        }
    }
}

pub struct GenerateParams {
    pub naming: NamingParams,
    pub json: bool,
    pub text: bool,
    pub yaml: bool,
    pub sql: bool,
    pub output: Option<PathBuf>,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            naming: NamingParams::from_matches(m),
            json: m.get_flag("json"),
            text: m.get_flag("text"),
            yaml: m.get_flag("yaml"),
            sql: m.get_flag("sql"),
            output: m.get_one::<PathBuf>("output").cloned(),
        }
    }

    /// Command line recorded in the generated file header.
    ///
    /// Only flags that affect the output are listed; input and output
    /// paths are left out so the header is stable across checkouts.
    pub fn invocation(&self) -> String {
        let mut parts = vec!["enumgen".to_string(), "generate".to_string()];
        self.naming.push_flags(&mut parts);
        for (enabled, flag) in [
            (self.json, "--json"),
            (self.text, "--text"),
            (self.yaml, "--yaml"),
            (self.sql, "--sql"),
        ] {
            if enabled {
                parts.push(flag.to_string());
            }
        }
        parts.join(" ")
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        let invocation = p.invocation();
        let config = p
            .naming
            .config()
            .json(p.json)
            .text(p.text)
            .yaml(p.yaml)
            .sql(p.sql);
        Self {
            input: p.naming.input,
            types: p.naming.types,
            config,
            output: p.output,
            invocation,
        }
    }
}

pub struct InspectParams {
    pub naming: NamingParams,
    pub parse: Vec<String>,
    pub format: ReportFormat,
}

impl InspectParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let format = match m.get_one::<String>("format").map(String::as_str) {
            Some("json") => ReportFormat::Json,
            _ => ReportFormat::Text,
        };
        Self {
            naming: NamingParams::from_matches(m),
            parse: m
                .get_many::<String>("parse")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            format,
        }
    }
}

impl From<InspectParams> for InspectArgs {
    fn from(p: InspectParams) -> Self {
        let config = p.naming.config();
        Self {
            input: p.naming.input,
            types: p.naming.types,
            config,
            parse: p.parse,
            format: p.format,
        }
    }
}
