use std::path::PathBuf;

use enumgen_compiler::{GenerationConfig, generate_file};

use super::input::{load_extraction, select_enums};
use super::{CommandError, exit_with};

pub struct GenerateArgs {
    pub input: Option<PathBuf>,
    pub types: Vec<String>,
    pub config: GenerationConfig,
    pub output: Option<PathBuf>,
    pub invocation: String,
}

pub fn run(args: GenerateArgs) {
    match execute(&args) {
        Ok(Some(code)) => print!("{}", code),
        Ok(None) => {}
        Err(err) => exit_with(err),
    }
}

/// Generate the file; returns the code when it should go to stdout.
///
/// The output file is only touched once every enum generated cleanly.
pub(crate) fn execute(args: &GenerateArgs) -> Result<Option<String>, CommandError> {
    let extraction = load_extraction(args.input.as_deref())?;
    let enums = select_enums(&extraction, &args.types)?;
    let code = generate_file(&extraction.package, &enums, &args.config, &args.invocation)?;

    let Some(path) = &args.output else {
        return Ok(Some(code));
    };
    std::fs::write(path, &code).map_err(|source| CommandError::Write {
        path: path.clone(),
        source,
    })?;
    tracing::info!(path = %path.display(), enums = enums.len(), "wrote generated file");
    Ok(None)
}
