use crate::cli::BuildArgs;
use crate::config::{resolve_factory_config, resolve_protocol};
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use alchemist::{
    core::io::{SystemFile, TomlFile},
    engine::progress::ProgressReporter,
    engine::protocol::Protocol,
    workflows,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const PROTOCOL_FILE_NAME: &str = "protocol.toml";

pub fn run(args: BuildArgs) -> Result<()> {
    let config = resolve_factory_config(&args)?;
    let protocol = resolve_protocol(&args)?;

    info!("Loading reference system from {:?}", &args.system);
    let system = TomlFile::read_from_path(&args.system).map_err(|e| CliError::FileParsing {
        path: args.system.clone(),
        source: e.into(),
    })?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Building {} alchemical state(s) for ligand atoms {}...",
        protocol.states.len(),
        args.ligand
    );
    let result = workflows::perturb::run(
        &system,
        args.ligand.indices(),
        &protocol.states,
        config,
        &reporter,
    )?;

    if result.is_empty() {
        warn!("Protocol produced no intermediates.");
        println!("Warning: the protocol contains no states. Nothing was written.");
        return Ok(());
    }

    std::fs::create_dir_all(&args.output)?;
    for (index, (state, intermediate)) in result.iter().enumerate() {
        let path = state_path(&args.output, index);
        info!("Writing state {} ({}) to {:?}", index, state, &path);
        TomlFile::write_to_path(intermediate, &path).map_err(|source| CliError::FileWriting {
            path: path.clone(),
            source,
        })?;
    }

    let protocol_path = args.output.join(PROTOCOL_FILE_NAME);
    write_protocol(&protocol, &protocol_path)?;

    println!(
        "✓ Wrote {} system(s) and {} to: {}",
        result.len(),
        PROTOCOL_FILE_NAME,
        args.output.display()
    );
    Ok(())
}

fn state_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("state-{:03}.toml", index))
}

fn write_protocol(protocol: &Protocol, path: &Path) -> Result<()> {
    let document = toml::to_string(protocol).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    std::fs::write(path, document)?;
    Ok(())
}
