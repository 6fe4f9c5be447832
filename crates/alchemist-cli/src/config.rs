use crate::cli::BuildArgs;
use crate::error::{CliError, Result};
use alchemist::engine::config::FactoryConfig;
use alchemist::engine::protocol::Protocol;
use tracing::{debug, info};

/// Loads the factory configuration (file or defaults) and applies command-line overrides.
pub fn resolve_factory_config(args: &BuildArgs) -> Result<FactoryConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading factory configuration from {:?}", path);
            FactoryConfig::load(path)?
        }
        None => {
            debug!("No configuration file given. Using factory defaults.");
            FactoryConfig::default()
        }
    };

    if let Some(alpha) = args.softcore_alpha {
        debug!("Overriding softcore alpha: {} -> {}", config.softcore.alpha, alpha);
        config.softcore.alpha = alpha;
    }
    if let Some(model) = args.sasa_model {
        config.gb.sasa_model = model.into();
    }
    for kind in &args.pass_through {
        if !config.passes_through(kind) {
            config.pass_through_kinds.push(kind.clone());
        }
    }

    config.validate()?;
    Ok(config)
}

/// Resolves the lambda schedule from either a preset or a custom protocol file.
pub fn resolve_protocol(args: &BuildArgs) -> Result<Protocol> {
    if let Some(preset) = args.protocol.protocol {
        info!("Using protocol preset '{}'.", preset);
        return Ok(Protocol::from_preset(preset));
    }

    let Some(path) = &args.protocol.protocol_file else {
        return Err(CliError::Argument(
            "Either --protocol or --protocol-file must be given.".to_string(),
        ));
    };

    info!("Loading custom protocol from {:?}", path);
    let content = std::fs::read_to_string(path)?;
    let parsed: Protocol = toml::from_str(&content).map_err(|e| CliError::FileParsing {
        path: path.clone(),
        source: e.into(),
    })?;
    let protocol = match parsed.preset {
        Some(preset) if parsed.states.is_empty() => Protocol::from_preset(preset),
        _ => Protocol {
            preset: parsed.preset,
            ..Protocol::custom(parsed.states)?
        },
    };
    Ok(protocol)
}
