use crate::cli::ProtocolArgs;
use crate::error::{CliError, Result};
use alchemist::engine::protocol::Protocol;
use alchemist::engine::state::AlchemicalState;
use tracing::info;

pub fn run(args: ProtocolArgs) -> Result<()> {
    info!("Rendering protocol preset '{}'.", args.preset);
    let protocol = Protocol::from_preset(args.preset);

    let output = if args.toml {
        toml::to_string(&protocol).map_err(|e| CliError::Other(e.into()))?
    } else {
        println!("{} ({})", args.preset, args.preset.description());
        render_table(&protocol.states)
    };
    print!("{}", output);
    Ok(())
}

fn render_table(states: &[AlchemicalState]) -> String {
    let header = format!(
        "{:>5}  {:>10}  {:>14}  {:>13}  {:>8}\n",
        "state", "restraints", "electrostatics", "lennard-jones", "torsions"
    );
    states
        .iter()
        .enumerate()
        .map(|(index, state)| {
            format!(
                "{:>5}  {:>10.3}  {:>14.3}  {:>13.3}  {:>8.3}\n",
                index,
                state.relative_restraints(),
                state.ligand_electrostatics(),
                state.ligand_lennard_jones(),
                state.ligand_torsions()
            )
        })
        .fold(header, |mut table, row| {
            table.push_str(&row);
            table
        })
}
