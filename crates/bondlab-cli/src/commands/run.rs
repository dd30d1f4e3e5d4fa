use crate::cli::RunArgs;
use crate::error::{CliError, Result};
use crate::script::{Command, parse_script};
use bondlab::core::models::element::Element;
use bondlab::core::models::ids::AtomId;
use bondlab::engine::config::SimulationConfig;
use bondlab::workflows::session::{Frame, Session};
use tracing::{debug, info, warn};

pub fn run(args: RunArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    if !(args.fps > 0.0) {
        return Err(CliError::Argument(format!(
            "--fps must be positive, got {}",
            args.fps
        )));
    }
    let dt = 1.0 / args.fps;

    let text = std::fs::read_to_string(&args.script)?;
    let commands = parse_script(&text)?;
    info!(
        commands = commands.len(),
        script = %args.script.display(),
        "executing script"
    );

    let mut session = Session::new(config);
    let mut ordinals: Vec<AtomId> = Vec::new();
    let mut last_frame = Frame::default();

    for command in commands {
        match command {
            Command::Spawn { symbol, x, y } => {
                let element = Element::from_symbol(&symbol)?;
                let id = session.spawn(element, x, y);
                debug!(ordinal = ordinals.len(), symbol = %symbol, "spawned");
                ordinals.push(id);
            }
            Command::Move { atom, x, y } => {
                session.move_atom(resolve(&ordinals, atom)?, x, y);
            }
            Command::Drag { atom, x, y } => {
                let id = resolve(&ordinals, atom)?;
                session.begin_drag(id);
                session.drag_to(id, x, y);
            }
            Command::Release { atom } => {
                session.end_drag(resolve(&ordinals, atom)?);
            }
            Command::Cancel { atom } => {
                session.cancel_drag(resolve(&ordinals, atom)?);
            }
            Command::Clear => {
                session.clear();
                // Ordinals stay assigned; later commands on them are
                // engine-level no-ops, like stale drag events in a GUI.
                warn!("scene cleared; earlier atom ordinals are now stale");
            }
            Command::Forces(enabled) => session.set_forces(enabled),
            Command::Step(frames) => {
                for _ in 0..frames {
                    last_frame = session.step(dt);
                }
            }
            Command::Dump => {
                last_frame = session.step(dt);
                print_frame(&ordinals, &last_frame);
            }
        }
    }

    last_frame = session.step(dt);
    println!(
        "final state: {} atom(s), {} bond(s)",
        last_frame.atoms.len(),
        last_frame.bonds.len()
    );
    Ok(())
}

fn resolve(ordinals: &[AtomId], atom: usize) -> Result<AtomId> {
    ordinals.get(atom).copied().ok_or_else(|| {
        CliError::Argument(format!(
            "atom ordinal {} was never spawned ({} atoms so far)",
            atom,
            ordinals.len()
        ))
    })
}

fn ordinal_of(ordinals: &[AtomId], id: AtomId) -> String {
    ordinals
        .iter()
        .position(|&o| o == id)
        .map(|i| i.to_string())
        .unwrap_or_else(|| "?".to_string())
}

fn print_frame(ordinals: &[AtomId], frame: &Frame) {
    println!("atoms: {}", frame.atoms.len());
    for atom in &frame.atoms {
        let electrons: Vec<String> = atom
            .electrons
            .iter()
            .map(|p| format!("({:.1}, {:.1})", p.x, p.y))
            .collect();
        println!(
            "  #{} {} at ({:.1}, {:.1}) electrons [{}]",
            ordinal_of(ordinals, atom.id),
            atom.symbol,
            atom.position.x,
            atom.position.y,
            electrons.join(", ")
        );
    }
    println!("bonds: {}", frame.bonds.len());
    for view in &frame.bonds {
        let (pa, pb) = view.endpoints;
        println!(
            "  #{} e{} -- #{} e{} [({:.1}, {:.1}) - ({:.1}, {:.1})]",
            ordinal_of(ordinals, view.bond.a.atom),
            view.bond.a.index,
            ordinal_of(ordinals, view.bond.b.atom),
            view.bond.b.index,
            pa.x,
            pa.y,
            pb.x,
            pb.y
        );
    }
    if !frame.forces.is_empty() {
        println!("forces: {}", frame.forces.len());
        for arrow in &frame.forces {
            println!(
                "  #{} ({:.1}, {:.1}) -> ({:.1}, {:.1})",
                ordinal_of(ordinals, arrow.atom),
                arrow.origin.x,
                arrow.origin.y,
                arrow.vector.x,
                arrow.vector.y
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_script(text: &str) -> (tempfile::NamedTempFile, PathBuf) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        let path = file.path().to_path_buf();
        (file, path)
    }

    fn args(script: PathBuf) -> RunArgs {
        RunArgs {
            script,
            config: None,
            fps: 60.0,
        }
    }

    #[test]
    fn runs_a_bonding_script_to_completion() {
        let (_file, path) = write_script(
            "spawn H 0 0\nspawn H 20 0\ndrag 0 0 0\nrelease 0\nstep 3\ndump\n",
        );
        assert!(run(args(path)).is_ok());
    }

    #[test]
    fn rejects_unknown_element_symbols() {
        let (_file, path) = write_script("spawn Zz 0 0\n");
        assert!(matches!(run(args(path)), Err(CliError::Element(_))));
    }

    #[test]
    fn rejects_never_spawned_ordinals() {
        let (_file, path) = write_script("move 3 0 0\n");
        assert!(matches!(run(args(path)), Err(CliError::Argument(_))));
    }

    #[test]
    fn stale_ordinals_after_clear_are_tolerated() {
        let (_file, path) = write_script("spawn O 0 0\nclear\nmove 0 5 5\nstep 1\n");
        assert!(run(args(path)).is_ok());
    }

    #[test]
    fn rejects_non_positive_fps() {
        let (_file, path) = write_script("step 1\n");
        let mut bad = args(path);
        bad.fps = 0.0;
        assert!(matches!(run(bad), Err(CliError::Argument(_))));
    }
}
