//! One function per subcommand.

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, instrument};

use crate::builder::{parse_value, ManualBuilder};
use crate::cli::args::{Cli, Commands, KindArg, TreeFile};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output::{self, StepPrinter};
use crate::codec;
use crate::config::PlaybackConfig;
use crate::discipline::TreeKind;
use crate::node::{Link, Side};
use crate::session::Session;
use crate::traversal::{SearchAlgorithm, TraversalKind};

/// Runs whatever `cli` asks for.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let config = cli.playback.config();
    match &cli.command {
        Commands::Build {
            kind,
            count,
            min,
            max,
            seed,
            out,
        } => build(config, *kind, *count, *min, *max, *seed, out.as_deref()),
        Commands::Manual {
            kind,
            root,
            children,
            swap,
            out,
        } => manual(config, *kind, root, children, swap, out.as_deref()),
        Commands::Show { tree } => show(config, tree),
        Commands::Insert { tree, value, out } => insert(config, tree, value, out.as_deref()),
        Commands::Delete { tree, value, out } => delete(config, tree, value, out.as_deref()),
        Commands::Traverse { order, tree } => traverse(config, tree, (*order).into()),
        Commands::Search {
            algorithm,
            target,
            tree,
        } => search(config, tree, (*algorithm).into(), target),
        Commands::ExportLevels { file } => export_levels(file),
        Commands::ImportLevels { file, out } => import_levels(file, out.as_deref()),
    }
}

#[instrument(skip(config))]
fn build(
    config: PlaybackConfig,
    kind: KindArg,
    count: usize,
    min: i64,
    max: i64,
    seed: Option<u64>,
    out: Option<&Path>,
) -> CliResult<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = Session::new(config);
    session.build_random(kind.into(), count, min, max, &mut rng)?;
    print_levels(&session);
    write_flat(&session, out)
}

#[instrument(skip(config))]
fn manual(
    config: PlaybackConfig,
    kind: KindArg,
    root: &str,
    children: &[String],
    swap: &[String],
    out: Option<&Path>,
) -> CliResult<()> {
    let mut builder = ManualBuilder::new(kind.into());
    builder.create_root(parse_value(root)?)?;
    for child in children {
        let (parent, side, value) = parse_child(child)?;
        builder.add_child(parent, side, value)?;
    }
    for value in swap {
        builder.swap_children(parse_value(value)?)?;
    }
    debug!(steps = builder.history().len(), "manual build accepted");

    let mut session = Session::new(config);
    session.finish_manual(builder)?;
    print_levels(&session);
    write_flat(&session, out)
}

#[instrument(skip(config))]
fn show(config: PlaybackConfig, tree: &TreeFile) -> CliResult<()> {
    let session = load(config, tree)?;
    print_levels(&session);
    Ok(())
}

#[instrument(skip(config))]
fn insert(
    config: PlaybackConfig,
    tree: &TreeFile,
    value: &str,
    out: Option<&Path>,
) -> CliResult<()> {
    let mut session = load(config, tree)?;
    session.insert_input(value)?;
    write_flat(&session, out)
}

#[instrument(skip(config))]
fn delete(
    config: PlaybackConfig,
    tree: &TreeFile,
    value: &str,
    out: Option<&Path>,
) -> CliResult<()> {
    let mut session = load(config, tree)?;
    session.delete_input(value)?;
    write_flat(&session, out)
}

#[instrument(skip(config))]
fn traverse(config: PlaybackConfig, tree: &TreeFile, kind: TraversalKind) -> CliResult<()> {
    let mut session = load(config, tree)?;
    output::header(&format!("{kind} traversal of a {} tree", session.tree().kind()));
    session.start_traversal(kind);
    play(&mut session);
    Ok(())
}

#[instrument(skip(config))]
fn search(
    config: PlaybackConfig,
    tree: &TreeFile,
    algorithm: SearchAlgorithm,
    target: &str,
) -> CliResult<()> {
    let target = parse_value(target)?;
    let mut session = load(config, tree)?;
    output::header(&format!("{algorithm} search for {target}"));
    session.start_search(algorithm, target);
    play(&mut session);
    if !session.tree().contains(&target) {
        output::info(&format!("{target} is not in the tree"));
    }
    Ok(())
}

#[instrument]
fn export_levels(file: &Path) -> CliResult<()> {
    let text = read(file)?;
    let root: Link<i64> = codec::import_flat_file(text.lines())?;
    print!("{}", codec::format_levels(&codec::export_levels(&root)));
    Ok(())
}

#[instrument]
fn import_levels(file: &Path, out: Option<&Path>) -> CliResult<()> {
    let text = read(file)?;
    let levels = codec::parse_levels(&text)?;
    let mut session = Session::default();
    session.import_levels(TreeKind::Bst, &levels)?;
    write_flat(&session, out)
}

/// Pumps the session's clock in real time until nothing is pending.
fn play(session: &mut Session) {
    let mut printer = StepPrinter::new();
    while let Some(fired) = session.scheduler_mut().pop_next() {
        thread::sleep(fired.waited);
        session.fire(fired.ticket, &mut printer);
    }
}

fn load(config: PlaybackConfig, tree: &TreeFile) -> CliResult<Session> {
    let text = read(&tree.file)?;
    let mut session = Session::new(config);
    session.import_flat_file(tree.kind.into(), text.lines())?;
    debug!(nodes = session.tree().len(), "loaded");
    Ok(session)
}

fn read(path: &Path) -> CliResult<String> {
    fs::read_to_string(path).map_err(|e| CliError::io(path, e))
}

fn print_levels(session: &Session) {
    output::header(&format!("{} tree, {} nodes", session.tree().kind(), session.tree().len()));
    print!("{}", session.render_levels());
}

fn write_flat(session: &Session, out: Option<&Path>) -> CliResult<()> {
    let text = codec::to_flat_text(session.tree().root());
    match out {
        Some(path) => {
            fs::write(path, text).map_err(|e| CliError::io(PathBuf::from(path), e))?;
            output::success(&format!("wrote {}", path.display()));
        }
        None => print!("{text}"),
    }
    Ok(())
}

/// Parses `PARENT:SIDE:VALUE`, e.g. `5:left:3`.
fn parse_child(spec: &str) -> CliResult<(i64, Side, i64)> {
    let parts: Vec<&str> = spec.split(':').collect();
    let [parent, side, value] = parts.as_slice() else {
        return Err(CliError::InvalidArgs(format!(
            "expected PARENT:SIDE:VALUE, got {spec:?}"
        )));
    };
    let side = match side.trim().to_ascii_lowercase().as_str() {
        "l" | "left" => Side::Left,
        "r" | "right" => Side::Right,
        other => {
            return Err(CliError::InvalidArgs(format!(
                "side must be left or right, got {other:?}"
            )))
        }
    };
    Ok((parse_value(parent)?, side, parse_value(value)?))
}
