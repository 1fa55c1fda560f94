mod lexer;
mod tokens;
mod parser;
mod run_script;
mod coordinate_stack;
mod error;

use std::{
    collections::HashMap,
    io,
    path::Path,
    sync::LazyLock,
};

use lexer::ScriptReader;
use tokens::{Command, Function};

pub use error::ScriptError;
use run_script::ScriptContext;
pub use run_script::Termination;

static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    let mut insert = |keyword: &'static str, name: &'static str, function: Function| {
        map.insert(keyword, Command { name, function });
    };

    insert("display", "display", Function::Display);
    insert("save", "save", Function::Save);
    insert("clear", "clear", Function::Clear);
    insert("quit", "quit", Function::Quit);
    insert("color", "color", Function::SetColor);
    insert("background", "background", Function::SetBackground);

    insert("push", "push", Function::Push);
    insert("pop", "pop", Function::Pop);

    insert("translate", "translate", Function::Move);
    insert("move", "translate", Function::Move);
    insert("scale", "scale", Function::Scale);
    insert("rotate", "rotate", Function::Rotate);

    insert("line", "line", Function::Line);
    insert("circle", "circle", Function::Circle);
    insert("hermite", "hermite", Function::Hermite);
    insert("bezier", "bezier", Function::Bezier);

    insert("polygon", "polygon", Function::Polygon);
    insert("box", "box", Function::Box);
    insert("sphere", "sphere", Function::Sphere);
    insert("torus", "torus", Function::Torus);

    map
});

/// Runs the script at `path` (`stdin` or `-` for standard input), echoing the
/// trace to standard output and writing images under `output_dir`.
pub fn run_script(path: &str, output_dir: &Path) -> Result<Termination, ScriptError> {
    let reader = ScriptReader::open(path)?;
    log::info!("running script '{}'", path);

    let mut context = ScriptContext::new(io::stdout(), output_dir);
    let termination = context.run(reader)?;

    log::info!("script '{}' finished: {:?}", path, termination);
    Ok(termination)
}
