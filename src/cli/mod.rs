mod input;
mod json;

pub use input::MalformedInputError;

use std::io::{self, BufRead, Write};

use crate::determinant::Method;

const MENU: &str = "\nChoose Method:\n\
    0 - Diagonal Method (2x2 or 3x3)\n\
    1 - Determinant by Definition\n\
    2 - Using Determinant Rules (Row Reduction)\n\
    3 - Cofactor Expansion";

/// Console surface. `--json` switches to the non-interactive batch front
/// end; everything else runs the prompt loop.
pub fn run() -> io::Result<()> {
    if std::env::args().any(|arg| arg == "--json") {
        return json::run(io::stdin().lock(), io::stdout().lock());
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock();

    let matrix = input::read_matrix(&mut lines)?;

    println!("{MENU}");
    print!("\nChoice: ");
    io::stdout().flush()?;

    let mut line = String::new();
    lines.read_line(&mut line)?;

    let method = match select_method(line.trim()) {
        Ok(method) => method,
        Err(()) => {
            println!("Invalid choice.");
            return Ok(());
        }
    };

    match method.compute(&matrix) {
        Ok(computation) => {
            for step in &computation.trace {
                println!("{step}\n");
            }
            println!("Determinant = {}", computation.determinant);
        }
        Err(err) => println!("{err}"),
    }

    Ok(())
}

fn select_method(token: &str) -> Result<Method, ()> {
    let choice: u8 = token.parse().map_err(|_| ())?;
    Method::try_from(choice).map_err(|err| log::warn!("{err}"))
}
