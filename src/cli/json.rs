use std::io::{self, Read, Write};

use serde::{Deserialize, Serialize};

use super::input::{self, MalformedInputError};
use crate::determinant::Method;
use crate::Matrix;

/// One computation request: entries in the same token grammar as the
/// interactive surface, method as the menu index.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct Request {
    pub matrix: Vec<Vec<String>>,
    pub method: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Response {
    pub determinant: String,
    pub trace: Vec<String>,
}

/// Batch front end: a single JSON request on `input`, a single JSON
/// response on `output`. Same boundary rules as the prompt loop, except
/// malformed input is refused instead of re-prompted.
pub(crate) fn run(mut input: impl Read, mut output: impl Write) -> io::Result<()> {
    let mut raw = String::new();
    input.read_to_string(&mut raw)?;

    match process(&raw) {
        Ok(response) => writeln!(output, "{}", serde_json::to_string_pretty(&response)?),
        Err(message) => {
            log::error!("Refusing request: {message}");
            writeln!(
                output,
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "error": message }))?
            )
        }
    }
}

fn process(raw: &str) -> Result<Response, String> {
    let request: Request = serde_json::from_str(raw).map_err(|err| err.to_string())?;
    let matrix = parse_matrix(&request.matrix).map_err(|err| err.to_string())?;
    let method = Method::try_from(request.method).map_err(|err| err.to_string())?;
    let computation = method.compute(&matrix).map_err(|err| err.to_string())?;
    Ok(Response {
        determinant: computation.determinant.to_string(),
        trace: computation.trace.iter().map(ToString::to_string).collect(),
    })
}

fn parse_matrix(rows: &[Vec<String>]) -> Result<Matrix, MalformedInputError> {
    let size = rows.len();
    if !(2..=5).contains(&size) {
        return Err(MalformedInputError::SizeOutOfRange { size });
    }
    let mut entries = Vec::with_capacity(size * size);
    for row in rows {
        if row.len() != size {
            return Err(MalformedInputError::WrongValueCount {
                expected: size,
                actual: row.len(),
            });
        }
        for token in row {
            entries.push(input::parse_rational(token)?);
        }
    }
    Ok(Matrix::from_row_iterator(size, size, entries))
}
