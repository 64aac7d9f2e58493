use std::io::{self, BufRead, Write};

use derive_more::{Display, Error, IsVariant};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use crate::Matrix;

/// Rejected before the engine ever sees the input: the prompt loop reports
/// and retries, the batch front end refuses the request.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, IsVariant)]
pub enum MalformedInputError {
    #[display(fmt = "Size must be between 2 and 5, got {}.", size)]
    SizeOutOfRange { size: usize },
    #[display(fmt = "Please enter exactly {} values, got {}.", expected, actual)]
    WrongValueCount { expected: usize, actual: usize },
    #[display(fmt = "'{}' is not an integer, a ratio or a decimal.", token)]
    InvalidToken { token: String },
    #[display(fmt = "'{}' has a zero denominator.", token)]
    ZeroDenominator { token: String },
}

/// Prompts for a size and then one row per line, re-prompting on every
/// malformed answer, and hands back a validated square matrix.
pub(crate) fn read_matrix(lines: &mut impl BufRead) -> io::Result<Matrix> {
    let size = loop {
        print!("Enter matrix size (2 to 5): ");
        io::stdout().flush()?;
        match parse_size(read_line(lines)?.trim()) {
            Ok(size) => break size,
            Err(err) => println!("{err}\n"),
        }
    };

    println!("\nEnter numbers row by row (separate with space):");

    let mut entries = Vec::with_capacity(size * size);
    for i in 0..size {
        loop {
            print!("Row {}: ", i + 1);
            io::stdout().flush()?;
            match parse_row(&read_line(lines)?, size) {
                Ok(row) => {
                    entries.extend(row);
                    break;
                }
                Err(err) => println!("{err}\n"),
            }
        }
    }

    Ok(Matrix::from_row_iterator(size, size, entries))
}

fn read_line(lines: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    if lines.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended before the matrix was complete",
        ));
    }
    Ok(line)
}

pub(crate) fn parse_size(token: &str) -> Result<usize, MalformedInputError> {
    let size = token
        .parse()
        .map_err(|_| MalformedInputError::InvalidToken {
            token: token.to_owned(),
        })?;
    if !(2..=5).contains(&size) {
        return Err(MalformedInputError::SizeOutOfRange { size });
    }
    Ok(size)
}

pub(crate) fn parse_row(
    line: &str,
    expected: usize,
) -> Result<Vec<BigRational>, MalformedInputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != expected {
        return Err(MalformedInputError::WrongValueCount {
            expected,
            actual: tokens.len(),
        });
    }
    tokens.into_iter().map(parse_rational).collect()
}

/// Exact token grammar: integer (`-7`), ratio (`3/4`) or decimal (`0.25`).
/// Decimals are scaled by a power of ten, never routed through a float.
pub(crate) fn parse_rational(token: &str) -> Result<BigRational, MalformedInputError> {
    let invalid = || MalformedInputError::InvalidToken {
        token: token.to_owned(),
    };

    if let Some((numer, denom)) = token.split_once('/') {
        let numer: BigInt = numer.parse().map_err(|_| invalid())?;
        let denom: BigInt = denom.parse().map_err(|_| invalid())?;
        if denom.is_zero() {
            return Err(MalformedInputError::ZeroDenominator {
                token: token.to_owned(),
            });
        }
        return Ok(BigRational::new(numer, denom));
    }

    if let Some((int_part, frac_part)) = token.split_once('.') {
        if int_part.trim_start_matches(&['-', '+'][..]).is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }
        if !frac_part.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        // "-1.25" reads as the integer -125 over 10^2.
        let digits: BigInt = format!("{int_part}{frac_part}")
            .parse()
            .map_err(|_| invalid())?;
        let denom = num_traits::pow(BigInt::from(10), frac_part.len());
        return Ok(BigRational::new(digits, denom));
    }

    token
        .parse()
        .map(BigRational::from_integer)
        .map_err(|_| invalid())
}
