//This file is part of setversion
//
//setversion is free software: you can redistribute it and/or modify
//it under the terms of the GNU General Public License as published by
//the Free Software Foundation, either version 3 of the License, or
//(at your option) any later version.
//
//setversion is distributed in the hope that it will be useful,
//but WITHOUT ANY WARRANTY; without even the implied warranty of
//MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//GNU General Public License for more details.
//
//You should have received a copy of the GNU General Public License
//along with setversion.  If not, see <http://www.gnu.org/licenses/>.

use crate::errors::Error;
use crate::types::VersionTriple;
use std::io::{BufRead, Write};

use log::debug;

/// Asks for the major, minor and build components, in that order.
///
/// Each answer is taken verbatim, minus its line terminator. An empty answer
/// is an empty token.
///
/// # Errors
///
/// * Errors out if the input ends before all three components were read
/// * Errors out if reading the input or writing a prompt fails
pub fn read_version_triple<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> Result<VersionTriple, Error> {
    let major = ask(&mut input, &mut output, "Major")?;
    let minor = ask(&mut input, &mut output, "Minor")?;
    let build = ask(&mut input, &mut output, "Build")?;

    Ok(VersionTriple {
        major,
        minor,
        build,
    })
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, what: &str) -> Result<String, Error> {
    write!(output, "{}: ", what).map_err(|e| Error::Input(e.to_string()))?;
    output.flush().map_err(|e| Error::Input(e.to_string()))?;

    let mut answer = String::new();
    let read = input
        .read_line(&mut answer)
        .map_err(|e| Error::Input(e.to_string()))?;

    if read == 0 {
        return Err(Error::Input(format!(
            "Reached end of input while asking for {}",
            what
        )));
    }

    if answer.ends_with('\n') {
        answer.pop();
        if answer.ends_with('\r') {
            answer.pop();
        }
    }

    debug!("{}: '{}'", what, answer);

    Ok(answer)
}
