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
use crate::types::ProcessOutcome;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

use log::{debug, info};

/// Rewrites the file at `path` in place by running `transform` over every line.
///
/// Lines are handed to `transform` as raw bytes with their terminator, exactly as
/// stored, and the results are concatenated in order. The file doesn't need to be UTF-8.
/// It's only written back if that concatenation isn't empty, which in practice means
/// the file wasn't empty.
///
/// Failing to open the file isn't an error: it's reported as [ProcessOutcome::NotOpen]
/// and nothing is touched. A directory counts as a file that can't be opened.
///
/// # Errors
///
/// * Errors out if reading the file fails after it was opened
/// * Errors out if writing the file back fails
pub fn process_file<P, F>(path: P, mut transform: F) -> Result<ProcessOutcome, Error>
where
    P: AsRef<Path>,
    F: FnMut(&[u8]) -> Vec<u8>,
{
    let path = path.as_ref();

    let (output, lines, changed) = {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                return Ok(ProcessOutcome::NotOpen(format!(
                    "file {} not open. Error: {}",
                    path.display(),
                    e
                )));
            }
        };

        if file.metadata()?.is_dir() {
            return Ok(ProcessOutcome::NotOpen(format!(
                "file {} not open. Error: Is a directory",
                path.display()
            )));
        }

        info!("--- Processing {} ---------", path.display());

        let mut reader = BufReader::new(file);
        let mut output = Vec::new();
        let mut line = Vec::new();
        let mut lines = 0;
        let mut changed = 0;

        while reader.read_until(b'\n', &mut line)? != 0 {
            let new_line = transform(&line);
            if new_line != line {
                changed += 1;
            }
            output.extend_from_slice(&new_line);
            lines += 1;
            line.clear();
        }

        debug!("Read {} lines, {} of them changed", lines, changed);

        (output, lines, changed)
    };

    if output.is_empty() {
        debug!("Not writing {}, nothing to write", path.display());
        return Ok(ProcessOutcome::SkippedEmpty);
    }

    info!("Writing file {}", path.display());

    let mut file = File::create(path)?;
    file.write_all(&output)?;

    Ok(ProcessOutcome::Rewritten { lines, changed })
}

/// The identity line transform; running it through [process_file] leaves the content as-is.
pub fn pass_through(line: &[u8]) -> Vec<u8> {
    line.to_vec()
}
