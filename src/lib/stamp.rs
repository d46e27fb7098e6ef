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

use crate::types::VersionTriple;

use log::debug;

/// Length of the span a stamp replaces: `_X_Y_` plus the byte after the last underscore
const STAMP_SPAN: usize = 6;

/// Finds the start (in bytes) of the version marker `_X_Y_` in `line`.
///
/// Only the rightmost underscore is considered: it, and the bytes two and four
/// positions before it, must all be underscores. This is a positional scan, it doesn't
/// care whether `X` and `Y` are digits, or even whole characters.
pub fn find_stamp(line: &[u8]) -> Option<usize> {
    let i = line.iter().rposition(|b| *b == b'_')?;

    if i >= 4 && line[i - 2] == b'_' && line[i - 4] == b'_' {
        Some(i - 4)
    } else {
        None
    }
}

/// Replaces the version stamp in `line` with the one of `version`.
///
/// Lines without a marker (see [find_stamp](crate::stamp::find_stamp)) are returned
/// unchanged, including their line terminator.
///
/// # Example
///
/// ```
/// use libsetversion::*;
///
/// let version = VersionTriple::new("4", "0", "7");
/// assert_eq!(stamp_line(b"#define MICRO_1_2_3 1\n", &version), b"#define MICRO_4_0_7 1\n");
/// ```
pub fn stamp_line(line: &[u8], version: &VersionTriple) -> Vec<u8> {
    let start = match find_stamp(line) {
        Some(start) => start,
        None => return line.to_vec(),
    };

    debug!("Stamping version {} at byte {}", version, start);

    let stamp = version.stamp();
    let tail = line.get(start + STAMP_SPAN..).unwrap_or_default();

    let mut stamped = Vec::with_capacity(line.len() + stamp.len());
    stamped.extend_from_slice(&line[..start]);
    stamped.extend_from_slice(stamp.as_bytes());
    stamped.extend_from_slice(tail);
    stamped
}
