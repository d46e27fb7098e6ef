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

use std::fmt;

/// The VersionTriple struct, holding the three version components the user entered.
///
/// The components are opaque tokens; they're spliced into the file as-is.
#[derive(Clone, Eq, Ord, PartialOrd, Hash, Default, Debug, PartialEq)]
pub struct VersionTriple {
    pub major: String,
    pub minor: String,
    pub build: String,
}

impl VersionTriple {
    pub fn new(major: &str, minor: &str, build: &str) -> VersionTriple {
        VersionTriple {
            major: major.to_owned(),
            minor: minor.to_owned(),
            build: build.to_owned(),
        }
    }

    /// Renders the stamp that replaces a matched marker, e.g. `_1_2_3`
    pub fn stamp(&self) -> String {
        format!("_{}_{}_{}", self.major, self.minor, self.build)
    }
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.build)
    }
}

/// The ProcessOutcome enum, describing what [process_file](crate::rewriter::process_file) did
#[derive(Clone, Eq, Ord, PartialOrd, Hash, Debug, PartialEq)]
pub enum ProcessOutcome {
    /// The file was written back. `changed` counts the lines the transform altered.
    Rewritten { lines: usize, changed: usize },
    /// The transformed content was empty, so nothing was written
    SkippedEmpty,
    /// The file couldn't be opened for reading
    NotOpen(String),
}
