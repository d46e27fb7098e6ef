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

//! libsetversion rewrites version stamps of the form `_MAJOR_MINOR_BUILD` in a text file.
//! The interactive `setversion` binary uses it to update `buildmicro`, but every piece is
//! usable on its own:
//!
//! * [read_version_triple](crate::prompt::read_version_triple) collects the version
//! * [stamp_line](crate::stamp::stamp_line) rewrites a single line
//! * [process_file](crate::rewriter::process_file) maps a line transform over a whole file
//!
//! # Usage
//!
//! ```
//! use libsetversion::*;
//!
//! let version = VersionTriple::new("1", "2", "3");
//!
//! assert_eq!(stamp_line(b"FOO_A_B_CDrest\n", &version), b"FOO_1_2_3Drest\n");
//! assert_eq!(stamp_line(b"no stamp here\n", &version), b"no stamp here\n");
//! ```

pub mod errors;
pub mod prompt;
pub mod rewriter;
pub mod stamp;
pub mod types;

pub use crate::errors::*;
pub use crate::prompt::*;
pub use crate::rewriter::*;
pub use crate::stamp::*;
pub use crate::types::*;

/// The file the `setversion` binary rewrites, relative to the working directory.
pub const TARGET_FILE: &str = "buildmicro";
