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

use env_logger::Builder;
use libsetversion::*;
use std::io;

use log::{debug, error, info, warn};

fn main() {
    set_up_logging();

    // We want the error to go through `env_logger` like every other message,
    // so don't return it from main().
    actual_work()
        .map_err(|e| {
            error!("{}", e.to_string());
            std::process::exit(1);
        })
        .unwrap();
}

fn actual_work() -> Result<(), Error> {
    let version = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        read_version_triple(stdin.lock(), stdout.lock())?
    };

    println!("Version: {}", version);

    let stamp = |line: &[u8]| {
        if find_stamp(line).is_some() {
            info!("{} instance found", TARGET_FILE);
        }
        stamp_line(line, &version)
    };

    match process_file(TARGET_FILE, stamp)? {
        ProcessOutcome::Rewritten { lines, changed } => {
            info!("Stamped {} of {} lines in {}", changed, lines, TARGET_FILE)
        }
        ProcessOutcome::SkippedEmpty => debug!("{} is empty, left it alone", TARGET_FILE),
        ProcessOutcome::NotOpen(msg) => warn!("{}", msg),
    }

    Ok(())
}

fn set_up_logging() {
    let mut builder = Builder::new();

    builder
        .filter_module("libsetversion", log::LevelFilter::Info)
        .filter_module("setversion", log::LevelFilter::Info);

    builder.default_format_timestamp(false).init();
}
