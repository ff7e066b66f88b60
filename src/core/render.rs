//! Renderer module
//!
//! Writes the flat tab-delimited output files and the optional JSON run summary.

use crate::core::model::{FrequencyTable, RunStats};
use crate::core::tally::CharacterTally;
use std::io::{self, Write};

/// One token per line
pub fn write_word<W: Write>(writer: &mut W, token: &str) -> io::Result<()> {
    writeln!(writer, "{}", token)
}

/// `letter<TAB>count`, a..z
pub fn write_char_counts<W: Write>(writer: &mut W, tally: &CharacterTally) -> io::Result<()> {
    for (letter, count) in tally.iter() {
        writeln!(writer, "{}\t{}", letter, count)?;
    }
    Ok(())
}

/// `key<TAB>count` in ascending key order
pub fn write_table<W: Write>(writer: &mut W, table: &FrequencyTable) -> io::Result<()> {
    for (key, count) in table.iter() {
        writeln!(writer, "{}\t{}", key, count)?;
    }
    Ok(())
}

/// Render run statistics as a JSON object
pub fn render_stats(stats: &RunStats, pretty: bool) -> String {
    let rendered = if pretty {
        serde_json::to_string_pretty(stats)
    } else {
        serde_json::to_string(stats)
    };
    rendered.unwrap_or_else(|_| "{}".to_string())
}
