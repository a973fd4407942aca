use std::io::{self, Write};

use dictstat::{StatError, count_words, most_frequent, parse_top};
use log::info;

fn main() -> Result<(), StatError> {
    env_logger::builder().init();

    let top = parse_top(std::env::args().nth(1))?;
    let counts = count_words(io::stdin().lock())?;
    info!(
        "counted {} distinct words into {} buckets",
        counts.size(),
        counts.capacity()
    );

    let mut out = io::stdout().lock();
    writeln!(out, "distinct words: {}", counts.size())?;
    writeln!(out, "buckets:        {}", counts.capacity())?;
    writeln!(out, "occupancy:      {:.1}%", counts.occupancy())?;
    for (word, n) in most_frequent(&counts, top) {
        writeln!(out, "{n:>8} {word}")?;
    }

    Ok(())
}
