use std::io::{self, BufRead};

use chaindict::HashDict;
use log::trace;
use thiserror::Error;

/// How many words the report lists when no count is given
pub const DEFAULT_TOP: usize = 10;

#[derive(Debug, Error)]
pub enum StatError {
    /// Derived IO error
    #[error("Io error: {0}")]
    IoError(#[from] io::Error),

    /// The optional argument was not a number
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Parses the optional "how many words to list" argument
pub fn parse_top(arg: Option<String>) -> Result<usize, StatError> {
    match arg {
        None => Ok(DEFAULT_TOP),
        Some(s) => s
            .parse()
            .map_err(|_| StatError::InvalidArgument(format!("expected a count, got {s:?}"))),
    }
}

/// Counts the whitespace separated words of `reader`
pub fn count_words<R: BufRead>(reader: R) -> Result<HashDict<String, u64>, StatError> {
    let mut counts = HashDict::new();

    for line in reader.lines() {
        let line = line?;
        for word in line.split_whitespace() {
            if let Ok(n) = counts.get_mut(word) {
                *n += 1;
            } else {
                counts.add(word.to_owned(), 1);
            }
        }
        trace!(target: "count_words", "{} distinct words, {} buckets", counts.size(), counts.capacity());
    }

    Ok(counts)
}

/// The `n` most frequent words, ties broken alphabetically
pub fn most_frequent(counts: &HashDict<String, u64>, n: usize) -> Vec<(&str, u64)> {
    let mut words: Vec<_> = counts.iter().map(|(w, c)| (w.as_str(), *c)).collect();
    words.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    words.truncate(n);
    words
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn counts_words_across_lines() {
        let input = "the cat\nthe  dog\n\n  the end ";
        let counts = count_words(input.as_bytes()).unwrap();

        assert_eq!(counts.size(), 4);
        assert_eq!(counts["the"], 3);
        assert_eq!(counts["cat"], 1);
        assert!(!counts.is_in(""));
    }

    #[test]
    fn most_frequent_orders_by_count_then_word() {
        let counts = count_words("b a c b a b".as_bytes()).unwrap();

        assert_eq!(most_frequent(&counts, 2), vec![("b", 3), ("a", 2)]);
        assert_eq!(most_frequent(&counts, 10).len(), 3);
    }

    #[test]
    fn grows_with_many_words() {
        let input: String = (0..500).map(|i| format!("w{i} ")).collect();
        let counts = count_words(input.as_bytes()).unwrap();

        assert_eq!(counts.size(), 500);
        assert!(counts.capacity() > 500);
    }

    #[test]
    fn unreadable_input_is_an_io_error() {
        let input: &[u8] = b"fine\n\xff\xfe\n";
        assert!(matches!(count_words(input), Err(StatError::IoError(_))));
    }

    #[test]
    fn parses_top_argument() {
        assert_eq!(parse_top(None).unwrap(), DEFAULT_TOP);
        assert_eq!(parse_top(Some("3".into())).unwrap(), 3);
        assert!(matches!(
            parse_top(Some("three".into())),
            Err(StatError::InvalidArgument(_))
        ));
    }
}
