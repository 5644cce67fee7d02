use crate::words::WordList;
use std::fmt;

/// Words per line in compact layout.
pub const COMPACT_RUN: usize = 9;

const INDENT: &str = "    ";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Nine words per line.
    Compact,
    /// One instruction (word pair) per line.
    Expanded,
}

impl Layout {
    pub fn from_compact(compact: bool) -> Layout {
        if compact {
            Layout::Compact
        } else {
            Layout::Expanded
        }
    }
}

/// A word as a C hex literal, `0x01a3`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HexWord(pub u16);

impl fmt::Display for HexWord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{:04x}", self.0)
    }
}

/// The `uint16_t` array declaration for a copper list.
pub struct CArray<'a> {
    name: &'a str,
    words: &'a WordList,
    layout: Layout,
}

impl<'a> CArray<'a> {
    pub fn new(name: &'a str, words: &'a WordList, layout: Layout) -> Self {
        CArray {
            name,
            words,
            layout,
        }
    }

    fn body(&self) -> String {
        match self.layout {
            Layout::Compact => compact_lines(self.words).join("\n"),
            Layout::Expanded => expanded_lines(self.words).join(",\n"),
        }
    }
}

impl<'a> fmt::Display for CArray<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "// {}{}",
            self.name,
            if self.layout == Layout::Compact {
                " (compact)"
            } else {
                ""
            }
        )?;
        writeln!(f, "uint16_t copper_list_size = {};", self.words.word_count())?;
        writeln!(f, "uint16_t copper_list = [")?;
        writeln!(f, "{}", self.body())?;
        writeln!(f, "];")
    }
}

fn join_words(words: &[u16]) -> String {
    words
        .iter()
        .map(|&w| HexWord(w).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Flattens the pairs and cuts the result into runs of [`COMPACT_RUN`].
pub fn compact_lines(words: &WordList) -> Vec<String> {
    let flat = words.words().collect::<Vec<_>>();

    flat.chunks(COMPACT_RUN)
        .map(|run| format!("{}{}", INDENT, join_words(run)))
        .collect()
}

pub fn expanded_lines(words: &WordList) -> Vec<String> {
    words
        .pairs()
        .iter()
        .map(|p| format!("{}{}", INDENT, join_words(&p.words())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::WordPair;

    fn sequential(pairs: u16) -> WordList {
        (0..pairs)
            .map(|i| WordPair(i * 2 + 1, i * 2 + 2))
            .collect()
    }

    fn tokens(line: &str) -> Vec<&str> {
        line.trim_start()
            .trim_end_matches(',')
            .split(", ")
            .collect()
    }

    #[test]
    fn hex_word_format() {
        assert_eq!(HexWord(0x01A3).to_string(), "0x01a3");
        assert_eq!(HexWord(0).to_string(), "0x0000");
        assert_eq!(HexWord(0xFFFF).to_string(), "0xffff");
    }

    #[test]
    fn expanded_single_pair() {
        let words = WordList::from(vec![WordPair(0x0001, 0x0002)]);

        assert_eq!(
            CArray::new("f.bin", &words, Layout::Expanded).to_string(),
            "// f.bin\nuint16_t copper_list_size = 2;\nuint16_t copper_list = [\n    0x0001, 0x0002\n];\n"
        );
    }

    #[test]
    fn expanded_two_pairs() {
        let words = sequential(2);

        assert_eq!(
            CArray::new("test.bin", &words, Layout::Expanded).to_string(),
            "// test.bin\n\
             uint16_t copper_list_size = 4;\n\
             uint16_t copper_list = [\n    \
             0x0001, 0x0002,\n    \
             0x0003, 0x0004\n\
             ];\n"
        );
    }

    #[test]
    fn compact_header_and_runs() {
        let words = sequential(5);

        assert_eq!(
            CArray::new("test.bin", &words, Layout::Compact).to_string(),
            "// test.bin (compact)\n\
             uint16_t copper_list_size = 10;\n\
             uint16_t copper_list = [\n    \
             0x0001, 0x0002, 0x0003, 0x0004, 0x0005, 0x0006, 0x0007, 0x0008, 0x0009\n    \
             0x000a\n\
             ];\n"
        );
    }

    #[test]
    fn compact_run_lengths() {
        for pairs in 1..20u16 {
            let lines = compact_lines(&sequential(pairs));
            let total = pairs as usize * 2;
            let (last, full) = lines.split_last().unwrap();

            assert!(full.iter().all(|l| tokens(l).len() == COMPACT_RUN));

            let rem = match total % COMPACT_RUN {
                0 => COMPACT_RUN,
                r => r,
            };

            assert_eq!(tokens(last).len(), rem, "{} words", total);
        }
    }

    #[test]
    fn compact_keeps_order() {
        let words = sequential(7);
        let flat = compact_lines(&words)
            .iter()
            .flat_map(|l| tokens(l).into_iter().map(str::to_owned).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        let expected = words
            .words()
            .map(|w| HexWord(w).to_string())
            .collect::<Vec<_>>();

        assert_eq!(flat, expected);
    }

    #[test]
    fn expanded_one_line_per_pair() {
        let words = sequential(6);
        let lines = expanded_lines(&words);

        assert_eq!(lines.len(), words.len());

        for (line, pair) in lines.iter().zip(words.pairs()) {
            assert_eq!(
                tokens(line),
                vec![
                    HexWord(pair.first()).to_string(),
                    HexWord(pair.second()).to_string()
                ]
            );
        }
    }

    #[test]
    fn empty_list_leaves_blank_body() {
        let words = WordList::default();

        assert_eq!(
            CArray::new("e.bin", &words, Layout::Expanded).to_string(),
            "// e.bin\nuint16_t copper_list_size = 0;\nuint16_t copper_list = [\n\n];\n"
        );
        assert_eq!(
            CArray::new("e.bin", &words, Layout::Compact).to_string(),
            "// e.bin (compact)\nuint16_t copper_list_size = 0;\nuint16_t copper_list = [\n\n];\n"
        );
    }
}
