use byteorder::{BigEndian, ByteOrder};
use std::io::{self, Read};
use std::iter::FromIterator;
use tracing::trace;

/// One copper instruction: two big-endian words in program order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WordPair(pub u16, pub u16);

impl WordPair {
    pub fn first(self) -> u16 {
        self.0
    }

    pub fn second(self) -> u16 {
        self.1
    }

    pub fn words(self) -> [u16; 2] {
        [self.0, self.1]
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WordList {
    pairs: Vec<WordPair>,
}

impl WordList {
    /// Reads word pairs until the stream runs out.
    ///
    /// A word needs two bytes and a pair needs two words; whatever is left
    /// over once neither can be completed is dropped without complaint.
    pub fn read<R: Read>(mut src: R) -> io::Result<WordList> {
        let mut pairs = Vec::new();

        loop {
            let w1 = match next_word(&mut src)? {
                Some(w) => w,
                None => break,
            };

            let w2 = match next_word(&mut src)? {
                Some(w) => w,
                None => {
                    trace!("dropping trailing word {:#06x} with no partner", w1);

                    break;
                }
            };

            pairs.push(WordPair(w1, w2));
        }

        Ok(WordList { pairs })
    }

    pub fn pairs(&self) -> &[WordPair] {
        &self.pairs[..]
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.pairs.len() * 2
    }

    /// All words flattened in program order, first word of a pair before the second.
    pub fn words(&self) -> impl Iterator<Item = u16> + '_ {
        self.pairs
            .iter()
            .flat_map(|p| IntoIterator::into_iter(p.words()))
    }
}

impl From<Vec<WordPair>> for WordList {
    fn from(pairs: Vec<WordPair>) -> Self {
        WordList { pairs }
    }
}

impl FromIterator<WordPair> for WordList {
    fn from_iter<I: IntoIterator<Item = WordPair>>(iter: I) -> Self {
        WordList {
            pairs: iter.into_iter().collect(),
        }
    }
}

fn next_word<R: Read>(src: &mut R) -> io::Result<Option<u16>> {
    let mut buf = [0; 2];

    match fill(src, &mut buf)? {
        2 => Ok(Some(BigEndian::read_u16(&buf))),
        0 => Ok(None),
        _ => {
            trace!("dropping trailing byte {:#04x}", buf[0]);

            Ok(None)
        }
    }
}

/// Reads until `buf` is full or the stream ends; returns the bytes read.
fn fill<R: Read>(src: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;

    while filled < buf.len() {
        match src.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }

    Ok(filled)
}
