use std::fmt;
use std::fs::File;
use std::io as std_io;
use std::mem;
use std::path::Path;
use std::str::FromStr;

use slog::{Discard, Logger};

use crate::io as mod_io;
use crate::lang::{Phrasal, Sentence, Token};
use crate::preprocessing::PLACEHOLDER;

pub type ConllSentence = Sentence<Token<'static>>;

/// Whitespace-separated fields of one token line.
pub type Record = Vec<String>;

static COMMENT_PREFIX: &'static str = "#";
const MIN_FIELDS: usize = 4;
const CONLL_FIELDS: usize = 8;

const FORM_FIELD: usize = 1;
const POSTAG_FIELD: usize = 3;
const CONLL_HEAD_FIELD: usize = 6;
const CONLL_DEPREL_FIELD: usize = 7;
const POSITIONAL_HEAD_FIELD: usize = 2;
const POSITIONAL_DEPREL_FIELD: usize = 3;

/// Where the gold head and relation of a record are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Head in the 7th field, relation in the 8th.
    Conll,
    /// Head in the 3rd field, relation in the 4th.
    Positional,
    /// `Conll` when every record of the sentence supports it, `Positional` otherwise.
    Auto,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match *self {
            Dialect::Conll => "conll",
            Dialect::Positional => "positional",
            Dialect::Auto => "auto",
        }
    }

    fn supports_conll(record: &Record) -> bool {
        record.len() >= CONLL_FIELDS && record[CONLL_HEAD_FIELD].parse::<usize>().is_ok()
    }

    /// Picks the concrete dialect for a sentence; never returns `Auto`.
    pub fn resolve(&self, records: &[Record]) -> Dialect {
        match *self {
            Dialect::Auto => {
                if records.iter().all(Dialect::supports_conll) {
                    Dialect::Conll
                } else {
                    Dialect::Positional
                }
            }
            dialect => dialect,
        }
    }

    fn head_and_deprel(&self, record: &Record) -> Result<(usize, String), std_io::Error> {
        match *self {
            Dialect::Positional => {
                // `_` marks an absent head, as does a missing field.
                let head = match record.get(POSITIONAL_HEAD_FIELD) {
                    Some(field) if field == PLACEHOLDER => 0,
                    Some(field) => parse_head_field(field)?,
                    None => 0,
                };
                let deprel = record
                    .get(POSITIONAL_DEPREL_FIELD)
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| PLACEHOLDER.to_string());
                Ok((head, deprel))
            }
            _ => {
                if record.len() < CONLL_FIELDS {
                    return Err(std_io::Error::new(
                        std_io::ErrorKind::InvalidData,
                        format!("record has fewer than {} fields", CONLL_FIELDS),
                    ));
                }
                let head = parse_head_field(&record[CONLL_HEAD_FIELD])?;
                Ok((head, record[CONLL_DEPREL_FIELD].clone()))
            }
        }
    }

    /// Builds a sentence, root prepended, from the records of one block.
    pub fn build(&self, records: Vec<Record>) -> Result<ConllSentence, std_io::Error> {
        let dialect = self.resolve(&records);
        let mut tokens = Vec::with_capacity(records.len() + 1);
        tokens.push(Token::root());
        for (i, record) in records.into_iter().enumerate() {
            let (head, deprel) = dialect.head_and_deprel(&record)?;
            let mut fields = record.into_iter();
            let form = fields.nth(FORM_FIELD).unwrap_or_default();
            let postag = fields.nth(POSTAG_FIELD - FORM_FIELD - 1).unwrap_or_default();
            tokens.push(Token::new(i + 1, form, Some(postag), Some(head), Some(deprel)));
        }
        Ok(Sentence::from_tokens(tokens))
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::Auto
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "conll" => Ok(Dialect::Conll),
            "positional" => Ok(Dialect::Positional),
            "auto" => Ok(Dialect::Auto),
            _ => Err(format!("unknown dialect: `{}`", s)),
        }
    }
}

#[inline]
fn parse_head_field(field: &str) -> Result<usize, std_io::Error> {
    field
        .parse::<usize>()
        .map_err(|e| std_io::Error::new(std_io::ErrorKind::InvalidData, e))
}

/// Splits a trimmed line into fields; `None` for comments and short records.
pub fn parse_record(line: &str) -> Option<Record> {
    if line.starts_with(COMMENT_PREFIX) {
        return None;
    }
    let fields: Record = line.split_whitespace().map(|s| s.to_string()).collect();
    if fields.len() < MIN_FIELDS {
        None
    } else {
        Some(fields)
    }
}

/// Groups blank-line separated token lines into sentences.
pub struct Reader<R> {
    inner: R,
    dialect: Dialect,
    logger: Logger,
}

impl<R: std_io::BufRead> Reader<R> {
    pub fn new(inner: R) -> Self {
        Reader {
            inner: inner,
            dialect: Dialect::default(),
            logger: Logger::root(Discard, o!()),
        }
    }

    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    fn flush_sentence(
        &self,
        records: &mut Vec<Record>,
        buf: &mut Vec<ConllSentence>,
    ) -> std_io::Result<bool> {
        if records.is_empty() {
            return Ok(false);
        }
        let records = mem::replace(records, vec![]);
        if self.dialect == Dialect::Auto && self.dialect.resolve(&records) == Dialect::Positional {
            debug!(
                self.logger,
                "sentence {}: gold columns missing, reading positional fields",
                buf.len() + 1
            );
        }
        buf.push(self.dialect.build(records)?);
        Ok(true)
    }
}

impl Reader<std_io::BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> std_io::Result<Self> {
        Ok(Self::new(std_io::BufReader::new(File::open(path)?)))
    }
}

impl mod_io::FileOpen for Reader<std_io::BufReader<File>> {
    fn open<P: AsRef<Path>>(path: P) -> std_io::Result<Self> {
        Reader::open(path)
    }
}

impl<R: std_io::BufRead> mod_io::Read for Reader<R> {
    type Item = ConllSentence;

    fn read_upto(&mut self, num: usize, buf: &mut Vec<Self::Item>) -> std_io::Result<usize> {
        let mut count = 0;
        let mut line = String::new();
        let mut records: Vec<Record> = vec![];
        while count < num {
            match self.inner.read_line(&mut line) {
                Ok(0) => {
                    if self.flush_sentence(&mut records, buf)? {
                        count += 1;
                    }
                    break;
                }
                Ok(_) => {
                    let line_trimmed = line.trim();
                    if line_trimmed.is_empty() {
                        if self.flush_sentence(&mut records, buf)? {
                            count += 1;
                        }
                    } else {
                        match parse_record(line_trimmed) {
                            Some(record) => records.push(record),
                            None => trace!(self.logger, "skip line: {}", line_trimmed),
                        }
                    }
                }
                Err(ref e) if e.kind() == std_io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
            line.clear();
        }
        Ok(count)
    }
}

impl<R> fmt::Debug for Reader<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Reader")
            .field("dialect", &self.dialect)
            .finish()
    }
}
