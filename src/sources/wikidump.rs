use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use bzip2::read::MultiBzDecoder;
use flate2::read::MultiGzDecoder;
use log::{debug, error, warn};
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Serialize;

use super::RawArticle;
use crate::error::Error;
use crate::filtering::{Exclusion, PageFilter};

/// Number of successive XML errors after which the stream is considered unreadable.
const MAX_CONSECUTIVE_ERRORS: usize = 32;

/// Counters kept by the decoder. Owned by the [WikiDump] and read back by its consumer.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct DecoderStats {
    /// number of closed `<page>` elements
    pub pages: u64,
    /// pages handed downstream
    pub yielded: u64,
    pub empty: u64,
    pub redirect: u64,
    pub disambiguation: u64,
    pub namespace: u64,
    pub too_short: u64,
    pub malformed: u64,
    /// `true` if the stream ended on an I/O error rather than on EOF.
    pub truncated: bool,
}

impl DecoderStats {
    fn record(&mut self, exclusion: Exclusion) {
        match exclusion {
            Exclusion::Empty => self.empty += 1,
            Exclusion::Redirect => self.redirect += 1,
            Exclusion::Disambiguation => self.disambiguation += 1,
            Exclusion::Namespace => self.namespace += 1,
            Exclusion::TooShort => self.too_short += 1,
        }
    }

    /// Pages that did not make it downstream, whatever the reason.
    pub fn excluded(&self) -> u64 {
        self.empty
            + self.redirect
            + self.disambiguation
            + self.namespace
            + self.too_short
            + self.malformed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Id,
    Text,
    Timestamp,
}

enum Tag {
    Page,
    Field(Field),
    Other,
}

impl Tag {
    /// Matches on local names, so that prefixed (`mw:page`) elements work too.
    fn from_local_name(name: &[u8]) -> Self {
        match name {
            b"page" => Tag::Page,
            b"title" => Tag::Field(Field::Title),
            b"id" => Tag::Field(Field::Id),
            b"text" => Tag::Field(Field::Text),
            b"timestamp" => Tag::Field(Field::Timestamp),
            _ => Tag::Other,
        }
    }
}

/// Reader outcome, detached from the reader's buffer.
enum Token {
    Open(Tag),
    Empty(Tag),
    Close(Tag),
    Malformed(String),
    Fatal(String),
    Eof,
    Skip,
}

/// Accumulator for the page being read.
///
/// Every field is captured on its first occurrence only: the first `<id>` of a page
/// is the page id, later ones belong to revisions and contributors.
#[derive(Default)]
struct PageBuilder {
    title: Option<String>,
    id: Option<String>,
    text: Option<String>,
    timestamp: Option<String>,
    current: Option<Field>,
    scratch: String,
    malformed: bool,
}

impl PageBuilder {
    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Title => &mut self.title,
            Field::Id => &mut self.id,
            Field::Text => &mut self.text,
            Field::Timestamp => &mut self.timestamp,
        }
    }

    #[inline]
    fn is_capturing(&self) -> bool {
        self.current.is_some()
    }

    fn open(&mut self, field: Field) {
        if self.slot(field).is_some() {
            self.current = None;
        } else {
            self.current = Some(field);
            self.scratch.clear();
        }
    }

    fn push_text(&mut self, text: &str) {
        self.scratch.push_str(text);
    }

    fn close(&mut self, field: Field) {
        if self.current == Some(field) {
            let value = std::mem::take(&mut self.scratch);
            *self.slot(field) = Some(value);
            self.current = None;
        }
    }

    /// `<text/>` and friends.
    fn empty(&mut self, field: Field) {
        let slot = self.slot(field);
        if slot.is_none() {
            *slot = Some(String::new());
        }
    }

    /// `None` if the page hit an XML error.
    fn finish(self) -> Option<RawArticle> {
        if self.malformed {
            return None;
        }
        Some(RawArticle::new(
            self.title.unwrap_or_default(),
            self.text.unwrap_or_default(),
            self.id,
            self.timestamp,
        ))
    }
}

/// Streaming decoder of a MediaWiki XML export.
///
/// Implements [Iterator] over the [RawArticle]s that pass the provided [PageFilter].
/// Only the page currently being read is held in memory.
/// The sequence is finite and cannot be restarted.
pub struct WikiDump<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    page: PageBuilder,
    filter: PageFilter,
    stats: DecoderStats,
    consecutive_errors: usize,
    done: bool,
}

/// Dump reader using [MultiBzDecoder] over a [File].
impl WikiDump<BufReader<MultiBzDecoder<File>>> {
    /// Wikimedia dumps are multistream bzip2 files.
    pub fn from_path_bz2<P: AsRef<Path>>(path: P, filter: PageFilter) -> Result<Self, Error> {
        let f = File::open(path)?;
        Ok(Self::new(BufReader::new(MultiBzDecoder::new(f)), filter))
    }
}

/// Dump reader using [MultiGzDecoder] over a [File].
impl WikiDump<BufReader<MultiGzDecoder<File>>> {
    pub fn from_path_gzip<P: AsRef<Path>>(path: P, filter: PageFilter) -> Result<Self, Error> {
        let f = File::open(path)?;
        Ok(Self::new(BufReader::new(MultiGzDecoder::new(f)), filter))
    }
}

impl WikiDump<Box<dyn BufRead + Send>> {
    /// Open a dump, picking the decompression from the file extension
    /// (`.bz2`, `.gz`, anything else is read as plain XML).
    pub fn from_path<P: AsRef<Path>>(path: P, filter: PageFilter) -> Result<Self, Error> {
        let path = path.as_ref();
        let f = File::open(path)?;
        let reader: Box<dyn BufRead + Send> = match path.extension().and_then(|ext| ext.to_str())
        {
            Some("bz2") => Box::new(BufReader::new(MultiBzDecoder::new(f))),
            Some("gz") => Box::new(BufReader::new(MultiGzDecoder::new(f))),
            _ => Box::new(BufReader::new(f)),
        };
        debug!("opened dump {:?}", path);
        Ok(Self::new(reader, filter))
    }
}

impl<R: BufRead> WikiDump<R> {
    pub fn new(reader: R, filter: PageFilter) -> Self {
        let mut reader = Reader::from_reader(reader);
        // real dumps are well formed, but a broken page must not stop the stream.
        reader.config_mut().check_end_names = false;

        Self {
            reader,
            buf: Vec::new(),
            page: PageBuilder::default(),
            filter,
            stats: DecoderStats::default(),
            consecutive_errors: 0,
            done: false,
        }
    }

    pub fn stats(&self) -> &DecoderStats {
        &self.stats
    }

    /// Run the structural inclusion test on a closed page.
    fn evaluate(&mut self, page: Option<RawArticle>) -> Option<RawArticle> {
        self.stats.pages += 1;

        let page = match page {
            Some(page) => page,
            None => {
                self.stats.malformed += 1;
                return None;
            }
        };

        match self.filter.exclusion(&page) {
            Some(exclusion) => {
                debug!("excluded page {:?}: {:?}", page.title(), exclusion);
                self.stats.record(exclusion);
                None
            }
            None => {
                self.stats.yielded += 1;
                Some(page)
            }
        }
    }

    fn read_token(&mut self) -> Token {
        self.buf.clear();
        match self.reader.read_event_into(&mut self.buf) {
            Ok(Event::Start(e)) => Token::Open(Tag::from_local_name(e.local_name().as_ref())),
            Ok(Event::Empty(e)) => Token::Empty(Tag::from_local_name(e.local_name().as_ref())),
            Ok(Event::End(e)) => Token::Close(Tag::from_local_name(e.local_name().as_ref())),
            Ok(Event::Text(e)) if self.page.is_capturing() => match e.unescape() {
                Ok(text) => {
                    self.page.push_text(&text);
                    Token::Skip
                }
                Err(err) => Token::Malformed(err.to_string()),
            },
            Ok(Event::CData(e)) if self.page.is_capturing() => {
                self.page.push_text(&String::from_utf8_lossy(&e));
                Token::Skip
            }
            Ok(Event::Eof) => Token::Eof,
            Ok(_) => Token::Skip,
            Err(quick_xml::Error::Io(e)) => Token::Fatal(e.to_string()),
            Err(e) => Token::Malformed(e.to_string()),
        }
    }
}

impl<R: BufRead> Iterator for WikiDump<R> {
    type Item = RawArticle;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let token = self.read_token();

            if !matches!(token, Token::Malformed(_)) {
                self.consecutive_errors = 0;
            }

            match token {
                Token::Open(Tag::Page) => self.page = PageBuilder::default(),
                Token::Open(Tag::Field(field)) => self.page.open(field),
                Token::Empty(Tag::Field(field)) => self.page.empty(field),
                Token::Close(Tag::Field(field)) => self.page.close(field),
                Token::Close(Tag::Page) => {
                    // reset happens here whatever the outcome of the page.
                    let page = std::mem::take(&mut self.page).finish();
                    if let Some(article) = self.evaluate(page) {
                        return Some(article);
                    }
                }
                Token::Malformed(reason) => {
                    warn!(
                        "malformed xml at byte {}: {}",
                        self.reader.buffer_position(),
                        reason
                    );
                    self.page.malformed = true;
                    self.page.current = None;
                    self.consecutive_errors += 1;
                    if self.consecutive_errors > MAX_CONSECUTIVE_ERRORS {
                        error!("too many consecutive xml errors, stopping");
                        self.stats.truncated = true;
                        self.done = true;
                    }
                }
                Token::Fatal(reason) => {
                    error!("could not read dump: {}", reason);
                    self.stats.truncated = true;
                    self.done = true;
                }
                Token::Eof => {
                    self.done = true;
                }
                Token::Open(_) | Token::Empty(_) | Token::Close(_) | Token::Skip => (),
            }
        }
        None
    }
}
