use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, UdGuardError};
use crate::model::{AttrBag, Document, Node, Sentence, SpanToken};

/// Loads a CoNLL-U file into a [`Document`].
///
/// Any malformed input is a fatal load error, kept separate from validation
/// diagnostics: the validator only ever sees fully materialized documents.
///
/// # Errors
/// `FileRead` when the file cannot be read, `Parse` on malformed content.
pub fn load_file(path: &Path) -> Result<Document> {
    let content = fs::read_to_string(path).map_err(|source| UdGuardError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&content, path)
}

/// Parses CoNLL-U text; `source` is only used to address parse errors.
///
/// # Errors
/// `Parse` on malformed content.
pub fn parse_str(input: &str, source: &Path) -> Result<Document> {
    let mut parser = Parser::new(source);
    for (idx, line) in input.lines().enumerate() {
        parser.feed(idx + 1, line)?;
    }
    parser.finish()
}

struct Parser {
    source: PathBuf,
    sentences: Vec<Sentence>,
    sent_id: Option<String>,
    newdoc: bool,
    nodes: Vec<Node>,
    spans: Vec<SpanToken>,
    started_at: usize,
}

impl Parser {
    fn new(source: &Path) -> Self {
        Self {
            source: source.to_path_buf(),
            sentences: Vec::new(),
            sent_id: None,
            newdoc: false,
            nodes: Vec::new(),
            spans: Vec::new(),
            started_at: 0,
        }
    }

    fn feed(&mut self, line_no: usize, line: &str) -> Result<()> {
        if line.trim().is_empty() {
            return self.flush(line_no);
        }
        if let Some(comment) = line.strip_prefix('#') {
            self.comment(comment);
            return Ok(());
        }
        if self.nodes.is_empty() && self.spans.is_empty() {
            self.started_at = line_no;
        }
        self.token(line_no, line)
    }

    fn comment(&mut self, comment: &str) {
        let comment = comment.trim();
        if comment == "newdoc" || comment.starts_with("newdoc id") {
            self.newdoc = true;
        } else if let Some(value) = comment.strip_prefix("sent_id") {
            let value = value.trim_start().trim_start_matches('=').trim();
            if !value.is_empty() {
                self.sent_id = Some(value.to_string());
            }
        }
    }

    fn token(&mut self, line_no: usize, line: &str) -> Result<()> {
        let cols: Vec<&str> = line.split('\t').collect();
        if cols.len() != 10 {
            return Err(self.err(line_no, format!("expected 10 columns, found {}", cols.len())));
        }

        let id_col = cols[0];
        if let Some((from, to)) = id_col.split_once('-') {
            let from = self.parse_id(line_no, from)?;
            let to = self.parse_id(line_no, to)?;
            self.spans.push(SpanToken {
                from,
                to,
                form: cols[1].to_string(),
            });
            return Ok(());
        }
        if id_col.contains('.') {
            // Enhanced-representation empty nodes carry no basic-tree
            // annotation; they are not part of the dependency view.
            return Ok(());
        }

        let id = self.parse_id(line_no, id_col)?;
        let upos = cols[3]
            .parse()
            .map_err(|e: String| self.err(line_no, e))?;
        let head = cols[6]
            .parse()
            .map_err(|_| self.err(line_no, format!("invalid HEAD: {}", cols[6])))?;

        let feats = self.parse_attrs(line_no, cols[5], "FEATS")?;
        let misc = self.parse_attrs(line_no, cols[9], "MISC")?;

        self.nodes.push(Node {
            id,
            form: cols[1].to_string(),
            lemma: cols[2].to_string(),
            upos,
            xpos: unset_to_empty(cols[4]),
            head,
            deprel: cols[7].to_string(),
            feats,
            misc,
        });
        Ok(())
    }

    fn parse_id(&self, line_no: usize, text: &str) -> Result<usize> {
        match text.parse::<usize>() {
            Ok(id) if id > 0 => Ok(id),
            _ => Err(self.err(line_no, format!("invalid token id: {text}"))),
        }
    }

    fn parse_attrs(&self, line_no: usize, column: &str, label: &str) -> Result<AttrBag> {
        let mut bag = AttrBag::new();
        if column == "_" {
            return Ok(bag);
        }
        for pair in column.split('|') {
            let Some((key, values)) = pair.split_once('=') else {
                return Err(self.err(line_no, format!("malformed {label} entry: {pair}")));
            };
            for value in values.split(',') {
                bag.insert(key, value);
            }
        }
        Ok(bag)
    }

    fn flush(&mut self, line_no: usize) -> Result<()> {
        if self.nodes.is_empty() && self.spans.is_empty() {
            // Stray comments between sentences carry over (newdoc usually
            // precedes the sent_id block); nothing to flush yet.
            return Ok(());
        }
        let Some(sent_id) = self.sent_id.take() else {
            return Err(self.err(
                self.started_at.min(line_no),
                "sentence has no sent_id declaration".to_string(),
            ));
        };
        let nodes = std::mem::take(&mut self.nodes);
        let spans = std::mem::take(&mut self.spans);
        self.sentences
            .push(Sentence::new(sent_id, self.newdoc, nodes, spans));
        self.newdoc = false;
        Ok(())
    }

    fn finish(mut self) -> Result<Document> {
        self.flush(usize::MAX)?;
        Ok(Document::new(self.sentences))
    }

    fn err(&self, line: usize, message: String) -> UdGuardError {
        UdGuardError::Parse {
            path: self.source.clone(),
            line,
            message,
        }
    }
}

fn unset_to_empty(column: &str) -> String {
    if column == "_" {
        String::new()
    } else {
        column.to_string()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
