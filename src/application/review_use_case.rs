// ============================================================
// Layer 2 — Review Use Case
// ============================================================
// The interactive review form. Reads one command per line,
// turns it into exactly one session transition, then redraws
// the form:
//
//   Step 1: Parse the line into a Command
//   Step 2: Apply it to the AnnotationSession (or load / export)
//   Step 3: Report the outcome, or why the action is disabled
//   Step 4: Render the current document, prompt and note
//
// Input and output are generic (BufRead / Write) so the whole
// loop runs in tests without a terminal.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::application::exporter::{self, DEFAULT_EXPORT_FILE};
use crate::application::session::{AnnotationSession, SessionState};
use crate::data::loader::XlsxLoader;
use crate::domain::{
    judgment::Judgment,
    row::Cell,
    traits::{DatasetSource, TableSink},
};
use crate::infra::export_writer::XlsxExportWriter;

const PROMPT: &str = "Is the label provided for this document correct? Keyboard shortcuts: c, w, u.";
const DONE: &str = "All documents have been annotated. Thank you!";
const UPLOAD_HINT: &str = "Please open an Excel file (o <path>). Each row should be a document. \
There should be either two (text, label) or three (name, text, label) columns.";

const HELP: &str = "\
Commands:
  c | w | u      judge the label Correct / Wrong / Unsure
  n <text>       set the note for the next judgment (n alone clears it)
  b              go back to previous
  s [path]       download user annotations (default: annotations.xlsx)
  o <path>       open a spreadsheet (starts a new session)
  x              close the file and reset the session
  h | ?          show this help
  q              quit";

// ─── Review Configuration ────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewConfig {
    /// Spreadsheet to open at startup, if any
    pub input:  Option<PathBuf>,
    /// Worksheet to read; the first one when None
    pub sheet:  Option<String>,
    /// Where `s` writes when no path is given
    pub output: PathBuf,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            input:  None,
            sheet:  None,
            output: PathBuf::from(DEFAULT_EXPORT_FILE),
        }
    }
}

// ─── Commands ─────────────────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Judge(Judgment),
    Note(String),
    Back,
    Save(Option<PathBuf>),
    Open(PathBuf),
    Close,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    /// Parse one input line. Blank lines yield None.
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None               => (line, ""),
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "n" | "note"           => Command::Note(rest.to_string()),
            "b" | "back"           => Command::Back,
            "s" | "save"           => Command::Save((!rest.is_empty()).then(|| PathBuf::from(rest))),
            "o" | "open" if !rest.is_empty() => Command::Open(PathBuf::from(rest)),
            "x" | "close"          => Command::Close,
            "h" | "?" | "help"     => Command::Help,
            "q" | "quit" | "exit"  => Command::Quit,
            _ => match head.parse::<Judgment>() {
                Ok(j) if rest.is_empty() => Command::Judge(j),
                _ => Command::Unknown(line.to_string()),
            },
        };
        Some(command)
    }
}

enum Flow {
    Continue,
    Quit,
}

// ─── ReviewUseCase ────────────────────────────────────────────────────────────
pub struct ReviewUseCase {
    config:  ReviewConfig,
    session: AnnotationSession,
    sink:    Box<dyn TableSink>,
}

impl ReviewUseCase {
    pub fn new(config: ReviewConfig) -> Self {
        Self::with_sink(config, Box::new(XlsxExportWriter::new()))
    }

    pub fn with_sink(config: ReviewConfig, sink: Box<dyn TableSink>) -> Self {
        Self { config, session: AnnotationSession::new(), sink }
    }

    pub fn session(&self) -> &AnnotationSession {
        &self.session
    }

    /// Run the form until `q` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        if let Some(path) = self.config.input.clone() {
            self.open(&path, out)?;
        }
        self.render(out)?;

        for line in input.lines() {
            let Some(command) = Command::parse(&line?) else {
                continue;
            };
            if let Flow::Quit = self.handle(command, out)? {
                break;
            }
            self.render(out)?;
        }

        tracing::info!(
            "Review finished: {} of {} documents annotated",
            self.session.cursor(),
            self.session.dataset().map_or(0, |ds| ds.len())
        );
        Ok(())
    }

    /// "Upload" a file. On failure the message is shown and the
    /// current session is left exactly as it was.
    pub fn open<W: Write>(&mut self, path: &Path, out: &mut W) -> Result<()> {
        let loader = XlsxLoader::new(path).with_sheet(self.config.sheet.clone());
        match loader.load() {
            Ok(dataset) => {
                if dataset.is_empty() {
                    writeln!(out, "Opened '{}', but it contains no documents.", path.display())?;
                } else {
                    writeln!(out, "Opened '{}' ({} documents).", path.display(), dataset.len())?;
                }
                self.session.load(dataset);
            }
            Err(e) => {
                tracing::warn!("Rejected '{}': {e:#}", path.display());
                writeln!(out, "Error: {e:#}")?;
            }
        }
        Ok(())
    }

    fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        match command {
            Command::Judge(judgment) => {
                let name = self.session.current_row().map(|row| row.name);
                match self.session.judge(judgment) {
                    Ok(()) => writeln!(
                        out,
                        "You selected {judgment} for document {}.",
                        name.unwrap_or_default()
                    )?,
                    Err(e) => self.reject(out, &e)?,
                }
            }
            Command::Note(text) => {
                if let Err(e) = self.session.set_note(text) {
                    self.reject(out, &e)?;
                }
            }
            Command::Back => {
                if self.session.can_go_back() {
                    self.session.go_back();
                } else {
                    writeln!(out, "Already at the first document.")?;
                }
            }
            Command::Save(path) => {
                let path = path.unwrap_or_else(|| self.config.output.clone());
                match exporter::export_to(&self.session, self.sink.as_ref(), &path) {
                    Ok(count) => writeln!(
                        out,
                        "Saved {count} annotations to '{}'.",
                        path.display()
                    )?,
                    Err(e) => {
                        tracing::warn!("Export failed: {e:#}");
                        writeln!(out, "Error: {e:#}")?;
                    }
                }
            }
            Command::Open(path) => self.open(&path, out)?,
            Command::Close => {
                self.session.clear();
                writeln!(out, "File closed. Session reset.")?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(line) => {
                writeln!(out, "Unknown command '{line}'. Type h for help.")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn reject<W: Write>(&self, out: &mut W, error: &dyn std::error::Error) -> Result<()> {
        tracing::warn!("Action rejected: {error}");
        writeln!(out, "{error}")?;
        Ok(())
    }

    /// Draw the form for the current state.
    fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out)?;
        match self.session.state() {
            SessionState::Empty => {
                writeln!(out, "{UPLOAD_HINT}")?;
                return Ok(());
            }
            SessionState::Active => {
                if let Some(row) = self.session.current_row() {
                    writeln!(out, "Document {} ({}/{})", row.name, row.index + 1, row.total)?;
                    write_field(out, &row.text_header, &row.text)?;
                    write_field(out, &row.label_header, &row.label)?;
                    writeln!(out, "---")?;
                }
                writeln!(out, "{PROMPT}")?;
            }
            SessionState::Complete => writeln!(out, "{DONE}")?,
        }

        if !self.session.pending_note().is_empty() {
            writeln!(out, "Notes: {}", self.session.pending_note())?;
        }
        if self.session.can_export() {
            writeln!(
                out,
                "{} annotated. Type s to download user annotations.",
                self.session.annotations().len()
            )?;
        }
        Ok(())
    }
}

/// Column header underlined, then its value
fn write_field<W: Write>(out: &mut W, header: &str, value: &Cell) -> Result<()> {
    writeln!(out, "{header}")?;
    writeln!(out, "{}", "-".repeat(header.chars().count().max(1)))?;
    if value.is_empty() {
        writeln!(out, "(empty)")?;
    } else {
        writeln!(out, "{value}")?;
    }
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::exporter::AnnotatedTable;
    use std::cell::RefCell;
    use std::io::Cursor;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedSink(Rc<RefCell<Vec<(PathBuf, AnnotatedTable)>>>);

    impl TableSink for SharedSink {
        fn write(&self, table: &AnnotatedTable, path: &Path) -> Result<()> {
            self.0.borrow_mut().push((path.to_path_buf(), table.clone()));
            Ok(())
        }
    }

    fn write_input(dir: &Path, rows: &[[&str; 3]]) -> PathBuf {
        let path = dir.join("input.xlsx");
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        for (c, h) in ["name", "text", "label"].iter().enumerate() {
            sheet.write_string(0, c as u16, *h).unwrap();
        }
        for (r, row) in rows.iter().enumerate() {
            for (c, v) in row.iter().enumerate() {
                sheet.write_string(r as u32 + 1, c as u16, *v).unwrap();
            }
        }
        workbook.save(&path).unwrap();
        path
    }

    fn run_script(config: ReviewConfig, script: &str) -> (ReviewUseCase, SharedSink, String) {
        let sink = SharedSink::default();
        let mut review = ReviewUseCase::with_sink(config, Box::new(sink.clone()));
        let mut out = Vec::new();
        review.run(Cursor::new(script.to_string()), &mut out).unwrap();
        (review, sink, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("c"), Some(Command::Judge(Judgment::Correct)));
        assert_eq!(Command::parse(" W "), Some(Command::Judge(Judgment::Wrong)));
        assert_eq!(Command::parse("unsure"), Some(Command::Judge(Judgment::Unsure)));
        assert_eq!(Command::parse("n  spelling issue "), Some(Command::Note("spelling issue".into())));
        assert_eq!(Command::parse("n"), Some(Command::Note(String::new())));
        assert_eq!(Command::parse("s"), Some(Command::Save(None)));
        assert_eq!(Command::parse("s out.xlsx"), Some(Command::Save(Some("out.xlsx".into()))));
        assert_eq!(Command::parse("o data.xlsx"), Some(Command::Open("data.xlsx".into())));
        assert_eq!(Command::parse("o"), Some(Command::Unknown("o".into())));
        assert_eq!(Command::parse("c extra"), Some(Command::Unknown("c extra".into())));
        assert_eq!(Command::parse("   "), None);
    }

    #[test]
    fn test_full_review_and_save() {
        let dir   = tempfile::tempdir().unwrap();
        let input = write_input(dir.path(), &[["doc1", "a", "X"], ["doc2", "b", "Y"]]);
        let config = ReviewConfig { input: Some(input), ..ReviewConfig::default() };

        let (review, sink, out) = run_script(config, "c\nn typo\nw\nc\ns\nq\n");

        assert!(out.contains("Document doc1 (1/2)"));
        assert!(out.contains("Document doc2 (2/2)"));
        assert!(out.contains(DONE));
        // The extra `c` after completion is refused
        assert!(out.contains("already been annotated"));

        let session = review.session();
        assert_eq!(session.annotations(), &[Judgment::Correct, Judgment::Wrong]);
        assert_eq!(session.notes(), &["", "typo"]);

        let written = sink.0.borrow();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].0, PathBuf::from("annotations.xlsx"));
        assert_eq!(written[0].1.rows[1][3..], [Cell::text("Wrong"), Cell::text("typo")]);
    }

    #[test]
    fn test_save_disabled_before_first_judgment() {
        let dir   = tempfile::tempdir().unwrap();
        let input = write_input(dir.path(), &[["doc1", "a", "X"]]);
        let config = ReviewConfig { input: Some(input), ..ReviewConfig::default() };

        let (_, sink, out) = run_script(config, "s\n");
        assert!(out.contains("nothing has been annotated yet"));
        assert!(sink.0.borrow().is_empty());
    }

    #[test]
    fn test_back_and_close() {
        let dir   = tempfile::tempdir().unwrap();
        let input = write_input(dir.path(), &[["doc1", "a", "X"], ["doc2", "b", "Y"]]);
        let config = ReviewConfig { input: Some(input), ..ReviewConfig::default() };

        let (review, _, out) = run_script(config, "b\nu\nb\nc\nx\n");
        assert!(out.contains("Already at the first document."));
        assert!(out.contains("File closed. Session reset."));
        assert_eq!(review.session().state(), SessionState::Empty);
        assert_eq!(review.session().cursor(), 0);
        assert!(review.session().annotations().is_empty());
    }

    #[test]
    fn test_single_column_file_is_rejected() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("one.xlsx");
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "text").unwrap();
        sheet.write_string(1, 0, "a").unwrap();
        workbook.save(&path).unwrap();

        let config = ReviewConfig { input: Some(path), ..ReviewConfig::default() };
        let (review, _, out) = run_script(config, "c\n");

        assert!(out.contains("at least 2 columns"));
        assert!(out.contains("no file is loaded"));
        assert_eq!(review.session().state(), SessionState::Empty);
    }

    #[test]
    fn test_failed_open_keeps_current_session() {
        let dir   = tempfile::tempdir().unwrap();
        let input = write_input(dir.path(), &[["doc1", "a", "X"], ["doc2", "b", "Y"]]);
        let config = ReviewConfig { input: Some(input), ..ReviewConfig::default() };

        let missing = dir.path().join("missing.xlsx");
        let script  = format!("c\no {}\n", missing.display());
        let (review, _, out) = run_script(config, &script);

        assert!(out.contains("Error:"));
        assert_eq!(review.session().cursor(), 1);
        assert_eq!(review.session().state(), SessionState::Active);
    }

    #[test]
    fn test_no_input_shows_upload_hint() {
        let (_, _, out) = run_script(ReviewConfig::default(), "w\nq\n");
        assert!(out.contains("Please open an Excel file"));
        assert!(out.contains("no file is loaded"));
    }
}
