//! Shell state machine: one input line in, rendered output out.
//!
//! The session remembers which view is open and on which page, so `N` and
//! `P` move within whatever was shown last. All I/O goes through the
//! `Write` handed to [`Session::execute`], which keeps it testable against
//! an in-memory buffer.

use engine::{Catalog, Page, SearchOutcome};
use record::Record;
use std::io::{self, Write};

/// Which ordering is being paged through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Load order.
    Initial,
    /// Key order.
    Sorted,
}

/// Whether the read loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub const HELP: &str = "\
Commands:
  I | INITIAL       show records in file order
  S | SORTED        show records sorted by surname key
  N | NEXT          next page of the current view
  P | PREV          previous page of the current view
  PAGE n            jump to page n of the current view
  F | FIND key      list records whose key starts like `key` (3 chars)
  STATS             catalog summary
  HELP              this text
  EXIT | QUIT | ESC leave";

#[derive(Debug, Default)]
pub struct Session {
    view: Option<View>,
    /// Zero-based, always the clamped index of the last rendered page.
    page: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> Option<View> {
        self.view
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Runs one command line against `catalog`, writing the response to
    /// `out`.
    ///
    /// # Errors
    ///
    /// Only write failures on `out` are errors; bad input is answered with
    /// an `ERR` line.
    pub fn execute<W: Write>(
        &mut self,
        catalog: &mut Catalog,
        line: &str,
        out: &mut W,
    ) -> io::Result<Flow> {
        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            return Ok(Flow::Continue);
        };

        // Single-letter commands also accept the key at the same position on
        // a Russian keyboard layout.
        match cmd.to_lowercase().as_str() {
            "i" | "ш" | "initial" => self.open(View::Initial, 0, catalog, out)?,
            "s" | "ы" | "sorted" => self.open(View::Sorted, 0, catalog, out)?,
            "n" | "т" | "next" => match self.view {
                Some(view) => self.open(view, self.page.saturating_add(1), catalog, out)?,
                None => writeln!(out, "ERR no view open (use I or S first)")?,
            },
            "p" | "з" | "prev" => match self.view {
                Some(view) => self.open(view, self.page.saturating_sub(1), catalog, out)?,
                None => writeln!(out, "ERR no view open (use I or S first)")?,
            },
            "page" => {
                let target = parts.next().and_then(|n| n.parse::<usize>().ok());
                match (self.view, target) {
                    (Some(view), Some(n)) if n >= 1 => self.open(view, n - 1, catalog, out)?,
                    (None, _) => writeln!(out, "ERR no view open (use I or S first)")?,
                    _ => writeln!(out, "ERR usage: PAGE n (n >= 1)")?,
                }
            }
            "f" | "а" | "find" => {
                // The key is taken verbatim: its spacing is part of the prefix.
                let key = line
                    .trim_start()
                    .split_once(char::is_whitespace)
                    .map_or("", |(_, rest)| rest);
                self.find(key, catalog, out)?;
            }
            "stats" => writeln!(out, "{:?}", catalog)?,
            "help" => writeln!(out, "{HELP}")?,
            "exit" | "quit" | "esc" => {
                writeln!(out, "bye")?;
                return Ok(Flow::Exit);
            }
            other => writeln!(out, "unknown command: {}", other)?,
        }

        Ok(Flow::Continue)
    }

    fn open<W: Write>(
        &mut self,
        view: View,
        page: usize,
        catalog: &mut Catalog,
        out: &mut W,
    ) -> io::Result<()> {
        let page = match view {
            View::Initial => catalog.initial_page(page),
            View::Sorted => catalog.sorted_page(page),
        };
        self.view = Some(view);
        self.page = page.index;
        render_page(&page, out)
    }

    fn find<W: Write>(&self, key: &str, catalog: &mut Catalog, out: &mut W) -> io::Result<()> {
        match catalog.search(key) {
            SearchOutcome::Found(queue) => {
                let found = queue.len();
                writeln!(out, "Records:")?;
                for id in queue {
                    render_row(catalog.record(id), out)?;
                }
                writeln!(out, "({} found)", found)?;
            }
            SearchOutcome::NotFound => writeln!(out, "Error! Not found [{}]", key)?,
        }
        Ok(())
    }
}

fn render_page<W: Write>(page: &Page<'_>, out: &mut W) -> io::Result<()> {
    writeln!(out, "Page: {} / {}", page.number(), page.total)?;
    writeln!(
        out,
        "{:>12}\t{:>30}\t{}\t{}\t{}",
        "Author", "Title", "Publisher", "Year", "Page"
    )?;
    for record in &page.rows {
        render_row(record, out)?;
    }
    Ok(())
}

fn render_row<W: Write>(record: &Record, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{:>12}\t{:>30}\t{}\t{}\t{}",
        record.author(),
        record.title(),
        record.publisher(),
        record.year(),
        record.page_count()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(author: &str, title: &str) -> Record {
        Record::new(author, title, "Pub", 1999, 120).unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::from_records(
            vec![
                book("Zed", "Mr Hugo Zeller"),
                book("Abe", "Ms Ann Abbott"),
                book("Kay", "Dr Kim Keller"),
                book("Abo", "Mr Al Abbey"),
                book("Lee", "Mx Lou Lee"),
            ],
            2,
        )
    }

    fn run(session: &mut Session, catalog: &mut Catalog, line: &str) -> (Flow, String) {
        let mut out = Vec::new();
        let flow = session.execute(catalog, line, &mut out).unwrap();
        (flow, String::from_utf8(out).unwrap())
    }

    #[test]
    fn initial_shows_first_page_in_load_order() {
        let mut catalog = catalog();
        let mut session = Session::new();

        let (flow, out) = run(&mut session, &mut catalog, "I");
        assert_eq!(flow, Flow::Continue);
        assert!(out.starts_with("Page: 1 / 3\n"));
        let zeller = out.find("Mr Hugo Zeller").unwrap();
        let abbott = out.find("Ms Ann Abbott").unwrap();
        assert!(zeller < abbott);
        assert!(!out.contains("Keller"));
        assert_eq!(session.view(), Some(View::Initial));
        assert!(!catalog.is_sorted());
    }

    #[test]
    fn sorted_pages_follow_key_order() {
        let mut catalog = catalog();
        let mut session = Session::new();

        let (_, out) = run(&mut session, &mut catalog, "s");
        assert!(out.contains("Mr Al Abbey"));
        assert!(out.contains("Ms Ann Abbott"));
        assert!(catalog.is_sorted());

        let (_, out) = run(&mut session, &mut catalog, "n");
        assert!(out.starts_with("Page: 2 / 3\n"));
        assert!(out.contains("Dr Kim Keller"));
        assert!(out.contains("Mx Lou Lee"));
    }

    #[test]
    fn paging_is_clamped_at_both_ends() {
        let mut catalog = catalog();
        let mut session = Session::new();

        run(&mut session, &mut catalog, "I");
        let (_, out) = run(&mut session, &mut catalog, "P");
        assert!(out.starts_with("Page: 1 / 3\n"));

        for _ in 0..5 {
            run(&mut session, &mut catalog, "N");
        }
        assert_eq!(session.page(), 2);
        let (_, out) = run(&mut session, &mut catalog, "page 99");
        assert!(out.starts_with("Page: 3 / 3\n"));
        assert!(out.contains("Mx Lou Lee"));
    }

    #[test]
    fn page_command_rejects_bad_numbers() {
        let mut catalog = catalog();
        let mut session = Session::new();

        let (_, out) = run(&mut session, &mut catalog, "PAGE 2");
        assert!(out.starts_with("ERR no view open"));

        run(&mut session, &mut catalog, "S");
        let (_, out) = run(&mut session, &mut catalog, "PAGE 0");
        assert!(out.starts_with("ERR usage"));
        let (_, out) = run(&mut session, &mut catalog, "PAGE x");
        assert!(out.starts_with("ERR usage"));
        let (_, out) = run(&mut session, &mut catalog, "PAGE 2");
        assert!(out.starts_with("Page: 2 / 3\n"));
    }

    #[test]
    fn next_without_view_is_an_error() {
        let mut catalog = catalog();
        let mut session = Session::new();

        let (flow, out) = run(&mut session, &mut catalog, "N");
        assert_eq!(flow, Flow::Continue);
        assert!(out.starts_with("ERR no view open"));
        assert_eq!(session.view(), None);
    }

    #[test]
    fn find_lists_matches_in_key_order() {
        let mut catalog = catalog();
        let mut session = Session::new();

        let (_, out) = run(&mut session, &mut catalog, "F ABB");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Records:");
        assert!(lines[1].contains("Mr Al Abbey"));
        assert!(lines[2].contains("Ms Ann Abbott"));
        assert_eq!(lines[3], "(2 found)");
        assert!(catalog.is_sorted());
    }

    #[test]
    fn find_miss_echoes_the_key() {
        let mut catalog = catalog();
        let mut session = Session::new();

        let (_, out) = run(&mut session, &mut catalog, "find Qux");
        assert_eq!(out, "Error! Not found [Qux]\n");
    }

    #[test]
    fn find_keeps_spacing_of_the_key() {
        let mut catalog = Catalog::from_records(vec![book("Xu", "x y a  b")], 20);
        let mut session = Session::new();

        let (_, out) = run(&mut session, &mut catalog, "F a  b");
        assert!(out.starts_with("Records:\n"));
        assert!(out.contains("x y a  b"));

        let (_, out) = run(&mut session, &mut catalog, "  find  a b");
        assert_eq!(out, "Error! Not found [ a b]\n");
    }

    #[test]
    fn russian_layout_aliases() {
        let mut catalog = catalog();
        let mut session = Session::new();

        let (_, out) = run(&mut session, &mut catalog, "ы");
        assert!(out.starts_with("Page: 1 / 3\n"));
        assert_eq!(session.view(), Some(View::Sorted));

        let (_, out) = run(&mut session, &mut catalog, "т");
        assert!(out.starts_with("Page: 2 / 3\n"));

        let (_, out) = run(&mut session, &mut catalog, "а lee");
        assert!(out.starts_with("Records:\n"));
    }

    #[test]
    fn rows_are_right_aligned() {
        let mut out = Vec::new();
        render_row(&book("Abe", "Ms Ann Abbott"), &mut out).unwrap();
        let line = String::from_utf8(out).unwrap();
        assert_eq!(
            line,
            format!("{:>12}\t{:>30}\tPub\t1999\t120\n", "Abe", "Ms Ann Abbott")
        );
    }

    #[test]
    fn unknown_blank_and_exit() {
        let mut catalog = catalog();
        let mut session = Session::new();

        let (flow, out) = run(&mut session, &mut catalog, "   ");
        assert_eq!(flow, Flow::Continue);
        assert!(out.is_empty());

        let (_, out) = run(&mut session, &mut catalog, "frobnicate");
        assert_eq!(out, "unknown command: frobnicate\n");

        let (flow, out) = run(&mut session, &mut catalog, "QUIT");
        assert_eq!(flow, Flow::Exit);
        assert_eq!(out, "bye\n");
    }
}
