//! Interactive numbered menu

use crate::application::Notebooks;
use crate::cli::output::{format_note, format_note_list};
use crate::domain::note::DATE_FORMAT;
use crate::domain::DateQuery;
use crate::error::Result;
use crate::infrastructure::Encoding;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Menu entries, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListAll,
    Add,
    Edit,
    Delete,
    ListByDate,
    FindById,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::ListAll),
            "2" => Ok(MenuChoice::Add),
            "3" => Ok(MenuChoice::Edit),
            "4" => Ok(MenuChoice::Delete),
            "5" => Ok(MenuChoice::ListByDate),
            "6" => Ok(MenuChoice::FindById),
            "7" => Ok(MenuChoice::Exit),
            other => Err(format!("Invalid choice: '{}'", other)),
        }
    }
}

const MENU: &str = "\nMenu:\n\
    1. List notes\n\
    2. Add note\n\
    3. Edit note\n\
    4. Delete note\n\
    5. List notes by date\n\
    6. Find note by id\n\
    7. Exit\n";

pub const NOT_FOUND: &str = "Note not found.";

/// Menu loop over arbitrary input and output streams
pub struct Menu<'a, R, W> {
    books: &'a mut Notebooks,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(books: &'a mut Notebooks, input: R, output: W) -> Self {
        Menu {
            books,
            input,
            output,
        }
    }

    /// Run until the user picks exit or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                return Ok(());
            };

            let choice = match MenuChoice::from_str(&line) {
                Ok(choice) => choice,
                Err(_) => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    continue;
                }
            };

            if !self.dispatch(choice)? {
                return Ok(());
            }
        }
    }

    /// Execute one choice; `false` stops the loop
    fn dispatch(&mut self, choice: MenuChoice) -> Result<bool> {
        if choice == MenuChoice::Exit {
            return Ok(false);
        }
        let Some(encoding) = self.read_encoding()? else {
            return Ok(false);
        };

        let completed = match choice {
            MenuChoice::ListAll => {
                let listing = format_note_list(self.books.get(encoding).list());
                writeln!(self.output, "{}", listing)?;
                true
            }
            MenuChoice::Add => self.add(encoding)?,
            MenuChoice::Edit => self.edit(encoding)?,
            MenuChoice::Delete => self.delete(encoding)?,
            MenuChoice::ListByDate => self.list_by_date(encoding)?,
            MenuChoice::FindById => self.find_by_id(encoding)?,
            MenuChoice::Exit => false,
        };
        Ok(completed)
    }

    fn add(&mut self, encoding: Encoding) -> Result<bool> {
        let Some(title) = self.prompt("Enter note title: ")? else {
            return Ok(false);
        };
        let Some(body) = self.prompt("Enter note text: ")? else {
            return Ok(false);
        };

        let note = self.books.get_mut(encoding).add(&title, &body)?;
        writeln!(self.output, "Note {} added.", note.id)?;
        Ok(true)
    }

    fn edit(&mut self, encoding: Encoding) -> Result<bool> {
        let Some(id) = self.read_id("Enter note id: ")? else {
            return Ok(false);
        };
        if self.books.get(encoding).find_by_id(id).is_none() {
            writeln!(self.output, "{}", NOT_FOUND)?;
            return Ok(true);
        }

        let Some(title) = self.prompt("Enter new title: ")? else {
            return Ok(false);
        };
        let Some(body) = self.prompt("Enter new text: ")? else {
            return Ok(false);
        };

        if self.books.get_mut(encoding).edit(id, &title, &body)? {
            writeln!(self.output, "Note {} updated.", id)?;
        } else {
            writeln!(self.output, "{}", NOT_FOUND)?;
        }
        Ok(true)
    }

    fn delete(&mut self, encoding: Encoding) -> Result<bool> {
        let Some(id) = self.read_id("Enter id of the note to delete: ")? else {
            return Ok(false);
        };

        if self.books.get_mut(encoding).delete(id)? {
            writeln!(self.output, "Note {} deleted.", id)?;
        } else {
            writeln!(self.output, "{}", NOT_FOUND)?;
        }
        Ok(true)
    }

    fn list_by_date(&mut self, encoding: Encoding) -> Result<bool> {
        let query = loop {
            let Some(line) = self.prompt("Enter date (DD-MM-YYYY): ")? else {
                return Ok(false);
            };
            match DateQuery::parse(&line) {
                Ok(query) => break query,
                Err(e) => writeln!(self.output, "{}. Expected DD-MM-YYYY.", e)?,
            }
        };

        let repo = self.books.get(encoding);
        let date = query.resolve(repo.today());
        let notes = repo.find_by_date(date);
        if notes.is_empty() {
            writeln!(self.output, "No notes found for {}", date.format(DATE_FORMAT))?;
        } else {
            writeln!(self.output, "{}", format_note_list(notes))?;
        }
        Ok(true)
    }

    fn find_by_id(&mut self, encoding: Encoding) -> Result<bool> {
        let Some(id) = self.read_id("Enter note id: ")? else {
            return Ok(false);
        };

        match self.books.get(encoding).find_by_id(id) {
            Some(note) => write!(self.output, "{}", format_note(note))?,
            None => writeln!(self.output, "{}", NOT_FOUND)?,
        }
        Ok(true)
    }

    fn read_encoding(&mut self) -> Result<Option<Encoding>> {
        loop {
            let Some(line) = self.prompt("Choose format (1 = json, 2 = csv): ")? else {
                return Ok(None);
            };
            match Encoding::from_str(&line) {
                Ok(encoding) => return Ok(Some(encoding)),
                Err(msg) => writeln!(self.output, "{}", msg)?,
            }
        }
    }

    fn read_id(&mut self, text: &str) -> Result<Option<u64>> {
        loop {
            let Some(line) = self.prompt(text)? else {
                return Ok(None);
            };
            match line.trim().parse::<u64>() {
                Ok(id) => return Ok(Some(id)),
                Err(_) => writeln!(
                    self.output,
                    "Invalid note id: '{}'. Please enter a whole number.",
                    line.trim()
                )?,
            }
        }
    }

    /// Print `text` and read one line; `None` at end of input
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
