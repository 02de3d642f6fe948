//! The interactive menu loop.
//!
//! A `Session` owns the API (and with it the registry) for the lifetime of
//! the process, reads menu choices through a [`Prompter`] and renders each
//! `CmdResult`. Only the Exit entry or the end of input stops it.

use super::menu::MenuChoice;
use super::prompt::{Prompter, INVALID_NUMBER};
use super::render;
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::debug;
use unidb::api::{CmdResult, UnidbApi};
use unidb::error::{Result, UnidbError};
use unidb::model::{Faculty, RecordKind, Student};
use unidb::store::Backend;

pub const FAREWELL: &str = "Goodbye! Database session ended.";

pub struct Session<B: Backend, R, W> {
    api: UnidbApi<B>,
    io: Prompter<R, W>,
    confirm_destructive: bool,
}

impl<B: Backend, R: BufRead, W: Write> Session<B, R, W> {
    pub fn new(api: UnidbApi<B>, io: Prompter<R, W>, confirm_destructive: bool) -> Self {
        Self {
            api,
            io,
            confirm_destructive,
        }
    }

    #[cfg(test)]
    pub fn api(&self) -> &UnidbApi<B> {
        &self.api
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.step() {
                Ok(true) => continue,
                Ok(false) => break,
                Err(UnidbError::InputClosed) => {
                    debug!("input closed, ending session");
                    self.io.write("\n")?;
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        let farewell = format!("\n{}\n\n", FAREWELL.green());
        self.io.write(&farewell)
    }

    /// Shows the menu and handles one choice. `Ok(false)` means exit.
    fn step(&mut self) -> Result<bool> {
        self.io.write(&render::main_menu())?;
        let answer = self.io.line("Enter choice: ")?;
        let Ok(number) = answer.trim().parse::<i64>() else {
            self.write_error(INVALID_NUMBER)?;
            return Ok(true);
        };
        let Some(choice) = MenuChoice::from_number(number) else {
            self.write_error("Invalid choice. Please try again.")?;
            return Ok(true);
        };

        debug!(?choice, "menu choice");
        match choice {
            MenuChoice::Add(RecordKind::Student) => self.handle_add_student()?,
            MenuChoice::Add(RecordKind::Faculty) => self.handle_add_faculty()?,
            MenuChoice::Find(kind) => self.handle_find(kind)?,
            MenuChoice::Delete(kind) => self.handle_delete(kind)?,
            MenuChoice::List(kind) => self.handle_list(kind)?,
            MenuChoice::Count(kind) => self.handle_count(kind)?,
            MenuChoice::LoadSample => {
                let result = self.api.load_sample();
                self.print_messages(&result)?;
            }
            MenuChoice::Clear => self.handle_clear()?,
            MenuChoice::Statistics => {
                if let Some(stats) = self.api.stats().stats {
                    self.io.write(&render::stats(&stats))?;
                }
            }
            MenuChoice::Exit => return Ok(false),
        }
        Ok(true)
    }

    fn handle_add_student(&mut self) -> Result<()> {
        self.io.write(&render::heading("ADD NEW STUDENT"))?;
        let id = self.io.number("Enter Student ID: ")?;
        let name = self.io.line("Enter Name: ")?;
        let level = self.io.line("Enter Level (Freshman/Sophomore/Junior/Senior): ")?;
        let major = self.io.line("Enter Major: ")?;
        let gpa = self.io.number("Enter GPA (0.0-4.0): ")?;
        let advisor_id = self.io.number("Enter Advisor ID: ")?;

        let result = self
            .api
            .add_student(Student::new(id, name, level, major, gpa, advisor_id));
        self.print_messages(&result)
    }

    fn handle_add_faculty(&mut self) -> Result<()> {
        self.io.write(&render::heading("ADD NEW FACULTY"))?;
        let id = self.io.number("Enter Faculty ID: ")?;
        let name = self.io.line("Enter Name: ")?;
        let level = self
            .io
            .line("Enter Level (Professor/Associate Professor/Assistant Professor): ")?;
        let department = self.io.line("Enter Department: ")?;

        let result = self
            .api
            .add_faculty(Faculty::new(id, name, level, department));
        self.print_messages(&result)
    }

    fn handle_find(&mut self, kind: RecordKind) -> Result<()> {
        let id = self.io.number(&format!("\nEnter {} ID to find: ", kind))?;
        let result = self.api.find(kind, id);
        for record in &result.listed_records {
            self.io.write(&render::record_card(record))?;
        }
        self.print_messages(&result)
    }

    fn handle_delete(&mut self, kind: RecordKind) -> Result<()> {
        let id = self.io.number(&format!("\nEnter {} ID to delete: ", kind))?;

        let found = self.api.find(kind, id);
        let Some(record) = found.listed_records.first() else {
            return self.print_messages(&found);
        };

        if self.confirm_destructive {
            let question = format!("Are you sure you want to delete {}? (y/n):", record.name());
            if !self.io.confirm(&question)? {
                self.io.write("Deletion cancelled.\n")?;
                return Ok(());
            }
        }

        let result = self.api.delete(kind, id);
        self.print_messages(&result)
    }

    fn handle_list(&mut self, kind: RecordKind) -> Result<()> {
        let result = self.api.list(kind);
        self.io
            .write(&render::record_table(kind, &result.listed_records))?;
        self.print_messages(&result)
    }

    fn handle_count(&mut self, kind: RecordKind) -> Result<()> {
        let result = self.api.count(kind);
        if let Some(count) = result.count {
            self.io.write(&render::count_line(kind, count))?;
        }
        self.print_messages(&result)
    }

    fn handle_clear(&mut self) -> Result<()> {
        if self.confirm_destructive
            && !self
                .io
                .confirm("Clear database? This cannot be undone. (y/n):")?
        {
            self.io.write("Clear cancelled.\n")?;
            return Ok(());
        }
        let result = self.api.clear();
        self.print_messages(&result)
    }

    fn print_messages(&mut self, result: &CmdResult) -> Result<()> {
        if result.messages.is_empty() {
            return Ok(());
        }
        self.io.write(&render::messages(&result.messages))
    }

    fn write_error(&mut self, message: &str) -> Result<()> {
        let line = format!("{}\n", message.red());
        self.io.write(&line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use unidb::store::{Indexed, Linear};

    type TestSession<B> = Session<B, Cursor<Vec<u8>>, Vec<u8>>;

    fn session<B: Backend>(script: &str, confirm: bool) -> TestSession<B> {
        colored::control::set_override(false);
        let io = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        Session::new(UnidbApi::default(), io, confirm)
    }

    fn output<B: Backend>(mut session: TestSession<B>) -> String {
        String::from_utf8(std::mem::take(session.io.out())).unwrap()
    }

    #[test]
    fn end_to_end_scenario() {
        let script = "1\n1\nAlice\nSenior\nComputer Science\n3.9\n101\n\
                      6\n101\nDr. Smith\nProfessor\nComputer Science\n\
                      2\n1\n7\n101\n5\n10\n\
                      3\n1\ny\n2\n1\n5\n14\n";
        let mut s = session::<Linear>(script, true);
        s.run().unwrap();

        assert_eq!(s.api().registry().student_count(), 0);
        assert_eq!(s.api().registry().faculty_count(), 1);

        let out = output(s);
        assert!(out.contains("Student added successfully!"));
        assert!(out.contains("Faculty added successfully!"));
        assert!(out.contains("Name: Alice"));
        assert!(out.contains("Name: Dr. Smith"));
        assert!(out.contains("Total Students: 1"));
        assert!(out.contains("Total Faculty: 1"));
        assert!(out.contains("Are you sure you want to delete Alice?"));
        assert!(out.contains("Student with ID 1 not found."));
        assert!(out.contains("Total Students: 0"));
        assert!(out.contains(FAREWELL));
    }

    #[test]
    fn malformed_input_is_reprompted() {
        let script = "abc\n99\n2\nxyz\n4\n14\n";
        let mut s = session::<Linear>(script, true);
        s.run().unwrap();

        let out = output(s);
        assert_eq!(out.matches(INVALID_NUMBER).count(), 2);
        assert!(out.contains("Invalid choice. Please try again."));
        assert!(out.contains("Student with ID 4 not found."));
    }

    #[test]
    fn declined_delete_keeps_record() {
        let mut s = session::<Indexed>("11\n8\n104\nn\n10\n14\n", true);
        s.run().unwrap();

        assert_eq!(s.api().registry().faculty_count(), 4);
        let out = output(s);
        assert!(out.contains("Loaded 8 students and 4 faculty members."));
        assert!(out.contains("Deletion cancelled."));
        assert!(out.contains("Total Faculty: 4"));
    }

    #[test]
    fn clear_without_confirmation_when_disabled() {
        let mut s = session::<Linear>("11\n12\n4\n14\n", false);
        s.run().unwrap();

        assert_eq!(s.api().registry().student_count(), 0);
        let out = output(s);
        assert!(out.contains("Database cleared."));
        assert!(out.contains("No student records."));
    }

    #[test]
    fn unknown_advisor_is_accepted() {
        let script = "1\n2\nBob\nJunior\nMathematics\n3.5\n999\n7\n999\n14\n";
        let mut s = session::<Linear>(script, true);
        s.run().unwrap();

        assert_eq!(s.api().registry().student_count(), 1);
        let out = output(s);
        assert!(out.contains("Advisor ID 999 does not match any faculty member."));
        assert!(out.contains("Faculty with ID 999 not found."));
    }

    #[test]
    fn garbled_bytes_do_not_end_session() {
        colored::control::set_override(false);
        let io = Prompter::new(
            Cursor::new(b"11\n2\n\xff\xfe\n1\n5\n14\n".to_vec()),
            Vec::new(),
        );
        let mut s: TestSession<Linear> = Session::new(UnidbApi::default(), io, true);
        s.run().unwrap();

        let out = output(s);
        assert!(out.contains(INVALID_NUMBER));
        assert!(out.contains("Name: Alice"));
        assert!(out.contains("Total Students: 8"));
        assert!(out.contains(FAREWELL));
    }

    #[test]
    fn names_keep_surrounding_spaces() {
        let script = "6\n120\n  Dr. Padded \nProfessor\nHistory\n14\n";
        let mut s = session::<Linear>(script, true);
        s.run().unwrap();
        assert_eq!(
            s.api().registry().find_faculty(120).map(|f| f.name.as_str()),
            Some("  Dr. Padded ")
        );
    }

    #[test]
    fn end_of_input_ends_session_cleanly() {
        let mut s = session::<Linear>("11\n", true);
        s.run().unwrap();
        assert!(output(s).contains(FAREWELL));
    }

    #[test]
    fn statistics_screen() {
        let mut s = session::<Linear>("11\n13\n14\n", true);
        s.run().unwrap();
        let out = output(s);
        assert!(out.contains("DATABASE STATISTICS"));
        assert!(out.contains("3.55"));
        assert!(out.contains("101 Dr. Smith"));
    }
}
