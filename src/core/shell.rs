use crate::core::command::Command;
use crate::core::waitlist::Waitlist;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use std::io::{BufRead, Write};
use std::ops::ControlFlow;

const CHOICE_PROMPT: &str = "Choose an option (1–5): ";
const EMPTY_NAME: &str = "Name cannot be empty.";

/// Text menu over a line reader and a writer, owning one [`Waitlist`].
///
/// All rendering of waitlist results happens here; the waitlist itself only
/// returns data and status.
pub struct Shell<R, W> {
    waitlist: Waitlist,
    title: String,
    trim_input: bool,
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new<C: ConfigProvider + ?Sized>(reader: R, writer: W, config: &C) -> Self {
        Self {
            waitlist: Waitlist::new(),
            title: config.title().to_string(),
            trim_input: config.trim_input(),
            reader,
            writer,
        }
    }

    /// Run until the user exits or input ends, returning the final waitlist.
    pub fn run(mut self) -> Result<Waitlist> {
        tracing::debug!("Shell started (trim_input={})", self.trim_input);

        loop {
            self.render_menu()?;

            let Some(choice) = self.prompt(CHOICE_PROMPT)? else {
                tracing::debug!("Input closed at menu prompt");
                break;
            };

            let command = match Command::parse(&choice) {
                Ok(command) => command,
                Err(e) => {
                    tracing::info!("{}", e);
                    writeln!(self.writer, "{}", e.user_friendly_message())?;
                    continue;
                }
            };

            if self.dispatch(command)?.is_break() {
                break;
            }
        }

        writeln!(self.writer, "Exiting waitlist manager.")?;
        self.writer.flush()?;
        tracing::debug!("Shell finished with {} customer(s) waiting", self.waitlist.len());

        Ok(self.waitlist)
    }

    fn dispatch(&mut self, command: Command) -> Result<ControlFlow<()>> {
        match command {
            Command::AddFront => {
                let Some(name) = self.prompt_name("Enter customer name to add to front: ")? else {
                    return Ok(ControlFlow::Break(()));
                };
                if let Some(name) = name {
                    self.waitlist.insert_front(name.as_str());
                    tracing::debug!("Inserted '{}' at front (len={})", name, self.waitlist.len());
                    writeln!(self.writer, "Added {} to the front of the waitlist.", name)?;
                }
            }
            Command::AddEnd => {
                let Some(name) = self.prompt_name("Enter customer name to add to end: ")? else {
                    return Ok(ControlFlow::Break(()));
                };
                if let Some(name) = name {
                    self.waitlist.insert_end(name.as_str());
                    tracing::debug!("Inserted '{}' at end (len={})", name, self.waitlist.len());
                    writeln!(self.writer, "Added {} to the end of the waitlist.", name)?;
                }
            }
            Command::Remove => {
                let Some(name) = self.prompt_name("Enter customer name to remove: ")? else {
                    return Ok(ControlFlow::Break(()));
                };
                if let Some(name) = name {
                    if self.waitlist.remove_first(&name).is_found() {
                        tracing::debug!("Removed '{}' (len={})", name, self.waitlist.len());
                        writeln!(self.writer, "Removed {} from the waitlist", name)?;
                    } else {
                        tracing::debug!("'{}' not in waitlist", name);
                        writeln!(self.writer, "{} not found", name)?;
                    }
                }
            }
            Command::Print => self.render_waitlist()?,
            Command::Exit => return Ok(ControlFlow::Break(())),
        }

        Ok(ControlFlow::Continue(()))
    }

    fn render_menu(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "--- {} ---", self.title)?;
        for (i, command) in Command::ALL.iter().enumerate() {
            writeln!(self.writer, "{}. {}", i + 1, command.menu_label())?;
        }
        Ok(())
    }

    fn render_waitlist(&mut self) -> Result<()> {
        if self.waitlist.is_empty() {
            writeln!(self.writer, "The waitlist is empty")?;
            return Ok(());
        }

        writeln!(self.writer, "Current waitlist:")?;
        for name in self.waitlist.iter() {
            writeln!(self.writer, "- {}", name)?;
        }
        Ok(())
    }

    /// `None` when input has ended; `Some(None)` when the name was empty and
    /// the user has already been told so.
    fn prompt_name(&mut self, prompt: &str) -> Result<Option<Option<String>>> {
        let Some(name) = self.prompt(prompt)? else {
            return Ok(None);
        };

        if name.is_empty() {
            tracing::info!("Rejected empty customer name");
            writeln!(self.writer, "{}", EMPTY_NAME)?;
            return Ok(Some(None));
        }

        Ok(Some(Some(name)))
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(self.clean(line)))
    }

    fn clean(&self, mut line: String) -> String {
        if self.trim_input {
            return line.trim().to_string();
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WaitlistConfig;
    use std::io::Cursor;

    fn run_session(input: &str, config: &WaitlistConfig) -> (Waitlist, String) {
        let mut output = Vec::new();
        let shell = Shell::new(Cursor::new(input.as_bytes()), &mut output, config);
        let waitlist = shell.run().unwrap();
        (waitlist, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_menu_is_rendered_with_title() {
        let config = WaitlistConfig {
            title: "Patio".to_string(),
            ..WaitlistConfig::default()
        };
        let (_, output) = run_session("5\n", &config);

        assert!(output.starts_with("\n--- Patio ---\n1. Add customer to front\n"));
        assert!(output.contains("5. Exit\nChoose an option (1–5): "));
        assert!(output.ends_with("Exiting waitlist manager.\n"));
    }

    #[test]
    fn test_add_and_print() {
        let (waitlist, output) = run_session(
            "2\nAlice\n2\nBob\n1\nCarl\n4\n5\n",
            &WaitlistConfig::default(),
        );

        assert_eq!(waitlist.snapshot(), ["Carl", "Alice", "Bob"]);
        assert!(output.contains("Added Alice to the end of the waitlist."));
        assert!(output.contains("Added Carl to the front of the waitlist."));
        assert!(output.contains("Current waitlist:\n- Carl\n- Alice\n- Bob\n"));
    }

    #[test]
    fn test_remove_reports_found_and_missing() {
        let (waitlist, output) = run_session(
            "2\nAlice\n2\nBob\n3\nAlice\n3\nZed\n5\n",
            &WaitlistConfig::default(),
        );

        assert_eq!(waitlist.snapshot(), ["Bob"]);
        assert!(output.contains("Removed Alice from the waitlist\n"));
        assert!(output.contains("Zed not found\n"));
    }

    #[test]
    fn test_empty_print_and_empty_name() {
        let (waitlist, output) = run_session("4\n1\n   \n3\n\n5\n", &WaitlistConfig::default());

        assert!(waitlist.is_empty());
        assert!(output.contains("The waitlist is empty\n"));
        assert_eq!(output.matches(EMPTY_NAME).count(), 2);
    }

    #[test]
    fn test_no_trim_keeps_spaces_but_strips_line_ending() {
        let config = WaitlistConfig {
            trim_input: false,
            ..WaitlistConfig::default()
        };
        let (waitlist, _) = run_session("2\n  Dana \r\n5\n", &config);

        assert_eq!(waitlist.snapshot(), ["  Dana "]);
    }

    #[test]
    fn test_end_of_input_mid_prompt_exits() {
        let (waitlist, output) = run_session("2\nAlice\n1\n", &WaitlistConfig::default());

        assert_eq!(waitlist.snapshot(), ["Alice"]);
        assert!(output.ends_with("Enter customer name to add to front: Exiting waitlist manager.\n"));
    }
}
