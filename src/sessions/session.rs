//! The only point of truth for everything related to the current user
//! session of the interactive shell. A session holds the command history,
//! the list currently in use and a handle to the query engine.
//!
//! The engine and its registry are shared and read-only, so a session only
//! ever mutates its own history and active list. Sessions are discarded when
//! the shell exits.

use std::{fmt::Display, time::SystemTime};

use chrono::{DateTime, Local};

use crate::{
    errors::QueryError,
    query::{QueryEngine, QueryResult},
};

struct CommandHistory {
    command: String,
    command_time: SystemTime,
}

impl CommandHistory {
    pub fn command_time_string(&self) -> String {
        let datetime: DateTime<Local> = self.command_time.into();
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

impl Display for CommandHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.command_time_string(), self.command)
    }
}

pub struct Session {
    command_history: Vec<CommandHistory>,
    start_time: SystemTime,
    active_list: Option<String>,
    engine: QueryEngine,
}

impl Session {
    pub fn client(engine: QueryEngine) -> Session {
        //! Returns a new client session.

        Session {
            command_history: vec![],
            start_time: SystemTime::now(),
            active_list: None,
            engine,
        }
    }

    pub fn use_list(&mut self, list_name: &str) -> Result<(), QueryError> {
        //! Set the list that bare patterns are run against.

        if !self.engine.registry().contains(list_name) {
            return Err(QueryError::UnknownList {
                requested: list_name.to_string(),
                available: self.engine.registry().list_names(),
            });
        }

        self.active_list = Some(list_name.to_string());
        Ok(())
    }

    pub fn get_active_list(&self) -> Option<&str> {
        self.active_list.as_deref()
    }

    pub fn query(&self, list_name: &str, pattern: &str) -> Result<QueryResult, QueryError> {
        self.engine.query(list_name, pattern)
    }

    pub fn get_available_lists(&self) -> Vec<String> {
        self.engine.registry().list_names()
    }

    pub fn add_to_command_history(&mut self, command: &str) {
        self.command_history.push(CommandHistory {
            command: command.to_string(),
            command_time: SystemTime::now(),
        });
    }

    pub fn start_time_string(&self) -> String {
        //! Convert the [`SystemTime`] object into a string representation
        //! to be more readable.

        let datetime: DateTime<Local> = self.start_time.into();
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    pub fn command_history_lines(&self, n_prev: Option<usize>) -> Vec<String> {
        //! The previously invoked commands, newest first.
        //! Use `n_prev` to limit the number of commands you get.

        let limit = n_prev.unwrap_or(self.command_history.len());

        self.command_history
            .iter()
            .rev()
            .take(limit)
            .enumerate()
            .map(|(index, command)| format!("{:3} | {}", index, command))
            .collect()
    }

    pub fn get_last_command(&self, nth_back: usize) -> Option<&str> {
        //! Gets the `nth_back`th last command from the history.

        if nth_back == 0 {
            return None;
        }

        self.command_history
            .iter()
            .nth_back(nth_back - 1)
            .map(|cmd| cmd.command.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::persistence::{Table, WordListRegistry};

    fn _session() -> Session {
        let mut registry = WordListRegistry::new();
        registry.insert(Table::parse("animals", "name\tlegs\ncat\t4\nbird\t2\n"));
        Session::client(QueryEngine::new(Arc::new(registry)))
    }

    #[test]
    fn session_use_known_list() {
        let mut session = _session();
        assert_eq!(session.get_active_list(), None);

        session.use_list("animals").unwrap();
        assert_eq!(session.get_active_list(), Some("animals"));
    }

    #[test]
    fn session_use_unknown_list_keeps_active() {
        let mut session = _session();
        session.use_list("animals").unwrap();

        let error = session.use_list("plants").unwrap_err();
        assert_eq!(
            error,
            QueryError::UnknownList {
                requested: "plants".to_string(),
                available: vec!["animals".to_string()],
            }
        );
        assert_eq!(session.get_active_list(), Some("animals"));
    }

    #[test]
    fn session_last_command_goes_back() {
        let mut session = _session();
        session.add_to_command_history("lists");
        session.add_to_command_history("use animals");

        assert_eq!(session.get_last_command(1), Some("use animals"));
        assert_eq!(session.get_last_command(2), Some("lists"));
        assert_eq!(session.get_last_command(3), None);
        assert_eq!(session.get_last_command(0), None);
    }

    #[test]
    fn session_history_newest_first() {
        let mut session = _session();
        session.add_to_command_history("lists");
        session.add_to_command_history("help");

        let lines = session.command_history_lines(Some(1));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("help"));
        assert_eq!(session.command_history_lines(None).len(), 2);
    }

    #[test]
    fn session_queries_through_engine() {
        let session = _session();
        let result = session.query("animals", "^b").unwrap();
        assert_eq!(result.len(), 1);
    }
}
