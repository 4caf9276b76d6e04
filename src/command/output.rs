//! What a command hands back to the shell.

/// Result of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// A single success line.
    Message(String),
    /// Listing rows, one per entry.
    Rows(Vec<String>),
    /// A non-fatal notice, such as an empty listing.
    Warning(String),
}

impl Output {
    /// Render the output as printable lines.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Output::Message(message) => vec![message.clone()],
            Output::Rows(rows) => rows.clone(),
            Output::Warning(warning) => vec![format!("Warning: {warning}")],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_lines() {
        let output = Output::Message("Add alice successfully.".to_string());
        assert_eq!(output.lines(), vec!["Add alice successfully."]);
    }

    #[test]
    fn test_rows_lines() {
        let output = Output::Rows(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(output.lines(), vec!["a", "b"]);
        assert!(Output::Rows(vec![]).lines().is_empty());
    }

    #[test]
    fn test_warning_lines() {
        let output = Output::Warning("The folder is empty.".to_string());
        assert_eq!(output.lines(), vec!["Warning: The folder is empty."]);
    }
}
