//! Confirm dialog state.
//!
//! Data model for blocking confirmations. The host renders it and answers
//! with one of the option messages.

use viewer_core::{format_size, large_file_prompt, FileCandidate};

use crate::message::Message;

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    pub options: Vec<(String, Message)>,
}

impl ConfirmDialogState {
    /// Create a generic confirmation dialog
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
        }
    }

    /// Prompt before reading a text file above `threshold` bytes
    pub fn large_file(candidate: &FileCandidate, threshold: u64) -> Self {
        Self::new(
            format!("{} ({})", candidate.name, format_size(candidate.size)),
            large_file_prompt(threshold),
            vec![
                ("Load", Message::ConfirmLargeFile),
                ("Cancel", Message::DeclineLargeFile),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewer_core::Location;

    #[test]
    fn test_large_file_prompt() {
        let candidate = FileCandidate {
            name: "big.log".to_string(),
            content_type: Some("text/plain".to_string()),
            size: 2_097_152,
            last_modified: None,
            location: Location::Path("big.log".into()),
        };

        let dialog = ConfirmDialogState::large_file(&candidate, 1_048_576);

        assert_eq!(dialog.title, "big.log (2 MiB)");
        assert_eq!(
            dialog.message,
            "Its size is greater than 1 MiB, proceed with loading?"
        );
        assert!(matches!(dialog.options[0].1, Message::ConfirmLargeFile));
        assert!(matches!(dialog.options[1].1, Message::DeclineLargeFile));
    }
}
