use alloc::string::String;
use jeopardy_protocol::ClueRecord;

/// What a clue currently displays. Only ever moves forward: `Hidden`, `Question`, `Answer`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Answer)
    }
}

/// Result of advancing a clue, borrowing the text that should now be displayed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome<'a> {
    NoChange,
    ShowQuestion(&'a str),
    ShowAnswer(&'a str),
}

impl<'a> RevealOutcome<'a> {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            ShowQuestion(_) => true,
            ShowAnswer(_) => true,
        }
    }

    pub const fn text(self) -> Option<&'a str> {
        use RevealOutcome::*;
        match self {
            NoChange => None,
            ShowQuestion(text) | ShowAnswer(text) => Some(text),
        }
    }

    /// Whether the cell must stop accepting clicks after this update.
    pub const fn disables_cell(self) -> bool {
        matches!(self, Self::ShowAnswer(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clue {
    question: String,
    answer: String,
    showing: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            showing: RevealState::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn showing(&self) -> RevealState {
        self.showing
    }

    /// Text matching the current state, `None` while hidden.
    pub fn displayed_text(&self) -> Option<&str> {
        match self.showing {
            RevealState::Hidden => None,
            RevealState::Question => Some(&self.question),
            RevealState::Answer => Some(&self.answer),
        }
    }

    pub fn advance(&mut self) -> RevealOutcome<'_> {
        use RevealOutcome::*;
        use RevealState::*;

        match self.showing {
            Hidden => {
                self.showing = Question;
                ShowQuestion(&self.question)
            }
            Question => {
                self.showing = Answer;
                ShowAnswer(&self.answer)
            }
            Answer => NoChange,
        }
    }
}

impl From<ClueRecord> for Clue {
    fn from(record: ClueRecord) -> Self {
        Self::new(record.question, record.answer)
    }
}
