/// How the course list talks to the user.
///
/// The list never shows anything itself: acknowledgements go through
/// [`Prompter::notify`], and the delete guard asks [`Prompter::confirm`].
pub trait Prompter {
    fn notify(&mut self, message: &str);
    fn confirm(&mut self, message: &str) -> bool;
}

/// Buffers notices and answers confirmations with a reply collected up front,
/// e.g. from the y/n overlay before the action is replayed.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    pub answer: bool,
    pub notices: Vec<String>,
    pub questions: Vec<String>,
}

impl ScriptedPrompter {
    pub fn accepting() -> Self {
        Self {
            answer: true,
            ..Default::default()
        }
    }

    pub fn declining() -> Self {
        Self::default()
    }
}

impl Prompter for ScriptedPrompter {
    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.questions.push(message.to_string());
        self.answer
    }
}
