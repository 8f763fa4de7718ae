//! Platform-neutral skill response.

/// Simple visual card shown alongside the speech.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub body: String,
}

/// What the skill answers to a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub speech_text: String,
    pub reprompt_text: Option<String>,
    pub card: Option<Card>,
    pub should_end_session: bool,
}

impl Response {
    /// Statement that ends the session.
    pub fn tell(speech: impl Into<String>) -> Self {
        Self {
            speech_text: speech.into(),
            reprompt_text: None,
            card: None,
            should_end_session: true,
        }
    }

    /// Statement with a card whose body repeats the speech.
    pub fn tell_with_card(speech: impl Into<String>, title: impl Into<String>) -> Self {
        let speech = speech.into();
        Self {
            card: Some(Card {
                title: title.into(),
                body: speech.clone(),
            }),
            ..Self::tell(speech)
        }
    }

    /// Question that keeps the session open and re-prompts on silence.
    pub fn ask(speech: impl Into<String>, reprompt: impl Into<String>) -> Self {
        Self {
            speech_text: speech.into(),
            reprompt_text: Some(reprompt.into()),
            card: None,
            should_end_session: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tell_with_card_repeats_speech() {
        let response = Response::tell_with_card("The wall have been cleaned.", "Clean wall");
        assert!(response.should_end_session);
        assert_eq!(response.reprompt_text, None);
        assert_eq!(
            response.card,
            Some(Card {
                title: "Clean wall".to_string(),
                body: "The wall have been cleaned.".to_string(),
            })
        );
    }

    #[test]
    fn test_ask_keeps_session_open() {
        let response = Response::ask("Hello?", "Still there?");
        assert!(!response.should_end_session);
        assert_eq!(response.reprompt_text.as_deref(), Some("Still there?"));
        assert!(response.card.is_none());
    }
}
