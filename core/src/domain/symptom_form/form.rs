use uuid::Uuid;

use crate::domain::{
    diagnosis::entities::Symptom,
    symptom_form::catalog::{DEFAULT_LANGUAGE, filter_suggestions, find_language},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Empty,
    Composing,
    SuggestionsOpen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Enter,
    Other,
}

/// Where a pointer-down landed relative to the symptom input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Input,
    SuggestionPanel,
    Outside,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitEvent {
    pub symptoms: Vec<Symptom>,
    pub language: String,
}

/// Symptom intake form.
///
/// Every mutating operation is inert while the form is busy.
#[derive(Debug, Clone)]
pub struct SymptomForm {
    input: String,
    symptoms: Vec<Symptom>,
    language: String,
    suggestions: Vec<&'static str>,
    suggestions_open: bool,
    busy: bool,
}

impl Default for SymptomForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SymptomForm {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            symptoms: Vec::new(),
            language: DEFAULT_LANGUAGE.to_string(),
            suggestions: Vec::new(),
            suggestions_open: false,
            busy: false,
        }
    }

    /// Rebuilds a form from previously rendered state. Blank, duplicate and
    /// unknown-language entries are dropped the same way live input would be.
    pub fn restore(symptoms: Vec<Symptom>, language: &str, input: &str) -> Self {
        let mut form = Self::new();
        for symptom in symptoms {
            let text = symptom.text.trim();
            if !text.is_empty() && !form.contains_text(text) {
                form.symptoms.push(Symptom {
                    id: symptom.id,
                    text: text.to_string(),
                });
            }
        }
        form.set_language(language);
        form.input = input.to_string();
        form.suggestions = filter_suggestions(input);
        form
    }

    pub fn state(&self) -> FormState {
        if self.suggestions_open && !self.suggestions.is_empty() {
            FormState::SuggestionsOpen
        } else if self.input.is_empty() {
            FormState::Empty
        } else {
            FormState::Composing
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Suggestions currently shown, empty when the panel is closed.
    pub fn visible_suggestions(&self) -> &[&'static str] {
        if self.suggestions_open {
            &self.suggestions
        } else {
            &[]
        }
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    pub fn set_input(&mut self, text: &str) {
        if self.busy {
            return;
        }
        self.input = text.to_string();
        self.suggestions = filter_suggestions(text);
        self.suggestions_open = !self.input.trim().is_empty() && !self.suggestions.is_empty();
    }

    pub fn focus_input(&mut self) {
        if self.busy {
            return;
        }
        self.suggestions_open = !self.suggestions.is_empty();
    }

    /// Adds the current input as a symptom. Returns whether one was added.
    pub fn commit(&mut self) -> bool {
        let text = self.input.clone();
        self.add_text(&text)
    }

    pub fn choose_suggestion(&mut self, suggestion: &str) -> bool {
        self.add_text(suggestion)
    }

    pub fn handle_key(&mut self, key: KeyPress) -> bool {
        match key {
            KeyPress::Enter if !self.input.trim().is_empty() => self.commit(),
            _ => false,
        }
    }

    pub fn remove(&mut self, id: Uuid) -> bool {
        if self.busy {
            return false;
        }
        let before = self.symptoms.len();
        self.symptoms.retain(|symptom| symptom.id != id);
        self.symptoms.len() != before
    }

    pub fn pointer_down(&mut self, target: PointerTarget) {
        if target == PointerTarget::Outside {
            self.suggestions_open = false;
        }
    }

    /// Only catalog language codes are accepted.
    pub fn set_language(&mut self, code: &str) -> bool {
        if self.busy {
            return false;
        }
        match find_language(code) {
            Some(language) => {
                self.language = language.code.to_string();
                true
            }
            None => false,
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.symptoms.is_empty() && !self.busy
    }

    pub fn submit(&self) -> Option<SubmitEvent> {
        self.can_submit().then(|| SubmitEvent {
            symptoms: self.symptoms.clone(),
            language: self.language.clone(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn contains_text(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.symptoms
            .iter()
            .any(|symptom| symptom.text.to_lowercase() == lowered)
    }

    fn add_text(&mut self, text: &str) -> bool {
        if self.busy {
            return false;
        }
        let text = text.trim();
        if text.is_empty() || self.contains_text(text) {
            return false;
        }

        self.symptoms.push(Symptom::new(text));
        self.input.clear();
        self.suggestions.clear();
        self.suggestions_open = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_opens_matching_suggestions() {
        let mut form = SymptomForm::new();
        assert_eq!(form.state(), FormState::Empty);

        form.set_input("head");
        assert_eq!(form.state(), FormState::SuggestionsOpen);
        assert_eq!(form.visible_suggestions(), &["Headache"]);

        form.set_input("zzz");
        assert_eq!(form.state(), FormState::Composing);
        assert!(form.visible_suggestions().is_empty());
    }

    #[test]
    fn test_outside_pointer_closes_suggestions_only() {
        let mut form = SymptomForm::new();
        form.set_input("Fever");
        form.commit();
        form.set_input("co");

        form.pointer_down(PointerTarget::SuggestionPanel);
        assert_eq!(form.state(), FormState::SuggestionsOpen);

        form.pointer_down(PointerTarget::Outside);
        assert_eq!(form.state(), FormState::Composing);
        assert_eq!(form.symptoms().len(), 1);
        assert_eq!(form.input(), "co");

        form.focus_input();
        assert_eq!(form.state(), FormState::SuggestionsOpen);
    }

    #[test]
    fn test_duplicate_symptoms_are_suppressed() {
        let mut form = SymptomForm::new();
        form.set_input("Headache");
        assert!(form.commit());

        form.set_input("HEADACHE");
        assert!(!form.commit());
        assert!(!form.choose_suggestion("headache"));
        assert_eq!(form.symptoms().len(), 1);
    }

    #[test]
    fn test_enter_commits_non_blank_input() {
        let mut form = SymptomForm::new();
        form.set_input("   ");
        assert!(!form.handle_key(KeyPress::Enter));

        form.set_input("  Dizziness ");
        assert!(!form.handle_key(KeyPress::Other));
        assert!(form.handle_key(KeyPress::Enter));
        assert_eq!(form.symptoms()[0].text, "Dizziness");
        assert_eq!(form.input(), "");
        assert_eq!(form.state(), FormState::Empty);
    }

    #[test]
    fn test_remove_by_identity() {
        let mut form = SymptomForm::new();
        form.choose_suggestion("Rash");
        form.choose_suggestion("Cough");
        let id = form.symptoms()[0].id;

        assert!(form.remove(id));
        assert!(!form.remove(id));
        assert_eq!(form.symptoms().len(), 1);
        assert_eq!(form.symptoms()[0].text, "Cough");
    }

    #[test]
    fn test_submit_gating() {
        let mut form = SymptomForm::new();
        assert!(!form.can_submit());
        assert!(form.submit().is_none());

        form.choose_suggestion("Fever");
        assert!(form.set_language("de"));
        let event = form.submit().unwrap();
        assert_eq!(event.language, "de");
        assert_eq!(event.symptoms.len(), 1);

        form.set_busy(true);
        assert!(!form.can_submit());
        assert!(form.submit().is_none());
    }

    #[test]
    fn test_busy_form_is_inert() {
        let mut form = SymptomForm::new();
        form.choose_suggestion("Fever");
        form.set_busy(true);

        form.set_input("Cough");
        assert!(!form.commit());
        assert!(!form.set_language("fr"));
        assert!(!form.remove(form.symptoms()[0].id));
        assert_eq!(form.input(), "");
        assert_eq!(form.language(), "en");
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        let mut form = SymptomForm::new();
        assert!(!form.set_language("klingon"));
        assert_eq!(form.language(), DEFAULT_LANGUAGE);
    }

    #[test]
    fn test_restore_drops_blank_and_duplicate_symptoms() {
        let first = Symptom::new("Cough");
        let form = SymptomForm::restore(
            vec![
                first.clone(),
                Symptom::new(" cough "),
                Symptom::new("  "),
                Symptom::new("Fatigue"),
            ],
            "xx",
            "fev",
        );

        assert_eq!(form.symptoms().len(), 2);
        assert_eq!(form.symptoms()[0], first);
        assert_eq!(form.language(), DEFAULT_LANGUAGE);
        assert_eq!(form.input(), "fev");
        assert_eq!(form.state(), FormState::Composing);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = SymptomForm::new();
        form.choose_suggestion("Nausea");
        form.set_language("it");
        form.set_input("vom");

        form.reset();
        assert!(form.symptoms().is_empty());
        assert_eq!(form.language(), DEFAULT_LANGUAGE);
        assert_eq!(form.state(), FormState::Empty);
    }
}
