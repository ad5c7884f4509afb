//! Contact form with a simulated submission.
//!
//! Nothing leaves the process: a submit waits for a fixed delay, reports
//! success, then clears the fields. There is no failure path.

use log::info;

use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormState {
    Idle,
    Sending { elapsed: f32 },
    Sent { elapsed: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    state: FormState,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            state: FormState::Idle,
        }
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Fields are read-only while a submission is in flight.
    pub fn is_editable(&self) -> bool {
        self.state == FormState::Idle
    }

    pub fn type_char(&mut self, field: Field, c: char) {
        if self.is_editable() && !c.is_control() {
            self.field_mut(field).push(c);
        }
    }

    pub fn backspace(&mut self, field: Field) {
        if self.is_editable() {
            self.field_mut(field).pop();
        }
    }

    /// Starts the simulated send. Returns `false` while the button is disabled.
    pub fn submit(&mut self) -> bool {
        if self.state != FormState::Idle {
            return false;
        }
        self.state = FormState::Sending { elapsed: 0.0 };
        true
    }

    pub fn update(&mut self, dt: f32) {
        self.state = match self.state {
            FormState::Idle => FormState::Idle,
            FormState::Sending { elapsed } if elapsed + dt >= FORM_SEND_DELAY => {
                info!("Contact message from {} <{}> sent", self.name, self.email);
                FormState::Sent { elapsed: elapsed + dt - FORM_SEND_DELAY }
            }
            FormState::Sending { elapsed } => FormState::Sending { elapsed: elapsed + dt },
            FormState::Sent { elapsed } if elapsed + dt >= FORM_SENT_DISPLAY => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                FormState::Idle
            }
            FormState::Sent { elapsed } => FormState::Sent { elapsed: elapsed + dt },
        };
    }

    pub fn button_label(&self) -> &'static str {
        match self.state {
            FormState::Idle => "Send Message",
            FormState::Sending { .. } => "Sending...",
            FormState::Sent { .. } => "Message Sent!",
        }
    }

    /// Spinner rotation in degrees while sending.
    pub fn spinner_angle(&self) -> Option<f32> {
        match self.state {
            FormState::Sending { elapsed } => Some((elapsed % SPINNER_PERIOD) / SPINNER_PERIOD * 360.0),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.name = "Ada".into();
        form.email = "ada@example.com".into();
        form.message = "Hello".into();
        form
    }

    #[test]
    fn submission_walks_through_all_states() {
        let mut form = filled();
        assert_eq!(form.button_label(), "Send Message");
        assert!(form.submit());
        assert_eq!(form.button_label(), "Sending...");

        form.update(1.0);
        assert!(matches!(form.state(), FormState::Sending { .. }));
        form.update(0.5);
        assert_eq!(form.button_label(), "Message Sent!");
        assert_eq!(form.name, "Ada");

        form.update(3.0);
        assert_eq!(form.state(), FormState::Idle);
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());
    }

    #[test]
    fn button_is_disabled_while_in_flight() {
        let mut form = filled();
        assert!(form.submit());
        assert!(!form.submit());
        form.update(2.0);
        assert!(!form.submit());
    }

    #[test]
    fn fields_are_locked_while_in_flight() {
        let mut form = filled();
        form.submit();
        form.type_char(Field::Name, 'x');
        form.backspace(Field::Message);
        assert_eq!(form.name, "Ada");
        assert_eq!(form.message, "Hello");
    }

    #[test]
    fn typing_edits_the_focused_field() {
        let mut form = ContactForm::new();
        for c in "hi!".chars() {
            form.type_char(Field::Message, c);
        }
        form.type_char(Field::Message, '\n');
        form.backspace(Field::Message);
        assert_eq!(form.field(Field::Message), "hi");
        assert_eq!(form.field(Field::Name), "");
    }

    #[test]
    fn spinner_turns_once_per_second() {
        let mut form = filled();
        assert_eq!(form.spinner_angle(), None);
        form.submit();
        form.update(0.25);
        assert_eq!(form.spinner_angle(), Some(90.0));
        form.update(1.0);
        assert_eq!(form.spinner_angle(), Some(90.0));
    }
}
