// contact form state
//
// the form never leaves the browser: a submission is acknowledged locally and
// the fields are cleared.  the browser's required-field validation keeps an
// incomplete form from submitting, and submit() mirrors that rule so the
// handler cannot acknowledge an incomplete form either
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn all() -> [Self; 3] {
        [Self::Name, Self::Email, Self::Message]
    }

    // html id/name attribute
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

// what was captured by an accepted submission; it is only ever logged
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn is_complete(&self) -> bool {
        ContactField::all()
            .iter()
            .all(|field| !self.get(*field).trim().is_empty())
    }

    // takes the fields and resets the form, or leaves it untouched and
    // returns None if any field is empty
    pub fn submit(&mut self) -> Option<ContactSubmission> {
        if !self.is_complete() {
            return None;
        }

        let form = std::mem::take(self);
        Some(ContactSubmission {
            name: form.name,
            email: form.email,
            message: form.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "Aiko");
        form.set(ContactField::Email, "aiko@example.com");
        form.set(ContactField::Message, "Is WORK-003 still available?");
        form
    }

    #[test]
    fn complete_submission_clears_fields() {
        let mut form = filled();
        let submission = form.submit().expect("complete form should submit");

        assert_eq!(submission.name, "Aiko");
        assert_eq!(submission.email, "aiko@example.com");
        assert_eq!(form, ContactForm::default());
        for field in ContactField::all() {
            assert_eq!(form.get(field), "");
        }
    }

    #[test]
    fn second_submit_of_cleared_form_is_rejected() {
        let mut form = filled();
        assert!(form.submit().is_some());
        assert!(form.submit().is_none());
    }

    #[test]
    fn any_empty_field_blocks_submission() {
        for field in ContactField::all() {
            let mut form = filled();
            form.set(field, "");
            let before = form.clone();

            assert!(form.submit().is_none(), "{} left empty", field.key());
            assert_eq!(form, before);
        }
    }

    #[test]
    fn whitespace_counts_as_empty() {
        let mut form = filled();
        form.set(ContactField::Message, "   \n");
        assert!(!form.is_complete());
    }

    proptest! {
        #[test]
        fn acknowledgments_match_complete_submissions(
            name in "[a-z ]{0,8}",
            email in "[a-z@.]{0,8}",
            message in "[a-z ]{0,16}",
        ) {
            let mut form = ContactForm::default();
            form.set(ContactField::Name, name.clone());
            form.set(ContactField::Email, email.clone());
            form.set(ContactField::Message, message.clone());

            let complete = [&name, &email, &message].iter().all(|v| !v.trim().is_empty());
            let acknowledged = form.submit().is_some();

            prop_assert_eq!(acknowledged, complete);
            if complete {
                prop_assert_eq!(form, ContactForm::default());
            }
        }
    }
}
