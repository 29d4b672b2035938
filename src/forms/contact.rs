use crate::forms::{FieldErrors, FormFields};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

impl ContactForm {
    pub fn from_fields(f: &FormFields) -> Self {
        Self {
            name: f.text("name"),
            email: f.text("email"),
            phone: f.optional("phone"),
            message: f.text("message"),
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.require("name", &self.name, "Name is required");
        errors.email("email", &self.email);
        errors.min_len("message", &self.message, 10, "Message must be at least 10 characters");
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_contact_passes() {
        let form = ContactForm::from_fields(&FormFields::parse(
            b"name=Jane&email=jane%40example.com&message=Looking+for+a+2BR",
        ));
        assert_eq!(form.phone, None);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn each_rule_reports_its_field() {
        let form = ContactForm {
            name: " ".into(),
            email: "nope".into(),
            phone: Some("555".into()),
            message: "short".into(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("email"), Some("Please enter a valid email address"));
        assert_eq!(
            errors.get("message"),
            Some("Message must be at least 10 characters")
        );
        assert_eq!(errors.get("phone"), None);
    }
}
