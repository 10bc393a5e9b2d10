use super::*;

fn filled(role: Role) -> SignupForm {
    SignupForm {
        name: " Sami Trabelsi ".to_owned(),
        email: "sami@example.com".to_owned(),
        phone: "0600000000".to_owned(),
        password: "s3cret!".to_owned(),
        password_confirmation: "s3cret!".to_owned(),
        specialty: "Cardiologie".to_owned(),
        address: "12 rue des Lilas".to_owned(),
        ..SignupForm::new(role)
    }
}

#[test]
fn valid_patient_signup_drops_role_specific_fields() {
    let request = filled(Role::Patient).validate().expect("valid");
    assert_eq!(request.name, "Sami Trabelsi");
    assert_eq!(request.specialty, None);
    assert_eq!(request.address, None);

    let body = serde_json::to_value(&request).expect("serialize");
    assert!(body.get("specialty").is_none());
    assert!(body.get("role").is_none());
    assert_eq!(body["password_confirmation"], "s3cret!");
}

#[test]
fn doctor_requires_specialty() {
    let mut form = filled(Role::Medecin);
    assert_eq!(form.validate().expect("valid").specialty.as_deref(), Some("Cardiologie"));
    form.specialty = "   ".to_owned();
    assert_eq!(form.validate(), Err(ValidationError::MissingField("spécialité")));
}

#[test]
fn clinic_requires_address() {
    let mut form = filled(Role::Clinique);
    form.address.clear();
    assert_eq!(form.validate(), Err(ValidationError::MissingField("adresse")));
}

#[test]
fn empty_required_fields_are_reported_first_to_last() {
    let form = SignupForm::new(Role::Patient);
    assert_eq!(form.validate(), Err(ValidationError::MissingField("nom")));

    let mut form = filled(Role::Patient);
    form.phone = String::new();
    assert_eq!(form.validate(), Err(ValidationError::MissingField("téléphone")));
}

#[test]
fn mismatched_confirmation_is_rejected() {
    let mut form = filled(Role::Patient);
    form.password_confirmation = "other".to_owned();
    assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));
}

#[test]
fn malformed_email_is_rejected() {
    let mut form = filled(Role::Patient);
    form.email = "sami.example.com".to_owned();
    assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));
    form.email = "@example.com".to_owned();
    assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));
}

#[test]
fn login_form_trims_email_and_requires_password() {
    let form = LoginForm { email: "  a@b.fr ".to_owned(), password: "pw".to_owned() };
    assert_eq!(
        form.validate(),
        Ok(LoginRequest { email: "a@b.fr".to_owned(), password: "pw".to_owned() })
    );

    let form = LoginForm { email: "a@b.fr".to_owned(), password: "  ".to_owned() };
    assert_eq!(form.validate(), Err(ValidationError::MissingField("mot de passe")));
}

#[test]
fn validation_messages_are_user_facing() {
    assert_eq!(
        ValidationError::MissingField("nom").to_string(),
        "Le champ « nom » est obligatoire."
    );
    assert_eq!(ValidationError::PasswordMismatch.to_string(), "Les mots de passe ne correspondent pas.");
}
