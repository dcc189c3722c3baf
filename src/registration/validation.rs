use tracing::debug;

use super::types::*;
use crate::contact::{is_known_uf, is_valid_email, validate_cep, validate_phone};
use crate::core::{Cnpj, Cpf, INVALID_DOCUMENT_MESSAGE, ValidationError};

/// Minimum length of a party or corporate name, in characters.
pub const PARTY_NAME_MIN_CHARS: usize = 3;
/// Maximum length of a party or corporate name, in characters.
pub const PARTY_NAME_MAX_CHARS: usize = 120;

/// Validate an individual (pessoa física) registration.
/// Returns all validation errors found (not just the first).
pub fn validate_individual(party: &IndividualRegistration) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // LX-01: CPF checksum
    if let Err(err) = Cpf::parse(&party.cpf) {
        errors.push(ValidationError::with_rule(
            "cpf",
            format!("{INVALID_DOCUMENT_MESSAGE} ({err})"),
            "LX-01",
        ));
    }

    validate_name(&party.name, "name", &mut errors);

    // LX-10: social name
    if party
        .social_name
        .as_deref()
        .is_some_and(|s| s.trim().is_empty())
    {
        errors.push(ValidationError::with_rule(
            "social_name",
            "social name must not be blank when given",
            "LX-10",
        ));
    }

    // LX-09: identity issued on or after birth
    if let (Some(birth), Some(issued)) = (
        party.birth_date,
        party.identity.as_ref().and_then(|id| id.issue_date),
    ) {
        if issued < birth {
            errors.push(ValidationError::with_rule(
                "identity.issue_date",
                format!("identity issue date {issued} precedes birth date {birth}"),
                "LX-09",
            ));
        }
    }

    validate_contact(&party.contact, &mut errors);
    validate_responsible(&party.responsible, &mut errors);
    validate_address(&party.address, &mut errors);

    if !errors.is_empty() {
        debug!(count = errors.len(), "individual registration rejected");
    }
    errors
}

/// Validate a company (pessoa jurídica) registration.
/// Returns all validation errors found (not just the first).
pub fn validate_company(company: &CompanyRegistration) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // LX-01: CNPJ checksum
    if let Err(err) = Cnpj::parse(&company.cnpj) {
        errors.push(ValidationError::with_rule(
            "cnpj",
            format!("{INVALID_DOCUMENT_MESSAGE} ({err})"),
            "LX-01",
        ));
    }

    validate_name(&company.corporate_name, "corporate_name", &mut errors);
    validate_contact(&company.contact, &mut errors);
    validate_responsible(&company.responsible, &mut errors);
    validate_address(&company.address, &mut errors);

    if !errors.is_empty() {
        debug!(count = errors.len(), "company registration rejected");
    }
    errors
}

/// Validate either kind of party.
pub fn validate_party(party: &Party) -> Vec<ValidationError> {
    match party {
        Party::Individual(p) => validate_individual(p),
        Party::Company(c) => validate_company(c),
    }
}

// LX-02
fn validate_name(name: &str, field: &str, errors: &mut Vec<ValidationError>) {
    let len = name.trim().chars().count();
    if len == 0 {
        errors.push(ValidationError::with_rule(
            field,
            "name must not be empty",
            "LX-02",
        ));
    } else if !(PARTY_NAME_MIN_CHARS..=PARTY_NAME_MAX_CHARS).contains(&len) {
        errors.push(ValidationError::with_rule(
            field,
            format!(
                "name must have between {PARTY_NAME_MIN_CHARS} and {PARTY_NAME_MAX_CHARS} characters, got {len}"
            ),
            "LX-02",
        ));
    }
}

fn validate_contact(contact: &Contact, errors: &mut Vec<ValidationError>) {
    // LX-03
    if contact.email.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            "contact.email",
            "e-mail must not be empty",
            "LX-03",
        ));
    } else if !is_valid_email(contact.email.trim()) {
        errors.push(ValidationError::with_rule(
            "contact.email",
            format!("'{}' is not a valid e-mail address", contact.email),
            "LX-03",
        ));
    }

    // LX-04
    for (field, value) in [
        ("contact.mobile", &contact.mobile),
        ("contact.phone", &contact.phone),
    ] {
        if let Some(Err(err)) = given(value).map(validate_phone) {
            errors.push(ValidationError::with_rule(field, err.to_string(), "LX-04"));
        }
    }
}

fn validate_responsible(responsible: &ResponsiblePerson, errors: &mut Vec<ValidationError>) {
    if responsible.is_empty() {
        return;
    }

    // LX-07
    if let Some(Err(err)) = given(&responsible.cpf).map(Cpf::parse) {
        errors.push(ValidationError::with_rule(
            "responsible.cpf",
            format!("{INVALID_DOCUMENT_MESSAGE} ({err})"),
            "LX-07",
        ));
    }

    // LX-08
    let has_cpf = given(&responsible.cpf).is_some();
    let has_name = given(&responsible.name).is_some();
    if has_cpf && !has_name {
        errors.push(ValidationError::with_rule(
            "responsible.name",
            "responsible person's name is required when a CPF is given",
            "LX-08",
        ));
    } else if has_name && !has_cpf {
        errors.push(ValidationError::with_rule(
            "responsible.cpf",
            "responsible person's CPF is required when a name is given",
            "LX-08",
        ));
    }
}

fn validate_address(address: &Address, errors: &mut Vec<ValidationError>) {
    // LX-05
    if let Some(Err(err)) = given(&address.cep).map(validate_cep) {
        errors.push(ValidationError::with_rule(
            "address.cep",
            err.to_string(),
            "LX-05",
        ));
    }

    // LX-06
    if let Some(state) = given(&address.state).filter(|s| !is_known_uf(s)) {
        errors.push(ValidationError::with_rule(
            "address.state",
            format!("'{state}' is not a Brazilian state code"),
            "LX-06",
        ));
    }
}
