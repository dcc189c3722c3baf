use chrono::NaiveDate;

use super::error::RegistrationError;
use super::types::*;
use super::validation;
use crate::core::clean_document;

/// Builder for constructing validated individual registrations.
///
/// ```
/// use lexsum::registration::*;
///
/// let party = IndividualBuilder::new("111.444.777-35", "Maria da Silva")
///     .email("maria@example.com")
///     .profession("Advogada")
///     .build()
///     .unwrap();
/// assert_eq!(party.cpf, "11144477735");
/// ```
pub struct IndividualBuilder {
    cpf: String,
    name: String,
    social_name: Option<String>,
    gender: Option<String>,
    identity: Option<IdentityDocument>,
    nit: Option<String>,
    marital_status: Option<String>,
    profession: Option<String>,
    nationality: Option<String>,
    first_parent: Option<String>,
    second_parent: Option<String>,
    birth_date: Option<NaiveDate>,
    responsible: ResponsiblePerson,
    contact: Contact,
    address: Address,
}

impl IndividualBuilder {
    /// Start an individual registration from a CPF (any punctuation) and full name.
    pub fn new(cpf: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            cpf: cpf.into(),
            name: name.into(),
            social_name: None,
            gender: None,
            identity: None,
            nit: None,
            marital_status: None,
            profession: None,
            nationality: None,
            first_parent: None,
            second_parent: None,
            birth_date: None,
            responsible: ResponsiblePerson::default(),
            contact: Contact::default(),
            address: Address::default(),
        }
    }

    /// Name the person chooses to be addressed by (nome social).
    pub fn social_name(mut self, name: impl Into<String>) -> Self {
        self.social_name = Some(name.into());
        self
    }

    /// Gender as entered on the form.
    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    /// Identity card (RG) number, issuing body, and issue date.
    pub fn identity(
        mut self,
        number: impl Into<String>,
        issuer: Option<String>,
        issue_date: Option<NaiveDate>,
    ) -> Self {
        self.identity = Some(IdentityDocument {
            number: number.into(),
            issuer,
            issue_date,
        });
        self
    }

    /// Social security number (NIT/PIS).
    pub fn nit(mut self, nit: impl Into<String>) -> Self {
        self.nit = Some(nit.into());
        self
    }

    /// Marital status (estado civil).
    pub fn marital_status(mut self, status: impl Into<String>) -> Self {
        self.marital_status = Some(status.into());
        self
    }

    /// Profession (profissão).
    pub fn profession(mut self, profession: impl Into<String>) -> Self {
        self.profession = Some(profession.into());
        self
    }

    /// Nationality (nacionalidade).
    pub fn nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = Some(nationality.into());
        self
    }

    /// Parents' names, in the order given on the form.
    pub fn parents(mut self, first: impl Into<String>, second: Option<String>) -> Self {
        self.first_parent = Some(first.into());
        self.second_parent = second;
        self
    }

    /// Date of birth. Checked against the identity issue date.
    pub fn birth_date(mut self, date: NaiveDate) -> Self {
        self.birth_date = Some(date);
        self
    }

    /// Guardian or legal representative: CPF and name.
    pub fn responsible(mut self, cpf: impl Into<String>, name: impl Into<String>) -> Self {
        self.responsible = ResponsiblePerson {
            cpf: Some(cpf.into()),
            name: Some(name.into()),
        };
        self
    }

    /// Contact e-mail (required).
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.contact.email = email.into();
        self
    }

    /// Mobile number, with or without the area-code mask.
    pub fn mobile(mut self, mobile: impl Into<String>) -> Self {
        self.contact.mobile = Some(mobile.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.contact.phone = Some(phone.into());
        self
    }

    /// Postal address, usually from [`AddressBuilder`].
    pub fn address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    /// Validate and build. Document, phone, and CEP fields are stored as
    /// cleaned digits; blank optional ones become `None`.
    pub fn build(self) -> Result<IndividualRegistration, RegistrationError> {
        let optional = [
            &self.social_name,
            &self.gender,
            &self.nit,
            &self.marital_status,
            &self.profession,
            &self.nationality,
            &self.first_parent,
            &self.second_parent,
        ];
        let identity = self
            .identity
            .iter()
            .flat_map(|id| [Some(id.number.as_str()), id.issuer.as_deref()]);
        check_lengths(
            [self.cpf.as_str(), self.name.as_str()]
                .into_iter()
                .chain(optional.into_iter().filter_map(|v| v.as_deref()))
                .chain(identity.flatten())
                .chain(shared_fields(&self.responsible, &self.contact, &self.address)),
        )?;

        let mut party = self.build_unchecked();
        let errors = validation::validate_individual(&party);
        if !errors.is_empty() {
            return Err(RegistrationError::Validation(errors));
        }

        party.cpf = clean_document(&party.cpf);
        normalize_responsible(&mut party.responsible);
        normalize_contact(&mut party.contact);
        normalize_address(&mut party.address);
        Ok(party)
    }

    /// Build without validation or normalization, keeping fields as typed.
    pub fn build_unchecked(self) -> IndividualRegistration {
        IndividualRegistration {
            cpf: self.cpf,
            name: self.name,
            social_name: self.social_name,
            gender: self.gender,
            identity: self.identity,
            nit: self.nit,
            marital_status: self.marital_status,
            profession: self.profession,
            nationality: self.nationality,
            first_parent: self.first_parent,
            second_parent: self.second_parent,
            birth_date: self.birth_date,
            responsible: self.responsible,
            contact: self.contact,
            address: self.address,
        }
    }
}

/// Builder for constructing validated company registrations.
pub struct CompanyBuilder {
    cnpj: String,
    corporate_name: String,
    trade_name: Option<String>,
    state_registration: Option<String>,
    municipal_registration: Option<String>,
    responsible: ResponsiblePerson,
    contact: Contact,
    address: Address,
}

impl CompanyBuilder {
    /// Start a company registration from a CNPJ (any punctuation) and corporate name.
    pub fn new(cnpj: impl Into<String>, corporate_name: impl Into<String>) -> Self {
        Self {
            cnpj: cnpj.into(),
            corporate_name: corporate_name.into(),
            trade_name: None,
            state_registration: None,
            municipal_registration: None,
            responsible: ResponsiblePerson::default(),
            contact: Contact::default(),
            address: Address::default(),
        }
    }

    /// Trade name (nome fantasia).
    pub fn trade_name(mut self, name: impl Into<String>) -> Self {
        self.trade_name = Some(name.into());
        self
    }

    /// State tax registration (inscrição estadual).
    pub fn state_registration(mut self, number: impl Into<String>) -> Self {
        self.state_registration = Some(number.into());
        self
    }

    /// Municipal tax registration (inscrição municipal).
    pub fn municipal_registration(mut self, number: impl Into<String>) -> Self {
        self.municipal_registration = Some(number.into());
        self
    }

    /// Guardian or legal representative: CPF and name.
    pub fn responsible(mut self, cpf: impl Into<String>, name: impl Into<String>) -> Self {
        self.responsible = ResponsiblePerson {
            cpf: Some(cpf.into()),
            name: Some(name.into()),
        };
        self
    }

    /// Contact e-mail (required).
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.contact.email = email.into();
        self
    }

    /// Mobile number, with or without the area-code mask.
    pub fn mobile(mut self, mobile: impl Into<String>) -> Self {
        self.contact.mobile = Some(mobile.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.contact.phone = Some(phone.into());
        self
    }

    /// Postal address, usually from [`AddressBuilder`].
    pub fn address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    /// Validate and build, normalizing fields as [`IndividualBuilder::build`] does.
    pub fn build(self) -> Result<CompanyRegistration, RegistrationError> {
        let optional = [
            &self.trade_name,
            &self.state_registration,
            &self.municipal_registration,
        ];
        check_lengths(
            [self.cnpj.as_str(), self.corporate_name.as_str()]
                .into_iter()
                .chain(optional.into_iter().filter_map(|v| v.as_deref()))
                .chain(shared_fields(&self.responsible, &self.contact, &self.address)),
        )?;

        let mut company = self.build_unchecked();
        let errors = validation::validate_company(&company);
        if !errors.is_empty() {
            return Err(RegistrationError::Validation(errors));
        }

        company.cnpj = clean_document(&company.cnpj);
        normalize_responsible(&mut company.responsible);
        normalize_contact(&mut company.contact);
        normalize_address(&mut company.address);
        Ok(company)
    }

    /// Build without validation or normalization, for importing stored records.
    pub fn build_unchecked(self) -> CompanyRegistration {
        CompanyRegistration {
            cnpj: self.cnpj,
            corporate_name: self.corporate_name,
            trade_name: self.trade_name,
            state_registration: self.state_registration,
            municipal_registration: self.municipal_registration,
            responsible: self.responsible,
            contact: self.contact,
            address: self.address,
        }
    }
}

/// Builder for Address.
#[derive(Default)]
pub struct AddressBuilder {
    address: Address,
}

impl AddressBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// CEP in any punctuation; cleaned to 8 digits on build.
    pub fn cep(mut self, cep: impl Into<String>) -> Self {
        self.address.cep = Some(cep.into());
        self
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.address.street = Some(street.into());
        self
    }

    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.address.number = Some(number.into());
        self
    }

    pub fn complement(mut self, complement: impl Into<String>) -> Self {
        self.address.complement = Some(complement.into());
        self
    }

    pub fn district(mut self, district: impl Into<String>) -> Self {
        self.address.district = Some(district.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.address.city = Some(city.into());
        self
    }

    /// Two-letter UF code.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.address.state = Some(state.into());
        self
    }

    pub fn build(self) -> Address {
        self.address
    }
}

// Upper bound on every text field of a record
const MAX_FIELD_BYTES: usize = 1_000;

fn check_lengths<'a>(
    mut fields: impl Iterator<Item = &'a str>,
) -> Result<(), RegistrationError> {
    if fields.any(|f| f.len() > MAX_FIELD_BYTES) {
        return Err(RegistrationError::Builder(format!(
            "field cannot exceed {MAX_FIELD_BYTES} bytes"
        )));
    }
    Ok(())
}

/// Text fields carried by both kinds of party.
fn shared_fields<'a>(
    responsible: &'a ResponsiblePerson,
    contact: &'a Contact,
    address: &'a Address,
) -> impl Iterator<Item = &'a str> {
    let optional = [
        &responsible.cpf,
        &responsible.name,
        &contact.mobile,
        &contact.phone,
        &address.cep,
        &address.street,
        &address.number,
        &address.complement,
        &address.district,
        &address.city,
        &address.state,
    ];
    std::iter::once(contact.email.as_str())
        .chain(optional.into_iter().filter_map(|v| v.as_deref()))
}

/// Blank form fields become `None`; the rest is cleaned to digits.
fn clean_optional(value: &mut Option<String>) {
    *value = value
        .take()
        .filter(|s| !s.trim().is_empty())
        .map(|s| clean_document(&s));
}

fn normalize_responsible(responsible: &mut ResponsiblePerson) {
    clean_optional(&mut responsible.cpf);
    if responsible.name.as_deref().is_some_and(|s| s.trim().is_empty()) {
        responsible.name = None;
    }
}

fn normalize_contact(contact: &mut Contact) {
    contact.email = contact.email.trim().to_string();
    clean_optional(&mut contact.mobile);
    clean_optional(&mut contact.phone);
}

fn normalize_address(address: &mut Address) {
    clean_optional(&mut address.cep);
    if address.state.as_deref().is_some_and(|s| s.trim().is_empty()) {
        address.state = None;
    }
}
