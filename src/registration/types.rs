use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{Document, DocumentKind};

/// Postal address. Every field is optional on the registration forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// CEP postal code.
    pub cep: Option<String>,
    /// Street (logradouro).
    pub street: Option<String>,
    /// House number.
    pub number: Option<String>,
    /// Complement (apartment, suite).
    pub complement: Option<String>,
    /// Neighbourhood (bairro).
    pub district: Option<String>,
    pub city: Option<String>,
    /// Two-letter UF code, e.g. "SP".
    pub state: Option<String>,
}

/// How to reach a party.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// E-mail address (required).
    pub email: String,
    /// Mobile number (celular).
    pub mobile: Option<String>,
    /// Landline number (telefone).
    pub phone: Option<String>,
}

/// Person legally responsible for a party (guardian, administrator).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsiblePerson {
    pub cpf: Option<String>,
    pub name: Option<String>,
}

impl ResponsiblePerson {
    /// Neither CPF nor name given. Blank strings count as not given.
    pub fn is_empty(&self) -> bool {
        given(&self.cpf).is_none() && given(&self.name).is_none()
    }
}

/// The field's value unless it is missing or blank. Forms submit untouched
/// fields as empty strings.
pub(crate) fn given(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// Identity card (RG) details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityDocument {
    /// RG number as printed.
    pub number: String,
    /// Issuing body (órgão expedidor), e.g. "SSP/SP".
    pub issuer: Option<String>,
    pub issue_date: Option<NaiveDate>,
}

/// An individual party (pessoa física).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualRegistration {
    /// CPF; cleaned to 11 digits by the builder.
    pub cpf: String,
    pub name: String,
    /// Name the person chooses to be addressed by (nome social).
    pub social_name: Option<String>,
    pub gender: Option<String>,
    pub identity: Option<IdentityDocument>,
    /// Social security registration number (NIT/PIS).
    pub nit: Option<String>,
    pub marital_status: Option<String>,
    pub profession: Option<String>,
    pub nationality: Option<String>,
    pub first_parent: Option<String>,
    pub second_parent: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub responsible: ResponsiblePerson,
    pub contact: Contact,
    pub address: Address,
}

/// A company party (pessoa jurídica).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRegistration {
    /// CNPJ; cleaned to 14 digits by the builder.
    pub cnpj: String,
    /// Registered corporate name (razão social).
    pub corporate_name: String,
    /// Trade name (nome fantasia).
    pub trade_name: Option<String>,
    /// State tax registration (inscrição estadual).
    pub state_registration: Option<String>,
    /// Municipal tax registration (inscrição municipal).
    pub municipal_registration: Option<String>,
    pub responsible: ResponsiblePerson,
    pub contact: Contact,
    pub address: Address,
}

/// Either kind of party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Party {
    Individual(IndividualRegistration),
    Company(CompanyRegistration),
}

impl Party {
    /// Which document the party is identified by.
    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::Individual(_) => DocumentKind::Cpf,
            Self::Company(_) => DocumentKind::Cnpj,
        }
    }

    /// The party's CPF or CNPJ, if it passes the checksum.
    pub fn document(&self) -> Option<Document> {
        let raw = match self {
            Self::Individual(p) => &p.cpf,
            Self::Company(c) => &c.cnpj,
        };
        Document::parse(raw)
            .ok()
            .filter(|doc| doc.kind() == self.kind())
    }

    /// Social name if set, otherwise the registered (corporate) name.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Individual(p) => given(&p.social_name).unwrap_or(&p.name),
            Self::Company(c) => given(&c.trade_name).unwrap_or(&c.corporate_name),
        }
    }

    /// E-mail and phone numbers.
    pub fn contact(&self) -> &Contact {
        match self {
            Self::Individual(p) => &p.contact,
            Self::Company(c) => &c.contact,
        }
    }

    /// Postal address.
    pub fn address(&self) -> &Address {
        match self {
            Self::Individual(p) => &p.address,
            Self::Company(c) => &c.address,
        }
    }
}

impl From<IndividualRegistration> for Party {
    fn from(p: IndividualRegistration) -> Self {
        Self::Individual(p)
    }
}

impl From<CompanyRegistration> for Party {
    fn from(c: CompanyRegistration) -> Self {
        Self::Company(c)
    }
}
