//! CPF/CNPJ validation, classification, and formatting.
//!
//! The boolean predicates ([`is_valid_cpf`], [`is_valid_cnpj`],
//! [`is_valid_document`]) are total: any input, including empty or
//! non-numeric text, yields a definite answer. The typed parsers
//! ([`Cpf`], [`Cnpj`], [`Document`]) report why a number was rejected.

mod cnpj;
mod cpf;
mod digits;
mod document;
mod error;

pub use cnpj::{CNPJ_LEN, Cnpj, cnpj_check_digits, format_cnpj, is_valid_cnpj};
pub use cpf::{CPF_LEN, Cpf, cpf_check_digits, format_cpf, is_valid_cpf};
pub use digits::clean_document;
pub use document::*;
pub use error::*;
