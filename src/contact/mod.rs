//! Contact and address field validation for party registration.
//!
//! Phone numbers, e-mail addresses, personal names, signup password
//! policy, CEP postal codes, and UF state codes.
//!
//! # Example
//!
//! ```
//! use lexsum::contact::*;
//!
//! assert_eq!(validate_phone("(11) 98765-4321").unwrap(), "11987654321");
//! assert!(is_valid_email("ana@escritorio.adv.br"));
//! assert_eq!(normalize_name("  maria   da silva ").unwrap(), "Maria Da Silva");
//! assert!(check_password("Segura#2024").is_empty());
//! assert_eq!(format_cep("01234567").as_deref(), Some("01234-567"));
//! assert!(is_known_uf("SP"));
//! ```

mod cep;
mod email;
mod error;
mod name;
mod password;
mod phone;
mod uf;

pub use cep::{format_cep, validate_cep};
pub use email::is_valid_email;
pub use error::ContactError;
pub use name::{NAME_MAX_CHARS, NAME_MIN_CHARS, normalize_name};
pub use password::{PASSWORD_MIN_LEN, PASSWORD_SPECIALS, PasswordRule, check_password};
pub use phone::{format_phone, validate_phone};
pub use uf::{UF_CODES, is_known_uf};
