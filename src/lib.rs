//! # lexsum
//!
//! Validation for Brazilian party registration: CPF and CNPJ checksums,
//! contact and address fields, and individual/company registration records.
//!
//! The document predicates are total functions over strings. Punctuation
//! and whitespace are ignored, and malformed input of any kind yields
//! `false`, never a panic.
//!
//! ## Quick Start
//!
//! ```rust
//! use lexsum::*;
//!
//! assert!(is_valid_cpf("111.444.777-35"));
//! assert!(is_valid_cnpj("11.222.333/0001-81"));
//! assert!(is_valid_document("111 444 777 35"));
//! assert!(!is_valid_document("111.444.777-36"));
//!
//! assert_eq!(classify_document("11222333000181"), DocumentClassification::Company);
//!
//! let doc: Document = "11144477735".parse().unwrap();
//! assert_eq!(doc.to_string(), "111.444.777-35");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | CPF/CNPJ validation, classification, formatting |
//! | `contact` | Phone, e-mail, name, password policy, CEP, UF |
//! | `registration` | Individual/company registration records and validation |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "contact")]
pub mod contact;

#[cfg(feature = "registration")]
pub mod registration;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
