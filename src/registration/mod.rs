//! Party registration records for individuals and companies.
//!
//! Records mirror the pessoa física / pessoa jurídica registration forms.
//! [`validate_individual`] and [`validate_company`] report every failed
//! rule at once; the builders run them before handing out a record.
//!
//! # Example
//!
//! ```
//! use lexsum::registration::*;
//!
//! let party = IndividualBuilder::new("111.444.777-35", "Maria da Silva")
//!     .email("maria@example.com")
//!     .mobile("(11) 98765-4321")
//!     .address(AddressBuilder::new().cep("01310-100").city("São Paulo").state("SP").build())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(party.cpf, "11144477735");
//! assert!(validate_individual(&party).is_empty());
//! ```

mod builder;
mod error;
mod types;
mod validation;

pub use builder::*;
pub use error::RegistrationError;
pub use types::*;
pub use validation::*;
