use lexsum::registration::*;
use lexsum::{INVALID_DOCUMENT_MESSAGE, is_valid_document};

fn main() {
    // Form-level check: a plain boolean, message synthesized by the caller
    let typed = "111.444.777-36";
    if !is_valid_document(typed) {
        println!("{typed}: {INVALID_DOCUMENT_MESSAGE}");
    }

    // Record-level check: every failed rule at once
    let result = IndividualBuilder::new("111.444.777-36", "Al")
        .email("maria@")
        .mobile("1234")
        .responsible("529.982.247-25", "")
        .build();

    match result {
        Ok(_) => println!("unexpectedly valid"),
        Err(RegistrationError::Validation(errors)) => {
            println!("\n{} problems:", errors.len());
            for e in &errors {
                println!("  {e}");
            }
        }
        Err(e) => println!("error: {e}"),
    }
}
