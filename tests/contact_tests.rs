#![cfg(feature = "contact")]

use lexsum::contact::*;

// ---------------------------------------------------------------------------
// Phone
// ---------------------------------------------------------------------------

#[test]
fn phone_mobile_and_landline() {
    assert_eq!(validate_phone("(11) 98765-4321").unwrap(), "11987654321");
    assert_eq!(validate_phone("(21) 3456-7890").unwrap(), "2134567890");
}

#[test]
fn phone_wrong_lengths() {
    for input in ["", "4321", "987654321", "551198765432"] {
        assert!(validate_phone(input).is_err(), "{input:?}");
    }
}

#[test]
fn phone_error_message() {
    insta::assert_snapshot!(
        validate_phone("12345").unwrap_err().to_string(),
        @"phone must have 10 or 11 digits including area code, got 5"
    );
}

#[test]
fn phone_format_round_trip() {
    let formatted = format_phone("11987654321").unwrap();
    assert_eq!(formatted, "(11) 98765-4321");
    assert_eq!(validate_phone(&formatted).unwrap(), "11987654321");
}

// ---------------------------------------------------------------------------
// E-mail
// ---------------------------------------------------------------------------

#[test]
fn email_shapes() {
    assert!(is_valid_email("advogado@oab.org.br"));
    assert!(is_valid_email("first.last+tag@example.co"));
    assert!(!is_valid_email("advogado@oab"));
    assert!(!is_valid_email("advogado.oab.org.br"));
    assert!(!is_valid_email("advogado@oab.org.b"));
}

// ---------------------------------------------------------------------------
// Name
// ---------------------------------------------------------------------------

#[test]
fn name_normalization() {
    assert_eq!(
        normalize_name("  ANA   maria  de SOUZA ").unwrap(),
        "Ana Maria De Souza"
    );
}

#[test]
fn name_bounds() {
    assert!(normalize_name("Bia").is_ok());
    assert!(normalize_name("Bo").is_err());
    assert!(normalize_name("   ").is_err());
    assert!(normalize_name(&"x".repeat(NAME_MAX_CHARS)).is_ok());
    assert!(normalize_name(&"x".repeat(NAME_MAX_CHARS + 1)).is_err());
}

#[test]
fn name_error_message() {
    insta::assert_snapshot!(
        normalize_name("Jo").unwrap_err().to_string(),
        @"name must have between 3 and 100 characters, got 2"
    );
}

// ---------------------------------------------------------------------------
// Password
// ---------------------------------------------------------------------------

#[test]
fn password_rules() {
    assert!(check_password("Senha@123").is_empty());
    assert_eq!(
        check_password("senha123"),
        vec![PasswordRule::Uppercase, PasswordRule::Special]
    );
    assert_eq!(
        check_password("SENHA@"),
        vec![PasswordRule::Lowercase, PasswordRule::Digit]
    );
}

#[test]
fn password_every_special_accepted() {
    for c in PASSWORD_SPECIALS.chars() {
        let pw = format!("Abc12{c}");
        assert!(check_password(&pw).is_empty(), "{pw}");
    }
}

#[test]
fn password_rule_messages() {
    let messages: Vec<String> = check_password("")
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(messages[0], "must have at least 6 characters");
    assert_eq!(messages.len(), 5);
}

// ---------------------------------------------------------------------------
// CEP / UF
// ---------------------------------------------------------------------------

#[test]
fn cep() {
    assert_eq!(validate_cep("01310-100").unwrap(), "01310100");
    assert!(validate_cep("01310-10").is_err());
    assert_eq!(format_cep("70040010").as_deref(), Some("70040-010"));
}

#[test]
fn uf() {
    for uf in ["SP", "RJ", "MG", "DF", "AM"] {
        assert!(is_known_uf(uf));
    }
    assert!(!is_known_uf("BR"));
    assert!(!is_known_uf("rj"));
    assert_eq!(UF_CODES.len(), 27);
}
