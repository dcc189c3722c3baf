#![cfg(feature = "registration")]

use chrono::NaiveDate;
use lexsum::registration::*;
use lexsum::{DocumentKind, ValidationError};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn address() -> Address {
    AddressBuilder::new()
        .cep("01310-100")
        .street("Avenida Paulista")
        .number("1000")
        .complement("Conj. 12")
        .district("Bela Vista")
        .city("São Paulo")
        .state("SP")
        .build()
}

fn individual() -> IndividualBuilder {
    IndividualBuilder::new("111.444.777-35", "Maria da Silva")
        .social_name("Maria Silva")
        .gender("Feminino")
        .identity(
            "12.345.678-9",
            Some("SSP/SP".into()),
            Some(date(2008, 3, 10)),
        )
        .nit("123.45678.90-1")
        .marital_status("Casada")
        .profession("Professora")
        .nationality("Brasileira")
        .parents("Ana da Silva", Some("José da Silva".into()))
        .birth_date(date(1990, 5, 1))
        .email("maria@example.com")
        .mobile("(11) 98765-4321")
        .address(address())
}

fn company() -> CompanyBuilder {
    CompanyBuilder::new("11.222.333/0001-81", "Acme Comércio de Alimentos Ltda")
        .trade_name("Acme")
        .state_registration("110.042.490.114")
        .municipal_registration("1.234.567-8")
        .responsible("529.982.247-25", "João Souza")
        .email("juridico@acme.com.br")
        .phone("(11) 3456-7890")
        .address(address())
}

fn rules(errors: &[ValidationError]) -> Vec<String> {
    errors.iter().filter_map(|e| e.rule.clone()).collect()
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

#[test]
fn complete_individual_builds() {
    let p = individual().build().unwrap();
    assert_eq!(p.cpf, "11144477735");
    assert_eq!(p.contact.mobile.as_deref(), Some("11987654321"));
    assert_eq!(p.address.cep.as_deref(), Some("01310100"));
    assert_eq!(p.second_parent.as_deref(), Some("José da Silva"));
}

#[test]
fn complete_company_builds() {
    let c = company().build().unwrap();
    assert_eq!(c.cnpj, "11222333000181");
    assert_eq!(c.responsible.cpf.as_deref(), Some("52998224725"));
}

#[test]
fn build_reports_every_failure() {
    let err = IndividualBuilder::new("000.000.000-00", "")
        .email("not-an-email")
        .mobile("123")
        .address(AddressBuilder::new().cep("1").state("ZZ").build())
        .build()
        .unwrap_err();
    let got = rules(err.validation_errors());
    assert_eq!(got, ["LX-01", "LX-02", "LX-03", "LX-04", "LX-05", "LX-06"]);
}

#[test]
fn registration_error_message() {
    let err = CompanyBuilder::new("11.222.333/0001-80", "Acme Ltda")
        .email("juridico@acme.com.br")
        .build()
        .unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"validation failed: [LX-01] cnpj: Documento inválido. Verifique o CPF ou CNPJ digitado. (check digit at position 13 should be 1, found 0)"
    );
}

// ---------------------------------------------------------------------------
// Party
// ---------------------------------------------------------------------------

#[test]
fn party_accessors() {
    let p = Party::from(individual().build().unwrap());
    assert_eq!(p.kind(), DocumentKind::Cpf);
    assert_eq!(p.display_name(), "Maria Silva");
    assert_eq!(p.document().unwrap().to_string(), "111.444.777-35");
    assert_eq!(p.contact().email, "maria@example.com");
    assert_eq!(p.address().state.as_deref(), Some("SP"));

    let c = Party::from(company().build().unwrap());
    assert_eq!(c.kind(), DocumentKind::Cnpj);
    assert_eq!(c.display_name(), "Acme");
    assert!(validate_party(&c).is_empty());
}

#[test]
fn party_document_rejects_mismatched_kind() {
    // A valid CNPJ stored in an individual's CPF field
    let p = Party::from(
        IndividualBuilder::new("11.222.333/0001-81", "Maria da Silva")
            .email("maria@example.com")
            .build_unchecked(),
    );
    assert!(p.document().is_none());
    assert_eq!(rules(&validate_party(&p)), ["LX-01"]);
}

#[test]
fn party_serde_is_tagged() {
    let c = Party::from(company().build().unwrap());
    let json = serde_json::to_value(&c).unwrap();
    assert_eq!(json["type"], "company");
    assert_eq!(json["cnpj"], "11222333000181");

    let back: Party = serde_json::from_value(json).unwrap();
    assert_eq!(back, c);
}

#[test]
fn individual_dates_serialize_iso() {
    let p = individual().build().unwrap();
    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["birth_date"], "1990-05-01");
    assert_eq!(json["identity"]["issue_date"], "2008-03-10");
}

#[test]
fn untouched_form_fields_are_not_validated() {
    // Form fields start as empty strings
    let p: Party = serde_json::from_value(serde_json::json!({
        "type": "individual",
        "cpf": "111.444.777-35",
        "name": "Maria da Silva",
        "contact": { "email": "maria@example.com", "mobile": "", "phone": "" },
        "address": { "cep": "", "state": "", "city": "" },
        "responsible": { "cpf": "", "name": "" }
    }))
    .unwrap();
    assert!(validate_party(&p).is_empty());

    let c = company()
        .trade_name("")
        .responsible("", "")
        .phone("  ")
        .build()
        .unwrap();
    assert_eq!(c.contact.phone, None);
    assert_eq!(Party::from(c).display_name(), "Acme Comércio de Alimentos Ltda");
}

#[test]
fn blank_social_name_falls_back_to_name() {
    let p = Party::from(
        IndividualBuilder::new("111.444.777-35", "Maria da Silva")
            .social_name("")
            .email("maria@example.com")
            .build_unchecked(),
    );
    assert_eq!(p.display_name(), "Maria da Silva");
}
