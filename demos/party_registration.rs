use chrono::NaiveDate;
use lexsum::registration::*;

fn main() {
    let person = IndividualBuilder::new("111.444.777-35", "Maria da Silva")
        .social_name("Maria Silva")
        .birth_date(NaiveDate::from_ymd_opt(1990, 5, 1).unwrap())
        .profession("Professora")
        .email("maria@example.com")
        .mobile("(11) 98765-4321")
        .address(
            AddressBuilder::new()
                .cep("01310-100")
                .street("Avenida Paulista")
                .number("1000")
                .city("São Paulo")
                .state("SP")
                .build(),
        )
        .build()
        .expect("valid individual");

    let company = CompanyBuilder::new("11.222.333/0001-81", "Acme Comércio Ltda")
        .trade_name("Acme")
        .responsible("529.982.247-25", "João Souza")
        .email("juridico@acme.com.br")
        .phone("(11) 3456-7890")
        .build()
        .expect("valid company");

    for party in [Party::from(person), Party::from(company)] {
        let doc = party
            .document()
            .map(|d| d.to_string())
            .unwrap_or_default();
        println!("{} — {} {}", party.display_name(), party.kind(), doc);
    }
}
