use lexsum::*;

fn main() {
    println!("=== CPF / CNPJ Validation ===\n");

    let inputs = [
        "111.444.777-35",     // valid CPF
        "111 444 777 35",     // same, spaced
        "111.444.777-36",     // wrong check digit
        "000.000.000-00",     // repeated digits
        "11.222.333/0001-81", // valid CNPJ
        "11.222.333/0001-82", // wrong check digit
        "123.456",            // wrong length
    ];

    for input in &inputs {
        match Document::parse(input) {
            Ok(doc) => println!("  {input:<20} => valid {} ({doc})", doc.kind()),
            Err(e) => println!("  {input:<20} => INVALID: {e}"),
        }
    }

    println!("\n=== Classification ===\n");

    for input in &inputs {
        println!("  {input:<20} => {:?}", classify_document(input));
    }

    println!("\n=== Masking ===\n");

    for raw in ["11144477735", "11222333000181", "12345"] {
        println!(
            "  {raw:<16} => {}",
            format_document(raw).as_deref().unwrap_or("—")
        );
    }
}
