use lexsum::contact::*;

fn main() {
    println!("=== Phone ===\n");
    for phone in ["(11) 98765-4321", "2134567890", "98765-4321"] {
        match validate_phone(phone) {
            Ok(digits) => println!(
                "  {phone:<18} => {digits} ({})",
                format_phone(&digits).unwrap_or_default()
            ),
            Err(e) => println!("  {phone:<18} => INVALID: {e}"),
        }
    }

    println!("\n=== E-mail ===\n");
    for email in ["maria@example.com", "maria@example", "@example.com"] {
        println!("  {email:<20} => {}", is_valid_email(email));
    }

    println!("\n=== Name ===\n");
    for name in ["  joão   DA silva ", "Al"] {
        match normalize_name(name) {
            Ok(n) => println!("  {name:?} => {n:?}"),
            Err(e) => println!("  {name:?} => INVALID: {e}"),
        }
    }

    println!("\n=== Password ===\n");
    for pw in ["Senha@123", "senha", ""] {
        let violated = check_password(pw);
        if violated.is_empty() {
            println!("  {pw:?} => ok");
        } else {
            for rule in violated {
                println!("  {pw:?} => {rule}");
            }
        }
    }

    println!("\n=== CEP / UF ===\n");
    for cep in ["01310-100", "0131"] {
        println!(
            "  {cep:<10} => {}",
            format_cep(cep).as_deref().unwrap_or("INVALID")
        );
    }
    for uf in ["SP", "XX"] {
        println!("  {uf} known: {}", is_known_uf(uf));
    }
}
