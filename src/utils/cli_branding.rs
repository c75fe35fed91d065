use colored::Colorize;

pub const RULE: &str = "═══════════════════════════════════════════════════════";

pub const LOGO_NAME: &str = r#"
   █████╗   ██████╗  ██╗ ██╗      ██╗ ████████╗ ██╗   ██╗
  ██╔══██╗ ██╔════╝  ██║ ██║      ██║ ╚══██╔══╝ ╚██╗ ██╔╝
  ███████║ ██║  ███╗ ██║ ██║      ██║    ██║     ╚████╔╝
  ██╔══██║ ██║   ██║ ██║ ██║      ██║    ██║      ╚██╔╝
  ██║  ██║ ╚██████╔╝ ██║ ███████╗ ██║    ██║       ██║
  ╚═╝  ╚═╝  ╚═════╝  ╚═╝ ╚══════╝ ╚═╝    ╚═╝       ╚═╝
"#;

pub fn print_banner() {
    // Solid blocks in white, box-drawing edges in cyan
    for line in LOGO_NAME.lines() {
        let mut colored_line = String::new();
        for c in line.chars() {
            if c == '█' {
                colored_line.push_str(&format!("{}", "█".bright_white()));
            } else {
                colored_line.push_str(&format!("{}", c.to_string().cyan()));
            }
        }
        println!("{}", colored_line);
    }

    println!(
        "{} {} {}\n",
        "Welcome to".bright_white(),
        "Agility".bright_cyan().bold(),
        version().bright_white()
    );
}

pub fn version() -> String {
    match option_env!("CARGO_PKG_VERSION") {
        Some(v) => format!("v{}", v),
        None => "(unknown version)".into(),
    }
}

/// Prints a block of lines framed above and below by a double rule.
pub fn print_framed(lines: &[&str]) {
    println!("{}", RULE.bright_cyan());
    for line in lines {
        println!("   {}", line);
    }
    println!("{}\n", RULE.bright_cyan());
}

pub fn print_rule() {
    println!("{}", RULE.bright_cyan());
}

/// Prints an emoji-prefixed heading followed by indented items.
pub fn print_list(heading: &str, items: &[&str]) {
    println!("{}", heading.bold());
    for item in items {
        println!("   {}", item);
    }
    println!();
}

pub fn print_success(message: &str) {
    println!("✅ {}", message.green());
}

pub fn print_error(message: &str) {
    eprintln!("❌ {}", message.red());
}
