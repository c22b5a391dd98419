use std::io::{self, Write};

/// Prints the prompt and reads one line. `None` means stdin is closed.
pub fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok();

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// `y`/`yes` answers true, anything else false. A closed stdin counts as no.
pub fn prompt_yes_no(prompt: &str) -> bool {
    match read_line(prompt) {
        Some(answer) => matches!(answer.to_lowercase().as_str(), "y" | "yes"),
        None => false,
    }
}

/// Re-prompts until a number in `min..=max` is entered. An empty line picks
/// the default; `None` means stdin is closed.
pub fn prompt_number(prompt: &str, min: u32, max: u32, default: u32) -> Option<u32> {
    loop {
        let line = read_line(prompt)?;
        if line.is_empty() {
            return Some(default);
        }
        match parse_number(&line, min, max) {
            Ok(value) => return Some(value),
            Err(err) => println!("{}", err),
        }
    }
}

pub fn parse_number(text: &str, min: u32, max: u32) -> Result<u32, String> {
    let value: u32 = text
        .trim()
        .parse()
        .map_err(|_| "Please enter a number".to_string())?;
    if value < min || value > max {
        return Err(format!("Please enter a number between {} and {}", min, max));
    }
    Ok(value)
}
