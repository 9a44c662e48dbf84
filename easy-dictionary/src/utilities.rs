use std::io::{self, BufRead, Write};

/// Prints `prompt` and reads one line. `None` once stdin is closed.
pub fn input(prompt: &str) -> io::Result<Option<String>> {
    let mut line = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    let read = io::stdin().lock().read_line(&mut line)?;
    Ok((read > 0).then_some(line))
}

/// Trimmed, lower-cased word as typed at the prompt.
pub fn normalize_input(line: &str) -> String {
    line.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_input_trims_and_lowercases() {
        assert_eq!(normalize_input("  Running \n"), "running");
        assert_eq!(normalize_input("EXIT\r\n"), "exit");
        assert_eq!(normalize_input("\n"), "");
    }
}
