use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    EnterPath,
    OwnDirectory,
    Exit,
}

/// Process exit status once `choice` has been handled: 1 for Exit, else 0.
pub fn exit_status(choice: Option<MenuChoice>) -> u8 {
    match choice {
        Some(MenuChoice::Exit) => 1,
        _ => 0,
    }
}

pub fn show_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "1. Enter a directory path")?;
    writeln!(out, "2. Use the program's directory")?;
    writeln!(out, "3. Exit")?;
    write!(out, "Choice: ")?;
    out.flush()
}

pub fn parse_choice(input: &str) -> Option<MenuChoice> {
    match input.trim() {
        "1" => Some(MenuChoice::EnterPath),
        "2" => Some(MenuChoice::OwnDirectory),
        "3" => Some(MenuChoice::Exit),
        _ => None,
    }
}

pub fn read_choice<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<MenuChoice>> {
    show_menu(out)?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(parse_choice(&line))
}

pub fn prompt_path<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<PathBuf> {
    write!(out, "Enter the directory path: ")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(PathBuf::from(clean_path_input(&line)))
}

/// Trim whitespace and one pair of surrounding quotes, as left by pasting a path.
pub fn clean_path_input(raw: &str) -> &str {
    let trimmed = raw.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = trimmed
            .strip_prefix(quote)
            .and_then(|s| s.strip_suffix(quote))
        {
            return inner;
        }
    }
    trimmed
}

/// Directory containing the running executable.
pub fn own_directory() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(PathBuf::from).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("no parent directory for {}", exe.display()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1\n"), Some(MenuChoice::EnterPath));
        assert_eq!(parse_choice(" 2 "), Some(MenuChoice::OwnDirectory));
        assert_eq!(parse_choice("3\r\n"), Some(MenuChoice::Exit));
        assert_eq!(parse_choice("4"), None);
        assert_eq!(parse_choice(""), None);
        assert_eq!(parse_choice("exit"), None);
    }

    #[test]
    fn test_exit_status() {
        assert_eq!(exit_status(Some(MenuChoice::Exit)), 1);
        assert_eq!(exit_status(Some(MenuChoice::EnterPath)), 0);
        assert_eq!(exit_status(Some(MenuChoice::OwnDirectory)), 0);
        assert_eq!(exit_status(None), 0);
    }

    #[test]
    fn test_read_choice_shows_menu() {
        let mut input = Cursor::new("2\n");
        let mut out = Vec::new();
        let choice = read_choice(&mut input, &mut out).unwrap();
        assert_eq!(choice, Some(MenuChoice::OwnDirectory));

        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("1. Enter a directory path"));
        assert!(shown.contains("3. Exit"));
    }

    #[test]
    fn test_read_choice_at_eof_is_invalid() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        assert_eq!(read_choice(&mut input, &mut out).unwrap(), None);
    }

    #[test]
    fn test_prompt_path_trims_input() {
        let mut input = Cursor::new("  \"/data/my shots\"  \n");
        let mut out = Vec::new();
        let path = prompt_path(&mut input, &mut out).unwrap();
        assert_eq!(path, PathBuf::from("/data/my shots"));
        assert_eq!(String::from_utf8(out).unwrap(), "Enter the directory path: ");
    }

    #[test]
    fn test_clean_path_input() {
        assert_eq!(clean_path_input("/tmp/a\n"), "/tmp/a");
        assert_eq!(clean_path_input("'C:\\Photos'"), "C:\\Photos");
        assert_eq!(clean_path_input("\"unbalanced"), "\"unbalanced");
        assert_eq!(clean_path_input("   "), "");
    }

    #[test]
    fn test_own_directory_is_a_directory() {
        assert!(own_directory().unwrap().is_dir());
    }
}
