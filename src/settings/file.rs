//! Settings file persistence.

use std::fs::OpenOptions;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use tracing::{debug, warn};

use super::Settings;

const FIELDS: usize = 9;

pub fn save(settings: &Settings, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{},{},{},{},{},{},{}\n",
        settings.pass_length,
        settings.number_of_passwords,
        settings.exportable,
        settings.no_uppercase,
        settings.no_lowercase,
        settings.no_numbers,
        settings.no_special,
        settings.special_chars.is_some(),
        escape(settings.special_chars.as_deref().unwrap_or("")),
    );

    file.write_all(data.as_bytes())?;
    debug!(path = %path.display(), "settings saved");
    Ok(())
}

pub fn load(path: &Path) -> io::Result<Settings> {
    let mut settings = Settings::default();

    let file = match OpenOptions::new().read(true).open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(settings),
        Err(e) => return Err(e),
    };

    let mut line = String::new();
    BufReader::new(file).read_line(&mut line)?;
    let line = line.trim_end_matches(['\n', '\r']);
    if line.is_empty() {
        return Ok(settings);
    }

    let parts = split_escaped(line, ',');
    if parts.len() != FIELDS {
        warn!(
            path = %path.display(),
            fields = parts.len(),
            "ignoring malformed settings file"
        );
        return Ok(settings);
    }

    settings.pass_length = parts[0].parse().unwrap_or(settings.pass_length);
    settings.number_of_passwords = parts[1].parse().unwrap_or(settings.number_of_passwords);
    settings.exportable = parts[2].parse().unwrap_or(settings.exportable);
    settings.no_uppercase = parts[3].parse().unwrap_or(settings.no_uppercase);
    settings.no_lowercase = parts[4].parse().unwrap_or(settings.no_lowercase);
    settings.no_numbers = parts[5].parse().unwrap_or(settings.no_numbers);
    settings.no_special = parts[6].parse().unwrap_or(settings.no_special);
    // An empty restriction set is distinct from no restriction.
    settings.special_chars = match parts[7].parse::<bool>() {
        Ok(true) => Some(parts[8].clone()),
        Ok(false) => None,
        Err(_) => Some(parts[8].clone()).filter(|s| !s.is_empty()),
    };

    Ok(settings)
}

fn escape(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            ',' => "|,".to_string(),
            '|' => "||".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}
