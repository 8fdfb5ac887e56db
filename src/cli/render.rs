//! Rendering an [`OutputShape`] to text.

use std::fmt::Write as _;

use passforge::{Error, OutputShape};
use zeroize::Zeroizing;

use super::flags::Format;

/// Render `shape` as the text that goes to stdout, a file or the clipboard.
pub fn render(shape: &OutputShape, format: Format) -> Result<Zeroizing<String>, Error> {
    let mut out = Zeroizing::new(String::new());

    match (shape, format) {
        (OutputShape::Single(password), Format::Text) => {
            out.push_str(password);
            out.push('\n');
        }
        (OutputShape::Labeled(map), Format::Text) => {
            for (label, password) in map {
                let _ = writeln!(out, "{label}: {password}");
            }
        }
        (OutputShape::Records(records), Format::Text) => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for record in records {
                writer.serialize(record)?;
            }
            let bytes = Zeroizing::new(writer.into_inner().map_err(|e| e.into_error())?);
            out.push_str(std::str::from_utf8(&bytes).map_err(std::io::Error::other)?);
        }
        (shape, Format::Json) => {
            *out = serde_json::to_string_pretty(shape)?;
            out.push('\n');
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use passforge::GenerationRequest;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn shape(count: usize, exportable: bool) -> OutputShape {
        let request = GenerationRequest {
            count,
            length: 10,
            ..Default::default()
        };
        passforge::generate(&request, exportable, &mut StdRng::seed_from_u64(11))
            .unwrap()
            .output
    }

    #[test]
    fn single_is_bare_line() {
        let text = render(&shape(1, true), Format::Text).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert_eq!(text.trim_end_matches('\n').chars().count(), 10);
    }

    #[test]
    fn labeled_lines() {
        let text = render(&shape(3, false), Format::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Password 1: "));
        assert!(lines[2].starts_with("Password 3: "));
    }

    #[test]
    fn records_as_csv() {
        let shape = shape(3, true);
        let text = render(&shape, Format::Text).unwrap();
        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, ["PasswordNumber", "PasswordValue"]);

        let OutputShape::Records(records) = &shape else {
            panic!("expected records");
        };
        for (row, record) in reader.records().zip(records) {
            let row = row.unwrap();
            assert_eq!(&row[0], record.number.to_string());
            assert_eq!(&row[1], record.value.as_str());
        }
    }

    #[test]
    fn json_preserves_label_order() {
        let text = render(&shape(3, false), Format::Json).unwrap();
        let first = text.find("Password 1").unwrap();
        let third = text.find("Password 3").unwrap();
        assert!(first < third);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.as_object().map(|o| o.len()), Some(3));
    }
}
