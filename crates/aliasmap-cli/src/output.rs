//! Output payload
//!
//! Writes discovered pairs as `[[expandedKey, originalValue], ...]`.

use aliasmap_path::DiscoveredPair;
use std::io::{self, Write};

/// Serialize `pairs` to `writer`, followed by a newline
///
/// # Errors
/// Returns the underlying I/O error if writing fails.
pub fn write_pairs<W: Write>(
    mut writer: W,
    pairs: &[DiscoveredPair],
    pretty: bool,
) -> io::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, pairs)?;
    } else {
        serde_json::to_writer(&mut writer, pairs)?;
    }
    writeln!(writer)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(pairs: &[DiscoveredPair], pretty: bool) -> String {
        let mut buf = Vec::new();
        write_pairs(&mut buf, pairs, pretty).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn output_compact() {
        let pairs = vec![
            DiscoveredPair::new("x.b.c", "a.b.c"),
            DiscoveredPair::new("a.q", "a.b"),
        ];
        assert_eq!(render(&pairs, false), "[[\"x.b.c\",\"a.b.c\"],[\"a.q\",\"a.b\"]]\n");
    }

    #[test]
    fn output_empty() {
        assert_eq!(render(&[], false), "[]\n");
    }

    #[test]
    fn output_pretty_parses_back() {
        let pairs = vec![DiscoveredPair::new("x", "a")];
        let text = render(&pairs, true);

        assert!(text.contains('\n'));
        let parsed: Vec<(String, String)> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, vec![("x".to_string(), "a".to_string())]);
    }
}
