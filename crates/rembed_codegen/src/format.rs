//! Byte array literal formatting.

/// Renders raw bytes as a fixed-size `std::array<unsigned char, N>`
/// declaration.
///
/// Every byte is written as `0xNN`, entries are separated by `, ` and the
/// list wraps after `per_line` entries. Zero-length input produces
/// `std::array<unsigned char, 0>` with an empty initializer, which is valid
/// ISO C++ (a zero-length built-in array is not).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteArrayFormatter {
    per_line: usize,
    indent: usize,
}

impl ByteArrayFormatter {
    /// Creates a formatter wrapping after `per_line` entries (minimum 1).
    pub fn new(per_line: usize) -> Self {
        Self {
            per_line: per_line.max(1),
            indent: 0,
        }
    }

    /// Sets the number of tabs the declaration line is indented by. Array
    /// entries are indented one level deeper.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Renders the brace-enclosed initializer list.
    pub fn literal(&self, bytes: &[u8]) -> String {
        if bytes.is_empty() {
            return "{}".to_string();
        }
        let outer = "\t".repeat(self.indent);
        let inner = "\t".repeat(self.indent + 1);

        let mut out = String::with_capacity(bytes.len() * 6 + 8);
        out.push_str("{\n");
        for (i, line) in bytes.chunks(self.per_line).enumerate() {
            if i > 0 {
                out.push_str(",\n");
            }
            out.push_str(&inner);
            let entries: Vec<String> = line.iter().map(|b| format!("0x{b:02X}")).collect();
            out.push_str(&entries.join(", "));
        }
        out.push('\n');
        out.push_str(&outer);
        out.push('}');
        out
    }

    /// Renders a full `constexpr static` member declaration named `name`.
    pub fn declaration(&self, name: &str, bytes: &[u8]) -> String {
        format!(
            "{}constexpr static const std::array<unsigned char, {}> {name} = {};",
            "\t".repeat(self.indent),
            bytes.len(),
            self.literal(bytes)
        )
    }
}

impl Default for ByteArrayFormatter {
    fn default() -> Self {
        Self::new(18)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_valid_zero_length_array() {
        let f = ByteArrayFormatter::default();
        assert_eq!(f.literal(&[]), "{}");
        assert_eq!(
            f.declaration("data", &[]),
            "constexpr static const std::array<unsigned char, 0> data = {};"
        );
    }

    #[test]
    fn single_line() {
        let f = ByteArrayFormatter::default();
        assert_eq!(f.literal(&[0x4a, 0x00, 0xff]), "{\n\t0x4A, 0x00, 0xFF\n}");
    }

    #[test]
    fn wraps_after_per_line_entries() {
        let f = ByteArrayFormatter::new(2);
        assert_eq!(
            f.literal(&[1, 2, 3, 4, 5]),
            "{\n\t0x01, 0x02,\n\t0x03, 0x04,\n\t0x05\n}"
        );
    }

    #[test]
    fn exact_multiple_has_no_trailing_blank_line() {
        let f = ByteArrayFormatter::new(2);
        assert_eq!(f.literal(&[1, 2, 3, 4]), "{\n\t0x01, 0x02,\n\t0x03, 0x04\n}");
    }

    #[test]
    fn default_width_is_eighteen() {
        let bytes: Vec<u8> = (0..36).collect();
        let lit = ByteArrayFormatter::default().literal(&bytes);
        let rows: Vec<&str> = lit.lines().filter(|l| l.contains("0x")).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].matches("0x").count(), 18);
        assert_eq!(rows[1].matches("0x").count(), 18);
    }

    #[test]
    fn indentation() {
        let f = ByteArrayFormatter::new(18).with_indent(2);
        assert_eq!(
            f.declaration("data", &[7]),
            "\t\tconstexpr static const std::array<unsigned char, 1> data = {\n\t\t\t0x07\n\t\t};"
        );
    }

    #[test]
    fn zero_width_clamped_to_one() {
        let f = ByteArrayFormatter::new(0);
        assert_eq!(f.literal(&[1, 2]), "{\n\t0x01,\n\t0x02\n}");
    }

    #[test]
    fn deterministic() {
        let bytes: Vec<u8> = (0..=255).collect();
        let f = ByteArrayFormatter::default();
        assert_eq!(f.literal(&bytes), f.literal(&bytes));
    }

    #[test]
    fn every_byte_recoverable() {
        let bytes: Vec<u8> = (0..=255).rev().collect();
        let lit = ByteArrayFormatter::new(7).literal(&bytes);
        let parsed: Vec<u8> = lit
            .split(|c: char| c == ',' || c.is_whitespace() || c == '{' || c == '}')
            .filter(|tok| !tok.is_empty())
            .map(|tok| u8::from_str_radix(tok.trim_start_matches("0x"), 16).unwrap())
            .collect();
        assert_eq!(parsed, bytes);
    }
}
