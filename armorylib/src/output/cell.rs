//! Display values for table cells.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::data::item::Damage;

/// Placeholder shown for absent values.
pub const PLACEHOLDER: &str = "-";

/// A single cell's display value.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Free text (ids, names, composite fields, flag lists)
    Text(String),
    /// A catalog number, shown in shortest form (`95`, `1.2`)
    Number(f64),
    /// Absent value, shown as the placeholder dash
    Missing,
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    /// Number cell, or the placeholder when the field is absent.
    pub fn number(value: Option<f64>) -> Self {
        value.map_or(CellValue::Missing, CellValue::Number)
    }

    /// `<amount><type>` with no separator, or the placeholder.
    pub fn damage(damage: Option<&Damage>) -> Self {
        match damage {
            Some(d) => CellValue::Text(format!("{}{}", format_number(d.amount), d.kind)),
            None => CellValue::Missing,
        }
    }

    /// Flags joined by commas; an empty list is an empty string, not a dash.
    pub fn flags(flags: &[String]) -> Self {
        CellValue::Text(flags.join(","))
    }

    /// Shield size: `w*2` when square, else `"<w*2>×<w+h>"`.
    pub fn shield_size(width: Option<f64>, height: Option<f64>) -> Self {
        match (width, height) {
            (Some(w), Some(h)) if w == h => CellValue::Number(w * 2.0),
            (Some(w), Some(h)) => CellValue::Text(format!(
                "{}\u{d7}{}",
                format_number(w * 2.0),
                format_number(w + h)
            )),
            _ => CellValue::Missing,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

/// Format a catalog number the way the catalog writes it.
pub fn format_number(value: f64) -> String {
    // f64's Display already drops a zero fraction and uses the shortest
    // round-trip digits.
    value.to_string()
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Missing => PLACEHOLDER.to_string(),
        };

        // Respect width and alignment from the formatter
        f.pad(&s)
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 9.0e15 => {
                serializer.serialize_i64(*n as i64)
            }
            CellValue::Number(n) => serializer.serialize_f64(*n),
            CellValue::Missing => serializer.serialize_str(PLACEHOLDER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(95.0, "95")]
    #[case(1.2, "1.2")]
    #[case(0.25, "0.25")]
    #[case(-3.0, "-3")]
    fn test_format_number(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_number(value), expected);
    }

    #[test]
    fn test_damage_composite() {
        let cut = Damage::new(30.0, "c");
        assert_eq!(CellValue::damage(Some(&cut)).to_string(), "30c");
        assert_eq!(CellValue::damage(None).to_string(), "-");
    }

    #[test]
    fn test_damage_is_never_empty() {
        for damage in [None, Some(Damage::new(0.0, "b")), Some(Damage::new(12.5, "p"))] {
            let rendered = CellValue::damage(damage.as_ref()).to_string();
            assert!(!rendered.is_empty());
            match &damage {
                Some(d) => assert_eq!(rendered, format!("{}{}", format_number(d.amount), d.kind)),
                None => assert_eq!(rendered, PLACEHOLDER),
            }
        }
    }

    #[test]
    fn test_flags() {
        let flags = vec!["two_handed".to_string(), "crush_through".to_string()];
        assert_eq!(CellValue::flags(&flags).to_string(), "two_handed,crush_through");
        assert_eq!(CellValue::flags(&[]).to_string(), "");
    }

    #[rstest]
    #[case(Some(30.0), Some(30.0), "60")]
    #[case(Some(32.0), Some(24.0), "64\u{d7}56")]
    #[case(Some(32.0), None, "-")]
    #[case(None, None, "-")]
    fn test_shield_size(
        #[case] width: Option<f64>,
        #[case] height: Option<f64>,
        #[case] expected: &str,
    ) {
        assert_eq!(CellValue::shield_size(width, height).to_string(), expected);
    }

    #[test]
    fn test_number_or_missing() {
        assert_eq!(CellValue::number(Some(80.0)), CellValue::Number(80.0));
        assert!(CellValue::number(None).is_missing());
    }

    #[test]
    fn test_display_respects_width() {
        let cell = CellValue::Number(95.0);
        assert_eq!(format!("{:>5}", cell), "   95");
        assert_eq!(format!("{:<5}|", CellValue::Missing), "-    |");
    }

    #[test]
    fn test_serialize() {
        let cells = vec![
            CellValue::text("itm_sword"),
            CellValue::Number(1.2),
            CellValue::Number(120.0),
            CellValue::Missing,
        ];
        let json = serde_json::to_string(&cells).unwrap();
        assert_eq!(json, r#"["itm_sword",1.2,120,"-"]"#);
    }
}
