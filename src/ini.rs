use crate::error::{LocateError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Key/value pairs of one section.
pub type IniSection = HashMap<String, String>;

/// Minimal INI reader suitable for the launcher's `versions.ini`.
///
/// This is a tolerant reader:
/// - `;` comments and blank lines are skipped
/// - `[name]` opens (or reopens) a section; sections keep file order
/// - `key=value` splits on the first `=`; the last write for a key wins
/// - lines without `=` are ignored
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Ini {
    global: IniSection,
    sections: Vec<(String, IniSection)>,
}

struct Fold {
    doc: Ini,
    current: Option<usize>,
}

impl Ini {
    /// Parse INI text.
    pub fn parse(text: &str) -> Self {
        let init = Fold {
            doc: Ini::default(),
            current: None,
        };
        text.lines().fold(init, fold_line).doc
    }

    /// Read and parse a UTF-8 INI file.
    pub fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| LocateError::MetadataUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// Pairs that appear before any section header.
    pub fn global(&self) -> &IniSection {
        &self.global
    }

    /// A named section.
    pub fn section(&self, name: &str) -> Option<&IniSection> {
        self.section_index(name).map(|i| &self.sections[i].1)
    }

    /// All named sections, in order of first appearance.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &IniSection)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn section_index(&self, name: &str) -> Option<usize> {
        self.sections.iter().position(|(k, _)| k == name)
    }

    fn open_section(&mut self, name: &str) -> usize {
        if let Some(i) = self.section_index(name) {
            return i;
        }
        self.sections.push((name.to_string(), IniSection::new()));
        self.sections.len() - 1
    }

    /// Number of named sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}

fn fold_line(mut acc: Fold, raw: &str) -> Fold {
    let line = raw.trim();
    if line.is_empty() || line.starts_with(';') {
        return acc;
    }

    if line.starts_with('[') && line.ends_with(']') {
        acc.current = Some(acc.doc.open_section(&line[1..line.len() - 1]));
        return acc;
    }

    let Some((key, value)) = line.split_once('=') else {
        tracing::debug!(line, "ignoring ini line without '='");
        return acc;
    };

    let target = match acc.current {
        Some(i) => &mut acc.doc.sections[i].1,
        None => &mut acc.doc.global,
    };
    target.insert(key.trim().to_string(), value.trim().to_string());
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sections_and_global() {
        let txt = "\
; launcher versions
default=1.20.80.05

[1.20.80.05]
versionCode=972008005
versionName=1.20.80.05
";
        let ini = Ini::parse(txt);
        assert_eq!(ini.global().get("default").unwrap(), "1.20.80.05");
        let s = ini.section("1.20.80.05").unwrap();
        assert_eq!(s.get("versionCode").unwrap(), "972008005");
        assert_eq!(s.get("versionName").unwrap(), "1.20.80.05");
    }

    #[test]
    fn splits_on_first_equals_only() {
        let ini = Ini::parse("[a]\nargs=--foo=bar\n");
        assert_eq!(ini.section("a").unwrap().get("args").unwrap(), "--foo=bar");
    }

    #[test]
    fn last_write_wins_and_sections_reopen() {
        let ini = Ini::parse("[a]\nk=1\n[b]\nk=2\n[a]\nk=3\n");
        assert_eq!(ini.section_count(), 2);
        assert_eq!(ini.section("a").unwrap().get("k").unwrap(), "3");
        assert_eq!(ini.section("b").unwrap().get("k").unwrap(), "2");
    }

    #[test]
    fn ignores_lines_without_equals() {
        let ini = Ini::parse("[a]\nnot a pair\nk=v\r\n");
        let a = ini.section("a").unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(a.get("k").unwrap(), "v");
    }

    #[test]
    fn sections_iterate_in_file_order() {
        let ini = Ini::parse("[zeta]\n[alpha]\n[mid]\n[alpha]\nk=v\n");
        let names: Vec<&str> = ini.sections().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(ini.section("alpha").unwrap().get("k").unwrap(), "v");
    }

    #[test]
    fn empty_section_is_recorded() {
        let ini = Ini::parse("[empty]\n");
        assert!(ini.section("empty").unwrap().is_empty());
    }
}
