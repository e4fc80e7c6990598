//! The translation tree of every language.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::{Error, Lang};

const BUILTIN_SOURCES: [(Lang, &str); 3] = [
    (Lang::En, include_str!("../i18n/en.toml")),
    (Lang::Fi, include_str!("../i18n/fi.toml")),
    (Lang::Ru, include_str!("../i18n/ru.toml")),
];

static BUILTIN: Lazy<Result<Dictionary, Error>> =
    Lazy::new(|| Dictionary::from_sources(&BUILTIN_SOURCES));

#[derive(Debug, Clone, PartialEq)]
enum TransNode {
    Leaf(String),
    Branch(FxHashMap<String, TransNode>),
}

impl TransNode {
    fn from_table(lang: Lang, prefix: &str, table: toml::Table) -> Result<Self, Error> {
        let mut children = FxHashMap::default();
        for (name, value) in table {
            let path = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{}.{}", prefix, name)
            };
            let node = match value {
                toml::Value::String(s) => TransNode::Leaf(s),
                toml::Value::Table(t) => Self::from_table(lang, &path, t)?,
                _ => return Err(Error::InvalidValue { lang, key: path }),
            };
            children.insert(name, node);
        }
        Ok(TransNode::Branch(children))
    }

    fn collect_paths(&self, prefix: &str, ret: &mut Vec<String>) {
        match self {
            TransNode::Leaf(_) => ret.push(prefix.to_string()),
            TransNode::Branch(children) => {
                for (name, child) in children {
                    if prefix.is_empty() {
                        child.collect_paths(name, ret);
                    } else {
                        child.collect_paths(&format!("{}.{}", prefix, name), ret);
                    }
                }
            }
        }
    }
}

/// The translations of all languages, addressed by dotted keys such as `hero.title` .
///
/// The dictionary is immutable once loaded.
/// There is no fallback between languages:
/// a key missing in one language is reported as missing even if another language has it.
#[derive(Debug, Clone, PartialEq)]
pub struct Dictionary {
    langs: FxHashMap<Lang, TransNode>,
}

impl Dictionary {
    /// The dictionary compiled from the `i18n/*.toml` files of this crate.
    ///
    /// The sources are parsed at the first call.
    pub fn builtin() -> Result<&'static Dictionary, Error> {
        BUILTIN.as_ref().map_err(|x| x.clone())
    }

    /// Build a dictionary from TOML sources, one for each language.
    pub fn from_sources(sources: &[(Lang, &str)]) -> Result<Self, Error> {
        let mut langs = FxHashMap::default();
        for (lang, src) in sources {
            let lang = *lang;
            if langs.contains_key(&lang) {
                return Err(Error::DuplicatedLang { lang });
            }
            let table: toml::Table = toml::from_str(src).map_err(|x| Error::ParseFailed {
                lang,
                msg: x.to_string(),
            })?;
            langs.insert(lang, TransNode::from_table(lang, "", table)?);
        }
        Ok(Self { langs })
    }

    /// Whether any translation exists for `lang` .
    pub fn has_lang(&self, lang: Lang) -> bool {
        self.langs.contains_key(&lang)
    }

    /// Find the translated string of a dotted key.
    ///
    /// Returns `None` if any segment is absent or the key addresses a group of strings.
    pub fn get(&self, lang: Lang, key: &str) -> Option<&str> {
        if key.is_empty() {
            return None;
        }
        let mut node = self.langs.get(&lang)?;
        for seg in key.split('.') {
            node = match node {
                TransNode::Branch(children) => children.get(seg)?,
                TransNode::Leaf(_) => return None,
            };
        }
        match node {
            TransNode::Leaf(s) => Some(s.as_str()),
            TransNode::Branch(_) => None,
        }
    }

    /// Translate a dotted key, or return the key itself when no translation exists.
    ///
    /// The returned key makes a missing translation visible on the page.
    pub fn lookup<'a>(&'a self, lang: Lang, key: &'a str) -> &'a str {
        self.get(lang, key).unwrap_or(key)
    }

    /// All dotted keys that have a translation in `lang` , sorted.
    pub fn key_paths(&self, lang: Lang) -> Vec<String> {
        let mut ret = vec![];
        if let Some(root) = self.langs.get(&lang) {
            root.collect_paths("", &mut ret);
        }
        ret.sort();
        ret
    }

    /// The keys translated in `reference` but not in `other` , sorted.
    pub fn missing_keys(&self, reference: Lang, other: Lang) -> Vec<String> {
        self.key_paths(reference)
            .into_iter()
            .filter(|key| self.get(other, key).is_none())
            .collect()
    }
}
