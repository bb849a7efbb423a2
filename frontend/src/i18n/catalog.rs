//! Embedded translation catalogs.
//!
//! Each language ships as one JSON document whose top-level keys are the
//! section namespaces. Lookups fall back to English, then to the key.

use std::collections::HashMap;
use std::rc::Rc;

use log::warn;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::i18n::language::Language;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog for `{language}` is not valid JSON: {source}")]
    Parse {
        language: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalog for `{0}` must be a JSON object")]
    NotAnObject(&'static str),
}

const EMBEDDED: [(Language, &str); 3] = [
    (Language::En, include_str!("../../locales/en.json")),
    (Language::Ar, include_str!("../../locales/ar.json")),
    (Language::Tr, include_str!("../../locales/tr.json")),
];

#[derive(Debug, Default)]
pub struct Catalogs {
    documents: HashMap<Language, Value>,
}

impl Catalogs {
    pub fn embedded() -> Result<Self, CatalogError> {
        let mut documents = HashMap::new();
        for (language, source) in EMBEDDED {
            let document: Value =
                serde_json::from_str(source).map_err(|source| CatalogError::Parse {
                    language: language.code(),
                    source,
                })?;
            if !document.is_object() {
                return Err(CatalogError::NotAnObject(language.code()));
            }
            documents.insert(language, document);
        }
        Ok(Self { documents })
    }

    fn lookup(&self, language: Language, namespace: &str, key: &str) -> Option<&Value> {
        let mut node = self.documents.get(&language)?.get(namespace)?;
        for part in key.split('.') {
            node = match node {
                Value::Array(items) => items.get(part.parse::<usize>().ok()?)?,
                other => other.get(part)?,
            };
        }
        Some(node)
    }

    /// The value in `language`, falling back to English.
    pub fn resolve(&self, language: Language, namespace: &str, key: &str) -> Option<&Value> {
        self.lookup(language, namespace, key)
            .or_else(|| self.lookup(Language::En, namespace, key))
    }
}

/// Lookups bound to one language and namespace.
#[derive(Clone, Debug)]
pub struct Translator {
    language: Language,
    namespace: &'static str,
    catalogs: Rc<Catalogs>,
}

impl PartialEq for Translator {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language
            && self.namespace == other.namespace
            && Rc::ptr_eq(&self.catalogs, &other.catalogs)
    }
}

impl Translator {
    pub fn new(language: Language, namespace: &'static str, catalogs: Rc<Catalogs>) -> Self {
        Self { language, namespace, catalogs }
    }

    /// A string for `key` (dotted path). Unknown keys render as themselves.
    pub fn t(&self, key: &str) -> String {
        match self.catalogs.resolve(self.language, self.namespace, key) {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Number(number)) => number.to_string(),
            Some(_) => {
                warn!("{}:{} is not a string", self.namespace, key);
                key.to_string()
            }
            None => {
                warn!("Missing translation {}:{} ({})", self.namespace, key, self.language.code());
                key.to_string()
            }
        }
    }

    /// A structured record for `key`, or its default when absent/mismatched.
    pub fn object<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.decode(key).unwrap_or_default()
    }

    /// An array of records for `key`. Empty when absent/mismatched.
    pub fn list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.decode(key).unwrap_or_default()
    }

    fn decode<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.catalogs.resolve(self.language, self.namespace, key);
        let Some(value) = value else {
            warn!("Missing translation {}:{} ({})", self.namespace, key, self.language.code());
            return None;
        };
        match serde_json::from_value(value.clone()) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                warn!("Translation {}:{} has the wrong shape: {}", self.namespace, key, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::BTreeSet;

    const NAMESPACES: [&str; 7] = [
        "hero",
        "about",
        "services",
        "technologies",
        "team",
        "contact",
        "footer",
    ];

    fn catalogs() -> Rc<Catalogs> {
        Rc::new(Catalogs::embedded().expect("embedded catalogs parse"))
    }

    /// Every key path, with array items collapsed to their shape.
    fn shape(value: &Value, prefix: &str, out: &mut BTreeSet<String>) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    shape(child, &format!("{}.{}", prefix, key), out);
                }
            }
            Value::Array(items) => {
                out.insert(format!("{}[{}]", prefix, items.len()));
                for child in items {
                    shape(child, &format!("{}[]", prefix), out);
                }
            }
            _ => {
                out.insert(prefix.to_string());
            }
        }
    }

    #[test]
    fn every_language_has_every_namespace() {
        let catalogs = catalogs();
        for language in Language::ALL {
            for namespace in NAMESPACES {
                assert!(
                    catalogs.documents[&language].get(namespace).is_some(),
                    "{} missing namespace {}",
                    language.code(),
                    namespace
                );
            }
        }
    }

    #[test]
    fn translations_match_english_shape() {
        let catalogs = catalogs();
        let mut english = BTreeSet::new();
        shape(&catalogs.documents[&Language::En], "", &mut english);
        for language in [Language::Ar, Language::Tr] {
            let mut other = BTreeSet::new();
            shape(&catalogs.documents[&language], "", &mut other);
            let missing: Vec<_> = english.difference(&other).collect();
            let extra: Vec<_> = other.difference(&english).collect();
            assert!(missing.is_empty(), "{} missing {:?}", language.code(), missing);
            assert!(extra.is_empty(), "{} has extra {:?}", language.code(), extra);
        }
    }

    #[test]
    fn dotted_and_indexed_keys() {
        let tr = Translator::new(Language::En, "contact", catalogs());
        assert_eq!(tr.t("form.submit"), "Send Message");
        let about = Translator::new(Language::En, "about", catalogs());
        assert_eq!(about.t("timeline.0.year"), "2020");
    }

    #[test]
    fn falls_back_to_key_when_missing() {
        let tr = Translator::new(Language::Tr, "hero", catalogs());
        assert_eq!(tr.t("does.not.exist"), "does.not.exist");
        assert_eq!(tr.list::<String>("does_not_exist"), Vec::<String>::new());
    }

    #[test]
    fn falls_back_to_english_per_key() {
        let mut documents = HashMap::new();
        documents.insert(Language::En, serde_json::json!({"hero": {"cta": "Get Started", "only_en": "x"}}));
        documents.insert(Language::Tr, serde_json::json!({"hero": {"cta": "Başlayın"}}));
        let catalogs = Rc::new(Catalogs { documents });
        let tr = Translator::new(Language::Tr, "hero", catalogs);
        assert_eq!(tr.t("cta"), "Başlayın");
        assert_eq!(tr.t("only_en"), "x");
    }

    #[test]
    fn decodes_structured_records() {
        #[derive(Deserialize, Default)]
        struct Header {
            title: String,
            subtitle: String,
        }
        let team = Translator::new(Language::Ar, "team", catalogs());
        let header: Header = team.object("sectionHeader");
        assert!(!header.title.is_empty());
        assert!(!header.subtitle.is_empty());

        // Wrong shape decodes to the default instead of failing the render.
        let wrong: Vec<Header> = team.list("sectionHeader");
        assert!(wrong.is_empty());
    }
}
