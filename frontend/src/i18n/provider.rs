use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::i18n::catalog::{Catalogs, Translator};
use crate::i18n::language::{detect, Language};

/// Current language plus the catalogs, shared through context.
#[derive(Clone, Debug)]
pub struct I18n {
    pub language: Language,
    pub set_language: Callback<Language>,
    catalogs: Rc<Catalogs>,
}

impl PartialEq for I18n {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language
            && self.set_language == other.set_language
            && Rc::ptr_eq(&self.catalogs, &other.catalogs)
    }
}

impl I18n {
    pub fn translator(&self, namespace: &'static str) -> Translator {
        Translator::new(self.language, namespace, self.catalogs.clone())
    }
}

fn browser_language() -> Option<String> {
    web_sys::window().and_then(|w| w.navigator().language())
}

fn apply_to_document(language: Language) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.set_attribute("lang", language.code());
        let _ = root.set_attribute("dir", language.direction());
    }
}

#[derive(Properties, PartialEq)]
pub struct I18nProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(I18nProvider)]
pub fn i18n_provider(props: &I18nProviderProps) -> Html {
    let stored = use_local_storage::<Language>(config::LANGUAGE_STORAGE_KEY.to_string());
    let language = use_state(|| detect(*stored, browser_language().as_deref()));
    let catalogs = use_memo(
        |_| match Catalogs::embedded() {
            Ok(catalogs) => catalogs,
            Err(e) => {
                error!("Translations unavailable: {}", e);
                Catalogs::default()
            }
        },
        (),
    );

    {
        use_effect_with_deps(
            move |language| {
                apply_to_document(*language);
                || ()
            },
            *language,
        );
    }

    let set_language = {
        let language = language.clone();
        let stored = stored.clone();
        Callback::from(move |choice: Language| {
            info!("Switching language to {}", choice.code());
            stored.set(choice);
            language.set(choice);
        })
    };

    let context = I18n {
        language: *language,
        set_language,
        catalogs,
    };

    html! {
        <ContextProvider<I18n> context={context}>
            { for props.children.iter() }
        </ContextProvider<I18n>>
    }
}

/// Translator for one namespace of the current language.
#[hook]
pub fn use_translation(namespace: &'static str) -> Translator {
    match use_context::<I18n>() {
        Some(i18n) => i18n.translator(namespace),
        None => {
            error!("use_translation({}) outside I18nProvider", namespace);
            Translator::new(Language::default(), namespace, Rc::new(Catalogs::default()))
        }
    }
}
