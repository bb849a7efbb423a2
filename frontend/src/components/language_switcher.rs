use log::error;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::i18n::language::Language;
use crate::i18n::provider::I18n;

#[function_component(LanguageSwitcher)]
pub fn language_switcher() -> Html {
    let i18n = use_context::<I18n>();
    let Some(i18n) = i18n else {
        error!("LanguageSwitcher rendered outside I18nProvider");
        return html! {};
    };

    let onchange = {
        let set_language = i18n.set_language.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(language) = Language::from_code(&select.value()) {
                set_language.emit(language);
            }
        })
    };

    html! {
        <div class="language-switcher">
            <select aria-label="Language" {onchange}>
                { for Language::ALL.iter().map(|language| html! {
                    <option
                        value={language.code()}
                        selected={*language == i18n.language}
                    >
                        { language.label() }
                    </option>
                })}
            </select>
            <style>
                {r#"
                    .language-switcher { display: inline-block; }
                    .language-switcher select {
                        background: rgba(15, 23, 42, 0.8);
                        color: #fff;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 8px;
                        padding: 0.4rem 0.8rem;
                        font-weight: 600;
                        cursor: pointer;
                        backdrop-filter: blur(8px);
                    }
                "#}
            </style>
        </div>
    }
}
