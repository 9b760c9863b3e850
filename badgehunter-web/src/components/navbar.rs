use badgehunter_core::Theme;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::routes::Tab;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub active: Option<Tab>,
    pub theme: Theme,
    #[prop_or_default]
    pub search: AttrValue,
    pub on_tab: Callback<Tab>,
    pub on_search: Callback<String>,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(p: &Props) -> Html {
    let go_home = {
        let cb = p.on_tab.clone();
        Callback::from(move |_| cb.emit(Tab::Gallery))
    };
    let on_input = {
        let cb = p.on_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };
    let toggle_theme = {
        let cb = p.on_toggle_theme.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let tabs = Tab::ALL.into_iter().map(|tab| {
        let selected = p.active == Some(tab);
        let class = if selected {
            "nav-tab bg-white dark:bg-gray-700 text-gray-900 dark:text-white shadow-sm"
        } else {
            "nav-tab text-gray-500 dark:text-gray-400 hover:text-gray-900"
        };
        let onclick = {
            let cb = p.on_tab.clone();
            Callback::from(move |_| cb.emit(tab))
        };
        html! {
            <button id={tab.dom_id()} type="button" {class} {onclick}
                aria-current={selected.then_some("page")}>
                { tab.label() }
            </button>
        }
    });

    let (theme_label, theme_icon) = if p.theme.is_dark() {
        ("Switch to light mode", "☀️")
    } else {
        ("Switch to dark mode", "🌙")
    };

    html! {
        <nav class="navbar glass-panel" role="navigation" aria-label="Main">
            <button type="button" class="brand" onclick={go_home}>
                <span class="brand-title">{ "Badge Hunter" }</span>
                <span class="brand-subtitle">{ "GitHub Edition" }</span>
            </button>
            <div class="nav-tabs" role="tablist">{ for tabs }</div>
            <div class="nav-tools">
                <label for="badge-search" class="sr-only">{ "Search badges" }</label>
                <input id="badge-search" type="search" placeholder="Search..."
                    value={p.search.clone()} oninput={on_input} />
                <button id="theme-toggle" type="button" title={theme_label}
                    aria-label={theme_label} onclick={toggle_theme}>
                    { theme_icon }
                </button>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props(active: Option<Tab>, theme: Theme) -> Props {
        Props {
            active,
            theme,
            search: AttrValue::from("shark"),
            on_tab: Callback::noop(),
            on_search: Callback::noop(),
            on_toggle_theme: Callback::noop(),
        }
    }

    #[test]
    fn marks_the_active_tab() {
        let html = block_on(
            LocalServerRenderer::<Navbar>::with_props(props(Some(Tab::Checker), Theme::Light))
                .render(),
        );
        assert!(html.contains("Badge Hunter"));
        for tab in Tab::ALL {
            assert!(html.contains(tab.label()));
        }
        assert!(html.contains(r#"aria-current="page""#));
        assert!(html.contains("Switch to dark mode"));
    }

    #[test]
    fn dark_theme_offers_light_mode() {
        let html =
            block_on(LocalServerRenderer::<Navbar>::with_props(props(None, Theme::Dark)).render());
        assert!(html.contains("Switch to light mode"));
        assert!(!html.contains(r#"aria-current="page""#));
    }
}
