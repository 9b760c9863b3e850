use yew::prelude::*;

/// Shown for unknown routes and for badge ids missing from the catalog.
#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub message: Option<AttrValue>,
    pub on_go_home: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let message = props
        .message
        .clone()
        .unwrap_or_else(|| AttrValue::from("That page does not exist."));

    html! {
        <section class="panel not-found" aria-live="assertive">
            <h1>{ "Not found" }</h1>
            <p>{ message }</p>
            <button type="button" onclick={go_home}>{ "Back to Gallery" }</button>
        </section>
    }
}
