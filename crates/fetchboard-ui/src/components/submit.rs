//! URL submission bar and its feedback area.

use yew::prelude::*;

/// Properties for [`SubmitBar`].
#[derive(Properties, PartialEq)]
pub(crate) struct SubmitBarProps {
    /// Feedback text shown under the bar; `None` hides the area.
    pub feedback: Option<String>,
    /// Emits the raw URL input on submit.
    pub on_submit: Callback<String>,
    /// Fired on every input edit; the shell hides stale feedback.
    pub on_edit: Callback<()>,
}

/// URL input plus download trigger. The feedback area renders whatever the
/// service answered, verbatim.
#[function_component(SubmitBar)]
pub(crate) fn submit_bar(props: &SubmitBarProps) -> Html {
    let url = use_state(String::new);

    let on_input = {
        let url = url.clone();
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                url.set(input.value());
            }
            on_edit.emit(());
        })
    };
    let submit = {
        let url = url.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |_| on_submit.emit((*url).clone()))
    };

    html! {
        <div class="submit-bar">
            <input
                type="text"
                placeholder="URL to download"
                value={(*url).clone()}
                oninput={on_input}
            />
            <button class="solid" onclick={submit}>{"Download"}</button>
            {if let Some(feedback) = &props.feedback {
                html! { <p class="submit-feedback">{feedback.clone()}</p> }
            } else {
                html! {}
            }}
        </div>
    }
}
