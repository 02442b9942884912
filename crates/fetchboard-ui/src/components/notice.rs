//! Dismissible notice surfacing errors from the error channel.

use yew::prelude::*;

/// Properties for [`ErrorNotice`].
#[derive(Properties, PartialEq)]
pub(crate) struct ErrorNoticeProps {
    /// Error text; `None` renders nothing.
    pub error: Option<String>,
    /// Clears the notice.
    pub on_dismiss: Callback<()>,
}

/// Last swallowed error as a dismissible banner. Polling and login failures
/// land here instead of disappearing into the console.
#[function_component(ErrorNotice)]
pub(crate) fn error_notice(props: &ErrorNoticeProps) -> Html {
    let Some(error) = &props.error else {
        return html! {};
    };
    let on_dismiss = props.on_dismiss.clone();
    html! {
        <div class="error-notice" role="alert">
            <span class="error-text">{error.clone()}</span>
            <button class="ghost" onclick={Callback::from(move |_| on_dismiss.emit(()))}>
                {"Dismiss"}
            </button>
        </div>
    }
}
