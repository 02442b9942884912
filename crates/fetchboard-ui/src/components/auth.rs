//! Login and logout controls.

use yew::prelude::*;

/// Properties for [`AuthPanel`].
#[derive(Properties, PartialEq)]
pub(crate) struct AuthPanelProps {
    /// Whether the session currently holds a token.
    pub logged_in: bool,
    /// A login request is in flight.
    pub busy: bool,
    /// Emits the entered `(username, password)` pair.
    pub on_login: Callback<(String, String)>,
    /// Clears the session and the table.
    pub on_logout: Callback<()>,
}

/// Credentials form while logged out, a logout button while logged in.
#[function_component(AuthPanel)]
pub(crate) fn auth_panel(props: &AuthPanelProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);

    if props.logged_in {
        let on_logout = props.on_logout.clone();
        return html! {
            <div class="auth-panel">
                <button class="ghost" onclick={Callback::from(move |_| on_logout.emit(()))}>
                    {"Logout"}
                </button>
            </div>
        };
    }

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                username.set(input.value());
            }
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };
    let submit = {
        let username = username.clone();
        let password = password.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |_| {
            on_login.emit(((*username).clone(), (*password).clone()));
        })
    };

    html! {
        <div class="auth-panel">
            <input
                type="text"
                placeholder="Username"
                value={(*username).clone()}
                oninput={on_username}
            />
            <input
                type="password"
                placeholder="Password"
                value={(*password).clone()}
                oninput={on_password}
            />
            <button class="solid" disabled={props.busy} onclick={submit}>
                {"Login"}
            </button>
        </div>
    }
}
