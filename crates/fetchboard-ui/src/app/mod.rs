//! App shell: store wiring, the poll loop driver, and user actions.
//!
//! # Design
//! - The poll loop re-arms only after the in-flight request settles, so there
//!   is at most one outstanding poll no matter how slow the network is.
//! - Every failure is swallowed here: logged, pushed onto the error channel,
//!   and never thrown into the event loop. The loop itself never stops.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo_timers::callback::Timeout;
use yew::platform::spawn_local;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

use crate::app::api::ApiCtx;
use crate::app::preferences::{BrowserSession, api_base_url};
use crate::components::auth::AuthPanel;
use crate::components::notice::ErrorNotice;
use crate::components::submit::SubmitBar;
use crate::core::poll::{PollOutcome, Poller};
use crate::core::session::SessionStore;
use crate::core::store::AppStore;
use crate::core::submit::{LOGIN_FIRST, SubmitPlan, plan_submission};
use crate::features::downloads::state::{
    DownloadRow, clear_rows, select_visible_rows, upsert_rows,
};
use crate::features::downloads::view::DownloadsTable;
use crate::services::api::ApiClient;

mod api;
mod preferences;

/// Everything one poll tick needs, cheap to clone into timers and futures.
#[derive(Clone)]
struct PollCtx {
    dispatch: Dispatch<AppStore>,
    client: Rc<ApiClient>,
    poller: Rc<RefCell<Poller>>,
    timer: Rc<RefCell<Option<Timeout>>>,
}

/// Arm the next tick after the fixed delay.
fn schedule_tick(ctx: &PollCtx) {
    let delay = ctx.poller.borrow().delay_ms();
    let next = ctx.clone();
    let handle = Timeout::new(delay, move || run_tick(&next));
    *ctx.timer.borrow_mut() = Some(handle);
}

/// Run one tick: gate on the token, fetch, settle, merge, re-arm.
fn run_tick(ctx: &PollCtx) {
    let token = ctx.dispatch.get().session.token.clone();
    if !ctx.poller.borrow_mut().begin(token.as_deref()) {
        schedule_tick(ctx);
        return;
    }
    let ctx = ctx.clone();
    let token = token.unwrap_or_default();
    spawn_local(async move {
        let result = ctx.client.fetch_downloads(&token).await;
        let outcome = ctx.poller.borrow_mut().complete(result);
        match outcome {
            PollOutcome::Unchanged => {}
            PollOutcome::Rows(rows) => {
                ctx.dispatch.reduce_mut(|store| {
                    let rows = rows.into_iter().map(DownloadRow::from).collect();
                    upsert_rows(&mut store.downloads, rows);
                    store.system.last_error = None;
                });
            }
            PollOutcome::Failed(err) => {
                console::error!("poll failed", err.to_string());
                ctx.dispatch.reduce_mut(|store| {
                    store.system.last_error = Some(err.to_string());
                });
            }
        }
        schedule_tick(&ctx);
    });
}

/// Root component: session restore, poll loop, and the page layout.
#[function_component(FetchboardApp)]
pub(crate) fn fetchboard_app() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());
    let poller = use_mut_ref(Poller::new);
    let poll_timer = use_mut_ref(|| None as Option<Timeout>);

    let rows = use_selector(|store: &AppStore| select_visible_rows(&store.downloads));
    let logged_in = use_selector(|store: &AppStore| store.session.logged_in());
    let login_busy = use_selector(|store: &AppStore| store.session.login_busy);
    let last_error = use_selector(|store: &AppStore| store.system.last_error.clone());
    let submit_feedback = use_selector(|store: &AppStore| store.system.submit_feedback.clone());

    // Restore the persisted session and start the loop. Starting before login
    // is safe: the poller idles until a token shows up.
    {
        let dispatch = dispatch.clone();
        let api_ctx = (*api_ctx).clone();
        let poller = poller.clone();
        let poll_timer = poll_timer.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(token) = BrowserSession.token() {
                    dispatch.reduce_mut(|store| store.session.token = Some(token));
                }
                let ctx = PollCtx {
                    dispatch,
                    client: api_ctx.client,
                    poller,
                    timer: poll_timer.clone(),
                };
                run_tick(&ctx);
                move || {
                    poll_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let on_login = {
        let dispatch = dispatch.clone();
        let api_ctx = (*api_ctx).clone();
        Callback::from(move |(username, password): (String, String)| {
            dispatch.reduce_mut(|store| store.session.login_busy = true);
            let dispatch = dispatch.clone();
            let client = api_ctx.client.clone();
            spawn_local(async move {
                match client.login(&username, &password).await {
                    Ok(token) => {
                        let mut session = BrowserSession;
                        session.set_token(&token);
                        dispatch.reduce_mut(|store| {
                            store.session.token = Some(token);
                            store.system.last_error = None;
                        });
                    }
                    Err(err) => {
                        console::error!("login failed", err.to_string());
                        dispatch.reduce_mut(|store| {
                            store.system.last_error = Some(err.to_string());
                        });
                    }
                }
                dispatch.reduce_mut(|store| store.session.login_busy = false);
            });
        })
    };

    // Logout is synchronous: token and table are gone before the next tick
    // can observe either.
    let on_logout = {
        let dispatch = dispatch.clone();
        let poller = poller.clone();
        Callback::from(move |()| {
            let mut session = BrowserSession;
            session.clear();
            poller.borrow_mut().reset();
            dispatch.reduce_mut(|store| {
                store.session.token = None;
                clear_rows(&mut store.downloads);
                store.system.submit_feedback = None;
                store.system.last_error = None;
            });
        })
    };

    let on_submit = {
        let dispatch = dispatch.clone();
        let api_ctx = (*api_ctx).clone();
        Callback::from(move |raw_url: String| {
            let token = dispatch.get().session.token.clone();
            match plan_submission(token.as_deref(), &raw_url) {
                SubmitPlan::RequireLogin => {
                    dispatch.reduce_mut(|store| {
                        store.system.submit_feedback = Some(LOGIN_FIRST.to_string());
                    });
                }
                SubmitPlan::Send(request) => {
                    let dispatch = dispatch.clone();
                    let client = api_ctx.client.clone();
                    let token = token.unwrap_or_default();
                    spawn_local(async move {
                        let feedback = match client.submit_download(&token, &request).await {
                            Ok(text) => text,
                            Err(detail) => {
                                console::error!("download submission failed", detail.clone());
                                format!("Request failed: {detail}")
                            }
                        };
                        dispatch.reduce_mut(|store| {
                            store.system.submit_feedback = Some(feedback);
                        });
                    });
                }
            }
        })
    };

    let on_edit = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            dispatch.reduce_mut(|store| store.system.submit_feedback = None);
        })
    };
    let on_dismiss = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            dispatch.reduce_mut(|store| store.system.last_error = None);
        })
    };

    html! {
        <div class="shell">
            <header class="topbar">
                <h1>{"Fetchboard"}</h1>
                <AuthPanel
                    logged_in={*logged_in}
                    busy={*login_busy}
                    on_login={on_login}
                    on_logout={on_logout}
                />
            </header>
            <ErrorNotice error={(*last_error).clone()} on_dismiss={on_dismiss} />
            <SubmitBar
                feedback={(*submit_feedback).clone()}
                on_submit={on_submit}
                on_edit={on_edit}
            />
            <DownloadsTable rows={(*rows).clone()} />
        </div>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<FetchboardApp>::with_root(root).render();
    } else {
        yew::Renderer::<FetchboardApp>::new().render();
    }
}
