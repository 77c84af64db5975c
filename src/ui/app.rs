/// Single-page UI for shortening links

use yew::prelude::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlInputElement;
use patternfly_yew::prelude::*;
use crate::history::{History, HistoryEntry};
use crate::session::{Phase, Session, SessionAction};
use crate::shorten::shorten;
use crate::ui::components::QrCode;

#[function_component(App)]
pub fn app() -> Html {
    let session = use_reducer(Session::new);
    // Issued once per submission; completions carrying an older number are
    // dropped by the reducer.
    let submit_seq = use_mut_ref(|| 0u64);
    let dark_mode = use_state(|| false);
    let show_qr = use_state(|| false);
    let copied_message = use_state(|| None::<String>);
    let share_error = use_state(|| None::<String>);

    // Shorten handler
    let on_shorten = {
        let session = session.clone();
        let submit_seq = submit_seq.clone();
        let copied_message = copied_message.clone();
        let share_error = share_error.clone();

        Callback::from(move |long_url: String| {
            copied_message.set(None);
            share_error.set(None);

            let seq = {
                let mut counter = submit_seq.borrow_mut();
                *counter += 1;
                *counter
            };
            session.dispatch(SessionAction::Submitted { seq });

            let session = session.clone();
            spawn_local(async move {
                let result = shorten(&long_url).await;
                session.dispatch(SessionAction::Completed {
                    seq,
                    long_url,
                    result,
                });
            });
        })
    };

    // Delete-from-history handler
    let on_delete = {
        let session = session.clone();
        Callback::from(move |id: String| {
            session.dispatch(SessionAction::Deleted { id });
        })
    };

    // Copy handler
    let on_copy = {
        let session = session.clone();
        let copied_message = copied_message.clone();

        Callback::from(move |_| {
            let Some(short_url) = session.current.clone() else {
                return;
            };
            let copied_message = copied_message.clone();
            spawn_local(async move {
                match copy_to_clipboard(&short_url).await {
                    Ok(()) => {
                        copied_message.set(Some("URL copied to clipboard!".to_string()));
                    }
                    Err(e) => {
                        log::warn!("Clipboard write failed: {}", e);
                        copied_message.set(Some("Failed to copy URL.".to_string()));
                    }
                }
            });
        })
    };

    // Share handler
    let on_share = {
        let session = session.clone();
        let share_error = share_error.clone();

        Callback::from(move |_| {
            let Some(short_url) = session.current.clone() else {
                return;
            };
            let share_error = share_error.clone();
            spawn_local(async move {
                if let Err(msg) = share_url("Shortened URL", &short_url).await {
                    share_error.set(Some(msg));
                }
            });
        })
    };

    // Visit handler
    let on_visit = {
        let session = session.clone();
        Callback::from(move |_| {
            if let Some(short_url) = session.current.clone() {
                if let Err(e) = open_in_new_tab(&short_url) {
                    log::warn!("Failed to open short URL: {}", e);
                }
            }
        })
    };

    // QR visibility handler
    let on_toggle_qr = {
        let show_qr = show_qr.clone();
        Callback::from(move |_| {
            show_qr.set(!*show_qr);
        })
    };

    // Dark mode handler
    let on_toggle_dark = {
        let dark_mode = dark_mode.clone();
        Callback::from(move |_| {
            let enabled = !*dark_mode;
            set_dark_class(enabled);
            dark_mode.set(enabled);
        })
    };

    // The result card hides while a newer request is in flight
    let current_result = if session.phase == Phase::Submitting {
        None
    } else {
        session.current.clone()
    };
    let qr_value = if *show_qr { current_result.clone() } else { None };

    html! {
        <div class="page">
            <Header dark_mode={*dark_mode} on_toggle={on_toggle_dark} />

            <main class="content">
                <ShortenerForm on_shorten={on_shorten} />

                // Status display
                {match &session.phase {
                    Phase::Submitting => html! {
                        <div class="status-card">
                            <Spinner />
                            <p class="status-text">{"Shortening your URL..."}</p>
                        </div>
                    },
                    Phase::Failure(msg) => html! {
                        <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                            {msg.clone()}
                        </Alert>
                    },
                    _ => html! {},
                }}

                // Current short URL with its actions
                if let Some(short_url) = current_result.clone() {
                    <div class="result-card">
                        <h2 class="result-heading">{"Shortened URL:"}</h2>
                        <p class="result-url">{short_url}</p>
                        <div class="result-actions">
                            <Button onclick={on_copy} variant={ButtonVariant::Secondary}>
                                {"📋 Copy"}
                            </Button>
                            <Button onclick={on_share} variant={ButtonVariant::Secondary}>
                                {"📤 Share"}
                            </Button>
                            <Button onclick={on_visit} variant={ButtonVariant::Secondary}>
                                {"🔗 Visit"}
                            </Button>
                            <Button onclick={on_toggle_qr} variant={ButtonVariant::Secondary}>
                                {if *show_qr { "📱 Hide QR Code" } else { "📱 Show QR Code" }}
                            </Button>
                        </div>
                    </div>
                }

                if let Some(msg) = (*copied_message).clone() {
                    <p class="notice notice-success">{msg}</p>
                }
                if let Some(msg) = (*share_error).clone() {
                    <p class="notice notice-error">{msg}</p>
                }

                if let Some(value) = qr_value {
                    <QrCode value={value} />
                }

                if !session.history.is_empty() {
                    <HistoryPanel history={session.history.clone()} on_delete={on_delete} />
                }
            </main>
        </div>
    }
}

// Header with the dark mode toggle
#[derive(Properties, PartialEq)]
struct HeaderProps {
    dark_mode: bool,
    on_toggle: Callback<()>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <h1 class="header-title">{"URL Shortener"}</h1>
            <Button onclick={props.on_toggle.reform(|_| ())} variant={ButtonVariant::Secondary}>
                {if props.dark_mode { "☀️ Light" } else { "🌙 Dark" }}
            </Button>
        </header>
    }
}

// Long URL input form
#[derive(Properties, PartialEq)]
struct ShortenerFormProps {
    on_shorten: Callback<String>,
}

#[function_component(ShortenerForm)]
fn shortener_form(props: &ShortenerFormProps) -> Html {
    let long_url = use_state(String::new);

    let on_input = {
        let long_url = long_url.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                long_url.set(input.value());
            }
        })
    };

    let on_submit = {
        let long_url = long_url.clone();
        let on_shorten = props.on_shorten.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let value = long_url.trim().to_string();
            if !value.is_empty() {
                on_shorten.emit(value);
            }
        })
    };

    html! {
        <form class="shortener-form" onsubmit={on_submit}>
            <h2 class="form-title">{"Shorten Your URL"}</h2>
            <input
                type="url"
                placeholder="Enter your long URL"
                class="url-input"
                value={(*long_url).clone()}
                oninput={on_input}
            />
            <button
                type="submit"
                class="submit-button"
                disabled={long_url.trim().is_empty()}
            >
                {"Shorten URL"}
            </button>
            <p class="form-hint">{"Get your URL shortened in just one click!"}</p>
        </form>
    }
}

// Searchable history list
#[derive(Properties, PartialEq)]
struct HistoryPanelProps {
    history: History,
    on_delete: Callback<String>,
}

#[function_component(HistoryPanel)]
fn history_panel(props: &HistoryPanelProps) -> Html {
    let search_query = use_state(String::new);

    let on_search_input = {
        let search_query = search_query.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                search_query.set(input.value());
            }
        })
    };

    let filtered: Vec<HistoryEntry> = props.history.search(&search_query).cloned().collect();

    html! {
        <div class="history-panel">
            <input
                type="text"
                placeholder="Search history"
                class="search-input"
                value={(*search_query).clone()}
                oninput={on_search_input}
            />

            if filtered.is_empty() {
                <p class="empty-state">{"No links match your search."}</p>
            } else {
                <ul class="history-list">
                    {for filtered.iter().map(|entry| html! {
                        <li key={entry.id.clone()} class="history-item">
                            <div class="history-urls">
                                <p class="history-long-url">{&entry.long_url}</p>
                                <a
                                    href={entry.short_url.clone()}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="history-short-url"
                                >
                                    {&entry.short_url}
                                </a>
                            </div>
                            <Button
                                onclick={props.on_delete.reform({
                                    let id = entry.id.clone();
                                    move |_| id.clone()
                                })}
                                variant={ButtonVariant::Danger}
                                size={ButtonSize::Small}
                            >
                                {"🗑️"}
                            </Button>
                        </li>
                    })}
                </ul>
            }

            <div class="history-footer">
                {format!("{} links shortened this session", props.history.len())}
            </div>
        </div>
    }
}

// Helper functions

async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let clipboard = window.navigator().clipboard();

    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| format!("clipboard write was rejected: {:?}", e))
}

async fn share_url(title: &str, url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let navigator = window.navigator();

    let has_share =
        js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("share")).unwrap_or(false);
    if !has_share {
        return Err("Share functionality not supported on this device.".to_string());
    }

    let data = web_sys::ShareData::new();
    data.set_title(title);
    data.set_url(url);

    JsFuture::from(navigator.share_with_data(&data))
        .await
        .map(|_| ())
        .map_err(|_| "Failed to share URL.".to_string())
}

fn open_in_new_tab(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    window
        .open_with_url_and_target(url, "_blank")
        .map(|_| ())
        .map_err(|e| format!("window.open was rejected: {:?}", e))
}

fn set_dark_class(enabled: bool) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    let Some(root) = root else {
        return;
    };

    let class_list = root.class_list();
    let result = if enabled {
        class_list.add_1("dark")
    } else {
        class_list.remove_1("dark")
    };
    if let Err(e) = result {
        log::warn!("Failed to toggle dark class: {:?}", e);
    }
}
