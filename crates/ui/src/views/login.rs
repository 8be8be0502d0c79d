use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let auth = ctx.auth();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<ViewError>);

    let on_submit = {
        let auth = auth.clone();
        use_callback(move |()| {
            if submitting() {
                return;
            }
            let auth = auth.clone();
            let nav = navigator;
            let mut submitting = submitting;
            let mut error = error;
            spawn(async move {
                submitting.set(true);
                let result = auth.login(&email(), &password()).await;
                submitting.set(false);
                match result {
                    Ok(()) => {
                        error.set(None);
                        let _ = nav.replace(Route::Home {});
                    }
                    Err(_) => error.set(Some(ViewError::Unknown)),
                }
            });
        })
    };

    rsx! {
        div { class: "page login-page",
            h2 { class: "view-title", "Sign in" }
            if let Some(err) = error() {
                p { class: "form-error", "{err.message()}" }
            }
            form {
                onsubmit: move |evt| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                label { class: "form-label", "Email"
                    input {
                        class: "form-input",
                        r#type: "email",
                        value: "{email()}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                label { class: "form-label", "Password"
                    input {
                        class: "form-input",
                        r#type: "password",
                        value: "{password()}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}
