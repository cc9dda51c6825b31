use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::app::AppHandle;
use crate::shared::components::ui::Input;
use crate::shared::rest::ApiError;

fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Unauthorized => "Invalid username or password".to_string(),
        other => format!("Login failed: {}", other),
    }
}

#[component]
pub fn LoginPage(app: AppHandle) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get_untracked();
        let password_val = password.get_untracked();
        if username_val.trim().is_empty() || password_val.is_empty() {
            error_message.set(Some("Enter username and password".to_string()));
            return;
        }

        is_loading.set(true);
        error_message.set(None);

        let auth = app.root().auth();
        spawn_local(async move {
            // success fires the auth store trigger and unmounts this page
            if let Err(e) = auth.login(username_val, password_val).await {
                let _ = error_message.try_set(Some(login_error_message(&e)));
            }
            let _ = is_loading.try_set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Wallet"</h1>
                <h2>"Sign in"</h2>

                {move || error_message.get().map(|message| view! {
                    <MessageBar intent=MessageBarIntent::Error>{message}</MessageBar>
                })}

                <form on:submit=on_submit>
                    <Input
                        id="username"
                        label="Username".to_string()
                        value=username
                        on_input=Callback::new(move |v| username.set(v))
                        autocomplete="username".to_string()
                        disabled=Signal::derive(move || Some(is_loading.get()))
                    />
                    <Input
                        id="password"
                        label="Password".to_string()
                        input_type="password".to_string()
                        value=password
                        on_input=Callback::new(move |v| password.set(v))
                        autocomplete="current-password".to_string()
                        disabled=Signal::derive(move || Some(is_loading.get()))
                    />

                    <Button
                        appearance=ButtonAppearance::Primary
                        button_type=ButtonType::Submit
                        loading=is_loading
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </Button>
                </form>
            </div>
        </div>
    }
}
