pub mod left;
pub mod top_header;

use leptos::prelude::*;
use left::Navbar;
use top_header::TopHeader;

use crate::app::AppHandle;

/// Main application shell.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |  Navbar  |      Content      |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(app: AppHandle, children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader app=app />
            <div class="app-body">
                <div data-zone="left" class="left">
                    <Navbar app=app />
                </div>
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
