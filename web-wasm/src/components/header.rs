//! ヘッダーコンポーネント

use leptos::prelude::*;
use monitor_selector_common::messages::APP_TITLE;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>{APP_TITLE}</h1>
        </header>
    }
}
