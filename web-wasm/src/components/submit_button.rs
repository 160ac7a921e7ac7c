//! 送信ボタンコンポーネント

use leptos::prelude::*;

#[component]
pub fn SubmitButton(
    label: Signal<&'static str>,
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="btn btn-primary"
            class:loading=move || disabled.get()
            disabled=move || disabled.get()
        >
            {move || label.get()}
        </button>
    }
}
