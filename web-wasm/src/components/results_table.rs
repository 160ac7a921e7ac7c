//! 結果表示コンポーネント

use leptos::prelude::*;
use monitor_selector_common::{ResultTable, View};

#[component]
pub fn ResultsPanel<FB>(current: Signal<View>, on_back: FB) -> impl IntoView
where
    FB: Fn(()) + 'static + Clone,
{
    view! {
        <div class="results-panel">
            <h2 class="results-heading">{move || current.get().heading()}</h2>

            {move || match current.get() {
                View::Table(table) => view! { <CandidateTable table=table /> }.into_any(),
                View::NoMatches { message } => view! { <p class="text-muted">{message}</p> }.into_any(),
                View::Form { .. } => ().into_any(),
            }}

            <button
                class="btn btn-secondary"
                on:click={
                    let on_back = on_back.clone();
                    move |_| on_back(())
                }
            >
                {move || current.get().back_label()}
            </button>
        </div>
    }
}

#[component]
fn CandidateTable(table: ResultTable) -> impl IntoView {
    let ResultTable { headers, rows } = table;

    view! {
        <table class="candidate-table">
            <thead>
                <tr>
                    {headers.into_iter().map(|h| view! { <th>{h}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|[name, score, semester, grade]| {
                        view! {
                            <tr>
                                <td>{name}</td>
                                <td><strong>{score}</strong></td>
                                <td>{semester}</td>
                                <td>{grade}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
