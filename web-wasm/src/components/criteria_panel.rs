//! 選考条件パネルコンポーネント

use leptos::prelude::*;
use monitor_selector_common::{format_number, Field, FilterCriteria};

#[component]
pub fn CriteriaPanel<F>(
    criteria: Signal<FilterCriteria>,
    invalid: Signal<Vec<Field>>,
    on_field_input: F,
) -> impl IntoView
where
    F: Fn(Field, String) + 'static + Clone + Send + Sync,
{
    // 数値欄は入力途中の値（"4." など）を上書きしないよう初期値だけ渡す
    let initial = criteria.get_untracked();

    view! {
        <div class="criteria-panel">
            <div class="form-group">
                <label for="subject">{Field::Subject.label()}</label>
                <input
                    type="text"
                    id="subject"
                    placeholder="Ej: Cálculo I"
                    prop:value=move || criteria.get().subject
                    on:input={
                        let on_field_input = on_field_input.clone();
                        move |ev| on_field_input(Field::Subject, event_target_value(&ev))
                    }
                />
            </div>

            <div class="form-group">
                <label for="min-semester">{Field::MinSemester.label()}</label>
                <input
                    type="number"
                    id="min-semester"
                    min="1"
                    max="10"
                    value=initial.min_semester.to_string()
                    class:invalid=move || invalid.get().contains(&Field::MinSemester)
                    on:input={
                        let on_field_input = on_field_input.clone();
                        move |ev| on_field_input(Field::MinSemester, event_target_value(&ev))
                    }
                />
            </div>

            <div class="form-group">
                <label for="career">{Field::Career.label()}</label>
                <input
                    type="text"
                    id="career"
                    placeholder="Ej: Ingeniería de Sistemas"
                    prop:value=move || criteria.get().career
                    on:input={
                        let on_field_input = on_field_input.clone();
                        move |ev| on_field_input(Field::Career, event_target_value(&ev))
                    }
                />
            </div>

            <div class="form-group">
                <label for="min-grade">{Field::MinGrade.label()}</label>
                <input
                    type="number"
                    id="min-grade"
                    step="0.1"
                    min="0"
                    max="5"
                    value=format_number(initial.min_grade)
                    class:invalid=move || invalid.get().contains(&Field::MinGrade)
                    on:input={
                        let on_field_input = on_field_input.clone();
                        move |ev| on_field_input(Field::MinGrade, event_target_value(&ev))
                    }
                />
            </div>
        </div>
    }
}
