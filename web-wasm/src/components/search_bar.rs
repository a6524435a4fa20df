//! 検索・種別フィルタ

use leptos::prelude::*;

#[component]
pub fn SearchBar<F>(
    query: RwSignal<String>,
    kind: RwSignal<String>,
    kinds: Signal<Vec<String>>,
    on_change: F,
) -> impl IntoView
where
    F: Fn() + 'static + Clone + Send,
{
    view! {
        <div class="search-bar">
            <input
                type="search"
                id="search-query"
                placeholder="検索..."
                prop:value=move || query.get()
                on:input={
                    let on_change = on_change.clone();
                    move |ev| {
                        query.set(event_target_value(&ev));
                        on_change();
                    }
                }
            />
            <select
                id="filter-type"
                on:change={
                    let on_change = on_change.clone();
                    move |ev| {
                        kind.set(event_target_value(&ev));
                        on_change();
                    }
                }
            >
                <option value="" selected=move || kind.get().is_empty()>"すべて"</option>
                <For
                    each=move || kinds.get()
                    key=|k| k.clone()
                    children=move |k| {
                        let value = k.clone();
                        view! {
                            <option value=k.clone() selected=move || kind.get() == value>{k.clone()}</option>
                        }
                    }
                />
            </select>
        </div>
    }
}
