use crate::shared::icons::icon;
use leptos::prelude::*;

const PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];

/// "11–20 of 45"; "0 of 0" for an empty list.
fn range_label(page: usize, page_size: usize, total_count: usize) -> String {
    if total_count == 0 {
        return "0 of 0".to_string();
    }
    let first = (page * page_size + 1).min(total_count);
    let last = ((page + 1) * page_size).min(total_count);
    format!("{}–{} of {}", first, last, total_count)
}

/// Pager under a list table: first/prev/next/last and a page size select.
#[component]
pub fn PaginationControls(
    /// 0-indexed
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)]
    total_pages: Signal<usize>,
    #[prop(into)]
    total_count: Signal<usize>,
    #[prop(into)]
    page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let at_start = move || current_page.get() == 0;
    let at_end = move || current_page.get() + 1 >= total_pages.get();
    let go = move |target: usize| {
        let last = total_pages.get_untracked().saturating_sub(1);
        on_page_change.run(target.min(last));
    };

    let nav = move |glyph: &'static str, title: &'static str, disabled: fn(bool, bool) -> bool, target: fn(usize, usize) -> usize| {
        view! {
            <button
                class="pagination-btn"
                title=title
                disabled=move || disabled(at_start(), at_end())
                on:click=move |_| go(target(current_page.get_untracked(), total_pages.get_untracked()))
            >
                {icon(glyph)}
            </button>
        }
    };

    view! {
        <div class="pagination-controls">
            {nav("chevrons-left", "First page", |start, _| start, |_, _| 0)}
            {nav("chevron-left", "Previous page", |start, _| start, |page, _| page.saturating_sub(1))}
            <span class="pagination-info">
                {move || range_label(current_page.get(), page_size.get(), total_count.get())}
            </span>
            {nav("chevron-right", "Next page", |_, end| end, |page, _| page + 1)}
            {nav("chevrons-right", "Last page", |_, end| end, |_, total| total.saturating_sub(1))}
            <select
                class="page-size-select"
                prop:value=move || page_size.get().to_string()
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_page_size_change.run(size);
                    }
                }
            >
                {PAGE_SIZES
                    .iter()
                    .map(|&size| view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {format!("{} / page", size)}
                        </option>
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_label_clamps_last_page() {
        assert_eq!(range_label(0, 10, 0), "0 of 0");
        assert_eq!(range_label(0, 10, 45), "1–10 of 45");
        assert_eq!(range_label(4, 10, 45), "41–45 of 45");
    }
}
