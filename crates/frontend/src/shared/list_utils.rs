//! Shared helpers for list screens: sorting, search input and local paging.

use contracts::shared::pagination::{paginate, Page};
use gloo_timers::callback::Timeout;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Rows that can be ordered by a named column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Sort indicator for a column header.
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Click handler toggling direction on the same column, or switching column.
pub fn create_sort_toggle(
    field: &'static str,
    sort_field: RwSignal<String>,
    sort_ascending: RwSignal<bool>,
) -> impl Fn(MouseEvent) + 'static {
    move |_| {
        if sort_field.get_untracked() == field {
            sort_ascending.update(|v| *v = !*v);
        } else {
            sort_field.set(field.to_string());
            sort_ascending.set(true);
        }
    }
}

/// Page state of a locally paginated list.
#[derive(Clone, Copy)]
pub struct ListPager {
    pub page: RwSignal<usize>,
    pub page_size: RwSignal<usize>,
}

impl ListPager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: RwSignal::new(0),
            page_size: RwSignal::new(page_size),
        }
    }

    pub fn slice<T: Clone>(&self, items: &[T]) -> Page<T> {
        paginate(items, self.page.get(), self.page_size.get())
    }

    pub fn on_page_change(&self) -> Callback<usize> {
        let page = self.page;
        Callback::new(move |p| page.set(p))
    }

    pub fn on_page_size_change(&self) -> Callback<usize> {
        let (page, page_size) = (self.page, self.page_size);
        Callback::new(move |size| {
            page_size.set(size);
            page.set(0);
        })
    }

    /// Back to the first page, e.g. after the filter changed.
    pub fn reset(&self) {
        self.page.set(0);
    }
}

/// Search box that reports its value after the user stops typing.
#[component]
pub fn SearchInput(
    /// Called with the debounced value
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
    /// Debounce delay in milliseconds
    #[prop(optional)]
    delay_ms: Option<u32>,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };
    let delay_ms = delay_ms.unwrap_or(300);

    let (input_value, set_input_value) = signal(String::new());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        // Dropping the previous timeout cancels it.
        pending.set_value(Some(Timeout::new(delay_ms, move || {
            on_change.run(new_value);
        })));
    };

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="form__input"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        amount: f64,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "amount" => self
                    .amount
                    .partial_cmp(&other.amount)
                    .unwrap_or(Ordering::Equal),
                _ => self.name.cmp(other.name),
            }
        }
    }

    #[test]
    fn test_sort_list_both_directions() {
        let mut rows = vec![
            Row { name: "b", amount: 2.0 },
            Row { name: "a", amount: 3.0 },
            Row { name: "c", amount: 1.0 },
        ];
        sort_list(&mut rows, "name", true);
        assert_eq!(rows[0].name, "a");
        sort_list(&mut rows, "amount", false);
        assert_eq!(rows[0].amount, 3.0);
        assert_eq!(rows[2].name, "c");
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "amount", true), " ⇅");
    }
}
