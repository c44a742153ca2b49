//! Address autocomplete: debounced lookup, stale requests aborted and their
//! late results dropped.

use contracts::domain::a001_seller::profile::{Address, AddressSuggestion, ADDRESS_QUERY_MIN_LEN};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::AbortController;

use crate::domain::a001_seller::api;

const LOOKUP_DELAY_MS: u32 = 400;

/// Numbers lookups so only the latest one may write results.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct LookupSeq(u32);

impl LookupSeq {
    fn advance(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    fn ticket(&self) -> u32 {
        self.0
    }

    fn is_latest(&self, ticket: u32) -> bool {
        self.0 == ticket
    }
}

#[component]
pub fn AddressLookup(on_select: Callback<Address>) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let suggestions = RwSignal::new(Vec::<AddressSuggestion>::new());
    let searching = RwSignal::new(false);
    let pending = StoredValue::new_local(None::<Timeout>);
    let in_flight = StoredValue::new_local(None::<AbortController>);
    let seq = StoredValue::new(LookupSeq::default());

    let abort_in_flight = move || {
        in_flight.update_value(|c| {
            if let Some(controller) = c.take() {
                controller.abort();
            }
        });
    };

    let run_lookup = move |text: String| {
        abort_in_flight();
        seq.update_value(LookupSeq::advance);
        let ticket = seq.with_value(LookupSeq::ticket);
        let Ok(controller) = AbortController::new() else {
            return;
        };
        let signal = controller.signal();
        in_flight.set_value(Some(controller));
        searching.set(true);
        spawn_local(async move {
            let result = api::search_address(&text, Some(&signal)).await;
            // A newer query took over; its request owns the list now.
            if signal.aborted() || !seq.try_with_value(|s| s.is_latest(ticket)).unwrap_or(false) {
                return;
            }
            match result {
                Ok(found) => suggestions.set(found),
                Err(e) => {
                    log::warn!("address lookup for '{}' failed: {}", text, e);
                    suggestions.set(Vec::new());
                }
            }
            searching.set(false);
        });
    };

    let on_input = move |text: String| {
        query.set(text.clone());
        if text.trim().chars().count() < ADDRESS_QUERY_MIN_LEN {
            pending.set_value(None);
            abort_in_flight();
            seq.update_value(LookupSeq::advance);
            suggestions.set(Vec::new());
            searching.set(false);
            return;
        }
        pending.set_value(Some(Timeout::new(LOOKUP_DELAY_MS, move || {
            run_lookup(text.trim().to_string())
        })));
    };

    let pick = move |suggestion: AddressSuggestion| {
        pending.set_value(None);
        abort_in_flight();
        seq.update_value(LookupSeq::advance);
        searching.set(false);
        on_select.run(suggestion.to_address());
        query.set(suggestion.display_name);
        suggestions.set(Vec::new());
    };

    on_cleanup(move || {
        pending.try_update_value(|t| t.take());
        in_flight.try_update_value(|c| {
            if let Some(controller) = c.take() {
                controller.abort();
            }
        });
    });

    view! {
        <div class="address-lookup">
            <label class="form__label">"Find address"</label>
            <input
                class="form__input"
                type="text"
                placeholder="Start typing a street or city"
                prop:value=move || query.get()
                on:input=move |ev| on_input(event_target_value(&ev))
            />
            <Show when=move || searching.get()>
                <span class="address-lookup__hint">"Searching..."</span>
            </Show>
            <Show when=move || !suggestions.with(Vec::is_empty)>
                <ul class="address-lookup__list">
                    {move || suggestions
                        .get()
                        .into_iter()
                        .map(|s| {
                            let label = s.display_name.clone();
                            view! {
                                <li class="address-lookup__item" on:click=move |_| pick(s.clone())>
                                    {label}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_latest_lookup_is_current() {
        let mut seq = LookupSeq::default();
        seq.advance();
        let first = seq.ticket();
        seq.advance();
        let second = seq.ticket();
        assert!(!seq.is_latest(first));
        assert!(seq.is_latest(second));

        // clearing the query retires the running lookup too
        seq.advance();
        assert!(!seq.is_latest(second));
    }
}
