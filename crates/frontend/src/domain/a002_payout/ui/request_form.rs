use contracts::domain::a002_payout::form::{PayoutRequestForm, MIN_PAYOUT_AMOUNT};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::state::PayoutsState;
use crate::domain::a002_payout::api;
use crate::shared::components::{field_error, FormField};
use crate::shared::number_format::format_money;
use crate::shared::toast::use_toast;

#[component]
pub fn PayoutRequestPanel(state: PayoutsState) -> impl IntoView {
    let toast = use_toast();
    let amount = RwSignal::new(String::new());
    let method_id = RwSignal::new(String::new());
    let note = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let submitting = RwSignal::new(false);

    // Preselect the default method, and replace a selection that was deleted.
    Effect::new(move |_| {
        let selected = state.methods.with(|methods| {
            PayoutRequestForm {
                payment_method_id: method_id.get_untracked(),
                ..Default::default()
            }
            .with_default_method(methods)
            .payment_method_id
        });
        if selected != method_id.get_untracked() {
            method_id.set(selected);
        }
    });

    let snapshot = move || PayoutRequestForm {
        amount: amount.get_untracked(),
        payment_method_id: method_id.get_untracked(),
        note: note.get_untracked(),
        withdrawable_balance: state.withdrawable(),
    };

    let check = move |field: &'static str| {
        let message = snapshot().validate_field(field);
        errors.update(|e| e.set(field, message));
    };

    let submit = move |_| {
        let request = match snapshot().to_request() {
            Ok(r) => r,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::new());
        submitting.set(true);
        spawn_local(async move {
            match api::request_payout(&request).await {
                Ok(_) => {
                    toast.success(format!("Payout of {} requested", format_money(request.amount)));
                    amount.set(String::new());
                    note.set(String::new());
                    state.after_payout();
                }
                Err(e) => toast.error(e),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="payout-request">
            <h3>"Request a payout"</h3>
            <p class="text-muted">
                {move || format!(
                    "Withdrawable: {}. Minimum payout is {}.",
                    format_money(state.withdrawable()),
                    format_money(MIN_PAYOUT_AMOUNT)
                )}
            </p>
            <Show
                when=move || !state.methods.with(Vec::is_empty)
                fallback=|| view! {
                    <div class="alert alert--warning">"Add a payment method before requesting a payout."</div>
                }
            >
                <FormField
                    label="Amount (EUR)"
                    value=amount
                    error=field_error(errors, "amount")
                    on_blur=Callback::new(move |_| check("amount"))
                    input_type="number"
                    required=true
                />
                <div class="form__group" class:form__group--invalid=move || errors.with(|e| e.contains("payment_method_id"))>
                    <label class="form__label">"Payment method"</label>
                    <Select value=method_id>
                        <option value="">"Select..."</option>
                        {move || state
                            .methods
                            .get()
                            .into_iter()
                            .map(|m| view! { <option value=m.id.clone()>{m.display_label()}</option> })
                            .collect_view()}
                    </Select>
                    {move || field_error(errors, "payment_method_id").get().map(|e| view! { <span class="form__error">{e}</span> })}
                </div>
                <FormField
                    label="Note"
                    value=note
                    error=field_error(errors, "note")
                    on_blur=Callback::new(move |_| check("note"))
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || submitting.get())
                    on_click=submit
                >
                    {move || if submitting.get() { "Submitting..." } else { "Request payout" }}
                </Button>
            </Show>
        </div>
    }
}
