use contracts::domain::a002_payout::aggregate::{PaymentMethod, PaymentMethodType};
use contracts::domain::a002_payout::form::PaymentMethodForm;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::state::PayoutsState;
use crate::domain::a002_payout::api;
use crate::shared::components::{field_error, FormField};
use crate::shared::icons::icon;
use crate::shared::modal::{confirm, Modal};
use crate::shared::toast::use_toast;

#[component]
pub fn PaymentMethodsTab(state: PayoutsState) -> impl IntoView {
    let toast = use_toast();
    let editing = RwSignal::new(None::<PaymentMethodForm>);
    let busy = RwSignal::new(false);

    let make_default = move |id: String| {
        busy.set(true);
        spawn_local(async move {
            match api::set_default_payment_method(&id).await {
                Ok(()) => {
                    state.methods.update(|methods| {
                        for m in methods.iter_mut() {
                            m.is_default = m.id == id;
                        }
                    });
                    toast.success("Default payment method updated");
                }
                Err(e) => toast.error(e),
            }
            busy.set(false);
        });
    };

    let remove = move |method: PaymentMethod| {
        if !confirm(&format!("Delete payment method \"{}\"?", method.display_label())) {
            return;
        }
        busy.set(true);
        spawn_local(async move {
            match api::delete_payment_method(&method.id).await {
                Ok(()) => {
                    toast.success("Payment method deleted");
                    state.load_methods();
                }
                Err(e) => toast.error(e),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="payment-methods">
            {(!state.read_only()).then(|| view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| editing.set(Some(PaymentMethodForm::default()))
                >
                    {icon("plus")}
                    " Add payment method"
                </Button>
            })}
            <div class="payment-methods__list">
                {move || {
                    let methods = state.methods.get();
                    if methods.is_empty() {
                        return view! { <p class="text-muted">"No payment methods yet."</p> }.into_any();
                    }
                    methods
                        .into_iter()
                        .map(|m| {
                            let for_edit = m.clone();
                            let for_delete = m.clone();
                            let default_id = m.id.clone();
                            view! {
                                <div class="payment-method" class:payment-method--default=m.is_default>
                                    <div class="payment-method__label">
                                        {m.display_label()}
                                        {m.is_default.then(|| view! { <span class="badge badge--primary">"Default"</span> })}
                                        {m.is_verified.then(|| view! { <span class="badge badge--success">"Verified"</span> })}
                                    </div>
                                    {(!state.read_only()).then(|| view! {
                                        <Space>
                                            {(!m.is_default).then(|| view! {
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    disabled=Signal::derive(move || busy.get())
                                                    on_click=move |_| make_default(default_id.clone())
                                                >
                                                    {icon("star")}
                                                    " Make default"
                                                </Button>
                                            })}
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| editing.set(Some(PaymentMethodForm::from_method(&for_edit)))
                                            >
                                                {icon("edit")}
                                            </Button>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Subtle
                                                disabled=Signal::derive(move || busy.get())
                                                on_click=move |_| remove(for_delete.clone())
                                            >
                                                {icon("delete")}
                                            </Button>
                                        </Space>
                                    })}
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>

            {move || editing.get().map(|form| view! {
                <PaymentMethodModal
                    form=form
                    on_saved=Callback::new(move |_| {
                        editing.set(None);
                        state.load_methods();
                    })
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}
        </div>
    }
}

#[component]
fn PaymentMethodModal(
    form: PaymentMethodForm,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let id = StoredValue::new(form.id.clone());
    let method_type = RwSignal::new(form.method_type.as_str().to_string());
    let holder = RwSignal::new(form.account_holder_name);
    let bank_name = RwSignal::new(form.bank_name);
    let account_number = RwSignal::new(form.account_number);
    let iban = RwSignal::new(form.iban);
    let swift = RwSignal::new(form.swift_code);
    let paypal_email = RwSignal::new(form.paypal_email);
    let is_default = RwSignal::new(form.is_default);
    let errors = RwSignal::new(FieldErrors::new());
    let saving = RwSignal::new(false);

    let snapshot = move || PaymentMethodForm {
        id: id.get_value(),
        method_type: PaymentMethodType::parse(&method_type.get_untracked()).unwrap_or_default(),
        account_holder_name: holder.get_untracked(),
        bank_name: bank_name.get_untracked(),
        account_number: account_number.get_untracked(),
        iban: iban.get_untracked(),
        swift_code: swift.get_untracked(),
        paypal_email: paypal_email.get_untracked(),
        is_default: is_default.get_untracked(),
    };
    let blur = move |field: &'static str| {
        Callback::new(move |_| {
            let message = snapshot().validate_field(field);
            errors.update(|e| e.set(field, message));
        })
    };
    let is_bank = move || method_type.get() == PaymentMethodType::BankTransfer.as_str();

    // Switching type hides the other type's fields and their errors.
    Effect::new(move |_| {
        method_type.track();
        errors.set(FieldErrors::new());
    });

    let save = move || {
        let request = match snapshot().to_request() {
            Ok(r) => r,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        saving.set(true);
        spawn_local(async move {
            let result = match id.get_value() {
                Some(existing) => api::update_payment_method(&existing, &request).await,
                None => api::create_payment_method(&request).await,
            };
            match result {
                Ok(_) => {
                    toast.success("Payment method saved");
                    on_saved.run(());
                }
                Err(e) => toast.error(e),
            }
            saving.set(false);
        });
    };

    let title = if form.id.is_some() {
        "Edit payment method"
    } else {
        "Add payment method"
    };

    let footer: ChildrenFn = std::sync::Arc::new(move || {
        view! {
            <Space>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>"Cancel"</Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || saving.get())
                    on_click=move |_| save()
                >
                    "Save"
                </Button>
            </Space>
        }
        .into_any()
    });

    view! {
        <Modal title=title.to_string() on_close=on_close footer=footer>
            <div class="form__group">
                <label class="form__label">"Type"</label>
                <Select value=method_type>
                    {PaymentMethodType::ALL
                        .iter()
                        .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                        .collect_view()}
                </Select>
            </div>
            <Show
                when=is_bank
                fallback=move || view! {
                    <FormField
                        label="PayPal email"
                        value=paypal_email
                        error=field_error(errors, "paypal_email")
                        on_blur=blur("paypal_email")
                        input_type="email"
                        required=true
                    />
                }
            >
                <FormField
                    label="Account holder"
                    value=holder
                    error=field_error(errors, "account_holder_name")
                    on_blur=blur("account_holder_name")
                    required=true
                />
                <FormField
                    label="Bank name"
                    value=bank_name
                    error=field_error(errors, "bank_name")
                    on_blur=blur("bank_name")
                    required=true
                />
                <FormField
                    label="Account number"
                    value=account_number
                    error=field_error(errors, "account_number")
                    on_blur=blur("account_number")
                    required=true
                />
                <div class="form__row">
                    <FormField label="IBAN" value=iban error=field_error(errors, "iban") on_blur=blur("iban") />
                    <FormField label="SWIFT / BIC" value=swift error=field_error(errors, "swift_code") on_blur=blur("swift_code") />
                </div>
            </Show>
            <Checkbox checked=is_default label="Use as default payout method" />
        </Modal>
    }
}
