use contracts::domain::a004_return_request::aggregate::{ReturnRequest, ReturnStatusUpdate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_return_request::api;
use crate::shared::components::StatusBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::modal::Modal;
use crate::shared::number_format::format_money;
use crate::shared::toast::use_toast;

/// Return request details with the status actions allowed from its state.
#[component]
pub fn ReturnReviewModal(
    request: ReturnRequest,
    on_updated: Callback<ReturnRequest>,
    on_close: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let current = request.status;
    let request_id = StoredValue::new(request.id.clone());
    let note = RwSignal::new(request.admin_note.clone().unwrap_or_default());
    let (error, set_error) = signal::<Option<String>>(None);
    let saving = RwSignal::new(false);

    let apply = move |target| {
        let update = ReturnStatusUpdate::new(target, &note.get_untracked());
        if let Err(e) = update.validate(current) {
            set_error.set(Some(e));
            return;
        }
        set_error.set(None);
        saving.set(true);
        spawn_local(async move {
            match api::update_status(&request_id.get_value(), &update).await {
                Ok(updated) => {
                    toast.success(format!("Return {}", update.status.label().to_lowercase()));
                    on_updated.run(updated);
                }
                Err(e) => set_error.set(Some(e)),
            }
            saving.set(false);
        });
    };

    let actions = current.next_statuses();
    let footer: ChildrenFn = std::sync::Arc::new(move || {
        if actions.is_empty() {
            return view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Close"
                </Button>
            }
            .into_any();
        }
        actions
            .iter()
            .map(|target| {
                let target = *target;
                view! {
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || saving.get())
                        on_click=move |_| apply(target)
                    >
                        {format!("Mark {}", target.label().to_lowercase())}
                    </Button>
                }
            })
            .collect_view()
            .into_any()
    });

    let title = format!(
        "Return · {}",
        request.order_number.clone().unwrap_or_else(|| request.order_id.clone())
    );

    view! {
        <Modal title=title on_close=on_close footer=footer>
            <dl class="details-list">
                <dt>"Status"</dt>
                <dd><StatusBadge status=current.as_str() label=current.label() /></dd>
                <dt>"Product"</dt>
                <dd>{format!("{} × {}", request.product_name, request.quantity)}</dd>
                <dt>"Customer"</dt>
                <dd>
                    {request.customer_name.clone()}
                    {request.customer_email.clone().map(|e| view! { <span class="text-muted">{format!(" <{}>", e)}</span> })}
                </dd>
                <dt>"Seller"</dt>
                <dd>{request.seller_name.clone().unwrap_or_else(|| "-".to_string())}</dd>
                <dt>"Reason"</dt>
                <dd>{request.reason.clone()}</dd>
                <dt>"Details"</dt>
                <dd>{request.description.clone().unwrap_or_else(|| "-".to_string())}</dd>
                <dt>"Refund"</dt>
                <dd>{request.refund_amount.map(format_money).unwrap_or_else(|| "-".to_string())}</dd>
                <dt>"Requested"</dt>
                <dd>{format_datetime(&request.created_at)}</dd>
            </dl>
            {(!request.images.is_empty()).then(|| view! {
                <div class="return-images">
                    {request.images.iter().map(|src| view! {
                        <a href=src.clone() target="_blank" rel="noopener">
                            <img class="return-images__thumb" src=src.clone() alt="Return photo" />
                        </a>
                    }).collect_view()}
                </div>
            })}
            {if current.is_final() {
                view! {
                    <p class="text-muted">
                        {format!("Closed. {}", request.admin_note.clone().unwrap_or_default())}
                    </p>
                }
                .into_any()
            } else {
                view! {
                    <div class="form__group">
                        <label class="form__label">"Note to customer"</label>
                        <textarea
                            class="form__textarea"
                            rows=3
                            placeholder="Required when rejecting"
                            prop:value=move || note.get()
                            on:input=move |ev| note.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                }
                .into_any()
            }}
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
        </Modal>
    }
}
