//! Payouts: earnings summary, payout history and requests, payment methods, invoices.

mod earnings;
mod history;
mod invoices;
mod methods;
mod request_form;
mod state;

use contracts::domain::a001_seller::aggregate::Seller;
use contracts::system::access::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_seller::api::fetch_sellers;
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_DETAIL};
use crate::system::auth::context::use_current_user;
use earnings::EarningsTab;
use history::PayoutHistoryTab;
use invoices::InvoicesTab;
use methods::PaymentMethodsTab;
use state::PayoutsState;

/// Payouts screen. Sellers see their own; staff pick a seller first.
#[component]
pub fn PayoutsPage(seller_id: Option<String>) -> impl IntoView {
    let user = use_current_user();
    let is_seller = user.with_untracked(|u| {
        u.as_ref().and_then(|u| Role::parse(&u.role)) == Some(Role::Seller)
    });

    view! {
        <PageFrame page_id="payouts--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title="Payouts" />
            {if is_seller {
                view! { <PayoutsPanel seller_id=None /> }.into_any()
            } else {
                view! { <SellerPicker initial=seller_id /> }.into_any()
            }}
        </PageFrame>
    }
}

#[component]
fn SellerPicker(initial: Option<String>) -> impl IntoView {
    let selected = RwSignal::new(initial.unwrap_or_default());
    let sellers = RwSignal::new(Vec::<Seller>::new());

    spawn_local(async move {
        match fetch_sellers().await {
            Ok(list) => sellers.set(list),
            Err(e) => log::warn!("seller list for payouts: {}", e),
        }
    });

    view! {
        <div class="form__group" style="max-width: 360px;">
            <label class="form__label">"Seller"</label>
            <Select value=selected>
                <option value="">"Select a seller..."</option>
                {move || sellers
                    .get()
                    .into_iter()
                    .map(|s| view! { <option value=s.id.clone()>{s.store_label().to_string()}</option> })
                    .collect_view()}
            </Select>
        </div>
        {move || {
            let id = selected.get();
            if id.is_empty() {
                view! { <p class="text-muted">"Choose a seller to see their payouts."</p> }.into_any()
            } else {
                view! { <PayoutsPanel seller_id=Some(id) /> }.into_any()
            }
        }}
    }
}

/// The four payout tabs for one seller; `None` is the signed-in seller.
#[component]
pub fn PayoutsPanel(seller_id: Option<String>) -> impl IntoView {
    let state = PayoutsState::new(seller_id);
    state.load_all();
    let selected_tab = RwSignal::new("earnings".to_string());

    view! {
        {move || state.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
        <TabList selected_value=selected_tab>
            <Tab value="earnings">"Earnings"</Tab>
            <Tab value="payouts">"Payouts"</Tab>
            <Tab value="methods">"Payment methods"</Tab>
            <Tab value="invoices">"Invoices"</Tab>
        </TabList>
        <div class="tab-content">
            {move || match selected_tab.get().as_str() {
                "payouts" => view! { <PayoutHistoryTab state=state /> }.into_any(),
                "methods" => view! { <PaymentMethodsTab state=state /> }.into_any(),
                "invoices" => view! { <InvoicesTab state=state /> }.into_any(),
                _ => view! { <EarningsTab state=state /> }.into_any(),
            }}
        </div>
    }
}
