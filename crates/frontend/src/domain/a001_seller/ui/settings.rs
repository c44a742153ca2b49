//! Seller settings: store profile and payout setup in one place.

use leptos::prelude::*;
use thaw::*;

use super::profile::ProfileOverview;
use crate::domain::a002_payout::ui::PayoutsPanel;
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_DETAIL};

#[component]
pub fn SellerSettingsPage() -> impl IntoView {
    let selected_tab = RwSignal::new("profile".to_string());

    view! {
        <PageFrame page_id="seller_settings--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title="Seller settings" />
            <TabList selected_value=selected_tab>
                <Tab value="profile">"Profile"</Tab>
                <Tab value="payouts">"Payouts"</Tab>
            </TabList>
            <div class="tab-content">
                {move || match selected_tab.get().as_str() {
                    "payouts" => view! { <PayoutsPanel seller_id=None /> }.into_any(),
                    _ => view! { <ProfileOverview /> }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}
