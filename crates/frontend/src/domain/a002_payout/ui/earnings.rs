use contracts::domain::a002_payout::aggregate::EarningsSummary;
use leptos::prelude::*;

use super::state::PayoutsState;
use crate::shared::components::{StatCard, StatTone};
use crate::shared::number_format::format_money;

#[component]
pub fn EarningsTab(state: PayoutsState) -> impl IntoView {
    let amount = move |pick: fn(&EarningsSummary) -> f64| {
        Signal::derive(move || state.earnings.with(|e| e.as_ref().map(|e| format_money(pick(e)))))
    };

    view! {
        <div class="stat-grid">
            <StatCard
                label="Total earnings"
                icon_name="wallet"
                value=amount(|e| e.total_earnings)
                tone=StatTone::Success
            />
            <StatCard
                label="Withdrawable"
                icon_name="wallet"
                value=amount(|e| e.withdrawable_balance)
                subtitle=Signal::derive(|| Some("Available for payout now".to_string()))
            />
            <StatCard
                label="Pending"
                icon_name="rotate"
                value=amount(|e| e.pending_balance)
                tone=StatTone::Warning
                subtitle=Signal::derive(|| Some("Orders not yet settled".to_string()))
            />
            <StatCard label="Withdrawn" icon_name="wallet" value=amount(|e| e.total_withdrawn) />
            <StatCard label="Commission paid" icon_name="tag" value=amount(|e| e.total_commission) />
        </div>
    }
}
