use contracts::domain::a001_seller::aggregate::Seller;
use contracts::domain::a002_payout::aggregate::EarningsSummary;
use contracts::system::access::{menu, Role, SellerStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_seller::api as sellers_api;
use crate::domain::a002_payout::api as payouts_api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{visible_screens, Screen};
use crate::shared::components::{StatCard, StatTone};
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_DASHBOARD};
use crate::system::auth::context::use_current_user;

/// Sellers per verification status, in `SellerStatus::ALL` order.
fn seller_counts(sellers: &[Seller]) -> Vec<(SellerStatus, usize)> {
    SellerStatus::ALL
        .iter()
        .map(|s| (*s, sellers.iter().filter(|x| x.seller_status == *s).count()))
        .collect()
}

/// Landing screen: greeting, shortcuts to the sections the user may open,
/// and a role-specific summary.
#[component]
pub fn DashboardHome() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let user = use_current_user();

    let role = Memo::new(move |_| user.with(|u| u.as_ref().and_then(|u| Role::parse(&u.role))));
    let shortcuts = Memo::new(move |_| {
        user.with(|u| {
            visible_screens(u.as_ref())
                .into_iter()
                .filter(|s| s.menu_id != menu::DASHBOARD)
                .copied()
                .collect::<Vec<Screen>>()
        })
    });
    let can_open = move |menu_id: &str| shortcuts.with(|list| list.iter().any(|s| s.menu_id == menu_id));

    let greeting = user.with_untracked(|u| match u {
        Some(u) => format!("Welcome back, {}", u.display_name()),
        None => "Welcome".to_string(),
    });
    let subtitle = role
        .get_untracked()
        .map(|r| format!("Signed in as {}", r.label()))
        .unwrap_or_else(|| "Marketplace dashboard".to_string());

    view! {
        <PageFrame page_id="home--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title=greeting subtitle=subtitle />

            {move || {
                let seller_view = role.get() == Some(Role::Seller) && can_open(menu::PAYOUTS);
                let admin_view = role.get() != Some(Role::Seller) && can_open(menu::SELLERS);
                if seller_view {
                    view! { <SellerSummary /> }.into_any()
                } else if admin_view {
                    view! { <SellerApprovals /> }.into_any()
                } else {
                    ().into_any()
                }
            }}

            <h3 class="section-title">"Quick links"</h3>
            <div class="shortcut-grid">
                {move || shortcuts
                    .get()
                    .into_iter()
                    .map(|screen| view! {
                        <button class="shortcut" on:click=move |_| ctx.navigate(screen.path)>
                            {icon(screen.icon)}
                            <span>{screen.label}</span>
                        </button>
                    })
                    .collect_view()}
            </div>
        </PageFrame>
    }
}

#[component]
fn SellerSummary() -> impl IntoView {
    let (earnings, set_earnings) = signal(None::<EarningsSummary>);

    spawn_local(async move {
        match payouts_api::fetch_earnings(None).await {
            Ok(summary) => set_earnings.set(Some(summary)),
            Err(e) => log::warn!("Dashboard earnings unavailable: {}", e),
        }
    });

    let amount = move |pick: fn(&EarningsSummary) -> f64| {
        Signal::derive(move || earnings.with(|e| e.as_ref().map(|e| format_money(pick(e)))))
    };

    view! {
        <div class="stat-grid">
            <StatCard
                label="Total earnings"
                icon_name="wallet"
                value=amount(|e| e.total_earnings)
                tone=StatTone::Success
            />
            <StatCard label="Withdrawable" icon_name="wallet" value=amount(|e| e.withdrawable_balance) />
            <StatCard
                label="Pending"
                icon_name="rotate"
                value=amount(|e| e.pending_balance)
                tone=StatTone::Warning
            />
        </div>
    }
}

#[component]
fn SellerApprovals() -> impl IntoView {
    let (counts, set_counts) = signal(None::<Vec<(SellerStatus, usize)>>);

    spawn_local(async move {
        match sellers_api::fetch_sellers().await {
            Ok(sellers) => set_counts.set(Some(seller_counts(&sellers))),
            Err(e) => log::warn!("Dashboard seller counts unavailable: {}", e),
        }
    });

    let count_of = move |status: SellerStatus| {
        Signal::derive(move || {
            counts.with(|c| {
                c.as_ref().map(|list| {
                    list.iter()
                        .find(|(s, _)| *s == status)
                        .map(|(_, n)| n.to_string())
                        .unwrap_or_else(|| "0".to_string())
                })
            })
        })
    };

    view! {
        <div class="stat-grid">
            <StatCard
                label="Awaiting approval"
                icon_name="store"
                value=count_of(SellerStatus::Pending)
                tone=StatTone::Warning
            />
            <StatCard
                label="Approved sellers"
                icon_name="store"
                value=count_of(SellerStatus::Approved)
                tone=StatTone::Success
            />
            <StatCard label="Suspended" icon_name="lock" value=count_of(SellerStatus::Suspended) />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_every_status() {
        let sellers = vec![
            Seller {
                seller_status: SellerStatus::Approved,
                ..Default::default()
            },
            Seller::default(),
            Seller::default(),
        ];
        let counts = seller_counts(&sellers);
        assert_eq!(counts.len(), SellerStatus::ALL.len());
        assert_eq!(counts[0], (SellerStatus::Pending, 2));
        assert_eq!(counts[1], (SellerStatus::Approved, 1));
        assert_eq!(counts[3], (SellerStatus::Suspended, 0));
    }
}
