//! Seller directory for administrators: search, status filter, moderation.

use std::cmp::Ordering;

use contracts::domain::a001_seller::aggregate::{
    action_label, status_actions, Seller, SellerFilter, SellerStatusUpdate,
};
use contracts::system::access::SellerStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_seller::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::{PaginationControls, StatusBadge};
use crate::shared::date_utils::format_optional_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    create_sort_toggle, get_sort_indicator, sort_list, ListPager, SearchInput, Sortable,
};
use crate::shared::modal::confirm;
use crate::shared::number_format::{format_money, format_percent};
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_LIST};
use crate::shared::toast::use_toast;

impl Sortable for Seller {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "email" => self.email.to_lowercase().cmp(&other.email.to_lowercase()),
            "status" => self.seller_status.as_str().cmp(other.seller_status.as_str()),
            "sales" => self
                .total_sales
                .unwrap_or(0.0)
                .partial_cmp(&other.total_sales.unwrap_or(0.0))
                .unwrap_or(Ordering::Equal),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => self
                .store_label()
                .to_lowercase()
                .cmp(&other.store_label().to_lowercase()),
        }
    }
}

#[component]
pub fn SellerList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toast = use_toast();

    let (items, set_items) = signal::<Vec<Seller>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let busy_id = RwSignal::new(None::<String>);

    let query = RwSignal::new(String::new());
    let status_filter = RwSignal::new(String::new());
    let sort_field = RwSignal::new("store".to_string());
    let sort_ascending = RwSignal::new(true);
    let pager = ListPager::new(10);

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_sellers().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let filtered = Memo::new(move |_| {
        let filter = SellerFilter {
            query: query.get(),
            status: SellerStatus::parse(&status_filter.get()),
        };
        let mut rows = items.with(|all| filter.apply(all));
        sort_list(&mut rows, &sort_field.get(), sort_ascending.get());
        rows
    });
    let page = Memo::new(move |_| filtered.with(|rows| pager.slice(rows)));

    // New filter, first page.
    Effect::new(move |_| {
        query.track();
        status_filter.track();
        pager.reset();
    });

    let change_status = move |seller: Seller, target: SellerStatus| {
        let label = action_label(seller.seller_status, target);
        if matches!(target, SellerStatus::Rejected | SellerStatus::Suspended)
            && !confirm(&format!("{} seller \"{}\"?", label, seller.store_label()))
        {
            return;
        }
        busy_id.set(Some(seller.id.clone()));
        spawn_local(async move {
            let update = SellerStatusUpdate {
                seller_status: target,
                reason: None,
            };
            match api::update_status(&seller.id, &update).await {
                Ok(()) => {
                    set_items.update(|rows| {
                        if let Some(row) = rows.iter_mut().find(|r| r.id == seller.id) {
                            row.seller_status = target;
                        }
                    });
                    toast.success(format!("Seller is now {}", target.label().to_lowercase()));
                }
                Err(e) => toast.error(e),
            }
            busy_id.set(None);
        });
    };

    let handle_delete = move |seller: Seller| {
        if !confirm(&format!(
            "Delete seller \"{}\"? This cannot be undone.",
            seller.store_label()
        )) {
            return;
        }
        busy_id.set(Some(seller.id.clone()));
        spawn_local(async move {
            match api::delete_seller(&seller.id).await {
                Ok(()) => {
                    set_items.update(|rows| rows.retain(|r| r.id != seller.id));
                    toast.success("Seller deleted");
                }
                Err(e) => toast.error(e),
            }
            busy_id.set(None);
        });
    };

    let contact = move |seller: Seller| {
        spawn_local(async move {
            match api::create_chat(&seller.id).await {
                Ok(chat) => {
                    log::info!("chat {} opened with seller {}", chat.id, seller.id);
                    toast.success(format!("Chat with {} started", seller.name));
                }
                Err(e) => toast.error(e),
            }
        });
    };

    let open_payouts = move |seller_id: String| {
        ctx.navigate(&format!("/dashboard/payouts?seller={}", seller_id));
    };

    fetch();

    view! {
        <PageFrame page_id="sellers--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Sellers"
                subtitle="Approve, suspend and contact marketplace sellers"
            >
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| fetch()
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <div style="min-width: 280px;">
                    <SearchInput
                        placeholder="Name, store or email"
                        on_change=move |v: String| query.set(v)
                    />
                </div>
                <div style="min-width: 180px;">
                    <Select value=status_filter>
                        <option value="">"All statuses"</option>
                        {SellerStatus::ALL
                            .iter()
                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                            .collect_view()}
                    </Select>
                </div>
            </Flex>

            {move || error.get().map(|e| view! {
                <div class="alert alert--error">
                    <span>"⚠"</span>
                    <span>{e}</span>
                </div>
            })}

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=200.0>
                            <span class="table__sortable" on:click=create_sort_toggle("store", sort_field, sort_ascending)>
                                "Store"
                                {move || get_sort_indicator(&sort_field.get(), "store", sort_ascending.get())}
                            </span>
                        </TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=200.0>
                            <span class="table__sortable" on:click=create_sort_toggle("email", sort_field, sort_ascending)>
                                "Contact"
                                {move || get_sort_indicator(&sort_field.get(), "email", sort_ascending.get())}
                            </span>
                        </TableHeaderCell>
                        <TableHeaderCell min_width=110.0>
                            <span class="table__sortable" on:click=create_sort_toggle("status", sort_field, sort_ascending)>
                                "Status"
                                {move || get_sort_indicator(&sort_field.get(), "status", sort_ascending.get())}
                            </span>
                        </TableHeaderCell>
                        <TableHeaderCell min_width=90.0>"Commission"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>
                            <span class="table__sortable" on:click=create_sort_toggle("sales", sort_field, sort_ascending)>
                                "Sales"
                                {move || get_sort_indicator(&sort_field.get(), "sales", sort_ascending.get())}
                            </span>
                        </TableHeaderCell>
                        <TableHeaderCell min_width=110.0>
                            <span class="table__sortable" on:click=create_sort_toggle("created_at", sort_field, sort_ascending)>
                                "Joined"
                                {move || get_sort_indicator(&sort_field.get(), "created_at", sort_ascending.get())}
                            </span>
                        </TableHeaderCell>
                        <TableHeaderCell min_width=260.0>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = page.get().items;
                        if rows.is_empty() && !loading.get() {
                            return view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>"No sellers match the filter"</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|seller| {
                                let row_id = seller.id.clone();
                                let is_busy = Signal::derive(move || {
                                    busy_id.with(|b| b.as_deref() == Some(row_id.as_str()))
                                });
                                let status = seller.seller_status;
                                let for_delete = seller.clone();
                                let for_contact = seller.clone();
                                let payouts_id = seller.id.clone();
                                let actions = status_actions(status)
                                    .iter()
                                    .map(|target| {
                                        let target = *target;
                                        let for_action = seller.clone();
                                        view! {
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Secondary
                                                disabled=is_busy
                                                on_click=move |_| change_status(for_action.clone(), target)
                                            >
                                                {action_label(status, target)}
                                            </Button>
                                        }
                                    })
                                    .collect_view();
                                let store_label = seller.store_label().to_string();
                                let name = seller.name.clone();
                                let email = seller.email.clone();
                                let phone = seller.phone.clone().unwrap_or_default();
                                let commission = seller.commission_rate.map(format_percent).unwrap_or_else(|| "-".to_string());
                                let total_sales = format_money(seller.total_sales.unwrap_or(0.0));
                                let created_at = format_optional_date(seller.created_at.as_deref());
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <strong>{store_label}</strong>
                                                <div class="text-muted">{name}</div>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {email}
                                                <div class="text-muted">{phone}</div>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <StatusBadge status=status.as_str() label=status.label() />
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {commission}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {total_sales}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {created_at}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Space>
                                                    {actions}
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| open_payouts(payouts_id.clone())
                                                    >
                                                        {icon("wallet")}
                                                    </Button>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| contact(for_contact.clone())
                                                    >
                                                        {icon("message")}
                                                    </Button>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
                                                        disabled=is_busy
                                                        on_click=move |_| handle_delete(for_delete.clone())
                                                    >
                                                        {icon("delete")}
                                                    </Button>
                                                </Space>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </TableBody>
            </Table>

            <PaginationControls
                current_page=pager.page
                total_pages=Signal::derive(move || page.with(|p| p.total_pages))
                total_count=Signal::derive(move || page.with(|p| p.total_count))
                page_size=pager.page_size
                on_page_change=pager.on_page_change()
                on_page_size_change=pager.on_page_size_change()
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seller(id: &str, store: &str, sales: f64) -> Seller {
        Seller {
            id: id.to_string(),
            name: format!("Owner {}", id),
            email: format!("{}@shop.test", id),
            store_name: Some(store.to_string()),
            total_sales: Some(sales),
            ..Default::default()
        }
    }

    #[test]
    fn sorts_by_store_and_sales() {
        let mut rows = vec![
            seller("1", "beta", 10.0),
            seller("2", "Alpha", 5.0),
            seller("3", "gamma", 20.0),
        ];
        sort_list(&mut rows, "store", true);
        assert_eq!(rows[0].id, "2");
        sort_list(&mut rows, "sales", false);
        assert_eq!(rows[0].id, "3");
        assert_eq!(rows[2].id, "2");
    }
}
