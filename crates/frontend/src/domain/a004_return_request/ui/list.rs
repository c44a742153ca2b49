use contracts::domain::a004_return_request::aggregate::{
    status_counts, ReturnFilter, ReturnRequest, ReturnStatus,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::review::ReturnReviewModal;
use crate::domain::a004_return_request::api;
use crate::shared::components::{PaginationControls, StatusBadge};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{ListPager, SearchInput};
use crate::shared::modal::confirm;
use crate::shared::number_format::format_money;
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_LIST};
use crate::shared::toast::use_toast;

#[component]
pub fn ReturnCenter() -> impl IntoView {
    let toast = use_toast();
    let (items, set_items) = signal::<Vec<ReturnRequest>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let query = RwSignal::new(String::new());
    let status = RwSignal::new(None::<ReturnStatus>);
    let reviewing = RwSignal::new(None::<ReturnRequest>);
    let pager = ListPager::new(10);

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_returns().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };
    fetch();

    let counts = Memo::new(move |_| items.with(|all| status_counts(all)));
    let filtered = Memo::new(move |_| {
        let filter = ReturnFilter {
            query: query.get(),
            status: status.get(),
        };
        items.with(|all| filter.apply(all))
    });
    let page = Memo::new(move |_| filtered.with(|rows| pager.slice(rows)));

    Effect::new(move |_| {
        query.track();
        status.track();
        pager.reset();
    });

    let handle_delete = move |request: ReturnRequest| {
        if !confirm(&format!("Delete return request for \"{}\"?", request.product_name)) {
            return;
        }
        spawn_local(async move {
            match api::delete_return(&request.id).await {
                Ok(()) => {
                    set_items.update(|rows| rows.retain(|r| r.id != request.id));
                    toast.success("Return request deleted");
                }
                Err(e) => toast.error(e),
            }
        });
    };

    let status_chip = move |value: Option<ReturnStatus>, label: String| {
        view! {
            <button
                class="chip"
                class:chip--active=move || status.get() == value
                on:click=move |_| status.set(value)
            >
                {label}
            </button>
        }
    };

    view! {
        <PageFrame page_id="returns--list" category=PAGE_CAT_LIST>
            <PageHeader title="Return center" subtitle="Review and resolve customer return requests">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| fetch()
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                {move || {
                    let total = items.with(Vec::len);
                    let mut chips = vec![status_chip(None, format!("All ({})", total)).into_any()];
                    chips.extend(counts.get().into_iter().map(|(s, n)| {
                        status_chip(Some(s), format!("{} ({})", s.label(), n)).into_any()
                    }));
                    chips
                }}
                <div style="min-width: 280px; margin-left: auto;">
                    <SearchInput placeholder="Order, product, customer or reason" on_change=move |v: String| query.set(v) />
                </div>
            </Flex>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=110.0>"Requested"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Order"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=200.0>"Product"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=160.0>"Customer"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=180.0>"Reason"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Refund"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Status"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || page
                        .get()
                        .items
                        .into_iter()
                        .map(|r| {
                            let for_review = r.clone();
                            let for_delete = r.clone();
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{format_date(&r.created_at)}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {r.order_number.clone().unwrap_or_else(|| r.order_id.clone())}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            {format!("{} × {}", r.product_name, r.quantity)}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout truncate=true>{r.customer_name.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{r.reason.clone()}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {r.refund_amount.map(format_money).unwrap_or_else(|| "-".to_string())}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <StatusBadge status=r.status.as_str() label=r.status.label() />
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Space>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| reviewing.set(Some(for_review.clone()))
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
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
                        .collect_view()}
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

            {move || reviewing.get().map(|request| view! {
                <ReturnReviewModal
                    request=request
                    on_updated=Callback::new(move |updated: ReturnRequest| {
                        set_items.update(|rows| {
                            if let Some(row) = rows.iter_mut().find(|r| r.id == updated.id) {
                                *row = updated;
                            }
                        });
                        reviewing.set(None);
                    })
                    on_close=Callback::new(move |_| reviewing.set(None))
                />
            })}
        </PageFrame>
    }
}
