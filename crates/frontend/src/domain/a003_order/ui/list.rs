use contracts::domain::a003_order::aggregate::OrderStatus;
use contracts::domain::a003_order::list::{OrderFilter, OrderSummary};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_order::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::{PaginationControls, StatusBadge};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{ListPager, SearchInput};
use crate::shared::number_format::format_money;
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_LIST};

#[component]
pub fn OrderList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (items, set_items) = signal::<Vec<OrderSummary>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let query = RwSignal::new(String::new());
    let status_filter = RwSignal::new(String::new());
    let pager = ListPager::new(25);

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_orders().await {
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

    let filtered = Memo::new(move |_| {
        let filter = OrderFilter {
            query: query.get(),
            status: OrderStatus::parse(&status_filter.get()),
        };
        items.with(|all| filter.apply(all))
    });
    let page = Memo::new(move |_| filtered.with(|rows| pager.slice(rows)));

    Effect::new(move |_| {
        query.track();
        status_filter.track();
        pager.reset();
    });

    view! {
        <PageFrame page_id="orders--list" category=PAGE_CAT_LIST>
            <PageHeader title="Orders">
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
                    <SearchInput placeholder="Order number or customer" on_change=move |v: String| query.set(v) />
                </div>
                <div style="min-width: 180px;">
                    <Select value=status_filter>
                        <option value="">"All statuses"</option>
                        {OrderStatus::ALL
                            .iter()
                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                            .collect_view()}
                    </Select>
                </div>
            </Flex>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=120.0>"Order"</TableHeaderCell>
                        <TableHeaderCell min_width=150.0>"Placed"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=200.0>"Customer"</TableHeaderCell>
                        <TableHeaderCell min_width=80.0>"Items"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Total"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Status"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || page
                        .get()
                        .items
                        .into_iter()
                        .map(|order| {
                            let path = format!("/dashboard/orders/{}", order.id);
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <a
                                                href="#"
                                                class="table__link"
                                                on:click=move |e| {
                                                    e.prevent_default();
                                                    ctx.navigate(&path);
                                                }
                                            >
                                                {order.order_number.clone()}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{format_datetime(&order.created_at)}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{order.customer_name.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{order.item_count}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{format_money(order.total)}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <StatusBadge status=order.status.as_str() label=order.status.label() />
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
        </PageFrame>
    }
}
