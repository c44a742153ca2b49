//! Order detail: items, totals, per-seller earnings, status, tracking and comments.

use contracts::domain::a003_order::aggregate::{
    CommentRequest, OrderDetail, OrderStatus, OrderStatusUpdate, TrackingUpdate,
};
use contracts::domain::a003_order::earnings::{order_breakdown, seller_breakdowns};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_order::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::shared::components::StatusBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::modal::confirm;
use crate::shared::number_format::{format_money, format_percent};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::shared::toast::use_toast;

#[component]
pub fn OrderDetailView(id: String, on_close: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let tab_key = StoredValue::new(format!("/dashboard/orders/{}", id));
    let order_id = StoredValue::new(id);
    let order = RwSignal::new(None::<OrderDetail>);
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move || {
        spawn_local(async move {
            match api::fetch_order(&order_id.get_value()).await {
                Ok(o) => {
                    ctx.update_tab_title(&tab_key.get_value(), &detail_tab_label("Order", &o.order_number));
                    order.set(Some(o));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    load();

    view! {
        <PageFrame page_id="order--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || order.with(|o| o.as_ref().map(|o| format!("Order {}", o.order_number)))
                            .unwrap_or_else(|| "Order".to_string())}
                    </h1>
                    {move || order.with(|o| o.as_ref().map(|o| {
                        let status = o.status;
                        view! {
                            <StatusBadge status=status.as_str() label=status.label() />
                            <span class="text-muted">{format!(" placed {}", format_datetime(&o.created_at))}</span>
                        }
                    }))}
                </div>
                <div class="page__header-right">
                    <Space>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                            {icon("refresh")}
                        </Button>
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                            {icon("x")}
                            " Close"
                        </Button>
                    </Space>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <Show when=move || order.with(Option::is_some) fallback=|| view! { <Spinner /> }>
                <div class="order-detail">
                    <div class="order-detail__main">
                        <OrderItems order=order />
                        <EarningsSection order=order />
                        <CommentsSection order=order order_id=order_id />
                    </div>
                    <div class="order-detail__side">
                        <CustomerSection order=order />
                        <StatusSection order=order order_id=order_id />
                        <TrackingSection order=order order_id=order_id />
                    </div>
                </div>
            </Show>
        </PageFrame>
    }
}

#[component]
fn OrderItems(order: RwSignal<Option<OrderDetail>>) -> impl IntoView {
    let totals_row = |label: &'static str, value: String| {
        view! {
            <div class="totals__row">
                <span>{label}</span>
                <span>{value}</span>
            </div>
        }
    };

    view! {
        <section class="card">
            <h3>"Items"</h3>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=240.0>"Product"</TableHeaderCell>
                        <TableHeaderCell min_width=160.0>"Seller"</TableHeaderCell>
                        <TableHeaderCell min_width=60.0>"Qty"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Price"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Total"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || order.with(|o| o.as_ref().map(|o| o.items.clone()).unwrap_or_default())
                        .into_iter()
                        .map(|item| {
                            let line_total = item.line_total();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            {item.image_url.clone().map(|src| view! {
                                                <img class="order-item__thumb" src=src alt="" />
                                            })}
                                            {item.name.clone()}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            {item.seller_name.clone().unwrap_or_else(|| "-".to_string())}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{item.quantity}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{format_money(item.unit_price)}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{format_money(line_total)}</TableCellLayout></TableCell>
                                </TableRow>
                            }
                        })
                        .collect_view()}
                </TableBody>
            </Table>
            {move || order.with(|o| o.as_ref().map(|o| view! {
                <div class="totals">
                    {totals_row("Subtotal", format_money(o.items_subtotal()))}
                    {totals_row("Shipping", format_money(o.shipping_cost))}
                    {totals_row("Tax", format_money(o.tax))}
                    {(o.discount > 0.0).then(|| totals_row("Discount", format_money(-o.discount)))}
                    <div class="totals__row totals__row--grand">
                        <span>"Total"</span>
                        <span>{format_money(o.grand_total())}</span>
                    </div>
                </div>
            }))}
        </section>
    }
}

#[component]
fn EarningsSection(order: RwSignal<Option<OrderDetail>>) -> impl IntoView {
    let groups = Memo::new(move |_| order.with(|o| o.as_ref().map(seller_breakdowns).unwrap_or_default()));
    let total = Memo::new(move |_| order.with(|o| o.as_ref().map(order_breakdown)));

    view! {
        <section class="card">
            <h3>
                "Earnings breakdown"
                {move || total.get().map(|t| view! {
                    <span class="text-muted">{format!(" · commission {}", format_percent(t.commission_rate))}</span>
                })}
            </h3>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=180.0>"Seller"</TableHeaderCell>
                        <TableHeaderCell min_width=60.0>"Items"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Subtotal"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Commission"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Earnings"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || groups
                        .get()
                        .into_iter()
                        .map(|g| view! {
                            <TableRow>
                                <TableCell><TableCellLayout truncate=true>{g.seller_name}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{g.item_count}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{format_money(g.breakdown.subtotal)}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{format_money(g.breakdown.commission)}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{format_money(g.breakdown.earnings)}</TableCellLayout></TableCell>
                            </TableRow>
                        })
                        .collect_view()}
                    {move || total.get().map(|t| view! {
                        <TableRow>
                            <TableCell><TableCellLayout><strong>"All sellers"</strong></TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>""</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout><strong>{format_money(t.subtotal)}</strong></TableCellLayout></TableCell>
                            <TableCell><TableCellLayout><strong>{format_money(t.commission)}</strong></TableCellLayout></TableCell>
                            <TableCell><TableCellLayout><strong>{format_money(t.earnings)}</strong></TableCellLayout></TableCell>
                        </TableRow>
                    })}
                </TableBody>
            </Table>
        </section>
    }
}

#[component]
fn CustomerSection(order: RwSignal<Option<OrderDetail>>) -> impl IntoView {
    move || {
        order.with(|o| {
            o.as_ref().map(|o| {
                view! {
                    <section class="card">
                        <h3>"Customer"</h3>
                        <p><strong>{o.customer.name.clone()}</strong></p>
                        <p class="text-muted">{o.customer.email.clone().unwrap_or_default()}</p>
                        <p class="text-muted">{o.customer.phone.clone().unwrap_or_default()}</p>
                        <h4>"Shipping address"</h4>
                        <p>{o.shipping_address.one_line()}</p>
                        <h4>"Payment"</h4>
                        <p>
                            {o.payment_method.clone().unwrap_or_else(|| "-".to_string())}
                            {o.payment_status.clone().map(|s| view! { " " <StatusBadge status=s /> })}
                        </p>
                    </section>
                }
            })
        })
    }
}

#[component]
fn StatusSection(
    order: RwSignal<Option<OrderDetail>>,
    order_id: StoredValue<String>,
) -> impl IntoView {
    let toast = use_toast();
    let selected = RwSignal::new(String::new());
    let note = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    Effect::new(move |_| {
        if let Some(status) = order.with(|o| o.as_ref().map(|o| o.status)) {
            selected.set(status.as_str().to_string());
        }
    });

    let save = move |_| {
        let Some(status) = OrderStatus::parse(&selected.get_untracked()) else {
            return;
        };
        let current = order.with_untracked(|o| o.as_ref().map(|o| o.status));
        if current == Some(status) {
            toast.info("Status is unchanged");
            return;
        }
        let text = note.get_untracked();
        let update = OrderStatusUpdate {
            status,
            note: (!text.trim().is_empty()).then(|| text.trim().to_string()),
        };
        saving.set(true);
        spawn_local(async move {
            match api::update_status(&order_id.get_value(), &update).await {
                Ok(()) => {
                    order.update(|o| {
                        if let Some(o) = o {
                            o.status = status;
                        }
                    });
                    note.set(String::new());
                    toast.success(format!("Order marked as {}", status.label().to_lowercase()));
                }
                Err(e) => toast.error(e),
            }
            saving.set(false);
        });
    };

    view! {
        <section class="card">
            <h3>"Status"</h3>
            <Select value=selected>
                {OrderStatus::ALL
                    .iter()
                    .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                    .collect_view()}
            </Select>
            <textarea
                class="form__textarea"
                rows=2
                placeholder="Note for the customer (optional)"
                prop:value=move || note.get()
                on:input=move |ev| note.set(event_target_value(&ev))
            ></textarea>
            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(move || saving.get())
                on_click=save
            >
                "Update status"
            </Button>
        </section>
    }
}

#[component]
fn TrackingSection(
    order: RwSignal<Option<OrderDetail>>,
    order_id: StoredValue<String>,
) -> impl IntoView {
    let toast = use_toast();
    let carrier = RwSignal::new(String::new());
    let number = RwSignal::new(String::new());
    let url = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let saving = RwSignal::new(false);

    Effect::new(move |_| {
        if let Some(t) = order.with(|o| o.as_ref().and_then(|o| o.tracking.clone())) {
            carrier.set(t.carrier);
            number.set(t.tracking_number);
            url.set(t.tracking_url.unwrap_or_default());
        }
    });

    let save = move |_| {
        let link = url.get_untracked();
        let update = TrackingUpdate {
            carrier: carrier.get_untracked().trim().to_string(),
            tracking_number: number.get_untracked().trim().to_string(),
            tracking_url: (!link.trim().is_empty()).then(|| link.trim().to_string()),
        };
        if let Err(e) = update.validate() {
            set_error.set(Some(e));
            return;
        }
        set_error.set(None);
        saving.set(true);
        spawn_local(async move {
            match api::update_tracking(&order_id.get_value(), &update).await {
                Ok(info) => {
                    order.update(|o| {
                        if let Some(o) = o {
                            o.tracking = Some(info);
                        }
                    });
                    toast.success("Tracking saved");
                }
                Err(e) => toast.error(e),
            }
            saving.set(false);
        });
    };

    view! {
        <section class="card">
            <h3>"Tracking"</h3>
            {move || order.with(|o| {
                o.as_ref()
                    .and_then(|o| o.tracking.as_ref())
                    .and_then(|t| t.tracking_url.clone())
                    .map(|href| view! { <a href=href target="_blank" rel="noopener">"Track shipment"</a> })
            })}
            <input class="form__input" placeholder="Carrier" prop:value=move || carrier.get() on:input=move |ev| carrier.set(event_target_value(&ev)) />
            <input class="form__input" placeholder="Tracking number" prop:value=move || number.get() on:input=move |ev| number.set(event_target_value(&ev)) />
            <input class="form__input" placeholder="Tracking URL (optional)" prop:value=move || url.get() on:input=move |ev| url.set(event_target_value(&ev)) />
            {move || error.get().map(|e| view! { <span class="form__error">{e}</span> })}
            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(move || saving.get())
                on_click=save
            >
                "Save tracking"
            </Button>
        </section>
    }
}

#[component]
fn CommentsSection(
    order: RwSignal<Option<OrderDetail>>,
    order_id: StoredValue<String>,
) -> impl IntoView {
    let toast = use_toast();
    let message = RwSignal::new(String::new());
    let internal = RwSignal::new(false);
    let posting = RwSignal::new(false);

    let post = move |_| {
        let request = CommentRequest {
            message: message.get_untracked().trim().to_string(),
            is_internal: internal.get_untracked(),
        };
        if let Err(e) = request.validate() {
            toast.error(e);
            return;
        }
        posting.set(true);
        spawn_local(async move {
            match api::add_comment(&order_id.get_value(), &request).await {
                Ok(comment) => {
                    order.update(|o| {
                        if let Some(o) = o {
                            o.comments.push(comment);
                        }
                    });
                    message.set(String::new());
                }
                Err(e) => toast.error(e),
            }
            posting.set(false);
        });
    };

    let remove = move |comment_id: String| {
        if !confirm("Delete this comment?") {
            return;
        }
        spawn_local(async move {
            match api::delete_comment(&order_id.get_value(), &comment_id).await {
                Ok(()) => order.update(|o| {
                    if let Some(o) = o {
                        o.comments.retain(|c| c.id != comment_id);
                    }
                }),
                Err(e) => toast.error(e),
            }
        });
    };

    view! {
        <section class="card">
            <h3>"Comments"</h3>
            <ul class="comments">
                {move || order.with(|o| o.as_ref().map(|o| o.comments.clone()).unwrap_or_default())
                    .into_iter()
                    .map(|c| {
                        let id = c.id.clone();
                        view! {
                            <li class="comments__item" class:comments__item--internal=c.is_internal>
                                <div class="comments__meta">
                                    <strong>{c.author_name.clone().unwrap_or_else(|| "Staff".to_string())}</strong>
                                    <span class="text-muted">{format!(" · {}", format_datetime(&c.created_at))}</span>
                                    {c.is_internal.then(|| view! { <span class="badge badge--neutral">"Internal"</span> })}
                                    <Button
                                        size=ButtonSize::Small
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| remove(id.clone())
                                    >
                                        {icon("delete")}
                                    </Button>
                                </div>
                                <p>{c.message.clone()}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <textarea
                class="form__textarea"
                rows=3
                placeholder="Write a comment"
                prop:value=move || message.get()
                on:input=move |ev| message.set(event_target_value(&ev))
            ></textarea>
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <Checkbox checked=internal label="Internal note" />
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || posting.get())
                    on_click=post
                >
                    "Add comment"
                </Button>
            </Flex>
        </section>
    }
}
